//! Logging setup utilities for the buddyline client.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are enabled by the default filter.
const LOGGED_CRATES: &[&str] = &["buddyline", "buddyline_shared"];

/// Build the default `EnvFilter` directive string.
///
/// Every buddyline crate and the binary itself get `default_log_level`;
/// everything else (reqwest, hyper, rustyline) stays at the global default.
pub fn default_directives(binary_name: &str, default_log_level: &str) -> String {
    let binary = binary_name.replace('-', "_");
    let mut directives: Vec<String> = LOGGED_CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, default_log_level))
        .collect();

    if !LOGGED_CRATES.contains(&binary.as_str()) {
        directives.push(format!("{}={}", binary, default_log_level));
    }

    directives.join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "buddyline")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use buddyline_shared::logger::setup_logger;
///
/// setup_logger("buddyline", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_for_client_binary() {
        // テスト項目: バイナリ名がライブラリ名と同じ場合、重複したディレクティブを含まない
        // given (前提条件):
        let binary_name = "buddyline";

        // when (操作):
        let directives = default_directives(binary_name, "info");

        // then (期待する結果):
        assert_eq!(directives, "buddyline=info,buddyline_shared=info");
    }

    #[test]
    fn test_default_directives_for_other_binary() {
        // テスト項目: 別名のバイナリはハイフンをアンダースコアに変換して追加される
        // given (前提条件):
        let binary_name = "buddy-probe";

        // when (操作):
        let directives = default_directives(binary_name, "debug");

        // then (期待する結果):
        assert_eq!(
            directives,
            "buddyline=debug,buddyline_shared=debug,buddy_probe=debug"
        );
    }
}
