//! Interactive web chat client.
//!
//! Logs in with an email and password, then reads commands from the prompt:
//! `login`, `online`, `typing <id>`, `stoptyping <id>`, `send <id> <text>`,
//! `help`, `exit`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin buddyline
//! cargo run --bin buddyline -- --email alice@example.com
//! ```

use clap::Parser;

use buddyline::infrastructure::GatewayConfig;
use buddyline::infrastructure::http::config::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use buddyline_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "buddyline")]
#[command(about = "Interactive client for a social network's web chat", long_about = None)]
struct Args {
    /// Site root the chat endpoints live under
    #[arg(short = 'u', long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log in with this email at startup (password is prompted)
    #[arg(short = 'e', long)]
    email: Option<String>,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let config = GatewayConfig::new(args.base_url).with_user_agent(args.user_agent);

    if let Err(e) = buddyline::ui::run_client(config, args.email).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
