//! Value Object 定義
//!
//! セッションやメッセージを構成する不変の値を定義します。
//! 生成時にバリデーションを行い、不正な値は型レベルで排除します。

use std::fmt;

use super::error::ValueObjectError;

/// アカウント ID（`c_user` Cookie の値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(u64);

impl AccountId {
    /// 数値から AccountId を作成（0 は不正）
    pub fn new(value: u64) -> Result<Self, ValueObjectError> {
        if value == 0 {
            return Err(ValueObjectError::InvalidAccountId(value.to_string()));
        }
        Ok(Self(value))
    }

    /// 文字列（Cookie 値やコマンド引数）から AccountId を作成
    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        let value = raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ValueObjectError::InvalidAccountId(raw.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// セッション Cookie（`xs`）
///
/// Debug 出力では値を伏せる。
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie(String);

impl SessionCookie {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptySessionCookie);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCookie(***)")
    }
}

/// Anti-forgery token（`fb_dtsg`）
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyCsrfToken);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(***)")
    }
}

/// メッセージ本文（空文字列・空白のみは不可）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EmptyMessageBody);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// クライアント側で生成する合成メッセージ ID
///
/// 形式: `<{timestamp}:{nonce}@mail.projektitan.com>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageId(String);

impl MessageId {
    const DOMAIN: &'static str = "mail.projektitan.com";

    pub fn generate(timestamp_millis: i64, nonce: u32) -> Self {
        Self(format!("<{}:{}@{}>", timestamp_millis, nonce, Self::DOMAIN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_parse_valid() {
        // テスト項目: 数字のみの文字列から AccountId が作成できる
        // given (前提条件):
        let raw = "100004123456789";

        // when (操作):
        let result = AccountId::parse(raw);

        // then (期待する結果):
        assert_eq!(result.unwrap().value(), 100004123456789);
    }

    #[test]
    fn test_account_id_parse_rejects_garbage() {
        // テスト項目: 数字以外・0 は AccountId として拒否される
        // given (前提条件):
        let inputs = ["", "abc", "-5", "0", "12x"];

        for raw in inputs {
            // when (操作):
            let result = AccountId::parse(raw);

            // then (期待する結果):
            assert_eq!(
                result,
                Err(ValueObjectError::InvalidAccountId(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_secrets_are_masked_in_debug_output() {
        // テスト項目: セッション Cookie とトークンは Debug 出力で伏せられる
        // given (前提条件):
        let cookie = SessionCookie::new("secret-xs".to_string()).unwrap();
        let token = CsrfToken::new("secret-dtsg".to_string()).unwrap();

        // when (操作):
        let rendered = format!("{:?} {:?}", cookie, token);

        // then (期待する結果):
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_message_body_rejects_blank() {
        // テスト項目: 空白のみのメッセージ本文は拒否される
        // given (前提条件):
        let body = "   ".to_string();

        // when (操作):
        let result = MessageBody::new(body);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyMessageBody));
    }

    #[test]
    fn test_message_id_embeds_timestamp_and_nonce() {
        // テスト項目: MessageId にタイムスタンプと nonce が埋め込まれる
        // given (前提条件):
        let timestamp = 1672531200123;
        let nonce = 3735928559;

        // when (操作):
        let id = MessageId::generate(timestamp, nonce);

        // then (期待する結果):
        assert_eq!(
            id.as_str(),
            "<1672531200123:3735928559@mail.projektitan.com>"
        );
    }
}
