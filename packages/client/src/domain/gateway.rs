//! Gateway trait 定義
//!
//! 対象サイトの非公開エンドポイントへのアクセスをドメイン層から抽象化します。
//! 具体的なパスやフォームフィールド名は Infrastructure 層の実装が持ちます（依存性の逆転）。

use std::collections::HashMap;

use async_trait::async_trait;

use super::{AccountId, Credentials, GatewayError, OutgoingMessage, SessionCookie};

/// HTTP 200
pub const STATUS_OK: u16 = 200;
/// HTTP 302
pub const STATUS_FOUND: u16 = 302;

/// Tracking cookie handed out by the home page before login
pub const TRACKING_COOKIE: &str = "datr";
/// Cookie carrying the numeric account id
pub const ACCOUNT_COOKIE: &str = "c_user";
/// Cookie carrying the session secret
pub const SESSION_COOKIE: &str = "xs";

/// Transport-neutral view of one HTTP response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Cookies set by this response only (name -> value)
    pub cookies: HashMap<String, String>,
    /// Body text
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }
}

/// Chat Gateway trait
///
/// 1 メソッドにつき 1 リクエスト。リトライやリダイレクト以外の追加リクエストは行わない。
/// ステータスコードの判定は呼び出し側（UseCase 層）の責務。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// サイトのトップページを未認証で取得（トラッキング Cookie 取得用、リダイレクト追従あり）
    async fn fetch_home(&self) -> Result<HttpResponse, GatewayError>;

    /// ログインフォームを送信（リダイレクト追従なし）
    async fn submit_login(
        &self,
        tracking_cookie: &str,
        email: &str,
        password: &str,
    ) -> Result<HttpResponse, GatewayError>;

    /// 認証済みでトップページを取得（anti-forgery token の抽出用）
    async fn fetch_token_page(
        &self,
        account_id: AccountId,
        session_cookie: &SessionCookie,
    ) -> Result<HttpResponse, GatewayError>;

    /// バディリスト（オンラインの連絡先）を取得
    async fn fetch_buddy_list(
        &self,
        credentials: &Credentials,
    ) -> Result<HttpResponse, GatewayError>;

    /// タイピング状態を送信
    async fn send_typing(
        &self,
        credentials: &Credentials,
        target: AccountId,
        typing: bool,
    ) -> Result<HttpResponse, GatewayError>;

    /// メッセージを 1 件送信
    async fn send_message(
        &self,
        credentials: &Credentials,
        message: &OutgoingMessage,
    ) -> Result<HttpResponse, GatewayError>;
}
