//! reqwest を使った ChatGateway 実装
//!
//! ## 責務
//!
//! - エンドポイントのパス・フォーム・Cookie ヘッダの組み立て
//! - レスポンスのステータス・Cookie・本文を `HttpResponse` に変換
//!
//! ステータスの判定は行わない（UseCase 層の責務）。
//! リダイレクトを追従するクライアントと追従しないクライアントの 2 つを持つ。

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url, header, redirect};

use crate::{
    domain::{
        AccountId, ChatGateway, Credentials, GatewayError, HttpResponse, OutgoingMessage,
        SessionCookie, TRACKING_COOKIE,
    },
    infrastructure::{
        dto::form::{
            auth_cookies, buddy_list_query, cookie_header, login_form, message_batch_form,
            typing_form,
        },
        endpoint,
    },
};

use super::GatewayConfig;

/// reqwest を使った ChatGateway 実装
pub struct ReqwestChatGateway {
    base_url: Url,
    /// リダイレクトを追従するクライアント
    client: Client,
    /// リダイレクトを追従しないクライアント（ログイン送信用）
    no_redirect_client: Client,
}

impl ReqwestChatGateway {
    /// 新しい ReqwestChatGateway を作成
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| GatewayError::InvalidUrl(config.base_url.clone()))?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GatewayError::Setup(e.to_string()))?;
        let no_redirect_client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| GatewayError::Setup(e.to_string()))?;

        Ok(Self {
            base_url,
            client,
            no_redirect_client,
        })
    }

    fn url(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|_| GatewayError::InvalidUrl(format!("{}{}", self.base_url, path)))
    }

    /// リクエストを送信し、レスポンスを `HttpResponse` に変換
    async fn execute(
        &self,
        path: &'static str,
        request: RequestBuilder,
    ) -> Result<HttpResponse, GatewayError> {
        let response = request.send().await.map_err(|e| GatewayError::Transport {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let cookies: HashMap<String, String> = response
            .cookies()
            .map(|c| (c.name().to_string(), c.value().to_string()))
            .collect();
        let body = response.text().await.map_err(|e| GatewayError::Body {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            "/{} -> {} ({} cookies, {} bytes)",
            path,
            status,
            cookies.len(),
            body.len()
        );

        Ok(HttpResponse {
            status,
            cookies,
            body,
        })
    }
}

#[async_trait]
impl ChatGateway for ReqwestChatGateway {
    async fn fetch_home(&self) -> Result<HttpResponse, GatewayError> {
        let request = self.client.get(self.url(endpoint::HOME)?);
        self.execute(endpoint::HOME, request).await
    }

    async fn submit_login(
        &self,
        tracking_cookie: &str,
        email: &str,
        password: &str,
    ) -> Result<HttpResponse, GatewayError> {
        let cookies = vec![(TRACKING_COOKIE.to_string(), tracking_cookie.to_string())];
        let request = self
            .no_redirect_client
            .post(self.url(endpoint::LOGIN)?)
            .header(header::COOKIE, cookie_header(&cookies))
            .form(&login_form(email, password));
        self.execute(endpoint::LOGIN, request).await
    }

    async fn fetch_token_page(
        &self,
        account_id: AccountId,
        session_cookie: &SessionCookie,
    ) -> Result<HttpResponse, GatewayError> {
        let request = self
            .client
            .get(self.url(endpoint::HOME)?)
            .header(
                header::COOKIE,
                cookie_header(&auth_cookies(account_id, session_cookie)),
            );
        self.execute(endpoint::HOME, request).await
    }

    async fn fetch_buddy_list(
        &self,
        credentials: &Credentials,
    ) -> Result<HttpResponse, GatewayError> {
        let request = self
            .client
            .get(self.url(endpoint::BUDDY_LIST)?)
            .header(header::COOKIE, session_cookie_header(credentials))
            .query(&buddy_list_query(credentials.account_id));
        self.execute(endpoint::BUDDY_LIST, request).await
    }

    async fn send_typing(
        &self,
        credentials: &Credentials,
        target: AccountId,
        typing: bool,
    ) -> Result<HttpResponse, GatewayError> {
        let request = self
            .client
            .post(self.url(endpoint::TYPING)?)
            .header(header::COOKIE, session_cookie_header(credentials))
            .form(&typing_form(credentials, target, typing));
        self.execute(endpoint::TYPING, request).await
    }

    async fn send_message(
        &self,
        credentials: &Credentials,
        message: &OutgoingMessage,
    ) -> Result<HttpResponse, GatewayError> {
        let request = self
            .client
            .post(self.url(endpoint::SEND_MESSAGES)?)
            .header(header::COOKIE, session_cookie_header(credentials))
            .form(&message_batch_form(credentials, message));
        self.execute(endpoint::SEND_MESSAGES, request).await
    }
}

fn session_cookie_header(credentials: &Credentials) -> String {
    cookie_header(&auth_cookies(
        credentials.account_id,
        &credentials.session_cookie,
    ))
}
