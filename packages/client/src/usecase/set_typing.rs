//! UseCase: タイピング状態の送信

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{AccountId, ChatGateway, Session};

use super::{error::RequestError, response::decode_ok_response};

/// タイピング状態送信のユースケース
pub struct SetTypingUseCase {
    gateway: Arc<dyn ChatGateway>,
}

impl SetTypingUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self { gateway }
    }

    /// タイピング開始・停止を送信
    ///
    /// 1 対 1 のチャットなので thread は target と同じ。
    /// 呼び出しごとに 1 リクエストを送り、連続した呼び出しをまとめることはしない。
    pub async fn execute(
        &self,
        session: &Session,
        target: AccountId,
        typing: bool,
    ) -> Result<Value, RequestError> {
        let credentials = session.credentials().ok_or(RequestError::NotLoggedIn)?;

        tracing::debug!("Setting typing={} for {}", typing, target);
        let response = self
            .gateway
            .send_typing(credentials, target, typing)
            .await?;
        decode_ok_response(&response, "typing")
    }
}
