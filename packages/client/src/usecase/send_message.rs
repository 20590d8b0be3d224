//! UseCase: メッセージ送信処理
//!
//! ## 処理の流れ
//!
//! 1. クライアント側でタイムスタンプ（ミリ秒）と 32bit の nonce を生成
//! 2. それらから合成メッセージ ID を作り、1 件だけのバッチとして送信
//! 3. レスポンスの JSON をそのまま返す
//!
//! 配信確認やリトライは行わない。

use std::sync::Arc;

use buddyline_shared::{nonce::NonceSource, time::Clock};
use serde_json::Value;

use crate::domain::{AccountId, ChatGateway, MessageBody, MessageId, OutgoingMessage, Session};

use super::{error::RequestError, response::decode_ok_response};

/// 送信結果
#[derive(Debug, Clone, PartialEq)]
pub struct SendReceipt {
    /// クライアントが生成したメッセージ ID
    pub message_id: MessageId,
    /// 送信時刻（Unix ミリ秒）
    pub timestamp: i64,
    /// サイトからのレスポンス（sentinel 除去済み）
    pub response: Value,
}

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Gateway（対象サイトへのアクセスの抽象化）
    gateway: Arc<dyn ChatGateway>,
    /// 時刻の取得元
    clock: Arc<dyn Clock>,
    /// nonce の生成元
    nonce_source: Arc<dyn NonceSource>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        clock: Arc<dyn Clock>,
        nonce_source: Arc<dyn NonceSource>,
    ) -> Self {
        Self {
            gateway,
            clock,
            nonce_source,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `session` - ログイン済みセッション
    /// * `recipient` - 送信先のアカウント ID
    /// * `body` - メッセージ本文
    ///
    /// # Returns
    ///
    /// * `Ok(SendReceipt)` - 送信したメッセージ ID とレスポンス
    /// * `Err(RequestError)` - 未ログイン、通信エラー、想定外のレスポンス
    pub async fn execute(
        &self,
        session: &Session,
        recipient: AccountId,
        body: MessageBody,
    ) -> Result<SendReceipt, RequestError> {
        let credentials = session.credentials().ok_or(RequestError::NotLoggedIn)?;

        // 1. タイムスタンプと nonce を生成
        let timestamp = self.clock.now_millis();
        let nonce = self.nonce_source.next_nonce();
        let message = OutgoingMessage::new(
            credentials.account_id,
            recipient,
            body,
            timestamp,
            nonce,
        );

        // 2. 送信
        tracing::info!("Sending message {} to {}", message.message_id, recipient);
        let response = self.gateway.send_message(credentials, &message).await?;

        // 3. レスポンスを解析
        let response = decode_ok_response(&response, "send message")?;

        Ok(SendReceipt {
            message_id: message.message_id,
            timestamp,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Credentials, CsrfToken, HttpResponse, MockChatGateway, SessionCookie};
    use buddyline_shared::{
        nonce::{FixedNonce, RandomNonce},
        time::FixedClock,
    };
    use serde_json::json;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// 呼び出すたびに 1ms 進む時計
    struct SteppingClock(AtomicI64);

    impl Clock for SteppingClock {
        fn now_millis(&self) -> i64 {
            self.0.fetch_add(1, Ordering::SeqCst)
        }
    }

    fn logged_in_session() -> Session {
        let mut session = Session::new();
        session.establish(Credentials {
            account_id: AccountId::new(1001).unwrap(),
            session_cookie: SessionCookie::new("xs".to_string()).unwrap(),
            csrf_token: CsrfToken::new("dtsg".to_string()).unwrap(),
        });
        session
    }

    fn accepting_gateway(times: usize) -> MockChatGateway {
        let mut gateway = MockChatGateway::new();
        gateway
            .expect_send_message()
            .times(times)
            .returning(|_, _| Ok(HttpResponse::new(200).with_body("for (;;);{\"payload\":{}}")));
        gateway
    }

    #[tokio::test]
    async fn test_send_message_success() {
        // テスト項目: メッセージが 1 リクエストで送信され、ID に時刻と nonce が埋め込まれる
        // given (前提条件):
        let mut gateway = MockChatGateway::new();
        gateway
            .expect_send_message()
            .withf(|credentials, message| {
                credentials.account_id.value() == 1001
                    && message.author.value() == 1001
                    && message.recipient.value() == 2002
                    && message.body.as_str() == "Hello!"
                    && message.timestamp == 1700000000000
                    && message.nonce == 424242
            })
            .times(1)
            .returning(|_, _| Ok(HttpResponse::new(200).with_body("for (;;);{\"payload\":{\"ok\":true}}")));
        let usecase = SendMessageUseCase::new(
            Arc::new(gateway),
            Arc::new(FixedClock::new(1700000000000)),
            Arc::new(FixedNonce(424242)),
        );

        // when (操作):
        let receipt = usecase
            .execute(
                &logged_in_session(),
                AccountId::new(2002).unwrap(),
                MessageBody::new("Hello!".to_string()).unwrap(),
            )
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(
            receipt.message_id.as_str(),
            "<1700000000000:424242@mail.projektitan.com>"
        );
        assert_eq!(receipt.timestamp, 1700000000000);
        assert_eq!(receipt.response, json!({"payload": {"ok": true}}));
    }

    #[tokio::test]
    async fn test_two_sends_have_distinct_ids() {
        // テスト項目: 同じプロセス内の 2 回の送信で、タイムスタンプと nonce が異なる
        // given (前提条件):
        let usecase = SendMessageUseCase::new(
            Arc::new(accepting_gateway(2)),
            Arc::new(SteppingClock(AtomicI64::new(1700000000000))),
            Arc::new(RandomNonce),
        );
        let session = logged_in_session();
        let recipient = AccountId::new(2002).unwrap();

        // when (操作):
        let first = usecase
            .execute(&session, recipient, MessageBody::new("one".to_string()).unwrap())
            .await
            .unwrap();
        let second = usecase
            .execute(&session, recipient, MessageBody::new("two".to_string()).unwrap())
            .await
            .unwrap();

        // then (期待する結果):
        assert_ne!(first.message_id, second.message_id);
        assert_ne!(first.timestamp, second.timestamp);
        assert!(
            first
                .message_id
                .as_str()
                .starts_with(&format!("<{}:", first.timestamp))
        );
        assert!(
            second
                .message_id
                .as_str()
                .starts_with(&format!("<{}:", second.timestamp))
        );
    }

    #[tokio::test]
    async fn test_send_message_without_session_sends_nothing() {
        // テスト項目: 未ログインの場合はリクエストを送信しない
        // given (前提条件):
        let usecase = SendMessageUseCase::new(
            Arc::new(accepting_gateway(0)),
            Arc::new(FixedClock::new(1)),
            Arc::new(FixedNonce(1)),
        );

        // when (操作):
        let result = usecase
            .execute(
                &Session::new(),
                AccountId::new(2002).unwrap(),
                MessageBody::new("Hello!".to_string()).unwrap(),
            )
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(RequestError::NotLoggedIn));
    }

    #[tokio::test]
    async fn test_send_message_server_error() {
        // テスト項目: 200 以外のステータスはエラー（リトライしない）
        // given (前提条件):
        let mut gateway = MockChatGateway::new();
        gateway
            .expect_send_message()
            .times(1)
            .returning(|_, _| Ok(HttpResponse::new(500)));
        let usecase = SendMessageUseCase::new(
            Arc::new(gateway),
            Arc::new(FixedClock::new(1)),
            Arc::new(FixedNonce(1)),
        );

        // when (操作):
        let result = usecase
            .execute(
                &logged_in_session(),
                AccountId::new(2002).unwrap(),
                MessageBody::new("Hello!".to_string()).unwrap(),
            )
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RequestError::UnexpectedStatus {
                endpoint: "send message",
                status: 500
            })
        );
    }
}
