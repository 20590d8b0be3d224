//! UseCase: オンライン中の連絡先（バディリスト）の取得

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::domain::{ChatGateway, Session};

use super::{error::RequestError, response::decode_ok_response};

/// payload 内のオンラインユーザーの位置
const NOW_AVAILABLE_POINTER: &str = "/payload/buddy_list/nowAvailableList";

/// アカウント ID（文字列）から在席情報へのマップ。サイトから受け取った値をそのまま保持する。
pub type OnlineBuddies = Map<String, Value>;

/// バディリスト取得のユースケース
pub struct ListOnlineUseCase {
    gateway: Arc<dyn ChatGateway>,
}

impl ListOnlineUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self { gateway }
    }

    /// バディリストを取得
    ///
    /// `payload.buddy_list.nowAvailableList` を変換せずに返す。
    /// サイトは「誰もいない」を空配列で返すことがあるため、空配列は空のマップとして扱う。
    pub async fn execute(&self, session: &Session) -> Result<OnlineBuddies, RequestError> {
        let credentials = session.credentials().ok_or(RequestError::NotLoggedIn)?;

        tracing::info!("Requesting buddy_list");
        let response = self.gateway.fetch_buddy_list(credentials).await?;
        let value = decode_ok_response(&response, "buddy list")?;

        match value.pointer(NOW_AVAILABLE_POINTER) {
            Some(Value::Object(map)) => Ok(map.clone()),
            Some(Value::Array(items)) if items.is_empty() => Ok(OnlineBuddies::new()),
            _ => Err(RequestError::MissingField(
                "payload.buddy_list.nowAvailableList",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AccountId, Credentials, CsrfToken, HttpResponse, MockChatGateway, SessionCookie,
    };
    use serde_json::json;

    fn logged_in_session() -> Session {
        let mut session = Session::new();
        session.establish(Credentials {
            account_id: AccountId::new(1001).unwrap(),
            session_cookie: SessionCookie::new("xs".to_string()).unwrap(),
            csrf_token: CsrfToken::new("dtsg".to_string()).unwrap(),
        });
        session
    }

    fn gateway_returning(response: HttpResponse) -> MockChatGateway {
        let mut gateway = MockChatGateway::new();
        gateway
            .expect_fetch_buddy_list()
            .withf(|credentials| credentials.account_id.value() == 1001)
            .times(1)
            .returning(move |_| Ok(response.clone()));
        gateway
    }

    #[tokio::test]
    async fn test_list_online_returns_now_available_list_verbatim() {
        // テスト項目: nowAvailableList がそのまま返される
        // given (前提条件):
        let body = r#"for (;;);{"__ar":1,"payload":{"buddy_list":{"nowAvailableList":{"2002":{"p":{"status":"active"}},"3003":{"p":{"status":"idle"}}}}}}"#;
        let gateway = gateway_returning(HttpResponse::new(200).with_body(body));
        let usecase = ListOnlineUseCase::new(Arc::new(gateway));

        // when (操作):
        let result = usecase.execute(&logged_in_session()).await.unwrap();

        // then (期待する結果):
        assert_eq!(result.len(), 2);
        assert_eq!(result["2002"], json!({"p": {"status": "active"}}));
        assert_eq!(result["3003"], json!({"p": {"status": "idle"}}));
    }

    #[tokio::test]
    async fn test_list_online_empty_array_means_nobody() {
        // テスト項目: nowAvailableList が空配列の場合は空のマップになる
        // given (前提条件):
        let body = r#"for (;;);{"payload":{"buddy_list":{"nowAvailableList":[]}}}"#;
        let gateway = gateway_returning(HttpResponse::new(200).with_body(body));
        let usecase = ListOnlineUseCase::new(Arc::new(gateway));

        // when (操作):
        let result = usecase.execute(&logged_in_session()).await;

        // then (期待する結果):
        assert_eq!(result, Ok(OnlineBuddies::new()));
    }

    #[tokio::test]
    async fn test_list_online_missing_key_path() {
        // テスト項目: キーパスが無い場合は MissingField エラー
        // given (前提条件):
        let body = r#"for (;;);{"payload":{"error":"session expired"}}"#;
        let gateway = gateway_returning(HttpResponse::new(200).with_body(body));
        let usecase = ListOnlineUseCase::new(Arc::new(gateway));

        // when (操作):
        let result = usecase.execute(&logged_in_session()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RequestError::MissingField(
                "payload.buddy_list.nowAvailableList"
            ))
        );
    }

    #[tokio::test]
    async fn test_list_online_without_session_sends_nothing() {
        // テスト項目: 未ログインの場合はリクエストを送信せずに NotLoggedIn を返す
        // given (前提条件):
        let mut gateway = MockChatGateway::new();
        gateway.expect_fetch_buddy_list().times(0);
        let usecase = ListOnlineUseCase::new(Arc::new(gateway));

        // when (操作):
        let result = usecase.execute(&Session::new()).await;

        // then (期待する結果):
        assert_eq!(result, Err(RequestError::NotLoggedIn));
    }
}
