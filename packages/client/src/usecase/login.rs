//! UseCase: ログイン処理
//!
//! ## 処理の流れ
//!
//! 1. トップページを未認証で取得し、トラッキング Cookie（`datr`）を得る
//! 2. `datr` を付けて認証情報を送信（リダイレクト追従なし）
//! 3. ステータスで分岐: 200 = 認証失敗、302 = 成功、それ以外 = 致命的エラー
//! 4. 成功時のみ、認証済みでトップページを再取得し anti-forgery token を抽出
//!
//! リトライは行わない。Session は開始時にクリアされ、4 まで成功した場合のみ設定される。

use std::sync::Arc;

use crate::domain::{
    ACCOUNT_COOKIE, AccountId, ChatGateway, Credentials, CsrfToken, HttpResponse,
    SESSION_COOKIE, STATUS_FOUND, STATUS_OK, Session, SessionCookie, TRACKING_COOKIE,
    extract_csrf_token,
};

use super::error::LoginError;

/// ログイン結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// ログイン成功（アカウント ID 付き）
    LoggedIn(AccountId),
    /// 認証情報が拒否された（ログインページが再表示された）
    Rejected,
}

impl LoginOutcome {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, LoginOutcome::LoggedIn(_))
    }
}

/// ログインのユースケース
pub struct LoginUseCase {
    /// Gateway（対象サイトへのアクセスの抽象化）
    gateway: Arc<dyn ChatGateway>,
}

impl LoginUseCase {
    /// 新しい LoginUseCase を作成
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self { gateway }
    }

    /// ログインを実行
    ///
    /// # Arguments
    ///
    /// * `session` - 結果を格納するセッション（開始時にクリアされる）
    /// * `email` - アカウント（メールアドレスまたは電話番号）
    /// * `password` - パスワード
    ///
    /// # Returns
    ///
    /// * `Ok(LoginOutcome)` - 成功または認証情報の拒否
    /// * `Err(LoginError)` - 想定外のステータスやページ構造の変化（致命的）
    pub async fn execute(
        &self,
        session: &mut Session,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, LoginError> {
        session.clear();

        // 1. トラッキング Cookie の取得
        tracing::info!("Requesting homepage");
        let home = self.gateway.fetch_home().await?;
        expect_status(&home, STATUS_OK, "homepage")?;
        let tracking_cookie = home.cookie(TRACKING_COOKIE).ok_or(LoginError::MissingCookie {
            name: TRACKING_COOKIE,
            stage: "homepage",
        })?;

        // 2. 認証情報の送信
        tracing::info!("Logging in");
        let response = self
            .gateway
            .submit_login(tracking_cookie, email, password)
            .await?;

        // 3. ステータスで分岐
        match response.status {
            STATUS_OK => {
                tracing::info!("Login rejected: login page served again");
                Ok(LoginOutcome::Rejected)
            }
            STATUS_FOUND => {
                let (account_id, session_cookie) = read_session_cookies(&response)?;

                // 4. anti-forgery token の取得
                let csrf_token = self.fetch_csrf_token(account_id, &session_cookie).await?;

                session.establish(Credentials {
                    account_id,
                    session_cookie,
                    csrf_token,
                });
                tracing::info!("Logged in as {}", account_id);
                Ok(LoginOutcome::LoggedIn(account_id))
            }
            status => Err(LoginError::UnexpectedStatus {
                stage: "login",
                status,
            }),
        }
    }

    async fn fetch_csrf_token(
        &self,
        account_id: AccountId,
        session_cookie: &SessionCookie,
    ) -> Result<CsrfToken, LoginError> {
        tracing::info!("Requesting anti-forgery token");
        let page = self
            .gateway
            .fetch_token_page(account_id, session_cookie)
            .await?;
        expect_status(&page, STATUS_OK, "token page")?;
        Ok(extract_csrf_token(&page.body)?)
    }
}

fn expect_status(
    response: &HttpResponse,
    expected: u16,
    stage: &'static str,
) -> Result<(), LoginError> {
    if response.status != expected {
        return Err(LoginError::UnexpectedStatus {
            stage,
            status: response.status,
        });
    }
    Ok(())
}

/// 302 レスポンス自身の Cookie からアカウント ID とセッション Cookie を読み出す
fn read_session_cookies(
    response: &HttpResponse,
) -> Result<(AccountId, SessionCookie), LoginError> {
    let raw_account = response
        .cookie(ACCOUNT_COOKIE)
        .ok_or(LoginError::MissingCookie {
            name: ACCOUNT_COOKIE,
            stage: "login",
        })?;
    let account_id = AccountId::parse(raw_account).map_err(|_| LoginError::InvalidCookie {
        name: ACCOUNT_COOKIE,
    })?;

    let raw_session = response
        .cookie(SESSION_COOKIE)
        .ok_or(LoginError::MissingCookie {
            name: SESSION_COOKIE,
            stage: "login",
        })?;
    let session_cookie = SessionCookie::new(raw_session.to_string()).map_err(|_| {
        LoginError::InvalidCookie {
            name: SESSION_COOKIE,
        }
    })?;

    Ok((account_id, session_cookie))
}
