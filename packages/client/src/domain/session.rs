//! Session エンティティ
//!
//! ログインで得た 3 つの値（アカウント ID、セッション Cookie、anti-forgery token）を保持します。
//! 3 つ全てが揃っているか、全く無い（未ログイン）かのどちらかで、部分的な状態は存在しません。

use super::{AccountId, CsrfToken, SessionCookie};

/// ログイン済みセッションの認証情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_id: AccountId,
    pub session_cookie: SessionCookie,
    pub csrf_token: CsrfToken,
}

/// プロセス内で 1 つだけ存在するチャットセッション
///
/// ログイン処理（`LoginUseCase`）だけが状態を変更する。
#[derive(Debug, Default)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    /// 未ログイン状態のセッションを作成
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn account_id(&self) -> Option<AccountId> {
        self.credentials.as_ref().map(|c| c.account_id)
    }

    /// 認証情報をまとめて設定
    pub(crate) fn establish(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// 未ログイン状態に戻す
    pub(crate) fn clear(&mut self) {
        self.credentials = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_credentials() -> Credentials {
        Credentials {
            account_id: AccountId::new(1001).unwrap(),
            session_cookie: SessionCookie::new("xs-value".to_string()).unwrap(),
            csrf_token: CsrfToken::new("dtsg-value".to_string()).unwrap(),
        }
    }

    #[test]
    fn test_new_session_is_not_logged_in() {
        // テスト項目: 作成直後のセッションは未ログイン
        // given (前提条件):
        let session = Session::new();

        // when (操作):
        let logged_in = session.is_logged_in();

        // then (期待する結果):
        assert!(!logged_in);
        assert!(session.credentials().is_none());
        assert!(session.account_id().is_none());
    }

    #[test]
    fn test_establish_then_clear() {
        // テスト項目: establish で全ての値が揃い、clear で全て消える
        // given (前提条件):
        let mut session = Session::new();

        // when (操作):
        session.establish(sample_credentials());

        // then (期待する結果):
        assert!(session.is_logged_in());
        assert_eq!(session.account_id(), Some(AccountId::new(1001).unwrap()));
        assert_eq!(session.credentials(), Some(&sample_credentials()));

        session.clear();
        assert!(!session.is_logged_in());
        assert!(session.credentials().is_none());
    }
}
