//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{EnvelopeError, GatewayError, TokenError};

/// ログイン処理のエラー
///
/// いずれも回復不能（致命的）なエラー。認証情報の誤りはエラーではなく
/// `LoginOutcome::Rejected` として返される。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// 想定外の HTTP ステータス
    #[error("unexpected HTTP status {status} from {stage}")]
    UnexpectedStatus { stage: &'static str, status: u16 },

    /// 必要な Cookie がレスポンスに含まれていない
    #[error("cookie '{name}' missing from {stage} response")]
    MissingCookie {
        name: &'static str,
        stage: &'static str,
    },

    /// Cookie の値が不正
    #[error("cookie '{name}' has an invalid value")]
    InvalidCookie { name: &'static str },

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// 認証済みリクエスト（バディリスト、タイピング、メッセージ送信）のエラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// セッション未確立（リクエストは送信されない）
    #[error("not logged in")]
    NotLoggedIn,

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// 想定外の HTTP ステータス
    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: &'static str, status: u16 },

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// payload に期待したキーが無い
    #[error("response is missing '{0}'")]
    MissingField(&'static str),
}
