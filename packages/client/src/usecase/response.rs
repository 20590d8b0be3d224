//! Shared handling of JSON-bearing responses from the authenticated endpoints.

use serde_json::Value;

use crate::domain::{HttpResponse, STATUS_OK, decode_envelope};

use super::error::RequestError;

/// Assert a 200 status, then strip the sentinel and parse the body.
pub(crate) fn decode_ok_response(
    response: &HttpResponse,
    endpoint: &'static str,
) -> Result<Value, RequestError> {
    if response.status != STATUS_OK {
        return Err(RequestError::UnexpectedStatus {
            endpoint,
            status: response.status,
        });
    }
    Ok(decode_envelope(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EnvelopeError;
    use serde_json::json;

    #[test]
    fn test_decode_ok_response_rejects_non_200() {
        // テスト項目: 200 以外のステータスは本文に関係なくエラー
        // given (前提条件):
        let response = HttpResponse::new(500).with_body("for (;;);{}");

        // when (操作):
        let result = decode_ok_response(&response, "buddy list");

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RequestError::UnexpectedStatus {
                endpoint: "buddy list",
                status: 500
            })
        );
    }

    #[test]
    fn test_decode_ok_response_parses_envelope() {
        // テスト項目: 200 のレスポンスは sentinel を除去してパースされる
        // given (前提条件):
        let response = HttpResponse::new(200).with_body("for (;;);{\"payload\":null}");

        // when (操作):
        let result = decode_ok_response(&response, "typing");

        // then (期待する結果):
        assert_eq!(result, Ok(json!({"payload": null})));
    }

    #[test]
    fn test_decode_ok_response_html_body() {
        // テスト項目: 200 でも sentinel の無い HTML はエラー
        // given (前提条件):
        let response = HttpResponse::new(200).with_body("<html></html>");

        // when (操作):
        let result = decode_ok_response(&response, "typing");

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RequestError::Envelope(EnvelopeError::MissingSentinel))
        );
    }
}
