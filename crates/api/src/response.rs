//! Split API レスポンスの共通ハンドリング

use serde::de::DeserializeOwned;

use crate::error::SplitApiError;

/// Split API レスポンスの共通ハンドリング
///
/// 成功時はレスポンスボディを `T` にデシリアライズし、
/// エラー時はステータスコードとボディを含む [`SplitApiError::Status`] を返す。
/// ボディの JSON が不正な場合は [`SplitApiError::Decode`] になる。
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SplitApiError> {
    let response = check_status(response).await?;

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| SplitApiError::Decode(e.to_string()))
}

/// ボディを持たないレスポンスのハンドリング
pub(crate) async fn handle_empty_response(response: reqwest::Response) -> Result<(), SplitApiError> {
    check_status(response).await.map(|_| ())
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SplitApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(%status, "Split API がエラーを返しました");

    Err(SplitApiError::Status { status, body })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use serde::Deserialize;

    use super::*;

    /// テスト用のレスポンスデータ型
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestData {
        value: String,
    }

    /// テスト用の HTTP レスポンスを構築する
    fn make_response(status: u16, body: &str) -> reqwest::Response {
        let http_resp = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body.to_string())
            .unwrap();
        reqwest::Response::from(http_resp)
    }

    #[tokio::test]
    async fn test_成功レスポンスをデシリアライズする() {
        let response = make_response(200, r#"{"value": "hello"}"#);

        let result: Result<TestData, _> = handle_response(response).await;

        assert_eq!(
            result.unwrap(),
            TestData {
                value: "hello".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_404はstatusエラーとしてそのまま返す() {
        let response = make_response(404, "not found");

        let result: Result<TestData, _> = handle_response(response).await;

        match result {
            Err(SplitApiError::Status { status, body }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "not found");
            }
            other => panic!("Status を期待したが {other:?} を受け取った"),
        }
    }

    #[tokio::test]
    async fn test_500でstatusエラーを返しボディを保持する() {
        let response = make_response(500, "server error");

        let result: Result<TestData, _> = handle_response(response).await;

        let err = result.unwrap_err();
        assert!(err.is_transport());
        assert!(
            err.to_string().contains("server error"),
            "メッセージにボディが含まれること: {err}"
        );
    }

    #[tokio::test]
    async fn test_成功だが不正なjsonでdecodeエラーを返す() {
        let response = make_response(200, "not json");

        let result: Result<TestData, _> = handle_response(response).await;

        assert!(matches!(result, Err(SplitApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_空レスポンスは成功ステータスならokを返す() {
        let response = make_response(204, "");

        assert!(handle_empty_response(response).await.is_ok());
    }

    #[tokio::test]
    async fn test_空レスポンスでも失敗ステータスはstatusエラーを返す() {
        let response = make_response(400, "user is not pending");

        let result = handle_empty_response(response).await;

        assert_eq!(
            result.unwrap_err().status(),
            Some(StatusCode::BAD_REQUEST)
        );
    }
}
