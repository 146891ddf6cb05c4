//! Split API クライアントのエラー型

use reqwest::StatusCode;
use thiserror::Error;

/// Split API クライアントエラー
///
/// リモートの 404 や 409 も個別には扱わず、[`Status`](SplitApiError::Status)
/// としてそのまま呼び出し元に伝播する。
#[derive(Debug, Clone, Error)]
pub enum SplitApiError {
    /// ネットワークエラー（接続失敗、タイムアウトなど）
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// 2xx 以外のステータス
    #[error("予期しないステータス {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// レスポンスボディの JSON が不正
    #[error("レスポンスのデコードに失敗しました: {0}")]
    Decode(String),

    /// ベース URL が不正
    #[error("不正な URL: {0}")]
    InvalidUrl(String),
}

impl SplitApiError {
    /// 通信レベルのエラー（ネットワーク障害または 2xx 以外）かどうか
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }

    /// レスポンスのデコードエラーかどうか
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// リモートが返した HTTP ステータス
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SplitApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SplitApiError::Decode(err.to_string())
        } else {
            SplitApiError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for SplitApiError {
    fn from(err: url::ParseError) -> Self {
        SplitApiError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_networkとstatusは通信エラーに分類される() {
        let network = SplitApiError::Network("connection refused".to_string());
        let status = SplitApiError::Status {
            status: StatusCode::CONFLICT,
            body:   String::new(),
        };

        assert!(network.is_transport());
        assert!(status.is_transport());
        assert!(!network.is_decode());
    }

    #[test]
    fn test_decodeは通信エラーに分類されない() {
        let err = SplitApiError::Decode("expected value".to_string());

        assert!(err.is_decode());
        assert!(!err.is_transport());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_statusのメッセージにステータスとボディが含まれる() {
        let err = SplitApiError::Status {
            status: StatusCode::NOT_FOUND,
            body:   "user not found".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("404"), "ステータスコードが含まれること: {msg}");
        assert!(msg.contains("user not found"), "ボディが含まれること: {msg}");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }
}
