//! プロバイダのエラー型

use split_api::SplitApiError;
use thiserror::Error;

/// プロバイダの構築・設定エラー
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 必須の環境変数が未設定
    #[error("環境変数 {0} が設定されていません")]
    MissingEnv(&'static str),

    /// 環境変数の値が不正
    #[error("環境変数 {name} の値が不正です: {value}")]
    InvalidEnv { name: &'static str, value: String },

    /// API クライアントの構築に失敗
    #[error("Split API クライアントを構築できません: {0}")]
    Client(#[from] SplitApiError),
}
