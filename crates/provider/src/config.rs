//! # プロバイダ設定
//!
//! 環境変数から Split API への接続設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SPLIT_API_KEY` | **Yes** | Admin API キー |
//! | `SPLIT_API_BASE_URL` | No | API のベース URL（デフォルト: `https://api.split.io/internal/api/v2`） |
//! | `SPLIT_API_TIMEOUT_SECS` | No | リクエストタイムアウト秒数 |

use std::{env, fmt, time::Duration};

use split_api::{DEFAULT_BASE_URL, SplitClientConfig};

use crate::error::ProviderError;

const API_KEY_VAR: &str = "SPLIT_API_KEY";
const BASE_URL_VAR: &str = "SPLIT_API_BASE_URL";
const TIMEOUT_VAR: &str = "SPLIT_API_TIMEOUT_SECS";

/// プロバイダ設定
#[derive(Clone)]
pub struct ProviderConfig {
    /// Admin API キー
    pub api_key:  String,
    /// API のベース URL
    pub base_url: String,
    /// リクエストタイムアウト
    pub timeout:  Option<Duration>,
}

impl ProviderConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ProviderError> {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = lookup(API_KEY_VAR).ok_or(ProviderError::MissingEnv(API_KEY_VAR))?;
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = lookup(TIMEOUT_VAR)
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|_| ProviderError::InvalidEnv {
                        name: TIMEOUT_VAR,
                        value,
                    })
            })
            .transpose()?;

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }

    /// API クライアントの設定に変換する
    pub fn client_config(&self) -> SplitClientConfig {
        let config = SplitClientConfig::new(self.api_key.clone()).with_base_url(self.base_url.clone());
        match self.timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
