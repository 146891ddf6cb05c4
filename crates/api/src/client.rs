//! Split API クライアント本体と接続設定

use std::{fmt, time::Duration};

use reqwest::{Method, RequestBuilder};
use url::Url;

use crate::error::SplitApiError;

/// Split Admin API のデフォルトベース URL
pub const DEFAULT_BASE_URL: &str = "https://api.split.io/internal/api/v2";

/// User-Agent ヘッダー
const USER_AGENT: &str = concat!("split-rs/", env!("CARGO_PKG_VERSION"));

/// クライアントの接続設定
#[derive(Clone)]
pub struct SplitClientConfig {
    /// API のベース URL（例: `https://api.split.io/internal/api/v2`）
    pub base_url: String,
    /// Admin API キー
    pub api_key:  String,
    /// リクエストタイムアウト（`None` の場合は reqwest のデフォルト）
    pub timeout:  Option<Duration>,
}

impl SplitClientConfig {
    /// デフォルトのベース URL で設定を作成する
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key:  api_key.into(),
            timeout:  None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for SplitClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Split API クライアント
///
/// 内部の `reqwest::Client` はコネクションプールを持つため、
/// `Clone` しても接続は共有される。状態は持たない。
#[derive(Clone)]
pub struct SplitClient {
    pub(crate) base_url: Url,
    api_key:             String,
    http:                reqwest::Client,
}

impl SplitClient {
    /// 設定から新しいクライアントを作成する
    pub fn new(config: SplitClientConfig) -> Result<Self, SplitApiError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Self::with_http_client(config, http)
    }

    /// 構築済みの `reqwest::Client` を使ってクライアントを作成する
    pub fn with_http_client(
        config: SplitClientConfig,
        http: reqwest::Client,
    ) -> Result<Self, SplitApiError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(SplitApiError::InvalidUrl(format!(
                "ベース URL として使用できません: {}",
                config.base_url
            )));
        }

        Ok(Self {
            base_url,
            api_key: config.api_key,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// ベース URL にパスセグメントを連結した URL を作る
    ///
    /// 各セグメントはパーセントエンコードされるため、ID に `/` が含まれても
    /// 別のパスを指すことはない。
    pub(crate) fn request_url(&self, segments: &[&str]) -> Result<Url, SplitApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SplitApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// 認証ヘッダー付きのリクエストを組み立てる
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, path = url.path(), "Split API リクエスト");
        self.http.request(method, url).bearer_auth(&self.api_key)
    }
}

impl fmt::Debug for SplitClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client(base_url: &str) -> SplitClient {
        SplitClient::new(SplitClientConfig::new("key").with_base_url(base_url)).unwrap()
    }

    #[test]
    fn test_デフォルトのベースurlを使う() {
        let config = SplitClientConfig::new("key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_request_urlがベースパスにセグメントを連結する() {
        let client = client("https://api.split.io/internal/api/v2");

        let url = client.request_url(&["users", "abc"]).unwrap();

        assert_eq!(url.as_str(), "https://api.split.io/internal/api/v2/users/abc");
    }

    #[test]
    fn test_request_url_末尾スラッシュ付きのベースurlでも二重スラッシュにならない() {
        let client = client("http://localhost:8080/api/v2/");

        let url = client.request_url(&["users"]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/api/v2/users");
    }

    #[test]
    fn test_request_url_セグメントはエンコードされる() {
        let client = client("http://localhost:8080");

        let url = client.request_url(&["users", "a/b c"]).unwrap();

        assert_eq!(url.path(), "/users/a%2Fb%20c");
    }

    #[test]
    fn test_不正なベースurlはinvalid_urlになる() {
        let result = SplitClient::new(SplitClientConfig::new("key").with_base_url("not a url"));

        assert!(matches!(result, Err(SplitApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_ベースにできないurlはinvalid_urlになる() {
        let result =
            SplitClient::new(SplitClientConfig::new("key").with_base_url("mailto:ops@example.com"));

        assert!(matches!(result, Err(SplitApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_debug出力にapiキーが含まれない() {
        let config = SplitClientConfig::new("super-secret-key");

        let debug = format!("{config:?}");

        assert!(!debug.contains("super-secret-key"), "API キーが漏れないこと: {debug}");
        assert!(debug.contains("[REDACTED]"));
    }
}
