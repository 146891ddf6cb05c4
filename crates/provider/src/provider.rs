//! # プロバイダ
//!
//! 名前付きデータソースのレジストリ。依存する API クライアントは
//! 構築時に明示的に注入し、プロセス全体で共有されるクライアントは持たない。

use std::{collections::BTreeMap, sync::Arc};

use serde_json::Value;
use split_api::{SplitClient, UsersClient};

use crate::{
    config::ProviderConfig,
    data_source::{DataSource, USER_DATA_SOURCE_NAME, UserDataSource},
    diagnostics::{Diagnostic, Diagnostics},
    error::ProviderError,
    resource_data::ResourceData,
    schema::Schema,
};

/// データソースのレジストリ
#[derive(Default)]
pub struct Provider {
    data_sources: BTreeMap<String, Arc<dyn DataSource>>,
}

impl Provider {
    /// データソースを持たない空のプロバイダ
    pub fn new() -> Self {
        Self::default()
    }

    /// Split のデータソースを登録したプロバイダ
    pub fn split(users: Arc<dyn UsersClient>) -> Self {
        Self::new().with_data_source(USER_DATA_SOURCE_NAME, Arc::new(UserDataSource::new(users)))
    }

    /// 設定から API クライアントを構築し、Split のデータソースを登録する
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = SplitClient::new(config.client_config())?;
        Ok(Self::split(Arc::new(client)))
    }

    pub fn with_data_source(
        mut self,
        name: impl Into<String>,
        data_source: Arc<dyn DataSource>,
    ) -> Self {
        self.data_sources.insert(name.into(), data_source);
        self
    }

    /// 登録済みデータソース名（昇順）
    pub fn data_source_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }

    pub fn data_source_schema(&self, name: &str) -> Option<Schema> {
        self.data_sources.get(name).map(|ds| ds.schema())
    }

    /// データソースを読み取る
    ///
    /// 設定値をスキーマで検証してから読み取りを実行し、観測状態を返す。
    /// 未登録の名前、設定の不備、読み取りの失敗はいずれも診断として返す。
    #[tracing::instrument(skip(self, config), level = "debug")]
    pub async fn read_data_source(
        &self,
        name: &str,
        config: &Value,
    ) -> Result<ResourceData, Diagnostics> {
        let data_source = self
            .data_sources
            .get(name)
            .ok_or_else(|| Diagnostic::error(format!("未定義のデータソースです: {name}")))?;

        let mut data = ResourceData::from_config(data_source.schema(), config)?;
        data_source.read(&mut data).await?;

        tracing::debug!(id = data.id(), "データソースを読み取りました");
        Ok(data)
    }
}
