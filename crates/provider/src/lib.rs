//! # Split プロバイダ
//!
//! Split.io のリソースを宣言的設定から参照するためのプロバイダ。
//!
//! ## 構成
//!
//! - [`schema`]: 属性の型と required / computed の宣言
//! - [`resource_data`]: スキーマに束縛された観測状態
//! - [`diagnostics`]: ホストに返す診断メッセージ
//! - [`data_source`]: データソースのトレイトと `split_user` の実装
//! - [`provider`]: データソースのレジストリ
//! - [`config`]: 環境変数からのプロバイダ設定
//!
//! ## データフロー
//!
//! ```text
//! 設定 (email) ──▶ Provider ──▶ UserDataSource ──▶ UsersClient ──▶ Split API
//!                                    │
//!                                    ▼
//!                       ResourceData (id, name, email, 2fa, status)
//! ```

pub mod config;
pub mod data_source;
pub mod diagnostics;
pub mod error;
pub mod provider;
pub mod resource_data;
pub mod schema;

pub use config::ProviderConfig;
pub use data_source::{DataSource, USER_DATA_SOURCE_NAME, UserDataSource};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::ProviderError;
pub use provider::Provider;
pub use resource_data::{ResourceData, ResourceDataError};
pub use schema::{Attribute, AttributeType, Schema};
