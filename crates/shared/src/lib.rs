//! # Split 共有ユーティリティ
//!
//! API クライアント、プロバイダ、CLI で共通に使うユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（api, provider, cli）から依存される
//! - Split API のドメイン知識を含まない純粋なユーティリティのみを配置

pub mod observability;

pub use observability::{LogFormat, TracingConfig};
