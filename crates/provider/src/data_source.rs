//! # データソース
//!
//! 外部の状態を読み取るだけの宣言的リソース。作成・更新・削除の経路は持たず、
//! 読み取りのたびに観測状態をすべて計算し直す。

pub mod user;

use async_trait::async_trait;

pub use self::user::{USER_DATA_SOURCE_NAME, UserDataSource};
use crate::{diagnostics::Diagnostics, resource_data::ResourceData, schema::Schema};

/// データソーストレイト
#[async_trait]
pub trait DataSource: Send + Sync {
    /// 受け付ける属性のスキーマ
    fn schema(&self) -> Schema;

    /// 観測状態を読み取って `data` に書き込む
    ///
    /// エラー時は `data` を変更しない。
    async fn read(&self, data: &mut ResourceData) -> Result<(), Diagnostics>;
}
