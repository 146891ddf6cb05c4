//! `split_user` データソース
//!
//! メールアドレスでユーザーを検索し、ID・表示名・2FA・ステータスを読み取る。

use std::sync::Arc;

use async_trait::async_trait;
use split_api::UsersClient;

use super::DataSource;
use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    resource_data::ResourceData,
    schema::{Attribute, Schema},
};

/// データソース名
pub const USER_DATA_SOURCE_NAME: &str = "split_user";

/// `split_user` データソース
pub struct UserDataSource {
    users: Arc<dyn UsersClient>,
}

impl UserDataSource {
    pub fn new(users: Arc<dyn UsersClient>) -> Self {
        Self { users }
    }

    pub fn user_schema() -> Schema {
        Schema::new()
            .with_attribute(
                "email",
                Attribute::required_string().with_description("検索するユーザーのメールアドレス"),
            )
            .with_attribute(
                "name",
                Attribute::computed_string().with_description("ユーザーの表示名"),
            )
            .with_attribute(
                "2fa",
                Attribute::computed_bool().with_description("2 要素認証が有効か"),
            )
            .with_attribute(
                "status",
                Attribute::computed_string().with_description("ACTIVE / DEACTIVATED / PENDING"),
            )
    }
}

#[async_trait]
impl DataSource for UserDataSource {
    fn schema(&self) -> Schema {
        Self::user_schema()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn read(&self, data: &mut ResourceData) -> Result<(), Diagnostics> {
        let email = data
            .get_string("email")
            .ok_or_else(|| {
                Diagnostic::error("メールアドレスが設定されていません").with_attribute("email")
            })?
            .to_string();

        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| Diagnostics::from_err(&e))?;

        // 一致なしでも検索は成功扱いになるため、空の値がそのまま書き込まれる
        if user.id.is_none() {
            tracing::warn!(%email, "一致するユーザーが見つかりません。空の値で状態を書き込みます");
        }

        data.set_id(user.id.unwrap_or_default());
        data.set("name", user.name.unwrap_or_default())?;
        data.set("email", user.email.unwrap_or_default())?;
        data.set("2fa", user.tfa.unwrap_or_default())?;
        data.set("status", user.status.unwrap_or_default())?;

        Ok(())
    }
}
