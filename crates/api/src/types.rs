//! Split API のリクエスト / レスポンス型
//!
//! リモートはどのフィールドも省略しうるため、レスポンス型のフィールドは
//! すべて `Option` で保持する。

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};
use url::form_urlencoded;

// --- 列挙型 ---

/// ユーザーステータス
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, strum::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum UserStatus {
    /// 有効
    Active,
    /// 無効化済み
    Deactivated,
    /// 招待中（未承諾）。削除できるのはこの状態のみ
    Pending,
}

// --- レスポンス型 ---

/// グループ参照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:         Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
}

impl GroupRef {
    /// グループ ID から参照を作る（`type` は `group`）
    pub fn group(id: impl Into<String>) -> Self {
        Self {
            id:         Some(id.into()),
            group_type: Some("group".to_string()),
        }
    }
}

/// ユーザー
///
/// `status` はリモートの文字列をそのまま保持する。
/// 型付きで扱う場合は [`User::parsed_status`] を使う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id:        Option<String>,
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub name:      Option<String>,
    #[serde(default)]
    pub email:     Option<String>,
    #[serde(default)]
    pub status:    Option<String>,
    #[serde(rename = "2fa", default)]
    pub tfa:       Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups:    Option<Vec<GroupRef>>,
}

impl User {
    /// ステータスを [`UserStatus`] として解釈する
    ///
    /// 未設定または未知の値の場合は `None`。
    pub fn parsed_status(&self) -> Option<UserStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    /// メールアドレスが完全一致するか
    pub fn has_email(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }
}

/// ユーザー一覧レスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResult {
    #[serde(default)]
    pub data:            Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_marker:     Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_marker: Option<String>,
    #[serde(default)]
    pub limit:           Option<i64>,
    #[serde(default)]
    pub count:           Option<i64>,
}

// --- リクエスト型 ---

/// ユーザー一覧のクエリパラメータ
///
/// 値の範囲はクライアントでは検証しない（`limit` は 1〜200、デフォルト 50 が
/// リモートの仕様だが、範囲外の値もそのまま送信する）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListOptions {
    /// ステータスフィルタ
    pub status:   Option<UserStatus>,
    /// 1 ページあたりの件数
    pub limit:    Option<u32>,
    /// 前ページのカーソル（レスポンスの `previousMarker`）
    pub before:   Option<String>,
    /// 次ページのカーソル（レスポンスの `nextMarker`）
    pub after:    Option<String>,
    /// 指定グループの有効メンバーに絞り込む
    pub group_id: Option<String>,
}

impl UserListOptions {
    /// 設定されているパラメータだけを `(名前, 値)` の組で返す
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(before) = &self.before {
            pairs.push(("before", before.clone()));
        }
        if let Some(after) = &self.after {
            pairs.push(("after", after.clone()));
        }
        if let Some(group_id) = &self.group_id {
            pairs.push(("groupId", group_id.clone()));
        }
        pairs
    }

    /// `application/x-www-form-urlencoded` 形式のクエリ文字列
    ///
    /// パラメータが 1 つもない場合は空文字列。
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

/// ユーザー招待リクエスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserCreateRequest {
    pub email:  String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupRef>,
}

impl UserCreateRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email:  email.into(),
            groups: Vec::new(),
        }
    }
}

/// ユーザー更新リクエスト
///
/// `None` のフィールドはリクエストボディから省略される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email:  Option<String>,
    #[serde(rename = "2fa", skip_serializing_if = "Option::is_none")]
    pub tfa:    Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}
