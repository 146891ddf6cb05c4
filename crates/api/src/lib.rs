//! # Split Admin API クライアント
//!
//! Split.io の Admin API (v2) と通信する型付き HTTP クライアント。
//!
//! ## エンドポイント
//!
//! - `GET /users` - ユーザー一覧（カーソルベースのページネーション）
//! - `GET /users/{id}` - ユーザー取得
//! - `POST /users` - ユーザー招待（PENDING で作成される）
//! - `PUT /users/{id}` - ユーザー更新
//! - `DELETE /users/{id}` - 招待中ユーザーの削除
//!
//! ## 使用例
//!
//! ```no_run
//! use split_api::{SplitClient, SplitClientConfig, UsersClient};
//!
//! # async fn run() -> Result<(), split_api::SplitApiError> {
//! let client = SplitClient::new(SplitClientConfig::new("admin-api-key"))?;
//! let user = client.find_by_email("alice@example.com").await?;
//! println!("{:?}", user.id);
//! # Ok(())
//! # }
//! ```
//!
//! リトライ、キャッシュ、レート制限は行わない。1 回の呼び出しにつき
//! 同時に送信中のリクエストは常に 1 つだけである。

pub mod client;
pub mod error;
mod response;
pub mod types;
pub mod users;

pub use client::{DEFAULT_BASE_URL, SplitClient, SplitClientConfig};
pub use error::SplitApiError;
pub use types::{
    GroupRef,
    User,
    UserCreateRequest,
    UserListOptions,
    UserListResult,
    UserStatus,
    UserUpdateRequest,
};
pub use users::{FIND_BY_EMAIL_PAGE_SIZE, UsersClient};
