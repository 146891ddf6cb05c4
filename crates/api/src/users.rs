//! ユーザー関連の Split API クライアント
//!
//! 詳細: <https://docs.split.io/reference#users-overview>

use async_trait::async_trait;
use reqwest::Method;

use crate::{
    client::SplitClient,
    error::SplitApiError,
    response::{handle_empty_response, handle_response},
    types::{User, UserCreateRequest, UserListOptions, UserListResult, UserUpdateRequest},
};

/// [`UsersClient::find_by_email`] が 1 ページに要求する件数
pub const FIND_BY_EMAIL_PAGE_SIZE: u32 = 100;

/// ユーザー関連の Split API クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait UsersClient: Send + Sync {
    /// 組織内のユーザー一覧を 1 ページ取得する
    ///
    /// Split API の `GET /users` を呼び出す。
    /// デフォルトでは PENDING のユーザーは返されない。
    async fn list(&self, options: &UserListOptions) -> Result<UserListResult, SplitApiError>;

    /// ID でユーザーを取得する
    ///
    /// Split API の `GET /users/{id}` を呼び出す。
    /// 存在しない場合も特別扱いせず、404 の [`SplitApiError::Status`] を返す。
    async fn get(&self, id: &str) -> Result<User, SplitApiError>;

    /// ユーザーを招待する
    ///
    /// Split API の `POST /users` を呼び出す。作成されたユーザーは PENDING になる。
    async fn invite(&self, request: &UserCreateRequest) -> Result<User, SplitApiError>;

    /// 表示名、メールアドレス、2FA、ステータスを更新する
    ///
    /// Split API の `PUT /users/{id}` を呼び出す。
    async fn update(&self, id: &str, request: &UserUpdateRequest) -> Result<User, SplitApiError>;

    /// 招待を承諾していないユーザーを削除する
    ///
    /// Split API の `DELETE /users/{id}` を呼び出す。
    /// ACTIVE のユーザーはリモートで拒否され、[`SplitApiError::Status`] になる。
    /// ACTIVE のユーザーは [`update`](UsersClient::update) で無効化するしかない。
    async fn delete_pending_user(&self, id: &str) -> Result<(), SplitApiError>;

    /// メールアドレスでユーザーを検索する
    ///
    /// `nextMarker` を辿りながら 1 ページ 100 件で一覧を順に取得し、
    /// メールアドレスが完全一致する最初のユーザーを返す。
    ///
    /// # 戻り値
    ///
    /// 最後のページまで一致しなかった場合は `Ok(User::default())` を返す。
    /// 「見つからない」ことはエラーとして区別されない。
    async fn find_by_email(&self, email: &str) -> Result<User, SplitApiError> {
        let mut options = UserListOptions {
            limit: Some(FIND_BY_EMAIL_PAGE_SIZE),
            ..Default::default()
        };
        let mut page = 0_usize;

        loop {
            page += 1;
            let result = self.list(&options).await?;
            tracing::debug!(page, count = result.data.len(), "ユーザー一覧ページを走査");

            if let Some(user) = result.data.into_iter().find(|u| u.has_email(email)) {
                return Ok(user);
            }

            let Some(next) = result.next_marker else {
                break;
            };
            options.after = Some(next);
        }

        tracing::debug!(pages = page, "一致するメールアドレスのユーザーがいません");
        Ok(User::default())
    }
}

#[async_trait]
impl UsersClient for SplitClient {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn list(&self, options: &UserListOptions) -> Result<UserListResult, SplitApiError> {
        let mut url = self.request_url(&["users"])?;
        let query = options.query_string();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        let response = self.request(Method::GET, url).send().await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn get(&self, id: &str) -> Result<User, SplitApiError> {
        let url = self.request_url(&["users", id])?;

        let response = self.request(Method::GET, url).send().await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn invite(&self, request: &UserCreateRequest) -> Result<User, SplitApiError> {
        let url = self.request_url(&["users"])?;

        let response = self.request(Method::POST, url).json(request).send().await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: &str, request: &UserUpdateRequest) -> Result<User, SplitApiError> {
        let url = self.request_url(&["users", id])?;

        let response = self.request(Method::PUT, url).json(request).send().await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete_pending_user(&self, id: &str) -> Result<(), SplitApiError> {
        let url = self.request_url(&["users", id])?;

        let response = self.request(Method::DELETE, url).send().await?;
        handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    use super::*;

    /// ページ列を順に返すスタブ
    ///
    /// 受け取った `after` を記録し、カーソルの辿り方を検証できるようにする。
    struct PagedStub {
        pages:    Vec<UserListResult>,
        requests: Mutex<Vec<UserListOptions>>,
    }

    impl PagedStub {
        fn new(pages: Vec<UserListResult>) -> Self {
            Self {
                pages,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requested_cursors(&self) -> Vec<Option<String>> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|o| o.after.clone())
                .collect()
        }
    }

    #[async_trait]
    impl UsersClient for PagedStub {
        async fn list(&self, options: &UserListOptions) -> Result<UserListResult, SplitApiError> {
            let mut requests = self.requests.lock().unwrap();
            let index = requests.len();
            requests.push(options.clone());
            self.pages.get(index).cloned().ok_or_else(|| SplitApiError::Status {
                status: StatusCode::BAD_REQUEST,
                body:   "no such page".to_string(),
            })
        }

        async fn get(&self, _id: &str) -> Result<User, SplitApiError> {
            unimplemented!()
        }

        async fn invite(&self, _request: &UserCreateRequest) -> Result<User, SplitApiError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: &str,
            _request: &UserUpdateRequest,
        ) -> Result<User, SplitApiError> {
            unimplemented!()
        }

        async fn delete_pending_user(&self, _id: &str) -> Result<(), SplitApiError> {
            unimplemented!()
        }
    }

    fn user(id: &str, email: &str) -> User {
        User {
            id: Some(id.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        }
    }

    fn page(users: Vec<User>, next: Option<&str>) -> UserListResult {
        UserListResult {
            data: users,
            next_marker: next.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_find_by_emailはカーソル順にページを辿る() {
        let stub = PagedStub::new(vec![
            page(vec![user("u-1", "a@example.com")], Some("m-1")),
            page(vec![user("u-2", "b@example.com")], Some("m-2")),
            page(vec![user("u-3", "c@example.com")], None),
        ]);

        let found = stub.find_by_email("c@example.com").await.unwrap();

        assert_eq!(found.id.as_deref(), Some("u-3"));
        assert_eq!(
            stub.requested_cursors(),
            vec![None, Some("m-1".to_string()), Some("m-2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_find_by_emailは一致した時点で走査をやめる() {
        let stub = PagedStub::new(vec![
            page(vec![user("u-1", "a@example.com")], Some("m-1")),
            page(vec![user("u-2", "b@example.com")], None),
        ]);

        let found = stub.find_by_email("a@example.com").await.unwrap();

        assert_eq!(found.id.as_deref(), Some("u-1"));
        assert_eq!(stub.requested_cursors().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_emailは100件単位で要求する() {
        let stub = PagedStub::new(vec![page(vec![], None)]);

        stub.find_by_email("a@example.com").await.unwrap();

        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests[0].limit, Some(FIND_BY_EMAIL_PAGE_SIZE));
        assert_eq!(requests[0].status, None);
    }

    #[tokio::test]
    async fn test_find_by_email_一致しない場合はデフォルト値とokを返す() {
        let stub = PagedStub::new(vec![
            page(vec![user("u-1", "a@example.com")], Some("m-1")),
            page(vec![], None),
        ]);

        let found = stub.find_by_email("nobody@nowhere.test").await;

        assert_eq!(found.unwrap(), User::default());
        assert_eq!(stub.requested_cursors().len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_email_途中のページのエラーをそのまま返す() {
        let stub = PagedStub::new(vec![page(vec![user("u-1", "a@example.com")], Some("m-1"))]);

        let result = stub.find_by_email("z@example.com").await;

        assert_eq!(
            result.unwrap_err().status(),
            Some(StatusCode::BAD_REQUEST)
        );
    }
}
