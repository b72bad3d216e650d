//! HTTP gateway implementing the two read-only API operations.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{Todo, User};

/// The two logical operations the state machines need from the network.
///
/// View-models are generic over this trait; tests substitute a fake that
/// returns canned results without any I/O.
pub trait TodoApi: Send + Sync + 'static {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>> + Send;

    fn fetch_todos(
        &self,
        user_id: u32,
    ) -> impl Future<Output = Result<Vec<Todo>, ApiError>> + Send;
}

/// `reqwest`-backed gateway against a JSONPlaceholder-compatible host.
///
/// Stateless apart from the connection pool inside `Client`. No caching,
/// no retries — one GET per call.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: &str, connect_timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn todos_url(&self, user_id: u32) -> String {
        format!("{}/todos?userId={user_id}", self.base_url)
    }
}

impl TodoApi for HttpGateway {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.users_url();
        debug!(%url, "fetching users");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let users = response.json::<Vec<User>>().await?;
        debug!(count = users.len(), "users fetched");
        Ok(users)
    }

    async fn fetch_todos(&self, user_id: u32) -> Result<Vec<Todo>, ApiError> {
        let url = self.todos_url(user_id);
        debug!(%url, "fetching todos");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let todos = response.json::<Vec<Todo>>().await?;
        debug!(count = todos.len(), user_id, "todos fetched");
        Ok(todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> HttpGateway {
        HttpGateway::new("https://jsonplaceholder.typicode.com", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn users_url_appends_path() {
        assert_eq!(
            gateway().users_url(),
            "https://jsonplaceholder.typicode.com/users"
        );
    }

    #[test]
    fn todos_url_carries_user_id_query() {
        assert_eq!(
            gateway().todos_url(7),
            "https://jsonplaceholder.typicode.com/todos?userId=7"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let gateway =
            HttpGateway::new("http://localhost:3000/", Duration::from_secs(5)).unwrap();
        assert_eq!(gateway.users_url(), "http://localhost:3000/users");
    }
}
