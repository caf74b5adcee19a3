//! `PostgREST` repository implementation for the remote task store.

use super::{
    config::{PostgrestConfig, PostgrestConfigError},
    models::{ErrorBody, TaskRow},
};
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode, Url};

/// Resource path appended to the configured base URL.
const TASKS_RESOURCE: &str = "tasks";

/// Write requests ask the store not to echo rows back.
const PREFER_RETURN_MINIMAL: &str = "return=minimal";

/// HTTP-backed task repository speaking the `PostgREST` convention.
///
/// The static API key travels on every request as both the `apikey` header
/// and the bearer token.
#[derive(Debug, Clone)]
pub struct PostgrestTaskRepository {
    http: Client,
    tasks_url: Url,
}

impl PostgrestTaskRepository {
    /// Creates a repository from adapter configuration, building an HTTP
    /// client with the authentication headers installed as defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PostgrestConfigError::InvalidApiKey`] when the key cannot
    /// form an HTTP header, [`PostgrestConfigError::UnsupportedBaseUrl`]
    /// when the base URL cannot carry a path segment, and
    /// [`PostgrestConfigError::Client`] when the HTTP client fails to build.
    pub fn new(config: &PostgrestConfig) -> Result<Self, PostgrestConfigError> {
        let headers = auth_headers(config.api_key())?;
        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(PostgrestConfigError::client)?;

        let mut tasks_url = config.base_url().clone();
        tasks_url
            .path_segments_mut()
            .map_err(|()| PostgrestConfigError::UnsupportedBaseUrl(config.base_url().to_string()))?
            .pop_if_empty()
            .push(TASKS_RESOURCE);

        Ok(Self { http, tasks_url })
    }

    /// Maps a non-2xx response to a transport error, surfacing the store's
    /// `status_message` when the body carries one.
    async fn rejection(response: Response) -> TaskRepositoryError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        TaskRepositoryError::Transport(failure_message(status, &body))
    }
}

/// Extracts the error text for a rejected response: the store's
/// `status_message` when the body parses and carries one, otherwise a
/// generic line naming the HTTP status.
pub(crate) fn failure_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.status_message)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[async_trait]
impl TaskRepository for PostgrestTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let response = self
            .http
            .get(self.tasks_url.clone())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(TaskRepositoryError::transport)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let rows: Vec<TaskRow> = response
            .json()
            .await
            .map_err(TaskRepositoryError::invalid_persisted_data)?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn create(&self, draft: &NewTask) -> TaskRepositoryResult<()> {
        // The store expects an array body even for a single insert.
        let response = self
            .http
            .post(self.tasks_url.clone())
            .header("Prefer", PREFER_RETURN_MINIMAL)
            .json(&[draft])
            .send()
            .await
            .map_err(TaskRepositoryError::transport)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<()> {
        // With `return=minimal` the store reports no affected-row count, so
        // a vanished id is indistinguishable from success here; only an
        // explicit rejection surfaces, as a transport error.
        let response = self
            .http
            .patch(self.tasks_url.clone())
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", PREFER_RETURN_MINIMAL)
            .json(patch)
            .send()
            .await
            .map_err(TaskRepositoryError::transport)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}

/// Builds the default header set carrying the static API key.
fn auth_headers(api_key: &str) -> Result<HeaderMap, PostgrestConfigError> {
    let mut api_key_value =
        HeaderValue::from_str(api_key).map_err(|_| PostgrestConfigError::InvalidApiKey)?;
    api_key_value.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
        .map_err(|_| PostgrestConfigError::InvalidApiKey)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("apikey", api_key_value);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}
