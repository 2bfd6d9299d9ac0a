use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub subject: String,
    pub is_important: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("note not found")]
    NotFound,

    #[error("server returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the notes REST API. IDs are passed through as raw
/// text; the server reports malformed ones.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn get_all_notes(&self) -> Result<Vec<Note>, ClientError> {
        let response = self.http.get(&self.base_url).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn get_note(&self, id: &str) -> Result<Note, ClientError> {
        let response = self
            .http
            .get(format!("{}/{id}", self.base_url))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn create_note(&self, body: &Value) -> Result<Note, ClientError> {
        let response = self.http.post(&self.base_url).json(body).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn update_note(
        &self,
        id: &str,
        body: &Map<String, Value>,
    ) -> Result<Note, ClientError> {
        let response = self
            .http
            .put(format!("{}/{id}", self.base_url))
            .json(body)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/{id}", self.base_url))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn mark_important(&self, id: &str) -> Result<Note, ClientError> {
        let response = self
            .http
            .patch(format!("{}/{id}/important", self.base_url))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };

    Err(ClientError::Api { status, message })
}
