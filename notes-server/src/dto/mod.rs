use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Note;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
    /// Note subject
    pub subject: String,
    /// Whether the note is marked as important
    pub is_important: bool,
    /// Creation timestamp, assigned by the database
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            subject: note.subject,
            is_important: note.is_important,
            created_at: note.created_at,
        }
    }
}

/// All fields are optional at the serde level so that a missing field
/// surfaces as a validation error instead of an extractor rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub subject: Option<String>,
    pub is_important: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub subject: Option<String>,
    pub is_important: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteNoteResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_fields_default_to_none() {
        let request: CreateNoteRequest = serde_json::from_str("{\"title\": \"T\"}").unwrap();

        assert_eq!(request.title.as_deref(), Some("T"));
        assert!(request.content.is_none());
        assert!(request.subject.is_none());
        assert!(request.is_important.is_none());
    }

    #[test]
    fn update_request_accepts_empty_body() {
        let request: UpdateNoteRequest = serde_json::from_str("{}").unwrap();

        assert!(request.title.is_none());
        assert!(request.is_important.is_none());
    }

    #[test]
    fn error_response_shape() {
        let body = serde_json::to_string(&ErrorResponse {
            error: "Note not found".to_string(),
        })
        .unwrap();

        assert_eq!(body, "{\"error\":\"Note not found\"}");
    }
}
