use axum::http::StatusCode;

use crate::{
    dto::{CreateNoteRequest, DeleteNoteResponse, NoteResponse, UpdateNoteRequest},
    models::{NewNote, NoteChanges},
    repository::{Repository, RepositoryError},
};

const MISSING_FIELDS: &str = "Missing required fields (title, content, subject)";
const NO_FIELDS_TO_UPDATE: &str = "No valid fields to update";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database connection failed")]
    Connection(#[source] tokio_postgres::Error),

    #[error("{0}")]
    Store(#[source] tokio_postgres::Error),

    #[error("{0}")]
    Validation(&'static str),

    #[error("Note not found")]
    NotFound,

    // The mutate-then-reread pair runs without a transaction, so a
    // concurrent delete can make the reread miss. Surfaced as an
    // unexpected failure, not as not-found.
    #[error("note {0} no longer exists after update")]
    Missing(i64),
}

impl ServiceError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Connection(_) | Self::Store(_) | Self::Missing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Connect(e) => Self::Connection(e),
            RepositoryError::Query(e) => Self::Store(e),
        }
    }
}

pub struct NoteService {
    repo: Repository,
}

impl NoteService {
    pub const fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub async fn create_note(
        &self,
        request: CreateNoteRequest,
    ) -> Result<NoteResponse, ServiceError> {
        let note = validate_create(request)?;
        let created = self.repo.create_note(&note).await?;

        Ok(created.into())
    }

    pub async fn update_note(
        &self,
        id: i64,
        request: UpdateNoteRequest,
    ) -> Result<NoteResponse, ServiceError> {
        let changes = NoteChanges {
            title: request.title,
            content: request.content,
            subject: request.subject,
            is_important: request.is_important,
        };
        if changes.is_empty() {
            return Err(ServiceError::Validation(NO_FIELDS_TO_UPDATE));
        }

        let rows = self.repo.update_note(id, &changes).await?;
        if rows == 0 {
            return Err(ServiceError::NotFound);
        }

        self.reread(id).await
    }

    pub async fn mark_important(&self, id: i64) -> Result<NoteResponse, ServiceError> {
        let rows = self.repo.mark_important(id).await?;
        if rows == 0 {
            return Err(ServiceError::NotFound);
        }

        self.reread(id).await
    }

    pub async fn delete_note(&self, id: i64) -> Result<DeleteNoteResponse, ServiceError> {
        if self.repo.delete_note(id).await? {
            Ok(DeleteNoteResponse {
                message: "Note deleted successfully".to_string(),
            })
        } else {
            Err(ServiceError::NotFound)
        }
    }

    pub async fn get_one_note(&self, id: i64) -> Result<NoteResponse, ServiceError> {
        match self.repo.get_one_note(id).await? {
            Some(note) => Ok(note.into()),
            None => Err(ServiceError::NotFound),
        }
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, ServiceError> {
        let notes = self.repo.get_all_notes().await?;

        Ok(notes.into_iter().map(Into::into).collect())
    }

    async fn reread(&self, id: i64) -> Result<NoteResponse, ServiceError> {
        match self.repo.get_one_note(id).await? {
            Some(note) => Ok(note.into()),
            None => Err(ServiceError::Missing(id)),
        }
    }
}

fn validate_create(request: CreateNoteRequest) -> Result<NewNote, ServiceError> {
    let (Some(title), Some(content), Some(subject)) =
        (request.title, request.content, request.subject)
    else {
        return Err(ServiceError::Validation(MISSING_FIELDS));
    };

    if title.is_empty() || content.is_empty() || subject.is_empty() {
        return Err(ServiceError::Validation(MISSING_FIELDS));
    }

    Ok(NewNote {
        title,
        content,
        subject,
        is_important: request.is_important.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateNoteRequest {
        CreateNoteRequest {
            title: Some("T".to_string()),
            content: Some("C".to_string()),
            subject: Some("S".to_string()),
            is_important: None,
        }
    }

    #[test]
    fn create_defaults_is_important_to_false() {
        let note = validate_create(full_request()).unwrap();

        assert_eq!(note.title, "T");
        assert!(!note.is_important);
    }

    #[test]
    fn create_keeps_explicit_is_important() {
        let mut request = full_request();
        request.is_important = Some(true);

        let note = validate_create(request).unwrap();

        assert!(note.is_important);
    }

    #[test]
    fn create_rejects_missing_field() {
        let mut request = full_request();
        request.subject = None;

        let err = validate_create(request).unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }

    #[test]
    fn create_rejects_empty_field() {
        let mut request = full_request();
        request.content = Some(String::new());

        let err = validate_create(request).unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_changes_detected_before_any_sql() {
        let changes = NoteChanges::default();

        assert!(changes.is_empty());
    }

    #[test]
    fn status_codes_match_error_taxonomy() {
        assert_eq!(
            ServiceError::NotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Validation(NO_FIELDS_TO_UPDATE).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Missing(1).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
