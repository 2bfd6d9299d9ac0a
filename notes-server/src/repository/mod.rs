use tokio_postgres::{Client, NoTls, Row, types::ToSql};

use crate::{
    config::Config,
    models::{NewNote, Note, NoteChanges},
};

const NOTE_COLUMNS: &str = "id, title, content, subject, is_important, created_at";

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] tokio_postgres::Error),

    #[error("{0}")]
    Query(#[from] tokio_postgres::Error),
}

/// Data access layer for the notes table.
///
/// Holds only connection parameters. Every operation opens a fresh
/// connection, runs its statements, and drops the connection before
/// returning, including on error paths.
pub struct Repository {
    pg_config: tokio_postgres::Config,
}

impl Repository {
    pub fn new(config: &Config) -> Self {
        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(&config.db_host)
            .user(&config.db_user)
            .password(&config.db_password)
            .dbname(&config.db_name);

        Self { pg_config }
    }

    async fn connect(&self) -> Result<Client, RepositoryError> {
        let (client, con) = self
            .pg_config
            .connect(NoTls)
            .await
            .map_err(RepositoryError::Connect)?;

        // The connection task exits on its own once the client is dropped
        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(client)
    }

    pub async fn create_note(&self, note: &NewNote) -> Result<Note, RepositoryError> {
        let client = self.connect().await?;

        let query = format!(
            "INSERT INTO notes (title, content, subject, is_important) \
             VALUES ($1, $2, $3, $4) RETURNING {NOTE_COLUMNS}"
        );
        let row = client
            .query_one(
                query.as_str(),
                &[&note.title, &note.content, &note.subject, &note.is_important],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    /// Updates only the columns present in `changes`. Returns the number
    /// of affected rows; the caller decides what zero means.
    pub async fn update_note(
        &self,
        id: i64,
        changes: &NoteChanges,
    ) -> Result<u64, RepositoryError> {
        let client = self.connect().await?;

        let (query, params) = update_statement(changes, &id);
        let rows = client.execute(query.as_str(), &params).await?;

        Ok(rows)
    }

    pub async fn mark_important(&self, id: i64) -> Result<u64, RepositoryError> {
        let client = self.connect().await?;

        let rows = client
            .execute("UPDATE notes SET is_important = TRUE WHERE id = $1", &[&id])
            .await?;

        Ok(rows)
    }

    pub async fn delete_note(&self, id: i64) -> Result<bool, RepositoryError> {
        let client = self.connect().await?;

        let rows = client
            .execute("DELETE FROM notes WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }

    pub async fn get_one_note(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        let client = self.connect().await?;

        let query = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1");
        let row = client.query_opt(query.as_str(), &[&id]).await?;

        Ok(row.map(|row| note_from_row(&row)))
    }

    pub async fn get_all_notes(&self) -> Result<Vec<Note>, RepositoryError> {
        let client = self.connect().await?;

        let query = format!("SELECT {NOTE_COLUMNS} FROM notes");
        let rows = client.query(query.as_str(), &[]).await?;

        Ok(rows.iter().map(note_from_row).collect())
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        subject: row.get("subject"),
        is_important: row.get("is_important"),
        created_at: row.get("created_at"),
    }
}

fn update_statement<'a>(
    changes: &'a NoteChanges,
    id: &'a i64,
) -> (String, Vec<&'a (dyn ToSql + Sync)>) {
    let mut assignments: Vec<String> = Vec::new();
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

    if let Some(title) = &changes.title {
        params.push(title);
        assignments.push(format!("title = ${}", params.len()));
    }
    if let Some(content) = &changes.content {
        params.push(content);
        assignments.push(format!("content = ${}", params.len()));
    }
    if let Some(subject) = &changes.subject {
        params.push(subject);
        assignments.push(format!("subject = ${}", params.len()));
    }
    if let Some(is_important) = &changes.is_important {
        params.push(is_important);
        assignments.push(format!("is_important = ${}", params.len()));
    }

    params.push(id);
    let query = format!(
        "UPDATE notes SET {} WHERE id = ${}",
        assignments.join(", "),
        params.len()
    );

    (query, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_statement_single_field() {
        let changes = NoteChanges {
            title: Some("New title".to_string()),
            ..NoteChanges::default()
        };

        let (query, params) = update_statement(&changes, &7);

        assert_eq!(query, "UPDATE notes SET title = $1 WHERE id = $2");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn update_statement_all_fields_in_order() {
        let changes = NoteChanges {
            title: Some("T".to_string()),
            content: Some("C".to_string()),
            subject: Some("S".to_string()),
            is_important: Some(true),
        };

        let (query, params) = update_statement(&changes, &1);

        assert_eq!(
            query,
            "UPDATE notes SET title = $1, content = $2, subject = $3, is_important = $4 \
             WHERE id = $5"
        );
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn update_statement_skips_missing_fields() {
        let changes = NoteChanges {
            subject: Some("S".to_string()),
            is_important: Some(false),
            ..NoteChanges::default()
        };

        let (query, _) = update_statement(&changes, &42);

        assert_eq!(
            query,
            "UPDATE notes SET subject = $1, is_important = $2 WHERE id = $3"
        );
    }
}
