use chrono::{DateTime, Utc};

pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub subject: String,
    pub is_important: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub subject: String,
    pub is_important: bool,
}

/// Subset of note fields touched by a partial update.
#[derive(Debug, Default)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub subject: Option<String>,
    pub is_important: Option<bool>,
}

impl NoteChanges {
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.subject.is_none()
            && self.is_important.is_none()
    }
}
