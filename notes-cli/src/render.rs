use chrono::Local;

use crate::client::Note;

const SEPARATOR: &str = "--------------------";

pub const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn created_at(note: &Note) -> String {
    note.created_at.map_or_else(
        || "N/A".to_string(),
        |t| {
            t.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    )
}

/// One-note listing without the content body.
pub fn summary(note: &Note) -> String {
    format!(
        "ID: {}\nTitle: {}\nSubject: {}\nDate Created: {}\nImportant: {}\n{SEPARATOR}",
        note.id,
        note.title,
        note.subject,
        created_at(note),
        yes_no(note.is_important),
    )
}

/// Full view including the content body.
pub fn details(note: &Note) -> String {
    format!(
        "ID: {}\nTitle: {}\nSubject: {}\nContent: {}\nDate Created: {}\nImportant: {}\n{SEPARATOR}",
        note.id,
        note.title,
        note.subject,
        note.content,
        created_at(note),
        yes_no(note.is_important),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Note {
        Note {
            id: 3,
            title: "Groceries".to_string(),
            content: "Milk and eggs".to_string(),
            subject: "Home".to_string(),
            is_important: true,
            created_at: None,
        }
    }

    #[test]
    fn yes_no_strings() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }

    #[test]
    fn summary_omits_content() {
        let text = summary(&note());

        assert!(text.starts_with("ID: 3\nTitle: Groceries\nSubject: Home\n"));
        assert!(text.contains("Important: Yes"));
        assert!(!text.contains("Milk and eggs"));
    }

    #[test]
    fn details_includes_content() {
        let text = details(&note());

        assert!(text.contains("Content: Milk and eggs"));
        assert!(text.ends_with(SEPARATOR));
    }

    #[test]
    fn missing_timestamp_renders_as_na() {
        assert!(summary(&note()).contains("Date Created: N/A"));
    }
}
