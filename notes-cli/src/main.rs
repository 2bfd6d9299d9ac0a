mod client;
mod render;

use std::env;
use std::io::{self, Write};

use serde_json::{Map, Value, json};

use client::{ApiClient, ClientError};

#[tokio::main]
async fn main() {
    let base_url =
        env::var("NOTES_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/api/notes".to_string());
    let client = ApiClient::new(base_url);

    loop {
        print_menu();
        let choice = prompt("Enter your choice: ");

        match choice.as_str() {
            "1" => view_all_notes(&client).await,
            "2" => view_one_note(&client).await,
            "3" => add_note(&client).await,
            "4" => update_note(&client).await,
            "5" => delete_note(&client).await,
            "6" => mark_important(&client).await,
            "7" => {
                println!("Exiting application.");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn print_menu() {
    println!("\nNote-Taking Application");
    println!("-----------------------");
    println!("1. View All Notes");
    println!("2. View Specific Note");
    println!("3. Add New Note");
    println!("4. Update Existing Note");
    println!("5. Delete Note");
    println!("6. Mark Note as Important");
    println!("7. Exit");
    println!("-----------------------");
}

fn prompt(message: &str) -> String {
    print!("{message}");
    io::stdout().flush().expect("failed to flush stdout");

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("failed to read input");
    line.trim().to_string()
}

async fn view_all_notes(client: &ApiClient) {
    match client.get_all_notes().await {
        Ok(notes) if notes.is_empty() => println!("\nNo notes found."),
        Ok(notes) => {
            println!("\n--- All Notes ---");
            for note in &notes {
                println!("{}", render::summary(note));
            }
        }
        Err(e) => println!("\nError fetching notes: {e}"),
    }
}

async fn view_one_note(client: &ApiClient) {
    let id = prompt("Enter note ID to view: ");

    match client.get_note(&id).await {
        Ok(note) => {
            println!("\n--- Note Details ---");
            println!("{}", render::details(&note));
        }
        Err(ClientError::NotFound) => println!("\nNote not found."),
        Err(e) => println!("\nError fetching note: {e}"),
    }
}

async fn add_note(client: &ApiClient) {
    let title = prompt("Enter note title: ");
    let content = prompt("Enter note content: ");
    let subject = prompt("Enter note subject: ");
    let is_important = prompt("Mark as important? (yes/no): ").to_lowercase() == "yes";

    let body = json!({
        "title": title,
        "content": content,
        "subject": subject,
        "is_important": is_important,
    });

    match client.create_note(&body).await {
        Ok(note) => {
            println!("\n--- Note Added ---");
            println!("{}", render::summary(&note));
        }
        Err(e) => println!("\nError adding note: {e}"),
    }
}

async fn update_note(client: &ApiClient) {
    let id = prompt("Enter note ID to update: ");

    let existing = match client.get_note(&id).await {
        Ok(note) => note,
        Err(ClientError::NotFound) => {
            println!("\nNote not found.");
            return;
        }
        Err(e) => {
            println!("\nError fetching note: {e}");
            return;
        }
    };

    println!("\n--- Update Note ---");
    println!("Leave fields blank to keep current value.");
    let title = prompt(&format!("New title ({}): ", existing.title));
    let content = prompt(&format!("New content ({}): ", existing.content));
    let subject = prompt(&format!("New subject ({}): ", existing.subject));
    let important = prompt(&format!(
        "Mark as important? ({}): ",
        if existing.is_important { "yes" } else { "no" }
    ))
    .to_lowercase();

    let body = build_update_body(&title, &content, &subject, &important);
    if body.is_empty() {
        println!("\nNo updates provided.");
        return;
    }

    match client.update_note(&id, &body).await {
        Ok(note) => {
            println!("\n--- Note Updated ---");
            println!("{}", render::details(&note));
        }
        Err(ClientError::NotFound) => println!("\nNote not found."),
        Err(e) => println!("\nError updating note: {e}"),
    }
}

async fn delete_note(client: &ApiClient) {
    let id = prompt("Enter note ID to delete: ");
    let confirmation = prompt(&format!(
        "Are you sure you want to delete note ID {id}? (yes/no): "
    ));
    if confirmation.to_lowercase() != "yes" {
        println!("\nDeletion cancelled.");
        return;
    }

    match client.delete_note(&id).await {
        Ok(()) => println!("\nNote deleted successfully."),
        Err(ClientError::NotFound) => println!("\nNote not found."),
        Err(e) => println!("\nError deleting note: {e}"),
    }
}

async fn mark_important(client: &ApiClient) {
    let id = prompt("Enter note ID to mark as important: ");

    match client.mark_important(&id).await {
        Ok(note) => {
            println!("\n--- Note Marked as Important ---");
            println!("{}", render::summary(&note));
        }
        Err(ClientError::NotFound) => println!("\nNote not found."),
        Err(e) => println!("\nError marking note as important: {e}"),
    }
}

/// Builds the partial update body. Blank fields are left out entirely;
/// an important answer other than yes/no leaves the flag untouched.
fn build_update_body(title: &str, content: &str, subject: &str, important: &str) -> Map<String, Value> {
    let mut body = Map::new();

    if !title.is_empty() {
        body.insert("title".to_string(), Value::from(title));
    }
    if !content.is_empty() {
        body.insert("content".to_string(), Value::from(content));
    }
    if !subject.is_empty() {
        body.insert("subject".to_string(), Value::from(subject));
    }
    match important {
        "yes" => {
            body.insert("is_important".to_string(), Value::from(true));
        }
        "no" => {
            body.insert("is_important".to_string(), Value::from(false));
        }
        _ => {}
    }

    body
}

#[cfg(test)]
mod tests {
    use super::build_update_body;

    #[test]
    fn blank_fields_are_omitted() {
        let body = build_update_body("New title", "", "", "");

        assert_eq!(body.len(), 1);
        assert_eq!(body["title"], "New title");
    }

    #[test]
    fn all_blank_yields_empty_body() {
        assert!(build_update_body("", "", "", "").is_empty());
    }

    #[test]
    fn important_accepts_yes_and_no() {
        assert_eq!(build_update_body("", "", "", "yes")["is_important"], true);
        assert_eq!(build_update_body("", "", "", "no")["is_important"], false);
    }

    #[test]
    fn stray_important_answer_is_ignored() {
        assert!(build_update_body("", "", "", "maybe").is_empty());
    }
}
