//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use chrono::DateTime;
use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Entry;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Format an epoch-milliseconds timestamp for display.
pub fn format_millis(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Print a table of entries (Id, Title, Username, Category, Updated).
///
/// Secrets are never shown here — use `passvault show <id>`.
pub fn print_entries_table(entries: &[Entry]) {
    if entries.is_empty() {
        info("The vault is empty.");
        tip("Run `passvault add` to store your first credential.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Username", "Category", "Updated"]);

    for e in entries {
        table.add_row(vec![
            e.id.clone(),
            e.title.clone(),
            e.username.clone(),
            e.category.clone().unwrap_or_default(),
            format_millis(e.updated_at),
        ]);
    }

    println!("{table}");
}

/// Print one entry in full, secret included.
pub fn print_entry(entry: &Entry) {
    println!("{}  {}", style("Id:").bold(), entry.id);
    println!("{}  {}", style("Title:").bold(), entry.title);
    println!("{}  {}", style("Username:").bold(), entry.username);
    println!("{}  {}", style("Password:").bold(), entry.password);
    if let Some(website) = &entry.website {
        println!("{}  {}", style("Website:").bold(), website);
    }
    if let Some(notes) = &entry.notes {
        println!("{}  {}", style("Notes:").bold(), notes);
    }
    if let Some(category) = &entry.category {
        println!("{}  {}", style("Category:").bold(), category);
    }
    println!(
        "{}  {}",
        style("Created:").bold(),
        format_millis(entry.created_at)
    );
    println!(
        "{}  {}",
        style("Updated:").bold(),
        format_millis(entry.updated_at)
    );
}
