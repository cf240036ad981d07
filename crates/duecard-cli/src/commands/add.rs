use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use duecard_core::card::TodoCard;
use duecard_core::edit::validate_title;
use duecard_core::error::CoreError;
use duecard_core::models::NewTodoData;
use owo_colors::OwoColorize;

use crate::cli::AddCommand;
use crate::parser::parse_due_date;
use crate::store::JsonStore;

pub async fn add_todo(store: &JsonStore, command: AddCommand, today: NaiveDate) -> Result<()> {
    let title = validate_title(&command.title)
        .map_err(|e| anyhow!(CoreError::InvalidInput(e.to_string())))?;
    let due_date = command
        .due
        .as_deref()
        .map(|d| parse_due_date(d, today))
        .transpose()?;

    let todo = store.add(NewTodoData { title, due_date }).await?;
    let view = TodoCard::new(todo).view(today);
    let short_id = view.short_id();

    println!("{} {}", "✓".green().bold(), "Todo created successfully".green());
    println!("  {} {}", "ID:".dimmed(), short_id.cyan());
    println!("  {} {}", "Title:".dimmed(), view.title);
    if let Some(label) = view.due_label {
        if view.overdue {
            println!("  {} {}", "Due:".dimmed(), label.red());
        } else {
            println!("  {} {}", "Due:".dimmed(), label);
        }
    }

    Ok(())
}
