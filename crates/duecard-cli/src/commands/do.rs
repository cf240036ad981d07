use anyhow::Result;
use chrono::NaiveDate;
use duecard_core::card::TodoCard;
use owo_colors::OwoColorize;

use crate::cli::DoCommand;
use crate::store::JsonStore;
use crate::util::resolve_todo;

pub async fn do_todo(store: &JsonStore, command: DoCommand, today: NaiveDate) -> Result<()> {
    let todo = resolve_todo(store, &command.id).await?;
    let mut card = TodoCard::new(todo);
    let was_completed = card.todo().completed;

    // Toggle failures are logged by the card, not returned
    card.toggle(store).await;

    match store.find_by_id(card.todo().id).await {
        Some(updated) => card.replace(updated),
        None => {
            eprintln!("{} Todo disappeared while updating.", "Warning:".yellow().bold());
            return Ok(());
        }
    }

    let view = card.view(today);
    if view.completed == was_completed {
        eprintln!("{} Todo '{}' was not changed.", "Warning:".yellow().bold(), view.title);
    } else if view.completed {
        println!("Completed todo: '{}'", view.title);
    } else {
        println!("Reopened todo: '{}'", view.title);
        if view.overdue {
            println!("  {}", "This todo is overdue.".red());
        }
    }

    Ok(())
}
