use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use duecard_core::card::TodoCard;
use duecard_core::edit::EDIT_FAILED_FALLBACK;
use duecard_core::error::CoreError;

use crate::cli::EditCommand;
use crate::parser::normalize_due_input;
use crate::store::JsonStore;
use crate::util::resolve_todo;
use crate::views::table::display_card;

pub async fn edit_todo(store: &JsonStore, command: EditCommand, today: NaiveDate) -> Result<()> {
    if command.title.is_none() && command.due.is_none() && !command.due_clear {
        return Err(anyhow!(CoreError::InvalidInput(
            "Nothing to change. Pass --title, --due or --due-clear.".to_string()
        )));
    }

    let todo = resolve_todo(store, &command.id).await?;
    let mut card = TodoCard::new(todo);

    card.begin_edit();
    if let Some(title) = command.title {
        card.set_title(title);
    }
    if command.due_clear {
        card.set_due_date("");
    } else if let Some(due) = command.due {
        card.set_due_date(normalize_due_input(&due, today));
    }

    if !card.save(store).await {
        let message = card
            .form()
            .error()
            .unwrap_or(EDIT_FAILED_FALLBACK)
            .to_string();
        card.cancel_edit();
        return Err(anyhow!(message));
    }

    if let Some(updated) = store.find_by_id(card.todo().id).await {
        card.replace(updated);
    }
    println!("Updated todo with ID: {}", card.todo().id);
    display_card(&card.view(today));

    Ok(())
}
