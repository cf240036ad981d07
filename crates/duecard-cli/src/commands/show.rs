use anyhow::Result;
use chrono::NaiveDate;
use duecard_core::card::TodoCard;

use crate::cli::ShowCommand;
use crate::store::JsonStore;
use crate::util::resolve_todo;
use crate::views::table::display_card;

pub async fn show_todo(store: &JsonStore, command: ShowCommand, today: NaiveDate) -> Result<()> {
    let todo = resolve_todo(store, &command.id).await?;
    display_card(&TodoCard::new(todo).view(today));
    Ok(())
}
