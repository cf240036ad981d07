use anyhow::Result;
use chrono::NaiveDate;
use duecard_core::card::{CardView, TodoCard};
use duecard_core::models::TodoFilter;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::store::JsonStore;
use crate::views::table::display_todos;

pub async fn list_todos(
    store: &JsonStore,
    command: ListCommand,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let filter = if command.all {
        TodoFilter::All
    } else if command.pending {
        TodoFilter::Pending
    } else if command.overdue {
        TodoFilter::Overdue
    } else {
        config.default_filter
    };

    let mut todos: Vec<_> = store
        .all()
        .await
        .into_iter()
        .filter(|t| filter.matches(t, today))
        .collect();

    // Open items first, then by due date (undated last)
    todos.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then(a.due_date.is_none().cmp(&b.due_date.is_none()))
            .then(a.due_date.cmp(&b.due_date))
            .then(a.created_at.cmp(&b.created_at))
    });

    let views: Vec<CardView> = todos
        .into_iter()
        .map(|t| TodoCard::new(t).view(today))
        .collect();

    display_todos(&views);

    Ok(())
}
