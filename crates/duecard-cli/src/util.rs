use anyhow::{anyhow, Result};
use duecard_core::error::CoreError;
use duecard_core::models::Todo;

use crate::store::JsonStore;

pub async fn resolve_todo(store: &JsonStore, short_id: &str) -> Result<Todo> {
    if short_id.len() < 2 {
        return Err(anyhow!(CoreError::InvalidInput(
            "Short ID must be at least 2 characters long.".to_string()
        )));
    }
    let mut todos = store.find_by_short_id_prefix(short_id).await;
    if todos.len() == 1 {
        Ok(todos.remove(0))
    } else if todos.is_empty() {
        Err(anyhow!(CoreError::NotFound(format!(
            "No todo found with ID prefix '{}'",
            short_id
        ))))
    } else {
        let todo_info: Vec<(String, String)> = todos
            .into_iter()
            .map(|t| (t.id.to_string(), t.title))
            .collect();
        Err(anyhow!(CoreError::AmbiguousId(todo_info)))
    }
}
