use anyhow::Result;
use dialoguer::Confirm;
use duecard_core::card::TodoCard;

use crate::cli::DeleteCommand;
use crate::store::JsonStore;
use crate::util::resolve_todo;

pub async fn delete_todo(store: &JsonStore, command: DeleteCommand) -> Result<()> {
    let todo = resolve_todo(store, &command.id).await?;
    let title = todo.title.clone();
    let card = TodoCard::new(todo);

    let confirm = |prompt: &str| {
        command.force
            || Confirm::new()
                .with_prompt(format!("{} ('{}')", prompt, title))
                .default(false)
                .interact()
                .unwrap_or(false)
    };

    if card.delete(store, &confirm).await? {
        println!("Todo deleted successfully.");
    } else {
        println!("Deletion cancelled.");
    }
    Ok(())
}
