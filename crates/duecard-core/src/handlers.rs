use crate::error::CoreError;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// Operations a card delegates to whoever owns the todos.
#[async_trait]
pub trait TodoHandlers {
    /// Flip the completion state of a todo.
    async fn toggle(&self, id: Uuid) -> Result<(), CoreError>;
    /// Persist an edited title and due date. `title` is already trimmed.
    async fn edit(
        &self,
        id: Uuid,
        title: String,
        due_date: Option<NaiveDate>,
    ) -> Result<(), CoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), CoreError>;
}

/// Confirmation step that gates destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
