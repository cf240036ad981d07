//! Per-item widget state for a single todo.
//!
//! A [`TodoCard`] owns the todo as last handed to it by the caller, the edit
//! buffers, and the caller's loading flag. Overdue status and the due label
//! are derived on every [`TodoCard::view`] and never cached.

use crate::due_label::due_label;
use crate::edit::{EditForm, EditMode};
use crate::error::CoreError;
use crate::handlers::{Confirm, TodoHandlers};
use crate::models::Todo;
use chrono::NaiveDate;
use tracing::{debug, error};
use uuid::Uuid;

pub const DELETE_CONFIRM_PROMPT: &str =
    "Are you sure you want to delete this todo? This action cannot be undone.";

/// Everything a renderer needs to draw one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub overdue: bool,
    pub due_label: Option<String>,
    pub editing: bool,
    pub edit_title: String,
    pub edit_due_date: String,
    pub edit_error: Option<String>,
    pub loading: bool,
}

impl CardView {
    /// First seven characters of the id, as shown in listings.
    pub fn short_id(&self) -> String {
        self.id.to_string()[..7].to_string()
    }
}

#[derive(Debug, Clone)]
pub struct TodoCard {
    todo: Todo,
    form: EditForm,
    is_loading: bool,
}

impl TodoCard {
    pub fn new(todo: Todo) -> Self {
        let form = EditForm::new(&todo);
        Self {
            todo,
            form,
            is_loading: false,
        }
    }

    pub fn todo(&self) -> &Todo {
        &self.todo
    }

    pub fn form(&self) -> &EditForm {
        &self.form
    }

    pub fn mode(&self) -> EditMode {
        self.form.mode()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Set by the caller while an operation for this todo is in flight.
    /// Disables every control on the card.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Swap in a fresh copy of the todo, e.g. after the caller reloaded it.
    /// Edit buffers are only refreshed when not editing.
    pub fn replace(&mut self, todo: Todo) {
        if !self.form.is_editing() {
            self.form.load(&todo);
        }
        self.todo = todo;
    }

    pub fn view(&self, today: NaiveDate) -> CardView {
        CardView {
            id: self.todo.id,
            title: self.todo.title.clone(),
            completed: self.todo.completed,
            overdue: self.todo.is_overdue(today),
            due_label: self.todo.due_date.map(|due| due_label(due, today)),
            editing: self.form.is_editing(),
            edit_title: self.form.title().to_string(),
            edit_due_date: self.form.due_date().to_string(),
            edit_error: self.form.error().map(str::to_string),
            loading: self.is_loading,
        }
    }

    fn disabled(&self, action: &str) -> bool {
        if self.is_loading {
            debug!(id = %self.todo.id, action, "control disabled while loading");
        }
        self.is_loading
    }

    /// Ask the caller to flip completion. Failures are logged only.
    pub async fn toggle(&self, handlers: &impl TodoHandlers) {
        if self.disabled("toggle") {
            return;
        }
        if let Err(e) = handlers.toggle(self.todo.id).await {
            error!(id = %self.todo.id, error = %e, "failed to toggle todo");
        }
    }

    pub fn begin_edit(&mut self) {
        if self.disabled("edit") {
            return;
        }
        self.form.begin(&self.todo);
    }

    pub fn cancel_edit(&mut self) {
        if self.disabled("cancel") {
            return;
        }
        self.form.cancel(&self.todo);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.set_title(title);
    }

    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.form.set_due_date(due_date);
    }

    /// Submit the edit form. Returns `true` once the edit is saved.
    pub async fn save(&mut self, handlers: &impl TodoHandlers) -> bool {
        if self.disabled("save") {
            return false;
        }
        self.form.submit(self.todo.id, handlers).await
    }

    /// Delete the todo after `confirm` approves [`DELETE_CONFIRM_PROMPT`].
    ///
    /// Returns `Ok(false)` when nothing was attempted (declined or disabled).
    /// Handler errors are returned to the caller untouched.
    pub async fn delete(
        &self,
        handlers: &impl TodoHandlers,
        confirm: &impl Confirm,
    ) -> Result<bool, CoreError> {
        if self.disabled("delete") {
            return Ok(false);
        }
        if !confirm.confirm(DELETE_CONFIRM_PROMPT) {
            debug!(id = %self.todo.id, "deletion declined");
            return Ok(false);
        }
        handlers.delete(self.todo.id).await?;
        Ok(true)
    }
}
