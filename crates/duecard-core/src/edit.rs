//! Buffered title/due-date editing for a single todo.

use crate::due_label::parse_due_date;
use crate::handlers::TodoHandlers;
use crate::models::{Todo, MAX_TITLE_LEN};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

/// Shown when a handler fails without a usable message.
pub const EDIT_FAILED_FALLBACK: &str = "Failed to update todo";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title cannot exceed 255 characters")]
    TitleTooLong,

    #[error("Due date must be a valid date (YYYY-MM-DD)")]
    InvalidDueDate,
}

/// A validated edit, ready to hand to [`TodoHandlers::edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSubmission {
    pub title: String,
    pub due_date: Option<NaiveDate>,
}

/// Trim a title and check it is non-empty and at most 255 characters.
pub fn validate_title(title: &str) -> Result<String, EditError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(EditError::EmptyTitle);
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(EditError::TitleTooLong);
    }
    Ok(trimmed.to_string())
}

/// An empty buffer clears the due date.
pub fn validate_due_date(due_date: &str) -> Result<Option<NaiveDate>, EditError> {
    if due_date.trim().is_empty() {
        return Ok(None);
    }
    parse_due_date(due_date)
        .map(Some)
        .ok_or(EditError::InvalidDueDate)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    mode: EditMode,
    title: String,
    due_date: String,
    error: Option<String>,
}

impl EditForm {
    pub fn new(todo: &Todo) -> Self {
        let mut form = Self {
            mode: EditMode::Viewing,
            title: String::new(),
            due_date: String::new(),
            error: None,
        };
        form.load(todo);
        form
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Inline error from the last failed save, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.due_date = due_date.into();
    }

    /// Refill the buffers from `todo`.
    pub fn load(&mut self, todo: &Todo) {
        self.title = todo.title.clone();
        self.due_date = todo
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
    }

    pub fn begin(&mut self, todo: &Todo) {
        debug!(id = %todo.id, "entering edit mode");
        self.load(todo);
        self.mode = EditMode::Editing;
        self.error = None;
    }

    /// Leave edit mode, discarding buffered changes.
    pub fn cancel(&mut self, todo: &Todo) {
        debug!(id = %todo.id, "edit cancelled");
        self.mode = EditMode::Viewing;
        self.load(todo);
        self.error = None;
    }

    pub fn validate(&self) -> Result<EditSubmission, EditError> {
        let title = validate_title(&self.title)?;
        let due_date = validate_due_date(&self.due_date)?;
        Ok(EditSubmission { title, due_date })
    }

    /// Validate the buffers and hand them to `handlers`.
    ///
    /// Returns `true` when the edit was saved and the form is back in viewing
    /// mode. On any failure the form stays in edit mode with [`Self::error`]
    /// set.
    pub async fn submit(&mut self, id: Uuid, handlers: &impl TodoHandlers) -> bool {
        if !self.is_editing() {
            debug!(%id, "submit ignored outside edit mode");
            return false;
        }

        let submission = match self.validate() {
            Ok(submission) => submission,
            Err(e) => {
                debug!(%id, error = %e, "edit rejected");
                self.error = Some(e.to_string());
                return false;
            }
        };

        match handlers
            .edit(id, submission.title, submission.due_date)
            .await
        {
            Ok(()) => {
                self.mode = EditMode::Viewing;
                self.error = None;
                true
            }
            Err(e) => {
                warn!(%id, error = %e, "failed to update todo");
                let message = e.to_string();
                self.error = Some(if message.trim().is_empty() {
                    EDIT_FAILED_FALLBACK.to_string()
                } else {
                    message
                });
                false
            }
        }
    }
}
