//! # Duecard Core Library
//!
//! State and date logic behind a single to-do card: deciding whether an item
//! is overdue, labelling its due date, and buffering edits before handing
//! them to a caller-supplied backend.
//!
//! ## Core Modules
//!
//! - [`overdue`]: Overdue classification against an explicit "today"
//! - [`due_label`]: Due date parsing and relative/absolute labels
//! - [`edit`]: Edit form state machine and title/date validation
//! - [`card`]: Per-item widget state wiring the pieces together
//! - [`handlers`]: Asynchronous toggle/edit/delete callbacks and confirmation
//! - [`clock`]: Sources of the current calendar date
//! - [`timezone`]: Timezone validation and date truncation
//! - [`models`]: Core data structures and transfer objects
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use duecard_core::{card::TodoCard, clock::{Clock, FixedClock}, models::Todo};
//!
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 2, 27).unwrap());
//! let card = TodoCard::new(Todo::new("Pay rent", NaiveDate::from_ymd_opt(2026, 2, 25)));
//!
//! let view = card.view(clock.today());
//! assert!(view.overdue);
//! assert_eq!(view.due_label.as_deref(), Some("Due 2 days ago"));
//! ```

pub mod card;
pub mod clock;
pub mod due_label;
pub mod edit;
pub mod error;
pub mod handlers;
pub mod models;
pub mod overdue;
pub mod timezone;
