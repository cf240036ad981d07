use crate::due_label::parse_due_date;
use crate::models::Todo;
use chrono::NaiveDate;

/// Whether a todo is overdue as of `today`.
///
/// Completed todos and todos without a due date are never overdue. A todo
/// due on `today` itself is not overdue yet.
pub fn is_overdue(due_date: Option<NaiveDate>, completed: bool, today: NaiveDate) -> bool {
    match due_date {
        Some(due) if !completed => due < today,
        _ => false,
    }
}

/// Same as [`is_overdue`] for a raw `YYYY-MM-DD` string. Unparseable dates
/// count as not overdue.
pub fn is_overdue_str(due_date: Option<&str>, completed: bool, today: NaiveDate) -> bool {
    is_overdue(due_date.and_then(parse_due_date), completed, today)
}

impl Todo {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        is_overdue(self.due_date, self.completed, today)
    }
}
