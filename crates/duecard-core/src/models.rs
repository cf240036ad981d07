use crate::due_label::parse_due_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Longest title accepted when adding or editing a todo, in characters.
pub const MAX_TITLE_LEN: usize = 255;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    /// Calendar date only, serialized as `YYYY-MM-DD`. Stored values that
    /// are empty or not a real date load as no due date.
    #[serde(default, deserialize_with = "lenient_due_date")]
    pub due_date: Option<NaiveDate>,
    /// The backend stores completion as `0`/`1`; both forms are accepted
    #[serde(deserialize_with = "bool_or_int")]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Default for Todo {
    fn default() -> Self {
        Self {
            id: Uuid::now_v7(),
            title: "".to_string(),
            due_date: None,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

impl Todo {
    pub fn new(title: impl Into<String>, due_date: Option<NaiveDate>) -> Self {
        Self {
            title: title.into(),
            due_date,
            ..Default::default()
        }
    }
}

fn lenient_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_due_date))
}

fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(n) => Err(serde::de::Error::custom(format!(
            "invalid completion flag: {}",
            n
        ))),
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTodoData {
    pub title: String,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTodoData {
    pub title: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
}

/// Which todos a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    #[default]
    All,
    Pending,
    Overdue,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid todo filter: {0}")]
pub struct ParseTodoFilterError(String);

impl FromStr for TodoFilter {
    type Err = ParseTodoFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TodoFilter::All),
            "pending" => Ok(TodoFilter::Pending),
            "overdue" => Ok(TodoFilter::Overdue),
            _ => Err(ParseTodoFilterError(s.to_string())),
        }
    }
}

impl TodoFilter {
    pub fn matches(&self, todo: &Todo, today: NaiveDate) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Pending => !todo.completed,
            TodoFilter::Overdue => todo.is_overdue(today),
        }
    }
}
