use async_trait::async_trait;
use chrono::NaiveDate;
use duecard_core::error::CoreError;
use duecard_core::handlers::TodoHandlers;
use duecard_core::models::{NewTodoData, Todo, UpdateTodoData};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Todo list kept in a single JSON file. Every mutation rewrites the file.
pub struct JsonStore {
    path: PathBuf,
    todos: Mutex<Vec<Todo>>,
}

impl JsonStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();
        let todos = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), count = todos.len(), "opened todo store");
        Ok(Self {
            path,
            todos: Mutex::new(todos),
        })
    }

    async fn persist(&self, todos: &[Todo]) -> Result<(), CoreError> {
        let json = serde_json::to_vec_pretty(todos)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    pub async fn all(&self) -> Vec<Todo> {
        self.todos.lock().await.clone()
    }

    pub async fn add(&self, data: NewTodoData) -> Result<Todo, CoreError> {
        let todo = Todo::new(data.title, data.due_date);
        let mut todos = self.todos.lock().await;
        todos.push(todo.clone());
        self.persist(&todos).await?;
        Ok(todo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Todo> {
        self.todos.lock().await.iter().find(|t| t.id == id).cloned()
    }

    pub async fn find_by_short_id_prefix(&self, short_id: &str) -> Vec<Todo> {
        let prefix = short_id.to_lowercase();
        self.todos
            .lock()
            .await
            .iter()
            .filter(|t| t.id.to_string().starts_with(&prefix))
            .cloned()
            .collect()
    }

    pub async fn update(&self, id: Uuid, data: UpdateTodoData) -> Result<Todo, CoreError> {
        let mut todos = self.todos.lock().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("Todo with ID '{}' not found.", id)))?;

        if let Some(title) = data.title {
            todo.title = title;
        }
        if let Some(due_date) = data.due_date {
            todo.due_date = due_date;
        }
        if let Some(completed) = data.completed {
            todo.completed = completed;
        }
        let updated = todo.clone();

        self.persist(&todos).await?;
        Ok(updated)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), CoreError> {
        let mut todos = self.todos.lock().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(CoreError::NotFound(format!("Todo with ID '{}' not found.", id)));
        }
        self.persist(&todos).await
    }
}

#[async_trait]
impl TodoHandlers for JsonStore {
    async fn toggle(&self, id: Uuid) -> Result<(), CoreError> {
        let current = self
            .find_by_id(id)
            .await
            .ok_or_else(|| CoreError::NotFound(format!("Todo with ID '{}' not found.", id)))?;
        let data = UpdateTodoData {
            completed: Some(!current.completed),
            ..Default::default()
        };
        self.update(id, data).await.map(|_| ())
    }

    async fn edit(
        &self,
        id: Uuid,
        title: String,
        due_date: Option<NaiveDate>,
    ) -> Result<(), CoreError> {
        let data = UpdateTodoData {
            title: Some(title),
            due_date: Some(due_date),
            ..Default::default()
        };
        self.update(id, data).await.map(|_| ())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.remove(id).await
    }
}
