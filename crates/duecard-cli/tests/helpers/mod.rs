use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Reference date every test runs against
pub const TODAY: &str = "2026-02-27";

/// Test harness for running CLI commands against a temporary todo file
pub struct CliTestHarness {
    temp_dir: TempDir,
    store_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with an empty todo file location
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let store_path = temp_dir.path().join("todos.json");

        Self {
            temp_dir,
            store_path,
        }
    }

    /// Get a Command instance configured for testing, with "today" pinned
    pub fn command(&self) -> Command {
        let mut cmd = self.command_without_today();
        cmd.args(["--today", TODAY]);
        cmd
    }

    /// Same as [`Self::command`] but leaves the reference date to the caller
    pub fn command_without_today(&self) -> Command {
        let mut cmd = Command::cargo_bin("duecard").expect("Failed to find duecard binary");

        // Run inside the temp dir so no stray duecard.toml is picked up
        cmd.current_dir(self.temp_dir.path());
        cmd.env("DUECARD_STORE_PATH", &self.store_path);
        cmd.env_remove("DUECARD_TODAY");
        cmd.env_remove("DUECARD_TIMEZONE");
        cmd.env_remove("DUECARD_DEFAULT_FILTER");

        cmd
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Todos currently in the store file, as raw JSON
    pub fn stored_todos(&self) -> Vec<serde_json::Value> {
        match std::fs::read(&self.store_path) {
            Ok(bytes) => serde_json::from_slice(&bytes).expect("Store file is not valid JSON"),
            Err(_) => Vec::new(),
        }
    }

    /// Add a todo and return its full ID
    pub fn add(&self, title: &str, due: Option<&str>) -> String {
        let mut args = vec!["add", title];
        if let Some(due) = due {
            args.extend(["--due", due]);
        }
        self.run_success(&args);

        self.stored_todos()
            .iter()
            .find(|t| t["title"] == title)
            .and_then(|t| t["id"].as_str())
            .map(str::to_string)
            .expect("Added todo not found in store")
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains the todo table headers
    pub fn has_todo_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Title"))
            .and(predicate::str::contains("Due"))
    }

    /// Predicate to check if output indicates successful todo creation
    pub fn todo_created_successfully() -> impl Predicate<str> {
        predicate::str::contains("✓").and(predicate::str::contains("Todo created successfully"))
    }

    /// Predicate to check for empty result set
    pub fn empty_result() -> impl Predicate<str> {
        predicate::str::contains("No todos found")
    }
}
