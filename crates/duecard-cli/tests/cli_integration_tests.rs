/// CLI integration tests for duecard
///
/// These tests run the binary as a black box against a temporary todo file,
/// with "today" pinned to 2026-02-27.

use predicates::prelude::*;

mod helpers;
use helpers::{assertions, CliTestHarness};

#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("overdue"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("duecard"));

    harness
        .run_failure(&["invalid-command"])
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_add_and_list_relative_labels() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["add", "Today task", "--due", "2026-02-27"])
        .stdout(assertions::todo_created_successfully())
        .stdout(predicate::str::contains("Due today"));
    harness.add("Tomorrow task", Some("tomorrow"));
    harness.add("Week ago task", Some("2026-02-20"));
    harness.add("Older task", Some("2026-02-19"));
    harness.add("Soon task", Some("2026-03-03"));
    harness.add("Someday task", None);

    harness
        .run_success(&["list"])
        .stdout(assertions::has_todo_table_headers())
        .stdout(predicate::str::contains("Due today"))
        .stdout(predicate::str::contains("Due tomorrow"))
        .stdout(predicate::str::contains("Due 7 days ago"))
        .stdout(predicate::str::contains("Due Feb 19, 2026"))
        .stdout(predicate::str::contains("Due in 4 days"))
        .stdout(predicate::str::contains("Someday task"));
}

#[test]
fn test_empty_list() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["list"])
        .stdout(assertions::empty_result());
}

#[test]
fn test_overdue_filter() {
    let harness = CliTestHarness::new();
    harness.add("Late task", Some("2026-02-26"));
    harness.add("Due today task", Some("2026-02-27"));
    harness.add("Future task", Some("2026-03-01"));

    harness
        .run_success(&["list", "--overdue"])
        .stdout(predicate::str::contains("Late task"))
        .stdout(predicate::str::contains("⏰ Due yesterday"))
        .stdout(predicate::str::contains("Due today task").not())
        .stdout(predicate::str::contains("Future task").not());
}

#[test]
fn test_completing_overdue_todo() {
    let harness = CliTestHarness::new();
    let id = harness.add("Late task", Some("2026-02-26"));

    harness
        .run_success(&["do", &id])
        .stdout(predicate::str::contains("Completed todo: 'Late task'"));

    harness
        .run_success(&["list", "--overdue"])
        .stdout(assertions::empty_result());

    let todos = harness.stored_todos();
    assert_eq!(todos[0]["completed"], true);
    assert_eq!(todos[0]["dueDate"], "2026-02-26");

    // Reopening makes it overdue again
    harness
        .run_success(&["do", &id])
        .stdout(predicate::str::contains("Reopened todo"))
        .stdout(predicate::str::contains("overdue"));
}

#[test]
fn test_rescheduling_clears_overdue() {
    let harness = CliTestHarness::new();
    let id = harness.add("Late task", Some("2026-02-26"));

    harness
        .run_success(&["edit", &id, "--due", "2026-03-01"])
        .stdout(predicate::str::contains("Updated todo"))
        .stdout(predicate::str::contains("Due in 2 days"));

    harness
        .run_success(&["list", "--overdue"])
        .stdout(assertions::empty_result());
}

#[test]
fn test_edit_title_is_trimmed() {
    let harness = CliTestHarness::new();
    let id = harness.add("Draft", None);

    harness.run_success(&["edit", &id, "--title", "  Final copy  "]);

    assert_eq!(harness.stored_todos()[0]["title"], "Final copy");
}

#[test]
fn test_edit_validation_errors() {
    let harness = CliTestHarness::new();
    let id = harness.add("Keep me", Some("2026-02-26"));

    harness
        .run_failure(&["edit", &id, "--title", "   "])
        .stderr(predicate::str::contains("Title cannot be empty"));

    let long_title = "x".repeat(256);
    harness
        .run_failure(&["edit", &id, "--title", &long_title])
        .stderr(predicate::str::contains("Title cannot exceed 255 characters"));

    harness
        .run_failure(&["edit", &id, "--due", "not a date at all"])
        .stderr(predicate::str::contains("Due date must be a valid date"));

    harness
        .run_failure(&["edit", &id])
        .stderr(predicate::str::contains("Nothing to change"));

    let todos = harness.stored_todos();
    assert_eq!(todos[0]["title"], "Keep me");
    assert_eq!(todos[0]["dueDate"], "2026-02-26");
}

#[test]
fn test_clear_due_date() {
    let harness = CliTestHarness::new();
    let id = harness.add("Dated", Some("2026-02-20"));

    harness
        .run_success(&["edit", &id, "--due-clear"])
        .stdout(predicate::str::contains("No due date"));

    assert!(harness.stored_todos()[0]["dueDate"].is_null());
}

#[test]
fn test_add_rejects_bad_titles() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&["add", "   "])
        .stderr(predicate::str::contains("Title cannot be empty"));

    assert!(harness.stored_todos().is_empty());
}

#[test]
fn test_delete_requires_confirmation() {
    let harness = CliTestHarness::new();
    let id = harness.add("Disposable", None);

    // No terminal attached, so the prompt cannot be confirmed
    harness
        .run_success(&["delete", &id])
        .stdout(predicate::str::contains("Deletion cancelled."));
    assert_eq!(harness.stored_todos().len(), 1);

    harness
        .run_success(&["delete", &id, "--force"])
        .stdout(predicate::str::contains("Todo deleted successfully."));
    assert!(harness.stored_todos().is_empty());
}

#[test]
fn test_unknown_and_short_ids() {
    let harness = CliTestHarness::new();
    harness.add("Only one", None);

    harness
        .run_failure(&["show", "ffffffff"])
        .stderr(predicate::str::contains("No todo found"));

    harness
        .run_failure(&["do", "f"])
        .stderr(predicate::str::contains("at least 2 characters"));
}

#[test]
fn test_show_overdue_todo() {
    let harness = CliTestHarness::new();
    let id = harness.add("Late task", Some("2026-02-25"));

    harness
        .run_success(&["show", &id])
        .stdout(predicate::str::contains("Late task"))
        .stdout(predicate::str::contains("Due 2 days ago"))
        .stdout(predicate::str::contains("(overdue)"));
}

#[test]
fn test_invalid_reference_date() {
    let harness = CliTestHarness::new();

    harness
        .command_without_today()
        .args(["--today", "yesterday-ish", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid reference date"));

    harness
        .command_without_today()
        .env("DUECARD_TODAY", "2026-02-27")
        .args(["add", "From config", "--due", "2026-02-26"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Due yesterday"));
}
