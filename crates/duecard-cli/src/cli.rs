use clap::{Parser, Subcommand};

/// A to-do list that knows what is overdue
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new todo
    Add(AddCommand),
    /// List todos
    List(ListCommand),
    /// Show a single todo
    Show(ShowCommand),
    /// Toggle a todo between done and not done
    Do(DoCommand),
    /// Edit a todo's title or due date
    Edit(EditCommand),
    /// Delete a todo
    Delete(DeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the todo
    pub title: String,
    /// The due date (YYYY-MM-DD or e.g. "tomorrow", "next friday")
    #[clap(short, long)]
    pub due: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Show every todo
    #[arg(long, conflicts_with_all = ["pending", "overdue"])]
    pub all: bool,
    /// Only todos that are not done
    #[arg(long, conflicts_with = "overdue")]
    pub pending: bool,
    /// Only overdue todos
    #[arg(long)]
    pub overdue: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The ID (or ID prefix) of the todo
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DoCommand {
    /// The ID (or ID prefix) of the todo
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID (or ID prefix) of the todo
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub due: Option<String>,
    #[arg(long, conflicts_with = "due")]
    pub due_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID (or ID prefix) of the todo
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}
