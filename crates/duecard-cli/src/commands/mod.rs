// Each subcommand lives in its own module.

pub mod add;
pub mod delete;
pub mod r#do;
pub mod edit;
pub mod list;
pub mod show;
