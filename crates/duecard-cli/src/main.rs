use clap::Parser;
use duecard_core::error::CoreError;
use owo_colors::{OwoColorize, Style};
use store::JsonStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod parser;
mod store;
mod util;
mod views;

#[tokio::main]
async fn main() {
    // Logging to stderr so it doesn't interfere with command output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();

    if let Err(e) = run(cli).await {
        handle_error(e);
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let config = config::Config::new()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
    let today = config.reference_date(cli.today.as_deref())?;
    tracing::debug!(%today, store = %config.store_path.display(), "starting");

    let store = JsonStore::open(&config.store_path).await?;

    match cli.command {
        cli::Commands::Add(command) => commands::add::add_todo(&store, command, today).await,
        cli::Commands::List(command) => {
            commands::list::list_todos(&store, command, &config, today).await
        }
        cli::Commands::Show(command) => commands::show::show_todo(&store, command, today).await,
        cli::Commands::Do(command) => commands::r#do::do_todo(&store, command, today).await,
        cli::Commands::Edit(command) => commands::edit::edit_todo(&store, command, today).await,
        cli::Commands::Delete(command) => commands::delete::delete_todo(&store, command).await,
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::AmbiguousId(todos) => {
                eprintln!("{}", "Error: Ambiguous ID.".style(error_style));
                eprintln!("Did you mean one of these?");
                for (id, title) in todos {
                    eprintln!("  {} ({})", id.yellow(), title);
                }
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::Serde(e) => {
                eprintln!("{} Todo file is not valid JSON: {}", "Error:".style(error_style), e);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}
