//! To-Do List Manager - single-window task list for the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo_list_manager::cli::{self, Cli, Commands};
use todo_list_manager::config::Config;
use todo_list_manager::{logging, tui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = &cli.command {
        generate(*shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(path) = logging::init(cli.debug)? {
        tracing::info!("Debug logging to {}", path.display());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);

    if let Some(Commands::Themes) = cli.command {
        cli::list_themes(&config.theme.name);
        return Ok(());
    }

    tui::run(&config).await
}
