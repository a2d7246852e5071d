//! Coach CLI Application
//!
//! Command-line interface for the coach fitness goal tracker.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use coach_core::{params::ListGoals, CatalogBuilder};
use log::info;
use renderer::TerminalRenderer;
use session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let catalog = CatalogBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open goal catalog")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Coach started");

    match command {
        Some(Commands::Goal { command }) => {
            Cli::new(catalog, renderer).handle_goal_command(command)
        }
        Some(Commands::Session(args)) => {
            Session::new(catalog, renderer).run(&args.goals).await
        }
        None => Cli::new(catalog, renderer).list_goals(&ListGoals::default()),
    }
}
