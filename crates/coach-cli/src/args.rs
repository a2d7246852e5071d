use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::cli::GoalCommands;

/// Track fitness goals and work through a plan of them
///
/// Goals live in a local SQLite catalog. A session keeps an ordered plan of
/// catalog goals in memory and reads plan commands from standard input, one
/// per line.
#[derive(Parser)]
#[command(version, about, name = "coach")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/coach/coach.db
    #[arg(long, global = true, env = "COACH_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Coach CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage goals in the catalog
    #[command(alias = "g")]
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Build a plan interactively, reading commands from stdin
    #[command(alias = "s")]
    Session(SessionArgs),
}

/// Start a plan session
#[derive(ClapArgs)]
pub struct SessionArgs {
    /// Goals to add to the plan before reading commands, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub goals: Vec<String>,
}
