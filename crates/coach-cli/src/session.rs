//! Interactive plan session.
//!
//! A session owns one [`PlanManager`] for its whole lifetime and reads one
//! command per line from stdin. Every line is parsed with clap, so the
//! session has the same help and error output as the top-level CLI. Plan
//! errors are printed and the session keeps going. A failing catalog or an
//! I/O failure ends it with an error. End of input, `quit`, or Ctrl-C close
//! the session.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use coach_core::{
    display::PlanProgress, GoalCatalog, GoalRef, Goals, OperationStatus, PlanManager,
};
use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::renderer::TerminalRenderer;

/// One line of session input
#[derive(Parser)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Append a catalog goal to the plan
    #[command(alias = "a")]
    Add {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Remove a goal from the plan
    #[command(alias = "rm")]
    Remove {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Empty the plan
    Clear,
    /// List the goals in the plan, in order
    #[command(alias = "ls")]
    List,
    /// Show one goal of the plan
    Show {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Print the number of goals in the plan
    #[command(alias = "len")]
    Length,
    /// Print the share of plan goals that are completed
    Progress,
    /// Move a goal to the front of the plan
    First {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Move a goal to the back of the plan
    Last {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Move a goal to a 1-based position in the plan
    Move {
        #[arg(allow_hyphen_values = true)]
        id: String,
        position: usize,
    },
    /// Swap the positions of two goals
    Swap {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
    /// Drop the cached copy of one goal, or of every goal when no id is given
    Invalidate {
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },
    /// Show cache statistics
    Stats,
    /// List session commands
    Help,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

enum Reply {
    Show(String),
    Quit,
}

/// A plan session over a goal catalog.
pub struct Session<C> {
    plan: PlanManager<C>,
    renderer: TerminalRenderer,
}

impl<C: GoalCatalog> Session<C> {
    pub fn new(catalog: C, renderer: TerminalRenderer) -> Self {
        Self {
            plan: PlanManager::new(catalog),
            renderer,
        }
    }

    /// Adds the preloaded goals, then processes stdin until it is exhausted,
    /// a `quit` command arrives, or the user presses Ctrl-C.
    pub async fn run(mut self, preload: &[String]) -> Result<()> {
        info!("Session started");

        for id in preload {
            self.execute(SessionCommand::Add { id: id.clone() })?;
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = tokio::select! {
                line = lines.next_line() => line.context("Failed to read session input")?,
                _ = tokio::signal::ctrl_c() => {
                    info!("Session interrupted");
                    break;
                }
            };
            let Some(line) = line else { break };

            if !self.handle_line(&line)? {
                break;
            }
        }

        info!(
            "Session ended with {} goals in the plan",
            self.plan.goal_ids().len()
        );
        Ok(())
    }

    /// Parses and runs one input line. Returns `false` once the session
    /// should end.
    fn handle_line(&mut self, line: &str) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(true);
        }

        match SessionLine::try_parse_from(line.split_whitespace()) {
            Ok(SessionLine { command }) => self.execute(command),
            Err(e) => {
                self.renderer.render(&e.render().to_string())?;
                Ok(true)
            }
        }
    }

    fn execute(&mut self, command: SessionCommand) -> Result<bool> {
        match self.apply(command) {
            Ok(Reply::Show(output)) => {
                self.renderer.render(&output)?;
                Ok(true)
            }
            Ok(Reply::Quit) => Ok(false),
            Err(e) if e.is_plan_error() => {
                warn!("Session command rejected: {e}");
                self.renderer
                    .show(&OperationStatus::failure(e.to_string()))?;
                Ok(true)
            }
            Err(e) => {
                error!("Goal catalog failed, ending session: {e}");
                self.renderer
                    .show(&OperationStatus::failure(e.to_string()))?;
                Err(anyhow::Error::new(e).context("Goal catalog failed during the session"))
            }
        }
    }

    fn apply(&mut self, command: SessionCommand) -> coach_core::Result<Reply> {
        let output = match command {
            SessionCommand::Add { id } => {
                self.plan.add_goal(id.as_str())?;
                success(format!("Added goal {} to the plan", id.trim()))
            }
            SessionCommand::Remove { id } => {
                self.plan.remove_goal(id.as_str())?;
                success(format!("Removed goal {} from the plan", id.trim()))
            }
            SessionCommand::Clear => {
                self.plan.clear_plan();
                success("Cleared the plan".to_string())
            }
            SessionCommand::List => Goals(self.plan.get_all_goals()?).to_string(),
            SessionCommand::Show { id } => self.plan.get_goal_by_id(id.as_str())?.to_string(),
            SessionCommand::Length => {
                format!("Plan length: {}\n", self.plan.get_plan_length())
            }
            SessionCommand::Progress => {
                let fraction = self.plan.get_plan_progress()?;
                PlanProgress::new(fraction, self.plan.goal_ids().len()).to_string()
            }
            SessionCommand::First { id } => {
                self.plan.move_goal_to_beginning(id.as_str())?;
                success(format!("Moved goal {} to the beginning", id.trim()))
            }
            SessionCommand::Last { id } => {
                self.plan.move_goal_to_end(id.as_str())?;
                success(format!("Moved goal {} to the end", id.trim()))
            }
            SessionCommand::Move { id, position } => {
                self.plan.move_goal_to_position(id.as_str(), position)?;
                success(format!("Moved goal {} to position {position}", id.trim()))
            }
            SessionCommand::Swap { first, second } => {
                self.plan.swap_goals(first.as_str(), second.as_str())?;
                success(format!("Swapped goals {} and {}", first.trim(), second.trim()))
            }
            SessionCommand::Invalidate { id: Some(id) } => {
                let id = GoalRef::from(id).to_id()?;
                if self.plan.invalidate(id) {
                    success(format!("Dropped cached goal {id}"))
                } else {
                    success(format!("Goal {id} was not cached"))
                }
            }
            SessionCommand::Invalidate { id: None } => {
                self.plan.clear_cache();
                success("Cleared the goal cache".to_string())
            }
            SessionCommand::Stats => self.plan.cache_stats().to_string(),
            SessionCommand::Help => SessionLine::command().render_help().to_string(),
            SessionCommand::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Show(output))
    }
}

fn success(message: String) -> String {
    OperationStatus::success(message).to_string()
}

#[cfg(test)]
mod tests {
    use coach_core::{params::CreateGoal, CoachError, Database, Goal};

    use super::*;

    fn session_with_goals() -> Session<Database> {
        let mut db = Database::in_memory().unwrap();
        db.create_goal(&CreateGoal::new("biceps", 40.0)).unwrap();
        db.create_goal(&CreateGoal {
            completed: true,
            ..CreateGoal::new("triceps", 30.0)
        })
        .unwrap();
        Session::new(db, TerminalRenderer::new(false))
    }

    fn parse(line: &str) -> SessionCommand {
        SessionLine::try_parse_from(line.split_whitespace())
            .unwrap()
            .command
    }

    #[test]
    fn test_parse_session_commands() {
        assert!(matches!(parse("add 3"), SessionCommand::Add { id } if id == "3"));
        assert!(matches!(parse("remove -1"), SessionCommand::Remove { id } if id == "-1"));
        assert!(matches!(
            parse("move 2 1"),
            SessionCommand::Move { id, position: 1 } if id == "2"
        ));
        assert!(matches!(parse("invalidate"), SessionCommand::Invalidate { id: None }));
        assert!(matches!(parse("exit"), SessionCommand::Quit));
        assert!(SessionLine::try_parse_from(["move", "2", "first"]).is_err());
        assert!(SessionLine::try_parse_from(["dance"]).is_err());
    }

    #[test]
    fn test_lines_update_plan() {
        let mut session = session_with_goals();

        assert!(session.handle_line("add 1").unwrap());
        assert!(session.handle_line("  add 2  ").unwrap());
        assert!(session.handle_line("first 2").unwrap());
        assert_eq!(session.plan.goal_ids(), &[2, 1]);

        assert!(session.handle_line("swap 1 2").unwrap());
        assert_eq!(session.plan.goal_ids(), &[1, 2]);

        assert!(session.handle_line("remove 1").unwrap());
        assert_eq!(session.plan.goal_ids(), &[2]);
    }

    #[test]
    fn test_errors_keep_session_alive() {
        let mut session = session_with_goals();

        assert!(session.handle_line("remove 1").unwrap());
        assert!(session.handle_line("add abc").unwrap());
        assert!(session.handle_line("add 99").unwrap());
        assert!(session.handle_line("bogus").unwrap());
        assert!(session.handle_line("# comment").unwrap());
        assert!(session.handle_line("").unwrap());
        assert!(session.plan.goal_ids().is_empty());
    }

    /// A catalog whose store is unreachable.
    struct UnavailableCatalog;

    impl GoalCatalog for UnavailableCatalog {
        fn get_by_id(&self, _id: u64) -> coach_core::Result<Option<Goal>> {
            Err(CoachError::XdgDirectory("data directory unavailable".to_string()))
        }
    }

    #[test]
    fn test_catalog_failure_ends_session() {
        let mut session = Session::new(UnavailableCatalog, TerminalRenderer::new(false));

        // Rejected before the catalog is consulted
        assert!(session.handle_line("add abc").unwrap());
        assert!(session.handle_line("remove 1").unwrap());

        assert!(session.handle_line("add 1").is_err());
    }

    #[test]
    fn test_quit_ends_session() {
        let mut session = session_with_goals();
        assert!(!session.handle_line("quit").unwrap());
    }

    #[test]
    fn test_apply_reports_progress() {
        let mut session = session_with_goals();
        session.handle_line("add 1").unwrap();
        session.handle_line("add 2").unwrap();

        match session.apply(SessionCommand::Progress).unwrap() {
            Reply::Show(output) => assert!(output.contains("50.0% of 2 goals")),
            Reply::Quit => panic!("progress should not end the session"),
        }
    }
}
