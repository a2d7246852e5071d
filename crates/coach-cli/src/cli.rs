//! Catalog commands: clap argument wrappers and their handlers.
//!
//! Each argument struct carries the clap derives and converts into a core
//! parameter type with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Catalog
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use coach_core::{
    params::{AddProgressNote, CreateGoal, Id, ListGoals, UpdateGoal},
    CoachError, CreateResult, Database, DeleteResult, GoalFilter, Goals, OperationStatus,
    UpdateResult,
};

use crate::renderer::TerminalRenderer;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a goal to the catalog
    #[command(alias = "c")]
    Create(CreateGoalArgs),
    /// List goals in the catalog
    #[command(aliases = ["l", "ls"])]
    List(ListGoalsArgs),
    /// Show one goal in full
    #[command(alias = "s")]
    Show(ShowGoalArgs),
    /// Change fields of a goal
    #[command(alias = "u")]
    Update(UpdateGoalArgs),
    /// Append a progress note to a goal
    #[command(alias = "n")]
    Note(NoteArgs),
    /// Delete a goal permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteGoalArgs),
    /// Delete every goal in the catalog
    Reset(ResetArgs),
}

/// Add a goal to the catalog
#[derive(Args)]
pub struct CreateGoalArgs {
    /// Muscle group or category the goal targets
    pub target: String,
    /// Target magnitude, such as a weight or a repetition count
    #[arg(short = 'v', long = "value")]
    pub goal_value: f64,
    /// Progress already made toward the value
    #[arg(short = 'p', long = "progress", default_value_t = 0.0)]
    pub goal_progress: f64,
    /// Mark the goal as already completed
    #[arg(long)]
    pub completed: bool,
}

impl From<CreateGoalArgs> for CreateGoal {
    fn from(val: CreateGoalArgs) -> Self {
        CreateGoal {
            target: val.target,
            goal_value: val.goal_value,
            goal_progress: val.goal_progress,
            completed: val.completed,
        }
    }
}

/// List goals in the catalog
#[derive(Args)]
pub struct ListGoalsArgs {
    /// Only goals on this target (case-insensitive)
    #[arg(short, long)]
    pub target: Option<String>,
    /// Only completed goals
    #[arg(long, conflicts_with = "pending")]
    pub completed: bool,
    /// Only goals not yet completed
    #[arg(long)]
    pub pending: bool,
    /// Order by target instead of by id
    #[arg(long)]
    pub sort_by_target: bool,
}

impl From<ListGoalsArgs> for ListGoals {
    fn from(val: ListGoalsArgs) -> Self {
        let completed = match (val.completed, val.pending) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        ListGoals {
            target: val.target,
            completed,
            sort_by_target: val.sort_by_target,
        }
    }
}

/// Show one goal in full
#[derive(Args)]
pub struct ShowGoalArgs {
    /// ID of the goal to display
    pub id: u64,
}

impl From<ShowGoalArgs> for Id {
    fn from(val: ShowGoalArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change fields of a goal
#[derive(Args)]
pub struct UpdateGoalArgs {
    /// ID of the goal to update
    pub id: u64,
    /// New target
    #[arg(short, long)]
    pub target: Option<String>,
    /// New target magnitude
    #[arg(short = 'v', long = "value")]
    pub goal_value: Option<f64>,
    /// New progress toward the value
    #[arg(short = 'p', long = "progress")]
    pub goal_progress: Option<f64>,
    /// Mark the goal completed (true) or not completed (false)
    #[arg(long)]
    pub completed: Option<bool>,
}

impl From<UpdateGoalArgs> for UpdateGoal {
    fn from(val: UpdateGoalArgs) -> Self {
        UpdateGoal {
            id: val.id,
            target: val.target,
            goal_value: val.goal_value,
            goal_progress: val.goal_progress,
            completed: val.completed,
        }
    }
}

/// Append a progress note to a goal
#[derive(Args)]
pub struct NoteArgs {
    /// ID of the goal to annotate
    pub id: u64,
    /// Note text
    pub note: String,
}

impl From<NoteArgs> for AddProgressNote {
    fn from(val: NoteArgs) -> Self {
        AddProgressNote {
            id: val.id,
            note: val.note,
        }
    }
}

/// Delete a goal permanently
#[derive(Args)]
pub struct DeleteGoalArgs {
    /// ID of the goal to delete
    pub id: u64,
}

impl From<DeleteGoalArgs> for Id {
    fn from(val: DeleteGoalArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete every goal in the catalog
#[derive(Args)]
pub struct ResetArgs {
    /// Confirm that every goal should be deleted
    #[arg(long)]
    pub confirm: bool,
}

/// Handlers for the catalog commands.
pub struct Cli {
    catalog: Database,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(catalog: Database, renderer: TerminalRenderer) -> Self {
        Self { catalog, renderer }
    }

    pub fn handle_goal_command(mut self, command: GoalCommands) -> Result<()> {
        match command {
            GoalCommands::Create(args) => self.create_goal(&args.into()),
            GoalCommands::List(args) => self.list_goals(&args.into()),
            GoalCommands::Show(args) => self.show_goal(&args.into()),
            GoalCommands::Update(args) => self.update_goal(args.into()),
            GoalCommands::Note(args) => self.add_note(&args.into()),
            GoalCommands::Delete(args) => self.delete_goal(&args.into()),
            GoalCommands::Reset(args) => self.reset_goals(args.confirm),
        }
    }

    fn create_goal(&mut self, params: &CreateGoal) -> Result<()> {
        let goal = self
            .catalog
            .create_goal(params)
            .context("Failed to create goal")?;
        self.renderer.show(&CreateResult::new(goal))
    }

    pub fn list_goals(&self, params: &ListGoals) -> Result<()> {
        let goals = self
            .catalog
            .list_goals(&GoalFilter::from(params))
            .context("Failed to list goals")?;
        self.renderer.show(&Goals(goals))
    }

    fn show_goal(&self, params: &Id) -> Result<()> {
        let goal = self
            .catalog
            .get_goal(params.id)?
            .ok_or(CoachError::NotFound { id: params.id })?;
        self.renderer.show(&goal)
    }

    fn update_goal(&mut self, params: UpdateGoal) -> Result<()> {
        let (id, request) = params.into_request();
        let changes = request.describe_changes();
        let goal = self.catalog.update_goal(id, request)?;
        self.renderer.show(&UpdateResult::with_changes(goal, changes))
    }

    fn add_note(&mut self, params: &AddProgressNote) -> Result<()> {
        let goal = self.catalog.add_progress_note(params.id, &params.note)?;
        self.renderer.show(&UpdateResult::with_changes(
            goal,
            vec!["Added progress note".to_string()],
        ))
    }

    fn delete_goal(&mut self, params: &Id) -> Result<()> {
        let goal = self
            .catalog
            .get_goal(params.id)?
            .ok_or(CoachError::NotFound { id: params.id })?;
        self.catalog.delete_goal(goal.id)?;
        self.renderer.show(&DeleteResult::new(goal))
    }

    fn reset_goals(&mut self, confirm: bool) -> Result<()> {
        if !confirm {
            bail!("Refusing to delete every goal without --confirm");
        }
        let removed = self.catalog.reset_goals()?;
        self.renderer.show(&OperationStatus::success(format!(
            "Removed {removed} goals from the catalog"
        )))
    }
}
