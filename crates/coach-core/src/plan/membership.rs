//! Plan mutations: adding, removing, clearing and reordering goals.

use super::PlanManager;
use crate::{
    catalog::GoalCatalog,
    error::{CoachError, Result},
    models::GoalRef,
};

impl<C: GoalCatalog> PlanManager<C> {
    /// Appends a goal to the end of the plan.
    ///
    /// # Errors
    ///
    /// - [`CoachError::InvalidId`] for a malformed id
    /// - [`CoachError::NotFound`] if the catalog has no such goal
    /// - [`CoachError::DuplicateEntry`] if the goal is already in the plan,
    ///   leaving the plan unchanged
    pub fn add_goal(&mut self, goal_id: impl Into<GoalRef>) -> Result<()> {
        let goal_ref = goal_id.into();
        log::info!("Received request to add goal {goal_ref} to the plan");

        let goal = self.validated_goal(goal_ref, false)?;
        let id = goal.id;

        if self.plan.contains(&id) {
            log::error!("Goal with id {id} already exists in the plan");
            return Err(CoachError::DuplicateEntry { id });
        }

        self.plan.push(id);

        log::info!("Added goal {id} ({}) to the plan", goal.target);
        Ok(())
    }

    /// Removes a goal from the plan. Later goals shift up by one; order is
    /// otherwise preserved.
    ///
    /// # Errors
    ///
    /// [`CoachError::EmptyPlan`] first, then the failures of
    /// [`validate_goal_id`](Self::validate_goal_id) with `check_in_plan`.
    pub fn remove_goal(&mut self, goal_id: impl Into<GoalRef>) -> Result<()> {
        let goal_ref = goal_id.into();
        log::info!("Received request to remove goal {goal_ref} from the plan");

        self.check_if_empty()?;
        let id = self.validate_goal_id(goal_ref, true)?;
        let index = self.position_of(id)?;

        self.plan.remove(index);
        log::info!("Removed goal {id} from the plan");
        Ok(())
    }

    /// Empties the plan. Clearing an already empty plan is not an error.
    ///
    /// Cached snapshots are kept; they live as long as the manager.
    pub fn clear_plan(&mut self) {
        log::info!("Received request to clear the plan");

        if self.plan.is_empty() {
            log::warn!("Clearing an empty plan");
        }

        self.plan.clear();
        log::info!("Cleared the plan");
    }

    /// Moves a goal to the front of the plan.
    pub fn move_goal_to_beginning(&mut self, goal_id: impl Into<GoalRef>) -> Result<()> {
        let id = self.validated_plan_member(goal_id.into())?;
        let index = self.position_of(id)?;

        self.plan.remove(index);
        self.plan.insert(0, id);

        log::info!("Moved goal {id} to the beginning of the plan");
        Ok(())
    }

    /// Moves a goal to the back of the plan.
    pub fn move_goal_to_end(&mut self, goal_id: impl Into<GoalRef>) -> Result<()> {
        let id = self.validated_plan_member(goal_id.into())?;
        let index = self.position_of(id)?;

        self.plan.remove(index);
        self.plan.push(id);

        log::info!("Moved goal {id} to the end of the plan");
        Ok(())
    }

    /// Moves a goal to a 1-based position in the plan.
    ///
    /// # Errors
    ///
    /// [`CoachError::InvalidPosition`] unless `1 <= position <= len`, in
    /// addition to the emptiness and identifier failures.
    pub fn move_goal_to_position(
        &mut self,
        goal_id: impl Into<GoalRef>,
        position: usize,
    ) -> Result<()> {
        let id = self.validated_plan_member(goal_id.into())?;

        let len = self.plan.len();
        if position == 0 || position > len {
            log::error!("Invalid plan position {position} for a plan of {len} goals");
            return Err(CoachError::InvalidPosition { position, len });
        }

        let index = self.position_of(id)?;
        self.plan.remove(index);
        self.plan.insert(position - 1, id);

        log::info!("Moved goal {id} to position {position}");
        Ok(())
    }

    /// Swaps the positions of two goals in the plan.
    ///
    /// # Errors
    ///
    /// [`CoachError::InvalidInput`] when both ids name the same goal, in
    /// addition to the emptiness and identifier failures.
    pub fn swap_goals(
        &mut self,
        first: impl Into<GoalRef>,
        second: impl Into<GoalRef>,
    ) -> Result<()> {
        let first = self.validated_plan_member(first.into())?;
        let second = self.validated_plan_member(second.into())?;

        if first == second {
            log::error!("Cannot swap goal {first} with itself");
            return Err(CoachError::invalid_input("goal_id")
                .with_reason(format!("Cannot swap goal {first} with itself")));
        }

        let a = self.position_of(first)?;
        let b = self.position_of(second)?;
        self.plan.swap(a, b);

        log::info!("Swapped goals {first} and {second}");
        Ok(())
    }

    fn validated_plan_member(&mut self, goal_ref: GoalRef) -> Result<u64> {
        self.check_if_empty()?;
        self.validate_goal_id(goal_ref, true)
    }

    fn position_of(&self, id: u64) -> Result<usize> {
        self.plan
            .iter()
            .position(|&member| member == id)
            .ok_or(CoachError::NotInPlan { id })
    }
}
