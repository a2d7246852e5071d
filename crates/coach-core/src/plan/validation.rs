//! Identifier validation and emptiness checks.
//!
//! [`PlanManager::validate_goal_id`] is the single place the three identifier
//! failures are raised, always in this order: malformed id
//! ([`CoachError::InvalidId`]), id absent from the plan
//! ([`CoachError::NotInPlan`], only when asked), id unknown to the catalog
//! ([`CoachError::NotFound`]).

use super::PlanManager;
use crate::{
    catalog::GoalCatalog,
    error::{CoachError, Result},
    models::{Goal, GoalRef},
};

impl<C: GoalCatalog> PlanManager<C> {
    /// Validates a goal identifier and returns it as an integer id.
    ///
    /// With `check_in_plan` the id must also be present in the plan. The id
    /// is always resolved through the cache or the catalog, whether or not
    /// it is in the plan.
    pub fn validate_goal_id(
        &mut self,
        goal_id: impl Into<GoalRef>,
        check_in_plan: bool,
    ) -> Result<u64> {
        self.validated_goal(goal_id.into(), check_in_plan)
            .map(|goal| goal.id)
    }

    /// Runs the [`validate_goal_id`](Self::validate_goal_id) checks and
    /// returns the goal resolved on the way, so callers needing the goal
    /// resolve it once.
    pub(crate) fn validated_goal(
        &mut self,
        goal_ref: GoalRef,
        check_in_plan: bool,
    ) -> Result<Goal> {
        let id = goal_ref.to_id().map_err(|e| {
            log::error!("Invalid goal id: {goal_ref}");
            e
        })?;

        if check_in_plan && !self.plan.contains(&id) {
            log::error!("Goal with id {id} not found in plan");
            return Err(CoachError::NotInPlan { id });
        }

        self.resolve_goal(id)
    }

    /// Succeeds when the plan has at least one goal, otherwise fails with
    /// [`CoachError::EmptyPlan`].
    pub fn check_if_empty(&self) -> Result<()> {
        if self.plan.is_empty() {
            log::error!("Plan is empty");
            return Err(CoachError::EmptyPlan);
        }
        Ok(())
    }
}
