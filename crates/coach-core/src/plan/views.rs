//! Read operations over the plan.

use std::cmp::Ordering;

use super::PlanManager;
use crate::{
    catalog::GoalCatalog,
    error::{CoachError, Result},
    models::{Goal, GoalRef},
};

impl<C: GoalCatalog> PlanManager<C> {
    /// Returns every goal in plan order, resolved through the cache.
    ///
    /// Ids not yet cached are fetched from the catalog and cached. The plan
    /// order is never changed.
    pub fn get_all_goals(&mut self) -> Result<Vec<Goal>> {
        self.check_if_empty()?;
        log::info!("Retrieving all {} goals in the plan", self.plan.len());

        let ids = self.plan.clone();
        ids.into_iter().map(|id| self.resolve_goal(id)).collect()
    }

    /// Returns one goal of the plan, resolved through the cache.
    ///
    /// # Errors
    ///
    /// [`CoachError::EmptyPlan`] first, then the failures of
    /// [`validate_goal_id`](Self::validate_goal_id) with `check_in_plan`.
    pub fn get_goal_by_id(&mut self, goal_id: impl Into<GoalRef>) -> Result<Goal> {
        self.check_if_empty()?;
        let goal = self.validated_goal(goal_id.into(), true)?;

        log::info!("Retrieving goal {} from the plan", goal.id);
        Ok(goal)
    }

    /// Number of goals in the plan. Zero is a valid answer.
    pub fn get_plan_length(&self) -> usize {
        let length = self.plan.len();
        log::info!("Plan length: {length} goals");
        length
    }

    /// Fraction of plan goals marked completed, in `[0, 1]`, rounded to three
    /// decimal places.
    ///
    /// Completion is read straight from the catalog rather than the cache, so
    /// goals completed since they were cached count. Each fresh snapshot
    /// replaces the cached one.
    pub fn get_plan_progress(&mut self) -> Result<f64> {
        self.check_if_empty()?;

        let total = self.plan.len();
        let mut completed = 0usize;

        for &id in &self.plan {
            let goal = match self.catalog.get_by_id(id)? {
                Some(goal) => goal,
                None => {
                    log::error!("Goal {id} in the plan no longer exists in the catalog");
                    return Err(CoachError::NotFound { id });
                }
            };
            if goal.completed {
                completed += 1;
            }
            self.cache.store(goal);
        }

        let progress = round_to_thousandths(completed as f64 / total as f64);
        log::info!("Plan progress: {completed}/{total} goals completed ({progress})");
        Ok(progress)
    }
}

/// Rounds to three decimals, resolving exact ties to the even neighbour so
/// `1/16` becomes `0.062` rather than `0.063`.
fn round_to_thousandths(value: f64) -> f64 {
    let scaled = value * 1000.0;
    let floor = scaled.floor();
    let rounded = match (scaled - floor).partial_cmp(&0.5) {
        Some(Ordering::Less) => floor,
        Some(Ordering::Greater) => floor + 1.0,
        _ if floor % 2.0 == 0.0 => floor,
        _ => floor + 1.0,
    };
    rounded / 1000.0
}

#[cfg(test)]
mod tests {
    use super::round_to_thousandths;

    #[test]
    fn test_round_to_thousandths() {
        assert_eq!(round_to_thousandths(0.5), 0.5);
        assert_eq!(round_to_thousandths(1.0 / 3.0), 0.333);
        assert_eq!(round_to_thousandths(2.0 / 3.0), 0.667);
        assert_eq!(round_to_thousandths(0.0), 0.0);
        assert_eq!(round_to_thousandths(1.0), 1.0);
    }

    #[test]
    fn test_round_to_thousandths_ties_to_even() {
        assert_eq!(round_to_thousandths(1.0 / 16.0), 0.062);
        assert_eq!(round_to_thousandths(3.0 / 16.0), 0.188);
        assert_eq!(round_to_thousandths(5.0 / 16.0), 0.312);
        assert_eq!(round_to_thousandths(0.0005), 0.0);
    }
}
