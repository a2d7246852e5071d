//! Property tests for plan membership.
//!
//! Random sequences of add, remove and clear run against an in-memory
//! catalog. After every step the plan must hold no duplicate id and its
//! length must match the ids it reports. Every successful add or remove
//! changes the length by exactly one, and every rejected request leaves the
//! plan untouched.

use std::collections::HashSet;

use coach_core::{CoachError, Goal, MemoryCatalog, PlanManager};
use jiff::Timestamp;
use proptest::prelude::*;

/// Ids present in the catalog. Generated ids also cover 0, 6 and 7, which
/// the catalog does not know.
const CATALOG_IDS: [u64; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Clone)]
enum PlanOp {
    Add(u64),
    Remove(u64),
    Clear,
}

fn arb_plan_op() -> impl Strategy<Value = PlanOp> {
    prop_oneof![
        4 => (0u64..8).prop_map(PlanOp::Add),
        3 => (0u64..8).prop_map(PlanOp::Remove),
        1 => Just(PlanOp::Clear),
    ]
}

fn catalog() -> MemoryCatalog {
    CATALOG_IDS
        .iter()
        .map(|&id| Goal {
            id,
            target: format!("target {id}"),
            goal_value: 10.0,
            goal_progress: 0.0,
            completed: id % 2 == 0,
            progress_notes: vec![],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: membership stays duplicate-free and length-consistent for
    /// any sequence of requests
    #[test]
    fn prop_plan_membership_invariants(ops in prop::collection::vec(arb_plan_op(), 0..60)) {
        let mut plan = PlanManager::new(catalog());

        for op in ops {
            let before = plan.goal_ids().to_vec();

            match op {
                PlanOp::Add(id) => match plan.add_goal(id) {
                    Ok(()) => {
                        prop_assert!(!before.contains(&id));
                        prop_assert_eq!(plan.get_plan_length(), before.len() + 1);
                        prop_assert_eq!(plan.goal_ids().last(), Some(&id));
                    }
                    Err(CoachError::DuplicateEntry { id: duplicate }) => {
                        prop_assert_eq!(duplicate, id);
                        prop_assert!(before.contains(&id));
                        prop_assert_eq!(plan.goal_ids(), &before[..]);
                    }
                    Err(CoachError::NotFound { .. }) => {
                        prop_assert!(!CATALOG_IDS.contains(&id));
                        prop_assert_eq!(plan.goal_ids(), &before[..]);
                    }
                    Err(e) => {
                        return Err(TestCaseError::fail(format!("unexpected add failure: {e}")));
                    }
                },
                PlanOp::Remove(id) => match plan.remove_goal(id) {
                    Ok(()) => {
                        let expected: Vec<u64> =
                            before.iter().copied().filter(|&member| member != id).collect();
                        prop_assert_eq!(plan.get_plan_length() + 1, before.len());
                        prop_assert_eq!(plan.goal_ids(), &expected[..]);
                    }
                    Err(CoachError::EmptyPlan) => {
                        prop_assert!(before.is_empty());
                        prop_assert!(plan.goal_ids().is_empty());
                    }
                    Err(CoachError::NotInPlan { .. }) => {
                        prop_assert!(!before.contains(&id));
                        prop_assert_eq!(plan.goal_ids(), &before[..]);
                    }
                    Err(e) => {
                        return Err(TestCaseError::fail(format!("unexpected remove failure: {e}")));
                    }
                },
                PlanOp::Clear => {
                    plan.clear_plan();
                    prop_assert_eq!(plan.get_plan_length(), 0);
                }
            }

            let ids = plan.goal_ids();
            let distinct: HashSet<&u64> = ids.iter().collect();
            prop_assert_eq!(distinct.len(), ids.len());
            prop_assert_eq!(plan.get_plan_length(), ids.len());
        }
    }

    /// Property: adding the same id twice always fails the second time and
    /// leaves the plan as the first add left it
    #[test]
    fn prop_duplicate_add_is_rejected(
        prefix in prop::collection::vec(1u64..=5, 0..5),
        id in 1u64..=5,
    ) {
        let mut plan = PlanManager::new(catalog());
        for member in prefix {
            let _ = plan.add_goal(member);
        }
        let _ = plan.add_goal(id);
        let after_first = plan.goal_ids().to_vec();

        let is_duplicate = matches!(
            plan.add_goal(id),
            Err(CoachError::DuplicateEntry { id: duplicate }) if duplicate == id
        );
        prop_assert!(is_duplicate);
        prop_assert_eq!(plan.goal_ids(), &after_first[..]);
    }
}
