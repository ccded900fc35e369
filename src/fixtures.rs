//! Built-in reference plans
//!
//! Small schedules with known verdicts, used by `bench` when no plan files
//! are given and by the test suites.

use crate::core::{CourseId, CourseSchedule};
use crate::error::ScheduleError;
use crate::plan::CoursePlan;

/// Every built-in plan, each carrying its expected verdict
pub fn builtin_plans() -> Result<Vec<CoursePlan>, ScheduleError> {
    let plans = [
        ("single-prerequisite", 2, vec![(1, 0)], true),
        ("mutual-dependency", 2, vec![(1, 0), (0, 1)], false),
        ("diamond", 5, vec![(1, 4), (2, 4), (3, 1), (3, 2)], true),
        (
            "forest",
            8,
            vec![(1, 0), (2, 6), (1, 7), (6, 4), (7, 0), (0, 5)],
            true,
        ),
        (
            "self-loop",
            20,
            vec![
                (0, 10),
                (3, 18),
                (5, 5),
                (6, 11),
                (11, 14),
                (13, 1),
                (15, 1),
                (17, 4),
            ],
            false,
        ),
        ("cycle-with-tail", 3, vec![(1, 0), (2, 0), (0, 2)], false),
        ("shared-prerequisite-cycle", 3, vec![(1, 0), (1, 2), (0, 1)], false),
        ("redundant-chain", 100, redundant_chain(100), true),
    ];

    plans
        .into_iter()
        .map(|(name, num_courses, pairs, expect)| -> Result<_, ScheduleError> {
            Ok(CoursePlan::new(name, CourseSchedule::from_pairs(num_courses, &pairs)?)
                .with_expect(Some(expect)))
        })
        .collect()
}

/// Chain where every course requires the two before it, except the last,
/// which skips its direct predecessor
fn redundant_chain(num_courses: usize) -> Vec<(CourseId, CourseId)> {
    let last = num_courses - 1;
    let mut pairs = vec![(1, 0)];
    for course in 2..last {
        pairs.push((course, course - 2));
        pairs.push((course, course - 1));
    }
    pairs.push((last, last - 2));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_plans_are_valid() {
        let plans = builtin_plans().unwrap();

        assert_eq!(plans.len(), 8);
        assert!(plans.iter().all(|plan| plan.expect().is_some()));
        assert!(plans.iter().all(|plan| plan.path().is_none()));
    }

    #[test]
    fn test_redundant_chain_shape() {
        let pairs = redundant_chain(100);

        assert_eq!(pairs.len(), 196);
        assert_eq!(pairs[..3], [(1, 0), (2, 0), (2, 1)]);
        assert_eq!(pairs.last(), Some(&(99, 97)));
    }
}
