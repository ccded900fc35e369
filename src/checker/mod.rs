//! # Cycle Checking Module
//!
//! Decides whether every course of a [`CourseSchedule`] can be completed,
//! which holds exactly when the prerequisite graph has no directed cycle
//! (self-loops included).
//!
//! ## Strategies
//!
//! - **DfsChecker**: depth-first traversal with an explicit stack and a
//!   tri-state marker per course. A course reached again while still on the
//!   active path closes a cycle.
//! - **TopologicalChecker**: Kahn's algorithm. Courses with no unresolved
//!   prerequisites are released one by one; the schedule can finish iff every
//!   course is eventually released.
//!
//! Both run in O(V + E) and implement [`CycleChecker`], so they are
//! interchangeable and can be cross-checked against each other.
//!
//! ## Example
//!
//! ```
//! use course_schedule::checker::{CycleChecker, DfsChecker, Strategy, TopologicalChecker};
//! use course_schedule::core::CourseSchedule;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Course 3 needs 1 and 2, which both need 4
//! let diamond = CourseSchedule::from_pairs(5, &[(1, 4), (2, 4), (3, 1), (3, 2)])?;
//! assert!(DfsChecker.can_finish(&diamond));
//! assert!(TopologicalChecker.can_finish(&diamond));
//!
//! // Two courses requiring each other can never be finished
//! let mutual = CourseSchedule::from_pairs(2, &[(1, 0), (0, 1)])?;
//! for strategy in Strategy::ALL {
//!     assert!(!strategy.checker().can_finish(&mutual));
//! }
//! # Ok(())
//! # }
//! ```

mod dfs;
mod topological;

pub use dfs::DfsChecker;
pub use topological::TopologicalChecker;

use serde::Serialize;

use crate::core::{CourseId, CourseSchedule};
use crate::error::ScheduleError;

/// Capability shared by every cycle checking strategy
pub trait CycleChecker: Send + Sync {
    /// The strategy this checker implements
    fn strategy(&self) -> Strategy;

    /// Returns `true` iff all courses of the schedule can be completed
    fn can_finish(&self, schedule: &CourseSchedule) -> bool;
}

/// Available checking strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Dfs,
    Topological,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Dfs, Strategy::Topological];

    pub fn checker(self) -> Box<dyn CycleChecker> {
        match self {
            Strategy::Dfs => Box::new(DfsChecker),
            Strategy::Topological => Box::new(TopologicalChecker),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Dfs => "dfs",
            Strategy::Topological => "topological",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validate the input and decide it with the topological strategy
pub fn can_finish(
    num_courses: usize,
    prerequisites: &[(CourseId, CourseId)],
) -> Result<bool, ScheduleError> {
    let schedule = CourseSchedule::from_pairs(num_courses, prerequisites)?;
    Ok(TopologicalChecker.can_finish(&schedule))
}

/// Run every strategy on the schedule and return the common verdict
///
/// Fails with [`ScheduleError::StrategyDisagreement`] if two strategies
/// return different answers.
pub fn cross_check(schedule: &CourseSchedule) -> Result<bool, ScheduleError> {
    let verdicts: Vec<(Strategy, bool)> = Strategy::ALL
        .iter()
        .map(|strategy| (*strategy, strategy.checker().can_finish(schedule)))
        .collect();

    reconcile(&verdicts)
}

/// Common verdict of several strategies
///
/// Fails with [`ScheduleError::StrategyDisagreement`] listing every
/// `strategy=verdict` pair when they differ. No verdicts at all count as
/// agreeing on `true`.
pub fn reconcile(verdicts: &[(Strategy, bool)]) -> Result<bool, ScheduleError> {
    let Some(&(_, first)) = verdicts.first() else {
        return Ok(true);
    };
    if verdicts.iter().all(|(_, verdict)| *verdict == first) {
        return Ok(first);
    }

    let details = verdicts
        .iter()
        .map(|(strategy, verdict)| format!("{strategy}={verdict}"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(ScheduleError::StrategyDisagreement { details })
}
