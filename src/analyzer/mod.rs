//! # Plan Analysis Module
//!
//! Loads course plans from disk and turns them into verdicts.
//!
//! ## Key Components
//!
//! - **PlanAnalyzer**: discovers and parses plan files in parallel, then
//!   evaluates or times them
//! - **PlanVerdict**: per-strategy outcomes of one plan plus the blocked
//!   courses and cycles explaining a negative answer
//! - **BenchResult**: repeated timings of each strategy on one plan
//!
//! ## Example
//!
//! ```
//! use course_schedule::analyzer::PlanAnalyzer;
//! use course_schedule::checker::Strategy;
//! use course_schedule::core::CourseSchedule;
//! use course_schedule::plan::CoursePlan;
//!
//! # fn main() -> miette::Result<()> {
//! let mut analyzer = PlanAnalyzer::new();
//! analyzer.add_plan(CoursePlan::new(
//!     "mutual",
//!     CourseSchedule::from_pairs(2, &[(1, 0), (0, 1)])?,
//! ));
//!
//! let verdicts = analyzer.evaluate(&Strategy::ALL, None)?;
//! assert!(!verdicts[0].can_finish());
//! assert!(verdicts[0].is_consistent());
//! assert_eq!(verdicts[0].blocked_courses(), &[0, 1]);
//! # Ok(())
//! # }
//! ```

mod analyzer_impl;
mod bench;
mod verdict;

pub use analyzer_impl::*;
pub use bench::{BenchResult, StrategyTiming};
pub use verdict::{PlanVerdict, StrategyOutcome};
