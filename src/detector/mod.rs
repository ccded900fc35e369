//! # Cycle Detection Module
//!
//! Explains *why* a schedule cannot be finished by listing the groups of
//! courses that require each other.
//!
//! ## Algorithm
//!
//! Tarjan's Strongly Connected Components algorithm finds every component of
//! the prerequisite graph in O(V + E). A component is a cycle when it holds
//! more than one course, or a single course listed as its own prerequisite.
//!
//! ## Example
//!
//! ```
//! use course_schedule::core::CourseSchedule;
//! use course_schedule::detector::CycleDetector;
//! use course_schedule::graph::CourseGraphBuilder;
//!
//! # fn main() -> miette::Result<()> {
//! let schedule = CourseSchedule::from_pairs(3, &[(1, 0), (2, 0), (0, 2)])?;
//!
//! let mut builder = CourseGraphBuilder::new();
//! builder.build_from_schedule(&schedule)?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(builder.graph())?;
//!
//! assert_eq!(detector.cycle_count(), 1);
//! assert_eq!(detector.cycles()[0].courses(), &[0, 2]);
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
