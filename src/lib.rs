//! # Course Schedule - Decide Whether Every Course Can Be Completed
//!
//! Given a number of courses labeled `0..n` and a list of prerequisite pairs
//! `(a, b)` meaning "course `a` requires course `b`", course-schedule decides
//! whether all courses can be finished. That holds exactly when the
//! prerequisite graph contains no directed cycle.
//!
//! ## Main Components
//!
//! - **Checker**: two interchangeable O(V + E) strategies, depth-first
//!   search and Kahn's topological sort
//! - **Plan**: TOML/JSON plan files and their discovery on disk
//! - **Analyzer**: evaluates and times plans, cross-checking the strategies
//! - **Detector**: explains a negative answer with the cycles (Tarjan's SCC)
//! - **Graph**: builds and renders the prerequisite graph
//! - **Reports**: human-readable and machine-readable output
//!
//! ## Usage
//!
//! ### Deciding a schedule
//!
//! ```
//! use course_schedule::{CourseSchedule, CycleChecker, Strategy, can_finish, cross_check};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Course 1 requires course 0
//! assert!(can_finish(2, &[(1, 0)])?);
//!
//! // Courses 0 and 1 require each other
//! assert!(!can_finish(2, &[(1, 0), (0, 1)])?);
//!
//! // Every strategy must agree
//! let schedule = CourseSchedule::from_pairs(3, &[(0, 1), (0, 2), (1, 2)])?;
//! assert!(cross_check(&schedule)?);
//! assert!(Strategy::Dfs.checker().can_finish(&schedule));
//! # Ok(())
//! # }
//! ```
//!
//! ### Explaining a blocked plan
//!
//! ```
//! use course_schedule::core::CourseSchedule;
//! use course_schedule::detector::CycleDetector;
//! use course_schedule::graph::CourseGraphBuilder;
//!
//! # fn main() -> miette::Result<()> {
//! let schedule = CourseSchedule::from_pairs(4, &[(1, 0), (2, 1), (1, 2), (3, 3)])?;
//!
//! let mut graph_builder = CourseGraphBuilder::new();
//! graph_builder.build_from_schedule(&schedule)?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(graph_builder.graph())?;
//!
//! assert_eq!(detector.cycle_count(), 2);
//! for cycle in detector.cycles() {
//!     println!("courses {:?}", cycle.courses());
//!     for edge in cycle.edges() {
//!         println!("  {edge}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Checking plan files
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use course_schedule::analyzer::PlanAnalyzer;
//! use course_schedule::checker::Strategy;
//! use course_schedule::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let mut analyzer = PlanAnalyzer::new();
//! analyzer.discover_plans(&[PathBuf::from("plans")], &[], None)?;
//!
//! let verdicts = analyzer.evaluate(&Strategy::ALL, None)?;
//! let report = HumanReportGenerator::new(Some(5)).generate_report(&verdicts)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod analyzer;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod fixtures;
pub mod graph;
pub mod plan;
pub mod progress;
pub mod reports;

pub use checker::{CycleChecker, Strategy, can_finish, cross_check};
pub use core::CourseSchedule;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
