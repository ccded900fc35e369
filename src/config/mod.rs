//! # Configuration Module
//!
//! Configuration structures for every course-schedule command. Each struct
//! gets a builder from the [`impl_builder!`](crate::impl_builder) macro with
//! one `with_*` method per field; every field is required.
//!
//! ## Command Configurations
//!
//! - **CheckConfig**: the `check` command
//! - **GraphOptions**: the `graph` command
//! - **BenchConfig**: the `bench` command
//!
//! ## Example
//!
//! ```
//! use course_schedule::checker::Strategy;
//! use course_schedule::cli::{GraphFormat, OutputFormat};
//! use course_schedule::common::ConfigBuilder;
//! use course_schedule::config::{CheckConfig, GraphOptions};
//!
//! # fn main() -> Result<(), course_schedule::error::ScheduleError> {
//! let check = CheckConfig::builder()
//!     .with_paths(vec!["plans".into()])
//!     .with_include(vec![])
//!     .with_strategies(Strategy::ALL.to_vec())
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .with_max_cycles(None)
//!     .build()?;
//! assert_eq!(check.strategies.len(), 2);
//!
//! // Leaving a field out is a configuration error
//! let incomplete = GraphOptions::builder()
//!     .with_plan("plans/diamond.toml".into())
//!     .with_format(GraphFormat::Dot)
//!     .build();
//! assert!(incomplete.is_err());
//! # Ok(())
//! # }
//! ```

pub mod bench;
pub mod check;
pub mod graph;

pub use bench::BenchConfig;
pub use check::CheckConfig;
pub use graph::GraphOptions;
