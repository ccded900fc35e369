//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow commands

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::analyzer::{BenchResult, PlanVerdict};
use crate::error::ScheduleError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from plan verdicts
    fn generate_report(&self, verdicts: &[PlanVerdict]) -> Result<String, ScheduleError>;
}

/// Report generators that can also present timing results
pub trait BenchReportGenerator {
    fn generate_bench_report(&self, results: &[BenchResult]) -> Result<String, ScheduleError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;
