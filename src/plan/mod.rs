//! # Plan Files
//!
//! A plan file describes one schedule in TOML or JSON:
//!
//! ```toml
//! name = "mutual-dependency"   # optional, defaults to the file stem
//! num_courses = 2
//! prerequisites = [[1, 0], [0, 1]]
//! expect = false               # optional expected verdict
//! ```
//!
//! [`parse_plan_file`] reads and validates one file; [`PlanDiscovery`] finds
//! plan files below a set of paths.

mod discovery;
mod parser;

use std::path::{Path, PathBuf};

pub use discovery::PlanDiscovery;
pub use parser::{PlanFormat, parse_plan_file, parse_plan_str};
use serde::Deserialize;

use crate::core::CourseSchedule;

/// Raw contents of a plan file, before validation
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    pub name: Option<String>,
    pub num_courses: i64,
    #[serde(default)]
    pub prerequisites: Vec<Vec<i64>>,
    pub expect: Option<bool>,
}

/// A named, validated schedule, optionally carrying the verdict it is
/// expected to produce
#[derive(Debug, Clone)]
pub struct CoursePlan {
    name: String,
    path: Option<PathBuf>,
    schedule: CourseSchedule,
    expect: Option<bool>,
}

impl CoursePlan {
    pub fn new(name: impl Into<String>, schedule: CourseSchedule) -> Self {
        Self {
            name: name.into(),
            path: None,
            schedule,
            expect: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_expect(mut self, expect: Option<bool>) -> Self {
        self.expect = expect;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source file, `None` for built-in plans
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn schedule(&self) -> &CourseSchedule {
        &self.schedule
    }

    pub fn expect(&self) -> Option<bool> {
        self.expect
    }

    /// Where the plan came from, for reports
    pub fn origin(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<built-in>".to_string(),
        }
    }
}
