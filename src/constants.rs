//! Configuration constants for course-schedule
//!
//! This module contains the limits of the input contract and the tunables
//! used by the command-line front end.

use std::time::Duration;

/// Input contract limits
pub mod limits {
    /// Largest accepted `num_courses`
    pub const MAX_COURSES: usize = 2000;

    /// Largest accepted number of prerequisite pairs
    pub const MAX_PREREQUISITES: usize = 5000;
}

/// Plan file discovery
pub mod plans {
    /// File extensions recognised as plan files
    pub const EXTENSIONS: &[&str] = &["toml", "json"];

    /// Directories never descended into during discovery
    pub const SKIPPED_DIRS: &[&str] = &["target", ".git", "node_modules"];
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while scanning for plans
    pub const SPINNER_FRAMES: &[&str] = &["📕", "📙", "📒", "📗", "📘", "📓", "📔", "📚"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default strategy selection when not specified
    pub const DEFAULT_STRATEGY: &str = "all";
}

/// Timing harness configuration
pub mod bench {
    /// Calls per strategy and plan when `--iterations` is not given
    pub const DEFAULT_ITERATIONS: &str = "100";
}
