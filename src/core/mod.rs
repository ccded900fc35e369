//! Core data types and structures
//!
//! This module contains the fundamental course and schedule types used
//! throughout course-schedule, separated from the checking algorithms.

pub mod types;

pub use types::*;
