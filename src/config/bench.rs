//! Bench command configuration

use std::path::PathBuf;

use crate::checker::Strategy;
use crate::cli::BenchFormat;

/// Configuration for the bench command
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Plan files or directories to time; empty selects the built-in plans
    pub paths: Vec<PathBuf>,
    pub include: Vec<String>,
    pub strategies: Vec<Strategy>,
    /// Decisions per plan and strategy
    pub iterations: u32,
    pub format: BenchFormat,
}

impl BenchConfig {
    pub fn uses_builtin_plans(&self) -> bool {
        self.paths.is_empty()
    }
}

crate::impl_builder!(BenchConfig, BenchConfigBuilder {
    with_paths => paths: Vec<PathBuf>,
    with_include => include: Vec<String>,
    with_strategies => strategies: Vec<Strategy>,
    with_iterations => iterations: u32,
    with_format => format: BenchFormat,
});
