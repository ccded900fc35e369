//! Check command configuration

use std::path::PathBuf;

use crate::checker::Strategy;
use crate::cli::OutputFormat;

/// Configuration for the check command
///
/// This struct contains all options for discovering, deciding and reporting
/// course plans.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Plan files or directories to search
    pub paths: Vec<PathBuf>,
    /// Glob patterns a plan path must match (empty = all)
    pub include: Vec<String>,
    /// Strategies to run on every plan
    pub strategies: Vec<Strategy>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if any plan cannot be finished
    pub error_on_cycles: bool,
    /// Maximum number of cycles to report per plan (None = all)
    pub max_cycles: Option<usize>,
}

crate::impl_builder!(CheckConfig, CheckConfigBuilder {
    with_paths => paths: Vec<PathBuf>,
    with_include => include: Vec<String>,
    with_strategies => strategies: Vec<Strategy>,
    with_format => format: OutputFormat,
    with_error_on_cycles => error_on_cycles: bool,
    with_max_cycles => max_cycles: Option<usize>,
});
