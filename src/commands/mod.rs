//! Command implementations for the course-schedule CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: Decide and explain course plans
//! - graph: Render the prerequisite graph of one plan
//! - bench: Time the checking strategies

pub mod bench;
pub mod check;
pub mod graph;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Graph { .. } => graph::execute_graph_command(command),
        Commands::Bench { .. } => bench::execute_bench_command(command),
    }
}
