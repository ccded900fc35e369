//! Command executors that handle the actual logic for each command

pub mod bench;
pub mod check;
pub mod graph;

use miette::Result;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Progress reporter when stderr is an interactive terminal
pub(crate) fn interactive_progress() -> Option<crate::progress::ProgressReporter> {
    if console::Term::stderr().is_term() {
        Some(crate::progress::ProgressReporter::new())
    } else {
        None
    }
}
