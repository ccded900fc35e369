//! Bench command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::BenchConfig;
use crate::error::ScheduleError;

impl FromCommand for BenchConfig {
    fn from_command(command: Commands) -> Result<Self, ScheduleError> {
        match command {
            Commands::Bench {
                common,
                strategy,
                iterations,
                format,
            } => BenchConfig::builder()
                // no paths means the built-in plans, not the current directory
                .with_paths(common.paths)
                .with_include(common.include)
                .with_strategies(strategy.strategy.strategies())
                .with_iterations(iterations)
                .with_format(format)
                .build(),
            _ => Err(ScheduleError::ConfigurationError {
                message: "Invalid command type for BenchConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(BenchConfig);

/// Execute the bench command for timing the strategies
pub fn execute_bench_command(command: Commands) -> Result<()> {
    let config = BenchConfig::from_command(command)
        .wrap_err("Failed to parse bench command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::bench::BenchExecutor;
    BenchExecutor::execute(config)
}
