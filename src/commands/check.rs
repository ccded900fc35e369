//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::ScheduleError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, ScheduleError> {
        match command {
            Commands::Check {
                common,
                format,
                strategy,
                cycle_display,
                error_on_cycles,
            } => CheckConfig::builder()
                .with_paths(common.get_paths())
                .with_include(common.include)
                .with_strategies(strategy.strategy.strategies())
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(ScheduleError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command for deciding course plans
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
