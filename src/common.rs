//! Common functionality shared across commands

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::checker::Strategy;

/// Common arguments shared by commands that load plan files
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Plan files or directories to search (defaults to current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Only load plan files whose path matches one of these glob patterns
    #[arg(long, value_name = "GLOB", env = "COURSE_SCHEDULE_INCLUDE")]
    pub include: Vec<String>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "COURSE_SCHEDULE_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Strategy selection arguments
#[derive(Args, Debug, Clone)]
pub struct StrategyArgs {
    /// Checking strategy to run
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_STRATEGY, env = "COURSE_SCHEDULE_STRATEGY")]
    pub strategy: StrategyChoice,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display per plan (shows all by default)
    #[arg(long, env = "COURSE_SCHEDULE_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

/// Strategy as selected on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    Dfs,
    Topological,
    /// Run every strategy and cross-check the verdicts
    All,
}

impl StrategyChoice {
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyChoice::Dfs => vec![Strategy::Dfs],
            StrategyChoice::Topological => vec![Strategy::Topological],
            StrategyChoice::All => Strategy::ALL.to_vec(),
        }
    }
}

impl CommonArgs {
    /// Get paths, using current directory if none provided
    pub fn get_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
        } else {
            self.paths.clone()
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::ScheduleError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::ScheduleError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::ScheduleError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro generating a `with_*` builder for a configuration struct
///
/// Every listed field is required; [`ConfigBuilder::build`] fails with a
/// `ConfigurationError` naming the first missing one.
#[macro_export]
macro_rules! impl_builder {
    ($config:ident, $builder:ident { $($setter:ident => $field:ident: $ty:ty),* $(,)? }) => {
        impl $config {
            pub fn builder() -> $builder {
                $builder::new()
            }
        }

        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::ScheduleError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::ScheduleError::ConfigurationError {
                                message: format!("Missing required field: {}", stringify!($field)),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}
