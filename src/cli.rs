use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs, StrategyArgs};

#[derive(Parser)]
#[command(
    name = "course-schedule",
    about = "📚 Decide whether a set of courses with prerequisites can be finished",
    long_about = "course-schedule loads course plans (a course count and a list of \
                  [course, requires] pairs) and decides whether every course can be completed, \
                  which holds exactly when the prerequisite graph has no cycle. Two independent \
                  strategies, a depth-first search and Kahn's topological sort, can be run and \
                  cross-checked against each other.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check course plans for prerequisite cycles
    ///
    /// Loads every plan file found under the given paths and decides whether
    /// each schedule can be finished. Failing plans are explained by listing
    /// the courses that stay blocked and the cycles holding them.
    #[command(
        long_about = "Check course plans for prerequisite cycles. Plan files (TOML or JSON) are \
                      discovered under the given paths, validated, and evaluated with the \
                      selected strategy. With --strategy all (the default) both strategies run \
                      and must agree. Plans that declare an `expect` verdict are compared \
                      against it, and any mismatch makes the command fail."
    )]
    Check {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        strategy: StrategyArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if any plan cannot be finished
        #[arg(long, env = "COURSE_SCHEDULE_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Draw the prerequisite graph of a plan
    ///
    /// Renders one plan as ASCII art, a Mermaid diagram or a Graphviz DOT
    /// file, highlighting the courses and prerequisites that form cycles.
    #[command(
        long_about = "Render the prerequisite graph of a single plan file. Every course becomes \
                      a node and every [course, requires] pair an edge pointing at the required \
                      course. Courses and edges that belong to a cycle are highlighted unless \
                      --highlight-cycles false is given."
    )]
    Graph {
        /// Plan file to render
        #[arg(value_name = "PLAN")]
        plan: PathBuf,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "ascii",
            env = "COURSE_SCHEDULE_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "COURSE_SCHEDULE_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value_t = true,
            action = ArgAction::Set,
            env = "COURSE_SCHEDULE_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },

    /// Time the checking strategies
    ///
    /// Runs every plan repeatedly with each selected strategy and reports the
    /// mean time per decision. Without paths the built-in reference plans are
    /// used.
    #[command(
        long_about = "Benchmark the checking strategies. Each plan is decided --iterations times \
                      per strategy and the mean time per decision is reported together with a \
                      pass/fail mark against the plan's expected verdict. When no path is given \
                      the built-in reference plans are timed."
    )]
    Bench {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        strategy: StrategyArgs,

        /// Number of decisions per plan and strategy
        #[arg(
            short = 'n',
            long,
            default_value = crate::constants::bench::DEFAULT_ITERATIONS,
            value_parser = clap::value_parser!(u32).range(1..),
            env = "COURSE_SCHEDULE_ITERATIONS"
        )]
        iterations: u32,

        /// Output format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_FORMAT,
            env = "COURSE_SCHEDULE_FORMAT"
        )]
        format: BenchFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum BenchFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_defaults() {
        let cli = Cli::try_parse_from(["course-schedule", "check", "plans"]).unwrap();
        let Commands::Check {
            common,
            format,
            strategy,
            cycle_display,
            error_on_cycles,
        } = cli.command
        else {
            panic!("expected check command");
        };

        assert_eq!(common.paths, vec![PathBuf::from("plans")]);
        assert_eq!(format.format, OutputFormat::Human);
        assert_eq!(strategy.strategy, crate::common::StrategyChoice::All);
        assert_eq!(cycle_display.max_cycles, None);
        assert!(!error_on_cycles);
    }

    #[test]
    fn test_graph_highlight_can_be_turned_off() {
        let cli = Cli::try_parse_from([
            "course-schedule",
            "graph",
            "plan.toml",
            "--format",
            "dot",
            "--highlight-cycles",
            "false",
        ])
        .unwrap();
        let Commands::Graph {
            format,
            highlight_cycles,
            ..
        } = cli.command
        else {
            panic!("expected graph command");
        };

        assert_eq!(format, GraphFormat::Dot);
        assert!(!highlight_cycles);
    }

    #[test]
    fn test_bench_rejects_zero_iterations() {
        assert!(Cli::try_parse_from(["course-schedule", "bench", "-n", "0"]).is_err());
    }
}
