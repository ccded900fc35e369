//! Check command executor

use console::style;
use miette::{Result, WrapErr};

use super::interactive_progress;
use crate::analyzer::{PlanAnalyzer, PlanVerdict};
use crate::cli::OutputFormat;
use crate::config::CheckConfig;
use crate::error::ScheduleError;
use crate::executors::CommandExecutor;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

pub struct CheckExecutor;

impl CheckExecutor {
    /// Render `verdicts` in the requested format
    pub fn generate_report(
        format: OutputFormat,
        max_cycles: Option<usize>,
        verdicts: &[PlanVerdict],
    ) -> Result<String, ScheduleError> {
        match format {
            OutputFormat::Human => HumanReportGenerator::new(max_cycles).generate_report(verdicts),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(verdicts),
            OutputFormat::Junit => JunitReportGenerator::new().generate_report(verdicts),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(verdicts),
        }
    }

    /// Whether the run must end with a non-zero exit code
    pub fn should_fail(config: &CheckConfig, verdicts: &[PlanVerdict]) -> bool {
        verdicts.iter().any(|verdict| !verdict.passed())
            || (config.error_on_cycles && verdicts.iter().any(|verdict| !verdict.can_finish()))
    }
}

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let strategy_names = config
            .strategies
            .iter()
            .map(|strategy| strategy.name())
            .collect::<Vec<_>>()
            .join(" + ");
        eprintln!(
            "{} Checking course plans with {}...\n",
            style("📚").cyan(),
            style(strategy_names).bold()
        );

        let mut progress = interactive_progress();

        let mut analyzer = PlanAnalyzer::new();
        analyzer
            .discover_plans(&config.paths, &config.include, progress.as_mut())
            .wrap_err("Failed to discover course plans")?;

        if analyzer.plans().is_empty() {
            eprintln!("{} No course plans found to check", style("ℹ").blue());
            return Ok(());
        }

        let verdicts = analyzer
            .evaluate(&config.strategies, progress.as_mut())
            .wrap_err("Failed to evaluate course plans")?;

        let report = Self::generate_report(config.format, config.max_cycles, &verdicts)
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        if Self::should_fail(&config, &verdicts) {
            std::process::exit(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::checker::Strategy;
    use crate::common::ConfigBuilder;
    use crate::core::CourseSchedule;
    use crate::plan::CoursePlan;

    fn config(error_on_cycles: bool) -> CheckConfig {
        CheckConfig::builder()
            .with_paths(vec![PathBuf::from(".")])
            .with_include(vec![])
            .with_strategies(Strategy::ALL.to_vec())
            .with_format(OutputFormat::Human)
            .with_error_on_cycles(error_on_cycles)
            .with_max_cycles(None)
            .build()
            .unwrap()
    }

    fn verdict(pairs: &[(usize, usize)], expect: Option<bool>) -> PlanVerdict {
        let plan = CoursePlan::new("plan", CourseSchedule::from_pairs(2, pairs).unwrap())
            .with_expect(expect);
        PlanVerdict::evaluate(&plan, &Strategy::ALL).unwrap()
    }

    #[test]
    fn test_expected_cycle_only_fails_with_error_on_cycles() {
        let verdicts = vec![verdict(&[(1, 0), (0, 1)], Some(false))];

        assert!(!CheckExecutor::should_fail(&config(false), &verdicts));
        assert!(CheckExecutor::should_fail(&config(true), &verdicts));
    }

    #[test]
    fn test_expectation_mismatch_always_fails() {
        let verdicts = vec![verdict(&[(1, 0)], Some(false))];

        assert!(CheckExecutor::should_fail(&config(false), &verdicts));
    }

    #[test]
    fn test_every_format_renders() {
        let verdicts = vec![verdict(&[(1, 0), (0, 1)], None)];

        for format in [
            OutputFormat::Human,
            OutputFormat::Json,
            OutputFormat::Junit,
            OutputFormat::GitHub,
        ] {
            let report = CheckExecutor::generate_report(format, None, &verdicts).unwrap();
            assert!(!report.is_empty(), "{format:?} produced an empty report");
        }
    }
}
