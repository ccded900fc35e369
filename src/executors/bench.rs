//! Bench command executor

use console::style;
use miette::{Result, WrapErr};

use super::interactive_progress;
use crate::analyzer::{BenchResult, PlanAnalyzer};
use crate::cli::BenchFormat;
use crate::config::BenchConfig;
use crate::error::ScheduleError;
use crate::executors::CommandExecutor;
use crate::fixtures::builtin_plans;
use crate::reports::{BenchReportGenerator, HumanReportGenerator, JsonReportGenerator};
use crate::utils::string::pluralize;

pub struct BenchExecutor;

impl BenchExecutor {
    /// Load the plans `config` asks for
    pub fn load_plans(config: &BenchConfig) -> Result<PlanAnalyzer> {
        let mut analyzer = PlanAnalyzer::new();

        if config.uses_builtin_plans() {
            for plan in builtin_plans().wrap_err("Failed to build the built-in plans")? {
                analyzer.add_plan(plan);
            }
        } else {
            analyzer
                .discover_plans(&config.paths, &config.include, None)
                .wrap_err("Failed to discover course plans")?;
        }

        Ok(analyzer)
    }

    pub fn generate_report(
        format: BenchFormat,
        results: &[BenchResult],
    ) -> Result<String, ScheduleError> {
        match format {
            BenchFormat::Human => HumanReportGenerator::new(None).generate_bench_report(results),
            BenchFormat::Json => JsonReportGenerator::new().generate_bench_report(results),
        }
    }
}

impl CommandExecutor for BenchExecutor {
    type Config = BenchConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let analyzer = Self::load_plans(&config)?;

        if analyzer.plans().is_empty() {
            eprintln!("{} No course plans found to time", style("ℹ").blue());
            return Ok(());
        }

        eprintln!(
            "{} Timing {} {} with {}, {} {} each...",
            style("⏱").cyan(),
            analyzer.plans().len(),
            pluralize("plan", analyzer.plans().len()),
            config
                .strategies
                .iter()
                .map(|strategy| strategy.name())
                .collect::<Vec<_>>()
                .join(" + "),
            config.iterations,
            pluralize("iteration", config.iterations as usize)
        );

        let mut progress = interactive_progress();
        let results = analyzer.benchmark(&config.strategies, config.iterations, progress.as_mut());

        let report =
            Self::generate_report(config.format, &results).wrap_err("Failed to generate report")?;
        print!("{report}");

        if results.iter().any(|result| !result.passed()) {
            std::process::exit(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::checker::Strategy;
    use crate::common::ConfigBuilder;

    fn config(paths: Vec<std::path::PathBuf>) -> BenchConfig {
        BenchConfig::builder()
            .with_paths(paths)
            .with_include(vec![])
            .with_strategies(Strategy::ALL.to_vec())
            .with_iterations(2)
            .with_format(BenchFormat::Human)
            .build()
            .unwrap()
    }

    #[test]
    fn test_load_builtin_plans() {
        let analyzer = BenchExecutor::load_plans(&config(vec![])).unwrap();

        assert_eq!(analyzer.plans().len(), builtin_plans().unwrap().len());
    }

    #[test]
    fn test_load_plans_from_disk() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("one.toml"), "num_courses = 1\n").unwrap();

        let analyzer = BenchExecutor::load_plans(&config(vec![dir.path().to_path_buf()])).unwrap();

        assert_eq!(analyzer.plans().len(), 1);
        assert_eq!(analyzer.plans()[0].name(), "one");
    }

    #[test]
    fn test_builtin_plans_pass_bench() {
        let analyzer = BenchExecutor::load_plans(&config(vec![])).unwrap();
        let results = analyzer.benchmark(&Strategy::ALL, 1, None);

        assert!(results.iter().all(BenchResult::passed));

        let report = BenchExecutor::generate_report(BenchFormat::Json, &results).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(json["failed_count"], 0);
    }
}
