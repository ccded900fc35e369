//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{BenchReportGenerator, ReportGenerator};
use crate::analyzer::{BenchResult, PlanVerdict};
use crate::error::ScheduleError;
use crate::utils::string::{format_duration, join_courses, pluralize};

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }

    fn write_verdict(&self, output: &mut String, verdict: &PlanVerdict) -> Result<(), ScheduleError> {
        let (icon, status) = if verdict.can_finish() {
            (style("✅").green().bold(), style("can be finished").green())
        } else {
            (style("❌").red().bold(), style("cannot be finished").red())
        };

        writeln!(
            output,
            "{} {} {}",
            icon,
            style(verdict.name()).bold(),
            status
        )?;
        writeln!(
            output,
            "  {} · {} {} · {} {} · {}",
            style(verdict.origin()).dim(),
            verdict.num_courses(),
            pluralize("course", verdict.num_courses()),
            verdict.num_prerequisites(),
            pluralize("prerequisite", verdict.num_prerequisites()),
            style(verdict.outcome_summary()).dim()
        )?;

        if !verdict.blocked_courses().is_empty() {
            writeln!(
                output,
                "  {} Blocked {}: {}",
                style("🚧").yellow(),
                pluralize("course", verdict.blocked_courses().len()),
                style(join_courses(verdict.blocked_courses())).yellow()
            )?;
        }

        let total_cycles = verdict.cycles().len();
        let shown = self.max_cycles.map_or(total_cycles, |limit| limit.min(total_cycles));

        for (i, cycle) in verdict.cycles().iter().take(shown).enumerate() {
            writeln!(
                output,
                "  {} Cycle #{}: {} {}",
                style("🔄").yellow(),
                i + 1,
                pluralize("course", cycle.len()),
                style(join_courses(cycle.courses())).bold()
            )?;
            for edge in cycle.edges() {
                writeln!(
                    output,
                    "      {} course {} requires course {}",
                    style("→").dim(),
                    style(edge.course).yellow(),
                    style(edge.requires).yellow()
                )?;
            }
        }

        if shown < total_cycles {
            writeln!(
                output,
                "  {} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(shown).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        for failure in verdict.failures() {
            writeln!(output, "  {} {}", style("✗").red().bold(), style(failure).red())?;
        }

        writeln!(output)?;
        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, verdicts: &[PlanVerdict]) -> Result<String, ScheduleError> {
        let mut output = String::new();

        if verdicts.is_empty() {
            writeln!(
                output,
                "\n{} No course plans to check.",
                style("ℹ️").blue()
            )?;
            return Ok(output);
        }

        writeln!(output)?;
        for verdict in verdicts {
            self.write_verdict(&mut output, verdict)?;
        }

        let blocked = verdicts.iter().filter(|v| !v.can_finish()).count();
        let failed = verdicts.iter().filter(|v| !v.passed()).count();

        if blocked == 0 {
            writeln!(
                output,
                "{} All {} {} can be finished.",
                style("✅").green().bold(),
                verdicts.len(),
                pluralize("plan", verdicts.len())
            )?;
        } else {
            writeln!(
                output,
                "{} {} of {} {} cannot be finished.",
                style("❌").red().bold(),
                style(blocked).red().bold(),
                verdicts.len(),
                pluralize("plan", verdicts.len())
            )?;
            writeln!(
                output,
                "{} Remove at least one prerequisite from each cycle to unblock a plan.",
                style("💡").yellow()
            )?;
        }

        if failed > 0 {
            writeln!(
                output,
                "{} {} {} failed verification.",
                style("✗").red().bold(),
                style(failed).red().bold(),
                pluralize("plan", failed)
            )?;
        }

        Ok(output)
    }
}

impl BenchReportGenerator for HumanReportGenerator {
    fn generate_bench_report(&self, results: &[BenchResult]) -> Result<String, ScheduleError> {
        let mut output = String::new();

        if results.is_empty() {
            writeln!(output, "\n{} No course plans to time.", style("ℹ️").blue())?;
            return Ok(output);
        }

        let name_width = results
            .iter()
            .map(|result| result.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("plan".len());

        writeln!(output)?;
        writeln!(
            output,
            "{:<name_width$}  {:<12}  {:>12}  {:<6}  result",
            "plan", "strategy", "mean", "verdict"
        )?;

        for result in results {
            let mark = if result.passed() {
                style("pass").green()
            } else {
                style("FAIL").red().bold()
            };
            for timing in &result.timings {
                writeln!(
                    output,
                    "{:<name_width$}  {:<12}  {:>12}  {:<6}  {}",
                    result.name,
                    timing.strategy.name(),
                    format_duration(timing.mean()),
                    timing.can_finish,
                    mark
                )?;
            }
        }

        let failed = results.iter().filter(|result| !result.passed()).count();
        writeln!(output)?;
        if failed == 0 {
            writeln!(
                output,
                "{} {} {} passed.",
                style("✅").green().bold(),
                results.len(),
                pluralize("plan", results.len())
            )?;
        } else {
            writeln!(
                output,
                "{} {} of {} {} failed.",
                style("❌").red().bold(),
                style(failed).red().bold(),
                results.len(),
                pluralize("plan", results.len())
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::analyzer::{StrategyOutcome, StrategyTiming};
    use crate::checker::Strategy;
    use crate::detector::CourseCycle;

    fn outcomes(can_finish: bool) -> Vec<StrategyOutcome> {
        Strategy::ALL
            .iter()
            .map(|&strategy| StrategyOutcome {
                strategy,
                can_finish,
                elapsed: Duration::ZERO,
            })
            .collect()
    }

    fn blocked_verdict(expect: Option<bool>) -> PlanVerdict {
        let cycles = vec![
            CourseCycle::builder().add_edge(0, 1).add_edge(1, 0).build(),
            CourseCycle::builder().add_edge(2, 2).build(),
        ];
        PlanVerdict::synthetic("loops", outcomes(false), vec![0, 1, 2], cycles, expect)
    }

    #[test]
    fn test_human_report_all_finishable() {
        let verdict = PlanVerdict::synthetic("chain", outcomes(true), vec![], vec![], Some(true));
        let report = HumanReportGenerator::new(None)
            .generate_report(&[verdict])
            .unwrap();

        assert!(report.contains("chain"));
        assert!(report.contains("can be finished"));
        assert!(report.contains("All 1 plan can be finished."));
        assert!(!report.contains("Blocked"));
    }

    #[test]
    fn test_human_report_plan_summary_line() {
        let verdict = PlanVerdict::synthetic("chain", outcomes(true), vec![], vec![], None);
        let report = HumanReportGenerator::new(None)
            .generate_report(&[verdict])
            .unwrap();

        assert!(report.contains(
            "  plans/chain.toml · 3 courses · 3 prerequisites · dfs=true, topological=true\n"
        ));
    }

    #[test]
    fn test_human_report_explains_blocked_plan() {
        let report = HumanReportGenerator::new(None)
            .generate_report(&[blocked_verdict(Some(false))])
            .unwrap();

        assert!(report.contains("cannot be finished"));
        assert!(report.contains("Blocked courses: 0, 1, 2"));
        assert!(report.contains("Cycle #1: courses 0, 1"));
        assert!(report.contains("Cycle #2: course 2"));
        assert!(report.contains("course 2 requires course 2"));
        assert!(report.contains("1 of 1 plan cannot be finished."));
        assert!(!report.contains("failed verification"));
    }

    #[test]
    fn test_human_report_respects_max_cycles() {
        let report = HumanReportGenerator::new(Some(1))
            .generate_report(&[blocked_verdict(Some(false))])
            .unwrap();

        assert!(report.contains("Cycle #1"));
        assert!(!report.contains("Cycle #2"));
        assert!(report.contains("Showing 1 of 2 cycles"));
    }

    #[test]
    fn test_human_report_flags_expectation_mismatch() {
        let report = HumanReportGenerator::new(None)
            .generate_report(&[blocked_verdict(Some(true))])
            .unwrap();

        assert!(report.contains("Expected can_finish=true, got false"));
        assert!(report.contains("1 plan failed verification."));
    }

    #[test]
    fn test_human_report_empty() {
        let report = HumanReportGenerator::new(None).generate_report(&[]).unwrap();
        assert!(report.contains("No course plans to check."));
    }

    #[test]
    fn test_human_bench_report() {
        let result = BenchResult {
            name: "diamond".to_string(),
            origin: "<built-in>".to_string(),
            expect: Some(true),
            timings: vec![StrategyTiming {
                strategy: Strategy::Topological,
                can_finish: true,
                iterations: 10,
                total: Duration::from_micros(25),
            }],
        };

        let report = HumanReportGenerator::new(None)
            .generate_bench_report(&[result])
            .unwrap();

        assert!(report.contains("diamond"));
        assert!(report.contains("topological"));
        assert!(report.contains("2.50 µs"));
        assert!(report.contains("pass"));
        assert!(report.contains("1 plan passed."));
    }
}
