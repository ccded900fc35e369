//! JSON format report generation

use serde_json::{Value, json};

use super::{BenchReportGenerator, ReportGenerator};
use crate::analyzer::{BenchResult, PlanVerdict};
use crate::error::ScheduleError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }

    fn verdict_json(verdict: &PlanVerdict) -> Value {
        let outcomes: Vec<_> = verdict
            .outcomes()
            .iter()
            .map(|outcome| {
                json!({
                    "strategy": outcome.strategy,
                    "can_finish": outcome.can_finish,
                    "elapsed_ns": outcome.elapsed.as_nanos() as u64,
                })
            })
            .collect();

        let cycles: Vec<_> = verdict
            .cycles()
            .iter()
            .map(|cycle| {
                json!({
                    "courses": cycle.courses(),
                    "prerequisites": cycle.edges(),
                })
            })
            .collect();

        json!({
            "name": verdict.name(),
            "origin": verdict.origin(),
            "num_courses": verdict.num_courses(),
            "num_prerequisites": verdict.num_prerequisites(),
            "can_finish": verdict.can_finish(),
            "consistent": verdict.is_consistent(),
            "expect": verdict.expect(),
            "passed": verdict.passed(),
            "outcomes": outcomes,
            "blocked_courses": verdict.blocked_courses(),
            "cycles": cycles,
            "failures": verdict.failures(),
        })
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, verdicts: &[PlanVerdict]) -> Result<String, ScheduleError> {
        let plans: Vec<_> = verdicts.iter().map(Self::verdict_json).collect();

        let report = json!({
            "plan_count": verdicts.len(),
            "blocked_count": verdicts.iter().filter(|v| !v.can_finish()).count(),
            "failed_count": verdicts.iter().filter(|v| !v.passed()).count(),
            "plans": plans,
        });

        serde_json::to_string_pretty(&report).map_err(ScheduleError::Json)
    }
}

impl BenchReportGenerator for JsonReportGenerator {
    fn generate_bench_report(&self, results: &[BenchResult]) -> Result<String, ScheduleError> {
        let plans: Vec<_> = results
            .iter()
            .map(|result| {
                let timings: Vec<_> = result
                    .timings
                    .iter()
                    .map(|timing| {
                        json!({
                            "strategy": timing.strategy,
                            "can_finish": timing.can_finish,
                            "iterations": timing.iterations,
                            "total_ns": timing.total.as_nanos() as u64,
                            "mean_ns": timing.mean().as_nanos() as u64,
                        })
                    })
                    .collect();

                json!({
                    "name": result.name,
                    "origin": result.origin,
                    "expect": result.expect,
                    "passed": result.passed(),
                    "timings": timings,
                })
            })
            .collect();

        let report = json!({
            "plan_count": results.len(),
            "failed_count": results.iter().filter(|result| !result.passed()).count(),
            "plans": plans,
        });

        serde_json::to_string_pretty(&report).map_err(ScheduleError::Json)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::analyzer::{StrategyOutcome, StrategyTiming};
    use crate::checker::Strategy;
    use crate::detector::CourseCycle;

    fn outcome(strategy: Strategy, can_finish: bool) -> StrategyOutcome {
        StrategyOutcome {
            strategy,
            can_finish,
            elapsed: Duration::from_nanos(42),
        }
    }

    #[test]
    fn test_json_report_empty() {
        let report = JsonReportGenerator::new().generate_report(&[]).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["plan_count"], 0);
        assert_eq!(json["blocked_count"], 0);
        assert_eq!(json["plans"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_with_cycle() {
        let verdict = PlanVerdict::synthetic(
            "mutual",
            vec![outcome(Strategy::Dfs, false), outcome(Strategy::Topological, false)],
            vec![0, 1],
            vec![CourseCycle::builder().add_edge(1, 0).add_edge(0, 1).build()],
            Some(false),
        );

        let report = JsonReportGenerator::new().generate_report(&[verdict]).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["blocked_count"], 1);
        assert_eq!(json["failed_count"], 0);

        let plan = &json["plans"][0];
        assert_eq!(plan["name"], "mutual");
        assert_eq!(plan["can_finish"], false);
        assert_eq!(plan["consistent"], true);
        assert_eq!(plan["expect"], false);
        assert_eq!(plan["blocked_courses"], json!([0, 1]));
        assert_eq!(plan["outcomes"][0]["strategy"], "dfs");
        assert_eq!(plan["outcomes"][1]["elapsed_ns"], 42);
        assert_eq!(plan["cycles"][0]["courses"], json!([0, 1]));
        assert_eq!(
            plan["cycles"][0]["prerequisites"],
            json!([{"course": 0, "requires": 1}, {"course": 1, "requires": 0}])
        );
    }

    #[test]
    fn test_json_report_records_failures() {
        let verdict = PlanVerdict::synthetic(
            "odd",
            vec![outcome(Strategy::Dfs, true), outcome(Strategy::Topological, false)],
            vec![],
            vec![],
            None,
        );

        let report = JsonReportGenerator::new().generate_report(&[verdict]).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["failed_count"], 1);
        assert_eq!(json["plans"][0]["expect"], Value::Null);
        assert_eq!(
            json["plans"][0]["failures"][0],
            "Strategies disagree: dfs=true, topological=false"
        );
    }

    #[test]
    fn test_json_bench_report() {
        let result = BenchResult {
            name: "single".to_string(),
            origin: "<built-in>".to_string(),
            expect: Some(true),
            timings: vec![StrategyTiming {
                strategy: Strategy::Dfs,
                can_finish: true,
                iterations: 4,
                total: Duration::from_nanos(400),
            }],
        };

        let report = JsonReportGenerator::new()
            .generate_bench_report(&[result])
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["failed_count"], 0);
        assert_eq!(json["plans"][0]["passed"], true);
        assert_eq!(json["plans"][0]["timings"][0]["mean_ns"], 100);
        assert_eq!(json["plans"][0]["timings"][0]["strategy"], "dfs");
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let report = JsonReportGenerator.generate_report(&[]).unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
