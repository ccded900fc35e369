use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::checker::Strategy;
use crate::plan::CoursePlan;

/// Timing of one strategy on one plan
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyTiming {
    pub strategy: Strategy,
    pub can_finish: bool,
    pub iterations: u32,
    pub total: Duration,
}

impl StrategyTiming {
    pub fn mean(&self) -> Duration {
        self.total / self.iterations.max(1)
    }
}

/// Timings of every selected strategy on one plan
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub name: String,
    pub origin: String,
    pub expect: Option<bool>,
    pub timings: Vec<StrategyTiming>,
}

impl BenchResult {
    /// Decide `plan` `iterations` times with `strategy`
    pub fn time_strategy(plan: &CoursePlan, strategy: Strategy, iterations: u32) -> StrategyTiming {
        let checker = strategy.checker();
        let schedule = plan.schedule();

        let mut can_finish = checker.can_finish(black_box(schedule));
        let started = Instant::now();
        for _ in 0..iterations {
            can_finish = checker.can_finish(black_box(schedule));
        }

        StrategyTiming {
            strategy,
            can_finish,
            iterations,
            total: started.elapsed(),
        }
    }

    pub fn new(plan: &CoursePlan, timings: Vec<StrategyTiming>) -> Self {
        Self {
            name: plan.name().to_string(),
            origin: plan.origin(),
            expect: plan.expect(),
            timings,
        }
    }

    /// Whether every timed strategy produced the expected verdict
    ///
    /// Plans without an expectation only need their strategies to agree.
    pub fn passed(&self) -> bool {
        let Some(first) = self.timings.first() else {
            return true;
        };
        let expected = self.expect.unwrap_or(first.can_finish);
        self.timings.iter().all(|timing| timing.can_finish == expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::builtin_plans;

    #[test]
    fn test_builtin_plans_pass_with_every_strategy() {
        for plan in builtin_plans().unwrap() {
            let timings = Strategy::ALL
                .iter()
                .map(|&strategy| BenchResult::time_strategy(&plan, strategy, 3))
                .collect();
            let result = BenchResult::new(&plan, timings);

            assert!(result.passed(), "plan {} failed", result.name);
            assert_eq!(result.timings.len(), 2);
            assert!(result.timings.iter().all(|timing| timing.iterations == 3));
        }
    }

    #[test]
    fn test_wrong_expectation_fails() {
        let plan = builtin_plans()
            .unwrap()
            .into_iter()
            .find(|plan| plan.name() == "diamond")
            .unwrap()
            .with_expect(Some(false));

        let result = BenchResult::new(
            &plan,
            vec![BenchResult::time_strategy(&plan, Strategy::Dfs, 1)],
        );

        assert!(!result.passed());
    }

    #[test]
    fn test_mean_divides_total() {
        let timing = StrategyTiming {
            strategy: Strategy::Dfs,
            can_finish: true,
            iterations: 4,
            total: Duration::from_micros(8),
        };
        assert_eq!(timing.mean(), Duration::from_micros(2));
    }
}
