use std::time::{Duration, Instant};

use miette::Result;

use crate::checker::{Strategy, TopologicalChecker, reconcile};
use crate::core::CourseId;
use crate::detector::{CourseCycle, CycleDetector};
use crate::error::ScheduleError;
use crate::graph::CourseGraphBuilder;
use crate::plan::CoursePlan;

/// Result of one strategy on one plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub can_finish: bool,
    pub elapsed: Duration,
}

/// Everything known about one evaluated plan
#[derive(Debug, Clone)]
pub struct PlanVerdict {
    name: String,
    origin: String,
    num_courses: usize,
    num_prerequisites: usize,
    outcomes: Vec<StrategyOutcome>,
    blocked_courses: Vec<CourseId>,
    cycles: Vec<CourseCycle>,
    expect: Option<bool>,
}

impl PlanVerdict {
    /// Decide `plan` with every strategy in `strategies` and explain the
    /// result
    pub fn evaluate(plan: &CoursePlan, strategies: &[Strategy]) -> Result<Self> {
        let schedule = plan.schedule();

        let outcomes = strategies
            .iter()
            .map(|&strategy| {
                let checker = strategy.checker();
                let started = Instant::now();
                let can_finish = checker.can_finish(schedule);
                StrategyOutcome {
                    strategy,
                    can_finish,
                    elapsed: started.elapsed(),
                }
            })
            .collect();

        let blocked_courses = TopologicalChecker.blocked_courses(schedule);

        let cycles = if blocked_courses.is_empty() {
            Vec::new()
        } else {
            let mut builder = CourseGraphBuilder::new();
            builder.build_from_schedule(schedule)?;
            let mut detector = CycleDetector::new();
            detector.detect_cycles(builder.graph())?;
            detector.cycles().to_vec()
        };

        Ok(Self {
            name: plan.name().to_string(),
            origin: plan.origin(),
            num_courses: schedule.num_courses(),
            num_prerequisites: schedule.prerequisites().len(),
            outcomes,
            blocked_courses,
            cycles,
            expect: plan.expect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn num_courses(&self) -> usize {
        self.num_courses
    }

    pub fn num_prerequisites(&self) -> usize {
        self.num_prerequisites
    }

    pub fn outcomes(&self) -> &[StrategyOutcome] {
        &self.outcomes
    }

    /// Courses that can never be taken, ascending
    pub fn blocked_courses(&self) -> &[CourseId] {
        &self.blocked_courses
    }

    pub fn cycles(&self) -> &[CourseCycle] {
        &self.cycles
    }

    pub fn expect(&self) -> Option<bool> {
        self.expect
    }

    /// The verdict, taken from the first strategy that ran
    ///
    /// Without any strategy the schedule is judged by its blocked courses.
    pub fn can_finish(&self) -> bool {
        self.outcomes
            .first()
            .map_or(self.blocked_courses.is_empty(), |outcome| outcome.can_finish)
    }

    /// Whether every strategy returned the same verdict
    pub fn is_consistent(&self) -> bool {
        self.agreement().is_ok()
    }

    fn agreement(&self) -> Result<bool, ScheduleError> {
        let verdicts: Vec<(Strategy, bool)> = self
            .outcomes
            .iter()
            .map(|outcome| (outcome.strategy, outcome.can_finish))
            .collect();
        reconcile(&verdicts)
    }

    /// `Some(false)` when the plan declares an expectation the verdict
    /// contradicts, `None` when it declares none
    pub fn matches_expectation(&self) -> Option<bool> {
        self.expect.map(|expected| expected == self.can_finish())
    }

    /// A plan passes when its strategies agree and no expectation is violated
    pub fn passed(&self) -> bool {
        self.is_consistent() && self.matches_expectation() != Some(false)
    }

    /// Whether CI style reports should flag the plan: it failed, or it
    /// cannot be finished without declaring that as expected
    pub fn needs_attention(&self) -> bool {
        !self.passed() || (!self.can_finish() && self.expect.is_none())
    }

    /// `dfs=true, topological=false` style summary of the outcomes
    pub fn outcome_summary(&self) -> String {
        self.outcomes
            .iter()
            .map(|outcome| format!("{}={}", outcome.strategy, outcome.can_finish))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Problems that make the plan fail, in reporting order
    pub fn failures(&self) -> Vec<String> {
        let mut failures = Vec::new();
        if let Err(disagreement) = self.agreement() {
            failures.push(disagreement.to_string());
        }
        if let Some(expected) = self.expect
            && expected != self.can_finish()
        {
            failures.push(format!(
                "Expected can_finish={expected}, got {}",
                self.can_finish()
            ));
        }
        failures
    }
}

#[cfg(test)]
impl PlanVerdict {
    /// Verdict with hand-picked outcomes, for report tests
    pub(crate) fn synthetic(
        name: &str,
        outcomes: Vec<StrategyOutcome>,
        blocked_courses: Vec<CourseId>,
        cycles: Vec<CourseCycle>,
        expect: Option<bool>,
    ) -> Self {
        Self {
            name: name.to_string(),
            origin: format!("plans/{name}.toml"),
            num_courses: 3,
            num_prerequisites: 3,
            outcomes,
            blocked_courses,
            cycles,
            expect,
        }
    }
}
