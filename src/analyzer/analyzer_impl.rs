use std::path::PathBuf;

use console::style;
use indicatif::ParallelProgressIterator;
use miette::{Result, WrapErr};
use rayon::prelude::*;

use super::{BenchResult, PlanVerdict};
use crate::checker::Strategy;
use crate::error::ScheduleError;
use crate::plan::{CoursePlan, PlanDiscovery, parse_plan_file};
use crate::progress::ProgressReporter;

/// Loads course plans and evaluates them
#[derive(Debug, Clone, Default)]
pub struct PlanAnalyzer {
    plans: Vec<CoursePlan>,
}

impl PlanAnalyzer {
    pub fn new() -> Self {
        Self { plans: Vec::new() }
    }

    pub fn plans(&self) -> &[CoursePlan] {
        &self.plans
    }

    pub fn add_plan(&mut self, plan: CoursePlan) {
        self.plans.push(plan);
    }

    /// Find and parse every plan file below `paths`
    ///
    /// Files that fail to parse or validate are reported on stderr and
    /// skipped.
    pub fn discover_plans(
        &mut self,
        paths: &[PathBuf],
        include: &[String],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<()> {
        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }

        let mut discovery = PlanDiscovery::new(include)?;
        let files = discovery.discover_all(paths, progress.as_deref());

        for warning in discovery.warnings() {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }

        let (plans, errors) = Self::parse_parallel(files);
        self.report_parse_errors(&errors);
        self.plans.extend(plans);

        if let Some(p) = progress.as_mut() {
            p.finish_discovery(self.plans.len());
        }

        Ok(())
    }

    fn parse_parallel(files: Vec<PathBuf>) -> (Vec<CoursePlan>, Vec<(PathBuf, ScheduleError)>) {
        files
            .into_par_iter()
            .map(|path| parse_plan_file(&path).map_err(|e| (path, e)))
            .partition_map(|result| match result {
                Ok(plan) => rayon::iter::Either::Left(plan),
                Err(e) => rayon::iter::Either::Right(e),
            })
    }

    fn report_parse_errors(&self, errors: &[(PathBuf, ScheduleError)]) {
        for (path, error) in errors {
            eprintln!(
                "{} Skipping '{}': {}",
                style("⚠").yellow(),
                path.display(),
                error
            );
            if let ScheduleError::InvalidPlan { source, .. } = error {
                eprintln!("    {} {}", style("→").dim(), source);
            }
        }
    }

    /// Decide every plan with `strategies`, in parallel
    ///
    /// Verdicts come back in plan order.
    pub fn evaluate(
        &self,
        strategies: &[Strategy],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<Vec<PlanVerdict>> {
        let verdicts = match progress.as_mut() {
            Some(p) => {
                let pb = p.start_checking(self.plans.len());
                let verdicts = self
                    .plans
                    .par_iter()
                    .progress_with(pb)
                    .map(|plan| Self::evaluate_plan(plan, strategies))
                    .collect::<Result<Vec<_>>>();
                let blocked = verdicts
                    .as_ref()
                    .map_or(0, |v| v.iter().filter(|v| !v.can_finish()).count());
                p.finish_checking(blocked);
                verdicts
            }
            None => self
                .plans
                .par_iter()
                .map(|plan| Self::evaluate_plan(plan, strategies))
                .collect::<Result<Vec<_>>>(),
        }?;

        Ok(verdicts)
    }

    fn evaluate_plan(plan: &CoursePlan, strategies: &[Strategy]) -> Result<PlanVerdict> {
        PlanVerdict::evaluate(plan, strategies)
            .wrap_err_with(|| format!("Failed to evaluate plan '{}'", plan.name()))
    }

    /// Time every plan with every strategy, one run after another
    pub fn benchmark(
        &self,
        strategies: &[Strategy],
        iterations: u32,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Vec<BenchResult> {
        if let Some(p) = progress.as_mut() {
            p.start_benchmark(self.plans.len() * strategies.len(), iterations);
        }

        let results = self
            .plans
            .iter()
            .map(|plan| {
                let timings = strategies
                    .iter()
                    .map(|&strategy| {
                        let timing = BenchResult::time_strategy(plan, strategy, iterations);
                        if let Some(p) = progress.as_deref() {
                            p.update_plan_progress(plan.name());
                        }
                        timing
                    })
                    .collect();
                BenchResult::new(plan, timings)
            })
            .collect();

        if let Some(p) = progress.as_mut() {
            p.finish_progress();
        }

        results
    }
}
