//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::analyzer::PlanVerdict;
use crate::error::ScheduleError;
use crate::utils::string::{join_courses, pluralize};

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// `file=` parameter for plans loaded from disk
fn file_property(verdict: &PlanVerdict) -> String {
    if verdict.origin().starts_with('<') {
        String::new()
    } else {
        format!("file={},", verdict.origin())
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, verdicts: &[PlanVerdict]) -> Result<String, ScheduleError> {
        let mut output = String::new();
        let flagged: Vec<_> = verdicts.iter().filter(|v| v.needs_attention()).collect();

        if flagged.is_empty() {
            writeln!(
                output,
                "::notice title=Course Schedule::All {} {} verified ✅",
                verdicts.len(),
                pluralize("plan", verdicts.len())
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Course Schedule::{} of {} {} need attention",
            flagged.len(),
            verdicts.len(),
            pluralize("plan", verdicts.len())
        )?;

        for verdict in flagged {
            let file = file_property(verdict);

            for failure in verdict.failures() {
                writeln!(
                    output,
                    "::error {}title={}::{}",
                    file,
                    verdict.name(),
                    failure
                )?;
            }

            if !verdict.can_finish() {
                writeln!(
                    output,
                    "::warning {}title={}::Cannot be finished; blocked courses: {}",
                    file,
                    verdict.name(),
                    join_courses(verdict.blocked_courses())
                )?;
                for (i, cycle) in verdict.cycles().iter().enumerate() {
                    let edges = cycle
                        .edges()
                        .iter()
                        .map(|edge| edge.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    writeln!(
                        output,
                        "::notice::  Cycle {}: courses {} ({})",
                        i + 1,
                        join_courses(cycle.courses()),
                        edges
                    )?;
                }
            }
        }

        writeln!(
            output,
            "::notice title=Recommendation::Remove at least one prerequisite from each cycle, or \
             declare `expect = false` in plans that are meant to be unsatisfiable."
        )?;

        Ok(output)
    }
}
