//! JUnit XML format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::analyzer::PlanVerdict;
use crate::error::ScheduleError;
use crate::utils::string::join_courses;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }

    fn failure_message(verdict: &PlanVerdict) -> String {
        match verdict.failures().first() {
            Some(failure) => failure.clone(),
            None => "Plan cannot be finished".to_string(),
        }
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, verdicts: &[PlanVerdict]) -> Result<String, ScheduleError> {
        let mut output = String::new();
        let failures = verdicts.iter().filter(|v| v.needs_attention()).count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="course-schedule" tests="{}" failures="{}">"#,
            verdicts.len(),
            failures
        )?;
        writeln!(
            output,
            r#"  <testsuite name="course-plans" tests="{}" failures="{}">"#,
            verdicts.len(),
            failures
        )?;

        for verdict in verdicts {
            let name = escape_xml(verdict.name());
            let classname = escape_xml(verdict.origin());

            if !verdict.needs_attention() {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="{classname}" />"#
                )?;
                continue;
            }

            writeln!(
                output,
                r#"    <testcase name="{name}" classname="{classname}">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="{}">"#,
                escape_xml(&Self::failure_message(verdict))
            )?;
            writeln!(output, "Strategies: {}", verdict.outcome_summary())?;
            if !verdict.blocked_courses().is_empty() {
                writeln!(
                    output,
                    "Blocked courses: {}",
                    join_courses(verdict.blocked_courses())
                )?;
            }
            for (i, cycle) in verdict.cycles().iter().enumerate() {
                writeln!(output, "\nCycle {}: {}", i + 1, join_courses(cycle.courses()))?;
                for edge in cycle.edges() {
                    writeln!(output, "  {edge}")?;
                }
            }
            for failure in verdict.failures() {
                writeln!(output, "{}", escape_xml(&failure))?;
            }
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
