use std::path::Path;

use miette::{NamedSource, SourceSpan};

use super::{CoursePlan, PlanFile};
use crate::constants::plans::EXTENSIONS;
use crate::core::CourseSchedule;
use crate::error::{PlanParseError, PlanSyntaxError, ScheduleError};

/// Serialization format of a plan file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Toml,
    Json,
}

impl PlanFormat {
    /// Format implied by the file extension, if it is a plan file at all
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(PlanFormat::Toml),
            "json" => Some(PlanFormat::Json),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlanFormat::Toml => "TOML",
            PlanFormat::Json => "JSON",
        }
    }
}

/// Read, parse and validate one plan file
pub fn parse_plan_file(path: &Path) -> Result<CoursePlan, ScheduleError> {
    let format = PlanFormat::from_path(path).ok_or_else(|| ScheduleError::ConfigurationError {
        message: format!(
            "'{}' is not a plan file (expected one of the extensions: {})",
            path.display(),
            EXTENSIONS.join(", ")
        ),
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| ScheduleError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file = parse_plan_str(&content, &path.display().to_string(), format)?;

    let schedule = CourseSchedule::from_raw(file.num_courses, &file.prerequisites).map_err(|e| {
        ScheduleError::InvalidPlan {
            path: path.to_path_buf(),
            source: Box::new(e),
        }
    })?;

    let name = file.name.unwrap_or_else(|| {
        path.file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    });

    Ok(CoursePlan::new(name, schedule)
        .with_path(path)
        .with_expect(file.expect))
}

/// Parse plan text without validating the schedule
///
/// `origin` names the source in diagnostics.
pub fn parse_plan_str(
    content: &str,
    origin: &str,
    format: PlanFormat,
) -> Result<PlanFile, ScheduleError> {
    let (span, source) = match format {
        PlanFormat::Toml => match toml::from_str::<PlanFile>(content) {
            Ok(file) => return Ok(file),
            Err(e) => {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
                (span, PlanSyntaxError::from(e))
            }
        },
        PlanFormat::Json => match serde_json::from_str::<PlanFile>(content) {
            Ok(file) => return Ok(file),
            Err(e) => {
                let span = json_offset(content, e.line(), e.column()).map(|offset| {
                    let len = usize::from(offset < content.len());
                    SourceSpan::new(offset.into(), len)
                });
                (span, PlanSyntaxError::from(e))
            }
        },
    };

    Err(ScheduleError::PlanParseError(Box::new(PlanParseError {
        file: origin.to_string(),
        format: format.name(),
        source_code: NamedSource::new(origin, content.to_string()),
        span,
        source,
    })))
}

/// Byte offset of a 1-based line/column position reported by serde_json
fn json_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(content.len()))
}
