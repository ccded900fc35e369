use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::core::CourseId;

/// Syntax error in a plan file, carrying the source text so miette can point
/// at the offending span.
#[derive(Error, Debug, Diagnostic)]
#[error("Invalid {format} syntax in '{file}'")]
#[diagnostic(
    code(course_schedule::plan_parse_error),
    help("Check the plan syntax near the highlighted position")
)]
pub struct PlanParseError {
    pub file: String,
    pub format: &'static str,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: PlanSyntaxError,
}

/// Underlying deserializer error for a plan file
#[derive(Error, Debug)]
pub enum PlanSyntaxError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum ScheduleError {
    #[error("A schedule needs at least one course")]
    #[diagnostic(
        code(course_schedule::no_courses),
        help("Set num_courses to 1 or more")
    )]
    NoCourses,

    #[error("Schedule has {num_courses} courses, the limit is {max}")]
    #[diagnostic(
        code(course_schedule::too_many_courses),
        help("Split the schedule into smaller plans")
    )]
    TooManyCourses { num_courses: usize, max: usize },

    #[error("Schedule has {count} prerequisites, the limit is {max}")]
    #[diagnostic(
        code(course_schedule::too_many_prerequisites),
        help("Split the schedule into smaller plans")
    )]
    TooManyPrerequisites { count: usize, max: usize },

    #[error("Prerequisite #{index} references course {course}, but courses range over 0..{num_courses}")]
    #[diagnostic(
        code(course_schedule::course_out_of_range),
        help("Course ids must be smaller than num_courses")
    )]
    CourseOutOfRange {
        index: usize,
        course: CourseId,
        num_courses: usize,
    },

    #[error("Prerequisite #{index} contains negative course id {value}")]
    #[diagnostic(
        code(course_schedule::negative_course),
        help("Course ids are non-negative integers")
    )]
    NegativeCourse { index: usize, value: i64 },

    #[error("Prerequisite #{index} has {len} elements, expected a [course, requires] pair")]
    #[diagnostic(
        code(course_schedule::malformed_pair),
        help("Write each prerequisite as a two-element array, e.g. [1, 0]")
    )]
    MalformedPair { index: usize, len: usize },

    #[error("Prerequisite #{index} ({course} requires {requires}) is listed more than once")]
    #[diagnostic(
        code(course_schedule::duplicate_prerequisite),
        help("Remove the repeated pair")
    )]
    DuplicatePrerequisite {
        index: usize,
        course: CourseId,
        requires: CourseId,
    },

    #[error("Strategies disagree: {details}")]
    #[diagnostic(
        code(course_schedule::strategy_disagreement),
        help("This is an internal error - please report it with the offending plan")
    )]
    StrategyDisagreement { details: String },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(course_schedule::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    PlanParseError(Box<PlanParseError>),

    #[error("Invalid plan '{path}'")]
    #[diagnostic(code(course_schedule::invalid_plan))]
    InvalidPlan {
        path: PathBuf,
        #[source]
        source: Box<ScheduleError>,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(course_schedule::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(course_schedule::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(course_schedule::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(course_schedule::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(course_schedule::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_plan_parse_error_display() {
        let source_code = "num_courses = = 2";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = PlanParseError {
            file: "plan.toml".to_string(),
            format: "TOML",
            source_code: NamedSource::new("plan.toml", source_code.to_string()),
            span: Some((14, 1).into()),
            source: toml_err.into(),
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'plan.toml'");
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = ScheduleError::FileReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.toml'");
    }

    #[test]
    fn test_out_of_range_message() {
        let error = ScheduleError::CourseOutOfRange {
            index: 3,
            course: 7,
            num_courses: 5,
        };

        assert_eq!(
            error.to_string(),
            "Prerequisite #3 references course 7, but courses range over 0..5"
        );
    }

    #[test]
    fn test_invalid_plan_keeps_cause() {
        let error = ScheduleError::InvalidPlan {
            path: PathBuf::from("plans/broken.toml"),
            source: Box::new(ScheduleError::NoCourses),
        };

        assert_eq!(error.to_string(), "Invalid plan 'plans/broken.toml'");
        let cause = std::error::Error::source(&error).map(|e| e.to_string());
        assert_eq!(
            cause.as_deref(),
            Some("A schedule needs at least one course")
        );
    }

    #[test]
    fn test_error_codes() {
        let error = ScheduleError::MalformedPair { index: 0, len: 3 };

        use miette::Diagnostic;
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let schedule_err: ScheduleError = io_err.into();

        match schedule_err {
            ScheduleError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let schedule_err: ScheduleError = json_err.into();

        match schedule_err {
            ScheduleError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
