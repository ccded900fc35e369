//! String manipulation utilities

use std::time::Duration;

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Join course ids as `0, 3, 7`
pub fn join_courses(courses: &[usize]) -> String {
    courses
        .iter()
        .map(|course| course.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a duration with a unit suited to its magnitude
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos < 1_000 {
        format!("{nanos} ns")
    } else if nanos < 1_000_000 {
        format!("{:.2} µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", duration.as_secs_f64())
    }
}
