use miette::Result;

/// Main entry point for the course-schedule CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    course_schedule::run()
}
