//! # Graph Construction and Rendering Module
//!
//! Builds the petgraph representation of a schedule and renders it for
//! humans. The graph is only used to explain and visualize a verdict; the
//! checkers work on their own compact adjacency lists.
//!
//! ## Components
//!
//! - **CourseGraphBuilder**: one node per course, one edge per prerequisite
//!   pair, pointing from a course to the course it requires
//! - **CourseNode** / **PrerequisiteEdge**: node and edge weights
//! - **GraphRenderer**: ASCII, Mermaid and Graphviz DOT output with optional
//!   cycle highlighting
//!
//! ## Example
//!
//! ```
//! use course_schedule::core::CourseSchedule;
//! use course_schedule::detector::CycleDetector;
//! use course_schedule::graph::{CourseGraphBuilder, GraphRenderer};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let schedule = CourseSchedule::from_pairs(3, &[(1, 0), (0, 1), (2, 1)])?;
//!
//! let mut builder = CourseGraphBuilder::new();
//! builder.build_from_schedule(&schedule)?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(builder.graph())?;
//!
//! let mut output = Vec::new();
//! GraphRenderer::new(true).render_dot(builder.graph(), detector.cycles(), &mut output)?;
//!
//! let dot = String::from_utf8(output).into_diagnostic()?;
//! assert!(dot.contains("digraph"));
//! assert!(dot.contains(r#""2" -> "1""#));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::CourseGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{CourseNode, PrerequisiteEdge};
