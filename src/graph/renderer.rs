use std::io::Write;

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::core::CourseId;
use crate::detector::CourseCycle;
use crate::error::ScheduleError;
use crate::graph::{CourseNode, PrerequisiteEdge};

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(ScheduleError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(ScheduleError::from)
    };
}

/// Renders a prerequisite graph as ASCII, Mermaid or Graphviz DOT
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    fn in_cycle(&self, course: CourseId, cycles: &[CourseCycle]) -> bool {
        self.highlight_cycles && cycles.iter().any(|cycle| cycle.contains(course))
    }

    fn edge_in_cycle(&self, edge: &PrerequisiteEdge, cycles: &[CourseCycle]) -> bool {
        self.highlight_cycles
            && cycles
                .iter()
                .any(|cycle| cycle.contains_edge(&edge.prerequisite()))
    }

    /// Outgoing edges of a course, ordered by required course
    fn sorted_edges<'a>(
        graph: &'a DiGraph<CourseNode, PrerequisiteEdge>,
        node: NodeIndex,
    ) -> Vec<(&'a CourseNode, &'a PrerequisiteEdge)> {
        let mut edges: Vec<_> = graph
            .edges(node)
            .map(|edge| (&graph[edge.target()], edge.weight()))
            .collect();
        edges.sort_by_key(|(target, _)| target.id());
        edges
    }

    fn sorted_nodes(graph: &DiGraph<CourseNode, PrerequisiteEdge>) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = graph.node_indices().collect();
        nodes.sort_by_key(|&idx| graph[idx].id());
        nodes
    }

    pub fn render_ascii(
        &self,
        graph: &DiGraph<CourseNode, PrerequisiteEdge>,
        cycles: &[CourseCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.node_count() == 0 {
            writeln_out!(output, "No courses to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Course Prerequisite Graph\n")?;

        for node_idx in Self::sorted_nodes(graph) {
            let course = &graph[node_idx];

            if self.in_cycle(course.id(), cycles) {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", course.label())?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", course.label())?;
            }

            let edges = Self::sorted_edges(graph, node_idx);
            if edges.is_empty() {
                writeln_out!(output, "  └── (no prerequisites)")?;
            }

            for (i, (target, edge)) in edges.iter().enumerate() {
                let prefix = if i == edges.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                let cycle_marker = if self.edge_in_cycle(edge, cycles) {
                    " ⚠️  [CYCLE]"
                } else {
                    ""
                };
                writeln_out!(
                    output,
                    "  {} requires {}{}",
                    prefix,
                    target.label(),
                    cycle_marker
                )?;
            }

            writeln_out!(output)?;
        }

        if !cycles.is_empty() && self.highlight_cycles {
            writeln_out!(output, "⚠️  = Part of a prerequisite cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &DiGraph<CourseNode, PrerequisiteEdge>,
        cycles: &[CourseCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        for node_idx in Self::sorted_nodes(graph) {
            let course = &graph[node_idx];
            let node_id = Self::node_id(course);

            if self.in_cycle(course.id(), cycles) {
                writeln_out!(output, "    {}((\"{}\"))", node_id, course.label())?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {}[\"{}\"]", node_id, course.label())?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        // linkStyle indexes follow the order in which edges are written
        let mut link_index = 0;
        for node_idx in Self::sorted_nodes(graph) {
            let source = &graph[node_idx];
            for (target, edge) in Self::sorted_edges(graph, node_idx) {
                writeln_out!(
                    output,
                    "    {} -->|requires| {}",
                    Self::node_id(source),
                    Self::node_id(target)
                )?;
                if self.edge_in_cycle(edge, cycles) {
                    writeln_out!(
                        output,
                        "    linkStyle {} stroke:{},stroke-width:3px",
                        link_index,
                        colors::CYCLE_EDGE
                    )?;
                }
                link_index += 1;
            }
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &DiGraph<CourseNode, PrerequisiteEdge>,
        cycles: &[CourseCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph prerequisites {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(
            output,
            r#"    node [shape=box, style="rounded,filled", fontname="Helvetica"];"#
        )?;
        writeln_out!(output)?;

        for node_idx in Self::sorted_nodes(graph) {
            let course = &graph[node_idx];
            let (fill, stroke) = if self.in_cycle(course.id(), cycles) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };
            writeln_out!(
                output,
                r#"    "{}" [label="{}", fillcolor="{}", color="{}"];"#,
                course.id(),
                course.label(),
                fill,
                stroke
            )?;
        }

        writeln_out!(output)?;

        for node_idx in Self::sorted_nodes(graph) {
            let source = &graph[node_idx];
            for (target, edge) in Self::sorted_edges(graph, node_idx) {
                let (color, width) = if self.edge_in_cycle(edge, cycles) {
                    (colors::CYCLE_EDGE, 3)
                } else {
                    (colors::NORMAL_EDGE, 2)
                };
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}", penwidth={}];"#,
                    source.id(),
                    target.id(),
                    color,
                    width
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn node_id(course: &CourseNode) -> String {
        format!("c{}", course.id())
    }
}
