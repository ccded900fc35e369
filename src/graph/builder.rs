use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{CourseNode, PrerequisiteEdge};
use crate::core::{CourseId, CourseSchedule};
use crate::error::ScheduleError;

/// Builder for the prerequisite graph of a schedule
///
/// Node `i` of the graph is course `i`; every pair `(a, b)` becomes an edge
/// `a → b`.
pub struct CourseGraphBuilder {
    graph: DiGraph<CourseNode, PrerequisiteEdge>,
}

impl Default for CourseGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
        }
    }

    /// Replace the current graph with the graph of `schedule`
    pub fn build_from_schedule(&mut self, schedule: &CourseSchedule) -> Result<()> {
        let mut graph =
            DiGraph::with_capacity(schedule.num_courses(), schedule.prerequisites().len());

        for course in schedule.courses() {
            graph.add_node(CourseNode::new(course));
        }

        for (position, pair) in schedule.prerequisites().iter().enumerate() {
            let from = Self::node_index(&graph, pair.course)?;
            let to = Self::node_index(&graph, pair.requires)?;
            graph.add_edge(from, to, PrerequisiteEdge::new(*pair, position));
        }

        self.graph = graph;
        Ok(())
    }

    fn node_index(
        graph: &DiGraph<CourseNode, PrerequisiteEdge>,
        course: CourseId,
    ) -> Result<NodeIndex, ScheduleError> {
        let index = NodeIndex::new(course);
        if graph.node_weight(index).is_some() {
            Ok(index)
        } else {
            Err(ScheduleError::GraphError {
                message: format!("Course {course} has no node in the graph"),
            })
        }
    }

    pub fn graph(&self) -> &DiGraph<CourseNode, PrerequisiteEdge> {
        &self.graph
    }

    pub fn into_graph(self) -> DiGraph<CourseNode, PrerequisiteEdge> {
        self.graph
    }
}
