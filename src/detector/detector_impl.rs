use std::collections::BTreeSet;

use miette::Result;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::core::{CourseId, Prerequisite};
use crate::graph::{CourseNode, PrerequisiteEdge};

/// Detector for the cycles that make a schedule unsatisfiable
///
/// Uses Tarjan's Strongly Connected Components algorithm; every component
/// with more than one course, or a single course that requires itself, is
/// reported as one [`CourseCycle`].
pub struct CycleDetector {
    cycles: Vec<CourseCycle>,
}

/// A group of courses that mutually (transitively) require each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCycle {
    courses: Vec<CourseId>,
    edges: Vec<Prerequisite>,
}

impl CourseCycle {
    pub fn builder() -> CourseCycleBuilder {
        CourseCycleBuilder::new()
    }

    /// Courses in the cycle, ascending
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    /// Prerequisite pairs between courses of the cycle, sorted
    pub fn edges(&self) -> &[Prerequisite] {
        &self.edges
    }

    pub fn contains(&self, course: CourseId) -> bool {
        self.courses.binary_search(&course).is_ok()
    }

    pub fn contains_edge(&self, prerequisite: &Prerequisite) -> bool {
        self.edges.binary_search(prerequisite).is_ok()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn is_self_loop(&self) -> bool {
        self.courses.len() == 1
    }
}

#[derive(Default)]
pub struct CourseCycleBuilder {
    courses: BTreeSet<CourseId>,
    edges: BTreeSet<Prerequisite>,
}

impl CourseCycleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(mut self, courses: impl IntoIterator<Item = CourseId>) -> Self {
        self.courses.extend(courses);
        self
    }

    /// Add an edge; both endpoints join the cycle
    pub fn add_edge(mut self, course: CourseId, requires: CourseId) -> Self {
        self.add_edge_internal(Prerequisite::new(course, requires));
        self
    }

    fn add_edge_internal(&mut self, edge: Prerequisite) {
        self.courses.insert(edge.course);
        self.courses.insert(edge.requires);
        self.edges.insert(edge);
    }

    pub fn build(self) -> CourseCycle {
        CourseCycle {
            courses: self.courses.into_iter().collect(),
            edges: self.edges.into_iter().collect(),
        }
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Detect all cycles in the prerequisite graph
    ///
    /// Replaces the cycles of any earlier call. Cycles are ordered by their
    /// smallest course id.
    pub fn detect_cycles(&mut self, graph: &DiGraph<CourseNode, PrerequisiteEdge>) -> Result<()> {
        self.cycles.clear();
        for scc in tarjan_scc(graph) {
            let is_cycle = scc.len() > 1 || graph.find_edge(scc[0], scc[0]).is_some();
            if is_cycle {
                self.cycles.push(Self::collect_cycle(graph, &scc));
            }
        }

        self.cycles.sort_by_key(|cycle| cycle.courses().first().copied());
        Ok(())
    }

    fn collect_cycle(
        graph: &DiGraph<CourseNode, PrerequisiteEdge>,
        scc: &[NodeIndex],
    ) -> CourseCycle {
        let mut builder =
            CourseCycle::builder().with_courses(scc.iter().map(|&idx| graph[idx].id()));

        for &from in scc {
            for edge in graph.edges(from) {
                if scc.contains(&edge.target()) {
                    builder.add_edge_internal(edge.weight().prerequisite());
                }
            }
        }

        builder.build()
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[CourseCycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::CourseSchedule;
    use crate::graph::CourseGraphBuilder;

    fn detect(num_courses: usize, pairs: &[(CourseId, CourseId)]) -> CycleDetector {
        let schedule = CourseSchedule::from_pairs(num_courses, pairs).unwrap();
        let mut builder = CourseGraphBuilder::new();
        builder.build_from_schedule(&schedule).unwrap();

        let mut detector = CycleDetector::new();
        detector.detect_cycles(builder.graph()).unwrap();
        detector
    }

    #[test]
    fn test_no_cycles_in_linear_chain() {
        let detector = detect(3, &[(1, 0), (2, 1)]);

        assert_eq!(detector.cycle_count(), 0);
        assert!(!detector.has_cycles());
    }

    #[test]
    fn test_simple_two_course_cycle() {
        let detector = detect(2, &[(1, 0), (0, 1)]);

        assert_eq!(detector.cycle_count(), 1);
        let cycle = &detector.cycles()[0];
        assert_eq!(cycle.courses(), &[0, 1]);
        assert_eq!(
            cycle.edges(),
            &[Prerequisite::new(0, 1), Prerequisite::new(1, 0)]
        );
    }

    #[test]
    fn test_detecting_again_replaces_cycles() {
        let schedule = CourseSchedule::from_pairs(3, &[(1, 0), (0, 1), (2, 2)]).unwrap();
        let mut builder = CourseGraphBuilder::new();
        builder.build_from_schedule(&schedule).unwrap();

        let mut detector = CycleDetector::new();
        detector.detect_cycles(builder.graph()).unwrap();
        detector.detect_cycles(builder.graph()).unwrap();
        assert_eq!(detector.cycle_count(), 2);

        let acyclic = CourseSchedule::from_pairs(2, &[(1, 0)]).unwrap();
        builder.build_from_schedule(&acyclic).unwrap();
        detector.detect_cycles(builder.graph()).unwrap();
        assert!(!detector.has_cycles());
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let detector = detect(6, &[(5, 5), (1, 0)]);

        assert_eq!(detector.cycle_count(), 1);
        assert!(detector.cycles()[0].is_self_loop());
        assert_eq!(detector.cycles()[0].courses(), &[5]);
    }

    #[test]
    fn test_tail_is_not_part_of_cycle() {
        // 1 hangs off the 0 <-> 2 loop
        let detector = detect(3, &[(1, 0), (2, 0), (0, 2)]);

        assert_eq!(detector.cycle_count(), 1);
        let cycle = &detector.cycles()[0];
        assert_eq!(cycle.courses(), &[0, 2]);
        assert!(!cycle.contains(1));
        assert!(!cycle.contains_edge(&Prerequisite::new(1, 0)));
    }

    #[test]
    fn test_separate_cycles_are_ordered() {
        let detector = detect(7, &[(5, 6), (6, 5), (1, 2), (2, 3), (3, 1), (4, 4)]);

        let courses: Vec<Vec<CourseId>> = detector
            .cycles()
            .iter()
            .map(|cycle| cycle.courses().to_vec())
            .collect();
        assert_eq!(courses, vec![vec![1, 2, 3], vec![4], vec![5, 6]]);
    }

    #[test]
    fn test_nested_loops_form_one_component() {
        // 0 -> 1 -> 2 -> 0 and 1 -> 3 -> 1 share course 1
        let detector = detect(4, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 1)]);

        assert_eq!(detector.cycle_count(), 1);
        assert_eq!(detector.cycles()[0].courses(), &[0, 1, 2, 3]);
        assert_eq!(detector.cycles()[0].edges().len(), 5);
    }

    #[test]
    fn test_builder_collects_endpoints() {
        let cycle = CourseCycle::builder().add_edge(3, 1).add_edge(1, 3).build();

        assert_eq!(cycle.courses(), &[1, 3]);
        assert_eq!(cycle.len(), 2);
        assert!(!cycle.is_empty());
    }
}
