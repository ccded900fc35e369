//! Core graph types
//!
//! Node and edge weights of the prerequisite graph.

use crate::core::{CourseId, Prerequisite};

/// A course in the prerequisite graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseNode {
    pub id: CourseId,
}

impl CourseNode {
    pub fn new(id: CourseId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn label(&self) -> String {
        format!("course {}", self.id)
    }
}

/// A prerequisite edge, pointing from a course to the course it requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisiteEdge {
    pub prerequisite: Prerequisite,
    /// Position of the pair in the input sequence
    pub position: usize,
}

impl PrerequisiteEdge {
    pub fn new(prerequisite: Prerequisite, position: usize) -> Self {
        Self {
            prerequisite,
            position,
        }
    }

    pub fn prerequisite(&self) -> Prerequisite {
        self.prerequisite
    }

    pub fn position(&self) -> usize {
        self.position
    }
}
