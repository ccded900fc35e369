use std::collections::VecDeque;

use super::{CycleChecker, Strategy};
use crate::core::{CourseId, CourseSchedule};

/// Kahn's algorithm cycle checker
///
/// The in-degree of a course is the number of its prerequisites that are not
/// completed yet. Courses at zero are released through a FIFO queue, and each
/// release lowers the in-degree of the courses it unlocks. Courses that sit on
/// or behind a cycle never reach zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopologicalChecker;

impl TopologicalChecker {
    /// Courses that can never be taken, in ascending order
    ///
    /// Empty iff the schedule can finish.
    pub fn blocked_courses(&self, schedule: &CourseSchedule) -> Vec<CourseId> {
        let (_, in_degree) = release(schedule);
        in_degree
            .iter()
            .enumerate()
            .filter(|(_, remaining)| **remaining > 0)
            .map(|(course, _)| course)
            .collect()
    }
}

impl CycleChecker for TopologicalChecker {
    fn strategy(&self) -> Strategy {
        Strategy::Topological
    }

    fn can_finish(&self, schedule: &CourseSchedule) -> bool {
        let (processed, _) = release(schedule);
        processed == schedule.num_courses()
    }
}

/// Drain the queue; returns the number of released courses and the residual
/// in-degrees
fn release(schedule: &CourseSchedule) -> (usize, Vec<usize>) {
    let num_courses = schedule.num_courses();
    let mut in_degree = vec![0usize; num_courses];
    // dependency -> courses it unlocks
    let mut unlocks: Vec<Vec<CourseId>> = vec![Vec::new(); num_courses];

    for pair in schedule.prerequisites() {
        unlocks[pair.requires].push(pair.course);
        in_degree[pair.course] += 1;
    }

    let mut queue: VecDeque<CourseId> = schedule
        .courses()
        .filter(|&course| in_degree[course] == 0)
        .collect();
    let mut processed = queue.len();

    while let Some(course) = queue.pop_front() {
        for &unlocked in &unlocks[course] {
            in_degree[unlocked] -= 1;
            if in_degree[unlocked] == 0 {
                queue.push_back(unlocked);
                processed += 1;
            }
        }
    }

    (processed, in_degree)
}
