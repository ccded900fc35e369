use super::{CycleChecker, Strategy};
use crate::core::{CourseId, CourseSchedule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Resolved,
}

/// Depth-first cycle checker
///
/// Each course is visited at most once: it is `InProgress` while on the
/// active path and `Resolved` once all of its prerequisites are. Reaching an
/// `InProgress` course again means the path closed on itself.
///
/// The traversal keeps its own stack of `(course, next prerequisite index)`
/// frames, so a chain as long as the course limit needs no call-stack depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsChecker;

impl CycleChecker for DfsChecker {
    fn strategy(&self) -> Strategy {
        Strategy::Dfs
    }

    fn can_finish(&self, schedule: &CourseSchedule) -> bool {
        // course -> its prerequisites, in input order
        let mut requires: Vec<Vec<CourseId>> = vec![Vec::new(); schedule.num_courses()];
        for pair in schedule.prerequisites() {
            requires[pair.course].push(pair.requires);
        }

        let mut marks = vec![Mark::Unvisited; schedule.num_courses()];
        let mut stack: Vec<(CourseId, usize)> = Vec::new();

        for root in schedule.courses() {
            if marks[root] != Mark::Unvisited || requires[root].is_empty() {
                continue;
            }

            marks[root] = Mark::InProgress;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (course, next) = *frame;

                let Some(&dependency) = requires[course].get(next) else {
                    marks[course] = Mark::Resolved;
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                match marks[dependency] {
                    Mark::InProgress => return false,
                    Mark::Resolved => {}
                    Mark::Unvisited if requires[dependency].is_empty() => {
                        marks[dependency] = Mark::Resolved;
                    }
                    Mark::Unvisited => {
                        marks[dependency] = Mark::InProgress;
                        stack.push((dependency, 0));
                    }
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_loop_detected_on_first_visit() {
        let schedule = CourseSchedule::from_pairs(6, &[(5, 5)]).unwrap();
        assert!(!DfsChecker.can_finish(&schedule));
    }

    #[test]
    fn test_course_without_prerequisites_is_resolved() {
        let schedule = CourseSchedule::from_pairs(3, &[(2, 0)]).unwrap();
        assert!(DfsChecker.can_finish(&schedule));
    }

    #[test]
    fn test_shared_prerequisite_visited_once() {
        // 0 and 1 both lead into the same resolved subtree
        let schedule =
            CourseSchedule::from_pairs(5, &[(0, 2), (1, 2), (2, 3), (3, 4), (1, 3)]).unwrap();
        assert!(DfsChecker.can_finish(&schedule));
    }

    #[test]
    fn test_longest_chain_does_not_overflow() {
        let n = crate::constants::limits::MAX_COURSES;
        let pairs: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
        let schedule = CourseSchedule::from_pairs(n, &pairs).unwrap();
        assert!(DfsChecker.can_finish(&schedule));

        let mut looped = pairs;
        looped.push((n - 1, 0));
        let schedule = CourseSchedule::from_pairs(n, &looped).unwrap();
        assert!(!DfsChecker.can_finish(&schedule));
    }

    #[test]
    fn test_back_edge_deep_in_path() {
        // 0 -> 1 -> 2 -> 3 -> 1
        let schedule = CourseSchedule::from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 1)]).unwrap();
        assert!(!DfsChecker.can_finish(&schedule));
    }
}
