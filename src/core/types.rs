//! Core type definitions
//!
//! Courses, prerequisite pairs and the validated schedule every checker works
//! on. Validation happens once, here; checkers trust a [`CourseSchedule`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::limits::{MAX_COURSES, MAX_PREREQUISITES};
use crate::error::ScheduleError;

/// Identifier of a course, in `0..num_courses`
pub type CourseId = usize;

/// "`course` cannot be taken before `requires` is completed"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Prerequisite {
    pub course: CourseId,
    pub requires: CourseId,
}

impl Prerequisite {
    pub fn new(course: CourseId, requires: CourseId) -> Self {
        Self { course, requires }
    }

    pub fn is_self_loop(&self) -> bool {
        self.course == self.requires
    }
}

impl From<(CourseId, CourseId)> for Prerequisite {
    fn from((course, requires): (CourseId, CourseId)) -> Self {
        Self::new(course, requires)
    }
}

impl std::fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.course, self.requires)
    }
}

/// A course count together with its prerequisite pairs, checked against the
/// input contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSchedule {
    num_courses: usize,
    prerequisites: Vec<Prerequisite>,
}

impl CourseSchedule {
    /// Validate and build a schedule
    ///
    /// Rejects an empty course set, schedules above the course or pair
    /// limits, pairs that reference unknown courses and repeated pairs.
    pub fn new(num_courses: usize, prerequisites: Vec<Prerequisite>) -> Result<Self, ScheduleError> {
        if num_courses == 0 {
            return Err(ScheduleError::NoCourses);
        }
        if num_courses > MAX_COURSES {
            return Err(ScheduleError::TooManyCourses {
                num_courses,
                max: MAX_COURSES,
            });
        }
        if prerequisites.len() > MAX_PREREQUISITES {
            return Err(ScheduleError::TooManyPrerequisites {
                count: prerequisites.len(),
                max: MAX_PREREQUISITES,
            });
        }

        let mut seen = HashSet::with_capacity(prerequisites.len());
        for (index, pair) in prerequisites.iter().enumerate() {
            for course in [pair.course, pair.requires] {
                if course >= num_courses {
                    return Err(ScheduleError::CourseOutOfRange {
                        index,
                        course,
                        num_courses,
                    });
                }
            }
            if !seen.insert(*pair) {
                return Err(ScheduleError::DuplicatePrerequisite {
                    index,
                    course: pair.course,
                    requires: pair.requires,
                });
            }
        }

        Ok(Self {
            num_courses,
            prerequisites,
        })
    }

    /// Build a schedule from `(course, requires)` tuples
    pub fn from_pairs(num_courses: usize, pairs: &[(CourseId, CourseId)]) -> Result<Self, ScheduleError> {
        Self::new(num_courses, pairs.iter().copied().map(Prerequisite::from).collect())
    }

    /// Build a schedule from raw integer arrays as they appear in plan files
    ///
    /// Each entry must hold exactly two non-negative integers.
    pub fn from_raw(num_courses: i64, raw: &[Vec<i64>]) -> Result<Self, ScheduleError> {
        if num_courses <= 0 {
            return Err(ScheduleError::NoCourses);
        }

        let mut prerequisites = Vec::with_capacity(raw.len());
        for (index, pair) in raw.iter().enumerate() {
            let [course, requires] = pair.as_slice() else {
                return Err(ScheduleError::MalformedPair {
                    index,
                    len: pair.len(),
                });
            };
            let course = to_course_id(index, *course)?;
            let requires = to_course_id(index, *requires)?;
            prerequisites.push(Prerequisite::new(course, requires));
        }

        let num_courses = usize::try_from(num_courses).map_err(|_| ScheduleError::TooManyCourses {
            num_courses: usize::MAX,
            max: MAX_COURSES,
        })?;
        Self::new(num_courses, prerequisites)
    }

    pub fn num_courses(&self) -> usize {
        self.num_courses
    }

    pub fn prerequisites(&self) -> &[Prerequisite] {
        &self.prerequisites
    }

    pub fn courses(&self) -> std::ops::Range<CourseId> {
        0..self.num_courses
    }
}

fn to_course_id(index: usize, value: i64) -> Result<CourseId, ScheduleError> {
    if value < 0 {
        return Err(ScheduleError::NegativeCourse { index, value });
    }
    // Anything that does not fit is out of range for every valid schedule.
    Ok(CourseId::try_from(value).unwrap_or(CourseId::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_schedule() {
        let schedule = CourseSchedule::from_pairs(3, &[(1, 0), (2, 1)]).unwrap();

        assert_eq!(schedule.num_courses(), 3);
        assert_eq!(
            schedule.prerequisites(),
            &[Prerequisite::new(1, 0), Prerequisite::new(2, 1)]
        );
        assert_eq!(schedule.courses().count(), 3);
    }

    #[test]
    fn test_zero_courses_rejected() {
        let err = CourseSchedule::from_pairs(0, &[]).unwrap_err();
        assert!(matches!(err, ScheduleError::NoCourses));
    }

    #[test]
    fn test_course_limit() {
        assert!(CourseSchedule::from_pairs(MAX_COURSES, &[]).is_ok());

        let err = CourseSchedule::from_pairs(MAX_COURSES + 1, &[]).unwrap_err();
        assert!(matches!(err, ScheduleError::TooManyCourses { .. }));
    }

    #[test]
    fn test_prerequisite_limit() {
        let pairs: Vec<_> = (0..MAX_PREREQUISITES + 1)
            .map(|i| (i % MAX_COURSES, (i / MAX_COURSES) % MAX_COURSES))
            .collect();

        let err = CourseSchedule::from_pairs(MAX_COURSES, &pairs).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::TooManyPrerequisites { count, .. } if count == MAX_PREREQUISITES + 1
        ));
    }

    #[test]
    fn test_out_of_range_course() {
        let err = CourseSchedule::from_pairs(2, &[(1, 0), (0, 2)]).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::CourseOutOfRange {
                index: 1,
                course: 2,
                num_courses: 2
            }
        ));
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let err = CourseSchedule::from_pairs(2, &[(1, 0), (1, 0)]).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::DuplicatePrerequisite { index: 1, .. }
        ));
    }

    #[test]
    fn test_reversed_pair_is_not_duplicate() {
        assert!(CourseSchedule::from_pairs(2, &[(1, 0), (0, 1)]).is_ok());
    }

    #[test]
    fn test_self_loop_is_valid_input() {
        let schedule = CourseSchedule::from_pairs(6, &[(5, 5)]).unwrap();
        assert!(schedule.prerequisites()[0].is_self_loop());
    }

    #[test]
    fn test_from_raw_malformed_pair() {
        let err = CourseSchedule::from_raw(3, &[vec![1, 0], vec![2]]).unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedPair { index: 1, len: 1 }));

        let err = CourseSchedule::from_raw(3, &[vec![1, 0, 2]]).unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedPair { index: 0, len: 3 }));
    }

    #[test]
    fn test_from_raw_negative_course() {
        let err = CourseSchedule::from_raw(3, &[vec![-1, 0]]).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::NegativeCourse { index: 0, value: -1 }
        ));
    }

    #[test]
    fn test_from_raw_non_positive_count() {
        assert!(matches!(
            CourseSchedule::from_raw(-4, &[]).unwrap_err(),
            ScheduleError::NoCourses
        ));
    }

    #[test]
    fn test_from_raw_huge_id_is_out_of_range() {
        let err = CourseSchedule::from_raw(3, &[vec![i64::MAX, 0]]).unwrap_err();
        assert!(matches!(err, ScheduleError::CourseOutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_prerequisite_display() {
        assert_eq!(Prerequisite::new(3, 1).to_string(), "3 → 1");
    }
}
