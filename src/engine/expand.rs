//! Requirement expansion.
//!
//! Turns each course's weekly-hours requirement into an ordered list of
//! atomic session units. Lab hours pair up into two-period blocks
//! (`floor(hours / 2)` of them), with an odd remaining hour becoming a
//! trailing single. Lecture hours are all singles.
//!
//! Emission order is deterministic: course input order, then doubles
//! before the trailing single. Units earlier in the list get first
//! access to scarce slots; only candidate order is randomized.

use crate::models::Course;

/// The shape of one schedulable session unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// One period.
    Single,
    /// Two contiguous periods on the same day (lab block).
    DoubleLab,
}

impl SessionKind {
    /// Periods this unit occupies when placed.
    pub fn periods(self) -> u32 {
        match self {
            SessionKind::Single => 1,
            SessionKind::DoubleLab => 2,
        }
    }
}

/// One unit of placement work: a course (by roster index) and a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUnit {
    /// Index into the course roster the unit was expanded from.
    pub course: usize,
    /// Unit shape.
    pub kind: SessionKind,
}

/// Expands a course roster into session units, in emission order.
pub fn expand_requirements(courses: &[Course]) -> Vec<SessionUnit> {
    let mut units = Vec::new();
    for (index, course) in courses.iter().enumerate() {
        let hours = course.hours_per_week;
        if course.is_lab() {
            for _ in 0..hours / 2 {
                units.push(SessionUnit {
                    course: index,
                    kind: SessionKind::DoubleLab,
                });
            }
            if hours % 2 == 1 {
                units.push(SessionUnit {
                    course: index,
                    kind: SessionKind::Single,
                });
            }
        } else {
            for _ in 0..hours {
                units.push(SessionUnit {
                    course: index,
                    kind: SessionKind::Single,
                });
            }
        }
    }
    units
}

/// Total periods the units require (doubles count twice).
pub fn required_periods(units: &[SessionUnit]) -> u32 {
    units.iter().map(|u| u.kind.periods()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;

    #[test]
    fn test_lecture_expansion() {
        let courses = [Course::lecture("c1", "CS101").with_hours(3)];
        let units = expand_requirements(&courses);
        assert_eq!(units.len(), 3);
        assert!(units.iter().all(|u| u.kind == SessionKind::Single));
        assert_eq!(required_periods(&units), 3);
    }

    #[test]
    fn test_lab_even_hours() {
        let courses = [Course::lab("c1", "PHY201").with_hours(4)];
        let units = expand_requirements(&courses);
        assert_eq!(units.len(), 2);
        assert!(units.iter().all(|u| u.kind == SessionKind::DoubleLab));
        assert_eq!(required_periods(&units), 4);
    }

    #[test]
    fn test_lab_odd_hours_trailing_single() {
        let courses = [Course::lab("c1", "PHY201").with_hours(5)];
        let units = expand_requirements(&courses);
        assert_eq!(
            units.iter().map(|u| u.kind).collect::<Vec<_>>(),
            vec![
                SessionKind::DoubleLab,
                SessionKind::DoubleLab,
                SessionKind::Single
            ]
        );
        assert_eq!(required_periods(&units), 5);
    }

    #[test]
    fn test_zero_hours() {
        let courses = [Course::lecture("c1", "CS101").with_hours(0)];
        assert!(expand_requirements(&courses).is_empty());
    }

    #[test]
    fn test_roster_order_preserved() {
        let courses = [
            Course::lab("c1", "PHY201").with_hours(3),
            Course::lecture("c2", "CS101").with_hours(2),
        ];
        let units = expand_requirements(&courses);
        let shapes: Vec<(usize, SessionKind)> = units.iter().map(|u| (u.course, u.kind)).collect();
        assert_eq!(
            shapes,
            vec![
                (0, SessionKind::DoubleLab),
                (0, SessionKind::Single),
                (1, SessionKind::Single),
                (1, SessionKind::Single),
            ]
        );
    }
}
