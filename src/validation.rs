//! Input validation for generation runs.
//!
//! Checks structural integrity of the settings, course roster, and
//! teacher/room pools before scheduling. Detects:
//! - Duplicate IDs
//! - Pinned-teacher references to unknown teachers
//! - Working days without a day configuration
//! - Day configurations with zero periods or malformed clock times
//! - Unavailability entries outside a day's period range
//!
//! The engine itself stays lenient (a missing day config degrades to
//! defaults, an unknown pinned teacher keeps the original fallback
//! behavior); this module is the outer layer's pre-flight check, and
//! collects every problem rather than stopping at the first.

use std::collections::HashSet;

use crate::models::{Course, Room, Settings, Teacher};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A course pins a teacher that is not in the pool.
    UnknownTeacherReference,
    /// A working day has no day configuration.
    MissingDayConfig,
    /// A day configuration is malformed.
    InvalidDayConfig,
    /// A teacher unavailability entry is out of range.
    InvalidUnavailability,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a generation run.
///
/// Checks:
/// 1. No duplicate course, room, or teacher IDs
/// 2. All pinned teachers exist in the teacher pool
/// 3. Every working day is in 1..=7 and has a day configuration
/// 4. Day configurations have at least one period and, when clock
///    strings are present, a parseable start before a parseable end
/// 5. Unavailability entries name a day in 1..=7 and a period within
///    that day's configured range
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    settings: &Settings,
    courses: &[Course],
    rooms: &[Room],
    teachers: &[Teacher],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    for c in courses {
        if let Some(pinned) = &c.teacher {
            if !teacher_ids.contains(pinned.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTeacherReference,
                    format!("Course '{}' pins unknown teacher '{}'", c.id, pinned),
                ));
            }
        }
    }

    for &day in &settings.working_days {
        if !(1..=7).contains(&day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDayConfig,
                format!("Working day {day} is outside 1..=7"),
            ));
            continue;
        }
        match settings.day_config_of(day) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingDayConfig,
                format!("Working day {day} has no day configuration"),
            )),
            Some(config) => {
                if config.periods == 0 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidDayConfig,
                        format!("Day {day} has zero periods"),
                    ));
                }
                let start = config.start_minutes();
                let end = config.end_minutes();
                if !config.start.is_empty() && start.is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidDayConfig,
                        format!("Day {day} start time '{}' is not HH:MM", config.start),
                    ));
                }
                if !config.end.is_empty() && end.is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidDayConfig,
                        format!("Day {day} end time '{}' is not HH:MM", config.end),
                    ));
                }
                if let (Some(start), Some(end)) = (start, end) {
                    if start >= end {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::InvalidDayConfig,
                            format!("Day {day} ends at or before it starts"),
                        ));
                    }
                }
            }
        }
    }

    for t in teachers {
        for u in &t.unavailable {
            if !(1..=7).contains(&u.day) || u.period == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidUnavailability,
                    format!(
                        "Teacher '{}' unavailability (day {}, period {}) is out of range",
                        t.id, u.day, u.period
                    ),
                ));
                continue;
            }
            if let Some(config) = settings.day_config_of(u.day) {
                if u.period > config.periods {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidUnavailability,
                        format!(
                            "Teacher '{}' unavailability period {} exceeds day {}'s {} periods",
                            t.id, u.period, u.day, config.periods
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayConfig;

    fn valid_settings() -> Settings {
        Settings::new()
            .with_working_days(vec![1, 2])
            .with_day(DayConfig::new(1).with_hours("09:00", "15:00"))
            .with_day(DayConfig::new(2))
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input_passes() {
        let courses = [Course::lecture("c1", "CS101").with_teacher("t1")];
        let rooms = [Room::lecture("r1")];
        let teachers = [Teacher::new("t1").with_unavailable(1, 3)];
        assert!(validate_input(&valid_settings(), &courses, &rooms, &teachers).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let courses = [Course::lecture("c1", "CS101"), Course::lecture("c1", "CS102")];
        let rooms = [Room::lecture("r1"), Room::lecture("r1")];
        let teachers = [Teacher::new("t1"), Teacher::new("t1")];
        let errs = kinds(validate_input(&valid_settings(), &courses, &rooms, &teachers));
        assert_eq!(errs.len(), 3);
        assert!(errs.iter().all(|k| *k == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_unknown_pinned_teacher() {
        let courses = [Course::lecture("c1", "CS101").with_teacher("ghost")];
        let errs = kinds(validate_input(&valid_settings(), &courses, &[], &[]));
        assert_eq!(errs, vec![ValidationErrorKind::UnknownTeacherReference]);
    }

    #[test]
    fn test_missing_day_config() {
        let settings = Settings::new().with_working_days(vec![1]);
        let errs = kinds(validate_input(&settings, &[], &[], &[]));
        assert_eq!(errs, vec![ValidationErrorKind::MissingDayConfig]);
    }

    #[test]
    fn test_bad_day_config() {
        let settings = Settings::new()
            .with_working_days(vec![1, 9])
            .with_day(DayConfig::new(1).with_periods(0).with_hours("fifteen", "09:00"));
        let errs = kinds(validate_input(&settings, &[], &[], &[]));
        // Zero periods + bad start clock on day 1, out-of-range day 9.
        assert_eq!(errs.len(), 3);
        assert!(errs.iter().all(|k| *k == ValidationErrorKind::InvalidDayConfig));
    }

    #[test]
    fn test_inverted_hours() {
        let settings = Settings::new()
            .with_working_days(vec![1])
            .with_day(DayConfig::new(1).with_hours("15:00", "09:00"));
        let errs = kinds(validate_input(&settings, &[], &[], &[]));
        assert_eq!(errs, vec![ValidationErrorKind::InvalidDayConfig]);
    }

    #[test]
    fn test_unavailability_out_of_range() {
        let teachers = [
            Teacher::new("t1").with_unavailable(8, 1),
            Teacher::new("t2").with_unavailable(1, 0),
            Teacher::new("t3").with_unavailable(1, 7), // day 1 has 6 periods
        ];
        let errs = kinds(validate_input(&valid_settings(), &[], &[], &teachers));
        assert_eq!(errs.len(), 3);
        assert!(errs
            .iter()
            .all(|k| *k == ValidationErrorKind::InvalidUnavailability));
    }
}
