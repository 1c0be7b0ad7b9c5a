//! Course model.
//!
//! A course is the weekly teaching requirement for one class: so many
//! hours of lecture or lab per week, optionally pinned to a specific
//! teacher. Courses are immutable inputs to a generation run.

use serde::{Deserialize, Serialize};

/// A course taught to one class (batch + section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Course code (matched against teacher skills, e.g. "CS101").
    pub code: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Lecture or lab.
    #[serde(rename = "type", default)]
    pub kind: CourseKind,
    /// Batch this course belongs to.
    #[serde(default)]
    pub batch: String,
    /// Section this course belongs to.
    #[serde(default)]
    pub section: String,
    /// Required teaching hours per week.
    #[serde(default = "default_hours_per_week")]
    pub hours_per_week: u32,
    /// Pinned teacher id. When set, no other teacher is considered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
}

/// Course classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseKind {
    /// Regular single-period sessions.
    #[default]
    Lecture,
    /// Lab sessions, scheduled as two-period blocks.
    Lab,
}

fn default_hours_per_week() -> u32 {
    4
}

impl Course {
    /// Creates a lecture course with the default weekly hours.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: String::new(),
            kind: CourseKind::Lecture,
            batch: String::new(),
            section: String::new(),
            hours_per_week: default_hours_per_week(),
            teacher: None,
        }
    }

    /// Creates a lecture course.
    pub fn lecture(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(id, code)
    }

    /// Creates a lab course.
    pub fn lab(id: impl Into<String>, code: impl Into<String>) -> Self {
        let mut course = Self::new(id, code);
        course.kind = CourseKind::Lab;
        course
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning class (batch + section).
    pub fn with_class(mut self, batch: impl Into<String>, section: impl Into<String>) -> Self {
        self.batch = batch.into();
        self.section = section.into();
        self
    }

    /// Sets the weekly hour requirement.
    pub fn with_hours(mut self, hours_per_week: u32) -> Self {
        self.hours_per_week = hours_per_week;
        self
    }

    /// Pins the course to a teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher = Some(teacher_id.into());
        self
    }

    /// Whether this is a lab course.
    pub fn is_lab(&self) -> bool {
        self.kind == CourseKind::Lab
    }
}
