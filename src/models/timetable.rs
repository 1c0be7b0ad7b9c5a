//! Timetable (solution) model.
//!
//! A timetable is the weekly grid for one class: a sequence of placed
//! slots, each binding a course, teacher, and room to a (day, period).
//! One timetable exists per class key; a generation run replaces its
//! grid wholesale.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one class: batch + section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassKey {
    /// Batch (e.g. "5" or "Semester 5").
    pub batch: String,
    /// Section (e.g. "B").
    pub section: String,
}

impl ClassKey {
    /// Creates a class key.
    pub fn new(batch: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            batch: batch.into(),
            section: section.into(),
        }
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.batch, self.section)
    }
}

/// One placed atomic period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Day number, 1=Monday .. 7=Sunday.
    pub day: u8,
    /// Period number, 1-based.
    pub period: u32,
    /// Course id.
    pub course: String,
    /// Teacher id.
    pub teacher: String,
    /// Room id.
    pub room: String,
}

/// The weekly grid for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Batch this grid belongs to.
    pub batch: String,
    /// Section this grid belongs to.
    pub section: String,
    /// Placed slots, in placement order.
    #[serde(default)]
    pub grid: Vec<Slot>,
}

impl Timetable {
    /// Creates an empty timetable for a class.
    pub fn new(batch: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            batch: batch.into(),
            section: section.into(),
            grid: Vec::new(),
        }
    }

    /// The class key of this timetable.
    pub fn key(&self) -> ClassKey {
        ClassKey::new(&self.batch, &self.section)
    }

    /// Appends a placed slot.
    pub fn add_slot(&mut self, slot: Slot) {
        self.grid.push(slot);
    }

    /// The slot at a (day, period), if any.
    pub fn slot_at(&self, day: u8, period: u32) -> Option<&Slot> {
        self.grid.iter().find(|s| s.day == day && s.period == period)
    }

    /// All slots on a day.
    pub fn slots_for_day(&self, day: u8) -> Vec<&Slot> {
        self.grid.iter().filter(|s| s.day == day).collect()
    }

    /// All slots assigned to a teacher.
    pub fn slots_for_teacher(&self, teacher_id: &str) -> Vec<&Slot> {
        self.grid.iter().filter(|s| s.teacher == teacher_id).collect()
    }

    /// All slots placed in a room.
    pub fn slots_for_room(&self, room_id: &str) -> Vec<&Slot> {
        self.grid.iter().filter(|s| s.room == room_id).collect()
    }

    /// Number of placed slots.
    pub fn slot_count(&self) -> usize {
        self.grid.len()
    }
}
