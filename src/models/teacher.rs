//! Teacher model.
//!
//! Teachers carry a skill set (course codes they may teach), a daily
//! session cap, and an explicit set of (day, period) pairs they are
//! unavailable for. The unavailable set is authored by the teacher
//! between generation runs; a run treats it as read-only.

use serde::{Deserialize, Serialize};

/// Default maximum sessions per teacher per day.
pub const DEFAULT_MAX_LOAD_PER_DAY: u32 = 6;

/// A teacher in the scheduling pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Course codes this teacher may teach.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Maximum sessions on any single day.
    #[serde(default = "default_max_load")]
    pub max_load_per_day: u32,
    /// Periods this teacher cannot be scheduled in.
    #[serde(default)]
    pub unavailable: Vec<UnavailableSlot>,
}

/// A (day, period) pair a teacher is unavailable for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableSlot {
    /// Day number, 1=Monday .. 7=Sunday.
    pub day: u8,
    /// Period number, 1-based.
    pub period: u32,
}

fn default_max_load() -> u32 {
    DEFAULT_MAX_LOAD_PER_DAY
}

impl Teacher {
    /// Creates a teacher with no skills and the default daily cap.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            skills: Vec::new(),
            max_load_per_day: DEFAULT_MAX_LOAD_PER_DAY,
            unavailable: Vec::new(),
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a teachable course code.
    pub fn with_skill(mut self, code: impl Into<String>) -> Self {
        self.skills.push(code.into());
        self
    }

    /// Sets the daily session cap.
    pub fn with_max_load(mut self, max_load_per_day: u32) -> Self {
        self.max_load_per_day = max_load_per_day;
        self
    }

    /// Marks a (day, period) as unavailable.
    pub fn with_unavailable(mut self, day: u8, period: u32) -> Self {
        self.unavailable.push(UnavailableSlot { day, period });
        self
    }

    /// Whether this teacher's skill set contains the course code.
    pub fn can_teach(&self, code: &str) -> bool {
        self.skills.iter().any(|s| s == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("t1")
            .with_name("Dr. Rao")
            .with_skill("CS101")
            .with_skill("CS202")
            .with_max_load(4)
            .with_unavailable(1, 1);

        assert!(t.can_teach("CS101"));
        assert!(!t.can_teach("PHY101"));
        assert_eq!(t.max_load_per_day, 4);
        assert_eq!(t.unavailable, vec![UnavailableSlot { day: 1, period: 1 }]);
    }

    #[test]
    fn test_default_max_load() {
        let t: Teacher = serde_json::from_str(r#"{"id":"t1","skills":["CS101"]}"#).unwrap();
        assert_eq!(t.max_load_per_day, DEFAULT_MAX_LOAD_PER_DAY);
        assert!(t.unavailable.is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{
            "id": "t1", "name": "Dr. Rao",
            "skills": ["CS101"], "maxLoadPerDay": 3,
            "unavailable": [{ "day": 1, "period": 2 }]
        }"#;
        let t: Teacher = serde_json::from_str(json).unwrap();
        assert_eq!(t.max_load_per_day, 3);
        assert_eq!(t.unavailable[0], UnavailableSlot { day: 1, period: 2 });

        let out = serde_json::to_value(&t).unwrap();
        assert_eq!(out["maxLoadPerDay"], 3);
    }
}
