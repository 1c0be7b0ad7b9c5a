//! Run-scoped availability index.
//!
//! Tracks, for the duration of one generation run: which teachers and
//! rooms are busy at each (day, period), each teacher's read-only
//! unavailable set, and each teacher's placed-period count per day.
//! Break rules are normalized into canonical windows here, once, at
//! construction — the placement loop never sees the legacy shapes.
//!
//! The index is exclusively owned by one run and discarded with it.
//! There is no removal operation: the algorithm never backtracks a
//! committed placement.

use std::collections::{HashMap, HashSet};

use crate::models::{BreakWindow, Settings, Teacher, DEFAULT_PERIODS};

/// One working day as seen by the placement search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPlan {
    /// Day number, 1=Monday .. 7=Sunday.
    pub day: u8,
    /// Periods available on this day.
    pub periods: u32,
}

/// Working days in settings order, with per-day period counts.
///
/// A working day without a configuration degrades to the default period
/// count (and, in the index, no breaks).
pub fn day_plans(settings: &Settings) -> Vec<DayPlan> {
    settings
        .working_days
        .iter()
        .map(|&day| DayPlan {
            day,
            periods: settings
                .day_config_of(day)
                .map_or(DEFAULT_PERIODS, |c| c.periods),
        })
        .collect()
}

#[derive(Debug, Default)]
struct SlotOccupancy {
    teachers: HashSet<String>,
    rooms: HashSet<String>,
}

/// Occupancy, unavailability, and load state for one generation run.
#[derive(Debug)]
pub struct AvailabilityIndex {
    /// Busy teachers/rooms per (day, period).
    occupancy: HashMap<(u8, u32), SlotOccupancy>,
    /// Per-teacher unavailable (day, period) pairs. Loaded once, read-only.
    unavailable: HashMap<String, HashSet<(u8, u32)>>,
    /// Placed periods per (teacher, day).
    load: HashMap<(String, u8), u32>,
    /// Normalized break windows per working day.
    breaks: HashMap<u8, [BreakWindow; 2]>,
}

impl AvailabilityIndex {
    /// Builds a fresh index from settings and the teacher pool.
    pub fn new(settings: &Settings, teachers: &[Teacher]) -> Self {
        let breaks = settings
            .working_days
            .iter()
            .map(|&day| {
                let windows = settings
                    .day_config_of(day)
                    .map_or([BreakWindow::disabled(); 2], |c| c.break_windows());
                (day, windows)
            })
            .collect();

        let unavailable = teachers
            .iter()
            .map(|t| {
                let slots = t.unavailable.iter().map(|u| (u.day, u.period)).collect();
                (t.id.clone(), slots)
            })
            .collect();

        Self {
            occupancy: HashMap::new(),
            unavailable,
            load: HashMap::new(),
            breaks,
        }
    }

    /// Whether `period` is inside a break on `day`.
    #[inline]
    pub fn is_break(&self, day: u8, period: u32) -> bool {
        self.breaks
            .get(&day)
            .is_some_and(|windows| windows.iter().any(|w| w.contains(period)))
    }

    /// Whether a teacher and room can both take (day, period).
    ///
    /// True iff the period is not a break, the pair is not in the
    /// teacher's unavailable set, and neither the teacher nor the room
    /// is already busy there. The daily load cap is checked separately
    /// by the placement search.
    pub fn is_free(&self, day: u8, period: u32, teacher_id: &str, room_id: &str) -> bool {
        if self.is_break(day, period) {
            return false;
        }
        if self
            .unavailable
            .get(teacher_id)
            .is_some_and(|s| s.contains(&(day, period)))
        {
            return false;
        }
        match self.occupancy.get(&(day, period)) {
            Some(o) => !o.teachers.contains(teacher_id) && !o.rooms.contains(room_id),
            None => true,
        }
    }

    /// Periods already placed for a teacher on a day.
    pub fn load_of(&self, teacher_id: &str, day: u8) -> u32 {
        self.load
            .get(&(teacher_id.to_owned(), day))
            .copied()
            .unwrap_or(0)
    }

    /// Marks the teacher and room busy at (day, period) and bumps the
    /// teacher's load counter.
    pub fn commit(&mut self, day: u8, period: u32, teacher_id: &str, room_id: &str) {
        let occupancy = self.occupancy.entry((day, period)).or_default();
        occupancy.teachers.insert(teacher_id.to_owned());
        occupancy.rooms.insert(room_id.to_owned());
        *self.load.entry((teacher_id.to_owned(), day)).or_insert(0) += 1;
    }
}
