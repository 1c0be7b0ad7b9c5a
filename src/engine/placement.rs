//! First-fit placement search.
//!
//! For each session unit, scans working days in settings order, then
//! room candidates, then teacher candidates, then periods, and commits
//! the first combination that satisfies every constraint. There is no
//! backtracking: a committed placement is final, and a unit that fits
//! nowhere is simply reported unplaced.
//!
//! A double lab block narrows the period range by one and requires both
//! periods free plus two units of load headroom; its two slots commit
//! together or not at all.

use std::collections::HashMap;

use super::availability::{AvailabilityIndex, DayPlan};
use super::expand::SessionKind;
use crate::models::{Course, Slot, DEFAULT_MAX_LOAD_PER_DAY};

/// First-fit placer over one run's availability state.
pub(crate) struct Placer<'a> {
    days: &'a [DayPlan],
    index: &'a mut AvailabilityIndex,
    /// Daily caps by teacher id; unknown ids use the default cap.
    max_load: &'a HashMap<String, u32>,
}

impl<'a> Placer<'a> {
    pub(crate) fn new(
        days: &'a [DayPlan],
        index: &'a mut AvailabilityIndex,
        max_load: &'a HashMap<String, u32>,
    ) -> Self {
        Self {
            days,
            index,
            max_load,
        }
    }

    /// Attempts to place one unit, appending its slot(s) to `grid`.
    ///
    /// Returns `false` when no (day, room, teacher, period) combination
    /// satisfies the constraints; the grid is untouched in that case.
    pub(crate) fn place(
        &mut self,
        course: &Course,
        kind: SessionKind,
        teacher_candidates: &[String],
        room_candidates: &[String],
        grid: &mut Vec<Slot>,
    ) -> bool {
        match kind {
            SessionKind::Single => self.place_single(course, teacher_candidates, room_candidates, grid),
            SessionKind::DoubleLab => self.place_double(course, teacher_candidates, room_candidates, grid),
        }
    }

    fn max_load_of(&self, teacher_id: &str) -> u32 {
        self.max_load
            .get(teacher_id)
            .copied()
            .unwrap_or(DEFAULT_MAX_LOAD_PER_DAY)
    }

    fn place_single(
        &mut self,
        course: &Course,
        teacher_candidates: &[String],
        room_candidates: &[String],
        grid: &mut Vec<Slot>,
    ) -> bool {
        for plan in self.days {
            for room in room_candidates {
                for teacher in teacher_candidates {
                    let cap = self.max_load_of(teacher);
                    for period in 1..=plan.periods {
                        if self.index.load_of(teacher, plan.day) >= cap {
                            break;
                        }
                        if self.index.is_free(plan.day, period, teacher, room) {
                            self.index.commit(plan.day, period, teacher, room);
                            grid.push(slot(plan.day, period, course, teacher, room));
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    fn place_double(
        &mut self,
        course: &Course,
        teacher_candidates: &[String],
        room_candidates: &[String],
        grid: &mut Vec<Slot>,
    ) -> bool {
        for plan in self.days {
            for room in room_candidates {
                for teacher in teacher_candidates {
                    let cap = self.max_load_of(teacher);
                    // Last period excluded: the pair must fit inside the day.
                    for period in 1..plan.periods {
                        if self.index.load_of(teacher, plan.day) + 2 > cap {
                            break;
                        }
                        if self.index.is_free(plan.day, period, teacher, room)
                            && self.index.is_free(plan.day, period + 1, teacher, room)
                        {
                            self.index.commit(plan.day, period, teacher, room);
                            self.index.commit(plan.day, period + 1, teacher, room);
                            grid.push(slot(plan.day, period, course, teacher, room));
                            grid.push(slot(plan.day, period + 1, course, teacher, room));
                            return true;
                        }
                    }
                }
            }
        }
        false
    }
}

fn slot(day: u8, period: u32, course: &Course, teacher: &str, room: &str) -> Slot {
    Slot {
        day,
        period,
        course: course.id.clone(),
        teacher: teacher.to_owned(),
        room: room.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::availability::day_plans;
    use crate::models::{BreakRule, DayConfig, Settings, Teacher};

    fn one_day_settings(periods: u32) -> Settings {
        Settings::new()
            .with_working_days(vec![1])
            .with_day(DayConfig::new(1).with_periods(periods))
    }

    fn caps(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries.iter().map(|(id, c)| (id.to_string(), *c)).collect()
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_takes_first_free_period() {
        let settings = one_day_settings(6);
        let mut index = AvailabilityIndex::new(&settings, &[]);
        let days = day_plans(&settings);
        let max_load = caps(&[("t1", 6)]);
        let mut placer = Placer::new(&days, &mut index, &max_load);
        let course = Course::lecture("c1", "CS101");
        let mut grid = Vec::new();

        assert!(placer.place(&course, SessionKind::Single, &ids(&["t1"]), &ids(&["r1"]), &mut grid));
        assert!(placer.place(&course, SessionKind::Single, &ids(&["t1"]), &ids(&["r1"]), &mut grid));
        assert_eq!(grid[0].period, 1);
        assert_eq!(grid[1].period, 2);
    }

    #[test]
    fn test_double_commits_contiguous_pair() {
        let settings = Settings::new().with_working_days(vec![1]).with_day(
            DayConfig::new(1)
                .with_periods(6)
                .with_tea_break(BreakRule::at_period(2, 1)),
        );
        let mut index = AvailabilityIndex::new(&settings, &[]);
        let days = day_plans(&settings);
        let max_load = caps(&[("t1", 6)]);
        let mut placer = Placer::new(&days, &mut index, &max_load);
        let course = Course::lab("c1", "PHY201");
        let mut grid = Vec::new();

        // Period 2 is a break, so 1-2 and 2-3 are out; first fit is 3-4.
        assert!(placer.place(&course, SessionKind::DoubleLab, &ids(&["t1"]), &ids(&["r1"]), &mut grid));
        assert_eq!(grid.len(), 2);
        assert_eq!((grid[0].period, grid[1].period), (3, 4));
        assert_eq!(grid[0].day, grid[1].day);
        assert_eq!(grid[0].room, grid[1].room);
        assert_eq!(grid[0].teacher, grid[1].teacher);
    }

    #[test]
    fn test_double_needs_two_units_of_headroom() {
        let settings = one_day_settings(6);
        let teachers = [Teacher::new("t1").with_max_load(1)];
        let mut index = AvailabilityIndex::new(&settings, &teachers);
        let days = day_plans(&settings);
        let max_load = caps(&[("t1", 1)]);
        let mut placer = Placer::new(&days, &mut index, &max_load);
        let course = Course::lab("c1", "PHY201");
        let mut grid = Vec::new();

        assert!(!placer.place(&course, SessionKind::DoubleLab, &ids(&["t1"]), &ids(&["r1"]), &mut grid));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_busy_room_tries_next_room() {
        let settings = one_day_settings(1);
        let mut index = AvailabilityIndex::new(&settings, &[]);
        index.commit(1, 1, "other", "r1");
        let days = day_plans(&settings);
        let max_load = caps(&[("t1", 6)]);
        let mut placer = Placer::new(&days, &mut index, &max_load);
        let course = Course::lecture("c1", "CS101");
        let mut grid = Vec::new();

        assert!(placer.place(&course, SessionKind::Single, &ids(&["t1"]), &ids(&["r1", "r2"]), &mut grid));
        assert_eq!(grid[0].room, "r2");
    }

    #[test]
    fn test_unknown_teacher_uses_default_cap() {
        let settings = one_day_settings(6);
        let mut index = AvailabilityIndex::new(&settings, &[]);
        let days = day_plans(&settings);
        let max_load = HashMap::new();
        let mut placer = Placer::new(&days, &mut index, &max_load);
        let course = Course::lecture("c1", "CS101").with_teacher("ghost");
        let mut grid = Vec::new();

        assert!(placer.place(&course, SessionKind::Single, &ids(&["ghost"]), &ids(&["r1"]), &mut grid));
        assert_eq!(grid[0].teacher, "ghost");
    }

    #[test]
    fn test_exhausted_space_leaves_grid_untouched() {
        let settings = one_day_settings(1);
        let mut index = AvailabilityIndex::new(&settings, &[]);
        let days = day_plans(&settings);
        let max_load = caps(&[("t1", 6)]);
        let mut placer = Placer::new(&days, &mut index, &max_load);
        let course = Course::lecture("c1", "CS101");
        let mut grid = Vec::new();

        assert!(placer.place(&course, SessionKind::Single, &ids(&["t1"]), &ids(&["r1"]), &mut grid));
        assert!(!placer.place(&course, SessionKind::Single, &ids(&["t1"]), &ids(&["r1"]), &mut grid));
        assert_eq!(grid.len(), 1);
    }
}
