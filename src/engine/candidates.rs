//! Candidate selection.
//!
//! Produces the ordered teacher and room candidate lists the placement
//! search walks. A pinned teacher short-circuits everything; otherwise
//! skill-matching teachers are preferred, falling back to the whole
//! pool. Rooms are drawn from the kind-matching pool (lab rooms for lab
//! blocks, general rooms otherwise), falling back to all rooms.
//!
//! Candidate order is shuffled so generation does not always pack the
//! same early teacher and room. The RNG is injected and seedable; the
//! scheduling invariants hold under any candidate order.

use rand::seq::SliceRandom;
use rand::Rng;

use super::expand::SessionKind;
use crate::models::{Course, Room, Teacher};

/// Builds randomized candidate lists from the teacher and room pools.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSelector<'a> {
    teachers: &'a [Teacher],
    rooms: &'a [Room],
}

impl<'a> CandidateSelector<'a> {
    /// Creates a selector over the run's pools.
    pub fn new(teachers: &'a [Teacher], rooms: &'a [Room]) -> Self {
        Self { teachers, rooms }
    }

    /// Teacher ids to try for a course, in trial order.
    ///
    /// Pinned teacher → that single id. Otherwise skill matches on the
    /// course code, shuffled; if none match, the full pool, shuffled.
    pub fn teacher_candidates<R: Rng>(&self, course: &Course, rng: &mut R) -> Vec<String> {
        if let Some(pinned) = &course.teacher {
            return vec![pinned.clone()];
        }

        let mut candidates: Vec<String> = self
            .teachers
            .iter()
            .filter(|t| t.can_teach(&course.code))
            .map(|t| t.id.clone())
            .collect();
        if candidates.is_empty() {
            candidates = self.teachers.iter().map(|t| t.id.clone()).collect();
        }
        candidates.shuffle(rng);
        candidates
    }

    /// Room ids to try for a session shape, in trial order.
    ///
    /// Lab blocks prefer lab rooms, singles prefer non-lab rooms; an
    /// empty preferred pool falls back to every room.
    pub fn room_candidates<R: Rng>(&self, kind: SessionKind, rng: &mut R) -> Vec<String> {
        let want_lab = kind == SessionKind::DoubleLab;
        let mut candidates: Vec<String> = self
            .rooms
            .iter()
            .filter(|r| r.is_lab() == want_lab)
            .map(|r| r.id.clone())
            .collect();
        if candidates.is_empty() {
            candidates = self.rooms.iter().map(|r| r.id.clone()).collect();
        }
        candidates.shuffle(rng);
        candidates
    }
}
