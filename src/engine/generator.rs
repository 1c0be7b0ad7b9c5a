//! Generation driver.
//!
//! Orchestrates one run: check settings, filter the course roster to the
//! requested class, expand requirements, place every unit in expansion
//! order, then replace the stored grid wholesale and report counts.
//!
//! Runs for the same class key are serialized through a per-key mutex so
//! that "one generation fully replaces the grid" survives concurrent
//! requests; runs for different keys proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::availability::{day_plans, AvailabilityIndex};
use super::candidates::CandidateSelector;
use super::expand::{expand_requirements, required_periods};
use super::placement::Placer;
use crate::error::{GenerateError, GenerateResult};
use crate::models::{ClassKey, Course, Room, Settings, Teacher, Timetable};
use crate::store::TimetableStore;

/// Read-only input snapshot for one generation run.
///
/// The surrounding system loads these collections (from whatever storage
/// it owns) and hands them over already materialized; the engine never
/// queries storage for inputs.
#[derive(Debug, Clone, Default)]
pub struct GenerationInput {
    /// Global scheduling settings. Absence aborts the run.
    pub settings: Option<Settings>,
    /// Courses for every class; the run filters to its class key.
    pub courses: Vec<Course>,
    /// The full room pool.
    pub rooms: Vec<Room>,
    /// The full teacher pool.
    pub teachers: Vec<Teacher>,
}

impl GenerationInput {
    /// Creates an empty input snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scheduling settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Sets the course collection.
    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = courses;
        self
    }

    /// Sets the room pool.
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets the teacher pool.
    pub fn with_teachers(mut self, teachers: Vec<Teacher>) -> Self {
        self.teachers = teachers;
        self
    }
}

/// Outcome counts for one run.
///
/// `placed < required` means some session units found no feasible slot
/// and were dropped — the contract is to drop silently and let the
/// caller decide what an incomplete grid means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Periods the expanded units required.
    pub required: u32,
    /// Periods actually committed to the grid.
    pub placed: u32,
}

impl GenerationReport {
    /// Whether every required period was placed.
    pub fn is_complete(&self) -> bool {
        self.placed == self.required
    }
}

/// The timetable generation engine.
///
/// Owns the persistence collaborator and the per-class lock registry.
/// One engine serves many classes; each `generate` call is one
/// self-contained run whose working state (the availability index) is
/// created and discarded inside the call.
///
/// # Example
///
/// ```
/// use u_timetable::engine::{Engine, GenerationInput};
/// use u_timetable::models::{ClassKey, Course, DayConfig, Room, Settings, Teacher};
/// use u_timetable::store::MemoryStore;
///
/// let input = GenerationInput::new()
///     .with_settings(
///         Settings::new()
///             .with_working_days(vec![1])
///             .with_day(DayConfig::new(1).with_periods(6)),
///     )
///     .with_courses(vec![
///         Course::lecture("c1", "CS101").with_class("5", "B").with_hours(2),
///     ])
///     .with_rooms(vec![Room::lecture("r1")])
///     .with_teachers(vec![Teacher::new("t1").with_skill("CS101")]);
///
/// let engine = Engine::new(MemoryStore::new()).with_seed(7);
/// let report = engine.generate(&ClassKey::new("5", "B"), &input).unwrap();
/// assert_eq!(report.placed, 2);
/// assert!(report.is_complete());
/// ```
pub struct Engine<S: TimetableStore> {
    store: S,
    locks: Mutex<HashMap<ClassKey, Arc<Mutex<()>>>>,
    seed: Option<u64>,
}

impl<S: TimetableStore> Engine<S> {
    /// Creates an engine over a store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
            seed: None,
        }
    }

    /// Fixes the candidate-shuffle seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generates the timetable for one class and persists it, replacing
    /// any previous grid for that class.
    ///
    /// Fails only on missing settings or a store failure; an unplaceable
    /// session unit lowers the placed count instead.
    pub fn generate(&self, key: &ClassKey, input: &GenerationInput) -> GenerateResult<GenerationReport> {
        // Serialize runs per class key; the guard covers the whole
        // place-and-replace sequence.
        let key_lock = {
            let mut locks = self.locks.lock();
            Arc::clone(locks.entry(key.clone()).or_default())
        };
        let _run = key_lock.lock();

        let settings = input.settings.as_ref().ok_or(GenerateError::MissingSettings)?;

        let roster: Vec<Course> = input
            .courses
            .iter()
            .filter(|c| c.batch == key.batch && c.section == key.section)
            .cloned()
            .collect();

        let units = expand_requirements(&roster);
        let required = required_periods(&units);

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };

        let days = day_plans(settings);
        let mut index = AvailabilityIndex::new(settings, &input.teachers);
        let max_load: HashMap<String, u32> = input
            .teachers
            .iter()
            .map(|t| (t.id.clone(), t.max_load_per_day))
            .collect();
        let selector = CandidateSelector::new(&input.teachers, &input.rooms);

        let mut grid = Vec::new();
        let mut placer = Placer::new(&days, &mut index, &max_load);
        for unit in &units {
            let course = &roster[unit.course];
            let teacher_candidates = selector.teacher_candidates(course, &mut rng);
            let room_candidates = selector.room_candidates(unit.kind, &mut rng);
            if placer.place(course, unit.kind, &teacher_candidates, &room_candidates, &mut grid) {
                debug!(course = %course.code, kind = ?unit.kind, "session unit placed");
            } else {
                warn!(course = %course.code, kind = ?unit.kind, "no feasible slot, unit dropped");
            }
        }

        let placed = grid.len() as u32;
        let mut timetable = Timetable::new(&key.batch, &key.section);
        timetable.grid = grid;
        self.store.replace(&timetable)?;

        info!(class = %key, required, placed, "timetable generated");
        Ok(GenerationReport { required, placed })
    }
}
