//! Weekly class timetable generation.
//!
//! Assigns a class's weekly teaching sessions (derived from per-course
//! hour requirements) to concrete (day, period, teacher, room) slots,
//! subject to room/teacher contention, break windows, per-teacher
//! unavailability, and daily load limits. Two-period lab blocks are
//! placed as atomic pairs.
//!
//! The solver is greedy first-fit by contract: units are attempted in
//! deterministic roster order, candidates are tried in randomized
//! (seedable) order, and nothing backtracks. A unit that fits nowhere is
//! dropped; the [`engine::GenerationReport`] surfaces required vs. placed
//! counts so incomplete schedules are detectable.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Room`, `Teacher`, `Settings`,
//!   `DayConfig`, break rules, `Timetable`/`Slot`
//! - **`engine`**: Requirement expansion, candidate selection, the
//!   run-scoped availability index, first-fit placement, and the
//!   generation driver
//! - **`store`**: Persistence boundary — `TimetableStore` trait with
//!   in-memory and JSON-file backends
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   teacher references, day configuration)
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod engine;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;
