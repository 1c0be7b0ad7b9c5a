//! Timetable generation engine.
//!
//! # Algorithm
//!
//! 1. Expand each course's weekly hours into session units (lab hours
//!    pair into two-period blocks), in deterministic roster order.
//! 2. For each unit, build randomized teacher and room candidate lists.
//! 3. Scan day × room × teacher × period and commit the first
//!    combination that is free, outside breaks and unavailability, and
//!    within the teacher's daily load cap. Double blocks commit both
//!    periods atomically.
//! 4. Replace the class's stored grid wholesale and report
//!    required vs. placed counts.
//!
//! Greedy first-fit, no backtracking: a unit that fits nowhere is
//! dropped, visible only through the report's placed count.
//!
//! # Reference
//!
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod availability;
mod candidates;
mod expand;
mod generator;
mod placement;

pub use availability::{day_plans, AvailabilityIndex, DayPlan};
pub use candidates::CandidateSelector;
pub use expand::{expand_requirements, required_periods, SessionKind, SessionUnit};
pub use generator::{Engine, GenerationInput, GenerationReport};
