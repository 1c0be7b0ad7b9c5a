//! Timetable domain models.
//!
//! The immutable inputs of a generation run (`Course`, `Room`, `Teacher`,
//! `Settings`) and its output (`Timetable` with its `Slot` grid). All
//! types (de)serialize to the stored document shapes: camelCase field
//! names, `"LECTURE"`/`"LAB"` kind values.
//!
//! Break rules deserve a note: settings documents carry two legacy break
//! shapes, both normalized into one canonical [`BreakWindow`] predicate
//! at ingestion (see [`BreakRule::normalize`]).

mod course;
mod room;
mod settings;
mod teacher;
mod timetable;

pub use course::{Course, CourseKind};
pub use room::{Room, RoomKind};
pub use settings::{BreakRule, BreakWindow, DayConfig, Settings, DEFAULT_PERIODS};
pub use teacher::{Teacher, UnavailableSlot, DEFAULT_MAX_LOAD_PER_DAY};
pub use timetable::{ClassKey, Slot, Timetable};
