//! Room model.

use serde::{Deserialize, Serialize};

/// A room that sessions can be placed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Seating capacity.
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Lecture room or lab.
    #[serde(rename = "type", default)]
    pub kind: RoomKind,
}

/// Room classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomKind {
    /// General teaching room.
    #[default]
    Lecture,
    /// Lab room.
    Lab,
}

fn default_capacity() -> u32 {
    60
}

impl Room {
    /// Creates a lecture room with the default capacity.
    pub fn new(id: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: default_capacity(),
            kind,
        }
    }

    /// Creates a lecture room.
    pub fn lecture(id: impl Into<String>) -> Self {
        Self::new(id, RoomKind::Lecture)
    }

    /// Creates a lab room.
    pub fn lab(id: impl Into<String>) -> Self {
        Self::new(id, RoomKind::Lab)
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this is a lab room.
    pub fn is_lab(&self) -> bool {
        self.kind == RoomKind::Lab
    }
}
