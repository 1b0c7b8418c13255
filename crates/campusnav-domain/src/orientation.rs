//! Cardinal orientation shared by elevators and room doors.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Which way an elevator or room door faces. Determines the adjacent
/// door-swing cell and the heading a player receives on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// The wire-string form used by the client and persistence.
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Orientation::North => "NORTH",
            Orientation::South => "SOUTH",
            Orientation::East => "EAST",
            Orientation::West => "WEST",
        }
    }

    /// Parse the wire-string form. No implicit coercion: anything but the
    /// four exact tokens is rejected.
    pub fn from_wire_str(raw: &str) -> Result<Self, DomainError> {
        match raw {
            "NORTH" => Ok(Orientation::North),
            "SOUTH" => Ok(Orientation::South),
            "EAST" => Ok(Orientation::East),
            "WEST" => Ok(Orientation::West),
            other => Err(DomainError::UnknownOrientation(other.to_string())),
        }
    }

    /// Offset from a cell to the door-swing cell in front of it.
    pub fn door_offset(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, -1),
            Orientation::South => (0, 1),
            Orientation::East => (1, 0),
            Orientation::West => (-1, 0),
        }
    }
}
