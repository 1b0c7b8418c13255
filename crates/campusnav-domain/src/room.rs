//! Room aggregate — rectangular area, category, door placement.

use serde::{Deserialize, Serialize};

use crate::building::Description;
use crate::error::DomainError;
use crate::ids::{FloorId, RoomId};
use crate::orientation::Orientation;
use crate::position::GridPosition;

/// What a room is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    Office,
    Amphitheater,
    Laboratory,
    Other,
}

impl RoomCategory {
    pub fn as_wire_str(self) -> &'static str {
        match self {
            RoomCategory::Office => "OFFICE",
            RoomCategory::Amphitheater => "AMPHITHEATER",
            RoomCategory::Laboratory => "LABORATORY",
            RoomCategory::Other => "OTHER",
        }
    }

    pub fn from_wire_str(raw: &str) -> Result<Self, DomainError> {
        match raw {
            "OFFICE" => Ok(RoomCategory::Office),
            "AMPHITHEATER" => Ok(RoomCategory::Amphitheater),
            "LABORATORY" => Ok(RoomCategory::Laboratory),
            "OTHER" => Ok(RoomCategory::Other),
            other => Err(DomainError::UnknownRoomCategory(other.to_string())),
        }
    }
}

/// Inclusive rectangular footprint from `initial` to `final` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomArea {
    initial: GridPosition,
    end: GridPosition,
}

impl RoomArea {
    pub fn new(initial: GridPosition, end: GridPosition) -> Result<Self, DomainError> {
        if end.x() < initial.x() || end.y() < initial.y() {
            return Err(DomainError::InvertedArea {
                x0: initial.x(),
                y0: initial.y(),
                x1: end.x(),
                y1: end.y(),
            });
        }
        Ok(Self { initial, end })
    }

    pub fn initial(&self) -> GridPosition {
        self.initial
    }

    pub fn end(&self) -> GridPosition {
        self.end
    }
}

/// Door cell plus facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorPlacement {
    cell: GridPosition,
    facing: Orientation,
}

impl DoorPlacement {
    pub fn new(cell: GridPosition, facing: Orientation) -> Self {
        Self { cell, facing }
    }

    pub fn cell(&self) -> GridPosition {
        self.cell
    }

    pub fn facing(&self) -> Orientation {
        self.facing
    }
}

/// Room name, up to 50 characters, not blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomName(String);

impl RoomName {
    pub const MAX_LEN: usize = 50;

    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::Blank { field: "room name" });
        }
        if raw.chars().count() > Self::MAX_LEN {
            return Err(DomainError::TooLong {
                field: "room name",
                max: Self::MAX_LEN,
                len: raw.chars().count(),
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Room aggregate. Coordinates are validated in-bounds at creation by the
/// service layer; the map generator relies on that and does not re-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    floor_id: FloorId,
    name: RoomName,
    category: RoomCategory,
    description: Option<Description>,
    area: RoomArea,
    door: DoorPlacement,
}

impl Room {
    pub fn new(
        id: RoomId,
        floor_id: FloorId,
        name: RoomName,
        category: RoomCategory,
        area: RoomArea,
        door: DoorPlacement,
    ) -> Self {
        Self {
            id,
            floor_id,
            name,
            category,
            description: None,
            area,
            door,
        }
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn floor_id(&self) -> FloorId {
        self.floor_id
    }

    pub fn name(&self) -> &RoomName {
        &self.name
    }

    pub fn category(&self) -> RoomCategory {
        self.category
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn area(&self) -> RoomArea {
        self.area
    }

    pub fn door(&self) -> DoorPlacement {
        self.door
    }
}
