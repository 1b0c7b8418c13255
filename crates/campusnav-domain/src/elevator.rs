//! Elevator aggregate and its position value object.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::floor::Floor;
use crate::ids::{BuildingId, ElevatorId};
use crate::orientation::Orientation;

/// Cell an elevator occupies on every floor it serves. Integers at or above
/// the configured minimum; re-created on update, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElevatorPosition {
    x: i32,
    y: i32,
}

impl ElevatorPosition {
    pub const MIN_COORDINATE: i32 = 0;

    pub fn new(x: i32, y: i32) -> Result<Self, DomainError> {
        if x < Self::MIN_COORDINATE {
            return Err(DomainError::BelowMinimum {
                field: "elevator x position",
                min: Self::MIN_COORDINATE,
                value: x,
            });
        }
        if y < Self::MIN_COORDINATE {
            return Err(DomainError::BelowMinimum {
                field: "elevator y position",
                min: Self::MIN_COORDINATE,
                value: y,
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Optional manufacturer details. Brand and model require each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorIdentification {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub description: Option<String>,
}

const IDENTIFICATION_MAX_LEN: usize = 50;
const DESCRIPTION_MAX_LEN: usize = 255;

impl ElevatorIdentification {
    pub fn new(
        brand: Option<String>,
        model: Option<String>,
        serial_number: Option<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        if brand.is_some() != model.is_some() {
            return Err(DomainError::BrandRequiresModel);
        }
        for (field, value, max) in [
            ("elevator brand", &brand, IDENTIFICATION_MAX_LEN),
            ("elevator model", &model, IDENTIFICATION_MAX_LEN),
            ("elevator serial number", &serial_number, IDENTIFICATION_MAX_LEN),
            ("elevator description", &description, DESCRIPTION_MAX_LEN),
        ] {
            if let Some(v) = value {
                if v.trim().is_empty() {
                    return Err(DomainError::Blank { field });
                }
                if v.chars().count() > max {
                    return Err(DomainError::TooLong {
                        field,
                        max,
                        len: v.chars().count(),
                    });
                }
            }
        }
        Ok(Self {
            brand,
            model,
            serial_number,
            description,
        })
    }
}

/// Elevator aggregate. Serves a set of floors that must all belong to its
/// owning building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elevator {
    id: ElevatorId,
    building_id: BuildingId,
    /// Sequential within the building, assigned by the service layer.
    unique_number: u32,
    identification: ElevatorIdentification,
    position: ElevatorPosition,
    orientation: Orientation,
    floors: Vec<Floor>,
}

impl Elevator {
    pub fn new(
        id: ElevatorId,
        building_id: BuildingId,
        unique_number: u32,
        position: ElevatorPosition,
        orientation: Orientation,
    ) -> Self {
        Self {
            id,
            building_id,
            unique_number,
            identification: ElevatorIdentification::default(),
            position,
            orientation,
            floors: Vec::new(),
        }
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn building_id(&self) -> BuildingId {
        self.building_id
    }

    pub fn unique_number(&self) -> u32 {
        self.unique_number
    }

    pub fn identification(&self) -> &ElevatorIdentification {
        &self.identification
    }

    pub fn position(&self) -> ElevatorPosition {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn serves_floor(&self, floor_number: i32) -> bool {
        self.floors.iter().any(|f| f.floor_number() == floor_number)
    }

    /// The cell in front of the elevator door. May fall outside the grid
    /// for edge-adjacent elevators; occupancy checks compare, not index.
    pub fn door_cell(&self) -> (i32, i32) {
        let (dx, dy) = self.orientation.door_offset();
        (self.position.x() + dx, self.position.y() + dy)
    }

    pub fn update_identification(
        &mut self,
        identification: ElevatorIdentification,
    ) -> Result<(), DomainError> {
        // Re-run the pair rule: callers may construct the struct literally.
        if identification.brand.is_some() != identification.model.is_some() {
            return Err(DomainError::BrandRequiresModel);
        }
        self.identification = identification;
        Ok(())
    }

    pub fn update_position(&mut self, position: ElevatorPosition) {
        self.position = position;
    }

    pub fn update_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Add a floor to the served set. Rejected if the floor belongs to a
    /// different building or is already served.
    pub fn serve_floor(&mut self, floor: Floor) -> Result<(), DomainError> {
        if floor.building().id() != self.building_id {
            return Err(DomainError::FloorOutsideBuilding {
                floor_number: floor.floor_number(),
            });
        }
        if self.floors.iter().any(|f| f.id() == floor.id()) {
            return Err(DomainError::FloorAlreadyServed {
                floor_number: floor.floor_number(),
            });
        }
        self.floors.push(floor);
        Ok(())
    }
}
