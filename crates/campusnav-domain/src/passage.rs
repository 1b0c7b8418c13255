//! Passage aggregate — a ground link between two floors of different
//! buildings.

use serde::{Deserialize, Serialize};

use crate::building::BuildingCode;
use crate::error::DomainError;
use crate::ids::{FloorId, PassageId};
use crate::position::GridPosition;

/// One side of a passage: the floor it opens onto and the two boundary
/// cells it occupies there. Carries the floor number and building code so
/// the map generator can emit destination metadata without extra lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassageEndpoint {
    floor_id: FloorId,
    floor_number: i32,
    building_code: BuildingCode,
    first: GridPosition,
    last: GridPosition,
}

impl PassageEndpoint {
    pub fn new(
        floor_id: FloorId,
        floor_number: i32,
        building_code: BuildingCode,
        first: GridPosition,
        last: GridPosition,
    ) -> Self {
        Self {
            floor_id,
            floor_number,
            building_code,
            first,
            last,
        }
    }

    pub fn floor_id(&self) -> FloorId {
        self.floor_id
    }

    pub fn floor_number(&self) -> i32 {
        self.floor_number
    }

    pub fn building_code(&self) -> &BuildingCode {
        &self.building_code
    }

    pub fn first(&self) -> GridPosition {
        self.first
    }

    pub fn last(&self) -> GridPosition {
        self.last
    }
}

/// Passage aggregate. Both endpoints are expected to sit flush with an
/// outer wall of their building; that is a creation-time rule, not
/// re-checked here or by the map generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    id: PassageId,
    start: PassageEndpoint,
    end: PassageEndpoint,
}

impl Passage {
    pub fn new(
        id: PassageId,
        start: PassageEndpoint,
        end: PassageEndpoint,
    ) -> Result<Self, DomainError> {
        if start.floor_id() == end.floor_id() {
            return Err(DomainError::PassageSameFloor);
        }
        Ok(Self { id, start, end })
    }

    pub fn id(&self) -> PassageId {
        self.id
    }

    pub fn start(&self) -> &PassageEndpoint {
        &self.start
    }

    pub fn end(&self) -> &PassageEndpoint {
        &self.end
    }

    /// Split into (local, remote, is_start) relative to `floor_id`, or
    /// `None` when the passage does not touch that floor.
    pub fn endpoint_on(
        &self,
        floor_id: FloorId,
    ) -> Option<(&PassageEndpoint, &PassageEndpoint, bool)> {
        if self.start.floor_id() == floor_id {
            Some((&self.start, &self.end, true))
        } else if self.end.floor_id() == floor_id {
            Some((&self.end, &self.start, false))
        } else {
            None
        }
    }

    pub fn touches_floor(&self, floor_id: FloorId) -> bool {
        self.endpoint_on(floor_id).is_some()
    }
}
