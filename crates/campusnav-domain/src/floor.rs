//! Floor aggregate.

use serde::{Deserialize, Serialize};

use crate::building::{Building, Description};
use crate::ids::FloorId;

/// A floor of a building. Cannot exist without its building; floor-number
/// uniqueness per building is enforced by the service layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    id: FloorId,
    building: Building,
    floor_number: i32,
    description: Option<Description>,
    /// Raw JSON accepted by the floor-plan validator. Opaque here.
    floor_plan: Option<String>,
}

impl Floor {
    pub fn new(id: FloorId, building: Building, floor_number: i32) -> Self {
        Self {
            id,
            building,
            floor_number,
            description: None,
            floor_plan: None,
        }
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn id(&self) -> FloorId {
        self.id
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn floor_number(&self) -> i32 {
        self.floor_number
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn floor_plan(&self) -> Option<&str> {
        self.floor_plan.as_deref()
    }

    /// Attach a floor-plan blob. The caller is expected to have run it
    /// through the floor-plan validator first.
    pub fn set_floor_plan(&mut self, raw_json: String) {
        self.floor_plan = Some(raw_json);
    }

    pub fn set_description(&mut self, description: Option<Description>) {
        self.description = description;
    }
}
