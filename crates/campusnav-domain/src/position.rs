//! Floor-relative grid coordinates.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// An integer cell coordinate on a floor grid. Both axes start at 0 in the
/// building's top-left corner; x grows east, y grows south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    x: i32,
    y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Result<Self, DomainError> {
        if x < 0 {
            return Err(DomainError::BelowMinimum {
                field: "x coordinate",
                min: 0,
                value: x,
            });
        }
        if y < 0 {
            return Err(DomainError::BelowMinimum {
                field: "y coordinate",
                min: 0,
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

    /// The `[x, y]` pair in the client payload shape.
    pub fn as_pair(&self) -> [i32; 2] {
        [self.x, self.y]
    }
}
