//! Typed errors for domain construction and mutation.

use thiserror::Error;

/// A rejected value-object construction or aggregate mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("{field} exceeds {max} characters (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("{field} contains invalid characters: {value:?}")]
    InvalidCharacters { field: &'static str, value: String },

    #[error("{field} must be at least {min} (got {value})")]
    BelowMinimum {
        field: &'static str,
        min: i32,
        value: i32,
    },

    #[error("unknown orientation {0:?}")]
    UnknownOrientation(String),

    #[error("unknown room category {0:?}")]
    UnknownRoomCategory(String),

    #[error("room area is inverted: ({x0},{y0}) to ({x1},{y1})")]
    InvertedArea { x0: i32, y0: i32, x1: i32, y1: i32 },

    #[error("brand and model must be provided together")]
    BrandRequiresModel,

    #[error("floor {floor_number} belongs to another building and cannot be served")]
    FloorOutsideBuilding { floor_number: i32 },

    #[error("elevator already serves floor {floor_number}")]
    FloorAlreadyServed { floor_number: i32 },

    #[error("passage endpoints must lie on different floors")]
    PassageSameFloor,
}
