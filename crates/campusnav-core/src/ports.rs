//! Repository ports consumed by the core.
//!
//! The storage layer (out of scope here) implements these; `memory`
//! provides Vec-backed versions for tests and the harness. All calls are
//! synchronous; adapters over async storage can block internally.

use campusnav_domain::{Elevator, FloorId, Passage, Room};
use thiserror::Error;

/// Failure surfaced by a repository implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("floor {0:?} not found")]
    FloorNotFound(FloorId),
}

pub type RepoResult<T> = Result<T, RepositoryError>;

/// Rooms of a floor, plus the DB-side cell occupancy query the room
/// position checker delegates to.
pub trait RoomRepository {
    fn find_by_floor_id(&self, floor_id: FloorId) -> RepoResult<Vec<Room>>;

    /// Whether `(x, y)` falls inside any room envelope on the floor
    /// (footprint plus its wall ring).
    fn is_cell_occupied(&self, floor_id: FloorId, x: i32, y: i32) -> RepoResult<bool>;
}

/// Elevators serving a floor.
pub trait ElevatorRepository {
    fn find_all_by_floor_id(&self, floor_id: FloorId) -> RepoResult<Vec<Elevator>>;
}

/// Passages touching a floor, plus the DB-side cell occupancy query the
/// passage position checker delegates to.
pub trait PassageRepository {
    fn find_by_floor_id(&self, floor_id: FloorId) -> RepoResult<Vec<Passage>>;

    /// Whether `(x, y)` is one of a passage's boundary cells on the floor.
    fn is_cell_occupied(&self, floor_id: FloorId, x: i32, y: i32) -> RepoResult<bool>;
}
