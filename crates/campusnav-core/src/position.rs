//! Spatial occupancy checks guarding elevator and room placement.
//!
//! One capability, four implementations: per-entity checkers for rooms,
//! elevators and passages, plus a composite that ANDs all three. The
//! composite takes its delegates through the constructor — no ambient
//! service locator.

use campusnav_domain::{ElevatorId, FloorId};
use log::trace;

use crate::ports::{ElevatorRepository, PassageRepository, RepoResult, RoomRepository};

/// Can `(x, y)` on `floor_id` take a new occupant?
///
/// `exclude` ignores one elevator during a self-update check, so an
/// elevator does not collide with its own current cell.
pub trait PositionChecker {
    fn is_position_available(
        &self,
        x: i32,
        y: i32,
        floor_id: FloorId,
        exclude: Option<ElevatorId>,
    ) -> RepoResult<bool>;
}

/// In-memory scan over the elevators on a floor. A cell is taken when it
/// matches an elevator's own cell or its door-swing cell.
pub struct ElevatorPositionChecker<'a> {
    elevators: &'a dyn ElevatorRepository,
}

impl<'a> ElevatorPositionChecker<'a> {
    pub fn new(elevators: &'a dyn ElevatorRepository) -> Self {
        Self { elevators }
    }
}

impl PositionChecker for ElevatorPositionChecker<'_> {
    fn is_position_available(
        &self,
        x: i32,
        y: i32,
        floor_id: FloorId,
        exclude: Option<ElevatorId>,
    ) -> RepoResult<bool> {
        let elevators = self.elevators.find_all_by_floor_id(floor_id)?;
        for elevator in elevators
            .iter()
            .filter(|e| Some(e.id()) != exclude)
        {
            let own = (elevator.position().x(), elevator.position().y());
            let door = elevator.door_cell();
            if (x, y) == own || (x, y) == door {
                trace!(
                    "cell ({x},{y}) on floor {floor_id:?} blocked by elevator {}",
                    elevator.unique_number()
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Thin delegation to the room repository's cell occupancy query.
pub struct RoomPositionChecker<'a> {
    rooms: &'a dyn RoomRepository,
}

impl<'a> RoomPositionChecker<'a> {
    pub fn new(rooms: &'a dyn RoomRepository) -> Self {
        Self { rooms }
    }
}

impl PositionChecker for RoomPositionChecker<'_> {
    fn is_position_available(
        &self,
        x: i32,
        y: i32,
        floor_id: FloorId,
        _exclude: Option<ElevatorId>,
    ) -> RepoResult<bool> {
        Ok(!self.rooms.is_cell_occupied(floor_id, x, y)?)
    }
}

/// Thin delegation to the passage repository's cell occupancy query.
pub struct PassagePositionChecker<'a> {
    passages: &'a dyn PassageRepository,
}

impl<'a> PassagePositionChecker<'a> {
    pub fn new(passages: &'a dyn PassageRepository) -> Self {
        Self { passages }
    }
}

impl PositionChecker for PassagePositionChecker<'_> {
    fn is_position_available(
        &self,
        x: i32,
        y: i32,
        floor_id: FloorId,
        _exclude: Option<ElevatorId>,
    ) -> RepoResult<bool> {
        Ok(!self.passages.is_cell_occupied(floor_id, x, y)?)
    }
}

/// Logical AND over the three per-entity checkers. Short-circuits on the
/// first unavailable answer; the delegates are independent predicates with
/// no side effects, so ordering is unobservable.
pub struct CompositePositionChecker<'a> {
    room: &'a dyn PositionChecker,
    elevator: &'a dyn PositionChecker,
    passage: &'a dyn PositionChecker,
}

impl<'a> CompositePositionChecker<'a> {
    pub fn new(
        room: &'a dyn PositionChecker,
        elevator: &'a dyn PositionChecker,
        passage: &'a dyn PositionChecker,
    ) -> Self {
        Self {
            room,
            elevator,
            passage,
        }
    }
}

impl PositionChecker for CompositePositionChecker<'_> {
    fn is_position_available(
        &self,
        x: i32,
        y: i32,
        floor_id: FloorId,
        exclude: Option<ElevatorId>,
    ) -> RepoResult<bool> {
        Ok(self.room.is_position_available(x, y, floor_id, exclude)?
            && self.elevator.is_position_available(x, y, floor_id, exclude)?
            && self.passage.is_position_available(x, y, floor_id, exclude)?)
    }
}
