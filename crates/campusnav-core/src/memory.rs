//! In-memory repositories.
//!
//! Small enough to scan linearly. Used by unit tests and the simtest
//! harness — no DB, no networking, same contracts as the storage layer.

use campusnav_domain::{Elevator, FloorId, Passage, Room};

use crate::ports::{
    ElevatorRepository, PassageRepository, RepoResult, RoomRepository,
};

pub struct InMemoryRoomRepository {
    rooms: Vec<Room>,
}

impl InMemoryRoomRepository {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }
}

impl RoomRepository for InMemoryRoomRepository {
    fn find_by_floor_id(&self, floor_id: FloorId) -> RepoResult<Vec<Room>> {
        Ok(self
            .rooms
            .iter()
            .filter(|r| r.floor_id() == floor_id)
            .cloned()
            .collect())
    }

    fn is_cell_occupied(&self, floor_id: FloorId, x: i32, y: i32) -> RepoResult<bool> {
        // Envelope = footprint plus the wall ring painted one cell past the
        // far edges.
        Ok(self.rooms.iter().any(|r| {
            r.floor_id() == floor_id
                && x >= r.area().initial().x()
                && x <= r.area().end().x() + 1
                && y >= r.area().initial().y()
                && y <= r.area().end().y() + 1
        }))
    }
}

pub struct InMemoryElevatorRepository {
    elevators: Vec<Elevator>,
}

impl InMemoryElevatorRepository {
    pub fn new(elevators: Vec<Elevator>) -> Self {
        Self { elevators }
    }

    pub fn push(&mut self, elevator: Elevator) {
        self.elevators.push(elevator);
    }
}

impl ElevatorRepository for InMemoryElevatorRepository {
    fn find_all_by_floor_id(&self, floor_id: FloorId) -> RepoResult<Vec<Elevator>> {
        Ok(self
            .elevators
            .iter()
            .filter(|e| e.floors().iter().any(|f| f.id() == floor_id))
            .cloned()
            .collect())
    }
}

pub struct InMemoryPassageRepository {
    passages: Vec<Passage>,
}

impl InMemoryPassageRepository {
    pub fn new(passages: Vec<Passage>) -> Self {
        Self { passages }
    }
}

impl PassageRepository for InMemoryPassageRepository {
    fn find_by_floor_id(&self, floor_id: FloorId) -> RepoResult<Vec<Passage>> {
        Ok(self
            .passages
            .iter()
            .filter(|p| p.touches_floor(floor_id))
            .cloned()
            .collect())
    }

    fn is_cell_occupied(&self, floor_id: FloorId, x: i32, y: i32) -> RepoResult<bool> {
        Ok(self.passages.iter().any(|p| {
            p.endpoint_on(floor_id).is_some_and(|(local, _, _)| {
                (local.first().x(), local.first().y()) == (x, y)
                    || (local.last().x(), local.last().y()) == (x, y)
            })
        }))
    }
}
