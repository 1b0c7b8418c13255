//! Core logic for campusnav.
//!
//! Everything here is synchronous, in-memory computation over domain
//! aggregates fetched through repository ports. Storage, HTTP and wiring
//! live outside this crate; the host supplies the `log` implementation.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`floor_map`] | Rasterize a floor's rooms/elevators/passages into a tile grid |
//! | [`floor_plan`] | Validate an uploaded floor-plan JSON payload |
//! | [`memory`] | Vec-backed repositories for tests and the harness |
//! | [`ports`] | Repository traits the core consumes |
//! | [`position`] | Occupancy checks guarding elevator placement |

pub mod floor_map;
pub mod floor_plan;
pub mod memory;
pub mod ports;
pub mod position;

pub use floor_map::{Connection, ConnectionType, FloorElement, FloorMap, FloorMapGenerator};
pub use floor_plan::{FloorPlanError, FloorPlanPayload, FloorPlanValidator};
pub use ports::{ElevatorRepository, PassageRepository, RepositoryError, RoomRepository};
pub use position::{
    CompositePositionChecker, ElevatorPositionChecker, PassagePositionChecker, PositionChecker,
    RoomPositionChecker,
};
