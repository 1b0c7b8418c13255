//! Campus domain model for campusnav.
//!
//! Value objects validate on construction and stay immutable; aggregates
//! expose result-returning mutators. Nothing here touches storage or the
//! network — repositories live behind the ports in `campusnav-core`.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`building`] | Building aggregate and its value objects (code, name, dimensions) |
//! | [`elevator`] | Elevator aggregate, position value object, served-floor rules |
//! | [`error`] | Typed construction/mutation errors |
//! | [`floor`] | Floor aggregate (owning building, number, optional plan blob) |
//! | [`ids`] | Integer id newtypes for the aggregates |
//! | [`orientation`] | Cardinal orientation with explicit wire conversion |
//! | [`passage`] | Inter-building passage with two floor endpoints |
//! | [`position`] | Grid coordinate value object |
//! | [`room`] | Room aggregate (area, category, door placement) |

pub mod building;
pub mod elevator;
pub mod error;
pub mod floor;
pub mod ids;
pub mod orientation;
pub mod passage;
pub mod position;
pub mod room;

pub use building::{Building, BuildingCode, BuildingDimensions, BuildingName, Description};
pub use elevator::{Elevator, ElevatorIdentification, ElevatorPosition};
pub use error::DomainError;
pub use floor::Floor;
pub use ids::{BuildingId, ElevatorId, FloorId, PassageId, RoomId};
pub use orientation::Orientation;
pub use passage::{Passage, PassageEndpoint};
pub use position::GridPosition;
pub use room::{DoorPlacement, Room, RoomArea, RoomCategory, RoomName};
