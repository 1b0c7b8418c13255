//! Seeded demo campus generation.
//!
//! Builds a small two-building campus with floors, rooms, elevators and a
//! ground passage. Elevator cells are chosen by scanning through the
//! composite position checker, so the demo exercises the same occupancy
//! rules the service layer applies to user placements.

use campusnav_core::memory::{
    InMemoryElevatorRepository, InMemoryPassageRepository, InMemoryRoomRepository,
};
use campusnav_core::position::{
    CompositePositionChecker, ElevatorPositionChecker, PassagePositionChecker, PositionChecker,
    RoomPositionChecker,
};
use campusnav_domain::room::{DoorPlacement, RoomArea, RoomName};
use campusnav_domain::{
    Building, BuildingCode, BuildingDimensions, BuildingId, Elevator, ElevatorId,
    ElevatorPosition, Floor, FloorId, GridPosition, Orientation, Passage, PassageEndpoint,
    PassageId, Room, RoomCategory, RoomId,
};
use rand::Rng;

pub struct DemoCampus {
    pub buildings: Vec<Building>,
    pub floors: Vec<Floor>,
    pub rooms: Vec<Room>,
    pub elevators: Vec<Elevator>,
    pub passages: Vec<Passage>,
}

/// Generate the demo campus. Deterministic for a fixed rng seed.
pub fn generate_campus(rng: &mut impl Rng) -> DemoCampus {
    let mut campus = DemoCampus {
        buildings: Vec::new(),
        floors: Vec::new(),
        rooms: Vec::new(),
        elevators: Vec::new(),
        passages: Vec::new(),
    };

    let mut next_floor_id = 1u32;
    let mut next_room_id = 1u32;

    for (building_idx, code) in ["A", "B"].iter().enumerate() {
        let building_id = BuildingId(building_idx as u32 + 1);
        let width = rng.gen_range(10..=14);
        let length = rng.gen_range(10..=14);
        let building = Building::new(
            building_id,
            BuildingCode::new(*code).expect("demo building code"),
            BuildingDimensions::new(width, length).expect("demo dimensions"),
        );
        campus.buildings.push(building.clone());

        let floor_count = rng.gen_range(2..=3);
        let mut building_floors = Vec::new();
        for number in 0..floor_count {
            let floor = Floor::new(FloorId(next_floor_id), building.clone(), number);
            next_floor_id += 1;
            building_floors.push(floor.clone());
            campus.floors.push(floor.clone());

            campus.rooms.push(make_room(
                &mut next_room_id,
                &floor,
                rng,
                width,
                length,
            ));
        }

        // One elevator per building, placed through the occupancy rules.
        let elevator = place_elevator(
            ElevatorId(building_id.0),
            &building_floors,
            &campus.rooms,
            &campus.passages,
            building_id,
        );
        campus.elevators.push(elevator);
    }

    // Ground passage linking the two buildings along their left walls.
    let a_ground = &campus.floors[0];
    let b_ground = campus
        .floors
        .iter()
        .find(|f| f.building().id() == BuildingId(2))
        .expect("building B has floors");
    let passage = Passage::new(
        PassageId(1),
        left_wall_endpoint(a_ground, 4),
        left_wall_endpoint(b_ground, 4),
    )
    .expect("demo passage endpoints are on different floors");
    campus.passages.push(passage);

    campus
}

fn make_room(
    next_room_id: &mut u32,
    floor: &Floor,
    rng: &mut impl Rng,
    width: i32,
    length: i32,
) -> Room {
    // Keep the footprint away from the left/top border and the far walls.
    let x0 = rng.gen_range(1..=2);
    let y0 = rng.gen_range(1..=2);
    let x1 = rng.gen_range(x0 + 1..width / 2);
    let y1 = rng.gen_range(y0 + 1..length / 2);

    let id = RoomId(*next_room_id);
    *next_room_id += 1;
    Room::new(
        id,
        floor.id(),
        RoomName::new(format!(
            "{}-{}{:02}",
            floor.building().code().as_str(),
            floor.floor_number(),
            id.0
        ))
        .expect("demo room name"),
        RoomCategory::Office,
        RoomArea::new(pos(x0, y0), pos(x1, y1)).expect("demo room area"),
        DoorPlacement::new(pos(x1, (y0 + y1) / 2), Orientation::East),
    )
}

/// First cell the composite checker accepts, scanning row-major through
/// the building interior.
fn place_elevator(
    id: ElevatorId,
    building_floors: &[Floor],
    rooms: &[Room],
    passages: &[Passage],
    building_id: BuildingId,
) -> Elevator {
    let room_repo = InMemoryRoomRepository::new(rooms.to_vec());
    let elevator_repo = InMemoryElevatorRepository::new(vec![]);
    let passage_repo = InMemoryPassageRepository::new(passages.to_vec());

    let room_checker = RoomPositionChecker::new(&room_repo);
    let elevator_checker = ElevatorPositionChecker::new(&elevator_repo);
    let passage_checker = PassagePositionChecker::new(&passage_repo);
    let composite =
        CompositePositionChecker::new(&room_checker, &elevator_checker, &passage_checker);

    // Check the cell itself and the door-swing cell south of it, the same
    // double check the service layer runs before accepting a placement.
    let dims = building_floors[0].building().dimensions();
    let mut cell = None;
    'scan: for y in 1..dims.length() - 1 {
        for x in 1..dims.width() - 1 {
            let free_on_all = building_floors.iter().try_fold(true, |acc, f| {
                let own = composite.is_position_available(x, y, f.id(), None)?;
                let door = composite.is_position_available(x, y + 1, f.id(), None)?;
                Ok::<bool, campusnav_core::RepositoryError>(acc && own && door)
            });
            if free_on_all.expect("in-memory repos cannot fail") {
                cell = Some((x, y));
                break 'scan;
            }
        }
    }
    let (x, y) = cell.expect("demo building has a free elevator cell");

    let mut elevator = Elevator::new(
        id,
        building_id,
        id.0,
        ElevatorPosition::new(x, y).expect("scanned cell is non-negative"),
        Orientation::South,
    );
    for floor in building_floors {
        elevator
            .serve_floor(floor.clone())
            .expect("demo floors belong to the elevator's building");
    }
    elevator
}

fn left_wall_endpoint(floor: &Floor, y: i32) -> PassageEndpoint {
    PassageEndpoint::new(
        floor.id(),
        floor.floor_number(),
        floor.building().code().clone(),
        pos(0, y),
        pos(0, y + 1),
    )
}

fn pos(x: i32, y: i32) -> GridPosition {
    GridPosition::new(x, y).expect("demo coordinates are non-negative")
}
