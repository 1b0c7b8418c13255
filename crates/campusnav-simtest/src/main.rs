//! Campusnav Headless Validation Harness
//!
//! Validates the domain model, occupancy rules and floor-map generation
//! without storage or HTTP. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p campusnav-simtest
//!   cargo run -p campusnav-simtest -- --verbose

use campusnav_core::floor_map::tile;
use campusnav_core::memory::{
    InMemoryElevatorRepository, InMemoryPassageRepository, InMemoryRoomRepository,
};
use campusnav_core::position::{ElevatorPositionChecker, PositionChecker};
use campusnav_core::{FloorMap, FloorMapGenerator, FloorPlanValidator};
use campusnav_domain::room::{DoorPlacement, RoomArea, RoomName};
use campusnav_domain::{
    Building, BuildingCode, BuildingDimensions, BuildingId, Elevator, ElevatorId,
    ElevatorPosition, Floor, FloorId, GridPosition, Orientation, Room, RoomCategory, RoomId,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod demo;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn check(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed,
            detail: detail.into(),
        }
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Campusnav Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Grid and border invariants
    results.extend(validate_grid_invariants());

    // 2. Room painting
    results.extend(validate_room_painting());

    // 3. Elevator occupancy rules
    results.extend(validate_occupancy());

    // 4. Passage connections and headings
    results.extend(validate_passages());

    // 5. Floor-plan upload validation
    results.extend(validate_floor_plans());

    // 6. Seeded demo campus end to end
    results.extend(validate_demo_campus(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Shared fixtures ─────────────────────────────────────────────────────

fn make_building(id: u32, code: &str, width: i32, length: i32) -> Building {
    Building::new(
        BuildingId(id),
        BuildingCode::new(code).expect("fixture code"),
        BuildingDimensions::new(width, length).expect("fixture dimensions"),
    )
}

fn make_floor(id: u32, building: &Building, number: i32) -> Floor {
    Floor::new(FloorId(id), building.clone(), number)
}

fn pos(x: i32, y: i32) -> GridPosition {
    GridPosition::new(x, y).expect("fixture position")
}

fn generate_empty(width: i32, length: i32) -> FloorMap {
    let rooms = InMemoryRoomRepository::new(vec![]);
    let elevators = InMemoryElevatorRepository::new(vec![]);
    let passages = InMemoryPassageRepository::new(vec![]);
    let floor = make_floor(1, &make_building(1, "B", width, length), 0);
    FloorMapGenerator::new(&rooms, &elevators, &passages)
        .calculate_floor_map(&floor)
        .expect("in-memory generation")
}

// ── 1. Grid invariants ──────────────────────────────────────────────────

fn validate_grid_invariants() -> Vec<TestResult> {
    println!("--- Grid Invariants ---");
    let mut results = Vec::new();

    for (w, l) in [(5, 5), (10, 10), (12, 7)] {
        let out = generate_empty(w, l);
        let rows_ok = out.map.len() == (l + 1) as usize;
        let cols_ok = out.map.iter().all(|r| r.len() == (w + 1) as usize);
        results.push(TestResult::check(
            "grid_size",
            rows_ok && cols_ok,
            format!("{}x{} building yields {} rows", w, l, out.map.len()),
        ));
    }

    let out = generate_empty(10, 10);
    let mut border_ok = out.map[0][0] == tile::CORNER && out.map[10][10] == tile::OPEN;
    for i in 1..10 {
        border_ok &= out.map[0][i] == tile::WALL_HORIZONTAL;
        border_ok &= out.map[10][i] == tile::WALL_HORIZONTAL;
        border_ok &= out.map[i][0] == tile::WALL_VERTICAL;
        border_ok &= out.map[i][10] == tile::WALL_VERTICAL;
        for j in 1..10 {
            border_ok &= out.map[i][j] == tile::OPEN;
        }
    }
    results.push(TestResult::check(
        "border_ring",
        border_ok,
        "empty 10x10 floor matches the base border rule",
    ));

    results
}

// ── 2. Room painting ────────────────────────────────────────────────────

fn validate_room_painting() -> Vec<TestResult> {
    println!("--- Room Painting ---");
    let mut results = Vec::new();

    let building = make_building(1, "B1", 10, 10);
    let floor = make_floor(1, &building, 0);
    let room = Room::new(
        RoomId(1),
        floor.id(),
        RoomName::new("Atrium").expect("fixture name"),
        RoomCategory::Other,
        RoomArea::new(pos(0, 0), pos(3, 3)).expect("fixture area"),
        DoorPlacement::new(pos(3, 1), Orientation::East),
    );

    let rooms = InMemoryRoomRepository::new(vec![room]);
    let elevators = InMemoryElevatorRepository::new(vec![]);
    let passages = InMemoryPassageRepository::new(vec![]);
    let out = FloorMapGenerator::new(&rooms, &elevators, &passages)
        .calculate_floor_map(&floor)
        .expect("generation");

    results.push(TestResult::check(
        "room_door_tile",
        out.map[1][4] == tile::DOOR_EAST_WEST,
        format!("east door paints 4 one cell east, got {}", out.map[1][4]),
    ));
    results.push(TestResult::check(
        "room_corner",
        out.map[0][0] == tile::CORNER,
        "room origin keeps the corner tile",
    ));
    results.push(TestResult::check(
        "room_far_walls",
        out.map[2][4] == tile::WALL_VERTICAL && out.map[4][2] == tile::WALL_HORIZONTAL,
        "far walls painted one cell past the footprint",
    ));
    let element = out.floor_elements.iter().find(|e| e.display_name == "Atrium");
    results.push(TestResult::check(
        "room_element",
        element.map(|e| e.init_coords) == Some([4, 1]),
        "door element anchored at the painted cell",
    ));

    results
}

// ── 3. Occupancy rules ──────────────────────────────────────────────────

fn validate_occupancy() -> Vec<TestResult> {
    println!("--- Occupancy ---");
    let mut results = Vec::new();

    let building = make_building(1, "B1", 10, 10);
    let floor = make_floor(1, &building, 0);
    let mut elevator = Elevator::new(
        ElevatorId(1),
        BuildingId(1),
        1,
        ElevatorPosition::new(3, 3).expect("fixture position"),
        Orientation::North,
    );
    elevator.serve_floor(floor.clone()).expect("same building");

    let repo = InMemoryElevatorRepository::new(vec![elevator]);
    let checker = ElevatorPositionChecker::new(&repo);
    let at = |x, y, exclude| {
        checker
            .is_position_available(x, y, floor.id(), exclude)
            .expect("in-memory check")
    };

    results.push(TestResult::check(
        "body_cell_blocked",
        !at(3, 3, None),
        "(3,3) unavailable",
    ));
    results.push(TestResult::check(
        "door_cell_blocked",
        !at(3, 2, None),
        "north door swing (3,2) unavailable",
    ));
    results.push(TestResult::check(
        "south_neighbor_free",
        at(3, 4, None),
        "(3,4) available",
    ));
    results.push(TestResult::check(
        "self_exclusion",
        at(3, 3, Some(ElevatorId(1))),
        "elevator ignores itself during update checks",
    ));

    results
}

// ── 4. Passages ─────────────────────────────────────────────────────────

fn validate_passages() -> Vec<TestResult> {
    use campusnav_core::floor_map::calculate_passage_direction;
    use campusnav_domain::{Passage, PassageEndpoint, PassageId};

    println!("--- Passages ---");
    let mut results = Vec::new();

    let headings = [
        ((0, 3), (0, 4), Some(90.0), "left wall"),
        ((3, 0), (4, 0), Some(0.0), "top wall"),
        ((9, 3), (9, 4), Some(270.0), "right wall"),
        ((3, 9), (4, 9), Some(180.0), "bottom wall"),
        ((4, 4), (4, 5), None, "interior (undefined)"),
    ];
    for (first, last, expected, label) in headings {
        let got =
            calculate_passage_direction(pos(first.0, first.1), pos(last.0, last.1), 10, 10);
        results.push(TestResult::check(
            "passage_heading",
            got == expected,
            format!("{label}: {got:?}"),
        ));
    }

    let building_a = make_building(1, "A", 10, 10);
    let floor_a = make_floor(1, &building_a, 0);
    let passage = Passage::new(
        PassageId(1),
        PassageEndpoint::new(
            floor_a.id(),
            0,
            building_a.code().clone(),
            pos(0, 4),
            pos(0, 5),
        ),
        PassageEndpoint::new(
            FloorId(2),
            1,
            BuildingCode::new("B").expect("fixture code"),
            pos(9, 2),
            pos(9, 3),
        ),
    )
    .expect("different floors");

    let rooms = InMemoryRoomRepository::new(vec![]);
    let elevators = InMemoryElevatorRepository::new(vec![]);
    let passages = InMemoryPassageRepository::new(vec![passage]);
    let out = FloorMapGenerator::new(&rooms, &elevators, &passages)
        .calculate_floor_map(&floor_a)
        .expect("generation");

    results.push(TestResult::check(
        "passage_connection_pair",
        out.connections.len() == 2,
        format!("{} connections for one passage", out.connections.len()),
    ));
    results.push(TestResult::check(
        "passage_tiles",
        out.map[4][0] == tile::PASSAGE_LEFT_LOW && out.map[5][0] == tile::PASSAGE_LEFT_HIGH,
        "left-wall endpoint pair painted 14/15",
    ));
    results.push(TestResult::check(
        "passage_highlight",
        out.floor_elements.len() == 1 && out.floor_elements[0].display_name.is_empty(),
        "start-point side emits the empty-label element",
    ));

    results
}

// ── 5. Floor plans ──────────────────────────────────────────────────────

fn validate_floor_plans() -> Vec<TestResult> {
    println!("--- Floor Plans ---");
    let mut results = Vec::new();

    let floor = make_floor(1, &make_building(1, "B1", 10, 10), 0);
    let good = r#"{
        "maze": { "size": { "width": 11, "length": 11 } },
        "textures": { "ground": "g.png", "wall": "w.jpg" }
    }"#;
    let bad_size = r#"{
        "maze": { "size": { "width": 10, "length": 10 } },
        "textures": { "ground": "g.png", "wall": "w.jpg" }
    }"#;

    results.push(TestResult::check(
        "plan_accepted",
        FloorPlanValidator::validate(good, &floor).is_ok(),
        "grid-sized plan accepted",
    ));
    results.push(TestResult::check(
        "plan_size_rejected",
        FloorPlanValidator::validate(bad_size, &floor).is_err(),
        "interior-sized plan rejected",
    ));

    results
}

// ── 6. Demo campus ──────────────────────────────────────────────────────

fn validate_demo_campus(verbose: bool) -> Vec<TestResult> {
    println!("--- Demo Campus ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(42);
    let campus = demo::generate_campus(&mut rng);

    results.push(TestResult::check(
        "campus_shape",
        campus.buildings.len() == 2 && campus.floors.len() >= 4 && campus.passages.len() == 1,
        format!(
            "{} buildings, {} floors, {} elevators, {} passages",
            campus.buildings.len(),
            campus.floors.len(),
            campus.elevators.len(),
            campus.passages.len()
        ),
    ));

    let rooms = InMemoryRoomRepository::new(campus.rooms.clone());
    let elevators = InMemoryElevatorRepository::new(campus.elevators.clone());
    let passages = InMemoryPassageRepository::new(campus.passages.clone());
    let generator = FloorMapGenerator::new(&rooms, &elevators, &passages);

    for floor in &campus.floors {
        let dims = floor.building().dimensions();
        match generator.calculate_floor_map(floor) {
            Ok(out) => {
                let size_ok = out.map.len() == (dims.length() + 1) as usize;
                let has_elevator_conn = out
                    .connections
                    .iter()
                    .any(|c| c.dest_floor_initi_direction == Some(0.0));
                results.push(TestResult::check(
                    "demo_floor_map",
                    size_ok && has_elevator_conn,
                    format!(
                        "{} floor {}: {} connections, {} elements",
                        floor.building().code().as_str(),
                        floor.floor_number(),
                        out.connections.len(),
                        out.floor_elements.len()
                    ),
                ));
                if verbose {
                    print_map(floor, &out);
                }
            }
            Err(e) => {
                results.push(TestResult::check(
                    "demo_floor_map",
                    false,
                    format!("generation failed: {e}"),
                ));
            }
        }
    }

    results
}

/// Character rendering of a generated grid, for eyeballing in verbose mode.
fn print_map(floor: &Floor, out: &FloorMap) {
    println!(
        "\n  {} floor {} ({}x{}):",
        floor.building().code().as_str(),
        floor.floor_number(),
        out.size.width,
        out.size.length
    );
    for row in &out.map {
        let line: String = row
            .iter()
            .map(|&code| match code {
                tile::OPEN => ' ',
                tile::WALL_VERTICAL => '|',
                tile::WALL_HORIZONTAL => '-',
                tile::CORNER => '+',
                tile::DOOR_EAST_WEST | tile::DOOR_NORTH_SOUTH => 'd',
                tile::ELEVATOR_NORTH
                | tile::ELEVATOR_SOUTH
                | tile::ELEVATOR_EAST
                | tile::ELEVATOR_WEST => 'E',
                _ => 'P',
            })
            .collect();
        println!("  {}", line);
    }
    if let Ok(wire) = serde_json::to_string(&out.connections) {
        println!("  connections: {}", wire);
    }
    println!();
}
