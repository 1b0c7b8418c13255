//! Floor-map rasterization.
//!
//! `FloorMapGenerator` turns a floor plus its rooms, elevators and
//! passages into the tile grid and transition metadata the client renders
//! and navigates. Painting order is fixed — rooms, then elevators, then
//! passages — because later painters may overwrite shared cells (an
//! elevator door next to a room wall, for example).
//!
//! Entity coordinates are validated in-bounds at creation time; this
//! module indexes the grid without re-checking and will panic on
//! out-of-range upstream data.

use std::collections::BTreeMap;

use campusnav_domain::{Floor, GridPosition, Orientation, Room};
use log::{debug, warn};
use serde::Serialize;

use crate::ports::{ElevatorRepository, PassageRepository, RepoResult, RoomRepository};

/// Tile codes emitted into the output grid. The client depends on these
/// exact values.
pub mod tile {
    pub const OPEN: u8 = 0;
    pub const WALL_VERTICAL: u8 = 1;
    pub const WALL_HORIZONTAL: u8 = 2;
    pub const CORNER: u8 = 3;
    /// Room door facing east or west.
    pub const DOOR_EAST_WEST: u8 = 4;
    /// Room door facing north or south.
    pub const DOOR_NORTH_SOUTH: u8 = 5;
    pub const ELEVATOR_NORTH: u8 = 6;
    pub const ELEVATOR_SOUTH: u8 = 7;
    pub const ELEVATOR_EAST: u8 = 8;
    pub const ELEVATOR_WEST: u8 = 9;
    /// Passage endpoint pairs, one lower/upper code per wall.
    pub const PASSAGE_TOP_LOW: u8 = 12;
    pub const PASSAGE_TOP_HIGH: u8 = 13;
    pub const PASSAGE_LEFT_LOW: u8 = 14;
    pub const PASSAGE_LEFT_HIGH: u8 = 15;
    pub const PASSAGE_RIGHT_LOW: u8 = 16;
    pub const PASSAGE_RIGHT_HIGH: u8 = 17;
    pub const PASSAGE_BOTTOM_LOW: u8 = 18;
    pub const PASSAGE_BOTTOM_HIGH: u8 = 19;
    /// Passage spanning the top-left corner, corner cell variants.
    pub const PASSAGE_CORNER_TOP: u8 = 20;
    pub const PASSAGE_CORNER_LEFT: u8 = 21;
}

/// What kind of cross-floor transition a connection triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConnectionType {
    Passage,
    Elevator,
}

/// A traversable link to another floor. Transient — rebuilt on every
/// generation call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    #[serde(rename = "connectionType")]
    pub connection_type: ConnectionType,
    /// Cell on the current floor that triggers the transition.
    #[serde(rename = "connectionCoords")]
    pub connection_coords: [i32; 2],
    /// Destination floor number → destination building code. Kept in this
    /// shape for wire compatibility; floor numbers are not globally unique.
    #[serde(rename = "destFloorId")]
    pub dest_floor_id: BTreeMap<i32, String>,
    /// Where the player materializes on the destination side.
    #[serde(rename = "destFloorInitiCoords")]
    pub dest_floor_initi_coords: [i32; 2],
    /// Arrival heading in degrees. Absent when the passage endpoint is not
    /// flush with an outer wall; no default is invented.
    #[serde(
        rename = "destFloorInitiDirection",
        skip_serializing_if = "Option::is_none"
    )]
    pub dest_floor_initi_direction: Option<f64>,
}

/// A labeled span on the grid — UI anchor or highlight region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorElement {
    #[serde(rename = "initCoords")]
    pub init_coords: [i32; 2],
    #[serde(rename = "finalCoords")]
    pub final_coords: [i32; 2],
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Interior dimensions the grid was sized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: i32,
    pub length: i32,
}

/// Full generation output, shaped for the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorMap {
    pub size: Size,
    /// `(length + 1)` rows of `(width + 1)` tile codes, indexed `[y][x]`.
    pub map: Vec<Vec<u8>>,
    pub connections: Vec<Connection>,
    #[serde(rename = "floorElements")]
    pub floor_elements: Vec<FloorElement>,
}

/// Heading a player faces after riding an elevator — the opposite of the
/// door's physical facing, since arrival mirrors departure.
pub fn calculate_elevator_direction(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::North => 180.0,
        Orientation::South => 0.0,
        Orientation::East => 90.0,
        Orientation::West => 270.0,
    }
}

/// Arrival heading for a passage whose far-side boundary cells are `first`
/// and `last`, given the far building's interior `width`/`length`.
///
/// Returns `None` when the pair is not flush with any outer wall. The
/// heading is undefined there; callers must not invent a default.
pub fn calculate_passage_direction(
    first: GridPosition,
    last: GridPosition,
    width: i32,
    length: i32,
) -> Option<f64> {
    if first.x() == 0 && last.x() == 0 {
        Some(90.0)
    } else if first.y() == 0 && last.y() == 0 {
        Some(0.0)
    } else if first.x() == width - 1 && last.x() == width - 1 {
        Some(270.0)
    } else if first.y() == length - 1 && last.y() == length - 1 {
        Some(180.0)
    } else {
        None
    }
}

/// Rasterizes floors into tile grids. Repositories are injected; the
/// generator holds no state between calls.
pub struct FloorMapGenerator<'a> {
    rooms: &'a dyn RoomRepository,
    elevators: &'a dyn ElevatorRepository,
    passages: &'a dyn PassageRepository,
}

impl<'a> FloorMapGenerator<'a> {
    pub fn new(
        rooms: &'a dyn RoomRepository,
        elevators: &'a dyn ElevatorRepository,
        passages: &'a dyn PassageRepository,
    ) -> Self {
        Self {
            rooms,
            elevators,
            passages,
        }
    }

    /// Build the tile grid, connections and floor elements for `floor`.
    pub fn calculate_floor_map(&self, floor: &Floor) -> RepoResult<FloorMap> {
        let width = floor.building().dimensions().width();
        let length = floor.building().dimensions().length();

        let mut map = build_base_grid(width, length);
        let mut connections = Vec::new();
        let mut floor_elements = Vec::new();

        let rooms = self.rooms.find_by_floor_id(floor.id())?;
        debug!(
            "floor {:?}: painting {} rooms onto {}x{} grid",
            floor.id(),
            rooms.len(),
            width + 1,
            length + 1
        );
        for room in &rooms {
            floor_elements.push(paint_room(&mut map, room, width, length));
        }

        let elevators = self.elevators.find_all_by_floor_id(floor.id())?;
        debug!("floor {:?}: painting {} elevators", floor.id(), elevators.len());
        for elevator in &elevators {
            let (ex, ey) = (elevator.position().x(), elevator.position().y());
            set(&mut map, ex, ey, elevator_tile(elevator.orientation()));

            let mut dest_floor_id = BTreeMap::new();
            for served in elevator.floors() {
                if served.id() == floor.id() {
                    continue;
                }
                dest_floor_id.insert(
                    served.floor_number(),
                    served.building().code().as_str().to_string(),
                );
            }

            connections.push(Connection {
                connection_type: ConnectionType::Elevator,
                connection_coords: [ex, ey],
                dest_floor_id,
                // Arrival point mirrors the departure point on the far side.
                dest_floor_initi_coords: [ex, ey],
                dest_floor_initi_direction: Some(calculate_elevator_direction(
                    elevator.orientation(),
                )),
            });
            floor_elements.push(FloorElement {
                init_coords: [ex, ey],
                final_coords: [ex, ey],
                display_name: elevator.unique_number().to_string(),
            });
        }

        let passages = self.passages.find_by_floor_id(floor.id())?;
        debug!("floor {:?}: painting {} passages", floor.id(), passages.len());
        for passage in &passages {
            let Some((local, remote, is_start)) = passage.endpoint_on(floor.id()) else {
                continue;
            };

            paint_passage_cells(&mut map, local.first(), local.last(), width, length);

            let direction =
                calculate_passage_direction(remote.first(), remote.last(), width, length);
            if direction.is_none() {
                warn!(
                    "passage {:?}: far endpoint not flush with an outer wall, \
                     arrival heading undefined",
                    passage.id()
                );
            }

            let mut dest_floor_id = BTreeMap::new();
            dest_floor_id.insert(
                remote.floor_number(),
                remote.building_code().as_str().to_string(),
            );

            for (from, to) in [
                (local.first(), remote.first()),
                (local.last(), remote.last()),
            ] {
                connections.push(Connection {
                    connection_type: ConnectionType::Passage,
                    connection_coords: from.as_pair(),
                    dest_floor_id: dest_floor_id.clone(),
                    dest_floor_initi_coords: to.as_pair(),
                    dest_floor_initi_direction: direction,
                });
            }

            // Highlight region only on the start-point side.
            if is_start {
                floor_elements.push(FloorElement {
                    init_coords: local.first().as_pair(),
                    final_coords: local.last().as_pair(),
                    display_name: String::new(),
                });
            }
        }

        Ok(FloorMap {
            size: Size { width, length },
            map,
            connections,
            floor_elements,
        })
    }
}

fn set(map: &mut [Vec<u8>], x: i32, y: i32, code: u8) {
    map[y as usize][x as usize] = code;
}

fn elevator_tile(orientation: Orientation) -> u8 {
    match orientation {
        Orientation::North => tile::ELEVATOR_NORTH,
        Orientation::South => tile::ELEVATOR_SOUTH,
        Orientation::East => tile::ELEVATOR_EAST,
        Orientation::West => tile::ELEVATOR_WEST,
    }
}

/// Empty grid with the outer border ring. The branch order matters: the
/// right-column rule wins over the top-row rule at `(width, 0)`, and the
/// bottom-row rule wins over the left-column rule at `(0, length)`.
fn build_base_grid(width: i32, length: i32) -> Vec<Vec<u8>> {
    let mut map = vec![vec![tile::OPEN; (width + 1) as usize]; (length + 1) as usize];
    for y in 0..=length {
        for x in 0..=width {
            let code = if x == 0 && y == 0 {
                tile::CORNER
            } else if x == width && y == length {
                tile::OPEN
            } else if x == width {
                tile::WALL_VERTICAL
            } else if y == length {
                tile::WALL_HORIZONTAL
            } else if x == 0 {
                tile::WALL_VERTICAL
            } else if y == 0 {
                tile::WALL_HORIZONTAL
            } else {
                tile::OPEN
            };
            set(&mut map, x, y, code);
        }
    }
    map
}

/// Paint one room: open footprint, walls one cell past the far edges,
/// walls on the near edges, corner fixes where the room touches the
/// floor's own top or left border, and the door tile. Returns the door's
/// floor element.
fn paint_room(map: &mut [Vec<u8>], room: &Room, width: i32, length: i32) -> FloorElement {
    let area = room.area();
    let (x0, y0) = (area.initial().x(), area.initial().y());
    let (x1, y1) = (area.end().x(), area.end().y());

    for x in x0..=x1 {
        for y in y0..=y1 {
            set(map, x, y, tile::OPEN);
            if x == x1 {
                set(map, x + 1, y, tile::WALL_VERTICAL);
            }
            if y == y1 {
                set(map, x, y + 1, tile::WALL_HORIZONTAL);
            }
            if x == x0 {
                set(map, x, y, tile::WALL_VERTICAL);
            }
            if y == y0 {
                set(map, x, y, tile::WALL_HORIZONTAL);
            }
            if x == x0 && y == y0 {
                set(map, x, y, tile::CORNER);
            }
            // T-junction patches where the room's far walls meet the
            // floor's own top or left border.
            if x == x1 && y == 0 && x + 1 != width {
                set(map, x + 1, 0, tile::CORNER);
            }
            if y == y1 && x == 0 && y + 1 != length {
                set(map, 0, y + 1, tile::CORNER);
            }
        }
    }

    let door = room.door();
    let (dx, dy) = (door.cell().x(), door.cell().y());
    let (px, py, code) = match door.facing() {
        Orientation::North => (dx, dy, tile::DOOR_NORTH_SOUTH),
        Orientation::South => (dx, dy + 1, tile::DOOR_NORTH_SOUTH),
        Orientation::East => (dx + 1, dy, tile::DOOR_EAST_WEST),
        Orientation::West => (dx, dy, tile::DOOR_EAST_WEST),
    };
    set(map, px, py, code);

    FloorElement {
        init_coords: [px, py],
        final_coords: [px, py],
        display_name: room.name().as_str().to_string(),
    }
}

/// Paint the two boundary cells of a passage endpoint pair.
///
/// Twelve mutually exclusive branches keyed on wall membership, corner
/// cases first (the corner cell belongs to both the top and the left
/// wall). Within a wall, the endpoint lower along the wall's axis takes
/// the lower code.
fn paint_passage_cells(
    map: &mut [Vec<u8>],
    a: GridPosition,
    b: GridPosition,
    width: i32,
    length: i32,
) {
    let (ax, ay) = (a.x(), a.y());
    let (bx, by) = (b.x(), b.y());

    if ax == 0 && ay == 0 && by == 0 {
        set(map, 0, 0, tile::PASSAGE_CORNER_TOP);
        set(map, bx, 0, tile::PASSAGE_TOP_HIGH);
    } else if bx == 0 && by == 0 && ay == 0 {
        set(map, 0, 0, tile::PASSAGE_CORNER_TOP);
        set(map, ax, 0, tile::PASSAGE_TOP_HIGH);
    } else if ax == 0 && ay == 0 && bx == 0 {
        set(map, 0, 0, tile::PASSAGE_CORNER_LEFT);
        set(map, 0, by, tile::PASSAGE_LEFT_HIGH);
    } else if bx == 0 && by == 0 && ax == 0 {
        set(map, 0, 0, tile::PASSAGE_CORNER_LEFT);
        set(map, 0, ay, tile::PASSAGE_LEFT_HIGH);
    } else if ay == 0 && by == 0 && ax < bx {
        set(map, ax, 0, tile::PASSAGE_TOP_LOW);
        set(map, bx, 0, tile::PASSAGE_TOP_HIGH);
    } else if ay == 0 && by == 0 && bx < ax {
        set(map, bx, 0, tile::PASSAGE_TOP_LOW);
        set(map, ax, 0, tile::PASSAGE_TOP_HIGH);
    } else if ax == 0 && bx == 0 && ay < by {
        set(map, 0, ay, tile::PASSAGE_LEFT_LOW);
        set(map, 0, by, tile::PASSAGE_LEFT_HIGH);
    } else if ax == 0 && bx == 0 && by < ay {
        set(map, 0, by, tile::PASSAGE_LEFT_LOW);
        set(map, 0, ay, tile::PASSAGE_LEFT_HIGH);
    } else if ax == width - 1 && bx == width - 1 && ay < by {
        set(map, ax, ay, tile::PASSAGE_RIGHT_LOW);
        set(map, bx, by, tile::PASSAGE_RIGHT_HIGH);
    } else if ax == width - 1 && bx == width - 1 && by < ay {
        set(map, bx, by, tile::PASSAGE_RIGHT_LOW);
        set(map, ax, ay, tile::PASSAGE_RIGHT_HIGH);
    } else if ay == length - 1 && by == length - 1 && ax < bx {
        set(map, ax, ay, tile::PASSAGE_BOTTOM_LOW);
        set(map, bx, by, tile::PASSAGE_BOTTOM_HIGH);
    } else if ay == length - 1 && by == length - 1 && bx < ax {
        set(map, bx, by, tile::PASSAGE_BOTTOM_LOW);
        set(map, ax, ay, tile::PASSAGE_BOTTOM_HIGH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{
        InMemoryElevatorRepository, InMemoryPassageRepository, InMemoryRoomRepository,
    };
    use campusnav_domain::room::{DoorPlacement, RoomArea, RoomName};
    use campusnav_domain::{
        Building, BuildingCode, BuildingDimensions, BuildingId, Elevator, ElevatorId,
        ElevatorPosition, Floor, FloorId, Passage, PassageEndpoint, PassageId, Room, RoomCategory,
        RoomId,
    };
    use pretty_assertions::assert_eq;

    fn make_building(id: u32, code: &str, width: i32, length: i32) -> Building {
        Building::new(
            BuildingId(id),
            BuildingCode::new(code).unwrap(),
            BuildingDimensions::new(width, length).unwrap(),
        )
    }

    fn make_floor(id: u32, building: Building, number: i32) -> Floor {
        Floor::new(FloorId(id), building, number)
    }

    fn pos(x: i32, y: i32) -> GridPosition {
        GridPosition::new(x, y).unwrap()
    }

    fn make_room(
        id: u32,
        floor: u32,
        name: &str,
        (x0, y0): (i32, i32),
        (x1, y1): (i32, i32),
        door: (i32, i32),
        facing: Orientation,
    ) -> Room {
        Room::new(
            RoomId(id),
            FloorId(floor),
            RoomName::new(name).unwrap(),
            RoomCategory::Office,
            RoomArea::new(pos(x0, y0), pos(x1, y1)).unwrap(),
            DoorPlacement::new(pos(door.0, door.1), facing),
        )
    }

    fn empty_repos() -> (
        InMemoryRoomRepository,
        InMemoryElevatorRepository,
        InMemoryPassageRepository,
    ) {
        (
            InMemoryRoomRepository::new(vec![]),
            InMemoryElevatorRepository::new(vec![]),
            InMemoryPassageRepository::new(vec![]),
        )
    }

    fn generate(
        rooms: &InMemoryRoomRepository,
        elevators: &InMemoryElevatorRepository,
        passages: &InMemoryPassageRepository,
        floor: &Floor,
    ) -> FloorMap {
        FloorMapGenerator::new(rooms, elevators, passages)
            .calculate_floor_map(floor)
            .unwrap()
    }

    // --- Grid and border invariants ---

    #[test]
    fn grid_has_length_plus_one_rows_of_width_plus_one() {
        for (w, l) in [(1, 1), (10, 10), (7, 13)] {
            let (rooms, elevators, passages) = empty_repos();
            let floor = make_floor(1, make_building(1, "B", w, l), 0);
            let out = generate(&rooms, &elevators, &passages, &floor);
            assert_eq!(out.map.len(), (l + 1) as usize);
            assert!(out.map.iter().all(|row| row.len() == (w + 1) as usize));
            assert_eq!(out.size, Size { width: w, length: l });
        }
    }

    #[test]
    fn empty_floor_border_codes() {
        let (rooms, elevators, passages) = empty_repos();
        let floor = make_floor(1, make_building(1, "B", 4, 3), 0);
        let out = generate(&rooms, &elevators, &passages, &floor);

        assert_eq!(
            out.map,
            vec![
                vec![3, 2, 2, 2, 1],
                vec![1, 0, 0, 0, 1],
                vec![1, 0, 0, 0, 1],
                vec![2, 2, 2, 2, 0],
            ]
        );
    }

    #[test]
    fn empty_floor_emits_no_connections_or_elements() {
        let (rooms, elevators, passages) = empty_repos();
        let floor = make_floor(1, make_building(1, "B", 6, 6), 0);
        let out = generate(&rooms, &elevators, &passages, &floor);
        assert!(out.connections.is_empty());
        assert!(out.floor_elements.is_empty());
    }

    // --- Rooms ---

    #[test]
    fn room_paints_footprint_walls_and_corner() {
        let rooms = InMemoryRoomRepository::new(vec![make_room(
            1,
            1,
            "A-1",
            (2, 2),
            (4, 4),
            (3, 4),
            Orientation::South,
        )]);
        let (_, elevators, passages) = empty_repos();
        let floor = make_floor(1, make_building(1, "B", 8, 8), 0);
        let out = generate(&rooms, &elevators, &passages, &floor);

        // Top-left corner of the room.
        assert_eq!(out.map[2][2], tile::CORNER);
        // Top wall and left wall on the near edges.
        assert_eq!(out.map[2][3], tile::WALL_HORIZONTAL);
        assert_eq!(out.map[3][2], tile::WALL_VERTICAL);
        // Far walls one cell past the footprint.
        assert_eq!(out.map[3][5], tile::WALL_VERTICAL);
        assert_eq!(out.map[5][4], tile::WALL_HORIZONTAL);
        // Interior open.
        assert_eq!(out.map[3][3], tile::OPEN);
        // Door south of (3,4): tile 5 one cell south.
        assert_eq!(out.map[5][3], tile::DOOR_NORTH_SOUTH);
    }

    #[test]
    fn room_door_east_paints_tile_4_and_named_element() {
        let rooms = InMemoryRoomRepository::new(vec![make_room(
            1,
            1,
            "Lab 1",
            (5, 3),
            (8, 6),
            (8, 5),
            Orientation::East,
        )]);
        let (_, elevators, passages) = empty_repos();
        let floor = make_floor(1, make_building(1, "B", 12, 12), 0);
        let out = generate(&rooms, &elevators, &passages, &floor);

        assert_eq!(out.map[5][9], tile::DOOR_EAST_WEST);
        assert_eq!(
            out.floor_elements,
            vec![FloorElement {
                init_coords: [9, 5],
                final_coords: [9, 5],
                display_name: "Lab 1".to_string(),
            }]
        );
    }

    #[test]
    fn room_touching_top_border_gets_corner_patch() {
        // Room flush with the floor's top border; its right wall column
        // would leave a broken T-junction at row 0 without the patch.
        let rooms = InMemoryRoomRepository::new(vec![make_room(
            1,
            1,
            "A-2",
            (0, 0),
            (3, 3),
            (1, 3),
            Orientation::South,
        )]);
        let (_, elevators, passages) = empty_repos();
        let floor = make_floor(1, make_building(1, "B", 10, 10), 0);
        let out = generate(&rooms, &elevators, &passages, &floor);

        assert_eq!(out.map[0][4], tile::CORNER);
        // Bottom-edge row at x = 0 patches the left border the same way.
        assert_eq!(out.map[4][0], tile::CORNER);
    }

    #[test]
    fn room_flush_with_right_border_keeps_border_wall() {
        // finalX + 1 == width: no corner patch, border stays vertical wall.
        let rooms = InMemoryRoomRepository::new(vec![make_room(
            1,
            1,
            "A-3",
            (6, 0),
            (9, 2),
            (7, 2),
            Orientation::South,
        )]);
        let (_, elevators, passages) = empty_repos();
        let floor = make_floor(1, make_building(1, "B", 10, 10), 0);
        let out = generate(&rooms, &elevators, &passages, &floor);

        assert_eq!(out.map[0][10], tile::WALL_VERTICAL);
    }

    // --- Elevators ---

    #[test]
    fn elevator_direction_mapping_is_exhaustive() {
        assert_eq!(calculate_elevator_direction(Orientation::North), 180.0);
        assert_eq!(calculate_elevator_direction(Orientation::South), 0.0);
        assert_eq!(calculate_elevator_direction(Orientation::East), 90.0);
        assert_eq!(calculate_elevator_direction(Orientation::West), 270.0);
    }

    #[test]
    fn elevator_tiles_encode_orientation() {
        for (orientation, code) in [
            (Orientation::North, tile::ELEVATOR_NORTH),
            (Orientation::South, tile::ELEVATOR_SOUTH),
            (Orientation::East, tile::ELEVATOR_EAST),
            (Orientation::West, tile::ELEVATOR_WEST),
        ] {
            let building = make_building(1, "B", 10, 10);
            let floor = make_floor(1, building.clone(), 0);
            let mut elevator = Elevator::new(
                ElevatorId(1),
                BuildingId(1),
                1,
                ElevatorPosition::new(5, 5).unwrap(),
                orientation,
            );
            elevator.serve_floor(floor.clone()).unwrap();

            let (rooms, _, passages) = empty_repos();
            let elevators = InMemoryElevatorRepository::new(vec![elevator]);
            let out = generate(&rooms, &elevators, &passages, &floor);
            assert_eq!(out.map[5][5], code);
        }
    }

    #[test]
    fn elevator_connection_skips_current_floor() {
        let building = make_building(1, "B1", 10, 10);
        let floor0 = make_floor(1, building.clone(), 0);
        let floor1 = make_floor(2, building.clone(), 1);
        let floor2 = make_floor(3, building.clone(), 2);

        let mut elevator = Elevator::new(
            ElevatorId(1),
            BuildingId(1),
            3,
            ElevatorPosition::new(2, 7).unwrap(),
            Orientation::West,
        );
        for f in [&floor0, &floor1, &floor2] {
            elevator.serve_floor(f.clone()).unwrap();
        }

        let (rooms, _, passages) = empty_repos();
        let elevators = InMemoryElevatorRepository::new(vec![elevator]);
        let out = generate(&rooms, &elevators, &passages, &floor1);

        assert_eq!(out.connections.len(), 1);
        let conn = &out.connections[0];
        assert_eq!(conn.connection_type, ConnectionType::Elevator);
        assert_eq!(conn.connection_coords, [2, 7]);
        assert_eq!(conn.dest_floor_initi_coords, [2, 7]);
        assert_eq!(conn.dest_floor_initi_direction, Some(270.0));
        // Floors 0 and 2 are destinations; floor 1 (current) is not.
        assert_eq!(
            conn.dest_floor_id,
            BTreeMap::from([(0, "B1".to_string()), (2, "B1".to_string())])
        );
        assert_eq!(out.floor_elements[0].display_name, "3");
    }

    // --- Passages ---

    fn make_passage(
        id: u32,
        start: (u32, i32, &str, (i32, i32), (i32, i32)),
        end: (u32, i32, &str, (i32, i32), (i32, i32)),
    ) -> Passage {
        let endpoint = |(floor, number, code, first, last): (u32, i32, &str, (i32, i32), (i32, i32))| {
            PassageEndpoint::new(
                FloorId(floor),
                number,
                BuildingCode::new(code).unwrap(),
                pos(first.0, first.1),
                pos(last.0, last.1),
            )
        };
        Passage::new(PassageId(id), endpoint(start), endpoint(end)).unwrap()
    }

    #[test]
    fn passage_emits_two_connections_with_shared_destination() {
        let passage = make_passage(
            1,
            (1, 0, "A", (0, 4), (0, 5)),
            (2, 1, "B", (9, 2), (9, 3)),
        );
        let (rooms, elevators, _) = empty_repos();
        let passages = InMemoryPassageRepository::new(vec![passage]);
        let floor = make_floor(1, make_building(1, "A", 10, 10), 0);
        let out = generate(&rooms, &elevators, &passages, &floor);

        assert_eq!(out.connections.len(), 2);
        let [c1, c2] = [&out.connections[0], &out.connections[1]];
        assert_eq!(c1.connection_type, ConnectionType::Passage);
        assert_eq!(c1.connection_coords, [0, 4]);
        assert_eq!(c1.dest_floor_initi_coords, [9, 2]);
        assert_eq!(c2.connection_coords, [0, 5]);
        assert_eq!(c2.dest_floor_initi_coords, [9, 3]);
        // Far endpoint hugs x = width - 1: right wall, heading 270.
        assert_eq!(c1.dest_floor_initi_direction, Some(270.0));
        assert_eq!(c2.dest_floor_initi_direction, Some(270.0));
        assert_eq!(c1.dest_floor_id, BTreeMap::from([(1, "B".to_string())]));
        assert_eq!(c1.dest_floor_id, c2.dest_floor_id);

        // Local pair on the left wall: cells 14 (lower y) and 15.
        assert_eq!(out.map[4][0], tile::PASSAGE_LEFT_LOW);
        assert_eq!(out.map[5][0], tile::PASSAGE_LEFT_HIGH);

        // Start-point side gets the empty-label highlight element.
        assert_eq!(
            out.floor_elements,
            vec![FloorElement {
                init_coords: [0, 4],
                final_coords: [0, 5],
                display_name: String::new(),
            }]
        );
    }

    #[test]
    fn passage_end_point_side_emits_no_element() {
        let passage = make_passage(
            1,
            (1, 0, "A", (0, 4), (0, 5)),
            (2, 1, "B", (0, 2), (0, 3)),
        );
        let (rooms, elevators, _) = empty_repos();
        let passages = InMemoryPassageRepository::new(vec![passage]);
        let floor = make_floor(2, make_building(2, "B", 10, 10), 1);
        let out = generate(&rooms, &elevators, &passages, &floor);

        assert_eq!(out.connections.len(), 2);
        assert!(out.floor_elements.is_empty());
    }

    #[test]
    fn passage_direction_per_wall() {
        let (w, l) = (10, 8);
        // Left wall.
        assert_eq!(
            calculate_passage_direction(pos(0, 3), pos(0, 4), w, l),
            Some(90.0)
        );
        // Top wall.
        assert_eq!(
            calculate_passage_direction(pos(3, 0), pos(4, 0), w, l),
            Some(0.0)
        );
        // Right wall.
        assert_eq!(
            calculate_passage_direction(pos(9, 3), pos(9, 4), w, l),
            Some(270.0)
        );
        // Bottom wall.
        assert_eq!(
            calculate_passage_direction(pos(3, 7), pos(4, 7), w, l),
            Some(180.0)
        );
        // Interior pair: undefined, not defaulted.
        assert_eq!(calculate_passage_direction(pos(4, 4), pos(4, 5), w, l), None);
    }

    #[test]
    fn interior_passage_endpoint_yields_absent_direction() {
        let passage = make_passage(
            1,
            (1, 0, "A", (0, 4), (0, 5)),
            (2, 1, "B", (4, 4), (4, 5)),
        );
        let (rooms, elevators, _) = empty_repos();
        let passages = InMemoryPassageRepository::new(vec![passage]);
        let floor = make_floor(1, make_building(1, "A", 10, 10), 0);
        let out = generate(&rooms, &elevators, &passages, &floor);

        assert_eq!(out.connections[0].dest_floor_initi_direction, None);
        let json = serde_json::to_value(&out.connections[0]).unwrap();
        assert!(json.get("destFloorInitiDirection").is_none());
    }

    // --- Passage tile table (twelve branches) ---

    fn painted(a: (i32, i32), b: (i32, i32), w: i32, l: i32) -> Vec<Vec<u8>> {
        let mut map = build_base_grid(w, l);
        paint_passage_cells(&mut map, pos(a.0, a.1), pos(b.0, b.1), w, l);
        map
    }

    #[test]
    fn top_wall_lower_x_gets_12() {
        for (a, b) in [((3, 0), (4, 0)), ((4, 0), (3, 0))] {
            let map = painted(a, b, 10, 10);
            assert_eq!(map[0][3], tile::PASSAGE_TOP_LOW);
            assert_eq!(map[0][4], tile::PASSAGE_TOP_HIGH);
        }
    }

    #[test]
    fn left_wall_lower_y_gets_14() {
        for (a, b) in [((0, 5), (0, 6)), ((0, 6), (0, 5))] {
            let map = painted(a, b, 10, 10);
            assert_eq!(map[5][0], tile::PASSAGE_LEFT_LOW);
            assert_eq!(map[6][0], tile::PASSAGE_LEFT_HIGH);
        }
    }

    #[test]
    fn right_wall_lower_y_gets_16() {
        for (a, b) in [((9, 5), (9, 6)), ((9, 6), (9, 5))] {
            let map = painted(a, b, 10, 10);
            assert_eq!(map[5][9], tile::PASSAGE_RIGHT_LOW);
            assert_eq!(map[6][9], tile::PASSAGE_RIGHT_HIGH);
        }
    }

    #[test]
    fn bottom_wall_lower_x_gets_18() {
        for (a, b) in [((3, 9), (4, 9)), ((4, 9), (3, 9))] {
            let map = painted(a, b, 10, 10);
            assert_eq!(map[9][3], tile::PASSAGE_BOTTOM_LOW);
            assert_eq!(map[9][4], tile::PASSAGE_BOTTOM_HIGH);
        }
    }

    #[test]
    fn corner_with_top_neighbor_paints_20() {
        for (a, b) in [((0, 0), (1, 0)), ((1, 0), (0, 0))] {
            let map = painted(a, b, 10, 10);
            assert_eq!(map[0][0], tile::PASSAGE_CORNER_TOP);
            assert_eq!(map[0][1], tile::PASSAGE_TOP_HIGH);
        }
    }

    #[test]
    fn corner_with_left_neighbor_paints_21() {
        for (a, b) in [((0, 0), (0, 1)), ((0, 1), (0, 0))] {
            let map = painted(a, b, 10, 10);
            assert_eq!(map[0][0], tile::PASSAGE_CORNER_LEFT);
            assert_eq!(map[1][0], tile::PASSAGE_LEFT_HIGH);
        }
    }

    // --- End-to-end scenario ---

    #[test]
    fn end_to_end_room_and_elevator_on_ten_by_ten() {
        let building = make_building(1, "B1", 10, 10);
        let floor = make_floor(1, building.clone(), 0);
        let other_floor = make_floor(2, building.clone(), 1);

        let rooms = InMemoryRoomRepository::new(vec![make_room(
            1,
            1,
            "Atrium",
            (0, 0),
            (3, 3),
            (3, 1),
            Orientation::East,
        )]);

        let mut elevator = Elevator::new(
            ElevatorId(1),
            BuildingId(1),
            1,
            ElevatorPosition::new(5, 5).unwrap(),
            Orientation::North,
        );
        elevator.serve_floor(floor.clone()).unwrap();
        elevator.serve_floor(other_floor).unwrap();
        let elevators = InMemoryElevatorRepository::new(vec![elevator]);
        let passages = InMemoryPassageRepository::new(vec![]);

        let out = generate(&rooms, &elevators, &passages, &floor);

        assert_eq!(out.map.len(), 11);
        assert_eq!(out.map[1][4], tile::DOOR_EAST_WEST);
        assert_eq!(out.map[5][5], tile::ELEVATOR_NORTH);

        let elevator_conns: Vec<_> = out
            .connections
            .iter()
            .filter(|c| c.connection_type == ConnectionType::Elevator)
            .collect();
        assert_eq!(elevator_conns.len(), 1);
        assert_eq!(elevator_conns[0].connection_coords, [5, 5]);
        assert_eq!(elevator_conns[0].dest_floor_initi_direction, Some(180.0));

        let room_element = out
            .floor_elements
            .iter()
            .find(|e| e.display_name == "Atrium")
            .unwrap();
        assert_eq!(room_element.init_coords, [4, 1]);
        assert_eq!(room_element.final_coords, [4, 1]);
    }

    #[test]
    fn output_serializes_with_wire_field_names() {
        let (rooms, elevators, passages) = empty_repos();
        let floor = make_floor(1, make_building(1, "B", 2, 2), 0);
        let out = generate(&rooms, &elevators, &passages, &floor);
        let json = serde_json::to_value(&out).unwrap();

        assert!(json.get("size").is_some());
        assert!(json.get("map").is_some());
        assert!(json.get("connections").is_some());
        assert!(json.get("floorElements").is_some());
        assert_eq!(json["size"]["width"], 2);
    }
}
