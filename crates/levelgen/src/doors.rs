//! Boundary scan that derives door openings from a finished dungeon grid.

use crate::grid::GridCanvas;
use crate::model::{DoorBlueprint, RoomBlueprint, RoomRect};
use crate::types::{Direction, Pos, TileKind};

/// Fills in `doors` for every room from the tiles bordering its rectangle.
pub fn scan_room_doors(grid: &GridCanvas, rooms: &mut [RoomBlueprint]) {
    for room in rooms {
        room.doors = extract_doors(grid, room.rect);
    }
}

/// Every maximal run of floor tiles on the ring just outside `rect`, one edge
/// at a time in north, east, south, west order. Ring corners are skipped.
pub fn extract_doors(grid: &GridCanvas, rect: RoomRect) -> Vec<DoorBlueprint> {
    let left = rect.x as i32;
    let top = rect.y as i32;
    let right = rect.right() as i32;
    let bottom = rect.bottom() as i32;

    let mut doors = Vec::new();
    for direction in Direction::ALL {
        let edge: Vec<Pos> = match direction {
            Direction::North => (left..=right).map(|x| Pos { y: top - 1, x }).collect(),
            Direction::South => (left..=right).map(|x| Pos { y: bottom + 1, x }).collect(),
            Direction::West => (top..=bottom).map(|y| Pos { y, x: left - 1 }).collect(),
            Direction::East => (top..=bottom).map(|y| Pos { y, x: right + 1 }).collect(),
        };
        collect_runs(grid, &edge, direction, &mut doors);
    }
    doors
}

fn collect_runs(
    grid: &GridCanvas,
    edge: &[Pos],
    direction: Direction,
    doors: &mut Vec<DoorBlueprint>,
) {
    let mut run: Option<DoorBlueprint> = None;
    for &pos in edge {
        if grid.get(pos) == TileKind::Floor {
            match run.as_mut() {
                Some(door) => door.span += 1,
                None => run = Some(DoorBlueprint { pos, direction, span: 1 }),
            }
        } else if let Some(door) = run.take() {
            doors.push(door);
        }
    }
    if let Some(door) = run {
        doors.push(door);
    }
}
