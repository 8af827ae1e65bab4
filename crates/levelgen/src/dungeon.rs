//! Room-and-corridor layouts seeded by a random walk over a 3×3 macro grid.

use log::{debug, warn};

use crate::config::{CORRIDOR_WIDTH, GenerationConfig};
use crate::error::GenerationError;
use crate::grid::GridCanvas;
use crate::model::{RoomBlueprint, RoomRect};
use crate::regions::carve_l_corridor;
use crate::rng::SeededStream;
use crate::types::{Direction, Pos, TileKind};

pub const MACRO_GRID: usize = 3;
pub const ROOM_PADDING: usize = 2;
pub const MIN_ROOM_SIZE: usize = 6;
pub const MAX_ROOM_SIZE: usize = 15;
/// Smallest side that leaves every macro cell a tile off the outer ring.
pub const MIN_DUNGEON_SIDE: usize = 2 * MACRO_GRID;

/// Column and row of one cell in the macro partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MacroCell {
    pub col: usize,
    pub row: usize,
}

/// Carves one room per visited macro cell and chains them with corridors.
///
/// Rooms come back in path order with no doors; door openings are derived
/// afterwards from the finished grid.
pub fn generate_dungeon(
    config: &GenerationConfig,
    stream: &mut SeededStream,
) -> Result<(GridCanvas, Vec<RoomBlueprint>), GenerationError> {
    if config.width < MIN_DUNGEON_SIDE || config.height < MIN_DUNGEON_SIDE {
        return Err(GenerationError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }

    let mut grid = GridCanvas::new(config.width, config.height);

    let path = macro_path(stream);
    debug!("dungeon macro path visits {} cells: {path:?}", path.len());

    let mut rooms = Vec::with_capacity(path.len());
    for (id, &cell) in path.iter().enumerate() {
        let bounds = macro_cell_bounds(config.width, config.height, cell);
        let slot = room_slot(bounds, config.width, config.height);
        let rect = place_room(slot, stream);
        carve_room(&mut grid, &rect);
        rooms.push(RoomBlueprint { id: id as u32, rect, doors: Vec::new() });
    }

    for pair in rooms.windows(2) {
        let horizontal_first = stream.coin();
        carve_l_corridor(
            &mut grid,
            pair[0].rect.center(),
            pair[1].rect.center(),
            horizontal_first,
            CORRIDOR_WIDTH,
        );
    }

    Ok((grid, rooms))
}

/// Non-branching random walk from the top-left macro cell.
///
/// Each step picks uniformly among unvisited orthogonal neighbors and the walk
/// stops once there are none, so it may cover fewer than nine cells.
pub fn macro_path(stream: &mut SeededStream) -> Vec<MacroCell> {
    let mut visited = [[false; MACRO_GRID]; MACRO_GRID];
    let mut current = MacroCell { col: 0, row: 0 };
    visited[0][0] = true;
    let mut path = vec![current];

    loop {
        let candidates: Vec<MacroCell> = Direction::ALL
            .iter()
            .filter_map(|direction| {
                let (dx, dy) = direction.delta();
                let col = current.col.checked_add_signed(dx as isize)?;
                let row = current.row.checked_add_signed(dy as isize)?;
                (col < MACRO_GRID && row < MACRO_GRID && !visited[row][col])
                    .then_some(MacroCell { col, row })
            })
            .collect();
        if candidates.is_empty() {
            break;
        }
        current = candidates[stream.pick_index(candidates.len())];
        visited[current.row][current.col] = true;
        path.push(current);
    }

    path
}

/// Tile rectangle covered by `cell`; the last row and column absorb remainders.
pub fn macro_cell_bounds(width: usize, height: usize, cell: MacroCell) -> RoomRect {
    let x0 = cell.col * width / MACRO_GRID;
    let x1 = (cell.col + 1) * width / MACRO_GRID;
    let y0 = cell.row * height / MACRO_GRID;
    let y1 = (cell.row + 1) * height / MACRO_GRID;
    RoomRect { x: x0, y: y0, width: x1 - x0, height: y1 - y0 }
}

/// Area a room may occupy inside `bounds` on a `grid_width` × `grid_height`
/// grid.
///
/// Padding shrinks for cells too narrow to keep two tiles on each side, but
/// the slot always stays off the outermost ring, where corridors never carve.
/// Both grid sides must be at least [`MIN_DUNGEON_SIDE`].
pub fn room_slot(bounds: RoomRect, grid_width: usize, grid_height: usize) -> RoomRect {
    let (x, width) = slot_span(bounds.x, bounds.width, grid_width);
    let (y, height) = slot_span(bounds.y, bounds.height, grid_height);
    RoomRect { x, y, width, height }
}

fn slot_span(start: usize, extent: usize, grid_extent: usize) -> (usize, usize) {
    let pad = ROOM_PADDING.min(extent.saturating_sub(1) / 2);
    let low = (start + pad).max(1);
    let high = (start + extent - 1 - pad).min(grid_extent - 2);
    (low, high + 1 - low)
}

pub fn place_room(slot: RoomRect, stream: &mut SeededStream) -> RoomRect {
    if slot.width < MIN_ROOM_SIZE || slot.height < MIN_ROOM_SIZE {
        warn!(
            "room slot at ({}, {}) only fits a {}x{} room",
            slot.x, slot.y, slot.width, slot.height
        );
    }

    let room_width = random_extent(slot.width, stream);
    let room_height = random_extent(slot.height, stream);
    let x = stream.range_inclusive(slot.x, slot.x + slot.width - room_width);
    let y = stream.range_inclusive(slot.y, slot.y + slot.height - room_height);
    RoomRect { x, y, width: room_width, height: room_height }
}

fn random_extent(available: usize, stream: &mut SeededStream) -> usize {
    let max_extent = MAX_ROOM_SIZE.min(available);
    let min_extent = MIN_ROOM_SIZE.min(max_extent);
    stream.range_inclusive(min_extent, max_extent)
}

fn carve_room(grid: &mut GridCanvas, room: &RoomRect) {
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            grid.set(Pos { y: y as i32, x: x as i32 }, TileKind::Floor);
        }
    }
}
