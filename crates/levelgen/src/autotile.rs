//! Neighbor-bitmask orientation codes for wall tiles.
//!
//! Bits are set for each orthogonal neighbor that is a wall: north = 1,
//! east = 2, south = 4, west = 8. A fully enclosed wall (code 15) with exactly
//! one floor diagonal is refined into one of four inner-corner codes (16..=19).
//! Codes are metadata for the renderer only; nothing in generation reads them back.

use serde::{Deserialize, Serialize};

use crate::grid::GridCanvas;
use crate::types::{Pos, TileKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrientationCode(u8);

impl OrientationCode {
    pub const NORTH: u8 = 1;
    pub const EAST: u8 = 2;
    pub const SOUTH: u8 = 4;
    pub const WEST: u8 = 8;

    pub const ISOLATED: Self = Self(0);
    pub const ENCLOSED: Self = Self(15);
    pub const INNER_NORTH_EAST: Self = Self(16);
    pub const INNER_NORTH_WEST: Self = Self(17);
    pub const INNER_SOUTH_EAST: Self = Self(18);
    pub const INNER_SOUTH_WEST: Self = Self(19);

    pub const MAX: u8 = 19;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_inner_corner(self) -> bool {
        self.0 > Self::ENCLOSED.0
    }
}

/// Orientation code of the tile at `pos`, or `None` if it is not a wall.
pub fn orientation_for(grid: &GridCanvas, pos: Pos) -> Option<OrientationCode> {
    if grid.get(pos) != TileKind::Wall {
        return None;
    }

    let wall = |dx: i32, dy: i32| grid.get(pos.offset(dx, dy)) == TileKind::Wall;
    let mut mask = 0_u8;
    if wall(0, -1) {
        mask |= OrientationCode::NORTH;
    }
    if wall(1, 0) {
        mask |= OrientationCode::EAST;
    }
    if wall(0, 1) {
        mask |= OrientationCode::SOUTH;
    }
    if wall(-1, 0) {
        mask |= OrientationCode::WEST;
    }
    if mask != OrientationCode::ENCLOSED.0 {
        return Some(OrientationCode(mask));
    }

    let diagonals = [
        (!wall(1, -1), OrientationCode::INNER_NORTH_EAST),
        (!wall(-1, -1), OrientationCode::INNER_NORTH_WEST),
        (!wall(1, 1), OrientationCode::INNER_SOUTH_EAST),
        (!wall(-1, 1), OrientationCode::INNER_SOUTH_WEST),
    ];
    let mut open = diagonals.iter().filter(|(is_floor, _)| *is_floor);
    match (open.next(), open.next()) {
        (Some(&(_, corner)), None) => Some(corner),
        _ => Some(OrientationCode::ENCLOSED),
    }
}

/// Orientation codes for every cell in row-major order; floor cells get `None`.
pub fn autotile(grid: &GridCanvas) -> Vec<Option<OrientationCode>> {
    grid.positions().map(|pos| orientation_for(grid, pos)).collect()
}
