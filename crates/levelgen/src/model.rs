//! Public data models for generated layouts and their room metadata.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::autotile::OrientationCode;
use crate::grid::GridCanvas;
use crate::types::{Direction, Pos, TileKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    Cave,
    Dungeon,
    Arena,
}

impl LayoutKind {
    fn code(self) -> u8 {
        match self {
            LayoutKind::Cave => 0,
            LayoutKind::Dungeon => 1,
            LayoutKind::Arena => 2,
        }
    }
}

/// Inclusive-origin axis-aligned rectangle in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl RoomRect {
    pub fn right(self) -> usize {
        self.x + self.width - 1
    }

    pub fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y + (self.height / 2)) as i32, x: (self.x + (self.width / 2)) as i32 }
    }

    pub fn contains(self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let px = pos.x as usize;
        let py = pos.y as usize;
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// True when `self` lies entirely inside `outer`.
    pub fn within(self, outer: &Self) -> bool {
        self.x >= outer.x
            && self.y >= outer.y
            && self.right() <= outer.right()
            && self.bottom() <= outer.bottom()
    }
}

/// A floor opening on one edge of a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorBlueprint {
    /// First tile of the opening, just outside the room rectangle.
    pub pos: Pos,
    /// Room edge the opening sits on.
    pub direction: Direction,
    /// Number of consecutive open tiles along the edge.
    pub span: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBlueprint {
    pub id: u32,
    pub rect: RoomRect,
    pub doors: Vec<DoorBlueprint>,
}

/// Result of one generation call, handed over to the caller whole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLayout {
    pub kind: LayoutKind,
    pub seed: u64,
    pub grid: GridCanvas,
    /// Row-major; `Some` exactly for wall tiles.
    pub orientations: Vec<Option<OrientationCode>>,
    /// Rooms in corridor-chain order. Empty for caves and arenas.
    pub rooms: Vec<RoomBlueprint>,
}

impl GeneratedLayout {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.grid.get(pos)
    }

    pub fn orientation_at(&self, pos: Pos) -> Option<OrientationCode> {
        if !self.grid.in_bounds(pos) {
            return None;
        }
        self.orientations[self.grid.index(pos)]
    }

    pub fn floor_count(&self) -> usize {
        self.grid.count(TileKind::Floor)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.push(self.kind.code());
        bytes.extend(self.seed.to_le_bytes());
        bytes.extend((self.width() as u32).to_le_bytes());
        bytes.extend((self.height() as u32).to_le_bytes());
        for tile in self.grid.tiles() {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
            });
        }
        for orientation in &self.orientations {
            bytes.push(orientation.map_or(u8::MAX, OrientationCode::value));
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend(room.id.to_le_bytes());
            for value in [room.rect.x, room.rect.y, room.rect.width, room.rect.height] {
                bytes.extend((value as u32).to_le_bytes());
            }
            bytes.extend((room.doors.len() as u32).to_le_bytes());
            for door in &room.doors {
                bytes.extend(door.pos.y.to_le_bytes());
                bytes.extend(door.pos.x.to_le_bytes());
                bytes.push(match door.direction {
                    Direction::North => 0,
                    Direction::East => 1,
                    Direction::South => 2,
                    Direction::West => 3,
                });
                bytes.extend((door.span as u32).to_le_bytes());
            }
        }

        bytes
    }

    /// xxh3 hash of [`Self::canonical_bytes`].
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
