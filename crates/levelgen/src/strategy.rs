//! The closed family of layout strategies and their single dispatch point.

use log::info;
use serde::{Deserialize, Serialize};

use crate::arena::generate_arena;
use crate::autotile::autotile;
use crate::cave::generate_cave;
use crate::config::{
    DEFAULT_ARENA_BORDER, DEFAULT_WALL_FRACTION, GenerationConfig, default_arena_border,
    default_wall_fraction, validate_wall_fraction,
};
use crate::doors::scan_room_doors;
use crate::dungeon::generate_dungeon;
use crate::error::GenerationError;
use crate::model::{GeneratedLayout, LayoutKind};
use crate::rng::SeededStream;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutStrategy {
    Cave {
        /// Probability that a non-border cell starts as a wall.
        #[serde(default = "default_wall_fraction")]
        initial_wall_fraction: f64,
    },
    Dungeon,
    Arena {
        #[serde(default = "default_arena_border")]
        border_thickness: usize,
    },
}

impl LayoutStrategy {
    pub fn cave() -> Self {
        Self::Cave { initial_wall_fraction: DEFAULT_WALL_FRACTION }
    }

    pub fn arena() -> Self {
        Self::Arena { border_thickness: DEFAULT_ARENA_BORDER }
    }

    pub fn kind(&self) -> LayoutKind {
        match self {
            Self::Cave { .. } => LayoutKind::Cave,
            Self::Dungeon => LayoutKind::Dungeon,
            Self::Arena { .. } => LayoutKind::Arena,
        }
    }

    /// Rejects bad inputs before any tile is touched.
    pub fn validate(&self, config: &GenerationConfig) -> Result<(), GenerationError> {
        config.validate()?;
        if let Self::Cave { initial_wall_fraction } = *self {
            validate_wall_fraction(initial_wall_fraction)?;
        }
        Ok(())
    }

    /// Runs the strategy to completion on a fresh grid and stream.
    ///
    /// Every wall tile of the result carries an orientation code; dungeon rooms
    /// also carry the door openings found on their edges.
    pub fn generate(&self, config: &GenerationConfig) -> Result<GeneratedLayout, GenerationError> {
        self.validate(config)?;
        let mut stream = SeededStream::new(config.seed);

        let (grid, mut rooms) = match *self {
            Self::Cave { initial_wall_fraction } => {
                (generate_cave(config, initial_wall_fraction, &mut stream)?, Vec::new())
            }
            Self::Dungeon => generate_dungeon(config, &mut stream)?,
            Self::Arena { border_thickness } => (generate_arena(config, border_thickness)?, Vec::new()),
        };
        scan_room_doors(&grid, &mut rooms);
        let orientations = autotile(&grid);

        let layout = GeneratedLayout { kind: self.kind(), seed: config.seed, grid, orientations, rooms };
        info!(
            "generated {:?} {}x{} seed={} floor={} rooms={}",
            layout.kind,
            layout.width(),
            layout.height(),
            layout.seed,
            layout.floor_count(),
            layout.rooms.len()
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKind;

    #[test]
    fn invalid_fraction_fails_before_generation() {
        let strategy = LayoutStrategy::Cave { initial_wall_fraction: 1.2 };
        let result = strategy.generate(&GenerationConfig::new(1, 20, 20));
        assert_eq!(result, Err(GenerationError::InvalidWallFraction { fraction: 1.2 }));
    }

    #[test]
    fn zero_width_fails_for_every_strategy() {
        let config = GenerationConfig::new(1, 0, 20);
        for strategy in [LayoutStrategy::cave(), LayoutStrategy::Dungeon, LayoutStrategy::arena()] {
            assert_eq!(
                strategy.generate(&config),
                Err(GenerationError::InvalidDimensions { width: 0, height: 20 })
            );
        }
    }

    #[test]
    fn every_wall_gets_an_orientation_code() {
        let config = GenerationConfig::new(17, 36, 30);
        for strategy in [LayoutStrategy::cave(), LayoutStrategy::Dungeon, LayoutStrategy::arena()] {
            let layout = strategy.generate(&config).expect("generation should succeed");
            assert_eq!(layout.kind, strategy.kind());
            for (tile, orientation) in layout.grid.tiles().iter().zip(&layout.orientations) {
                assert_eq!(*tile == TileKind::Wall, orientation.is_some());
            }
        }
    }

    #[test]
    fn only_dungeons_have_rooms() {
        let config = GenerationConfig::new(4, 30, 30);
        assert!(LayoutStrategy::cave().generate(&config).expect("cave").rooms.is_empty());
        assert!(LayoutStrategy::arena().generate(&config).expect("arena").rooms.is_empty());
        let dungeon = LayoutStrategy::Dungeon.generate(&config).expect("dungeon");
        assert!(!dungeon.rooms.is_empty());
        if dungeon.rooms.len() > 1 {
            assert!(dungeon.rooms.iter().all(|room| !room.doors.is_empty()));
        }
    }

    #[test]
    fn strategies_deserialize_from_tagged_json_with_defaults() {
        let cave: LayoutStrategy = serde_json::from_str(r#"{"kind":"cave"}"#).expect("cave");
        assert_eq!(cave, LayoutStrategy::cave());

        let arena: LayoutStrategy =
            serde_json::from_str(r#"{"kind":"arena","border_thickness":5}"#).expect("arena");
        assert_eq!(arena, LayoutStrategy::Arena { border_thickness: 5 });

        let dungeon: LayoutStrategy = serde_json::from_str(r#"{"kind":"dungeon"}"#).expect("dungeon");
        assert_eq!(dungeon, LayoutStrategy::Dungeon);
    }
}
