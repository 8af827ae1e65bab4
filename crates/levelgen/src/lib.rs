//! Seeded level layout generation: room-and-corridor dungeons, cellular caves
//! and boss arenas, each producing a connected tile grid.

pub mod arena;
pub mod autotile;
pub mod cave;
pub mod config;
pub mod doors;
pub mod dungeon;
pub mod error;
pub mod grid;
pub mod model;
pub mod regions;
pub mod rng;
pub mod selector;
pub mod strategy;
pub mod style;
pub mod types;

pub use autotile::OrientationCode;
pub use config::GenerationConfig;
pub use error::GenerationError;
pub use grid::GridCanvas;
pub use model::{DoorBlueprint, GeneratedLayout, LayoutKind, RoomBlueprint, RoomRect};
pub use selector::{LevelPlan, RunMode, select_strategy};
pub use strategy::LayoutStrategy;
pub use style::TileStyleProvider;
pub use types::{Direction, Pos, TileKind};

pub fn generate_layout(
    strategy: &LayoutStrategy,
    config: &GenerationConfig,
) -> Result<GeneratedLayout, GenerationError> {
    strategy.generate(config)
}

/// Picks the strategy for `level_index` of a run and generates it.
pub fn generate_level(
    level_index: u32,
    mode: RunMode,
    run_seed: u64,
) -> Result<GeneratedLayout, GenerationError> {
    let plan = select_strategy(level_index, mode, run_seed);
    plan.strategy.generate(&plan.config)
}
