//! Level-to-strategy lookup used when a run asks for its next level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_ARENA_BORDER, DEFAULT_WALL_FRACTION, GenerationConfig};
use crate::rng::derive_level_seed;
use crate::strategy::LayoutStrategy;

pub const ARENA_SIZE: (usize, usize) = (60, 60);
const DUNGEON_BASE_SIZE: (usize, usize) = (48, 36);
const CAVE_BASE_SIZE: (usize, usize) = (50, 40);
/// Levels after which grids stop growing.
const GROWTH_CAP: u32 = 8;
const ENDLESS_DENSE_CAVES_FROM: u32 = 20;
const ENDLESS_DENSE_WALL_FRACTION: f64 = 0.47;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    Campaign,
    Endless,
    BossRush,
}

pub(crate) fn mode_code(mode: RunMode) -> u64 {
    match mode {
        RunMode::Campaign => 0,
        RunMode::Endless => 1,
        RunMode::BossRush => 2,
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunMode::Campaign => "campaign",
            RunMode::Endless => "endless",
            RunMode::BossRush => "boss-rush",
        };
        f.write_str(name)
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "campaign" => Ok(RunMode::Campaign),
            "endless" => Ok(RunMode::Endless),
            "boss-rush" => Ok(RunMode::BossRush),
            other => Err(format!("unknown run mode '{other}'")),
        }
    }
}

/// Strategy and inputs chosen for one level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelPlan {
    pub strategy: LayoutStrategy,
    pub config: GenerationConfig,
}

/// Maps a level of a run to the layout it should use. Pure table lookup.
pub fn select_strategy(level_index: u32, mode: RunMode, run_seed: u64) -> LevelPlan {
    let seed = derive_level_seed(run_seed, level_index, mode_code(mode));
    let growth = level_index.min(GROWTH_CAP) as usize;

    if is_boss_level(level_index, mode) {
        let (width, height) = ARENA_SIZE;
        return LevelPlan {
            strategy: LayoutStrategy::Arena { border_thickness: DEFAULT_ARENA_BORDER },
            config: GenerationConfig::new(seed, width, height),
        };
    }

    let use_dungeon = match mode {
        RunMode::Endless => seed & 1 == 0,
        _ => level_index % 2 == 0,
    };
    if use_dungeon {
        let (width, height) = DUNGEON_BASE_SIZE;
        return LevelPlan {
            strategy: LayoutStrategy::Dungeon,
            config: GenerationConfig::new(seed, width + 3 * growth, height + 3 * growth),
        };
    }

    let initial_wall_fraction = if mode == RunMode::Endless && level_index >= ENDLESS_DENSE_CAVES_FROM {
        ENDLESS_DENSE_WALL_FRACTION
    } else {
        DEFAULT_WALL_FRACTION
    };
    let (width, height) = CAVE_BASE_SIZE;
    LevelPlan {
        strategy: LayoutStrategy::Cave { initial_wall_fraction },
        config: GenerationConfig::new(seed, width + 4 * growth, height + 3 * growth),
    }
}

fn is_boss_level(level_index: u32, mode: RunMode) -> bool {
    match mode {
        RunMode::Campaign => level_index % 5 == 4,
        RunMode::Endless => level_index % 10 == 9,
        RunMode::BossRush => true,
    }
}
