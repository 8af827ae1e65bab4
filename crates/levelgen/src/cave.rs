//! Organic cave layouts from seeded noise and 4-5 cellular-automata smoothing.

use log::{debug, warn};

use crate::config::{CAVE_BORDER_THICKNESS, GenerationConfig, SMOOTHING_ITERATIONS};
use crate::error::GenerationError;
use crate::grid::GridCanvas;
use crate::model::LayoutKind;
use crate::regions::{compute_regions, connect_regions};
use crate::rng::SeededStream;
use crate::types::{Pos, TileKind};

/// Builds a connected cave grid. Orientation codes are added by the caller.
pub fn generate_cave(
    config: &GenerationConfig,
    initial_wall_fraction: f64,
    stream: &mut SeededStream,
) -> Result<GridCanvas, GenerationError> {
    let mut grid = GridCanvas::new(config.width, config.height);
    seed_fill(&mut grid, initial_wall_fraction, stream);

    for pass in 0..SMOOTHING_ITERATIONS {
        let changed = smooth_step(&mut grid);
        debug!("cave smoothing pass {pass}: {changed} tiles changed");
    }

    if grid.count(TileKind::Floor) == 0 {
        warn!("cave seed {} left no floor after smoothing", config.seed);
        return Err(GenerationError::EmptyLevel { strategy: LayoutKind::Cave });
    }

    let regions = compute_regions(&grid);
    debug!("cave has {} floor regions before repair", regions.len());
    let bridged = connect_regions(regions, &mut grid);
    if bridged > 0 {
        debug!("cave bridged {bridged} regions to the main cavern");
    }

    Ok(grid)
}

/// Border band is solid; every interior cell is independently a wall with
/// probability `wall_fraction`, drawn in row-major order.
pub fn seed_fill(grid: &mut GridCanvas, wall_fraction: f64, stream: &mut SeededStream) {
    let positions: Vec<Pos> = grid.positions().collect();
    for pos in positions {
        let kind = if grid.is_border(pos, CAVE_BORDER_THICKNESS) || stream.chance(wall_fraction) {
            TileKind::Wall
        } else {
            TileKind::Floor
        };
        grid.set(pos, kind);
    }
}

/// One 4-5 rule pass over a snapshot of the previous state.
///
/// A wall survives with at least four wall neighbors, a floor turns to wall
/// with at least five; cells outside the grid count as walls. Returns the
/// number of tiles that changed.
pub fn smooth_step(grid: &mut GridCanvas) -> usize {
    let snapshot = grid.clone();
    let mut changed = 0;
    for pos in snapshot.positions() {
        let walls = wall_neighbors(&snapshot, pos);
        let current = snapshot.get(pos);
        let next = match current {
            TileKind::Wall if walls >= 4 => TileKind::Wall,
            TileKind::Floor if walls >= 5 => TileKind::Wall,
            _ => TileKind::Floor,
        };
        if next != current {
            changed += 1;
            grid.set(pos, next);
        }
    }
    changed
}

fn wall_neighbors(grid: &GridCanvas, pos: Pos) -> usize {
    let mut walls = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if (dx != 0 || dy != 0) && grid.get(pos.offset(dx, dy)) == TileKind::Wall {
                walls += 1;
            }
        }
    }
    walls
}
