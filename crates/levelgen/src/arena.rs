//! Fixed boss arena: a walled rectangle with an open interior.

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::grid::GridCanvas;
use crate::model::LayoutKind;
use crate::types::TileKind;

pub fn generate_arena(
    config: &GenerationConfig,
    border_thickness: usize,
) -> Result<GridCanvas, GenerationError> {
    let mut grid = GridCanvas::new(config.width, config.height);
    let interior: Vec<_> =
        grid.positions().filter(|&pos| !grid.is_border(pos, border_thickness)).collect();
    if interior.is_empty() {
        return Err(GenerationError::EmptyLevel { strategy: LayoutKind::Arena });
    }
    for pos in interior {
        grid.set(pos, TileKind::Floor);
    }
    Ok(grid)
}
