//! Hook for renderers that pick visual assets per tile.

use crate::autotile::OrientationCode;
use crate::model::GeneratedLayout;
use crate::types::{Pos, TileKind};

/// Receives every cell of a finished layout.
///
/// Generation never calls this; asset and variant choice stays with whoever
/// injects the provider. Closures taking `(Pos, TileKind, Option<OrientationCode>)`
/// implement it directly.
pub trait TileStyleProvider {
    fn style(&mut self, pos: Pos, tile: TileKind, orientation: Option<OrientationCode>);
}

impl<F> TileStyleProvider for F
where
    F: FnMut(Pos, TileKind, Option<OrientationCode>),
{
    fn style(&mut self, pos: Pos, tile: TileKind, orientation: Option<OrientationCode>) {
        self(pos, tile, orientation);
    }
}

impl GeneratedLayout {
    /// Visits every cell in row-major order.
    pub fn apply_style<P: TileStyleProvider + ?Sized>(&self, provider: &mut P) {
        for pos in self.grid.positions() {
            provider.style(pos, self.tile_at(pos), self.orientation_at(pos));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autotile::autotile;
    use crate::grid::GridCanvas;
    use crate::model::LayoutKind;

    struct Counter {
        walls: usize,
        floors: usize,
    }

    impl TileStyleProvider for Counter {
        fn style(&mut self, _pos: Pos, tile: TileKind, orientation: Option<OrientationCode>) {
            match tile {
                TileKind::Wall => {
                    assert!(orientation.is_some());
                    self.walls += 1;
                }
                TileKind::Floor => {
                    assert!(orientation.is_none());
                    self.floors += 1;
                }
            }
        }
    }

    fn layout() -> GeneratedLayout {
        let mut grid = GridCanvas::new(3, 2);
        grid.set(Pos::new(1, 0), TileKind::Floor);
        let orientations = autotile(&grid);
        GeneratedLayout { kind: LayoutKind::Arena, seed: 0, grid, orientations, rooms: Vec::new() }
    }

    #[test]
    fn provider_sees_every_cell_once() {
        let mut counter = Counter { walls: 0, floors: 0 };
        layout().apply_style(&mut counter);
        assert_eq!((counter.walls, counter.floors), (5, 1));
    }

    #[test]
    fn closures_work_as_providers() {
        let mut visited = Vec::new();
        layout().apply_style(
            &mut |pos: Pos, _tile: TileKind, _orientation: Option<OrientationCode>| {
                visited.push(pos)
            },
        );
        assert_eq!(visited.len(), 6);
        assert_eq!(visited[0], Pos::new(0, 0));
        assert_eq!(visited[5], Pos::new(2, 1));
    }
}
