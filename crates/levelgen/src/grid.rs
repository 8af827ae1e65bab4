//! Fixed-size tile storage shared by every layout strategy.

use serde::{Deserialize, Serialize};

use crate::types::{Pos, TileKind};

/// Mutable width×height array of tiles. Every cell starts as a wall.
///
/// Reads outside the grid return [`TileKind::Wall`] instead of panicking, which
/// lets neighbor counting and border logic treat the outside world as solid rock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCanvas {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl GridCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![TileKind::Wall; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn get(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    /// Writes are ignored outside the grid.
    pub fn set(&mut self, pos: Pos, kind: TileKind) {
        if self.in_bounds(pos) {
            let index = self.index(pos);
            self.tiles[index] = kind;
        }
    }

    pub fn fill(&mut self, kind: TileKind) {
        self.tiles.fill(kind);
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }

    pub fn floor_positions(&self) -> Vec<Pos> {
        self.positions().filter(|&pos| self.get(pos) == TileKind::Floor).collect()
    }

    /// True when `pos` lies within `thickness` tiles of any grid edge.
    pub fn is_border(&self, pos: Pos, thickness: usize) -> bool {
        let thickness = thickness as i32;
        pos.x < thickness
            || pos.y < thickness
            || pos.x >= self.width as i32 - thickness
            || pos.y >= self.height as i32 - thickness
    }

    pub(crate) fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_wall() {
        let grid = GridCanvas::new(5, 4);
        assert_eq!(grid.count(TileKind::Wall), 20);
        assert!(grid.floor_positions().is_empty());
    }

    #[test]
    fn out_of_bounds_reads_are_wall_and_writes_are_ignored() {
        let mut grid = GridCanvas::new(3, 3);
        grid.fill(TileKind::Floor);
        assert_eq!(grid.get(Pos::new(-1, 0)), TileKind::Wall);
        assert_eq!(grid.get(Pos::new(0, 3)), TileKind::Wall);
        assert_eq!(grid.get(Pos::new(3, 3)), TileKind::Wall);

        grid.set(Pos::new(5, 5), TileKind::Wall);
        assert_eq!(grid.count(TileKind::Floor), 9);
    }

    #[test]
    fn set_then_get_round_trips_inside_bounds() {
        let mut grid = GridCanvas::new(4, 2);
        grid.set(Pos::new(3, 1), TileKind::Floor);
        assert_eq!(grid.get(Pos::new(3, 1)), TileKind::Floor);
        assert_eq!(grid.tiles()[7], TileKind::Floor);
    }

    #[test]
    fn border_band_respects_thickness() {
        let grid = GridCanvas::new(10, 8);
        assert!(grid.is_border(Pos::new(1, 4), 2));
        assert!(grid.is_border(Pos::new(8, 4), 2));
        assert!(!grid.is_border(Pos::new(2, 2), 2));
        assert!(grid.is_border(Pos::new(5, 6), 2));
        assert!(!grid.is_border(Pos::new(0, 0), 0));
    }
}
