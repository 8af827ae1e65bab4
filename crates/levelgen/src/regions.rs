//! Flood-fill region discovery and corridor bridging between floor regions.

use std::cmp::Reverse;
use std::collections::VecDeque;

use log::debug;

use crate::grid::GridCanvas;
use crate::types::{Pos, TileKind};

/// One maximal 4-connected component of floor tiles, in discovery order.
pub type Region = Vec<Pos>;

/// Collects every floor region of `grid`.
///
/// Seeds are taken in row-major order and each region is expanded breadth
/// first, so every floor tile is visited exactly once.
pub fn compute_regions(grid: &GridCanvas) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();

    for start in grid.positions() {
        if visited[grid.index(start)] || grid.get(start) != TileKind::Floor {
            continue;
        }

        let mut region = Vec::new();
        let mut open = VecDeque::from([start]);
        visited[grid.index(start)] = true;
        while let Some(pos) = open.pop_front() {
            region.push(pos);
            for next in pos.neighbors4() {
                if grid.get(next) != TileKind::Floor || visited[grid.index(next)] {
                    continue;
                }
                visited[grid.index(next)] = true;
                open.push_back(next);
            }
        }
        regions.push(region);
    }

    regions
}

/// Bridges every region to the largest one with an L-shaped corridor.
///
/// Distances are always measured against the largest region as it was found,
/// not against the trunk grown by earlier bridges. Ties in size keep discovery
/// order and ties in distance keep the first pair found.
pub fn connect_regions(mut regions: Vec<Region>, grid: &mut GridCanvas) -> usize {
    if regions.len() <= 1 {
        return 0;
    }

    regions.sort_by_key(|region| Reverse(region.len()));
    let (reference, others) = regions.split_at(1);
    let reference = &reference[0];

    for region in others {
        let Some((from, to)) = nearest_pair(region, reference) else {
            continue;
        };
        debug!(
            "bridging region of {} tiles: ({}, {}) -> ({}, {})",
            region.len(),
            from.x,
            from.y,
            to.x,
            to.y
        );
        carve_l_corridor(grid, from, to, true, 1);
    }

    others.len()
}

/// Brute-force minimum squared distance pair between two point sets.
fn nearest_pair(from_region: &[Pos], to_region: &[Pos]) -> Option<(Pos, Pos)> {
    let mut best: Option<(i64, Pos, Pos)> = None;
    for &from in from_region {
        for &to in to_region {
            let distance = from.distance_squared(to);
            if best.is_none_or(|(best_distance, _, _)| distance < best_distance) {
                best = Some((distance, from, to));
            }
        }
    }
    best.map(|(_, from, to)| (from, to))
}

/// Carves an orthogonal corridor from `start` to `end`.
///
/// The first leg runs along `start`'s row (or column when `horizontal_first`
/// is false) and the second leg finishes on `end`'s column (or row). Each leg
/// is `band_width` tiles wide, growing right/down from the center line, and
/// never touches the outermost ring of the grid.
pub fn carve_l_corridor(
    grid: &mut GridCanvas,
    start: Pos,
    end: Pos,
    horizontal_first: bool,
    band_width: usize,
) {
    if horizontal_first {
        carve_horizontal_band(grid, start.y, start.x, end.x, band_width);
        carve_vertical_band(grid, end.x, start.y, end.y, band_width);
    } else {
        carve_vertical_band(grid, start.x, start.y, end.y, band_width);
        carve_horizontal_band(grid, end.y, start.x, end.x, band_width);
    }
}

fn band_offsets(band_width: usize) -> impl Iterator<Item = i32> {
    let band_width = band_width.max(1) as i32;
    let low = -(band_width - 1) / 2;
    low..low + band_width
}

fn carve_horizontal_band(grid: &mut GridCanvas, y: i32, left_x: i32, right_x: i32, band: usize) {
    let from_x = left_x.min(right_x);
    let to_x = left_x.max(right_x);
    for offset in band_offsets(band) {
        for x in from_x..=to_x {
            carve_interior(grid, Pos { y: y + offset, x });
        }
    }
}

fn carve_vertical_band(grid: &mut GridCanvas, x: i32, top_y: i32, bottom_y: i32, band: usize) {
    let from_y = top_y.min(bottom_y);
    let to_y = top_y.max(bottom_y);
    for offset in band_offsets(band) {
        for y in from_y..=to_y {
            carve_interior(grid, Pos { y, x: x + offset });
        }
    }
}

fn carve_interior(grid: &mut GridCanvas, pos: Pos) {
    if grid.is_border(pos, 1) {
        return;
    }
    grid.set(pos, TileKind::Floor);
}
