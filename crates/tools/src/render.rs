//! Plain-text rendering of generated layouts.

use levelgen::{GeneratedLayout, OrientationCode, Pos, TileKind, TileStyleProvider};

/// Builds one line of glyphs per grid row.
pub struct AsciiCanvas {
    width: usize,
    rows: Vec<String>,
}

impl AsciiCanvas {
    pub fn new(width: usize) -> Self {
        Self { width, rows: Vec::new() }
    }

    pub fn into_text(self) -> String {
        self.rows.join("\n")
    }
}

impl TileStyleProvider for AsciiCanvas {
    fn style(&mut self, pos: Pos, tile: TileKind, orientation: Option<OrientationCode>) {
        if pos.x == 0 {
            self.rows.push(String::with_capacity(self.width));
        }
        let glyph = match (tile, orientation) {
            (TileKind::Floor, _) => '.',
            (TileKind::Wall, Some(code)) => wall_glyph(code),
            (TileKind::Wall, None) => '#',
        };
        if let Some(row) = self.rows.last_mut() {
            row.push(glyph);
        }
    }
}

fn wall_glyph(code: OrientationCode) -> char {
    if code.is_inner_corner() {
        return '+';
    }
    let north_south = OrientationCode::NORTH | OrientationCode::SOUTH;
    let east_west = OrientationCode::EAST | OrientationCode::WEST;
    let value = code.value();
    let vertical = value & north_south == north_south;
    let horizontal = value & east_west == east_west;
    match value {
        0 => 'o',
        15 => '#',
        _ if value & east_west == 0 || (vertical && !horizontal) => '|',
        _ if value & north_south == 0 || (horizontal && !vertical) => '-',
        _ => '+',
    }
}

pub fn render_ascii(layout: &GeneratedLayout) -> String {
    let mut canvas = AsciiCanvas::new(layout.width());
    layout.apply_style(&mut canvas);
    canvas.into_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelgen::{GenerationConfig, LayoutStrategy};

    #[test]
    fn arena_renders_solid_frame_around_floor() {
        let layout = LayoutStrategy::Arena { border_thickness: 1 }
            .generate(&GenerationConfig::new(0, 5, 4))
            .expect("arena");
        let text = render_ascii(&layout);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows, vec!["+---+", "|...|", "|...|", "+---+"]);
    }

    #[test]
    fn glyphs_follow_wall_runs() {
        let value = |bits: u8| OrientationCode::new(bits).expect("valid code");
        assert_eq!(wall_glyph(value(OrientationCode::EAST | OrientationCode::WEST)), '-');
        assert_eq!(wall_glyph(value(OrientationCode::NORTH | OrientationCode::SOUTH)), '|');
        assert_eq!(wall_glyph(value(OrientationCode::NORTH)), '|');
        assert_eq!(wall_glyph(value(OrientationCode::EAST | OrientationCode::SOUTH)), '+');
        assert_eq!(wall_glyph(OrientationCode::ENCLOSED), '#');
        assert_eq!(wall_glyph(OrientationCode::INNER_SOUTH_WEST), '+');
        assert_eq!(wall_glyph(OrientationCode::ISOLATED), 'o');
    }
}
