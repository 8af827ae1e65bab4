//! Generation inputs shared by every layout strategy.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Cellular-automata passes applied to a seeded cave fill.
pub const SMOOTHING_ITERATIONS: usize = 5;
/// Wall band forced around every cave.
pub const CAVE_BORDER_THICKNESS: usize = 2;
/// Band width of room-to-room dungeon corridors.
pub const CORRIDOR_WIDTH: usize = 2;

pub const DEFAULT_WALL_FRACTION: f64 = 0.45;
pub const DEFAULT_ARENA_BORDER: usize = 3;

/// Seed and extent of one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub seed: u64,
    pub width: usize,
    pub height: usize,
}

impl GenerationConfig {
    pub fn new(seed: u64, width: usize, height: usize) -> Self {
        Self { seed, width, height }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.width == 0 || self.height == 0 {
            return Err(GenerationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_wall_fraction(fraction: f64) -> Result<(), GenerationError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(GenerationError::InvalidWallFraction { fraction });
    }
    Ok(())
}

pub(crate) fn default_wall_fraction() -> f64 {
    DEFAULT_WALL_FRACTION
}

pub(crate) fn default_arena_border() -> usize {
    DEFAULT_ARENA_BORDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_grids_are_rejected() {
        assert_eq!(
            GenerationConfig::new(1, 0, 10).validate(),
            Err(GenerationError::InvalidDimensions { width: 0, height: 10 })
        );
        assert!(GenerationConfig::new(1, 10, 0).validate().is_err());
        assert!(GenerationConfig::new(1, 1, 1).validate().is_ok());
    }

    #[test]
    fn wall_fraction_must_be_a_probability() {
        assert!(validate_wall_fraction(0.0).is_ok());
        assert!(validate_wall_fraction(1.0).is_ok());
        assert!(validate_wall_fraction(-0.01).is_err());
        assert!(validate_wall_fraction(1.5).is_err());
        assert!(validate_wall_fraction(f64::NAN).is_err());
    }
}
