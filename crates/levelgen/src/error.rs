use thiserror::Error;

use crate::model::LayoutKind;

/// Reasons a generation call refuses or fails to produce a level.
///
/// Configuration errors are reported before any tile is written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("initial wall fraction {fraction} is outside [0.0, 1.0]")]
    InvalidWallFraction { fraction: f64 },
    /// The layout ended up without a single floor tile.
    #[error("{strategy:?} generation produced no floor tiles")]
    EmptyLevel { strategy: LayoutKind },
}
