//! TOML description of a single level to generate.
//!
//! ```toml
//! seed = 42
//! width = 50
//! height = 50
//!
//! [strategy]
//! kind = "cave"
//! initial_wall_fraction = 0.45
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use levelgen::{GenerationConfig, LayoutStrategy};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelFile {
    pub seed: u64,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_strategy")]
    pub strategy: LayoutStrategy,
}

fn default_width() -> usize {
    64
}
fn default_height() -> usize {
    48
}
fn default_strategy() -> LayoutStrategy {
    LayoutStrategy::cave()
}

impl LevelFile {
    pub fn config(&self) -> GenerationConfig {
        GenerationConfig::new(self.seed, self.width, self.height)
    }
}

pub fn load_level_file(path: &Path) -> Result<LevelFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read level file: {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse level file: {}", path.display()))
}
