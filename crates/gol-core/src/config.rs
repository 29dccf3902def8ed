//! Configuration types for the automaton.

use crate::{Error, Position, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 64;
/// Cell `i` starts alive iff it is divisible by one of these
pub const DEFAULT_MODULI: [u32; 2] = [2, 7];
pub const DEFAULT_RULE: &str = "B3/S23";

/// Universe configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniverseConfig {
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
    /// Initial pattern
    pub seed: SeedConfig,
    /// Life-like rule in B/S notation
    pub rule: String,
    /// Glyphs used by `render`
    pub render: RenderConfig,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: SeedConfig::default(),
            rule: DEFAULT_RULE.to_string(),
            render: RenderConfig::default(),
        }
    }
}

impl UniverseConfig {
    /// Config of the given size with every cell dead
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            seed: SeedConfig::Empty,
            ..Default::default()
        }
    }

    /// Number of cells, or `None` if the dimensions are zero or overflow `usize`.
    ///
    /// Two `u32` factors can only overflow where `usize` is 32 bits (wasm32).
    pub fn cell_count(&self) -> Option<usize> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let width = usize::try_from(self.width).ok()?;
        let height = usize::try_from(self.height).ok()?;
        width.checked_mul(height)
    }

    /// Check dimensions and seed parameters
    pub fn validate(&self) -> Result<()> {
        if self.cell_count().is_none() {
            warn!(width = self.width, height = self.height, "Rejecting universe dimensions");
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        self.seed.validate()
    }
}

/// How the grid is populated at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedConfig {
    /// Cell `i` (row-major) is alive iff `i % m == 0` for any of the moduli
    Modulo { moduli: Vec<u32> },
    /// Reproducible pseudo-random fill
    Random { seed: u64, density: f64 },
    /// Empty grid with a catalogue pattern stamped at `(row, col)`
    Pattern { name: String, row: i32, col: i32 },
    /// Explicit live cells; coordinates wrap
    Cells { cells: Vec<Position> },
    /// Every cell dead
    Empty,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig::Modulo {
            moduli: DEFAULT_MODULI.to_vec(),
        }
    }
}

impl SeedConfig {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            SeedConfig::Modulo { .. } => "modulo",
            SeedConfig::Random { .. } => "random",
            SeedConfig::Pattern { .. } => "pattern",
            SeedConfig::Cells { .. } => "cells",
            SeedConfig::Empty => "empty",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            SeedConfig::Modulo { moduli } if moduli.contains(&0) => {
                warn!(?moduli, "Rejecting zero modulus");
                Err(Error::InvalidSeed("modulus must be non-zero".to_string()))
            }
            SeedConfig::Random { density, .. } if !(0.0..=1.0).contains(density) => {
                warn!(density, "Rejecting seed density");
                Err(Error::InvalidSeed(format!(
                    "density {} is outside [0, 1]",
                    density
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Glyphs for the textual snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub alive: char,
    pub dead: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive: '◼',
            dead: '◻',
        }
    }
}

/// Headless runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Number of generations to advance
    pub generations: u64,
    /// Emit a frame every N generations (0 prints only the final frame)
    pub print_every: u64,
    pub universe: UniverseConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            print_every: 1,
            universe: UniverseConfig::default(),
        }
    }
}

impl RunnerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = UniverseConfig::default();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 64);
        assert_eq!(config.rule, "B3/S23");
        assert_eq!(config.seed, SeedConfig::Modulo { moduli: vec![2, 7] });
        assert!(config.validate().is_ok());

        let runner = RunnerConfig::default();
        assert_eq!(runner.generations, 100);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = UniverseConfig::empty(0, 10);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));

        let config = UniverseConfig::empty(10, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(UniverseConfig::empty(3, 4).cell_count(), Some(12));
        assert_eq!(UniverseConfig::empty(0, 4).cell_count(), None);
        assert_eq!(UniverseConfig::empty(4, 0).cell_count(), None);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_cell_count_max_dimensions_fit() {
        let config = UniverseConfig::empty(u32::MAX, u32::MAX);
        assert_eq!(config.cell_count(), Some(u32::MAX as usize * u32::MAX as usize));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_cell_count_overflow_rejected() {
        let config = UniverseConfig::empty(65_536, 65_536);
        assert_eq!(config.cell_count(), None);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidDimensions { width: 65_536, height: 65_536 })
        ));
    }

    #[test]
    fn test_bad_seeds_rejected() {
        let seed = SeedConfig::Modulo { moduli: vec![3, 0] };
        assert!(matches!(seed.validate(), Err(Error::InvalidSeed(_))));

        let seed = SeedConfig::Random { seed: 1, density: 1.5 };
        assert!(matches!(seed.validate(), Err(Error::InvalidSeed(_))));

        let seed = SeedConfig::Random { seed: 1, density: 0.25 };
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RunnerConfig::from_json_str(r#"{"generations": 5}"#).unwrap();
        assert_eq!(config.generations, 5);
        assert_eq!(config.print_every, 1);
        assert_eq!(config.universe, UniverseConfig::default());
    }

    #[test]
    fn test_seed_json() {
        let json = r##"{
            "universe": {
                "width": 8,
                "height": 6,
                "seed": { "kind": "pattern", "name": "glider", "row": 1, "col": 1 },
                "render": { "alive": "#" }
            }
        }"##;
        let config = RunnerConfig::from_json_str(json).unwrap();
        assert_eq!(config.universe.width, 8);
        assert_eq!(config.universe.seed.kind(), "pattern");
        assert_eq!(config.universe.render.alive, '#');
        assert_eq!(config.universe.render.dead, '◻');
    }

    #[test]
    fn test_malformed_json() {
        let err = RunnerConfig::from_json_str("{ generations: }").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RunnerConfig::from_json_file("/nonexistent/gol-config.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
