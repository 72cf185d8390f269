/// Configuration loading and saving. The config lives in `config.toml` under
/// the platform config directory; missing keys fall back to the defaults below.
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::geometry::{
    AlternatingAspect, FixedAspect, GeometricParams, GridLayout, HeightPolicy, SectionInsets,
};

/// Grid geometry, in terminal cells when shown by the TUI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_count: usize,
    pub left_inset: f64,
    pub right_inset: f64,
    pub cell_spacing: f64,
    pub top_inset: f64,
    pub bottom_inset: f64,
    pub line_spacing: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_count: 3,
            left_inset: 2.0,
            right_inset: 2.0,
            cell_spacing: 2.0,
            top_inset: 1.0,
            bottom_inset: 1.0,
            line_spacing: 1.0,
        }
    }
}

/// How tall each cell is relative to its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightPattern {
    /// Every cell at 2/3 of its width
    #[default]
    Fixed,
    /// Three tall cells, then three short ones, repeating
    Alternating,
}

impl HeightPattern {
    pub fn name(self) -> &'static str {
        match self {
            HeightPattern::Fixed => "fixed",
            HeightPattern::Alternating => "alternating",
        }
    }

    pub fn policy(self) -> Box<dyn HeightPolicy> {
        match self {
            HeightPattern::Fixed => Box::new(FixedAspect::default()),
            HeightPattern::Alternating => Box::new(AlternatingAspect::default()),
        }
    }
}

impl fmt::Display for HeightPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Number of random swatches added per "add" action
    pub batch_size: usize,
    pub height_pattern: HeightPattern,
    /// Number of random swatches present at startup
    pub seed_count: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            batch_size: 2,
            height_pattern: HeightPattern::Fixed,
            seed_count: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Platform config directory for flowgrid.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("flowgrid");
        Ok(config_dir)
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads from the default location, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Writes the config using a temp file + rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = self.to_toml()?;
        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    pub fn validate(&self) -> Result<()> {
        self.grid_layout()?;
        if self.ui.batch_size == 0 {
            anyhow::bail!("ui.batch_size must be at least 1");
        }
        Ok(())
    }

    pub fn geometric_params(&self) -> Result<GeometricParams> {
        let grid = &self.grid;
        Ok(GeometricParams::new(
            grid.cell_count,
            grid.left_inset,
            grid.right_inset,
            grid.cell_spacing,
        )?)
    }

    pub fn grid_layout(&self) -> Result<GridLayout> {
        let insets = SectionInsets {
            top: self.grid.top_inset,
            bottom: self.grid.bottom_inset,
        };
        Ok(GridLayout::new(
            self.geometric_params()?,
            insets,
            self.grid.line_spacing,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid.cell_count, 3);
        assert_eq!(config.ui.batch_size, 2);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[grid]\ncell_count = 5\n\n[ui]\nheight_pattern = \"alternating\"\n")
            .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.grid.cell_count, 5);
        assert_eq!(config.grid.left_inset, 2.0);
        assert_eq!(config.ui.height_pattern, HeightPattern::Alternating);
    }

    #[test]
    fn invalid_geometry_is_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[grid]\ncell_count = 0\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("cell_count"));
    }

    #[test]
    fn pattern_name_matches_config_spelling() {
        for pattern in [HeightPattern::Fixed, HeightPattern::Alternating] {
            let config = Config {
                ui: UiConfig {
                    height_pattern: pattern,
                    ..UiConfig::default()
                },
                ..Config::default()
            };
            let toml = config.to_toml().unwrap();
            assert!(toml.contains(&format!("height_pattern = \"{pattern}\"")));
        }
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let mut config = Config::default();
        config.ui.batch_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.grid.cell_spacing = 4.0;
        config.ui.seed_count = 12;
        config.save_to(&path).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
