use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use voxform_volume::{BlockId, ColorEntry, Palette, Volume};

use crate::BoxError;

fn default_voxel_size() -> f32 {
    1.0
}

/// On-disk model description.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    #[serde(default = "default_voxel_size")]
    pub voxel_size: f32,
    /// Flat identifiers in x-major order; absent means all air.
    #[serde(default)]
    pub blocks: Option<Vec<u32>>,
    #[serde(default)]
    pub palette: Option<Vec<ColorEntry>>,
    #[serde(default)]
    pub palette_file: Option<PathBuf>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelSpecError {
    #[error("model needs either `palette` or `palette_file`")]
    NoPalette,
    #[error("model sets both `palette` and `palette_file`")]
    BothPalettes,
}

pub struct Model {
    pub volume: Volume,
    pub palette: Palette,
}

impl ModelConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, BoxError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn build_volume(&self) -> Result<Volume, BoxError> {
        let volume = match &self.blocks {
            Some(ids) => Volume::from_blocks(
                self.width,
                self.height,
                self.depth,
                self.voxel_size,
                ids.iter().copied().map(BlockId).collect(),
            )?,
            None => Volume::new(self.width, self.height, self.depth, self.voxel_size)?,
        };
        Ok(volume)
    }

    /// `base_dir` anchors a relative `palette_file`.
    pub fn build_palette(&self, base_dir: &Path) -> Result<Palette, BoxError> {
        match (&self.palette, &self.palette_file) {
            (Some(entries), None) => Ok(Palette::from_entries(entries)?),
            (None, Some(file)) => Ok(Palette::from_path(base_dir.join(file))?),
            (None, None) => Err(ModelSpecError::NoPalette.into()),
            (Some(_), Some(_)) => Err(ModelSpecError::BothPalettes.into()),
        }
    }
}

pub fn load_model(path: &Path) -> Result<Model, BoxError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let cfg = ModelConfig::from_toml_str(&text)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let volume = cfg.build_volume()?;
    let palette = cfg.build_palette(base_dir)?;
    log::info!(
        "loaded model {} ({}x{}x{}, {} colors)",
        path.display(),
        cfg.width,
        cfg.height,
        cfg.depth,
        palette.len()
    );
    Ok(Model { volume, palette })
}

/// Neighbor slabs only contribute occupancy.
pub fn load_slab(path: &Path) -> Result<Volume, BoxError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let cfg = ModelConfig::from_toml_str(&text)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    cfg.build_volume()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inline_palette_model() {
        let cfg = ModelConfig::from_toml_str(
            r##"
            width = 2
            height = 1
            depth = 1
            voxel_size = 0.5
            blocks = [1, 0]
            palette = ["#ff0000", [0.0, 1.0, 0.0, 1.0]]
            "##,
        )
        .unwrap();
        let v = cfg.build_volume().unwrap();
        assert_eq!(v.dims(), (2, 1, 1));
        assert_eq!(v.voxel_size(), 0.5);
        assert_eq!(v.get(0, 0, 0).unwrap(), BlockId(1));
        let p = cfg.build_palette(Path::new(".")).unwrap();
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn missing_blocks_means_air() {
        let cfg = ModelConfig::from_toml_str("width = 3\nheight = 2\ndepth = 1\npalette = []\n")
            .unwrap();
        assert_eq!(cfg.voxel_size, 1.0);
        let v = cfg.build_volume().unwrap();
        assert!(v.is_all_air());
    }

    #[test]
    fn wrong_block_count_is_rejected() {
        let cfg = ModelConfig::from_toml_str(
            "width = 2\nheight = 2\ndepth = 2\nblocks = [1, 1, 1]\npalette = []\n",
        )
        .unwrap();
        assert!(cfg.build_volume().is_err());
    }

    #[test]
    fn palette_source_must_be_unique() {
        let none = ModelConfig::from_toml_str("width = 1\nheight = 1\ndepth = 1\n").unwrap();
        assert!(none.build_palette(Path::new(".")).is_err());
        let both = ModelConfig::from_toml_str(
            "width = 1\nheight = 1\ndepth = 1\npalette = []\npalette_file = \"p.toml\"\n",
        )
        .unwrap();
        let err = both.build_palette(Path::new(".")).unwrap_err();
        assert_eq!(err.to_string(), ModelSpecError::BothPalettes.to_string());
    }
}
