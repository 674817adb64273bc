use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxform_geom::Rgba;

use crate::error::PaletteError;
use crate::types::BlockId;

/// Ordered color list. Block identifier `n` renders with `colors[n - 1]`.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    pub fn from_colors(colors: impl IntoIterator<Item = Rgba>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Appends a color and returns the identifier that now maps to it.
    pub fn push(&mut self, color: Rgba) -> BlockId {
        self.colors.push(color);
        BlockId(self.colors.len() as u32)
    }

    /// Removes the entry at `index`; later identifiers shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<Rgba> {
        if index < self.colors.len() {
            Some(self.colors.remove(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgba> {
        self.colors.get(index).copied()
    }

    /// Color for a block identifier; `None` for air or an id past the end.
    #[inline]
    pub fn color_for(&self, id: BlockId) -> Option<Rgba> {
        id.palette_index().and_then(|i| self.get(i))
    }

    pub fn from_entries(entries: &[ColorEntry]) -> Result<Self, PaletteError> {
        let colors = entries
            .iter()
            .enumerate()
            .map(|(index, e)| e.to_rgba().map_err(|reason| PaletteError::InvalidColor { index, reason }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, PaletteError> {
        let cfg: PaletteConfig = toml::from_str(toml_str)?;
        let palette = Self::from_entries(&cfg.colors)?;
        log::debug!("loaded palette with {} colors", palette.len());
        Ok(palette)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct PaletteConfig {
    pub colors: Vec<ColorEntry>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ColorEntry {
    // Hex: "#rrggbb" or "#rrggbbaa"
    Hex(String),
    // Floats: [r, g, b] or [r, g, b, a], channels in [0, 1]
    Floats(Vec<f32>),
}

impl ColorEntry {
    pub fn to_rgba(&self) -> Result<Rgba, String> {
        match self {
            ColorEntry::Hex(s) => parse_hex(s),
            ColorEntry::Floats(v) => {
                if let Some(c) = v.iter().find(|c| !(0.0..=1.0).contains(*c)) {
                    return Err(format!("channel {c} is outside [0, 1]"));
                }
                match v.as_slice() {
                    [r, g, b] => Ok(Rgba::new(*r, *g, *b, 1.0)),
                    [r, g, b, a] => Ok(Rgba::new(*r, *g, *b, *a)),
                    _ => Err(format!("expected 3 or 4 channels, got {}", v.len())),
                }
            }
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgba, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("'{s}' is not #rrggbb or #rrggbbaa"));
    }
    let mut rgba = [255u8; 4];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(chunk).map_err(|e| e.to_string())?;
        rgba[i] = u8::from_str_radix(pair, 16).map_err(|e| format!("'{s}': {e}"))?;
    }
    Ok(Rgba::from_rgba8(rgba))
}
