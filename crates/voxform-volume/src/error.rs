use thiserror::Error;

/// Errors raised by [`crate::Volume`] construction and accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VolumeError {
    /// A coordinate outside `[0,w)×[0,h)×[0,d)` was passed to `get`/`set`.
    #[error("voxel ({x}, {y}, {z}) is outside volume of size {dims:?}")]
    OutOfBounds {
        x: usize,
        y: usize,
        z: usize,
        dims: (usize, usize, usize),
    },

    #[error("volume extent must be non-zero on every axis, got {0:?}")]
    EmptyExtent((usize, usize, usize)),

    #[error("volume extent {0:?} exceeds the maximum voxel count")]
    TooLarge((usize, usize, usize)),

    #[error("expected {expected} blocks, got {found}")]
    BlockCountMismatch { expected: usize, found: usize },
}

/// Errors raised while loading a palette from TOML.
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("failed to read palette: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse palette: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color entry {index}: {reason}")]
    InvalidColor { index: usize, reason: String },
}
