//! Voxel volume, block identifiers and color palette.
#![forbid(unsafe_code)]

pub mod error;
pub mod palette;
pub mod types;
pub mod volume;

pub use error::{PaletteError, VolumeError};
pub use palette::{ColorEntry, Palette};
pub use types::BlockId;
pub use volume::{MAX_VOXELS, Volume};
