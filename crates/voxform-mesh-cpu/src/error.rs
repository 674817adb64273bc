use thiserror::Error;
use voxform_volume::BlockId;

use crate::face::Face;

/// Reasons a mesh could not be generated. No partial mesh is returned with any of them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Voxel edge length was zero, negative or not finite.
    #[error("invalid voxel size {0}: must be finite and greater than zero")]
    InvalidVoxelSize(f32),

    /// A voxel references an identifier with no palette entry.
    #[error("block id {} has no palette entry (palette has {palette_len} colors)", .id.0)]
    MissingPaletteEntry { id: BlockId, palette_len: usize },

    /// A neighbor slab's cross-section does not match the owning volume's face.
    #[error("{} neighbor slab is {found:?} across the face, expected {expected:?}", .face.name())]
    NeighborMismatch {
        face: Face,
        expected: (usize, usize),
        found: (usize, usize),
    },
}
