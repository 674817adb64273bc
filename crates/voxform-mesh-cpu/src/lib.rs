//! CPU greedy mesher for dense block volumes.
//!
//! [`generate_mesh`] turns a [`Volume`] and its [`Palette`] into a [`MeshBuild`]:
//! coplanar faces of equal identifier are merged into maximal rectangles, faces
//! between solid voxels are dropped, and boundary faces are resolved against
//! optional neighbor slabs so adjacent volumes mesh without seams.
#![forbid(unsafe_code)]

pub mod error;
pub mod face;
pub mod greedy;
pub mod mesh_build;
pub mod neighbors;
pub mod visibility;

pub use error::MeshError;
pub use face::Face;
pub use greedy::GreedyMesher;
pub use mesh_build::MeshBuild;
pub use neighbors::NeighborSet;
pub use visibility::is_occluded;

use voxform_volume::{Palette, Volume};

/// One-shot entry point; see [`GreedyMesher::mesh`].
pub fn generate_mesh(
    volume: &Volume,
    palette: &Palette,
    neighbors: Option<&NeighborSet<'_>>,
) -> Result<MeshBuild, MeshError> {
    GreedyMesher::new().mesh(volume, palette, neighbors)
}
