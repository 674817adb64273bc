use voxform_volume::Volume;

use crate::face::Face;
use crate::neighbors::NeighborSet;

/// Returns true if the `face` of voxel `(x,y,z)` is hidden by a solid neighbor.
///
/// Inside the volume the adjacent voxel decides. Past the boundary the slab
/// supplied for `face` is sampled on its near layer (index `0` for a positive
/// face, `extent - 1` for a negative one); with no slab the face is exposed.
/// `(x,y,z)` must lie inside `volume`.
#[inline]
pub fn is_occluded(
    volume: &Volume,
    neighbors: &NeighborSet<'_>,
    x: usize,
    y: usize,
    z: usize,
    face: Face,
) -> bool {
    let (dx, dy, dz) = face.delta();
    let (nx, ny, nz) = (x as i32 + dx, y as i32 + dy, z as i32 + dz);
    if let Some(nb) = volume.get_signed(nx, ny, nz) {
        return nb.is_solid();
    }
    let Some(slab) = neighbors.get(face) else {
        return false;
    };
    let axis = face.axis();
    let mut c = [x as i32, y as i32, z as i32];
    c[axis] = if face.is_positive() {
        0
    } else {
        slab.extent(axis) as i32 - 1
    };
    slab.get_signed(c[0], c[1], c[2])
        .is_some_and(|nb| nb.is_solid())
}
