use std::time::Instant;

use voxform_geom::Vec3;
use voxform_volume::{BlockId, Palette, Volume};

use crate::error::MeshError;
use crate::face::Face;
use crate::mesh_build::MeshBuild;
use crate::neighbors::NeighborSet;
use crate::visibility::is_occluded;

/// Greedy face-merging mesher.
///
/// Holds the consumed-mask arena (one byte per voxel, one bit per [`Face`]) so
/// repeated invocations can reuse the allocation. Each call fully recomputes
/// the mesh; only the previous quad count survives, as a capacity hint.
#[derive(Default)]
pub struct GreedyMesher {
    consumed: Vec<u8>,
    last_quads: usize,
}

impl GreedyMesher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Meshes `volume`, coloring faces from `palette` and consulting `neighbors`
    /// at the volume boundary.
    ///
    /// Fails before producing any geometry if the voxel size is not positive,
    /// a neighbor slab has the wrong cross-section, or any voxel references an
    /// identifier the palette does not cover.
    pub fn mesh(
        &mut self,
        volume: &Volume,
        palette: &Palette,
        neighbors: Option<&NeighborSet<'_>>,
    ) -> Result<MeshBuild, MeshError> {
        let mut out = MeshBuild::default();
        self.mesh_into(volume, palette, neighbors, &mut out)?;
        Ok(out)
    }

    /// Like [`GreedyMesher::mesh`], but writes into `out`, reusing its buffers.
    ///
    /// `out` is cleared first. On error it is left empty.
    pub fn mesh_into(
        &mut self,
        volume: &Volume,
        palette: &Palette,
        neighbors: Option<&NeighborSet<'_>>,
        out: &mut MeshBuild,
    ) -> Result<(), MeshError> {
        let start = Instant::now();
        out.clear_keep_capacity();
        let neighbors = neighbors.copied().unwrap_or_default();
        validate(volume, palette, &neighbors).inspect_err(|e| {
            log::warn!("mesh rejected: {}", e);
        })?;

        self.consumed.clear();
        self.consumed.resize(volume.len(), 0);
        out.reserve_quads(self.last_quads);

        for face in Face::ALL {
            let before = out.quad_count();
            if let Err(e) = self.sweep_face(volume, palette, &neighbors, face, out) {
                out.clear_keep_capacity();
                return Err(e);
            }
            log::trace!("{} pass: {} quads", face.name(), out.quad_count() - before);
        }

        let half = volume.voxel_size() / 2.0;
        out.translate(Vec3::splat(half));
        self.last_quads = out.quad_count();

        let (sx, sy, sz) = volume.dims();
        log::debug!(
            "meshed {}x{}x{} volume: {} quads, {} vertices in {:?}",
            sx,
            sy,
            sz,
            out.quad_count(),
            out.vertex_count(),
            start.elapsed()
        );
        Ok(())
    }

    /// Scans one face direction, claiming maximal rectangles in slice,
    /// secondary, primary order.
    fn sweep_face(
        &mut self,
        volume: &Volume,
        palette: &Palette,
        neighbors: &NeighborSet<'_>,
        face: Face,
        out: &mut MeshBuild,
    ) -> Result<(), MeshError> {
        let na = face.axis();
        let (pa, sa) = face.merge_axes();
        let (n_len, p_len, s_len) = (volume.extent(na), volume.extent(pa), volume.extent(sa));
        let size = volume.voxel_size();
        let half = size / 2.0;
        let bit = face.bit();

        let at = |n: usize, p: usize, s: usize| -> [usize; 3] {
            let mut c = [0usize; 3];
            c[na] = n;
            c[pa] = p;
            c[sa] = s;
            c
        };

        for n in 0..n_len {
            for s in 0..s_len {
                for p in 0..p_len {
                    let c = at(n, p, s);
                    let id = volume.get_local(c[0], c[1], c[2]);
                    if id.is_air() || !self.is_open(volume, neighbors, c, face, id) {
                        continue;
                    }

                    let mut run = 1;
                    while p + run < p_len && self.is_open(volume, neighbors, at(n, p + run, s), face, id) {
                        run += 1;
                    }

                    // Stack whole runs; stop at the first row with any mismatch.
                    let mut rows = 1;
                    'extend: while s + rows < s_len {
                        for k in 0..run {
                            if !self.is_open(volume, neighbors, at(n, p + k, s + rows), face, id) {
                                break 'extend;
                            }
                        }
                        rows += 1;
                    }

                    for r in 0..rows {
                        for k in 0..run {
                            let cc = at(n, p + k, s + r);
                            let i = volume.idx(cc[0], cc[1], cc[2]);
                            self.consumed[i] |= bit;
                        }
                    }

                    let color = palette
                        .color_for(id)
                        .ok_or_else(|| MeshError::MissingPaletteEntry { id, palette_len: palette.len() })?;
                    let mut origin = Vec3::new(
                        c[0] as f32 * size - half,
                        c[1] as f32 * size - half,
                        c[2] as f32 * size - half,
                    );
                    if face.is_positive() {
                        origin = origin.with_axis(na, origin.axis(na) + size);
                    }
                    out.add_face_rect(face, origin, run as f32 * size, rows as f32 * size, color);
                }
            }
        }
        Ok(())
    }

    /// Voxel `c` can join a rectangle of `id` facing `face`.
    #[inline]
    fn is_open(
        &self,
        volume: &Volume,
        neighbors: &NeighborSet<'_>,
        c: [usize; 3],
        face: Face,
        id: BlockId,
    ) -> bool {
        volume.get_local(c[0], c[1], c[2]) == id
            && self.consumed[volume.idx(c[0], c[1], c[2])] & face.bit() == 0
            && !is_occluded(volume, neighbors, c[0], c[1], c[2], face)
    }
}

fn validate(volume: &Volume, palette: &Palette, neighbors: &NeighborSet<'_>) -> Result<(), MeshError> {
    let size = volume.voxel_size();
    if !(size.is_finite() && size > 0.0) {
        return Err(MeshError::InvalidVoxelSize(size));
    }
    for (face, slab) in neighbors.iter() {
        let (pa, sa) = face.merge_axes();
        let expected = (volume.extent(pa), volume.extent(sa));
        let found = (slab.extent(pa), slab.extent(sa));
        if expected != found {
            return Err(MeshError::NeighborMismatch {
                face,
                expected,
                found,
            });
        }
    }
    let max = volume.max_block_id();
    if let Some(i) = max.palette_index() {
        if i >= palette.len() {
            return Err(MeshError::MissingPaletteEntry {
                id: max,
                palette_len: palette.len(),
            });
        }
    }
    Ok(())
}
