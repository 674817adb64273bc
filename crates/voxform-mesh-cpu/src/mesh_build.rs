use voxform_geom::{Aabb, Rgba, Vec3};

use crate::face::Face;

/// Flat triangle mesh: parallel position/normal/color streams plus a triangle list.
///
/// Every quad owns its four vertices; nothing is shared between quads.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<Vec3>,
    pub norm: Vec<Vec3>,
    pub col: Vec<Rgba>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Clears all arrays but retains capacity for reuse across invocations.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.col.clear();
        self.idx.clear();
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * 4);
        self.norm.reserve(n_quads * 4);
        self.col.reserve(n_quads * 4);
        self.idx.reserve(n_quads * 6);
    }

    /// Appends a planar quad as two triangles.
    ///
    /// Corners are given in perimeter order. If `(b - a) × (c - a)` points
    /// against `n` the order is mirrored so both triangles face along `n`.
    pub fn add_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3, n: Vec3, color: Rgba) {
        let base = self.pos.len() as u32;
        let mut vs = [a, b, c, d];
        let cross = (vs[1] - vs[0]).cross(vs[2] - vs[0]);
        if cross.dot(n) < 0.0 {
            vs.swap(1, 3);
        }
        for v in vs {
            self.pos.push(v);
            self.norm.push(n);
            self.col.push(color);
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Emits a face-aligned rectangle spanning `u_len` along the face's primary
    /// merge axis and `v_len` along its secondary axis, starting at `origin`.
    pub fn add_face_rect(&mut self, face: Face, origin: Vec3, u_len: f32, v_len: f32, color: Rgba) {
        let (pa, sa) = face.merge_axes();
        let u = Vec3::ZERO.with_axis(pa, u_len);
        let v = Vec3::ZERO.with_axis(sa, v_len);
        self.add_quad(origin, origin + u, origin + u + v, origin + v, face.normal(), color);
    }

    /// Shifts every position by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for p in &mut self.pos {
            *p += offset;
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.pos.len() / 4
    }

    /// Quads per face direction, indexed by [`Face::index`].
    pub fn quads_per_face(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for n in self.norm.iter().step_by(4) {
            if let Some(f) = Face::ALL.into_iter().find(|f| f.normal() == *n) {
                counts[f.index()] += 1;
            }
        }
        counts
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.pos.iter().copied())
    }

    /// Sum of triangle areas.
    pub fn surface_area(&self) -> f32 {
        self.idx
            .chunks_exact(3)
            .map(|t| {
                let a = self.pos[t[0] as usize];
                let b = self.pos[t[1] as usize];
                let c = self.pos[t[2] as usize];
                0.5 * (b - a).cross(c - a).length()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_winding_follows_normal() {
        let mut mb = MeshBuild::default();
        let n = Vec3::new(0.0, 0.0, 1.0);
        // Clockwise when seen from +Z; must be mirrored.
        mb.add_quad(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            n,
            Rgba::WHITE,
        );
        for t in mb.idx.chunks_exact(3) {
            let (a, b, c) = (mb.pos[t[0] as usize], mb.pos[t[1] as usize], mb.pos[t[2] as usize]);
            assert!((b - a).cross(c - a).dot(n) > 0.0);
        }
        assert_eq!(mb.idx, vec![0, 1, 2, 0, 2, 3]);
        assert!((mb.surface_area() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn face_rect_spans_merge_axes() {
        let mut mb = MeshBuild::default();
        mb.add_face_rect(Face::PosX, Vec3::ZERO, 2.0, 3.0, Rgba::WHITE);
        let bb = mb.bounds().unwrap();
        assert_eq!(bb.size(), Vec3::new(0.0, 2.0, 3.0));
        assert_eq!(mb.quads_per_face()[Face::PosX.index()], 1);
    }

    #[test]
    fn clearing_keeps_reserved_capacity() {
        let mut mb = MeshBuild::default();
        mb.reserve_quads(8);
        assert!(mb.pos.capacity() >= 32 && mb.idx.capacity() >= 48);
        mb.add_face_rect(Face::NegY, Vec3::ZERO, 1.0, 1.0, Rgba::BLACK);
        let cap = mb.col.capacity();
        mb.clear_keep_capacity();
        assert!(mb.is_empty() && mb.idx.is_empty());
        assert_eq!(mb.col.capacity(), cap);
    }
}
