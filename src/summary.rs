use std::fmt;

use voxform_geom::Aabb;
use voxform_mesh_cpu::{Face, MeshBuild};

#[derive(Clone, Debug, PartialEq)]
pub struct MeshSummary {
    pub quads: usize,
    pub vertices: usize,
    pub triangles: usize,
    pub bounds: Option<Aabb>,
    pub surface_area: f32,
    pub quads_per_face: [usize; 6],
}

impl MeshSummary {
    pub fn of(mesh: &MeshBuild) -> Self {
        Self {
            quads: mesh.quad_count(),
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            bounds: mesh.bounds(),
            surface_area: mesh.surface_area(),
            quads_per_face: mesh.quads_per_face(),
        }
    }
}

impl fmt::Display for MeshSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quads: {}", self.quads)?;
        writeln!(f, "Vertices: {}", self.vertices)?;
        writeln!(f, "Triangles: {}", self.triangles)?;
        match self.bounds {
            Some(b) => writeln!(
                f,
                "Bounds: ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
                b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z
            )?,
            None => writeln!(f, "Bounds: empty")?,
        }
        writeln!(f, "Surface area: {:.3}", self.surface_area)?;
        for face in Face::ALL {
            writeln!(f, "  {:<6} {}", face.name(), self.quads_per_face[face.index()])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxform_geom::Rgba;
    use voxform_mesh_cpu::generate_mesh;
    use voxform_volume::{BlockId, Palette, Volume};

    #[test]
    fn summarises_single_voxel() {
        let mut v = Volume::new(1, 1, 1, 2.0).unwrap();
        v.set(0, 0, 0, BlockId(1)).unwrap();
        let mesh = generate_mesh(&v, &Palette::from_colors([Rgba::WHITE]), None).unwrap();
        let s = MeshSummary::of(&mesh);
        assert_eq!(s.quads, 6);
        assert_eq!(s.vertices, 24);
        assert_eq!(s.triangles, 12);
        assert_eq!(s.quads_per_face, [1; 6]);
        assert!((s.surface_area - 24.0).abs() < 1e-4);
        let text = s.to_string();
        assert!(text.contains("Quads: 6"));
        assert!(text.contains("(2.000, 2.000, 2.000)"));
        assert!(text.contains("front  1"));
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        let s = MeshSummary::of(&MeshBuild::default());
        assert_eq!(s.bounds, None);
        assert!(s.to_string().contains("Bounds: empty"));
    }
}
