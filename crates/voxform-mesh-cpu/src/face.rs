use voxform_geom::Vec3;

/// One of the six axis-aligned face directions.
///
/// Discriminants double as the face's bit position in the consumed mask.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    /// Front, +Z.
    PosZ = 0,
    /// Back, -Z.
    NegZ = 1,
    /// Top, +Y.
    PosY = 2,
    /// Bottom, -Y.
    NegY = 3,
    /// Right, +X.
    PosX = 4,
    /// Left, -X.
    NegX = 5,
}

impl Face {
    /// Pass order used by the mesher.
    pub const ALL: [Face; 6] = [
        Face::PosZ,
        Face::NegZ,
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    #[inline]
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Axis the face normal lies on (0 = X, 1 = Y, 2 = Z).
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            Face::PosX | Face::NegX => 0,
            Face::PosY | Face::NegY => 1,
            Face::PosZ | Face::NegZ => 2,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Face::PosX | Face::PosY | Face::PosZ)
    }

    /// `(primary, secondary)` merge axes. Runs grow along the primary axis first,
    /// then whole runs are stacked along the secondary axis.
    #[inline]
    pub fn merge_axes(self) -> (usize, usize) {
        match self {
            Face::PosZ | Face::NegZ => (0, 1),
            Face::PosY | Face::NegY => (0, 2),
            Face::PosX | Face::NegX => (1, 2),
        }
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }

    /// Human-facing name used by hosts and logs.
    pub fn name(self) -> &'static str {
        match self {
            Face::PosZ => "front",
            Face::NegZ => "back",
            Face::PosY => "top",
            Face::NegY => "bottom",
            Face::PosX => "right",
            Face::NegX => "left",
        }
    }

    pub fn from_name(s: &str) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.name() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_axes_are_perpendicular_to_normal() {
        for f in Face::ALL {
            let (p, s) = f.merge_axes();
            assert_ne!(p, f.axis());
            assert_ne!(s, f.axis());
            assert_ne!(p, s);
        }
    }

    #[test]
    fn bits_are_distinct() {
        let all = Face::ALL.iter().fold(0u8, |acc, f| {
            assert_eq!(acc & f.bit(), 0);
            acc | f.bit()
        });
        assert_eq!(all, 0b0011_1111);
    }

    #[test]
    fn names_roundtrip() {
        for f in Face::ALL {
            assert_eq!(Face::from_name(f.name()), Some(f));
            assert_eq!(Face::from_index(f.index()), Some(f));
            assert_eq!(f.opposite().opposite(), f);
        }
        assert_eq!(Face::from_name("up"), None);
    }
}
