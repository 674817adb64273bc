use voxform_volume::Volume;

use crate::face::Face;

/// Borrowed adjacent volumes, one optional slab per face direction.
///
/// A slab is only read when an occlusion query steps past the owning volume's
/// boundary in that direction. An absent slab leaves the boundary open.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeighborSet<'a> {
    pub pos_x: Option<&'a Volume>,
    pub neg_x: Option<&'a Volume>,
    pub pos_y: Option<&'a Volume>,
    pub neg_y: Option<&'a Volume>,
    pub pos_z: Option<&'a Volume>,
    pub neg_z: Option<&'a Volume>,
}

impl<'a> NeighborSet<'a> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            pos_x: None,
            neg_x: None,
            pos_y: None,
            neg_y: None,
            pos_z: None,
            neg_z: None,
        }
    }

    #[inline]
    pub fn with(mut self, face: Face, slab: &'a Volume) -> Self {
        *self.slot_mut(face) = Some(slab);
        self
    }

    #[inline]
    pub fn get(&self, face: Face) -> Option<&'a Volume> {
        match face {
            Face::PosX => self.pos_x,
            Face::NegX => self.neg_x,
            Face::PosY => self.pos_y,
            Face::NegY => self.neg_y,
            Face::PosZ => self.pos_z,
            Face::NegZ => self.neg_z,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        Face::ALL.iter().all(|&f| self.get(f).is_none())
    }

    /// Iterates the supplied slabs with their face.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &'a Volume)> + '_ {
        Face::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }

    fn slot_mut(&mut self, face: Face) -> &mut Option<&'a Volume> {
        match face {
            Face::PosX => &mut self.pos_x,
            Face::NegX => &mut self.neg_x,
            Face::PosY => &mut self.pos_y,
            Face::NegY => &mut self.neg_y,
            Face::PosZ => &mut self.pos_z,
            Face::NegZ => &mut self.neg_z,
        }
    }
}
