use rand::Rng;

use crate::error::VolumeError;
use crate::types::BlockId;

/// Upper bound on `width * height * depth`.
pub const MAX_VOXELS: usize = 1 << 30;

/// Dense `width × height × depth` grid of block identifiers.
///
/// Storage order is `x * height * depth + y * depth + z`. The volume owns its
/// blocks; meshers only ever borrow it.
#[derive(Clone, Debug, PartialEq)]
pub struct Volume {
    sx: usize,
    sy: usize,
    sz: usize,
    voxel_size: f32,
    blocks: Vec<BlockId>,
}

impl Volume {
    /// Creates an all-air volume.
    pub fn new(sx: usize, sy: usize, sz: usize, voxel_size: f32) -> Result<Self, VolumeError> {
        let len = check_extent(sx, sy, sz)?;
        Ok(Volume {
            sx,
            sy,
            sz,
            voxel_size,
            blocks: vec![BlockId::AIR; len],
        })
    }

    /// Wraps an existing block array laid out in storage order.
    pub fn from_blocks(
        sx: usize,
        sy: usize,
        sz: usize,
        voxel_size: f32,
        blocks: Vec<BlockId>,
    ) -> Result<Self, VolumeError> {
        let expected = check_extent(sx, sy, sz)?;
        if blocks.len() != expected {
            return Err(VolumeError::BlockCountMismatch {
                expected,
                found: blocks.len(),
            });
        }
        Ok(Volume {
            sx,
            sy,
            sz,
            voxel_size,
            blocks,
        })
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.sx
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.sy
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.sz
    }

    /// Extent along axis `i` (0 = X, 1 = Y, 2 = Z).
    #[inline]
    pub fn extent(&self, axis: usize) -> usize {
        match axis {
            0 => self.sx,
            1 => self.sy,
            _ => self.sz,
        }
    }

    #[inline]
    pub fn voxel_size(&self) -> f32 {
        self.voxel_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.sy + y) * self.sz + z
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.sx && y < self.sy && z < self.sz
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Result<BlockId, VolumeError> {
        if !self.contains(x, y, z) {
            return Err(self.out_of_bounds(x, y, z));
        }
        Ok(self.blocks[self.idx(x, y, z)])
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, id: BlockId) -> Result<(), VolumeError> {
        if !self.contains(x, y, z) {
            return Err(self.out_of_bounds(x, y, z));
        }
        let i = self.idx(x, y, z);
        self.blocks[i] = id;
        Ok(())
    }

    /// Unchecked-by-contract read for hot loops; panics on out-of-range input.
    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.blocks[self.idx(x, y, z)]
    }

    /// Bounds-checked read for signed coordinates. Returns `None` outside the volume.
    #[inline]
    pub fn get_signed(&self, x: i32, y: i32, z: i32) -> Option<BlockId> {
        if x < 0 || y < 0 || z < 0 {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if !self.contains(x, y, z) {
            return None;
        }
        Some(self.get_local(x, y, z))
    }

    #[inline]
    pub fn has_non_air(&self) -> bool {
        self.blocks.iter().any(|b| b.is_solid())
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        !self.has_non_air()
    }

    /// Largest identifier present, `BlockId::AIR` for an empty volume.
    pub fn max_block_id(&self) -> BlockId {
        self.blocks.iter().copied().max().unwrap_or(BlockId::AIR)
    }

    /// Applies new dimensions, discarding all content.
    pub fn reset(&mut self, sx: usize, sy: usize, sz: usize) -> Result<(), VolumeError> {
        let len = check_extent(sx, sy, sz)?;
        self.sx = sx;
        self.sy = sy;
        self.sz = sz;
        self.blocks.clear();
        self.blocks.resize(len, BlockId::AIR);
        log::debug!("volume reset to {}x{}x{}", sx, sy, sz);
        Ok(())
    }

    pub fn fill(&mut self, id: BlockId) {
        self.blocks.fill(id);
    }

    /// Sets every voxel within `min(w,h,d)/2` of the volume midpoint to `id`.
    /// Distances are measured from integer voxel coordinates.
    pub fn fill_sphere(&mut self, id: BlockId) {
        let (w, h, d) = (self.sx as f32, self.sy as f32, self.sz as f32);
        let radius = w.min(h).min(d) / 2.0;
        let (cx, cy, cz) = (w / 2.0, h / 2.0, d / 2.0);
        let mut n = 0usize;
        for x in 0..self.sx {
            for y in 0..self.sy {
                for z in 0..self.sz {
                    let dx = x as f32 - cx;
                    let dy = y as f32 - cy;
                    let dz = z as f32 - cz;
                    if (dx * dx + dy * dy + dz * dz).sqrt() <= radius {
                        let i = self.idx(x, y, z);
                        self.blocks[i] = id;
                        n += 1;
                    }
                }
            }
        }
        log::debug!("fill_sphere: radius {:.2}, {} voxels set", radius, n);
    }

    /// Sets the whole `y == 0` layer to `id`.
    pub fn fill_base(&mut self, id: BlockId) {
        for x in 0..self.sx {
            for z in 0..self.sz {
                let i = self.idx(x, 0, z);
                self.blocks[i] = id;
            }
        }
    }

    /// Sets every voxel to an identifier drawn uniformly from
    /// `0..=palette_len`, so air and every palette entry can appear.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, palette_len: usize, rng: &mut R) {
        let max = u32::try_from(palette_len).unwrap_or(u32::MAX);
        for b in &mut self.blocks {
            *b = BlockId(rng.gen_range(0..=max));
        }
        log::debug!("fill_random: {} voxels over ids 0..={}", self.blocks.len(), max);
    }

    fn out_of_bounds(&self, x: usize, y: usize, z: usize) -> VolumeError {
        VolumeError::OutOfBounds {
            x,
            y,
            z,
            dims: self.dims(),
        }
    }
}

/// Returns the voxel count for the given extents.
fn check_extent(sx: usize, sy: usize, sz: usize) -> Result<usize, VolumeError> {
    if sx == 0 || sy == 0 || sz == 0 {
        return Err(VolumeError::EmptyExtent((sx, sy, sz)));
    }
    sx.checked_mul(sy)
        .and_then(|n| n.checked_mul(sz))
        .filter(|&n| n <= MAX_VOXELS)
        .ok_or(VolumeError::TooLarge((sx, sy, sz)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_documented_layout() {
        let v = Volume::new(3, 4, 5, 1.0).unwrap();
        assert_eq!(v.idx(0, 0, 1), 1);
        assert_eq!(v.idx(0, 1, 0), 5);
        assert_eq!(v.idx(1, 0, 0), 20);
        assert_eq!(v.idx(2, 3, 4), 59);
    }

    #[test]
    fn signed_reads_reject_negative_and_overflowing_coords() {
        let mut v = Volume::new(2, 2, 2, 1.0).unwrap();
        v.set(1, 1, 1, BlockId(3)).unwrap();
        assert_eq!(v.get_signed(1, 1, 1), Some(BlockId(3)));
        assert_eq!(v.get_signed(-1, 0, 0), None);
        assert_eq!(v.get_signed(0, 2, 0), None);
    }

    #[test]
    fn oversized_extents_are_rejected() {
        let huge = 1usize << 33;
        assert_eq!(
            Volume::new(huge, huge, 1, 1.0).unwrap_err(),
            VolumeError::TooLarge((huge, huge, 1))
        );
        assert!(matches!(
            Volume::new(1 << 10, 1 << 10, (1 << 10) + 1, 1.0),
            Err(VolumeError::TooLarge(_))
        ));
        assert!(matches!(
            Volume::from_blocks(huge, huge, huge, 1.0, Vec::new()),
            Err(VolumeError::TooLarge(_))
        ));

        let mut v = Volume::new(2, 2, 2, 1.0).unwrap();
        assert!(matches!(v.reset(usize::MAX, 2, 1), Err(VolumeError::TooLarge(_))));
        assert_eq!(v.dims(), (2, 2, 2));
    }
}
