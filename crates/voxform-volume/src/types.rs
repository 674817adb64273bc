/// Block identifier stored per voxel. `0` is air; `n > 0` maps to palette entry `n - 1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub u32);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);

    #[inline]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_solid(self) -> bool {
        self.0 != 0
    }

    /// Palette slot for this identifier, `None` for air.
    #[inline]
    pub const fn palette_index(self) -> Option<usize> {
        if self.0 == 0 { None } else { Some(self.0 as usize - 1) }
    }
}

impl From<u32> for BlockId {
    #[inline]
    fn from(v: u32) -> Self {
        BlockId(v)
    }
}
