//! Register: AVI_CHSUM

use crate::reg::{Block, Field};

/// AVI_CHSUM
///
/// AVI info frame checksum
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct AviChsumReg(u32);

unsafe impl Send for AviChsumReg {}
unsafe impl Sync for AviChsumReg {}

impl core::default::Default for AviChsumReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for AviChsumReg {
    const BLOCK: Block = Block::CoreAv;
    const ADDRESS: u16 = 0x10C;
    const NAME: &'static str = "HDMI_CORE_AV_AVI_CHSUM";
    const FIELDS: &'static [Field] = &[Self::CHECKSUM];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl AviChsumReg {
    pub const CHECKSUM_OFFSET: usize = 0;
    pub const CHECKSUM_WIDTH: usize = 8;
    pub const CHECKSUM_MASK: u32 = 0xFF;
    pub const CHECKSUM: Field = Field::new("CHECKSUM", Block::CoreAv, 0x10C, 7, 0);

    /// Two's complement checksum
    #[inline(always)]
    #[must_use]
    pub fn checksum(&self) -> u8 {
        let val = (self.0 >> Self::CHECKSUM_OFFSET) & Self::CHECKSUM_MASK;
        val as u8
    }

    /// Two's complement checksum
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_checksum(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::CHECKSUM.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for AviChsumReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AviChsumReg")
            .field("checksum", &self.checksum())
            .finish()
    }
}
