//! Register: DDC_OFFSET

use crate::reg::{Block, Field};

/// DDC_OFFSET
///
/// DDC word offset
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DdcOffsetReg(u32);

unsafe impl Send for DdcOffsetReg {}
unsafe impl Sync for DdcOffsetReg {}

impl core::default::Default for DdcOffsetReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DdcOffsetReg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x3BC;
    const NAME: &'static str = "HDMI_CORE_DDC_OFFSET";
    const FIELDS: &'static [Field] = &[Self::OFFSET];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl DdcOffsetReg {
    pub const OFFSET_OFFSET: usize = 0;
    pub const OFFSET_WIDTH: usize = 8;
    pub const OFFSET_MASK: u32 = 0xFF;
    pub const OFFSET: Field = Field::new("OFFSET", Block::CoreSys, 0x3BC, 7, 0);

    /// Byte offset within the segment
    #[inline(always)]
    #[must_use]
    pub fn offset(&self) -> u8 {
        let val = (self.0 >> Self::OFFSET_OFFSET) & Self::OFFSET_MASK;
        val as u8
    }

    /// Byte offset within the segment
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_offset(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::OFFSET.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for DdcOffsetReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DdcOffsetReg")
            .field("offset", &self.offset())
            .finish()
    }
}
