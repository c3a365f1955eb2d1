//! Register: AVI_LEN

use crate::reg::{Block, Field};

/// AVI_LEN
///
/// AVI info frame payload length
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct AviLenReg(u32);

unsafe impl Send for AviLenReg {}
unsafe impl Sync for AviLenReg {}

impl core::default::Default for AviLenReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for AviLenReg {
    const BLOCK: Block = Block::CoreAv;
    const ADDRESS: u16 = 0x108;
    const NAME: &'static str = "HDMI_CORE_AV_AVI_LEN";
    const FIELDS: &'static [Field] = &[Self::LENGTH];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl AviLenReg {
    pub const LENGTH_OFFSET: usize = 0;
    pub const LENGTH_WIDTH: usize = 8;
    pub const LENGTH_MASK: u32 = 0xFF;
    pub const LENGTH: Field = Field::new("LENGTH", Block::CoreAv, 0x108, 7, 0);

    /// Payload length in bytes
    #[inline(always)]
    #[must_use]
    pub fn length(&self) -> u8 {
        let val = (self.0 >> Self::LENGTH_OFFSET) & Self::LENGTH_MASK;
        val as u8
    }

    /// Payload length in bytes
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_length(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::LENGTH.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for AviLenReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AviLenReg")
            .field("length", &self.length())
            .finish()
    }
}
