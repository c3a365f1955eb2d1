//! Register: AVI_VERS

use crate::reg::{Block, Field};

/// AVI_VERS
///
/// AVI info frame version
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct AviVersReg(u32);

unsafe impl Send for AviVersReg {}
unsafe impl Sync for AviVersReg {}

impl core::default::Default for AviVersReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for AviVersReg {
    const BLOCK: Block = Block::CoreAv;
    const ADDRESS: u16 = 0x104;
    const NAME: &'static str = "HDMI_CORE_AV_AVI_VERS";
    const FIELDS: &'static [Field] = &[Self::VERSION];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl AviVersReg {
    pub const VERSION_OFFSET: usize = 0;
    pub const VERSION_WIDTH: usize = 8;
    pub const VERSION_MASK: u32 = 0xFF;
    pub const VERSION: Field = Field::new("VERSION", Block::CoreAv, 0x104, 7, 0);

    /// Version
    #[inline(always)]
    #[must_use]
    pub fn version(&self) -> u8 {
        let val = (self.0 >> Self::VERSION_OFFSET) & Self::VERSION_MASK;
        val as u8
    }

    /// Version
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_version(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::VERSION.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for AviVersReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AviVersReg")
            .field("version", &self.version())
            .finish()
    }
}
