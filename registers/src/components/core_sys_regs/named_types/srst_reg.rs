//! Register: SRST

use crate::reg::{Block, Field};

/// SRST
///
/// Software reset
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct SrstReg(u32);

unsafe impl Send for SrstReg {}
unsafe impl Sync for SrstReg {}

impl core::default::Default for SrstReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for SrstReg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x14;
    const NAME: &'static str = "HDMI_CORE_SYS_SRST";
    const FIELDS: &'static [Field] = &[Self::SWRST];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl SrstReg {
    pub const SWRST_OFFSET: usize = 0;
    pub const SWRST_WIDTH: usize = 1;
    pub const SWRST_MASK: u32 = 0x1;
    pub const SWRST: Field = Field::new("SWRST", Block::CoreSys, 0x14, 0, 0);

    /// Core software reset asserted
    #[inline(always)]
    #[must_use]
    pub fn swrst(&self) -> bool {
        let val = (self.0 >> Self::SWRST_OFFSET) & Self::SWRST_MASK;
        val != 0
    }

    /// Core software reset asserted
    #[inline(always)]
    pub fn set_swrst(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SWRST_MASK << Self::SWRST_OFFSET))
            | ((val & Self::SWRST_MASK) << Self::SWRST_OFFSET);
    }
}

impl core::fmt::Debug for SrstReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SrstReg")
            .field("swrst", &self.swrst())
            .finish()
    }
}
