//! Register: PLL_GO

use crate::reg::{Block, Field};

/// PLL_GO
///
/// PLL programming strobe
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PllGoReg(u32);

unsafe impl Send for PllGoReg {}
unsafe impl Sync for PllGoReg {}

impl core::default::Default for PllGoReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for PllGoReg {
    const BLOCK: Block = Block::Pll;
    const ADDRESS: u16 = 0x8;
    const NAME: &'static str = "PLLCTRL_PLL_GO";
    const FIELDS: &'static [Field] = &[Self::GO];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl PllGoReg {
    pub const GO_OFFSET: usize = 0;
    pub const GO_WIDTH: usize = 1;
    pub const GO_MASK: u32 = 0x1;
    pub const GO: Field = Field::new("GO", Block::Pll, 0x8, 0, 0);

    /// Apply the programmed configuration
    #[inline(always)]
    #[must_use]
    pub fn go(&self) -> bool {
        let val = (self.0 >> Self::GO_OFFSET) & Self::GO_MASK;
        val != 0
    }

    /// Apply the programmed configuration
    #[inline(always)]
    pub fn set_go(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::GO_MASK << Self::GO_OFFSET))
            | ((val & Self::GO_MASK) << Self::GO_OFFSET);
    }
}

impl core::fmt::Debug for PllGoReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PllGoReg")
            .field("go", &self.go())
            .finish()
    }
}
