//! Register: PLL_STATUS

use crate::reg::{Block, Field};

/// PLL_STATUS
///
/// PLL status
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PllStatusReg(u32);

unsafe impl Send for PllStatusReg {}
unsafe impl Sync for PllStatusReg {}

impl core::default::Default for PllStatusReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for PllStatusReg {
    const BLOCK: Block = Block::Pll;
    const ADDRESS: u16 = 0x4;
    const NAME: &'static str = "PLLCTRL_PLL_STATUS";
    const FIELDS: &'static [Field] = &[Self::RESET_DONE, Self::LOCK];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl PllStatusReg {
    pub const RESET_DONE_OFFSET: usize = 0;
    pub const RESET_DONE_WIDTH: usize = 1;
    pub const RESET_DONE_MASK: u32 = 0x1;
    pub const RESET_DONE: Field = Field::new("RESET_DONE", Block::Pll, 0x4, 0, 0);

    /// PLL reset sequence complete
    #[inline(always)]
    #[must_use]
    pub fn reset_done(&self) -> bool {
        let val = (self.0 >> Self::RESET_DONE_OFFSET) & Self::RESET_DONE_MASK;
        val != 0
    }

    /// PLL reset sequence complete
    #[inline(always)]
    pub fn set_reset_done(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::RESET_DONE_MASK << Self::RESET_DONE_OFFSET))
            | ((val & Self::RESET_DONE_MASK) << Self::RESET_DONE_OFFSET);
    }

    pub const LOCK_OFFSET: usize = 1;
    pub const LOCK_WIDTH: usize = 1;
    pub const LOCK_MASK: u32 = 0x1;
    pub const LOCK: Field = Field::new("LOCK", Block::Pll, 0x4, 1, 1);

    /// PLL locked
    #[inline(always)]
    #[must_use]
    pub fn lock(&self) -> bool {
        let val = (self.0 >> Self::LOCK_OFFSET) & Self::LOCK_MASK;
        val != 0
    }

    /// PLL locked
    #[inline(always)]
    pub fn set_lock(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::LOCK_MASK << Self::LOCK_OFFSET))
            | ((val & Self::LOCK_MASK) << Self::LOCK_OFFSET);
    }
}

impl core::fmt::Debug for PllStatusReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PllStatusReg")
            .field("reset_done", &self.reset_done())
            .field("lock", &self.lock())
            .finish()
    }
}
