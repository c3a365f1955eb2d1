//! Register: PLL_CONTROL

use crate::reg::{Block, Field};

/// PLL_CONTROL
///
/// PLL control
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PllControlReg(u32);

unsafe impl Send for PllControlReg {}
unsafe impl Sync for PllControlReg {}

impl core::default::Default for PllControlReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for PllControlReg {
    const BLOCK: Block = Block::Pll;
    const ADDRESS: u16 = 0x0;
    const NAME: &'static str = "PLLCTRL_PLL_CONTROL";
    const FIELDS: &'static [Field] = &[Self::AUTOMODE, Self::SYSRESET];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl PllControlReg {
    pub const AUTOMODE_OFFSET: usize = 0;
    pub const AUTOMODE_WIDTH: usize = 1;
    pub const AUTOMODE_MASK: u32 = 0x1;
    pub const AUTOMODE: Field = Field::new("AUTOMODE", Block::Pll, 0x0, 0, 0);

    /// Automatic (set) or manual (clear) programming mode
    #[inline(always)]
    #[must_use]
    pub fn automode(&self) -> bool {
        let val = (self.0 >> Self::AUTOMODE_OFFSET) & Self::AUTOMODE_MASK;
        val != 0
    }

    /// Automatic (set) or manual (clear) programming mode
    #[inline(always)]
    pub fn set_automode(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::AUTOMODE_MASK << Self::AUTOMODE_OFFSET))
            | ((val & Self::AUTOMODE_MASK) << Self::AUTOMODE_OFFSET);
    }

    pub const SYSRESET_OFFSET: usize = 3;
    pub const SYSRESET_WIDTH: usize = 1;
    pub const SYSRESET_MASK: u32 = 0x1;
    pub const SYSRESET: Field = Field::new("SYSRESET", Block::Pll, 0x0, 3, 3);

    /// PLL reset; clear to hand reset control to the power FSM
    #[inline(always)]
    #[must_use]
    pub fn sysreset(&self) -> bool {
        let val = (self.0 >> Self::SYSRESET_OFFSET) & Self::SYSRESET_MASK;
        val != 0
    }

    /// PLL reset; clear to hand reset control to the power FSM
    #[inline(always)]
    pub fn set_sysreset(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SYSRESET_MASK << Self::SYSRESET_OFFSET))
            | ((val & Self::SYSRESET_MASK) << Self::SYSRESET_OFFSET);
    }
}

impl core::fmt::Debug for PllControlReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PllControlReg")
            .field("automode", &self.automode())
            .field("sysreset", &self.sysreset())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = PllControlReg::default();
        assert!(!reg.automode());
        assert!(!reg.sysreset());
    }
}
