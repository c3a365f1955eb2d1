//! Register: CFG2

// Instances of named component types
pub use crate::components::dco_freqsel_e as freqsel;

use crate::reg::{Block, Field};

/// CFG2
///
/// PLL configuration 2
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Cfg2Reg(u32);

unsafe impl Send for Cfg2Reg {}
unsafe impl Sync for Cfg2Reg {}

impl core::default::Default for Cfg2Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for Cfg2Reg {
    const BLOCK: Block = Block::Pll;
    const ADDRESS: u16 = 0x10;
    const NAME: &'static str = "PLLCTRL_CFG2";
    const FIELDS: &'static [Field] = &[Self::FREQSEL, Self::HIGHFREQ, Self::REFEN, Self::CLKINEN];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl Cfg2Reg {
    pub const FREQSEL_OFFSET: usize = 1;
    pub const FREQSEL_WIDTH: usize = 3;
    pub const FREQSEL_MASK: u32 = 0x7;
    pub const FREQSEL: Field = Field::new("FREQSEL", Block::Pll, 0x10, 3, 1);

    /// DCO frequency range
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn freqsel(&self) -> Result<freqsel::DcoFreqselE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::FREQSEL_OFFSET) & Self::FREQSEL_MASK;
        freqsel::DcoFreqselE::from_bits(val as u8)
    }

    /// DCO frequency range
    #[inline(always)]
    pub fn set_freqsel(&mut self, val: freqsel::DcoFreqselE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::FREQSEL_MASK << Self::FREQSEL_OFFSET))
            | ((val & Self::FREQSEL_MASK) << Self::FREQSEL_OFFSET);
    }

    pub const HIGHFREQ_OFFSET: usize = 12;
    pub const HIGHFREQ_WIDTH: usize = 1;
    pub const HIGHFREQ_MASK: u32 = 0x1;
    pub const HIGHFREQ: Field = Field::new("HIGHFREQ", Block::Pll, 0x10, 12, 12);

    /// Divide the high-frequency output by 2
    #[inline(always)]
    #[must_use]
    pub fn highfreq(&self) -> bool {
        let val = (self.0 >> Self::HIGHFREQ_OFFSET) & Self::HIGHFREQ_MASK;
        val != 0
    }

    /// Divide the high-frequency output by 2
    #[inline(always)]
    pub fn set_highfreq(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::HIGHFREQ_MASK << Self::HIGHFREQ_OFFSET))
            | ((val & Self::HIGHFREQ_MASK) << Self::HIGHFREQ_OFFSET);
    }

    pub const REFEN_OFFSET: usize = 13;
    pub const REFEN_WIDTH: usize = 1;
    pub const REFEN_MASK: u32 = 0x1;
    pub const REFEN: Field = Field::new("REFEN", Block::Pll, 0x10, 13, 13);

    /// Reference clock enable
    #[inline(always)]
    #[must_use]
    pub fn refen(&self) -> bool {
        let val = (self.0 >> Self::REFEN_OFFSET) & Self::REFEN_MASK;
        val != 0
    }

    /// Reference clock enable
    #[inline(always)]
    pub fn set_refen(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::REFEN_MASK << Self::REFEN_OFFSET))
            | ((val & Self::REFEN_MASK) << Self::REFEN_OFFSET);
    }

    pub const CLKINEN_OFFSET: usize = 14;
    pub const CLKINEN_WIDTH: usize = 1;
    pub const CLKINEN_MASK: u32 = 0x1;
    pub const CLKINEN: Field = Field::new("CLKINEN", Block::Pll, 0x10, 14, 14);

    /// PHY clock input enable; held low while locking
    #[inline(always)]
    #[must_use]
    pub fn clkinen(&self) -> bool {
        let val = (self.0 >> Self::CLKINEN_OFFSET) & Self::CLKINEN_MASK;
        val != 0
    }

    /// PHY clock input enable; held low while locking
    #[inline(always)]
    pub fn set_clkinen(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::CLKINEN_MASK << Self::CLKINEN_OFFSET))
            | ((val & Self::CLKINEN_MASK) << Self::CLKINEN_OFFSET);
    }
}

impl core::fmt::Debug for Cfg2Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cfg2Reg")
            .field("freqsel", &self.freqsel())
            .field("highfreq", &self.highfreq())
            .field("refen", &self.refen())
            .field("clkinen", &self.clkinen())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = Cfg2Reg::default();
        assert!(reg.freqsel().is_err());
        assert!(!reg.highfreq());
        assert!(!reg.refen());
        assert!(!reg.clkinen());
    }
}
