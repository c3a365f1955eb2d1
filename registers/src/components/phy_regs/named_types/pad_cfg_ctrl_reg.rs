//! Register: PAD_CFG_CTRL

use crate::reg::{Block, Field};

/// PAD_CFG_CTRL
///
/// Pad configuration
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PadCfgCtrlReg(u32);

unsafe impl Send for PadCfgCtrlReg {}
unsafe impl Sync for PadCfgCtrlReg {}

impl core::default::Default for PadCfgCtrlReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for PadCfgCtrlReg {
    const BLOCK: Block = Block::Phy;
    const ADDRESS: u16 = 0xC;
    const NAME: &'static str = "HDMI_TXPHY_PAD_CFG_CTRL";
    const FIELDS: &'static [Field] = &[Self::POLARITY];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl PadCfgCtrlReg {
    pub const POLARITY_OFFSET: usize = 27;
    pub const POLARITY_WIDTH: usize = 1;
    pub const POLARITY_MASK: u32 = 0x1;
    pub const POLARITY: Field = Field::new("POLARITY", Block::Phy, 0xC, 27, 27);

    /// Invert TMDS line polarity
    #[inline(always)]
    #[must_use]
    pub fn polarity(&self) -> bool {
        let val = (self.0 >> Self::POLARITY_OFFSET) & Self::POLARITY_MASK;
        val != 0
    }

    /// Invert TMDS line polarity
    #[inline(always)]
    pub fn set_polarity(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::POLARITY_MASK << Self::POLARITY_OFFSET))
            | ((val & Self::POLARITY_MASK) << Self::POLARITY_OFFSET);
    }
}

impl core::fmt::Debug for PadCfgCtrlReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PadCfgCtrlReg")
            .field("polarity", &self.polarity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = PadCfgCtrlReg::default();
        assert!(!reg.polarity());
    }
}
