//! Register: TMDS_CTRL

// Instances of named component types
pub use crate::components::tclk_sel_e as tclksel;

use crate::reg::{Block, Field};

/// TMDS_CTRL
///
/// TMDS control
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct TmdsCtrlReg(u32);

unsafe impl Send for TmdsCtrlReg {}
unsafe impl Sync for TmdsCtrlReg {}

impl core::default::Default for TmdsCtrlReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for TmdsCtrlReg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x208;
    const NAME: &'static str = "HDMI_CORE_SYS_TMDS_CTRL";
    const FIELDS: &'static [Field] = &[Self::TCLKSEL];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl TmdsCtrlReg {
    pub const TCLKSEL_OFFSET: usize = 5;
    pub const TCLKSEL_WIDTH: usize = 2;
    pub const TCLKSEL_MASK: u32 = 0x3;
    pub const TCLKSEL: Field = Field::new("TCLKSEL", Block::CoreSys, 0x208, 6, 5);

    /// TMDS clock multiplier
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn tclksel(&self) -> Result<tclksel::TclkSelE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::TCLKSEL_OFFSET) & Self::TCLKSEL_MASK;
        tclksel::TclkSelE::from_bits(val as u8)
    }

    /// TMDS clock multiplier
    #[inline(always)]
    pub fn set_tclksel(&mut self, val: tclksel::TclkSelE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::TCLKSEL_MASK << Self::TCLKSEL_OFFSET))
            | ((val & Self::TCLKSEL_MASK) << Self::TCLKSEL_OFFSET);
    }
}

impl core::fmt::Debug for TmdsCtrlReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TmdsCtrlReg")
            .field("tclksel", &self.tclksel())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = TmdsCtrlReg::default();
        assert_eq!(reg.tclksel(), Ok(tclksel::TclkSelE::Fpll05Idck));
    }
}
