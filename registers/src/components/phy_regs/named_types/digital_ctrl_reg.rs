//! Register: DIGITAL_CTRL

use crate::reg::{Block, Field};

/// DIGITAL_CTRL
///
/// Digital line control
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DigitalCtrlReg(u32);

unsafe impl Send for DigitalCtrlReg {}
unsafe impl Sync for DigitalCtrlReg {}

impl core::default::Default for DigitalCtrlReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DigitalCtrlReg {
    const BLOCK: Block = Block::Phy;
    const ADDRESS: u16 = 0x4;
    const NAME: &'static str = "HDMI_TXPHY_DIGITAL_CTRL";
    const FIELDS: &'static [Field] = &[Self::LINE_EN];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl DigitalCtrlReg {
    pub const LINE_EN_OFFSET: usize = 28;
    pub const LINE_EN_WIDTH: usize = 4;
    pub const LINE_EN_MASK: u32 = 0xF;
    pub const LINE_EN: Field = Field::new("LINE_EN", Block::Phy, 0x4, 31, 28);

    /// TMDS clock and TX-valid line enables
    #[inline(always)]
    #[must_use]
    pub fn line_en(&self) -> u8 {
        let val = (self.0 >> Self::LINE_EN_OFFSET) & Self::LINE_EN_MASK;
        val as u8
    }

    /// TMDS clock and TX-valid line enables
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 4 bits.
    #[inline(always)]
    pub fn set_line_en(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::LINE_EN.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for DigitalCtrlReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DigitalCtrlReg")
            .field("line_en", &self.line_en())
            .finish()
    }
}
