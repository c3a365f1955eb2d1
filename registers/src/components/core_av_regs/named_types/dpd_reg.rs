//! Register: DPD

use crate::reg::{Block, Field};

/// DPD
///
/// Power-down controls for the internal clock domains
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DpdReg(u32);

unsafe impl Send for DpdReg {}
unsafe impl Sync for DpdReg {}

impl core::default::Default for DpdReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DpdReg {
    const BLOCK: Block = Block::CoreAv;
    const ADDRESS: u16 = 0xF4;
    const NAME: &'static str = "HDMI_CORE_AV_DPD";
    const FIELDS: &'static [Field] = &[Self::CLK_EN];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl DpdReg {
    pub const CLK_EN_OFFSET: usize = 0;
    pub const CLK_EN_WIDTH: usize = 3;
    pub const CLK_EN_MASK: u32 = 0x7;
    pub const CLK_EN: Field = Field::new("CLK_EN", Block::CoreAv, 0xF4, 2, 0);

    /// Clock domain enables (DDC needs all three)
    #[inline(always)]
    #[must_use]
    pub fn clk_en(&self) -> u8 {
        let val = (self.0 >> Self::CLK_EN_OFFSET) & Self::CLK_EN_MASK;
        val as u8
    }

    /// Clock domain enables (DDC needs all three)
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 3 bits.
    #[inline(always)]
    pub fn set_clk_en(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::CLK_EN.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for DpdReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DpdReg")
            .field("clk_en", &self.clk_en())
            .finish()
    }
}
