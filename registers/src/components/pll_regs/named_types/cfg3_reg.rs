//! Register: CFG3

use crate::reg::{Block, Field};

/// CFG3
///
/// PLL configuration 3
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Cfg3Reg(u32);

unsafe impl Send for Cfg3Reg {}
unsafe impl Sync for Cfg3Reg {}

impl core::default::Default for Cfg3Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for Cfg3Reg {
    const BLOCK: Block = Block::Pll;
    const ADDRESS: u16 = 0x14;
    const NAME: &'static str = "PLLCTRL_CFG3";
    const FIELDS: &'static [Field] = &[Self::SD];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl Cfg3Reg {
    pub const SD_OFFSET: usize = 10;
    pub const SD_WIDTH: usize = 8;
    pub const SD_MASK: u32 = 0xFF;
    pub const SD: Field = Field::new("SD", Block::Pll, 0x14, 17, 10);

    /// Sigma-delta divider
    #[inline(always)]
    #[must_use]
    pub fn sd(&self) -> u8 {
        let val = (self.0 >> Self::SD_OFFSET) & Self::SD_MASK;
        val as u8
    }

    /// Sigma-delta divider
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_sd(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::SD.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for Cfg3Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cfg3Reg")
            .field("sd", &self.sd())
            .finish()
    }
}
