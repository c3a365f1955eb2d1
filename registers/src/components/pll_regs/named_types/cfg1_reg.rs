//! Register: CFG1

use crate::reg::{Block, Field};

/// CFG1
///
/// PLL configuration 1
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Cfg1Reg(u32);

unsafe impl Send for Cfg1Reg {}
unsafe impl Sync for Cfg1Reg {}

impl core::default::Default for Cfg1Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for Cfg1Reg {
    const BLOCK: Block = Block::Pll;
    const ADDRESS: u16 = 0xC;
    const NAME: &'static str = "PLLCTRL_CFG1";
    const FIELDS: &'static [Field] = &[Self::REGN, Self::REGM];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl Cfg1Reg {
    pub const REGN_OFFSET: usize = 1;
    pub const REGN_WIDTH: usize = 8;
    pub const REGN_MASK: u32 = 0xFF;
    pub const REGN: Field = Field::new("REGN", Block::Pll, 0xC, 8, 1);

    /// Reference divider N
    #[inline(always)]
    #[must_use]
    pub fn regn(&self) -> u8 {
        let val = (self.0 >> Self::REGN_OFFSET) & Self::REGN_MASK;
        val as u8
    }

    /// Reference divider N
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_regn(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::REGN.insert(self.0, val as u32)?;
        Ok(())
    }

    pub const REGM_OFFSET: usize = 9;
    pub const REGM_WIDTH: usize = 12;
    pub const REGM_MASK: u32 = 0xFFF;
    pub const REGM: Field = Field::new("REGM", Block::Pll, 0xC, 20, 9);

    /// Multiplier M
    #[inline(always)]
    #[must_use]
    pub fn regm(&self) -> u16 {
        let val = (self.0 >> Self::REGM_OFFSET) & Self::REGM_MASK;
        val as u16
    }

    /// Multiplier M
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 12 bits.
    #[inline(always)]
    pub fn set_regm(&mut self, val: u16) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::REGM.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for Cfg1Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cfg1Reg")
            .field("regn", &self.regn())
            .field("regm", &self.regm())
            .finish()
    }
}
