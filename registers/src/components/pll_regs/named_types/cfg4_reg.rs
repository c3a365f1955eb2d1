//! Register: CFG4

use crate::reg::{Block, Field};

/// CFG4
///
/// PLL configuration 4
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Cfg4Reg(u32);

unsafe impl Send for Cfg4Reg {}
unsafe impl Sync for Cfg4Reg {}

impl core::default::Default for Cfg4Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for Cfg4Reg {
    const BLOCK: Block = Block::Pll;
    const ADDRESS: u16 = 0x20;
    const NAME: &'static str = "PLLCTRL_CFG4";
    const FIELDS: &'static [Field] = &[Self::REGMF, Self::REGM2];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl Cfg4Reg {
    pub const REGMF_OFFSET: usize = 0;
    pub const REGMF_WIDTH: usize = 18;
    pub const REGMF_MASK: u32 = 0x3_FFFF;
    pub const REGMF: Field = Field::new("REGMF", Block::Pll, 0x20, 17, 0);

    /// Fractional multiplier
    #[inline(always)]
    #[must_use]
    pub fn regmf(&self) -> u32 {
        let val = (self.0 >> Self::REGMF_OFFSET) & Self::REGMF_MASK;
        val as u32
    }

    /// Fractional multiplier
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 18 bits.
    #[inline(always)]
    pub fn set_regmf(&mut self, val: u32) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::REGMF.insert(self.0, val as u32)?;
        Ok(())
    }

    pub const REGM2_OFFSET: usize = 18;
    pub const REGM2_WIDTH: usize = 7;
    pub const REGM2_MASK: u32 = 0x7F;
    pub const REGM2: Field = Field::new("REGM2", Block::Pll, 0x20, 24, 18);

    /// Post divider M2
    #[inline(always)]
    #[must_use]
    pub fn regm2(&self) -> u8 {
        let val = (self.0 >> Self::REGM2_OFFSET) & Self::REGM2_MASK;
        val as u8
    }

    /// Post divider M2
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 7 bits.
    #[inline(always)]
    pub fn set_regm2(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::REGM2.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for Cfg4Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cfg4Reg")
            .field("regmf", &self.regmf())
            .field("regm2", &self.regm2())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = Cfg4Reg::default();
        assert_eq!(reg.regmf(), 0);
        assert_eq!(reg.regm2(), 0);
    }

    #[test]
    fn test_regmf_range() {
        let mut reg = Cfg4Reg::default();
        reg.set_regmf(0x3_FFFF).unwrap();
        assert_eq!(reg.regmf(), 0x3_FFFF);
        assert_eq!(crate::reg::Register::to_raw(reg), 0x3_FFFF);
        assert!(reg.set_regmf(0x4_0000).is_err());
        assert_eq!(reg.regmf(), 0x3_FFFF);
    }
}
