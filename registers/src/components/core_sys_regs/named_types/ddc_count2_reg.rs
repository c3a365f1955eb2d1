//! Register: DDC_COUNT2

use crate::reg::{Block, Field};

/// DDC_COUNT2
///
/// DDC byte count, high
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DdcCount2Reg(u32);

unsafe impl Send for DdcCount2Reg {}
unsafe impl Sync for DdcCount2Reg {}

impl core::default::Default for DdcCount2Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DdcCount2Reg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x3C4;
    const NAME: &'static str = "HDMI_CORE_DDC_COUNT2";
    const FIELDS: &'static [Field] = &[Self::COUNT];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl DdcCount2Reg {
    pub const COUNT_OFFSET: usize = 0;
    pub const COUNT_WIDTH: usize = 2;
    pub const COUNT_MASK: u32 = 0x3;
    pub const COUNT: Field = Field::new("COUNT", Block::CoreSys, 0x3C4, 1, 0);

    /// Transfer byte count bits 9:8
    #[inline(always)]
    #[must_use]
    pub fn count(&self) -> u8 {
        let val = (self.0 >> Self::COUNT_OFFSET) & Self::COUNT_MASK;
        val as u8
    }

    /// Transfer byte count bits 9:8
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 2 bits.
    #[inline(always)]
    pub fn set_count(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::COUNT.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for DdcCount2Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DdcCount2Reg")
            .field("count", &self.count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = DdcCount2Reg::default();
        assert_eq!(reg.count(), 0);
    }

    #[test]
    fn test_count_range() {
        let mut reg = DdcCount2Reg::default();
        reg.set_count(0x3).unwrap();
        assert_eq!(reg.count(), 0x3);
        assert_eq!(crate::reg::Register::to_raw(reg), 0x3);
        assert!(reg.set_count(0x4).is_err());
        assert_eq!(reg.count(), 0x3);
    }
}
