//! Register: DDC_COUNT1

use crate::reg::{Block, Field};

/// DDC_COUNT1
///
/// DDC byte count, low
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DdcCount1Reg(u32);

unsafe impl Send for DdcCount1Reg {}
unsafe impl Sync for DdcCount1Reg {}

impl core::default::Default for DdcCount1Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DdcCount1Reg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x3C0;
    const NAME: &'static str = "HDMI_CORE_DDC_COUNT1";
    const FIELDS: &'static [Field] = &[Self::COUNT];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl DdcCount1Reg {
    pub const COUNT_OFFSET: usize = 0;
    pub const COUNT_WIDTH: usize = 8;
    pub const COUNT_MASK: u32 = 0xFF;
    pub const COUNT: Field = Field::new("COUNT", Block::CoreSys, 0x3C0, 7, 0);

    /// Transfer byte count bits 7:0
    #[inline(always)]
    #[must_use]
    pub fn count(&self) -> u8 {
        let val = (self.0 >> Self::COUNT_OFFSET) & Self::COUNT_MASK;
        val as u8
    }

    /// Transfer byte count bits 7:0
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_count(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::COUNT.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for DdcCount1Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DdcCount1Reg")
            .field("count", &self.count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = DdcCount1Reg::default();
        assert_eq!(reg.count(), 0);
    }

    #[test]
    fn test_count_range() {
        let mut reg = DdcCount1Reg::default();
        reg.set_count(0xFF).unwrap();
        assert_eq!(reg.count(), 0xFF);
        assert_eq!(crate::reg::Register::to_raw(reg), 0xFF);
    }
}
