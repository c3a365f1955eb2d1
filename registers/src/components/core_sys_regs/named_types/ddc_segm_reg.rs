//! Register: DDC_SEGM

use crate::reg::{Block, Field};

/// DDC_SEGM
///
/// DDC segment pointer
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DdcSegmReg(u32);

unsafe impl Send for DdcSegmReg {}
unsafe impl Sync for DdcSegmReg {}

impl core::default::Default for DdcSegmReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DdcSegmReg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x3B8;
    const NAME: &'static str = "HDMI_CORE_DDC_SEGM";
    const FIELDS: &'static [Field] = &[Self::SEGMENT];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl DdcSegmReg {
    pub const SEGMENT_OFFSET: usize = 0;
    pub const SEGMENT_WIDTH: usize = 8;
    pub const SEGMENT_MASK: u32 = 0xFF;
    pub const SEGMENT: Field = Field::new("SEGMENT", Block::CoreSys, 0x3B8, 7, 0);

    /// E-DDC segment
    #[inline(always)]
    #[must_use]
    pub fn segment(&self) -> u8 {
        let val = (self.0 >> Self::SEGMENT_OFFSET) & Self::SEGMENT_MASK;
        val as u8
    }

    /// E-DDC segment
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_segment(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::SEGMENT.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for DdcSegmReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DdcSegmReg")
            .field("segment", &self.segment())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = DdcSegmReg::default();
        assert_eq!(reg.segment(), 0);
    }

    #[test]
    fn test_segment_range() {
        let mut reg = DdcSegmReg::default();
        reg.set_segment(0xFF).unwrap();
        assert_eq!(reg.segment(), 0xFF);
        assert_eq!(crate::reg::Register::to_raw(reg), 0xFF);
    }
}
