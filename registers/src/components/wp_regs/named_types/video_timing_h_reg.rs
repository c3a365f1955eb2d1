//! Register: VIDEO_TIMING_H

use crate::reg::{Block, Field};

/// VIDEO_TIMING_H
///
/// Horizontal blanking timing
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct VideoTimingHReg(u32);

unsafe impl Send for VideoTimingHReg {}
unsafe impl Sync for VideoTimingHReg {}

impl core::default::Default for VideoTimingHReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for VideoTimingHReg {
    const BLOCK: Block = Block::Wrapper;
    const ADDRESS: u16 = 0x68;
    const NAME: &'static str = "HDMI_WP_VIDEO_TIMING_H";
    const FIELDS: &'static [Field] = &[Self::HSW, Self::HFP, Self::HBP];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl VideoTimingHReg {
    pub const HSW_OFFSET: usize = 0;
    pub const HSW_WIDTH: usize = 8;
    pub const HSW_MASK: u32 = 0xFF;
    pub const HSW: Field = Field::new("HSW", Block::Wrapper, 0x68, 7, 0);

    /// Horizontal sync width
    #[inline(always)]
    #[must_use]
    pub fn hsw(&self) -> u8 {
        let val = (self.0 >> Self::HSW_OFFSET) & Self::HSW_MASK;
        val as u8
    }

    /// Horizontal sync width
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_hsw(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::HSW.insert(self.0, val as u32)?;
        Ok(())
    }

    pub const HFP_OFFSET: usize = 8;
    pub const HFP_WIDTH: usize = 12;
    pub const HFP_MASK: u32 = 0xFFF;
    pub const HFP: Field = Field::new("HFP", Block::Wrapper, 0x68, 19, 8);

    /// Horizontal front porch
    #[inline(always)]
    #[must_use]
    pub fn hfp(&self) -> u16 {
        let val = (self.0 >> Self::HFP_OFFSET) & Self::HFP_MASK;
        val as u16
    }

    /// Horizontal front porch
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 12 bits.
    #[inline(always)]
    pub fn set_hfp(&mut self, val: u16) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::HFP.insert(self.0, val as u32)?;
        Ok(())
    }

    pub const HBP_OFFSET: usize = 20;
    pub const HBP_WIDTH: usize = 12;
    pub const HBP_MASK: u32 = 0xFFF;
    pub const HBP: Field = Field::new("HBP", Block::Wrapper, 0x68, 31, 20);

    /// Horizontal back porch
    #[inline(always)]
    #[must_use]
    pub fn hbp(&self) -> u16 {
        let val = (self.0 >> Self::HBP_OFFSET) & Self::HBP_MASK;
        val as u16
    }

    /// Horizontal back porch
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 12 bits.
    #[inline(always)]
    pub fn set_hbp(&mut self, val: u16) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::HBP.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for VideoTimingHReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VideoTimingHReg")
            .field("hsw", &self.hsw())
            .field("hfp", &self.hfp())
            .field("hbp", &self.hbp())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = VideoTimingHReg::default();
        assert_eq!(reg.hsw(), 0);
        assert_eq!(reg.hfp(), 0);
        assert_eq!(reg.hbp(), 0);
    }

    #[test]
    fn test_hfp_range() {
        let mut reg = VideoTimingHReg::default();
        reg.set_hfp(0xFFF).unwrap();
        assert_eq!(reg.hfp(), 0xFFF);
        assert_eq!(crate::reg::Register::to_raw(reg), 0xF_FF00);
        assert!(reg.set_hfp(0x1000).is_err());
        assert_eq!(reg.hfp(), 0xFFF);
    }
}
