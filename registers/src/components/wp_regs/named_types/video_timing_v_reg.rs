//! Register: VIDEO_TIMING_V

use crate::reg::{Block, Field};

/// VIDEO_TIMING_V
///
/// Vertical blanking timing
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct VideoTimingVReg(u32);

unsafe impl Send for VideoTimingVReg {}
unsafe impl Sync for VideoTimingVReg {}

impl core::default::Default for VideoTimingVReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for VideoTimingVReg {
    const BLOCK: Block = Block::Wrapper;
    const ADDRESS: u16 = 0x6C;
    const NAME: &'static str = "HDMI_WP_VIDEO_TIMING_V";
    const FIELDS: &'static [Field] = &[Self::VSW, Self::VFP, Self::VBP];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl VideoTimingVReg {
    pub const VSW_OFFSET: usize = 0;
    pub const VSW_WIDTH: usize = 8;
    pub const VSW_MASK: u32 = 0xFF;
    pub const VSW: Field = Field::new("VSW", Block::Wrapper, 0x6C, 7, 0);

    /// Vertical sync width
    #[inline(always)]
    #[must_use]
    pub fn vsw(&self) -> u8 {
        let val = (self.0 >> Self::VSW_OFFSET) & Self::VSW_MASK;
        val as u8
    }

    /// Vertical sync width
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_vsw(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::VSW.insert(self.0, val as u32)?;
        Ok(())
    }

    pub const VFP_OFFSET: usize = 8;
    pub const VFP_WIDTH: usize = 12;
    pub const VFP_MASK: u32 = 0xFFF;
    pub const VFP: Field = Field::new("VFP", Block::Wrapper, 0x6C, 19, 8);

    /// Vertical front porch
    #[inline(always)]
    #[must_use]
    pub fn vfp(&self) -> u16 {
        let val = (self.0 >> Self::VFP_OFFSET) & Self::VFP_MASK;
        val as u16
    }

    /// Vertical front porch
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 12 bits.
    #[inline(always)]
    pub fn set_vfp(&mut self, val: u16) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::VFP.insert(self.0, val as u32)?;
        Ok(())
    }

    pub const VBP_OFFSET: usize = 20;
    pub const VBP_WIDTH: usize = 12;
    pub const VBP_MASK: u32 = 0xFFF;
    pub const VBP: Field = Field::new("VBP", Block::Wrapper, 0x6C, 31, 20);

    /// Vertical back porch
    #[inline(always)]
    #[must_use]
    pub fn vbp(&self) -> u16 {
        let val = (self.0 >> Self::VBP_OFFSET) & Self::VBP_MASK;
        val as u16
    }

    /// Vertical back porch
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 12 bits.
    #[inline(always)]
    pub fn set_vbp(&mut self, val: u16) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::VBP.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for VideoTimingVReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VideoTimingVReg")
            .field("vsw", &self.vsw())
            .field("vfp", &self.vfp())
            .field("vbp", &self.vbp())
            .finish()
    }
}
