//! Register: VIDEO_CFG

// Instances of named component types
pub use crate::components::timing_mode_e as timing_mode;
pub use crate::components::packing_mode_e as packing_mode;

use crate::reg::{Block, Field};

/// VIDEO_CFG
///
/// Video interface configuration and output enable
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct VideoCfgReg(u32);

unsafe impl Send for VideoCfgReg {}
unsafe impl Sync for VideoCfgReg {}

impl core::default::Default for VideoCfgReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for VideoCfgReg {
    const BLOCK: Block = Block::Wrapper;
    const ADDRESS: u16 = 0x50;
    const NAME: &'static str = "HDMI_WP_VIDEO_CFG";
    const FIELDS: &'static [Field] = &[Self::TIMING_MODE, Self::INTERLACING, Self::HSYNC_POL, Self::VSYNC_POL, Self::PACKING_MODE, Self::ENABLE];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl VideoCfgReg {
    pub const TIMING_MODE_OFFSET: usize = 0;
    pub const TIMING_MODE_WIDTH: usize = 2;
    pub const TIMING_MODE_MASK: u32 = 0x3;
    pub const TIMING_MODE: Field = Field::new("TIMING_MODE", Block::Wrapper, 0x50, 1, 0);

    /// Timing master/slave and bus width
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn timing_mode(&self) -> Result<timing_mode::TimingModeE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::TIMING_MODE_OFFSET) & Self::TIMING_MODE_MASK;
        timing_mode::TimingModeE::from_bits(val as u8)
    }

    /// Timing master/slave and bus width
    #[inline(always)]
    pub fn set_timing_mode(&mut self, val: timing_mode::TimingModeE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::TIMING_MODE_MASK << Self::TIMING_MODE_OFFSET))
            | ((val & Self::TIMING_MODE_MASK) << Self::TIMING_MODE_OFFSET);
    }

    pub const INTERLACING_OFFSET: usize = 3;
    pub const INTERLACING_WIDTH: usize = 1;
    pub const INTERLACING_MASK: u32 = 0x1;
    pub const INTERLACING: Field = Field::new("INTERLACING", Block::Wrapper, 0x50, 3, 3);

    /// Interlaced scan
    #[inline(always)]
    #[must_use]
    pub fn interlacing(&self) -> bool {
        let val = (self.0 >> Self::INTERLACING_OFFSET) & Self::INTERLACING_MASK;
        val != 0
    }

    /// Interlaced scan
    #[inline(always)]
    pub fn set_interlacing(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::INTERLACING_MASK << Self::INTERLACING_OFFSET))
            | ((val & Self::INTERLACING_MASK) << Self::INTERLACING_OFFSET);
    }

    pub const HSYNC_POL_OFFSET: usize = 6;
    pub const HSYNC_POL_WIDTH: usize = 1;
    pub const HSYNC_POL_MASK: u32 = 0x1;
    pub const HSYNC_POL: Field = Field::new("HSYNC_POL", Block::Wrapper, 0x50, 6, 6);

    /// Horizontal sync active high
    #[inline(always)]
    #[must_use]
    pub fn hsync_pol(&self) -> bool {
        let val = (self.0 >> Self::HSYNC_POL_OFFSET) & Self::HSYNC_POL_MASK;
        val != 0
    }

    /// Horizontal sync active high
    #[inline(always)]
    pub fn set_hsync_pol(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::HSYNC_POL_MASK << Self::HSYNC_POL_OFFSET))
            | ((val & Self::HSYNC_POL_MASK) << Self::HSYNC_POL_OFFSET);
    }

    pub const VSYNC_POL_OFFSET: usize = 7;
    pub const VSYNC_POL_WIDTH: usize = 1;
    pub const VSYNC_POL_MASK: u32 = 0x1;
    pub const VSYNC_POL: Field = Field::new("VSYNC_POL", Block::Wrapper, 0x50, 7, 7);

    /// Vertical sync active high
    #[inline(always)]
    #[must_use]
    pub fn vsync_pol(&self) -> bool {
        let val = (self.0 >> Self::VSYNC_POL_OFFSET) & Self::VSYNC_POL_MASK;
        val != 0
    }

    /// Vertical sync active high
    #[inline(always)]
    pub fn set_vsync_pol(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::VSYNC_POL_MASK << Self::VSYNC_POL_OFFSET))
            | ((val & Self::VSYNC_POL_MASK) << Self::VSYNC_POL_OFFSET);
    }

    pub const PACKING_MODE_OFFSET: usize = 8;
    pub const PACKING_MODE_WIDTH: usize = 3;
    pub const PACKING_MODE_MASK: u32 = 0x7;
    pub const PACKING_MODE: Field = Field::new("PACKING_MODE", Block::Wrapper, 0x50, 10, 8);

    /// Pixel packing mode
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn packing_mode(&self) -> Result<packing_mode::PackingModeE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::PACKING_MODE_OFFSET) & Self::PACKING_MODE_MASK;
        packing_mode::PackingModeE::from_bits(val as u8)
    }

    /// Pixel packing mode
    #[inline(always)]
    pub fn set_packing_mode(&mut self, val: packing_mode::PackingModeE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::PACKING_MODE_MASK << Self::PACKING_MODE_OFFSET))
            | ((val & Self::PACKING_MODE_MASK) << Self::PACKING_MODE_OFFSET);
    }

    pub const ENABLE_OFFSET: usize = 31;
    pub const ENABLE_WIDTH: usize = 1;
    pub const ENABLE_MASK: u32 = 0x1;
    pub const ENABLE: Field = Field::new("ENABLE", Block::Wrapper, 0x50, 31, 31);

    /// Video output enable
    #[inline(always)]
    #[must_use]
    pub fn enable(&self) -> bool {
        let val = (self.0 >> Self::ENABLE_OFFSET) & Self::ENABLE_MASK;
        val != 0
    }

    /// Video output enable
    #[inline(always)]
    pub fn set_enable(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::ENABLE_MASK << Self::ENABLE_OFFSET))
            | ((val & Self::ENABLE_MASK) << Self::ENABLE_OFFSET);
    }
}

impl core::fmt::Debug for VideoCfgReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VideoCfgReg")
            .field("timing_mode", &self.timing_mode())
            .field("interlacing", &self.interlacing())
            .field("hsync_pol", &self.hsync_pol())
            .field("vsync_pol", &self.vsync_pol())
            .field("packing_mode", &self.packing_mode())
            .field("enable", &self.enable())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = VideoCfgReg::default();
        assert_eq!(reg.timing_mode(), Ok(timing_mode::TimingModeE::Slave));
        assert!(!reg.interlacing());
        assert!(!reg.hsync_pol());
        assert!(!reg.vsync_pol());
        assert_eq!(reg.packing_mode(), Ok(packing_mode::PackingModeE::Rgb10bYuv444));
        assert!(!reg.enable());
    }
}
