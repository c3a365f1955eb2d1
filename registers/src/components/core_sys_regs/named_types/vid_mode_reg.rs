//! Register: VID_MODE

use crate::reg::{Block, Field};

/// VID_MODE
///
/// Video mode
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct VidModeReg(u32);

unsafe impl Send for VidModeReg {}
unsafe impl Sync for VidModeReg {}

impl core::default::Default for VidModeReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for VidModeReg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x128;
    const NAME: &'static str = "HDMI_CORE_SYS_VID_MODE";
    const FIELDS: &'static [Field] = &[Self::DITHER_EN, Self::DITHER_MODE];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl VidModeReg {
    pub const DITHER_EN_OFFSET: usize = 5;
    pub const DITHER_EN_WIDTH: usize = 1;
    pub const DITHER_EN_MASK: u32 = 0x1;
    pub const DITHER_EN: Field = Field::new("DITHER_EN", Block::CoreSys, 0x128, 5, 5);

    /// Output dithering enable
    #[inline(always)]
    #[must_use]
    pub fn dither_en(&self) -> bool {
        let val = (self.0 >> Self::DITHER_EN_OFFSET) & Self::DITHER_EN_MASK;
        val != 0
    }

    /// Output dithering enable
    #[inline(always)]
    pub fn set_dither_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::DITHER_EN_MASK << Self::DITHER_EN_OFFSET))
            | ((val & Self::DITHER_EN_MASK) << Self::DITHER_EN_OFFSET);
    }

    pub const DITHER_MODE_OFFSET: usize = 6;
    pub const DITHER_MODE_WIDTH: usize = 2;
    pub const DITHER_MODE_MASK: u32 = 0x3;
    pub const DITHER_MODE: Field = Field::new("DITHER_MODE", Block::CoreSys, 0x128, 7, 6);

    /// Output dither/truncation depth code
    #[inline(always)]
    #[must_use]
    pub fn dither_mode(&self) -> u8 {
        let val = (self.0 >> Self::DITHER_MODE_OFFSET) & Self::DITHER_MODE_MASK;
        val as u8
    }

    /// Output dither/truncation depth code
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 2 bits.
    #[inline(always)]
    pub fn set_dither_mode(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::DITHER_MODE.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for VidModeReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VidModeReg")
            .field("dither_en", &self.dither_en())
            .field("dither_mode", &self.dither_mode())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = VidModeReg::default();
        assert!(!reg.dither_en());
        assert_eq!(reg.dither_mode(), 0);
    }

    #[test]
    fn test_dither_mode_range() {
        let mut reg = VidModeReg::default();
        reg.set_dither_mode(0x3).unwrap();
        assert_eq!(reg.dither_mode(), 0x3);
        assert_eq!(crate::reg::Register::to_raw(reg), 0xC0);
        assert!(reg.set_dither_mode(0x4).is_err());
        assert_eq!(reg.dither_mode(), 0x3);
    }
}
