//! Register: PB_CTRL1

use crate::reg::{Block, Field};

/// PB_CTRL1
///
/// Packet buffer control 1
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PbCtrl1Reg(u32);

unsafe impl Send for PbCtrl1Reg {}
unsafe impl Sync for PbCtrl1Reg {}

impl core::default::Default for PbCtrl1Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for PbCtrl1Reg {
    const BLOCK: Block = Block::CoreAv;
    const ADDRESS: u16 = 0xF8;
    const NAME: &'static str = "HDMI_CORE_AV_PB_CTRL1";
    const FIELDS: &'static [Field] = &[Self::AVI_RPT, Self::AVI_EN, Self::AUD_RPT, Self::AUD_EN];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl PbCtrl1Reg {
    pub const AVI_RPT_OFFSET: usize = 0;
    pub const AVI_RPT_WIDTH: usize = 1;
    pub const AVI_RPT_MASK: u32 = 0x1;
    pub const AVI_RPT: Field = Field::new("AVI_RPT", Block::CoreAv, 0xF8, 0, 0);

    /// Repeat the AVI info frame every frame
    #[inline(always)]
    #[must_use]
    pub fn avi_rpt(&self) -> bool {
        let val = (self.0 >> Self::AVI_RPT_OFFSET) & Self::AVI_RPT_MASK;
        val != 0
    }

    /// Repeat the AVI info frame every frame
    #[inline(always)]
    pub fn set_avi_rpt(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::AVI_RPT_MASK << Self::AVI_RPT_OFFSET))
            | ((val & Self::AVI_RPT_MASK) << Self::AVI_RPT_OFFSET);
    }

    pub const AVI_EN_OFFSET: usize = 1;
    pub const AVI_EN_WIDTH: usize = 1;
    pub const AVI_EN_MASK: u32 = 0x1;
    pub const AVI_EN: Field = Field::new("AVI_EN", Block::CoreAv, 0xF8, 1, 1);

    /// Send the AVI info frame
    #[inline(always)]
    #[must_use]
    pub fn avi_en(&self) -> bool {
        let val = (self.0 >> Self::AVI_EN_OFFSET) & Self::AVI_EN_MASK;
        val != 0
    }

    /// Send the AVI info frame
    #[inline(always)]
    pub fn set_avi_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::AVI_EN_MASK << Self::AVI_EN_OFFSET))
            | ((val & Self::AVI_EN_MASK) << Self::AVI_EN_OFFSET);
    }

    pub const AUD_RPT_OFFSET: usize = 4;
    pub const AUD_RPT_WIDTH: usize = 1;
    pub const AUD_RPT_MASK: u32 = 0x1;
    pub const AUD_RPT: Field = Field::new("AUD_RPT", Block::CoreAv, 0xF8, 4, 4);

    /// Repeat the audio info frame every frame
    #[inline(always)]
    #[must_use]
    pub fn aud_rpt(&self) -> bool {
        let val = (self.0 >> Self::AUD_RPT_OFFSET) & Self::AUD_RPT_MASK;
        val != 0
    }

    /// Repeat the audio info frame every frame
    #[inline(always)]
    pub fn set_aud_rpt(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::AUD_RPT_MASK << Self::AUD_RPT_OFFSET))
            | ((val & Self::AUD_RPT_MASK) << Self::AUD_RPT_OFFSET);
    }

    pub const AUD_EN_OFFSET: usize = 5;
    pub const AUD_EN_WIDTH: usize = 1;
    pub const AUD_EN_MASK: u32 = 0x1;
    pub const AUD_EN: Field = Field::new("AUD_EN", Block::CoreAv, 0xF8, 5, 5);

    /// Send the audio info frame
    #[inline(always)]
    #[must_use]
    pub fn aud_en(&self) -> bool {
        let val = (self.0 >> Self::AUD_EN_OFFSET) & Self::AUD_EN_MASK;
        val != 0
    }

    /// Send the audio info frame
    #[inline(always)]
    pub fn set_aud_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::AUD_EN_MASK << Self::AUD_EN_OFFSET))
            | ((val & Self::AUD_EN_MASK) << Self::AUD_EN_OFFSET);
    }
}

impl core::fmt::Debug for PbCtrl1Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PbCtrl1Reg")
            .field("avi_rpt", &self.avi_rpt())
            .field("avi_en", &self.avi_en())
            .field("aud_rpt", &self.aud_rpt())
            .field("aud_en", &self.aud_en())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = PbCtrl1Reg::default();
        assert!(!reg.avi_rpt());
        assert!(!reg.avi_en());
        assert!(!reg.aud_rpt());
        assert!(!reg.aud_en());
    }
}
