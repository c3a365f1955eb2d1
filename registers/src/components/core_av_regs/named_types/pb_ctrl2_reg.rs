//! Register: PB_CTRL2

use crate::reg::{Block, Field};

/// PB_CTRL2
///
/// Packet buffer control 2
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PbCtrl2Reg(u32);

unsafe impl Send for PbCtrl2Reg {}
unsafe impl Sync for PbCtrl2Reg {}

impl core::default::Default for PbCtrl2Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for PbCtrl2Reg {
    const BLOCK: Block = Block::CoreAv;
    const ADDRESS: u16 = 0xFC;
    const NAME: &'static str = "HDMI_CORE_AV_PB_CTRL2";
    const FIELDS: &'static [Field] = &[Self::GEN_RPT, Self::GEN_EN, Self::CP_RPT, Self::CP_EN];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl PbCtrl2Reg {
    pub const GEN_RPT_OFFSET: usize = 0;
    pub const GEN_RPT_WIDTH: usize = 1;
    pub const GEN_RPT_MASK: u32 = 0x1;
    pub const GEN_RPT: Field = Field::new("GEN_RPT", Block::CoreAv, 0xFC, 0, 0);

    /// Repeat the generic packet
    #[inline(always)]
    #[must_use]
    pub fn gen_rpt(&self) -> bool {
        let val = (self.0 >> Self::GEN_RPT_OFFSET) & Self::GEN_RPT_MASK;
        val != 0
    }

    /// Repeat the generic packet
    #[inline(always)]
    pub fn set_gen_rpt(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::GEN_RPT_MASK << Self::GEN_RPT_OFFSET))
            | ((val & Self::GEN_RPT_MASK) << Self::GEN_RPT_OFFSET);
    }

    pub const GEN_EN_OFFSET: usize = 1;
    pub const GEN_EN_WIDTH: usize = 1;
    pub const GEN_EN_MASK: u32 = 0x1;
    pub const GEN_EN: Field = Field::new("GEN_EN", Block::CoreAv, 0xFC, 1, 1);

    /// Send the generic packet
    #[inline(always)]
    #[must_use]
    pub fn gen_en(&self) -> bool {
        let val = (self.0 >> Self::GEN_EN_OFFSET) & Self::GEN_EN_MASK;
        val != 0
    }

    /// Send the generic packet
    #[inline(always)]
    pub fn set_gen_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::GEN_EN_MASK << Self::GEN_EN_OFFSET))
            | ((val & Self::GEN_EN_MASK) << Self::GEN_EN_OFFSET);
    }

    pub const CP_RPT_OFFSET: usize = 2;
    pub const CP_RPT_WIDTH: usize = 1;
    pub const CP_RPT_MASK: u32 = 0x1;
    pub const CP_RPT: Field = Field::new("CP_RPT", Block::CoreAv, 0xFC, 2, 2);

    /// Repeat the general control packet
    #[inline(always)]
    #[must_use]
    pub fn cp_rpt(&self) -> bool {
        let val = (self.0 >> Self::CP_RPT_OFFSET) & Self::CP_RPT_MASK;
        val != 0
    }

    /// Repeat the general control packet
    #[inline(always)]
    pub fn set_cp_rpt(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::CP_RPT_MASK << Self::CP_RPT_OFFSET))
            | ((val & Self::CP_RPT_MASK) << Self::CP_RPT_OFFSET);
    }

    pub const CP_EN_OFFSET: usize = 3;
    pub const CP_EN_WIDTH: usize = 1;
    pub const CP_EN_MASK: u32 = 0x1;
    pub const CP_EN: Field = Field::new("CP_EN", Block::CoreAv, 0xFC, 3, 3);

    /// Send the general control packet
    #[inline(always)]
    #[must_use]
    pub fn cp_en(&self) -> bool {
        let val = (self.0 >> Self::CP_EN_OFFSET) & Self::CP_EN_MASK;
        val != 0
    }

    /// Send the general control packet
    #[inline(always)]
    pub fn set_cp_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::CP_EN_MASK << Self::CP_EN_OFFSET))
            | ((val & Self::CP_EN_MASK) << Self::CP_EN_OFFSET);
    }
}

impl core::fmt::Debug for PbCtrl2Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PbCtrl2Reg")
            .field("gen_rpt", &self.gen_rpt())
            .field("gen_en", &self.gen_en())
            .field("cp_rpt", &self.cp_rpt())
            .field("cp_en", &self.cp_en())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = PbCtrl2Reg::default();
        assert!(!reg.gen_rpt());
        assert!(!reg.gen_en());
        assert!(!reg.cp_rpt());
        assert!(!reg.cp_en());
    }
}
