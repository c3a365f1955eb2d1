//! Register: HDMI_CTRL

// Instances of named component types
pub use crate::components::packet_mode_e as packet_mode;

use crate::reg::{Block, Field};

/// HDMI_CTRL
///
/// HDMI control
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct HdmiCtrlReg(u32);

unsafe impl Send for HdmiCtrlReg {}
unsafe impl Sync for HdmiCtrlReg {}

impl core::default::Default for HdmiCtrlReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for HdmiCtrlReg {
    const BLOCK: Block = Block::CoreAv;
    const ADDRESS: u16 = 0xBC;
    const NAME: &'static str = "HDMI_CORE_AV_HDMI_CTRL";
    const FIELDS: &'static [Field] = &[Self::HDMI_MODE, Self::PACKET_MODE, Self::DC_EN];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl HdmiCtrlReg {
    pub const HDMI_MODE_OFFSET: usize = 0;
    pub const HDMI_MODE_WIDTH: usize = 1;
    pub const HDMI_MODE_MASK: u32 = 0x1;
    pub const HDMI_MODE: Field = Field::new("HDMI_MODE", Block::CoreAv, 0xBC, 0, 0);

    /// HDMI (set) or DVI (clear) output
    #[inline(always)]
    #[must_use]
    pub fn hdmi_mode(&self) -> bool {
        let val = (self.0 >> Self::HDMI_MODE_OFFSET) & Self::HDMI_MODE_MASK;
        val != 0
    }

    /// HDMI (set) or DVI (clear) output
    #[inline(always)]
    pub fn set_hdmi_mode(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::HDMI_MODE_MASK << Self::HDMI_MODE_OFFSET))
            | ((val & Self::HDMI_MODE_MASK) << Self::HDMI_MODE_OFFSET);
    }

    pub const PACKET_MODE_OFFSET: usize = 3;
    pub const PACKET_MODE_WIDTH: usize = 3;
    pub const PACKET_MODE_MASK: u32 = 0x7;
    pub const PACKET_MODE: Field = Field::new("PACKET_MODE", Block::CoreAv, 0xBC, 5, 3);

    /// Pixel packing for deep color
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn packet_mode(&self) -> Result<packet_mode::PacketModeE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::PACKET_MODE_OFFSET) & Self::PACKET_MODE_MASK;
        packet_mode::PacketModeE::from_bits(val as u8)
    }

    /// Pixel packing for deep color
    #[inline(always)]
    pub fn set_packet_mode(&mut self, val: packet_mode::PacketModeE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::PACKET_MODE_MASK << Self::PACKET_MODE_OFFSET))
            | ((val & Self::PACKET_MODE_MASK) << Self::PACKET_MODE_OFFSET);
    }

    pub const DC_EN_OFFSET: usize = 6;
    pub const DC_EN_WIDTH: usize = 1;
    pub const DC_EN_MASK: u32 = 0x1;
    pub const DC_EN: Field = Field::new("DC_EN", Block::CoreAv, 0xBC, 6, 6);

    /// Deep-color general control packet enable
    #[inline(always)]
    #[must_use]
    pub fn dc_en(&self) -> bool {
        let val = (self.0 >> Self::DC_EN_OFFSET) & Self::DC_EN_MASK;
        val != 0
    }

    /// Deep-color general control packet enable
    #[inline(always)]
    pub fn set_dc_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::DC_EN_MASK << Self::DC_EN_OFFSET))
            | ((val & Self::DC_EN_MASK) << Self::DC_EN_OFFSET);
    }
}

impl core::fmt::Debug for HdmiCtrlReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HdmiCtrlReg")
            .field("hdmi_mode", &self.hdmi_mode())
            .field("packet_mode", &self.packet_mode())
            .field("dc_en", &self.dc_en())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = HdmiCtrlReg::default();
        assert!(!reg.hdmi_mode());
        assert_eq!(reg.packet_mode(), Ok(packet_mode::PacketModeE::Reserved));
        assert!(!reg.dc_en());
    }
}
