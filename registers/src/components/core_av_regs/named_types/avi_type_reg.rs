//! Register: AVI_TYPE

use crate::reg::{Block, Field};

/// AVI_TYPE
///
/// AVI info frame type code
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct AviTypeReg(u32);

unsafe impl Send for AviTypeReg {}
unsafe impl Sync for AviTypeReg {}

impl core::default::Default for AviTypeReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for AviTypeReg {
    const BLOCK: Block = Block::CoreAv;
    const ADDRESS: u16 = 0x100;
    const NAME: &'static str = "HDMI_CORE_AV_AVI_TYPE";
    const FIELDS: &'static [Field] = &[Self::PACKET_TYPE];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl AviTypeReg {
    pub const PACKET_TYPE_OFFSET: usize = 0;
    pub const PACKET_TYPE_WIDTH: usize = 8;
    pub const PACKET_TYPE_MASK: u32 = 0xFF;
    pub const PACKET_TYPE: Field = Field::new("PACKET_TYPE", Block::CoreAv, 0x100, 7, 0);

    /// Packet type
    #[inline(always)]
    #[must_use]
    pub fn packet_type(&self) -> u8 {
        let val = (self.0 >> Self::PACKET_TYPE_OFFSET) & Self::PACKET_TYPE_MASK;
        val as u8
    }

    /// Packet type
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_packet_type(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::PACKET_TYPE.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for AviTypeReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AviTypeReg")
            .field("packet_type", &self.packet_type())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = AviTypeReg::default();
        assert_eq!(reg.packet_type(), 0);
    }

    #[test]
    fn test_packet_type_range() {
        let mut reg = AviTypeReg::default();
        reg.set_packet_type(0xFF).unwrap();
        assert_eq!(reg.packet_type(), 0xFF);
        assert_eq!(crate::reg::Register::to_raw(reg), 0xFF);
    }
}
