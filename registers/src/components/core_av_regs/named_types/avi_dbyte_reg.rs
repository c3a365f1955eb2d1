//! Register: AVI_DBYTE

use crate::reg::{Block, Field};

/// AVI_DBYTE
///
/// AVI info frame data byte (array of 15, stride 4)
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct AviDbyteReg(u32);

unsafe impl Send for AviDbyteReg {}
unsafe impl Sync for AviDbyteReg {}

impl core::default::Default for AviDbyteReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for AviDbyteReg {
    const BLOCK: Block = Block::CoreAv;
    const ADDRESS: u16 = 0x110;
    const NAME: &'static str = "HDMI_CORE_AV_AVI_DBYTE";
    const FIELDS: &'static [Field] = &[Self::DATA];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl AviDbyteReg {
    pub const DATA_OFFSET: usize = 0;
    pub const DATA_WIDTH: usize = 8;
    pub const DATA_MASK: u32 = 0xFF;
    pub const DATA: Field = Field::new("DATA", Block::CoreAv, 0x110, 7, 0);

    /// Payload byte
    #[inline(always)]
    #[must_use]
    pub fn data(&self) -> u8 {
        let val = (self.0 >> Self::DATA_OFFSET) & Self::DATA_MASK;
        val as u8
    }

    /// Payload byte
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_data(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::DATA.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl crate::reg::RegisterArray for AviDbyteReg {
    const COUNT: usize = 15;
    const STRIDE: u16 = 4;
}

impl core::fmt::Debug for AviDbyteReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AviDbyteReg")
            .field("data", &self.data())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = AviDbyteReg::default();
        assert_eq!(reg.data(), 0);
    }

    #[test]
    fn test_data_range() {
        let mut reg = AviDbyteReg::default();
        reg.set_data(0xFF).unwrap();
        assert_eq!(reg.data(), 0xFF);
        assert_eq!(crate::reg::Register::to_raw(reg), 0xFF);
    }
}
