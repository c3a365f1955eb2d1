//! Register: DDC_DATA

use crate::reg::{Block, Field};

/// DDC_DATA
///
/// DDC FIFO data
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DdcDataReg(u32);

unsafe impl Send for DdcDataReg {}
unsafe impl Sync for DdcDataReg {}

impl core::default::Default for DdcDataReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DdcDataReg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x3D0;
    const NAME: &'static str = "HDMI_CORE_DDC_DATA";
    const FIELDS: &'static [Field] = &[Self::DATA];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl DdcDataReg {
    pub const DATA_OFFSET: usize = 0;
    pub const DATA_WIDTH: usize = 8;
    pub const DATA_MASK: u32 = 0xFF;
    pub const DATA: Field = Field::new("DATA", Block::CoreSys, 0x3D0, 7, 0);

    /// Next byte from the receive FIFO
    #[inline(always)]
    #[must_use]
    pub fn data(&self) -> u8 {
        let val = (self.0 >> Self::DATA_OFFSET) & Self::DATA_MASK;
        val as u8
    }

    /// Next byte from the receive FIFO
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 8 bits.
    #[inline(always)]
    pub fn set_data(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::DATA.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for DdcDataReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DdcDataReg")
            .field("data", &self.data())
            .finish()
    }
}
