//! Register: DDC_ADDR

use crate::reg::{Block, Field};

/// DDC_ADDR
///
/// DDC slave address
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DdcAddrReg(u32);

unsafe impl Send for DdcAddrReg {}
unsafe impl Sync for DdcAddrReg {}

impl core::default::Default for DdcAddrReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DdcAddrReg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x3B4;
    const NAME: &'static str = "HDMI_CORE_DDC_ADDR";
    const FIELDS: &'static [Field] = &[Self::DDC_ADDR];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl DdcAddrReg {
    pub const DDC_ADDR_OFFSET: usize = 1;
    pub const DDC_ADDR_WIDTH: usize = 7;
    pub const DDC_ADDR_MASK: u32 = 0x7F;
    pub const DDC_ADDR: Field = Field::new("DDC_ADDR", Block::CoreSys, 0x3B4, 7, 1);

    /// 7-bit slave address
    #[inline(always)]
    #[must_use]
    pub fn ddc_addr(&self) -> u8 {
        let val = (self.0 >> Self::DDC_ADDR_OFFSET) & Self::DDC_ADDR_MASK;
        val as u8
    }

    /// 7-bit slave address
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 7 bits.
    #[inline(always)]
    pub fn set_ddc_addr(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::DDC_ADDR.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for DdcAddrReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DdcAddrReg")
            .field("ddc_addr", &self.ddc_addr())
            .finish()
    }
}
