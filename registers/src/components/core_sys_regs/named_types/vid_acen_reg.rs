//! Register: VID_ACEN

// Instances of named component types
pub use crate::components::input_bus_width_e as wide_bus;

use crate::reg::{Block, Field};

/// VID_ACEN
///
/// Video action enable
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct VidAcenReg(u32);

unsafe impl Send for VidAcenReg {}
unsafe impl Sync for VidAcenReg {}

impl core::default::Default for VidAcenReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for VidAcenReg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x124;
    const NAME: &'static str = "HDMI_CORE_SYS_VID_ACEN";
    const FIELDS: &'static [Field] = &[Self::WIDE_BUS];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl VidAcenReg {
    pub const WIDE_BUS_OFFSET: usize = 6;
    pub const WIDE_BUS_WIDTH: usize = 2;
    pub const WIDE_BUS_MASK: u32 = 0x3;
    pub const WIDE_BUS: Field = Field::new("WIDE_BUS", Block::CoreSys, 0x124, 7, 6);

    /// Input bus width per component
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn wide_bus(&self) -> Result<wide_bus::InputBusWidthE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::WIDE_BUS_OFFSET) & Self::WIDE_BUS_MASK;
        wide_bus::InputBusWidthE::from_bits(val as u8)
    }

    /// Input bus width per component
    #[inline(always)]
    pub fn set_wide_bus(&mut self, val: wide_bus::InputBusWidthE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::WIDE_BUS_MASK << Self::WIDE_BUS_OFFSET))
            | ((val & Self::WIDE_BUS_MASK) << Self::WIDE_BUS_OFFSET);
    }
}

impl core::fmt::Debug for VidAcenReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VidAcenReg")
            .field("wide_bus", &self.wide_bus())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = VidAcenReg::default();
        assert_eq!(reg.wide_bus(), Ok(wide_bus::InputBusWidthE::Bits8));
    }
}
