//! Register: DDC_CMD

// Instances of named component types
pub use crate::components::ddc_cmd_e as cmd;

use crate::reg::{Block, Field};

/// DDC_CMD
///
/// DDC command
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DdcCmdReg(u32);

unsafe impl Send for DdcCmdReg {}
unsafe impl Sync for DdcCmdReg {}

impl core::default::Default for DdcCmdReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DdcCmdReg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x3CC;
    const NAME: &'static str = "HDMI_CORE_DDC_CMD";
    const FIELDS: &'static [Field] = &[Self::CMD];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl DdcCmdReg {
    pub const CMD_OFFSET: usize = 0;
    pub const CMD_WIDTH: usize = 4;
    pub const CMD_MASK: u32 = 0xF;
    pub const CMD: Field = Field::new("CMD", Block::CoreSys, 0x3CC, 3, 0);

    /// Command code
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn cmd(&self) -> Result<cmd::DdcCmdE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::CMD_OFFSET) & Self::CMD_MASK;
        cmd::DdcCmdE::from_bits(val as u8)
    }

    /// Command code
    #[inline(always)]
    pub fn set_cmd(&mut self, val: cmd::DdcCmdE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::CMD_MASK << Self::CMD_OFFSET))
            | ((val & Self::CMD_MASK) << Self::CMD_OFFSET);
    }
}

impl core::fmt::Debug for DdcCmdReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DdcCmdReg")
            .field("cmd", &self.cmd())
            .finish()
    }
}
