//! Register: CTRL1

use crate::reg::{Block, Field};

/// CTRL1
///
/// System control 1
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Ctrl1Reg(u32);

unsafe impl Send for Ctrl1Reg {}
unsafe impl Sync for Ctrl1Reg {}

impl core::default::Default for Ctrl1Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for Ctrl1Reg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x20;
    const NAME: &'static str = "HDMI_CORE_CTRL1";
    const FIELDS: &'static [Field] = &[Self::PD, Self::EDGE, Self::BSEL, Self::HEN, Self::VEN];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl Ctrl1Reg {
    pub const PD_OFFSET: usize = 0;
    pub const PD_WIDTH: usize = 1;
    pub const PD_MASK: u32 = 0x1;
    pub const PD: Field = Field::new("PD", Block::CoreSys, 0x20, 0, 0);

    /// Core power-down control; written 0 before video configuration
    #[inline(always)]
    #[must_use]
    pub fn pd(&self) -> bool {
        let val = (self.0 >> Self::PD_OFFSET) & Self::PD_MASK;
        val != 0
    }

    /// Core power-down control; written 0 before video configuration
    #[inline(always)]
    pub fn set_pd(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::PD_MASK << Self::PD_OFFSET))
            | ((val & Self::PD_MASK) << Self::PD_OFFSET);
    }

    pub const EDGE_OFFSET: usize = 1;
    pub const EDGE_WIDTH: usize = 1;
    pub const EDGE_MASK: u32 = 0x1;
    pub const EDGE: Field = Field::new("EDGE", Block::CoreSys, 0x20, 1, 1);

    /// Latch input on rising edge
    #[inline(always)]
    #[must_use]
    pub fn edge(&self) -> bool {
        let val = (self.0 >> Self::EDGE_OFFSET) & Self::EDGE_MASK;
        val != 0
    }

    /// Latch input on rising edge
    #[inline(always)]
    pub fn set_edge(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::EDGE_MASK << Self::EDGE_OFFSET))
            | ((val & Self::EDGE_MASK) << Self::EDGE_OFFSET);
    }

    pub const BSEL_OFFSET: usize = 2;
    pub const BSEL_WIDTH: usize = 1;
    pub const BSEL_MASK: u32 = 0x1;
    pub const BSEL: Field = Field::new("BSEL", Block::CoreSys, 0x20, 2, 2);

    /// 24-bit input bus select
    #[inline(always)]
    #[must_use]
    pub fn bsel(&self) -> bool {
        let val = (self.0 >> Self::BSEL_OFFSET) & Self::BSEL_MASK;
        val != 0
    }

    /// 24-bit input bus select
    #[inline(always)]
    pub fn set_bsel(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::BSEL_MASK << Self::BSEL_OFFSET))
            | ((val & Self::BSEL_MASK) << Self::BSEL_OFFSET);
    }

    pub const HEN_OFFSET: usize = 4;
    pub const HEN_WIDTH: usize = 1;
    pub const HEN_MASK: u32 = 0x1;
    pub const HEN: Field = Field::new("HEN", Block::CoreSys, 0x20, 4, 4);

    /// HSYNC follows input
    #[inline(always)]
    #[must_use]
    pub fn hen(&self) -> bool {
        let val = (self.0 >> Self::HEN_OFFSET) & Self::HEN_MASK;
        val != 0
    }

    /// HSYNC follows input
    #[inline(always)]
    pub fn set_hen(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::HEN_MASK << Self::HEN_OFFSET))
            | ((val & Self::HEN_MASK) << Self::HEN_OFFSET);
    }

    pub const VEN_OFFSET: usize = 5;
    pub const VEN_WIDTH: usize = 1;
    pub const VEN_MASK: u32 = 0x1;
    pub const VEN: Field = Field::new("VEN", Block::CoreSys, 0x20, 5, 5);

    /// VSYNC follows input
    #[inline(always)]
    #[must_use]
    pub fn ven(&self) -> bool {
        let val = (self.0 >> Self::VEN_OFFSET) & Self::VEN_MASK;
        val != 0
    }

    /// VSYNC follows input
    #[inline(always)]
    pub fn set_ven(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::VEN_MASK << Self::VEN_OFFSET))
            | ((val & Self::VEN_MASK) << Self::VEN_OFFSET);
    }
}

impl core::fmt::Debug for Ctrl1Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ctrl1Reg")
            .field("pd", &self.pd())
            .field("edge", &self.edge())
            .field("bsel", &self.bsel())
            .field("hen", &self.hen())
            .field("ven", &self.ven())
            .finish()
    }
}
