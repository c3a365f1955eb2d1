//! Register: DDC_STATUS

use crate::reg::{Block, Field};

/// DDC_STATUS
///
/// DDC status
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DdcStatusReg(u32);

unsafe impl Send for DdcStatusReg {}
unsafe impl Sync for DdcStatusReg {}

impl core::default::Default for DdcStatusReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for DdcStatusReg {
    const BLOCK: Block = Block::CoreSys;
    const ADDRESS: u16 = 0x3C8;
    const NAME: &'static str = "HDMI_CORE_DDC_STATUS";
    const FIELDS: &'static [Field] = &[Self::FIFO_EMPTY, Self::FIFO_FULL, Self::IN_PROG, Self::NO_ACK, Self::BUS_LOW];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl DdcStatusReg {
    pub const FIFO_EMPTY_OFFSET: usize = 2;
    pub const FIFO_EMPTY_WIDTH: usize = 1;
    pub const FIFO_EMPTY_MASK: u32 = 0x1;
    pub const FIFO_EMPTY: Field = Field::new("FIFO_EMPTY", Block::CoreSys, 0x3C8, 2, 2);

    /// Receive FIFO empty
    #[inline(always)]
    #[must_use]
    pub fn fifo_empty(&self) -> bool {
        let val = (self.0 >> Self::FIFO_EMPTY_OFFSET) & Self::FIFO_EMPTY_MASK;
        val != 0
    }

    /// Receive FIFO empty
    #[inline(always)]
    pub fn set_fifo_empty(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::FIFO_EMPTY_MASK << Self::FIFO_EMPTY_OFFSET))
            | ((val & Self::FIFO_EMPTY_MASK) << Self::FIFO_EMPTY_OFFSET);
    }

    pub const FIFO_FULL_OFFSET: usize = 3;
    pub const FIFO_FULL_WIDTH: usize = 1;
    pub const FIFO_FULL_MASK: u32 = 0x1;
    pub const FIFO_FULL: Field = Field::new("FIFO_FULL", Block::CoreSys, 0x3C8, 3, 3);

    /// Receive FIFO full
    #[inline(always)]
    #[must_use]
    pub fn fifo_full(&self) -> bool {
        let val = (self.0 >> Self::FIFO_FULL_OFFSET) & Self::FIFO_FULL_MASK;
        val != 0
    }

    /// Receive FIFO full
    #[inline(always)]
    pub fn set_fifo_full(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::FIFO_FULL_MASK << Self::FIFO_FULL_OFFSET))
            | ((val & Self::FIFO_FULL_MASK) << Self::FIFO_FULL_OFFSET);
    }

    pub const IN_PROG_OFFSET: usize = 4;
    pub const IN_PROG_WIDTH: usize = 1;
    pub const IN_PROG_MASK: u32 = 0x1;
    pub const IN_PROG: Field = Field::new("IN_PROG", Block::CoreSys, 0x3C8, 4, 4);

    /// Transaction in progress
    #[inline(always)]
    #[must_use]
    pub fn in_prog(&self) -> bool {
        let val = (self.0 >> Self::IN_PROG_OFFSET) & Self::IN_PROG_MASK;
        val != 0
    }

    /// Transaction in progress
    #[inline(always)]
    pub fn set_in_prog(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::IN_PROG_MASK << Self::IN_PROG_OFFSET))
            | ((val & Self::IN_PROG_MASK) << Self::IN_PROG_OFFSET);
    }

    pub const NO_ACK_OFFSET: usize = 5;
    pub const NO_ACK_WIDTH: usize = 1;
    pub const NO_ACK_MASK: u32 = 0x1;
    pub const NO_ACK: Field = Field::new("NO_ACK", Block::CoreSys, 0x3C8, 5, 5);

    /// Slave did not acknowledge
    #[inline(always)]
    #[must_use]
    pub fn no_ack(&self) -> bool {
        let val = (self.0 >> Self::NO_ACK_OFFSET) & Self::NO_ACK_MASK;
        val != 0
    }

    /// Slave did not acknowledge
    #[inline(always)]
    pub fn set_no_ack(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::NO_ACK_MASK << Self::NO_ACK_OFFSET))
            | ((val & Self::NO_ACK_MASK) << Self::NO_ACK_OFFSET);
    }

    pub const BUS_LOW_OFFSET: usize = 6;
    pub const BUS_LOW_WIDTH: usize = 1;
    pub const BUS_LOW_MASK: u32 = 0x1;
    pub const BUS_LOW: Field = Field::new("BUS_LOW", Block::CoreSys, 0x3C8, 6, 6);

    /// I2C bus held low
    #[inline(always)]
    #[must_use]
    pub fn bus_low(&self) -> bool {
        let val = (self.0 >> Self::BUS_LOW_OFFSET) & Self::BUS_LOW_MASK;
        val != 0
    }

    /// I2C bus held low
    #[inline(always)]
    pub fn set_bus_low(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::BUS_LOW_MASK << Self::BUS_LOW_OFFSET))
            | ((val & Self::BUS_LOW_MASK) << Self::BUS_LOW_OFFSET);
    }
}

impl core::fmt::Debug for DdcStatusReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DdcStatusReg")
            .field("fifo_empty", &self.fifo_empty())
            .field("fifo_full", &self.fifo_full())
            .field("in_prog", &self.in_prog())
            .field("no_ack", &self.no_ack())
            .field("bus_low", &self.bus_low())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = DdcStatusReg::default();
        assert!(!reg.fifo_empty());
        assert!(!reg.fifo_full());
        assert!(!reg.in_prog());
        assert!(!reg.no_ack());
        assert!(!reg.bus_low());
    }
}
