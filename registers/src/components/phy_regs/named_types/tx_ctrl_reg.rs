//! Register: TX_CTRL

use crate::reg::{Block, Field};

/// TX_CTRL
///
/// Transmitter control
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct TxCtrlReg(u32);

unsafe impl Send for TxCtrlReg {}
unsafe impl Sync for TxCtrlReg {}

impl core::default::Default for TxCtrlReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for TxCtrlReg {
    const BLOCK: Block = Block::Phy;
    const ADDRESS: u16 = 0x0;
    const NAME: &'static str = "HDMI_TXPHY_TX_CTRL";
    const FIELDS: &'static [Field] = &[Self::FREQOUT];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl TxCtrlReg {
    pub const FREQOUT_OFFSET: usize = 30;
    pub const FREQOUT_WIDTH: usize = 2;
    pub const FREQOUT_MASK: u32 = 0x3;
    pub const FREQOUT: Field = Field::new("FREQOUT", Block::Phy, 0x0, 31, 30);

    /// Output bit clock frequency select
    #[inline(always)]
    #[must_use]
    pub fn freqout(&self) -> u8 {
        let val = (self.0 >> Self::FREQOUT_OFFSET) & Self::FREQOUT_MASK;
        val as u8
    }

    /// Output bit clock frequency select
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 2 bits.
    #[inline(always)]
    pub fn set_freqout(&mut self, val: u8) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::FREQOUT.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for TxCtrlReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TxCtrlReg")
            .field("freqout", &self.freqout())
            .finish()
    }
}
