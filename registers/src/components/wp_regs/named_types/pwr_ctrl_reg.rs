//! Register: PWR_CTRL

// Instances of named component types
pub use crate::components::pll_pwr_e as pll_pwr_status;
pub use crate::components::pll_pwr_e as pll_pwr_cmd;
pub use crate::components::phy_pwr_e as phy_pwr_status;
pub use crate::components::phy_pwr_e as phy_pwr_cmd;

use crate::reg::{Block, Field};

/// PWR_CTRL
///
/// Power-state command and status for the PLL and PHY domains
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PwrCtrlReg(u32);

unsafe impl Send for PwrCtrlReg {}
unsafe impl Sync for PwrCtrlReg {}

impl core::default::Default for PwrCtrlReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for PwrCtrlReg {
    const BLOCK: Block = Block::Wrapper;
    const ADDRESS: u16 = 0x40;
    const NAME: &'static str = "HDMI_WP_PWR_CTRL";
    const FIELDS: &'static [Field] = &[Self::PLL_PWR_STATUS, Self::PLL_PWR_CMD, Self::PHY_PWR_STATUS, Self::PHY_PWR_CMD];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl PwrCtrlReg {
    pub const PLL_PWR_STATUS_OFFSET: usize = 0;
    pub const PLL_PWR_STATUS_WIDTH: usize = 2;
    pub const PLL_PWR_STATUS_MASK: u32 = 0x3;
    pub const PLL_PWR_STATUS: Field = Field::new("PLL_PWR_STATUS", Block::Wrapper, 0x40, 1, 0);

    /// PLL power state as reported by the power FSM
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn pll_pwr_status(&self) -> Result<pll_pwr_status::PllPwrE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::PLL_PWR_STATUS_OFFSET) & Self::PLL_PWR_STATUS_MASK;
        pll_pwr_status::PllPwrE::from_bits(val as u8)
    }

    /// PLL power state as reported by the power FSM
    #[inline(always)]
    pub fn set_pll_pwr_status(&mut self, val: pll_pwr_status::PllPwrE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::PLL_PWR_STATUS_MASK << Self::PLL_PWR_STATUS_OFFSET))
            | ((val & Self::PLL_PWR_STATUS_MASK) << Self::PLL_PWR_STATUS_OFFSET);
    }

    pub const PLL_PWR_CMD_OFFSET: usize = 2;
    pub const PLL_PWR_CMD_WIDTH: usize = 2;
    pub const PLL_PWR_CMD_MASK: u32 = 0x3;
    pub const PLL_PWR_CMD: Field = Field::new("PLL_PWR_CMD", Block::Wrapper, 0x40, 3, 2);

    /// Requested PLL power state
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn pll_pwr_cmd(&self) -> Result<pll_pwr_cmd::PllPwrE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::PLL_PWR_CMD_OFFSET) & Self::PLL_PWR_CMD_MASK;
        pll_pwr_cmd::PllPwrE::from_bits(val as u8)
    }

    /// Requested PLL power state
    #[inline(always)]
    pub fn set_pll_pwr_cmd(&mut self, val: pll_pwr_cmd::PllPwrE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::PLL_PWR_CMD_MASK << Self::PLL_PWR_CMD_OFFSET))
            | ((val & Self::PLL_PWR_CMD_MASK) << Self::PLL_PWR_CMD_OFFSET);
    }

    pub const PHY_PWR_STATUS_OFFSET: usize = 4;
    pub const PHY_PWR_STATUS_WIDTH: usize = 2;
    pub const PHY_PWR_STATUS_MASK: u32 = 0x3;
    pub const PHY_PWR_STATUS: Field = Field::new("PHY_PWR_STATUS", Block::Wrapper, 0x40, 5, 4);

    /// PHY power state as reported by the power FSM
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn phy_pwr_status(&self) -> Result<phy_pwr_status::PhyPwrE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::PHY_PWR_STATUS_OFFSET) & Self::PHY_PWR_STATUS_MASK;
        phy_pwr_status::PhyPwrE::from_bits(val as u8)
    }

    /// PHY power state as reported by the power FSM
    #[inline(always)]
    pub fn set_phy_pwr_status(&mut self, val: phy_pwr_status::PhyPwrE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::PHY_PWR_STATUS_MASK << Self::PHY_PWR_STATUS_OFFSET))
            | ((val & Self::PHY_PWR_STATUS_MASK) << Self::PHY_PWR_STATUS_OFFSET);
    }

    pub const PHY_PWR_CMD_OFFSET: usize = 6;
    pub const PHY_PWR_CMD_WIDTH: usize = 2;
    pub const PHY_PWR_CMD_MASK: u32 = 0x3;
    pub const PHY_PWR_CMD: Field = Field::new("PHY_PWR_CMD", Block::Wrapper, 0x40, 7, 6);

    /// Requested PHY power state
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn phy_pwr_cmd(&self) -> Result<phy_pwr_cmd::PhyPwrE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::PHY_PWR_CMD_OFFSET) & Self::PHY_PWR_CMD_MASK;
        phy_pwr_cmd::PhyPwrE::from_bits(val as u8)
    }

    /// Requested PHY power state
    #[inline(always)]
    pub fn set_phy_pwr_cmd(&mut self, val: phy_pwr_cmd::PhyPwrE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::PHY_PWR_CMD_MASK << Self::PHY_PWR_CMD_OFFSET))
            | ((val & Self::PHY_PWR_CMD_MASK) << Self::PHY_PWR_CMD_OFFSET);
    }
}

impl core::fmt::Debug for PwrCtrlReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PwrCtrlReg")
            .field("pll_pwr_status", &self.pll_pwr_status())
            .field("pll_pwr_cmd", &self.pll_pwr_cmd())
            .field("phy_pwr_status", &self.phy_pwr_status())
            .field("phy_pwr_cmd", &self.phy_pwr_cmd())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let reg = PwrCtrlReg::default();
        assert_eq!(reg.pll_pwr_status(), Ok(pll_pwr_status::PllPwrE::AllOff));
        assert_eq!(reg.pll_pwr_cmd(), Ok(pll_pwr_cmd::PllPwrE::AllOff));
        assert_eq!(reg.phy_pwr_status(), Ok(phy_pwr_status::PhyPwrE::Off));
        assert_eq!(reg.phy_pwr_cmd(), Ok(phy_pwr_cmd::PhyPwrE::Off));
    }
}
