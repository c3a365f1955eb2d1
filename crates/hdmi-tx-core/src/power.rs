//! PLL and PHY power-state sequencing through the wrapper PWR_CTRL register.

use hdmi_registers::components::phy_pwr_e::PhyPwrE;
use hdmi_registers::components::pll_pwr_e::PllPwrE;
use hdmi_registers::components::pll_regs::{pll_control::PllControlReg, pll_status::PllStatusReg};
use hdmi_registers::components::wp_regs::pwr_ctrl::PwrCtrlReg;
use hdmi_tx_hal::{DelayNs, RegisterBus};
use log::debug;

use crate::driver::HdmiTx;
use crate::error::{HdmiError, WaitPoint};

impl<R: RegisterBus, D: DelayNs> HdmiTx<R, D> {
    /// Command a PLL power state and wait for the status field to follow.
    pub fn set_pll_power(&mut self, state: PllPwrE) -> Result<(), HdmiError<R::Error>> {
        debug!("PLL power -> {state:?}");
        self.port.modify::<PwrCtrlReg>(|r| r.set_pll_pwr_cmd(state))?;
        self.wait_field(
            PwrCtrlReg::PLL_PWR_STATUS,
            u32::from(state.bits()),
            WaitPoint::PllPower(state),
        )
    }

    /// Command a PHY power state and wait for the status field to follow.
    pub fn set_phy_power(&mut self, state: PhyPwrE) -> Result<(), HdmiError<R::Error>> {
        debug!("PHY power -> {state:?}");
        self.port.modify::<PwrCtrlReg>(|r| r.set_phy_pwr_cmd(state))?;
        self.wait_field(
            PwrCtrlReg::PHY_PWR_STATUS,
            u32::from(state.bits()),
            WaitPoint::PhyPower(state),
        )
    }

    /// Hand PLL SYSRESET to the power FSM and wait for RESET_DONE.
    pub fn pll_reset(&mut self) -> Result<(), HdmiError<R::Error>> {
        self.port.modify::<PllControlReg>(|r| r.set_sysreset(false))?;
        self.wait_field(PllStatusReg::RESET_DONE, 1, WaitPoint::PllReset)
    }
}
