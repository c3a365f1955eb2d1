//! TX PHY line bring-up.

use hdmi_registers::components::phy_pwr_e::PhyPwrE;
use hdmi_registers::components::phy_regs::{
    digital_ctrl::DigitalCtrlReg, pad_cfg_ctrl::PadCfgCtrlReg, tx_ctrl::TxCtrlReg,
};
use hdmi_tx_hal::{DelayNs, RegisterBus};
use log::debug;

use crate::driver::HdmiTx;
use crate::error::HdmiError;

/// TX_CTRL.FREQOUT: bit clock taken from the high-frequency PLL output.
const FREQOUT_HFBITCLK: u8 = 0x1;
/// DIGITAL_CTRL.LINE_EN: TXVALID and TMDSCLKEN for all lanes.
const LINE_ENABLE_ALL: u8 = 0xF;

impl<R: RegisterBus, D: DelayNs> HdmiTx<R, D> {
    /// Power the PHY through LDO-on to TX-on and start the TMDS lines.
    pub fn phy_init(&mut self) -> Result<(), HdmiError<R::Error>> {
        self.set_phy_power(PhyPwrE::LdoOn)?;
        self.set_phy_power(PhyPwrE::TxOn)?;

        // The first access completes the PHY's internal reset.
        self.port.read::<TxCtrlReg>()?;

        self.port.try_modify::<TxCtrlReg>(|r| r.set_freqout(FREQOUT_HFBITCLK))?;

        let mut digital = DigitalCtrlReg::default();
        digital.set_line_en(LINE_ENABLE_ALL)?;
        self.port.write(digital)?;

        self.port.modify::<PadCfgCtrlReg>(|r| r.set_polarity(true))?;
        debug!("PHY up");
        Ok(())
    }

    /// Request PHY power OFF.
    pub fn phy_off(&mut self) -> Result<(), HdmiError<R::Error>> {
        self.set_phy_power(PhyPwrE::Off)
    }
}
