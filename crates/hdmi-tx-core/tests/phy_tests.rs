//! PHY bring-up against the mock bus.

mod common;

use common::{Access, MockHdmi, addr, driver};
use hdmi_registers::components::phy_regs::{
    digital_ctrl::DigitalCtrlReg, pad_cfg_ctrl::PadCfgCtrlReg, tx_ctrl::TxCtrlReg,
};
use hdmi_registers::components::wp_regs::pwr_ctrl::PwrCtrlReg;
use hdmi_registers::reg::Register;
use hdmi_tx_core::{HdmiError, PhyPwrE, WaitPoint};

#[test]
fn phy_init_sequence() {
    let mock = MockHdmi::new();
    mock.preload(addr::<TxCtrlReg>(), 0x0000_1234);
    mock.preload(addr::<DigitalCtrlReg>(), 0x0000_00FF);
    mock.preload(addr::<PadCfgCtrlReg>(), 0x0000_0003);
    let (mut tx, _) = driver(&mock);

    tx.phy_init().unwrap();

    // LDO on, then TX on (LDO status bits still set in the second write)
    assert_eq!(mock.writes_to(addr::<PwrCtrlReg>()), vec![0x40, 0x90]);
    let pwr = PwrCtrlReg::from_raw(mock.reg(addr::<PwrCtrlReg>()));
    assert_eq!(pwr.phy_pwr_status(), Ok(PhyPwrE::TxOn));

    assert_eq!(mock.reg(addr::<TxCtrlReg>()), 0x4000_1234);
    assert_eq!(mock.reg(addr::<DigitalCtrlReg>()), 0xF000_0000);
    assert_eq!(mock.reg(addr::<PadCfgCtrlReg>()), 0x0800_0003);

    // Dummy read then read-modify-write of TX_CTRL, after TX on.
    let log = mock.log();
    let tx_on = log
        .iter()
        .position(|a| *a == Access::Write(addr::<PwrCtrlReg>(), 0x90))
        .unwrap();
    let tx_reads: Vec<_> = log
        .iter()
        .enumerate()
        .filter(|(_, a)| **a == Access::Read(addr::<TxCtrlReg>()))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(tx_reads.len(), 2);
    assert!(tx_reads[0] > tx_on);
    // DIGITAL_CTRL is written whole, never read.
    assert_eq!(mock.read_count(addr::<DigitalCtrlReg>()), 0);
}

#[test]
fn phy_init_stops_when_ldo_does_not_confirm() {
    let mock = MockHdmi::new();
    mock.faults().phy_power_stuck = true;
    let (mut tx, _) = driver(&mock);

    let err = tx.phy_init().unwrap_err();
    assert!(matches!(err, HdmiError::Timeout(WaitPoint::PhyPower(PhyPwrE::LdoOn))));
    assert!(mock.writes_to(addr::<TxCtrlReg>()).is_empty());
    assert!(mock.writes_to(addr::<DigitalCtrlReg>()).is_empty());
}

#[test]
fn phy_off_powers_down() {
    let mock = MockHdmi::new();
    let (mut tx, _) = driver(&mock);

    tx.phy_init().unwrap();
    tx.phy_off().unwrap();
    let pwr = PwrCtrlReg::from_raw(mock.reg(addr::<PwrCtrlReg>()));
    assert_eq!(pwr.phy_pwr_status(), Ok(PhyPwrE::Off));
    assert_eq!(pwr.phy_pwr_cmd(), Ok(PhyPwrE::Off));
}
