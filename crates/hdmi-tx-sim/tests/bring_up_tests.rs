//! Full sequences against the register model, healthy and with each fault.

use hdmi_registers::components::wp_regs::{pwr_ctrl::PwrCtrlReg, video_cfg::VideoCfgReg};
use hdmi_tx_core::edid::EDID_BLOCK_SIZE;
use hdmi_tx_core::{
    DeepColorMode, DisplayTiming, DriverConfig, HdmiDviMode, HdmiError, HdmiTx, OutputConfig,
    PhyPwrE, PllPwrE, PllSettings, WaitPoint,
};
use hdmi_tx_hal::DelayNs;
use hdmi_tx_sim::{EdidBuilder, Fault, SimulatedTransmitter};

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn transmitter(fault: Option<Fault>) -> (HdmiTx<SimulatedTransmitter, NoDelay>, Vec<u8>) {
    let image = EdidBuilder::new()
        .preferred(DisplayTiming::CEA_1280X720_60)
        .extensions(2)
        .build();
    let mut sim = SimulatedTransmitter::new(DriverConfig::default().layout, image.clone());
    if let Some(fault) = fault {
        sim = sim.with_fault(fault);
    }
    (HdmiTx::new(sim, NoDelay, DriverConfig::default()), image)
}

fn hd720() -> (PllSettings, OutputConfig) {
    let timing = DisplayTiming::CEA_1280X720_60;
    let pll = PllSettings::compute(38_400, timing.pixel_clock_khz, 15, 1).unwrap();
    let request = OutputConfig {
        timing,
        mode: HdmiDviMode::Hdmi,
        video_code: 4,
        deep_color: DeepColorMode::Bits24,
    };
    (pll, request)
}

#[test]
fn healthy_bring_up_and_edid() {
    let (mut tx, image) = transmitter(None);
    let (pll, request) = hd720();

    let mut buf = vec![0u8; 4 * EDID_BLOCK_SIZE];
    assert_eq!(tx.read_edid(&mut buf).unwrap(), 3 * EDID_BLOCK_SIZE);
    assert_eq!(&buf[..image.len()], &image[..]);

    tx.bring_up(&pll, &request).unwrap();
    let (sim, _) = tx.release();
    let pwr = sim.peek::<PwrCtrlReg>();
    assert_eq!(pwr.pll_pwr_status(), Ok(PllPwrE::BothOnAllClocks));
    assert_eq!(pwr.phy_pwr_status(), Ok(PhyPwrE::TxOn));
    assert!(sim.peek::<VideoCfgReg>().enable());
}

#[test]
fn pll_never_locks() {
    let (mut tx, _) = transmitter(Some(Fault::PllLock));
    let (pll, request) = hd720();

    let err = tx.bring_up(&pll, &request).unwrap_err();
    assert!(err.is_timeout());
    match err {
        HdmiError::PllLock { cfg1, .. } => assert_eq!(cfg1 >> 9 & 0xFFF, u32::from(pll.regm)),
        other => panic!("unexpected error {other:?}"),
    }
    let (sim, _) = tx.release();
    assert_eq!(sim.peek::<PwrCtrlReg>().phy_pwr_status(), Ok(PhyPwrE::Off));
}

#[test]
fn phy_power_stuck() {
    let (mut tx, _) = transmitter(Some(Fault::PhyPower));
    let (pll, request) = hd720();

    let err = tx.bring_up(&pll, &request).unwrap_err();
    assert!(matches!(
        err,
        HdmiError::Timeout(WaitPoint::PhyPower(PhyPwrE::LdoOn))
    ));
}

#[test]
fn sink_does_not_ack() {
    let (mut tx, _) = transmitter(Some(Fault::DdcNack));
    let mut buf = [0u8; EDID_BLOCK_SIZE];

    let err = tx.read_edid(&mut buf).unwrap_err();
    assert!(matches!(err, HdmiError::DdcNoAck));
    assert!(err.is_io_fault());
}

#[test]
fn corrupt_base_block() {
    let (mut tx, _) = transmitter(Some(Fault::BadChecksum));
    let mut buf = [0u8; 3 * EDID_BLOCK_SIZE];

    let err = tx.read_edid(&mut buf).unwrap_err();
    assert!(matches!(err, HdmiError::EdidChecksum { block: 0, .. }));
}
