//! Basic configuration pass and full bring-up against the mock bus.

mod common;

use common::{MockHdmi, addr, driver};
use hdmi_registers::components::core_av_regs::{
    avi_chsum::AviChsumReg, avi_dbyte::AviDbyteReg, avi_len::AviLenReg, avi_type::AviTypeReg,
    avi_vers::AviVersReg, hdmi_ctrl::HdmiCtrlReg, pb_ctrl1::PbCtrl1Reg, pb_ctrl2::PbCtrl2Reg,
};
use hdmi_registers::components::core_sys_regs::{
    ctrl1::Ctrl1Reg, srst::SrstReg, tmds_ctrl::TmdsCtrlReg, vid_acen::VidAcenReg,
    vid_mode::VidModeReg,
};
use hdmi_registers::components::wp_regs::{
    pwr_ctrl::PwrCtrlReg, video_cfg::VideoCfgReg, video_size::VideoSizeReg,
    video_timing_h::VideoTimingHReg, video_timing_v::VideoTimingVReg,
};
use hdmi_registers::reg::{Register, RegisterArray};
use hdmi_tx_core::{
    ConfigureFault, ConfigureStep, DeepColorMode, DisplayTiming, HdmiDviMode, HdmiError,
    OutputConfig, PhyPwrE, PllPwrE, PllSettings,
};

fn dbyte(n: usize) -> u32 {
    let base = addr::<AviDbyteReg>() - u32::from(AviDbyteReg::ADDRESS);
    base + u32::from(AviDbyteReg::address_of(n).unwrap())
}

fn svga_hdmi(video_code: u8) -> OutputConfig {
    OutputConfig {
        timing: DisplayTiming::VESA_800X600_60,
        mode: HdmiDviMode::Hdmi,
        video_code,
        deep_color: DeepColorMode::Bits24,
    }
}

#[test]
fn vesa_800x600_hdmi_end_to_end() {
    let mock = MockHdmi::new();
    let (mut tx, _) = driver(&mock);

    tx.basic_configure(&svga_hdmi(9)).unwrap();

    assert_eq!(
        mock.reg(addr::<VideoTimingHReg>()),
        (88 << 20) | (40 << 8) | 128
    );
    assert_eq!(mock.reg(addr::<VideoTimingVReg>()), (23 << 20) | (1 << 8) | 4);
    assert_eq!(mock.reg(addr::<VideoSizeReg>()), (600 << 16) | 800);
    // packing 24b, VSYNC/HSYNC high, progressive, master 24-bit
    assert_eq!(mock.reg(addr::<VideoCfgReg>()), 0x1C1);

    assert_eq!(mock.writes_to(addr::<SrstReg>()), vec![0x1, 0x0]);
    assert_eq!(mock.writes_to(addr::<Ctrl1Reg>()), vec![0x00, 0x36]);
    assert_eq!(mock.reg(addr::<VidAcenReg>()), 0);
    assert_eq!(mock.reg(addr::<VidModeReg>()), 0);
    assert_eq!(mock.reg(addr::<HdmiCtrlReg>()), 0x21);
    assert_eq!(mock.reg(addr::<TmdsCtrlReg>()), 0x20);

    assert_eq!(mock.reg(addr::<AviTypeReg>()), 0x82);
    assert_eq!(mock.reg(addr::<AviVersReg>()), 0x02);
    assert_eq!(mock.reg(addr::<AviLenReg>()), 0x0D);
    // RGB, no active format info
    assert_eq!(mock.reg(dbyte(0)), 0x00);
    assert_eq!(mock.reg(dbyte(1)), 0x08);
    assert_eq!(mock.reg(dbyte(3)), 9);
    let sum = (0..13)
        .map(|n| mock.reg(dbyte(n)))
        .chain([0x82, 0x02, 0x0D, mock.reg(addr::<AviChsumReg>())])
        .sum::<u32>();
    assert_eq!(sum % 256, 0);

    assert_eq!(mock.reg(addr::<PbCtrl1Reg>()), 0x33);
    assert_eq!(mock.reg(addr::<PbCtrl2Reg>()), 0x00);
}

#[test]
fn core_programmed_inside_reset() {
    let mock = MockHdmi::new();
    let (mut tx, _) = driver(&mock);

    tx.basic_configure(&svga_hdmi(9)).unwrap();

    let timing = mock.first_write(addr::<VideoTimingHReg>(), |_| true).unwrap();
    let assert_at = mock.first_write(addr::<SrstReg>(), |v| v & 1 == 1).unwrap();
    let pd_off = mock.first_write(addr::<Ctrl1Reg>(), |v| v & 1 == 0).unwrap();
    let hdmi_ctrl = mock.first_write(addr::<HdmiCtrlReg>(), |_| true).unwrap();
    let tmds = mock.first_write(addr::<TmdsCtrlReg>(), |_| true).unwrap();
    let release = mock.first_write(addr::<SrstReg>(), |v| v & 1 == 0).unwrap();
    let avi = mock.first_write(addr::<AviTypeReg>(), |_| true).unwrap();
    let repeat = mock.first_write(addr::<PbCtrl1Reg>(), |_| true).unwrap();

    assert!(timing < assert_at);
    assert!(assert_at < pd_off);
    assert!(pd_off < hdmi_ctrl);
    assert!(hdmi_ctrl < tmds);
    assert!(tmds < release);
    assert!(release < avi);
    assert!(avi < repeat);
}

#[test]
fn deep_color_36_dvi() {
    let mock = MockHdmi::new();
    let (mut tx, _) = driver(&mock);
    let request = OutputConfig {
        mode: HdmiDviMode::Dvi,
        deep_color: DeepColorMode::Bits36,
        ..svga_hdmi(0)
    };

    tx.basic_configure(&request).unwrap();

    assert_eq!(mock.reg(addr::<VidAcenReg>()), 0x80);
    assert_eq!(mock.reg(addr::<VidModeReg>()), 0x80);
    // Deep colour packet on, packet mode forced to 24 bpp, DVI
    assert_eq!(mock.reg(addr::<HdmiCtrlReg>()), 0x60);
}

#[test]
fn preserves_unrelated_bits() {
    let mock = MockHdmi::new();
    mock.preload(addr::<Ctrl1Reg>(), 0x0000_0109);
    mock.preload(addr::<VideoCfgReg>(), 0x0001_0000);
    let (mut tx, _) = driver(&mock);

    tx.basic_configure(&svga_hdmi(9)).unwrap();

    assert_eq!(mock.reg(addr::<Ctrl1Reg>()), 0x0000_013E);
    assert_eq!(mock.reg(addr::<VideoCfgReg>()), 0x0001_01C1);
}

#[test]
fn invalid_request_writes_nothing() {
    let mock = MockHdmi::new();
    let (mut tx, _) = driver(&mock);

    let mut request = svga_hdmi(9);
    request.timing.hsync_len = 300;
    let err = tx.basic_configure(&request).unwrap_err();
    assert!(matches!(err, HdmiError::Field(f) if f.field == "HSW"));

    let mut request = svga_hdmi(9);
    request.timing.vsync_len = 300;
    let err = tx.basic_configure(&request).unwrap_err();
    assert!(matches!(err, HdmiError::Field(ref f) if f.field == "VSW"));
    assert!(err.is_caller_error());
    assert_eq!(mock.write_count(), 0);
}

#[test]
fn extended_video_code_reaches_the_avi_frame() {
    let mock = MockHdmi::new();
    let (mut tx, _) = driver(&mock);

    tx.basic_configure(&svga_hdmi(200)).unwrap();

    assert_eq!(mock.reg(dbyte(3)), 200);
    let sum = (0..13)
        .map(|n| mock.reg(dbyte(n)))
        .chain([0x82, 0x02, 0x0D, mock.reg(addr::<AviChsumReg>())])
        .sum::<u32>();
    assert_eq!(sum % 256, 0);
}

#[test]
fn bus_failure_names_step_and_leaves_core_in_reset() {
    let mock = MockHdmi::new();
    mock.faults().fail_write_to = Some(addr::<HdmiCtrlReg>());
    let (mut tx, _) = driver(&mock);

    let err = tx.basic_configure(&svga_hdmi(9)).unwrap_err();
    match &err {
        HdmiError::Configure {
            step: ConfigureStep::CoreVideo,
            cause: ConfigureFault::Bus(common::MockError(a)),
        } => assert_eq!(*a, addr::<HdmiCtrlReg>()),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.is_io_fault());
    assert_eq!(mock.reg(addr::<SrstReg>()), 1);
    assert!(mock.writes_to(addr::<AviTypeReg>()).is_empty());

    // Retry from the top once the bus recovers.
    mock.faults().fail_write_to = None;
    tx.basic_configure(&svga_hdmi(9)).unwrap();
    assert_eq!(mock.reg(addr::<SrstReg>()), 0);
    assert_eq!(mock.reg(addr::<HdmiCtrlReg>()), 0x21);
}

#[test]
fn video_start_toggles_enable_only() {
    let mock = MockHdmi::new();
    mock.preload(addr::<VideoCfgReg>(), 0x1C1);
    let (mut tx, _) = driver(&mock);

    tx.video_start(true).unwrap();
    assert_eq!(mock.reg(addr::<VideoCfgReg>()), 0x8000_01C1);
    tx.video_start(false).unwrap();
    assert_eq!(mock.reg(addr::<VideoCfgReg>()), 0x1C1);
}

#[test]
fn bring_up_runs_every_stage() {
    let mock = MockHdmi::new();
    let (mut tx, _) = driver(&mock);
    let pll = PllSettings::compute(38_400, 40_000, 15, 1).unwrap();

    tx.bring_up(&pll, &svga_hdmi(0)).unwrap();

    let pwr = PwrCtrlReg::from_raw(mock.reg(addr::<PwrCtrlReg>()));
    assert_eq!(pwr.pll_pwr_status(), Ok(PllPwrE::BothOnAllClocks));
    assert_eq!(pwr.phy_pwr_status(), Ok(PhyPwrE::TxOn));
    assert_eq!(mock.reg(addr::<VideoCfgReg>()) >> 31, 1);
    assert_eq!(mock.reg(addr::<SrstReg>()), 0);
}

#[test]
fn bring_up_stops_at_pll() {
    let mock = MockHdmi::new();
    mock.faults().no_lock = true;
    let (mut tx, _) = driver(&mock);
    let pll = PllSettings::compute(38_400, 40_000, 15, 1).unwrap();

    let err = tx.bring_up(&pll, &svga_hdmi(0)).unwrap_err();
    assert!(matches!(err, HdmiError::PllLock { .. }));
    assert!(
        mock.writes_to(addr::<PwrCtrlReg>())
            .iter()
            .all(|v| v & 0xC0 == 0)
    );
    assert!(mock.writes_to(addr::<VideoCfgReg>()).is_empty());
}
