use hdmi_registers::components::{core_av_regs, core_sys_regs, phy_regs, pll_regs, wp_regs};
use hdmi_registers::reg::{Block, Field, Register, RegisterArray};
use hdmi_registers::{ALL_BLOCKS, CoreAvRegs, CoreSysRegs, PhyRegs, PllRegs, WpRegs};

fn fields_of<R: Register>() -> (&'static str, Block, u16, &'static [Field]) {
    (R::NAME, R::BLOCK, R::ADDRESS, R::FIELDS)
}

fn all_registers() -> Vec<(&'static str, Block, u16, &'static [Field])> {
    vec![
        fields_of::<wp_regs::pwr_ctrl::PwrCtrlReg>(),
        fields_of::<wp_regs::video_cfg::VideoCfgReg>(),
        fields_of::<wp_regs::video_size::VideoSizeReg>(),
        fields_of::<wp_regs::video_timing_h::VideoTimingHReg>(),
        fields_of::<wp_regs::video_timing_v::VideoTimingVReg>(),
        fields_of::<pll_regs::pll_control::PllControlReg>(),
        fields_of::<pll_regs::pll_status::PllStatusReg>(),
        fields_of::<pll_regs::pll_go::PllGoReg>(),
        fields_of::<pll_regs::cfg1::Cfg1Reg>(),
        fields_of::<pll_regs::cfg2::Cfg2Reg>(),
        fields_of::<pll_regs::cfg3::Cfg3Reg>(),
        fields_of::<pll_regs::cfg4::Cfg4Reg>(),
        fields_of::<phy_regs::tx_ctrl::TxCtrlReg>(),
        fields_of::<phy_regs::digital_ctrl::DigitalCtrlReg>(),
        fields_of::<phy_regs::pad_cfg_ctrl::PadCfgCtrlReg>(),
        fields_of::<core_sys_regs::srst::SrstReg>(),
        fields_of::<core_sys_regs::ctrl1::Ctrl1Reg>(),
        fields_of::<core_sys_regs::vid_acen::VidAcenReg>(),
        fields_of::<core_sys_regs::vid_mode::VidModeReg>(),
        fields_of::<core_sys_regs::tmds_ctrl::TmdsCtrlReg>(),
        fields_of::<core_sys_regs::ddc_addr::DdcAddrReg>(),
        fields_of::<core_sys_regs::ddc_segm::DdcSegmReg>(),
        fields_of::<core_sys_regs::ddc_offset::DdcOffsetReg>(),
        fields_of::<core_sys_regs::ddc_count1::DdcCount1Reg>(),
        fields_of::<core_sys_regs::ddc_count2::DdcCount2Reg>(),
        fields_of::<core_sys_regs::ddc_status::DdcStatusReg>(),
        fields_of::<core_sys_regs::ddc_cmd::DdcCmdReg>(),
        fields_of::<core_sys_regs::ddc_data::DdcDataReg>(),
        fields_of::<core_av_regs::hdmi_ctrl::HdmiCtrlReg>(),
        fields_of::<core_av_regs::dpd::DpdReg>(),
        fields_of::<core_av_regs::pb_ctrl1::PbCtrl1Reg>(),
        fields_of::<core_av_regs::pb_ctrl2::PbCtrl2Reg>(),
        fields_of::<core_av_regs::avi_type::AviTypeReg>(),
        fields_of::<core_av_regs::avi_vers::AviVersReg>(),
        fields_of::<core_av_regs::avi_len::AviLenReg>(),
        fields_of::<core_av_regs::avi_chsum::AviChsumReg>(),
        fields_of::<core_av_regs::avi_dbyte::AviDbyteReg>(),
    ]
}

/// Silicon offsets of the registers the driver programs
#[test]
fn test_register_addresses() {
    use core_av_regs::avi_dbyte::AviDbyteReg;

    assert_eq!(wp_regs::pwr_ctrl::PwrCtrlReg::ADDRESS, 0x40);
    assert_eq!(wp_regs::video_cfg::VideoCfgReg::ADDRESS, 0x50);
    assert_eq!(wp_regs::video_size::VideoSizeReg::ADDRESS, 0x60);
    assert_eq!(wp_regs::video_timing_h::VideoTimingHReg::ADDRESS, 0x68);
    assert_eq!(wp_regs::video_timing_v::VideoTimingVReg::ADDRESS, 0x6C);
    assert_eq!(pll_regs::cfg4::Cfg4Reg::ADDRESS, 0x20);
    assert_eq!(phy_regs::pad_cfg_ctrl::PadCfgCtrlReg::ADDRESS, 0x0C);
    assert_eq!(core_sys_regs::tmds_ctrl::TmdsCtrlReg::ADDRESS, 0x208);
    assert_eq!(core_sys_regs::ddc_data::DdcDataReg::ADDRESS, 0x3D0);
    assert_eq!(core_av_regs::hdmi_ctrl::HdmiCtrlReg::ADDRESS, 0xBC);
    assert_eq!(AviDbyteReg::address_of(0), Some(0x110));
    assert_eq!(AviDbyteReg::address_of(12), Some(0x140));
    assert_eq!(AviDbyteReg::address_of(AviDbyteReg::COUNT), None);
}

#[test]
fn test_fields_do_not_overlap() {
    for (name, block, address, fields) in all_registers() {
        for (i, a) in fields.iter().enumerate() {
            assert_eq!(a.block, block, "{name}.{} in wrong block", a.name);
            assert_eq!(a.address, address, "{name}.{} at wrong address", a.name);
            for b in &fields[i + 1..] {
                assert!(!a.overlaps(b), "{name}: {} overlaps {}", a.name, b.name);
            }
        }
    }
}

#[test]
fn test_registers_fit_their_block() {
    let sizes = [
        (Block::Wrapper, WpRegs::SIZE),
        (Block::Pll, PllRegs::SIZE),
        (Block::Phy, PhyRegs::SIZE),
        (Block::CoreSys, CoreSysRegs::SIZE),
        (Block::CoreAv, CoreAvRegs::SIZE),
    ];
    for (name, block, address, _) in all_registers() {
        let (_, size) = sizes.iter().find(|(b, _)| *b == block).unwrap();
        assert!((address as usize) + 4 <= *size, "{name} outside {}", block.name());
        assert_eq!(address % 4, 0, "{name} not word aligned");
    }
}

#[test]
fn test_dump_tables() {
    let expected = [
        Block::Wrapper,
        Block::CoreSys,
        Block::CoreAv,
        Block::Pll,
        Block::Phy,
    ];
    for (table, block) in ALL_BLOCKS.iter().zip(expected) {
        assert!(!table.is_empty());
        for (i, info) in table.iter().enumerate() {
            assert_eq!(info.block, block, "{} listed under {}", info.name, block.name());
            assert_eq!(info.address % 4, 0);
            assert!(
                table[i + 1..].iter().all(|o| o.address != info.address),
                "{} dumped twice",
                info.name
            );
        }
    }
    assert!(
        WpRegs::REGISTERS
            .iter()
            .any(|r| r.name == "HDMI_WP_PWR_CTRL" && r.address == 0x40)
    );
    assert!(
        PllRegs::REGISTERS
            .iter()
            .any(|r| r.name == "PLLCTRL_CFG4" && r.address == 0x20)
    );
}
