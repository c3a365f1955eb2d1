//! EDID block reads against the mock DDC master.

mod common;

use common::{MockHdmi, addr, dpd_addr, driver, edid_image, fix_checksum};
use hdmi_registers::components::core_sys_regs::{
    ddc_addr::DdcAddrReg, ddc_cmd::DdcCmdReg, ddc_count1::DdcCount1Reg,
    ddc_count2::DdcCount2Reg, ddc_offset::DdcOffsetReg, ddc_segm::DdcSegmReg,
};
use hdmi_tx_core::{HdmiError, WaitPoint};

#[test]
fn base_block_only() {
    let image = edid_image(0, 0);
    let mock = MockHdmi::with_edid(image.clone());
    let (mut tx, delay) = driver(&mock);
    let mut buf = [0u8; 256];

    assert_eq!(tx.read_edid(&mut buf).unwrap(), 128);
    assert_eq!(&buf[..128], &image[..]);
    assert!(buf[128..].iter().all(|b| *b == 0));

    assert_eq!(mock.writes_to(addr::<DdcCmdReg>()), vec![0xA, 0x9, 0x2]);
    assert_eq!(mock.reg(addr::<DdcAddrReg>()), 0xA0);
    assert_eq!(mock.reg(addr::<DdcCount1Reg>()), 0x80);
    assert_eq!(mock.reg(addr::<DdcCount2Reg>()), 0);
    assert_eq!(mock.reg(dpd_addr()) & 0x7, 0x7);
    assert!(delay.total_us() >= 1_000);
}

#[test]
fn one_extension() {
    let image = edid_image(1, 1);
    let mock = MockHdmi::with_edid(image.clone());
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 256];

    assert_eq!(tx.read_edid(&mut buf).unwrap(), 256);
    assert_eq!(&buf[..], &image[..]);
    // Extension reads skip the SCL clocking and FIFO clear.
    assert_eq!(mock.writes_to(addr::<DdcCmdReg>()), vec![0xA, 0x9, 0x2, 0x4]);
    assert_eq!(mock.writes_to(addr::<DdcOffsetReg>()), vec![0x00, 0x80]);
    assert_eq!(mock.writes_to(addr::<DdcSegmReg>()), vec![0, 0]);
}

#[test]
fn extension_count_clamped_to_buffer() {
    let image = edid_image(3, 3);
    let mock = MockHdmi::with_edid(image.clone());
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 256];

    assert_eq!(tx.read_edid(&mut buf).unwrap(), 256);
    assert_eq!(&buf[..], &image[..256]);
    let ext_reads = mock
        .writes_to(addr::<DdcCmdReg>())
        .iter()
        .filter(|c| **c == 0x4)
        .count();
    assert_eq!(ext_reads, 1);
}

#[test]
fn second_extension_uses_next_segment() {
    let image = edid_image(2, 2);
    let mock = MockHdmi::with_edid(image.clone());
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 384];

    assert_eq!(tx.read_edid(&mut buf).unwrap(), 384);
    assert_eq!(&buf[..], &image[..]);
    assert_eq!(mock.writes_to(addr::<DdcSegmReg>()), vec![0, 0, 1]);
    assert_eq!(mock.writes_to(addr::<DdcOffsetReg>()), vec![0x00, 0x80, 0x00]);
}

#[test]
fn bad_base_checksum() {
    let mut image = edid_image(0, 0);
    image[20] ^= 0x01;
    let mock = MockHdmi::with_edid(image);
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 128];

    let err = tx.read_edid(&mut buf).unwrap_err();
    assert!(matches!(err, HdmiError::EdidChecksum { block: 0, sum: 0x01 }));
    assert!(err.is_io_fault());
}

#[test]
fn bad_extension_checksum_is_checked_on_that_block() {
    let mut image = edid_image(1, 1);
    image[128 + 5] = 0x55;
    let mock = MockHdmi::with_edid(image.clone());
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 256];

    let err = tx.read_edid(&mut buf).unwrap_err();
    assert!(matches!(err, HdmiError::EdidChecksum { block: 1, .. }));
    assert_eq!(&buf[..128], &image[..128]);

    // A valid extension after a corrupted one in a longer image is never read.
    let mut image = edid_image(2, 2);
    image[128 + 5] = 0x55;
    fix_checksum(&mut image[256..384]);
    let mock = MockHdmi::with_edid(image);
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 384];
    assert!(tx.read_edid(&mut buf).is_err());
    assert_eq!(mock.writes_to(addr::<DdcSegmReg>()), vec![0, 0]);
}

#[test]
fn no_ack() {
    let mock = MockHdmi::with_edid(edid_image(0, 0));
    mock.faults().ddc_no_ack = true;
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 128];

    let err = tx.read_edid(&mut buf).unwrap_err();
    assert!(matches!(err, HdmiError::DdcNoAck));
    assert!(err.is_io_fault());
}

#[test]
fn bus_low_wins_over_no_ack() {
    let mock = MockHdmi::with_edid(edid_image(0, 0));
    mock.faults().ddc_no_ack = true;
    mock.faults().ddc_bus_low = true;
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 128];

    assert!(matches!(
        tx.read_edid(&mut buf).unwrap_err(),
        HdmiError::DdcBusLow
    ));
}

#[test]
fn buffer_smaller_than_a_block() {
    let mock = MockHdmi::with_edid(edid_image(0, 0));
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 127];

    let err = tx.read_edid(&mut buf).unwrap_err();
    assert!(matches!(err, HdmiError::BufferTooSmall { len: 127 }));
    assert!(mock.log().is_empty());

    let mut buf = [0u8; 128];
    let err = tx.read_edid_block(&mut buf, 1).unwrap_err();
    assert!(matches!(err, HdmiError::BufferTooSmall { len: 128 }));
}

#[test]
fn ddc_never_idle() {
    let mock = MockHdmi::with_edid(edid_image(0, 0));
    mock.faults().ddc_busy = true;
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 128];

    let err = tx.read_edid(&mut buf).unwrap_err();
    assert!(matches!(err, HdmiError::Timeout(WaitPoint::DdcIdle)));
}

#[test]
fn fifo_drain_is_bounded() {
    let mock = MockHdmi::with_edid(edid_image(0, 0));
    mock.faults().ddc_stall = true;
    let delay = common::MockDelay::default();
    let mut config = hdmi_tx_core::DriverConfig::default();
    config.ddc.drain_max_polls = 500;
    let mut tx = hdmi_tx_core::HdmiTx::new(mock.clone(), delay, config);
    let mut buf = [0u8; 128];

    let err = tx.read_edid(&mut buf).unwrap_err();
    assert!(matches!(err, HdmiError::Timeout(WaitPoint::DdcFifoDrain)));
}

#[test]
fn empty_transfer_is_not_a_block() {
    // Sink acks but sends nothing; a zeroed buffer would pass the checksum.
    let mock = MockHdmi::with_edid(Vec::new());
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 256];

    let err = tx.read_edid(&mut buf).unwrap_err();
    assert!(matches!(err, HdmiError::EdidShortRead { block: 0, read: 0 }));
    assert!(err.is_io_fault());
}

#[test]
fn partial_transfer_is_rejected() {
    let mut image = edid_image(0, 0);
    image.truncate(100);
    let mock = MockHdmi::with_edid(image);
    let (mut tx, _) = driver(&mock);
    let mut buf = [0u8; 128];

    let err = tx.read_edid(&mut buf).unwrap_err();
    assert!(matches!(err, HdmiError::EdidShortRead { block: 0, read: 100 }));
}
