//! Register dump against the mock bus.

mod common;

use common::{MockHdmi, driver, raw_addr};
use hdmi_registers::reg::Block;
use hdmi_registers::ALL_BLOCKS;

#[test]
fn dump_covers_every_block_in_order() {
    let mock = MockHdmi::new();
    mock.preload(raw_addr(Block::Wrapper, 0x40), 0x0000_00A8);
    mock.preload(raw_addr(Block::Phy, 0x04), 0xF000_0000);
    let (mut tx, _) = driver(&mock);

    let mut seen = Vec::new();
    tx.dump_registers(|info, value| seen.push((info.name, info.block, value)))
        .unwrap();

    let expected: usize = ALL_BLOCKS.iter().map(|b| b.len()).sum();
    assert_eq!(seen.len(), expected);
    assert_eq!(seen[0].0, "HDMI_WP_REVISION");

    let blocks: Vec<Block> = seen.iter().map(|(_, b, _)| *b).collect();
    let first = |b| blocks.iter().position(|x| *x == b).unwrap();
    let last = |b| blocks.iter().rposition(|x| *x == b).unwrap();
    assert_eq!(last(Block::Wrapper) + 1, first(Block::CoreSys));
    assert_eq!(last(Block::CoreSys) + 1, first(Block::CoreAv));
    assert_eq!(last(Block::CoreAv) + 1, first(Block::Pll));
    assert_eq!(last(Block::Pll) + 1, first(Block::Phy));

    assert!(seen.contains(&("HDMI_WP_PWR_CTRL", Block::Wrapper, 0xA8)));
    assert!(seen.contains(&("HDMI_TXPHY_DIGITAL_CTRL", Block::Phy, 0xF000_0000)));
}

#[test]
fn dump_is_read_only() {
    let mock = MockHdmi::new();
    let (mut tx, _) = driver(&mock);

    tx.dump_registers(|_, _| {}).unwrap();
    assert_eq!(mock.write_count(), 0);
}
