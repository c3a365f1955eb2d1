//! Addrmap: PhyRegs

use crate::reg::{Block, RegisterInfo};

/// Named types defined within this component's body
pub mod named_types {
    pub mod digital_ctrl_reg;
    pub mod pad_cfg_ctrl_reg;
    pub mod tx_ctrl_reg;
}

// Instances of named component types
pub use crate::components::phy_regs::named_types::digital_ctrl_reg as digital_ctrl;
pub use crate::components::phy_regs::named_types::pad_cfg_ctrl_reg as pad_cfg_ctrl;
pub use crate::components::phy_regs::named_types::tx_ctrl_reg as tx_ctrl;

/// Transmitter PHY register block
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PhyRegs;

impl PhyRegs {
    /// Size in bytes of the block's address window
    pub const SIZE: usize = 0x40;

    /// Which block this address map describes
    pub const BLOCK: Block = Block::Phy;

    /// Every documented register in the block, in diagnostic dump order
    pub const REGISTERS: &'static [RegisterInfo] = &[
        RegisterInfo::new("HDMI_TXPHY_TX_CTRL", Block::Phy, 0x0),
        RegisterInfo::new("HDMI_TXPHY_DIGITAL_CTRL", Block::Phy, 0x4),
        RegisterInfo::new("HDMI_TXPHY_POWER_CTRL", Block::Phy, 0x8),
        RegisterInfo::new("HDMI_TXPHY_PAD_CFG_CTRL", Block::Phy, 0xC),
    ];
}
