//! Addrmap: PllRegs

use crate::reg::{Block, RegisterInfo};

/// Named types defined within this component's body
pub mod named_types {
    pub mod cfg1_reg;
    pub mod cfg2_reg;
    pub mod cfg3_reg;
    pub mod cfg4_reg;
    pub mod pll_control_reg;
    pub mod pll_go_reg;
    pub mod pll_status_reg;
}

// Instances of named component types
pub use crate::components::pll_regs::named_types::cfg1_reg as cfg1;
pub use crate::components::pll_regs::named_types::cfg2_reg as cfg2;
pub use crate::components::pll_regs::named_types::cfg3_reg as cfg3;
pub use crate::components::pll_regs::named_types::cfg4_reg as cfg4;
pub use crate::components::pll_regs::named_types::pll_control_reg as pll_control;
pub use crate::components::pll_regs::named_types::pll_go_reg as pll_go;
pub use crate::components::pll_regs::named_types::pll_status_reg as pll_status;

/// PLL controller register block
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PllRegs;

impl PllRegs {
    /// Size in bytes of the block's address window
    pub const SIZE: usize = 0x40;

    /// Which block this address map describes
    pub const BLOCK: Block = Block::Pll;

    /// Every documented register in the block, in diagnostic dump order
    pub const REGISTERS: &'static [RegisterInfo] = &[
        RegisterInfo::new("PLLCTRL_PLL_CONTROL", Block::Pll, 0x0),
        RegisterInfo::new("PLLCTRL_PLL_STATUS", Block::Pll, 0x4),
        RegisterInfo::new("PLLCTRL_PLL_GO", Block::Pll, 0x8),
        RegisterInfo::new("PLLCTRL_CFG1", Block::Pll, 0xC),
        RegisterInfo::new("PLLCTRL_CFG2", Block::Pll, 0x10),
        RegisterInfo::new("PLLCTRL_CFG3", Block::Pll, 0x14),
        RegisterInfo::new("PLLCTRL_CFG4", Block::Pll, 0x20),
    ];
}
