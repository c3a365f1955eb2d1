//! Control/Status Register crate for the HDMI transmitter IP
//!
//! One newtype per register, grouped into the five hardware blocks
//! (wrapper, PLL controller, TX PHY, core system, core audio/video).
#![no_std]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::identity_op)]
#![allow(clippy::inline_always)]
#![allow(clippy::unnecessary_cast)]

pub mod components;
pub mod encode;
pub mod reg;

pub use crate::components::core_av_regs::CoreAvRegs;
pub use crate::components::core_sys_regs::CoreSysRegs;
pub use crate::components::phy_regs::PhyRegs;
pub use crate::components::pll_regs::PllRegs;
pub use crate::components::wp_regs::WpRegs;
pub use crate::reg::{Block, Field, Register, RegisterArray, RegisterInfo};

/// Documented registers of every block, in diagnostic dump order.
pub const ALL_BLOCKS: [&[RegisterInfo]; 5] = [
    WpRegs::REGISTERS,
    CoreSysRegs::REGISTERS,
    CoreAvRegs::REGISTERS,
    PllRegs::REGISTERS,
    PhyRegs::REGISTERS,
];
