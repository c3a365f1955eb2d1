//! Addrmap: WpRegs

use crate::reg::{Block, RegisterInfo};

/// Named types defined within this component's body
pub mod named_types {
    pub mod pwr_ctrl_reg;
    pub mod video_cfg_reg;
    pub mod video_size_reg;
    pub mod video_timing_h_reg;
    pub mod video_timing_v_reg;
}

// Instances of named component types
pub use crate::components::wp_regs::named_types::pwr_ctrl_reg as pwr_ctrl;
pub use crate::components::wp_regs::named_types::video_cfg_reg as video_cfg;
pub use crate::components::wp_regs::named_types::video_size_reg as video_size;
pub use crate::components::wp_regs::named_types::video_timing_h_reg as video_timing_h;
pub use crate::components::wp_regs::named_types::video_timing_v_reg as video_timing_v;

/// Wrapper register block: power control, video timing and output stage
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct WpRegs;

impl WpRegs {
    /// Size in bytes of the block's address window
    pub const SIZE: usize = 0x100;

    /// Which block this address map describes
    pub const BLOCK: Block = Block::Wrapper;

    /// Every documented register in the block, in diagnostic dump order
    pub const REGISTERS: &'static [RegisterInfo] = &[
        RegisterInfo::new("HDMI_WP_REVISION", Block::Wrapper, 0x0),
        RegisterInfo::new("HDMI_WP_SYSCONFIG", Block::Wrapper, 0x10),
        RegisterInfo::new("HDMI_WP_IRQSTATUS_RAW", Block::Wrapper, 0x24),
        RegisterInfo::new("HDMI_WP_IRQSTATUS", Block::Wrapper, 0x28),
        RegisterInfo::new("HDMI_WP_PWR_CTRL", Block::Wrapper, 0x40),
        RegisterInfo::new("HDMI_WP_IRQENABLE_SET", Block::Wrapper, 0x2C),
        RegisterInfo::new("HDMI_WP_VIDEO_SIZE", Block::Wrapper, 0x60),
        RegisterInfo::new("HDMI_WP_VIDEO_TIMING_H", Block::Wrapper, 0x68),
        RegisterInfo::new("HDMI_WP_VIDEO_TIMING_V", Block::Wrapper, 0x6C),
        RegisterInfo::new("HDMI_WP_WP_CLK", Block::Wrapper, 0x70),
    ];
}
