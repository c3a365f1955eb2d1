//! Addrmap: CoreSysRegs

use crate::reg::{Block, RegisterInfo};

/// Named types defined within this component's body
pub mod named_types {
    pub mod ctrl1_reg;
    pub mod ddc_addr_reg;
    pub mod ddc_cmd_reg;
    pub mod ddc_count1_reg;
    pub mod ddc_count2_reg;
    pub mod ddc_data_reg;
    pub mod ddc_offset_reg;
    pub mod ddc_segm_reg;
    pub mod ddc_status_reg;
    pub mod srst_reg;
    pub mod tmds_ctrl_reg;
    pub mod vid_acen_reg;
    pub mod vid_mode_reg;
}

// Instances of named component types
pub use crate::components::core_sys_regs::named_types::ctrl1_reg as ctrl1;
pub use crate::components::core_sys_regs::named_types::ddc_addr_reg as ddc_addr;
pub use crate::components::core_sys_regs::named_types::ddc_cmd_reg as ddc_cmd;
pub use crate::components::core_sys_regs::named_types::ddc_count1_reg as ddc_count1;
pub use crate::components::core_sys_regs::named_types::ddc_count2_reg as ddc_count2;
pub use crate::components::core_sys_regs::named_types::ddc_data_reg as ddc_data;
pub use crate::components::core_sys_regs::named_types::ddc_offset_reg as ddc_offset;
pub use crate::components::core_sys_regs::named_types::ddc_segm_reg as ddc_segm;
pub use crate::components::core_sys_regs::named_types::ddc_status_reg as ddc_status;
pub use crate::components::core_sys_regs::named_types::srst_reg as srst;
pub use crate::components::core_sys_regs::named_types::tmds_ctrl_reg as tmds_ctrl;
pub use crate::components::core_sys_regs::named_types::vid_acen_reg as vid_acen;
pub use crate::components::core_sys_regs::named_types::vid_mode_reg as vid_mode;

/// Core system register block: reset, video input path and DDC master
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CoreSysRegs;

impl CoreSysRegs {
    /// Size in bytes of the block's address window
    pub const SIZE: usize = 0x400;

    /// Which block this address map describes
    pub const BLOCK: Block = Block::CoreSys;

    /// Every documented register in the block, in diagnostic dump order
    pub const REGISTERS: &'static [RegisterInfo] = &[
        RegisterInfo::new("HDMI_CORE_SYS_VND_IDL", Block::CoreSys, 0x0),
        RegisterInfo::new("HDMI_CORE_SYS_DEV_IDL", Block::CoreSys, 0x8),
        RegisterInfo::new("HDMI_CORE_SYS_DEV_IDH", Block::CoreSys, 0xC),
        RegisterInfo::new("HDMI_CORE_SYS_DEV_REV", Block::CoreSys, 0x10),
        RegisterInfo::new("HDMI_CORE_SYS_SRST", Block::CoreSys, 0x14),
        RegisterInfo::new("HDMI_CORE_CTRL1", Block::CoreSys, 0x20),
        RegisterInfo::new("HDMI_CORE_SYS_SYS_STAT", Block::CoreSys, 0x24),
        RegisterInfo::new("HDMI_CORE_SYS_VID_ACEN", Block::CoreSys, 0x124),
        RegisterInfo::new("HDMI_CORE_SYS_VID_MODE", Block::CoreSys, 0x128),
        RegisterInfo::new("HDMI_CORE_SYS_INTR_STATE", Block::CoreSys, 0x1C0),
        RegisterInfo::new("HDMI_CORE_SYS_INTR1", Block::CoreSys, 0x1C4),
        RegisterInfo::new("HDMI_CORE_SYS_INTR2", Block::CoreSys, 0x1C8),
        RegisterInfo::new("HDMI_CORE_SYS_INTR3", Block::CoreSys, 0x1CC),
        RegisterInfo::new("HDMI_CORE_SYS_INTR4", Block::CoreSys, 0x1D0),
        RegisterInfo::new("HDMI_CORE_SYS_UMASK1", Block::CoreSys, 0x1D4),
        RegisterInfo::new("HDMI_CORE_SYS_TMDS_CTRL", Block::CoreSys, 0x208),
        RegisterInfo::new("HDMI_CORE_SYS_DE_DLY", Block::CoreSys, 0xC8),
        RegisterInfo::new("HDMI_CORE_SYS_DE_CTRL", Block::CoreSys, 0xCC),
        RegisterInfo::new("HDMI_CORE_SYS_DE_TOP", Block::CoreSys, 0xD0),
        RegisterInfo::new("HDMI_CORE_SYS_DE_CNTL", Block::CoreSys, 0xD8),
        RegisterInfo::new("HDMI_CORE_SYS_DE_CNTH", Block::CoreSys, 0xDC),
        RegisterInfo::new("HDMI_CORE_SYS_DE_LINL", Block::CoreSys, 0xE0),
        RegisterInfo::new("HDMI_CORE_SYS_DE_LINH_1", Block::CoreSys, 0xE4),
        RegisterInfo::new("HDMI_CORE_DDC_CMD", Block::CoreSys, 0x3CC),
        RegisterInfo::new("HDMI_CORE_DDC_STATUS", Block::CoreSys, 0x3C8),
        RegisterInfo::new("HDMI_CORE_DDC_ADDR", Block::CoreSys, 0x3B4),
        RegisterInfo::new("HDMI_CORE_DDC_OFFSET", Block::CoreSys, 0x3BC),
        RegisterInfo::new("HDMI_CORE_DDC_COUNT1", Block::CoreSys, 0x3C0),
        RegisterInfo::new("HDMI_CORE_DDC_COUNT2", Block::CoreSys, 0x3C4),
        RegisterInfo::new("HDMI_CORE_DDC_DATA", Block::CoreSys, 0x3D0),
        RegisterInfo::new("HDMI_CORE_DDC_SEGM", Block::CoreSys, 0x3B8),
    ];
}
