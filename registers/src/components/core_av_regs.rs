//! Addrmap: CoreAvRegs

use crate::reg::{Block, RegisterInfo};

/// Named types defined within this component's body
pub mod named_types {
    pub mod avi_chsum_reg;
    pub mod avi_dbyte_reg;
    pub mod avi_len_reg;
    pub mod avi_type_reg;
    pub mod avi_vers_reg;
    pub mod dpd_reg;
    pub mod hdmi_ctrl_reg;
    pub mod pb_ctrl1_reg;
    pub mod pb_ctrl2_reg;
}

// Instances of named component types
pub use crate::components::core_av_regs::named_types::avi_chsum_reg as avi_chsum;
pub use crate::components::core_av_regs::named_types::avi_dbyte_reg as avi_dbyte;
pub use crate::components::core_av_regs::named_types::avi_len_reg as avi_len;
pub use crate::components::core_av_regs::named_types::avi_type_reg as avi_type;
pub use crate::components::core_av_regs::named_types::avi_vers_reg as avi_vers;
pub use crate::components::core_av_regs::named_types::dpd_reg as dpd;
pub use crate::components::core_av_regs::named_types::hdmi_ctrl_reg as hdmi_ctrl;
pub use crate::components::core_av_regs::named_types::pb_ctrl1_reg as pb_ctrl1;
pub use crate::components::core_av_regs::named_types::pb_ctrl2_reg as pb_ctrl2;

/// Core audio/video register block: HDMI control, packet scheduling and info frames
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CoreAvRegs;

impl CoreAvRegs {
    /// Size in bytes of the block's address window
    pub const SIZE: usize = 0x400;

    /// Which block this address map describes
    pub const BLOCK: Block = Block::CoreAv;

    /// Every documented register in the block, in diagnostic dump order
    pub const REGISTERS: &'static [RegisterInfo] = &[
        RegisterInfo::new("HDMI_CORE_AV_HDMI_CTRL", Block::CoreAv, 0xBC),
        RegisterInfo::new("HDMI_CORE_AV_SPD_DBYTE", Block::CoreAv, 0x190),
        RegisterInfo::new("HDMI_CORE_AV_MPEG_DBYTE", Block::CoreAv, 0x290),
        RegisterInfo::new("HDMI_CORE_AV_GEN_DBYTE", Block::CoreAv, 0x300),
        RegisterInfo::new("HDMI_CORE_AV_GEN2_DBYTE", Block::CoreAv, 0x380),
        RegisterInfo::new("HDMI_CORE_AV_ACR_CTRL", Block::CoreAv, 0x4),
        RegisterInfo::new("HDMI_CORE_AV_FREQ_SVAL", Block::CoreAv, 0x8),
        RegisterInfo::new("HDMI_CORE_AV_N_SVAL1", Block::CoreAv, 0xC),
        RegisterInfo::new("HDMI_CORE_AV_N_SVAL2", Block::CoreAv, 0x10),
        RegisterInfo::new("HDMI_CORE_AV_N_SVAL3", Block::CoreAv, 0x14),
        RegisterInfo::new("HDMI_CORE_AV_CTS_SVAL1", Block::CoreAv, 0x18),
        RegisterInfo::new("HDMI_CORE_AV_CTS_SVAL2", Block::CoreAv, 0x1C),
        RegisterInfo::new("HDMI_CORE_AV_CTS_SVAL3", Block::CoreAv, 0x20),
        RegisterInfo::new("HDMI_CORE_AV_CTS_HVAL1", Block::CoreAv, 0x24),
        RegisterInfo::new("HDMI_CORE_AV_CTS_HVAL2", Block::CoreAv, 0x28),
        RegisterInfo::new("HDMI_CORE_AV_CTS_HVAL3", Block::CoreAv, 0x2C),
        RegisterInfo::new("HDMI_CORE_AV_AUD_MODE", Block::CoreAv, 0x50),
        RegisterInfo::new("HDMI_CORE_AV_SPDIF_CTRL", Block::CoreAv, 0x54),
        RegisterInfo::new("HDMI_CORE_AV_HW_SPDIF_FS", Block::CoreAv, 0x60),
        RegisterInfo::new("HDMI_CORE_AV_SWAP_I2S", Block::CoreAv, 0x64),
        RegisterInfo::new("HDMI_CORE_AV_SPDIF_ERTH", Block::CoreAv, 0x6C),
        RegisterInfo::new("HDMI_CORE_AV_I2S_IN_MAP", Block::CoreAv, 0x70),
        RegisterInfo::new("HDMI_CORE_AV_I2S_IN_CTRL", Block::CoreAv, 0x74),
        RegisterInfo::new("HDMI_CORE_AV_I2S_CHST0", Block::CoreAv, 0x78),
        RegisterInfo::new("HDMI_CORE_AV_I2S_CHST1", Block::CoreAv, 0x7C),
        RegisterInfo::new("HDMI_CORE_AV_I2S_CHST2", Block::CoreAv, 0x80),
        RegisterInfo::new("HDMI_CORE_AV_I2S_CHST4", Block::CoreAv, 0x84),
        RegisterInfo::new("HDMI_CORE_AV_I2S_CHST5", Block::CoreAv, 0x88),
        RegisterInfo::new("HDMI_CORE_AV_ASRC", Block::CoreAv, 0x8C),
        RegisterInfo::new("HDMI_CORE_AV_I2S_IN_LEN", Block::CoreAv, 0x90),
        RegisterInfo::new("HDMI_CORE_AV_AUDO_TXSTAT", Block::CoreAv, 0xC0),
        RegisterInfo::new("HDMI_CORE_AV_AUD_PAR_BUSCLK_1", Block::CoreAv, 0xCC),
        RegisterInfo::new("HDMI_CORE_AV_AUD_PAR_BUSCLK_2", Block::CoreAv, 0xD0),
        RegisterInfo::new("HDMI_CORE_AV_AUD_PAR_BUSCLK_3", Block::CoreAv, 0xD4),
        RegisterInfo::new("HDMI_CORE_AV_TEST_TXCTRL", Block::CoreAv, 0xF0),
        RegisterInfo::new("HDMI_CORE_AV_DPD", Block::CoreAv, 0xF4),
        RegisterInfo::new("HDMI_CORE_AV_PB_CTRL1", Block::CoreAv, 0xF8),
        RegisterInfo::new("HDMI_CORE_AV_PB_CTRL2", Block::CoreAv, 0xFC),
        RegisterInfo::new("HDMI_CORE_AV_AVI_TYPE", Block::CoreAv, 0x100),
        RegisterInfo::new("HDMI_CORE_AV_AVI_VERS", Block::CoreAv, 0x104),
        RegisterInfo::new("HDMI_CORE_AV_AVI_LEN", Block::CoreAv, 0x108),
        RegisterInfo::new("HDMI_CORE_AV_AVI_CHSUM", Block::CoreAv, 0x10C),
        RegisterInfo::new("HDMI_CORE_AV_SPD_TYPE", Block::CoreAv, 0x180),
        RegisterInfo::new("HDMI_CORE_AV_SPD_VERS", Block::CoreAv, 0x184),
        RegisterInfo::new("HDMI_CORE_AV_SPD_LEN", Block::CoreAv, 0x188),
        RegisterInfo::new("HDMI_CORE_AV_SPD_CHSUM", Block::CoreAv, 0x18C),
        RegisterInfo::new("HDMI_CORE_AV_AUDIO_TYPE", Block::CoreAv, 0x200),
        RegisterInfo::new("HDMI_CORE_AV_AUDIO_VERS", Block::CoreAv, 0x204),
        RegisterInfo::new("HDMI_CORE_AV_AUDIO_LEN", Block::CoreAv, 0x208),
        RegisterInfo::new("HDMI_CORE_AV_AUDIO_CHSUM", Block::CoreAv, 0x20C),
        RegisterInfo::new("HDMI_CORE_AV_MPEG_TYPE", Block::CoreAv, 0x280),
        RegisterInfo::new("HDMI_CORE_AV_MPEG_VERS", Block::CoreAv, 0x284),
        RegisterInfo::new("HDMI_CORE_AV_MPEG_LEN", Block::CoreAv, 0x288),
        RegisterInfo::new("HDMI_CORE_AV_MPEG_CHSUM", Block::CoreAv, 0x28C),
        RegisterInfo::new("HDMI_CORE_AV_CP_BYTE1", Block::CoreAv, 0x37C),
        RegisterInfo::new("HDMI_CORE_AV_CEC_ADDR_ID", Block::CoreAv, 0x3FC),
    ];
}
