//! Core video path and packet scheduling descriptors.

use hdmi_registers::components::core_av_regs::{pb_ctrl1::PbCtrl1Reg, pb_ctrl2::PbCtrl2Reg};
use hdmi_registers::components::input_bus_width_e::InputBusWidthE;
use hdmi_registers::components::packet_mode_e::PacketModeE;
use hdmi_registers::components::tclk_sel_e::TclkSelE;

use super::{DeepColorMode, HdmiDviMode};

/// Output truncation or dither depth, as coded in VID_MODE.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DitherTruncation {
    Truncate8 = 0,
    Truncate10 = 1,
    Truncate12 = 2,
    Dither8 = 3,
    Dither10 = 4,
    Dither12 = 5,
}

impl DitherTruncation {
    /// VID_MODE (DITHER_MODE, DITHER_EN) for this setting.
    pub const fn vid_mode(self) -> (u8, bool) {
        let code = self as u8;
        if code > DitherTruncation::Truncate12 as u8 {
            (code - 3, true)
        } else {
            (code, false)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreVideoConfig {
    pub bus_width: InputBusWidthE,
    pub dither: DitherTruncation,
    pub deep_color_packet: bool,
    pub packet_mode: PacketModeE,
    pub mode: HdmiDviMode,
    pub tclk: TclkSelE,
}

impl CoreVideoConfig {
    /// Input width, truncation and packet settings for a colour depth.
    /// Output mode starts as DVI with a 1x TMDS clock.
    pub const fn for_deep_color(depth: DeepColorMode) -> Self {
        let (bus_width, dither, deep_color_packet, packet_mode) = match depth {
            DeepColorMode::Bits24 => (
                InputBusWidthE::Bits8,
                DitherTruncation::Truncate8,
                false,
                PacketModeE::Reserved,
            ),
            DeepColorMode::Bits30 => (
                InputBusWidthE::Bits10,
                DitherTruncation::Truncate10,
                true,
                PacketModeE::Bpp30,
            ),
            DeepColorMode::Bits36 => (
                InputBusWidthE::Bits12,
                DitherTruncation::Truncate12,
                true,
                PacketModeE::Bpp36,
            ),
        };
        Self {
            bus_width,
            dither,
            deep_color_packet,
            packet_mode,
            mode: HdmiDviMode::Dvi,
            tclk: TclkSelE::Fpll10Idck,
        }
    }
}

/// Enable and repeat flags for the packet buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PacketRepeat {
    pub audio: bool,
    pub audio_repeat: bool,
    pub avi: bool,
    pub avi_repeat: bool,
    pub gen_ctrl: bool,
    pub gen_ctrl_repeat: bool,
    pub generic: bool,
    pub generic_repeat: bool,
}

impl PacketRepeat {
    pub fn pb_ctrl1(&self) -> PbCtrl1Reg {
        let mut reg = PbCtrl1Reg::default();
        reg.set_aud_en(self.audio);
        reg.set_aud_rpt(self.audio_repeat);
        reg.set_avi_en(self.avi);
        reg.set_avi_rpt(self.avi_repeat);
        reg
    }

    pub fn pb_ctrl2(&self) -> PbCtrl2Reg {
        let mut reg = PbCtrl2Reg::default();
        reg.set_cp_en(self.gen_ctrl);
        reg.set_cp_rpt(self.gen_ctrl_repeat);
        reg.set_gen_en(self.generic);
        reg.set_gen_rpt(self.generic_repeat);
        reg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdmi_registers::reg::Register;

    #[test]
    fn deep_color_table() {
        let c24 = CoreVideoConfig::for_deep_color(DeepColorMode::Bits24);
        assert_eq!(c24.bus_width, InputBusWidthE::Bits8);
        assert_eq!(c24.dither, DitherTruncation::Truncate8);
        assert!(!c24.deep_color_packet);
        assert_eq!(c24.packet_mode, PacketModeE::Reserved);

        let c30 = CoreVideoConfig::for_deep_color(DeepColorMode::Bits30);
        assert_eq!(c30.bus_width, InputBusWidthE::Bits10);
        assert_eq!(c30.dither, DitherTruncation::Truncate10);
        assert!(c30.deep_color_packet);
        assert_eq!(c30.packet_mode, PacketModeE::Bpp30);

        let c36 = CoreVideoConfig::for_deep_color(DeepColorMode::Bits36);
        assert_eq!(c36.bus_width, InputBusWidthE::Bits12);
        assert_eq!(c36.dither, DitherTruncation::Truncate12);
        assert_eq!(c36.packet_mode, PacketModeE::Bpp36);

        assert_eq!(c36.mode, HdmiDviMode::Dvi);
        assert_eq!(c36.tclk, TclkSelE::Fpll10Idck);
    }

    #[test]
    fn dither_codes() {
        assert_eq!(DitherTruncation::Truncate12.vid_mode(), (2, false));
        assert_eq!(DitherTruncation::Dither8.vid_mode(), (0, true));
        assert_eq!(DitherTruncation::Dither12.vid_mode(), (2, true));
    }

    #[test]
    fn packet_words() {
        let repeat = PacketRepeat {
            audio: true,
            audio_repeat: true,
            avi: true,
            avi_repeat: true,
            ..PacketRepeat::default()
        };
        assert_eq!(repeat.pb_ctrl1().to_raw(), 0x33);
        assert_eq!(repeat.pb_ctrl2().to_raw(), 0x00);
        let generic = PacketRepeat {
            gen_ctrl: true,
            generic_repeat: true,
            ..PacketRepeat::default()
        };
        assert_eq!(generic.pb_ctrl2().to_raw(), 0x09);
    }
}
