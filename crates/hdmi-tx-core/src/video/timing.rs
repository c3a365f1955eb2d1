//! Caller timing and the wrapper's view of it.

use hdmi_registers::components::packing_mode_e::PackingModeE;
use hdmi_registers::components::timing_mode_e::TimingModeE;
use hdmi_registers::components::wp_regs::{
    video_timing_h::VideoTimingHReg, video_timing_v::VideoTimingVReg,
};
use hdmi_registers::encode::FieldOverflow;
use hdmi_registers::reg::Field;

/// A display mode in framebuffer terms: margins are porches, sync lengths
/// are pulse widths, all in pixels or lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayTiming {
    pub xres: u16,
    pub yres: u16,
    pub pixel_clock_khz: u32,
    /// Horizontal back porch
    pub left_margin: u16,
    /// Horizontal front porch
    pub right_margin: u16,
    /// Vertical back porch
    pub upper_margin: u16,
    /// Vertical front porch
    pub lower_margin: u16,
    pub hsync_len: u16,
    pub vsync_len: u16,
    pub hsync_high: bool,
    pub vsync_high: bool,
    pub interlaced: bool,
}

impl DisplayTiming {
    /// VESA 800x600 @ 60 Hz
    pub const VESA_800X600_60: Self = Self {
        xres: 800,
        yres: 600,
        pixel_clock_khz: 40_000,
        left_margin: 88,
        right_margin: 40,
        upper_margin: 23,
        lower_margin: 1,
        hsync_len: 128,
        vsync_len: 4,
        hsync_high: true,
        vsync_high: true,
        interlaced: false,
    };

    /// CEA-861 1280x720p @ 60 Hz (VIC 4)
    pub const CEA_1280X720_60: Self = Self {
        xres: 1280,
        yres: 720,
        pixel_clock_khz: 74_250,
        left_margin: 220,
        right_margin: 110,
        upper_margin: 20,
        lower_margin: 5,
        hsync_len: 40,
        vsync_len: 5,
        hsync_high: true,
        vsync_high: true,
        interlaced: false,
    };

    /// CEA-861 1920x1080p @ 60 Hz (VIC 16)
    pub const CEA_1920X1080_60: Self = Self {
        xres: 1920,
        yres: 1080,
        pixel_clock_khz: 148_500,
        left_margin: 148,
        right_margin: 88,
        upper_margin: 36,
        lower_margin: 4,
        hsync_len: 44,
        vsync_len: 5,
        hsync_high: true,
        vsync_high: true,
        interlaced: false,
    };
}

/// Porches and sync widths as the wrapper timing registers hold them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WrapperTiming {
    pub hbp: u16,
    pub hfp: u16,
    pub hsw: u8,
    pub vbp: u16,
    pub vfp: u16,
    pub vsw: u8,
}

/// Resolution and pixel packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoFormat {
    pub packing: PackingModeE,
    pub x_res: u16,
    pub y_res: u16,
}

impl Default for VideoFormat {
    fn default() -> Self {
        Self {
            packing: PackingModeE::Rgb10bYuv444,
            x_res: 0,
            y_res: 0,
        }
    }
}

/// Sync polarity, scan type and timing master selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoInterface {
    pub vsync_high: bool,
    pub hsync_high: bool,
    pub interlaced: bool,
    pub timing_mode: TimingModeE,
}

impl Default for VideoInterface {
    fn default() -> Self {
        Self {
            vsync_high: false,
            hsync_high: false,
            interlaced: false,
            timing_mode: TimingModeE::Slave,
        }
    }
}

/// Everything the wrapper needs for one configuration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WrapperVideo {
    pub timing: WrapperTiming,
    pub format: VideoFormat,
    pub interface: VideoInterface,
}

impl WrapperVideo {
    /// Translate caller timing for 24-bit RGB/YUV input with the wrapper as
    /// timing master.
    pub fn from_timing(t: &DisplayTiming) -> Result<Self, FieldOverflow> {
        let timing = WrapperTiming {
            hbp: t.left_margin,
            hfp: t.right_margin,
            hsw: sync_width(VideoTimingHReg::HSW, t.hsync_len)?,
            vbp: t.upper_margin,
            vfp: t.lower_margin,
            vsw: sync_width(VideoTimingVReg::VSW, t.vsync_len)?,
        };
        Ok(Self {
            timing,
            format: VideoFormat {
                packing: PackingModeE::Rgb24bYuv444Yuv422,
                x_res: t.xres,
                y_res: t.yres,
            },
            interface: VideoInterface {
                vsync_high: t.vsync_high,
                hsync_high: t.hsync_high,
                interlaced: t.interlaced,
                timing_mode: TimingModeE::Master24Bit,
            },
        })
    }

    pub fn timing_h(&self) -> Result<VideoTimingHReg, FieldOverflow> {
        let mut reg = VideoTimingHReg::default();
        reg.set_hbp(self.timing.hbp)?;
        reg.set_hfp(self.timing.hfp)?;
        reg.set_hsw(self.timing.hsw)?;
        Ok(reg)
    }

    pub fn timing_v(&self) -> Result<VideoTimingVReg, FieldOverflow> {
        let mut reg = VideoTimingVReg::default();
        reg.set_vbp(self.timing.vbp)?;
        reg.set_vfp(self.timing.vfp)?;
        reg.set_vsw(self.timing.vsw)?;
        Ok(reg)
    }
}

fn sync_width(field: Field, len: u16) -> Result<u8, FieldOverflow> {
    u8::try_from(len).map_err(|_| FieldOverflow {
        field: field.name,
        value: u32::from(len),
        width: field.width(),
    })
}
