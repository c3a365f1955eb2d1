//! Video pipeline configuration: wrapper timing/format and the core video
//! path, AVI info frame and packet scheduling.

pub mod avi;
pub mod core_cfg;
pub mod timing;

use hdmi_registers::components::core_av_regs::{
    avi_chsum::AviChsumReg, avi_dbyte::AviDbyteReg, avi_len::AviLenReg, avi_type::AviTypeReg,
    avi_vers::AviVersReg, hdmi_ctrl::HdmiCtrlReg,
};
use hdmi_registers::components::core_sys_regs::{
    ctrl1::Ctrl1Reg, srst::SrstReg, tmds_ctrl::TmdsCtrlReg, vid_acen::VidAcenReg,
    vid_mode::VidModeReg,
};
use hdmi_registers::components::packet_mode_e::PacketModeE;
use hdmi_registers::components::wp_regs::{video_cfg::VideoCfgReg, video_size::VideoSizeReg};
use hdmi_tx_hal::{DelayNs, RegisterBus};
use log::{debug, error};

use crate::driver::HdmiTx;
use crate::error::HdmiError;
use avi::{AVI_LENGTH, AVI_TYPE, AVI_VERSION, AviInfoFrame};
use core_cfg::{CoreVideoConfig, PacketRepeat};
use timing::{DisplayTiming, WrapperVideo};

/// Colour depth per component on the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeepColorMode {
    #[default]
    Bits24,
    Bits30,
    Bits36,
}

impl From<u8> for DeepColorMode {
    /// Unknown codes fall back to 24-bit.
    fn from(raw: u8) -> Self {
        match raw {
            1 => DeepColorMode::Bits30,
            2 => DeepColorMode::Bits36,
            _ => DeepColorMode::Bits24,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HdmiDviMode {
    #[default]
    Dvi = 0,
    Hdmi = 1,
}

/// What the caller wants on the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputConfig {
    pub timing: DisplayTiming,
    pub mode: HdmiDviMode,
    /// CEA-861 video identification code carried in the AVI info frame
    pub video_code: u8,
    pub deep_color: DeepColorMode,
}

/// Stages of [`HdmiTx::basic_configure`], in execution order.
///
/// Core reset is asserted by `CoreResetAssert` and released by
/// `CoreResetRelease`; a failure in between leaves the core in reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureStep {
    WrapperTiming,
    WrapperFormat,
    WrapperInterface,
    CoreResetAssert,
    CorePowerDownDisable,
    CoreVideo,
    CoreResetRelease,
    AviInfoFrame,
    PacketRepeat,
    Done,
}

impl ConfigureStep {
    pub const fn next(self) -> Self {
        match self {
            ConfigureStep::WrapperTiming => ConfigureStep::WrapperFormat,
            ConfigureStep::WrapperFormat => ConfigureStep::WrapperInterface,
            ConfigureStep::WrapperInterface => ConfigureStep::CoreResetAssert,
            ConfigureStep::CoreResetAssert => ConfigureStep::CorePowerDownDisable,
            ConfigureStep::CorePowerDownDisable => ConfigureStep::CoreVideo,
            ConfigureStep::CoreVideo => ConfigureStep::CoreResetRelease,
            ConfigureStep::CoreResetRelease => ConfigureStep::AviInfoFrame,
            ConfigureStep::AviInfoFrame => ConfigureStep::PacketRepeat,
            ConfigureStep::PacketRepeat | ConfigureStep::Done => ConfigureStep::Done,
        }
    }
}

/// Descriptors for one configuration pass, derived before any write.
struct ConfigurePlan {
    wrapper: WrapperVideo,
    core: CoreVideoConfig,
    avi: [u8; AVI_LENGTH as usize],
    repeat: PacketRepeat,
}

impl ConfigurePlan {
    fn new(request: &OutputConfig) -> Result<Self, hdmi_registers::encode::FieldOverflow> {
        let wrapper = WrapperVideo::from_timing(&request.timing)?;
        // Register values are checked here so range errors surface before
        // the first write.
        wrapper.timing_h()?;
        wrapper.timing_v()?;

        let mut core = CoreVideoConfig::for_deep_color(request.deep_color);
        core.packet_mode = PacketModeE::Bpp24;
        core.mode = request.mode;

        let avi = AviInfoFrame::new(request.video_code).data_bytes()?;
        let repeat = PacketRepeat {
            avi: true,
            avi_repeat: true,
            audio: true,
            audio_repeat: true,
            ..PacketRepeat::default()
        };
        Ok(Self {
            wrapper,
            core,
            avi,
            repeat,
        })
    }
}

impl<R: RegisterBus, D: DelayNs> HdmiTx<R, D> {
    /// Program wrapper timing and format, then the core video path inside a
    /// core software reset, then the AVI info frame and packet repeat.
    ///
    /// Invalid timing or AVI values are rejected before anything is written.
    /// A bus failure is reported as [`HdmiError::Configure`] naming the step;
    /// earlier steps are not rolled back, and re-running the whole pass from
    /// a quiescent state rewrites every field.
    pub fn basic_configure(&mut self, request: &OutputConfig) -> Result<(), HdmiError<R::Error>> {
        let plan = ConfigurePlan::new(request)?;
        let mut step = ConfigureStep::WrapperTiming;
        while step != ConfigureStep::Done {
            debug!("configure: {step:?}");
            if let Err(e) = self.configure_step(step, &plan) {
                let e = e.at_step(step);
                error!("{e}");
                return Err(e);
            }
            step = step.next();
        }
        Ok(())
    }

    fn configure_step(
        &mut self,
        step: ConfigureStep,
        plan: &ConfigurePlan,
    ) -> Result<(), HdmiError<R::Error>> {
        let wp = &plan.wrapper;
        match step {
            ConfigureStep::WrapperTiming => {
                self.port.write(wp.timing_h()?)?;
                self.port.write(wp.timing_v()?)
            }
            ConfigureStep::WrapperFormat => {
                self.port
                    .modify::<VideoCfgReg>(|r| r.set_packing_mode(wp.format.packing))?;
                let mut size = VideoSizeReg::default();
                size.set_y_res(wp.format.y_res)?;
                size.set_x_res(wp.format.x_res)?;
                self.port.write(size)
            }
            ConfigureStep::WrapperInterface => {
                let int = wp.interface;
                self.port.modify::<VideoCfgReg>(|r| {
                    r.set_vsync_pol(int.vsync_high);
                    r.set_hsync_pol(int.hsync_high);
                    r.set_interlacing(int.interlaced);
                    r.set_timing_mode(int.timing_mode);
                })?;
                Ok(())
            }
            ConfigureStep::CoreResetAssert => self.core_reset(true),
            ConfigureStep::CorePowerDownDisable => {
                self.port.modify::<Ctrl1Reg>(|r| r.set_pd(false))?;
                Ok(())
            }
            ConfigureStep::CoreVideo => self.core_video_config(&plan.core),
            ConfigureStep::CoreResetRelease => self.core_reset(false),
            ConfigureStep::AviInfoFrame => self.write_avi_info_frame(&plan.avi),
            ConfigureStep::PacketRepeat => {
                self.port.write(plan.repeat.pb_ctrl1())?;
                self.port.write(plan.repeat.pb_ctrl2())
            }
            ConfigureStep::Done => Ok(()),
        }
    }

    fn core_reset(&mut self, assert: bool) -> Result<(), HdmiError<R::Error>> {
        self.port.modify::<SrstReg>(|r| r.set_swrst(assert))?;
        Ok(())
    }

    fn core_video_config(&mut self, cfg: &CoreVideoConfig) -> Result<(), HdmiError<R::Error>> {
        // Follow VSYNC/HSYNC, 24-bit bus, latch on rising edge.
        self.port.modify::<Ctrl1Reg>(|r| {
            r.set_ven(true);
            r.set_hen(true);
            r.set_bsel(true);
            r.set_edge(true);
        })?;
        self.port
            .modify::<VidAcenReg>(|r| r.set_wide_bus(cfg.bus_width))?;

        let (dither_mode, dither_en) = cfg.dither.vid_mode();
        self.port.try_modify::<VidModeReg>(|r| {
            r.set_dither_mode(dither_mode)?;
            r.set_dither_en(dither_en);
            Ok(())
        })?;

        self.port.modify::<HdmiCtrlReg>(|r| {
            r.set_dc_en(cfg.deep_color_packet);
            r.set_packet_mode(cfg.packet_mode);
            r.set_hdmi_mode(cfg.mode == HdmiDviMode::Hdmi);
        })?;
        self.port.modify::<TmdsCtrlReg>(|r| r.set_tclksel(cfg.tclk))?;
        Ok(())
    }

    fn write_avi_info_frame(&mut self, data: &[u8]) -> Result<(), HdmiError<R::Error>> {
        let mut ty = AviTypeReg::default();
        ty.set_packet_type(AVI_TYPE)?;
        self.port.write(ty)?;
        let mut vers = AviVersReg::default();
        vers.set_version(AVI_VERSION)?;
        self.port.write(vers)?;
        let mut len = AviLenReg::default();
        len.set_length(AVI_LENGTH)?;
        self.port.write(len)?;

        for (n, byte) in data.iter().enumerate() {
            let mut db = AviDbyteReg::default();
            db.set_data(*byte)?;
            self.port.write_indexed(n, db)?;
        }

        let mut chsum = AviChsumReg::default();
        chsum.set_checksum(AviInfoFrame::checksum(data))?;
        self.port.write(chsum)
    }

    /// Turn the wrapper's video output on or off.
    pub fn video_start(&mut self, enable: bool) -> Result<(), HdmiError<R::Error>> {
        self.port.modify::<VideoCfgReg>(|r| r.set_enable(enable))?;
        Ok(())
    }
}
