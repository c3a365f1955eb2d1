//! The transmitter handle and the composite bring-up sequence.

use hdmi_tx_hal::{DelayNs, RegisterBus};
use log::{debug, error, info};

use crate::config::DriverConfig;
use crate::error::HdmiError;
use crate::pll::PllSettings;
use crate::port::RegisterPort;
use crate::video::OutputConfig;

/// One transmitter instance. Owns the register bus and a delay provider.
///
/// Every operation takes `&mut self`; callers sharing an instance across
/// threads wrap the handle in their own lock.
pub struct HdmiTx<R: RegisterBus, D: DelayNs> {
    pub(crate) port: RegisterPort<R>,
    pub(crate) delay: D,
    pub(crate) config: DriverConfig,
}

/// Stages of [`HdmiTx::bring_up`], in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BringUpStep {
    PllProgram,
    PhyInit,
    BasicConfigure,
    VideoStart,
    Done,
}

impl<R: RegisterBus, D: DelayNs> HdmiTx<R, D> {
    pub fn new(bus: R, delay: D, config: DriverConfig) -> Self {
        Self {
            port: RegisterPort::new(bus, config.layout),
            delay,
            config,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn port(&mut self) -> &mut RegisterPort<R> {
        &mut self.port
    }

    /// Give back the bus and delay provider.
    pub fn release(self) -> (R, D) {
        (self.port.into_inner(), self.delay)
    }

    /// Power, clock and configure the transmitter, then enable video output.
    ///
    /// Runs the PLL program (with its power cycle and reset), PHY init,
    /// the basic configuration pass and video start. Stops at the first
    /// failing step; nothing is undone.
    pub fn bring_up(
        &mut self,
        pll: &PllSettings,
        request: &OutputConfig,
    ) -> Result<(), HdmiError<R::Error>> {
        let mut step = BringUpStep::PllProgram;
        while step != BringUpStep::Done {
            debug!("bring-up: {step:?}");
            let result = match step {
                BringUpStep::PllProgram => self.pll_program(pll),
                BringUpStep::PhyInit => self.phy_init(),
                BringUpStep::BasicConfigure => self.basic_configure(request),
                BringUpStep::VideoStart => self.video_start(true),
                BringUpStep::Done => Ok(()),
            };
            if let Err(e) = result {
                error!("bring-up failed at {step:?}: {e}");
                return Err(e);
            }
            step = step.next();
        }
        info!(
            "transmitter up: {}x{} {:?} VIC {}",
            request.timing.xres, request.timing.yres, request.mode, request.video_code
        );
        Ok(())
    }
}

impl BringUpStep {
    pub const fn next(self) -> Self {
        match self {
            BringUpStep::PllProgram => BringUpStep::PhyInit,
            BringUpStep::PhyInit => BringUpStep::BasicConfigure,
            BringUpStep::BasicConfigure => BringUpStep::VideoStart,
            BringUpStep::VideoStart | BringUpStep::Done => BringUpStep::Done,
        }
    }
}
