//! Bring-up sequencer for the HDMI transmitter IP.
//!
//! [`HdmiTx`] owns a [`RegisterBus`](hdmi_tx_hal::RegisterBus) and a delay
//! provider and exposes the ordered programming protocols: power
//! sequencing, PLL program and lock, PHY init, EDID read and the basic
//! video configuration pass.
#![no_std]

pub mod config;
pub mod diag;
pub mod driver;
pub mod edid;
pub mod error;
pub mod phy;
pub mod pll;
pub mod poll;
pub mod port;
pub mod power;
pub mod video;

pub use config::{BlockLayout, DdcConfig, DriverConfig, PollConfig};
pub use driver::{BringUpStep, HdmiTx};
pub use error::{ConfigureFault, HdmiError, PllComputeError, WaitPoint};
pub use pll::{PllSettings, PllStep};
pub use port::RegisterPort;
pub use video::avi::AviInfoFrame;
pub use video::timing::DisplayTiming;
pub use video::{ConfigureStep, DeepColorMode, HdmiDviMode, OutputConfig};

pub use hdmi_registers::components::phy_pwr_e::PhyPwrE;
pub use hdmi_registers::components::pll_pwr_e::PllPwrE;
