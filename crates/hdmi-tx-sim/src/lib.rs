//! Host-side stand-in for the HDMI transmitter.
//!
//! [`SimulatedTransmitter`] implements [`RegisterBus`](hdmi_tx_hal::RegisterBus)
//! over an in-memory register file and reacts to the writes the sequencer
//! issues: power status follows the command after a few reads, the PLL
//! reports reset-done and lock, and the DDC master streams an EDID image
//! built with [`EdidBuilder`]. A [`Fault`] breaks one of those behaviours.

pub mod edid_image;
pub mod model;

pub use edid_image::EdidBuilder;
pub use model::{Fault, SimError, SimulatedTransmitter};

use std::time::Duration;

use hdmi_tx_hal::DelayNs;

/// Delay provider backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}
