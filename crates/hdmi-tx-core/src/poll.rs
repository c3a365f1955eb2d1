//! Bounded busy-wait on a register field.

use hdmi_registers::reg::Field;
use hdmi_tx_hal::{DelayNs, RegisterBus};
use log::error;

use crate::driver::HdmiTx;
use crate::error::{HdmiError, WaitPoint};

impl<R: RegisterBus, D: DelayNs> HdmiTx<R, D> {
    /// Sample `field` until it reads `expected` or the poll budget runs out.
    ///
    /// Returns `expected` on success and its logical negation on timeout,
    /// so callers compare the result against what they asked for.
    pub fn poll_field(&mut self, field: Field, expected: u32) -> Result<u32, HdmiError<R::Error>> {
        let budget = self.config.poll.max_polls.max(1);
        for attempt in 0..budget {
            if self.port.read_field(field)? == expected {
                return Ok(expected);
            }
            if attempt + 1 < budget {
                self.delay.delay_us(self.config.poll.interval_us);
            }
        }
        Ok(u32::from(expected == 0))
    }

    /// [`poll_field`](Self::poll_field) that turns a miss into
    /// [`HdmiError::Timeout`].
    pub(crate) fn wait_field(
        &mut self,
        field: Field,
        expected: u32,
        point: WaitPoint,
    ) -> Result<(), HdmiError<R::Error>> {
        if self.poll_field(field, expected)? == expected {
            Ok(())
        } else {
            error!("timed out waiting for {point} ({} != {expected})", field.name);
            Err(HdmiError::Timeout(point))
        }
    }
}
