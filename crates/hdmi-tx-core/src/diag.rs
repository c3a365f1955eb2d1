//! Read-only register snapshot.

use hdmi_registers::ALL_BLOCKS;
use hdmi_registers::reg::RegisterInfo;
use hdmi_tx_hal::{DelayNs, RegisterBus};

use crate::driver::HdmiTx;
use crate::error::HdmiError;

impl<R: RegisterBus, D: DelayNs> HdmiTx<R, D> {
    /// Hand every documented register and its current value to `sink`,
    /// block by block: wrapper, core system, core AV, PLL, PHY.
    pub fn dump_registers(
        &mut self,
        mut sink: impl FnMut(&RegisterInfo, u32),
    ) -> Result<(), HdmiError<R::Error>> {
        for block in ALL_BLOCKS {
            for info in block {
                let value = self.port.read_raw(info.block, info.address)?;
                sink(info, value);
            }
        }
        Ok(())
    }
}
