//! E-EDID block reads over the core's DDC master.

use hdmi_registers::components::core_av_regs::dpd::DpdReg;
use hdmi_registers::components::core_sys_regs::{
    ddc_addr::DdcAddrReg, ddc_cmd::DdcCmdReg, ddc_count1::DdcCount1Reg, ddc_count2::DdcCount2Reg,
    ddc_data::DdcDataReg, ddc_offset::DdcOffsetReg, ddc_segm::DdcSegmReg,
    ddc_status::DdcStatusReg,
};
use hdmi_registers::components::ddc_cmd_e::DdcCmdE;
use hdmi_tx_hal::{DelayNs, RegisterBus};
use log::{debug, error, warn};

use crate::driver::HdmiTx;
use crate::error::{HdmiError, WaitPoint};

/// Bytes per EDID block.
pub const EDID_BLOCK_SIZE: usize = 128;
/// Base block byte holding the number of extension blocks.
pub const EDID_EXTENSION_COUNT: usize = 0x7E;
/// 8-bit DDC address of the EDID EEPROM.
pub const EDID_I2C_ADDR: u8 = 0xA0;
/// DPD.CLK_EN value turning on every DDC clock.
const DDC_CLOCKS_ON: u8 = 0x7;

/// Modulo-256 sum of one block; zero for a valid block.
pub fn block_checksum(block: &[u8]) -> u8 {
    block.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

impl<R: RegisterBus, D: DelayNs> HdmiTx<R, D> {
    /// Read the base EDID block and as many extension blocks as it
    /// announces and `buf` can hold.
    ///
    /// Returns the number of bytes written. Stops at the first failing block.
    pub fn read_edid(&mut self, buf: &mut [u8]) -> Result<usize, HdmiError<R::Error>> {
        if buf.len() < EDID_BLOCK_SIZE {
            return Err(HdmiError::BufferTooSmall { len: buf.len() });
        }
        self.read_edid_block(buf, 0)?;

        let announced = usize::from(buf[EDID_EXTENSION_COUNT]);
        let room = buf.len() / EDID_BLOCK_SIZE - 1;
        let extensions = announced.min(room).min(usize::from(u8::MAX));
        if extensions < announced {
            warn!("EDID announces {announced} extensions, buffer holds {room}");
        }
        for ext in 1..=extensions {
            self.read_edid_block(buf, ext as u8)?;
        }
        Ok((extensions + 1) * EDID_BLOCK_SIZE)
    }

    /// Read block `ext` into `buf[ext * 128..][..128]` and verify its checksum.
    pub fn read_edid_block(&mut self, buf: &mut [u8], ext: u8) -> Result<(), HdmiError<R::Error>> {
        let start = usize::from(ext) * EDID_BLOCK_SIZE;
        let Some(block) = buf.get_mut(start..start + EDID_BLOCK_SIZE) else {
            return Err(HdmiError::BufferTooSmall { len: buf.len() });
        };

        self.port.try_modify::<DpdReg>(|r| r.set_clk_en(DDC_CLOCKS_ON))?;
        self.delay.delay_us(self.config.ddc.settle_us);

        let mut offset = 0;
        if ext == 0 {
            self.ddc_command(DdcCmdE::ClockScl)?;
            self.wait_field(DdcStatusReg::IN_PROG, 0, WaitPoint::DdcIdle)?;
            self.ddc_command(DdcCmdE::ClearFifo)?;
            self.wait_field(DdcStatusReg::IN_PROG, 0, WaitPoint::DdcIdle)?;
        } else if ext % 2 != 0 {
            offset = 0x80;
        }

        self.port.try_modify::<DdcSegmReg>(|r| r.set_segment(ext / 2))?;
        self.port.try_modify::<DdcAddrReg>(|r| r.set_ddc_addr(EDID_I2C_ADDR >> 1))?;
        self.port.try_modify::<DdcOffsetReg>(|r| r.set_offset(offset))?;
        self.port.try_modify::<DdcCount1Reg>(|r| r.set_count(EDID_BLOCK_SIZE as u8))?;
        self.port.try_modify::<DdcCount2Reg>(|r| r.set_count(0))?;

        let cmd = if ext == 0 {
            DdcCmdE::SequentialRead
        } else {
            DdcCmdE::EnhancedDdcRead
        };
        self.ddc_command(cmd)?;

        let status = self.port.read::<DdcStatusReg>()?;
        if status.bus_low() {
            error!("DDC bus low reading EDID block {ext}");
            return Err(HdmiError::DdcBusLow);
        }
        if status.no_ack() {
            error!("DDC no ack reading EDID block {ext}");
            return Err(HdmiError::DdcNoAck);
        }

        let read = self.drain_ddc_fifo(block)?;
        if read < EDID_BLOCK_SIZE {
            error!("EDID block {ext}: transfer ended after {read} bytes");
            return Err(HdmiError::EdidShortRead { block: ext, read });
        }

        let sum = block_checksum(block);
        if sum != 0 {
            error!("EDID block {ext} checksum failed ({sum:#04x})");
            return Err(HdmiError::EdidChecksum { block: ext, sum });
        }
        debug!("EDID block {ext} ok");
        Ok(())
    }

    fn ddc_command(&mut self, cmd: DdcCmdE) -> Result<(), HdmiError<R::Error>> {
        self.port.modify::<DdcCmdReg>(|r| r.set_cmd(cmd))?;
        Ok(())
    }

    /// Pull bytes while a transfer is in progress or the FIFO holds data,
    /// up to one block.
    fn drain_ddc_fifo(&mut self, block: &mut [u8]) -> Result<usize, HdmiError<R::Error>> {
        let mut read = 0;
        let mut polls = 0u32;
        while read < block.len() {
            if polls == self.config.ddc.drain_max_polls {
                error!("DDC FIFO drain stalled after {read} bytes");
                return Err(HdmiError::Timeout(WaitPoint::DdcFifoDrain));
            }
            polls += 1;
            let status = self.port.read::<DdcStatusReg>()?;
            if !status.in_prog() && status.fifo_empty() {
                break;
            }
            if !status.fifo_empty() {
                block[read] = self.port.read::<DdcDataReg>()?.data();
                read += 1;
            }
        }
        Ok(read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_byte_sum() {
        let mut block = [0u8; EDID_BLOCK_SIZE];
        block[0] = 0x00;
        block[1] = 0xFF;
        block[2] = 0x10;
        assert_eq!(block_checksum(&block), 0x0F);
        block[127] = 0xF1;
        assert_eq!(block_checksum(&block), 0);
    }
}
