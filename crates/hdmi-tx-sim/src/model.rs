//! Behavioural register model of the transmitter.

use std::collections::{BTreeMap, VecDeque};

use hdmi_registers::components::core_sys_regs::{
    ddc_cmd::DdcCmdReg, ddc_count1::DdcCount1Reg, ddc_count2::DdcCount2Reg,
    ddc_data::DdcDataReg, ddc_offset::DdcOffsetReg, ddc_segm::DdcSegmReg,
    ddc_status::DdcStatusReg,
};
use hdmi_registers::components::ddc_cmd_e::DdcCmdE;
use hdmi_registers::components::phy_pwr_e::PhyPwrE;
use hdmi_registers::components::pll_regs::{
    pll_control::PllControlReg, pll_go::PllGoReg, pll_status::PllStatusReg,
};
use hdmi_registers::components::wp_regs::pwr_ctrl::PwrCtrlReg;
use hdmi_registers::reg::{Block, Register};
use hdmi_registers::{CoreAvRegs, CoreSysRegs, PhyRegs, PllRegs, WpRegs};
use hdmi_tx_core::BlockLayout;
use hdmi_tx_core::edid::EDID_BLOCK_SIZE;
use hdmi_tx_hal::RegisterBus;
use log::trace;

/// Status reads a power or lock transition takes to show up.
pub const DEFAULT_SETTLE_READS: u32 = 3;

/// One hardware misbehaviour the model can reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// GO is accepted but LOCK never rises.
    PllLock,
    /// The sink does not acknowledge EDID reads.
    DdcNack,
    /// The first EDID block is served with a corrupted byte.
    BadChecksum,
    /// The PHY power status stays where it was.
    PhyPower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("no register block decodes address {0:#06x}")]
    Unmapped(u32),
    #[error("unaligned register access at {0:#06x}")]
    Unaligned(u32),
}

pub struct SimulatedTransmitter {
    layout: BlockLayout,
    regs: BTreeMap<u32, u32>,
    edid: Vec<u8>,
    fifo: VecDeque<u8>,
    ddc_read_issued: bool,
    fault: Option<Fault>,
    settle_reads: u32,
    power_pending: u32,
    lock_pending: Option<u32>,
    reads: u64,
    writes: u64,
}

impl SimulatedTransmitter {
    pub fn new(layout: BlockLayout, edid: Vec<u8>) -> Self {
        Self {
            layout,
            regs: BTreeMap::new(),
            edid,
            fifo: VecDeque::new(),
            ddc_read_issued: false,
            fault: None,
            settle_reads: DEFAULT_SETTLE_READS,
            power_pending: 0,
            lock_pending: None,
            reads: 0,
            writes: 0,
        }
    }

    pub fn with_fault(mut self, fault: Fault) -> Self {
        if fault == Fault::BadChecksum {
            if let Some(byte) = self.edid.get_mut(EDID_BLOCK_SIZE / 2) {
                *byte ^= 0x5A;
            }
        }
        self.fault = Some(fault);
        self
    }

    pub fn with_settle_reads(mut self, reads: u32) -> Self {
        self.settle_reads = reads;
        self
    }

    pub fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    /// Current value of `T` without going through the bus.
    pub fn peek<T: Register>(&self) -> T {
        T::from_raw(self.stored(self.address_of::<T>()))
    }

    pub fn access_counts(&self) -> (u64, u64) {
        (self.reads, self.writes)
    }

    fn address_of<T: Register>(&self) -> u32 {
        self.layout.base(T::BLOCK) + u32::from(T::ADDRESS)
    }

    fn is<T: Register>(&self, addr: u32) -> bool {
        addr == self.address_of::<T>()
    }

    fn stored(&self, addr: u32) -> u32 {
        self.regs.get(&addr).copied().unwrap_or(0)
    }

    fn decode(&self, addr: u32) -> Result<(), SimError> {
        if addr % 4 != 0 {
            return Err(SimError::Unaligned(addr));
        }
        let mapped = Block::ALL.iter().any(|block| {
            let base = self.layout.base(*block);
            addr >= base && addr - base < window(*block)
        });
        if mapped { Ok(()) } else { Err(SimError::Unmapped(addr)) }
    }

    fn read_power(&mut self, addr: u32) -> u32 {
        let mut pwr = PwrCtrlReg::from_raw(self.stored(addr));
        if self.power_pending > 0 {
            self.power_pending -= 1;
            return pwr.to_raw();
        }
        // Command and status encodings line up field for field.
        if let Ok(cmd) = pwr.pll_pwr_cmd() {
            pwr.set_pll_pwr_status(cmd);
        }
        if self.fault != Some(Fault::PhyPower) {
            if let Ok(cmd) = pwr.phy_pwr_cmd() {
                pwr.set_phy_pwr_status(cmd);
            }
        }
        self.regs.insert(addr, pwr.to_raw());
        pwr.to_raw()
    }

    fn read_pll_status(&mut self, addr: u32) -> u32 {
        let mut status = PllStatusReg::from_raw(self.stored(addr));
        if let Some(left) = self.lock_pending {
            if left == 0 {
                status.set_lock(true);
                self.lock_pending = None;
            } else {
                self.lock_pending = Some(left - 1);
            }
        }
        self.regs.insert(addr, status.to_raw());
        status.to_raw()
    }

    fn ddc_status(&self) -> u32 {
        let mut status = DdcStatusReg::default();
        status.set_fifo_empty(self.fifo.is_empty());
        status.set_no_ack(self.ddc_read_issued && self.fault == Some(Fault::DdcNack));
        status.to_raw()
    }

    fn on_power_write(&mut self, addr: u32, data: u32) {
        let old = PwrCtrlReg::from_raw(self.stored(addr));
        let mut pwr = PwrCtrlReg::from_raw(data);
        // Status bits are read-only.
        if let Ok(s) = old.pll_pwr_status() {
            pwr.set_pll_pwr_status(s);
        }
        pwr.set_phy_pwr_status(old.phy_pwr_status().unwrap_or(PhyPwrE::Off));
        self.regs.insert(addr, pwr.to_raw());
        self.power_pending = self.settle_reads;
    }

    fn on_pll_control_write(&mut self, data: u32) {
        let control = PllControlReg::from_raw(data);
        let status_addr = self.address_of::<PllStatusReg>();
        let mut status = PllStatusReg::from_raw(self.stored(status_addr));
        status.set_reset_done(!control.sysreset());
        if control.sysreset() {
            status.set_lock(false);
        }
        self.regs.insert(status_addr, status.to_raw());
    }

    fn on_go_write(&mut self, data: u32) {
        if PllGoReg::from_raw(data).go() {
            let status_addr = self.address_of::<PllStatusReg>();
            let mut status = PllStatusReg::from_raw(self.stored(status_addr));
            status.set_lock(false);
            self.regs.insert(status_addr, status.to_raw());
            if self.fault == Some(Fault::PllLock) {
                self.lock_pending = None;
            } else {
                self.lock_pending = Some(self.settle_reads);
            }
        }
    }

    fn on_ddc_command(&mut self, data: u32) {
        self.ddc_read_issued = false;
        match DdcCmdReg::from_raw(data).cmd() {
            Ok(DdcCmdE::ClearFifo) | Ok(DdcCmdE::Abort) => self.fifo.clear(),
            Ok(DdcCmdE::SequentialRead) | Ok(DdcCmdE::EnhancedDdcRead) => {
                self.fifo.clear();
                self.ddc_read_issued = true;
                if self.fault == Some(Fault::DdcNack) {
                    return;
                }
                let segment = DdcSegmReg::from_raw(self.stored(self.address_of::<DdcSegmReg>()));
                let offset = DdcOffsetReg::from_raw(self.stored(self.address_of::<DdcOffsetReg>()));
                let lo = DdcCount1Reg::from_raw(self.stored(self.address_of::<DdcCount1Reg>()));
                let hi = DdcCount2Reg::from_raw(self.stored(self.address_of::<DdcCount2Reg>()));
                let start = usize::from(segment.segment()) * 2 * EDID_BLOCK_SIZE
                    + usize::from(offset.offset());
                let count = usize::from(lo.count()) | usize::from(hi.count()) << 8;
                let end = (start + count).min(self.edid.len());
                if start < end {
                    self.fifo.extend(&self.edid[start..end]);
                }
                trace!("ddc: read {} bytes from {start:#x}", self.fifo.len());
            }
            Ok(DdcCmdE::ClockScl) => {}
            Err(e) => trace!("ddc: ignoring command {e}"),
        }
    }
}

fn window(block: Block) -> u32 {
    let size = match block {
        Block::Wrapper => WpRegs::SIZE,
        Block::Pll => PllRegs::SIZE,
        Block::Phy => PhyRegs::SIZE,
        Block::CoreSys => CoreSysRegs::SIZE,
        Block::CoreAv => CoreAvRegs::SIZE,
    };
    size as u32
}

impl RegisterBus for SimulatedTransmitter {
    type Error = SimError;

    fn read_register(&mut self, addr: u32) -> Result<u32, SimError> {
        self.decode(addr)?;
        self.reads += 1;
        let value = if self.is::<PwrCtrlReg>(addr) {
            self.read_power(addr)
        } else if self.is::<PllStatusReg>(addr) {
            self.read_pll_status(addr)
        } else if self.is::<DdcStatusReg>(addr) {
            self.ddc_status()
        } else if self.is::<DdcDataReg>(addr) {
            u32::from(self.fifo.pop_front().unwrap_or(0))
        } else {
            self.stored(addr)
        };
        trace!("rd {addr:#06x} -> {value:#010x}");
        Ok(value)
    }

    fn write_register(&mut self, addr: u32, data: u32) -> Result<(), SimError> {
        self.decode(addr)?;
        self.writes += 1;
        trace!("wr {addr:#06x} <- {data:#010x}");
        if self.is::<PwrCtrlReg>(addr) {
            self.on_power_write(addr, data);
            return Ok(());
        }
        self.regs.insert(addr, data);
        if self.is::<PllControlReg>(addr) {
            self.on_pll_control_write(data);
        } else if self.is::<PllGoReg>(addr) {
            self.on_go_write(data);
        } else if self.is::<DdcCmdReg>(addr) {
            self.on_ddc_command(data);
        }
        Ok(())
    }
}
