//! Shared mock register bus for driver tests.
//!
//! The mock keeps a register file keyed by bus address, records every
//! access, and models just enough hardware for the sequences to complete:
//! power status follows the command, PLL reset/GO/lock, and a DDC FIFO fed
//! from an EDID image. Each behaviour can be broken with a fault switch.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use hdmi_registers::components::core_av_regs::dpd::DpdReg;
use hdmi_registers::components::core_sys_regs::{
    ddc_cmd::DdcCmdReg, ddc_count1::DdcCount1Reg, ddc_data::DdcDataReg, ddc_offset::DdcOffsetReg,
    ddc_segm::DdcSegmReg, ddc_status::DdcStatusReg,
};
use hdmi_registers::components::pll_regs::{
    pll_control::PllControlReg, pll_go::PllGoReg, pll_status::PllStatusReg,
};
use hdmi_registers::components::wp_regs::pwr_ctrl::PwrCtrlReg;
use hdmi_registers::reg::{Block, Register};
use hdmi_tx_core::{BlockLayout, DriverConfig, HdmiTx, PollConfig};
use hdmi_tx_hal::{DelayNs, RegisterBus};

/// Bus address of register `T` in the default layout.
pub fn addr<T: Register>() -> u32 {
    BlockLayout::OMAP4.base(T::BLOCK) + u32::from(T::ADDRESS)
}

pub fn raw_addr(block: Block, offset: u16) -> u32 {
    BlockLayout::OMAP4.base(block) + u32::from(offset)
}

/// Captured register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u32),
    Write(u32, u32),
}

#[derive(Debug, Default, Clone)]
pub struct Faults {
    pub pll_power_stuck: bool,
    pub phy_power_stuck: bool,
    pub reset_stuck: bool,
    pub go_stuck: bool,
    pub no_lock: bool,
    pub ddc_bus_low: bool,
    pub ddc_no_ack: bool,
    /// IN_PROG stays set after a read command with nothing in the FIFO.
    pub ddc_stall: bool,
    /// IN_PROG never clears.
    pub ddc_busy: bool,
    pub fail_write_to: Option<u32>,
}

#[derive(Default)]
struct MockState {
    regs: HashMap<u32, u32>,
    log: Vec<Access>,
    fifo: VecDeque<u8>,
    reading: bool,
    edid: Vec<u8>,
    faults: Faults,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MockError(pub u32);

#[derive(Clone, Default)]
pub struct MockHdmi {
    state: Rc<RefCell<MockState>>,
}

impl MockHdmi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edid(edid: Vec<u8>) -> Self {
        let mock = Self::new();
        mock.state.borrow_mut().edid = edid;
        mock
    }

    pub fn faults(&self) -> std::cell::RefMut<'_, Faults> {
        std::cell::RefMut::map(self.state.borrow_mut(), |s| &mut s.faults)
    }

    /// Preload a register without logging the access.
    pub fn preload(&self, addr: u32, value: u32) {
        self.state.borrow_mut().regs.insert(addr, value);
    }

    /// Current register value (0 if never written).
    pub fn reg(&self, addr: u32) -> u32 {
        self.state.borrow().regs.get(&addr).copied().unwrap_or(0)
    }

    pub fn log(&self) -> Vec<Access> {
        self.state.borrow().log.clone()
    }

    pub fn writes_to(&self, addr: u32) -> Vec<u32> {
        self.state
            .borrow()
            .log
            .iter()
            .filter_map(|a| match a {
                Access::Write(w, v) if *w == addr => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.state
            .borrow()
            .log
            .iter()
            .filter(|a| matches!(a, Access::Write(..)))
            .count()
    }

    pub fn read_count(&self, addr: u32) -> usize {
        self.state
            .borrow()
            .log
            .iter()
            .filter(|a| **a == Access::Read(addr))
            .count()
    }

    /// Log index of the first write to `addr` matching `pred`.
    pub fn first_write(&self, addr: u32, pred: impl Fn(u32) -> bool) -> Option<usize> {
        self.state
            .borrow()
            .log
            .iter()
            .position(|a| matches!(a, Access::Write(w, v) if *w == addr && pred(*v)))
    }

    fn ddc_status(state: &MockState) -> u32 {
        let mut status = DdcStatusReg::default();
        status.set_fifo_empty(state.fifo.is_empty());
        status.set_in_prog(
            state.faults.ddc_busy || (state.faults.ddc_stall && state.reading),
        );
        status.set_no_ack(state.faults.ddc_no_ack && state.reading);
        status.set_bus_low(state.faults.ddc_bus_low && state.reading);
        status.to_raw()
    }

    fn on_write(state: &mut MockState, addr: u32, data: u32) {
        let old = state.regs.get(&addr).copied().unwrap_or(0);
        let mut value = data;

        if addr == addr_of::<PwrCtrlReg>() {
            let cmd = PwrCtrlReg::from_raw(data);
            let prev = PwrCtrlReg::from_raw(old);
            let pll_status = if state.faults.pll_power_stuck { prev.to_raw() } else { cmd.to_raw() >> 2 };
            let phy_status = if state.faults.phy_power_stuck { prev.to_raw() >> 4 } else { cmd.to_raw() >> 6 };
            value = (data & 0xCC) | (pll_status & 0x3) | ((phy_status & 0x3) << 4);
        } else if addr == addr_of::<PllControlReg>() {
            if data & (1 << 3) == 0 && !state.faults.reset_stuck {
                *state.regs.entry(addr_of::<PllStatusReg>()).or_default() |= 1;
            }
        } else if addr == addr_of::<PllGoReg>() {
            if data & 1 != 0 {
                if state.faults.go_stuck {
                    value = data & !1;
                } else if !state.faults.no_lock {
                    *state.regs.entry(addr_of::<PllStatusReg>()).or_default() |= 1 << 1;
                }
            }
        } else if addr == addr_of::<DdcCmdReg>() {
            state.fifo.clear();
            state.reading = false;
            match data & 0xF {
                0x2 | 0x4 => {
                    state.reading = true;
                    let segment = state.regs.get(&addr_of::<DdcSegmReg>()).copied().unwrap_or(0) & 0xFF;
                    let offset = state.regs.get(&addr_of::<DdcOffsetReg>()).copied().unwrap_or(0) & 0xFF;
                    let count = state.regs.get(&addr_of::<DdcCount1Reg>()).copied().unwrap_or(0) & 0xFF;
                    let start = (segment as usize) * 256 + offset as usize;
                    let end = (start + count as usize).min(state.edid.len());
                    if start < end && !state.faults.ddc_stall {
                        state.fifo.extend(&state.edid[start..end]);
                    }
                }
                _ => {}
            }
        }
        state.regs.insert(addr, value);
    }
}

// `addr` is shadowed by the bus-address parameters below.
fn addr_of<T: Register>() -> u32 {
    addr::<T>()
}

impl RegisterBus for MockHdmi {
    type Error = MockError;

    fn read_register(&mut self, addr: u32) -> Result<u32, Self::Error> {
        let mut state = self.state.borrow_mut();
        state.log.push(Access::Read(addr));
        if addr == addr_of::<DdcStatusReg>() {
            return Ok(Self::ddc_status(&state));
        }
        if addr == addr_of::<DdcDataReg>() {
            return Ok(u32::from(state.fifo.pop_front().unwrap_or(0)));
        }
        Ok(state.regs.get(&addr).copied().unwrap_or(0))
    }

    fn write_register(&mut self, addr: u32, data: u32) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.faults.fail_write_to == Some(addr) {
            return Err(MockError(addr));
        }
        state.log.push(Access::Write(addr, data));
        Self::on_write(&mut state, addr, data);
        Ok(())
    }
}

/// Delay provider that only accumulates the requested time.
#[derive(Clone, Default)]
pub struct MockDelay {
    pub total_ns: Rc<Cell<u64>>,
}

impl MockDelay {
    pub fn total_us(&self) -> u64 {
        self.total_ns.get() / 1_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + u64::from(ns));
    }
}

/// A driver over a fresh mock, with small poll budgets so timeouts are quick.
pub fn driver(mock: &MockHdmi) -> (HdmiTx<MockHdmi, MockDelay>, MockDelay) {
    let delay = MockDelay::default();
    let config = DriverConfig {
        poll: PollConfig {
            max_polls: 50,
            interval_us: 1,
        },
        ..DriverConfig::default()
    };
    (HdmiTx::new(mock.clone(), delay.clone(), config), delay)
}

/// Valid EDID image: base block plus `extensions` CEA extension blocks.
/// Byte 0x7E announces `announced` extensions.
pub fn edid_image(extensions: usize, announced: u8) -> Vec<u8> {
    let mut image = vec![0u8; 128 * (extensions + 1)];
    image[..8].copy_from_slice(&[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
    image[8] = 0x4C;
    image[9] = 0x2D;
    image[0x7E] = announced;
    for ext in 1..=extensions {
        let block = &mut image[ext * 128..(ext + 1) * 128];
        block[0] = 0x02;
        block[1] = 0x03;
        block[2] = ext as u8;
    }
    for block in image.chunks_mut(128) {
        fix_checksum(block);
    }
    image
}

pub fn fix_checksum(block: &mut [u8]) {
    let sum = block[..127].iter().fold(0u8, |a, b| a.wrapping_add(*b));
    block[127] = 0u8.wrapping_sub(sum);
}

/// DPD address, used by several EDID tests.
pub fn dpd_addr() -> u32 {
    addr::<DpdReg>()
}
