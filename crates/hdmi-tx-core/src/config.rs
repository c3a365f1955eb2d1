//! Per-handle configuration: block layout and wait budgets.

use hdmi_registers::reg::Block;

/// Default number of status samples before a poll gives up.
pub const DEFAULT_MAX_POLLS: u32 = 10_000;
/// Default spacing between status samples, in microseconds.
pub const DEFAULT_POLL_INTERVAL_US: u32 = 1;
/// Default settle time after enabling the DDC clocks, in microseconds.
pub const DEFAULT_DDC_SETTLE_US: u32 = 1_000;
/// Default cap on DDC status samples while draining one EDID block.
pub const DEFAULT_DDC_DRAIN_MAX_POLLS: u32 = 1_000_000;

/// Byte offset of each register block from the instance base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub wrapper: u32,
    pub pll: u32,
    pub phy: u32,
    pub core_sys: u32,
    pub core_av: u32,
}

impl BlockLayout {
    /// OMAP4 placement of the sub-blocks behind the wrapper.
    pub const OMAP4: Self = Self {
        wrapper: 0x000,
        pll: 0x200,
        phy: 0x300,
        core_sys: 0x400,
        core_av: 0x900,
    };

    pub const fn base(&self, block: Block) -> u32 {
        match block {
            Block::Wrapper => self.wrapper,
            Block::Pll => self.pll,
            Block::Phy => self.phy,
            Block::CoreSys => self.core_sys,
            Block::CoreAv => self.core_av,
        }
    }
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self::OMAP4
    }
}

/// Budget for the bounded busy-wait on a status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub max_polls: u32,
    pub interval_us: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_polls: DEFAULT_MAX_POLLS,
            interval_us: DEFAULT_POLL_INTERVAL_US,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdcConfig {
    /// Delay after turning on the DDC clocks; some sinks return shifted
    /// data without it.
    pub settle_us: u32,
    pub drain_max_polls: u32,
}

impl Default for DdcConfig {
    fn default() -> Self {
        Self {
            settle_us: DEFAULT_DDC_SETTLE_US,
            drain_max_polls: DEFAULT_DDC_DRAIN_MAX_POLLS,
        }
    }
}

/// Everything fixed for the lifetime of a [`HdmiTx`](crate::HdmiTx) handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverConfig {
    pub layout: BlockLayout,
    pub poll: PollConfig,
    pub ddc: DdcConfig,
}
