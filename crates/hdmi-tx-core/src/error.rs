use core::fmt;

use hdmi_registers::components::phy_pwr_e::PhyPwrE;
use hdmi_registers::components::pll_pwr_e::PllPwrE;
use hdmi_registers::encode::FieldOverflow;
use thiserror::Error;

use crate::video::ConfigureStep;

/// The status condition a bounded poll was waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPoint {
    /// PWR_CTRL PLL status to reach the commanded state
    PllPower(PllPwrE),
    /// PWR_CTRL PHY status to reach the commanded state
    PhyPower(PhyPwrE),
    /// PLL_STATUS.RESET_DONE
    PllReset,
    /// PLL_GO.GO read back as set
    PllGo,
    /// DDC_STATUS.IN_PROG to clear after a DDC command
    DdcIdle,
    /// DDC FIFO drain of one EDID block
    DdcFifoDrain,
}

impl fmt::Display for WaitPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitPoint::PllPower(state) => write!(f, "PLL power state {state:?}"),
            WaitPoint::PhyPower(state) => write!(f, "PHY power state {state:?}"),
            WaitPoint::PllReset => f.write_str("PLL reset done"),
            WaitPoint::PllGo => f.write_str("PLL GO"),
            WaitPoint::DdcIdle => f.write_str("DDC idle"),
            WaitPoint::DdcFifoDrain => f.write_str("DDC FIFO drain"),
        }
    }
}

/// Failure while writing one step of the basic configuration pass.
#[derive(Debug, Error)]
pub enum ConfigureFault<E: fmt::Debug> {
    #[error("register bus error: {0:?}")]
    Bus(E),
    #[error("{0}")]
    Field(FieldOverflow),
}

/// Error type for transmitter operations, generic over register bus errors.
#[derive(Debug, Error)]
pub enum HdmiError<E: fmt::Debug> {
    /// A status field did not reach the expected value within the poll budget.
    #[error("timed out waiting for {0}")]
    Timeout(WaitPoint),
    /// PLL_STATUS.LOCK never set; carries the programmed configuration words.
    #[error("PLL did not lock (CFG1 {cfg1:#010x}, CFG2 {cfg2:#010x}, CFG4 {cfg4:#010x})")]
    PllLock { cfg1: u32, cfg2: u32, cfg4: u32 },
    #[error("DDC bus held low")]
    DdcBusLow,
    #[error("DDC slave did not acknowledge")]
    DdcNoAck,
    #[error("EDID block {block} sums to {sum:#04x}")]
    EdidChecksum { block: u8, sum: u8 },
    /// The DDC transfer finished before a whole block arrived.
    #[error("EDID block {block} ended after {read} bytes")]
    EdidShortRead { block: u8, read: usize },
    /// The caller's EDID buffer cannot hold the requested block.
    #[error("EDID buffer of {len} bytes is too small")]
    BufferTooSmall { len: usize },
    #[error("register array {register} has no element {index}")]
    IndexOutOfRange { register: &'static str, index: usize },
    #[error(transparent)]
    Field(#[from] FieldOverflow),
    /// `basic_configure` stopped at `step`; nothing written by earlier steps
    /// is rolled back.
    #[error("basic configure failed at {step:?}: {cause}")]
    Configure {
        step: ConfigureStep,
        cause: ConfigureFault<E>,
    },
    #[error("register bus error: {0:?}")]
    Bus(E),
}

impl<E: fmt::Debug> HdmiError<E> {
    /// Poll budget exhaustion, including PLL lock failure.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HdmiError::Timeout(_) | HdmiError::PllLock { .. })
    }

    /// Bus or link-level I/O faults: DDC bus low, no-ack, short or corrupt
    /// EDID blocks and register bus errors.
    pub fn is_io_fault(&self) -> bool {
        matches!(
            self,
            HdmiError::DdcBusLow
                | HdmiError::DdcNoAck
                | HdmiError::EdidChecksum { .. }
                | HdmiError::EdidShortRead { .. }
                | HdmiError::Bus(_)
                | HdmiError::Configure {
                    cause: ConfigureFault::Bus(_),
                    ..
                }
        )
    }

    /// Rejected caller input: value ranges, buffer sizes, array indices.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            HdmiError::BufferTooSmall { .. }
                | HdmiError::IndexOutOfRange { .. }
                | HdmiError::Field(_)
                | HdmiError::Configure {
                    cause: ConfigureFault::Field(_),
                    ..
                }
        )
    }

    /// Attach the failing configure step to a bus or field error.
    pub(crate) fn at_step(self, step: ConfigureStep) -> Self {
        match self {
            HdmiError::Bus(e) => HdmiError::Configure {
                step,
                cause: ConfigureFault::Bus(e),
            },
            HdmiError::Field(f) => HdmiError::Configure {
                step,
                cause: ConfigureFault::Field(f),
            },
            other => other,
        }
    }
}

/// Rejected inputs to [`PllSettings::compute`](crate::pll::PllSettings::compute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PllComputeError {
    #[error("reference clock {clkin_khz} kHz / (REGN {regn} + 1) is below 10 kHz")]
    ReferenceTooLow { clkin_khz: u32, regn: u8 },
    #[error("REGM2 must be non-zero")]
    ZeroPostDivider,
    #[error(transparent)]
    Field(#[from] FieldOverflow),
}
