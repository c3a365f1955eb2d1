//! PLL divider computation, programming and lock wait.

use hdmi_registers::components::dco_freqsel_e::DcoFreqselE;
use hdmi_registers::components::pll_pwr_e::PllPwrE;
use hdmi_registers::components::pll_regs::{
    cfg1::Cfg1Reg, cfg2::Cfg2Reg, cfg3::Cfg3Reg, cfg4::Cfg4Reg, pll_control::PllControlReg,
    pll_go::PllGoReg, pll_status::PllStatusReg,
};
use hdmi_registers::encode::FieldOverflow;
use hdmi_registers::reg::{Field, Register};
use hdmi_tx_hal::{DelayNs, RegisterBus};
use log::{debug, error};

use crate::driver::HdmiTx;
use crate::error::{HdmiError, PllComputeError, WaitPoint};

/// REGMF is an 18-bit fraction of one REGM step.
const REGMF_ONE: u64 = 1 << 18;

/// Pixel clocks above this (kHz) put the DCO in the 1-2 GHz range.
pub const DCO_HIGH_RANGE_KHZ: u32 = 100_000;

/// Divider settings for one PLL program call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PllSettings {
    /// Input divider N; the reference is `clkin / (regn + 1)`
    pub regn: u8,
    /// Integer multiplier M
    pub regm: u16,
    /// Post divider M2
    pub regm2: u8,
    /// Fractional multiplier
    pub regmf: u32,
    /// Sigma-delta divider, only programmed when `dcofreq` is set
    pub regsd: u8,
    /// Select the 1000-2000 MHz DCO range
    pub dcofreq: bool,
}

impl PllSettings {
    /// Derive dividers for a TMDS clock of ten times `pixel_clock_khz`
    /// from a `clkin_khz` reference.
    ///
    /// The arithmetic runs with the reference in 10 kHz units, which is
    /// where the factor of ten comes from.
    pub fn compute(
        clkin_khz: u32,
        pixel_clock_khz: u32,
        regn: u8,
        regm2: u8,
    ) -> Result<Self, PllComputeError> {
        if regm2 == 0 {
            return Err(PllComputeError::ZeroPostDivider);
        }
        let clkin = u64::from(clkin_khz / 10);
        let phy = u64::from(pixel_clock_khz);
        let n = u64::from(regn) + 1;
        let m2 = u64::from(regm2);

        let refclk = clkin / n;
        if refclk == 0 {
            return Err(PllComputeError::ReferenceTooLow { clkin_khz, regn });
        }

        let regm = phy * m2 / refclk;
        let mf = phy.saturating_sub(regm / m2 * refclk) * REGMF_ONE;
        let mut regmf = m2 * mf / refclk;
        if regmf >= REGMF_ONE {
            regmf = 0;
        }
        let regsd = ((regm * clkin / 10) / (n * 250) + 5) / 10;

        let settings = Self {
            regn,
            regm: narrow(Cfg1Reg::REGM, regm)? as u16,
            regm2,
            regmf: narrow(Cfg4Reg::REGMF, regmf)?,
            regsd: narrow(Cfg3Reg::SD, regsd)? as u8,
            dcofreq: pixel_clock_khz > DCO_HIGH_RANGE_KHZ,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check every value against its register field.
    pub fn validate(&self) -> Result<(), FieldOverflow> {
        let mut cfg1 = Cfg1Reg::default();
        cfg1.set_regm(self.regm)?;
        cfg1.set_regn(self.regn)?;
        let mut cfg4 = Cfg4Reg::default();
        cfg4.set_regm2(self.regm2)?;
        cfg4.set_regmf(self.regmf)?;
        Ok(())
    }
}

fn narrow(field: Field, value: u64) -> Result<u32, FieldOverflow> {
    let overflow = FieldOverflow {
        field: field.name,
        value: u32::try_from(value).unwrap_or(u32::MAX),
        width: field.width(),
    };
    let value = u32::try_from(value).map_err(|_| overflow)?;
    field.insert(0, value).map_err(|_| overflow)?;
    Ok(value)
}

/// Stages of [`HdmiTx::pll_program`], in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PllStep {
    /// PLL power ALL-OFF
    PowerOff,
    /// PLL power BOTH-ON-ALL-CLOCKS
    PowerOn,
    Reset,
    /// PLL_CONTROL.AUTOMODE = 0
    ManualMode,
    /// CFG1: REGM, REGN
    Dividers,
    /// CFG2 (and CFG3 on the high range)
    Frequency,
    /// CFG4: REGM2, REGMF
    PostDivider,
    Go,
    Lock,
    Done,
}

impl PllStep {
    pub const fn next(self) -> Self {
        match self {
            PllStep::PowerOff => PllStep::PowerOn,
            PllStep::PowerOn => PllStep::Reset,
            PllStep::Reset => PllStep::ManualMode,
            PllStep::ManualMode => PllStep::Dividers,
            PllStep::Dividers => PllStep::Frequency,
            PllStep::Frequency => PllStep::PostDivider,
            PllStep::PostDivider => PllStep::Go,
            PllStep::Go => PllStep::Lock,
            PllStep::Lock | PllStep::Done => PllStep::Done,
        }
    }
}

impl<R: RegisterBus, D: DelayNs> HdmiTx<R, D> {
    /// Power-cycle and reset the PLL, program `settings` and wait for lock.
    ///
    /// Settings are range-checked before the first register access. There
    /// is no retry on lock failure.
    pub fn pll_program(&mut self, settings: &PllSettings) -> Result<(), HdmiError<R::Error>> {
        settings.validate()?;
        let mut step = PllStep::PowerOff;
        while step != PllStep::Done {
            debug!("PLL: {step:?}");
            self.pll_step(step, settings)?;
            step = step.next();
        }
        debug!("PLL locked");
        Ok(())
    }

    fn pll_step(&mut self, step: PllStep, s: &PllSettings) -> Result<(), HdmiError<R::Error>> {
        match step {
            PllStep::PowerOff => self.set_pll_power(PllPwrE::AllOff),
            PllStep::PowerOn => self.set_pll_power(PllPwrE::BothOnAllClocks),
            PllStep::Reset => self.pll_reset(),
            PllStep::ManualMode => {
                self.port.modify::<PllControlReg>(|r| r.set_automode(false))?;
                Ok(())
            }
            PllStep::Dividers => {
                self.port.try_modify::<Cfg1Reg>(|r| {
                    r.set_regm(s.regm)?;
                    r.set_regn(s.regn)
                })?;
                Ok(())
            }
            PllStep::Frequency => {
                let mut cfg2 = self.port.read::<Cfg2Reg>()?;
                cfg2.set_highfreq(false);
                cfg2.set_refen(true);
                // PHY clock input stays off while locking.
                cfg2.set_clkinen(false);
                if s.dcofreq {
                    self.port.try_modify::<Cfg3Reg>(|r| r.set_sd(s.regsd))?;
                    cfg2.set_freqsel(DcoFreqselE::Dco1000To2000Mhz);
                } else {
                    cfg2.set_freqsel(DcoFreqselE::Dco500To1000Mhz);
                }
                self.port.write(cfg2)
            }
            PllStep::PostDivider => {
                self.port.try_modify::<Cfg4Reg>(|r| {
                    r.set_regm2(s.regm2)?;
                    r.set_regmf(s.regmf)
                })?;
                Ok(())
            }
            PllStep::Go => {
                self.port.modify::<PllGoReg>(|r| r.set_go(true))?;
                self.wait_field(PllGoReg::GO, 1, WaitPoint::PllGo)
            }
            PllStep::Lock => {
                if self.poll_field(PllStatusReg::LOCK, 1)? == 1 {
                    return Ok(());
                }
                let cfg1 = self.port.read::<Cfg1Reg>()?.to_raw();
                let cfg2 = self.port.read::<Cfg2Reg>()?.to_raw();
                let cfg4 = self.port.read::<Cfg4Reg>()?.to_raw();
                error!("cannot lock PLL: CFG1 {cfg1:#x} CFG2 {cfg2:#x} CFG4 {cfg4:#x}");
                Err(HdmiError::PllLock { cfg1, cfg2, cfg4 })
            }
            PllStep::Done => Ok(()),
        }
    }
}
