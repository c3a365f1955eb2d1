//! SystemRDL-style component definitions for the HDMI transmitter
#![allow(non_camel_case_types)] // needed for type normalization suffixes

pub mod core_av_regs;
pub mod core_sys_regs;
pub mod dco_freqsel_e;
pub mod ddc_cmd_e;
pub mod input_bus_width_e;
pub mod packet_mode_e;
pub mod packing_mode_e;
pub mod phy_pwr_e;
pub mod phy_regs;
pub mod pll_pwr_e;
pub mod pll_regs;
pub mod tclk_sel_e;
pub mod timing_mode_e;
pub mod wp_regs;
