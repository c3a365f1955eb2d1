//! Run the transmitter bring-up against the register model and print what
//! the sequencer left behind.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use hdmi_registers::RegisterInfo;
use hdmi_tx_core::edid::{EDID_BLOCK_SIZE, block_checksum};
use hdmi_tx_core::{
    DeepColorMode, DisplayTiming, DriverConfig, HdmiDviMode, HdmiTx, OutputConfig, PllSettings,
};
use hdmi_tx_sim::{EdidBuilder, Fault, SimulatedTransmitter, StdDelay};

#[derive(Parser)]
#[command(name = "hdmi-tx-sim")]
#[command(about = "Exercise the HDMI transmitter bring-up against a register model", long_about = None)]
struct Cli {
    /// Video mode to program
    #[arg(short, long, value_enum, default_value_t = Mode::Svga)]
    mode: Mode,

    /// Drive a DVI sink instead of HDMI
    #[arg(long)]
    dvi: bool,

    /// CEA video identification code carried in the AVI info frame
    #[arg(long, default_value_t = 0)]
    vic: u8,

    /// Bits per pixel on the TMDS link
    #[arg(long, value_enum, default_value_t = Depth::Bits24)]
    depth: Depth,

    /// Reference clock into the PLL, in kHz
    #[arg(long, default_value_t = 38_400)]
    clkin_khz: u32,

    /// PLL input divider N
    #[arg(long, default_value_t = 15)]
    regn: u8,

    /// PLL post divider M2
    #[arg(long, default_value_t = 1)]
    regm2: u8,

    /// Extension blocks the simulated sink announces
    #[arg(long, default_value_t = 1)]
    extensions: u8,

    /// Make the model misbehave in one way
    #[arg(long, value_enum)]
    inject: Option<Inject>,

    /// Skip the register dump
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// 800x600 at 60 Hz
    Svga,
    /// 1280x720p at 60 Hz
    Hd720,
    /// 1920x1080p at 60 Hz
    Hd1080,
}

impl Mode {
    fn timing(self) -> DisplayTiming {
        match self {
            Mode::Svga => DisplayTiming::VESA_800X600_60,
            Mode::Hd720 => DisplayTiming::CEA_1280X720_60,
            Mode::Hd1080 => DisplayTiming::CEA_1920X1080_60,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Depth {
    #[value(name = "24")]
    Bits24,
    #[value(name = "30")]
    Bits30,
    #[value(name = "36")]
    Bits36,
}

impl From<Depth> for DeepColorMode {
    fn from(depth: Depth) -> Self {
        match depth {
            Depth::Bits24 => DeepColorMode::Bits24,
            Depth::Bits30 => DeepColorMode::Bits30,
            Depth::Bits36 => DeepColorMode::Bits36,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Inject {
    PllLock,
    DdcNack,
    BadChecksum,
    PhyPower,
}

impl From<Inject> for Fault {
    fn from(inject: Inject) -> Self {
        match inject {
            Inject::PllLock => Fault::PllLock,
            Inject::DdcNack => Fault::DdcNack,
            Inject::BadChecksum => Fault::BadChecksum,
            Inject::PhyPower => Fault::PhyPower,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let timing = cli.mode.timing();
    let request = OutputConfig {
        timing,
        mode: if cli.dvi { HdmiDviMode::Dvi } else { HdmiDviMode::Hdmi },
        video_code: cli.vic,
        deep_color: cli.depth.into(),
    };
    let pll = PllSettings::compute(cli.clkin_khz, timing.pixel_clock_khz, cli.regn, cli.regm2)
        .context("PLL divider computation")?;
    log::info!(
        "{}x{} @ {} kHz: N={} M={} M2={} MF={} SD={} high-range={}",
        timing.xres,
        timing.yres,
        timing.pixel_clock_khz,
        pll.regn,
        pll.regm,
        pll.regm2,
        pll.regmf,
        pll.regsd,
        pll.dcofreq
    );

    let config = DriverConfig::default();
    let edid = EdidBuilder::new()
        .preferred(timing)
        .extensions(cli.extensions)
        .build();
    let mut sim = SimulatedTransmitter::new(config.layout, edid);
    if let Some(inject) = cli.inject {
        sim = sim.with_fault(inject.into());
    }
    let mut tx = HdmiTx::new(sim, StdDelay, config);

    let mut buf = vec![0u8; EDID_BLOCK_SIZE * (usize::from(cli.extensions) + 1)];
    let edid_result = tx.read_edid(&mut buf);
    let bring_up = tx.bring_up(&pll, &request);

    match &edid_result {
        Ok(len) => {
            for (n, block) in buf[..*len].chunks(EDID_BLOCK_SIZE).enumerate() {
                println!(
                    "EDID block {n}: tag {:#04x} checksum {:#04x}",
                    block[0],
                    block_checksum(block)
                );
            }
        }
        Err(e) => eprintln!("EDID read failed: {e}"),
    }

    if !cli.quiet {
        tx.dump_registers(print_register)
            .map_err(|e| anyhow::anyhow!("register dump: {e}"))?;
    }
    let (sim, _) = tx.release();
    let (reads, writes) = sim.access_counts();
    log::info!("{reads} register reads, {writes} writes");

    if let Err(e) = bring_up {
        bail!("bring-up failed: {e}");
    }
    edid_result.map_err(|e| anyhow::anyhow!("EDID read failed: {e}"))?;
    Ok(())
}

fn print_register(info: &RegisterInfo, value: u32) {
    println!("{:<35} {:08x}", info.name, value);
}
