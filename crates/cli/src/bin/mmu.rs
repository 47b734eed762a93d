//! Virtual-memory paging simulator CLI.
//!
//! Reads the process/VMA header and the instruction stream from one trace
//! file, runs the configured replacement pager, and prints the sections
//! selected by `-o`: `O` per-operation trace, `P` final page tables, `F`
//! final frame table, `S` per-process statistics and TOTALCOST.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use osim_core::common::trace::TraceReader;
use osim_core::config::PagerKind;
use osim_core::mmu::{self, MmuSim};
use osim_core::{MmuConfig, RandomSource, SimError};

#[derive(Parser, Debug)]
#[command(
    name = "mmu",
    version,
    about = "Demand-paging simulator",
    long_about = "Replays a read/write/context-switch/exit stream over per-process page \
                  tables and a global frame table.\n\nExamples:\n  \
                  mmu -f16 -ac -oOPFS input1 rfile\n  mmu -f32 -aw -oS input2 rfile"
)]
struct Cli {
    /// Frame-table size (1..=128).
    #[arg(short = 'f', value_name = "FRAMES")]
    frames: Option<usize>,

    /// Pager: f (FIFO), r (Random), c (Clock), e (ESC/NRU), a (Aging), w (Working Set).
    #[arg(short = 'a', value_name = "ALGO")]
    algo: Option<String>,

    /// Output sections, any of `OPFS`.
    #[arg(short = 'o', value_name = "OPFS")]
    options: Option<String>,

    /// Trace: process/VMA header followed by the instruction stream.
    trace: PathBuf,

    /// Random-number file: count, then one integer per line.
    rfile: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = parse_args();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// CLI misuse exits 1 (not clap's 2); help and version still exit 0.
fn parse_args() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            process::exit(1);
        }
        e.exit()
    })
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let mut cfg = MmuConfig::default();
    if let Some(frames) = cli.frames {
        cfg = cfg.with_frames(frames)?;
    }
    if let Some(symbol) = cli.algo.as_deref().and_then(|a| a.chars().next()) {
        cfg.pager = PagerKind::from_symbol(symbol)?;
    }
    if let Some(flags) = cli.options.as_deref() {
        cfg.apply_output_flags(flags);
    }

    let trace = File::open(&cli.trace).map_err(|e| SimError::io(&cli.trace, e))?;
    let mut reader = TraceReader::new(BufReader::new(trace));
    let processes = mmu::load_processes(&mut reader)?;
    let rng = RandomSource::load(&cli.rfile)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut sim = MmuSim::new(cfg, processes, rng);
    sim.run(&mut reader, &mut out)?;
    sim.write_report(&mut out)?;
    out.flush().map_err(SimError::Output)?;
    Ok(())
}
