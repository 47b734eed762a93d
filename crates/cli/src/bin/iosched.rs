//! Disk I/O scheduling simulator CLI.
//!
//! Reads an arrival-ordered request trace, services it tick by tick under
//! the configured seek policy, and prints the request table and SUM line.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use osim_core::config::{DiskConfig, DiskPolicyKind};
use osim_core::iosched::{self, DiskSim};
use osim_core::SimError;

#[derive(Parser, Debug)]
#[command(
    name = "iosched",
    version,
    about = "Per-tick disk I/O scheduling simulator",
    long_about = "Moves one disk head across tracks under a pluggable seek policy.\n\n\
                  Examples:\n  iosched input1\n  iosched -sS input2\n  iosched -sF input3"
)]
struct Cli {
    /// Seek policy: N (FIFO), S (SSTF), L (LOOK), C (C-LOOK), F (F-LOOK).
    #[arg(short = 's', value_name = "ALGO")]
    algo: Option<String>,

    /// Request trace: one `arrival_time target_track` per non-comment line.
    trace: PathBuf,
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
    let cfg = match cli.algo.as_deref().and_then(|a| a.chars().next()) {
        Some(symbol) => DiskConfig {
            kind: DiskPolicyKind::from_symbol(symbol)?,
        },
        None => DiskConfig::default(),
    };

    let trace = File::open(&cli.trace).map_err(|e| SimError::io(&cli.trace, e))?;
    let requests = iosched::load_requests(BufReader::new(trace))?;

    let mut sim = DiskSim::new(&cfg, requests);
    let _total = sim.run();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    sim.write_report(&mut out)?;
    out.flush().map_err(SimError::Output)?;
    Ok(())
}
