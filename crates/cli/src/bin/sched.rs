//! CPU scheduling simulator CLI.
//!
//! Reads a process trace and a random-number file, runs the configured
//! scheduling policy to completion, and prints the per-process table and
//! SUM line. `-v` adds the per-transition trace. Diagnostics (via
//! `RUST_LOG`) go to stderr; simulator output goes to stdout.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use osim_core::sched::{self, SchedSim};
use osim_core::{RandomSource, SchedConfig, SimError};

#[derive(Parser, Debug)]
#[command(
    name = "sched",
    version,
    about = "Discrete-event CPU scheduling simulator",
    long_about = "Drives a four-state process lifecycle from a trace under a pluggable \
                  scheduling policy.\n\nExamples:\n  sched -sF input1 rfile\n  \
                  sched -v -sR2 input2 rfile\n  sched -sE4:5 input3 rfile"
)]
struct Cli {
    /// Print the per-transition trace.
    #[arg(short = 'v')]
    verbose: bool,

    /// Scheduler spec: F, L, S, R<q>, P<q>[:<maxprio>], E<q>[:<maxprio>].
    #[arg(short = 's', value_name = "SPEC")]
    scheduler: Option<String>,

    /// Process trace: one `arrival total_cpu max_cpu_burst max_io_burst` per line.
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
    let mut cfg = match cli.scheduler.as_deref() {
        Some(spec) => SchedConfig::parse_spec(spec)?,
        None => SchedConfig::default(),
    };
    cfg.verbose = cli.verbose;

    let trace = File::open(&cli.trace).map_err(|e| SimError::io(&cli.trace, e))?;
    let procs = sched::load_processes(BufReader::new(trace))?;
    let rng = RandomSource::load(&cli.rfile)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut sim = SchedSim::new(cfg, procs, rng);
    let _final_time = sim.run(&mut out)?;
    sim.write_report(&mut out)?;
    out.flush().map_err(SimError::Output)?;
    Ok(())
}
