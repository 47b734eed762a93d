//! Final report for the disk I/O simulator.

use std::io::Write;

use crate::common::error::SimError;
use crate::iosched::request::IoInfo;
use crate::iosched::DiskStats;

/// Writes one line per request and the SUM line.
pub fn write_report<W: Write>(
    out: &mut W,
    infos: &[IoInfo],
    total_time: u64,
    stats: &DiskStats,
) -> Result<(), SimError> {
    for (id, info) in infos.iter().enumerate() {
        writeln!(
            out,
            "{:5}: {:5} {:5} {:5}",
            id, info.arrival, info.start, info.end
        )?;
    }

    let count = stats.completed.max(1) as f64;
    let avg_turnaround = stats.total_turnaround as f64 / count;
    let avg_wait = stats.total_wait as f64 / count;
    let io_utilization = stats.busy_ticks as f64 / total_time.max(1) as f64;

    writeln!(
        out,
        "SUM: {} {} {:.4} {:.2} {:.2} {}",
        total_time,
        stats.total_movement,
        io_utilization,
        avg_turnaround,
        avg_wait,
        stats.max_wait
    )?;
    Ok(())
}
