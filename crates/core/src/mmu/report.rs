//! Final reports for the paging simulator.

use std::io::Write;
use std::mem;

use crate::common::error::SimError;
use crate::mmu::frame::FrameTable;
use crate::mmu::process::{MmuProcess, ProcStats, Pte};

/// Writes one `PT[pid]:` line per process.
///
/// Per vpage: `*` for an invalid entry, `#` for an invalid entry that has
/// been paged out (its swap copy is live), or `v:RMS` with each letter
/// replaced by `-` when the bit is clear.
pub fn write_page_tables<W: Write>(
    out: &mut W,
    processes: &[MmuProcess],
) -> Result<(), SimError> {
    for proc in processes {
        write!(out, "PT[{}]:", proc.pid)?;
        for (vpage, pte) in proc.page_table.iter().enumerate() {
            if !pte.valid() {
                write!(out, " {}", if pte.pagedout() { "#" } else { "*" })?;
            } else {
                write!(
                    out,
                    " {}:{}{}{}",
                    vpage,
                    if pte.referenced() { 'R' } else { '-' },
                    if pte.modified() { 'M' } else { '-' },
                    if pte.pagedout() { 'S' } else { '-' }
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the `FT:` line: `pid:vpage` per occupied frame, `*` per free one.
pub fn write_frame_table<W: Write>(out: &mut W, frames: &FrameTable) -> Result<(), SimError> {
    write!(out, "FT:")?;
    for frame in frames.frames() {
        match frame.tenant {
            Some(t) => write!(out, " {}:{}", t.pid, t.vpage)?,
            None => write!(out, " *")?,
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Writes one `PROC[pid]:` counter line per process and the TOTALCOST
/// summary. The trailing field is the page-table entry size in bytes.
pub fn write_summary<W: Write>(
    out: &mut W,
    stats: &[ProcStats],
    inst_count: u64,
    ctx_switches: u64,
    process_exits: u64,
    cost: u64,
) -> Result<(), SimError> {
    for (pid, s) in stats.iter().enumerate() {
        writeln!(
            out,
            "PROC[{}]: U={} M={} I={} O={} FI={} FO={} Z={} SV={} SP={}",
            pid, s.unmaps, s.maps, s.ins, s.outs, s.fins, s.fouts, s.zeros, s.segv, s.segprot
        )?;
    }
    writeln!(
        out,
        "TOTALCOST {} {} {} {} {}",
        inst_count,
        ctx_switches,
        process_exits,
        cost,
        mem::size_of::<Pte>()
    )?;
    Ok(())
}
