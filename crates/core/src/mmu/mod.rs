//! Virtual-memory paging simulator.
//!
//! Drives per-process page tables over a global frame table from a
//! read/write/context-switch/exit instruction stream. Page faults are
//! resolved from the free list first, then by the configured replacement
//! pager; every observable operation (MAP, UNMAP, IN, OUT, ...) is charged
//! into a single cost total and counted per process.

/// Frame table, tenants, and the free list.
pub mod frame;
/// Replacement pager catalogue.
pub mod policies;
/// VMAs, page-table entries, and per-process counters.
pub mod process;
/// Page-table, frame-table, and summary reports.
pub mod report;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::common::error::SimError;
use crate::common::rng::RandomSource;
use crate::common::trace::{TraceReader, parse_fields};
use crate::config::MmuConfig;
use crate::mmu::frame::{FrameTable, Tenant};
use crate::mmu::policies::{Pager, PagerCtx, PagerPolicy};
use crate::mmu::process::{MmuProcess, NUM_VPAGES, ProcStats, Vma};

/// Per-operation costs, charged into the single 64-bit total.
pub mod costs {
    /// One read or write instruction.
    pub const READ_WRITE: u64 = 1;
    /// Context switch.
    pub const CTX_SWITCH: u64 = 130;
    /// Process exit.
    pub const PROC_EXIT: u64 = 1230;
    /// Install a mapping.
    pub const MAP: u64 = 350;
    /// Tear down a mapping.
    pub const UNMAP: u64 = 410;
    /// Page in from swap.
    pub const IN: u64 = 3200;
    /// Page out to swap.
    pub const OUT: u64 = 2750;
    /// Read a file-backed page.
    pub const FIN: u64 = 2350;
    /// Write back a file-backed page.
    pub const FOUT: u64 = 2800;
    /// Zero-fill a fresh page.
    pub const ZERO: u64 = 150;
    /// Access outside every VMA.
    pub const SEGV: u64 = 440;
    /// Store to a write-protected page.
    pub const SEGPROT: u64 = 410;
}

/// Reads the process table off the front of an MMU trace: process count,
/// then per process a VMA count followed by that many
/// `start end wprot fmap` lines. The reader is left positioned at the
/// first instruction.
pub fn load_processes<R: BufRead>(
    trace: &mut TraceReader<R>,
) -> Result<Vec<MmuProcess>, SimError> {
    let count_line = trace
        .next_record()?
        .ok_or_else(|| SimError::malformed("process count", ""))?;
    let [count] = parse_fields::<1>("process count", &count_line)?;
    let mut processes = Vec::new();
    for pid in 0..count.max(0) as usize {
        let vma_line = trace
            .next_record()?
            .ok_or_else(|| SimError::malformed("VMA count", ""))?;
        let [vma_count] = parse_fields::<1>("VMA count", &vma_line)?;
        let mut vmas = Vec::new();
        for _ in 0..vma_count.max(0) as usize {
            let line = trace
                .next_record()?
                .ok_or_else(|| SimError::malformed("VMA", ""))?;
            let [start, end, wprot, fmap] = parse_fields("VMA", &line)?;
            if start < 0 || end < start || end as usize >= NUM_VPAGES {
                return Err(SimError::malformed("VMA", line));
            }
            vmas.push(Vma {
                start: start as usize,
                end: end as usize,
                write_protected: wprot != 0,
                file_mapped: fmap != 0,
            });
        }
        processes.push(MmuProcess::new(pid, vmas));
    }
    Ok(processes)
}

/// The paging engine.
#[derive(Debug)]
pub struct MmuSim {
    cfg: MmuConfig,
    /// Process arena, indexed by pid.
    pub processes: Vec<MmuProcess>,
    /// Per-process operation counters, parallel to `processes`.
    pub stats: Vec<ProcStats>,
    /// Frame arena and free list.
    pub frames: FrameTable,
    /// Shared deterministic random stream.
    pub rng: RandomSource,
    pager: PagerPolicy,
    current: Option<usize>,
    /// Read/write instruction clock (context switches and exits excluded).
    pub clock: u64,
    /// Total instructions processed, for trace numbering and the summary.
    pub inst_count: u64,
    /// Context switches taken.
    pub ctx_switches: u64,
    /// Process exits taken.
    pub process_exits: u64,
    /// Total simulated cost.
    pub cost: u64,
}

impl MmuSim {
    /// Builds the engine: all frames start free, no process is current.
    pub fn new(cfg: MmuConfig, processes: Vec<MmuProcess>, rng: RandomSource) -> Self {
        let stats = processes.iter().map(|_| ProcStats::default()).collect();
        let frames = FrameTable::new(cfg.frames);
        let pager = PagerPolicy::from_kind(cfg.pager);
        Self {
            cfg,
            processes,
            stats,
            frames,
            rng,
            pager,
            current: None,
            clock: 0,
            inst_count: 0,
            ctx_switches: 0,
            process_exits: 0,
            cost: 0,
        }
    }

    /// Consumes the instruction stream to exhaustion.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        trace: &mut TraceReader<R>,
        out: &mut W,
    ) -> Result<(), SimError> {
        while let Some(line) = trace.next_record()? {
            let mut fields = line.split_whitespace();
            let op = fields
                .next()
                .and_then(|t| if t.len() == 1 { t.chars().next() } else { None })
                .ok_or_else(|| SimError::malformed("instruction", line.clone()))?;
            let operand: usize = fields
                .next()
                .and_then(|t| t.parse().ok())
                .ok_or_else(|| SimError::malformed("instruction", line.clone()))?;

            let index = self.inst_count;
            self.inst_count += 1;
            if self.cfg.show_ops {
                writeln!(out, "{index}: ==> {op} {operand}")?;
            }

            match op {
                'c' => {
                    if operand >= self.processes.len() {
                        return Err(SimError::malformed("instruction", line));
                    }
                    self.ctx_switches += 1;
                    self.cost += costs::CTX_SWITCH;
                    self.current = Some(operand);
                }
                'e' => {
                    let pid = self
                        .current
                        .ok_or_else(|| SimError::malformed("instruction", line.clone()))?;
                    if self.cfg.show_ops {
                        writeln!(out, "EXIT current process {pid}")?;
                    }
                    self.process_exits += 1;
                    self.cost += costs::PROC_EXIT;
                    self.exit_process(pid, out)?;
                    self.current = None;
                }
                'r' | 'w' => {
                    let pid = self
                        .current
                        .ok_or_else(|| SimError::malformed("instruction", line.clone()))?;
                    if operand >= NUM_VPAGES {
                        return Err(SimError::malformed("instruction", line));
                    }
                    self.clock += 1;
                    self.cost += costs::READ_WRITE;
                    self.access(pid, operand, op == 'w', out)?;
                }
                _ => return Err(SimError::malformed("instruction", line)),
            }
        }
        Ok(())
    }

    /// One read or write: fault resolution, then the REFERENCED/MODIFIED
    /// update. A SEGV ends the instruction before the update.
    fn access<W: Write>(
        &mut self,
        pid: usize,
        vpage: usize,
        is_write: bool,
        out: &mut W,
    ) -> Result<(), SimError> {
        if !self.processes[pid].page_table[vpage].valid() {
            if !self.processes[pid].page_table[vpage].vma_searched() {
                let hit = self.processes[pid].search_vmas(vpage);
                let pte = &mut self.processes[pid].page_table[vpage];
                pte.set_in_vma(hit);
                pte.set_vma_searched(true);
            }
            if !self.processes[pid].page_table[vpage].in_vma() {
                if self.cfg.show_ops {
                    writeln!(out, " SEGV")?;
                }
                self.cost += costs::SEGV;
                self.stats[pid].segv += 1;
                return Ok(());
            }
            let frame = self.get_frame();
            if self.frames.frames()[frame].tenant.is_some() {
                self.unmap(frame, false, out)?;
            }
            self.map(frame, pid, vpage, out)?;
        }

        let pte = &mut self.processes[pid].page_table[vpage];
        pte.set_referenced(true);
        if is_write {
            if pte.write_protect() {
                if self.cfg.show_ops {
                    writeln!(out, " SEGPROT")?;
                }
                self.cost += costs::SEGPROT;
                self.stats[pid].segprot += 1;
            } else {
                pte.set_modified(true);
            }
        }
        Ok(())
    }

    /// Next frame: free list front, else the pager's victim.
    fn get_frame(&mut self) -> usize {
        if let Some(free) = self.frames.allocate_free() {
            return free;
        }
        let mut ctx = PagerCtx {
            frames: self.frames.frames_mut(),
            processes: &mut self.processes,
            rng: &mut self.rng,
            clock: self.clock,
        };
        let victim = self.pager.select_victim(&mut ctx);
        debug!(victim, "pager selected victim frame");
        victim
    }

    /// Evicts the frame's tenant. A dirty page is written back (FOUT for
    /// file-backed, OUT plus PAGEDOUT for anonymous), except on process
    /// exit, where dirty anonymous pages are dropped silently. An exit
    /// also returns the frame to the free list.
    fn unmap<W: Write>(&mut self, frame: usize, exiting: bool, out: &mut W) -> Result<(), SimError> {
        let Some(Tenant { pid, vpage }) = self.frames.frames()[frame].tenant else {
            return Ok(());
        };
        if self.cfg.show_ops {
            writeln!(out, " UNMAP {pid}:{vpage}")?;
        }
        self.cost += costs::UNMAP;
        self.stats[pid].unmaps += 1;

        let pte = &mut self.processes[pid].page_table[vpage];
        if pte.modified() {
            if pte.file_mapped() {
                if self.cfg.show_ops {
                    writeln!(out, " FOUT")?;
                }
                self.cost += costs::FOUT;
                self.stats[pid].fouts += 1;
            } else if !exiting {
                if self.cfg.show_ops {
                    writeln!(out, " OUT")?;
                }
                self.cost += costs::OUT;
                self.stats[pid].outs += 1;
                pte.set_pagedout(true);
            }
        }
        pte.set_valid(false);
        pte.set_referenced(false);
        pte.set_modified(false);
        pte.set_frame(0);

        self.frames.frames_mut()[frame].tenant = None;
        if exiting {
            self.frames.release(frame);
        }
        Ok(())
    }

    /// Installs `(pid, vpage)` into the frame and emits the fill source:
    /// FIN for file-backed pages, IN for previously paged-out pages, ZERO
    /// otherwise, followed by the MAP itself.
    fn map<W: Write>(
        &mut self,
        frame: usize,
        pid: usize,
        vpage: usize,
        out: &mut W,
    ) -> Result<(), SimError> {
        {
            let f = &mut self.frames.frames_mut()[frame];
            f.tenant = Some(Tenant { pid, vpage });
            f.last_used = self.clock;
        }

        let pte = &mut self.processes[pid].page_table[vpage];
        if pte.file_mapped() {
            if self.cfg.show_ops {
                writeln!(out, " FIN")?;
            }
            self.cost += costs::FIN;
            self.stats[pid].fins += 1;
        } else if pte.pagedout() {
            if self.cfg.show_ops {
                writeln!(out, " IN")?;
            }
            self.cost += costs::IN;
            self.stats[pid].ins += 1;
        } else {
            if self.cfg.show_ops {
                writeln!(out, " ZERO")?;
            }
            self.cost += costs::ZERO;
            self.stats[pid].zeros += 1;
        }
        pte.set_valid(true);
        pte.set_frame(frame);
        if self.pager.resets_age() {
            self.frames.frames_mut()[frame].age = 0;
        }
        if self.cfg.show_ops {
            writeln!(out, " MAP {frame}")?;
        }
        self.cost += costs::MAP;
        self.stats[pid].maps += 1;
        Ok(())
    }

    /// Tears down an exiting process: every valid page is unmapped (frame
    /// back to the free list), then the swap/backing bookkeeping bits are
    /// cleared so the address space leaves no residue.
    fn exit_process<W: Write>(&mut self, pid: usize, out: &mut W) -> Result<(), SimError> {
        for vpage in 0..NUM_VPAGES {
            let pte = self.processes[pid].page_table[vpage];
            if pte.valid() {
                self.unmap(pte.frame(), true, out)?;
            }
            let pte = &mut self.processes[pid].page_table[vpage];
            pte.set_file_mapped(false);
            pte.set_pagedout(false);
            pte.set_in_vma(false);
            pte.set_vma_searched(false);
        }
        Ok(())
    }

    /// Writes the enabled final sections (page tables, frame table,
    /// per-process statistics and TOTALCOST) in the fixed order.
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<(), SimError> {
        if self.cfg.show_page_tables {
            report::write_page_tables(out, &self.processes)?;
        }
        if self.cfg.show_frame_table {
            report::write_frame_table(out, &self.frames)?;
        }
        if self.cfg.show_summary {
            report::write_summary(
                out,
                &self.stats,
                self.inst_count,
                self.ctx_switches,
                self.process_exits,
                self.cost,
            )?;
        }
        Ok(())
    }
}
