//! Scheduling-Policy Tests.
//!
//! Each policy implements `SchedulingPolicy` with `add(pid, procs)` and
//! `next() -> Option<Pid>`. Tests exercise them in isolation against a
//! hand-built process arena.

use pretty_assertions::assert_eq;

use osim_core::sched::policies::{
    Fcfs, Lcfs, PrePrio, Prio, RoundRobin, SchedulingPolicy, Srtf,
};
use osim_core::sched::process::Process;

/// Arena of `n` processes with the given remaining CPU times.
fn arena(remaining: &[u64]) -> Vec<Process> {
    remaining
        .iter()
        .enumerate()
        .map(|(pid, &rem)| {
            let mut p = Process::new(pid, 0, rem.max(1), 10, 10);
            p.remaining_cpu_time = rem;
            p
        })
        .collect()
}

// ══════════════════════════════════════════════════════════
// 1. FCFS / LCFS
// ══════════════════════════════════════════════════════════

/// FCFS dispatches in admission order.
#[test]
fn fcfs_is_fifo() {
    let mut procs = arena(&[5, 5, 5]);
    let mut policy = Fcfs::new();
    for pid in 0..3 {
        policy.add(pid, &mut procs);
    }
    assert_eq!(policy.next(), Some(0));
    assert_eq!(policy.next(), Some(1));
    assert_eq!(policy.next(), Some(2));
    assert_eq!(policy.next(), None);
}

/// LCFS dispatches the most recent admission first.
#[test]
fn lcfs_is_lifo() {
    let mut procs = arena(&[5, 5, 5]);
    let mut policy = Lcfs::new();
    for pid in 0..3 {
        policy.add(pid, &mut procs);
    }
    assert_eq!(policy.next(), Some(2));
    assert_eq!(policy.next(), Some(1));
    assert_eq!(policy.next(), Some(0));
}

// ══════════════════════════════════════════════════════════
// 2. SRTF
// ══════════════════════════════════════════════════════════

/// SRTF orders by remaining time, ascending.
#[test]
fn srtf_orders_by_remaining() {
    let mut procs = arena(&[30, 10, 20]);
    let mut policy = Srtf::new();
    for pid in 0..3 {
        policy.add(pid, &mut procs);
    }
    assert_eq!(policy.next(), Some(1));
    assert_eq!(policy.next(), Some(2));
    assert_eq!(policy.next(), Some(0));
}

/// Equal remaining times dispatch in admission order.
#[test]
fn srtf_ties_keep_admission_order() {
    let mut procs = arena(&[10, 10, 5, 10]);
    let mut policy = Srtf::new();
    for pid in 0..4 {
        policy.add(pid, &mut procs);
    }
    assert_eq!(policy.next(), Some(2));
    assert_eq!(policy.next(), Some(0));
    assert_eq!(policy.next(), Some(1));
    assert_eq!(policy.next(), Some(3));
}

// ══════════════════════════════════════════════════════════
// 3. Round-robin
// ══════════════════════════════════════════════════════════

/// RR admission resets the dynamic priority, though RR never reads it.
#[test]
fn rr_resets_dynamic_priority_on_admission() {
    let mut procs = arena(&[5]);
    procs[0].static_prio = 3;
    procs[0].dynamic_prio = -1;
    let mut policy = RoundRobin::new();
    policy.add(0, &mut procs);
    assert_eq!(procs[0].dynamic_prio, 2);
    assert_eq!(policy.next(), Some(0));
}

// ══════════════════════════════════════════════════════════
// 4. PRIO / PREPRIO
// ══════════════════════════════════════════════════════════

/// Selection scans the active array from the highest level down; within a
/// level, FIFO.
#[test]
fn prio_scans_highest_level_first() {
    let mut procs = arena(&[5, 5, 5, 5]);
    let prios = [3, 3, 1, 2];
    for (pid, &dp) in prios.iter().enumerate() {
        procs[pid].static_prio = dp as u32 + 1;
        procs[pid].dynamic_prio = dp;
    }
    let mut policy = Prio::new(4);
    for pid in 0..4 {
        policy.add(pid, &mut procs);
    }
    assert_eq!(policy.next(), Some(0));
    assert_eq!(policy.next(), Some(1));
    assert_eq!(policy.next(), Some(3));
    assert_eq!(policy.next(), Some(2));
    assert_eq!(policy.next(), None);
}

/// A decayed process (dynamic priority below zero) is reset to
/// `static_prio - 1` and parked on the expired side: it runs only after
/// the active set drains.
#[test]
fn prio_expired_runs_after_active_drains() {
    let mut procs = arena(&[5, 5]);
    procs[0].static_prio = 4;
    procs[0].dynamic_prio = -1; // decayed: goes to expired[3]
    procs[1].static_prio = 1;
    procs[1].dynamic_prio = 0; // active[0]
    let mut policy = Prio::new(4);
    policy.add(0, &mut procs);
    policy.add(1, &mut procs);

    assert_eq!(procs[0].dynamic_prio, 3, "reset to static - 1");
    // Active side holds only pid 1, despite its lower level.
    assert_eq!(policy.next(), Some(1));
    // Exhausted active: the arrays swap and pid 0 surfaces.
    assert_eq!(policy.next(), Some(0));
    assert_eq!(policy.next(), None);
}

/// Only the preemptive variant reports preemption capability.
#[test]
fn only_preprio_preempts() {
    assert!(!Prio::new(4).preempts());
    assert!(PrePrio::new(4).preempts());
    assert!(!Fcfs::new().preempts());
    assert!(!Lcfs::new().preempts());
    assert!(!Srtf::new().preempts());
    assert!(!RoundRobin::new().preempts());
}
