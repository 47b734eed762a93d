//! Shared-Infrastructure Tests.
//!
//! Covers the deterministic random source (draw scaling, wrap-around,
//! cursor discipline), the comment-skipping trace reader, and the
//! configuration parsers for all three CLIs.

use std::io::Cursor;
use std::io::Write;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use osim_core::common::trace::{TraceReader, parse_fields};
use osim_core::config::{DiskPolicyKind, PagerKind, SchedPolicyKind, defaults};
use osim_core::{RandomSource, SchedConfig, SimError};

// ══════════════════════════════════════════════════════════
// 1. Random source
// ══════════════════════════════════════════════════════════

/// `in_burst` scales into `[1, burst]` as `1 + value % burst`.
#[test]
fn rng_burst_scaling() {
    let mut rng = RandomSource::from_values(vec![0, 9, 10, 19]);
    assert_eq!(rng.in_burst(10), 1);
    assert_eq!(rng.in_burst(10), 10);
    assert_eq!(rng.in_burst(10), 1);
    assert_eq!(rng.in_burst(10), 10);
}

/// `index` is zero-based modulo, used by the Random pager.
#[test]
fn rng_index_scaling() {
    let mut rng = RandomSource::from_values(vec![5, 8]);
    assert_eq!(rng.index(4), 1);
    assert_eq!(rng.index(4), 0);
}

/// The cursor wraps to the start after the last value.
#[test]
fn rng_wraps_around() {
    let mut rng = RandomSource::from_values(vec![3, 7]);
    assert_eq!(rng.in_burst(100), 4);
    assert_eq!(rng.in_burst(100), 8);
    // Wrapped: the stream repeats from the front.
    assert_eq!(rng.in_burst(100), 4);
    assert_eq!(rng.cursor(), 1);
}

/// Loading parses the leading count and exactly that many values.
#[test]
fn rng_load_respects_declared_count() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "3\n10\n20\n30\n40\n").expect("write");
    let mut rng = RandomSource::load(file.path()).expect("loads");
    assert_eq!(rng.len(), 3);
    assert_eq!(rng.in_burst(100), 11);
    assert_eq!(rng.in_burst(100), 21);
    assert_eq!(rng.in_burst(100), 31);
    // The fourth value was beyond the declared count: wrap instead.
    assert_eq!(rng.in_burst(100), 11);
}

/// Fewer values than declared is a malformed file.
#[test]
fn rng_load_rejects_short_stream() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "5\n1\n2\n").expect("write");
    assert!(matches!(
        RandomSource::load(file.path()),
        Err(SimError::BadValue { .. })
    ));
}

proptest! {
    /// The draw counter advances by exactly one per drawn value, for any
    /// stream and any draw count.
    #[test]
    fn rng_draw_counter_is_exact(
        values in proptest::collection::vec(0u32..1000, 1..20),
        draws in 0usize..200,
    ) {
        let mut rng = RandomSource::from_values(values.clone());
        for _ in 0..draws {
            let _ = rng.in_burst(10);
        }
        prop_assert_eq!(rng.draws(), draws as u64);
        prop_assert!(rng.cursor() < values.len());
    }
}

// ══════════════════════════════════════════════════════════
// 2. Trace reader
// ══════════════════════════════════════════════════════════

/// Comment and blank lines are skipped; records come back verbatim.
#[test]
fn trace_reader_skips_comments_and_blanks() {
    let text = "# header\n1 5\n\n# interlude\n2 7\n";
    let mut reader = TraceReader::new(Cursor::new(text));
    assert_eq!(reader.next_record().expect("read"), Some("1 5".to_owned()));
    assert_eq!(reader.next_record().expect("read"), Some("2 7".to_owned()));
    assert_eq!(reader.next_record().expect("read"), None);
}

/// Field parsing reports the offending line.
#[test]
fn parse_fields_rejects_garbage() {
    assert!(matches!(
        parse_fields::<2>("request", "12 not-a-number"),
        Err(SimError::Malformed { .. })
    ));
    assert!(matches!(
        parse_fields::<4>("process", "1 2 3"),
        Err(SimError::Malformed { .. })
    ));
    let [a, b] = parse_fields::<2>("request", "  12   34 ").expect("parses");
    assert_eq!((a, b), (12, 34));
}

// ══════════════════════════════════════════════════════════
// 3. Configuration parsing
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("F", SchedPolicyKind::Fcfs, defaults::UNLIMITED_QUANTUM, 4)]
#[case("L", SchedPolicyKind::Lcfs, defaults::UNLIMITED_QUANTUM, 4)]
#[case("S", SchedPolicyKind::Srtf, defaults::UNLIMITED_QUANTUM, 4)]
#[case("R2", SchedPolicyKind::RoundRobin, 2, 4)]
#[case("R2:8", SchedPolicyKind::RoundRobin, 2, 4)] // RR always forces 4 levels
#[case("P5", SchedPolicyKind::Prio, 5, 4)]
#[case("P5:6", SchedPolicyKind::Prio, 5, 6)]
#[case("E3:2", SchedPolicyKind::PrePrio, 3, 2)]
fn scheduler_spec_parses(
    #[case] spec: &str,
    #[case] kind: SchedPolicyKind,
    #[case] quantum: u32,
    #[case] max_prio: usize,
) {
    let cfg = SchedConfig::parse_spec(spec).expect("valid spec");
    assert_eq!(cfg.kind, kind);
    assert_eq!(cfg.quantum, quantum);
    assert_eq!(cfg.max_prio, max_prio);
}

#[rstest]
#[case("X")]
#[case("")]
#[case("R")]
#[case("P0")]
fn scheduler_spec_rejects(#[case] spec: &str) {
    assert!(SchedConfig::parse_spec(spec).is_err());
}

#[rstest]
#[case('N', DiskPolicyKind::Fifo)]
#[case('S', DiskPolicyKind::Sstf)]
#[case('L', DiskPolicyKind::Look)]
#[case('C', DiskPolicyKind::CLook)]
#[case('F', DiskPolicyKind::FLook)]
fn disk_symbols_parse(#[case] symbol: char, #[case] kind: DiskPolicyKind) {
    assert_eq!(DiskPolicyKind::from_symbol(symbol).expect("valid"), kind);
}

#[rstest]
#[case('f', PagerKind::Fifo)]
#[case('r', PagerKind::Random)]
#[case('c', PagerKind::Clock)]
#[case('e', PagerKind::SecondChance)]
#[case('a', PagerKind::Aging)]
#[case('w', PagerKind::WorkingSet)]
fn pager_symbols_parse(#[case] symbol: char, #[case] kind: PagerKind) {
    assert_eq!(PagerKind::from_symbol(symbol).expect("valid"), kind);
}

/// Unknown selector letters are loud failures, not silent defaults.
#[test]
fn unknown_symbols_are_rejected() {
    assert!(DiskPolicyKind::from_symbol('Q').is_err());
    assert!(PagerKind::from_symbol('z').is_err());
}

/// Configs deserialise from stored JSON with defaults filled in.
#[test]
fn sched_config_deserialises() {
    let cfg: SchedConfig =
        serde_json::from_str(r#"{"kind": "RoundRobin", "quantum": 7}"#).expect("valid json");
    assert_eq!(cfg.kind, SchedPolicyKind::RoundRobin);
    assert_eq!(cfg.quantum, 7);
    assert_eq!(cfg.max_prio, defaults::DEFAULT_MAX_PRIO);
    assert!(!cfg.verbose);
}

/// The MMU output-flag string enables sections letter by letter.
#[test]
fn mmu_output_flags_apply() {
    let mut cfg = osim_core::MmuConfig::default();
    cfg.apply_output_flags("OS");
    assert!(cfg.show_ops);
    assert!(cfg.show_summary);
    assert!(!cfg.show_page_tables);
    assert!(!cfg.show_frame_table);
}

/// Frame counts outside `1..=128` are rejected.
#[test]
fn mmu_frame_count_validated() {
    assert!(osim_core::MmuConfig::default().with_frames(0).is_err());
    assert!(osim_core::MmuConfig::default().with_frames(129).is_err());
    assert!(osim_core::MmuConfig::default().with_frames(128).is_ok());
}
