//! End-to-end tests over trace files on disk.

use std::fs;
use std::path::Path;

use rvdv_isa::CompositeDecoder;
use rvdv_trace::{
    Comparator, CompareEnd, Error, Field, NormalizedRecord, SourceColumns, TolerancePolicy,
    TraceSink, canonicalize_file, compare_files, read_trace,
};

const CORE_LOG: &str = "\
pc,binary,mode,gpr,csr,instr_count
80000000,00000297,3,5:0000000080000000,,1
80000004,02028293,3,5:0000000080000020,,2
80000008,30529073,3,,305:0000000080000020,3
8000000c,00a00513,3,a:000000000000000a,,4
80000010,00000073,3,,,5
80000014,00000013,3,,,6
";

const SPIKE_TRACE: &str = "\
pc,instr,gpr,csr,binary,mode,instr_str,operand,pad
80000000,auipc,t0:0000000080000000,,00000297,3,\"auipc t0, 0x0\",\"t0, 0x0\",
80000004,addi,t0:0000000080000020,,02028293,3,\"addi t0, t0, 32\",\"t0, t0, 32\",
80000008,csrw,,,30529073,,\"csrw mtvec, t0\",\"mtvec, t0\",
8000000c,li,a0:000000000000000a,,00a00513,3,\"li a0, 10\",\"a0, 10\",
80000010,ecall,,,00000073,3,ecall,,
80000018,ebreak,,,00100073,3,ebreak,,
";

fn canonicalize_core_log(dir: &Path, out_name: &str) -> std::path::PathBuf {
    let log = dir.join("core.log.csv");
    fs::write(&log, CORE_LOG).unwrap();
    let out = dir.join(out_name);
    let summary = canonicalize_file(
        &log,
        &out,
        &CompositeDecoder::standard(),
        &SourceColumns::default(),
    )
    .unwrap();
    assert_eq!(summary.rows, 6);
    assert_eq!(summary.unknown, 0);
    out
}

#[test]
fn test_canonicalized_log_matches_spike() {
    let dir = tempfile::tempdir().unwrap();
    let candidate = canonicalize_core_log(dir.path(), "core.csv");
    let reference = dir.path().join("spike.csv");
    fs::write(&reference, SPIKE_TRACE).unwrap();

    let comparator = Comparator::new(TolerancePolicy::riscv_dv());
    let result = compare_files(&reference, &candidate, &comparator).unwrap();
    assert!(result.is_match());
    assert_eq!(result.end, CompareEnd::TerminalInstruction { line: 4 });
    // The csrw record reports neither csr nor mode in the reference.
    assert_eq!(result.tolerated, 2);
}

#[test]
fn test_strict_comparison_reports_csr() {
    let dir = tempfile::tempdir().unwrap();
    let candidate = canonicalize_core_log(dir.path(), "core.csv");
    let reference = dir.path().join("spike.csv");
    fs::write(&reference, SPIKE_TRACE).unwrap();

    let comparator = Comparator::new(TolerancePolicy::strict());
    let result = compare_files(&reference, &candidate, &comparator).unwrap();
    let point = result.divergence().unwrap();
    assert_eq!(point.line, 2);
    assert_eq!(point.field, Field::Csr);
    assert_eq!(point.expected, "");
    assert_eq!(point.actual, "mtvec:0000000080000020");
    assert_eq!(point.instr_str, "csrw mtvec, t0");
}

#[test]
fn test_zstd_trace_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let plain = canonicalize_core_log(dir.path(), "core.csv");
    let compressed = canonicalize_core_log(dir.path(), "core.csv.zst");

    let raw = fs::read(&compressed).unwrap();
    assert_eq!(&raw[..4], &[0x28, 0xB5, 0x2F, 0xFD]);

    let plain: Vec<_> = read_trace(&plain).unwrap().map(Result::unwrap).collect();
    let compressed: Vec<_> = read_trace(&compressed)
        .unwrap()
        .map(Result::unwrap)
        .collect();
    assert_eq!(plain.len(), 6);
    assert_eq!(plain, compressed);
}

#[test]
fn test_normalized_trace_rewrites_identically() {
    let dir = tempfile::tempdir().unwrap();
    let trace = canonicalize_core_log(dir.path(), "core.csv");
    let records: Vec<NormalizedRecord> = read_trace(&trace).unwrap().map(Result::unwrap).collect();

    let copy = dir.path().join("copy.csv");
    let mut sink = TraceSink::create(&copy).unwrap();
    {
        let mut writer = csv::Writer::from_writer(&mut sink);
        for record in &records {
            writer.serialize(record).unwrap();
        }
        writer.flush().unwrap();
    }
    sink.finish().unwrap();

    let expected = fs::read_to_string(&trace).unwrap();
    assert_eq!(fs::read_to_string(&copy).unwrap(), expected);
}

#[test]
fn test_unknown_register_aborts_canonicalize() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bad.csv");
    fs::write(&log, "pc,gpr,csr,binary,mode\n0,,7c0:1,00000013,3\n").unwrap();

    let err = canonicalize_file(
        &log,
        &dir.path().join("out.csv"),
        &CompositeDecoder::standard(),
        &SourceColumns::default(),
    )
    .unwrap_err();
    let Error::UnknownRegisterIndex { index, .. } = err.root() else {
        panic!("unexpected root error: {err}");
    };
    assert_eq!(*index, 0x7c0);
    let message = err.to_string();
    assert!(message.starts_with("row 0: unknown CSR index 0x7c0"));
}

#[test]
fn test_missing_trace_file() {
    let dir = tempfile::tempdir().unwrap();
    let comparator = Comparator::default();
    let err = compare_files(
        &dir.path().join("absent.csv"),
        &dir.path().join("absent.csv"),
        &comparator,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_reference_without_diagnostic_columns() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("ref.csv");
    let candidate = dir.path().join("cand.csv");
    fs::write(&reference, "pc,gpr,csr,binary,mode\n100,a0:5,,00000013,3\n").unwrap();
    fs::write(&candidate, "pc,gpr,csr,binary,mode\n100,a0:6,,00000013,3\n").unwrap();

    let comparator = Comparator::default();
    let result = compare_files(&reference, &candidate, &comparator).unwrap();
    let point = result.divergence().unwrap();
    assert_eq!(point.field, Field::Gpr);
    assert_eq!(
        point.to_string(),
        "Divergence on line 0: expected gpr a0:5 but got a0:6\nInstruction is 100 "
    );
}

#[test]
fn test_truncated_candidate_tail_past_reference() {
    let dir = tempfile::tempdir().unwrap();
    let header = "pc,instr,gpr,csr,binary,mode,instr_str,operand,pad\n";
    let row = "80000000,addi,a0:1,,00100513,3,\"addi a0, zero, 1\",\"a0, zero, 1\",\n";
    let reference = dir.path().join("ref.csv");
    let candidate = dir.path().join("cand.csv");
    fs::write(&reference, format!("{header}{row}")).unwrap();
    fs::write(&candidate, format!("{header}{row}80000004,ad")).unwrap();

    let comparator = Comparator::default();
    let result = compare_files(&reference, &candidate, &comparator).unwrap();
    assert!(result.is_match());
    assert_eq!(result.compared, 1);
    assert_eq!(
        result.end,
        CompareEnd::Exhausted {
            reference_remaining: false,
            candidate_remaining: true
        }
    );
}
