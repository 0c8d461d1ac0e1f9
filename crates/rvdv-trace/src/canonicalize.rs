//! Conversion of a candidate core's log into normalized trace records.

use std::io::{Read, Write};

use rvdv_isa::{Disassembler, RegisterFile};
use tracing::debug;

use crate::{Error, NormalizedRecord, Result, SourceRow};

/// Placeholder written to `instr`, `instr_str` and `operand` when decoding fails.
pub const UNKNOWN: &str = "unknown";

/// Translate a `HEX_INDEX:VALUE` register update into `NAME:VALUE`.
///
/// An empty field means no register was written and is returned unchanged.
///
/// # Errors
///
/// Returns [`Error::MalformedRegisterField`] when the field has no `:` or the
/// index is not hexadecimal, and [`Error::UnknownRegisterIndex`] when the
/// index has no name in `file`.
pub fn translate_register_field(text: &str, file: RegisterFile) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }

    let malformed = || Error::MalformedRegisterField(text.to_string());
    let (index, value) = text.split_once(':').ok_or_else(malformed)?;
    let index = parse_hex(index).ok_or_else(malformed)?;
    let Some(name) = file.name(index) else {
        return Err(Error::UnknownRegisterIndex {
            file,
            index,
            field: text.to_string(),
        });
    };
    Ok(format!("{name}:{value}"))
}

/// Decoded text of one instruction, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub instr: String,
    pub instr_str: String,
    pub operand: String,
}

impl DecodedText {
    /// The triple recorded when an encoding could not be decoded.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            instr: UNKNOWN.to_string(),
            instr_str: UNKNOWN.to_string(),
            operand: UNKNOWN.to_string(),
        }
    }

    /// Split disassembly on the first whitespace run into mnemonic and operands.
    #[must_use]
    pub fn from_disassembly(text: &str) -> Self {
        let trimmed = text.trim_start();
        let (instr, operand) = match trimmed.split_once(char::is_whitespace) {
            Some((mnemonic, rest)) => (mnemonic, rest.trim_start()),
            None => (trimmed, ""),
        };
        Self {
            instr: instr.to_string(),
            instr_str: text.to_string(),
            operand: operand.to_string(),
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.instr == UNKNOWN
    }
}

/// Decode a hex instruction encoding.
///
/// Decode failures are not errors: an empty `binary`, an encoding wider
/// than 64 bits, or one the decoder rejects all yield [`DecodedText::unknown`].
///
/// # Errors
///
/// Returns [`Error::MalformedBinary`] if `binary` is non-empty and not hex.
pub fn decode_instruction<D>(binary: &str, decoder: &D) -> Result<DecodedText>
where
    D: Disassembler + ?Sized,
{
    if binary.is_empty() {
        return Ok(DecodedText::unknown());
    }

    let digits = strip_hex_prefix(binary);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::MalformedBinary(binary.to_string()));
    }
    let Ok(raw) = u64::from_str_radix(digits, 16) else {
        return Ok(DecodedText::unknown());
    };

    match decoder.disassemble(raw) {
        Ok(text) => Ok(DecodedText::from_disassembly(&text)),
        Err(err) => {
            debug!(binary, %err, "instruction not decoded");
            Ok(DecodedText::unknown())
        }
    }
}

/// Translate one source row into a normalized record.
///
/// `pc`, `binary` and `mode` are copied through unchanged.
///
/// # Errors
///
/// Propagates register translation errors and [`Error::MalformedBinary`].
pub fn translate_row<D>(row: &SourceRow, decoder: &D) -> Result<NormalizedRecord>
where
    D: Disassembler + ?Sized,
{
    let gpr = translate_register_field(&row.gpr, RegisterFile::Gpr)?;
    let csr = translate_register_field(&row.csr, RegisterFile::Csr)?;
    let decoded = decode_instruction(&row.binary, decoder)?;

    Ok(NormalizedRecord {
        pc: row.pc.clone(),
        instr: decoded.instr,
        gpr,
        csr,
        binary: row.binary.clone(),
        mode: row.mode.clone(),
        instr_str: decoded.instr_str,
        operand: decoded.operand,
        pad: String::new(),
    })
}

/// Header names of the five source columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceColumns {
    pub pc: String,
    pub gpr: String,
    pub csr: String,
    pub binary: String,
    pub mode: String,
}

impl Default for SourceColumns {
    fn default() -> Self {
        Self {
            pc: "pc".to_string(),
            gpr: "gpr".to_string(),
            csr: "csr".to_string(),
            binary: "binary".to_string(),
            mode: "mode".to_string(),
        }
    }
}

impl SourceColumns {
    fn resolve(&self, headers: &csv::StringRecord) -> Result<ColumnIndex> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };
        Ok(ColumnIndex {
            pc: find(&self.pc)?,
            gpr: find(&self.gpr)?,
            csr: find(&self.csr)?,
            binary: find(&self.binary)?,
            mode: find(&self.mode)?,
        })
    }
}

/// Resolved positions of the source columns.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    pc: usize,
    gpr: usize,
    csr: usize,
    binary: usize,
    mode: usize,
}

impl ColumnIndex {
    fn row(self, record: &csv::StringRecord) -> SourceRow {
        let get = |index: usize| record.get(index).unwrap_or_default().to_string();
        SourceRow {
            pc: get(self.pc),
            gpr: get(self.gpr),
            csr: get(self.csr),
            binary: get(self.binary),
            mode: get(self.mode),
        }
    }
}

/// Totals from one canonicalization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalizeSummary {
    /// Records written, excluding the header.
    pub rows: usize,
    /// Records whose decode degraded to `unknown`.
    pub unknown: usize,
}

/// Stream a source log into a normalized trace.
///
/// The header row is always written, even for an empty log. Stops at the
/// first row that fails to translate.
///
/// # Errors
///
/// Returns [`Error::MissingColumn`] if a source column is absent, CSV and
/// I/O errors, and row translation errors wrapped in [`Error::AtRow`].
pub fn canonicalize<R, W, D>(
    input: R,
    output: W,
    decoder: &D,
    columns: &SourceColumns,
) -> Result<CanonicalizeSummary>
where
    R: Read,
    W: Write,
    D: Disassembler + ?Sized,
{
    let mut reader = csv::Reader::from_reader(input);
    let index = columns.resolve(reader.headers()?)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    writer.write_record(NormalizedRecord::HEADER)?;

    let mut summary = CanonicalizeSummary::default();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record)? {
        let row = index.row(&record);
        let normalized = translate_row(&row, decoder).map_err(|err| err.at_row(summary.rows))?;
        if normalized.instr == UNKNOWN {
            summary.unknown += 1;
        }
        writer.serialize(&normalized)?;
        summary.rows += 1;
    }
    writer.flush()?;

    debug!(
        rows = summary.rows,
        unknown = summary.unknown,
        "canonicalized log"
    );
    Ok(summary)
}

fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

fn parse_hex(text: &str) -> Option<u64> {
    let digits = strip_hex_prefix(text);
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use rvdv_isa::{CompositeDecoder, DecodeError};

    use super::*;

    struct RejectAll;

    impl Disassembler for RejectAll {
        fn disassemble(&self, raw: u64) -> std::result::Result<String, DecodeError> {
            Err(DecodeError::TooWide(raw))
        }
    }

    struct Fixed(&'static str);

    impl Disassembler for Fixed {
        fn disassemble(&self, _raw: u64) -> std::result::Result<String, DecodeError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_translate_gpr() {
        assert_eq!(
            translate_register_field("a:5", RegisterFile::Gpr).unwrap(),
            "a0:5"
        );
        assert_eq!(
            translate_register_field("0x2:0000000000001000", RegisterFile::Gpr).unwrap(),
            "sp:0000000000001000"
        );
        for index in 0..32u8 {
            let text = format!("{index:x}:1");
            let translated = translate_register_field(&text, RegisterFile::Gpr).unwrap();
            let name = rvdv_isa::gpr_name(index).unwrap();
            assert_eq!(translated, format!("{name}:1"));
        }
    }

    #[test]
    fn test_translate_csr() {
        assert_eq!(
            translate_register_field("300:8", RegisterFile::Csr).unwrap(),
            "mstatus:8"
        );
        assert_eq!(
            translate_register_field("341:80000004", RegisterFile::Csr).unwrap(),
            "mepc:80000004"
        );
    }

    #[test]
    fn test_value_keeps_later_colons() {
        // Only the first ':' separates index from value.
        assert_eq!(
            translate_register_field("a:5:6", RegisterFile::Gpr).unwrap(),
            "a0:5:6"
        );
        assert_eq!(
            translate_register_field("300:", RegisterFile::Csr).unwrap(),
            "mstatus:"
        );
    }

    #[test]
    fn test_translate_empty_field() {
        assert_eq!(translate_register_field("", RegisterFile::Gpr).unwrap(), "");
        assert_eq!(translate_register_field("", RegisterFile::Csr).unwrap(), "");
    }

    #[test]
    fn test_unknown_register_index() {
        let err = translate_register_field("20:1", RegisterFile::Gpr).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownRegisterIndex {
                file: RegisterFile::Gpr,
                index: 0x20,
                ..
            }
        ));
        let err = translate_register_field("fff:1", RegisterFile::Csr).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownRegisterIndex { index: 0xfff, .. }
        ));
    }

    #[test]
    fn test_malformed_register_field() {
        for text in ["a5", "zz:1", ":1", "0x:1"] {
            let err = translate_register_field(text, RegisterFile::Gpr).unwrap_err();
            assert!(matches!(err, Error::MalformedRegisterField(_)), "{text}");
        }
    }

    #[test]
    fn test_decode_instruction() {
        let decoder = CompositeDecoder::standard();
        let decoded = decode_instruction("00000013", &decoder).unwrap();
        assert_eq!(decoded.instr, "addi");
        assert_eq!(decoded.instr_str, "addi zero, zero, 0");
        assert_eq!(decoded.operand, "zero, zero, 0");

        let ecall = decode_instruction("0x00000073", &decoder).unwrap();
        assert_eq!(ecall.instr, "ecall");
        assert_eq!(ecall.operand, "");
    }

    #[test]
    fn test_decode_failure_is_unknown() {
        assert_eq!(
            decode_instruction("00000013", &RejectAll).unwrap(),
            DecodedText::unknown()
        );
        let decoder = CompositeDecoder::standard();
        let undecodable = decode_instruction("ffffffff", &decoder).unwrap();
        assert!(undecodable.is_unknown());
        assert!(decode_instruction("", &decoder).unwrap().is_unknown());
        // Valid hex, but wider than any encoding.
        assert!(
            decode_instruction("1ffffffffffffffffff", &decoder)
                .unwrap()
                .is_unknown()
        );
    }

    #[test]
    fn test_malformed_binary() {
        let decoder = CompositeDecoder::standard();
        for binary in ["xyz", "0x", "13 00"] {
            let err = decode_instruction(binary, &decoder).unwrap_err();
            assert!(matches!(err, Error::MalformedBinary(_)), "{binary}");
        }
    }

    #[test]
    fn test_split_on_first_whitespace_run() {
        let decoded = decode_instruction("13", &Fixed("add   a0,  a1")).unwrap();
        assert_eq!(decoded.instr, "add");
        assert_eq!(decoded.instr_str, "add   a0,  a1");
        assert_eq!(decoded.operand, "a0,  a1");
    }

    #[test]
    fn test_translate_row() {
        let row = SourceRow {
            pc: "0x100".into(),
            gpr: "a:5".into(),
            csr: String::new(),
            binary: "00000013".into(),
            mode: "3".into(),
        };
        let record = translate_row(&row, &CompositeDecoder::standard()).unwrap();
        assert_eq!(record.pc, "0x100");
        assert_eq!(record.instr, "addi");
        assert_eq!(record.gpr, "a0:5");
        assert_eq!(record.csr, "");
        assert_eq!(record.binary, "00000013");
        assert_eq!(record.mode, "3");
        assert_eq!(record.pad, "");
    }

    #[test]
    fn test_canonicalize_stream() {
        let log = "mode,pc,extra,binary,gpr,csr\n\
                   3,80000000,x,00000297,5:80000000,\n\
                   3,80000004,x,30529073,,305:80000000\n\
                   3,80000008,x,ffffffff,,\n";
        let mut out = Vec::new();
        let summary = canonicalize(
            log.as_bytes(),
            &mut out,
            &CompositeDecoder::standard(),
            &SourceColumns::default(),
        )
        .unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.unknown, 1);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        let header = "pc,instr,gpr,csr,binary,mode,instr_str,operand,pad";
        assert_eq!(lines[0], header);
        assert_eq!(
            lines[1],
            "80000000,auipc,t0:80000000,,00000297,3,\"auipc t0, 0x0\",\"t0, 0x0\","
        );
        let csrrw = concat!(
            "80000004,csrrw,,mtvec:80000000,30529073,3,",
            "\"csrrw zero, mtvec, t0\",\"zero, mtvec, t0\","
        );
        assert_eq!(lines[2], csrrw);
        assert_eq!(lines[3], "80000008,unknown,,,ffffffff,3,unknown,unknown,");
    }

    #[test]
    fn test_canonicalize_empty_log_writes_header() {
        let log = "pc,gpr,csr,binary,mode\n";
        let mut out = Vec::new();
        let summary = canonicalize(
            log.as_bytes(),
            &mut out,
            &CompositeDecoder::standard(),
            &SourceColumns::default(),
        )
        .unwrap();
        assert_eq!(summary.rows, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "pc,instr,gpr,csr,binary,mode,instr_str,operand,pad\n"
        );
    }

    #[test]
    fn test_canonicalize_missing_column() {
        let log = "pc,gpr,binary,mode\n80000000,,00000013,3\n";
        let err = canonicalize(
            log.as_bytes(),
            Vec::new(),
            &CompositeDecoder::standard(),
            &SourceColumns::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref n) if n == "csr"));
    }

    #[test]
    fn test_canonicalize_custom_columns() {
        let log = "PC,RD,CSR,INSN,PRIV\n100,a:5,,00000013,3\n";
        let columns = SourceColumns {
            pc: "PC".into(),
            gpr: "RD".into(),
            csr: "CSR".into(),
            binary: "INSN".into(),
            mode: "PRIV".into(),
        };
        let decoder = CompositeDecoder::standard();
        let mut out = Vec::new();
        canonicalize(log.as_bytes(), &mut out, &decoder, &columns).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("100,addi,a0:5,"));
    }

    #[test]
    fn test_canonicalize_reports_failing_row() {
        let log = "pc,gpr,csr,binary,mode\n\
                   0,,,00000013,3\n\
                   4,40:1,,00000013,3\n";
        let err = canonicalize(
            log.as_bytes(),
            Vec::new(),
            &CompositeDecoder::standard(),
            &SourceColumns::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::AtRow { row: 1, .. }));
        let Error::UnknownRegisterIndex { index, .. } = err.root() else {
            panic!("unexpected root error: {err}");
        };
        assert_eq!(*index, 0x40);
    }
}
