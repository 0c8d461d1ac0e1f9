//! Normalized trace records.
//!
//! Both sides of a co-simulation run are reduced to the same nine-column CSV
//! schema before comparison. Only [`Field::COMPARED`] participate in the
//! lockstep check; the rest are carried for diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One retired instruction in the normalized schema.
///
/// Register fields hold `NAME:VALUE` with the value text copied from the
/// source log, or the empty string when nothing was written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Program counter text, copied verbatim.
    pub pc: String,
    /// Decoded mnemonic, or `unknown`.
    #[serde(default)]
    pub instr: String,
    /// General-purpose register update.
    pub gpr: String,
    /// CSR update.
    pub csr: String,
    /// Raw instruction bits as hex text.
    pub binary: String,
    /// Privilege mode text.
    pub mode: String,
    /// Full disassembly.
    #[serde(default)]
    pub instr_str: String,
    /// Operand text, or `unknown`.
    #[serde(default)]
    pub operand: String,
    /// Always empty.
    #[serde(default)]
    pub pad: String,
}

impl NormalizedRecord {
    /// Column header, in output order.
    pub const HEADER: [&'static str; 9] = [
        "pc",
        "instr",
        "gpr",
        "csr",
        "binary",
        "mode",
        "instr_str",
        "operand",
        "pad",
    ];

    /// Value of a compared field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Pc => &self.pc,
            Field::Gpr => &self.gpr,
            Field::Csr => &self.csr,
            Field::Binary => &self.binary,
            Field::Mode => &self.mode,
        }
    }
}

/// A field checked during lockstep comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Pc,
    Gpr,
    Csr,
    Binary,
    Mode,
}

impl Field {
    /// Compared fields, in check order. The first mismatch wins.
    pub const COMPARED: [Self; 5] = [Self::Pc, Self::Gpr, Self::Csr, Self::Binary, Self::Mode];

    /// Column name in the normalized schema.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Gpr => "gpr",
            Self::Csr => "csr",
            Self::Binary => "binary",
            Self::Mode => "mode",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five columns read from a candidate core's log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    pub pc: String,
    /// `HEX_INDEX:VALUE` or empty.
    pub gpr: String,
    /// `HEX_INDEX:VALUE` or empty.
    pub csr: String,
    pub binary: String,
    pub mode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessor() {
        let record = NormalizedRecord {
            pc: "0x100".into(),
            gpr: "a0:5".into(),
            binary: "00000013".into(),
            mode: "3".into(),
            ..NormalizedRecord::default()
        };
        assert_eq!(record.field(Field::Pc), "0x100");
        assert_eq!(record.field(Field::Gpr), "a0:5");
        assert_eq!(record.field(Field::Csr), "");
        assert_eq!(record.field(Field::Binary), "00000013");
        assert_eq!(record.field(Field::Mode), "3");
    }

    #[test]
    fn test_compared_fields_order() {
        let names: Vec<_> = Field::COMPARED.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["pc", "gpr", "csr", "binary", "mode"]);
    }

    #[test]
    fn test_header_matches_serialized_order() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(NormalizedRecord::default()).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, NormalizedRecord::HEADER.join(","));
    }
}
