//! Decoded instruction representation and disassembly.

use std::fmt;

use thiserror::Error;

use crate::{csr_name, reg_name};

/// Why an encoding could not be decoded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("encoding {0:#x} is wider than 32 bits")]
    TooWide(u64),
    #[error("unsupported encoding {0:#x}")]
    Unsupported(u32),
}

/// Decoded instruction with all fields extracted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedInstr {
    /// Base mnemonic (without `.aq`/`.rl` ordering suffixes).
    pub mnemonic: &'static str,
    /// Instruction size in bytes (2 for compressed, 4 for normal).
    pub size: u8,
    /// Raw encoding.
    pub raw: u32,
    /// Instruction arguments.
    pub args: InstrArgs,
}

impl DecodedInstr {
    #[must_use]
    pub const fn new(mnemonic: &'static str, size: u8, raw: u32, args: InstrArgs) -> Self {
        Self {
            mnemonic,
            size,
            raw,
            args,
        }
    }

    /// Whether this is a 16-bit compressed instruction.
    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        self.size == 2
    }
}

/// Instruction argument patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstrArgs {
    /// R-type: rd, rs1, rs2
    R { rd: u8, rs1: u8, rs2: u8 },
    /// I-type arithmetic: rd, rs1, imm
    I { rd: u8, rs1: u8, imm: i32 },
    /// Memory access or register-indirect jump: reg, imm(base)
    Mem { reg: u8, base: u8, imm: i32 },
    /// B-type: rs1, rs2, imm
    B { rs1: u8, rs2: u8, imm: i32 },
    /// U-type: rd, imm (already shifted into bits [31:12])
    U { rd: u8, imm: i32 },
    /// J-type: rd, imm
    J { rd: u8, imm: i32 },
    /// CSR: rd, csr, rs1
    Csr { rd: u8, rs1: u8, csr: u16 },
    /// CSRI: rd, csr, uimm
    CsrI { rd: u8, imm: u8, csr: u16 },
    /// AMO / SC: rd, rs2, (rs1)
    Amo {
        rd: u8,
        rs1: u8,
        rs2: u8,
        aq: bool,
        rl: bool,
    },
    /// LR: rd, (rs1)
    Lr { rd: u8, rs1: u8, aq: bool, rl: bool },
    /// FENCE predecessor/successor sets
    Fence { pred: u8, succ: u8 },
    /// Two source registers, no destination (`sfence.vma`)
    Rs { rs1: u8, rs2: u8 },
    /// Compressed two-register form: rd, rs2
    CR { rd: u8, rs2: u8 },
    /// Compressed register + immediate form: rd, imm
    CI { rd: u8, imm: i32 },
    /// Compressed branch: rs1, imm
    CB { rs1: u8, imm: i32 },
    /// Compressed jump: imm
    CJ { imm: i32 },
    /// Compressed register jump: rs1
    CJr { rs1: u8 },
    /// No arguments (ECALL, EBREAK, etc.)
    None,
}

impl fmt::Display for DecodedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic)?;
        match self.args {
            InstrArgs::Amo { aq, rl, .. } | InstrArgs::Lr { aq, rl, .. } => {
                f.write_str(ordering_suffix(aq, rl))?;
            }
            _ => {}
        }
        write_operands(f, &self.args)
    }
}

const fn ordering_suffix(aq: bool, rl: bool) -> &'static str {
    match (aq, rl) {
        (false, false) => "",
        (true, false) => ".aq",
        (false, true) => ".rl",
        (true, true) => ".aqrl",
    }
}

fn write_operands(f: &mut fmt::Formatter<'_>, args: &InstrArgs) -> fmt::Result {
    match *args {
        InstrArgs::R { rd, rs1, rs2 } => {
            write!(f, " {}, {}, {}", reg_name(rd), reg_name(rs1), reg_name(rs2))
        }
        InstrArgs::I { rd, rs1, imm } => write!(f, " {}, {}, {}", reg_name(rd), reg_name(rs1), imm),
        InstrArgs::Mem { reg, base, imm } => {
            write!(f, " {}, {}({})", reg_name(reg), imm, reg_name(base))
        }
        InstrArgs::B { rs1, rs2, imm } => {
            write!(f, " {}, {}, {}", reg_name(rs1), reg_name(rs2), imm)
        }
        InstrArgs::U { rd, imm } => write!(f, " {}, {:#x}", reg_name(rd), (imm as u32) >> 12),
        InstrArgs::J { rd, imm } => write!(f, " {}, {}", reg_name(rd), imm),
        InstrArgs::Csr { rd, rs1, csr } => {
            write!(f, " {}, ", reg_name(rd))?;
            format_csr(f, csr)?;
            write!(f, ", {}", reg_name(rs1))
        }
        InstrArgs::CsrI { rd, imm, csr } => {
            write!(f, " {}, ", reg_name(rd))?;
            format_csr(f, csr)?;
            write!(f, ", {imm}")
        }
        InstrArgs::Amo { rd, rs1, rs2, .. } => {
            let (rd, rs1, rs2) = (reg_name(rd), reg_name(rs1), reg_name(rs2));
            write!(f, " {rd}, {rs2}, ({rs1})")
        }
        InstrArgs::Lr { rd, rs1, .. } => write!(f, " {}, ({})", reg_name(rd), reg_name(rs1)),
        InstrArgs::Fence { pred, succ } => {
            write!(f, " ")?;
            format_fence_set(f, pred)?;
            write!(f, ", ")?;
            format_fence_set(f, succ)
        }
        InstrArgs::Rs { rs1, rs2 } => write!(f, " {}, {}", reg_name(rs1), reg_name(rs2)),
        InstrArgs::CR { rd, rs2 } => write!(f, " {}, {}", reg_name(rd), reg_name(rs2)),
        InstrArgs::CI { rd, imm } => write!(f, " {}, {}", reg_name(rd), imm),
        InstrArgs::CB { rs1, imm } => write!(f, " {}, {}", reg_name(rs1), imm),
        InstrArgs::CJ { imm } => write!(f, " {imm}"),
        InstrArgs::CJr { rs1 } => write!(f, " {}", reg_name(rs1)),
        InstrArgs::None => Ok(()),
    }
}

fn format_csr(f: &mut fmt::Formatter<'_>, csr: u16) -> fmt::Result {
    match csr_name(csr) {
        Some(name) => f.write_str(name),
        None => write!(f, "{csr:#x}"),
    }
}

fn format_fence_set(f: &mut fmt::Formatter<'_>, set: u8) -> fmt::Result {
    if set == 0 {
        return f.write_str("0");
    }
    for (bit, c) in [(8, 'i'), (4, 'o'), (2, 'r'), (1, 'w')] {
        if set & bit != 0 {
            write!(f, "{c}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disasm(mnemonic: &'static str, args: InstrArgs) -> String {
        DecodedInstr::new(mnemonic, 4, 0, args).to_string()
    }

    #[test]
    fn test_display_forms() {
        let args = InstrArgs::R {
            rd: 10,
            rs1: 11,
            rs2: 12,
        };
        assert_eq!(disasm("add", args), "add a0, a1, a2");

        let args = InstrArgs::Mem {
            reg: 1,
            base: 2,
            imm: -8,
        };
        assert_eq!(disasm("ld", args), "ld ra, -8(sp)");

        let args = InstrArgs::U {
            rd: 5,
            imm: 0x12345 << 12,
        };
        assert_eq!(disasm("lui", args), "lui t0, 0x12345");

        assert_eq!(disasm("ecall", InstrArgs::None), "ecall");
    }

    #[test]
    fn test_display_csr_fallback() {
        let args = InstrArgs::Csr {
            rd: 0,
            rs1: 10,
            csr: 0x305,
        };
        assert_eq!(disasm("csrrw", args), "csrrw zero, mtvec, a0");

        let args = InstrArgs::CsrI {
            rd: 0,
            imm: 3,
            csr: 0x7C0,
        };
        assert_eq!(disasm("csrrsi", args), "csrrsi zero, 0x7c0, 3");
    }

    #[test]
    fn test_display_ordering_suffix() {
        let args = InstrArgs::Amo {
            rd: 10,
            rs1: 11,
            rs2: 12,
            aq: true,
            rl: true,
        };
        assert_eq!(disasm("amoadd.w", args), "amoadd.w.aqrl a0, a2, (a1)");

        let args = InstrArgs::Lr {
            rd: 5,
            rs1: 6,
            aq: true,
            rl: false,
        };
        assert_eq!(disasm("lr.d", args), "lr.d.aq t0, (t1)");
    }

    #[test]
    fn test_display_fence() {
        let args = InstrArgs::Fence {
            pred: 0xF,
            succ: 0x3,
        };
        assert_eq!(disasm("fence", args), "fence iorw, rw");
    }
}
