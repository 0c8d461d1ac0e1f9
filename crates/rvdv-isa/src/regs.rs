//! Register name tables.

use std::fmt;

use crate::csr_name;

/// Number of general-purpose registers (RV64I).
pub const NUM_GPRS: usize = 32;

// Register ABI indices used by the decoder.
pub const REG_ZERO: u8 = 0;
pub const REG_RA: u8 = 1;
pub const REG_SP: u8 = 2;

const GPR_NAMES: [&str; NUM_GPRS] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Get the ABI name of a general-purpose register.
#[must_use]
pub const fn gpr_name(reg: u8) -> Option<&'static str> {
    if (reg as usize) < NUM_GPRS {
        Some(GPR_NAMES[reg as usize])
    } else {
        None
    }
}

/// ABI name for a register field extracted from an encoding.
///
/// Encoded register fields are 5 bits wide, so this never misses.
pub(crate) fn reg_name(reg: u8) -> &'static str {
    GPR_NAMES[(reg & 0x1F) as usize]
}

/// Register file a trace update refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterFile {
    /// General-purpose registers, indices 0-31.
    Gpr,
    /// Control and status registers, sparse 12-bit address space.
    Csr,
}

impl RegisterFile {
    /// Look up the canonical name for `index` in this register file.
    #[must_use]
    pub fn name(self, index: u64) -> Option<&'static str> {
        match self {
            Self::Gpr => u8::try_from(index).ok().and_then(gpr_name),
            Self::Csr => u16::try_from(index).ok().and_then(csr_name),
        }
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpr => write!(f, "GPR"),
            Self::Csr => write!(f, "CSR"),
        }
    }
}
