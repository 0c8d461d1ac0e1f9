//! RISC-V register names and instruction decoder.
//!
//! This crate provides the register name tables used to canonicalize trace
//! logs and a best-effort RV64 disassembler. Each extension (I, M, A, C,
//! Zicsr, Zifencei, privileged SYSTEM) is self-contained in its own module
//! under `extensions/`.

mod csr;
mod decode;
pub mod encode;
pub mod extensions;
mod regs;

pub use csr::{NUM_NAMED_CSRS, csr_name};
pub use decode::{DecodeError, DecodedInstr, InstrArgs};
pub use extensions::*;
pub use regs::{NUM_GPRS, REG_RA, REG_SP, REG_ZERO, RegisterFile, gpr_name};

pub(crate) use regs::reg_name;

/// Decode an encoding using the standard extensions.
///
/// This is a convenience wrapper around `CompositeDecoder::standard().decode()`.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the encoding is not recognised.
pub fn decode(raw: u64) -> Result<DecodedInstr, DecodeError> {
    CompositeDecoder::standard().decode(raw)
}
