//! Zifencei extension (instruction-fetch fence).

use super::InstructionExtension;
use crate::{
    DecodedInstr, InstrArgs,
    encode::{decode_funct3, decode_opcode},
};

/// Zifencei extension (`fence.i`).
pub struct ZifenceiExtension;

impl InstructionExtension for ZifenceiExtension {
    fn name(&self) -> &'static str {
        "Zifencei"
    }

    fn decode32(&self, raw: u32) -> Option<DecodedInstr> {
        if decode_opcode(raw) == 0x0F && decode_funct3(raw) == 1 {
            Some(DecodedInstr::new("fence.i", 4, raw, InstrArgs::None))
        } else {
            None
        }
    }
}
