//! M extension (multiply/divide).

use super::InstructionExtension;
use crate::{
    DecodedInstr, InstrArgs,
    encode::{decode_funct3, decode_funct7, decode_opcode, decode_rd, decode_rs1, decode_rs2},
};

/// M extension (multiply/divide).
pub struct MExtension;

impl InstructionExtension for MExtension {
    fn name(&self) -> &'static str {
        "M"
    }

    fn decode32(&self, raw: u32) -> Option<DecodedInstr> {
        if decode_funct7(raw) != 0x01 {
            return None;
        }

        let mnemonic = match (decode_opcode(raw), decode_funct3(raw)) {
            (0x33, 0) => "mul",
            (0x33, 1) => "mulh",
            (0x33, 2) => "mulhsu",
            (0x33, 3) => "mulhu",
            (0x33, 4) => "div",
            (0x33, 5) => "divu",
            (0x33, 6) => "rem",
            (0x33, 7) => "remu",
            (0x3B, 0) => "mulw",
            (0x3B, 4) => "divw",
            (0x3B, 5) => "divuw",
            (0x3B, 6) => "remw",
            (0x3B, 7) => "remuw",
            _ => return None,
        };

        let args = InstrArgs::R {
            rd: decode_rd(raw),
            rs1: decode_rs1(raw),
            rs2: decode_rs2(raw),
        };
        Some(DecodedInstr::new(mnemonic, 4, raw, args))
    }
}
