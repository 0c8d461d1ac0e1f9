//! Zicsr extension (CSR access instructions).

use super::InstructionExtension;
use crate::{
    DecodedInstr, InstrArgs,
    encode::{decode_csr, decode_funct3, decode_opcode, decode_rd, decode_rs1},
};

/// Zicsr extension (CSR instructions).
pub struct ZicsrExtension;

impl InstructionExtension for ZicsrExtension {
    fn name(&self) -> &'static str {
        "Zicsr"
    }

    fn decode32(&self, raw: u32) -> Option<DecodedInstr> {
        let funct3 = decode_funct3(raw);

        // CSR instructions: opcode=0x73, funct3 != 0 (funct3 == 4 is reserved)
        if decode_opcode(raw) != 0x73 || funct3 == 0 || funct3 == 4 {
            return None;
        }

        let rd = decode_rd(raw);
        let rs1 = decode_rs1(raw);
        let csr = decode_csr(raw);

        let (mnemonic, args) = match funct3 {
            1 => ("csrrw", InstrArgs::Csr { rd, rs1, csr }),
            2 => ("csrrs", InstrArgs::Csr { rd, rs1, csr }),
            3 => ("csrrc", InstrArgs::Csr { rd, rs1, csr }),
            5 => ("csrrwi", InstrArgs::CsrI { rd, imm: rs1, csr }),
            6 => ("csrrsi", InstrArgs::CsrI { rd, imm: rs1, csr }),
            _ => ("csrrci", InstrArgs::CsrI { rd, imm: rs1, csr }),
        };
        Some(DecodedInstr::new(mnemonic, 4, raw, args))
    }
}
