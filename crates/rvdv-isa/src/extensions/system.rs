//! Environment calls, trap returns and other privileged SYSTEM instructions.

use super::InstructionExtension;
use crate::{
    DecodedInstr, InstrArgs,
    encode::{decode_funct7, decode_rd, decode_rs1, decode_rs2},
};

/// SYSTEM instructions with funct3 == 0.
pub struct SystemExtension;

impl InstructionExtension for SystemExtension {
    fn name(&self) -> &'static str {
        "System"
    }

    fn decode32(&self, raw: u32) -> Option<DecodedInstr> {
        let mnemonic = match raw {
            0x0000_0073 => "ecall",
            0x0010_0073 => "ebreak",
            0x0020_0073 => "uret",
            0x1020_0073 => "sret",
            0x3020_0073 => "mret",
            0x7B20_0073 => "dret",
            0x1050_0073 => "wfi",
            _ => return decode_sfence_vma(raw),
        };
        Some(DecodedInstr::new(mnemonic, 4, raw, InstrArgs::None))
    }
}

fn decode_sfence_vma(raw: u32) -> Option<DecodedInstr> {
    // sfence.vma: funct7=0x09, rd=0, funct3=0, opcode=SYSTEM
    if raw & 0x7FFF == 0x73 && decode_funct7(raw) == 0x09 && decode_rd(raw) == 0 {
        let args = InstrArgs::Rs {
            rs1: decode_rs1(raw),
            rs2: decode_rs2(raw),
        };
        return Some(DecodedInstr::new("sfence.vma", 4, raw, args));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_system() {
        let ecall = SystemExtension.decode32(0x0000_0073).unwrap();
        assert_eq!(ecall.to_string(), "ecall");
        let mret = SystemExtension.decode32(0x3020_0073).unwrap();
        assert_eq!(mret.to_string(), "mret");
        let wfi = SystemExtension.decode32(0x1050_0073).unwrap();
        assert_eq!(wfi.to_string(), "wfi");
    }

    #[test]
    fn test_decode_sfence_vma() {
        // sfence.vma zero, zero
        let sfence = SystemExtension.decode32(0x1200_0073).unwrap();
        assert_eq!(sfence.to_string(), "sfence.vma zero, zero");
        // sfence.vma a0, a1
        let sfence = SystemExtension.decode32(0x12B5_0073).unwrap();
        assert_eq!(sfence.to_string(), "sfence.vma a0, a1");
    }

    #[test]
    fn test_unknown_system() {
        assert!(SystemExtension.decode32(0x0030_0073).is_none());
    }
}
