//! A extension (atomics).

use super::InstructionExtension;
use crate::{
    DecodedInstr, InstrArgs,
    encode::{decode_funct3, decode_opcode, decode_rd, decode_rs1, decode_rs2},
};

/// A extension (LR/SC and AMOs, word and doubleword).
pub struct AExtension;

impl InstructionExtension for AExtension {
    fn name(&self) -> &'static str {
        "A"
    }

    fn decode32(&self, raw: u32) -> Option<DecodedInstr> {
        if decode_opcode(raw) != 0x2F {
            return None;
        }

        let double = match decode_funct3(raw) {
            2 => false,
            3 => true,
            _ => return None,
        };
        let funct5 = (raw >> 27) & 0x1F;
        let aq = (raw >> 26) & 0x1 != 0;
        let rl = (raw >> 25) & 0x1 != 0;
        let rd = decode_rd(raw);
        let rs1 = decode_rs1(raw);
        let rs2 = decode_rs2(raw);

        if funct5 == 0b00010 {
            if rs2 != 0 {
                return None;
            }
            let mnemonic = if double { "lr.d" } else { "lr.w" };
            let args = InstrArgs::Lr { rd, rs1, aq, rl };
            return Some(DecodedInstr::new(mnemonic, 4, raw, args));
        }

        let (word, dword) = match funct5 {
            0b00011 => ("sc.w", "sc.d"),
            0b00001 => ("amoswap.w", "amoswap.d"),
            0b00000 => ("amoadd.w", "amoadd.d"),
            0b00100 => ("amoxor.w", "amoxor.d"),
            0b01100 => ("amoand.w", "amoand.d"),
            0b01000 => ("amoor.w", "amoor.d"),
            0b10000 => ("amomin.w", "amomin.d"),
            0b10100 => ("amomax.w", "amomax.d"),
            0b11000 => ("amominu.w", "amominu.d"),
            0b11100 => ("amomaxu.w", "amomaxu.d"),
            _ => return None,
        };
        let mnemonic = if double { dword } else { word };
        let args = InstrArgs::Amo {
            rd,
            rs1,
            rs2,
            aq,
            rl,
        };
        Some(DecodedInstr::new(mnemonic, 4, raw, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lr_sc() {
        // lr.w a0, (a1)
        let lr = AExtension.decode32(0x1005_A52F).unwrap();
        assert_eq!(lr.to_string(), "lr.w a0, (a1)");

        // sc.d.rl a0, a2, (a1)
        let sc = AExtension.decode32(0x1AC5_B52F).unwrap();
        assert_eq!(sc.to_string(), "sc.d.rl a0, a2, (a1)");
    }

    #[test]
    fn test_decode_amo() {
        // amoadd.w.aq a0, a2, (a1)
        let amo = AExtension.decode32(0x04C5_A52F).unwrap();
        assert_eq!(amo.to_string(), "amoadd.w.aq a0, a2, (a1)");
    }

    #[test]
    fn test_lr_with_rs2_is_reserved() {
        assert!(AExtension.decode32(0x1015_A52F).is_none());
    }
}
