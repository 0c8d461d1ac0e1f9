//! C extension (RV64C compressed instructions).
//!
//! Compressed instructions are disassembled under their own `c.*` mnemonics
//! rather than expanded to the 32-bit equivalent, matching what Spike prints.
//! Floating-point loads and stores (`c.fld`, `c.fsd`, `c.fldsp`, `c.fsdsp`)
//! are not decoded.

use super::InstructionExtension;
use crate::{
    DecodedInstr, InstrArgs,
    encode::{
        decode_addi4spn_imm, decode_c_rd, decode_c_rs1_prime, decode_c_rs2, decode_c_rs2_prime,
        decode_cb_imm, decode_ci_imm, decode_ci_ldsp_offset, decode_ci_lui_imm,
        decode_ci_lwsp_offset, decode_ci_shamt, decode_ci16sp_imm, decode_cj_imm,
        decode_cl_ld_offset, decode_cl_lw_offset, decode_css_sdsp_offset, decode_css_swsp_offset,
    },
    regs::{REG_SP, REG_ZERO},
};

/// C extension (compressed instructions).
pub struct CExtension;

impl InstructionExtension for CExtension {
    fn name(&self) -> &'static str {
        "C"
    }

    fn decode16(&self, raw: u16) -> Option<DecodedInstr> {
        let funct3 = ((raw >> 13) & 0x7) as u8;
        let (mnemonic, args) = match raw & 0x3 {
            0b00 => decode_q0(raw, funct3)?,
            0b01 => decode_q1(raw, funct3)?,
            0b10 => decode_q2(raw, funct3)?,
            _ => return None,
        };
        Some(DecodedInstr::new(mnemonic, 2, u32::from(raw), args))
    }
}

fn decode_q0(raw: u16, funct3: u8) -> Option<(&'static str, InstrArgs)> {
    let rd = decode_c_rs2_prime(raw);
    let rs1 = decode_c_rs1_prime(raw);

    match funct3 {
        0b000 => {
            let imm = decode_addi4spn_imm(raw);
            // All-zero encoding is the defined illegal instruction.
            if imm == 0 {
                return None;
            }
            Some((
                "c.addi4spn",
                InstrArgs::I {
                    rd,
                    rs1: REG_SP,
                    imm: i32::from(imm),
                },
            ))
        }
        0b010 => Some((
            "c.lw",
            InstrArgs::Mem {
                reg: rd,
                base: rs1,
                imm: i32::from(decode_cl_lw_offset(raw)),
            },
        )),
        0b011 => Some((
            "c.ld",
            InstrArgs::Mem {
                reg: rd,
                base: rs1,
                imm: i32::from(decode_cl_ld_offset(raw)),
            },
        )),
        0b110 => Some((
            "c.sw",
            InstrArgs::Mem {
                reg: rd,
                base: rs1,
                imm: i32::from(decode_cl_lw_offset(raw)),
            },
        )),
        0b111 => Some((
            "c.sd",
            InstrArgs::Mem {
                reg: rd,
                base: rs1,
                imm: i32::from(decode_cl_ld_offset(raw)),
            },
        )),
        _ => None,
    }
}

fn decode_q1(raw: u16, funct3: u8) -> Option<(&'static str, InstrArgs)> {
    let rd = decode_c_rd(raw);

    match funct3 {
        0b000 => {
            let imm = i32::from(decode_ci_imm(raw));
            if rd == REG_ZERO {
                return (imm == 0).then_some(("c.nop", InstrArgs::None));
            }
            Some(("c.addi", InstrArgs::CI { rd, imm }))
        }
        0b001 => {
            if rd == REG_ZERO {
                return None;
            }
            Some((
                "c.addiw",
                InstrArgs::CI {
                    rd,
                    imm: i32::from(decode_ci_imm(raw)),
                },
            ))
        }
        0b010 => Some((
            "c.li",
            InstrArgs::CI {
                rd,
                imm: i32::from(decode_ci_imm(raw)),
            },
        )),
        0b011 if rd == REG_SP => {
            let imm = decode_ci16sp_imm(raw);
            if imm == 0 {
                return None;
            }
            let imm = i32::from(imm);
            Some(("c.addi16sp", InstrArgs::CI { rd, imm }))
        }
        0b011 => {
            let imm = decode_ci_lui_imm(raw);
            if imm == 0 || rd == REG_ZERO {
                return None;
            }
            Some(("c.lui", InstrArgs::U { rd, imm }))
        }
        0b100 => decode_misc_alu(raw),
        0b101 => Some((
            "c.j",
            InstrArgs::CJ {
                imm: i32::from(decode_cj_imm(raw)),
            },
        )),
        0b110 => Some((
            "c.beqz",
            InstrArgs::CB {
                rs1: decode_c_rs1_prime(raw),
                imm: i32::from(decode_cb_imm(raw)),
            },
        )),
        0b111 => Some((
            "c.bnez",
            InstrArgs::CB {
                rs1: decode_c_rs1_prime(raw),
                imm: i32::from(decode_cb_imm(raw)),
            },
        )),
        _ => None,
    }
}

fn decode_misc_alu(raw: u16) -> Option<(&'static str, InstrArgs)> {
    let funct2 = (raw >> 10) & 0x3;
    let rd = decode_c_rs1_prime(raw);

    match funct2 {
        0b00 => Some((
            "c.srli",
            InstrArgs::CI {
                rd,
                imm: i32::from(decode_ci_shamt(raw)),
            },
        )),
        0b01 => Some((
            "c.srai",
            InstrArgs::CI {
                rd,
                imm: i32::from(decode_ci_shamt(raw)),
            },
        )),
        0b10 => Some((
            "c.andi",
            InstrArgs::CI {
                rd,
                imm: i32::from(decode_ci_imm(raw)),
            },
        )),
        _ => {
            let rs2 = decode_c_rs2_prime(raw);
            let wide = (raw >> 12) & 0x1 != 0;
            let mnemonic = match (wide, (raw >> 5) & 0x3) {
                (false, 0b00) => "c.sub",
                (false, 0b01) => "c.xor",
                (false, 0b10) => "c.or",
                (false, 0b11) => "c.and",
                (true, 0b00) => "c.subw",
                (true, 0b01) => "c.addw",
                _ => return None,
            };
            Some((mnemonic, InstrArgs::CR { rd, rs2 }))
        }
    }
}

fn decode_q2(raw: u16, funct3: u8) -> Option<(&'static str, InstrArgs)> {
    let rd = decode_c_rd(raw);
    let rs2 = decode_c_rs2(raw);

    match funct3 {
        0b000 if rd != REG_ZERO => Some((
            "c.slli",
            InstrArgs::CI {
                rd,
                imm: i32::from(decode_ci_shamt(raw)),
            },
        )),
        0b010 if rd != REG_ZERO => Some((
            "c.lwsp",
            InstrArgs::Mem {
                reg: rd,
                base: REG_SP,
                imm: i32::from(decode_ci_lwsp_offset(raw)),
            },
        )),
        0b011 if rd != REG_ZERO => Some((
            "c.ldsp",
            InstrArgs::Mem {
                reg: rd,
                base: REG_SP,
                imm: i32::from(decode_ci_ldsp_offset(raw)),
            },
        )),
        0b100 => {
            let bit12 = (raw >> 12) & 0x1 != 0;
            match (bit12, rd, rs2) {
                (false, REG_ZERO, 0) => None,
                (false, rs1, 0) => Some(("c.jr", InstrArgs::CJr { rs1 })),
                (false, rd, rs2) => Some(("c.mv", InstrArgs::CR { rd, rs2 })),
                (true, REG_ZERO, 0) => Some(("c.ebreak", InstrArgs::None)),
                (true, rs1, 0) => Some(("c.jalr", InstrArgs::CJr { rs1 })),
                (true, rd, rs2) => Some(("c.add", InstrArgs::CR { rd, rs2 })),
            }
        }
        0b110 => Some((
            "c.swsp",
            InstrArgs::Mem {
                reg: rs2,
                base: REG_SP,
                imm: i32::from(decode_css_swsp_offset(raw)),
            },
        )),
        0b111 => Some((
            "c.sdsp",
            InstrArgs::Mem {
                reg: rs2,
                base: REG_SP,
                imm: i32::from(decode_css_sdsp_offset(raw)),
            },
        )),
        _ => None,
    }
}
