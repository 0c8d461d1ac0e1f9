//! Base I extension (RV64I).

use super::InstructionExtension;
use crate::{
    DecodedInstr, InstrArgs,
    encode::{
        decode_b_imm, decode_funct3, decode_funct7, decode_i_imm, decode_j_imm, decode_opcode,
        decode_rd, decode_rs1, decode_rs2, decode_s_imm, decode_u_imm,
    },
};

/// Base I extension (RV64I).
pub struct BaseExtension;

impl InstructionExtension for BaseExtension {
    fn name(&self) -> &'static str {
        "I"
    }

    fn decode32(&self, raw: u32) -> Option<DecodedInstr> {
        let opcode = decode_opcode(raw);
        let funct3 = decode_funct3(raw);
        let funct7 = decode_funct7(raw);
        let rd = decode_rd(raw);
        let rs1 = decode_rs1(raw);
        let rs2 = decode_rs2(raw);

        let (mnemonic, args) = match opcode {
            0x37 => (
                "lui",
                InstrArgs::U {
                    rd,
                    imm: decode_u_imm(raw),
                },
            ),
            0x17 => (
                "auipc",
                InstrArgs::U {
                    rd,
                    imm: decode_u_imm(raw),
                },
            ),
            0x6F => (
                "jal",
                InstrArgs::J {
                    rd,
                    imm: decode_j_imm(raw),
                },
            ),
            0x67 if funct3 == 0 => (
                "jalr",
                InstrArgs::Mem {
                    reg: rd,
                    base: rs1,
                    imm: decode_i_imm(raw),
                },
            ),
            0x63 => decode_branch(funct3, rs1, rs2, raw)?,
            0x03 => decode_load(funct3, rd, rs1, raw)?,
            0x23 => decode_store(funct3, rs1, rs2, raw)?,
            0x13 => decode_op_imm(funct3, rd, rs1, raw)?,
            0x1B => decode_op_imm_32(funct3, funct7, rd, rs1, raw)?,
            0x33 => decode_op(funct3, funct7, rd, rs1, rs2)?,
            0x3B => decode_op_32(funct3, funct7, rd, rs1, rs2)?,
            0x0F if funct3 == 0 => decode_fence(raw),
            _ => return None,
        };

        Some(DecodedInstr::new(mnemonic, 4, raw, args))
    }
}

const fn decode_branch(
    funct3: u8,
    rs1: u8,
    rs2: u8,
    raw: u32,
) -> Option<(&'static str, InstrArgs)> {
    let mnemonic = match funct3 {
        0 => "beq",
        1 => "bne",
        4 => "blt",
        5 => "bge",
        6 => "bltu",
        7 => "bgeu",
        _ => return None,
    };
    let imm = decode_b_imm(raw);
    Some((mnemonic, InstrArgs::B { rs1, rs2, imm }))
}

const fn decode_load(funct3: u8, rd: u8, rs1: u8, raw: u32) -> Option<(&'static str, InstrArgs)> {
    let mnemonic = match funct3 {
        0 => "lb",
        1 => "lh",
        2 => "lw",
        3 => "ld",
        4 => "lbu",
        5 => "lhu",
        6 => "lwu",
        _ => return None,
    };
    let imm = decode_i_imm(raw);
    let args = InstrArgs::Mem {
        reg: rd,
        base: rs1,
        imm,
    };
    Some((mnemonic, args))
}

const fn decode_store(funct3: u8, rs1: u8, rs2: u8, raw: u32) -> Option<(&'static str, InstrArgs)> {
    let mnemonic = match funct3 {
        0 => "sb",
        1 => "sh",
        2 => "sw",
        3 => "sd",
        _ => return None,
    };
    let imm = decode_s_imm(raw);
    let args = InstrArgs::Mem {
        reg: rs2,
        base: rs1,
        imm,
    };
    Some((mnemonic, args))
}

const fn decode_op_imm(funct3: u8, rd: u8, rs1: u8, raw: u32) -> Option<(&'static str, InstrArgs)> {
    let imm = decode_i_imm(raw);
    // RV64 shifts take a 6-bit shamt, leaving funct6 in bits [31:26].
    let funct6 = (raw >> 26) & 0x3F;
    let shamt = ((raw >> 20) & 0x3F) as i32;

    let (mnemonic, imm) = match funct3 {
        0 => ("addi", imm),
        2 => ("slti", imm),
        3 => ("sltiu", imm),
        4 => ("xori", imm),
        6 => ("ori", imm),
        7 => ("andi", imm),
        1 if funct6 == 0 => ("slli", shamt),
        5 if funct6 == 0 => ("srli", shamt),
        5 if funct6 == 0x10 => ("srai", shamt),
        _ => return None,
    };
    Some((mnemonic, InstrArgs::I { rd, rs1, imm }))
}

const fn decode_op_imm_32(
    funct3: u8,
    funct7: u8,
    rd: u8,
    rs1: u8,
    raw: u32,
) -> Option<(&'static str, InstrArgs)> {
    let shamt = ((raw >> 20) & 0x1F) as i32;

    let (mnemonic, imm) = match (funct3, funct7) {
        (0, _) => ("addiw", decode_i_imm(raw)),
        (1, 0x00) => ("slliw", shamt),
        (5, 0x00) => ("srliw", shamt),
        (5, 0x20) => ("sraiw", shamt),
        _ => return None,
    };
    Some((mnemonic, InstrArgs::I { rd, rs1, imm }))
}

const fn decode_op(
    funct3: u8,
    funct7: u8,
    rd: u8,
    rs1: u8,
    rs2: u8,
) -> Option<(&'static str, InstrArgs)> {
    let mnemonic = match (funct7, funct3) {
        (0x00, 0) => "add",
        (0x20, 0) => "sub",
        (0x00, 1) => "sll",
        (0x00, 2) => "slt",
        (0x00, 3) => "sltu",
        (0x00, 4) => "xor",
        (0x00, 5) => "srl",
        (0x20, 5) => "sra",
        (0x00, 6) => "or",
        (0x00, 7) => "and",
        _ => return None,
    };
    Some((mnemonic, InstrArgs::R { rd, rs1, rs2 }))
}

const fn decode_op_32(
    funct3: u8,
    funct7: u8,
    rd: u8,
    rs1: u8,
    rs2: u8,
) -> Option<(&'static str, InstrArgs)> {
    let mnemonic = match (funct7, funct3) {
        (0x00, 0) => "addw",
        (0x20, 0) => "subw",
        (0x00, 1) => "sllw",
        (0x00, 5) => "srlw",
        (0x20, 5) => "sraw",
        _ => return None,
    };
    Some((mnemonic, InstrArgs::R { rd, rs1, rs2 }))
}

const fn decode_fence(raw: u32) -> (&'static str, InstrArgs) {
    if raw == 0x8330_000F {
        return ("fence.tso", InstrArgs::None);
    }
    let pred = ((raw >> 24) & 0xF) as u8;
    let succ = ((raw >> 20) & 0xF) as u8;
    ("fence", InstrArgs::Fence { pred, succ })
}
