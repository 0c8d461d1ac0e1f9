//! Field and immediate extraction for RISC-V encodings.

/// Decode I-type immediate (bits [31:20] sign-extended).
#[inline]
pub const fn decode_i_imm(instr: u32) -> i32 {
    (instr as i32) >> 20
}

/// Decode S-type immediate (bits [31:25] | [11:7] sign-extended).
#[inline]
pub const fn decode_s_imm(instr: u32) -> i32 {
    let imm11_5 = (instr >> 25) & 0x7F;
    let imm4_0 = (instr >> 7) & 0x1F;
    let imm = (imm11_5 << 5) | imm4_0;
    ((imm as i32) << 20) >> 20
}

/// Decode B-type immediate (bits [31] | [7] | [30:25] | [11:8] sign-extended, << 1).
#[inline]
pub const fn decode_b_imm(instr: u32) -> i32 {
    let imm12 = (instr >> 31) & 0x1;
    let imm11 = (instr >> 7) & 0x1;
    let imm10_5 = (instr >> 25) & 0x3F;
    let imm4_1 = (instr >> 8) & 0xF;
    let imm = (imm12 << 12) | (imm11 << 11) | (imm10_5 << 5) | (imm4_1 << 1);
    ((imm as i32) << 19) >> 19
}

/// Decode U-type immediate (bits [31:12] << 12).
#[inline]
pub const fn decode_u_imm(instr: u32) -> i32 {
    (instr & 0xFFFF_F000) as i32
}

/// Decode J-type immediate (bits [31] | [19:12] | [20] | [30:21] sign-extended, << 1).
#[inline]
pub const fn decode_j_imm(instr: u32) -> i32 {
    let imm20 = (instr >> 31) & 0x1;
    let imm19_12 = (instr >> 12) & 0xFF;
    let imm11 = (instr >> 20) & 0x1;
    let imm10_1 = (instr >> 21) & 0x3FF;
    let imm = (imm20 << 20) | (imm19_12 << 12) | (imm11 << 11) | (imm10_1 << 1);
    ((imm as i32) << 11) >> 11
}

/// Extract rd field (bits [11:7]).
#[inline]
pub const fn decode_rd(instr: u32) -> u8 {
    ((instr >> 7) & 0x1F) as u8
}

/// Extract rs1 field (bits [19:15]).
#[inline]
pub const fn decode_rs1(instr: u32) -> u8 {
    ((instr >> 15) & 0x1F) as u8
}

/// Extract rs2 field (bits [24:20]).
#[inline]
pub const fn decode_rs2(instr: u32) -> u8 {
    ((instr >> 20) & 0x1F) as u8
}

/// Extract funct3 field (bits [14:12]).
#[inline]
pub const fn decode_funct3(instr: u32) -> u8 {
    ((instr >> 12) & 0x7) as u8
}

/// Extract funct7 field (bits [31:25]).
#[inline]
pub const fn decode_funct7(instr: u32) -> u8 {
    ((instr >> 25) & 0x7F) as u8
}

/// Extract opcode field (bits [6:0]).
#[inline]
pub const fn decode_opcode(instr: u32) -> u8 {
    (instr & 0x7F) as u8
}

/// Extract the 12-bit CSR address (bits [31:20]).
#[inline]
pub const fn decode_csr(instr: u32) -> u16 {
    ((instr >> 20) & 0xFFF) as u16
}

// ===== Compressed =====

/// Compressed register field in bits [9:7] (x8-x15).
#[inline]
pub const fn decode_c_rs1_prime(instr: u16) -> u8 {
    ((instr >> 7) & 0x7) as u8 + 8
}

/// Compressed register field in bits [4:2] (x8-x15).
#[inline]
pub const fn decode_c_rs2_prime(instr: u16) -> u8 {
    ((instr >> 2) & 0x7) as u8 + 8
}

/// Full compressed register field in bits [11:7].
#[inline]
pub const fn decode_c_rd(instr: u16) -> u8 {
    ((instr >> 7) & 0x1F) as u8
}

/// Full compressed register field in bits [6:2].
#[inline]
pub const fn decode_c_rs2(instr: u16) -> u8 {
    ((instr >> 2) & 0x1F) as u8
}

pub const fn decode_addi4spn_imm(instr: u16) -> u16 {
    (((instr >> 6) & 0x1) << 2)
        | (((instr >> 5) & 0x1) << 3)
        | (((instr >> 11) & 0x3) << 4)
        | (((instr >> 7) & 0xF) << 6)
}

pub const fn decode_cl_lw_offset(instr: u16) -> u8 {
    ((((instr >> 6) & 0x1) << 2) | (((instr >> 10) & 0x7) << 3) | (((instr >> 5) & 0x1) << 6)) as u8
}

pub const fn decode_cl_ld_offset(instr: u16) -> u8 {
    ((((instr >> 10) & 0x7) << 3) | (((instr >> 5) & 0x3) << 6)) as u8
}

pub const fn decode_ci_imm(instr: u16) -> i8 {
    let imm = (((instr >> 2) & 0x1F) | (((instr >> 12) & 0x1) << 5)) as u8;
    ((imm as i8) << 2) >> 2
}

pub const fn decode_ci_shamt(instr: u16) -> u8 {
    (((instr >> 2) & 0x1F) | (((instr >> 12) & 0x1) << 5)) as u8
}

pub const fn decode_ci16sp_imm(instr: u16) -> i16 {
    let imm = (((instr >> 6) & 0x1) << 4)
        | (((instr >> 2) & 0x1) << 5)
        | (((instr >> 5) & 0x1) << 6)
        | (((instr >> 3) & 0x3) << 7)
        | (((instr >> 12) & 0x1) << 9);
    ((imm as i16) << 6) >> 6
}

pub const fn decode_ci_lui_imm(instr: u16) -> i32 {
    let imm = (((instr >> 2) & 0x1F) | (((instr >> 12) & 0x1) << 5)) as u32;
    let imm = imm << 12;
    ((imm as i32) << 14) >> 14
}

pub const fn decode_cj_imm(instr: u16) -> i16 {
    let imm = (((instr >> 3) & 0x7) << 1)
        | (((instr >> 11) & 0x1) << 4)
        | (((instr >> 2) & 0x1) << 5)
        | (((instr >> 7) & 0x1) << 6)
        | (((instr >> 6) & 0x1) << 7)
        | (((instr >> 9) & 0x3) << 8)
        | (((instr >> 8) & 0x1) << 10)
        | (((instr >> 12) & 0x1) << 11);
    ((imm as i16) << 4) >> 4
}

pub const fn decode_cb_imm(instr: u16) -> i16 {
    let imm = (((instr >> 3) & 0x3) << 1)
        | (((instr >> 10) & 0x3) << 3)
        | (((instr >> 2) & 0x1) << 5)
        | (((instr >> 5) & 0x3) << 6)
        | (((instr >> 12) & 0x1) << 8);
    ((imm as i16) << 7) >> 7
}

pub const fn decode_ci_lwsp_offset(instr: u16) -> u8 {
    ((((instr >> 4) & 0x7) << 2) | (((instr >> 12) & 0x1) << 5) | (((instr >> 2) & 0x3) << 6)) as u8
}

pub const fn decode_ci_ldsp_offset(instr: u16) -> u16 {
    (((instr >> 5) & 0x3) << 3) | (((instr >> 12) & 0x1) << 5) | (((instr >> 2) & 0x7) << 6)
}

pub const fn decode_css_swsp_offset(instr: u16) -> u8 {
    ((((instr >> 9) & 0xF) << 2) | (((instr >> 7) & 0x3) << 6)) as u8
}

pub const fn decode_css_sdsp_offset(instr: u16) -> u16 {
    (((instr >> 10) & 0x7) << 3) | (((instr >> 7) & 0x7) << 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_i_imm() {
        // addi ra, zero, 1
        assert_eq!(decode_i_imm(0x0010_0093), 1);
        // addi ra, zero, -1
        assert_eq!(decode_i_imm(0xFFF0_0093), -1);
    }

    #[test]
    fn test_decode_b_imm() {
        // beq zero, zero, 8
        assert_eq!(decode_b_imm(0x0000_0463), 8);
    }

    #[test]
    fn test_decode_s_imm() {
        // sd ra, -8(sp)
        assert_eq!(decode_s_imm(0xFE11_3C23), -8);
    }

    #[test]
    fn test_field_extraction() {
        // addi ra, sp, 100
        let instr = 0x0641_0093;
        assert_eq!(decode_rd(instr), 1);
        assert_eq!(decode_rs1(instr), 2);
        assert_eq!(decode_opcode(instr), 0x13);
        // csrrs a0, mstatus, zero
        assert_eq!(decode_csr(0x3000_2573), 0x300);
    }

    #[test]
    fn test_compressed_fields() {
        // c.addi a0, 1 = 0x0505
        assert_eq!(decode_c_rd(0x0505), 10);
        assert_eq!(decode_ci_imm(0x0505), 1);
        // c.addi a0, -1 = 0x157d
        assert_eq!(decode_ci_imm(0x157D), -1);
        // c.lw a0, 0(a1) = 0x4188
        assert_eq!(decode_c_rs1_prime(0x4188), 11);
        assert_eq!(decode_c_rs2_prime(0x4188), 10);
    }
}
