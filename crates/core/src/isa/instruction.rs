//! Instruction field extraction and immediate assembly.
//!
//! Provides the bit extraction functions used to pull RISC-V instruction
//! fields out of a 32-bit encoding, and the per-format immediate assemblers
//! that undo the ISA's bit scrambling.
//!
//! Every immediate is built the same way: the raw field bits are moved back
//! into their architectural positions (zero-extended), then OR-ed with the
//! sign-extension mask produced by [`sign_extend_from_bit31`] for the
//! immediate's true width.

/// Bit mask for the opcode field (bits 6:0).
pub const OPCODE_MASK: u32 = 0x0000_007F;
/// Bit mask for the destination register field (bits 11:7).
pub const RD_MASK: u32 = 0x0000_0F80;
/// Bit mask for the funct3 field (bits 14:12).
pub const FUNCT3_MASK: u32 = 0x0000_7000;
/// Bit mask for the first source register field (bits 19:15).
pub const RS1_MASK: u32 = 0x000F_8000;
/// Bit mask for the second source register field (bits 24:20).
pub const RS2_MASK: u32 = 0x01F0_0000;
/// Bit mask for the funct7 field (bits 31:25).
pub const FUNCT7_MASK: u32 = 0xFE00_0000;
/// Bit mask for the funct6 field (bits 31:26), used by RV64 shift-immediates.
pub const FUNCT6_MASK: u32 = 0xFC00_0000;
/// Bit mask for the 6-bit shift amount (bits 25:20).
pub const SHAMT_MASK: u32 = 0x03F0_0000;
/// Bit mask for the I-type immediate (bits 31:20).
pub const IMM_I_MASK: u32 = 0xFFF0_0000;
/// Bit mask for the U-type immediate (bits 31:12).
pub const IMM_U_MASK: u32 = 0xFFFF_F000;
/// Bit mask for the FENCE successor set (bits 23:20).
pub const FENCE_SUCC_MASK: u32 = 0x00F0_0000;
/// Bit mask for the FENCE predecessor set (bits 27:24).
pub const FENCE_PRED_MASK: u32 = 0x0F00_0000;
/// Bit mask for the FENCE mode field (bits 31:28).
pub const FENCE_FM_MASK: u32 = 0xF000_0000;
/// Mask matching every bit, for fixed encodings such as ECALL.
pub const MASK_ALL: u32 = 0xFFFF_FFFF;

/// Shift of the opcode field.
pub const OPCODE_SHIFT: u32 = 0;
/// Shift of the destination register field.
pub const RD_SHIFT: u32 = 7;
/// Shift of the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Shift of the first source register field.
pub const RS1_SHIFT: u32 = 15;
/// Shift of the second source register field.
pub const RS2_SHIFT: u32 = 20;
/// Shift of the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;
/// Shift of the funct6 field.
pub const FUNCT6_SHIFT: u32 = 26;
/// Shift of the shift-amount field.
pub const SHAMT_SHIFT: u32 = 20;
/// Shift of the I-type immediate.
pub const IMM_I_SHIFT: u32 = 20;
/// Shift of the U-type immediate.
pub const IMM_U_SHIFT: u32 = 12;
/// Shift of the FENCE successor set.
pub const FENCE_SUCC_SHIFT: u32 = 20;
/// Shift of the FENCE predecessor set.
pub const FENCE_PRED_SHIFT: u32 = 24;
/// Shift of the FENCE mode field.
pub const FENCE_FM_SHIFT: u32 = 28;

/// Returns a mask whose bits `[31:width-1]` replicate bit 31 of `word`.
///
/// The remaining low bits are zero. OR-ing this with a zero-extended,
/// correctly permuted immediate of `width` bits yields the sign-extended
/// 32-bit value. `width` must be in `1..=32`.
#[inline]
pub const fn sign_extend_from_bit31(word: u32, width: u32) -> u32 {
    (((word & 0x8000_0000) as i32) >> (32 - width)) as u32
}

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every method is `(word & MASK) >> SHIFT` for the corresponding field;
/// none of them can fail.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 6:0).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 11:7).
    fn rd(&self) -> usize;

    /// Extracts the funct3 field (bits 14:12).
    fn funct3(&self) -> u32;

    /// Extracts the first source register field (bits 19:15).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 24:20).
    fn rs2(&self) -> usize;

    /// Extracts the funct7 field (bits 31:25).
    fn funct7(&self) -> u32;

    /// Extracts the funct6 field (bits 31:26).
    fn funct6(&self) -> u32;

    /// Extracts the raw, unsigned I-type immediate (bits 31:20).
    fn imm_i_raw(&self) -> u32;

    /// Extracts the raw, unsigned U-type immediate (bits 31:12).
    fn imm_u_raw(&self) -> u32;

    /// Extracts the 6-bit shift amount (bits 25:20).
    fn shamt(&self) -> u32;

    /// Extracts the FENCE predecessor set (bits 27:24).
    fn fence_pred(&self) -> u32;

    /// Extracts the FENCE successor set (bits 23:20).
    fn fence_succ(&self) -> u32;

    /// Extracts the FENCE mode field (bits 31:28).
    fn fence_fm(&self) -> u32;

    /// Sign-extended 12-bit immediate of the I, I-load and I-jump layouts.
    fn imm_i(&self) -> i32;

    /// Sign-extended 12-bit store offset (`inst[31:25] << 5 | inst[11:7]`).
    fn imm_s(&self) -> i32;

    /// Sign-extended 13-bit branch offset; always even.
    fn imm_b(&self) -> i32;

    /// Sign-extended 21-bit jump offset; always even.
    fn imm_j(&self) -> i32;

    /// The 20-bit upper immediate, unshifted.
    fn imm_u(&self) -> i32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self & OPCODE_MASK) >> OPCODE_SHIFT
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self & RD_MASK) >> RD_SHIFT) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self & FUNCT3_MASK) >> FUNCT3_SHIFT
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self & RS1_MASK) >> RS1_SHIFT) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self & RS2_MASK) >> RS2_SHIFT) as usize
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self & FUNCT7_MASK) >> FUNCT7_SHIFT
    }

    #[inline(always)]
    fn funct6(&self) -> u32 {
        (self & FUNCT6_MASK) >> FUNCT6_SHIFT
    }

    #[inline(always)]
    fn imm_i_raw(&self) -> u32 {
        (self & IMM_I_MASK) >> IMM_I_SHIFT
    }

    #[inline(always)]
    fn imm_u_raw(&self) -> u32 {
        (self & IMM_U_MASK) >> IMM_U_SHIFT
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self & SHAMT_MASK) >> SHAMT_SHIFT
    }

    #[inline(always)]
    fn fence_pred(&self) -> u32 {
        (self & FENCE_PRED_MASK) >> FENCE_PRED_SHIFT
    }

    #[inline(always)]
    fn fence_succ(&self) -> u32 {
        (self & FENCE_SUCC_MASK) >> FENCE_SUCC_SHIFT
    }

    #[inline(always)]
    fn fence_fm(&self) -> u32 {
        (self & FENCE_FM_MASK) >> FENCE_FM_SHIFT
    }

    #[inline]
    fn imm_i(&self) -> i32 {
        (self.imm_i_raw() | sign_extend_from_bit31(*self, 12)) as i32
    }

    #[inline]
    fn imm_s(&self) -> i32 {
        let hi = self.funct7() << 5;
        let lo = (self & RD_MASK) >> RD_SHIFT;
        (hi | lo | sign_extend_from_bit31(*self, 12)) as i32
    }

    /// Bit 12 of the offset is the instruction's bit 31 and arrives through
    /// the sign-extension mask.
    #[inline]
    fn imm_b(&self) -> i32 {
        let bit11 = ((self >> 7) & 0x1) << 11;
        let bits4_1 = ((self >> 8) & 0xF) << 1;
        let bits10_5 = ((self >> 25) & 0x3F) << 5;
        (bit11 | bits4_1 | bits10_5 | sign_extend_from_bit31(*self, 13)) as i32
    }

    /// Bit 20 of the offset is the instruction's bit 31 and arrives through
    /// the sign-extension mask.
    #[inline]
    fn imm_j(&self) -> i32 {
        let bits19_12 = ((self >> 12) & 0xFF) << 12;
        let bit11 = ((self >> 20) & 0x1) << 11;
        let bits10_1 = ((self >> 21) & 0x3FF) << 1;
        (bits19_12 | bit11 | bits10_1 | sign_extend_from_bit31(*self, 21)) as i32
    }

    #[inline]
    fn imm_u(&self) -> i32 {
        self.imm_u_raw() as i32
    }
}
