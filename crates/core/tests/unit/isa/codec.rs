//! Bit-field Codec Tests.
//!
//! Verifies field extraction and the reassembly of every immediate format,
//! including the scrambled branch and jump offsets at their extremes.

use crate::common::builder::instruction::InstructionBuilder;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use rvdisass_core::isa::instruction::{InstructionBits, sign_extend_from_bit31};

// ──────────────────────────────────────────────────────────
// Sign extension
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(0x0000_0000, 12, 0x0000_0000)]
#[case(0x7FFF_FFFF, 12, 0x0000_0000)]
#[case(0x8000_0000, 12, 0xFFFF_F800)]
#[case(0x8000_0000, 13, 0xFFFF_F000)]
#[case(0x8000_0000, 21, 0xFFF0_0000)]
#[case(0x8000_0000, 32, 0x8000_0000)]
fn sign_extension_mask(#[case] word: u32, #[case] width: u32, #[case] expected: u32) {
    assert_eq!(sign_extend_from_bit31(word, width), expected);
}

// ──────────────────────────────────────────────────────────
// Register and function fields
// ──────────────────────────────────────────────────────────

#[test]
fn r_type_fields() {
    // sub s11, t3, t6
    let inst = InstructionBuilder::new().sub(27, 28, 31).build();
    assert_eq!(inst.opcode(), 0b0110011);
    assert_eq!(inst.rd(), 27);
    assert_eq!(inst.rs1(), 28);
    assert_eq!(inst.rs2(), 31);
    assert_eq!(inst.funct3(), 0);
    assert_eq!(inst.funct7(), 0b0100000);
}

#[test]
fn shift_amount_uses_six_bits() {
    let inst = InstructionBuilder::new().srai(10, 11, 63).build();
    assert_eq!(inst.shamt(), 63);
    assert_eq!(inst.funct6(), 0b010000);
}

#[test]
fn fence_fields() {
    let inst = InstructionBuilder::new().fence(0b1000, 0b0011, 0b0011).build();
    assert_eq!(inst, 0x8330_000F);
    assert_eq!(inst.fence_fm(), 0b1000);
    assert_eq!(inst.fence_pred(), 0b0011);
    assert_eq!(inst.fence_succ(), 0b0011);
}

// ──────────────────────────────────────────────────────────
// Immediates
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(0)]
#[case(1)]
#[case(-1)]
#[case(2047)]
#[case(-2048)]
fn i_immediate(#[case] imm: i32) {
    let inst = InstructionBuilder::new().addi(1, 2, imm).build();
    assert_eq!(inst.imm_i(), imm);
}

#[test]
fn i_immediate_raw_is_unsigned() {
    let inst = InstructionBuilder::new().addi(1, 2, -1).build();
    assert_eq!(inst.imm_i_raw(), 0xFFF);
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(31)]
#[case(32)]
#[case(2047)]
#[case(-2048)]
fn s_immediate(#[case] imm: i32) {
    let inst = InstructionBuilder::new().sd(2, 8, imm).build();
    assert_eq!(inst.imm_s(), imm);
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(-2)]
#[case(2048)]
#[case(4094)]
#[case(-4096)]
fn b_immediate(#[case] imm: i32) {
    let inst = InstructionBuilder::new().beq(1, 2, imm).build();
    assert_eq!(inst.imm_b(), imm);
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(-2)]
#[case(2048)]
#[case(1 << 12)]
#[case(1_048_574)]
#[case(-1_048_576)]
fn j_immediate(#[case] imm: i32) {
    let inst = InstructionBuilder::new().jal(1, imm).build();
    assert_eq!(inst.imm_j(), imm);
}

#[test]
fn u_immediate_is_unshifted_and_unsigned() {
    let inst = InstructionBuilder::new().lui(5, 0xFFFFF).build();
    assert_eq!(inst.imm_u(), 0xFFFFF);
    assert_eq!(inst.imm_u_raw(), 0xFFFFF);
}

proptest! {
    #[test]
    fn branch_offsets_reassemble(half in -2048i32..2048) {
        let imm = half * 2;
        let inst = InstructionBuilder::new().bne(3, 4, imm).build();
        prop_assert_eq!(inst.imm_b(), imm);
    }

    #[test]
    fn jump_offsets_reassemble(half in -524_288i32..524_288) {
        let imm = half * 2;
        let inst = InstructionBuilder::new().jal(0, imm).build();
        prop_assert_eq!(inst.imm_j(), imm);
    }

    #[test]
    fn store_offsets_reassemble(imm in -2048i32..2048) {
        let inst = InstructionBuilder::new().sw(2, 9, imm).build();
        prop_assert_eq!(inst.imm_s(), imm);
    }
}
