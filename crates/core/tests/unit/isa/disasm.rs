//! Instruction Disassembler Unit Tests.
//!
//! Verifies the canonical rendering of every operand layout: mnemonic padded
//! to seven columns, one space, comma-separated operands, signed decimal
//! immediates.

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rvdisass_core::isa::disasm::{UNKNOWN, disassemble};

fn b() -> InstructionBuilder {
    InstructionBuilder::new()
}

// ══════════════════════════════════════════════════════════
// 1. Reference words
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0x0000_0093, "addi    ra, zero, 0")]
#[case(0xFFF0_0093, "addi    ra, zero, -1")]
#[case(0x00A0_0513, "addi    a0, zero, 10")]
#[case(0x00C5_8533, "add     a0, a1, a2")]
#[case(0x40C5_8533, "sub     a0, a1, a2")]
#[case(0x0035_1513, "slli    a0, a0, 3")]
#[case(0x0081_3503, "ld      a0, 8(sp)")]
#[case(0x0000_8067, "jalr    zero, 0(ra)")]
#[case(0x0FF0_000F, "fence   iorw, iorw")]
#[case(0x8330_000F, "fence.tso rw, rw")]
#[case(0x8F00_000F, "unknown")]
fn reference_words(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(harness::canonical().disassemble(word), expected);
}

#[test]
fn numeric_register_zero_is_x0() {
    assert_eq!(harness::numeric().disassemble(0x0000_0093), "addi    x1, x0, 0");
}

// ══════════════════════════════════════════════════════════
// 2. Per-layout canonical forms
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::r(b().xor(5, 6, 7).build(), "xor     t0, t1, t2")]
#[case::r_and(b().and(18, 19, 20).build(), "and     s2, s3, s4")]
#[case::r_w(b().addw(10, 11, 12).build(), "addw    a0, a1, a2")]
#[case::i(b().andi(8, 9, -2048).build(), "andi    s0, s1, -2048")]
#[case::i_max(b().ori(8, 9, 2047).build(), "ori     s0, s1, 2047")]
#[case::i_w(b().addiw(1, 2, 5).build(), "addiw   ra, sp, 5")]
#[case::shift_rv64(b().srai(10, 11, 63).build(), "srai    a0, a1, 63")]
#[case::shift_word(b().sraiw(10, 11, 31).build(), "sraiw   a0, a1, 31")]
#[case::load(b().lw(5, 8, -4).build(), "lw      t0, -4(s0)")]
#[case::load_u(b().lwu(5, 8, 0).build(), "lwu     t0, 0(s0)")]
#[case::load_byte(b().lb(5, 8, 1).build(), "lb      t0, 1(s0)")]
#[case::load_byte_u(b().lbu(5, 8, -1).build(), "lbu     t0, -1(s0)")]
#[case::store(b().sd(2, 1, -8).build(), "sd      ra, -8(sp)")]
#[case::store_max(b().sb(10, 11, 2047).build(), "sb      a1, 2047(a0)")]
#[case::branch_min(b().beq(10, 11, -4096).build(), "beq     a0, a1, -4096")]
#[case::branch(b().bgeu(1, 2, 8).build(), "bgeu    ra, sp, 8")]
#[case::lui(b().lui(5, 0xFFFFF).build(), "lui     t0, 1048575")]
#[case::auipc(b().auipc(1, 0x12345).build(), "auipc   ra, 74565")]
#[case::jal(b().jal(5, 2048).build(), "jal     t0, 2048")]
#[case::jal_zero(b().jal(0, -8).build(), "jal     zero, -8")]
#[case::jal_min(b().jal(1, -1_048_576).build(), "jal     ra, -1048576")]
#[case::jalr(b().jalr(5, 6, -16).build(), "jalr    t0, -16(t1)")]
#[case::ecall(0x0000_0073, "ecall")]
#[case::ebreak(0x0010_0073, "ebreak")]
fn canonical_layouts(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(harness::canonical().disassemble(word), expected);
}

#[test]
fn raw_field_setters() {
    use rvdisass_core::isa::rv64i::opcodes::{OP_IMM, OP_REG};

    let sll = b().opcode(OP_REG).funct3(0b001).funct7(0).rd(1).rs1(2).rs2(3).build();
    assert_eq!(harness::canonical().disassemble(sll), "sll     ra, sp, gp");

    let ori = b().opcode(OP_IMM).funct3(0b110).rd(1).rs1(2).imm(-5).build();
    assert_eq!(harness::canonical().disassemble(ori), "ori     ra, sp, -5");
}

#[test]
fn numeric_names_everywhere() {
    let dis = harness::numeric();
    assert_eq!(dis.disassemble(b().sd(2, 1, -8).build()), "sd      x1, -8(x2)");
    assert_eq!(dis.disassemble(b().jalr(0, 1, 0).build()), "jalr    x0, 0(x1)");
    assert_eq!(dis.disassemble(b().bne(31, 0, 4).build()), "bne     x31, x0, 4");
}

// ══════════════════════════════════════════════════════════
// 3. FENCE
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::read_write(b().fence(0, 0b0010, 0b0001).build(), "fence   r, w")]
#[case::io(b().fence(0, 0b1100, 0b0011).build(), "fence   io, rw")]
#[case::empty_succ(b().fence(0, 0b1010, 0).build(), "fence   ir, unknown")]
#[case::empty_both(b().fence(0, 0, 0).build(), "fence   unknown, unknown")]
#[case::reserved_rd(b().fence(0, 0xF, 0xF).rd(1).build(), "unknown")]
#[case::reserved_rs1(b().fence(0, 0xF, 0xF).rs1(2).build(), "unknown")]
#[case::reserved_fm(b().fence(0b1000, 0xF, 0xF).build(), "unknown")]
#[case::other_fm(b().fence(0b0001, 0b0011, 0b0011).build(), "unknown")]
fn fence_forms(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(harness::canonical().disassemble(word), expected);
}

// ══════════════════════════════════════════════════════════
// 4. Unsupported encodings
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::zero(0x0000_0000)]
#[case::ones(0xFFFF_FFFF)]
#[case::mul(0x02C5_8533)]
#[case::amoadd(0x0000_202F)]
#[case::flw(0x0000_2007)]
#[case::csrrs(0xC000_2573)]
#[case::mret(0x3020_0073)]
#[case::fence_i(0x0000_100F)]
fn unsupported_is_unknown(#[case] word: u32) {
    assert_eq!(harness::canonical().disassemble(word), UNKNOWN);
    assert_eq!(harness::pseudo().disassemble(word), UNKNOWN);
}

#[test]
fn free_function_uses_defaults() {
    assert_eq!(disassemble(0x0000_8067), "jalr    zero, 0(ra)");
    assert_eq!(disassemble(0x0000_0013), "addi    zero, zero, 0");
}
