//! Minor opcodes (`funct3`, bits 14:12).
//!
//! Within one major opcode, `funct3` selects the access width of loads and
//! stores, the comparison of branches, and the ALU operation of the
//! immediate and register forms. The ALU values are shared by `OP_IMM`,
//! `OP_IMM_32`, `OP_REG` and `OP_REG_32`.

// ── OP_LOAD: width and signedness ──────────────────────────

/// `lb`, 8-bit sign-extended.
pub const LB: u32 = 0b000;
/// `lh`, 16-bit sign-extended.
pub const LH: u32 = 0b001;
/// `lw`, 32-bit sign-extended.
pub const LW: u32 = 0b010;
/// `ld`, 64-bit (RV64).
pub const LD: u32 = 0b011;
/// `lbu`, 8-bit zero-extended.
pub const LBU: u32 = 0b100;
/// `lhu`, 16-bit zero-extended.
pub const LHU: u32 = 0b101;
/// `lwu`, 32-bit zero-extended (RV64).
pub const LWU: u32 = 0b110;

// ── OP_STORE: width ────────────────────────────────────────

/// `sb`.
pub const SB: u32 = 0b000;
/// `sh`.
pub const SH: u32 = 0b001;
/// `sw`.
pub const SW: u32 = 0b010;
/// `sd` (RV64).
pub const SD: u32 = 0b011;

// ── OP_BRANCH: comparison ──────────────────────────────────

/// `beq`: `rs1 == rs2`.
pub const BEQ: u32 = 0b000;
/// `bne`: `rs1 != rs2`.
pub const BNE: u32 = 0b001;
/// `blt`: signed `rs1 < rs2`.
pub const BLT: u32 = 0b100;
/// `bge`: signed `rs1 >= rs2`.
pub const BGE: u32 = 0b101;
/// `bltu`: unsigned `rs1 < rs2`.
pub const BLTU: u32 = 0b110;
/// `bgeu`: unsigned `rs1 >= rs2`.
pub const BGEU: u32 = 0b111;

// ── ALU operations ─────────────────────────────────────────

/// `add`/`sub` and `addi`; funct7 picks `sub`.
pub const ADD_SUB: u32 = 0b000;
/// Left shifts.
pub const SLL: u32 = 0b001;
/// Signed set-less-than.
pub const SLT: u32 = 0b010;
/// Unsigned set-less-than.
pub const SLTU: u32 = 0b011;
/// Exclusive or.
pub const XOR: u32 = 0b100;
/// Right shifts; funct7 / funct6 picks arithmetic.
pub const SRL_SRA: u32 = 0b101;
/// Inclusive or.
pub const OR: u32 = 0b110;
/// And.
pub const AND: u32 = 0b111;

// ── Single-instruction opcodes ─────────────────────────────

/// The only valid `funct3` under `OP_JALR`.
pub const JALR: u32 = 0b000;

/// `fence` under `OP_MISC_MEM`; `0b001` would be `fence.i`, which is not
/// part of the base set.
pub const FENCE: u32 = 0b000;
