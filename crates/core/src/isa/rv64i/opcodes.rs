//! Major opcodes (bits 6:0) of the base integer set, and the handful of
//! instructions identified by their complete encoding.

// ── Major opcodes ──────────────────────────────────────────

/// `lb` .. `ld`, `lbu` .. `lwu`.
pub const OP_LOAD: u32 = 0b0000011;
/// `fence`, `fence.tso`.
pub const OP_MISC_MEM: u32 = 0b0001111;
/// `addi`, `slti`, `xori`, the shift-immediates, ...
pub const OP_IMM: u32 = 0b0010011;
/// `auipc`.
pub const OP_AUIPC: u32 = 0b0010111;
/// `addiw` and the word shift-immediates (RV64).
pub const OP_IMM_32: u32 = 0b0011011;
/// `sb` .. `sd`.
pub const OP_STORE: u32 = 0b0100011;
/// `add`, `sub`, `slt`, ... register-register.
pub const OP_REG: u32 = 0b0110011;
/// `lui`.
pub const OP_LUI: u32 = 0b0110111;
/// `addw`, `subw` and the word shifts (RV64).
pub const OP_REG_32: u32 = 0b0111011;
/// `beq` .. `bgeu`.
pub const OP_BRANCH: u32 = 0b1100011;
/// `jalr`.
pub const OP_JALR: u32 = 0b1100111;
/// `jal`.
pub const OP_JAL: u32 = 0b1101111;
/// `ecall`, `ebreak` (CSR and privileged forms are not decoded).
pub const OP_SYSTEM: u32 = 0b1110011;

// ── Complete encodings ─────────────────────────────────────

/// `ecall`; no other bits may be set.
pub const ECALL: u32 = 0x0000_0073;
/// `ebreak`; no other bits may be set.
pub const EBREAK: u32 = 0x0010_0073;
/// `fence iorw, iorw`, printed as a bare `fence` with pseudo-instructions.
pub const FENCE_FULL: u32 = 0x0FF0_000F;
/// `fence.tso`: FM = 0b1000, pred = succ = `rw`.
pub const FENCE_TSO: u32 = 0x8330_000F;
