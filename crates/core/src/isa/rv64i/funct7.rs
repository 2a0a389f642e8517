//! Upper function codes (`funct7`, bits 31:25, and `funct6`, bits 31:26).
//!
//! `funct7` separates register-register operations sharing a `funct3`
//! (`add`/`sub`, `srl`/`sra`) and the RV64 word shift-immediates. The RV64
//! shift-immediates on `OP_IMM` use bit 25 for the sixth shift-amount bit,
//! so only `funct6` is left to tell `srli` from `srai`.

/// `funct7` of the base operation (`add`, `srl`, `slliw`, ...).
pub const DEFAULT: u32 = 0b0000000;

/// `funct7` of `sub` / `subw`.
pub const SUB: u32 = 0b0100000;
/// `funct7` of `sra`, `sraw` and `sraiw`; same bit pattern as [`SUB`].
pub const SRA: u32 = 0b0100000;

/// `funct6` of `slli` / `srli`.
pub const SHIFT_LOGICAL: u32 = 0b000000;
/// `funct6` of `srai`.
pub const SHIFT_ARITH: u32 = 0b010000;
