//! RISC-V Base Integer Instruction Set (RV32I / RV64I).
//!
//! Named encoding constants from which the opcode table is assembled.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, OpImm, OpReg, etc.)
//!   and the fixed SYSTEM encodings.
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits for R-type instructions and the
//!   RV64 word shift-immediates, plus `funct6` values for the RV64 shifts.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 (and funct6) definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
