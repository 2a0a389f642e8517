//! RISC-V RV32I / RV64I disassembler library.
//!
//! This crate turns 32-bit instruction words into the assembly text a
//! reference toolchain prints for them, with the following:
//! 1. **ISA:** Field extraction, the opcode table, and word matching.
//! 2. **Formatting:** One formatter per operand layout, with optional
//!    pseudo-instruction substitution and ABI or numeric register names.
//! 3. **Configuration:** Per-instance options, loadable from JSON.
//! 4. **Engine:** [`Disassembler`], which ties the above together.
//!
//! Decoding is total: any word that is not a supported instruction renders
//! as `"unknown"`.

/// Common types (errors).
pub mod common;
/// Disassembler configuration (defaults, named options, JSON loading).
pub mod config;
/// Disassembly engine.
pub mod disassembler;
/// Instruction set (bit fields, opcode table, matching, formatters, ABI names).
pub mod isa;

/// Rendering options; use `DisasmConfig::default()` or deserialize from JSON.
pub use crate::config::DisasmConfig;
/// Main engine type; construct with `Disassembler::new` or `Disassembler::default`.
pub use crate::disassembler::Disassembler;
