//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, bit-field decoding, and the text formatters
//! for the RV32I / RV64I base integer instruction sets.
//!
//! # Layers
//!
//! * `instruction`: Field extraction and immediate reassembly on raw words.
//! * `table`: One descriptor per supported mnemonic.
//! * `decode`: Word → descriptor matching.
//! * `disasm` / `pseudo`: Layout formatters and pseudo-instruction rules.
//! * `abi`: Register naming.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Matching of instruction words against the opcode table.
pub mod decode;

/// Instruction disassembler: per-layout formatters.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Pseudo-instruction substitution rules.
mod pseudo;

/// Base integer instruction set encodings (RV32I / RV64I).
pub mod rv64i;

/// The opcode table.
pub mod table;
