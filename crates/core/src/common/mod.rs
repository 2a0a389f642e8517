//! Common types shared across the disassembler.
//!
//! Holds the error types reported at the crate's edges. Decoding a word
//! never fails; only configuration loading and byte-buffer splitting can.

/// Error types for configuration loading and buffer disassembly.
pub mod error;

pub use error::{ConfigError, DisasmError};
