//! Error definitions.
//!
//! Disassembly of a single word is total: unrecognised and reserved
//! encodings render as `"unknown"` rather than failing. The errors below
//! cover the surrounding conveniences only:
//! 1. **Configuration:** Rejecting malformed JSON option sets.
//! 2. **Buffers:** Rejecting byte slices that do not split into whole words.

use thiserror::Error;

/// Failure to load a [`DisasmConfig`](crate::config::DisasmConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text was malformed or had a field of the wrong type.
    #[error("invalid disassembler config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to disassemble a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisasmError {
    /// The buffer ends partway through a 32-bit instruction word.
    #[error("truncated instruction word at byte offset {offset:#x} ({len} trailing bytes)")]
    TruncatedWord {
        /// Byte offset of the incomplete word.
        offset: usize,
        /// Number of bytes left over after the last whole word.
        len: usize,
    },
}
