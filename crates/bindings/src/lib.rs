//! Foreign bindings for the RISC-V disassembler.
//!
//! This crate exposes the disassembler outside Rust. It provides:
//! 1. **C ABI:** `rv_disass`, `rv_free`, `rv_set_option`, `rv_reset_options` and
//!    opcode table introspection, for simulator glue and test harnesses.
//! 2. **String lifetimes:** The caller-owned and recycle-on-next-call
//!    conventions, kept out of the core engine.
//! 3. **Logging:** `tracing` subscriber setup driven by `RVDISASS_LOG`.
//! 4. **Python:** A `Disassembler` class and helpers, behind the `python` feature.

/// C ABI adapter and its process-wide context.
pub mod ffi;
/// Logging setup.
pub mod logging;
/// Python bindings (`Disassembler`, `disassemble`).
#[cfg(feature = "python")]
pub mod python;

pub use ffi::{RvOpInfo, StringLifetime};
pub use logging::init_logging;
