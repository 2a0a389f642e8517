//! # Unit Components
//!
//! Tests for each layer of the disassembler, from bit-field extraction up
//! to the engine and its configuration.
