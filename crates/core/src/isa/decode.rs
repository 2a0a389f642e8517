//! Opcode matching.
//!
//! Finds the table descriptor whose `(mask, value)` pair accepts a word.
//! Two strategies are provided and must agree on every input:
//!
//! * [`lookup`] scans [`OPCODES`] front to back.
//! * [`OpcodeIndex`] buckets the table by major opcode (bits 6:0), so only
//!   the handful of descriptors sharing a word's opcode are tested.

use std::sync::LazyLock;

use crate::isa::instruction::{InstructionBits, OPCODE_MASK};
use crate::isa::table::{OPCODES, OpcodeDescriptor};

/// Number of distinct 7-bit major opcodes.
const MAJOR_OPCODES: usize = (OPCODE_MASK + 1) as usize;

/// Returns the first descriptor matching `word`, or `None`.
pub fn lookup(word: u32) -> Option<&'static OpcodeDescriptor> {
    OPCODES.iter().find(|desc| desc.matches(word))
}

/// Jump table from major opcode to the table descriptors that carry it.
///
/// Descriptors keep their table order within a bucket, so the first hit is
/// the same descriptor [`lookup`] would return.
#[derive(Debug)]
pub struct OpcodeIndex {
    buckets: Vec<Vec<&'static OpcodeDescriptor>>,
}

impl OpcodeIndex {
    /// Builds the index over [`OPCODES`].
    pub fn new() -> Self {
        let mut buckets = vec![Vec::new(); MAJOR_OPCODES];
        for desc in OPCODES {
            // Every mask covers the opcode field, so the descriptor lives in
            // exactly one bucket.
            debug_assert_eq!(desc.mask & OPCODE_MASK, OPCODE_MASK);
            buckets[desc.major_opcode() as usize].push(desc);
        }
        Self { buckets }
    }

    /// Returns the descriptor matching `word`, or `None`.
    #[inline]
    pub fn lookup(&self, word: u32) -> Option<&'static OpcodeDescriptor> {
        self.buckets[word.opcode() as usize]
            .iter()
            .copied()
            .find(|desc| desc.matches(word))
    }

    /// Process-wide index, built on first use.
    pub fn shared() -> &'static Self {
        static INDEX: LazyLock<OpcodeIndex> = LazyLock::new(OpcodeIndex::new);
        &INDEX
    }
}

impl Default for OpcodeIndex {
    fn default() -> Self {
        Self::new()
    }
}
