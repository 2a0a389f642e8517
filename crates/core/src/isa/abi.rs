//! RISC-V register naming.
//!
//! Maps a 5-bit integer register index to its display name, either the
//! calling-convention (ABI) name or the raw numeric `xN` form.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;

/// ABI register names for x0–x31.
pub const ABI_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Numeric register names for x0–x31.
pub const NUMERIC_NAMES: [&str; 32] = [
    "x0", "x1", "x2", "x3", "x4", "x5", "x6", "x7", "x8", "x9", "x10", "x11", "x12", "x13", "x14",
    "x15", "x16", "x17", "x18", "x19", "x20", "x21", "x22", "x23", "x24", "x25", "x26", "x27",
    "x28", "x29", "x30", "x31",
];

/// Register naming policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegisterNaming {
    /// `zero, ra, sp, ...`.
    #[default]
    Abi,
    /// `x0, x1, x2, ...`.
    Numeric,
}

impl RegisterNaming {
    /// Returns the display name of integer register `idx`.
    ///
    /// Only the low five bits of `idx` are significant.
    #[inline]
    pub const fn name(self, idx: usize) -> &'static str {
        match self {
            Self::Abi => ABI_NAMES[idx & 0x1F],
            Self::Numeric => NUMERIC_NAMES[idx & 0x1F],
        }
    }
}
