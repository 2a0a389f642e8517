//! Opcode Table Tests.
//!
//! The table must match every supported instruction through exactly one
//! descriptor. Sampled checks run by default; the full 2^32 sweep is
//! `#[ignore]`d and fans out across threads.

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use rstest::rstest;
use rvdisass_core::isa::table::{Layout, MAX_MNEMONIC_LEN, OPCODES, opcode_count};

/// Descriptors that accept `word`.
fn matching(word: u32) -> usize {
    OPCODES.iter().filter(|d| d.matches(word)).count()
}

#[test]
fn table_size() {
    assert_eq!(opcode_count(), 52);
    assert_eq!(OPCODES.len(), opcode_count());
}

#[test]
fn mnemonics_fit_the_column() {
    for desc in OPCODES {
        assert!(
            !desc.mnemonic.is_empty() && desc.mnemonic.len() <= MAX_MNEMONIC_LEN,
            "bad mnemonic {:?}",
            desc.mnemonic
        );
        assert!(desc.mnemonic.is_ascii());
    }
}

#[test]
fn mnemonics_are_unique() {
    let mut names: Vec<_> = OPCODES.iter().map(|d| d.mnemonic).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), OPCODES.len());
}

#[test]
fn values_lie_inside_masks() {
    for desc in OPCODES {
        assert_eq!(desc.value & !desc.mask, 0, "{}", desc.mnemonic);
        assert!(desc.matches(desc.value), "{}", desc.mnemonic);
    }
}

#[test]
fn pseudo_flags_belong_to_the_layout() {
    for desc in OPCODES {
        for flag in desc.pseudo {
            assert_eq!(flag.layout(), desc.layout, "{} carries {flag:?}", desc.mnemonic);
        }
    }
}

#[test]
fn no_32_bit_shift_immediates() {
    // slli with shamt[5] set is the RV64 encoding; there is no separate RV32 entry.
    let slli: Vec<_> = OPCODES.iter().filter(|d| d.mnemonic == "slli").collect();
    assert_eq!(slli.len(), 1);
    assert_eq!(slli[0].layout, Layout::IShift);
}

#[rstest]
#[case("addi", 0b0001)]
#[case("addi", 0b0010)]
#[case("blt", 0b0100)]
#[case("bge", 0b0001)]
fn historic_flag_bits(#[case] mnemonic: &str, #[case] bit: u32) {
    let desc = OPCODES.iter().find(|d| d.mnemonic == mnemonic).unwrap();
    assert_ne!(desc.pseudo_bits() & bit, 0);
}

#[test]
fn descriptors_pairwise_disjoint() {
    // Two (mask, value) pairs overlap iff they agree on their common mask bits.
    for (i, a) in OPCODES.iter().enumerate() {
        for b in &OPCODES[i + 1..] {
            let common = a.mask & b.mask;
            assert_ne!(
                a.value & common,
                b.value & common,
                "{} overlaps {}",
                a.mnemonic,
                b.mnemonic
            );
        }
    }
}

#[test]
fn sampled_words_match_at_most_once() {
    let mut word: u32 = 0;
    for _ in 0..1_000_000 {
        assert!(matching(word) <= 1, "{word:#010x}");
        word = word.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    }
}

#[test]
#[ignore = "exhaustive 2^32 sweep"]
fn every_word_matches_at_most_once() {
    let overlaps = (0..=u32::MAX)
        .into_par_iter()
        .filter(|&word| matching(word) > 1)
        .count();
    assert_eq!(overlaps, 0);
}
