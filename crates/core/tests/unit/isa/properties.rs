//! Whole-domain Properties.
//!
//! Decoding is total and deterministic, and the register naming policy only
//! ever changes register operands. Random words cover these by default; the
//! exhaustive sweeps are `#[ignore]`d.

use crate::common::harness;
use proptest::prelude::*;
use rayon::prelude::*;
use rvdisass_core::isa::abi::{ABI_NAMES, NUMERIC_NAMES};
use rvdisass_core::isa::disasm::{MNEMONIC_WIDTH, UNKNOWN};
use rvdisass_core::{DisasmConfig, Disassembler};

/// Rewrites every ABI register token in `text` as its numeric name.
fn renumber(text: &str) -> String {
    let Some((mnemonic, operands)) = text.split_once(' ') else {
        return text.to_string();
    };
    let operands: String = operands
        .split_inclusive(|c: char| !c.is_ascii_alphanumeric())
        .map(|piece| {
            let token = piece.trim_end_matches(|c: char| !c.is_ascii_alphanumeric());
            let rest = &piece[token.len()..];
            ABI_NAMES
                .iter()
                .position(|&name| name == token)
                .map_or_else(|| piece.to_string(), |idx| format!("{}{rest}", NUMERIC_NAMES[idx]))
        })
        .collect();
    format!("{mnemonic} {operands}")
}

fn check_shape(text: &str) -> Result<(), TestCaseError> {
    prop_assert!(!text.is_empty());
    if let Some((mnemonic, operands)) = text.split_once(' ') {
        // Padded column, or one of the fixed FENCE.TSO forms.
        let mnemonic = mnemonic.trim_end();
        prop_assert!(mnemonic.len() <= MNEMONIC_WIDTH || mnemonic == "fence.tso");
        prop_assert!(!operands.trim().is_empty());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4096))]

    #[test]
    fn total_and_well_formed(word in any::<u32>(), pseudo in any::<bool>(), numeric in any::<bool>()) {
        let dis = harness::disassembler(pseudo, numeric);
        check_shape(&dis.disassemble(word))?;
    }

    #[test]
    fn deterministic(word in any::<u32>()) {
        let dis = harness::pseudo();
        prop_assert_eq!(dis.disassemble(word), dis.disassemble(word));
    }

    #[test]
    fn naming_changes_only_registers(word in any::<u32>(), pseudo in any::<bool>()) {
        let abi = harness::disassembler(pseudo, false).disassemble(word);
        let numeric = harness::disassembler(pseudo, true).disassemble(word);
        prop_assert_eq!(renumber(&abi), numeric);
    }

    #[test]
    fn unknown_independent_of_options(word in any::<u32>()) {
        let outputs: Vec<_> = [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(|(p, n)| harness::disassembler(p, n).disassemble(word) == UNKNOWN)
            .collect();
        // Reserved FENCE forms are unknown whatever the options.
        prop_assert!(outputs.iter().all(|&u| u == outputs[0]));
    }
}

#[test]
#[ignore = "exhaustive 2^32 sweep"]
fn every_word_renders() {
    for config in [
        DisasmConfig::default(),
        DisasmConfig {
            pseudo_instructions: true,
            no_abi_names: false,
        },
    ] {
        let dis = Disassembler::new(config);
        let empty = (0..=u32::MAX)
            .into_par_iter()
            .filter(|&word| dis.disassemble(word).is_empty())
            .count();
        assert_eq!(empty, 0);
    }
}
