//! Disassembly configuration.
//!
//! This module defines the options that change how a word is rendered. It provides:
//! 1. **Defaults:** Canonical mnemonics and ABI register names.
//! 2. **Named options:** The string-keyed setter used by foreign callers.
//! 3. **Loading:** JSON deserialization with per-field defaults.
//!
//! A configuration is a plain value owned by each [`Disassembler`](crate::Disassembler);
//! there is no process-wide state in this crate.

use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::isa::abi::RegisterNaming;

/// Default option values.
mod defaults {
    /// Canonical mnemonics unless pseudo-instructions are requested.
    pub const PSEUDO_INSTRUCTIONS: bool = false;

    /// ABI register names unless numeric names are requested.
    pub const NO_ABI_NAMES: bool = false;
}

/// Option name enabling pseudo-instruction substitution.
pub const OPT_USE_PSEUDO_INSTRUCTIONS: &str = "UsePseudoInstructions";

/// Older spellings of [`OPT_USE_PSEUDO_INSTRUCTIONS`] still sent by existing callers.
pub const OPT_USE_PSEUDO_ALIASES: [&str; 2] = ["UsePseudoInsts", "UsePsuedoInsts"];

/// Option name forcing numeric register names.
pub const OPT_NO_ABI_NAMES: &str = "NoAbiNames";

/// Rendering options for the disassembler.
///
/// # Examples
///
/// ```
/// use rvdisass_core::config::DisasmConfig;
///
/// let json = r#"{ "pseudo_instructions": true }"#;
/// let config = DisasmConfig::from_json(json).unwrap();
/// assert!(config.pseudo_instructions);
/// assert!(!config.no_abi_names);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DisasmConfig {
    /// Emit known pseudo-instructions (`nop`, `mv`, `ret`, ...) instead of
    /// the canonical encodings.
    #[serde(default = "DisasmConfig::default_pseudo_instructions")]
    pub pseudo_instructions: bool,

    /// Always use numeric register names (`x0`..`x31`), including inside
    /// pseudo-instructions.
    #[serde(default = "DisasmConfig::default_no_abi_names")]
    pub no_abi_names: bool,
}

impl DisasmConfig {
    const fn default_pseudo_instructions() -> bool {
        defaults::PSEUDO_INSTRUCTIONS
    }

    const fn default_no_abi_names() -> bool {
        defaults::NO_ABI_NAMES
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if `json` is not a valid configuration object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets a named boolean option.
    ///
    /// Returns `true` if `name` was recognised. Unrecognised names are
    /// ignored so that callers built against newer option sets keep working.
    pub fn set_option(&mut self, name: &str, enabled: bool) -> bool {
        if name == OPT_USE_PSEUDO_INSTRUCTIONS || OPT_USE_PSEUDO_ALIASES.contains(&name) {
            self.pseudo_instructions = enabled;
        } else if name == OPT_NO_ABI_NAMES {
            self.no_abi_names = enabled;
        } else {
            tracing::debug!(option = name, enabled, "ignoring unrecognised option");
            return false;
        }
        tracing::debug!(option = name, enabled, "option set");
        true
    }

    /// Register naming policy selected by [`no_abi_names`](Self::no_abi_names).
    #[inline]
    pub const fn register_naming(&self) -> RegisterNaming {
        if self.no_abi_names {
            RegisterNaming::Numeric
        } else {
            RegisterNaming::Abi
        }
    }
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            pseudo_instructions: defaults::PSEUDO_INSTRUCTIONS,
            no_abi_names: defaults::NO_ABI_NAMES,
        }
    }
}
