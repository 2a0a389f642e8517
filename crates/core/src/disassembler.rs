//! Disassembler: owns a configuration and turns words into text.
//!
//! Unlike a process-wide option block, every [`Disassembler`] carries its own
//! [`DisasmConfig`]. Two instances never observe each other's options, and
//! a shared `&Disassembler` may decode from any number of threads.

use crate::common::error::DisasmError;
use crate::config::DisasmConfig;
use crate::isa::decode::OpcodeIndex;
use crate::isa::disasm::{UNKNOWN, format_instruction};

/// Width in bytes of one instruction word.
const WORD_BYTES: usize = 4;

/// Decode-and-format engine for RV32I / RV64I words.
///
/// # Examples
///
/// ```
/// use rvdisass_core::Disassembler;
///
/// let mut dis = Disassembler::default();
/// assert_eq!(dis.disassemble(0x0000_8067), "jalr    zero, 0(ra)");
///
/// let _ = dis.set_option("UsePseudoInstructions", true);
/// assert_eq!(dis.disassemble(0x0000_8067), "ret");
/// ```
#[derive(Clone, Debug)]
pub struct Disassembler {
    config: DisasmConfig,
    index: &'static OpcodeIndex,
}

impl Default for Disassembler {
    fn default() -> Self {
        Self::new(DisasmConfig::default())
    }
}

impl Disassembler {
    /// Creates a disassembler with the given options.
    pub fn new(config: DisasmConfig) -> Self {
        Self {
            config,
            index: OpcodeIndex::shared(),
        }
    }

    /// Current options.
    #[inline]
    pub const fn config(&self) -> &DisasmConfig {
        &self.config
    }

    /// Mutable access to the options.
    #[inline]
    pub const fn config_mut(&mut self) -> &mut DisasmConfig {
        &mut self.config
    }

    /// Sets a named option. Returns `true` if `name` was recognised.
    pub fn set_option(&mut self, name: &str, enabled: bool) -> bool {
        self.config.set_option(name, enabled)
    }

    /// Restores the default options.
    pub fn reset_options(&mut self) {
        tracing::debug!("options reset to defaults");
        self.config = DisasmConfig::default();
    }

    /// Renders one instruction word.
    ///
    /// Never fails: encodings outside the supported instruction set render
    /// as `"unknown"`.
    pub fn disassemble(&self, word: u32) -> String {
        match self.index.lookup(word) {
            Some(desc) => {
                tracing::trace!(
                    word = format_args!("{word:#010x}"),
                    mnemonic = desc.mnemonic,
                    "decoded"
                );
                format_instruction(desc, word, &self.config)
            }
            None => {
                tracing::trace!(word = format_args!("{word:#010x}"), "no matching opcode");
                UNKNOWN.to_string()
            }
        }
    }

    /// Renders a buffer of little-endian instruction words, one line per word.
    ///
    /// # Errors
    ///
    /// Returns [`DisasmError::TruncatedWord`] if `bytes` does not split into
    /// whole 32-bit words. No partial output is returned.
    pub fn disassemble_bytes(&self, bytes: &[u8]) -> Result<Vec<String>, DisasmError> {
        let chunks = bytes.chunks_exact(WORD_BYTES);
        let rest = chunks.remainder();
        if !rest.is_empty() {
            return Err(DisasmError::TruncatedWord {
                offset: bytes.len() - rest.len(),
                len: rest.len(),
            });
        }

        Ok(chunks
            .map(|chunk| {
                let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                self.disassemble(word)
            })
            .collect())
    }
}
