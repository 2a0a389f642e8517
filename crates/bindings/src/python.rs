//! Python bindings.
//!
//! Exposes a `Disassembler` class carrying its own options, plus a
//! module-level `disassemble(word, pseudo=False, no_abi_names=False)` for
//! one-off calls.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rvdisass_core::{DisasmConfig, Disassembler};

/// Python-exposed disassembler: wraps the core `Disassembler` and its options.
#[pyclass(name = "Disassembler")]
#[derive(Debug, Default)]
pub struct PyDisassembler {
    inner: Disassembler,
}

#[pymethods]
impl PyDisassembler {
    /// Creates a disassembler.
    ///
    /// # Arguments
    ///
    /// * `pseudo` - Emit pseudo-instructions (`nop`, `mv`, `ret`, ...).
    /// * `no_abi_names` - Use numeric register names (`x0`..`x31`).
    #[new]
    #[pyo3(signature = (pseudo=false, no_abi_names=false))]
    fn new(pseudo: bool, no_abi_names: bool) -> Self {
        Self {
            inner: Disassembler::new(DisasmConfig {
                pseudo_instructions: pseudo,
                no_abi_names,
            }),
        }
    }

    /// Disassembles one 32-bit instruction word.
    fn disassemble(&self, word: u32) -> String {
        self.inner.disassemble(word)
    }

    /// Disassembles little-endian instruction words from a byte string.
    ///
    /// Raises `ValueError` if the length is not a multiple of four.
    fn disassemble_bytes(&self, data: &[u8]) -> PyResult<Vec<String>> {
        self.inner
            .disassemble_bytes(data)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Sets a named option; returns whether the name was recognised.
    fn set_option(&mut self, name: &str, enabled: bool) -> bool {
        self.inner.set_option(name, enabled)
    }

    /// Restores the default options.
    fn reset_options(&mut self) {
        self.inner.reset_options();
    }

    #[getter]
    fn pseudo_instructions(&self) -> bool {
        self.inner.config().pseudo_instructions
    }

    #[setter]
    fn set_pseudo_instructions(&mut self, enabled: bool) {
        self.inner.config_mut().pseudo_instructions = enabled;
    }

    #[getter]
    fn no_abi_names(&self) -> bool {
        self.inner.config().no_abi_names
    }

    #[setter]
    fn set_no_abi_names(&mut self, enabled: bool) {
        self.inner.config_mut().no_abi_names = enabled;
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Disassembler(pseudo={}, no_abi_names={})",
            if config.pseudo_instructions { "True" } else { "False" },
            if config.no_abi_names { "True" } else { "False" },
        )
    }
}

/// Disassembles one 32-bit instruction word.
#[pyfunction]
#[pyo3(signature = (word, pseudo=false, no_abi_names=false))]
pub fn disassemble(word: u32, pseudo: bool, no_abi_names: bool) -> String {
    Disassembler::new(DisasmConfig {
        pseudo_instructions: pseudo,
        no_abi_names,
    })
    .disassemble(word)
}

/// Returns the package version string.
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Installs stderr logging filtered by `RVDISASS_LOG`; returns `False` if
/// logging was already set up.
#[pyfunction]
pub fn init_logging() -> bool {
    crate::logging::init_logging()
}

/// Registers the disassembler classes and functions onto the given Python module.
///
/// # Errors
///
/// Returns a `PyErr` if registration fails.
pub fn register_disassembler_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDisassembler>()?;
    m.add_function(wrap_pyfunction!(disassemble, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}

#[pymodule]
fn rvdisass(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_disassembler_module(m)
}
