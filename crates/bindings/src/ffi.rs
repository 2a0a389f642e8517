//! C ABI adapter.
//!
//! Foreign callers see a single process-wide disassembler, configured by
//! name through [`rv_set_option`]. Two string ownership conventions are
//! supported:
//!
//! * [`StringLifetime::CallerOwned`]: every string returned by [`rv_disass`]
//!   must be released exactly once with [`rv_free`].
//! * [`StringLifetime::RecycledOnNextCall`]: the adapter keeps the most
//!   recent string and drops it on the next [`rv_disass`] call. The caller
//!   must not release it. Selected with the `SimDoesCopy` option, for
//!   simulators that copy the string immediately.
//!
//! The `SimDoesFree` option turns [`rv_free`] into a no-op for hosts that
//! release strings themselves.
//!
//! The context sits behind a mutex, so calls from several threads are
//! serialised. Under `RecycledOnNextCall` a string returned to one thread
//! is still invalidated by another thread's next call.

use std::ffi::{CStr, CString, c_char};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use rvdisass_core::Disassembler;
use rvdisass_core::isa::table::{MAX_MNEMONIC_LEN, OPCODES, opcode_count};

/// Option selecting [`StringLifetime::RecycledOnNextCall`] when enabled.
pub const OPT_SIM_DOES_COPY: &str = "SimDoesCopy";

/// Option making [`rv_free`] a no-op when enabled.
pub const OPT_SIM_DOES_FREE: &str = "SimDoesFree";

/// Ownership of the strings returned by [`rv_disass`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringLifetime {
    /// Released by the caller through [`rv_free`].
    CallerOwned,
    /// Owned by the adapter and dropped on the next [`rv_disass`] call.
    RecycledOnNextCall,
}

impl StringLifetime {
    /// Mode at start-up and after [`rv_reset_options`].
    pub const BUILD_DEFAULT: Self = if cfg!(feature = "recycled-strings") {
        Self::RecycledOnNextCall
    } else {
        Self::CallerOwned
    };
}

/// One opcode table entry in C layout.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RvOpInfo {
    /// NUL-terminated mnemonic.
    pub name: [c_char; MAX_MNEMONIC_LEN + 1],
    /// Required value of the masked bits.
    pub search_val: u32,
    /// Bits that identify the instruction.
    pub search_mask: u32,
    /// Layout tag, see `Layout::tag`.
    pub layout: u32,
    /// Pseudo-instruction flags as per-layout bits.
    pub pseudo_flags: u32,
}

#[derive(Debug)]
struct Context {
    engine: Disassembler,
    lifetime: StringLifetime,
    sim_does_free: bool,
    last: Option<CString>,
}

impl Context {
    fn new() -> Self {
        Self {
            engine: Disassembler::default(),
            lifetime: StringLifetime::BUILD_DEFAULT,
            sim_does_free: false,
            last: None,
        }
    }

    fn set_option(&mut self, name: &str, enabled: bool) {
        match name {
            OPT_SIM_DOES_COPY => {
                self.lifetime = if enabled {
                    StringLifetime::RecycledOnNextCall
                } else {
                    StringLifetime::CallerOwned
                };
                tracing::debug!(lifetime = ?self.lifetime, "string lifetime set");
            }
            OPT_SIM_DOES_FREE => {
                self.sim_does_free = enabled;
                tracing::debug!(enabled, "SimDoesFree set");
            }
            _ => {
                let _ = self.engine.set_option(name, enabled);
            }
        }
    }

    fn reset(&mut self) {
        self.engine.reset_options();
        self.lifetime = StringLifetime::BUILD_DEFAULT;
        self.sim_does_free = false;
    }

    /// Whether [`rv_free`] must reclaim the strings it is given.
    fn caller_frees(&self) -> bool {
        self.lifetime == StringLifetime::CallerOwned && !self.sim_does_free
    }
}

static CONTEXT: LazyLock<Mutex<Context>> = LazyLock::new(|| Mutex::new(Context::new()));

/// Locks the context. A panic while it was held cannot leave it invalid,
/// so poisoning is ignored.
fn context() -> MutexGuard<'static, Context> {
    CONTEXT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Disassembles one instruction word.
///
/// The returned string is NUL-terminated and never null. Who releases it
/// depends on the current [`StringLifetime`].
#[unsafe(no_mangle)]
pub extern "C" fn rv_disass(inst: u32) -> *const c_char {
    let mut ctx = context();
    // Disassembly never contains NUL bytes.
    let text = CString::new(ctx.engine.disassemble(inst)).unwrap_or_default();

    match ctx.lifetime {
        StringLifetime::CallerOwned => text.into_raw().cast_const(),
        StringLifetime::RecycledOnNextCall => {
            let ptr = text.as_ptr();
            ctx.last = Some(text);
            ptr
        }
    }
}

/// Releases a string returned by [`rv_disass`].
///
/// A no-op for null pointers, under [`StringLifetime::RecycledOnNextCall`],
/// and when `SimDoesFree` is enabled.
///
/// # Safety
///
/// When the call is not a no-op, `text` must come from [`rv_disass`] under
/// [`StringLifetime::CallerOwned`] and must not have been released before.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rv_free(text: *mut c_char) {
    if text.is_null() || !context().caller_frees() {
        return;
    }
    // SAFETY: the caller guarantees `text` came from `CString::into_raw`.
    drop(unsafe { CString::from_raw(text) });
}

/// Sets a named option.
///
/// Recognised names are `UsePseudoInstructions` (also spelled
/// `UsePseudoInsts` / `UsePsuedoInsts`), `NoAbiNames`, `SimDoesCopy` and
/// `SimDoesFree`. Null, non-UTF-8 and unrecognised names are ignored.
///
/// # Safety
///
/// `name` must be null or point to a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rv_set_option(name: *const c_char, enabled: bool) {
    if name.is_null() {
        return;
    }
    // SAFETY: non-null and NUL-terminated per the contract above.
    let name = unsafe { CStr::from_ptr(name) };
    match name.to_str() {
        Ok(name) => context().set_option(name, enabled),
        Err(_) => tracing::debug!(?name, "ignoring non-UTF-8 option name"),
    }
}

/// Restores the default options, including the build-time string lifetime.
#[unsafe(no_mangle)]
pub extern "C" fn rv_reset_options() {
    context().reset();
}

/// Number of entries in the opcode table.
#[unsafe(no_mangle)]
pub extern "C" fn rv_opcode_count() -> u32 {
    opcode_count() as u32
}

/// Copies opcode table entry `index` into `out`.
///
/// Returns `false`, leaving `out` untouched, if `index` is out of range or
/// `out` is null.
///
/// # Safety
///
/// `out` must be null or valid for writing one [`RvOpInfo`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rv_opcode_info(index: u32, out: *mut RvOpInfo) -> bool {
    let Some(desc) = OPCODES.get(index as usize) else {
        return false;
    };
    if out.is_null() {
        return false;
    }

    let mut info = RvOpInfo {
        search_val: desc.value,
        search_mask: desc.mask,
        layout: desc.layout.tag(),
        pseudo_flags: desc.pseudo_bits(),
        ..RvOpInfo::default()
    };
    for (dst, src) in info.name.iter_mut().zip(desc.mnemonic.bytes()) {
        *dst = src as c_char;
    }

    // SAFETY: non-null and writable per the contract above.
    unsafe { out.write(info) };
    true
}
