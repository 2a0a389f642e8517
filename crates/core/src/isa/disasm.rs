//! Instruction Disassembler for RISC-V RV32I / RV64I.
//!
//! Converts a 32-bit instruction encoding into the text a reference
//! toolchain prints for it: the mnemonic left-justified in a 7-character
//! column, one space, then comma-separated operands with immediates in
//! signed decimal.
//!
//! # Supported Instructions
//!
//! - RV32I base integer (without the 5-bit shift-immediates)
//! - RV64I base integer
//! - FENCE and FENCE.TSO
//!
//! Anything else, including reserved FENCE forms, renders as `"unknown"`.
//!
//! # Usage
//!
//! ```
//! use rvdisass_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi    a0, zero, 10");
//! ```

use crate::config::DisasmConfig;
use crate::isa::abi::RegisterNaming;
use crate::isa::decode::OpcodeIndex;
use crate::isa::instruction::InstructionBits;
use crate::isa::pseudo;
use crate::isa::rv64i::opcodes as op;
use crate::isa::table::{Layout, OpcodeDescriptor};

/// Text produced for any word that is not a supported instruction.
pub const UNKNOWN: &str = "unknown";

/// Width of the mnemonic column.
pub const MNEMONIC_WIDTH: usize = 7;

/// FENCE ordering-set letters, most significant bit first.
const FENCE_SET_NAMES: [char; 4] = ['i', 'o', 'r', 'w'];

/// Disassembles a 32-bit RISC-V instruction using the default options.
///
/// Returns a string like `"add     a0, a1, a2"` or `"unknown"` for
/// unrecognised encodings.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    disassemble_with(inst, &DisasmConfig::default())
}

/// Disassembles a 32-bit RISC-V instruction under `config`.
pub fn disassemble_with(inst: u32, config: &DisasmConfig) -> String {
    OpcodeIndex::shared()
        .lookup(inst)
        .map_or_else(|| UNKNOWN.to_string(), |desc| format_instruction(desc, inst, config))
}

/// Renders `inst`, already matched to `desc`, with the formatter for its layout.
pub fn format_instruction(desc: &OpcodeDescriptor, inst: u32, config: &DisasmConfig) -> String {
    let p = Printer::new(config.register_naming());
    let pseudo = config.pseudo_instructions;

    match desc.layout {
        Layout::R => disasm_r(desc, inst, pseudo, p),
        Layout::I => disasm_i(desc, inst, pseudo, p),
        Layout::IShift => disasm_i_shift(desc, inst, p),
        Layout::IJump => disasm_i_jump(desc, inst, pseudo, p),
        Layout::ILoad => disasm_i_load(desc, inst, p),
        Layout::IFence => disasm_i_fence(desc, inst, pseudo),
        Layout::S => disasm_s(desc, inst, p),
        Layout::B => disasm_b(desc, inst, pseudo, p),
        Layout::U => disasm_u(desc, inst, p),
        Layout::J => disasm_j(desc, inst, pseudo, p),
        Layout::None => desc.mnemonic.to_string(),
    }
}

// ── Operand rendering ─────────────────────────────────────

/// Renders mnemonics and operands under one register naming policy.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Printer {
    naming: RegisterNaming,
}

impl Printer {
    pub(crate) const fn new(naming: RegisterNaming) -> Self {
        Self { naming }
    }

    #[inline]
    fn reg(self, idx: usize) -> &'static str {
        self.naming.name(idx)
    }

    /// `mn r1`
    pub(crate) fn r(self, mn: &str, r1: usize) -> String {
        format!("{mn:<MNEMONIC_WIDTH$} {}", self.reg(r1))
    }

    /// `mn imm`
    pub(crate) fn i(self, mn: &str, imm: i32) -> String {
        format!("{mn:<MNEMONIC_WIDTH$} {imm}")
    }

    /// `mn r1, imm`
    pub(crate) fn r_i(self, mn: &str, r1: usize, imm: i32) -> String {
        format!("{mn:<MNEMONIC_WIDTH$} {}, {imm}", self.reg(r1))
    }

    /// `mn r1, r2`
    pub(crate) fn r_r(self, mn: &str, r1: usize, r2: usize) -> String {
        format!("{mn:<MNEMONIC_WIDTH$} {}, {}", self.reg(r1), self.reg(r2))
    }

    /// `mn r1, r2, imm`
    pub(crate) fn r_r_i(self, mn: &str, r1: usize, r2: usize, imm: i32) -> String {
        format!(
            "{mn:<MNEMONIC_WIDTH$} {}, {}, {imm}",
            self.reg(r1),
            self.reg(r2)
        )
    }

    /// `mn r1, r2, r3`
    pub(crate) fn r_r_r(self, mn: &str, r1: usize, r2: usize, r3: usize) -> String {
        format!(
            "{mn:<MNEMONIC_WIDTH$} {}, {}, {}",
            self.reg(r1),
            self.reg(r2),
            self.reg(r3)
        )
    }

    /// `mn imm(r1)`
    pub(crate) fn ir(self, mn: &str, imm: i32, r1: usize) -> String {
        format!("{mn:<MNEMONIC_WIDTH$} {imm}({})", self.reg(r1))
    }

    /// `mn r1, imm(r2)`
    pub(crate) fn r_ir(self, mn: &str, r1: usize, imm: i32, r2: usize) -> String {
        format!(
            "{mn:<MNEMONIC_WIDTH$} {}, {imm}({})",
            self.reg(r1),
            self.reg(r2)
        )
    }
}

// ── Per-layout formatters ─────────────────────────────────

/// R-type register-register: `rd, rs1, rs2`.
fn disasm_r(desc: &OpcodeDescriptor, inst: u32, pseudo: bool, p: Printer) -> String {
    let (rd, rs1, rs2) = (inst.rd(), inst.rs1(), inst.rs2());

    if pseudo && !desc.pseudo.is_empty() {
        if let Some(text) = pseudo::layout_r(desc, rd, rs1, rs2, p) {
            return text;
        }
    }
    p.r_r_r(desc.mnemonic, rd, rs1, rs2)
}

/// I-type immediate arithmetic: `rd, rs1, imm`.
fn disasm_i(desc: &OpcodeDescriptor, inst: u32, pseudo: bool, p: Printer) -> String {
    let (rd, rs1, imm) = (inst.rd(), inst.rs1(), inst.imm_i());

    if pseudo && !desc.pseudo.is_empty() {
        if let Some(text) = pseudo::layout_i(desc, rd, rs1, imm, p) {
            return text;
        }
    }
    p.r_r_i(desc.mnemonic, rd, rs1, imm)
}

/// RV64 shift-immediates: `rd, rs1, shamt`. The shift amount is unsigned.
fn disasm_i_shift(desc: &OpcodeDescriptor, inst: u32, p: Printer) -> String {
    p.r_r_i(desc.mnemonic, inst.rd(), inst.rs1(), inst.shamt() as i32)
}

/// JALR: `rd, imm(rs1)`.
fn disasm_i_jump(desc: &OpcodeDescriptor, inst: u32, pseudo: bool, p: Printer) -> String {
    let (rd, rs1, imm) = (inst.rd(), inst.rs1(), inst.imm_i());

    if pseudo {
        if let Some(text) = pseudo::layout_i_jump(desc, rd, rs1, imm, p) {
            return text;
        }
    }
    p.r_ir(desc.mnemonic, rd, imm, rs1)
}

/// Loads: `rd, imm(rs1)`.
fn disasm_i_load(desc: &OpcodeDescriptor, inst: u32, p: Printer) -> String {
    p.r_ir(desc.mnemonic, inst.rd(), inst.imm_i(), inst.rs1())
}

/// FENCE: `pred, succ`, or one of the fixed FENCE forms.
fn disasm_i_fence(desc: &OpcodeDescriptor, inst: u32, pseudo: bool) -> String {
    if pseudo && inst == op::FENCE_FULL {
        return "fence".to_string();
    }
    if inst == op::FENCE_TSO {
        let text = if pseudo { "fence.tso" } else { "fence.tso rw, rw" };
        return text.to_string();
    }

    // Nonzero rd/rs1 and any other FM value are reserved.
    if inst.rd() != 0 || inst.rs1() != 0 || inst.fence_fm() != 0 {
        return UNKNOWN.to_string();
    }

    format!(
        "{:<MNEMONIC_WIDTH$} {}, {}",
        desc.mnemonic,
        fence_set(inst.fence_pred()),
        fence_set(inst.fence_succ())
    )
}

/// Renders a 4-bit FENCE ordering set as its `iorw` letters.
///
/// An empty set renders as `"unknown"`.
fn fence_set(bits: u32) -> String {
    let set: String = FENCE_SET_NAMES
        .iter()
        .enumerate()
        .filter(|&(i, _)| bits & (1 << (3 - i)) != 0)
        .map(|(_, &c)| c)
        .collect();

    if set.is_empty() {
        UNKNOWN.to_string()
    } else {
        set
    }
}

/// Stores: `rs2, imm(rs1)`.
fn disasm_s(desc: &OpcodeDescriptor, inst: u32, p: Printer) -> String {
    p.r_ir(desc.mnemonic, inst.rs2(), inst.imm_s(), inst.rs1())
}

/// Branches: `rs1, rs2, offset`.
fn disasm_b(desc: &OpcodeDescriptor, inst: u32, pseudo: bool, p: Printer) -> String {
    let (rs1, rs2, imm) = (inst.rs1(), inst.rs2(), inst.imm_b());

    if pseudo && !desc.pseudo.is_empty() {
        if let Some(text) = pseudo::layout_b(desc, rs1, rs2, imm, p) {
            return text;
        }
    }
    p.r_r_i(desc.mnemonic, rs1, rs2, imm)
}

/// LUI / AUIPC: `rd, imm20`, the immediate printed unshifted.
fn disasm_u(desc: &OpcodeDescriptor, inst: u32, p: Printer) -> String {
    p.r_i(desc.mnemonic, inst.rd(), inst.imm_u())
}

/// JAL: `rd, offset`.
fn disasm_j(desc: &OpcodeDescriptor, inst: u32, pseudo: bool, p: Printer) -> String {
    let (rd, imm) = (inst.rd(), inst.imm_j());

    if pseudo {
        if let Some(text) = pseudo::layout_j(rd, imm, p) {
            return text;
        }
    }
    p.r_i(desc.mnemonic, rd, imm)
}
