//! Pseudo-instruction substitution.
//!
//! Each layout that can take a substitution has an ordered list of rules.
//! A rule fires when the descriptor carries its flag and the decoded
//! operands satisfy its condition; the first rule that fires wins. JALR and
//! JAL are substituted on operand values alone, independent of flags.
//!
//! Callers only consult these functions when pseudo-instructions are enabled.

use crate::isa::abi::{REG_RA, REG_ZERO};
use crate::isa::disasm::Printer;
use crate::isa::table::{OpcodeDescriptor, PseudoFlag};

/// Operands of an R-type word.
#[derive(Clone, Copy, Debug)]
struct ROperands {
    rd: usize,
    rs1: usize,
    rs2: usize,
}

/// Operands of an I-type arithmetic word.
#[derive(Clone, Copy, Debug)]
struct IOperands {
    rd: usize,
    rs1: usize,
    imm: i32,
}

/// Operands of a branch word.
#[derive(Clone, Copy, Debug)]
struct BOperands {
    rs1: usize,
    rs2: usize,
    imm: i32,
}

/// A substitution: the flag that enables it, and the renderer that returns
/// `Some` when the operands qualify.
type Rule<T> = (PseudoFlag, fn(&OpcodeDescriptor, T, Printer) -> Option<String>);

const I_RULES: [Rule<IOperands>; 5] = [
    (PseudoFlag::Nop, |_, o, _| {
        (o.rd == REG_ZERO && o.rs1 == REG_ZERO && o.imm == 0).then(|| "nop".to_string())
    }),
    (PseudoFlag::Mv, |_, o, p| {
        (o.imm == 0).then(|| p.r_r("mv", o.rd, o.rs1))
    }),
    (PseudoFlag::Not, |_, o, p| {
        (o.imm == -1).then(|| p.r_r("not", o.rd, o.rs1))
    }),
    (PseudoFlag::SextW, |_, o, p| {
        (o.imm == 0).then(|| p.r_r("sext.w", o.rd, o.rs1))
    }),
    (PseudoFlag::Seqz, |_, o, p| {
        (o.imm == 1).then(|| p.r_r("seqz", o.rd, o.rs1))
    }),
];

const R_RULES: [Rule<ROperands>; 5] = [
    (PseudoFlag::Neg, |_, o, p| {
        (o.rs1 == REG_ZERO).then(|| p.r_r("neg", o.rd, o.rs2))
    }),
    (PseudoFlag::Negw, |_, o, p| {
        (o.rs1 == REG_ZERO).then(|| p.r_r("negw", o.rd, o.rs2))
    }),
    (PseudoFlag::Snez, |_, o, p| {
        (o.rs1 == REG_ZERO).then(|| p.r_r("snez", o.rd, o.rs2))
    }),
    (PseudoFlag::Sltz, |_, o, p| {
        (o.rs2 == REG_ZERO).then(|| p.r_r("sltz", o.rd, o.rs1))
    }),
    (PseudoFlag::Sgtz, |_, o, p| {
        (o.rs1 == REG_ZERO).then(|| p.r_r("sgtz", o.rd, o.rs2))
    }),
];

const B_RULES: [Rule<BOperands>; 3] = [
    (PseudoFlag::Blez, |_, o, p| {
        (o.rs1 == REG_ZERO).then(|| p.r_i("blez", o.rs2, o.imm))
    }),
    (PseudoFlag::AnyZ, |desc, o, p| {
        (o.rs2 == REG_ZERO).then(|| p.r_i(&format!("{}z", desc.mnemonic), o.rs1, o.imm))
    }),
    (PseudoFlag::Bgtz, |_, o, p| {
        (o.rs1 == REG_ZERO).then(|| p.r_i("bgtz", o.rs2, o.imm))
    }),
];

/// Applies the first rule in `rules` that `desc` carries and `ops` satisfies.
fn first_match<T: Copy>(
    rules: &[Rule<T>],
    desc: &OpcodeDescriptor,
    ops: T,
    p: Printer,
) -> Option<String> {
    rules
        .iter()
        .filter(|(flag, _)| desc.has_pseudo(*flag))
        .find_map(|(_, render)| render(desc, ops, p))
}

/// `nop`, `mv`, `not`, `sext.w`, `seqz`.
pub(crate) fn layout_i(
    desc: &OpcodeDescriptor,
    rd: usize,
    rs1: usize,
    imm: i32,
    p: Printer,
) -> Option<String> {
    first_match(&I_RULES, desc, IOperands { rd, rs1, imm }, p)
}

/// `neg`, `negw`, `snez`, `sltz`, `sgtz`.
pub(crate) fn layout_r(
    desc: &OpcodeDescriptor,
    rd: usize,
    rs1: usize,
    rs2: usize,
    p: Printer,
) -> Option<String> {
    first_match(&R_RULES, desc, ROperands { rd, rs1, rs2 }, p)
}

/// `blez`, `b<cc>z`, `bgtz`.
pub(crate) fn layout_b(
    desc: &OpcodeDescriptor,
    rs1: usize,
    rs2: usize,
    imm: i32,
    p: Printer,
) -> Option<String> {
    first_match(&B_RULES, desc, BOperands { rs1, rs2, imm }, p)
}

/// JALR forms, most specific first.
pub(crate) fn layout_i_jump(
    desc: &OpcodeDescriptor,
    rd: usize,
    rs1: usize,
    imm: i32,
    p: Printer,
) -> Option<String> {
    let mn = desc.mnemonic;
    let text = match (rd, imm) {
        (REG_ZERO, 0) if rs1 == REG_RA => "ret".to_string(),
        (REG_ZERO, 0) => p.r("jr", rs1),
        (REG_ZERO, _) => p.ir("jr", imm, rs1),
        (REG_RA, 0) => p.r(mn, rs1),
        (REG_RA, _) => p.ir(mn, imm, rs1),
        (_, 0) => p.r_r(mn, rd, rs1),
        _ => return None,
    };
    Some(text)
}

/// `j` and `jal` without a link register operand.
pub(crate) fn layout_j(rd: usize, imm: i32, p: Printer) -> Option<String> {
    match rd {
        REG_ZERO => Some(p.i("j", imm)),
        REG_RA => Some(p.i("jal", imm)),
        _ => None,
    }
}
