//! The RV32I / RV64I opcode table.
//!
//! Each supported mnemonic has exactly one [`OpcodeDescriptor`]: a
//! `(mask, value)` pair that identifies its encodings, the operand layout
//! used to render it, and the pseudo-instruction substitutions it may take.
//!
//! The 32-bit-only shift-immediates (`slli`/`srli`/`srai` with a 5-bit
//! shift amount) are left out; the RV64 encodings with a 6-bit shift amount
//! cover them.
//!
//! No two descriptors match the same word. This is checked exhaustively by
//! the test suite rather than at runtime.

use crate::isa::instruction::{
    FUNCT3_MASK, FUNCT3_SHIFT, FUNCT6_MASK, FUNCT6_SHIFT, FUNCT7_MASK, FUNCT7_SHIFT, MASK_ALL,
    OPCODE_MASK,
};
use crate::isa::rv64i::{funct3 as f3, funct7 as f7, opcodes as op};

/// Maximum number of visible characters in a table mnemonic.
pub const MAX_MNEMONIC_LEN: usize = 7;

/// Operand layout of an instruction, selecting its formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `rd, rs1, rs2`.
    R,
    /// `rd, rs1, imm` with a 12-bit signed immediate.
    I,
    /// `rd, rs1, shamt` with an unsigned 6-bit shift amount.
    IShift,
    /// `rd, imm(rs1)` for JALR.
    IJump,
    /// `rd, imm(rs1)` for loads.
    ILoad,
    /// `pred, succ` for FENCE.
    IFence,
    /// `rs2, imm(rs1)` for stores.
    S,
    /// `rs1, rs2, offset` for branches.
    B,
    /// `rd, imm20` for LUI / AUIPC.
    U,
    /// `rd, offset` for JAL.
    J,
    /// No operands (ECALL, EBREAK).
    None,
}

impl Layout {
    /// Numeric tag of the layout, as exported over the C ABI.
    pub const fn tag(self) -> u32 {
        match self {
            Self::R => 0,
            Self::I => 3,
            Self::IJump => 4,
            Self::ILoad => 5,
            Self::IFence => 6,
            Self::IShift => 7,
            Self::S => 8,
            Self::B => 9,
            Self::U => 10,
            Self::J => 11,
            Self::None => 12,
        }
    }
}

/// A pseudo-instruction substitution a descriptor may take.
///
/// Each flag belongs to exactly one [`Layout`]; see [`PseudoFlag::layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PseudoFlag {
    /// `addi zero, zero, 0` → `nop`.
    Nop,
    /// `addi rd, rs1, 0` → `mv rd, rs1`.
    Mv,
    /// `xori rd, rs1, -1` → `not rd, rs1`.
    Not,
    /// `addiw rd, rs1, 0` → `sext.w rd, rs1`.
    SextW,
    /// `sltiu rd, rs1, 1` → `seqz rd, rs1`.
    Seqz,
    /// `sub rd, zero, rs2` → `neg rd, rs2`.
    Neg,
    /// `subw rd, zero, rs2` → `negw rd, rs2`.
    Negw,
    /// `sltu rd, zero, rs2` → `snez rd, rs2`.
    Snez,
    /// `slt rd, rs1, zero` → `sltz rd, rs1`.
    Sltz,
    /// `slt rd, zero, rs2` → `sgtz rd, rs2`.
    Sgtz,
    /// `bge zero, rs2, off` → `blez rs2, off`.
    Blez,
    /// `blt zero, rs2, off` → `bgtz rs2, off`.
    Bgtz,
    /// `b<cc> rs1, zero, off` → `b<cc>z rs1, off`.
    AnyZ,
}

impl PseudoFlag {
    /// The only layout whose formatter evaluates this flag.
    pub const fn layout(self) -> Layout {
        match self {
            Self::Nop | Self::Mv | Self::Not | Self::SextW | Self::Seqz => Layout::I,
            Self::Neg | Self::Negw | Self::Snez | Self::Sltz | Self::Sgtz => Layout::R,
            Self::Blez | Self::Bgtz | Self::AnyZ => Layout::B,
        }
    }

    /// Bit value of the flag within its layout's flag word.
    pub const fn bit(self) -> u32 {
        match self {
            Self::Nop | Self::Neg | Self::Blez => 1 << 0,
            Self::Mv | Self::Negw | Self::Bgtz => 1 << 1,
            Self::Not | Self::Snez | Self::AnyZ => 1 << 2,
            Self::SextW | Self::Sltz => 1 << 3,
            Self::Seqz | Self::Sgtz => 1 << 4,
        }
    }
}

/// One entry of the opcode table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeDescriptor {
    /// Canonical mnemonic, at most [`MAX_MNEMONIC_LEN`] characters.
    pub mnemonic: &'static str,
    /// Bits of the word that identify the instruction.
    pub mask: u32,
    /// Required value of the masked bits.
    pub value: u32,
    /// Operand layout.
    pub layout: Layout,
    /// Pseudo-instruction substitutions available to this instruction.
    pub pseudo: &'static [PseudoFlag],
}

impl OpcodeDescriptor {
    /// Builds a descriptor, rejecting overlong mnemonics and values with
    /// bits outside the mask. In a `const` context both are compile errors.
    pub const fn new(
        mnemonic: &'static str,
        value: u32,
        mask: u32,
        layout: Layout,
        pseudo: &'static [PseudoFlag],
    ) -> Self {
        assert!(mnemonic.len() <= MAX_MNEMONIC_LEN, "mnemonic too long");
        assert!(value & !mask == 0, "value has bits outside the mask");
        Self {
            mnemonic,
            mask,
            value,
            layout,
            pseudo,
        }
    }

    /// Returns true when `word` is an encoding of this instruction.
    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.value
    }

    /// Returns true when this descriptor may take the given substitution.
    #[inline]
    pub fn has_pseudo(&self, flag: PseudoFlag) -> bool {
        self.pseudo.contains(&flag)
    }

    /// Major opcode shared by every word this descriptor matches.
    #[inline]
    pub const fn major_opcode(&self) -> u32 {
        self.value & OPCODE_MASK
    }

    /// The flag set packed into the historic per-layout bit word.
    pub fn pseudo_bits(&self) -> u32 {
        self.pseudo.iter().fold(0, |bits, flag| bits | flag.bit())
    }
}

const fn enc_f3(funct3: u32) -> u32 {
    funct3 << FUNCT3_SHIFT
}

const fn enc_f7(funct7: u32) -> u32 {
    funct7 << FUNCT7_SHIFT
}

const fn enc_f6(funct6: u32) -> u32 {
    funct6 << FUNCT6_SHIFT
}

const OP: u32 = OPCODE_MASK;
const F3_OP: u32 = FUNCT3_MASK | OPCODE_MASK;
const F7_F3_OP: u32 = FUNCT7_MASK | FUNCT3_MASK | OPCODE_MASK;
const F6_F3_OP: u32 = FUNCT6_MASK | FUNCT3_MASK | OPCODE_MASK;

const NO_PSEUDO: &[PseudoFlag] = &[];

const fn upper(name: &'static str, opcode: u32) -> OpcodeDescriptor {
    OpcodeDescriptor::new(name, opcode, OP, Layout::U, NO_PSEUDO)
}

const fn by_f3(
    name: &'static str,
    funct3: u32,
    opcode: u32,
    layout: Layout,
    pseudo: &'static [PseudoFlag],
) -> OpcodeDescriptor {
    OpcodeDescriptor::new(name, enc_f3(funct3) | opcode, F3_OP, layout, pseudo)
}

const fn by_f7(
    name: &'static str,
    funct7: u32,
    funct3: u32,
    opcode: u32,
    layout: Layout,
    pseudo: &'static [PseudoFlag],
) -> OpcodeDescriptor {
    OpcodeDescriptor::new(
        name,
        enc_f7(funct7) | enc_f3(funct3) | opcode,
        F7_F3_OP,
        layout,
        pseudo,
    )
}

const fn by_f6(name: &'static str, funct6: u32, funct3: u32, opcode: u32) -> OpcodeDescriptor {
    OpcodeDescriptor::new(
        name,
        enc_f6(funct6) | enc_f3(funct3) | opcode,
        F6_F3_OP,
        Layout::IShift,
        NO_PSEUDO,
    )
}

const fn fixed(name: &'static str, word: u32) -> OpcodeDescriptor {
    OpcodeDescriptor::new(name, word, MASK_ALL, Layout::None, NO_PSEUDO)
}

/// The ordered opcode table.
#[rustfmt::skip]
pub static OPCODES: &[OpcodeDescriptor] = &[
    // ── RV32I ─────────────────────────────────────────────
    upper("lui", op::OP_LUI),
    upper("auipc", op::OP_AUIPC),
    OpcodeDescriptor::new("jal", op::OP_JAL, OP, Layout::J, NO_PSEUDO),
    by_f3("jalr", f3::JALR, op::OP_JALR, Layout::IJump, NO_PSEUDO),

    by_f3("beq", f3::BEQ, op::OP_BRANCH, Layout::B, &[PseudoFlag::AnyZ]),
    by_f3("bne", f3::BNE, op::OP_BRANCH, Layout::B, &[PseudoFlag::AnyZ]),
    by_f3("blt", f3::BLT, op::OP_BRANCH, Layout::B, &[PseudoFlag::AnyZ, PseudoFlag::Bgtz]),
    by_f3("bge", f3::BGE, op::OP_BRANCH, Layout::B, &[PseudoFlag::AnyZ, PseudoFlag::Blez]),
    by_f3("bltu", f3::BLTU, op::OP_BRANCH, Layout::B, NO_PSEUDO),
    by_f3("bgeu", f3::BGEU, op::OP_BRANCH, Layout::B, NO_PSEUDO),

    by_f3("lb", f3::LB, op::OP_LOAD, Layout::ILoad, NO_PSEUDO),
    by_f3("lh", f3::LH, op::OP_LOAD, Layout::ILoad, NO_PSEUDO),
    by_f3("lw", f3::LW, op::OP_LOAD, Layout::ILoad, NO_PSEUDO),
    by_f3("lbu", f3::LBU, op::OP_LOAD, Layout::ILoad, NO_PSEUDO),
    by_f3("lhu", f3::LHU, op::OP_LOAD, Layout::ILoad, NO_PSEUDO),

    by_f3("sb", f3::SB, op::OP_STORE, Layout::S, NO_PSEUDO),
    by_f3("sh", f3::SH, op::OP_STORE, Layout::S, NO_PSEUDO),
    by_f3("sw", f3::SW, op::OP_STORE, Layout::S, NO_PSEUDO),

    by_f3("addi", f3::ADD_SUB, op::OP_IMM, Layout::I, &[PseudoFlag::Nop, PseudoFlag::Mv]),
    by_f3("slti", f3::SLT, op::OP_IMM, Layout::I, NO_PSEUDO),
    by_f3("sltiu", f3::SLTU, op::OP_IMM, Layout::I, &[PseudoFlag::Seqz]),
    by_f3("xori", f3::XOR, op::OP_IMM, Layout::I, &[PseudoFlag::Not]),
    by_f3("ori", f3::OR, op::OP_IMM, Layout::I, NO_PSEUDO),
    by_f3("andi", f3::AND, op::OP_IMM, Layout::I, NO_PSEUDO),

    by_f7("add", f7::DEFAULT, f3::ADD_SUB, op::OP_REG, Layout::R, NO_PSEUDO),
    by_f7("sub", f7::SUB, f3::ADD_SUB, op::OP_REG, Layout::R, &[PseudoFlag::Neg]),
    by_f7("sll", f7::DEFAULT, f3::SLL, op::OP_REG, Layout::R, NO_PSEUDO),
    by_f7("slt", f7::DEFAULT, f3::SLT, op::OP_REG, Layout::R, &[PseudoFlag::Sltz, PseudoFlag::Sgtz]),
    by_f7("sltu", f7::DEFAULT, f3::SLTU, op::OP_REG, Layout::R, &[PseudoFlag::Snez]),
    by_f7("xor", f7::DEFAULT, f3::XOR, op::OP_REG, Layout::R, NO_PSEUDO),
    by_f7("srl", f7::DEFAULT, f3::SRL_SRA, op::OP_REG, Layout::R, NO_PSEUDO),
    by_f7("sra", f7::SRA, f3::SRL_SRA, op::OP_REG, Layout::R, NO_PSEUDO),
    by_f7("or", f7::DEFAULT, f3::OR, op::OP_REG, Layout::R, NO_PSEUDO),
    by_f7("and", f7::DEFAULT, f3::AND, op::OP_REG, Layout::R, NO_PSEUDO),

    by_f3("fence", f3::FENCE, op::OP_MISC_MEM, Layout::IFence, NO_PSEUDO),
    fixed("ecall", op::ECALL),
    fixed("ebreak", op::EBREAK),

    // ── RV64I ─────────────────────────────────────────────
    by_f3("lwu", f3::LWU, op::OP_LOAD, Layout::ILoad, NO_PSEUDO),
    by_f3("ld", f3::LD, op::OP_LOAD, Layout::ILoad, NO_PSEUDO),
    by_f3("sd", f3::SD, op::OP_STORE, Layout::S, NO_PSEUDO),

    by_f6("slli", f7::SHIFT_LOGICAL, f3::SLL, op::OP_IMM),
    by_f6("srli", f7::SHIFT_LOGICAL, f3::SRL_SRA, op::OP_IMM),
    by_f6("srai", f7::SHIFT_ARITH, f3::SRL_SRA, op::OP_IMM),

    by_f3("addiw", f3::ADD_SUB, op::OP_IMM_32, Layout::I, &[PseudoFlag::SextW]),
    by_f7("slliw", f7::DEFAULT, f3::SLL, op::OP_IMM_32, Layout::IShift, NO_PSEUDO),
    by_f7("srliw", f7::DEFAULT, f3::SRL_SRA, op::OP_IMM_32, Layout::IShift, NO_PSEUDO),
    by_f7("sraiw", f7::SRA, f3::SRL_SRA, op::OP_IMM_32, Layout::IShift, NO_PSEUDO),

    by_f7("addw", f7::DEFAULT, f3::ADD_SUB, op::OP_REG_32, Layout::R, NO_PSEUDO),
    by_f7("subw", f7::SUB, f3::ADD_SUB, op::OP_REG_32, Layout::R, &[PseudoFlag::Negw]),
    by_f7("sllw", f7::DEFAULT, f3::SLL, op::OP_REG_32, Layout::R, NO_PSEUDO),
    by_f7("srlw", f7::DEFAULT, f3::SRL_SRA, op::OP_REG_32, Layout::R, NO_PSEUDO),
    by_f7("sraw", f7::SRA, f3::SRL_SRA, op::OP_REG_32, Layout::R, NO_PSEUDO),
];

/// Number of descriptors in [`OPCODES`].
pub fn opcode_count() -> usize {
    OPCODES.len()
}
