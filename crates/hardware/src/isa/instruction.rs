//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding
//! instruction fields from 32-bit instruction words.

use crate::common::constants::{
    FUNCT_MASK, IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT,
    TARGET_MASK,
};

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every field is extracted unconditionally; which ones are meaningful
/// depends on the instruction format.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the second source / I-format destination field (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the R-format destination register field (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the raw 16-bit immediate field (bits 15-0).
    fn imm16(&self) -> u16;

    /// Extracts the R-format function code (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the J-format target field (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    /// The function code shares its bits with the low end of the immediate,
    /// so this is also `imm16() & 0x3F`.
    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Contains every fixed field of the word regardless of format; the engine
/// picks the ones its opcode needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Opcode field (bits 31-26).
    pub opcode: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source register index (I-format destination).
    pub rt: usize,
    /// R-format destination register index.
    pub rd: usize,
    /// Raw 16-bit immediate, not sign-extended.
    pub imm: u16,
    /// Function code (low 6 bits of the immediate).
    pub funct: u32,
    /// 26-bit jump target.
    pub target: u32,
}
