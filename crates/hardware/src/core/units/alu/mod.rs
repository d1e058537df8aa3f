//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execute step.
//! All operands and results are 32-bit two's-complement values.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Addu, Sub, Subu
//! - [`logic`]:      And, Or, Xor, Nor

/// Integer add/subtract, checked and wrapping.
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

use crate::isa::ops::{ImmOp, RegOp};

/// ALU operation selected by the decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Signed add; overflow is reported.
    Add,
    /// Add modulo 2^32.
    Addu,
    /// Signed subtract; overflow is reported.
    Sub,
    /// Subtract modulo 2^32.
    Subu,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
}

impl From<RegOp> for AluOp {
    fn from(op: RegOp) -> Self {
        match op {
            RegOp::Add => Self::Add,
            RegOp::Addu => Self::Addu,
            RegOp::Sub => Self::Sub,
            RegOp::Subu => Self::Subu,
            RegOp::And => Self::And,
            RegOp::Or => Self::Or,
            RegOp::Xor => Self::Xor,
            RegOp::Nor => Self::Nor,
        }
    }
}

impl From<ImmOp> for AluOp {
    /// ADDIU is an unchecked add; the bitwise immediates use the
    /// sign-extended immediate like their register forms.
    fn from(op: ImmOp) -> Self {
        match op {
            ImmOp::Addi => Self::Add,
            ImmOp::Addiu => Self::Addu,
            ImmOp::Andi => Self::And,
            ImmOp::Ori => Self::Or,
            ImmOp::Xori => Self::Xor,
        }
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Returns
    ///
    /// The 32-bit result, or `None` if a checked operation (`Add`, `Sub`)
    /// overflowed. Callers leave the destination untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 40, 2), Some(42));
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1), None);
    /// assert_eq!(Alu::execute(AluOp::Addu, -1, 1), Some(0));
    /// assert_eq!(Alu::execute(AluOp::Nor, 0, 0), Some(-1));
    /// ```
    pub const fn execute(op: AluOp, a: i32, b: i32) -> Option<i32> {
        match op {
            AluOp::Add | AluOp::Addu | AluOp::Sub | AluOp::Subu => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor => Some(logic::execute(op, a, b)),
        }
    }

    /// True for operations whose overflow is reported.
    pub const fn is_checked(op: AluOp) -> bool {
        matches!(op, AluOp::Add | AluOp::Sub)
    }
}
