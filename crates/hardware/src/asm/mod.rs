//! Assembler.
//!
//! Converts the line-oriented assembly dialect into machine words:
//!
//! ```text
//! label:                     # binds `label` to the next instruction index
//! ADD  R3, R1, R2            # ADD/ADDU/SUB/SUBU/AND/OR/XOR/NOR rd, rs, rt
//! ADDI R1, R0, -5            # ADDI/ADDIU/ANDI/ORI/XORI rt, rs, imm16
//! BEQ  R1, R2, label         # BEQ/BNE rs, rt, label
//! LW   R4, 8(R1)             # LW/SW rt, offset(rs)
//! J    12                    # absolute instruction index or label
//! ```

/// Two-pass assembly driver.
pub mod assembler;

/// Label table built by the first pass.
pub mod labels;

/// Token parsers for registers, immediates and memory operands.
pub mod parse;

use std::fmt;

use crate::common::error::AsmError;

pub use assembler::assemble;
pub use labels::LabelTable;

/// A source line that could not be assembled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the source text.
    pub line: usize,
    /// The line as read, trimmed and without its comment.
    pub text: String,
    /// Why the line was rejected.
    pub error: AsmError,
}

impl Diagnostic {
    /// Creates a diagnostic for `text` at `line`.
    pub fn new(line: usize, text: &str, error: AsmError) -> Self {
        Self {
            line,
            text: text.to_string(),
            error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: `{}`: {}", self.line, self.text, self.error)
    }
}

/// Result of assembling one source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assembly {
    /// Encoded program, always ending with the halt word.
    pub words: Vec<u32>,
    /// Rejected lines, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Source line number of each encoded word, excluding the trailing halt.
    pub source_lines: Vec<usize>,
}

impl Assembly {
    /// True if every line assembled.
    pub const fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Source line that produced the word at instruction index `pc`.
    pub fn line_of(&self, pc: u32) -> Option<usize> {
        self.source_lines.get(pc as usize).copied()
    }
}
