//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction word into a human-readable string for debug
//! tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2001_0005), "ADDI R1, R0, 5");
//! assert_eq!(disassemble(0xFFFF_FFFF), "HALT");
//! ```

use std::fmt::Write;

use crate::common::constants::{EMPTY_WORD, HALT_WORD};
use crate::isa::ops::Instruction;

/// Disassembles a machine word.
///
/// Sentinels are named (`HALT`, `NOP`), known encodings use the assembler's
/// syntax, and anything else is shown as a raw `.word`.
pub fn disassemble(word: u32) -> String {
    match word {
        HALT_WORD => "HALT".to_string(),
        EMPTY_WORD => "NOP".to_string(),
        _ => Instruction::decode(word).map_or_else(
            |_| format!(".word {word:#010x}"),
            |inst| inst.to_string(),
        ),
    }
}

/// Disassembles a whole program, one line per word, prefixed with its index.
pub fn listing(words: &[u32]) -> String {
    words.iter().enumerate().fold(String::new(), |mut out, (pc, &word)| {
        let _ = writeln!(out, "{pc:>4}: {word:08x}  {}", disassemble(word));
        out
    })
}
