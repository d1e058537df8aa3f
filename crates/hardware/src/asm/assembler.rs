//! Two-Pass Assembler.
//!
//! This module turns assembly text into machine words. It performs:
//! 1. **Line Classification:** Comments are stripped, blank lines dropped, and
//!    each remaining line is either a label definition (`name:`) or an instruction.
//! 2. **Pass 1:** Every label is bound to the index of the instruction after it.
//!    Labels occupy no instruction slot.
//! 3. **Pass 2:** Every instruction line is encoded, resolving branch labels to
//!    offsets relative to the line's own index.
//!
//! Failures are per line: the line is skipped, a [`Diagnostic`] is recorded, and
//! assembly continues. A halt word is always appended.

use tracing::{debug, warn};

use crate::asm::labels::LabelTable;
use crate::asm::parse::{
    check_imm16, check_target, parse_imm16, parse_integer, parse_memory_operand, parse_register,
    strip_comment,
};
use crate::asm::{Assembly, Diagnostic};
use crate::common::constants::HALT_WORD;
use crate::common::error::AsmError;
use crate::isa::ops::{Instruction, Mnemonic};

/// What a non-blank source line defines.
#[derive(Clone, Copy, Debug)]
enum LineKind<'a> {
    /// `name:` with the colon removed.
    Label(&'a str),
    /// Anything else.
    Instruction,
}

/// A non-blank source line with its 1-based line number.
#[derive(Clone, Copy, Debug)]
struct SourceLine<'a> {
    number: usize,
    text: &'a str,
    kind: LineKind<'a>,
}

/// Classifies the non-blank lines of `source`.
fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = strip_comment(raw).trim();
            if text.is_empty() {
                return None;
            }
            let kind = text
                .strip_suffix(':')
                .map_or(LineKind::Instruction, |name| LineKind::Label(name.trim()));
            Some(SourceLine {
                number: i + 1,
                text,
                kind,
            })
        })
        .collect()
}

/// Builds the label table, recording invalid and duplicate labels.
fn first_pass(lines: &[SourceLine<'_>], diagnostics: &mut Vec<Diagnostic>) -> LabelTable {
    let mut labels = LabelTable::new();
    let mut index: u32 = 0;
    for line in lines {
        match line.kind {
            LineKind::Label(name) => {
                if let Err(error) = labels.define(name, index) {
                    diagnostics.push(Diagnostic::new(line.number, line.text, error));
                }
            }
            LineKind::Instruction => index += 1,
        }
    }
    labels
}

/// Assembles source text into machine words.
///
/// Never fails as a whole: lines that cannot be encoded are reported in
/// [`Assembly::diagnostics`] and contribute no word, so the word count can be
/// smaller than the instruction count.
///
/// # Examples
///
/// ```
/// use mipsim_core::asm::assemble;
///
/// let asm = assemble("loop:\nADDI R1, R1, 1\nBNE R1, R2, loop\n");
/// assert!(asm.is_clean());
/// assert_eq!(asm.words, vec![0x2021_0001, 0x1422_0000, 0xFFFF_FFFF]);
/// ```
pub fn assemble(source: &str) -> Assembly {
    let lines = split_lines(source);
    let mut diagnostics = Vec::new();
    let labels = first_pass(&lines, &mut diagnostics);

    let mut words = Vec::with_capacity(lines.len() + 1);
    let mut source_lines = Vec::with_capacity(lines.len());
    let mut pc: u32 = 0;
    for line in &lines {
        if let LineKind::Label(_) = line.kind {
            continue;
        }
        match encode_line(line.text, pc, &labels) {
            Ok(inst) => {
                words.push(inst.encode());
                source_lines.push(line.number);
            }
            Err(error) => diagnostics.push(Diagnostic::new(line.number, line.text, error)),
        }
        pc += 1;
    }
    words.push(HALT_WORD);

    diagnostics.sort_by_key(|d| d.line);
    for d in &diagnostics {
        warn!(line = d.line, text = %d.text, error = %d.error, "skipping source line");
    }
    debug!(
        words = words.len(),
        labels = labels.len(),
        diagnostics = diagnostics.len(),
        "assembled program"
    );

    Assembly {
        words,
        diagnostics,
        source_lines,
    }
}

/// Encodes one instruction line located at instruction index `pc`.
///
/// Mnemonic and operands are separated by whitespace; operands by commas
/// and/or whitespace.
///
/// # Errors
///
/// Any [`AsmError`] describing why the line cannot be encoded.
pub fn encode_line(text: &str, pc: u32, labels: &LabelTable) -> Result<Instruction, AsmError> {
    let (head, rest) = text
        .split_once(char::is_whitespace)
        .unwrap_or((text, ""));
    let mnemonic: Mnemonic = head.parse()?;
    let ops: Vec<&str> = rest
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if ops.len() != mnemonic.operand_count() {
        return Err(AsmError::OperandCount {
            mnemonic: mnemonic.as_str(),
            expected: mnemonic.operand_count(),
            found: ops.len(),
        });
    }

    let inst = match mnemonic {
        Mnemonic::Reg(op) => Instruction::Reg {
            op,
            rd: parse_register(ops[0])?,
            rs: parse_register(ops[1])?,
            rt: parse_register(ops[2])?,
        },
        Mnemonic::Imm(op) => Instruction::Imm {
            op,
            rt: parse_register(ops[0])?,
            rs: parse_register(ops[1])?,
            imm: parse_imm16(ops[2])?,
        },
        Mnemonic::J => Instruction::Jump {
            target: parse_jump_target(ops[0], labels)?,
        },
        Mnemonic::Beq => Instruction::Beq {
            rs: parse_register(ops[0])?,
            rt: parse_register(ops[1])?,
            offset: branch_offset(ops[2], pc, labels)?,
        },
        Mnemonic::Bne => Instruction::Bne {
            rs: parse_register(ops[0])?,
            rt: parse_register(ops[1])?,
            offset: branch_offset(ops[2], pc, labels)?,
        },
        Mnemonic::Lw | Mnemonic::Sw => {
            let rt = parse_register(ops[0])?;
            let (offset, base) = parse_memory_operand(ops[1])?;
            if mnemonic == Mnemonic::Lw {
                Instruction::Lw { rt, base, offset }
            } else {
                Instruction::Sw { rt, base, offset }
            }
        }
    };
    Ok(inst)
}

/// Resolves a branch label to `target - pc + 1`.
///
/// The offset is counted in whole instructions.
fn branch_offset(label: &str, pc: u32, labels: &LabelTable) -> Result<i16, AsmError> {
    let target = labels.resolve(label)?;
    check_imm16(i64::from(target) - i64::from(pc) + 1)
}

/// A J operand is either an absolute instruction index or a label.
fn parse_jump_target(token: &str, labels: &LabelTable) -> Result<u32, AsmError> {
    let numeric = token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+');
    if numeric {
        check_target(parse_integer(token)?)
    } else {
        labels.resolve(token)
    }
}
