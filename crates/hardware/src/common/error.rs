//! Error definitions.
//!
//! This module defines the failure types of the simulator. It provides:
//! 1. **Assembly Errors:** Per-line failures collected as diagnostics by the assembler.
//! 2. **Execution Errors:** Failures that abort a single `step()` call.
//! 3. **Configuration Errors:** Invalid or unreadable configuration input.

use std::path::PathBuf;

use thiserror::Error;

/// A failure to assemble one source line.
///
/// Assembly is best-effort: each of these is attached to the offending line as a
/// [`Diagnostic`](crate::asm::Diagnostic) and the line contributes no word.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AsmError {
    /// The first token is not a known mnemonic.
    #[error("unknown instruction `{0}`")]
    UnknownMnemonic(String),

    /// The mnemonic was given the wrong number of operands.
    #[error("`{mnemonic}` expects {expected} operand(s), found {found}")]
    OperandCount {
        /// Mnemonic as written.
        mnemonic: &'static str,
        /// Number of operands the mnemonic takes.
        expected: usize,
        /// Number of operands on the line.
        found: usize,
    },

    /// A register token is not of the form `R<digits>`.
    #[error("malformed register `{0}`")]
    InvalidRegister(String),

    /// A register index is outside `R0`-`R31`.
    #[error("register `{0}` does not exist, valid registers are R0-R31")]
    RegisterOutOfRange(String),

    /// A memory operand is not of the form `offset(Rn)`.
    #[error("malformed memory operand `{0}`")]
    InvalidAddress(String),

    /// An integer literal could not be parsed.
    #[error("malformed integer `{0}`")]
    InvalidImmediate(String),

    /// A value does not fit a signed 16-bit field.
    #[error("immediate {0} is outside the 16-bit range -32768..=32767")]
    ImmediateOutOfRange(i64),

    /// A jump target does not fit the 26-bit target field.
    #[error("jump target {0} is outside the 26-bit range")]
    TargetOutOfRange(i64),

    /// A branch or jump names a label that was never defined.
    #[error("undefined label `{0}`")]
    UndefinedLabel(String),

    /// A label definition is not a valid identifier.
    #[error("invalid label name `{0}`")]
    InvalidLabel(String),

    /// A label was defined more than once; the first definition is kept.
    #[error("label `{name}` already defined at instruction {index}")]
    DuplicateLabel {
        /// The repeated label.
        name: String,
        /// Instruction index bound by the first definition.
        index: u32,
    },
}

/// A failure that aborts the current `step()`.
///
/// The engine is left as it was just before the failing mutation. The program
/// counter has already advanced past the fetched word.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The opcode field names no supported instruction.
    #[error("unknown opcode {opcode:#04x} in word {word:#010x}")]
    UnknownOpcode {
        /// Decoded opcode field.
        opcode: u32,
        /// Raw instruction word.
        word: u32,
    },

    /// An R-format word carries an unsupported function code.
    #[error("unknown R-format function {funct:#04x} in word {word:#010x}")]
    UnknownFunction {
        /// Decoded function code.
        funct: u32,
        /// Raw instruction word.
        word: u32,
    },

    /// A load or store addressed a word outside data memory.
    #[error("data memory access at word {address} is out of bounds (pc {pc})")]
    DataOutOfBounds {
        /// Computed word address.
        address: i64,
        /// Instruction index of the faulting load/store.
        pc: u32,
    },
}

/// A failure to read or validate configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`Config`](crate::Config).
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("could not read configuration file `{path}`: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A memory capacity is zero or exceeds what the ISA can address.
    #[error("`{field}` = {value} is not a usable capacity")]
    Capacity {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: usize,
    },
}
