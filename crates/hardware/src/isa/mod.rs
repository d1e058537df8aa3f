//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, field extraction and
//! decoding for the reduced MIPS-like instruction set.
//!
//! # Formats
//!
//! * R-format: `opcode | rs | rt | rd | shamt | funct` (register ALU ops).
//! * I-format: `opcode | rs | rt | imm16` (immediate ALU ops, branches, LW/SW).
//! * J-format: `opcode | target26` (absolute jump).

/// Instruction decoding into fixed fields.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// R-format function codes.
pub mod funct;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Major opcodes of the supported subset.
pub mod opcodes;

/// Mnemonics and the tagged instruction variants (encode/decode).
pub mod ops;

pub use decode::{decode, sign_extend16};
pub use instruction::{Decoded, InstructionBits};
pub use ops::{ImmOp, Instruction, Mnemonic, RegOp};
