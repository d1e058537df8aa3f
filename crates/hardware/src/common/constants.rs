//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Sentinel Words:** The halt and empty instruction encodings.
//! 2. **Field Layout:** Masks and shifts for the R/I/J instruction fields.
//! 3. **Capacities:** Default instruction and data memory sizes.
//! 4. **Jump Range:** Exclusive bound of the 26-bit J target.

/// Instruction word that stops execution.
pub const HALT_WORD: u32 = 0xFFFF_FFFF;

/// Instruction word treated as "no instruction here"; stepping stops on it.
///
/// Compared before decode, so it never reaches the R-format decoder.
pub const EMPTY_WORD: u32 = 0x0000_0000;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Default instruction memory capacity in words.
pub const INSTRUCTION_MEMORY_WORDS: usize = 256;

/// Default data memory capacity in words.
pub const DATA_MEMORY_WORDS: usize = 1024;

/// Bit position of the opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;

/// Mask for the 6-bit opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;

/// Bit position of the `rs` field (bits 25-21).
pub const RS_SHIFT: u32 = 21;

/// Bit position of the `rt` field (bits 20-16).
pub const RT_SHIFT: u32 = 16;

/// Bit position of the `rd` field (bits 15-11).
pub const RD_SHIFT: u32 = 11;

/// Mask for a 5-bit register field after shifting.
pub const REG_MASK: u32 = 0x1F;

/// Mask for the 16-bit immediate field (bits 15-0).
pub const IMM_MASK: u32 = 0xFFFF;

/// Mask for the 6-bit function code (bits 5-0).
pub const FUNCT_MASK: u32 = 0x3F;

/// Mask for the 26-bit jump target (bits 25-0).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Exclusive upper bound for a J-format target.
pub const TARGET_LIMIT: u32 = 1 << 26;
