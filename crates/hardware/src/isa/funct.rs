//! R-format Function Codes.
//!
//! The function field (bits 5-0) selects the ALU operation for words whose
//! opcode is [`OP_SPECIAL`](super::opcodes::OP_SPECIAL).

/// Signed add, overflow leaves the destination unchanged.
pub const ADD: u32 = 0x20;
/// Add modulo 2^32.
pub const ADDU: u32 = 0x21;
/// Signed subtract, overflow leaves the destination unchanged.
pub const SUB: u32 = 0x22;
/// Subtract modulo 2^32.
pub const SUBU: u32 = 0x23;
/// Bitwise AND.
pub const AND: u32 = 0x24;
/// Bitwise OR.
pub const OR: u32 = 0x25;
/// Bitwise XOR.
pub const XOR: u32 = 0x26;
/// Bitwise NOR.
pub const NOR: u32 = 0x27;
