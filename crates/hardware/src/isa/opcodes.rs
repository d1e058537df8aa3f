//! Major Opcodes.
//!
//! Defines the opcode field values (bits 31-26) of the supported instruction subset.

/// R-format register-register ALU operations; the function code selects the op.
pub const OP_SPECIAL: u32 = 0x00;

/// Unconditional jump to an absolute instruction index (J).
pub const OP_J: u32 = 0x02;

/// Branch if equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Branch if not equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Add immediate with overflow check (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Add immediate without overflow check (ADDIU).
pub const OP_ADDIU: u32 = 0x09;

/// Bitwise AND with immediate (ANDI).
pub const OP_ANDI: u32 = 0x0C;

/// Bitwise OR with immediate (ORI).
pub const OP_ORI: u32 = 0x0D;

/// Bitwise XOR with immediate (XORI).
pub const OP_XORI: u32 = 0x0E;

/// Load word (LW).
pub const OP_LW: u32 = 0x23;

/// Store word (SW).
pub const OP_SW: u32 = 0x2B;
