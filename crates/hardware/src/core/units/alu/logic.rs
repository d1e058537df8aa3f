//! ALU logical operations.
//!
//! Bitwise AND, OR, XOR and NOR on full 32-bit operands.

use super::AluOp;

/// Executes a bitwise operation.
///
/// Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        _ => 0,
    }
}
