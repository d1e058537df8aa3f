//! ALU arithmetic operations.
//!
//! Signed add/subtract with overflow detection (ADD, SUB, ADDI) and their
//! modulo-2^32 counterparts (ADDU, SUBU, ADDIU).

use super::AluOp;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// `None` when `Add` or `Sub` overflows the signed 32-bit range, otherwise the
/// result. Returns `Some(0)` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> Option<i32> {
    match op {
        AluOp::Add => a.checked_add(b),
        AluOp::Addu => Some(a.wrapping_add(b)),
        AluOp::Sub => a.checked_sub(b),
        AluOp::Subu => Some(a.wrapping_sub(b)),
        _ => Some(0),
    }
}
