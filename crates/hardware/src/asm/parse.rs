//! Operand Parsers.
//!
//! Token-level parsing shared by both assembler passes: registers, integer
//! literals, `offset(Rn)` memory operands, label names and comments. Every
//! parser reports a typed [`AsmError`] so the assembler can attach it to the
//! offending line.

use crate::common::constants::{NUM_REGISTERS, TARGET_LIMIT};
use crate::common::error::AsmError;

/// Character that starts a comment running to the end of the line.
pub const COMMENT_CHAR: char = '#';

/// Removes a trailing `#` comment, if any.
pub fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT_CHAR).map_or(line, |(code, _)| code)
}

/// Parses a register token of the form `R<0-31>`.
///
/// # Errors
///
/// [`AsmError::InvalidRegister`] if the token is not `R` followed by decimal
/// digits, [`AsmError::RegisterOutOfRange`] if the index is 32 or more.
///
/// # Examples
///
/// ```
/// use mipsim_core::asm::parse::parse_register;
/// assert_eq!(parse_register("R31"), Ok(31));
/// assert!(parse_register("R32").is_err());
/// assert!(parse_register("$t0").is_err());
/// ```
pub fn parse_register(token: &str) -> Result<usize, AsmError> {
    let digits = token
        .strip_prefix('R')
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| AsmError::InvalidRegister(token.to_string()))?;
    match digits.parse::<usize>() {
        Ok(idx) if idx < NUM_REGISTERS => Ok(idx),
        _ => Err(AsmError::RegisterOutOfRange(token.to_string())),
    }
}

/// Parses a signed integer literal, decimal or `0x` hexadecimal.
///
/// # Errors
///
/// [`AsmError::InvalidImmediate`] for anything else, including values that do
/// not fit in 64 bits.
pub fn parse_integer(token: &str) -> Result<i64, AsmError> {
    let invalid = || AsmError::InvalidImmediate(token.to_string());
    let (negative, body) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let magnitude = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        i64::from_str_radix(hex, 16).map_err(|_| invalid())?
    } else {
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        body.parse::<i64>().map_err(|_| invalid())?
    };
    Ok(if negative { -magnitude } else { magnitude })
}

/// Checks that a value fits a signed 16-bit immediate field.
///
/// # Errors
///
/// [`AsmError::ImmediateOutOfRange`] outside `-32768..=32767`.
pub fn check_imm16(value: i64) -> Result<i16, AsmError> {
    i16::try_from(value).map_err(|_| AsmError::ImmediateOutOfRange(value))
}

/// Parses a 16-bit signed immediate operand.
///
/// # Errors
///
/// As [`parse_integer`] and [`check_imm16`].
pub fn parse_imm16(token: &str) -> Result<i16, AsmError> {
    check_imm16(parse_integer(token)?)
}

/// Checks that a value fits the 26-bit J target field.
///
/// # Errors
///
/// [`AsmError::TargetOutOfRange`] for negative values or values of `2^26` and up.
pub fn check_target(value: i64) -> Result<u32, AsmError> {
    u32::try_from(value)
        .ok()
        .filter(|&t| t < TARGET_LIMIT)
        .ok_or(AsmError::TargetOutOfRange(value))
}

/// Parses a memory operand `offset(Rn)` into `(offset, base register)`.
///
/// The offset is mandatory and may be negative; it is folded into the 16-bit
/// immediate field by the encoder.
///
/// # Errors
///
/// [`AsmError::InvalidAddress`] if the operand does not have that shape,
/// register errors for a bad base, and [`AsmError::ImmediateOutOfRange`] for an
/// offset that does not fit 16 bits.
///
/// # Examples
///
/// ```
/// use mipsim_core::asm::parse::parse_memory_operand;
/// assert_eq!(parse_memory_operand("-4(R2)"), Ok((-4, 2)));
/// assert!(parse_memory_operand("(R2)").is_err());
/// ```
pub fn parse_memory_operand(token: &str) -> Result<(i16, usize), AsmError> {
    let invalid = || AsmError::InvalidAddress(token.to_string());
    let (offset, base) = token
        .strip_suffix(')')
        .and_then(|inner| inner.split_once('('))
        .ok_or_else(invalid)?;
    let offset = parse_integer(offset.trim()).map_err(|_| invalid())?;
    let base = parse_register(base.trim())?;
    Ok((check_imm16(offset)?, base))
}

/// Returns true if `name` is a valid label: a letter or underscore followed by
/// letters, digits or underscores.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
