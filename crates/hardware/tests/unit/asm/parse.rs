//! # Operand Parsing Tests

use mipsim_core::AsmError;
use mipsim_core::asm::parse::{
    check_target, is_identifier, parse_imm16, parse_integer, parse_memory_operand, parse_register,
    strip_comment,
};
use rstest::rstest;

#[rstest]
#[case("R0", 0)]
#[case("R7", 7)]
#[case("R31", 31)]
#[case("R05", 5)]
fn parses_register(#[case] token: &str, #[case] idx: usize) {
    assert_eq!(parse_register(token), Ok(idx));
}

#[rstest]
#[case("r1")]
#[case("R")]
#[case("$1")]
#[case("R-1")]
#[case("R1a")]
#[case("X3")]
fn rejects_malformed_register(#[case] token: &str) {
    assert_eq!(
        parse_register(token),
        Err(AsmError::InvalidRegister(token.to_string()))
    );
}

#[rstest]
#[case("R32")]
#[case("R99")]
#[case("R99999999999999999999999")]
fn rejects_register_out_of_range(#[case] token: &str) {
    assert_eq!(
        parse_register(token),
        Err(AsmError::RegisterOutOfRange(token.to_string()))
    );
}

#[rstest]
#[case("0", 0)]
#[case("42", 42)]
#[case("-42", -42)]
#[case("+7", 7)]
#[case("0x10", 16)]
#[case("0XfF", 255)]
#[case("-0x8000", -32768)]
fn parses_integer(#[case] token: &str, #[case] value: i64) {
    assert_eq!(parse_integer(token), Ok(value));
}

#[rstest]
#[case("")]
#[case("-")]
#[case("0x")]
#[case("12abc")]
#[case("0xZZ")]
#[case("five")]
fn rejects_malformed_integer(#[case] token: &str) {
    assert_eq!(
        parse_integer(token),
        Err(AsmError::InvalidImmediate(token.to_string()))
    );
}

#[test]
fn imm16_bounds_are_inclusive() {
    assert_eq!(parse_imm16("32767"), Ok(i16::MAX));
    assert_eq!(parse_imm16("-32768"), Ok(i16::MIN));
    assert_eq!(parse_imm16("32768"), Err(AsmError::ImmediateOutOfRange(32768)));
    assert_eq!(parse_imm16("-32769"), Err(AsmError::ImmediateOutOfRange(-32769)));
}

#[test]
fn jump_target_bounds() {
    assert_eq!(check_target(0), Ok(0));
    assert_eq!(check_target((1 << 26) - 1), Ok((1 << 26) - 1));
    assert_eq!(check_target(1 << 26), Err(AsmError::TargetOutOfRange(1 << 26)));
    assert_eq!(check_target(-1), Err(AsmError::TargetOutOfRange(-1)));
}

#[rstest]
#[case("0(R1)", 0, 1)]
#[case("4(R0)", 4, 0)]
#[case("-8(R31)", -8, 31)]
#[case("0x10(R2)", 16, 2)]
fn parses_memory_operand(#[case] token: &str, #[case] offset: i16, #[case] base: usize) {
    assert_eq!(parse_memory_operand(token), Ok((offset, base)));
}

#[rstest]
#[case("R1")]
#[case("(R1)")]
#[case("4R1")]
#[case("4(R1")]
#[case("x(R1)")]
fn rejects_malformed_memory_operand(#[case] token: &str) {
    assert_eq!(
        parse_memory_operand(token),
        Err(AsmError::InvalidAddress(token.to_string()))
    );
}

#[test]
fn memory_operand_reports_base_and_offset_errors() {
    assert_eq!(
        parse_memory_operand("0(R40)"),
        Err(AsmError::RegisterOutOfRange("R40".to_string()))
    );
    assert_eq!(
        parse_memory_operand("40000(R1)"),
        Err(AsmError::ImmediateOutOfRange(40000))
    );
}

#[test]
fn comments_are_stripped() {
    assert_eq!(strip_comment("ADD R1, R2, R3 # sum"), "ADD R1, R2, R3 ");
    assert_eq!(strip_comment("# whole line"), "");
    assert_eq!(strip_comment("no comment"), "no comment");
}

#[rstest]
#[case("loop", true)]
#[case("_start", true)]
#[case("L2", true)]
#[case("end_of_program", true)]
#[case("2fast", false)]
#[case("", false)]
#[case("has space", false)]
#[case("dash-ed", false)]
fn identifier_rules(#[case] name: &str, #[case] valid: bool) {
    assert_eq!(is_identifier(name), valid);
}
