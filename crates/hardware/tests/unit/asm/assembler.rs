//! # Assembler Tests
//!
//! Whole-program assembly: output words, label resolution, branch offsets and
//! per-line diagnostics.

use mipsim_core::AsmError;
use mipsim_core::asm::assemble;
use mipsim_core::asm::assembler::encode_line;
use mipsim_core::asm::LabelTable;
use mipsim_core::common::HALT_WORD;
use mipsim_core::isa::ops::{Instruction, RegOp};
use pretty_assertions::assert_eq;
use rstest::rstest;

const EXAMPLE: &str = "\
start:
ADDI R1, R0, 5
ADDI R2, R0, 10
ADD R3, R1, R2
SW R3, 0(R1)
LW R4, 0(R1)
BEQ R3, R4, start
";

// ─── Output words ──────────────────────────────────────────────────────────

#[test]
fn example_program_assembles_to_seven_words() {
    let asm = assemble(EXAMPLE);
    assert!(asm.is_clean());
    assert_eq!(
        asm.words,
        vec![
            0x2001_0005, // ADDI R1, R0, 5
            0x2002_000A, // ADDI R2, R0, 10
            0x0022_1820, // ADD R3, R1, R2
            0xAC23_0000, // SW R3, 0(R1)
            0x8C24_0000, // LW R4, 0(R1)
            0x1064_FFFC, // BEQ R3, R4, -4
            HALT_WORD,
        ]
    );
    assert_eq!(asm.source_lines, vec![2, 3, 4, 5, 6, 7]);
    assert_eq!(asm.line_of(5), Some(7));
    assert_eq!(asm.line_of(6), None);
}

#[test]
fn empty_source_is_just_halt() {
    let asm = assemble("");
    assert!(asm.is_clean());
    assert_eq!(asm.words, vec![HALT_WORD]);
}

#[test]
fn labels_emit_no_word() {
    let asm = assemble("a:\nb:\nADDI R1, R0, 1\nc:\n");
    assert!(asm.is_clean());
    assert_eq!(asm.words, vec![0x2001_0001, HALT_WORD]);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let source = "# header\n\n   ADD R3, R1, R2   # sum\n\t\n# trailer\n";
    let asm = assemble(source);
    assert!(asm.is_clean());
    assert_eq!(asm.words, vec![0x0022_1820, HALT_WORD]);
    assert_eq!(asm.source_lines, vec![3]);
}

#[rstest]
#[case("ADD R3, R1, R2")]
#[case("ADD R3,R1,R2")]
#[case("ADD R3 R1 R2")]
#[case("ADD\tR3 ,R1 , R2")]
#[case("  ADD R3, R1, R2  ")]
fn operand_separators(#[case] line: &str) {
    assert_eq!(assemble(line).words, vec![0x0022_1820, HALT_WORD]);
}

#[test]
fn hex_and_negative_immediates() {
    let asm = assemble("ORI R1, R0, 0xFF\nADDI R2, R0, -1\nLW R3, -0x4(R2)\n");
    assert!(asm.is_clean());
    assert_eq!(asm.words, vec![0x3401_00FF, 0x2002_FFFF, 0x8C43_FFFC, HALT_WORD]);
}

// ─── Branches and jumps ────────────────────────────────────────────────────

#[test]
fn backward_branch_offset_is_target_minus_index_plus_one() {
    let source = "ADDI R1, R0, 1\ntarget:\nADDI R2, R0, 2\nADDI R3, R0, 3\nBNE R1, R2, target\n";
    let asm = assemble(source);
    assert!(asm.is_clean());
    // T = 1, C = 3
    assert_eq!(Instruction::decode(asm.words[3]), Ok(Instruction::Bne { rs: 1, rt: 2, offset: -1 }));
}

#[test]
fn forward_branch_offset() {
    let source = "BEQ R1, R1, skip\nADDI R2, R0, 1\nskip:\nADDI R3, R0, 1\n";
    let asm = assemble(source);
    assert!(asm.is_clean());
    // T = 2, C = 0
    assert_eq!(Instruction::decode(asm.words[0]), Ok(Instruction::Beq { rs: 1, rt: 1, offset: 3 }));
}

#[test]
fn branch_to_own_index_has_offset_one() {
    let asm = assemble("here:\nBEQ R0, R0, here\n");
    assert_eq!(asm.words[0], 0x1000_0001);
}

#[test]
fn branch_offset_is_range_checked_after_resolution() {
    let mut labels = LabelTable::new();
    labels.define("far", 40_000).unwrap();
    labels.define("edge", 32_766).unwrap();
    labels.define("start", 0).unwrap();

    assert_eq!(
        encode_line("BEQ R1, R2, far", 0, &labels),
        Err(AsmError::ImmediateOutOfRange(40_001))
    );
    assert_eq!(
        encode_line("BNE R1, R2, edge", 0, &labels),
        Ok(Instruction::Bne { rs: 1, rt: 2, offset: 32_767 })
    );
    // 0 - 32769 + 1 = -32768
    assert_eq!(
        encode_line("BEQ R1, R2, start", 32_769, &labels),
        Ok(Instruction::Beq { rs: 1, rt: 2, offset: -32_768 })
    );
    assert_eq!(
        encode_line("BEQ R1, R2, start", 32_770, &labels),
        Err(AsmError::ImmediateOutOfRange(-32_769))
    );
}

#[test]
fn jump_accepts_label_or_absolute_index() {
    let asm = assemble("J end\nADDI R1, R0, 1\nend:\nJ 0\n");
    assert!(asm.is_clean());
    assert_eq!(asm.words, vec![0x0800_0002, 0x2001_0001, 0x0800_0000, HALT_WORD]);
}

#[test]
fn jump_target_beyond_26_bits_is_rejected() {
    let asm = assemble("J 67108864\n");
    assert_eq!(asm.words, vec![HALT_WORD]);
    assert_eq!(asm.diagnostics[0].error, AsmError::TargetOutOfRange(67_108_864));
}

// ─── Diagnostics ───────────────────────────────────────────────────────────

#[test]
fn failing_line_is_skipped_and_assembly_continues() {
    let asm = assemble("ADDI R1, R0, 1\nFOO R1\nADDI R2, R0, 2\n");
    assert_eq!(asm.words, vec![0x2001_0001, 0x2002_0002, HALT_WORD]);
    assert_eq!(asm.diagnostics.len(), 1);
    let d = &asm.diagnostics[0];
    assert_eq!(d.line, 2);
    assert_eq!(d.text, "FOO R1");
    assert_eq!(d.error, AsmError::UnknownMnemonic("FOO".to_string()));
    assert_eq!(d.to_string(), "line 2: `FOO R1`: unknown instruction `FOO`");
}

#[test]
fn failing_lines_still_count_toward_label_indices() {
    let asm = assemble("BOGUS\nend:\nJ end\n");
    assert_eq!(asm.diagnostics.len(), 1);
    assert_eq!(asm.words, vec![0x0800_0001, HALT_WORD]);
}

#[test]
fn duplicate_label_keeps_first_binding() {
    let asm = assemble("x:\nADDI R1, R0, 1\nx:\nJ x\n");
    assert_eq!(asm.diagnostics.len(), 1);
    assert_eq!(asm.diagnostics[0].line, 3);
    assert_eq!(
        asm.diagnostics[0].error,
        AsmError::DuplicateLabel {
            name: "x".to_string(),
            index: 0
        }
    );
    assert_eq!(asm.words, vec![0x2001_0001, 0x0800_0000, HALT_WORD]);
}

#[test]
fn diagnostics_are_in_line_order() {
    let asm = assemble("x:\nFOO\nx:\nBAR\n");
    let lines: Vec<usize> = asm.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![2, 3, 4]);
}

#[rstest]
#[case("add R1, R2, R3", AsmError::UnknownMnemonic("add".to_string()))]
#[case("ADD R1, R2", AsmError::OperandCount { mnemonic: "ADD", expected: 3, found: 2 })]
#[case("J", AsmError::OperandCount { mnemonic: "J", expected: 1, found: 0 })]
#[case("LW R1, 0(R2), R3", AsmError::OperandCount { mnemonic: "LW", expected: 2, found: 3 })]
#[case("ADD R1, R2, R32", AsmError::RegisterOutOfRange("R32".to_string()))]
#[case("ADD R1, R2, $3", AsmError::InvalidRegister("$3".to_string()))]
#[case("ADDI R1, R2, 40000", AsmError::ImmediateOutOfRange(40000))]
#[case("ADDI R1, R2, ten", AsmError::InvalidImmediate("ten".to_string()))]
#[case("LW R1, R2", AsmError::InvalidAddress("R2".to_string()))]
#[case("BEQ R1, R2, nowhere", AsmError::UndefinedLabel("nowhere".to_string()))]
#[case("9bad:", AsmError::InvalidLabel("9bad".to_string()))]
fn rejected_lines(#[case] line: &str, #[case] error: AsmError) {
    let asm = assemble(line);
    assert_eq!(asm.words, vec![HALT_WORD]);
    assert_eq!(asm.diagnostics.len(), 1);
    assert_eq!(asm.diagnostics[0].error, error);
}

#[test]
fn encode_line_without_labels() {
    let labels = LabelTable::new();
    assert_eq!(
        encode_line("SUB R5, R6, R7", 0, &labels),
        Ok(Instruction::Reg {
            op: RegOp::Sub,
            rd: 5,
            rs: 6,
            rt: 7
        })
    );
}
