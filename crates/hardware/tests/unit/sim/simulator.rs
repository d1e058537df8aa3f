//! # Simulator Run-Loop Tests

use crate::common::harness::{TestContext, init_tracing};
use mipsim_core::config::Config;
use mipsim_core::core::RunState;
use mipsim_core::isa::ops::{Mnemonic, RegOp};
use mipsim_core::{ExecError, Simulator, StopReason};
use pretty_assertions::assert_eq;

#[test]
fn run_stops_on_halt() {
    let mut ctx = TestContext::new().load_asm("ADDI R1, R0, 3\nADDI R2, R1, 4\n");
    let summary = ctx.run_to_end();
    assert_eq!(summary.stop, StopReason::Halted);
    assert_eq!(summary.steps, 3);
    assert!(summary.overflows.is_empty());
    assert_eq!(ctx.get_reg(2), 7);
}

#[test]
fn run_stops_on_empty_slot() {
    let mut ctx = TestContext::new().load_words(&[0x2001_0001, 0]);
    let summary = ctx.run_to_end();
    assert_eq!(summary.stop, StopReason::Empty);
    assert_eq!(summary.steps, 2);
}

#[test]
fn run_respects_step_budget() {
    // counts R1 up forever
    let mut ctx = TestContext::new().load_asm("loop:\nADDI R1, R1, 1\nJ loop\n");
    let summary = ctx.sim.run(10).unwrap();
    assert_eq!(summary.stop, StopReason::StepLimit);
    assert_eq!(summary.steps, 10);
    assert_eq!(ctx.get_reg(1), 5);
    assert_eq!(ctx.cpu().state(), RunState::Loaded);
}

#[test]
fn zero_budget_does_nothing() {
    let mut ctx = TestContext::new().load_asm("ADDI R1, R0, 1\n");
    let summary = ctx.sim.run(0).unwrap();
    assert_eq!((summary.steps, summary.stop), (0, StopReason::StepLimit));
    assert_eq!(ctx.cpu().pc(), 0);
}

#[test]
fn run_collects_overflows() {
    let mut ctx = TestContext::new().load_asm("ADD R1, R2, R2\nADD R1, R2, R2\n");
    ctx.set_reg(2, i32::MAX);
    let summary = ctx.run_to_end();
    assert_eq!(summary.stop, StopReason::Halted);
    let pcs: Vec<u32> = summary.overflows.iter().map(|o| o.pc).collect();
    assert_eq!(pcs, vec![0, 1]);
    assert!(summary.overflows.iter().all(|o| o.mnemonic == Mnemonic::Reg(RegOp::Add)));
}

#[test]
fn run_returns_first_execution_error() {
    let mut ctx = TestContext::new().load_asm("ADDI R1, R0, 1\nLW R2, 5000(R0)\nADDI R3, R0, 1\n");
    assert_eq!(
        ctx.sim.run(100),
        Err(ExecError::DataOutOfBounds { address: 5000, pc: 1 })
    );
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.get_reg(3), 0);
    // the run can be resumed past the faulting instruction
    assert_eq!(ctx.sim.run(100).map(|s| s.stop), Ok(StopReason::Halted));
    assert_eq!(ctx.get_reg(3), 1);
}

#[test]
fn assemble_and_load_keeps_good_lines() {
    init_tracing();
    let mut sim = Simulator::new(&Config::default());
    let (asm, report) = sim.assemble_and_load("ADDI R1, R0, 1\nNOPE\nADDI R2, R0, 2\n");
    assert_eq!(asm.diagnostics.len(), 1);
    assert_eq!(report.loaded, 3);
    assert_eq!(sim.run(10).map(|s| s.stop), Ok(StopReason::Halted));
    assert_eq!(&sim.cpu.registers()[1..3], &[1, 2]);
}

#[test]
fn truncated_program_runs_into_end_of_memory() {
    let mut config = Config::default();
    config.memory.instruction_words = 2;
    let mut ctx = TestContext::with_config(&config);
    let asm = ctx.load_asm_lenient("ADDI R1, R0, 1\nADDI R2, R0, 2\nADDI R3, R0, 3\n");
    assert_eq!(asm.words.len(), 4);
    let summary = ctx.run_to_end();
    assert_eq!(summary.stop, StopReason::Empty);
    assert_eq!(ctx.get_reg(2), 2);
    assert_eq!(ctx.get_reg(3), 0);
    assert_eq!(ctx.sim.config().memory.instruction_words, 2);
}

#[test]
fn example_program_runs_off_memory_after_beq() {
    let source = "start:\nADDI R1, R0, 5\nADDI R2, R0, 10\nADD R3, R1, R2\nSW R3, 0(R1)\nLW R4, 0(R1)\nBEQ R3, R4, start\n";
    let mut ctx = TestContext::new().load_asm(source);
    let summary = ctx.run_to_end();
    assert_eq!(summary.stop, StopReason::Empty);
    assert_eq!(summary.steps, 7);
    assert_eq!(ctx.cpu().pc(), 65538);
}
