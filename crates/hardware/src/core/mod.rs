//! Core processor implementation.
//!
//! This module contains the execution engine: architectural register state,
//! the ALU, and the CPU that fetches, decodes and executes one instruction
//! per step.

/// Architectural state (general-purpose register file).
pub mod arch;

/// CPU core: memories, program loading and single-step execution.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, CpuSnapshot, Overflow, RunState, StepOutcome};
