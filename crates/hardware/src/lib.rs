//! Reduced MIPS assembler and single-step simulator library.
//!
//! This crate implements a small MIPS-like instruction set with the following:
//! 1. **Assembler:** Two-pass translation of assembly text into 32-bit words, with labels.
//! 2. **ISA:** Field layout, encode/decode of the tagged instruction form, and a disassembler.
//! 3. **Core:** Register file, ALU, instruction and data memories, and one-instruction `step`.
//! 4. **Simulation:** Program loading, a bounded run loop, configuration and statistics.
//!
//! # Examples
//!
//! ```
//! use mipsim_core::{Config, Simulator, StopReason};
//!
//! let mut sim = Simulator::new(&Config::default());
//! let (asm, _) = sim.assemble_and_load("ADDI R1, R0, 5\nADDI R2, R0, 7\nADD R3, R1, R2\n");
//! assert!(asm.is_clean());
//!
//! let summary = sim.run(100).unwrap();
//! assert_eq!(summary.stop, StopReason::Halted);
//! assert_eq!(sim.cpu.registers()[3], 12);
//! ```

/// Two-pass assembler (labels, operand parsing, diagnostics).
pub mod asm;
/// Common types and constants (sentinel words, field layout, errors).
pub mod common;
/// Simulator configuration (memory capacities, zero-register policy, tracing).
pub mod config;
/// CPU core (register file, ALU, memories, execution).
pub mod core;
/// Instruction set (opcodes, function codes, encode/decode, disassembly).
pub mod isa;
/// Program loader and run-loop driver.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Assembles source text into machine words plus per-line diagnostics.
pub use crate::asm::{Assembly, Diagnostic, assemble};
/// Error types for assembly, execution and configuration.
pub use crate::common::{AsmError, ConfigError, ExecError};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memories and stats.
pub use crate::core::{Cpu, RunState, StepOutcome};
/// Assemble-and-run driver around a [`Cpu`].
pub use crate::sim::{LoadReport, RunSummary, Simulator, StopReason};
