//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter and the run state.
//! 2. **Memories:** Word-addressed instruction and data memories.
//! 3. **Program Loading:** Replacing the program and resetting the PC.
//! 4. **Observation:** Read-only views and serializable snapshots.

/// Fetch, decode and execute of a single instruction.
pub mod execution;

/// Instruction and data memories, load/store helpers.
pub mod memory;

use serde::Serialize;

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::ExecError;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::isa::ops::Mnemonic;
use crate::sim::loader::{self, LoadReport};
use crate::stats::SimStats;

use self::memory::{DataMemory, InstructionMemory};

/// Where the engine is in its life cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RunState {
    /// No program has been loaded yet.
    #[default]
    Idle,
    /// A program is loaded and the next step will execute.
    Loaded,
    /// The halt word was fetched.
    Halted,
    /// An empty slot was fetched, or the PC ran past instruction memory.
    Empty,
}

/// A checked add or subtract whose result did not fit 32 bits.
///
/// The destination register keeps its previous value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overflow {
    /// Instruction index of the overflowing instruction.
    pub pc: u32,
    /// Which instruction overflowed (`ADD`, `SUB` or `ADDI`).
    pub mnemonic: Mnemonic,
    /// First operand.
    pub lhs: i32,
    /// Second operand (the sign-extended immediate for `ADDI`).
    pub rhs: i32,
}

/// Result of one call to [`Cpu::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction executed; execution can continue.
    Continued {
        /// Set when a checked operation overflowed.
        overflow: Option<Overflow>,
    },
    /// The halt word was reached.
    Halted,
    /// An empty slot was reached, or the PC is past instruction memory.
    Empty,
}

/// Serializable copy of the architectural state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CpuSnapshot {
    /// Program counter (instruction index).
    pub pc: u32,
    /// Run state at the time of the snapshot.
    pub state: RunState,
    /// `R0`-`R31`.
    pub registers: [i32; NUM_REGISTERS],
    /// Entire data memory.
    pub data_memory: Vec<i32>,
}

/// The single-step execution engine.
#[derive(Clone, Debug)]
pub struct Cpu {
    regs: Gpr,
    imem: InstructionMemory,
    dmem: DataMemory,
    pc: u32,
    state: RunState,
    trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates an idle CPU with zeroed registers and memories.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory capacities, zero-register policy and tracing.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(config.general.hardwired_zero),
            imem: InstructionMemory::new(config.memory.instruction_words),
            dmem: DataMemory::new(config.memory.data_words),
            pc: 0,
            state: RunState::Idle,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }

    /// Replaces the program and rewinds the PC.
    ///
    /// Instruction memory is zeroed first, then `words` is copied in from
    /// index 0. Words beyond capacity are dropped and reported. Registers and
    /// data memory are left as they are.
    ///
    /// # Returns
    ///
    /// How many words were installed and how many were dropped.
    pub fn load(&mut self, words: &[u32]) -> LoadReport {
        let report = loader::load_words(&mut self.imem, words);
        self.pc = 0;
        self.state = RunState::Loaded;
        report
    }

    /// Clears registers, both memories, the PC and statistics, and returns
    /// to [`RunState::Idle`].
    pub fn reset(&mut self) {
        self.regs.clear();
        self.imem.clear();
        self.dmem.clear();
        self.pc = 0;
        self.state = RunState::Idle;
        self.stats = SimStats::default();
    }

    /// All 32 registers.
    pub const fn registers(&self) -> &[i32; NUM_REGISTERS] {
        self.regs.as_array()
    }

    /// One register, or `None` for an index of 32 or more.
    pub fn register(&self, idx: usize) -> Option<i32> {
        self.regs.as_array().get(idx).copied()
    }

    /// Seeds a register before running.
    ///
    /// Returns `None`, leaving every register untouched, for an index of 32
    /// or more. A hard-wired `R0` accepts the call and stays zero.
    pub const fn set_register(&mut self, idx: usize, value: i32) -> Option<()> {
        if idx >= NUM_REGISTERS {
            return None;
        }
        self.regs.write(idx, value);
        Some(())
    }

    /// Entire data memory.
    pub fn data_memory(&self) -> &[i32] {
        self.dmem.as_slice()
    }

    /// Seeds one data word before running.
    ///
    /// # Errors
    ///
    /// [`ExecError::DataOutOfBounds`] if `address` is outside data memory.
    pub fn write_data(&mut self, address: usize, value: i32) -> Result<(), ExecError> {
        let address = i64::try_from(address).unwrap_or(i64::MAX);
        self.dmem.write(address, value, self.pc)
    }

    /// Entire instruction memory.
    pub fn instruction_memory(&self) -> &[u32] {
        self.imem.as_slice()
    }

    /// Index of the next instruction to fetch.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Current run state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Copies the architectural state into a serializable value.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            pc: self.pc,
            state: self.state,
            registers: *self.regs.as_array(),
            data_memory: self.dmem.as_slice().to_vec(),
        }
    }

    /// Dumps registers and PC to stdout.
    pub fn dump_state(&self) {
        println!("pc = {}  state = {:?}", self.pc, self.state);
        self.regs.dump();
    }
}
