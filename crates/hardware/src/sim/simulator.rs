//! Simulator: assembles, loads and runs programs on one CPU.
//!
//! The CPU itself only ever executes one instruction per call. This driver
//! adds the loops a front end needs: assemble-then-load, and a bounded run
//! that stops on halt, on an empty slot, or when the step budget is spent.

use tracing::{debug, info};

use crate::asm::{Assembly, assemble};
use crate::common::error::ExecError;
use crate::config::Config;
use crate::core::{Cpu, Overflow, StepOutcome};
use crate::sim::loader::LoadReport;

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The halt word was reached.
    Halted,
    /// An empty slot was reached, or PC left instruction memory.
    Empty,
    /// The step budget ran out first.
    StepLimit,
}

/// Result of a bounded run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Calls made to [`Cpu::step`], including the one that stopped the run.
    pub steps: u64,
    /// Why the run stopped.
    pub stop: StopReason,
    /// Every overflow reported during the run, in order.
    pub overflows: Vec<Overflow>,
}

/// Top-level simulator: one CPU and the configuration it was built from.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memories, stats).
    pub cpu: Cpu,
    config: Config,
}

impl Simulator {
    /// Creates a simulator with an idle CPU.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            config: config.clone(),
        }
    }

    /// Configuration the CPU was built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Assembles `source` and loads the resulting words.
    ///
    /// Lines that fail to assemble are skipped, as [`assemble`] does; the
    /// rest of the program is loaded regardless.
    ///
    /// # Returns
    ///
    /// The assembly (words and diagnostics) and the load report.
    pub fn assemble_and_load(&mut self, source: &str) -> (Assembly, LoadReport) {
        let assembly = assemble(source);
        let report = self.cpu.load(&assembly.words);
        (assembly, report)
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// As [`Cpu::step`].
    pub fn step(&mut self) -> Result<StepOutcome, ExecError> {
        self.cpu.step()
    }

    /// Steps until the CPU halts, reaches an empty slot, or `max_steps`
    /// calls have been made.
    ///
    /// # Errors
    ///
    /// The first execution error ends the run and is returned; state changes
    /// made before it are kept.
    pub fn run(&mut self, max_steps: u64) -> Result<RunSummary, ExecError> {
        let mut overflows = Vec::new();
        let mut steps = 0;
        let stop = loop {
            if steps == max_steps {
                break StopReason::StepLimit;
            }
            steps += 1;
            match self.cpu.step()? {
                StepOutcome::Continued { overflow } => overflows.extend(overflow),
                StepOutcome::Halted => break StopReason::Halted,
                StepOutcome::Empty => break StopReason::Empty,
            }
        };
        debug!(steps, ?stop, overflows = overflows.len(), "run finished");
        if stop == StopReason::StepLimit {
            info!(max_steps, pc = self.cpu.pc(), "step budget exhausted");
        }
        Ok(RunSummary {
            steps,
            stop,
            overflows,
        })
    }
}
