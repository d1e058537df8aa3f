//! Single-Step Execution.
//!
//! This module implements one fetch/decode/execute cycle of the CPU. It performs the following:
//! 1. **State Gate:** A halted, empty or never-loaded engine does nothing.
//! 2. **Fetch:** Reads the word at PC and advances PC by one instruction.
//! 3. **Sentinels:** The halt and empty words stop execution before decode.
//! 4. **Execute:** Dispatches the decoded instruction to the ALU, branch
//!    logic or data memory and updates statistics.
//! 5. **Observability:** Emits a `trace!` event per instruction when enabled.

use tracing::{trace, warn};

use super::{Cpu, Overflow, RunState, StepOutcome};
use crate::common::constants::{EMPTY_WORD, HALT_WORD};
use crate::common::error::ExecError;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::ops::{Instruction, Mnemonic};

impl Cpu {
    /// Executes one instruction.
    ///
    /// PC is advanced before the instruction runs, so branch offsets are
    /// relative to the instruction index *after* the branch. Errors and
    /// overflows record the index of the instruction itself.
    ///
    /// # Returns
    ///
    /// * [`StepOutcome::Halted`] when the halt word is fetched, and on every
    ///   later call until the next load.
    /// * [`StepOutcome::Empty`] when an empty slot is fetched, when PC is past
    ///   instruction memory, or when nothing was ever loaded.
    /// * [`StepOutcome::Continued`] otherwise, carrying any overflow.
    ///
    /// # Errors
    ///
    /// Unknown opcodes and function codes, and LW/SW addresses outside data
    /// memory. The failing instruction has no effect besides advancing PC and
    /// execution may continue with the next step.
    pub fn step(&mut self) -> Result<StepOutcome, ExecError> {
        match self.state {
            RunState::Idle | RunState::Empty => return Ok(StepOutcome::Empty),
            RunState::Halted => return Ok(StepOutcome::Halted),
            RunState::Loaded => {}
        }

        let pc = self.pc;
        let Some(word) = self.imem.fetch(pc) else {
            self.state = RunState::Empty;
            return Ok(StepOutcome::Empty);
        };
        self.pc = pc.wrapping_add(1);
        self.stats.steps += 1;

        match word {
            HALT_WORD => {
                self.state = RunState::Halted;
                return Ok(StepOutcome::Halted);
            }
            EMPTY_WORD => {
                self.state = RunState::Empty;
                return Ok(StepOutcome::Empty);
            }
            _ => {}
        }

        let result = Instruction::decode(word).and_then(|inst| {
            if self.trace {
                trace!(pc, word, %inst, "execute");
            }
            self.execute(inst, pc)
        });
        match result {
            Ok(overflow) => {
                self.stats.instructions_retired += 1;
                Ok(StepOutcome::Continued { overflow })
            }
            Err(e) => {
                self.stats.exec_errors += 1;
                warn!(pc, word, error = %e, "instruction aborted");
                Err(e)
            }
        }
    }

    /// Applies `inst`, fetched from instruction index `pc`.
    fn execute(&mut self, inst: Instruction, pc: u32) -> Result<Option<Overflow>, ExecError> {
        match inst {
            Instruction::Reg { op, rd, rs, rt } => {
                let (lhs, rhs) = (self.regs.read(rs), self.regs.read(rt));
                return Ok(self.alu_write(Mnemonic::Reg(op), AluOp::from(op), rd, lhs, rhs, pc));
            }
            Instruction::Imm { op, rt, rs, imm } => {
                let lhs = self.regs.read(rs);
                let rhs = i32::from(imm);
                return Ok(self.alu_write(Mnemonic::Imm(op), AluOp::from(op), rt, lhs, rhs, pc));
            }
            Instruction::Jump { target } => {
                self.stats.inst_jump += 1;
                self.pc = target;
            }
            Instruction::Beq { rs, rt, offset } => {
                self.stats.inst_branch += 1;
                if self.regs.read(rs) == self.regs.read(rt) {
                    self.stats.branches_taken += 1;
                    self.pc = self.pc.wrapping_add(u32::from(offset as u16));
                }
            }
            Instruction::Bne { rs, rt, offset } => {
                self.stats.inst_branch += 1;
                if self.regs.read(rs) != self.regs.read(rt) {
                    self.stats.branches_taken += 1;
                    self.pc = self.pc.wrapping_add_signed(i32::from(offset));
                }
            }
            Instruction::Lw { rt, base, offset } => self.load_word(rt, base, offset, pc)?,
            Instruction::Sw { rt, base, offset } => self.store_word(rt, base, offset, pc)?,
        }
        Ok(None)
    }

    /// Runs an ALU operation and writes `dest` unless it overflowed.
    fn alu_write(
        &mut self,
        mnemonic: Mnemonic,
        op: AluOp,
        dest: usize,
        lhs: i32,
        rhs: i32,
        pc: u32,
    ) -> Option<Overflow> {
        self.stats.inst_alu += 1;
        if let Some(value) = Alu::execute(op, lhs, rhs) {
            self.regs.write(dest, value);
            return None;
        }
        self.stats.overflows += 1;
        warn!(pc, %mnemonic, lhs, rhs, "arithmetic overflow, destination unchanged");
        Some(Overflow {
            pc,
            mnemonic,
            lhs,
            rhs,
        })
    }
}
