//! Instruction and Data Memories.
//!
//! This module provides the two word-addressed memories owned by the CPU.
//! It performs the following:
//! 1. **Instruction Memory:** Fixed-capacity program store, replaced wholesale on load.
//! 2. **Data Memory:** Signed words addressed by LW/SW, with bounds-checked access.
//! 3. **Load/Store Helpers:** Effective-address computation for the execute step.

use super::Cpu;
use crate::common::error::ExecError;

/// Fixed-capacity store of instruction words.
#[derive(Clone, Debug)]
pub struct InstructionMemory {
    words: Vec<u32>,
}

impl InstructionMemory {
    /// Creates a zeroed instruction memory of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
        }
    }

    /// Reads the word at `pc`, or `None` past the end.
    #[inline]
    pub fn fetch(&self, pc: u32) -> Option<u32> {
        self.words.get(pc as usize).copied()
    }

    /// Zeroes every slot.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Copies `program` in from index 0, returning how many words fit.
    pub fn install(&mut self, program: &[u32]) -> usize {
        let n = program.len().min(self.words.len());
        self.words[..n].copy_from_slice(&program[..n]);
        n
    }

    /// Capacity in words.
    pub const fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Contents, indexed by instruction index.
    pub fn as_slice(&self) -> &[u32] {
        &self.words
    }
}

/// Word-addressed data memory.
#[derive(Clone, Debug)]
pub struct DataMemory {
    words: Vec<i32>,
}

impl DataMemory {
    /// Creates a zeroed data memory of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
        }
    }

    /// Converts a computed word address into an index, if it is in bounds.
    fn index(&self, address: i64) -> Option<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&i| i < self.words.len())
    }

    /// Reads the word at `address`.
    ///
    /// # Errors
    ///
    /// [`ExecError::DataOutOfBounds`] if `address` is negative or past the end;
    /// `pc` is recorded in the error.
    pub fn read(&self, address: i64, pc: u32) -> Result<i32, ExecError> {
        self.index(address)
            .map(|i| self.words[i])
            .ok_or(ExecError::DataOutOfBounds { address, pc })
    }

    /// Writes `value` at `address`.
    ///
    /// # Errors
    ///
    /// As [`DataMemory::read`]; nothing is written on failure.
    pub fn write(&mut self, address: i64, value: i32, pc: u32) -> Result<(), ExecError> {
        let i = self
            .index(address)
            .ok_or(ExecError::DataOutOfBounds { address, pc })?;
        self.words[i] = value;
        Ok(())
    }

    /// Zeroes every word.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Capacity in words.
    pub const fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Contents, indexed by word address.
    pub fn as_slice(&self) -> &[i32] {
        &self.words
    }
}

impl Cpu {
    /// Computes `regs[base] + offset` as a word address.
    ///
    /// Done in 64 bits so that the sum cannot wrap into a valid address.
    #[inline]
    pub(crate) fn effective_address(&self, base: usize, offset: i16) -> i64 {
        i64::from(self.regs.read(base)) + i64::from(offset)
    }

    /// Loads `data[regs[base] + offset]` into `rt`.
    pub(crate) fn load_word(
        &mut self,
        rt: usize,
        base: usize,
        offset: i16,
        pc: u32,
    ) -> Result<(), ExecError> {
        let value = self.dmem.read(self.effective_address(base, offset), pc)?;
        self.regs.write(rt, value);
        self.stats.inst_load += 1;
        Ok(())
    }

    /// Stores `rt` into `data[regs[base] + offset]`.
    pub(crate) fn store_word(
        &mut self,
        rt: usize,
        base: usize,
        offset: i16,
        pc: u32,
    ) -> Result<(), ExecError> {
        let address = self.effective_address(base, offset);
        self.dmem.write(address, self.regs.read(rt), pc)?;
        self.stats.inst_store += 1;
        Ok(())
    }
}
