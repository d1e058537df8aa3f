//! General-Purpose Register File.
//!
//! This module implements the 32-entry general-purpose register file.
//! It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`R0`-`R31`).
//! 2. **Zero Policy:** `R0` is an ordinary register unless the file is built
//!    with `hardwired_zero`, in which case it reads as zero and ignores writes.
//! 3. **Debugging:** Provides a dump of the complete register state.

use crate::common::constants::NUM_REGISTERS;

/// General-Purpose Register file.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [i32; NUM_REGISTERS],
    hardwired_zero: bool,
}

impl Gpr {
    /// Creates a register file with all registers initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `hardwired_zero` - Pin `R0` to zero.
    pub const fn new(hardwired_zero: bool) -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
            hardwired_zero,
        }
    }

    /// Reads a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or more.
    pub const fn read(&self, idx: usize) -> i32 {
        self.regs[idx]
    }

    /// Writes a register. Writes to `R0` are dropped when it is hard-wired.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or more.
    pub const fn write(&mut self, idx: usize, val: i32) {
        if !(self.hardwired_zero && idx == 0) {
            self.regs[idx] = val;
        }
    }

    /// Whether `R0` is pinned to zero.
    pub const fn hardwired_zero(&self) -> bool {
        self.hardwired_zero
    }

    /// All registers, indexed by register number.
    pub const fn as_array(&self) -> &[i32; NUM_REGISTERS] {
        &self.regs
    }

    /// Sets every register back to zero.
    pub const fn clear(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// Dumps the contents of all registers to stdout, four per line.
    pub fn dump(&self) {
        for (row, chunk) in self.regs.chunks(4).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, v)| format!("R{:<2}={:>11}", row * 4 + col, v))
                .collect();
            println!("{}", line.join("  "));
        }
    }
}
