//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for one CPU. It provides:
//! 1. **Progress:** Steps taken, instructions retired, and derived throughput.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Branches:** Conditional branches executed and taken.
//! 4. **Faults:** Reported overflows and aborted instructions.

use std::time::Instant;

/// Simulation statistics structure tracking all execution metrics.
///
/// Updated by [`crate::core::Cpu::step`]; cleared by [`crate::core::Cpu::reset`].
/// Steps that return without fetching (halted, empty or idle engine) are not counted.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Words fetched, including the halt and empty sentinels.
    pub steps: u64,
    /// Number of instructions that executed to completion.
    pub instructions_retired: u64,

    /// Count of R-format and I-format ALU instructions.
    pub inst_alu: u64,
    /// Count of LW instructions retired.
    pub inst_load: u64,
    /// Count of SW instructions retired.
    pub inst_store: u64,
    /// Count of BEQ/BNE instructions executed.
    pub inst_branch: u64,
    /// Count of J instructions retired.
    pub inst_jump: u64,

    /// Conditional branches whose condition held.
    pub branches_taken: u64,

    /// Checked additions and subtractions that overflowed.
    pub overflows: u64,
    /// Steps aborted by an execution error.
    pub exec_errors: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            branches_taken: 0,
            overflows: 0,
            exec_errors: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"branch"`, `"faults"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch", "faults"];

impl SimStats {
    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let retired = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / retired) * 100.0;

        if want("summary") {
            let mips = if seconds > 0.0 {
                (self.instructions_retired as f64 / seconds) / 1_000_000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("MIPS SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_steps                {}", self.steps);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_mips                 {mips:.2}");
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
            println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
            println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
            println!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
            println!("  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
            println!("----------------------------------------------------------");
        }
        if want("branch") {
            let taken_rate = if self.inst_branch > 0 {
                100.0 * (self.branches_taken as f64 / self.inst_branch as f64)
            } else {
                0.0
            };
            println!("BRANCHES");
            println!("  br.executed            {}", self.inst_branch);
            println!("  br.taken               {}", self.branches_taken);
            println!("  br.taken_rate          {taken_rate:.2}%");
            println!("----------------------------------------------------------");
        }
        if want("faults") {
            println!("FAULTS");
            println!("  fault.overflow         {}", self.overflows);
            println!("  fault.aborted          {}", self.exec_errors);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
