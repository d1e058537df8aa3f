//! Program Loader.
//!
//! This module installs assembled programs into instruction memory. It performs:
//! 1. **Clearing:** Every slot is zeroed so no word of a previous program survives.
//! 2. **Installation:** Words are copied in from index 0.
//! 3. **Truncation:** Words past capacity are dropped and reported, never wrapped.

use tracing::{debug, warn};

use crate::core::cpu::memory::InstructionMemory;

/// Outcome of installing a program.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Words copied into instruction memory.
    pub loaded: usize,
    /// Words that did not fit.
    pub dropped: usize,
}

impl LoadReport {
    /// True if part of the program was dropped.
    pub const fn truncated(&self) -> bool {
        self.dropped > 0
    }
}

/// Clears `imem` and installs `words` from index 0.
///
/// # Arguments
///
/// * `imem` - Instruction memory to overwrite.
/// * `words` - Program words, normally ending with the halt word.
///
/// # Returns
///
/// How many words were installed and how many did not fit.
pub fn load_words(imem: &mut InstructionMemory, words: &[u32]) -> LoadReport {
    imem.clear();
    let loaded = imem.install(words);
    let report = LoadReport {
        loaded,
        dropped: words.len() - loaded,
    };
    if report.truncated() {
        warn!(
            loaded,
            dropped = report.dropped,
            capacity = imem.capacity(),
            "program does not fit instruction memory, truncated"
        );
    }
    debug!(loaded, "program loaded");
    report
}
