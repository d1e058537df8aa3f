//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the engine. It provides:
//! 1. **Defaults:** Baseline capacities for instruction and data memory.
//! 2. **Structures:** General (tracing, zero-register policy) and memory settings.
//! 3. **Loading:** JSON parsing from strings or files, with capacity validation.
//!
//! Every field is optional in JSON; use `Config::default()` when no file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{DATA_MEMORY_WORDS, INSTRUCTION_MEMORY_WORDS, TARGET_LIMIT};
use crate::common::error::ConfigError;

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "hardwired_zero": true },
///     "memory": { "data_words": 64 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert!(config.general.hardwired_zero);
/// assert_eq!(config.memory.instruction_words, 256);
/// assert_eq!(config.memory.data_words, 64);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction and data memory sizes
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Capacity`] for unusable memory sizes.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that both memories are non-empty and that every instruction
    /// index is reachable by a J target.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Capacity`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let words = self.memory.instruction_words;
        if words == 0 || words > TARGET_LIMIT as usize {
            return Err(ConfigError::Capacity {
                field: "memory.instruction_words",
                value: words,
            });
        }
        if self.memory.data_words == 0 || i32::try_from(self.memory.data_words).is_err() {
            return Err(ConfigError::Capacity {
                field: "memory.data_words",
                value: self.memory.data_words,
            });
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction at `trace` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Treat R0 as hard-wired zero (reads yield 0, writes are discarded).
    /// Off by default: R0 is an ordinary register.
    #[serde(default)]
    pub hardwired_zero: bool,
}

/// Instruction and data memory capacities, in words.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Instruction memory capacity; longer programs are truncated on load
    #[serde(default = "MemoryConfig::default_instruction_words")]
    pub instruction_words: usize,

    /// Data memory capacity addressed by LW/SW
    #[serde(default = "MemoryConfig::default_data_words")]
    pub data_words: usize,
}

impl MemoryConfig {
    /// Returns the default instruction memory capacity.
    const fn default_instruction_words() -> usize {
        INSTRUCTION_MEMORY_WORDS
    }

    /// Returns the default data memory capacity.
    const fn default_data_words() -> usize {
        DATA_MEMORY_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            instruction_words: INSTRUCTION_MEMORY_WORDS,
            data_words: DATA_MEMORY_WORDS,
        }
    }
}
