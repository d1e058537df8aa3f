//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Sentinel words, field layout, and memory capacities.
//! 2. **Error Handling:** Assembly, execution, and configuration error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for assembly, execution, and configuration.
pub mod error;

pub use constants::{EMPTY_WORD, HALT_WORD};
pub use error::{AsmError, ConfigError, ExecError};
