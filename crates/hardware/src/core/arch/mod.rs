//! Architectural state components.
//!
//! This module contains the architectural register file.

/// General-Purpose Register file implementation.
pub mod gpr;
