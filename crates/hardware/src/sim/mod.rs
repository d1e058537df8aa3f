//! Simulation utilities and program loading.
//!
//! Provides program installation into instruction memory and a small driver
//! that assembles, loads and runs programs on a [`crate::core::Cpu`].

/// Program installation with truncation reporting.
pub mod loader;

/// Assemble-and-run convenience driver.
pub mod simulator;

pub use loader::LoadReport;
pub use simulator::{RunSummary, Simulator, StopReason};
