//! # Unit Components
//!
//! This module serves as the central hub for the unit tests. It organizes
//! them by component: assembler, ISA, core, simulation driver, configuration
//! and statistics.





/// Unit tests for program loading and the run loop.
pub mod sim;
