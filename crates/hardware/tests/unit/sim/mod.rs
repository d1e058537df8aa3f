/// Assemble-and-run driver.
pub mod simulator;
