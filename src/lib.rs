//! Test-run orchestration for an elaborated hardware simulator.
//!
//! This library drives a compiled simulator executable over a set of
//! hex test-vector files, captures each run's log, and classifies the
//! outcome by a textual marker. A companion encoder turns raw binary
//! images into the hex memory-initialization format the simulator loads.

pub mod common;
pub mod encoder;
pub mod harness;

// Re-export commonly used types for tests
pub use common::config::HarnessConfig;
pub use common::{Error, Result};
pub use harness::{RunInvocation, SimulatorExec, Summary};
