//! Test harness
//!
//! Discovers hex test vectors, runs the simulator once per candidate,
//! classifies each run by the `PASS` marker in its captured log, and
//! aggregates a summary. Process execution sits behind the
//! [`SimulatorExec`] trait so the loop can be exercised without a real
//! simulator binary.

pub mod discover;
pub mod invocation;
pub mod runner;

pub use discover::TestCandidate;
pub use invocation::{RunInvocation, RunResult, Summary};
pub use runner::{run_all, SimulatorExec, SubprocessExec};
