//! Simulator invocation configuration and run accounting

use std::path::PathBuf;

/// Backtrace severity passed to the simulator runtime
const BACKTRACE_SEVERITY: &str = "warning";

/// Stack-allocation ceiling for the simulator runtime
const MAX_STACK_ALLOC: u32 = 256;

/// Configuration for one simulator execution.
///
/// Built fresh per candidate and never reused; the memory image is
/// bound through the `MEM_INIT_FILE` generic and the testbench runs
/// with `TEST_MODE` enabled.
#[derive(Debug, Clone)]
pub struct RunInvocation {
    pub executable: PathBuf,
    pub stop_time: String,
    pub vcd_path: PathBuf,
    pub mem_init_file: PathBuf,
    pub test_mode: bool,
}

impl RunInvocation {
    /// Render the simulator command line for this invocation
    pub fn to_args(&self) -> Vec<String> {
        vec![
            format!("--backtrace-severity={BACKTRACE_SEVERITY}"),
            format!("--stop-time={}", self.stop_time),
            format!("--max-stack-alloc={MAX_STACK_ALLOC}"),
            format!("--vcd={}", self.vcd_path.display()),
            format!("-gMEM_INIT_FILE={}", self.mem_init_file.display()),
            format!("-gTEST_MODE={}", self.test_mode),
        ]
    }
}

/// Outcome of one classified run
#[derive(Debug)]
pub struct RunResult {
    pub name: String,
    pub log_path: PathBuf,
    pub vcd_path: PathBuf,
    pub passed: bool,
}

/// Accumulated totals for one harness invocation
#[derive(Debug, Default)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub failed_names: Vec<String>,
}

impl Summary {
    /// Fold one run result into the totals
    pub fn record(&mut self, result: &RunResult) {
        self.total += 1;
        if result.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
            self.failed_names.push(result.name.clone());
        }
    }

    /// True if every recorded run passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
