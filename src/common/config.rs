//! Harness configuration
//!
//! The harness binary takes no command-line arguments; everything is
//! driven by environment variables with defaults matching the usual
//! project layout (`test/` for vectors, `out/` for build products).

use std::path::PathBuf;

/// Configuration for one harness invocation
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Root directory searched recursively for `.hex` test vectors
    pub test_dir: PathBuf,

    /// Directory holding the elaborated simulator and receiving
    /// per-test logs and waveforms
    pub out_dir: PathBuf,

    /// Name of the simulator executable under `out_dir`
    pub top: String,

    /// Accepted test-name prefixes; a candidate must start with one
    pub prefixes: Vec<String>,

    /// Simulation stop-time bound passed to the simulator
    pub stop_time: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            test_dir: PathBuf::from("test"),
            out_dir: PathBuf::from("out"),
            top: "tb_top".to_string(),
            prefixes: vec!["rv32ui-p-".to_string()],
            stop_time: "100us".to_string(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Keeps tests independent of the real process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let prefixes = match lookup("TEST_PREFIXES") {
            Some(raw) => raw.split_whitespace().map(str::to_string).collect(),
            None => defaults.prefixes,
        };

        Self {
            test_dir: lookup("TEST_DIR").map(PathBuf::from).unwrap_or(defaults.test_dir),
            out_dir: lookup("OUT_DIR").map(PathBuf::from).unwrap_or(defaults.out_dir),
            top: lookup("TOP").unwrap_or(defaults.top),
            prefixes,
            stop_time: lookup("TEST_STOP_TIME").unwrap_or(defaults.stop_time),
        }
    }

    /// Expected location of the elaborated simulator executable
    pub fn executable_path(&self) -> PathBuf {
        self.out_dir.join(&self.top)
    }
}
