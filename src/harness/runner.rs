//! Sequential run loop and log classification
//!
//! Executes the simulator once per candidate, captures the merged
//! stdout/stderr stream to a per-test log file, then classifies the
//! run by scanning the log text for the `PASS` marker. Runs are
//! strictly sequential; log/waveform names derive from the candidate
//! name, so output files never collide.

use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Stdio};

use colored::Colorize;

use crate::common::config::HarnessConfig;
use crate::common::{Error, Result};

use super::discover;
use super::invocation::{RunInvocation, RunResult, Summary};

/// Marker whose presence anywhere in the log classifies a run as pass
const PASS_MARKER: &str = "PASS";

/// Capability to execute one simulator invocation.
///
/// The production implementation spawns the real executable; tests
/// substitute a fake that writes canned logs. Implementations must
/// leave the merged simulator output at `log_path` and block until
/// the run finishes. A non-zero simulator exit status is not an
/// error; failure to launch at all is.
pub trait SimulatorExec {
    fn execute(&self, invocation: &RunInvocation, log_path: &Path) -> Result<()>;
}

/// Runs the simulator as a blocking child process
pub struct SubprocessExec;

impl SimulatorExec for SubprocessExec {
    fn execute(&self, invocation: &RunInvocation, log_path: &Path) -> Result<()> {
        let log = File::create(log_path)?;
        let log_err = log.try_clone()?;

        tracing::debug!(
            executable = %invocation.executable.display(),
            args = ?invocation.to_args(),
            "spawning simulator"
        );

        // stdout and stderr share the log file handle so the streams
        // interleave in the log the way the simulator emitted them.
        let status = Command::new(&invocation.executable)
            .args(invocation.to_args())
            .stdin(Stdio::null())
            .stdout(Stdio::from(log))
            .stderr(Stdio::from(log_err))
            .status()
            .map_err(|e| Error::launch_failed(&invocation.executable, &e))?;

        tracing::debug!(code = ?status.code(), "simulator exited");
        Ok(())
    }
}

/// Pass iff the log text contains the literal marker, case-sensitive
/// and unanchored. A log with neither marker nor output classifies as
/// fail; there is no inconclusive state.
fn classify(log_text: &str) -> bool {
    log_text.contains(PASS_MARKER)
}

/// Discover, filter, run, and classify every matching test vector.
///
/// Returns the accumulated summary; the caller decides the process
/// exit status from it. Fatal preconditions (nothing discovered,
/// nothing matched, simulator missing or unlaunchable) surface as
/// errors before or during the loop and produce no partial summary.
pub fn run_all(config: &HarnessConfig, exec: &dyn SimulatorExec) -> Result<Summary> {
    let hex_files = discover::collect_hex_files(&config.test_dir)?;
    let candidates = discover::filter_by_prefix(hex_files, &config.prefixes)?;

    let executable = config.executable_path();
    if !executable.exists() {
        return Err(Error::ExecutableMissing(executable.display().to_string()));
    }

    fs::create_dir_all(&config.out_dir)?;

    let mut summary = Summary::default();

    for candidate in &candidates {
        println!("==> {}", candidate.name);

        let log_path = config.out_dir.join(format!("{}.log", candidate.name));
        let vcd_path = config.out_dir.join(format!("{}.vcd", candidate.name));

        let invocation = RunInvocation {
            executable: executable.clone(),
            stop_time: config.stop_time.clone(),
            vcd_path: vcd_path.clone(),
            mem_init_file: candidate.path.clone(),
            test_mode: true,
        };

        exec.execute(&invocation, &log_path)?;

        // Tolerate stray bytes in the log rather than aborting the run.
        let raw = fs::read(&log_path)?;
        let passed = classify(&String::from_utf8_lossy(&raw));

        if passed {
            println!("{} {}", PASS_MARKER.green().bold(), candidate.name);
        } else {
            println!("{} {}", "FAIL".red().bold(), candidate.name);
        }

        summary.record(&RunResult {
            name: candidate.name.clone(),
            log_path,
            vcd_path,
            passed,
        });
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Writes a canned log per invocation and records the order seen
    struct FakeExec {
        logs: RefCell<Vec<(String, &'static str)>>,
        seen: RefCell<Vec<PathBuf>>,
    }

    impl FakeExec {
        fn new(logs: Vec<(String, &'static str)>) -> Self {
            Self {
                logs: RefCell::new(logs),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl SimulatorExec for FakeExec {
        fn execute(&self, invocation: &RunInvocation, log_path: &Path) -> Result<()> {
            self.seen.borrow_mut().push(invocation.mem_init_file.clone());

            let name = invocation
                .mem_init_file
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned();
            let logs = self.logs.borrow();
            let (_, content) = logs
                .iter()
                .find(|(n, _)| *n == name)
                .expect("unexpected candidate");
            fs::write(log_path, content)?;
            Ok(())
        }
    }

    fn fixture(names: &[&str]) -> (tempfile::TempDir, HarnessConfig) {
        let dir = tempdir().unwrap();
        let test_dir = dir.path().join("test");
        let out_dir = dir.path().join("out");
        fs::create_dir_all(&test_dir).unwrap();
        fs::create_dir_all(&out_dir).unwrap();
        fs::write(out_dir.join("tb_top"), b"").unwrap();
        for name in names {
            fs::write(test_dir.join(name), b"00000000\n").unwrap();
        }

        let config = HarnessConfig {
            test_dir,
            out_dir,
            ..HarnessConfig::default()
        };
        (dir, config)
    }

    #[test]
    fn test_classify_requires_exact_substring() {
        assert!(classify("test finished: PASS\n"));
        assert!(classify("xxPASSxx"));
        assert!(!classify(""));
        assert!(!classify("pass"));
        assert!(!classify("FAILURE: test did not PAS S"));
        assert!(!classify("FAIL"));
    }

    #[test]
    fn test_loop_classifies_and_aggregates() {
        let (_dir, config) = fixture(&["rv32ui-p-add.hex", "rv32ui-p-sub.hex"]);
        let exec = FakeExec::new(vec![
            ("rv32ui-p-add.hex".to_string(), "cycle 42\nPASS\n"),
            ("rv32ui-p-sub.hex".to_string(), "assertion failed\n"),
        ]);

        let summary = run_all(&config, &exec).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.failed_names, vec!["rv32ui-p-sub.hex"]);

        // Both logs were written under the output directory.
        assert!(config.out_dir.join("rv32ui-p-add.hex.log").exists());
        assert!(config.out_dir.join("rv32ui-p-sub.hex.log").exists());
    }

    #[test]
    fn test_missing_executable_is_fatal_before_any_run() {
        let (_dir, config) = fixture(&["rv32ui-p-add.hex"]);
        fs::remove_file(config.executable_path()).unwrap();

        let exec = FakeExec::new(vec![]);
        match run_all(&config, &exec) {
            Err(Error::ExecutableMissing(_)) => {}
            other => panic!("expected ExecutableMissing, got {other:?}"),
        }
        assert!(exec.seen.borrow().is_empty());
        assert!(!config.out_dir.join("rv32ui-p-add.hex.log").exists());
    }

    #[test]
    fn test_runs_follow_sorted_candidate_order() {
        let (_dir, config) = fixture(&["rv32ui-p-sub.hex", "rv32ui-p-add.hex"]);
        let exec = FakeExec::new(vec![
            ("rv32ui-p-add.hex".to_string(), "PASS"),
            ("rv32ui-p-sub.hex".to_string(), "PASS"),
        ]);

        let summary = run_all(&config, &exec).unwrap();
        assert!(summary.all_passed());

        let seen = exec.seen.borrow();
        let names: Vec<_> = seen
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["rv32ui-p-add.hex", "rv32ui-p-sub.hex"]);
    }

    #[test]
    fn test_launch_failure_aborts_loop() {
        struct NeverLaunches;
        impl SimulatorExec for NeverLaunches {
            fn execute(&self, invocation: &RunInvocation, _log_path: &Path) -> Result<()> {
                Err(Error::launch_failed(
                    &invocation.executable,
                    &std::io::Error::from(std::io::ErrorKind::NotFound),
                ))
            }
        }

        let (_dir, config) = fixture(&["rv32ui-p-add.hex", "rv32ui-p-sub.hex"]);
        match run_all(&config, &NeverLaunches) {
            Err(Error::ExecutableLaunchFailed { .. }) => {}
            other => panic!("expected ExecutableLaunchFailed, got {other:?}"),
        }
    }
}
