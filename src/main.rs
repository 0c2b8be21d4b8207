//! Simulation test harness
//!
//! Runs every matching hex test vector through the elaborated
//! simulator and reports per-test and aggregate results. Takes no
//! arguments; configuration comes entirely from the environment
//! (TEST_DIR, OUT_DIR, TOP, TEST_PREFIXES, TEST_STOP_TIME).

use colored::Colorize;
use sim_harness::common::logging;
use sim_harness::harness::{self, SubprocessExec};
use sim_harness::{HarnessConfig, Summary};

fn main() {
    logging::init_cli();

    let config = HarnessConfig::from_env();
    tracing::debug!(?config, "resolved harness configuration");

    match harness::run_all(&config, &SubprocessExec) {
        Ok(summary) => {
            print_report(&summary);
            if !summary.all_passed() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn print_report(summary: &Summary) {
    println!(
        "Total: {}, Pass: {}, Fail: {}",
        summary.total,
        summary.passed.to_string().green(),
        summary.failed.to_string().red()
    );

    if !summary.failed_names.is_empty() {
        println!("Failed: {}", summary.failed_names.join(", "));
    }
}
