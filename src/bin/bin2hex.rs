//! Binary-to-hex memory-image converter
//!
//! Reads a raw binary file and prints it as fixed-width hex rows on
//! stdout, ready for the simulator's MEM_INIT_FILE generic. Bad or
//! missing arguments print usage without signalling failure, so build
//! scripts probing the tool do not trip on it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use sim_harness::encoder;

#[derive(Parser)]
#[command(name = "bin2hex", about = "Convert a binary image to hex memory-init rows")]
struct Cli {
    /// Number of bytes packed into each output row
    bytes_per_line: i64,

    /// Binary file to encode
    filename: PathBuf,
}

fn print_usage() {
    let _ = Cli::command().print_help();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
    };

    if cli.bytes_per_line <= 0 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match encoder::encode_file(&cli.filename, cli.bytes_per_line as usize) {
        Ok(rows) => {
            println!("{}", rows.join("\n"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
