//! Test-vector discovery and prefix filtering

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

/// Extension recognized as a memory-image test vector
const HEX_EXTENSION: &str = "hex";

/// One test-vector file eligible to be run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCandidate {
    /// Path to the hex memory image
    pub path: PathBuf,
    /// File name, used for prefix filtering and log/waveform naming
    pub name: String,
}

impl TestCandidate {
    fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// Recursively collect all `.hex` files under `root`, sorted by path.
///
/// A missing root or an empty result is `NoTestsFound`; the harness
/// refuses to report success over zero discovered vectors.
pub fn collect_hex_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if root.is_dir() {
        walk(root, &mut files)?;
    }

    if files.is_empty() {
        return Err(Error::NoTestsFound(root.display().to_string()));
    }

    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, files)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(HEX_EXTENSION) {
            files.push(path);
        }
    }
    Ok(())
}

/// Keep files whose name starts with at least one accepted prefix.
///
/// Distinct from discovery failure: hex files existed, none were
/// selected, so the error names the prefixes that matched nothing.
pub fn filter_by_prefix(files: Vec<PathBuf>, prefixes: &[String]) -> Result<Vec<TestCandidate>> {
    let candidates: Vec<TestCandidate> = files
        .into_iter()
        .map(TestCandidate::new)
        .filter(|c| prefixes.iter().any(|p| c.name.starts_with(p.as_str())))
        .collect();

    if candidates.is_empty() {
        return Err(Error::NoTestsMatched(prefixes.join(" ")));
    }

    Ok(candidates)
}
