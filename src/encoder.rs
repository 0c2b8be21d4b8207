//! Binary-to-hex memory-image encoder
//!
//! Turns a raw binary file into the textual format the simulator's
//! memory-initialization generic consumes: one fixed-width line per
//! memory row, two lowercase hex digits per byte, bytes reversed
//! within the row (little-endian word packing). A short final row is
//! zero-extended, so its padding renders as leading `00` pairs.

use std::fmt::Write as _;
use std::path::Path;

use crate::common::{Error, Result};

/// Encode a byte sequence into fixed-width hex rows.
///
/// Row `i` covers the `i`-th chunk of `bytes_per_line` source bytes;
/// within a row the chunk appears in reverse byte order. The row count
/// is `ceil(bytes.len() / bytes_per_line)`; empty input yields no rows.
pub fn encode(bytes: &[u8], bytes_per_line: usize) -> Result<Vec<String>> {
    if bytes_per_line == 0 {
        return Err(Error::InvalidConfiguration(
            "bytes per line must be a positive integer".to_string(),
        ));
    }

    let mut rows = Vec::with_capacity(bytes.len().div_ceil(bytes_per_line));

    for chunk in bytes.chunks(bytes_per_line) {
        let mut row = String::with_capacity(bytes_per_line * 2);

        // Zero-extension of a short final chunk lands at the high end
        // of the row once the byte order is reversed.
        for _ in chunk.len()..bytes_per_line {
            row.push_str("00");
        }
        for byte in chunk.iter().rev() {
            // Writing to a String cannot fail
            let _ = write!(row, "{byte:02x}");
        }

        rows.push(row);
    }

    Ok(rows)
}

/// Read a binary file in full and encode it.
pub fn encode_file(path: &Path, bytes_per_line: usize) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| Error::input_not_found(path, &e))?;
    encode(&bytes, bytes_per_line)
}
