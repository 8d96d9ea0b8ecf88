//! Round-trip checking.
//!
//! Compression itself never reports a mismatch between a corpus and its decoded
//! form. This module compresses, decompresses and compares, and describes the
//! first difference it finds.

use crate::decoder::decompress;
use crate::encoder::compress;
use crate::error::Result;
use crate::stats::CompressionStats;
use std::fmt;

/// Outcome of [`verify_round_trip`].
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    /// The decoded text is byte-for-byte the original.
    Consistent(CompressionStats),
    /// The decoded text differs from the original.
    Inconsistent(Inconsistency),
}

impl Verification {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Verification::Consistent(_))
    }
}

/// The first difference between an original text and its decoded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    /// Line `line` (zero-based) differs.
    LineMismatch {
        line: usize,
        original: String,
        decoded: String,
    },
    /// Every shared line matches but one text has more lines.
    LineCount { original: usize, decoded: usize },
    /// Same lines, different terminators (CRLF, trailing newline).
    LineTerminators,
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::LineMismatch {
                line,
                original,
                decoded,
            } => write!(f, "line {}: {:?} != {:?}", line, original, decoded),
            Inconsistency::LineCount { original, decoded } => write!(
                f,
                "original has {} lines but decoded has {}",
                original, decoded
            ),
            Inconsistency::LineTerminators => {
                f.write_str("original and decoded differ only in line terminators")
            }
        }
    }
}

/// Compresses `original`, decompresses the result and compares the two.
///
/// Errors only if the compressed text fails to decode.
pub fn verify_round_trip(original: &str) -> Result<Verification> {
    let compressed = compress(original);
    let decoded = decompress(&compressed)?;

    let verification = match compare(original, &decoded) {
        None => Verification::Consistent(CompressionStats::measure(original, &compressed)),
        Some(inconsistency) => {
            log::debug!("round trip inconsistent: {}", inconsistency);
            Verification::Inconsistent(inconsistency)
        }
    };

    Ok(verification)
}

/// Describes the first difference between `original` and `decoded`, or returns
/// `None` when they are identical.
///
/// Lines are split on `\n`, `\r\n` or a lone `\r`, and trailing empty lines are
/// ignored; a difference that only shows up in the raw bytes is reported as
/// [`Inconsistency::LineTerminators`].
pub fn compare(original: &str, decoded: &str) -> Option<Inconsistency> {
    if original == decoded {
        return None;
    }

    let original_lines = split_terminated(original);
    let decoded_lines = split_terminated(decoded);

    let mismatch = original_lines
        .iter()
        .zip(&decoded_lines)
        .position(|(a, b)| a != b);
    if let Some(line) = mismatch {
        return Some(Inconsistency::LineMismatch {
            line,
            original: original_lines[line].clone(),
            decoded: decoded_lines[line].clone(),
        });
    }

    if original_lines.len() != decoded_lines.len() {
        return Some(Inconsistency::LineCount {
            original: original_lines.len(),
            decoded: decoded_lines.len(),
        });
    }

    Some(Inconsistency::LineTerminators)
}

fn split_terminated(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let mut lines: Vec<String> = normalized
        .split(['\n', '\r'])
        .map(str::to_string)
        .collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
