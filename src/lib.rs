//! # Front Coding - Incremental Prefix Compression
//!
//! Compresses ordered lists of strings where neighbouring entries share long
//! prefixes (sorted word lists, dictionary terms, index keys).
//!
//! The first line is stored as is. Every later line is stored as the number of
//! leading characters it shares with the line before it, a single space, and
//! the rest of the line:
//!
//! ```text
//! apple          apple
//! application -> 4 ication
//! banana         0 banana
//! ```
//!
//! ## Example
//!
//! ```
//! use front_coding::{compress, decompress};
//!
//! let words = "apple\napplication\nbanana";
//! let compressed = compress(words);
//! assert_eq!(compressed, "apple\n4 ication\n0 banana");
//!
//! // Reconstructs the original list
//! assert_eq!(decompress(&compressed).unwrap(), words);
//! ```
//!
//! ## Line splitting
//!
//! Both directions split text the same way: lines end at `\n`, a `\r` right
//! before the `\n` belongs to the terminator, and a final terminator does not
//! start an extra empty line. Output is always joined with `\n` and has no
//! trailing newline. Empty lines inside a corpus round-trip exactly; a trailing
//! empty line does not.
//!
//! Prefix lengths count `char`s, not bytes.
//!
//! ## Diagnostics
//!
//! Compression and decompression log through the [`log`] facade (`debug` for
//! sizes, `trace` for full text). Nothing they return depends on whether a
//! logger is installed.

mod decoder;
mod encoder;
mod error;
mod prefix;
mod record;
mod stats;
mod verify;


pub use decoder::{decode_records, decompress, decompress_option};
pub use encoder::{compress, compress_option, encode_lines};
pub use error::{FrontCodingError, MalformedKind, Result};
pub use prefix::common_prefix_len;
pub use record::{EncodedCorpus, EncodedRecord};
pub use stats::CompressionStats;
pub use verify::{compare, verify_round_trip, Inconsistency, Verification};
