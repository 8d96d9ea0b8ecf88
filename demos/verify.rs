use front_coding::{verify_round_trip, Verification};
use std::env;
use std::fs;

/// Compresses a word list, decompresses it again and reports whether the
/// round trip reproduced the file.
///
/// Usage: cargo run --example verify [filename]
///
/// Defaults to `demos/words.txt`. Set `RUST_LOG=debug` (or `trace`) to see the
/// library's diagnostics.
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [filename]", args[0]);
        std::process::exit(1);
    }

    let filename = args
        .get(1)
        .map(String::as_str)
        .unwrap_or(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/words.txt"));

    let words = fs::read_to_string(filename).unwrap_or_else(|err| {
        eprintln!("Cannot read \"{}\": {}", filename, err);
        std::process::exit(1);
    });

    let verification = verify_round_trip(&words).unwrap_or_else(|err| {
        eprintln!("Compressed output failed to decode: {}", err);
        std::process::exit(1);
    });

    match verification {
        Verification::Consistent(stats) => {
            println!("=== Statistics ===");
            println!("Lines: {}", stats.lines);
            println!("Original length: {}", stats.original_bytes);
            println!("Compressed length: {}", stats.compressed_bytes);
            println!("Bytes saved: {}", stats.bytes_saved());
            println!("Compression ratio: {:.2}%", stats.compression_ratio());
        }
        Verification::Inconsistent(inconsistency) => {
            eprintln!("Compression or decompression is broken!");
            eprintln!("{}", inconsistency);
            std::process::exit(1);
        }
    }
}
