use crate::error::{FrontCodingError, MalformedKind, Result};
use crate::prefix::char_prefix;
use crate::record::{EncodedCorpus, EncodedRecord};

/// Rebuilds the original lines from front-coded records.
///
/// The first record must be a literal and every later record a delta, each
/// applied to the line reconstructed just before it. Decoding is all or
/// nothing: the first misplaced record or out-of-bounds prefix length fails
/// the whole call.
pub fn decode_records(encoded: &EncodedCorpus) -> Result<Vec<String>> {
    let mut lines: Vec<String> = Vec::with_capacity(encoded.len());

    for (index, record) in encoded.records().iter().enumerate() {
        let line = match (lines.last(), record) {
            (None, EncodedRecord::Literal(line)) => line.clone(),
            (None, EncodedRecord::Delta { .. }) => {
                return Err(FrontCodingError::malformed(index, MalformedKind::LeadingDelta));
            }
            (Some(_), EncodedRecord::Literal(_)) => {
                return Err(FrontCodingError::malformed(index, MalformedKind::MisplacedLiteral));
            }
            (Some(previous), EncodedRecord::Delta { prefix_len, suffix }) => {
                let prefix = char_prefix(previous, *prefix_len).ok_or_else(|| {
                    FrontCodingError::malformed(
                        index,
                        MalformedKind::PrefixOutOfBounds {
                            prefix_len: *prefix_len,
                            previous_len: previous.chars().count(),
                        },
                    )
                })?;

                let mut line = String::with_capacity(prefix.len() + suffix.len());
                line.push_str(prefix);
                line.push_str(suffix);
                line
            }
        };
        lines.push(line);
    }

    Ok(lines)
}

/// Decompresses front-coded wire text produced by [`compress`](crate::compress).
///
/// ```
/// use front_coding::decompress;
///
/// let lines = decompress("apple\n4 ication\n0 banana").unwrap();
/// assert_eq!(lines, "apple\napplication\nbanana");
///
/// assert!(decompress("apple\nNOTANUMBER suffix").is_err());
/// ```
pub fn decompress(encoded: &str) -> Result<String> {
    log::trace!("decompress input:\n{}", encoded);

    if encoded.is_empty() {
        return Ok(String::new());
    }

    let records = EncodedCorpus::parse(encoded)
        .and_then(|corpus| decode_records(&corpus))
        .inspect_err(|err| log::warn!("rejecting encoded corpus: {}", err))?;
    let output = records.join("\n");

    log::debug!(
        "decompressed {} lines: {} -> {} bytes",
        records.len(),
        encoded.len(),
        output.len()
    );
    log::trace!("decompress output:\n{}", output);

    Ok(output)
}

/// [`decompress`] for input that may be absent. `None` passes straight through.
pub fn decompress_option(encoded: Option<&str>) -> Result<Option<String>> {
    encoded.map(decompress).transpose()
}
