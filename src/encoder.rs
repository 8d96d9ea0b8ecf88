use crate::prefix::split_shared;
use crate::record::{EncodedCorpus, EncodedRecord};

/// Front-codes an already split sequence of lines.
///
/// The first line becomes a [`EncodedRecord::Literal`]. Every later line is
/// compared against the original line before it (never a decoded value) and
/// becomes a [`EncodedRecord::Delta`].
pub fn encode_lines<'a, I>(lines: I) -> EncodedCorpus
where
    I: IntoIterator<Item = &'a str>,
{
    let mut corpus = EncodedCorpus::new();
    let mut lines = lines.into_iter();

    let Some(first) = lines.next() else {
        return corpus;
    };
    corpus.push(EncodedRecord::Literal(first.to_string()));

    let mut previous = first;
    for line in lines {
        let (prefix_len, suffix) = split_shared(line, previous);
        corpus.push(EncodedRecord::Delta {
            prefix_len,
            suffix: suffix.to_string(),
        });
        previous = line;
    }

    corpus
}

/// Compresses a newline-separated corpus with front coding.
///
/// Returns the encoded wire text: the first line verbatim, then one
/// `"<prefix_len> <suffix>"` line per remaining input line. An empty corpus
/// compresses to an empty string.
///
/// ```
/// use front_coding::compress;
///
/// assert_eq!(compress("apple\napplication\nbanana"), "apple\n4 ication\n0 banana");
/// ```
pub fn compress(corpus: &str) -> String {
    log::trace!("compress input:\n{}", corpus);

    if corpus.is_empty() {
        return String::new();
    }

    let encoded = encode_lines(corpus.lines());
    let output = encoded.to_string();

    log::debug!(
        "compressed {} lines: {} -> {} bytes",
        encoded.len(),
        corpus.len(),
        output.len()
    );
    log::trace!("compress output:\n{}", output);

    output
}

/// [`compress`] for input that may be absent. `None` passes straight through.
pub fn compress_option(corpus: Option<&str>) -> Option<String> {
    corpus.map(compress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(
            compress("apple\napplication\nbanana"),
            "apple\n4 ication\n0 banana"
        );
    }

    #[test]
    fn test_empty_and_absent() {
        assert_eq!(compress(""), "");
        assert_eq!(compress_option(None), None);
        assert_eq!(compress_option(Some("")), Some(String::new()));
    }

    #[test]
    fn test_single_line() {
        assert_eq!(compress("abc"), "abc");
        assert_eq!(compress("abc\n"), "abc");
    }

    #[test]
    fn test_compares_against_original_line() {
        // "abd" shares 2 with "abc", and "abe" shares 2 with "abd"
        assert_eq!(compress("abc\nabd\nabe"), "abc\n2 d\n2 e");
    }

    #[test]
    fn test_duplicate_lines() {
        assert_eq!(compress("word\nword\nword"), "word\n4 \n4 ");
    }

    #[test]
    fn test_empty_lines_inside_corpus() {
        assert_eq!(compress("a\n\nab"), "a\n0 \n0 ab");
        assert_eq!(compress("\nb"), "\n0 b");
    }

    #[test]
    fn test_crlf_normalized() {
        assert_eq!(compress("apple\r\napplication\r\n"), "apple\n4 ication");
    }

    #[test]
    fn test_suffix_with_spaces() {
        assert_eq!(compress("new york\nnew york city"), "new york\n8  city");
    }

    #[test]
    fn test_encode_lines() {
        let encoded = encode_lines(["car", "cart", "carton", "dog"]);
        assert_eq!(encoded.len(), 4);
        assert_eq!(encoded.to_string(), "car\n3 t\n4 on\n0 dog");
    }

    #[test]
    fn test_encode_lines_empty() {
        assert!(encode_lines(std::iter::empty::<&str>()).is_empty());
    }
}
