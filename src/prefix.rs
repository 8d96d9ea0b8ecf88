//! Prefix matching between adjacent lines.
//!
//! Lengths are counted in `char`s (Unicode scalar values), never in bytes, so a
//! shared prefix can't end in the middle of a multi-byte code point.

/// Returns the number of leading characters `a` and `b` have in common.
///
/// Total over all inputs: the result is always in `0..=min(a, b)` measured in
/// characters.
///
/// ```
/// use front_coding::common_prefix_len;
///
/// assert_eq!(common_prefix_len("apple", "application"), 4);
/// assert_eq!(common_prefix_len("abc", "xyz"), 0);
/// assert_eq!(common_prefix_len("", "abc"), 0);
/// ```
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// Splits `current` into the length of its common prefix with `previous` and
/// the remaining suffix.
pub(crate) fn split_shared<'a>(current: &'a str, previous: &str) -> (usize, &'a str) {
    let mut shared = 0;
    let mut offset = 0;

    for (x, y) in current.chars().zip(previous.chars()) {
        if x != y {
            break;
        }
        shared += 1;
        offset += x.len_utf8();
    }

    (shared, &current[offset..])
}

/// Returns the first `chars` characters of `line`, or `None` if the line is
/// shorter than that.
pub(crate) fn char_prefix(line: &str, chars: usize) -> Option<&str> {
    line.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(line.len()))
        .nth(chars)
        .map(|end| &line[..end])
}
