use thiserror::Error;

/// Errors produced while parsing or decoding front-coded text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontCodingError {
    /// A record could not be turned back into a line.
    ///
    /// `index` is the zero-based position of the record in the encoded corpus.
    #[error("malformed record {index}: {kind}")]
    MalformedRecord { index: usize, kind: MalformedKind },
}

/// What exactly was wrong with a malformed record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedKind {
    #[error("missing space after prefix length")]
    MissingDelimiter,

    #[error("prefix length {token:?} is not a non-negative integer")]
    InvalidPrefixLength { token: String },

    #[error("first record must be stored verbatim, found a prefix length")]
    LeadingDelta,

    #[error("only the first record may be stored verbatim")]
    MisplacedLiteral,

    #[error("prefix length {prefix_len} exceeds previous line length {previous_len}")]
    PrefixOutOfBounds {
        prefix_len: usize,
        previous_len: usize,
    },
}

impl FrontCodingError {
    pub(crate) fn malformed(index: usize, kind: MalformedKind) -> Self {
        FrontCodingError::MalformedRecord { index, kind }
    }
}

pub type Result<T> = std::result::Result<T, FrontCodingError>;
