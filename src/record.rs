use crate::error::{FrontCodingError, MalformedKind, Result};
use std::fmt;

/// One front-coded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedRecord {
    /// A line stored verbatim. Only the first line of a corpus is encoded this way.
    Literal(String),

    /// A line stored as the number of leading characters it shares with the
    /// previous line, plus whatever follows them.
    Delta { prefix_len: usize, suffix: String },
}

impl EncodedRecord {
    /// Parses a record from its wire form.
    ///
    /// The first record (`index == 0`) is always a literal. Every other record
    /// must look like `<digits> <suffix>`; only the first space delimits, so the
    /// suffix may contain spaces of its own.
    pub fn parse(index: usize, line: &str) -> Result<Self> {
        if index == 0 {
            return Ok(EncodedRecord::Literal(line.to_string()));
        }

        let (token, suffix) = line
            .split_once(' ')
            .ok_or_else(|| FrontCodingError::malformed(index, MalformedKind::MissingDelimiter))?;

        let prefix_len = token
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| token.parse::<usize>().ok())
            .flatten()
            .ok_or_else(|| {
                FrontCodingError::malformed(
                    index,
                    MalformedKind::InvalidPrefixLength {
                        token: token.to_string(),
                    },
                )
            })?;

        Ok(EncodedRecord::Delta {
            prefix_len,
            suffix: suffix.to_string(),
        })
    }
}

impl fmt::Display for EncodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodedRecord::Literal(line) => f.write_str(line),
            EncodedRecord::Delta { prefix_len, suffix } => write!(f, "{} {}", prefix_len, suffix),
        }
    }
}

/// An ordered sequence of records, one per original line.
///
/// `Display` produces the newline-joined wire text without a trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedCorpus {
    records: Vec<EncodedRecord>,
}

impl EncodedCorpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses wire text into records.
    ///
    /// Lines are split the same way `compress` splits its input (see the crate
    /// docs). Fails on the first record that isn't well formed.
    pub fn parse(text: &str) -> Result<Self> {
        let records = text
            .lines()
            .enumerate()
            .map(|(index, line)| EncodedRecord::parse(index, line))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { records })
    }

    pub(crate) fn push(&mut self, record: EncodedRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[EncodedRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<EncodedRecord> {
        self.records
    }

    /// Returns the number of records (equal to the number of encoded lines).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<EncodedRecord>> for EncodedCorpus {
    fn from(records: Vec<EncodedRecord>) -> Self {
        Self { records }
    }
}

impl fmt::Display for EncodedCorpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, record) in self.records.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
