/// Size comparison between a corpus and its front-coded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of lines in the corpus
    pub lines: usize,
    /// Size of the original text in bytes
    pub original_bytes: usize,
    /// Size of the encoded text in bytes
    pub compressed_bytes: usize,
}

impl CompressionStats {
    /// Measures an original corpus against its compressed text.
    pub fn measure(original: &str, compressed: &str) -> Self {
        Self {
            lines: original.lines().count(),
            original_bytes: original.len(),
            compressed_bytes: compressed.len(),
        }
    }

    /// Returns the compressed size as a percentage of the original size.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            (self.compressed_bytes as f64 / self.original_bytes as f64) * 100.0
        }
    }

    /// Bytes saved by compression. Negative when the encoding grew the text.
    pub fn bytes_saved(&self) -> isize {
        self.original_bytes as isize - self.compressed_bytes as isize
    }
}
