//! Input seam for the tokenizer.
//!
//! The tokenizer pulls already-decoded text chunks through [`TextSource`];
//! decoding bytes is the caller's concern. Chunk boundaries are arbitrary
//! and never influence the token stream — the driver re-probes a pending
//! run after every refill.

use std::io;

use thiserror::Error;

/// Failure of the underlying input source.
///
/// The only genuine fault domain of the tokenizer: classification and
/// matching are total, so every other condition is either consumed
/// silently or a caller bug that panics.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying reader failed.
    #[error("input source read failed: {0}")]
    Io(#[from] io::Error),
}

/// Sequential pull source of already-decoded text.
pub trait TextSource {
    /// Pull the next chunk of text.
    ///
    /// `Ok(None)` signals end of input; the tokenizer will not call the
    /// source again for the current binding. Empty chunks are allowed
    /// and skipped.
    fn next_chunk(&mut self) -> Result<Option<&str>, SourceError>;
}

/// Borrowed in-memory source: yields the whole text as one chunk.
#[derive(Debug)]
pub struct StrSource<'a> {
    text: Option<&'a str>,
}

impl<'a> StrSource<'a> {
    /// Create a source over `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text: Some(text) }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl TextSource for StrSource<'_> {
    fn next_chunk(&mut self) -> Result<Option<&str>, SourceError> {
        Ok(self.text.take())
    }
}
