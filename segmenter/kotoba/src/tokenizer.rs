//! Pull-based token stream driver.
//!
//! Owns the scan state for one input at a time: the accumulated text
//! window, the cursor past the last consumed run, and the overlong-skip
//! counter. Single-threaded and non-reentrant; reuse across inputs goes
//! through [`Tokenizer::reset`], so instances can be pooled.
//!
//! The window accumulates the whole of one input and is recycled on
//! `reset`. That costs memory proportional to the input length, and buys
//! zero-copy `&str` tokens plus cheap position snapshots during
//! backtracking — the same trade the scan buffer in a batch lexer makes.

use kotoba_core::{Matcher, Pos, Scan, Span};

use crate::source::{SourceError, TextSource};
use crate::token::{Token, TokenKind};

/// Default maximum token length, in code points.
pub const DEFAULT_MAX_TOKEN_LEN: u32 = 255;

/// Upper bound accepted by [`Tokenizer::set_max_token_len`].
pub const MAX_TOKEN_LEN_LIMIT: u32 = 1024 * 1024;

/// Driver states. `Closed` until the first `reset`; `Exhausted` is
/// terminal for a given input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Closed,
    Ready,
    Exhausted,
}

type OffsetFn = Box<dyn Fn(u32) -> u32 + Send>;

/// Pull-based word segmenter over a [`TextSource`].
///
/// ```
/// use kotoba::{StrSource, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new();
/// tokenizer.reset(StrSource::new("Hello, 世界! 3.14"));
/// let mut seen = Vec::new();
/// while let Some(token) = tokenizer.advance()? {
///     seen.push((token.text.to_owned(), token.kind.tag()));
/// }
/// assert_eq!(seen, vec![
///     ("Hello".to_owned(), "<ALPHANUM>"),
///     ("世".to_owned(), "<IDEOGRAPHIC>"),
///     ("界".to_owned(), "<IDEOGRAPHIC>"),
///     ("3.14".to_owned(), "<NUM>"),
/// ]);
/// assert_eq!(tokenizer.finish(), 15);
/// # Ok::<(), kotoba::SourceError>(())
/// ```
pub struct Tokenizer<S> {
    source: Option<S>,
    /// Accumulated window of the current input.
    window: String,
    /// Cursor just past the last consumed run.
    cursor: Pos,
    /// The source has been drained for the current binding.
    at_end: bool,
    /// Overlong runs dropped since the last emitted token.
    skipped: u32,
    max_token_len: u32,
    offset_correction: Option<OffsetFn>,
    state: State,
}

impl<S: TextSource> Tokenizer<S> {
    /// Create an unbound tokenizer. Call [`reset`](Self::reset) to bind
    /// an input before advancing.
    pub fn new() -> Self {
        Self {
            source: None,
            window: String::new(),
            cursor: Pos::ORIGIN,
            at_end: false,
            skipped: 0,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            offset_correction: None,
            state: State::Closed,
        }
    }

    /// Bind a new input, discarding any state from the previous one.
    ///
    /// Valid in every state. The configured maximum token length and the
    /// offset correction survive — they are caller options, not per-input
    /// state.
    pub fn reset(&mut self, source: S) {
        tracing::trace!("tokenizer rebound to new input");
        self.source = Some(source);
        self.window.clear();
        self.cursor = Pos::ORIGIN;
        self.at_end = false;
        self.skipped = 0;
        self.state = State::Ready;
    }

    /// Produce the next token, or `Ok(None)` once the input is
    /// exhausted.
    ///
    /// Overlong runs are dropped silently; the next emitted token's
    /// `position_increment` accounts for them. A read failure from the
    /// source aborts this call and propagates unmodified.
    ///
    /// # Panics
    ///
    /// Panics if no input has ever been bound.
    pub fn advance(&mut self) -> Result<Option<Token<'_>>, SourceError> {
        assert!(
            self.state != State::Closed,
            "advance() on a tokenizer with no input bound; call reset() first"
        );
        if self.state == State::Exhausted {
            return Ok(None);
        }
        loop {
            let scan = Matcher::new(&self.window, self.at_end).run_at(self.cursor);
            match scan {
                Scan::NeedInput => self.fill()?,
                Scan::End => {
                    self.state = State::Exhausted;
                    return Ok(None);
                }
                Scan::Run(run) => {
                    let start = self.cursor;
                    self.cursor = run.end;
                    let Some(kind) = TokenKind::from_run(run.kind) else {
                        // Gap run: consumed, never emitted, no skip
                        // accounting.
                        continue;
                    };
                    let len = run.end.chars - start.chars;
                    if len > self.max_token_len {
                        self.skipped += 1;
                        tracing::debug!(
                            start = start.chars,
                            end = run.end.chars,
                            len,
                            max = self.max_token_len,
                            "dropping overlong run"
                        );
                        continue;
                    }
                    let span = Span::new(self.correct(start.chars), self.correct(run.end.chars));
                    let position_increment = 1 + self.skipped;
                    self.skipped = 0;
                    let text = &self.window[start.byte as usize..run.end.byte as usize];
                    return Ok(Some(Token {
                        text,
                        kind,
                        span,
                        position_increment,
                    }));
                }
            }
        }
    }

    /// Report the corrected end-of-input offset as a zero-width final
    /// position. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics unless the input has been exhausted.
    pub fn finish(&self) -> u32 {
        assert!(
            self.state == State::Exhausted,
            "finish() before the input is exhausted"
        );
        let offset = self.correct(self.cursor.chars);
        tracing::trace!(offset, "tokenizer finished");
        offset
    }

    /// The configured maximum token length, in code points.
    pub fn max_token_len(&self) -> u32 {
        self.max_token_len
    }

    /// Set the maximum token length. Runs longer than this are dropped
    /// with position-increment bookkeeping.
    ///
    /// # Panics
    ///
    /// Panics when `len` is zero or exceeds [`MAX_TOKEN_LEN_LIMIT`].
    pub fn set_max_token_len(&mut self, len: u32) {
        assert!(
            (1..=MAX_TOKEN_LEN_LIMIT).contains(&len),
            "max token length must be within 1..={MAX_TOKEN_LEN_LIMIT}, got {len}"
        );
        self.max_token_len = len;
    }

    /// Install the offset correction supplied by an upstream filtering
    /// stage. Applied to every emitted offset and to the [`finish`]
    /// offset; identity when unset.
    ///
    /// [`finish`]: Self::finish
    pub fn set_offset_correction(&mut self, f: impl Fn(u32) -> u32 + Send + 'static) {
        self.offset_correction = Some(Box::new(f));
    }

    fn correct(&self, raw: u32) -> u32 {
        match &self.offset_correction {
            Some(f) => f(raw),
            None => raw,
        }
    }

    /// Pull chunks until the window grows or the source reports end of
    /// input. Empty chunks are skipped so a pending probe always makes
    /// progress on retry.
    fn fill(&mut self) -> Result<(), SourceError> {
        let Some(source) = self.source.as_mut() else {
            self.at_end = true;
            return Ok(());
        };
        loop {
            match source.next_chunk()? {
                Some(chunk) if chunk.is_empty() => {}
                Some(chunk) => {
                    self.window.push_str(chunk);
                    return Ok(());
                }
                None => {
                    self.at_end = true;
                    return Ok(());
                }
            }
        }
    }
}

impl<S: TextSource> Default for Tokenizer<S> {
    fn default() -> Self {
        Self::new()
    }
}
