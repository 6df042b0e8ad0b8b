//! Word-boundary run matcher for the kotoba segmenter.
//!
//! Standalone rule engine: given a window of text and a cursor position,
//! recognizes the longest run at that position and its kind, per the
//! UAX#29 word-boundary rules plus the search-oriented extensions
//! (Complex_Context runs, Han/Hiragana singletons). No I/O and no
//! allocation; the token stream driver lives in the `kotoba` crate.

mod matcher;
mod span;

pub use matcher::{Matcher, Run, RunKind, Scan};
pub use span::{Pos, Span};
