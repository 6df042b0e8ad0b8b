//! kotoba — Unicode word segmentation for search pipelines.
//!
//! Classifies a stream of characters into typed word tokens per the
//! UAX#29 word-boundary rules, with the practical extensions search
//! engines rely on: Complex_Context scripts (Thai, Lao, Myanmar, Khmer
//! and kin) kept as whole runs, and Han/Hiragana scalars emitted as
//! singletons. Property data is a pinned Unicode snapshot
//! ([`UNICODE_VERSION`]), so segmentation is stable across environments.
//!
//! The driver is pull-based and reusable: bind an input with
//! [`Tokenizer::reset`], call [`Tokenizer::advance`] until it returns
//! `None`, then [`Tokenizer::finish`] for the final offset. Tokens that
//! exceed the configured maximum length are dropped, with the gap
//! reported through the next token's `position_increment`.
//!
//! ```
//! use kotoba::{StrSource, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.reset(StrSource::new("Wi-Fi 2.4GHz対応"));
//! while let Some(token) = tokenizer.advance()? {
//!     println!("{} {} {}", token.span, token.kind, token.text);
//! }
//! # Ok::<(), kotoba::SourceError>(())
//! ```

mod source;
mod token;
mod tokenizer;

pub use kotoba_core::Span;
pub use kotoba_unicode::UNICODE_VERSION;
pub use source::{SourceError, StrSource, TextSource};
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, DEFAULT_MAX_TOKEN_LEN, MAX_TOKEN_LEN_LIMIT};
