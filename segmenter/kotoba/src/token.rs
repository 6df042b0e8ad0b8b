//! Emitted tokens and their category tags.

use std::fmt;

use kotoba_core::{RunKind, Span};

/// Category of an emitted token. Closed set; assignment is deterministic
/// given the pinned property snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Word run of letters, numerics, and katakana.
    Word,
    /// Pure number run.
    Numeric,
    /// Complex_Context script run kept whole.
    SouthEastAsian,
    /// Single Han ideograph.
    Ideographic,
    /// Single Hiragana scalar.
    Hiragana,
}

impl TokenKind {
    /// Fixed category tag consumed by downstream token pipelines.
    pub const fn tag(self) -> &'static str {
        match self {
            TokenKind::Word => "<ALPHANUM>",
            TokenKind::Numeric => "<NUM>",
            TokenKind::SouthEastAsian => "<SOUTHEAST_ASIAN>",
            TokenKind::Ideographic => "<IDEOGRAPHIC>",
            TokenKind::Hiragana => "<HIRAGANA>",
        }
    }

    /// Map a matcher run kind; gap runs are never emitted.
    pub(crate) fn from_run(kind: RunKind) -> Option<TokenKind> {
        match kind {
            RunKind::Word => Some(TokenKind::Word),
            RunKind::Numeric => Some(TokenKind::Numeric),
            RunKind::SouthEastAsian => Some(TokenKind::SouthEastAsian),
            RunKind::Ideographic => Some(TokenKind::Ideographic),
            RunKind::Hiragana => Some(TokenKind::Hiragana),
            RunKind::Other => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One emitted token.
///
/// Borrows the tokenizer's window: the token is valid until the next
/// `advance` or `reset` call, which the borrow checker enforces. Callers
/// that need to keep a token past that point copy the text out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The matched span's exact characters.
    pub text: &'a str,
    /// Token category.
    pub kind: TokenKind,
    /// Offsets in the original character coordinate space (after offset
    /// correction).
    pub span: Span,
    /// 1 plus the number of overlong runs dropped since the previous
    /// emitted token.
    pub position_increment: u32,
}
