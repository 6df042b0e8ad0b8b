//! Pinned Unicode property snapshot for the kotoba segmenter.
//!
//! Resolves a code point to its Word_Break property class and its
//! script/line-break extension class (Han, Hiragana, Complex_Context),
//! from a committed snapshot of the Unicode Character Database. The
//! boundary rules live in `kotoba_core`; this crate is data only, so the
//! snapshot version can be upgraded independently of the matching logic.
//!
//! The tables are immutable after first load and shared process-wide; no
//! locking is needed on the lookup path.

mod classify;
mod tables;

pub use classify::{classify, script_class, word_break, CharClass, ScriptClass, WordBreak};

/// The [Unicode version](https://www.unicode.org/versions/) this
/// snapshot is pinned to. Upgrading is a deliberate migration: replace
/// `tables.rs` against a newer UCD drop, bump this constant, and re-run
/// the structural tests.
pub const UNICODE_VERSION: (u8, u8, u8) = (6, 0, 0);
