//! Code point classification over the pinned property snapshot.
//!
//! Two independent lookups per scalar: the Word_Break property class and
//! the script/line-break extension class. They are separate because
//! South-East-Asian combining marks carry both `WordBreak::Extend` and
//! `ScriptClass::ComplexContext`, and the boundary rules consult the two
//! attributes at different points.
//!
//! The per-value range groups from [`tables`](crate::tables) are merged
//! and sorted once, on first use, into a single binary-searchable table
//! shared process-wide.

use std::sync::OnceLock;

use crate::tables;

/// Word_Break property class of a code point (Unicode 6.0 snapshot).
///
/// Values not listed in the snapshot resolve to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WordBreak {
    /// No word-break behavior of its own.
    Other,
    /// Alphabetic letters and letter-like scalars.
    ALetter,
    /// Decimal digits and numeric separators that form number runs.
    Numeric,
    /// Katakana script plus the shared kana marks.
    Katakana,
    /// Joins letters when surrounded by them (e.g. `:` `·`).
    MidLetter,
    /// Joins numerics when surrounded by them (e.g. `,` `;`).
    MidNum,
    /// Joins both letters and numerics (e.g. `'` `.`).
    MidNumLet,
    /// Connector punctuation that glues runs together (e.g. `_`).
    ExtendNumLet,
    /// Combining marks absorbed into the preceding scalar (WB4).
    Extend,
    /// Invisible format controls absorbed into the preceding scalar (WB4).
    Format,
    /// Carriage return.
    Cr,
    /// Line feed.
    Lf,
    /// Other mandatory-break controls (VT, FF, NEL, LS, PS).
    Newline,
}

/// Script/line-break extension class of a code point.
///
/// Covers the three classes the segmenter treats specially beyond plain
/// UAX#29: Han ideograph singletons, Hiragana singletons, and
/// Complex_Context (Line_Break=SA) runs kept whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ScriptClass {
    /// No special script handling.
    Other,
    /// Han script (ideographs, radicals, Han-script marks).
    Han,
    /// Hiragana script.
    Hiragana,
    /// Line_Break=Complex_Context: Thai, Lao, Myanmar, Khmer and kin.
    ComplexContext,
}

/// Combined classification of one code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharClass {
    /// Word_Break property class.
    pub word: WordBreak,
    /// Script/line-break extension class.
    pub script: ScriptClass,
}

/// Merge per-value range groups into one table sorted by range start.
///
/// The groups come straight from the snapshot transcription; sorting here
/// (instead of by hand in the data file) keeps the transcription diffable
/// against the UCD source ordering.
fn merge<T: Copy>(groups: &[(&[(u32, u32)], T)]) -> Vec<(u32, u32, T)> {
    let mut table: Vec<(u32, u32, T)> = groups
        .iter()
        .flat_map(|&(ranges, value)| ranges.iter().map(move |&(lo, hi)| (lo, hi, value)))
        .collect();
    table.sort_unstable_by_key(|&(lo, _, _)| lo);
    debug_assert!(
        table.windows(2).all(|w| w[0].1 < w[1].0),
        "snapshot ranges must be disjoint"
    );
    table
}

fn word_table() -> &'static [(u32, u32, WordBreak)] {
    static TABLE: OnceLock<Vec<(u32, u32, WordBreak)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        merge(&[
            (tables::CR, WordBreak::Cr),
            (tables::LF, WordBreak::Lf),
            (tables::NEWLINE, WordBreak::Newline),
            (tables::FORMAT, WordBreak::Format),
            (tables::EXTEND, WordBreak::Extend),
            (tables::ALETTER, WordBreak::ALetter),
            (tables::NUMERIC, WordBreak::Numeric),
            (tables::KATAKANA, WordBreak::Katakana),
            (tables::MID_LETTER, WordBreak::MidLetter),
            (tables::MID_NUM, WordBreak::MidNum),
            (tables::MID_NUM_LET, WordBreak::MidNumLet),
            (tables::EXTEND_NUM_LET, WordBreak::ExtendNumLet),
        ])
    })
}

fn script_table() -> &'static [(u32, u32, ScriptClass)] {
    static TABLE: OnceLock<Vec<(u32, u32, ScriptClass)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        merge(&[
            (tables::HAN, ScriptClass::Han),
            (tables::HIRAGANA, ScriptClass::Hiragana),
            (tables::COMPLEX_CONTEXT, ScriptClass::ComplexContext),
        ])
    })
}

/// Binary search for the range containing `cp`.
fn lookup<T: Copy>(table: &[(u32, u32, T)], cp: u32) -> Option<T> {
    let idx = table.partition_point(|&(lo, _, _)| lo <= cp);
    if idx == 0 {
        return None;
    }
    let (lo, hi, value) = table[idx - 1];
    (cp >= lo && cp <= hi).then_some(value)
}

/// Returns the Word_Break class of `c` under the pinned snapshot.
///
/// Total over all Unicode scalar values; unmapped scalars are
/// [`WordBreak::Other`].
#[inline]
pub fn word_break(c: char) -> WordBreak {
    lookup(word_table(), c as u32).unwrap_or(WordBreak::Other)
}

/// Returns the script/line-break extension class of `c`.
///
/// Total over all Unicode scalar values; unmapped scalars are
/// [`ScriptClass::Other`].
#[inline]
pub fn script_class(c: char) -> ScriptClass {
    lookup(script_table(), c as u32).unwrap_or(ScriptClass::Other)
}

/// Classify `c` on both attributes at once.
#[inline]
pub fn classify(c: char) -> CharClass {
    CharClass {
        word: word_break(c),
        script: script_class(c),
    }
}
