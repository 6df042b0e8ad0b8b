//! Longest-match word-boundary rule engine.
//!
//! Implements the UAX#29 word-boundary rules (WB4–WB13b) as a hand-built
//! greedy scan over classified scalars, extended with the search-oriented
//! rules: Complex_Context scripts kept as whole runs, and Han/Hiragana
//! scalars matched as singletons.
//!
//! Five rule families are tried at the cursor; each produces the longest
//! span it can match there, the longest overall wins, and family order
//! (numeric, word, south-east-asian, ideographic, hiragana) breaks length
//! ties. A scalar no family claims is consumed as a one-scalar
//! [`RunKind::Other`] run, which guarantees forward progress on any
//! input. Every "extended" unit absorbs trailing `Extend`/`Format` marks
//! so invisible scalars never split a boundary (WB4).
//!
//! The matcher scans a window that may be a prefix of the full input.
//! Whenever a probe touches the window end before the input is complete,
//! the result is [`Scan::NeedInput`]: the caller must extend the window
//! and retry the same start position. With `at_end` set the window is
//! authoritative and every call yields a run or [`Scan::End`].

use kotoba_unicode::{classify, CharClass, ScriptClass, WordBreak};

use crate::span::Pos;

/// Kind of run recognized at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunKind {
    /// Number run: numerics joined by mid-numeric punctuation and
    /// connectors.
    Numeric,
    /// Word run: letters, numerics, and katakana joined per WB5–WB13b.
    Word,
    /// Complex_Context run kept whole (Thai, Lao, Myanmar, Khmer, kin).
    SouthEastAsian,
    /// Single Han-script scalar.
    Ideographic,
    /// Single Hiragana scalar.
    Hiragana,
    /// Unclaimed scalar: whitespace, punctuation, controls. Consumed,
    /// never emitted.
    Other,
}

impl RunKind {
    /// Whether runs of this kind become tokens.
    #[inline]
    pub fn is_emittable(self) -> bool {
        self != RunKind::Other
    }
}

/// A recognized run: its kind and the position just past its last scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Rule family that produced the run.
    pub kind: RunKind,
    /// End position (exclusive).
    pub end: Pos,
}

/// Result of one matching step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// A run was recognized.
    Run(Run),
    /// The window ended mid-probe and more input could change the
    /// result. Extend the window and retry at the same start.
    NeedInput,
    /// The cursor is at the end of the complete input.
    End,
}

/// Greedy matcher over one window of input text.
///
/// Cheap to construct; the driver rebuilds one per `advance` step after
/// the window may have grown.
pub struct Matcher<'a> {
    window: &'a str,
    at_end: bool,
    /// Set when any probe ran past the window end. Meaningless once the
    /// window is final.
    touched_end: bool,
}

impl<'a> Matcher<'a> {
    /// Create a matcher over `window`. `at_end` marks the window as the
    /// complete remaining input.
    pub fn new(window: &'a str, at_end: bool) -> Self {
        Self {
            window,
            at_end,
            touched_end: false,
        }
    }

    /// Recognize the run starting at `start`.
    ///
    /// `start` must lie on a scalar boundary within the window; positions
    /// returned by earlier runs satisfy this.
    pub fn run_at(&mut self, start: Pos) -> Scan {
        debug_assert!((start.byte as usize) <= self.window.len());
        self.touched_end = false;

        let Some((first, _)) = self.peek(start) else {
            return if self.at_end { Scan::End } else { Scan::NeedInput };
        };

        // Longest candidate wins; earlier families win length ties.
        let candidates = [
            (RunKind::Numeric, self.numeric_run(start)),
            (RunKind::Word, self.word_run(start)),
            (RunKind::SouthEastAsian, self.complex_run(start)),
            (RunKind::Ideographic, self.singleton(start, ScriptClass::Han)),
            (
                RunKind::Hiragana,
                self.singleton(start, ScriptClass::Hiragana),
            ),
        ];

        if !self.at_end && self.touched_end {
            return Scan::NeedInput;
        }

        let mut best: Option<Run> = None;
        for (kind, end) in candidates {
            if let Some(end) = end {
                if best.is_none_or(|b| end.chars > b.end.chars) {
                    best = Some(Run { kind, end });
                }
            }
        }

        Scan::Run(best.unwrap_or(Run {
            kind: RunKind::Other,
            end: start.after(first),
        }))
    }

    // ─── Rule families ──────────────────────────────────────────────────

    /// Number run: `conn* numeric ((conn* | mid-numeric) numeric)* conn*`
    /// with every unit mark-extended (WB8, WB11, WB12, WB13a/b).
    fn numeric_run(&mut self, start: Pos) -> Option<Pos> {
        let p = self.connector_run(start);
        let mut end = self.extended(p, WordBreak::Numeric)?;
        loop {
            let bridged = self.connector_run(end);
            if let Some(q) = self.extended(bridged, WordBreak::Numeric) {
                end = q;
                continue;
            }
            if let Some(mid) = self.mid_numeric(end) {
                if let Some(q) = self.extended(mid, WordBreak::Numeric) {
                    end = q;
                    continue;
                }
            }
            break;
        }
        Some(self.connector_run(end))
    }

    /// Word run: leading connectors, one or more groups joined by
    /// non-empty connector runs, trailing connectors (WB5–WB13b).
    fn word_run(&mut self, start: Pos) -> Option<Pos> {
        let p = self.connector_run(start);
        let mut end = self.word_group(p)?;
        loop {
            let bridged = self.connector_plus(end);
            match bridged.and_then(|q| self.word_group(q)) {
                Some(q) => end = q,
                None => break,
            }
        }
        Some(self.connector_run(end))
    }

    /// A katakana part or a mixed letter/numeric part.
    fn word_group(&mut self, p: Pos) -> Option<Pos> {
        if let Some(q) = self.katakana_part(p) {
            return Some(q);
        }
        self.mixed_part(p)
    }

    /// Katakana scalars joined directly or across connectors (WB13).
    fn katakana_part(&mut self, start: Pos) -> Option<Pos> {
        let mut end = self.extended(start, WordBreak::Katakana)?;
        loop {
            let bridged = self.connector_run(end);
            match self.extended(bridged, WordBreak::Katakana) {
                Some(q) => end = q,
                None => break,
            }
        }
        Some(end)
    }

    /// One or more letter/numeric parts in any order (WB5–WB12): letters
    /// and numerics interleave directly, each part merging across its own
    /// mid punctuation.
    fn mixed_part(&mut self, start: Pos) -> Option<Pos> {
        let mut end = match self.letter_part(start) {
            Some(q) => q,
            None => self.numeric_part(start)?,
        };
        loop {
            if let Some(q) = self.letter_part(end) {
                end = q;
                continue;
            }
            if let Some(q) = self.numeric_part(end) {
                end = q;
                continue;
            }
            break;
        }
        Some(end)
    }

    /// Letters joined across connectors and mid-letter punctuation
    /// (WB5, WB6, WB7, WB13a/b).
    fn letter_part(&mut self, start: Pos) -> Option<Pos> {
        let mut end = self.extended(start, WordBreak::ALetter)?;
        loop {
            let bridged = self.connector_run(end);
            if let Some(q) = self.extended(bridged, WordBreak::ALetter) {
                end = q;
                continue;
            }
            if let Some(mid) = self.mid_letter(end) {
                if let Some(q) = self.extended(mid, WordBreak::ALetter) {
                    end = q;
                    continue;
                }
            }
            break;
        }
        Some(end)
    }

    /// Numerics joined across connectors and mid-numeric punctuation
    /// (WB8, WB11, WB12, WB13a/b).
    fn numeric_part(&mut self, start: Pos) -> Option<Pos> {
        let mut end = self.extended(start, WordBreak::Numeric)?;
        loop {
            let bridged = self.connector_run(end);
            if let Some(q) = self.extended(bridged, WordBreak::Numeric) {
                end = q;
                continue;
            }
            if let Some(mid) = self.mid_numeric(end) {
                if let Some(q) = self.extended(mid, WordBreak::Numeric) {
                    end = q;
                    continue;
                }
            }
            break;
        }
        Some(end)
    }

    /// Complex_Context run: consecutive SA-script scalars kept as one
    /// span, each absorbing trailing marks.
    fn complex_run(&mut self, start: Pos) -> Option<Pos> {
        let mut end = self.complex_unit(start)?;
        while let Some(q) = self.complex_unit(end) {
            end = q;
        }
        Some(end)
    }

    fn complex_unit(&mut self, p: Pos) -> Option<Pos> {
        let (c, class) = self.peek(p)?;
        (class.script == ScriptClass::ComplexContext)
            .then(|| self.absorb_marks(p.after(c)))
    }

    /// Exactly one scalar of the given script, mark-extended.
    fn singleton(&mut self, p: Pos, script: ScriptClass) -> Option<Pos> {
        let (c, class) = self.peek(p)?;
        (class.script == script).then(|| self.absorb_marks(p.after(c)))
    }

    // ─── Shared pieces ──────────────────────────────────────────────────

    /// One scalar of word-break class `wb`, plus absorbed marks.
    fn extended(&mut self, p: Pos, wb: WordBreak) -> Option<Pos> {
        let (c, class) = self.peek(p)?;
        (class.word == wb).then(|| self.absorb_marks(p.after(c)))
    }

    /// Absorb trailing `Extend`/`Format` marks (WB4).
    fn absorb_marks(&mut self, mut p: Pos) -> Pos {
        while let Some((c, class)) = self.peek(p) {
            if matches!(class.word, WordBreak::Extend | WordBreak::Format) {
                p = p.after(c);
            } else {
                break;
            }
        }
        p
    }

    /// Zero or more `ExtendNumLet` scalars, each mark-extended (WB13a/b).
    fn connector_run(&mut self, mut p: Pos) -> Pos {
        while let Some(q) = self.extended(p, WordBreak::ExtendNumLet) {
            p = q;
        }
        p
    }

    /// One or more `ExtendNumLet` scalars.
    fn connector_plus(&mut self, p: Pos) -> Option<Pos> {
        let q = self.extended(p, WordBreak::ExtendNumLet)?;
        Some(self.connector_run(q))
    }

    /// `MidLetter` or `MidNumLet` scalar, mark-extended (WB6/WB7).
    fn mid_letter(&mut self, p: Pos) -> Option<Pos> {
        let (c, class) = self.peek(p)?;
        matches!(class.word, WordBreak::MidLetter | WordBreak::MidNumLet)
            .then(|| self.absorb_marks(p.after(c)))
    }

    /// `MidNum` or `MidNumLet` scalar, mark-extended (WB11/WB12).
    fn mid_numeric(&mut self, p: Pos) -> Option<Pos> {
        let (c, class) = self.peek(p)?;
        matches!(class.word, WordBreak::MidNum | WordBreak::MidNumLet)
            .then(|| self.absorb_marks(p.after(c)))
    }

    /// Classify the scalar at `p`, recording when the probe runs past
    /// the window end.
    fn peek(&mut self, p: Pos) -> Option<(char, CharClass)> {
        match self.window[p.byte as usize..].chars().next() {
            Some(c) => Some((c, classify(c))),
            None => {
                self.touched_end = true;
                None
            }
        }
    }
}
