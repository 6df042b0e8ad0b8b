//! Stream-level properties of the tokenizer, checked over generated
//! inputs: span monotonicity, totality, determinism, chunking
//! invariance, and position-increment conservation.

#![allow(
    clippy::unwrap_used,
    clippy::cast_possible_truncation,
    reason = "tests"
)]

use kotoba::{SourceError, StrSource, TextSource, TokenKind, Tokenizer};
use proptest::prelude::*;

/// Source yielding a fixed sequence of owned chunks.
struct ChunkSource {
    chunks: Vec<String>,
    next: usize,
}

impl TextSource for ChunkSource {
    fn next_chunk(&mut self) -> Result<Option<&str>, SourceError> {
        let idx = self.next;
        self.next += 1;
        Ok(self.chunks.get(idx).map(String::as_str))
    }
}

fn drain<S: TextSource>(tokenizer: &mut Tokenizer<S>) -> Vec<(String, TokenKind, u32, u32, u32)> {
    let mut out = Vec::new();
    while let Some(token) = tokenizer.advance().unwrap() {
        out.push((
            token.text.to_owned(),
            token.kind,
            token.span.start,
            token.span.end,
            token.position_increment,
        ));
    }
    out
}

fn tokens_of(text: &str) -> Vec<(String, TokenKind, u32, u32, u32)> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.reset(StrSource::new(text));
    drain(&mut tokenizer)
}

/// Split `text` into chunks at the given char-index fractions.
fn chunks_at(text: &str, cuts: &[prop::sample::Index]) -> Vec<String> {
    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    if boundaries.is_empty() {
        return vec![text.to_owned()];
    }
    let mut offsets: Vec<usize> = cuts.iter().map(|c| boundaries[c.index(boundaries.len())]).collect();
    offsets.sort_unstable();
    offsets.dedup();
    let mut chunks = Vec::new();
    let mut prev = 0;
    for off in offsets {
        chunks.push(text[prev..off].to_owned());
        prev = off;
    }
    chunks.push(text[prev..].to_owned());
    chunks
}

proptest! {
    /// Emitted spans are strictly increasing and non-overlapping, each
    /// token is non-empty, and the final offset is the input length.
    #[test]
    fn spans_are_monotonic_and_finish_is_total(text in "\\PC{0,80}") {
        let mut tokenizer = Tokenizer::new();
        tokenizer.reset(StrSource::new(&text));
        let mut prev_end = 0u32;
        while let Some(token) = tokenizer.advance().unwrap() {
            prop_assert!(token.span.start >= prev_end);
            prop_assert!(token.span.end > token.span.start);
            prop_assert!(token.position_increment >= 1);
            prop_assert!(!token.text.is_empty());
            prev_end = token.span.end;
        }
        prop_assert_eq!(tokenizer.finish(), text.chars().count() as u32);
    }

    /// Identical input and configuration produce an identical stream.
    #[test]
    fn stream_is_deterministic(text in "\\PC{0,80}") {
        prop_assert_eq!(tokens_of(&text), tokens_of(&text));
    }

    /// Chunk boundaries never influence the token stream.
    #[test]
    fn chunking_is_invariant(
        text in "\\PC{0,80}",
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..4),
    ) {
        let whole = tokens_of(&text);
        let mut tokenizer = Tokenizer::new();
        tokenizer.reset(ChunkSource { chunks: chunks_at(&text, &cuts), next: 0 });
        prop_assert_eq!(drain(&mut tokenizer), whole);
    }

    /// Over a stream of plain words, the sum of `position_increment - 1`
    /// equals the number of overlong words dropped before each emission.
    #[test]
    fn increments_account_for_dropped_words(
        words in prop::collection::vec("[a-z]{1,6}", 0..12),
    ) {
        const MAX: u32 = 3;
        let text = words.join(" ");
        let mut expected = Vec::new();
        let mut pending = 0u32;
        for word in &words {
            if word.chars().count() as u32 > MAX {
                pending += 1;
            } else {
                expected.push((word.clone(), 1 + pending));
                pending = 0;
            }
        }
        let mut tokenizer = Tokenizer::new();
        tokenizer.set_max_token_len(MAX);
        tokenizer.reset(StrSource::new(&text));
        let got: Vec<(String, u32)> = drain(&mut tokenizer)
            .into_iter()
            .map(|(text, _, _, _, inc)| (text, inc))
            .collect();
        prop_assert_eq!(got, expected);
    }
}
