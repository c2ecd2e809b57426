//! Reserved note words
//!
//! Card notes written by players are scanned for a small vocabulary of
//! annotation words (chop moves, finesses, trash markers and so on). Suit and
//! color abbreviations share that namespace, so an abbreviation must never
//! collide with one of these words.

use std::collections::HashSet;

const CHOP_MOVED_NOTES: &[&str] = &[
    "cm", "chop move", "chop moved", "5cm", "e5cm", "tcm", "tccm", "sdcm", "sbpcm", "ocm", "tocm",
    "utfcm", "utbcm",
];

const FINESSED_NOTES: &[&str] = &["f", "hf", "sf", "cf", "pf", "gd", "bluff", "finesse"];

const KNOWN_TRASH_NOTES: &[&str] = &["kt", "trash", "stale", "bad"];

const NEEDS_FIX_NOTES: &[&str] = &["fix", "fixme", "needs fix"];

const QUESTION_MARK_NOTES: &[&str] = &["?"];

const EXCLAMATION_MARK_NOTES: &[&str] = &["!"];

const BLANK_NOTES: &[&str] = &["blank", "unknown"];

const CLUED_NOTES: &[&str] = &["clued", "cl"];

const UNCLUED_NOTES: &[&str] = &["unclued", "x"];

/// Set of lowercase words that abbreviations must not collide with.
///
/// Membership is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedNotes {
    words: HashSet<String>,
}

impl ReservedNotes {
    /// An empty set; nothing is reserved.
    pub fn new() -> Self {
        Self { words: HashSet::new() }
    }

    /// The note vocabulary understood by the clue annotation syntax.
    pub fn builtin() -> Self {
        let groups = [
            CHOP_MOVED_NOTES,
            FINESSED_NOTES,
            KNOWN_TRASH_NOTES,
            NEEDS_FIX_NOTES,
            QUESTION_MARK_NOTES,
            EXCLAMATION_MARK_NOTES,
            BLANK_NOTES,
            CLUED_NOTES,
            UNCLUED_NOTES,
        ];
        groups.iter().flat_map(|group| group.iter().copied()).collect()
    }

    /// Extend the set with additional words.
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Check whether `word` is reserved, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ReservedNotes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ReservedNotes::new().with_extra(iter)
    }
}
