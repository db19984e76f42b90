//! # Answer Validation
//!
//! Scores a submitted attempt against a [`Progression`].
//!
//! ## Input Modes
//! - **Free text**: the user types a numeral; it is trimmed and compared by
//!   exact string equality (`&str`, `String`)
//! - **Structured**: the user picks a degree and a quality separately, in
//!   either order ([`SlotAnswer`]); the numeral is rebuilt from the pair
//! - **Quick**: the user picks only a degree and the quality follows from the
//!   diatonic triad pattern ([`SlotAnswer::quick`])
//!
//! All three go through [`Response::roman`], so they are checked against the
//! same expected numeral. A slot with nothing to compare (empty text, a
//! structured slot missing either half) never matches.
//!
//! ## Scoring
//! A round is all-or-nothing: [`is_fully_correct`] requires one answer per
//! slot and every one to match. [`grade`] adds per-slot feedback for the
//! results screen and the +1 / -1 score delta.

use std::borrow::Cow;

use serde::Serialize;

use crate::catalog::ChordEntry;
use crate::display::format_chord_display;
use crate::generator::Progression;
use crate::quality::{ChordType, Degree, Quality};
use crate::roman::{parse_roman_numeral, roman_numeral};

/// Anything that can stand as the answer to one slot.
pub trait Response {
    /// The numeral this answer spells, or `None` if the slot is unanswered.
    fn roman(&self) -> Option<Cow<'_, str>>;

    fn matches(&self, entry: &ChordEntry) -> bool {
        self.roman().is_some_and(|r| r == entry.roman.as_str())
    }
}

impl Response for str {
    fn roman(&self) -> Option<Cow<'_, str>> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Cow::Borrowed(trimmed))
        }
    }
}

impl Response for String {
    fn roman(&self) -> Option<Cow<'_, str>> {
        self.as_str().roman()
    }
}

impl<T: Response + ?Sized> Response for &T {
    fn roman(&self) -> Option<Cow<'_, str>> {
        (**self).roman()
    }
}

impl<T: Response> Response for Option<T> {
    fn roman(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|answer| answer.roman())
    }
}

/// A structured answer being built up one pick at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAnswer {
    pub degree: Option<Degree>,
    pub quality: Option<Quality>,
}

impl SlotAnswer {
    pub fn new(degree: Degree, quality: Quality) -> Self {
        SlotAnswer { degree: Some(degree), quality: Some(quality) }
    }

    /// Quick-mode answer: the degree alone, with the quality it takes as a
    /// diatonic triad.
    pub fn quick(degree: Degree) -> Self {
        SlotAnswer::new(degree, degree.diatonic_quality(ChordType::Triad))
    }

    /// Interpret a typed numeral structurally.
    pub fn from_roman(text: &str) -> Option<Self> {
        parse_roman_numeral(text).map(|(degree, quality)| SlotAnswer::new(degree, quality))
    }

    pub fn is_complete(&self) -> bool {
        self.degree.is_some() && self.quality.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.degree.is_none() && self.quality.is_none()
    }
}

impl Response for SlotAnswer {
    fn roman(&self) -> Option<Cow<'_, str>> {
        match (self.degree, self.quality) {
            (Some(degree), Some(quality)) => Some(Cow::Owned(roman_numeral(degree, quality))),
            _ => None,
        }
    }
}

/// True only if every slot has an answer and every answer is right.
pub fn is_fully_correct<A: Response>(progression: &Progression, answers: &[A]) -> bool {
    answers.len() == progression.len()
        && progression
            .chords()
            .iter()
            .zip(answers)
            .all(|(entry, answer)| answer.matches(entry))
}

/// Outcome of one slot, for the feedback screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotFeedback {
    pub chord: String,
    pub chord_display: String,
    pub expected: String,
    pub submitted: Option<String>,
    pub correct: bool,
}

/// Outcome of a whole round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub key: String,
    pub key_display: String,
    pub correct: bool,
    pub slots: Vec<SlotFeedback>,
}

impl RoundResult {
    /// +1 for a fully correct round, -1 otherwise.
    pub fn score_delta(&self) -> i32 {
        if self.correct {
            1
        } else {
            -1
        }
    }

    pub fn slots_correct(&self) -> usize {
        self.slots.iter().filter(|s| s.correct).count()
    }
}

/// Grade a submission and collect per-slot feedback.
///
/// Slots beyond the end of `answers` are reported as unanswered.
pub fn grade<A: Response>(progression: &Progression, answers: &[A]) -> RoundResult {
    let slots = progression
        .chords()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let submitted = answers.get(i).and_then(|a| a.roman()).map(Cow::into_owned);
            SlotFeedback {
                chord: entry.name.to_string(),
                chord_display: format_chord_display(entry.name),
                expected: entry.roman.clone(),
                correct: submitted.as_deref() == Some(entry.roman.as_str()),
                submitted,
            }
        })
        .collect();

    RoundResult {
        key: progression.key().name().to_string(),
        key_display: progression.key_display(),
        correct: is_fully_correct(progression, answers),
        slots,
    }
}
