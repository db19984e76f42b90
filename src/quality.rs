//! # Scale Degrees and Chord Qualities
//!
//! The vocabulary the Roman-numeral builder works in.
//!
//! ## Types
//! - [`Degree`] - validated scale degree, 1 through 7
//! - [`ChordType`] - triad or seventh chord
//! - [`Quality`] - the seven chord qualities a diatonic major-key chord can take
//!
//! ## Diatonic Pattern
//! In every major key the chord built on each degree has the same quality:
//!
//! ```text
//! degree   1     2     3     4     5     6     7
//! triad    maj   min   min   maj   maj   min   dim
//! seventh  maj7  min7  min7  maj7  dom7  min7  hdim
//! ```
//!
//! [`Degree::diatonic_quality`] encodes that table. Only the letter names
//! change from key to key, which is why chord names live in `catalog` and
//! the numerals are derived here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrillError;

/// Scale degree within a major key (1 = tonic, 7 = leading tone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Degree(u8);

impl Degree {
    pub const TONIC: Degree = Degree(1);
    pub const LEADING_TONE: Degree = Degree(7);

    /// Validate a raw degree number.
    pub fn new(value: u8) -> Result<Self, DrillError> {
        if (1..=7).contains(&value) {
            Ok(Degree(value))
        } else {
            Err(DrillError::InvalidDegree(value))
        }
    }

    /// Degrees 1 through 7 in order.
    pub fn all() -> impl Iterator<Item = Degree> {
        (1..=7).map(Degree)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based column index into the per-key tables.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Upper-case Roman numeral for this degree ("I" .. "VII").
    pub fn base_numeral(self) -> &'static str {
        const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];
        NUMERALS[self.index()]
    }

    /// The quality a chord of the given type naturally takes on this degree.
    pub fn diatonic_quality(self, chord_type: ChordType) -> Quality {
        match (chord_type, self.0) {
            (ChordType::Triad, 1 | 4 | 5) => Quality::Major,
            (ChordType::Triad, 2 | 3 | 6) => Quality::Minor,
            (ChordType::Triad, _) => Quality::Diminished,
            (ChordType::Seventh, 1 | 4) => Quality::MajorSeventh,
            (ChordType::Seventh, 5) => Quality::DominantSeventh,
            (ChordType::Seventh, 2 | 3 | 6) => Quality::MinorSeventh,
            (ChordType::Seventh, _) => Quality::HalfDiminishedSeventh,
        }
    }
}

impl TryFrom<u8> for Degree {
    type Error = DrillError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Degree::new(value)
    }
}

impl From<Degree> for u8 {
    fn from(degree: Degree) -> u8 {
        degree.0
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Triad (three notes) or seventh chord (four notes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordType {
    Triad,
    Seventh,
}

impl ChordType {
    pub const ALL: [ChordType; 2] = [ChordType::Triad, ChordType::Seventh];
}

/// Chord quality.
///
/// Each quality decides two things about its Roman numeral: the case of the
/// base numeral and the suffix appended to it.
///
/// | Quality                 | id     | label  | degree 5 |
/// |-------------------------|--------|--------|----------|
/// | Major                   | `maj`  | `maj`  | `V`      |
/// | Minor                   | `min`  | `min`  | `v`      |
/// | Diminished              | `dim`  | `dim`  | `v°`     |
/// | MajorSeventh            | `maj7` | `maj7` | `Vmaj7`  |
/// | DominantSeventh         | `dom7` | `7`    | `V7`     |
/// | MinorSeventh            | `min7` | `m7`   | `v7`     |
/// | HalfDiminishedSeventh   | `hdim` | `ø7`   | `vø7`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Quality {
    Major,
    Minor,
    Diminished,
    MajorSeventh,
    DominantSeventh,
    MinorSeventh,
    HalfDiminishedSeventh,
}

impl Quality {
    /// All qualities, triads first. Also the cycling order for quality pickers.
    pub const ALL: [Quality; 7] = [
        Quality::Major,
        Quality::Minor,
        Quality::Diminished,
        Quality::MajorSeventh,
        Quality::DominantSeventh,
        Quality::MinorSeventh,
        Quality::HalfDiminishedSeventh,
    ];

    /// Short stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Quality::Major => "maj",
            Quality::Minor => "min",
            Quality::Diminished => "dim",
            Quality::MajorSeventh => "maj7",
            Quality::DominantSeventh => "dom7",
            Quality::MinorSeventh => "min7",
            Quality::HalfDiminishedSeventh => "hdim",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Quality::Major => "maj",
            Quality::Minor => "min",
            Quality::Diminished => "dim",
            Quality::MajorSeventh => "maj7",
            Quality::DominantSeventh => "7",
            Quality::MinorSeventh => "m7",
            Quality::HalfDiminishedSeventh => "ø7",
        }
    }

    /// Whether the base numeral is written in lower case.
    pub fn is_minor_family(self) -> bool {
        match self {
            Quality::Major | Quality::MajorSeventh | Quality::DominantSeventh => false,
            Quality::Minor
            | Quality::Diminished
            | Quality::MinorSeventh
            | Quality::HalfDiminishedSeventh => true,
        }
    }

    /// Symbol appended to the base numeral.
    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major | Quality::Minor => "",
            Quality::Diminished => "\u{b0}",
            Quality::MajorSeventh => "maj7",
            Quality::DominantSeventh | Quality::MinorSeventh => "7",
            Quality::HalfDiminishedSeventh => "\u{f8}7",
        }
    }

    pub fn chord_type(self) -> ChordType {
        match self {
            Quality::Major | Quality::Minor | Quality::Diminished => ChordType::Triad,
            Quality::MajorSeventh
            | Quality::DominantSeventh
            | Quality::MinorSeventh
            | Quality::HalfDiminishedSeventh => ChordType::Seventh,
        }
    }

    /// Position in [`Quality::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Step through [`Quality::ALL`] by `direction`, wrapping at both ends.
    pub fn cycled(self, direction: i32) -> Quality {
        Quality::cycle_from(Some(self), direction)
    }

    /// Like [`Quality::cycled`], treating no selection as the first quality.
    pub fn cycle_from(current: Option<Quality>, direction: i32) -> Quality {
        let len = Quality::ALL.len() as i32;
        let start = current.map_or(0, |q| q.index() as i32);
        Quality::ALL[(start + direction).rem_euclid(len) as usize]
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quality {
    type Err = DrillError;

    /// Parse a quality id (`"maj"`, `"dom7"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Quality::ALL
            .iter()
            .copied()
            .find(|q| q.id() == trimmed)
            .ok_or_else(|| DrillError::UnknownQuality(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_range() {
        assert!(Degree::new(0).is_err());
        assert_eq!(Degree::new(1).unwrap(), Degree::TONIC);
        assert_eq!(Degree::new(7).unwrap(), Degree::LEADING_TONE);
        assert_eq!(Degree::new(8), Err(DrillError::InvalidDegree(8)));
        assert_eq!(Degree::all().count(), 7);
    }

    #[test]
    fn test_diatonic_triads() {
        let qualities: Vec<Quality> = Degree::all()
            .map(|d| d.diatonic_quality(ChordType::Triad))
            .collect();
        assert_eq!(
            qualities,
            vec![
                Quality::Major,
                Quality::Minor,
                Quality::Minor,
                Quality::Major,
                Quality::Major,
                Quality::Minor,
                Quality::Diminished,
            ]
        );
    }

    #[test]
    fn test_diatonic_sevenths() {
        let qualities: Vec<Quality> = Degree::all()
            .map(|d| d.diatonic_quality(ChordType::Seventh))
            .collect();
        assert_eq!(
            qualities,
            vec![
                Quality::MajorSeventh,
                Quality::MinorSeventh,
                Quality::MinorSeventh,
                Quality::MajorSeventh,
                Quality::DominantSeventh,
                Quality::MinorSeventh,
                Quality::HalfDiminishedSeventh,
            ]
        );
    }

    #[test]
    fn test_diatonic_quality_matches_chord_type() {
        for degree in Degree::all() {
            for chord_type in ChordType::ALL {
                assert_eq!(degree.diatonic_quality(chord_type).chord_type(), chord_type);
            }
        }
    }

    #[test]
    fn test_quality_ids_parse() {
        for quality in Quality::ALL {
            assert_eq!(quality.id().parse::<Quality>().unwrap(), quality);
        }
        assert_eq!(
            "sus4".parse::<Quality>(),
            Err(DrillError::UnknownQuality("sus4".to_string()))
        );
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Quality::Major.cycled(1), Quality::Minor);
        assert_eq!(Quality::Major.cycled(-1), Quality::HalfDiminishedSeventh);
        assert_eq!(Quality::HalfDiminishedSeventh.cycled(1), Quality::Major);
        assert_eq!(Quality::cycle_from(None, 1), Quality::Minor);
        assert_eq!(Quality::cycle_from(None, -1), Quality::HalfDiminishedSeventh);
    }

    #[test]
    fn test_degree_deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Degree>("5").unwrap().get(), 5);
        assert!(serde_json::from_str::<Degree>("0").is_err());
    }
}
