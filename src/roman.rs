//! # Roman Numerals
//!
//! Builds and parses functional chord labels such as `ii`, `vii°` and `V7`.
//!
//! A numeral is never written out by hand: it is the degree's base numeral,
//! lower-cased for minor-family qualities, followed by the quality's suffix.
//! Because that construction is injective over the 7 × 7 grid of degrees and
//! qualities, parsing is an exhaustive lookup over the same grid.
//!
//! ## Example
//! ```rust
//! use chord_drill::{parse_roman_numeral, roman_numeral_for, Quality};
//!
//! assert_eq!(roman_numeral_for(5, Quality::DominantSeventh).unwrap(), "V7");
//! let (degree, quality) = parse_roman_numeral("vii°").unwrap();
//! assert_eq!((degree.get(), quality), (7, Quality::Diminished));
//! ```

use crate::error::DrillError;
use crate::generator::ChordTypes;
use crate::quality::{ChordType, Degree, Quality};

/// Build the numeral for a validated degree.
pub fn roman_numeral(degree: Degree, quality: Quality) -> String {
    let base = degree.base_numeral();
    let mut numeral = if quality.is_minor_family() {
        base.to_lowercase()
    } else {
        base.to_string()
    };
    numeral.push_str(quality.suffix());
    numeral
}

/// Build the numeral for a raw degree number.
///
/// Fails with [`DrillError::InvalidDegree`] outside 1-7; that is a caller bug,
/// never a user mistake.
pub fn roman_numeral_for(degree: u8, quality: Quality) -> Result<String, DrillError> {
    Ok(roman_numeral(Degree::new(degree)?, quality))
}

/// Recover the degree and quality a numeral was built from.
pub fn parse_roman_numeral(text: &str) -> Option<(Degree, Quality)> {
    let trimmed = text.trim();
    Degree::all()
        .flat_map(|degree| Quality::ALL.iter().map(move |&quality| (degree, quality)))
        .find(|&(degree, quality)| roman_numeral(degree, quality) == trimmed)
}

/// The diatonic numerals for one chord type, degree 1 to 7.
pub fn diatonic_numerals(chord_type: ChordType) -> Vec<String> {
    Degree::all()
        .map(|degree| roman_numeral(degree, degree.diatonic_quality(chord_type)))
        .collect()
}

/// Answer choices for a free-text front end: triad numerals, then sevenths.
pub fn roman_options(chord_types: ChordTypes) -> Vec<String> {
    let mut options = Vec::with_capacity(14);
    if chord_types.triads {
        options.extend(diatonic_numerals(ChordType::Triad));
    }
    if chord_types.sevenths {
        options.extend(diatonic_numerals(ChordType::Seventh));
    }
    options
}
