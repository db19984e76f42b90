//! # Major Keys
//!
//! The twelve major keys the drill draws from, spelled the way a lead sheet
//! would: sharp keys up to F#, flat keys down to Db. The enum is closed so
//! every per-key table in the crate is a fixed-size array indexed by
//! [`Key::index`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::display::format_key_display;
use crate::error::DrillError;

/// A major key, identified by its tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    C,
    G,
    D,
    A,
    E,
    B,
    #[serde(rename = "F#")]
    FSharp,
    F,
    #[serde(rename = "Bb")]
    BFlat,
    #[serde(rename = "Eb")]
    EFlat,
    #[serde(rename = "Ab")]
    AFlat,
    #[serde(rename = "Db")]
    DFlat,
}

impl Key {
    /// All keys: C, then the sharp keys, then the flat keys.
    pub const ALL: [Key; 12] = [
        Key::C,
        Key::G,
        Key::D,
        Key::A,
        Key::E,
        Key::B,
        Key::FSharp,
        Key::F,
        Key::BFlat,
        Key::EFlat,
        Key::AFlat,
        Key::DFlat,
    ];

    /// Position in [`Key::ALL`]; row index into the chord-name tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Tonic name with ASCII accidentals ("F#", "Bb").
    pub fn name(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::G => "G",
            Key::D => "D",
            Key::A => "A",
            Key::E => "E",
            Key::B => "B",
            Key::FSharp => "F#",
            Key::F => "F",
            Key::BFlat => "Bb",
            Key::EFlat => "Eb",
            Key::AFlat => "Ab",
            Key::DFlat => "Db",
        }
    }

    /// Tonic name for display, with the flat sign substituted ("B♭").
    pub fn display_name(self) -> String {
        format_key_display(self.name())
    }

    /// Whether chords in this key are spelled with flats.
    pub fn uses_flats(self) -> bool {
        matches!(
            self,
            Key::F | Key::BFlat | Key::EFlat | Key::AFlat | Key::DFlat
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.name() == trimmed)
            .ok_or_else(|| DrillError::UnknownKey(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!("C".parse::<Key>().unwrap(), Key::C);
        assert_eq!(" F# ".parse::<Key>().unwrap(), Key::FSharp);
        assert_eq!("Db".parse::<Key>().unwrap(), Key::DFlat);
        assert_eq!(
            "Gb".parse::<Key>(),
            Err(DrillError::UnknownKey("Gb".to_string()))
        );
    }

    #[test]
    fn test_display_name_uses_flat_sign() {
        assert_eq!(Key::BFlat.display_name(), "B♭");
        assert_eq!(Key::FSharp.display_name(), "F#");
        assert_eq!(Key::C.to_string(), "C");
    }

    #[test]
    fn test_serializes_as_tonic_name() {
        assert_eq!(serde_json::to_string(&Key::EFlat).unwrap(), "\"Eb\"");
        assert_eq!(serde_json::from_str::<Key>("\"F#\"").unwrap(), Key::FSharp);
    }
}
