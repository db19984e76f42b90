//! # Chord Catalog
//!
//! Every diatonic chord of every major key, as spelled chord names paired with
//! their Roman numerals.
//!
//! ## Layout
//! Chord names are literal data: spelling ("F#" vs "Gb", "E#dim") depends on
//! the key signature and cannot be derived from the degree alone. The tables
//! are fixed arrays indexed by [`Key::index`] and [`Degree::index`], so a
//! missing key or degree is a compile error rather than a lookup failure.
//!
//! Roman numerals are *not* stored. Each [`ChordEntry`] derives its numeral
//! from (degree, quality) through [`roman_numeral`], so every key shares one
//! definition of "ii" or "vii°".
//!
//! ## Sharing
//! [`Catalog::global`] builds the 168 entries once and hands out a `'static`
//! reference. The catalog is never mutated after that, so concurrent sessions
//! can read it freely.

use std::sync::OnceLock;

use serde::Serialize;

use crate::display::format_chord_display;
use crate::key::Key;
use crate::quality::{ChordType, Degree, Quality};
use crate::roman::roman_numeral;

/// Triad names per key, degrees 1-7. Rows follow [`Key::ALL`].
const TRIAD_NAMES: [[&str; 7]; 12] = [
    ["C", "Dm", "Em", "F", "G", "Am", "Bdim"],
    ["G", "Am", "Bm", "C", "D", "Em", "F#dim"],
    ["D", "Em", "F#m", "G", "A", "Bm", "C#dim"],
    ["A", "Bm", "C#m", "D", "E", "F#m", "G#dim"],
    ["E", "F#m", "G#m", "A", "B", "C#m", "D#dim"],
    ["B", "C#m", "D#m", "E", "F#", "G#m", "A#dim"],
    ["F#", "G#m", "A#m", "B", "C#", "D#m", "E#dim"],
    ["F", "Gm", "Am", "Bb", "C", "Dm", "Edim"],
    ["Bb", "Cm", "Dm", "Eb", "F", "Gm", "Adim"],
    ["Eb", "Fm", "Gm", "Ab", "Bb", "Cm", "Ddim"],
    ["Ab", "Bbm", "Cm", "Db", "Eb", "Fm", "Gdim"],
    ["Db", "Ebm", "Fm", "Gb", "Ab", "Bbm", "Cdim"],
];

/// Seventh-chord names per key, degrees 1-7. Rows follow [`Key::ALL`].
const SEVENTH_NAMES: [[&str; 7]; 12] = [
    ["Cmaj7", "Dm7", "Em7", "Fmaj7", "G7", "Am7", "Bm7b5"],
    ["Gmaj7", "Am7", "Bm7", "Cmaj7", "D7", "Em7", "F#m7b5"],
    ["Dmaj7", "Em7", "F#m7", "Gmaj7", "A7", "Bm7", "C#m7b5"],
    ["Amaj7", "Bm7", "C#m7", "Dmaj7", "E7", "F#m7", "G#m7b5"],
    ["Emaj7", "F#m7", "G#m7", "Amaj7", "B7", "C#m7", "D#m7b5"],
    ["Bmaj7", "C#m7", "D#m7", "Emaj7", "F#7", "G#m7", "A#m7b5"],
    ["F#maj7", "G#m7", "A#m7", "Bmaj7", "C#7", "D#m7", "E#m7b5"],
    ["Fmaj7", "Gm7", "Am7", "Bbmaj7", "C7", "Dm7", "Em7b5"],
    ["Bbmaj7", "Cm7", "Dm7", "Ebmaj7", "F7", "Gm7", "Am7b5"],
    ["Ebmaj7", "Fm7", "Gm7", "Abmaj7", "Bb7", "Cm7", "Dm7b5"],
    ["Abmaj7", "Bbm7", "Cm7", "Dbmaj7", "Eb7", "Fm7", "Gm7b5"],
    ["Dbmaj7", "Ebm7", "Fm7", "Gbmaj7", "Ab7", "Bbm7", "Cm7b5"],
];

fn name_table(chord_type: ChordType) -> &'static [[&'static str; 7]; 12] {
    match chord_type {
        ChordType::Triad => &TRIAD_NAMES,
        ChordType::Seventh => &SEVENTH_NAMES,
    }
}

/// Spelled chord name for a diatonic chord.
///
/// Returns `None` when `quality` is not the quality `degree` takes in a major
/// key (e.g. a major chord on degree 2), since such a chord has no entry.
pub fn chord_name_for(key: Key, degree: Degree, quality: Quality) -> Option<&'static str> {
    let chord_type = quality.chord_type();
    if degree.diatonic_quality(chord_type) != quality {
        return None;
    }
    Some(name_table(chord_type)[key.index()][degree.index()])
}

/// One diatonic chord: where it lives, how it is spelled, what it is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordEntry {
    pub key: Key,
    pub degree: Degree,
    pub quality: Quality,
    pub name: &'static str,
    pub roman: String,
}

impl ChordEntry {
    fn new(key: Key, degree: Degree, chord_type: ChordType) -> Self {
        let quality = degree.diatonic_quality(chord_type);
        ChordEntry {
            key,
            degree,
            quality,
            name: name_table(chord_type)[key.index()][degree.index()],
            roman: roman_numeral(degree, quality),
        }
    }

    pub fn chord_type(&self) -> ChordType {
        self.quality.chord_type()
    }

    /// Chord name with the root flat rendered as a flat sign.
    pub fn display_name(&self) -> String {
        format_chord_display(self.name)
    }
}

/// All 168 diatonic chord entries, ordered by key, then chord type, then degree.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<ChordEntry>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    const PER_KEY: usize = 14;

    fn build() -> Self {
        let mut entries = Vec::with_capacity(Key::ALL.len() * Self::PER_KEY);
        for key in Key::ALL {
            for chord_type in ChordType::ALL {
                for degree in Degree::all() {
                    entries.push(ChordEntry::new(key, degree, chord_type));
                }
            }
        }
        Catalog { entries }
    }

    /// The process-wide catalog, built on first use.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(Catalog::build)
    }

    pub fn entries(&self) -> &[ChordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The 14 entries (7 triads, then 7 sevenths) of one key.
    pub fn for_key(&self, key: Key) -> &[ChordEntry] {
        let start = key.index() * Self::PER_KEY;
        &self.entries[start..start + Self::PER_KEY]
    }

    pub fn get(&self, key: Key, degree: Degree, chord_type: ChordType) -> &ChordEntry {
        let offset = match chord_type {
            ChordType::Triad => 0,
            ChordType::Seventh => 7,
        };
        &self.for_key(key)[offset + degree.index()]
    }
}
