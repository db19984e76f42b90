//! # Progression Generator
//!
//! Builds the pool of eligible chords and draws single-key progressions from it.
//!
//! ## Pipeline
//! 1. [`build_pool`] filters the catalog down to the selected chord types
//! 2. [`draw_progression`] picks a key uniformly at random, restricts the pool
//!    to that key, and samples the requested number of chords
//!
//! ## Sampling
//! - `length <= available`: shuffle the key's chords and take the first
//!   `length`, so no chord repeats
//! - `length > available`: draw each slot independently, repeats allowed
//!
//! The random source is passed in, so the generator keeps no state of its own
//! and seeded runs are reproducible.
//!
//! ## Example
//! ```rust
//! use chord_drill::{build_pool, draw_progression, ChordTypes};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let pool = build_pool(ChordTypes::TRIADS);
//! let progression = draw_progression(&pool, 4, &mut rng)?;
//! assert_eq!(progression.len(), 4);
//! # Ok::<(), chord_drill::DrillError>(())
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, ChordEntry};
use crate::display::format_chord_display;
use crate::error::DrillError;
use crate::key::Key;
use crate::quality::ChordType;

/// Which chord types a round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordTypes {
    pub triads: bool,
    pub sevenths: bool,
}

impl ChordTypes {
    pub const TRIADS: ChordTypes = ChordTypes { triads: true, sevenths: false };
    pub const SEVENTHS: ChordTypes = ChordTypes { triads: false, sevenths: true };
    pub const BOTH: ChordTypes = ChordTypes { triads: true, sevenths: true };
    pub const NONE: ChordTypes = ChordTypes { triads: false, sevenths: false };

    pub fn includes(self, chord_type: ChordType) -> bool {
        match chord_type {
            ChordType::Triad => self.triads,
            ChordType::Seventh => self.sevenths,
        }
    }

    pub fn is_empty(self) -> bool {
        !self.triads && !self.sevenths
    }

    /// Number of chords each key contributes: 0, 7 or 14.
    pub fn per_key(self) -> usize {
        ChordType::ALL.iter().filter(|&&t| self.includes(t)).count() * 7
    }
}

impl Default for ChordTypes {
    fn default() -> Self {
        ChordTypes::BOTH
    }
}

/// Catalog entries eligible for the current settings.
#[derive(Debug, Clone, Default)]
pub struct Pool {
    entries: Vec<ChordEntry>,
}

impl Pool {
    pub fn entries(&self) -> &[ChordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one key, in catalog order.
    pub fn for_key(&self, key: Key) -> Vec<&ChordEntry> {
        self.entries.iter().filter(|e| e.key == key).collect()
    }
}

/// Filter the catalog to the selected chord types.
///
/// With neither type selected the pool is empty; [`draw_progression`] then
/// refuses to draw.
pub fn build_pool(chord_types: ChordTypes) -> Pool {
    let entries: Vec<ChordEntry> = Catalog::global()
        .entries()
        .iter()
        .filter(|e| chord_types.includes(e.chord_type()))
        .cloned()
        .collect();
    debug!(
        triads = chord_types.triads,
        sevenths = chord_types.sevenths,
        size = entries.len(),
        "built chord pool"
    );
    Pool { entries }
}

/// One round's chords, all from the same key, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    key: Key,
    chords: Vec<ChordEntry>,
}

impl Progression {
    pub fn key(&self) -> Key {
        self.key
    }

    /// Key name with flat sign, e.g. "E♭".
    pub fn key_display(&self) -> String {
        self.key.display_name()
    }

    pub fn chords(&self) -> &[ChordEntry] {
        &self.chords
    }

    pub fn get(&self, slot: usize) -> Option<&ChordEntry> {
        self.chords.get(slot)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn chord_display(&self, slot: usize) -> Option<String> {
        self.chords.get(slot).map(|c| format_chord_display(c.name))
    }

    /// Expected answers, one per slot.
    pub fn romans(&self) -> Vec<&str> {
        self.chords.iter().map(|c| c.roman.as_str()).collect()
    }
}

/// Draw `length` chords from a single randomly chosen key.
pub fn draw_progression<R: Rng + ?Sized>(
    pool: &Pool,
    length: usize,
    rng: &mut R,
) -> Result<Progression, DrillError> {
    if length == 0 {
        return Err(DrillError::InvalidLength { length, min: 1, max: usize::MAX });
    }
    if pool.is_empty() {
        return Err(DrillError::EmptyPool);
    }

    let key = Key::ALL[rng.gen_range(0..Key::ALL.len())];
    let mut available = pool.for_key(key);
    if available.is_empty() {
        return Err(DrillError::EmptyPool);
    }

    let chords: Vec<ChordEntry> = if length <= available.len() {
        available.shuffle(rng);
        available.truncate(length);
        available.into_iter().cloned().collect()
    } else {
        (0..length)
            .map(|_| available[rng.gen_range(0..available.len())].clone())
            .collect()
    };

    debug!(
        key = key.name(),
        length,
        repeats_allowed = length > pool.for_key(key).len(),
        "drew progression"
    );
    Ok(Progression { key, chords })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(build_pool(ChordTypes::TRIADS).len(), 84);
        assert_eq!(build_pool(ChordTypes::SEVENTHS).len(), 84);
        assert_eq!(build_pool(ChordTypes::BOTH).len(), 168);
        assert!(build_pool(ChordTypes::NONE).is_empty());
    }

    #[test]
    fn test_pool_per_key_counts() {
        for (types, expected) in [
            (ChordTypes::TRIADS, 7),
            (ChordTypes::SEVENTHS, 7),
            (ChordTypes::BOTH, 14),
        ] {
            let pool = build_pool(types);
            assert_eq!(types.per_key(), expected);
            for key in Key::ALL {
                let entries = pool.for_key(key);
                assert_eq!(entries.len(), expected);
                assert!(entries.iter().all(|e| types.includes(e.chord_type())));
            }
        }
    }

    #[test]
    fn test_draw_returns_requested_length_in_one_key() {
        let pool = build_pool(ChordTypes::BOTH);
        let mut rng = StdRng::seed_from_u64(42);
        for length in 1..=20 {
            let progression = draw_progression(&pool, length, &mut rng).unwrap();
            assert_eq!(progression.len(), length);
            assert!(progression.chords().iter().all(|c| c.key == progression.key()));
        }
    }

    #[test]
    fn test_draw_without_replacement() {
        let mut rng = StdRng::seed_from_u64(1);
        for (types, max) in [(ChordTypes::TRIADS, 7), (ChordTypes::SEVENTHS, 7), (ChordTypes::BOTH, 14)] {
            let pool = build_pool(types);
            for _ in 0..50 {
                let progression = draw_progression(&pool, max, &mut rng).unwrap();
                let unique: HashSet<&str> = progression.romans().into_iter().collect();
                assert_eq!(unique.len(), max);
            }
        }
    }

    #[test]
    fn test_draw_with_replacement_when_too_long() {
        let pool = build_pool(ChordTypes::TRIADS);
        let mut rng = StdRng::seed_from_u64(3);
        let progression = draw_progression(&pool, 12, &mut rng).unwrap();
        assert_eq!(progression.len(), 12);
        let unique: HashSet<&str> = progression.romans().into_iter().collect();
        assert!(unique.len() <= 7);
    }

    #[test]
    fn test_draw_visits_every_key() {
        let pool = build_pool(ChordTypes::TRIADS);
        let mut rng = StdRng::seed_from_u64(99);
        let keys: HashSet<Key> = (0..500)
            .map(|_| draw_progression(&pool, 1, &mut rng).unwrap().key())
            .collect();
        assert_eq!(keys.len(), 12);
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let pool = build_pool(ChordTypes::BOTH);
        let a = draw_progression(&pool, 5, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = draw_progression(&pool, 5, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            draw_progression(&build_pool(ChordTypes::NONE), 4, &mut rng),
            Err(DrillError::EmptyPool)
        );
        assert!(matches!(
            draw_progression(&build_pool(ChordTypes::BOTH), 0, &mut rng),
            Err(DrillError::InvalidLength { length: 0, .. })
        ));
    }

    #[test]
    fn test_progression_display_accessors() {
        let pool = build_pool(ChordTypes::SEVENTHS);
        let mut rng = StdRng::seed_from_u64(5);
        let progression = draw_progression(&pool, 3, &mut rng).unwrap();
        assert_eq!(progression.key_display(), progression.key().display_name());
        for slot in 0..3 {
            let entry = progression.get(slot).unwrap();
            assert_eq!(progression.chord_display(slot), Some(entry.display_name()));
        }
        assert_eq!(progression.chord_display(3), None);
    }
}
