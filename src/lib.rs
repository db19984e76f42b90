//! # Chord Drill
//!
//! Engine for a Roman-numeral ear-and-eye drill: show the chord names of a
//! short progression in a random major key, ask for each chord's function,
//! score the attempt.
//!
//! ## Modules
//! - `key`, `quality`, `roman` - keys, degrees, qualities and numeral spelling
//! - `catalog` - the 168 diatonic chords of the 12 major keys
//! - `generator` - pool filtering and progression drawing
//! - `validate` - free-text, structured and quick-mode answer checking
//! - `display` - flat-sign formatting of key and chord names
//! - `settings` - round configuration and YAML loading
//! - `session` - per-player game state for a front end to hold on to
//!
//! ## Example
//! ```rust
//! use chord_drill::{build_pool, draw_progression, is_fully_correct, ChordTypes};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let pool = build_pool(ChordTypes::TRIADS);
//! let progression = draw_progression(&pool, 4, &mut rng)?;
//!
//! let answers = progression.romans();
//! assert!(is_fully_correct(&progression, &answers));
//! # Ok::<(), chord_drill::DrillError>(())
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod generator;
pub mod key;
pub mod quality;
pub mod roman;
pub mod session;
pub mod settings;
pub mod validate;

pub use catalog::{chord_name_for, Catalog, ChordEntry};
pub use display::{format_chord_display, format_key_display};
pub use error::DrillError;
pub use generator::{build_pool, draw_progression, ChordTypes, Pool, Progression};
pub use key::Key;
pub use quality::{ChordType, Degree, Quality};
pub use roman::{parse_roman_numeral, roman_numeral, roman_numeral_for, roman_options};
pub use session::{Scoreboard, Screen, Session};
pub use settings::DrillSettings;
pub use validate::{grade, is_fully_correct, Response, RoundResult, SlotAnswer, SlotFeedback};
