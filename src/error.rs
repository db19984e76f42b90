//! # Error Types
//!
//! All errors the drill engine can raise. None of them describe a wrong guess:
//! an incorrect answer is the negative branch of grading, not an error. These
//! variants signal a caller or configuration defect (out-of-range degree,
//! empty pool, bad settings) that would otherwise corrupt scoring silently.
//!
//! ## Usage
//! ```rust
//! use chord_drill::{roman_numeral_for, DrillError, Quality};
//!
//! match roman_numeral_for(9, Quality::Major) {
//!     Ok(numeral) => println!("{}", numeral),
//!     Err(DrillError::InvalidDegree(d)) => eprintln!("no such degree: {}", d),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::session::Screen;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrillError {
    /// Scale degree outside 1-7.
    ///
    /// # Example
    /// ```
    /// # use chord_drill::DrillError;
    /// let err = DrillError::InvalidDegree(8);
    /// assert_eq!(err.to_string(), "Invalid scale degree 8 (expected 1-7)");
    /// ```
    #[error("Invalid scale degree {0} (expected 1-7)")]
    InvalidDegree(u8),

    /// A quality identifier such as `"maj7"` that names no known quality.
    #[error("Unknown chord quality: {0}")]
    UnknownQuality(String),

    /// A tonic name that is not one of the 12 supported major keys.
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Progression length of zero, or outside the configured range.
    #[error("Invalid progression length {length} (expected {min}-{max})")]
    InvalidLength { length: usize, min: usize, max: usize },

    /// No chord types selected, so there is nothing to draw from.
    #[error("Chord pool is empty: select triads, sevenths, or both")]
    EmptyPool,

    /// Timer duration outside the allowed range.
    #[error("Invalid timer duration {seconds}s (expected {min}-{max}s)")]
    InvalidTimer { seconds: u64, min: u64, max: u64 },

    /// Settings text that could not be deserialised.
    #[error("Invalid settings: {0}")]
    SettingsError(String),

    /// A session operation invoked on a screen that does not accept it.
    #[error("Operation not allowed on the {actual:?} screen (expected {expected:?})")]
    WrongScreen { expected: Screen, actual: Screen },
}
