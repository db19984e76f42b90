//! # Drill Settings
//!
//! Per-game configuration: which chord types to draw, how many chords per
//! round, the optional countdown, and whether slot focus advances on its own.
//!
//! Settings can be written as YAML with kebab-case keys. Every key is
//! optional and falls back to the default:
//!
//! ```yaml
//! triads: true
//! sevenths: false
//! progression-length: 4
//! timer: true
//! timer-seconds: 90
//! auto-advance: true
//! ```
//!
//! [`DrillSettings::validate`] enforces the ranges a front end should already
//! keep the user within; a session refuses settings that fail it.

use std::time::Duration;

use serde::Deserialize;

use crate::error::DrillError;
use crate::generator::ChordTypes;

pub const MIN_PROGRESSION_LENGTH: usize = 1;
pub const MAX_PROGRESSION_LENGTH: usize = 8;
pub const DEFAULT_PROGRESSION_LENGTH: usize = 4;

pub const MIN_TIMER_SECONDS: u64 = 30;
pub const MAX_TIMER_SECONDS: u64 = 600;
pub const DEFAULT_TIMER_SECONDS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillSettings {
    pub chord_types: ChordTypes,
    pub progression_length: usize,
    /// Countdown for the whole game; `None` plays untimed.
    pub timer: Option<Duration>,
    /// Move to the next slot once both degree and quality are set.
    pub auto_advance: bool,
}

impl Default for DrillSettings {
    fn default() -> Self {
        DrillSettings {
            chord_types: ChordTypes::BOTH,
            progression_length: DEFAULT_PROGRESSION_LENGTH,
            timer: Some(Duration::from_secs(DEFAULT_TIMER_SECONDS)),
            auto_advance: true,
        }
    }
}

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawSettings {
    triads: Option<bool>,
    sevenths: Option<bool>,
    progression_length: Option<usize>,
    timer: Option<bool>,
    timer_seconds: Option<u64>,
    auto_advance: Option<bool>,
}

impl DrillSettings {
    /// One triad at a time, answered by degree alone.
    pub fn quick_mode() -> Self {
        DrillSettings {
            chord_types: ChordTypes::TRIADS,
            progression_length: 1,
            timer: Some(Duration::from_secs(DEFAULT_TIMER_SECONDS)),
            auto_advance: true,
        }
    }

    /// Single-chord triad rounds take the quick input path.
    pub fn is_quick_mode(&self) -> bool {
        self.progression_length == 1 && self.chord_types == ChordTypes::TRIADS
    }

    pub fn validate(&self) -> Result<(), DrillError> {
        if self.chord_types.is_empty() {
            return Err(DrillError::EmptyPool);
        }
        if !(MIN_PROGRESSION_LENGTH..=MAX_PROGRESSION_LENGTH).contains(&self.progression_length) {
            return Err(DrillError::InvalidLength {
                length: self.progression_length,
                min: MIN_PROGRESSION_LENGTH,
                max: MAX_PROGRESSION_LENGTH,
            });
        }
        if let Some(timer) = self.timer {
            let seconds = timer.as_secs();
            if !(MIN_TIMER_SECONDS..=MAX_TIMER_SECONDS).contains(&seconds) {
                return Err(DrillError::InvalidTimer {
                    seconds,
                    min: MIN_TIMER_SECONDS,
                    max: MAX_TIMER_SECONDS,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate YAML settings. Empty input yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, DrillError> {
        let raw: RawSettings = if content.trim().is_empty() {
            RawSettings::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| DrillError::SettingsError(e.to_string()))?
        };

        let defaults = DrillSettings::default();
        let timer_on = raw.timer.unwrap_or(defaults.timer.is_some());
        let settings = DrillSettings {
            chord_types: ChordTypes {
                triads: raw.triads.unwrap_or(defaults.chord_types.triads),
                sevenths: raw.sevenths.unwrap_or(defaults.chord_types.sevenths),
            },
            progression_length: raw.progression_length.unwrap_or(defaults.progression_length),
            timer: timer_on
                .then(|| Duration::from_secs(raw.timer_seconds.unwrap_or(DEFAULT_TIMER_SECONDS))),
            auto_advance: raw.auto_advance.unwrap_or(defaults.auto_advance),
        };
        settings.validate()?;
        Ok(settings)
    }
}
