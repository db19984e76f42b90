//! # Drill Session
//!
//! All mutable state of one player's game, owned by the caller. The catalog
//! and generator are stateless; a `Session` is what a front end keeps between
//! interactions and hands back on every button press.
//!
//! ## Screens
//! ```text
//! Settings --start_game--> Playing --submit--> Feedback --next_round--> Playing
//!    ^                        |                    |
//!    |                        +--tick (time up)--> GameOver <--(time up)--+
//!    +----------------back_to_settings-------------+
//! ```
//!
//! ## Slot Editing
//! While playing, one slot is active. Degree and quality picks land on the
//! active slot in either order; with auto-advance on, focus moves to the next
//! slot once both halves are set. In quick mode (one triad per round) a
//! degree pick fills in the diatonic quality and submits straight away.
//!
//! ## Time
//! The countdown is advisory. Callers pass the current [`Instant`] into
//! [`Session::tick`], [`Session::time_remaining`] and [`Session::next_round`];
//! the session never reads the clock itself.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::DrillError;
use crate::generator::{build_pool, draw_progression, Pool, Progression};
use crate::quality::{Degree, Quality};
use crate::roman::roman_numeral;
use crate::settings::DrillSettings;
use crate::validate::{grade, Response, RoundResult, SlotAnswer};

/// Which screen the front end should be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    Settings,
    Playing,
    Feedback,
    GameOver,
}

/// Running totals for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub score: i32,
    pub correct: u32,
    pub incorrect: u32,
}

impl Scoreboard {
    pub fn record(&mut self, result: &RoundResult) {
        self.score += result.score_delta();
        if result.correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    pub fn rounds(&self) -> u32 {
        self.correct + self.incorrect
    }
}

#[derive(Debug)]
pub struct Session {
    settings: DrillSettings,
    pool: Pool,
    screen: Screen,
    progression: Option<Progression>,
    slots: Vec<SlotAnswer>,
    active_slot: usize,
    started_at: Option<Instant>,
    scoreboard: Scoreboard,
    last_result: Option<RoundResult>,
}

impl Session {
    pub fn new(settings: DrillSettings) -> Result<Self, DrillError> {
        settings.validate()?;
        let pool = build_pool(settings.chord_types);
        Ok(Session {
            settings,
            pool,
            screen: Screen::Settings,
            progression: None,
            slots: Vec::new(),
            active_slot: 0,
            started_at: None,
            scoreboard: Scoreboard::default(),
            last_result: None,
        })
    }

    pub fn settings(&self) -> &DrillSettings {
        &self.settings
    }

    /// Replace the settings between games and rebuild the pool.
    pub fn apply_settings(&mut self, settings: DrillSettings) -> Result<(), DrillError> {
        if !matches!(self.screen, Screen::Settings | Screen::GameOver) {
            return Err(DrillError::WrongScreen {
                expected: Screen::Settings,
                actual: self.screen,
            });
        }
        settings.validate()?;
        self.pool = build_pool(settings.chord_types);
        self.settings = settings;
        Ok(())
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn progression(&self) -> Option<&Progression> {
        self.progression.as_ref()
    }

    pub fn key_display(&self) -> Option<String> {
        self.progression.as_ref().map(Progression::key_display)
    }

    pub fn slot_answers(&self) -> &[SlotAnswer] {
        &self.slots
    }

    /// Numeral currently spelled by a slot, if both halves are picked.
    pub fn slot_roman(&self, slot: usize) -> Option<String> {
        let answer = self.slots.get(slot)?;
        Some(roman_numeral(answer.degree?, answer.quality?))
    }

    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn is_quick_mode(&self) -> bool {
        self.settings.is_quick_mode()
    }

    /// Reset the score, start the clock and deal the first round.
    pub fn start_game<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> Result<(), DrillError> {
        self.scoreboard = Scoreboard::default();
        self.last_result = None;
        self.started_at = Some(now);
        self.deal(rng)?;
        info!(
            length = self.settings.progression_length,
            quick = self.is_quick_mode(),
            "game started"
        );
        Ok(())
    }

    fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DrillError> {
        let progression = draw_progression(&self.pool, self.settings.progression_length, rng)?;
        self.slots = vec![SlotAnswer::default(); progression.len()];
        self.progression = Some(progression);
        self.active_slot = 0;
        self.screen = Screen::Playing;
        Ok(())
    }

    /// Time left on the countdown; `None` when the game is untimed.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        let limit = self.settings.timer?;
        let elapsed = self
            .started_at
            .map_or(Duration::ZERO, |start| now.saturating_duration_since(start));
        Some(limit.saturating_sub(elapsed))
    }

    pub fn is_time_up(&self, now: Instant) -> bool {
        self.time_remaining(now).is_some_and(|left| left.is_zero())
    }

    /// Periodic refresh: ends the game if the countdown ran out mid-round.
    pub fn tick(&mut self, now: Instant) -> Screen {
        if self.screen == Screen::Playing && self.is_time_up(now) {
            self.finish();
        }
        self.screen
    }

    fn finish(&mut self) {
        self.screen = Screen::GameOver;
        info!(
            score = self.scoreboard.score,
            correct = self.scoreboard.correct,
            incorrect = self.scoreboard.incorrect,
            "game over"
        );
    }

    fn ensure_screen(&self, expected: Screen) -> Result<(), DrillError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(DrillError::WrongScreen { expected, actual: self.screen })
        }
    }

    /// Pick a degree for the active slot.
    ///
    /// In quick mode this is the whole answer: the diatonic triad quality is
    /// filled in and the round is submitted.
    pub fn set_degree(&mut self, degree: Degree) -> Result<(), DrillError> {
        self.ensure_screen(Screen::Playing)?;
        let slot = self.active_slot;

        if self.is_quick_mode() {
            self.slots[slot] = SlotAnswer::quick(degree);
            debug!(slot, degree = degree.get(), "quick answer");
            self.submit()?;
            return Ok(());
        }

        self.slots[slot].degree = Some(degree);
        debug!(slot, degree = degree.get(), "degree picked");
        if self.settings.auto_advance && self.slots[slot].quality.is_some() {
            self.advance_slot()?;
        }
        Ok(())
    }

    /// Pick a quality for the active slot.
    pub fn set_quality(&mut self, quality: Quality) -> Result<(), DrillError> {
        self.ensure_screen(Screen::Playing)?;
        let slot = self.active_slot;
        self.slots[slot].quality = Some(quality);
        debug!(slot, quality = quality.id(), "quality picked");
        if self.settings.auto_advance && self.slots[slot].degree.is_some() {
            self.advance_slot()?;
        }
        Ok(())
    }

    /// Step the active slot's quality forward (`1`) or back (`-1`).
    pub fn cycle_quality(&mut self, direction: i32) -> Result<(), DrillError> {
        self.ensure_screen(Screen::Playing)?;
        let slot = &mut self.slots[self.active_slot];
        slot.quality = Some(Quality::cycle_from(slot.quality, direction));
        Ok(())
    }

    pub fn advance_slot(&mut self) -> Result<(), DrillError> {
        self.ensure_screen(Screen::Playing)?;
        if self.active_slot + 1 < self.slots.len() {
            self.active_slot += 1;
        }
        Ok(())
    }

    pub fn prev_slot(&mut self) -> Result<(), DrillError> {
        self.ensure_screen(Screen::Playing)?;
        self.active_slot = self.active_slot.saturating_sub(1);
        Ok(())
    }

    /// Focus a slot directly; indices past the end select the last slot.
    pub fn focus_slot(&mut self, slot: usize) -> Result<(), DrillError> {
        self.ensure_screen(Screen::Playing)?;
        self.active_slot = slot.min(self.slots.len().saturating_sub(1));
        Ok(())
    }

    /// Grade the structured slot answers.
    pub fn submit(&mut self) -> Result<&RoundResult, DrillError> {
        let result = grade(self.current_round()?, &self.slots);
        Ok(self.record(result))
    }

    /// Grade typed answers, one per slot.
    pub fn submit_text<A: Response>(&mut self, answers: &[A]) -> Result<&RoundResult, DrillError> {
        let result = grade(self.current_round()?, answers);
        Ok(self.record(result))
    }

    fn current_round(&self) -> Result<&Progression, DrillError> {
        self.ensure_screen(Screen::Playing)?;
        self.progression.as_ref().ok_or(DrillError::WrongScreen {
            expected: Screen::Playing,
            actual: self.screen,
        })
    }

    fn record(&mut self, result: RoundResult) -> &RoundResult {
        self.scoreboard.record(&result);
        self.screen = Screen::Feedback;
        info!(
            key = %result.key,
            correct = result.correct,
            score = self.scoreboard.score,
            "round graded"
        );
        self.last_result.insert(result)
    }

    /// Leave the feedback screen: next round, or game over if time ran out.
    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> Result<(), DrillError> {
        self.ensure_screen(Screen::Feedback)?;
        if self.is_time_up(now) {
            self.finish();
            return Ok(());
        }
        self.deal(rng)
    }

    pub fn back_to_settings(&mut self) {
        self.screen = Screen::Settings;
        self.progression = None;
        self.slots.clear();
        self.active_slot = 0;
    }
}
