//! Earth Lab - orbit the Earth through the year and match items to seasons
//!
//! The month slider drives [`Season::from_month`]; an auto-orbit mode steps
//! the month forward each animation tick. The matching game draws a random
//! item and asks the player to park the slider in that item's season.

use crate::core::astronomy::{month_name, Season};
use crate::core::types::RewardSink;
use crate::data::levels::{SeasonItem, SEASON_ITEMS};
use rand::Rng;

/// Shards for a correct season match
pub const MATCH_REWARD: u32 = 20;

/// Outcome of submitting the current month for the target item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// First correct submit for this round
    Correct,
    /// Round already solved; no further credit
    AlreadySolved,
    Wrong,
    /// No game running
    Inactive,
}

/// Earth Lab state
#[derive(Debug)]
pub struct SeasonLab {
    /// Month value in `[0, 12)`; fractional while orbiting
    month: f64,
    /// Auto-orbit running
    pub playing: bool,
    /// Month advance per animation tick
    orbit_step: f64,
    /// Item the player must find the season for, if the game is running
    target: Option<&'static SeasonItem>,
    /// Current round already credited
    round_solved: bool,
    pub score: u32,
    pub feedback: String,
}

impl SeasonLab {
    pub fn new(orbit_step: f64) -> Self {
        Self {
            month: 5.0, // start in June like the original lab
            playing: false,
            orbit_step,
            target: None,
            round_solved: false,
            score: 0,
            feedback: String::new(),
        }
    }

    pub fn month(&self) -> f64 {
        self.month
    }

    pub fn season(&self) -> Season {
        Season::from_month(self.month)
    }

    pub fn month_label(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn target(&self) -> Option<&'static SeasonItem> {
        self.target
    }

    pub fn game_active(&self) -> bool {
        self.target.is_some()
    }

    /// Move the slider; wraps out-of-range values and stops the auto-orbit
    pub fn set_month(&mut self, month: f64) {
        self.month = month.rem_euclid(12.0);
        self.playing = false;
    }

    /// Advance the auto-orbit by one animation tick
    pub fn advance(&mut self) {
        if self.playing && self.target.is_none() {
            self.month = (self.month + self.orbit_step) % 12.0;
        }
    }

    /// Start the matching game and draw the first item
    pub fn start_game(&mut self, rng: &mut impl Rng) {
        self.playing = false;
        self.next_round(rng);
    }

    /// Draw a new target item
    pub fn next_round(&mut self, rng: &mut impl Rng) {
        let item = &SEASON_ITEMS[rng.gen_range(0..SEASON_ITEMS.len())];
        self.target = Some(item);
        self.round_solved = false;
        self.feedback = "Drag the slider to find the season!".to_string();
    }

    /// Submit the current month's season for the target item
    pub fn submit(&mut self, sink: &mut impl RewardSink) -> MatchOutcome {
        let Some(item) = self.target else {
            return MatchOutcome::Inactive;
        };

        if self.season() != item.season {
            self.feedback = format!(
                "Not quite! {} belongs in {}. Try again.",
                item.name,
                item.season.name()
            );
            return MatchOutcome::Wrong;
        }

        if self.round_solved {
            return MatchOutcome::AlreadySolved;
        }
        self.round_solved = true;
        self.score += MATCH_REWARD;
        sink.add_reward(MATCH_REWARD);
        self.feedback = format!("Correct! +{} Shards!", MATCH_REWARD);
        MatchOutcome::Correct
    }

    /// Leave the matching game
    pub fn quit_game(&mut self) {
        self.target = None;
        self.round_solved = false;
        self.feedback.clear();
    }
}
