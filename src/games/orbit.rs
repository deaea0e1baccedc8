//! Sky Playground - build the solar system planet by planet
//!
//! The mission is always the innermost unplaced planet, so a full
//! playthrough assembles the system in Sun-distance order. A correct
//! selection stages the planet behind its info card; confirming moves it
//! from the inventory pool into orbit. Pool membership doubles as the
//! solved-set: a planet can only be placed (and credited) once.

use crate::core::types::RewardSink;
use crate::data::planets::{SolarPlanet, SOLAR_SYSTEM};

/// Shards for placing a planet
pub const PLACEMENT_REWARD: u32 = 50;

/// Outcome of tapping a planet in the inventory bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Right planet for the mission; staged pending confirmation
    Staged,
    /// Wrong planet for the current mission
    Miss,
    /// Planet already in orbit; show its info card only
    AlreadyPlaced,
    /// Unknown planet id
    Unknown,
}

/// Orbit-builder state for the Sky Playground screen
#[derive(Debug)]
pub struct OrbitBuilder {
    /// Indices into [`SOLAR_SYSTEM`] already in orbit, in placement order
    placed: Vec<usize>,
    /// Indices still in the inventory, innermost first
    available: Vec<usize>,
    /// Planet staged by a correct selection, awaiting confirmation
    staged: Option<usize>,
    /// Whether the placed planets animate along their orbits
    pub animating: bool,
    pub score: u32,
    pub feedback: String,
}

impl OrbitBuilder {
    pub fn new() -> Self {
        let mut builder = Self {
            placed: Vec::new(),
            available: (0..SOLAR_SYSTEM.len()).collect(),
            staged: None,
            animating: true,
            score: 0,
            feedback: String::new(),
        };
        builder.announce_mission();
        builder
    }

    /// The planet the player should find next (innermost unplaced)
    pub fn mission(&self) -> Option<&'static SolarPlanet> {
        self.available.first().map(|&i| &SOLAR_SYSTEM[i])
    }

    pub fn is_complete(&self) -> bool {
        self.available.is_empty()
    }

    pub fn placed(&self) -> impl Iterator<Item = &'static SolarPlanet> + '_ {
        self.placed.iter().map(|&i| &SOLAR_SYSTEM[i])
    }

    pub fn available(&self) -> impl Iterator<Item = &'static SolarPlanet> + '_ {
        self.available.iter().map(|&i| &SOLAR_SYSTEM[i])
    }

    /// The staged planet's info card, if a selection is pending
    pub fn staged(&self) -> Option<&'static SolarPlanet> {
        self.staged.map(|i| &SOLAR_SYSTEM[i])
    }

    /// Tap a planet in the inventory (or in orbit) by id
    pub fn select(&mut self, planet_id: &str) -> SelectOutcome {
        let Some(index) = SOLAR_SYSTEM.iter().position(|p| p.id == planet_id) else {
            return SelectOutcome::Unknown;
        };

        if self.placed.contains(&index) {
            return SelectOutcome::AlreadyPlaced;
        }

        match self.mission() {
            Some(mission) if mission.id == planet_id => {
                self.staged = Some(index);
                SelectOutcome::Staged
            }
            Some(mission) => {
                self.feedback = format!("Oops! That's not {}. Try again!", mission.name);
                SelectOutcome::Miss
            }
            None => SelectOutcome::AlreadyPlaced,
        }
    }

    /// Confirm the staged placement; credits only for a newly placed planet
    pub fn confirm_placement(&mut self, sink: &mut impl RewardSink) -> bool {
        let Some(index) = self.staged.take() else {
            return false;
        };

        // Only reward while the planet is still in the inventory pool.
        let Some(pos) = self.available.iter().position(|&i| i == index) else {
            return false;
        };
        self.available.remove(pos);
        self.placed.push(index);

        let planet = &SOLAR_SYSTEM[index];
        self.score += PLACEMENT_REWARD;
        sink.add_reward(PLACEMENT_REWARD);
        self.feedback = format!(
            "Great job! You placed {}. +{} Shards!",
            planet.name, PLACEMENT_REWARD
        );

        if self.is_complete() {
            self.feedback = "Solar System Complete!".to_string();
        } else {
            self.announce_mission();
        }
        true
    }

    /// Put every planet back in the inventory
    pub fn reset(&mut self) {
        self.placed.clear();
        self.available = (0..SOLAR_SYSTEM.len()).collect();
        self.staged = None;
        self.feedback = "Resetting the solar system...".to_string();
        self.announce_mission();
    }

    fn announce_mission(&mut self) {
        if let Some(next) = self.mission() {
            self.feedback = format!("Mission: Find the {}. Hint: {}", next.name, next.description);
        }
    }
}

impl Default for OrbitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSink(u32);
    impl RewardSink for CountingSink {
        fn add_reward(&mut self, amount: u32) {
            self.0 += amount;
        }
    }

    #[test]
    fn test_mission_follows_sun_distance_order() {
        let game = OrbitBuilder::new();
        assert_eq!(game.mission().unwrap().id, "mercury");
    }

    #[test]
    fn test_wrong_planet_is_a_miss() {
        let mut game = OrbitBuilder::new();
        assert_eq!(game.select("neptune"), SelectOutcome::Miss);
        assert!(game.feedback.contains("Mercury"));
        assert!(game.staged().is_none());
    }

    #[test]
    fn test_place_first_planet() {
        let mut game = OrbitBuilder::new();
        let mut sink = CountingSink(0);

        assert_eq!(game.select("mercury"), SelectOutcome::Staged);
        assert!(game.confirm_placement(&mut sink));
        assert_eq!(sink.0, PLACEMENT_REWARD);
        assert_eq!(game.score, PLACEMENT_REWARD);
        assert_eq!(game.mission().unwrap().id, "venus");
    }

    #[test]
    fn test_confirm_without_staging_is_noop() {
        let mut game = OrbitBuilder::new();
        let mut sink = CountingSink(0);
        assert!(!game.confirm_placement(&mut sink));
        assert_eq!(sink.0, 0);
    }

    #[test]
    fn test_placed_planet_never_credits_again() {
        let mut game = OrbitBuilder::new();
        let mut sink = CountingSink(0);

        game.select("mercury");
        game.confirm_placement(&mut sink);

        // Re-selecting only shows the info card, and a stale confirm does nothing.
        assert_eq!(game.select("mercury"), SelectOutcome::AlreadyPlaced);
        assert!(!game.confirm_placement(&mut sink));
        assert_eq!(sink.0, PLACEMENT_REWARD);
    }

    #[test]
    fn test_full_playthrough_completes() {
        let mut game = OrbitBuilder::new();
        let mut sink = CountingSink(0);

        for planet in SOLAR_SYSTEM {
            assert_eq!(game.select(planet.id), SelectOutcome::Staged);
            assert!(game.confirm_placement(&mut sink));
        }
        assert!(game.is_complete());
        assert!(game.mission().is_none());
        assert_eq!(sink.0, PLACEMENT_REWARD * SOLAR_SYSTEM.len() as u32);
        assert_eq!(game.feedback, "Solar System Complete!");
    }

    #[test]
    fn test_reset_restores_inventory() {
        let mut game = OrbitBuilder::new();
        let mut sink = CountingSink(0);
        game.select("mercury");
        game.confirm_placement(&mut sink);

        game.reset();
        assert_eq!(game.available().count(), SOLAR_SYSTEM.len());
        assert_eq!(game.placed().count(), 0);
        assert_eq!(game.mission().unwrap().id, "mercury");
    }
}
