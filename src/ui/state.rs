//! Session state - screen routing, player progress, action log

use crate::core::config::AppConfig;
use crate::core::types::PlayerState;
use crate::games::eclipse::EclipseTheater;
use crate::games::moon::MoonLab;
use crate::games::nakshatra::NakshatraTrail;
use crate::games::orbit::OrbitBuilder;
use crate::games::seasons::SeasonLab;
use crate::games::zodiac::ZodiacExplorer;
use crate::ui::starfield::Starfield;
use std::collections::VecDeque;

/// Maximum action log entries to keep
const MAX_LOG_ENTRIES: usize = 50;

/// Default star field bounds for the console build
const FIELD_WIDTH: f32 = 1280.0;
const FIELD_HEIGHT: f32 = 720.0;

/// The screens a player can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Hub,
    SkyPlayground,
    ZodiacRealms,
    PlanetWorlds,
    NakshatraVillage,
    BirthMap,
    ParentMode,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Hub => "Cosmic Clock Hub",
            Screen::SkyPlayground => "Sky Playground",
            Screen::ZodiacRealms => "Zodiac Realms",
            Screen::PlanetWorlds => "Planet Worlds",
            Screen::NakshatraVillage => "Nakshatra Village",
            Screen::BirthMap => "Birth Sky Map",
            Screen::ParentMode => "Parent & Guardian Mode",
        }
    }
}

/// An entry in the action log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub message: String,
    pub category: LogCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Reward,
    Game,
    System,
}

/// One play session: the player, the current screen, and every screen's
/// game state. All mutable state in the app lives here, each piece owned
/// by exactly one screen.
#[derive(Debug)]
pub struct Session {
    pub screen: Screen,
    pub player: PlayerState,
    pub orbit: OrbitBuilder,
    pub seasons: SeasonLab,
    pub eclipse: EclipseTheater,
    pub moon: MoonLab,
    pub zodiac: ZodiacExplorer,
    pub nakshatra: NakshatraTrail,
    pub starfield: Starfield,
    pub action_log: VecDeque<LogEntry>,
}

impl Session {
    pub fn new(config: &AppConfig, starfield_seed: u64) -> Self {
        Self {
            screen: Screen::Hub,
            player: PlayerState::new(config.starting_shards),
            orbit: OrbitBuilder::new(),
            seasons: SeasonLab::new(config.orbit_step),
            eclipse: EclipseTheater::new(),
            moon: MoonLab::new(),
            zodiac: ZodiacExplorer::new(),
            nakshatra: NakshatraTrail::new(),
            starfield: Starfield::new(FIELD_WIDTH, FIELD_HEIGHT, config.star_count, starfield_seed),
            action_log: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }

    /// Navigate to a screen
    pub fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "screen change");
            self.screen = screen;
        }
    }

    /// Add an entry to the action log
    pub fn log(&mut self, message: String, category: LogCategory) {
        if self.action_log.len() >= MAX_LOG_ENTRIES {
            self.action_log.pop_front();
        }
        self.action_log.push_back(LogEntry { message, category });
    }

    /// Advance the per-frame animations (star field, auto-orbit)
    pub fn animation_tick(&mut self) {
        self.starfield.step();
        self.seasons.advance();
    }
}
