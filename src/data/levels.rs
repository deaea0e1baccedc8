//! Level tables for the Eclipse Theater, Moon Lab, and Earth Lab games
//!
//! The angular windows and day targets are the app's canon; the asymmetric
//! values (28.5-day New Moon cut, 14.8-day Full Moon target) are intentional
//! and pinned by the integration tests.

use crate::core::astronomy::{AlignmentWindow, MoonPhase, Season};
use crate::data::TriviaQuestion;

/// One Eclipse Theater level: align the moon, then answer the quiz
#[derive(Debug, Clone, Copy)]
pub struct EclipseLevel {
    pub id: u32,
    pub title: &'static str,
    pub instruction: &'static str,
    /// Target window; wraps through 0/360 for levels 3 and 4
    pub window: AlignmentWindow,
    pub quiz: TriviaQuestion,
    /// Shown after a correct quiz answer
    pub fact: &'static str,
    pub reward: u32,
}

pub static ECLIPSE_LEVELS: &[EclipseLevel] = &[
    EclipseLevel {
        id: 1,
        title: "Level 1: The New Moon",
        instruction: "Move the Moon between the Earth and Sun, but not perfectly aligned.",
        window: AlignmentWindow::new(160.0, 200.0),
        quiz: TriviaQuestion {
            question: "When the Moon is between Earth and Sun, we can't see it. What is this phase called?",
            options: &["Full Moon", "New Moon", "Blue Moon"],
            correct_answer: 1,
        },
        fact: "Correct! The bright side is facing the Sun, so we see the shadow side!",
        reward: 20,
    },
    EclipseLevel {
        id: 2,
        title: "Level 2: Solar Eclipse",
        instruction: "Perfectly align the Moon to block the Sun!",
        window: AlignmentWindow::new(175.0, 185.0),
        quiz: TriviaQuestion {
            question: "During a Solar Eclipse, what blocks the Sun?",
            options: &["Clouds", "The Moon", "Mars"],
            correct_answer: 1,
        },
        fact: "Correct! The Moon casts a shadow on Earth, turning day into night!",
        reward: 50,
    },
    EclipseLevel {
        id: 3,
        title: "Level 3: The Full Moon",
        instruction: "Move the Moon behind the Earth.",
        window: AlignmentWindow::new(340.0, 20.0),
        quiz: TriviaQuestion {
            question: "The Earth is now between the Sun and Moon. What phase is this?",
            options: &["Full Moon", "Crescent Moon", "New Moon"],
            correct_answer: 0,
        },
        fact: "Correct! The Sun shines fully on the side of the Moon we can see.",
        reward: 20,
    },
    EclipseLevel {
        id: 4,
        title: "Level 4: Lunar Eclipse",
        instruction: "Hide the Moon in Earth's shadow!",
        window: AlignmentWindow::new(355.0, 5.0),
        quiz: TriviaQuestion {
            question: "Why does the Moon look red during a Lunar Eclipse?",
            options: &["It's hot", "Earth's atmosphere bends red light", "It's rusty"],
            correct_answer: 1,
        },
        fact: "Correct! It's called a Blood Moon because Earth's sunsets reflect onto it!",
        reward: 100,
    },
];

/// One Moon Lab level: dial the slider to the named phase
#[derive(Debug, Clone, Copy)]
pub struct MoonLevel {
    pub id: u32,
    pub target_phase: MoonPhase,
    /// Approximate day in the cycle (0-29.5); 0 also accepts 29.5
    pub target_day: f64,
    /// Accepted distance from the target, in days
    pub tolerance: f64,
    pub hint: &'static str,
    pub fact: &'static str,
    pub reward: u32,
}

pub static MOON_LEVELS: &[MoonLevel] = &[
    MoonLevel {
        id: 1,
        target_phase: MoonPhase::NewMoon,
        target_day: 0.0,
        tolerance: 1.5,
        hint: "The Moon is hidden in darkness.",
        fact: "The New Moon marks the beginning of the lunar cycle.",
        reward: 20,
    },
    MoonLevel {
        id: 2,
        target_phase: MoonPhase::FullMoon,
        target_day: 14.8,
        tolerance: 1.5,
        hint: "The Moon looks like a bright, complete circle.",
        fact: "Wolves don't actually howl at the Moon, they just communicate!",
        reward: 20,
    },
    MoonLevel {
        id: 3,
        target_phase: MoonPhase::FirstQuarter,
        target_day: 7.4,
        tolerance: 1.5,
        hint: "The Right half of the Moon is lit up.",
        fact: "It's called a Quarter Moon because it's 1/4 through orbit, even though looks half-full.",
        reward: 30,
    },
    MoonLevel {
        id: 4,
        target_phase: MoonPhase::ThirdQuarter,
        target_day: 22.1,
        tolerance: 1.5,
        hint: "The Left half of the Moon is lit up.",
        fact: "The Moon rises at midnight during this phase!",
        reward: 30,
    },
    MoonLevel {
        id: 5,
        target_phase: MoonPhase::WaxingGibbous,
        target_day: 11.0,
        tolerance: 2.0,
        hint: "Almost full! 'Waxing' means growing.",
        fact: "Gibbous means 'hump-backed' because of its shape.",
        reward: 40,
    },
];

/// A season-matching item for the Earth Lab game
#[derive(Debug, Clone, Copy)]
pub struct SeasonItem {
    pub id: u32,
    pub name: &'static str,
    pub season: Season,
    pub icon: &'static str,
}

pub static SEASON_ITEMS: &[SeasonItem] = &[
    SeasonItem { id: 1, name: "Snowman", season: Season::Winter, icon: "\u{26C4}" },
    SeasonItem { id: 2, name: "Hot Cocoa", season: Season::Winter, icon: "\u{2615}" },
    SeasonItem { id: 3, name: "Sunglasses", season: Season::Summer, icon: "\u{1F60E}" },
    SeasonItem { id: 4, name: "Ice Cream", season: Season::Summer, icon: "\u{1F366}" },
    SeasonItem { id: 5, name: "Flower", season: Season::Spring, icon: "\u{1F338}" },
    SeasonItem { id: 6, name: "Butterfly", season: Season::Spring, icon: "\u{1F98B}" },
    SeasonItem { id: 7, name: "Falling Leaf", season: Season::Autumn, icon: "\u{1F342}" },
    SeasonItem { id: 8, name: "Pumpkin", season: Season::Autumn, icon: "\u{1F383}" },
];
