//! Lunar mansion reference data - the nakshatra trail
//!
//! The village path covers a subset of the 27 nakshatras: the first seven
//! plus Revati, the last. Ids keep their traditional 1-27 numbering.

use crate::data::TriviaQuestion;

/// One lunar mansion on the village trail
#[derive(Debug, Clone, Copy)]
pub struct Nakshatra {
    /// Traditional number, 1 (Ashwini) through 27 (Revati)
    pub id: u32,
    pub name: &'static str,
    pub symbol: &'static str,
    pub animal: &'static str,
    pub meaning: &'static str,
    pub deity: &'static str,
    pub task: TriviaQuestion,
}

pub static NAKSHATRAS: &[Nakshatra] = &[
    Nakshatra {
        id: 1,
        name: "Ashwini",
        symbol: "Horse Head",
        animal: "Horse",
        meaning: "The Star of Transport",
        deity: "Ashwini Kumaras",
        task: TriviaQuestion {
            question: "What is the animal symbol for Ashwini?",
            options: &["Elephant", "Horse", "Snake"],
            correct_answer: 1,
        },
    },
    Nakshatra {
        id: 2,
        name: "Bharani",
        symbol: "Yoni",
        animal: "Elephant",
        meaning: "The Star of Restraint",
        deity: "Yama",
        task: TriviaQuestion {
            question: "Who is the deity of Bharani?",
            options: &["Agni", "Yama", "Indra"],
            correct_answer: 1,
        },
    },
    Nakshatra {
        id: 3,
        name: "Krittika",
        symbol: "Knife",
        animal: "Sheep",
        meaning: "The Star of Fire",
        deity: "Agni",
        task: TriviaQuestion {
            question: "Krittika is known as the Star of...",
            options: &["Water", "Fire", "Wind"],
            correct_answer: 1,
        },
    },
    Nakshatra {
        id: 4,
        name: "Rohini",
        symbol: "Chariot",
        animal: "Serpent",
        meaning: "The Star of Ascent",
        deity: "Brahma",
        task: TriviaQuestion {
            question: "What vehicle represents Rohini?",
            options: &["Car", "Boat", "Chariot"],
            correct_answer: 2,
        },
    },
    Nakshatra {
        id: 5,
        name: "Mrigashira",
        symbol: "Deer Head",
        animal: "Serpent",
        meaning: "The Searching Star",
        deity: "Soma",
        task: TriviaQuestion {
            question: "Mrigashira is represented by the head of a...",
            options: &["Lion", "Deer", "Eagle"],
            correct_answer: 1,
        },
    },
    Nakshatra {
        id: 6,
        name: "Ardra",
        symbol: "Teardrop",
        animal: "Dog",
        meaning: "The Star of Sorrow",
        deity: "Rudra",
        task: TriviaQuestion {
            question: "The symbol for Ardra is a...",
            options: &["Smile", "Teardrop", "Sun"],
            correct_answer: 1,
        },
    },
    Nakshatra {
        id: 7,
        name: "Punarvasu",
        symbol: "Bow & Quiver",
        animal: "Cat",
        meaning: "The Star of Renewal",
        deity: "Aditi",
        task: TriviaQuestion {
            question: "Punarvasu brings...",
            options: &["Renewal", "Storms", "Darkness"],
            correct_answer: 0,
        },
    },
    Nakshatra {
        id: 27,
        name: "Revati",
        symbol: "Drum",
        animal: "Elephant",
        meaning: "The Wealthy Star",
        deity: "Pushan",
        task: TriviaQuestion {
            question: "Revati is the ___ Nakshatra.",
            options: &["First", "Last (27th)", "Middle"],
            correct_answer: 1,
        },
    },
];
