//! Zodiac reference data - the twelve signs with their constellations

use crate::data::{Element, StarCoordinate, TriviaQuestion};

/// A zodiac sign with its story, astronomy card, and games
#[derive(Debug, Clone, Copy)]
pub struct ZodiacSign {
    pub id: &'static str,
    pub name: &'static str,
    pub sanskrit_name: &'static str,
    pub element: Element,
    pub symbol: &'static str,
    pub guardian: &'static str,
    pub traits: &'static [&'static str],
    pub description: &'static str,
    pub brightest_star: &'static str,
    pub best_viewing_season: &'static str,
    pub astronomy_fact: &'static str,
    /// Constellation layout; the trace game connects these in order
    pub constellation_stars: &'static [StarCoordinate],
    pub trivia: TriviaQuestion,
}

/// The twelve signs in zodiacal order
pub static ZODIAC_SIGNS: &[ZodiacSign] = &[
    ZodiacSign {
        id: "aries",
        name: "Aries",
        sanskrit_name: "Mesha",
        element: Element::Fire,
        symbol: "\u{2648}",
        guardian: "The Ram",
        traits: &["Brave", "Active"],
        description: "Always ready for an adventure!",
        brightest_star: "Hamal",
        best_viewing_season: "Autumn",
        astronomy_fact: "The star Hamal is an orange giant, twice as massive as our Sun!",
        constellation_stars: &[
            StarCoordinate { x: 20.0, y: 60.0 },
            StarCoordinate { x: 40.0, y: 50.0 },
            StarCoordinate { x: 60.0, y: 45.0 },
            StarCoordinate { x: 80.0, y: 30.0 },
        ],
        trivia: TriviaQuestion {
            question: "What animal represents Aries?",
            options: &["Lion", "Ram", "Fish"],
            correct_answer: 1,
        },
    },
    ZodiacSign {
        id: "taurus",
        name: "Taurus",
        sanskrit_name: "Vrishabha",
        element: Element::Earth,
        symbol: "\u{2649}",
        guardian: "The Bull",
        traits: &["Strong", "Patient"],
        description: "Loves yummy food and comfort.",
        brightest_star: "Aldebaran",
        best_viewing_season: "Winter",
        astronomy_fact: "Aldebaran is the \"Bull's Eye\" and glows red!",
        constellation_stars: &[
            StarCoordinate { x: 30.0, y: 70.0 },
            StarCoordinate { x: 45.0, y: 60.0 },
            StarCoordinate { x: 60.0, y: 55.0 },
            StarCoordinate { x: 75.0, y: 40.0 },
            StarCoordinate { x: 50.0, y: 30.0 },
            StarCoordinate { x: 25.0, y: 40.0 },
        ],
        trivia: TriviaQuestion {
            question: "Taurus is an ____ sign.",
            options: &["Air", "Earth", "Fire"],
            correct_answer: 1,
        },
    },
    ZodiacSign {
        id: "gemini",
        name: "Gemini",
        sanskrit_name: "Mithuna",
        element: Element::Air,
        symbol: "\u{264A}",
        guardian: "The Twins",
        traits: &["Smart", "Chatty"],
        description: "Curious about everything!",
        brightest_star: "Pollux",
        best_viewing_season: "Winter",
        astronomy_fact: "Castor and Pollux are the \"Twin stars\" at the head of the constellation.",
        constellation_stars: &[
            StarCoordinate { x: 30.0, y: 30.0 },
            StarCoordinate { x: 30.0, y: 70.0 },
            StarCoordinate { x: 70.0, y: 30.0 },
            StarCoordinate { x: 70.0, y: 70.0 },
            StarCoordinate { x: 50.0, y: 50.0 },
        ],
        trivia: TriviaQuestion {
            question: "Gemini is represented by...",
            options: &["The Twins", "The Scales", "The Crab"],
            correct_answer: 0,
        },
    },
    ZodiacSign {
        id: "cancer",
        name: "Cancer",
        sanskrit_name: "Karka",
        element: Element::Water,
        symbol: "\u{264B}",
        guardian: "The Crab",
        traits: &["Caring", "Loving"],
        description: "Protects friends and family.",
        brightest_star: "Altarf",
        best_viewing_season: "Spring",
        astronomy_fact: "Cancer is one of the faintest constellations, hard to see in the city!",
        constellation_stars: &[
            StarCoordinate { x: 50.0, y: 50.0 },
            StarCoordinate { x: 20.0, y: 80.0 },
            StarCoordinate { x: 80.0, y: 80.0 },
            StarCoordinate { x: 50.0, y: 20.0 },
        ],
        trivia: TriviaQuestion {
            question: "Which element is Cancer?",
            options: &["Fire", "Water", "Earth"],
            correct_answer: 1,
        },
    },
    ZodiacSign {
        id: "leo",
        name: "Leo",
        sanskrit_name: "Simha",
        element: Element::Fire,
        symbol: "\u{264C}",
        guardian: "The Lion",
        traits: &["Leader", "Proud"],
        description: "Shines bright like the Sun.",
        brightest_star: "Regulus",
        best_viewing_season: "Spring",
        astronomy_fact: "Regulus means \"Little King\". It sits at the heart of the Lion.",
        constellation_stars: &[
            StarCoordinate { x: 70.0, y: 60.0 },
            StarCoordinate { x: 50.0, y: 80.0 },
            StarCoordinate { x: 30.0, y: 60.0 },
            StarCoordinate { x: 40.0, y: 40.0 },
            StarCoordinate { x: 50.0, y: 30.0 },
            StarCoordinate { x: 65.0, y: 20.0 },
        ],
        trivia: TriviaQuestion {
            question: "The bright star Regulus is in...",
            options: &["Leo", "Virgo", "Pisces"],
            correct_answer: 0,
        },
    },
    ZodiacSign {
        id: "virgo",
        name: "Virgo",
        sanskrit_name: "Kanya",
        element: Element::Earth,
        symbol: "\u{264D}",
        guardian: "The Maiden",
        traits: &["Helpful", "Neat"],
        description: "Loves to solve puzzles.",
        brightest_star: "Spica",
        best_viewing_season: "Spring",
        astronomy_fact: "Spica is a bright blue giant star, 260 light-years away!",
        constellation_stars: &[
            StarCoordinate { x: 50.0, y: 20.0 },
            StarCoordinate { x: 30.0, y: 40.0 },
            StarCoordinate { x: 30.0, y: 70.0 },
            StarCoordinate { x: 50.0, y: 80.0 },
            StarCoordinate { x: 70.0, y: 70.0 },
            StarCoordinate { x: 70.0, y: 40.0 },
        ],
        trivia: TriviaQuestion {
            question: "Virgo's symbol is...",
            options: &["The Lion", "The Maiden", "The Archer"],
            correct_answer: 1,
        },
    },
    ZodiacSign {
        id: "libra",
        name: "Libra",
        sanskrit_name: "Tula",
        element: Element::Air,
        symbol: "\u{264E}",
        guardian: "The Scales",
        traits: &["Fair", "Friendly"],
        description: "Wants everyone to be happy.",
        brightest_star: "Zubeneschamali",
        best_viewing_season: "Summer",
        astronomy_fact: "This is the only zodiac sign that is an object (scales), not an animal or person!",
        constellation_stars: &[
            StarCoordinate { x: 50.0, y: 20.0 },
            StarCoordinate { x: 20.0, y: 50.0 },
            StarCoordinate { x: 80.0, y: 50.0 },
            StarCoordinate { x: 50.0, y: 80.0 },
        ],
        trivia: TriviaQuestion {
            question: "What does Libra measure?",
            options: &["Balance", "Temperature", "Speed"],
            correct_answer: 0,
        },
    },
    ZodiacSign {
        id: "scorpio",
        name: "Scorpio",
        sanskrit_name: "Vrishchika",
        element: Element::Water,
        symbol: "\u{264F}",
        guardian: "The Scorpion",
        traits: &["Secretive", "Deep"],
        description: "Full of mystery and power.",
        brightest_star: "Antares",
        best_viewing_season: "Summer",
        astronomy_fact: "Antares is a red supergiant star. Its name means \"Rival of Mars\".",
        constellation_stars: &[
            StarCoordinate { x: 80.0, y: 20.0 },
            StarCoordinate { x: 70.0, y: 40.0 },
            StarCoordinate { x: 60.0, y: 50.0 },
            StarCoordinate { x: 50.0, y: 60.0 },
            StarCoordinate { x: 40.0, y: 70.0 },
            StarCoordinate { x: 20.0, y: 60.0 },
        ],
        trivia: TriviaQuestion {
            question: "Antares is a star that looks...",
            options: &["Blue", "Red", "Green"],
            correct_answer: 1,
        },
    },
    ZodiacSign {
        id: "sagittarius",
        name: "Sagittarius",
        sanskrit_name: "Dhanu",
        element: Element::Fire,
        symbol: "\u{2650}",
        guardian: "The Archer",
        traits: &["Fun", "Honest"],
        description: "Loves to travel far away.",
        brightest_star: "Kaus Australis",
        best_viewing_season: "Summer",
        astronomy_fact: "The center of our Milky Way galaxy is located in the direction of Sagittarius!",
        constellation_stars: &[
            StarCoordinate { x: 30.0, y: 70.0 },
            StarCoordinate { x: 70.0, y: 70.0 },
            StarCoordinate { x: 80.0, y: 50.0 },
            StarCoordinate { x: 50.0, y: 20.0 },
            StarCoordinate { x: 20.0, y: 50.0 },
        ],
        trivia: TriviaQuestion {
            question: "Sagittarius looks like a...",
            options: &["Teapot", "Box", "Circle"],
            correct_answer: 0,
        },
    },
    ZodiacSign {
        id: "capricorn",
        name: "Capricorn",
        sanskrit_name: "Makara",
        element: Element::Earth,
        symbol: "\u{2651}",
        guardian: "The Sea-Goat",
        traits: &["Hardworking", "Wise"],
        description: "Climbs the highest mountains.",
        brightest_star: "Deneb Algedi",
        best_viewing_season: "Autumn",
        astronomy_fact: "Capricorn is one of the oldest known constellations.",
        constellation_stars: &[
            StarCoordinate { x: 20.0, y: 20.0 },
            StarCoordinate { x: 50.0, y: 50.0 },
            StarCoordinate { x: 80.0, y: 20.0 },
            StarCoordinate { x: 50.0, y: 80.0 },
        ],
        trivia: TriviaQuestion {
            question: "Capricorn represents a...",
            options: &["Sea-Goat", "Water Bearer", "Ram"],
            correct_answer: 0,
        },
    },
    ZodiacSign {
        id: "aquarius",
        name: "Aquarius",
        sanskrit_name: "Kumbha",
        element: Element::Air,
        symbol: "\u{2652}",
        guardian: "The Water Bearer",
        traits: &["Unique", "Kind"],
        description: "Invents new cool things.",
        brightest_star: "Sadalsuud",
        best_viewing_season: "Autumn",
        astronomy_fact: "Sadalsuud means \"Luck of Lucks\". It is a rare yellow supergiant.",
        constellation_stars: &[
            StarCoordinate { x: 20.0, y: 30.0 },
            StarCoordinate { x: 35.0, y: 50.0 },
            StarCoordinate { x: 50.0, y: 30.0 },
            StarCoordinate { x: 65.0, y: 50.0 },
            StarCoordinate { x: 80.0, y: 30.0 },
        ],
        trivia: TriviaQuestion {
            question: "Aquarius is an ____ sign.",
            options: &["Water", "Air", "Earth"],
            correct_answer: 1,
        },
    },
    ZodiacSign {
        id: "pisces",
        name: "Pisces",
        sanskrit_name: "Meena",
        element: Element::Water,
        symbol: "\u{2653}",
        guardian: "The Fish",
        traits: &["Dreamy", "Artistic"],
        description: "Lost in a world of imagination.",
        brightest_star: "Alpherg",
        best_viewing_season: "Autumn",
        astronomy_fact: "Pisces is two fish tied together by a cord so they don't get lost!",
        constellation_stars: &[
            StarCoordinate { x: 20.0, y: 20.0 },
            StarCoordinate { x: 40.0, y: 50.0 },
            StarCoordinate { x: 20.0, y: 80.0 },
            StarCoordinate { x: 80.0, y: 50.0 },
        ],
        trivia: TriviaQuestion {
            question: "How many fish are in Pisces?",
            options: &["One", "Two", "Three"],
            correct_answer: 1,
        },
    },
];

/// Look up a sign by id
pub fn sign(id: &str) -> Option<&'static ZodiacSign> {
    ZODIAC_SIGNS.iter().find(|s| s.id == id)
}
