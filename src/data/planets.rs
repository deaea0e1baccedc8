//! Planet reference data - the nine Vedic grahas and the real solar system

/// One of the Navagrahas, the nine bodies of Vedic astrology
///
/// Reference data only; the grahas have no computed behavior.
#[derive(Debug, Clone, Copy)]
pub struct Navagraha {
    pub id: &'static str,
    pub name: &'static str,
    pub sanskrit_name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Relative size for visual layout
    pub size: f32,
    /// Relative orbit speed for visual layout
    pub orbit_speed: f32,
}

/// The nine grahas in traditional order
pub static NAVAGRAHAS: &[Navagraha] = &[
    Navagraha {
        id: "sun",
        name: "Sun",
        sanskrit_name: "Surya",
        color: "#FDB813",
        description: "The King of the Planets. Full of energy and light!",
        icon: "\u{2600}\u{FE0F}",
        size: 60.0,
        orbit_speed: 0.0,
    },
    Navagraha {
        id: "moon",
        name: "Moon",
        sanskrit_name: "Chandra",
        color: "#F4F6F0",
        description: "The Queen. Rules emotions and mind.",
        icon: "\u{1F319}",
        size: 25.0,
        orbit_speed: 1.0,
    },
    Navagraha {
        id: "mars",
        name: "Mars",
        sanskrit_name: "Mangal",
        color: "#E27B58",
        description: "The Warrior. Full of action and courage.",
        icon: "\u{1F534}",
        size: 30.0,
        orbit_speed: 2.0,
    },
    Navagraha {
        id: "mercury",
        name: "Mercury",
        sanskrit_name: "Budh",
        color: "#A5C9CA",
        description: "The Messenger. Smart and quick.",
        icon: "\u{263F}\u{FE0F}",
        size: 20.0,
        orbit_speed: 4.0,
    },
    Navagraha {
        id: "jupiter",
        name: "Jupiter",
        sanskrit_name: "Guru",
        color: "#D4AF37",
        description: "The Teacher. Brings luck and wisdom.",
        icon: "\u{2643}",
        size: 50.0,
        orbit_speed: 10.0,
    },
    Navagraha {
        id: "venus",
        name: "Venus",
        sanskrit_name: "Shukra",
        color: "#E6A9EC",
        description: "The Artist. Loves beauty and fun.",
        icon: "\u{2640}\u{FE0F}",
        size: 30.0,
        orbit_speed: 3.0,
    },
    Navagraha {
        id: "saturn",
        name: "Saturn",
        sanskrit_name: "Shani",
        color: "#5C5C5C",
        description: "The Judge. Teaches discipline and hard work.",
        icon: "\u{1FA90}",
        size: 45.0,
        orbit_speed: 25.0,
    },
    Navagraha {
        id: "rahu",
        name: "Rahu",
        sanskrit_name: "Rahu",
        color: "#4B0082",
        description: "The Shadow. Mysterious and ambitious.",
        icon: "\u{1F432}",
        size: 35.0,
        orbit_speed: 18.0,
    },
    Navagraha {
        id: "ketu",
        name: "Ketu",
        sanskrit_name: "Ketu",
        color: "#8B0000",
        description: "The Tail. Spiritual and detached.",
        icon: "\u{1F409}",
        size: 35.0,
        orbit_speed: 18.0,
    },
];

/// A real solar-system planet for the orbit-builder game
#[derive(Debug, Clone, Copy)]
pub struct SolarPlanet {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub size: f32,
    pub orbit_speed: f32,
    pub description: &'static str,
    pub orbit_period: &'static str,
    pub moons: u32,
    pub atmosphere: &'static str,
    pub composition: &'static str,
    pub temperature: &'static str,
    pub fun_fact: &'static str,
}

/// The eight planets in Sun-distance order (also the placement order)
pub static SOLAR_SYSTEM: &[SolarPlanet] = &[
    SolarPlanet {
        id: "mercury",
        name: "Mercury",
        color: "#A5C9CA",
        icon: "\u{263F}\u{FE0F}",
        size: 15.0,
        orbit_speed: 4.0,
        description: "The smallest planet closest to the Sun.",
        orbit_period: "88 Days",
        moons: 0,
        atmosphere: "Thin (Oxygen, Sodium)",
        composition: "Rocky",
        temperature: "167\u{B0}C",
        fun_fact: "A year on Mercury is shorter than a day on Mercury!",
    },
    SolarPlanet {
        id: "venus",
        name: "Venus",
        color: "#E6A9EC",
        icon: "\u{2640}\u{FE0F}",
        size: 35.0,
        orbit_speed: 3.0,
        description: "The hottest planet wrapped in thick clouds.",
        orbit_period: "225 Days",
        moons: 0,
        atmosphere: "Thick Carbon Dioxide",
        composition: "Rocky",
        temperature: "464\u{B0}C",
        fun_fact: "Venus spins backwards compared to other planets!",
    },
    SolarPlanet {
        id: "earth",
        name: "Earth",
        color: "#4F86F7",
        icon: "\u{1F30D}",
        size: 36.0,
        orbit_speed: 2.5,
        description: "Our home! The Blue Planet.",
        orbit_period: "365 Days",
        moons: 1,
        atmosphere: "Nitrogen, Oxygen",
        composition: "Rocky & Water",
        temperature: "15\u{B0}C",
        fun_fact: "Earth is the only known planet with life.",
    },
    SolarPlanet {
        id: "mars",
        name: "Mars",
        color: "#E27B58",
        icon: "\u{1F534}",
        size: 20.0,
        orbit_speed: 2.0,
        description: "The Red Planet with giant volcanoes.",
        orbit_period: "687 Days",
        moons: 2,
        atmosphere: "Carbon Dioxide",
        composition: "Rocky & Dusty",
        temperature: "-65\u{B0}C",
        fun_fact: "Mars has the tallest volcano in the solar system, Olympus Mons.",
    },
    SolarPlanet {
        id: "jupiter",
        name: "Jupiter",
        color: "#D4AF37",
        icon: "\u{2643}",
        size: 80.0,
        orbit_speed: 1.0,
        description: "The King of Planets. A giant gas ball.",
        orbit_period: "12 Years",
        moons: 95,
        atmosphere: "Hydrogen, Helium",
        composition: "Gas Giant",
        temperature: "-110\u{B0}C",
        fun_fact: "The Great Red Spot is a storm bigger than Earth!",
    },
    SolarPlanet {
        id: "saturn",
        name: "Saturn",
        color: "#F4D03F",
        icon: "\u{1FA90}",
        size: 70.0,
        orbit_speed: 0.8,
        description: "Famous for its beautiful rings.",
        orbit_period: "29 Years",
        moons: 146,
        atmosphere: "Hydrogen, Helium",
        composition: "Gas Giant",
        temperature: "-140\u{B0}C",
        fun_fact: "Saturn could float in a giant bathtub of water.",
    },
    SolarPlanet {
        id: "uranus",
        name: "Uranus",
        color: "#73C6B6",
        icon: "\u{2645}",
        size: 50.0,
        orbit_speed: 0.5,
        description: "The Ice Giant that spins on its side.",
        orbit_period: "84 Years",
        moons: 27,
        atmosphere: "Hydrogen, Helium, Methane",
        composition: "Ice Giant",
        temperature: "-195\u{B0}C",
        fun_fact: "It is the coldest planet in the solar system.",
    },
    SolarPlanet {
        id: "neptune",
        name: "Neptune",
        color: "#2E86C1",
        icon: "\u{2646}",
        size: 48.0,
        orbit_speed: 0.4,
        description: "The windy, blue Ice Giant far away.",
        orbit_period: "165 Years",
        moons: 14,
        atmosphere: "Hydrogen, Helium, Methane",
        composition: "Ice Giant",
        temperature: "-200\u{B0}C",
        fun_fact: "Neptune has the strongest winds in the solar system.",
    },
];

/// Look up a solar-system planet by id
pub fn solar_planet(id: &str) -> Option<&'static SolarPlanet> {
    SOLAR_SYSTEM.iter().find(|p| p.id == id)
}
