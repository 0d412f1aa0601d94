//! Static word lists the oracle draws from.
//!
//! - [`PetType`] and [`Personality`] each own a prefix/base/suffix [`WordPool`]
//! - [`LoreCategory`] owns the fill-in words for the lore templates
//! - [`NAME_PATTERNS`] and [`LORE_TEMPLATES`] are the `{placeholder}` templates

use serde::Serialize;
use std::fmt;

/// Prefix, base and suffix words contributed by one pet type or personality.
#[derive(Debug, Clone, Copy)]
pub struct WordPool {
    pub prefixes: &'static [&'static str],
    pub bases: &'static [&'static str],
    pub suffixes: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Fish,
    Reptile,
    Rodent,
    #[default]
    Other,
}

impl PetType {
    pub const ALL: [PetType; 7] = [
        PetType::Dog,
        PetType::Cat,
        PetType::Bird,
        PetType::Fish,
        PetType::Reptile,
        PetType::Rodent,
        PetType::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Bird => "bird",
            PetType::Fish => "fish",
            PetType::Reptile => "reptile",
            PetType::Rodent => "rodent",
            PetType::Other => "other",
        }
    }

    /// Case-insensitive lookup of a known pet type.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.to_lowercase();
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Like [`PetType::from_key`], but anything unknown becomes `Other`.
    pub fn normalize(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    pub fn pool(self) -> &'static WordPool {
        match self {
            PetType::Dog => &DOG,
            PetType::Cat => &CAT,
            PetType::Bird => &BIRD,
            PetType::Fish => &FISH,
            PetType::Reptile => &REPTILE,
            PetType::Rodent => &RODENT,
            PetType::Other => &OTHER,
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Playful,
    Lazy,
    Fierce,
    Shy,
    Curious,
    Loving,
    Grumpy,
}

impl Personality {
    pub const ALL: [Personality; 7] = [
        Personality::Playful,
        Personality::Lazy,
        Personality::Fierce,
        Personality::Shy,
        Personality::Curious,
        Personality::Loving,
        Personality::Grumpy,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Personality::Playful => "playful",
            Personality::Lazy => "lazy",
            Personality::Fierce => "fierce",
            Personality::Shy => "shy",
            Personality::Curious => "curious",
            Personality::Loving => "loving",
            Personality::Grumpy => "grumpy",
        }
    }

    /// Case-insensitive lookup of a known personality.
    ///
    /// There is no fixed fallback: the composer picks a random personality
    /// for unknown input.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.to_lowercase();
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn pool(self) -> &'static WordPool {
        match self {
            Personality::Playful => &PLAYFUL,
            Personality::Lazy => &LAZY,
            Personality::Fierce => &FIERCE,
            Personality::Shy => &SHY,
            Personality::Curious => &CURIOUS,
            Personality::Loving => &LOVING,
            Personality::Grumpy => &GRUMPY,
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// Pet type pools

static DOG: WordPool = WordPool {
    prefixes: &[
        "Sir", "Captain", "Duke", "Lady", "Professor", "Baron", "Duchess", "King", "Queen", "Lord",
    ],
    bases: &[
        "Bark", "Woof", "Paw", "Sniff", "Fetch", "Wag", "Fluff", "Spot", "Scout", "Buddy",
    ],
    suffixes: &["ington", "ster", "ums", "y", "ie", "er", "son", "o", "a", "paws"],
};

static CAT: WordPool = WordPool {
    prefixes: &[
        "Mr.", "Ms.", "Professor", "Count", "Dr.", "Emperor", "Empress", "Prince", "Princess",
        "Whisker",
    ],
    bases: &[
        "Purr", "Meow", "Whisker", "Pounce", "Claw", "Scratch", "Nap", "Shadow", "Fluff",
        "Mittens",
    ],
    suffixes: &[
        "ton", "kins", "y", "ie", "er", "paws", "fur", "tail", "bean", "whiskers",
    ],
};

static BIRD: WordPool = WordPool {
    prefixes: &[
        "Captain", "Wing", "Sky", "Cloud", "Feather", "Sir", "Madam", "Air", "Chirp", "Flutter",
    ],
    bases: &[
        "Tweet", "Chirp", "Squawk", "Flap", "Soar", "Beak", "Wing", "Feather", "Plume", "Sing",
    ],
    suffixes: &[
        "song", "beak", "wings", "sky", "er", "ie", "y", "oo", "ster", "ington",
    ],
};

static FISH: WordPool = WordPool {
    prefixes: &[
        "Bubble", "Captain", "Sir", "Madam", "Admiral", "Splash", "Wave", "Coral", "Aqua", "Fin",
    ],
    bases: &[
        "Swim", "Splash", "Gill", "Fin", "Bubble", "Ripple", "Scale", "Wave", "Coral", "Pearl",
    ],
    suffixes: &[
        "scale", "fin", "bubbles", "gills", "ie", "y", "o", "er", "swimmer", "fish",
    ],
};

static REPTILE: WordPool = WordPool {
    prefixes: &[
        "Sir", "Captain", "Scale", "Cold", "Sun", "Ancient", "Prime", "Royal", "Master", "Dr.",
    ],
    bases: &[
        "Scale", "Slither", "Claw", "Fang", "Shell", "Cold", "Bask", "Snap", "Crunch", "Hiss",
    ],
    suffixes: &[
        "claw", "scale", "fang", "shell", "ie", "y", "o", "er", "tail", "tooth",
    ],
};

static RODENT: WordPool = WordPool {
    prefixes: &[
        "Tiny", "Squeaky", "Sir", "Miss", "Little", "Quick", "Whisker", "Nibble", "Scurry",
        "Fuzzy",
    ],
    bases: &[
        "Squeak", "Scamper", "Nibble", "Cheek", "Whisker", "Fuzzy", "Tiny", "Scurry", "Pebble",
        "Puff",
    ],
    suffixes: &[
        "puff", "cheeks", "tail", "whiskers", "ie", "y", "er", "kins", "nibbles", "squeaker",
    ],
};

static OTHER: WordPool = WordPool {
    prefixes: &[
        "Sir", "Madam", "Captain", "Professor", "Dr.", "Master", "Royal", "Supreme", "Ultra",
        "Mega",
    ],
    bases: &[
        "Cuddle", "Snuggle", "Friend", "Buddy", "Pal", "Wonder", "Amazo", "Mystical", "Cosmic",
        "Majestic",
    ],
    suffixes: &[
        "ton", "ster", "io", "ius", "ella", "ington", "paws", "heart", "soul", "legend",
    ],
};

// Personality pools

static PLAYFUL: WordPool = WordPool {
    prefixes: &["Bouncy", "Fun", "Happy", "Zippy", "Jolly"],
    bases: &["Play", "Jump", "Bounce", "Wiggle", "Giggle"],
    suffixes: &["jumps", "zoomies", "fun", "joy", "smile"],
};

static LAZY: WordPool = WordPool {
    prefixes: &["Sleepy", "Dozy", "Nappy", "Drowsy", "Cozy"],
    bases: &["Snooze", "Nap", "Yawn", "Dream", "Lazy"],
    suffixes: &["snooze", "dreams", "pillow", "naps", "zzz"],
};

static FIERCE: WordPool = WordPool {
    prefixes: &["Mighty", "Fearsome", "Savage", "Warrior", "Battle"],
    bases: &["Fang", "Claw", "Snarl", "Growl", "Fight"],
    suffixes: &["fang", "claw", "fury", "warrior", "beast"],
};

static SHY: WordPool = WordPool {
    prefixes: &["Timid", "Quiet", "Gentle", "Soft", "Whisper"],
    bases: &["Hide", "Peek", "Whisper", "Soft", "Gentle"],
    suffixes: &["shadow", "corner", "quiet", "shy", "whisper"],
};

static CURIOUS: WordPool = WordPool {
    prefixes: &["Wonder", "Curious", "Nosy", "Explorer", "Seeker"],
    bases: &["Peek", "Poke", "Snoop", "Seek", "Quest"],
    suffixes: &["finder", "seeker", "explorer", "wander", "quest"],
};

static LOVING: WordPool = WordPool {
    prefixes: &["Sweet", "Lovely", "Cuddle", "Huggy", "Heart"],
    bases: &["Love", "Cuddle", "Snuggle", "Heart", "Kiss"],
    suffixes: &["heart", "love", "hugs", "kisses", "sweetheart"],
};

static GRUMPY: WordPool = WordPool {
    prefixes: &["Grumpy", "Grouchy", "Cranky", "Fussy", "Moody"],
    bases: &["Grump", "Scowl", "Frown", "Grumble", "Huff"],
    suffixes: &["grump", "scowls", "frowns", "grouch", "grumbler"],
};

/// Structural shapes of a generated name.
pub const NAME_PATTERNS: [&str; 6] = [
    "{prefix} {base}{suffix}",
    "{prefix} {base}",
    "{base}{suffix}",
    "{prefix}{base}",
    "{base} {suffix}",
    "{prefix} {base} {suffix}",
];

/// Origin-story templates. Every template mentions `{name}`.
pub const LORE_TEMPLATES: [&str; 10] = [
    "Legend says {name} was born under a {celestial_body} on the {nth} day of {season}, blessed with the power of {power}.",
    "In ancient times, {name} was the guardian of {place}, protecting it with the mystical gift of {power}.",
    "Whispered among the {people}, {name} is said to possess the rare ability to {ability} when the {event} occurs.",
    "From the distant lands of {place}, {name} journeyed across {terrain} carrying the sacred {item}.",
    "{name} was once the companion of a great {profession}, granting them the wisdom to {achievement}.",
    "Scholars believe {name} is the reincarnation of {historical_figure}, returned to bring {gift} to the world.",
    "The prophecy of {prophet} foretold that {name} would appear during the {event} to {mission}.",
    "Born from a {element} storm, {name} carries the essence of {essence} within their soul.",
    "In the {time_period} era, {name} was revered as a symbol of {virtue} and {quality}.",
    "The secret society of {society} named {name} after their founder who discovered the art of {art}.",
];

/// Placeholder in [`LORE_TEMPLATES`] that receives the pet's name.
pub const NAME_PLACEHOLDER: &str = "name";

/// A fill-in slot of the lore templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoreCategory {
    CelestialBody,
    Nth,
    Season,
    Power,
    Place,
    People,
    Ability,
    Event,
    Terrain,
    Item,
    Profession,
    Achievement,
    HistoricalFigure,
    Gift,
    Prophet,
    Mission,
    Element,
    Essence,
    TimePeriod,
    Virtue,
    Quality,
    Society,
    Art,
}

impl LoreCategory {
    pub const ALL: [LoreCategory; 23] = [
        LoreCategory::CelestialBody,
        LoreCategory::Nth,
        LoreCategory::Season,
        LoreCategory::Power,
        LoreCategory::Place,
        LoreCategory::People,
        LoreCategory::Ability,
        LoreCategory::Event,
        LoreCategory::Terrain,
        LoreCategory::Item,
        LoreCategory::Profession,
        LoreCategory::Achievement,
        LoreCategory::HistoricalFigure,
        LoreCategory::Gift,
        LoreCategory::Prophet,
        LoreCategory::Mission,
        LoreCategory::Element,
        LoreCategory::Essence,
        LoreCategory::TimePeriod,
        LoreCategory::Virtue,
        LoreCategory::Quality,
        LoreCategory::Society,
        LoreCategory::Art,
    ];

    /// The placeholder name used in templates.
    pub fn key(self) -> &'static str {
        match self {
            LoreCategory::CelestialBody => "celestial_body",
            LoreCategory::Nth => "nth",
            LoreCategory::Season => "season",
            LoreCategory::Power => "power",
            LoreCategory::Place => "place",
            LoreCategory::People => "people",
            LoreCategory::Ability => "ability",
            LoreCategory::Event => "event",
            LoreCategory::Terrain => "terrain",
            LoreCategory::Item => "item",
            LoreCategory::Profession => "profession",
            LoreCategory::Achievement => "achievement",
            LoreCategory::HistoricalFigure => "historical_figure",
            LoreCategory::Gift => "gift",
            LoreCategory::Prophet => "prophet",
            LoreCategory::Mission => "mission",
            LoreCategory::Element => "element",
            LoreCategory::Essence => "essence",
            LoreCategory::TimePeriod => "time_period",
            LoreCategory::Virtue => "virtue",
            LoreCategory::Quality => "quality",
            LoreCategory::Society => "society",
            LoreCategory::Art => "art",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn words(self) -> &'static [&'static str] {
        match self {
            LoreCategory::CelestialBody => &[
                "full moon",
                "blue star",
                "red comet",
                "eclipse",
                "northern lights",
                "cosmic alignment",
            ],
            LoreCategory::Nth => &[
                "first",
                "second",
                "third",
                "seventh",
                "ninth",
                "thirteenth",
                "final",
            ],
            LoreCategory::Season => &[
                "spring", "summer", "autumn", "winter", "harvest", "solstice", "equinox",
            ],
            LoreCategory::Power => &[
                "invisibility",
                "dream-walking",
                "healing",
                "foresight",
                "speaking with ancestors",
                "time-bending",
            ],
            LoreCategory::Place => &[
                "Whisker Woods",
                "Mystic Mountain",
                "Paw Valley",
                "Ancient Ruins",
                "Crystal Cave",
                "Enchanted Lake",
            ],
            LoreCategory::People => &[
                "elders",
                "forest dwellers",
                "mountain sages",
                "ancient scholars",
                "mystical creatures",
                "nomadic tribes",
            ],
            LoreCategory::Ability => &[
                "find lost treasures",
                "predict storms",
                "bring good fortune",
                "heal broken hearts",
                "speak ancient tongues",
                "see the future",
            ],
            LoreCategory::Event => &[
                "great conjunction",
                "midnight hour",
                "lunar eclipse",
                "summer solstice",
                "autumn winds",
                "spring bloom",
            ],
            LoreCategory::Terrain => &[
                "vast deserts",
                "treacherous mountains",
                "endless oceans",
                "dense forests",
                "frozen tundras",
                "mystical realms",
            ],
            LoreCategory::Item => &[
                "orb of knowledge",
                "scroll of wisdom",
                "crystal of truth",
                "feather of flight",
                "gem of power",
                "seed of life",
            ],
            LoreCategory::Profession => &[
                "wizard", "warrior", "healer", "scholar", "ruler", "explorer", "bard", "sage",
            ],
            LoreCategory::Achievement => &[
                "build wonders",
                "end wars",
                "unite kingdoms",
                "discover hidden knowledge",
                "create magic",
                "achieve immortality",
            ],
            LoreCategory::HistoricalFigure => &[
                "great ruler",
                "wise sage",
                "legendary hero",
                "mystical enchanter",
                "divine being",
                "ancient protector",
            ],
            LoreCategory::Gift => &[
                "peace",
                "wisdom",
                "prosperity",
                "harmony",
                "healing",
                "enlightenment",
                "joy",
                "protection",
            ],
            LoreCategory::Prophet => &[
                "whiskers",
                "feathers",
                "scales",
                "ancient one",
                "dreamer",
                "star gazer",
                "moon watcher",
                "truth speaker",
            ],
            LoreCategory::Mission => &[
                "restore balance",
                "bring peace",
                "share knowledge",
                "protect the innocent",
                "ensure prosperity",
                "spread joy",
            ],
            LoreCategory::Element => &[
                "fire", "water", "earth", "air", "lightning", "shadow", "light", "star",
            ],
            LoreCategory::Essence => &[
                "courage",
                "wisdom",
                "love",
                "strength",
                "patience",
                "kindness",
                "loyalty",
                "resilience",
            ],
            LoreCategory::TimePeriod => &[
                "ancient",
                "medieval",
                "golden",
                "silver",
                "bronze",
                "forgotten",
                "remembered",
                "prophesied",
            ],
            LoreCategory::Virtue => &[
                "courage",
                "wisdom",
                "patience",
                "honesty",
                "kindness",
                "loyalty",
                "perseverance",
                "compassion",
            ],
            LoreCategory::Quality => &[
                "strength",
                "intelligence",
                "grace",
                "beauty",
                "agility",
                "resilience",
                "charm",
                "mystery",
            ],
            LoreCategory::Society => &[
                "midnight prowlers",
                "dawn seekers",
                "celestial observers",
                "dream walkers",
                "whisper keepers",
                "paw prints",
            ],
            LoreCategory::Art => &[
                "dream walking",
                "star reading",
                "future seeing",
                "joy bringing",
                "soul soothing",
                "heart healing",
            ],
        }
    }
}
