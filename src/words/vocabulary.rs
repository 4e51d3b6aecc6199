/// Built-in vocabularies that ship with the library rather than an asset bundle.

pub const LOCATION_ADJECTIVES: &[&str] = &[
    "ancient", "beautiful", "blissful", "breezy", "charming", "cloudy", "colorful", "dangerous",
    "dreamy", "dry", "enchanted", "enchanting", "fertile", "floral", "foggy", "forgotten",
    "freezing", "frozen", "ghostly", "gloomy", "glorious", "grand", "grassy", "haunted", "hilly",
    "looming", "majestic", "misty", "moonshine", "muddy", "mysterious", "mystical", "peaceful",
    "quiet", "rainy", "reedy", "rocky", "sandy", "shady", "silent", "snowy", "stony", "stormy",
    "sunny", "windswept", "windy",
];

pub const MARTIAL_SOCIAL_CONCEPTS: &[&str] = &[
    "ambush", "anger", "betrayal", "bravery", "conquest", "courage", "death", "deception",
    "delight", "despair", "devastation", "discipline", "domination", "famine", "freedom", "fury",
    "glory", "hatred", "honor", "independence", "justice", "liberation", "liberty", "mercy",
    "murder", "pestilence", "plunder", "pride", "rage", "regret", "reprisal", "retribution",
    "revenge", "righteousness", "slaughter", "terror", "transgression", "treachery", "treason",
    "triumph", "vengeance", "victory", "wrath",
];

/// The 27 emotion categories of the UC Berkeley self-report study.
pub const EMOTIONS: &[&str] = &[
    "admiration", "adoration", "appreciation", "amusement", "anxiety", "awe", "awkwardness",
    "boredom", "calmness", "confusion", "craving", "disgust", "empathy", "entrancement", "envy",
    "excitement", "fear", "horror", "interest", "joy", "nostalgia", "romance", "sadness",
    "satisfaction", "lust", "sympathy", "triumph",
];

pub const VILLAINOUS_PERSON_NOUNS: &[&str] = &[
    "bandit", "brigand", "bruiser", "buccaneer", "burglar", "charlatan", "corsair", "criminal",
    "crook", "deceiver", "delinquent", "demon", "desperado", "devil", "dodger", "gunman", "hood",
    "scoundrel", "sinner", "blackguard", "brute", "creep", "dog", "filcher", "good-for-nothing",
    "goon", "grifter", "hellion", "highwayman", "hijacker", "hoodlum", "hooligan", "imp", "knave",
    "libertine", "looter", "lowlife", "maggot", "malefactor", "marauder", "mischief-maker",
    "miscreant", "mountebank", "mugger", "murderer", "ne'er-do-well", "offender", "outlaw",
    "pilferer", "pirate", "profligate", "punk", "prowler", "plunderer", "racketeer", "rapscallion",
    "rascal", "ravager", "reprobate", "robber", "rogue", "rook", "ruffian", "scalawag", "shark",
    "swindler", "thief", "thug", "troublemaker", "wretch", "vagabond", "varlet", "villain",
];

pub const PRIMITIVE_WEAPONS: &[&str] = &[
    "sword", "blade", "mace", "hammer", "knife", "dagger", "axe", "halberd", "glaive", "spear",
    "lance", "pike", "bow", "crossbow",
];

pub const SHIP_NAME_OBJECTS: &[&str] = &[
    "blade", "breeze", "concubine", "consort", "crown", "dagger", "dancer", "demon", "destiny",
    "devil", "disciple", "dragon", "dream", "dryad", "falcon", "flame", "fox", "ghost", "gypsy",
    "harpy", "heart", "hound", "jewel", "knave", "knight", "kraken", "lance", "mage", "maiden",
    "nightmare", "nymph", "paladin", "pearl", "princess", "queen", "revenant", "rogue", "rose",
    "serpent", "shield", "spear", "spirit", "stallion", "star", "storm", "sword", "treasure",
    "trinity", "warlock", "wench", "widow", "witch", "wizard", "wolf",
];

pub const SHIP_NAME_COLORS: &[&str] = &[
    "amber", "black", "blue", "bronze", "copper", "golden", "gray", "green", "ivory", "jade",
    "obsidian", "red", "silver", "white",
];

pub const SHIP_NAME_ADJECTIVES: &[&str] = &[
    "adamantine", "adventurous", "ancient", "angry", "beastly", "beautiful", "courageous",
    "dancing", "dastardly", "draconian", "elder", "enchanted", "enchanting", "heroic", "immortal",
    "indestructible", "invincible", "magnificent", "malicious", "mighty", "nefarious", "perfect",
    "pious", "precious", "priceless", "relentless", "righteous", "saintly", "sinful", "sinister",
    "sylvan", "terrible", "terrific", "unstoppable", "unyielding", "valiant", "vengeful",
    "virtuous", "wandering", "windward", "wrathful", "yearning", "youthful",
];

pub const TIMES_OF_DAY: &[&str] = &[
    "midnight", "night", "morning", "dawn", "sunrise", "daytime", "midday", "afternoon", "evening",
    "dusk", "twilight", "sunset",
];
