/// Suffix-rule pluralization. Rules are checked in order; the first match wins.

const VOWEL_Y_ENDINGS: &[&str] = &["ay", "ey", "iy", "oy", "uy"];
const SIBILANT_ENDINGS: &[&str] = &["x", "ss", "sh", "ch"];

fn ends_with_any(word: &str, endings: &[&str]) -> bool {
    endings.iter().any(|e| word.ends_with(e))
}

/// Swap the last `drop` characters of an ASCII suffix for `replacement`.
fn replace_tail(word: &str, drop: usize, replacement: &str) -> String {
    let cut = word.len() - drop;
    format!("{}{}", &word[..cut], replacement)
}

/// Plural of a general noun.
pub fn pluralize(word: &str) -> String {
    if ends_with_any(word, VOWEL_Y_ENDINGS) {
        format!("{}s", word)
    } else if word.ends_with('y') {
        replace_tail(word, 1, "ies")
    } else if ends_with_any(word, SIBILANT_ENDINGS) {
        format!("{}es", word)
    } else if word.ends_with("ife") {
        replace_tail(word, 2, "ves")
    } else if word.ends_with("rf") {
        replace_tail(word, 1, "ves")
    } else if word.ends_with("man") {
        if word == "human" {
            "humans".to_string()
        } else {
            replace_tail(word, 2, "en")
        }
    } else if !word.ends_with('s') {
        format!("{}s", word)
    } else {
        word.to_string()
    }
}

/// Plural of a villainous person noun ("lowlifes", "thieves", "highwaymen").
pub fn pluralize_villain(word: &str) -> String {
    if ends_with_any(word, VOWEL_Y_ENDINGS) {
        format!("{}s", word)
    } else if word.ends_with('y') {
        replace_tail(word, 1, "ies")
    } else if ends_with_any(word, SIBILANT_ENDINGS) {
        format!("{}es", word)
    } else if word.ends_with("ife") {
        if word == "lowlife" {
            "lowlifes".to_string()
        } else {
            replace_tail(word, 2, "ves")
        }
    } else if word.ends_with("rf") || word.ends_with("ief") {
        replace_tail(word, 1, "ves")
    } else if word.ends_with("man") {
        replace_tail(word, 2, "en")
    } else if !word.ends_with('s') {
        format!("{}s", word)
    } else {
        word.to_string()
    }
}

/// Plural of a primitive weapon.
pub fn pluralize_weapon(word: &str) -> String {
    if word.ends_with("ife") {
        replace_tail(word, 2, "ves")
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_rules() {
        assert_eq!(pluralize("city"), "cities");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("knife"), "knives");
        assert_eq!(pluralize("human"), "humans");
        assert_eq!(pluralize("fireman"), "firemen");
    }

    #[test]
    fn noun_rule_order() {
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("boy"), "boys");
        assert_eq!(pluralize("glass"), "glasses");
        assert_eq!(pluralize("church"), "churches");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("dwarf"), "dwarves");
        assert_eq!(pluralize("lantern"), "lanterns");
        assert_eq!(pluralize("lens"), "lens");
    }

    #[test]
    fn villain_rules() {
        assert_eq!(pluralize_villain("lowlife"), "lowlifes");
        assert_eq!(pluralize_villain("thief"), "thieves");
        assert_eq!(pluralize_villain("bandit"), "bandits");
        assert_eq!(pluralize_villain("highwayman"), "highwaymen");
        assert_eq!(pluralize_villain("rascal"), "rascals");
        assert_eq!(pluralize_villain("scalawag"), "scalawags");
        assert_eq!(pluralize_villain("good-for-nothing"), "good-for-nothings");
    }

    #[test]
    fn weapon_rules() {
        assert_eq!(pluralize_weapon("knife"), "knives");
        assert_eq!(pluralize_weapon("spear"), "spears");
        assert_eq!(pluralize_weapon("axe"), "axes");
    }
}
