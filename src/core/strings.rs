/// Casing and vowel-sound helpers shared by the text decorators.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Words whose leading "h" is silent, so they take "an".
const SILENT_H_PREFIXES: &[&str] = &["honest", "honor", "honour", "hour", "heir", "herb"];

/// Words that start with a vowel letter but a consonant sound.
const HARD_VOWEL_PREFIXES: &[&str] = &["uni", "use", "user", "ufo", "euro", "one", "once"];

/// Words kept lowercase by `title_case` unless first or last.
const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "per", "so",
    "the", "to", "up", "via", "vs", "with", "yet",
];

/// Characters peeled off a word before casing and reattached after.
const WORD_PUNCTUATION: &[char] = &[
    '"', '\'', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}', '(', ')', '[', ']', '{', '}', '.',
    ',', ';', ':', '!', '?', '/',
];

/// Whether the first word of `text` starts with a vowel sound.
///
/// Leading non-letters are skipped; the first run of letters is the word.
pub fn starts_with_vowel_sound(text: &str) -> bool {
    let word: String = text
        .trim()
        .chars()
        .skip_while(|c| !c.is_alphabetic())
        .take_while(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();

    let Some(first) = word.chars().next() else {
        return false;
    };

    if SILENT_H_PREFIXES.iter().any(|p| word.starts_with(p)) {
        return true;
    }
    if HARD_VOWEL_PREFIXES.iter().any(|p| word.starts_with(p)) {
        return false;
    }
    VOWELS.contains(&first)
}

/// Uppercase the first alphabetic character, leaving everything else as is.
pub fn first_upper(text: &str) -> String {
    match text.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((index, c)) => {
            let mut result = String::with_capacity(text.len());
            result.push_str(&text[..index]);
            result.extend(c.to_uppercase());
            result.push_str(&text[index + c.len_utf8()..]);
            result
        }
        None => text.to_string(),
    }
}

/// Uppercase the first letter of every run of letters and lowercase the rest.
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }
    result
}

/// Title casing with English small-word rules.
///
/// Words are split on single spaces; runs of spaces collapse. The first and
/// last word are always capitalized. Punctuation wrapped around a word is
/// kept and never cased itself.
pub fn title_case(text: &str) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    let last_index = words.len().saturating_sub(1);
    let mut result: Vec<String> = Vec::with_capacity(words.len());

    for (index, word) in words.iter().enumerate() {
        if word.is_empty() {
            continue;
        }

        let core = word.trim_start_matches(WORD_PUNCTUATION);
        let leading = &word[..word.len() - core.len()];
        let trimmed = core.trim_end_matches(WORD_PUNCTUATION);
        let trailing = &core[trimmed.len()..];

        if trimmed.is_empty() {
            result.push(word.to_string());
            continue;
        }

        let lower = trimmed.to_lowercase();
        let cased = if index != 0 && index != last_index && SMALL_WORDS.contains(&lower.as_str()) {
            lower
        } else {
            capitalize(&lower)
        };

        result.push(format!("{}{}{}", leading, cased, trailing));
    }

    result.join(" ")
}

/// First character uppercased, rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
