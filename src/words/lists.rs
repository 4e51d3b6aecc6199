/// Word-list data source: RON loading, merging, and the shared default bundle.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

use crate::core::component::ComponentError;

pub const ADJECTIVES: &str = "Adjectives";
pub const ADVERBS: &str = "Adverbs";
pub const NOUNS: &str = "Nouns";
pub const CHEMICAL_COMPOUND_NAMES: &str = "Chemical Compound Names";
pub const MALE_GIVEN_NAMES: &str = "Common Male Given Names";
pub const FEMALE_GIVEN_NAMES: &str = "Common Female Given Names";
pub const SURNAMES: &str = "Common Surnames";

/// Bundle compiled into the library and used when nothing else is installed.
const EMBEDDED_BUNDLE: &str = include_str!("../../assets/word_lists.ron");

static GLOBAL: OnceLock<WordLists> = OnceLock::new();

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("global word lists were already initialized")]
    GlobalAlreadyInitialized,
}

/// An immutable, cheaply shared list of words.
pub type WordList = Arc<[String]>;

/// One verb in every form, indexed by `VerbTense`.
pub type VerbForms = [String; 5];

/// Shared list of verb rows.
pub type VerbList = Arc<[VerbForms]>;

/// Named word lists, verb rows, and exotic character sets.
#[derive(Debug, Clone)]
pub struct WordLists {
    lists: FxHashMap<String, WordList>,
    verbs: VerbList,
    character_sets: BTreeMap<String, WordList>,
}

impl Default for WordLists {
    fn default() -> Self {
        Self {
            lists: FxHashMap::default(),
            verbs: VerbList::from(Vec::new()),
            character_sets: BTreeMap::new(),
        }
    }
}

// The RON bundle stores plain vectors; lists are frozen into `Arc`s on load.

#[derive(Debug, Deserialize)]
#[serde(rename = "WordLists")]
struct RonBundle {
    #[serde(default)]
    lists: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    verbs: Vec<(String, String, String, String, String)>,
    #[serde(default)]
    character_sets: BTreeMap<String, Vec<String>>,
}

impl WordLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a bundle from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<WordLists, WordListError> {
        let contents = std::fs::read_to_string(path)?;
        let lists = Self::parse_ron(&contents)?;
        log::debug!("loaded word lists from {}", path.display());
        Ok(lists)
    }

    /// Parse a bundle from a RON string.
    pub fn parse_ron(input: &str) -> Result<WordLists, WordListError> {
        let raw: RonBundle = ron::from_str(input)?;

        let lists = raw
            .lists
            .into_iter()
            .map(|(name, words)| (name, WordList::from(words)))
            .collect();
        let verbs = raw
            .verbs
            .into_iter()
            .map(|(base, past, participle, present, progressive)| {
                [base, past, participle, present, progressive]
            })
            .collect::<Vec<_>>();
        let character_sets = raw
            .character_sets
            .into_iter()
            .map(|(name, chars)| (name, WordList::from(chars)))
            .collect();

        Ok(WordLists {
            lists,
            verbs: VerbList::from(verbs),
            character_sets,
        })
    }

    /// Load and merge every `.ron` bundle in `dir`, in file-name order.
    pub fn load_dir(dir: &Path) -> Result<WordLists, WordListError> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut merged = WordLists::default();
        for path in &paths {
            merged.merge(Self::load_from_ron(path)?);
        }
        Ok(merged)
    }

    /// Load from a file or a directory of bundles.
    pub fn load(path: &Path) -> Result<WordLists, WordListError> {
        if path.is_dir() {
            Self::load_dir(path)
        } else {
            Self::load_from_ron(path)
        }
    }

    /// The bundle compiled into the library.
    ///
    /// A bundle that fails to parse yields empty lists; rendering from
    /// them then fails with `EmptyOptions`.
    pub fn embedded() -> WordLists {
        match Self::parse_ron(EMBEDDED_BUNDLE) {
            Ok(lists) => lists,
            Err(e) => {
                log::warn!("embedded word lists failed to parse, using empty lists: {}", e);
                WordLists::default()
            }
        }
    }

    /// Process-wide lists, initialized once on first use.
    pub fn global() -> &'static WordLists {
        GLOBAL.get_or_init(Self::embedded)
    }

    /// Replace the process-wide lists. Only possible before first use.
    pub fn install_global(lists: WordLists) -> Result<(), WordListError> {
        GLOBAL
            .set(lists)
            .map_err(|_| WordListError::GlobalAlreadyInitialized)
    }

    /// Merge another bundle into this one. Entries from `other` replace
    /// entries of the same name; a non-empty verb list replaces ours.
    pub fn merge(&mut self, other: WordLists) {
        for (name, list) in other.lists {
            self.lists.insert(name, list);
        }
        if !other.verbs.is_empty() {
            self.verbs = other.verbs;
        }
        for (name, set) in other.character_sets {
            self.character_sets.insert(name, set);
        }
    }

    pub fn insert_list<I, S>(&mut self, name: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        self.lists.insert(name.to_string(), WordList::from(words));
    }

    pub fn set_verbs(&mut self, verbs: Vec<VerbForms>) {
        self.verbs = VerbList::from(verbs);
    }

    pub fn insert_character_set<I, S>(&mut self, name: &str, chars: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let chars: Vec<String> = chars.into_iter().map(Into::into).collect();
        self.character_sets
            .insert(name.to_string(), WordList::from(chars));
    }

    pub fn get(&self, name: &str) -> Option<&WordList> {
        self.lists.get(name)
    }

    /// The named list, or an empty list when it is missing.
    pub fn list(&self, name: &str) -> WordList {
        self.lists
            .get(name)
            .cloned()
            .unwrap_or_else(|| WordList::from(Vec::new()))
    }

    pub fn verbs(&self) -> VerbList {
        Arc::clone(&self.verbs)
    }

    pub fn character_set(&self, name: &str) -> Result<&WordList, ComponentError> {
        self.character_sets
            .get(name)
            .ok_or_else(|| ComponentError::UnknownSet(name.to_string()))
    }

    /// Character sets in name order.
    pub fn character_sets(&self) -> &BTreeMap<String, WordList> {
        &self.character_sets
    }

    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }
}
