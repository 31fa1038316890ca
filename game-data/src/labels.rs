//! Localization: mapping image stems to display words per language.
//!
//! The label table is optional. Any stem it does not cover falls back to the
//! stem itself, so a word always exists for every catalog entry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

pub const DEFAULT_LANGUAGE: Language = Language::German;

const GERMAN_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ü',
];
const ENGLISH_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "de")]
    German,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Parse a BCP 47-ish tag: the primary subtag before any `-`/`_` region
    /// separator, case-insensitively. Unsupported codes collapse to German.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match primary.as_str() {
            "en" => Language::English,
            _ => DEFAULT_LANGUAGE,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
        }
    }

    /// The full set of letters first-letter distractors are drawn from.
    pub fn alphabet(self) -> &'static [char] {
        match self {
            Language::German => GERMAN_ALPHABET,
            Language::English => ENGLISH_ALPHABET,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// First grapheme of the trimmed word, upper-cased; `None` for blank words.
///
/// For letters whose uppercase form expands to several characters (ß → SS),
/// the first character of the expansion is used.
pub fn first_letter(word: &str) -> Option<char> {
    word.trim().chars().next().and_then(|c| c.to_uppercase().next())
}

#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("failed to parse label table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// stem → language code → display word.
///
/// Insertion order of the inner maps is preserved so the "first available
/// value" fallback is deterministic.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    labels: IndexMap<String, IndexMap<String, String>>,
}

impl LabelTable {
    pub fn from_json(raw: &str) -> Result<Self, LabelError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Look up the display word for a stem.
    ///
    /// Fallback chain: requested language → default language → first value
    /// present for the stem → the stem itself.
    pub fn localize<'a>(&'a self, stem: &'a str, language: Language) -> &'a str {
        let Some(entry) = self.labels.get(stem) else {
            return stem;
        };
        entry
            .get(language.code())
            .or_else(|| entry.get(DEFAULT_LANGUAGE.code()))
            .or_else(|| entry.values().next())
            .map(String::as_str)
            .unwrap_or(stem)
    }
}

/// A catalog entry localized for one language, usable by the generators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocalizedEntry {
    pub stem: String,
    pub path: String,
    pub word: String,
    pub letter: char,
}

/// Build the usable pool for a language.
///
/// Entries whose localized word trims to the empty string are silently
/// excluded; everything in the result has a non-empty word and a derived
/// first letter.
pub fn localized_pool(catalog: &Catalog, labels: &LabelTable, language: Language) -> Vec<LocalizedEntry> {
    catalog
        .entries()
        .iter()
        .filter_map(|image| {
            let word = labels.localize(&image.stem, language).trim();
            let letter = first_letter(word)?;
            Some(LocalizedEntry {
                stem: image.stem.clone(),
                path: image.path.clone(),
                word: word.to_string(),
                letter,
            })
        })
        .collect()
}
