//! Core data engine for the leselini vocabulary games.
//!
//! Everything here is pure and synchronous: the [`Catalog`] and
//! [`LabelTable`] are built once from static JSON documents, and each batch
//! generator on [`GameData`] is a function of those, the requested
//! [`Language`], and an injected random source. The browser bindings live in
//! `leselini-frontend-rs`; this crate never touches the DOM or storage.

pub mod catalog;
pub mod generators;
pub mod labels;
pub mod scores;
pub mod session;

pub use catalog::{Catalog, CatalogError, ImageEntry, Manifest};
pub use generators::{
    BATCH_SIZE, Difficulty, FirstLetterEntry, GameData, GenerateError, ImageMatchEntry,
    InverseFirstLetterEntry, LoadError, WordMatchEntry, WritingGameEntry,
};
pub use labels::{DEFAULT_LANGUAGE, LabelError, LabelTable, Language, LocalizedEntry};
pub use scores::{STORAGE_KEY, ScoreBoard};
pub use session::{Outcome, QuizSession};

/// Which generator a wordset is played with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Mode {
    WordMatch(Difficulty),
    WordMatchHard,
    ImageMatch(Difficulty),
    FirstLetterMatch,
    InverseFirstLetterMatch,
    WritingGame,
}

/// A playable quiz variant. The id doubles as the best-score key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Wordset {
    pub id: &'static str,
    pub title: &'static str,
    pub mode: Mode,
}

pub const WORDSETS: &[Wordset] = &[
    Wordset {
        id: "first-letter-match",
        title: "Which letter does the word start with?",
        mode: Mode::FirstLetterMatch,
    },
    Wordset {
        id: "dynamic-easy",
        title: "Which word matches the picture? (Easy)",
        mode: Mode::WordMatch(Difficulty::Easy),
    },
    Wordset {
        id: "dynamic-images-easy",
        title: "Which picture matches the word? (Easy)",
        mode: Mode::ImageMatch(Difficulty::Easy),
    },
    Wordset {
        id: "dynamic",
        title: "Which word matches the picture?",
        mode: Mode::WordMatch(Difficulty::Normal),
    },
    Wordset {
        id: "dynamic-images",
        title: "Which picture matches the word?",
        mode: Mode::ImageMatch(Difficulty::Normal),
    },
    Wordset {
        id: "inverse-first-letter-match",
        title: "Which picture starts with the letter?",
        mode: Mode::InverseFirstLetterMatch,
    },
    Wordset {
        id: "dynamic-hard",
        title: "Which word matches the picture? (Hard)",
        mode: Mode::WordMatchHard,
    },
];

/// The writing game is reached by route, not from the wordset menu, but its
/// best score is keyed like any other wordset.
pub const WRITING_GAME_ID: &str = "writing-game";

pub fn wordsets() -> &'static [Wordset] {
    WORDSETS
}

pub fn find_wordset(id: &str) -> Option<&'static Wordset> {
    WORDSETS.iter().find(|wordset| wordset.id == id)
}

/// A wordset together with the best score recorded for it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WordsetStats {
    pub id: &'static str,
    pub title: &'static str,
    pub best: u32,
}

pub fn wordsets_with_stats(scores: &ScoreBoard) -> Vec<WordsetStats> {
    WORDSETS
        .iter()
        .map(|wordset| WordsetStats {
            id: wordset.id,
            title: wordset.title,
            best: scores.best(wordset.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_wordset() {
        assert_eq!(find_wordset("dynamic-hard").map(|w| w.mode), Some(Mode::WordMatchHard));
        assert_eq!(find_wordset("nope"), None);
    }

    #[test]
    fn test_wordsets_with_stats_uses_recorded_bests() {
        let mut scores = ScoreBoard::default();
        scores.record("dynamic", 4);

        let stats = wordsets_with_stats(&scores);

        assert_eq!(stats.len(), WORDSETS.len());
        let dynamic = stats.iter().find(|s| s.id == "dynamic").unwrap();
        assert_eq!(dynamic.best, 4);
        let easy = stats.iter().find(|s| s.id == "dynamic-easy").unwrap();
        assert_eq!(easy.best, 0);
    }
}
