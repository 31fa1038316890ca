//! Batch generators: one per game mode.
//!
//! Each generator is a pure function of the catalog, the label table, the
//! requested language, and the caller's random source. A batch is produced
//! whole or not at all; when the catalog cannot satisfy a mode's minimum the
//! generator fails fast with [`GenerateError`] so the UI can show a
//! "not enough content" state instead of crashing mid-batch.
//!
//! Known limitation, inherited deliberately: when several catalog entries
//! localize to the identical word, `correct_index` resolves via first match
//! in the shuffled options, which may point at a different entry's copy of
//! the word than the one sampled. The word shown is still a correct answer.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogError};
use crate::labels::{LabelError, LabelTable, Language, LocalizedEntry, localized_pool};

/// Default number of entries per batch.
pub const BATCH_SIZE: usize = 5;

/// Minimum group size for the letter-grouped hard mode.
const HARD_GROUP_MIN: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
}

impl Difficulty {
    fn distractor_count(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("not enough images: need at least {needed}, have {available}")]
    NotEnoughImages { needed: usize, available: usize },
    #[error("no first-letter group has at least {needed} entries")]
    NoEligibleLetterGroup { needed: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Labels(#[from] LabelError),
}

/// "Which word matches the picture?" — words as choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordMatchEntry {
    pub id: String,
    pub image_path: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

/// "Which picture matches the word?" — image paths as choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageMatchEntry {
    pub id: String,
    pub word: String,
    pub image_choices: Vec<String>,
    pub correct_index: usize,
}

/// "Which letter does the word start with?"
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FirstLetterEntry {
    pub id: String,
    pub image_path: String,
    pub choices: Vec<char>,
    pub correct_index: usize,
}

/// "Which picture starts with the letter?"
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InverseFirstLetterEntry {
    pub id: String,
    pub letter: char,
    pub image_choices: Vec<String>,
    pub correct_index: usize,
}

/// Spelling game: the word's letters in scrambled order, no choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WritingGameEntry {
    pub id: String,
    pub image_path: String,
    pub correct_word: String,
    pub letters: Vec<char>,
}

/// The composition root's handle on the static game data.
#[derive(Clone, Debug, Default)]
pub struct GameData {
    catalog: Catalog,
    labels: LabelTable,
}

impl GameData {
    pub fn new(catalog: Catalog, labels: LabelTable) -> Self {
        Self { catalog, labels }
    }

    /// Parse the manifest and (optional) label table documents.
    pub fn from_json(manifest: &str, labels: Option<&str>) -> Result<Self, LoadError> {
        let catalog = Catalog::from_json(manifest)?;
        let labels = match labels {
            Some(raw) => LabelTable::from_json(raw)?,
            None => LabelTable::default(),
        };
        Ok(Self::new(catalog, labels))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pool(&self, language: Language) -> Vec<LocalizedEntry> {
        localized_pool(&self.catalog, &self.labels, language)
    }

    fn require_images(&self, needed: usize) -> Result<(), GenerateError> {
        let available = self.catalog.len();
        if available < needed {
            return Err(GenerateError::NotEnoughImages { needed, available });
        }
        Ok(())
    }

    /// Word-to-image matching: the prompt is an image, the choices are words.
    pub fn word_match_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        difficulty: Difficulty,
        language: Language,
        size: usize,
    ) -> Result<Vec<WordMatchEntry>, GenerateError> {
        self.require_images(2)?;
        let pool = self.pool(language);
        let selection = choice_sampler::sample(rng, &pool, size.min(pool.len()));
        let distractor_count = difficulty.distractor_count();

        let batch = selection
            .into_iter()
            .map(|entry| {
                // Entries that localize to the target's word are excluded so
                // no two options are both correct.
                let distractor_pool: Vec<&str> = pool
                    .iter()
                    .filter(|item| item.word != entry.word)
                    .map(|item| item.word.as_str())
                    .collect();
                let mut choices: Vec<String> = choice_sampler::sample(
                    rng,
                    &distractor_pool,
                    distractor_count.min(distractor_pool.len()),
                )
                .into_iter()
                .map(str::to_string)
                .collect();
                choices.push(entry.word.clone());
                let (choices, correct_index) = shuffled_with_answer(rng, choices, &entry.word);
                WordMatchEntry {
                    id: entry.stem,
                    image_path: entry.path,
                    choices,
                    correct_index,
                }
            })
            .collect();
        Ok(batch)
    }

    /// Hard variant: all choices share the correct word's first letter.
    pub fn word_match_hard_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        language: Language,
        size: usize,
    ) -> Result<Vec<WordMatchEntry>, GenerateError> {
        self.require_images(HARD_GROUP_MIN)?;
        let pool = self.pool(language);
        let by_letter = group_by_letter(&pool);
        let eligible: Vec<char> = by_letter
            .iter()
            .filter(|(_, group)| group.len() >= HARD_GROUP_MIN)
            .map(|(letter, _)| *letter)
            .collect();
        if eligible.is_empty() {
            return Err(GenerateError::NoEligibleLetterGroup { needed: HARD_GROUP_MIN });
        }

        let mut batch = Vec::with_capacity(size);
        while batch.len() < size {
            let letter = *choice_sampler::pick(rng, &eligible)
                .expect("eligible letters checked non-empty above");
            let group = &by_letter[&letter];
            if group.len() < HARD_GROUP_MIN {
                // Group fell below the minimum since eligibility was
                // computed; retry without consuming an output slot.
                continue;
            }
            let correct = *choice_sampler::pick(rng, group)
                .expect("eligible group has at least three entries");
            let same_letter_distractors: Vec<&str> = group
                .iter()
                .filter(|item| item.word != correct.word)
                .map(|item| item.word.as_str())
                .collect();
            let mut choices: Vec<String> = choice_sampler::sample(
                rng,
                &same_letter_distractors,
                2.min(group.len() - 1),
            )
            .into_iter()
            .map(str::to_string)
            .collect();
            choices.push(correct.word.clone());
            let (choices, correct_index) = shuffled_with_answer(rng, choices, &correct.word);
            batch.push(WordMatchEntry {
                id: correct.stem.clone(),
                image_path: correct.path.clone(),
                choices,
                correct_index,
            });
        }
        Ok(batch)
    }

    /// Image-to-word matching: the prompt is a word, the choices are images.
    pub fn image_match_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        difficulty: Difficulty,
        language: Language,
        size: usize,
    ) -> Result<Vec<ImageMatchEntry>, GenerateError> {
        self.require_images(2)?;
        let pool = self.pool(language);
        let selection = choice_sampler::sample(rng, &pool, size.min(pool.len()));
        let distractor_count = difficulty.distractor_count();

        let batch = selection
            .into_iter()
            .map(|entry| {
                // Exclusion is still by word so two images labeled the same
                // never appear together as options.
                let distractor_pool: Vec<&str> = pool
                    .iter()
                    .filter(|item| item.word != entry.word)
                    .map(|item| item.path.as_str())
                    .collect();
                let mut image_choices: Vec<String> = choice_sampler::sample(
                    rng,
                    &distractor_pool,
                    distractor_count.min(distractor_pool.len()),
                )
                .into_iter()
                .map(str::to_string)
                .collect();
                image_choices.push(entry.path.clone());
                let (image_choices, correct_index) =
                    shuffled_with_answer(rng, image_choices, &entry.path);
                ImageMatchEntry {
                    id: entry.stem,
                    word: entry.word,
                    image_choices,
                    correct_index,
                }
            })
            .collect();
        Ok(batch)
    }

    /// First-letter identification: 4 letter options per image.
    pub fn first_letter_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        language: Language,
        size: usize,
    ) -> Result<Vec<FirstLetterEntry>, GenerateError> {
        self.require_images(1)?;
        let pool = self.pool(language);
        let selection = choice_sampler::sample(rng, &pool, size.min(pool.len()));
        let alphabet = language.alphabet();

        let batch = selection
            .into_iter()
            .map(|entry| {
                let other_letters: Vec<char> = alphabet
                    .iter()
                    .copied()
                    .filter(|letter| *letter != entry.letter)
                    .collect();
                let mut choices = choice_sampler::sample(rng, &other_letters, 3);
                choices.push(entry.letter);
                let (choices, correct_index) = shuffled_with_answer(rng, choices, &entry.letter);
                FirstLetterEntry {
                    id: entry.stem,
                    image_path: entry.path,
                    choices,
                    correct_index,
                }
            })
            .collect();
        Ok(batch)
    }

    /// Inverse first-letter: a letter prompt, image options.
    ///
    /// Prompt letters are drawn only from letters that actually have at
    /// least one associated image.
    pub fn inverse_first_letter_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        language: Language,
        size: usize,
    ) -> Result<Vec<InverseFirstLetterEntry>, GenerateError> {
        self.require_images(1)?;
        let pool = self.pool(language);
        let by_letter = group_by_letter(&pool);
        let letters: Vec<char> = by_letter.keys().copied().collect();
        if letters.is_empty() {
            return Err(GenerateError::NotEnoughImages { needed: 1, available: 0 });
        }

        let mut batch = Vec::with_capacity(size);
        for _ in 0..size {
            let letter = *choice_sampler::pick(rng, &letters)
                .expect("letters checked non-empty above");
            let correct = *choice_sampler::pick(rng, &by_letter[&letter])
                .expect("every grouped letter has at least one entry");
            let distractor_pool: Vec<&str> = pool
                .iter()
                .filter(|entry| entry.letter != letter)
                .map(|entry| entry.path.as_str())
                .collect();
            let mut image_choices: Vec<String> =
                choice_sampler::sample(rng, &distractor_pool, 3.min(distractor_pool.len()))
                    .into_iter()
                    .map(str::to_string)
                    .collect();
            image_choices.push(correct.path.clone());
            let (image_choices, correct_index) =
                shuffled_with_answer(rng, image_choices, &correct.path);
            batch.push(InverseFirstLetterEntry {
                id: letter.to_string(),
                letter,
                image_choices,
                correct_index,
            });
        }
        Ok(batch)
    }

    /// Spelling game: each entry's letters are the word's characters in
    /// scrambled order.
    pub fn writing_game_batch<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        language: Language,
        size: usize,
    ) -> Result<Vec<WritingGameEntry>, GenerateError> {
        self.require_images(1)?;
        let pool = self.pool(language);
        let selection = choice_sampler::sample(rng, &pool, size.min(pool.len()));

        let batch = selection
            .into_iter()
            .map(|entry| {
                let word_letters: Vec<char> = entry.word.chars().collect();
                let letters = choice_sampler::shuffle(rng, &word_letters);
                WritingGameEntry {
                    id: entry.stem,
                    image_path: entry.path,
                    correct_word: entry.word,
                    letters,
                }
            })
            .collect();
        Ok(batch)
    }
}

fn group_by_letter(pool: &[LocalizedEntry]) -> BTreeMap<char, Vec<&LocalizedEntry>> {
    let mut by_letter: BTreeMap<char, Vec<&LocalizedEntry>> = BTreeMap::new();
    for entry in pool {
        by_letter.entry(entry.letter).or_default().push(entry);
    }
    by_letter
}

/// Shuffle `options` and locate `answer` in the result.
///
/// First match wins when the options contain duplicates of the answer.
fn shuffled_with_answer<T, R>(rng: &mut R, options: Vec<T>, answer: &T) -> (Vec<T>, usize)
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let shuffled = choice_sampler::shuffle(rng, &options);
    let correct_index = shuffled
        .iter()
        .position(|option| option == answer)
        .expect("answer is one of the options");
    (shuffled, correct_index)
}
