//! Playability checks for a loaded catalog: dry-run every wordset with a
//! seeded RNG and report which modes can actually be played.

use game_data::{BATCH_SIZE, GameData, GenerateError, Language, Mode, WRITING_GAME_ID};

/// Seed for reproducible dry runs.
pub const DRY_RUN_SEED: u64 = 0;

/// One wordset's dry-run outcome: how many entries a batch would have, or
/// why the mode cannot be played.
#[derive(Clone, Debug)]
pub struct Playability {
    pub id: &'static str,
    pub result: Result<usize, GenerateError>,
}

impl Playability {
    pub fn is_playable(&self) -> bool {
        self.result.is_ok()
    }
}

/// Dry-run every wordset (plus the writing game) against the catalog.
pub fn check_playability(game: &GameData, language: Language) -> Vec<Playability> {
    let mut report: Vec<Playability> = game_data::wordsets()
        .iter()
        .map(|wordset| Playability {
            id: wordset.id,
            result: dry_run(game, wordset.mode, language),
        })
        .collect();
    report.push(Playability {
        id: WRITING_GAME_ID,
        result: dry_run(game, Mode::WritingGame, language),
    });
    report
}

fn dry_run(game: &GameData, mode: Mode, language: Language) -> Result<usize, GenerateError> {
    let rng = &mut choice_sampler::seeded(DRY_RUN_SEED);
    match mode {
        Mode::WordMatch(difficulty) => game
            .word_match_batch(rng, difficulty, language, BATCH_SIZE)
            .map(|batch| batch.len()),
        Mode::WordMatchHard => game
            .word_match_hard_batch(rng, language, BATCH_SIZE)
            .map(|batch| batch.len()),
        Mode::ImageMatch(difficulty) => game
            .image_match_batch(rng, difficulty, language, BATCH_SIZE)
            .map(|batch| batch.len()),
        Mode::FirstLetterMatch => game
            .first_letter_batch(rng, language, BATCH_SIZE)
            .map(|batch| batch.len()),
        Mode::InverseFirstLetterMatch => game
            .inverse_first_letter_batch(rng, language, BATCH_SIZE)
            .map(|batch| batch.len()),
        Mode::WritingGame => game
            .writing_game_batch(rng, language, BATCH_SIZE)
            .map(|batch| batch.len()),
    }
}
