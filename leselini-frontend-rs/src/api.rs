//! The wordset-id-keyed call surface the pages use.
//!
//! The wasm bindings are a thin shim over this module so the dispatch logic
//! stays natively testable.

use game_data::{GameData, GenerateError, Language, Mode, WRITING_GAME_ID, find_wordset};
use rand::Rng;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("unknown wordset: {0}")]
    UnknownWordset(String),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("failed to serialize batch: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Resolve a wordset id to its game mode.
pub fn mode_for(wordset_id: &str) -> Result<Mode, BatchError> {
    if let Some(wordset) = find_wordset(wordset_id) {
        return Ok(wordset.mode);
    }
    if wordset_id == WRITING_GAME_ID {
        return Ok(Mode::WritingGame);
    }
    Err(BatchError::UnknownWordset(wordset_id.to_string()))
}

/// Generate the batch for a wordset id, serialized uniformly as JSON.
///
/// The entry shape varies by mode; the pages already know which one they
/// asked for.
pub fn generate_batch<R: Rng + ?Sized>(
    game: &GameData,
    rng: &mut R,
    wordset_id: &str,
    language: Language,
    size: usize,
) -> Result<serde_json::Value, BatchError> {
    let value = match mode_for(wordset_id)? {
        Mode::WordMatch(difficulty) => {
            serde_json::to_value(game.word_match_batch(rng, difficulty, language, size)?)?
        }
        Mode::WordMatchHard => {
            serde_json::to_value(game.word_match_hard_batch(rng, language, size)?)?
        }
        Mode::ImageMatch(difficulty) => {
            serde_json::to_value(game.image_match_batch(rng, difficulty, language, size)?)?
        }
        Mode::FirstLetterMatch => {
            serde_json::to_value(game.first_letter_batch(rng, language, size)?)?
        }
        Mode::InverseFirstLetterMatch => {
            serde_json::to_value(game.inverse_first_letter_batch(rng, language, size)?)?
        }
        Mode::WritingGame => {
            serde_json::to_value(game.writing_game_batch(rng, language, size)?)?
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use game_data::{BATCH_SIZE, Difficulty};

    use super::*;

    fn game() -> GameData {
        let manifest = r#"{ "images": [
            { "stem": "ameise", "path": "images/ameise.jpg" },
            { "stem": "apfel", "path": "images/apfel.jpg" },
            { "stem": "auto", "path": "images/auto.jpg" },
            { "stem": "ball", "path": "images/ball.jpg" },
            { "stem": "birne", "path": "images/birne.jpg" },
            { "stem": "blume", "path": "images/blume.jpg" }
        ] }"#;
        GameData::from_json(manifest, None).unwrap()
    }

    #[test]
    fn test_every_wordset_id_dispatches() {
        let game = game();
        for wordset in game_data::wordsets() {
            let mut rng = choice_sampler::seeded(1);
            let batch = generate_batch(&game, &mut rng, wordset.id, Language::German, BATCH_SIZE)
                .unwrap_or_else(|e| panic!("wordset {} failed: {e}", wordset.id));
            let entries = batch.as_array().unwrap();
            assert_eq!(entries.len(), BATCH_SIZE, "wordset {}", wordset.id);
        }
    }

    #[test]
    fn test_writing_game_id_dispatches() {
        let game = game();
        let mut rng = choice_sampler::seeded(1);

        let batch =
            generate_batch(&game, &mut rng, WRITING_GAME_ID, Language::German, BATCH_SIZE).unwrap();

        let entries = batch.as_array().unwrap();
        assert_eq!(entries.len(), BATCH_SIZE);
        assert!(entries[0].get("correct_word").is_some());
        assert!(entries[0].get("letters").is_some());
    }

    #[test]
    fn test_unknown_wordset_is_an_error() {
        let game = game();
        let mut rng = choice_sampler::seeded(1);

        let result = generate_batch(&game, &mut rng, "bogus", Language::German, BATCH_SIZE);

        assert!(matches!(result, Err(BatchError::UnknownWordset(_))));
    }

    #[test]
    fn test_insufficient_data_propagates() {
        let game = GameData::from_json(r#"{ "images": [] }"#, None).unwrap();
        let mut rng = choice_sampler::seeded(1);

        let result = generate_batch(&game, &mut rng, "dynamic", Language::German, BATCH_SIZE);

        assert!(matches!(
            result,
            Err(BatchError::Generate(GenerateError::NotEnoughImages { .. }))
        ));
    }

    #[test]
    fn test_mode_for_easy_variants() {
        assert_eq!(mode_for("dynamic-easy").unwrap(), Mode::WordMatch(Difficulty::Easy));
        assert_eq!(mode_for("dynamic-images").unwrap(), Mode::ImageMatch(Difficulty::Normal));
    }
}
