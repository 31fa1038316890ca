//! Browser bindings for the leselini vocabulary games.
//!
//! The JS side constructs one [`Leselini`] from the static manifest and
//! label-table documents and drives every game through it. All game logic
//! lives in `game-data`; this crate only bridges types, persists best scores
//! in localStorage, and wires up logging.

pub mod api;

#[cfg(target_arch = "wasm32")]
mod score_store;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use std::cell::RefCell;
    use std::sync::LazyLock;

    use game_data::{GameData, Language, Outcome, QuizSession, ScoreBoard};
    use serde::Serialize;
    use wasm_bindgen::prelude::*;

    use crate::api;
    use crate::score_store;

    // Putting this inside LOGGER prevents us from accidentally initializing
    // the logger more than once.
    #[allow(clippy::declare_interior_mutable_const)]
    const LOGGER: LazyLock<()> = LazyLock::new(|| {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        wasm_logger::init(wasm_logger::Config::default());
        log::info!("Logging initialized");
    });

    #[derive(Clone, Debug, Serialize, tsify::Tsify)]
    #[tsify(into_wasm_abi)]
    pub struct WordsetWithBest {
        pub id: String,
        pub title: String,
        pub best: u32,
    }

    #[wasm_bindgen]
    pub struct Leselini {
        game: GameData,
        scores: RefCell<ScoreBoard>,
    }

    #[wasm_bindgen]
    impl Leselini {
        /// Build the game data from the manifest and optional label table.
        #[wasm_bindgen(constructor)]
        pub fn new(manifest_json: &str, labels_json: Option<String>) -> Result<Leselini, JsError> {
            #[allow(clippy::borrow_interior_mutable_const)]
            *LOGGER;

            let game = GameData::from_json(manifest_json, labels_json.as_deref())
                .map_err(|error| JsError::new(&error.to_string()))?;
            log::info!("catalog loaded with {} images", game.catalog().len());
            Ok(Leselini {
                game,
                scores: RefCell::new(score_store::load()),
            })
        }

        /// The wordset menu, with each wordset's best score attached.
        pub fn wordsets(&self) -> Vec<WordsetWithBest> {
            let scores = self.scores.borrow();
            game_data::wordsets_with_stats(&scores)
                .into_iter()
                .map(|stats| WordsetWithBest {
                    id: stats.id.to_string(),
                    title: stats.title.to_string(),
                    best: stats.best,
                })
                .collect()
        }

        /// Generate a batch for a wordset id. `language_tag` is the UI
        /// language (e.g. "de-CH"); unsupported tags fall back to German.
        pub fn generate_batch(
            &self,
            wordset_id: &str,
            language_tag: &str,
            size: Option<usize>,
        ) -> Result<JsValue, JsError> {
            let language = Language::from_tag(language_tag);
            let size = size.unwrap_or(game_data::BATCH_SIZE);
            let batch = api::generate_batch(
                &self.game,
                &mut rand::thread_rng(),
                wordset_id,
                language,
                size,
            )
            .map_err(|error| JsError::new(&error.to_string()))?;
            serde_wasm_bindgen::to_value(&batch).map_err(|error| JsError::new(&error.to_string()))
        }

        pub fn best_score(&self, wordset_id: &str) -> u32 {
            self.scores.borrow().best(wordset_id)
        }

        /// Record a finished session's tally; persists only when the best
        /// score improved.
        pub fn record_best_score(&self, wordset_id: &str, score: u32) {
            let mut scores = self.scores.borrow_mut();
            if scores.record(wordset_id, score) {
                score_store::save(&scores);
            }
        }
    }

    /// Progress tracking for one play-through, driven from the page's event
    /// callbacks.
    #[wasm_bindgen]
    pub struct Session {
        inner: QuizSession,
    }

    #[wasm_bindgen]
    impl Session {
        #[wasm_bindgen(constructor)]
        pub fn new(total: usize) -> Session {
            Session {
                inner: QuizSession::new(total),
            }
        }

        /// Register the outcome of the current entry; false when the entry
        /// was already answered.
        pub fn respond(&mut self, correct: bool) -> bool {
            let outcome = if correct { Outcome::Correct } else { Outcome::Incorrect };
            self.inner.respond(outcome)
        }

        /// Advance past the current entry; the next index, or undefined on
        /// completion.
        pub fn advance(&mut self) -> Option<usize> {
            self.inner.advance()
        }

        pub fn current(&self) -> Option<usize> {
            self.inner.current()
        }

        pub fn is_complete(&self) -> bool {
            self.inner.is_complete()
        }

        pub fn score(&self) -> u32 {
            self.inner.score()
        }

        /// The final tally, available exactly once after completion.
        pub fn take_final_tally(&mut self) -> Option<u32> {
            self.inner.take_final_tally()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use bindings::{Leselini, Session};
