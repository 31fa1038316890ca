//! Best-score tracking: highest tally ever recorded per wordset.
//!
//! The board round-trips through a single JSON document kept under one
//! namespaced storage key. Reading is deliberately forgiving: a missing or
//! corrupted document degrades to an empty board so score history can never
//! take the games down.

use std::collections::BTreeMap;

/// The process-wide storage key the serialized board lives under.
pub const STORAGE_KEY: &str = "leselini_best_scores_v1";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    scores: BTreeMap<String, u32>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored document, dropping anything unusable.
    ///
    /// Non-object documents and non-numeric values degrade to empty/absent
    /// rather than erroring.
    pub fn from_json(raw: &str) -> Self {
        let parsed: BTreeMap<String, serde_json::Value> = match serde_json::from_str(raw) {
            Ok(parsed) => parsed,
            Err(error) => {
                log::warn!("failed to parse stored best scores, starting empty: {error}");
                return Self::default();
            }
        };
        let scores = parsed
            .into_iter()
            .filter_map(|(id, value)| Some((id, u32::try_from(value.as_u64()?).ok()?)))
            .collect();
        Self { scores }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.scores).unwrap_or_else(|_| "{}".to_string())
    }

    /// Best score for a wordset, 0 when none was ever recorded.
    pub fn best(&self, wordset_id: &str) -> u32 {
        self.scores.get(wordset_id).copied().unwrap_or(0)
    }

    /// Record a score; the stored value only ever increases.
    ///
    /// Returns whether the board changed, so callers know when to persist.
    pub fn record(&mut self, wordset_id: &str, score: u32) -> bool {
        if self.best(wordset_id) >= score {
            return false;
        }
        self.scores.insert(wordset_id.to_string(), score);
        true
    }
}
