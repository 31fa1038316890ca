//! localStorage persistence for the score board.
//!
//! Storage failures degrade: reads fall back to an empty board and writes
//! become logged no-ops, so a blocked or full localStorage never reaches the
//! UI as an error.

use game_data::{STORAGE_KEY, ScoreBoard};

pub(crate) fn load() -> ScoreBoard {
    let Some(storage) = local_storage() else {
        return ScoreBoard::new();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => ScoreBoard::from_json(&raw),
        Ok(None) => ScoreBoard::new(),
        Err(error) => {
            log::warn!("failed to read best scores: {error:?}");
            ScoreBoard::new()
        }
    }
}

pub(crate) fn save(board: &ScoreBoard) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(error) = storage.set_item(STORAGE_KEY, &board.to_json()) {
        log::warn!("failed to persist best scores: {error:?}");
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(error) => {
            log::warn!("localStorage unavailable: {error:?}");
            None
        }
    }
}
