//! Sanity-check an image manifest (and optional label table) against the
//! game modes: prints pool statistics and whether each wordset can actually
//! be played.
//!
//! Usage: catalog-spot-check <manifest.json> [labels.json] [language-tag]

use std::collections::BTreeMap;
use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use catalog_spot_check::check_playability;
use game_data::{GameData, Language};

fn main() -> Result<ExitCode> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let manifest_path = args.next().context(
        "usage: catalog-spot-check <manifest.json> [labels.json] [language-tag]",
    )?;
    let labels_path = args.next();
    let language = Language::from_tag(&args.next().unwrap_or_default());

    let manifest = fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read manifest {manifest_path}"))?;
    let labels = labels_path
        .as_deref()
        .map(|path| fs::read_to_string(path).with_context(|| format!("failed to read labels {path}")))
        .transpose()?;

    let game = GameData::from_json(&manifest, labels.as_deref())?;
    report_pool(&game, language);

    println!("wordsets:");
    let report = check_playability(&game, language);
    for playability in &report {
        match &playability.result {
            Ok(entries) => println!("  {}: ok ({entries} entries)", playability.id),
            Err(error) => println!("  {}: NOT PLAYABLE ({error})", playability.id),
        }
    }

    if !report.iter().any(|p| p.is_playable()) {
        log::error!("no game mode is playable with this catalog");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn report_pool(game: &GameData, language: Language) {
    let pool = game.pool(language);
    println!(
        "catalog: {} images, {} usable in language '{language}'",
        game.catalog().len(),
        pool.len()
    );
    if let Some(generated_at) = game.catalog().generated_at() {
        println!("manifest generated at {generated_at}");
    }

    let mut by_letter: BTreeMap<char, usize> = BTreeMap::new();
    for entry in &pool {
        *by_letter.entry(entry.letter).or_default() += 1;
    }
    println!("letter groups:");
    for (letter, count) in &by_letter {
        let hard_ready = if *count >= 3 { " (hard-ready)" } else { "" };
        println!("  {letter}: {count}{hard_ready}");
    }
}
