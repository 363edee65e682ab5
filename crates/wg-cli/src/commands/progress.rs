use std::path::Path;

use colored::Colorize;
use wg_scene::{JsonFileStore, LevelProgress};

pub fn run(state: &Path, reset: bool) -> Result<(), String> {
    let store = JsonFileStore::open(state).map_err(|e| format!("cannot open {}: {e}", state.display()))?;
    let mut progress = LevelProgress::new(store);

    if reset {
        progress.clear().map_err(|e| e.to_string())?;
        println!("  {} progress reset", "OK".green().bold());
        return Ok(());
    }

    match progress.current_level() {
        Some(level) => println!("  Current level: {level}"),
        None => println!("  No progress recorded."),
    }
    Ok(())
}
