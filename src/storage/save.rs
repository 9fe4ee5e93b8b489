//! Game save files.
//!
//! One saved game per player name, stored as a JSON document called
//! `<name>.save.json`. The directory is created on first save.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::core::SavedGame;

/// Default directory for save files and the leaderboard.
pub const SAVE_DIR: &str = "saves";

const SAVE_SUFFIX: &str = ".save.json";

fn save_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}{}", name, SAVE_SUFFIX))
}

/// Writes `snapshot` to `<dir>/<name>.save.json`, creating `dir` if needed.
pub fn save_game(dir: &Path, name: &str, snapshot: &SavedGame) -> Result<()> {
    fs::create_dir_all(dir)?;
    let body = serde_json::to_string_pretty(snapshot)?;
    fs::write(save_path(dir, name), body)?;
    Ok(())
}

/// Reads the saved game for `name`. Fails if the file is missing or does
/// not parse.
pub fn load_game(dir: &Path, name: &str) -> Result<SavedGame> {
    let path = save_path(dir, name);
    let body = fs::read_to_string(&path)
        .map_err(|e| anyhow!("save: read {} failed: {}", path.display(), e))?;
    let snapshot = serde_json::from_str(&body)
        .map_err(|e| anyhow!("save: parse {} failed: {}", path.display(), e))?;
    Ok(snapshot)
}
