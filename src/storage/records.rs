//! Leaderboard file.
//!
//! Scores live in a plain text file called `records`, one `name score`
//! pair per line, highest score first. A new entry is inserted ahead of
//! equal scores, so the latest player wins ties.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

const RECORDS_FILE: &str = "records";

fn records_path(dir: &Path) -> PathBuf {
    dir.join(RECORDS_FILE)
}

/// Reads every leaderboard entry in file order. A missing file is an
/// empty leaderboard, not an error. Lines that do not parse are skipped.
pub fn load_records(dir: &Path) -> Vec<ScoreRecord> {
    let Ok(body) = fs::read_to_string(records_path(dir)) else {
        return Vec::new();
    };
    body.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ScoreRecord> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?.to_string();
    let score = parts.next()?.parse().ok()?;
    Some(ScoreRecord { name, score })
}

/// Inserts one score and rewrites the whole file, keeping descending
/// score order.
pub fn save_record(dir: &Path, name: &str, score: u32) -> Result<()> {
    let mut records = load_records(dir);
    let at = records
        .iter()
        .position(|r| r.score <= score)
        .unwrap_or(records.len());
    records.insert(
        at,
        ScoreRecord {
            name: name.to_string(),
            score,
        },
    );

    fs::create_dir_all(dir)?;
    let mut body = String::new();
    for record in &records {
        body.push_str(&format!("{} {}\n", record.name, record.score));
    }
    fs::write(records_path(dir), body)?;
    Ok(())
}
