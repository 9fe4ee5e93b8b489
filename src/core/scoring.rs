//! Scoring module - points and level progression
//!
//! Clearing n lines at once is worth 10 points per line plus a bonus of
//! 5 points per line beyond the first. Levels advance every 10 cleared
//! lines up to level 5, and each level shrinks the fall interval to
//! three quarters of its previous value (integer math).

use crate::types::{LINES_PER_LEVEL, LINE_SCORE, MAX_LEVEL, MULTI_LINE_BONUS};

/// Points awarded for clearing `lines` rows in a single pass
pub fn score_for_lines(lines: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base = LINE_SCORE * lines;
    let bonus = MULTI_LINE_BONUS * (lines - 1);
    base + bonus
}

/// Fall interval after a level-up
pub fn next_fall_interval(interval_ms: u32) -> u32 {
    interval_ms / 4 * 3
}

/// Whether the session should advance a level this round
pub fn should_level_up(level: u32, total_lines: u32) -> bool {
    level <= total_lines / LINES_PER_LEVEL && level < MAX_LEVEL
}
