//! Scoring module - line-clear points, level progression, gravity speed
//!
//! Scoring follows the classic BrickGame table: 100/300/700/1500 points for
//! 1/2/3/4 rows in a single attach. Level is derived from score in 600-point
//! steps and caps at 10; the gravity interval shrinks 75 ms per level.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LEVEL_SCORE_STEP, LINE_SCORES, MAX_LEVEL};

/// Points for clearing `rows` rows in one attach
pub fn line_clear_score(rows: usize) -> u32 {
    if rows < LINE_SCORES.len() {
        LINE_SCORES[rows]
    } else {
        0
    }
}

/// Level for a given score, clamped at the cap
pub fn level_for_score(score: u32) -> u32 {
    (score / LEVEL_SCORE_STEP).min(MAX_LEVEL)
}

/// Gravity interval in milliseconds for a level (expects level <= MAX_LEVEL)
pub fn drop_interval_ms(level: u32) -> u64 {
    BASE_DROP_MS - DROP_STEP_MS * u64::from(level.min(MAX_LEVEL))
}
