//! High-score persistence: a single integer in a plain-text file.
//!
//! Failure is never fatal here. A missing or unreadable file reads as "no
//! prior high score"; a failed save is dropped at the call site.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Default file name, next to the binary's working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = "highscore.txt";

/// Reads and writes the persisted high score.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the stored high score; 0 if the file is missing or unparseable
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Overwrite the stored high score
    pub fn save(&self, high_score: u32) -> io::Result<()> {
        fs::write(&self.path, high_score.to_string())
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_FILE)
    }
}
