//! High score leaderboard system
//!
//! Tracks the top 10 runs, persisted as a JSON file next to the settings.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;
/// Longest name kept on the board
pub const MAX_NAME_CHARS: usize = 20;
pub const DEFAULT_NAME: &str = "Unknown";

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    /// Height climbed
    pub score: u64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard, sorted by descending score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

/// Trim and cap a player name, falling back to the default
pub fn sanitize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return DEFAULT_NAME.to_string();
    }
    trimmed.chars().take(MAX_NAME_CHARS).collect()
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, name: &str, score: u64, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            name: sanitize_name(name),
            score,
            timestamp,
        };

        // Ties go below existing entries
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Restore descending order and the size cap after loading from disk
    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    /// Load the board; a missing or unreadable file starts fresh
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No high scores at {}, starting fresh", path.display());
                return Self::new();
            }
        };
        match serde_json::from_str::<HighScores>(&json) {
            Ok(mut scores) => {
                scores.normalize();
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Err(err) => {
                log::warn!("Ignoring corrupt high scores at {}: {err}", path.display());
                Self::new()
            }
        }
    }

    /// Write the board through a temp file and rename over the old one
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let tmp = path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(self).context("encoding high scores")?;
        fs::write(&tmp, data).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_board() -> HighScores {
        let mut board = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES as u64 {
            board.add_score("p", i * 100, 0.0);
        }
        board
    }

    #[test]
    fn test_ranks_descending() {
        let mut board = HighScores::new();
        assert_eq!(board.add_score("a", 500, 1.0), Some(1));
        assert_eq!(board.add_score("b", 900, 2.0), Some(1));
        assert_eq!(board.add_score("c", 700, 3.0), Some(2));
        let scores: Vec<_> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![900, 700, 500]);
        assert_eq!(board.top_score(), Some(900));
    }

    #[test]
    fn test_any_score_fills_open_slot() {
        let mut board = HighScores::new();
        assert!(board.qualifies(0));
        assert_eq!(board.potential_rank(0), Some(1));
        assert_eq!(board.add_score("a", 0, 1.0), Some(1));
        assert_eq!(board.add_score("b", 0, 2.0), Some(2));

        let full = full_board();
        assert!(!full.qualifies(0));
    }

    #[test]
    fn test_full_board_needs_to_beat_lowest() {
        let mut board = full_board();
        assert!(!board.qualifies(100));
        assert_eq!(board.potential_rank(150), Some(10));
        assert_eq!(board.add_score("late", 150, 0.0), Some(10));
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(board.entries.last().map(|e| e.score), Some(150));
    }

    #[test]
    fn test_name_sanitizing() {
        assert_eq!(sanitize_name("   "), DEFAULT_NAME);
        assert_eq!(sanitize_name(" ada "), "ada");
        assert_eq!(sanitize_name(&"x".repeat(40)).chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("skyjump-hs-{}", std::process::id()));
        let path = dir.join("high_scores.json");
        let mut board = HighScores::new();
        board.add_score("ada", 4_200, 1.0);
        board.add_score("bob", 1_300, 2.0);
        board.save(&path).unwrap();

        let loaded = HighScores::load(&path);
        assert_eq!(loaded.entries, board.entries);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_or_corrupt() {
        let dir = std::env::temp_dir().join(format!("skyjump-hs-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        assert!(HighScores::load(&dir.join("missing.json")).is_empty());

        let bad = dir.join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        assert!(HighScores::load(&bad).is_empty());
        let _ = fs::remove_dir_all(&dir);
    }
}
