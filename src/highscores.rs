//! Session leaderboard
//!
//! Lives as long as the process. Finished games are ranked by score, best
//! first; on a tie the earlier game keeps the higher rank.

use crate::settings::Difficulty;

/// Games kept on the board
pub const MAX_HIGH_SCORES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub score: u64,
    pub difficulty: Difficulty,
    /// Which finished game this was, counting from 1
    pub game: u32,
}

#[derive(Debug, Clone, Default)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
    games_finished: u32,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Would `score` make it onto the board? Zero never does.
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_some_and(|low| score > low.score))
    }

    /// Count a finished game and rank it. Returns the 1-based rank, or
    /// `None` when the score did not make the board.
    pub fn record(&mut self, score: u64, difficulty: Difficulty) -> Option<usize> {
        self.games_finished += 1;
        if !self.qualifies(score) {
            return None;
        }
        let index = self.entries.partition_point(|e| e.score >= score);
        self.entries.insert(index, HighScoreEntry {
            score,
            difficulty,
            game: self.games_finished,
        });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn games_finished(&self) -> u32 {
        self.games_finished
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_counted_but_not_ranked() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(0, Difficulty::Normal), None);
        assert!(scores.is_empty());
        assert_eq!(scores.games_finished(), 1);
    }

    #[test]
    fn test_best_first_ties_keep_order() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(300, Difficulty::Normal), Some(1));
        assert_eq!(scores.record(500, Difficulty::Hard), Some(1));
        assert_eq!(scores.record(300, Difficulty::Easy), Some(3));
        assert_eq!(scores.best(), Some(500));
        let games: Vec<u32> = scores.entries().iter().map(|e| e.game).collect();
        assert_eq!(games, [2, 1, 3]);
    }

    #[test]
    fn test_board_keeps_the_top_ten() {
        let mut scores = HighScores::new();
        for i in 1..=15 {
            scores.record(i * 100, Difficulty::Normal);
        }
        assert_eq!(scores.entries().len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries().last().map(|e| e.score), Some(600));
        assert!(!scores.qualifies(600));
        assert!(scores.qualifies(601));
    }
}
