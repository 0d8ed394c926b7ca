use crate::log;
use super::types::{Mark, Outcome};

/// Wins per mark and ties, counted for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for `InProgress`, which is never counted.
    pub fn record(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {
                log!("Ignoring attempt to record an unfinished game");
                return false;
            }
        }
        true
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tally_is_zero() {
        let tally = ScoreTally::new();
        assert_eq!(tally.wins(Mark::X), 0);
        assert_eq!(tally.wins(Mark::O), 0);
        assert_eq!(tally.ties(), 0);
        assert_eq!(tally.games_played(), 0);
    }

    #[test]
    fn test_record_each_outcome_once() {
        let mut tally = ScoreTally::new();
        assert!(tally.record(Outcome::XWins));
        assert!(tally.record(Outcome::Tie));
        assert!(tally.record(Outcome::OWins));
        assert_eq!(tally.wins(Mark::X), 1);
        assert_eq!(tally.wins(Mark::O), 1);
        assert_eq!(tally.ties(), 1);
        assert_eq!(tally.games_played(), 3);
    }

    #[test]
    fn test_in_progress_is_not_counted() {
        let mut tally = ScoreTally::new();
        assert!(!tally.record(Outcome::InProgress));
        assert_eq!(tally, ScoreTally::new());
    }
}
