// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wins accounting across a run.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

use crate::round::Outcome;

/// Running count of decisive wins for each player.
///
/// Draws count for neither player. The display renders the end-of-stream
/// summary:
///
/// ```
/// # use showdown_core::{Outcome, Tally};
/// let mut tally = Tally::default();
/// tally.record(Outcome::PlayerTwo);
/// tally.record(Outcome::Draw);
/// assert_eq!(tally.to_string(), "Player 1: 0 hands\nPlayer 2: 1 hands");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    player_one: u64,
    player_two: u64,
}

impl Tally {
    /// Counts a round outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerOne => self.player_one += 1,
            Outcome::PlayerTwo => self.player_two += 1,
            Outcome::Draw => {}
        }
    }

    /// Rounds won by Player 1.
    pub fn player_one(&self) -> u64 {
        self.player_one
    }

    /// Rounds won by Player 2.
    pub fn player_two(&self) -> u64 {
        self.player_two
    }
}

impl ops::Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            player_one: self.player_one + rhs.player_one,
            player_two: self.player_two + rhs.player_two,
        }
    }
}

impl ops::AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player 1: {} hands\nPlayer 2: {} hands",
            self.player_one, self.player_two
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_decisive_outcomes() {
        let mut tally = Tally::default();
        tally.record(Outcome::PlayerOne);
        tally.record(Outcome::PlayerTwo);
        tally.record(Outcome::PlayerTwo);

        assert_eq!(tally.player_one(), 1);
        assert_eq!(tally.player_two(), 2);
    }

    #[test]
    fn draws_count_for_neither() {
        let mut tally = Tally::default();
        tally.record(Outcome::Draw);
        tally.record(Outcome::Draw);

        assert_eq!(tally.player_one(), 0);
        assert_eq!(tally.player_two(), 0);
    }

    #[test]
    fn merges_partial_tallies() {
        let mut a = Tally::default();
        a.record(Outcome::PlayerOne);

        let mut b = Tally::default();
        b.record(Outcome::PlayerTwo);
        b.record(Outcome::Draw);

        let merged = a + b;
        assert_eq!(merged.player_one(), 1);
        assert_eq!(merged.player_two(), 1);

        // Merging commutes.
        assert_eq!(b + a, merged);

        a += b;
        assert_eq!(a, merged);
    }

    #[test]
    fn tally_formatting() {
        let mut tally = Tally::default();
        assert_eq!(tally.to_string(), "Player 1: 0 hands\nPlayer 2: 0 hands");

        for _ in 0..10 {
            tally.record(Outcome::PlayerOne);
        }
        for _ in 0..12 {
            tally.record(Outcome::PlayerTwo);
        }
        assert_eq!(tally.to_string(), "Player 1: 10 hands\nPlayer 2: 12 hands");
    }
}
