// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round parsing and evaluation.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, str::FromStr};
use thiserror::Error;

use showdown_cards::{Card, HAND_SIZE, InvalidCardError};
use showdown_eval::HandValue;

/// The number of players dealt each line.
pub const PLAYERS: usize = 2;

/// A line that does not split into ten well-formed card tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedLineError {
    /// Wrong number of card tokens on the line.
    #[error("expected 10 card tokens, found {found}")]
    TokenCount {
        /// The number of tokens found.
        found: usize,
    },
    /// A token that is not a valid card.
    #[error(transparent)]
    InvalidCard(#[from] InvalidCardError),
}

/// The winner of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player 1 has the stronger hand.
    PlayerOne,
    /// Player 2 has the stronger hand.
    PlayerTwo,
    /// Both hands have the same value, nobody wins the round.
    Draw,
}

/// One dealt round, five cards for each player.
///
/// A round parses from a line of ten two-character tokens, the first five
/// dealt to Player 1 and the last five to Player 2:
///
/// ```
/// # use showdown_core::{Outcome, Round};
/// let round: Round = "2H 2D 3S 4C 5H 6D 7H 8S 9C TD".parse().unwrap();
/// assert_eq!(round.outcome(), Outcome::PlayerTwo);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    hands: [[Card; HAND_SIZE]; PLAYERS],
}

impl Round {
    /// Creates a round from the players hands.
    pub fn new(hands: [[Card; HAND_SIZE]; PLAYERS]) -> Self {
        Self { hands }
    }

    /// The hands dealt to the players.
    pub fn hands(&self) -> &[[Card; HAND_SIZE]; PLAYERS] {
        &self.hands
    }

    /// Evaluates both hands and declares the round winner.
    pub fn outcome(&self) -> Outcome {
        let [one, two] = self.hands.map(|hand| HandValue::eval(&hand));
        match one.cmp(&two) {
            Ordering::Greater => Outcome::PlayerOne,
            Ordering::Less => Outcome::PlayerTwo,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

impl FromStr for Round {
    type Err = MalformedLineError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != HAND_SIZE * PLAYERS {
            return Err(MalformedLineError::TokenCount {
                found: tokens.len(),
            });
        }

        let mut cards = Vec::with_capacity(tokens.len());
        for token in tokens {
            cards.push(token.parse::<Card>()?);
        }

        let hands =
            std::array::from_fn(|player| std::array::from_fn(|slot| cards[player * HAND_SIZE + slot]));
        Ok(Self { hands })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ten_tokens() {
        let round = "2H 2D 3S 4C 5H 6D 7H 8S 9C TD".parse::<Round>().unwrap();
        assert_eq!(round.hands()[0][0], "2H".parse().unwrap());
        assert_eq!(round.hands()[0][4], "5H".parse().unwrap());
        assert_eq!(round.hands()[1][0], "6D".parse().unwrap());
        assert_eq!(round.hands()[1][4], "TD".parse().unwrap());
        assert_eq!(Round::new(*round.hands()), round);
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(
            "2H 2D 3S 4C 5H 6D 7H 8S 9C".parse::<Round>(),
            Err(MalformedLineError::TokenCount { found: 9 })
        );
        assert_eq!(
            "2H 2D 3S 4C 5H 6D 7H 8S 9C TD JD".parse::<Round>(),
            Err(MalformedLineError::TokenCount { found: 11 })
        );
        assert_eq!(
            "".parse::<Round>(),
            Err(MalformedLineError::TokenCount { found: 0 })
        );
    }

    #[test]
    fn rejects_invalid_card() {
        assert_eq!(
            "XH 2D 3S 4C 5H 6D 7H 8S 9C TD".parse::<Round>(),
            Err(MalformedLineError::InvalidCard(InvalidCardError::Rank('X')))
        );
        assert_eq!(
            "2H 2D 3S 4C 5H 6D 7H 8S 9C TZ".parse::<Round>(),
            Err(MalformedLineError::InvalidCard(InvalidCardError::Suit('Z')))
        );
    }

    #[test]
    fn straight_beats_pair() {
        let round = "2H 2D 3S 4C 5H 6D 7H 8S 9C TD".parse::<Round>().unwrap();
        assert_eq!(round.outcome(), Outcome::PlayerTwo);
    }

    #[test]
    fn kicker_breaks_pair_tie() {
        let round = "KH KD 3S 4C 5H KC KS 3D 4H 6S".parse::<Round>().unwrap();
        assert_eq!(round.outcome(), Outcome::PlayerTwo);
    }

    #[test]
    fn royal_flushes_draw() {
        let round = "AH KH QH JH TH AS KS QS JS TS".parse::<Round>().unwrap();
        assert_eq!(round.outcome(), Outcome::Draw);
    }

    #[test]
    fn flush_beats_straight() {
        let round = "2H 4H 6H 8H TH 3D 4S 5C 6H 7D".parse::<Round>().unwrap();
        assert_eq!(round.outcome(), Outcome::PlayerOne);
    }

    #[test]
    fn outcome_is_idempotent() {
        let line = "KH KD 3S 4C 5H KC KS 3D 4H 6S";
        let round = line.parse::<Round>().unwrap();
        assert_eq!(round.outcome(), round.outcome());
        assert_eq!(line.parse::<Round>().unwrap(), round);
    }
}
