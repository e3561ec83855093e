// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five-card hand classification.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, HAND_SIZE, Rank};

/// The ten hand categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// Highest value card.
    HighCard,
    /// Two cards of the same value.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same value.
    ThreeOfAKind,
    /// All five cards in consecutive value order.
    Straight,
    /// All five cards having the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same value.
    FourOfAKind,
    /// All five cards in consecutive value order, with the same suit.
    StraightFlush,
    /// Ten, Jack, Queen, King and Ace in the same suit.
    RoyalFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{rank}")
    }
}

/// The value of a five-card hand.
///
/// Values order by category first, then by the tie-break ranks compared
/// element by element, so two values compare equal only on a true draw.
/// The tie-break holds one rank per group of equal-rank cards, largest
/// group first, higher rank first between groups of the same size. For a
/// pair of kings with a ten kicker that is `K, T, ..`, for two pairs
/// kings over fives with a queen kicker `K, 5, Q`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: Vec<Rank>,
}

impl HandValue {
    /// Evaluates a five-card hand.
    pub fn eval(cards: &[Card; HAND_SIZE]) -> HandValue {
        let mut ranks = cards.map(|card| card.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let flush = cards.iter().all(|card| card.suit() == cards[0].suit());

        // Five strictly consecutive descending ranks, the ace never wraps
        // around below the deuce.
        let straight = ranks.windows(2).all(|w| w[0].value() == w[1].value() + 1);

        // Group the sorted ranks, largest group first, higher rank first
        // between groups of the same size.
        let mut groups: Vec<(usize, Rank)> = Vec::with_capacity(HAND_SIZE);
        for rank in ranks {
            match groups.last_mut() {
                Some((count, grouped)) if *grouped == rank => *count += 1,
                _ => groups.push((1, rank)),
            }
        }
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let rank = match groups.as_slice() {
            _ if straight && flush && ranks[0] == Rank::Ace => HandRank::RoyalFlush,
            _ if straight && flush => HandRank::StraightFlush,
            [(4, _), _] => HandRank::FourOfAKind,
            [(3, _), (2, _)] => HandRank::FullHouse,
            _ if flush => HandRank::Flush,
            _ if straight => HandRank::Straight,
            [(3, _), _, _] => HandRank::ThreeOfAKind,
            [(2, _), (2, _), _] => HandRank::TwoPair,
            [(2, _), _, _, _] => HandRank::OnePair,
            _ => HandRank::HighCard,
        };

        let tiebreak = groups.into_iter().map(|(_, rank)| rank).collect();
        HandValue { rank, tiebreak }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break ranks, most significant group first.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak
    }
}
