// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand classifier.
//!
//! Classifies five-card hands into the ten standard poker categories and
//! orders them, category first then tie-break ranks:
//!
//! ```
//! # use showdown_eval::*;
//! let pair: [Card; HAND_SIZE] = ["2H", "2D", "3S", "4C", "5H"].map(|t| t.parse().unwrap());
//! let straight: [Card; HAND_SIZE] = ["6D", "7H", "8S", "9C", "TD"].map(|t| t.parse().unwrap());
//!
//! let (v1, v2) = (HandValue::eval(&pair), HandValue::eval(&straight));
//! assert_eq!(v1.rank(), HandRank::OnePair);
//! assert_eq!(v2.rank(), HandRank::Straight);
//! assert!(v2 > v1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, HAND_SIZE, InvalidCardError, Rank, Suit};
