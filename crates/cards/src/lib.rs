// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown playing cards types.
//!
//! This crate defines types to create and parse cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!("KD".parse(), Ok(kd));
//! assert_eq!(kd.to_string(), "KD");
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating all five-card
//! hands in the deck:
//!
//! ```
//! # use showdown_cards::{Deck, HAND_SIZE};
//! let mut counter = 0u32;
//! Deck::default().for_each_hand(|hand| {
//!     assert_eq!(hand.len(), HAND_SIZE);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, HAND_SIZE, InvalidCardError, Rank, Suit};
