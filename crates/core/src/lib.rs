// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown core types.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod round;
pub use round::{MalformedLineError, Outcome, PLAYERS, Round};
pub mod tally;
pub use tally::Tally;

// Reexport cards and eval types.
pub use showdown_eval::{Card, Deck, HAND_SIZE, HandRank, HandValue, InvalidCardError, Rank, Suit};
