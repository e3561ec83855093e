// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deals stream driver.
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::BufRead;

use showdown_core::{Outcome, Round, Tally};

/// Reads deals line by line and folds each outcome into a [Tally].
///
/// All-whitespace lines are skipped. Any other line that does not parse
/// into a ten-card round aborts the run with an error naming the line.
pub fn run(reader: impl BufRead) -> Result<Tally> {
    let mut tally = Tally::default();
    let mut rounds = 0u64;
    let mut draws = 0u64;

    for (number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", number + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let round = line
            .parse::<Round>()
            .with_context(|| format!("bad deal on line {}", number + 1))?;

        let outcome = round.outcome();
        debug!("line {}: {outcome:?}", number + 1);

        rounds += 1;
        if outcome == Outcome::Draw {
            draws += 1;
        }
        tally.record(outcome);
    }

    info!("{rounds} rounds, {draws} drawn");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tallies_stream() {
        let input = "2H 2D 3S 4C 5H 6D 7H 8S 9C TD\n\
                     2H 4H 6H 8H TH 3D 4S 5C 6H 7D\n\
                     AH KH QH JH TH AS KS QS JS TS\n";

        let tally = run(Cursor::new(input)).unwrap();
        assert_eq!(tally.player_one(), 1);
        assert_eq!(tally.player_two(), 1);
    }

    #[test]
    fn empty_stream_yields_zero_tallies() {
        let tally = run(Cursor::new("")).unwrap();
        assert_eq!(tally.to_string(), "Player 1: 0 hands\nPlayer 2: 0 hands");
    }

    #[test]
    fn skips_blank_lines() {
        let input = "\n2H 2D 3S 4C 5H 6D 7H 8S 9C TD\n   \n";

        let tally = run(Cursor::new(input)).unwrap();
        assert_eq!(tally.player_one(), 0);
        assert_eq!(tally.player_two(), 1);
    }

    #[test]
    fn running_twice_gives_same_tally() {
        let input = "KH KD 3S 4C 5H KC KS 3D 4H 6S\n";

        let first = run(Cursor::new(input)).unwrap();
        let second = run(Cursor::new(input)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reports_bad_line_number() {
        let input = "AH KH QH JH TH AS KS QS JS TS\n2H 2D 3S\n";

        let err = run(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(format!("{err:#}").contains("expected 10 card tokens, found 3"));
    }

    #[test]
    fn rejects_invalid_card_token() {
        let input = "XH KH QH JH TH AS KS QS JS TS\n";

        let err = run(Cursor::new(input)).unwrap_err();
        assert!(format!("{err:#}").contains("invalid rank character 'X'"));
    }
}
