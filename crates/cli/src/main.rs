// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown hand sorter CLI.
//!
//! Reads a stream of two-player five-card deals, one deal per line, and
//! prints how many hands each player won once the stream ends.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

pub mod driver;

#[derive(Debug, Parser)]
struct Cli {
    /// Read deals from a file instead of stdin.
    #[clap(long, short)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let tally = match &cli.file {
        Some(path) => driver::run(BufReader::new(File::open(path)?))?,
        None => driver::run(io::stdin().lock())?,
    };

    println!("{tally}");
    Ok(())
}
