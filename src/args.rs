use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ws_gen::BoardConfig;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
  /// Build a new puzzle from a word list.
  Generate,
  /// Locate a word list inside a printed puzzle.
  Solve,
}

#[derive(Parser, Debug)]
#[command(version, about = "Word search generator and solver", long_about = None)]
pub struct Args {
  #[arg(long, default_value = "generate")]
  pub mode: RunMode,

  /// Side length of the generated grid.
  #[arg(long, default_value_t = BoardConfig::DEFAULT_SIZE)]
  pub size: u32,

  /// Word list, one word per line.
  #[arg(long)]
  pub words: PathBuf,

  /// Puzzle to solve, one row per line.
  #[arg(long, required_if_eq("mode", "solve"))]
  pub grid: Option<PathBuf>,

  /// Placement attempts per word.
  #[arg(long, default_value_t = BoardConfig::DEFAULT_TRIES)]
  pub tries: u32,

  /// Seed for a reproducible puzzle.
  #[arg(long)]
  pub seed: Option<u64>,

  /// Directory to write the result files into.
  #[arg(long)]
  pub save: Option<PathBuf>,

  #[arg(long)]
  pub debug: bool,
}

impl Args {
  pub fn board_config(&self) -> BoardConfig {
    BoardConfig { size: self.size, tries: self.tries }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use clap::Parser;
  use googletest::prelude::*;
  use ws_gen::BoardConfig;

  use super::{Args, RunMode};

  #[gtest]
  fn test_defaults() {
    let args = Args::try_parse_from(["wordsearch", "--words", "words.txt"]).unwrap();
    expect_eq!(args.mode, RunMode::Generate);
    expect_eq!(args.board_config(), BoardConfig::default());
    expect_eq!(args.seed, None);
    expect_false!(args.debug);
  }

  #[gtest]
  fn test_words_required() {
    expect_true!(Args::try_parse_from(["wordsearch", "--size", "10"]).is_err());
  }

  #[gtest]
  fn test_solve_requires_grid() {
    expect_true!(Args::try_parse_from(["wordsearch", "--mode", "solve", "--words", "w.txt"]).is_err());
    let args =
      Args::try_parse_from(["wordsearch", "--mode", "solve", "--words", "w.txt", "--grid", "g.txt"])
        .unwrap();
    expect_eq!(args.mode, RunMode::Solve);
  }

  #[gtest]
  fn test_generate_options() {
    let args = Args::try_parse_from([
      "wordsearch", "--size", "4", "--tries", "5", "--seed", "99", "--words", "w.txt",
    ])
    .unwrap();
    expect_eq!(args.board_config(), BoardConfig { size: 4, tries: 5 });
    expect_eq!(args.seed, Some(99));
  }
}
