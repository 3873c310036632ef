use std::{fs, path::Path};

use itertools::Itertools;
use util::error::{WordsearchError, WordsearchResult};
use ws_gen::{Board, Placement, WordFinder};
use ws_words::WordList;

pub const BOARD_FILE: &str = "board.txt";
pub const ANSWERS_FILE: &str = "answers.txt";
pub const WORDS_FILE: &str = "words.txt";
pub const SOLUTION_FILE: &str = "solution.txt";

/// `WORD (x, y) direction`, one placement per line.
pub fn render_key(placements: &[Placement]) -> String {
  placements.iter().join("\n")
}

fn write_file(dir: &Path, name: &str, contents: &str) -> WordsearchResult {
  let path = dir.join(name);
  fs::write(&path, contents)
    .map_err(|err| WordsearchError::SourceUnavailable(format!("{}: {err}", path.display())))?;
  log::info!("Wrote {}", path.display());
  Ok(())
}

pub fn save_puzzle(dir: &Path, board: &Board, words: &WordList) -> WordsearchResult {
  write_file(dir, BOARD_FILE, &board.display().to_string())?;
  write_file(dir, ANSWERS_FILE, &board.answer().to_string())?;
  write_file(dir, WORDS_FILE, &words.render())
}

pub fn save_solution(dir: &Path, finder: &WordFinder) -> WordsearchResult {
  write_file(dir, SOLUTION_FILE, &finder.solution().to_string())
}
