use std::path::Path;

use util::{
  error::WordsearchResult,
  grid::{Grid, Gridlike},
  pos::Pos,
};
use ws_words::WordList;

use crate::{
  direction::Direction,
  fit::{add_word, fits},
  layout::{load_grid, parse_grid},
  placement::Placement,
  tile::Tile,
};

/// Locates words in an already printed puzzle. The puzzle grid is never
/// modified; found words are written into a separate solution overlay.
#[derive(Clone, Debug)]
pub struct WordFinder {
  grid: Grid<Tile>,
  solution: Grid<Tile>,
  placements: Vec<Placement>,
  missing: Vec<String>,
}

impl WordFinder {
  pub fn new(grid: Grid<Tile>) -> Self {
    let solution = grid.map(|_| Tile::Blank);
    Self { grid, solution, placements: Vec::new(), missing: Vec::new() }
  }

  pub fn from_layout<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> WordsearchResult<Self> {
    Ok(Self::new(parse_grid(lines)?))
  }

  /// Reads the puzzle at `grid_path` and the words to look for at
  /// `words_path`.
  pub fn load(
    grid_path: impl AsRef<Path>,
    words_path: impl AsRef<Path>,
  ) -> WordsearchResult<(Self, WordList)> {
    let finder = Self::new(load_grid(grid_path)?);
    let words = WordList::load(words_path)?;
    Ok((finder, words))
  }

  pub fn grid(&self) -> &Grid<Tile> {
    &self.grid
  }

  pub fn solution(&self) -> &Grid<Tile> {
    &self.solution
  }

  pub fn placements(&self) -> &[Placement] {
    &self.placements
  }

  pub fn missing(&self) -> &[String] {
    &self.missing
  }

  /// First (start, direction) in row-major order, trying directions in
  /// `Direction::ALL` order at each start cell.
  fn locate(&self, word: &str) -> Option<(Pos, Direction)> {
    let first = word.chars().next()?;
    self
      .grid
      .positions()
      .filter(|&pos| self.grid.get(pos).is_some_and(|tile| tile.matches(first)))
      .find_map(|pos| {
        Direction::ALL
          .into_iter()
          .find(|&direction| fits(word, pos, direction, &self.grid))
          .map(|direction| (pos, direction))
      })
  }

  /// Searches for `word` and marks it in the solution grid if found.
  pub fn find(&mut self, word: &str) -> bool {
    let word: String = word.chars().map(Tile::fold_case).collect();
    let Some((pos, direction)) = self.locate(&word) else {
      log::debug!("\"{word}\" not found");
      return false;
    };

    match add_word(&word, pos, direction, &mut self.solution) {
      Ok(()) => {
        let placement = Placement { word, pos, direction };
        log::debug!("Found {placement}");
        self.placements.push(placement);
        true
      }
      Err(err) => {
        log::warn!("Could not mark \"{word}\": {err}");
        false
      }
    }
  }

  /// Runs `find` for every word, collecting the ones not found into
  /// `missing`. True only if every word was found.
  pub fn find_list<S: AsRef<str>>(&mut self, words: impl IntoIterator<Item = S>) -> bool {
    for word in words {
      let word = word.as_ref();
      if !self.find(word) {
        log::warn!("Could not find \"{word}\"");
        self.missing.push(word.to_owned());
      }
    }

    log::info!(
      "Found {} word(s), {} missing",
      self.placements.len(),
      self.missing.len()
    );
    self.missing.is_empty()
  }
}
