use std::{fs, path::Path};

use util::{
  error::{WordsearchError, WordsearchResult},
  grid::Grid,
};

use crate::tile::Tile;

/// Parses a printed puzzle, one row per line. Whitespace inside a row is
/// ignored, blank lines are skipped, and `_` reads back as a blank cell. Any
/// other character is a cell, so words with digits or punctuation still load.
/// Every row must be as long as the first.
pub fn parse_grid<S: AsRef<str>>(
  lines: impl IntoIterator<Item = S>,
) -> WordsearchResult<Grid<Tile>> {
  let (width, height, tiles) = lines.into_iter().try_fold(
    (None, 0, vec![]),
    |(width, height, mut tiles), line| -> WordsearchResult<_> {
      let row = line
        .as_ref()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
          Tile::BLANK_CHAR => Tile::Blank,
          c => Tile::letter(c),
        })
        .collect::<Vec<_>>();
      if row.is_empty() {
        return Ok((width, height, tiles));
      }

      if let Some(width) = width {
        if row.len() != width {
          return Err(
            WordsearchError::Parse(format!("Grid row lengths differ: {} vs {width}", row.len()))
              .into(),
          );
        }
      }

      let row_len = row.len();
      tiles.extend(row);
      Ok((Some(row_len), height + 1, tiles))
    },
  )?;

  let width = width.ok_or_else(|| WordsearchError::Parse("Empty grid".to_owned()))?;
  Grid::from_vec(tiles, width as u32, height)
}

pub fn load_grid(path: impl AsRef<Path>) -> WordsearchResult<Grid<Tile>> {
  let path = path.as_ref();
  let contents = fs::read_to_string(path)
    .map_err(|err| WordsearchError::SourceUnavailable(format!("{}: {err}", path.display())))?;
  parse_grid(contents.lines())
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;
  use util::{error::WordsearchError, grid::Gridlike, pos::Pos};

  use crate::tile::Tile;

  use super::{load_grid, parse_grid};

  #[gtest]
  fn test_clean_grid() {
    let grid = parse_grid(["", " A    B    c", "", "DEf", "", "", "gh     i", ""]).unwrap();
    expect_eq!(grid.width(), 3);
    expect_eq!(grid.height(), 3);
    expect_eq!(grid.to_string(), "A B C\nD E F\nG H I");
  }

  #[gtest]
  fn test_tabs_and_blanks() {
    let grid = parse_grid(["T\tE _", "_ _ _"]).unwrap();
    expect_eq!(grid.get(Pos { x: 1, y: 0 }).cloned(), Some(Tile::Letter('E')));
    expect_eq!(grid.get(Pos { x: 2, y: 0 }).cloned(), Some(Tile::Blank));
  }

  #[gtest]
  fn test_ragged_rows() {
    let err = parse_grid(["ABC", "DE"]).unwrap_err();
    expect_true!(matches!(err.downcast_ref::<WordsearchError>(), Some(WordsearchError::Parse(_))));
  }

  #[gtest]
  fn test_empty() {
    expect_that!(&parse_grid(["", "  "]), err(anything()));
  }

  #[gtest]
  fn test_load_missing_file() {
    let err = load_grid("/nonexistent/dir/grid.txt").unwrap_err();
    expect_true!(matches!(
      err.downcast_ref::<WordsearchError>(),
      Some(WordsearchError::SourceUnavailable(_))
    ));
  }

  #[gtest]
  fn test_digits_and_punctuation_are_cells() {
    let grid = parse_grid(["T - R", "4 x 4", "é ' _"]).unwrap();
    expect_eq!(grid.width(), 3);
    expect_eq!(grid.get(Pos { x: 1, y: 0 }).cloned(), Some(Tile::Letter('-')));
    expect_eq!(grid.get(Pos { x: 0, y: 1 }).cloned(), Some(Tile::Letter('4')));
    expect_eq!(grid.get(Pos { x: 1, y: 1 }).cloned(), Some(Tile::Letter('X')));
    expect_eq!(grid.get(Pos { x: 0, y: 2 }).cloned(), Some(Tile::Letter('É')));
    expect_eq!(grid.get(Pos { x: 1, y: 2 }).cloned(), Some(Tile::Letter('\'')));
    expect_eq!(grid.get(Pos { x: 2, y: 2 }).cloned(), Some(Tile::Blank));
  }
}
