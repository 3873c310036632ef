use util::{
  error::WordsearchError,
  grid::{Gridlike, MutGridlike},
  pos::Pos,
};

use crate::{direction::Direction, tile::Tile};

/// Whether `word` can be written from `start` along `direction` without
/// leaving the grid or overwriting a different letter. Shared by generation
/// (against the answer grid) and solving (against the loaded grid).
pub fn fits<G: Gridlike<Tile>>(word: &str, start: Pos, direction: Direction, grid: &G) -> bool {
  word
    .chars()
    .zip(direction.path(start, word.chars().count()))
    .all(|(c, pos)| {
      !pos.is_negative()
        && grid
          .get(pos)
          .is_some_and(|tile| tile.is_blank() || tile.matches(c))
    })
}

/// Writes the upper-cased letters of `word` along the path. Stops with
/// `OutOfBounds` at the first position off the grid, leaving earlier cells
/// written, so callers check `fits` first.
pub fn add_word<G: MutGridlike<Tile>>(
  word: &str,
  start: Pos,
  direction: Direction,
  grid: &mut G,
) -> Result<(), WordsearchError> {
  word
    .chars()
    .zip(direction.path(start, word.chars().count()))
    .try_for_each(|(c, pos)| {
      if pos.is_negative() {
        return Err(WordsearchError::OutOfBounds(pos));
      }
      grid.set(pos, Tile::letter(c))
    })
}
