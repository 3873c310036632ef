use std::fmt::Display;

use util::pos::Pos;

use crate::{direction::Direction, tile::Tile};

/// Where a word was committed into a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
  pub word: String,
  pub pos: Pos,
  pub direction: Direction,
}

impl Display for Placement {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let word: String = self.word.chars().map(Tile::fold_case).collect();
    write!(f, "{word} {} {}", self.pos, self.direction)
  }
}
