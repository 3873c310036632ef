use std::fmt::Display;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
  #[default]
  Blank,
  /// Always upper-case, see `Tile::letter`.
  Letter(char),
}

impl Tile {
  pub const BLANK_CHAR: char = '_';

  /// Upper-case form of a single letter. Letters whose upper case is more
  /// than one char (`ß`) keep the first one, so a word keeps its length.
  pub fn fold_case(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
  }

  pub fn letter(c: char) -> Self {
    Tile::Letter(Self::fold_case(c))
  }

  pub fn is_blank(&self) -> bool {
    matches!(self, Tile::Blank)
  }

  /// Case-insensitive comparison against a word letter. Blank matches
  /// nothing.
  pub fn matches(&self, c: char) -> bool {
    match self {
      Tile::Blank => false,
      Tile::Letter(letter) => *letter == Self::fold_case(c),
    }
  }
}

impl Display for Tile {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Tile::Letter(c) => *c,
        Tile::Blank => Tile::BLANK_CHAR,
      }
    )
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;

  use super::Tile;

  #[gtest]
  fn test_letter_uppercases() {
    expect_eq!(Tile::letter('q'), Tile::Letter('Q'));
  }

  #[gtest]
  fn test_matches() {
    expect_true!(Tile::letter('t').matches('t'));
    expect_true!(Tile::letter('t').matches('T'));
    expect_false!(Tile::letter('t').matches('r'));
    expect_false!(Tile::Blank.matches('_'));
  }

  #[gtest]
  fn test_non_ascii_letters() {
    expect_eq!(Tile::letter('é'), Tile::Letter('É'));
    expect_true!(Tile::letter('é').matches('É'));
    expect_true!(Tile::letter('É').matches('é'));
    expect_eq!(Tile::letter('ß'), Tile::Letter('S'));
  }

  #[gtest]
  fn test_display() {
    expect_eq!(Tile::Blank.to_string(), "_");
    expect_eq!(Tile::letter('e').to_string(), "E");
  }
}
