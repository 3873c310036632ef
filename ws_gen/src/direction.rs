use std::fmt::Display;

use util::pos::{Diff, Pos};

/// The five ways a word may run through the grid. There are deliberately no
/// leftward, upward-only or up-left variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
  Horizontal,
  Vertical,
  DiagDownRight,
  DiagUpRight,
  DiagDownLeft,
}

impl Direction {
  /// Order used both for random selection and for the solver's trials.
  pub const ALL: [Direction; 5] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DiagDownRight,
    Direction::DiagUpRight,
    Direction::DiagDownLeft,
  ];

  pub const fn diff(self) -> Diff {
    match self {
      Direction::Horizontal => Diff { x: 1, y: 0 },
      Direction::Vertical => Diff { x: 0, y: 1 },
      Direction::DiagDownRight => Diff { x: 1, y: 1 },
      Direction::DiagUpRight => Diff { x: 1, y: -1 },
      Direction::DiagDownLeft => Diff { x: -1, y: 1 },
    }
  }

  /// Position `offset` steps from `pos`. Not bounds checked.
  pub fn step(self, pos: Pos, offset: i32) -> Pos {
    pos + self.diff() * offset
  }

  /// Every position a word of `len` letters covers, starting at `start`.
  pub fn path(self, start: Pos, len: usize) -> impl Iterator<Item = Pos> {
    (0..len as i32).map(move |offset| self.step(start, offset))
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Direction::Horizontal => "horizontal",
        Direction::Vertical => "vertical",
        Direction::DiagDownRight => "diag-down-right",
        Direction::DiagUpRight => "diag-up-right",
        Direction::DiagDownLeft => "diag-down-left",
      }
    )
  }
}
