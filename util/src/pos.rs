use std::{
  fmt::Display,
  ops::{Add, Mul},
};

/// A cell coordinate. `x` is the column and `y` the row; either may go
/// negative while walking a path, bounds are only checked on grid access.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl Pos {
  pub const fn zero() -> Self {
    Self { x: 0, y: 0 }
  }

  pub const fn is_negative(&self) -> bool {
    self.x < 0 || self.y < 0
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

impl Display for Pos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
  pub x: i32,
  pub y: i32,
}

impl Mul<i32> for Diff {
  type Output = Diff;

  fn mul(self, rhs: i32) -> Self {
    Self { x: self.x * rhs, y: self.y * rhs }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;

  use super::{Diff, Pos};

  #[gtest]
  fn test_step_by_scaled_diff() {
    let pos = Pos { x: 1, y: 1 } + Diff { x: 1, y: 1 } * 2;
    expect_eq!(pos, Pos { x: 3, y: 3 });
  }

  #[gtest]
  fn test_negative() {
    let pos = Pos::zero() + Diff { x: 1, y: -1 };
    expect_eq!(pos, Pos { x: 1, y: -1 });
    expect_true!(pos.is_negative());
    expect_false!(Pos::zero().is_negative());
  }

  #[gtest]
  fn test_display() {
    expect_eq!(Pos { x: 7, y: 0 }.to_string(), "(7, 0)");
  }
}
