use std::fmt::{Debug, Display};

use crate::{
  error::{WordsearchError, WordsearchResult},
  pos::Pos,
};

pub trait Gridlike<T> {
  fn width(&self) -> u32;
  fn height(&self) -> u32;
  fn in_bounds(&self, pos: Pos) -> bool;

  fn get(&self, pos: Pos) -> Option<&T>;

  fn iter_row<'a, 'b>(&'a self, y: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a;

  /// Like `get`, but reports an out-of-bounds position as an error.
  fn tile(&self, pos: Pos) -> Result<&T, WordsearchError> {
    self.get(pos).ok_or(WordsearchError::OutOfBounds(pos))
  }
}

pub trait MutGridlike<T>: Gridlike<T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T>;

  fn set(&mut self, pos: Pos, value: T) -> Result<(), WordsearchError> {
    *self.get_mut(pos).ok_or(WordsearchError::OutOfBounds(pos))? = value;
    Ok(())
  }
}

/// Row-major `width` x `height` matrix. Row is `y`, column is `x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
  grid: Vec<T>,
  width: u32,
  height: u32,
}

impl<T> Grid<T> {
  pub fn from_vec(grid: Vec<T>, width: u32, height: u32) -> WordsearchResult<Self> {
    let expected_size = width as usize * height as usize;
    if grid.len() != expected_size {
      return Err(
        WordsearchError::Internal(format!(
          "Expected grid.len() == expected_size, {} != {expected_size}",
          grid.len()
        ))
        .into(),
      );
    }

    Ok(Self { grid, width, height })
  }

  fn idx(&self, pos: Pos) -> usize {
    debug_assert!(self.in_bounds(pos));
    let x = pos.x as usize;
    let y = pos.y as usize;
    x + y * self.width as usize
  }

  pub fn positions(&self) -> impl Iterator<Item = Pos> {
    let width = self.width;
    (0..self.height as i32).flat_map(move |y| (0..width as i32).map(move |x| Pos { x, y }))
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.grid.iter()
  }

  /// A grid of the same dimensions with `f` applied to every cell.
  pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
    Grid { grid: self.grid.iter().map(f).collect(), width: self.width, height: self.height }
  }
}

impl<T> Grid<T>
where
  T: Default,
{
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      grid: (0..width as usize * height as usize).map(|_| T::default()).collect(),
      width,
      height,
    }
  }
}

impl<T> Gridlike<T> for Grid<T> {
  fn width(&self) -> u32 {
    self.width
  }

  fn height(&self) -> u32 {
    self.height
  }

  fn in_bounds(&self, pos: Pos) -> bool {
    pos.x >= 0 && pos.x < self.width() as i32 && pos.y >= 0 && pos.y < self.height() as i32
  }

  fn get(&self, pos: Pos) -> Option<&T> {
    self
      .in_bounds(pos)
      .then(|| self.grid.get(self.idx(pos)))
      .flatten()
  }

  fn iter_row<'a, 'b>(&'a self, y: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a,
  {
    let y = y as i32;
    (0..self.width()).flat_map(move |x| self.get(Pos { x: x as i32, y }))
  }
}

impl<T> MutGridlike<T> for Grid<T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
    self
      .in_bounds(pos)
      .then(|| {
        let index = self.idx(pos);
        self.grid.get_mut(index)
      })
      .flatten()
  }
}

impl<T> Grid<T> {
  fn fmt_rows<F>(&self, f: &mut std::fmt::Formatter<'_>, mut fmt_cell: F) -> std::fmt::Result
  where
    F: FnMut(&mut std::fmt::Formatter<'_>, &T) -> std::fmt::Result,
  {
    (0..self.height).try_for_each(|y| {
      if y != 0 {
        writeln!(f)?;
      }
      self.iter_row(y).enumerate().try_for_each(|(x, t)| {
        if x != 0 {
          write!(f, " ")?;
        }
        fmt_cell(f, t)
      })
    })
  }
}

impl<T: Debug> Debug for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.fmt_rows(f, |f, t| write!(f, "{t:?}"))
  }
}

/// Cells separated by single spaces, rows by newlines, nothing trailing.
impl<T: Display> Display for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.fmt_rows(f, |f, t| write!(f, "{t}"))
  }
}
