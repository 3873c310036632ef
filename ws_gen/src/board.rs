use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use util::{
  error::{WordsearchError, WordsearchResult},
  grid::{Grid, Gridlike, MutGridlike},
  pos::Pos,
};

use crate::{
  direction::Direction,
  fit::{add_word, fits},
  placement::Placement,
  tile::Tile,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
  /// Side length of the square grid.
  pub size: u32,
  /// Random (direction, position) draws per word before giving up on it.
  pub tries: u32,
}

impl BoardConfig {
  pub const DEFAULT_SIZE: u32 = 15;
  pub const DEFAULT_TRIES: u32 = 300;
  /// Largest accepted side length. Keeps `size * size` cells allocatable and
  /// every coordinate representable as a `Pos`.
  pub const MAX_SIZE: u32 = 1024;

  pub fn validate(&self) -> Result<(), WordsearchError> {
    if self.size == 0 {
      return Err(WordsearchError::InvalidConfig("Board size must be positive".to_owned()));
    }
    if self.size > Self::MAX_SIZE {
      return Err(WordsearchError::InvalidConfig(format!(
        "Board size {} exceeds the maximum of {}",
        self.size,
        Self::MAX_SIZE
      )));
    }
    Ok(())
  }
}

impl Default for BoardConfig {
  fn default() -> Self {
    Self { size: Self::DEFAULT_SIZE, tries: Self::DEFAULT_TRIES }
  }
}

/// Draws a start position from which a word of `len` letters along
/// `direction` stays inside a `size` x `size` grid. `NoRoom` if no such
/// position exists.
pub fn random_start<R: Rng>(
  rng: &mut R,
  len: usize,
  direction: Direction,
  size: u32,
) -> Result<Pos, WordsearchError> {
  let n = size as i32;
  let len = len as i32;
  let ((x_lo, x_hi), (y_lo, y_hi)) = match direction {
    Direction::Horizontal => ((0, n - len), (0, n - 1)),
    Direction::Vertical => ((0, n - 1), (0, n - len)),
    Direction::DiagDownRight => ((0, n - len), (0, n - len)),
    Direction::DiagDownLeft => ((len - 1, n - 1), (0, n - len)),
    Direction::DiagUpRight => ((0, n - len), (len - 1, n - 1)),
  };

  if len == 0 || x_lo > x_hi || y_lo > y_hi {
    return Err(WordsearchError::NoRoom(format!(
      "{len} letters do not fit {direction} in a {size}x{size} grid"
    )));
  }

  Ok(Pos { x: rng.random_range(x_lo..=x_hi), y: rng.random_range(y_lo..=y_hi) })
}

/// A word search under construction. Words are fitted into the answer grid;
/// once every word is placed, `fill` copies it into the display grid with
/// noise letters in the blanks.
#[derive(Debug)]
pub struct Board<R = StdRng> {
  answer: Grid<Tile>,
  display: Grid<Tile>,
  tries: u32,
  rng: R,
  placements: Vec<Placement>,
  missing: Vec<String>,
}

impl Board<StdRng> {
  pub fn new(config: BoardConfig) -> WordsearchResult<Self> {
    Self::with_rng(config, StdRng::from_os_rng())
  }

  pub fn seeded(config: BoardConfig, seed: u64) -> WordsearchResult<Self> {
    Self::with_rng(config, StdRng::seed_from_u64(seed))
  }
}

impl<R: Rng> Board<R> {
  pub fn with_rng(config: BoardConfig, rng: R) -> WordsearchResult<Self> {
    config.validate()?;
    Ok(Self {
      answer: Grid::new(config.size, config.size),
      display: Grid::new(config.size, config.size),
      tries: config.tries,
      rng,
      placements: Vec::new(),
      missing: Vec::new(),
    })
  }

  pub fn size(&self) -> u32 {
    self.answer.width()
  }

  pub fn answer(&self) -> &Grid<Tile> {
    &self.answer
  }

  pub fn display(&self) -> &Grid<Tile> {
    &self.display
  }

  pub fn placements(&self) -> &[Placement] {
    &self.placements
  }

  pub fn missing(&self) -> &[String] {
    &self.missing
  }

  /// Tries to fit `word` somewhere in the answer grid. `NoRoom` when the
  /// word can't fit at all, `PlacementExhausted` when every try collided.
  pub fn add(&mut self, word: &str) -> Result<Placement, WordsearchError> {
    let len = word.chars().count();
    let size = self.size();
    if len > size as usize {
      return Err(WordsearchError::NoRoom(format!(
        "\"{word}\" is longer than the {size}x{size} grid"
      )));
    }

    for _ in 0..self.tries {
      let &direction = Direction::ALL
        .choose(&mut self.rng)
        .ok_or_else(|| WordsearchError::Internal("No directions to choose from".to_owned()))?;
      let pos = random_start(&mut self.rng, len, direction, size)?;
      if fits(word, pos, direction, &self.answer) {
        add_word(word, pos, direction, &mut self.answer)?;
        let placement = Placement { word: word.to_owned(), pos, direction };
        log::debug!("Placed {placement}");
        self.placements.push(placement.clone());
        return Ok(placement);
      }
    }

    Err(WordsearchError::PlacementExhausted(format!(
      "\"{word}\" collided on all {} tries",
      self.tries
    )))
  }

  /// Places every word, collecting the ones that don't fit into `missing`.
  /// Fills the display grid only if nothing is missing.
  pub fn populate<S: AsRef<str>>(&mut self, words: impl IntoIterator<Item = S>) -> bool {
    for word in words {
      let word = word.as_ref();
      if let Err(err) = self.add(word) {
        log::warn!("Could not place \"{word}\": {err}");
        self.missing.push(word.to_owned());
      }
    }

    if !self.missing.is_empty() {
      log::info!("{} word(s) could not be placed", self.missing.len());
      return false;
    }

    self.fill();
    log::info!("Placed {} word(s) in a {1}x{1} grid", self.placements.len(), self.size());
    true
  }

  /// Copies the answer grid into the display grid, replacing each blank with
  /// a uniformly random upper-case letter.
  pub fn fill(&mut self) {
    for pos in self.answer.positions() {
      let tile = match self.answer.get(pos) {
        Some(Tile::Blank) | None => Tile::Letter(char::from(b'A' + self.rng.random_range(0..26u8))),
        Some(&tile) => tile,
      };
      if let Some(cell) = self.display.get_mut(pos) {
        *cell = tile;
      }
    }
  }
}
