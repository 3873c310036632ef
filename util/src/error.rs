use core::fmt;
use std::{
  error::Error,
  fmt::{Display, Formatter},
};

use crate::pos::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordsearchError {
  /// A coordinate walk left the grid.
  OutOfBounds(Pos),
  /// The word can't fit along the dimension a direction needs, wherever it
  /// starts.
  NoRoom(String),
  /// Every placement attempt for the word collided.
  PlacementExhausted(String),
  /// An input or output file could not be read or written.
  SourceUnavailable(String),
  Parse(String),
  InvalidConfig(String),
  /// The words a generation or solve pass could not place/find, in input
  /// order.
  Missing(Vec<String>),
  Internal(String),
}

impl Display for WordsearchError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      WordsearchError::OutOfBounds(pos) => write!(f, "Position {pos} is out of bounds"),
      WordsearchError::NoRoom(msg) => write!(f, "No room: {msg}"),
      WordsearchError::PlacementExhausted(msg) => write!(f, "Placement exhausted: {msg}"),
      WordsearchError::SourceUnavailable(msg) => write!(f, "Source unavailable: {msg}"),
      WordsearchError::Parse(msg) => write!(f, "Parse error: {msg}"),
      WordsearchError::InvalidConfig(msg) => write!(f, "Invalid config: {msg}"),
      WordsearchError::Missing(words) => write!(f, "Missing words: {}", words.join(", ")),
      WordsearchError::Internal(msg) => write!(f, "Internal error: {msg}"),
    }
  }
}

impl Error for WordsearchError {}

pub type WordsearchResult<T = ()> = Result<T, Box<dyn Error>>;
