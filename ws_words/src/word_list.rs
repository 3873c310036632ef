use std::{
  fs::File,
  io::{BufRead, BufReader},
  path::Path,
};

use itertools::Itertools;
use util::error::{WordsearchError, WordsearchResult};

/// Ordered, duplicate-free list of lower-cased words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
  words: Vec<String>,
}

impl WordList {
  pub fn new() -> Self {
    Self::default()
  }

  fn canonicalize_word(word: &str) -> String {
    word.trim().to_lowercase()
  }

  pub fn from_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Self {
    let mut list = Self::new();
    for line in lines {
      list.insert(line.as_ref());
    }
    list
  }

  pub fn load(path: impl AsRef<Path>) -> WordsearchResult<Self> {
    let path = path.as_ref();
    let unavailable =
      |err: std::io::Error| WordsearchError::SourceUnavailable(format!("{}: {err}", path.display()));

    let lines = BufReader::new(File::open(path).map_err(unavailable)?)
      .lines()
      .collect::<Result<Vec<_>, _>>()
      .map_err(unavailable)?;
    let list = Self::from_lines(lines);
    log::debug!("Loaded {} words from {}", list.len(), path.display());
    Ok(list)
  }

  /// Adds `word` after normalizing it. Returns false if it was empty or
  /// already present.
  pub fn insert(&mut self, word: &str) -> bool {
    let word = Self::canonicalize_word(word);
    if word.is_empty() || self.words.contains(&word) {
      return false;
    }
    self.words.push(word);
    true
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.words.iter().map(|word| word.as_str())
  }

  fn title_case(word: &str) -> String {
    let mut chars = word.trim().chars();
    chars
      .next()
      .map(|first| first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
      .unwrap_or_default()
  }

  /// One title-cased word per line.
  pub fn render(&self) -> String {
    Self::render_words(self.iter())
  }

  pub fn render_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> String {
    words
      .into_iter()
      .map(|word| Self::title_case(word.as_ref()))
      .join("\n")
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::fs;

  use googletest::prelude::*;
  use util::error::WordsearchError;

  use super::WordList;

  #[gtest]
  fn test_from_lines_normalizes() {
    let list = WordList::from_lines(["lower", " ", "MiXeD", "   ", " CAPS ", "    spaces  "]);
    expect_eq!(list.iter().collect::<Vec<_>>(), vec!["lower", "mixed", "caps", "spaces"]);
  }

  #[gtest]
  fn test_from_lines_empty() {
    let list = WordList::from_lines(Vec::<String>::new());
    expect_true!(list.is_empty());
  }

  #[gtest]
  fn test_first_occurrence_wins() {
    let list = WordList::from_lines(["time", "test", "TIME", " test"]);
    expect_eq!(list.iter().collect::<Vec<_>>(), vec!["time", "test"]);
  }

  #[gtest]
  fn test_insert() {
    let mut list = WordList::new();
    expect_true!(list.insert("test"));
    expect_false!(list.insert("test"));
    expect_true!(list.insert("tester"));
    expect_false!(list.insert(""));
    expect_eq!(list.len(), 2);
  }

  #[gtest]
  fn test_render_title_case() {
    expect_eq!(
      WordList::render_words(["lower", "MiXeD", " CAPS ", "    spaces  "]),
      "Lower\nMixed\nCaps\nSpaces"
    );
    expect_eq!(WordList::new().render(), "");
  }

  #[gtest]
  fn test_load() {
    let dir = std::env::temp_dir().join(format!("ws_words_load_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("words.txt");
    fs::write(&path, "Test\n\n  time \ntest\n").unwrap();

    let list = WordList::load(&path).unwrap();
    expect_eq!(list.iter().collect::<Vec<_>>(), vec!["test", "time"]);

    fs::remove_dir_all(&dir).unwrap();
  }

  #[gtest]
  fn test_load_missing_file() {
    let err = WordList::load("/nonexistent/dir/words.txt").unwrap_err();
    expect_true!(matches!(
      err.downcast_ref::<WordsearchError>(),
      Some(WordsearchError::SourceUnavailable(_))
    ));
  }
}
