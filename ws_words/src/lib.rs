#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod word_list;

pub use word_list::WordList;
