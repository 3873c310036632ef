#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod board;
pub mod direction;
pub mod finder;
pub mod fit;
pub mod layout;
pub mod placement;
pub mod tile;

pub use board::{Board, BoardConfig};
pub use direction::Direction;
pub use finder::WordFinder;
pub use placement::Placement;
pub use tile::Tile;
