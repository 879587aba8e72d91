//! Game session and result sharing

mod session;
mod share;

pub use session::{Game, GameError, GameState, Row};
pub use share::{emoji_grid, share_text};
