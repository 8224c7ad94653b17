//! Round scoring and game state for a push-your-luck card game.
//! Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;
pub mod round;
pub mod scoring;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use game::*;
pub use hand::*;
pub use history::*;
pub use player::*;
pub use round::*;
pub use scoring::*;
