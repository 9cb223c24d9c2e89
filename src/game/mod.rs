//! Core Connect Four game logic: the grid, the player pair, and the game
//! state machine. Nothing here knows about rendering.

mod board;
mod player;
mod state;

pub use board::{Grid, CONNECT};
pub use player::{PlayerColor, Players};
pub use state::{GameState, GameStatus, MoveResult};
