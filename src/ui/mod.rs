//! Terminal front-end: renders a game and maps key presses to moves. Only
//! reads the game's public accessors and calls `drop_piece`.

mod app;
pub mod game_view;

pub use app::App;
