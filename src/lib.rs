//! # Connect Four
//!
//! Two-player grid-drop game engine with a terminal front-end built with
//! Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: grid, players, state machine
//! - [`ui`]: Terminal UI: game view and key handling
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
