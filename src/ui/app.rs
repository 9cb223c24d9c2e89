use crate::config::GameConfig;
use crate::error::{ConfigError, GameError};
use crate::game::{GameState, MoveResult, PlayerColor};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: GameConfig,
    game_state: GameState<PlayerColor>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let game_state = config.new_game()?;
        Ok(App {
            selected_column: game_state.width() / 2, // Start in middle
            game_state,
            config,
            should_quit: false,
            message: None,
        })
    }

    pub fn game_state(&self) -> &GameState<PlayerColor> {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Keep the outcome on screen until a new game starts
        if !self.game_state.is_terminal() {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn restart(&mut self) {
        match self.config.new_game() {
            Ok(game_state) => {
                self.selected_column = game_state.width() / 2;
                self.game_state = game_state;
                self.message = Some("New game started!".to_string());
            }
            Err(e) => {
                self.message = Some(format!("Cannot start a new game: {e}"));
            }
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.drop_piece(self.selected_column) {
            Ok(MoveResult::Placed { .. }) => {}
            Ok(MoveResult::Won { player, .. }) => {
                self.message = Some(format!("{player} player wins! Press 'r' to restart."));
            }
            Ok(MoveResult::Tied { .. }) => {
                self.message = Some("Tie! Press 'r' to restart.".to_string());
            }
            Err(GameError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(GameError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, self.message());
    }
}
