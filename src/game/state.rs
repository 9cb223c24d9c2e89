use log::{debug, info};

use super::{Grid, Players};
use crate::error::GameError;

/// Whether a game is still running, and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus<P> {
    Active,
    Won(P),
    Tied,
}

/// Outcome of a successful `drop_piece`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult<P> {
    /// Piece landed, game continues with `next_player`
    Placed {
        row: usize,
        column: usize,
        next_player: P,
    },
    /// Piece landed and completed a line for `player`
    Won { row: usize, column: usize, player: P },
    /// Piece landed and filled the board without a line
    Tied { row: usize, column: usize },
}

impl<P> MoveResult<P> {
    /// Landing coordinates `(row, column)` of the piece
    pub fn position(&self) -> (usize, usize) {
        match *self {
            MoveResult::Placed { row, column, .. }
            | MoveResult::Won { row, column, .. }
            | MoveResult::Tied { row, column } => (row, column),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveResult::Placed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<P> {
    grid: Grid<P>,
    players: Players<P>,
    current_player: P,
    status: GameStatus<P>,
}

impl<P: Clone + PartialEq> GameState<P> {
    /// Create a game with an empty `height` x `width` grid; `player1` moves
    /// first
    pub fn new(height: usize, width: usize, player1: P, player2: P) -> Result<Self, GameError> {
        if height == 0 || width == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "grid dimensions must be positive (got {height}x{width})"
            )));
        }
        let players = Players::new(player1, player2).ok_or_else(|| {
            GameError::InvalidConfiguration("players must be distinct".to_string())
        })?;
        let grid = Grid::try_new(height, width).ok_or_else(|| {
            GameError::InvalidConfiguration(format!("grid of {height}x{width} cells is too large"))
        })?;

        info!("new {height}x{width} game");
        Ok(GameState {
            grid,
            current_player: players.first().clone(),
            players,
            status: GameStatus::Active,
        })
    }

    /// Get reference to grid
    pub fn grid(&self) -> &Grid<P> {
        &self.grid
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn players(&self) -> &Players<P> {
        &self.players
    }

    /// Get the player whose turn it is; after a terminal move this is the
    /// player who made it
    pub fn current_player(&self) -> &P {
        &self.current_player
    }

    pub fn status(&self) -> &GameStatus<P> {
        &self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::Active
    }

    pub fn winner(&self) -> Option<&P> {
        match &self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Check if a column can take no more pieces
    pub fn is_column_full(&self, column: usize) -> bool {
        self.grid.is_column_full(column)
    }

    /// Columns that still accept a piece, empty once the game is over
    pub fn open_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.width())
            .filter(|&column| !self.grid.is_column_full(column))
            .collect()
    }

    /// Check whether `player` owns four in a row anywhere on the grid
    pub fn check_for_win(&self, player: &P) -> bool {
        self.grid.has_four_in_a_row(player)
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On error nothing is mutated. A win is checked before a full board, so
    /// a move that both completes a line and fills the grid is a win. The
    /// current player only changes when the game continues.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveResult<P>, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        if column >= self.width() {
            return Err(GameError::InvalidColumn {
                column,
                width: self.width(),
            });
        }
        let row = self
            .grid
            .landing_row(column)
            .ok_or(GameError::ColumnFull { column })?;

        self.grid.place(row, column, self.current_player.clone());
        debug!("piece placed at row {row}, column {column}");

        if self.check_for_win(&self.current_player) {
            info!("game won at row {row}, column {column}");
            self.status = GameStatus::Won(self.current_player.clone());
            return Ok(MoveResult::Won {
                row,
                column,
                player: self.current_player.clone(),
            });
        }

        if self.grid.is_full() {
            info!("game tied, board full");
            self.status = GameStatus::Tied;
            return Ok(MoveResult::Tied { row, column });
        }

        self.current_player = self.players.other(&self.current_player).clone();
        Ok(MoveResult::Placed {
            row,
            column,
            next_player: self.current_player.clone(),
        })
    }
}
