use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::board::{column_index, Board};
use super::{GameStatus, PlayerId};
use crate::error::{MoveError, SetupError};

/// A single accepted token placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: PlayerId,
    pub row: usize,
    pub column: usize,
}

/// The Connect Four state machine.
///
/// Owns the board, the ordered pair of players, the active-turn index, the
/// derived status and the random source used to pick who starts. It is only
/// mutated through [`GameEngine::place_token`] and [`GameEngine::reset`]; every
/// rejected call leaves it untouched.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    board: Board,
    players: [PlayerId; 2],
    turn: usize,
    status: GameStatus,
    last_placement: Option<Placement>,
    move_count: usize,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create an engine whose starting player is drawn from OS entropy.
    pub fn new(first: PlayerId, second: PlayerId) -> Result<Self, SetupError> {
        Self::with_rng(first, second, StdRng::from_os_rng())
    }

    /// Create an engine with a reproducible sequence of starting players.
    pub fn seeded(first: PlayerId, second: PlayerId, seed: u64) -> Result<Self, SetupError> {
        Self::with_rng(first, second, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing starting players from `rng`.
    pub fn with_rng(first: PlayerId, second: PlayerId, rng: R) -> Result<Self, SetupError> {
        if first == second {
            return Err(SetupError::InvalidPlayers(first));
        }

        let mut engine = GameEngine {
            board: Board::new(),
            players: [first, second],
            turn: 0,
            status: GameStatus::InProgress,
            last_placement: None,
            move_count: 0,
            rng,
        };
        engine.reset();
        Ok(engine)
    }

    pub fn current_status(&self) -> GameStatus {
        self.status
    }

    /// Player whose turn is active. After a terminal placement this is the
    /// player who made it.
    pub fn current_player(&self) -> PlayerId {
        self.players[self.turn]
    }

    pub fn players(&self) -> [PlayerId; 2] {
        self.players
    }

    /// Independent copy of the grid
    pub fn snapshot_board(&self) -> Board {
        self.board
    }

    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    /// Tokens placed since the last reset
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_legal_move(&self, column: isize) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        column_index(column).is_some_and(|col| !self.board.is_column_full(col))
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }

        self.board.open_columns()
    }

    /// Drop the current player's token into `column` and return the new status.
    pub fn place_token(&mut self, column: isize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let col = column_index(column).ok_or(MoveError::InvalidColumn(column))?;

        let player = self.current_player();
        let row = self.board.drop_token(col, player)?;
        self.move_count += 1;
        self.last_placement = Some(Placement {
            player,
            row,
            column: col,
        });

        self.status = self.evaluate(row, col, player);
        debug!(%player, row, column = col, status = ?self.status, "token placed");

        match self.status {
            GameStatus::InProgress => self.turn ^= 1,
            GameStatus::Won(winner) => {
                info!(%winner, moves = self.move_count, "game won");
            }
            GameStatus::Draw => {
                info!(moves = self.move_count, "game drawn");
            }
        }

        Ok(self.status)
    }

    /// Clear the board and draw a new starting player.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = self.rng.random_range(0..2);
        self.status = GameStatus::InProgress;
        self.last_placement = None;
        self.move_count = 0;
        debug!(starting_player = %self.current_player(), "new game");
    }

    /// Status after `player` placed at (row, col). A full board is only
    /// possible once the top row was just reached, and it is a draw even if
    /// the last token also completes a run. Otherwise only lines through the
    /// pivot are inspected.
    fn evaluate(&self, row: usize, col: usize, player: PlayerId) -> GameStatus {
        if row == 0 && self.board.is_top_row_full() {
            GameStatus::Draw
        } else if self.board.connects_four(row, col) {
            GameStatus::Won(player)
        } else {
            GameStatus::InProgress
        }
    }
}
