use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::bot::MoveSource;
use crate::error::{MoveError, SessionError};
use crate::game::{Board, GameEngine, GameStatus, Placement, PlayerId};

/// Outcome of one completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub status: GameStatus,
    pub starting_player: PlayerId,
    pub placements: Vec<Placement>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    /// Number of tokens placed
    pub fn game_length(&self) -> usize {
        self.placements.len()
    }
}

/// Progress reported to the session observer.
#[derive(Debug, Clone, Copy)]
pub enum SessionEvent<'a> {
    Placed {
        placement: Placement,
        board: &'a Board,
    },
    Rejected {
        player: PlayerId,
        column: isize,
        error: &'a MoveError,
    },
}

/// Drives a game engine with one move source per player.
pub struct Session<R = StdRng> {
    engine: GameEngine<R>,
    sources: [Box<dyn MoveSource>; 2],
    max_rejections: usize,
}

impl<R: Rng> Session<R> {
    pub fn new(
        engine: GameEngine<R>,
        source_a: Box<dyn MoveSource>,
        source_b: Box<dyn MoveSource>,
        max_rejections: usize,
    ) -> Self {
        Session {
            engine,
            sources: [source_a, source_b],
            max_rejections,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Name of the move source seated for `player`.
    pub fn source_name(&self, player: PlayerId) -> &str {
        self.sources[player.index()].name()
    }

    /// Play one game to completion. The engine is reset first if it already
    /// holds moves, so consecutive calls play fresh games.
    ///
    /// Rejected columns are re-solicited from the same source until
    /// `max_rejections` consecutive rejections, which ends the session.
    pub fn play_game<F>(&mut self, mut observe: F) -> Result<GameRecord, SessionError>
    where
        F: FnMut(SessionEvent<'_>),
    {
        if self.engine.move_count() > 0 || self.engine.current_status().is_terminal() {
            self.engine.reset();
        }

        let starting_player = self.engine.current_player();
        info!(
            %starting_player,
            a = self.source_name(PlayerId::A),
            b = self.source_name(PlayerId::B),
            "starting game"
        );

        let mut placements = Vec::new();
        let mut rejections = 0;

        while !self.engine.current_status().is_terminal() {
            let player = self.engine.current_player();
            let board = self.engine.snapshot_board();
            let source = &mut self.sources[player.index()];

            debug!(%player, source = source.name(), "waiting for move");
            let column = source.choose_column(&board, player)?;

            match self.engine.place_token(column) {
                Ok(_) => {
                    rejections = 0;
                    if let Some(placement) = self.engine.last_placement() {
                        let board = self.engine.snapshot_board();
                        observe(SessionEvent::Placed {
                            placement,
                            board: &board,
                        });
                        placements.push(placement);
                    }
                }
                Err(error @ (MoveError::InvalidColumn(_) | MoveError::ColumnFull(_))) => {
                    rejections += 1;
                    warn!(%player, column, %error, rejections, "move rejected");
                    observe(SessionEvent::Rejected {
                        player,
                        column,
                        error: &error,
                    });
                    if rejections >= self.max_rejections {
                        return Err(SessionError::TooManyRejections {
                            player,
                            attempts: rejections,
                        });
                    }
                }
                Err(error) => return Err(error.into()),
            }
        }

        let status = self.engine.current_status();
        info!(?status, moves = placements.len(), "game finished");

        Ok(GameRecord {
            status,
            starting_player,
            placements,
        })
    }
}
