use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::MoveSource;
use crate::error::MoveSourceError;
use crate::game::{Board, PlayerId};

/// A move source that selects uniformly at random from open columns.
pub struct RandomBot {
    name: String,
    rng: StdRng,
}

impl RandomBot {
    pub fn new(name: impl Into<String>) -> Self {
        RandomBot {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Bot with a reproducible choice sequence.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        RandomBot {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomBot {
    fn choose_column(&mut self, board: &Board, _player: PlayerId) -> Result<isize, MoveSourceError> {
        let columns = board.open_columns();
        if columns.is_empty() {
            return Err(MoveSourceError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..columns.len());
        Ok(columns[idx] as isize)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
