use crate::error::MoveSourceError;
use crate::game::{Board, PlayerId};

/// Anything that can supply the next column for a player, such as a bot or a
/// console reader.
pub trait MoveSource {
    /// Choose a column given a snapshot of the board. The column is passed to
    /// the engine unchecked, so out-of-range values are allowed and rejected
    /// there.
    fn choose_column(&mut self, board: &Board, player: PlayerId) -> Result<isize, MoveSourceError>;

    /// Return the source's display name.
    fn name(&self) -> &str;
}
