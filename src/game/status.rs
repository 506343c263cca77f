use super::PlayerId;

/// Derived state of a game, recomputed after every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Draw,
}

impl GameStatus {
    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won(PlayerId::A).is_terminal());
        assert!(GameStatus::Draw.is_terminal());
    }

    #[test]
    fn test_winner() {
        assert_eq!(GameStatus::Won(PlayerId::B).winner(), Some(PlayerId::B));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::InProgress.winner(), None);
    }
}
