use super::runner::GameRecord;
use crate::game::{GameStatus, PlayerId};

/// Running totals over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStats {
    wins: [usize; 2],
    draws: usize,
    total_games: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &GameRecord) {
        self.total_games += 1;
        self.total_moves += record.game_length();
        match record.status {
            GameStatus::Won(player) => self.wins[player.index()] += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn wins(&self, player: PlayerId) -> usize {
        self.wins[player.index()]
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    /// Fraction of recorded games won by `player`.
    pub fn win_rate(&self, player: PlayerId) -> f32 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.wins(player) as f32 / self.total_games as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.draws as f32 / self.total_games as f32
    }

    /// Average number of tokens placed per game.
    pub fn average_game_length(&self) -> f32 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.total_games as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Placement;

    fn record(status: GameStatus, moves: usize) -> GameRecord {
        let placements = (0..moves)
            .map(|i| Placement {
                player: if i % 2 == 0 { PlayerId::A } else { PlayerId::B },
                row: 5,
                column: i % 7,
            })
            .collect();
        GameRecord {
            status,
            starting_player: PlayerId::A,
            placements,
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = MatchStats::new();
        assert_eq!(stats.total_games(), 0);
        assert_eq!(stats.win_rate(PlayerId::A), 0.0);
        assert_eq!(stats.draw_rate(), 0.0);
        assert_eq!(stats.average_game_length(), 0.0);
    }

    #[test]
    fn test_records_outcomes() {
        let mut stats = MatchStats::new();
        stats.record(&record(GameStatus::Won(PlayerId::A), 7));
        stats.record(&record(GameStatus::Won(PlayerId::A), 9));
        stats.record(&record(GameStatus::Won(PlayerId::B), 12));
        stats.record(&record(GameStatus::Draw, 42));

        assert_eq!(stats.total_games(), 4);
        assert_eq!(stats.wins(PlayerId::A), 2);
        assert_eq!(stats.wins(PlayerId::B), 1);
        assert_eq!(stats.draws(), 1);
        assert!((stats.win_rate(PlayerId::A) - 0.5).abs() < 1e-6);
        assert!((stats.draw_rate() - 0.25).abs() < 1e-6);
        assert!((stats.average_game_length() - 17.5).abs() < 1e-6);
    }
}
