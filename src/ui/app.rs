use crate::bot::{MoveSource, RandomBot};
use crate::config::{AppConfig, PlayerKind};
use crate::error::{MoveError, SetupError};
use crate::game::{GameEngine, GameStatus, PlayerId, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for a key before letting a bot move.
const BOT_DELAY: Duration = Duration::from_millis(400);

/// One side of the table: keyboard-driven unless a bot is seated.
struct Seat {
    name: String,
    bot: Option<RandomBot>,
    bot_seed: Option<u64>,
}

impl Seat {
    fn new(name: &str, kind: PlayerKind, bot_seed: Option<u64>) -> Self {
        let mut seat = Seat {
            name: name.to_string(),
            bot: None,
            bot_seed,
        };
        if kind == PlayerKind::Random {
            seat.toggle_bot();
        }
        seat
    }

    fn toggle_bot(&mut self) {
        self.bot = match self.bot {
            Some(_) => None,
            None => Some(match self.bot_seed {
                Some(seed) => RandomBot::seeded(format!("{} (Random)", self.name), seed),
                None => RandomBot::new(format!("{} (Random)", self.name)),
            }),
        };
    }

    fn label(&self) -> &str {
        if self.bot.is_some() {
            "Random"
        } else {
            "Human"
        }
    }
}

pub struct App {
    engine: GameEngine,
    seats: [Seat; 2],
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, SetupError> {
        let seed = config.session.seed;
        let engine = match seed {
            Some(seed) => GameEngine::seeded(PlayerId::A, PlayerId::B, seed)?,
            None => GameEngine::new(PlayerId::A, PlayerId::B)?,
        };
        let players = &config.players;

        Ok(App {
            engine,
            seats: [
                Seat::new(&players.a.name, players.a.kind, seed.map(|s| s.wrapping_add(1))),
                Seat::new(&players.b.name, players.b.kind, seed.map(|s| s.wrapping_add(2))),
            ],
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("terminal UI started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        info!("terminal UI stopped");
        Ok(())
    }

    /// Handle keyboard events, giving a seated bot its turn when idle
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(BOT_DELAY)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        } else {
            self.step_bot();
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.current_seat().bot.is_some() && !self.engine.current_status().is_terminal() {
                    self.message = Some("Waiting for the bot to move...".to_string());
                } else {
                    self.play_column(self.selected_column as isize);
                }
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = COLS / 2;
                self.message = Some(format!(
                    "New game started! {} goes first.",
                    self.current_seat().name
                ));
            }
            KeyCode::Char('a') => self.toggle_bot(PlayerId::A),
            KeyCode::Char('b') => self.toggle_bot(PlayerId::B),
            _ => {}
        }
    }

    fn toggle_bot(&mut self, player: PlayerId) {
        let seat = &mut self.seats[player.index()];
        seat.toggle_bot();
        debug!(%player, mode = seat.label(), "seat toggled");
        self.message = Some(format!("{} is now {}", seat.name, seat.label()));
    }

    fn current_seat(&self) -> &Seat {
        &self.seats[self.engine.current_player().index()]
    }

    /// Let the bot seated for the current player move, if any
    fn step_bot(&mut self) {
        if self.engine.current_status().is_terminal() {
            return;
        }
        let player = self.engine.current_player();
        let board = self.engine.snapshot_board();
        let Some(bot) = self.seats[player.index()].bot.as_mut() else {
            return;
        };

        match bot.choose_column(&board, player) {
            Ok(column) => self.play_column(column),
            Err(err) => self.message = Some(format!("Bot failed: {err}")),
        }
    }

    /// Drop a token for the current player
    fn play_column(&mut self, column: isize) {
        let player = self.engine.current_player();
        match self.engine.place_token(column) {
            Ok(GameStatus::InProgress) => {}
            Ok(GameStatus::Won(winner)) => {
                self.message = Some(format!(
                    "{} wins! Press 'r' to restart.",
                    self.seats[winner.index()].name
                ));
            }
            Ok(GameStatus::Draw) => {
                self.message = Some("It's a draw! Press 'r' to restart.".to_string());
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
        debug!(%player, column, "ui move");
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let names = [self.seats[0].name.as_str(), self.seats[1].name.as_str()];
        let mode = format!(
            "{} vs {}",
            self.seats[0].label(),
            self.seats[1].label()
        );
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.message,
            names,
            &mode,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn human_app() -> App {
        let mut config = AppConfig::default();
        config.session.seed = Some(3);
        config.players.b.kind = PlayerKind::Human;
        App::new(&config).unwrap()
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = human_app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, COLS - 1);
    }

    #[test]
    fn test_enter_drops_token() {
        let mut app = human_app();
        let player = app.engine.current_player();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine.move_count(), 1);
        assert_eq!(app.engine.last_placement().unwrap().player, player);
        assert_eq!(app.engine.last_placement().unwrap().column, COLS / 2);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = human_app();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
        assert_eq!(app.engine.move_count(), 6);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut app = human_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine.move_count(), 0);
        assert!(app.message.unwrap().starts_with("New game started!"));
    }

    #[test]
    fn test_bots_play_to_completion() {
        let mut config = AppConfig::default();
        config.session.seed = Some(9);
        config.players.a.kind = PlayerKind::Random;
        let mut app = App::new(&config).unwrap();

        for _ in 0..COLS * 6 {
            app.step_bot();
        }
        assert!(app.engine.current_status().is_terminal());
    }

    #[test]
    fn test_toggle_bot() {
        let mut app = human_app();
        press(&mut app, KeyCode::Char('b'));
        assert!(app.seats[1].bot.is_some());
        press(&mut app, KeyCode::Char('b'));
        assert!(app.seats[1].bot.is_none());
    }
}
