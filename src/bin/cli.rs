use std::cell::RefCell;
use std::io::{self, StdinLock};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use connect4_engine::bot::{ConsoleInput, MoveSource, RandomBot};
use connect4_engine::config::{AppConfig, PlayerKind, SeatConfig};
use connect4_engine::game::{GameEngine, GameStatus, PlayerId};
use connect4_engine::logging;
use connect4_engine::render::TextRenderer;
use connect4_engine::session::{MatchStats, Session, SessionEvent};

/// Play Connect Four games on the command line.
#[derive(Parser)]
#[command(name = "connect4-cli", about = "Play Connect Four headless")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Seed for the starting player and bots
    #[arg(long)]
    seed: Option<u64>,

    /// Seat random bots on both sides
    #[arg(long)]
    auto: bool,

    /// Only print the final summary
    #[arg(long)]
    quiet: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_filter: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr(&cli.log_filter);

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.session.games = games;
    }
    if cli.seed.is_some() {
        config.session.seed = cli.seed;
    }
    if cli.auto {
        config.players.a.kind = PlayerKind::Random;
        config.players.b.kind = PlayerKind::Random;
    }
    config.validate().context("validating configuration")?;

    let seed = config.session.seed;
    let engine = match seed {
        Some(seed) => GameEngine::seeded(PlayerId::A, PlayerId::B, seed)?,
        None => GameEngine::new(PlayerId::A, PlayerId::B)?,
    };
    // Human seats take turns on one stdin lock
    let stdin = Rc::new(RefCell::new(io::stdin().lock()));
    let source_a = build_source(&config.players.a, seed.map(|s| s.wrapping_add(1)), &stdin);
    let source_b = build_source(&config.players.b, seed.map(|s| s.wrapping_add(2)), &stdin);
    let mut session = Session::new(engine, source_a, source_b, config.session.max_rejections);

    let renderer = TextRenderer::new(config.render.clone());
    let names = [config.players.a.name.clone(), config.players.b.name.clone()];
    let quiet = cli.quiet;
    let mut stats = MatchStats::new();

    info!(games = config.session.games, ?seed, "starting session");
    for game in 1..=config.session.games {
        if !quiet {
            println!("Game {}/{}", game, config.session.games);
            print!("{}", renderer.render(&session.engine().snapshot_board()));
        }

        let record = session
            .play_game(|event| {
                if quiet {
                    return;
                }
                match event {
                    SessionEvent::Placed { placement, board } => {
                        println!(
                            "{} drops into column {}",
                            names[placement.player.index()],
                            placement.column + 1
                        );
                        print!("{}", renderer.render(board));
                    }
                    SessionEvent::Rejected { player, error, .. } => {
                        println!("{}: {}, choose again", names[player.index()], error);
                    }
                }
            })
            .with_context(|| format!("playing game {game}"))?;

        if !quiet {
            match record.status {
                GameStatus::Won(winner) => println!(
                    "{} wins after {} moves!\n",
                    names[winner.index()],
                    record.game_length()
                ),
                GameStatus::Draw => println!("Draw after {} moves.\n", record.game_length()),
                GameStatus::InProgress => {}
            }
        }
        stats.record(&record);
    }

    println!("-------------------------------------------");
    println!("Games played: {}", stats.total_games());
    for player in [PlayerId::A, PlayerId::B] {
        println!(
            "{}: {} wins ({:.1}%)",
            names[player.index()],
            stats.wins(player),
            stats.win_rate(player) * 100.0
        );
    }
    println!("Draws: {} ({:.1}%)", stats.draws(), stats.draw_rate() * 100.0);
    println!("Average game length: {:.1}", stats.average_game_length());

    Ok(())
}

fn build_source(
    seat: &SeatConfig,
    seed: Option<u64>,
    stdin: &Rc<RefCell<StdinLock<'static>>>,
) -> Box<dyn MoveSource> {
    match seat.kind {
        PlayerKind::Random => Box::new(match seed {
            Some(seed) => RandomBot::seeded(seat.name.clone(), seed),
            None => RandomBot::new(seat.name.clone()),
        }),
        PlayerKind::Human => Box::new(ConsoleInput::shared(
            seat.name.clone(),
            Rc::clone(stdin),
            io::stdout(),
        )),
    }
}
