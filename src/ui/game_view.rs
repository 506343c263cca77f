use crate::game::{Board, Cell, GameEngine, GameStatus, Placement, PlayerId, COLS};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn player_color(player: PlayerId) -> Color {
    match player {
        PlayerId::A => Color::Red,
        PlayerId::B => Color::Yellow,
    }
}

pub fn render<R: Rng>(
    frame: &mut Frame,
    engine: &GameEngine<R>,
    selected_column: usize,
    message: &Option<String>,
    names: [&str; 2],
    game_mode: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(
        frame,
        engine.current_status(),
        engine.current_player(),
        names,
        game_mode,
        chunks[0],
    );
    render_board(
        frame,
        &engine.snapshot_board(),
        engine.last_placement(),
        selected_column,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    status: GameStatus,
    current_player: PlayerId,
    names: [&str; 2],
    game_mode: &str,
    area: Rect,
) {
    let (text, color) = match status {
        GameStatus::InProgress => (
            format!(
                "Current Player: {}  |  {}",
                names[current_player.index()],
                game_mode
            ),
            player_color(current_player),
        ),
        GameStatus::Won(winner) => (
            format!("{} wins  |  {}", names[winner.index()], game_mode),
            player_color(winner),
        ),
        GameStatus::Draw => (format!("Draw  |  {}", game_mode), Color::White),
    };

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    last: Option<Placement>,
    selected_column: usize,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(COLS * 3 + 1))));

    for (row, cells) in board.rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, &cell) in cells.iter().enumerate() {
            let (symbol, mut style) = match cell {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(player) => (" ● ", Style::default().fg(player_color(player))),
            };
            if last.is_some_and(|p| p.row == row && p.column == col) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(COLS * 3 + 1))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::styled("A", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(": toggle Random   "),
        Span::styled("B", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(": toggle Random"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
