//! Plain-text board rendering for line-oriented output.

use crate::config::RenderConfig;
use crate::game::{Board, Cell, PlayerId, COLS};

const SEPARATOR: &str = "============================";

/// Formats board snapshots as text, one glyph per cell.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    glyphs: RenderConfig,
}

impl TextRenderer {
    pub fn new(glyphs: RenderConfig) -> Self {
        TextRenderer { glyphs }
    }

    pub fn glyph(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.glyphs.empty,
            Cell::Occupied(PlayerId::A) => &self.glyphs.player_a,
            Cell::Occupied(PlayerId::B) => &self.glyphs.player_b,
        }
    }

    /// Render the board top row first, framed by separators, with 1-based
    /// column numbers underneath.
    pub fn render(&self, board: &Board) -> String {
        let mut out = String::new();
        out.push_str(SEPARATOR);
        out.push('\n');

        for row in board.rows() {
            let line: Vec<&str> = row.iter().map(|&cell| self.glyph(cell)).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }

        let footer: Vec<String> = (1..=COLS).map(|col| col.to_string()).collect();
        out.push_str(&footer.join(" "));
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let text = TextRenderer::default().render(&Board::new());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], SEPARATOR);
        for line in &lines[1..7] {
            assert_eq!(*line, "_ _ _ _ _ _ _");
        }
        assert_eq!(lines[7], "1 2 3 4 5 6 7");
        assert_eq!(lines[8], SEPARATOR);
    }

    #[test]
    fn test_render_tokens_with_custom_glyphs() {
        let renderer = TextRenderer::new(RenderConfig {
            empty: ".".into(),
            player_a: "X".into(),
            player_b: "O".into(),
        });
        let mut board = Board::new();
        board.drop_token(0, PlayerId::A).unwrap();
        board.drop_token(0, PlayerId::B).unwrap();
        board.drop_token(6, PlayerId::B).unwrap();

        let text = renderer.render(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[5], "O . . . . . .");
        assert_eq!(lines[6], "X . . . . . O");
    }
}
