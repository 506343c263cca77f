use super::PlayerId;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a winning run.
pub const CONNECT: usize = 4;

/// Canonical line orientations as (row step, column step): horizontal,
/// vertical, and the two diagonals. Each is walked in both signs.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

/// Fixed 6x7 grid. Occupied cells in every column are contiguous from the
/// bottom, which `drop_token` maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

/// Convert a caller-supplied column into a board index, if it is on the board.
pub fn column_index(column: isize) -> Option<usize> {
    usize::try_from(column).ok().filter(|&col| col < COLS)
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }

    /// Check if a column is full. Off-board columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns whose top cell is still empty, left to right
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Number of tokens stacked in a column
    fn column_height(&self, col: usize) -> usize {
        (0..ROWS)
            .rev()
            .take_while(|&row| self.cells[row][col] != Cell::Empty)
            .count()
    }

    /// Row a token dropped into `col` would land in, or `None` if the column is
    /// full or off the board.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (ROWS - self.column_height(col)).checked_sub(1)
    }

    /// Check if every cell of the top row is occupied
    pub fn is_top_row_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn drop_token(&mut self, col: usize, player: PlayerId) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col as isize));
        }
        let row = self.lowest_empty_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = Cell::Occupied(player);
        Ok(row)
    }

    /// Length of the contiguous same-player run through (row, col) along
    /// `direction`, counting both signs. Zero for an empty cell.
    pub fn run_length(&self, row: usize, col: usize, direction: (isize, isize)) -> usize {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return 0;
        }
        let (dr, dc) = direction;
        1 + self.count_matching(row, col, dr, dc, cell)
            + self.count_matching(row, col, -dr, -dc, cell)
    }

    /// Check if the token at (row, col) is part of a run of four or more
    pub fn connects_four(&self, row: usize, col: usize) -> bool {
        DIRECTIONS
            .iter()
            .any(|&direction| self.run_length(row, col, direction) >= CONNECT)
    }

    /// Count matching cells stepping away from (row, col), excluding the start.
    fn count_matching(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use PlayerId::{A, B};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.open_columns(), (0..COLS).collect::<Vec<_>>());
    }

    #[test]
    fn test_drop_token() {
        let mut board = Board::new();

        // Drop first token in column 3
        let row = board.drop_token(3, A).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Occupied(A));

        // Drop second token in same column
        let row = board.drop_token(3, B).unwrap();
        assert_eq!(row, 4); // Should land on top of first token
        assert_eq!(board.get(4, 3), Cell::Occupied(B));
    }

    #[test]
    fn test_lowest_empty_row_tracks_height() {
        let mut board = Board::new();
        for k in 0..ROWS {
            assert_eq!(board.column_height(2), k);
            assert_eq!(board.lowest_empty_row(2), Some(ROWS - 1 - k));
            board.drop_token(2, A).unwrap();
        }
        assert_eq!(board.lowest_empty_row(2), None);
        assert_eq!(board.lowest_empty_row(COLS), None);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_token(0, A).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_token(0, B), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_token(7, A), Err(MoveError::InvalidColumn(7)));
    }

    #[test]
    fn test_column_index() {
        assert_eq!(column_index(0), Some(0));
        assert_eq!(column_index(6), Some(6));
        assert_eq!(column_index(7), None);
        assert_eq!(column_index(-1), None);
    }

    #[test]
    fn test_top_row_full() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_token(col, A).unwrap();
            }
        }
        assert!(board.is_top_row_full());
        assert!(board.open_columns().is_empty());
    }

    #[test]
    fn test_open_columns_skips_full() {
        let mut board = Board::new();
        for col in [1, 4] {
            for _ in 0..ROWS {
                board.drop_token(col, B).unwrap();
            }
        }
        board.drop_token(2, A).unwrap();
        assert_eq!(board.open_columns(), vec![0, 2, 3, 5, 6]);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_token(col, A).unwrap();
        }
        assert!(board.connects_four(5, 2)); // Check middle of the line
        assert_eq!(board.run_length(5, 0, (0, 1)), 4);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_token(3, B).unwrap();
        }
        assert!(board.connects_four(2, 3)); // Check the 4th token
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_token(0, A).unwrap();

        board.drop_token(1, B).unwrap();
        board.drop_token(1, A).unwrap();

        board.drop_token(2, B).unwrap();
        board.drop_token(2, B).unwrap();
        board.drop_token(2, A).unwrap();

        board.drop_token(3, B).unwrap();
        board.drop_token(3, B).unwrap();
        board.drop_token(3, B).unwrap();
        let row = board.drop_token(3, A).unwrap();

        assert!(board.connects_four(row, 3));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_token(6, A).unwrap();

        board.drop_token(5, B).unwrap();
        board.drop_token(5, A).unwrap();

        board.drop_token(4, B).unwrap();
        board.drop_token(4, B).unwrap();
        board.drop_token(4, A).unwrap();

        board.drop_token(3, B).unwrap();
        board.drop_token(3, B).unwrap();
        board.drop_token(3, B).unwrap();
        let row = board.drop_token(3, A).unwrap();

        assert!(board.connects_four(row, 3));
    }

    #[test]
    fn test_pivot_inside_run() {
        let mut board = Board::new();
        for col in [0, 1, 3] {
            board.drop_token(col, A).unwrap();
        }
        // Filling the gap puts the pivot at the third position of the run
        let row = board.drop_token(2, A).unwrap();
        assert!(board.connects_four(row, 2));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_token(col, A).unwrap();
        }
        assert!(!board.connects_four(5, 1)); // Only 3 in a row
    }

    #[test]
    fn test_run_is_per_player() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_token(col, A).unwrap();
        }
        board.drop_token(3, B).unwrap();
        assert!(!board.connects_four(5, 3));
        assert_eq!(board.run_length(5, 3, (0, 1)), 1);
        assert_eq!(board.run_length(4, 3, (0, 1)), 0);
    }
}
