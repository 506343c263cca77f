use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use super::source::MoveSource;
use crate::error::MoveSourceError;
use crate::game::{Board, PlayerId, COLS};

/// A human at a line-oriented terminal. Columns are entered 1-based.
///
/// The reader is shared so that two seats at the same terminal read from one
/// buffered stream; it is only borrowed while a line is read.
pub struct ConsoleInput<R, W> {
    name: String,
    reader: Rc<RefCell<R>>,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(name: impl Into<String>, reader: R, writer: W) -> Self {
        Self::shared(name, Rc::new(RefCell::new(reader)), writer)
    }

    /// Console seat reading from a stream other seats may also hold.
    pub fn shared(name: impl Into<String>, reader: Rc<RefCell<R>>, writer: W) -> Self {
        ConsoleInput {
            name: name.into(),
            reader,
            writer,
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    fn choose_column(&mut self, _board: &Board, player: PlayerId) -> Result<isize, MoveSourceError> {
        loop {
            write!(
                self.writer,
                "{} ({}), choose a column (1-{}): ",
                self.name, player, COLS
            )?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.borrow_mut().read_line(&mut line)? == 0 {
                return Err(MoveSourceError::InputClosed);
            }

            match line.trim().parse::<isize>() {
                Ok(column) => return Ok(column - 1),
                Err(_) => writeln!(self.writer, "Please enter a column number.")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
