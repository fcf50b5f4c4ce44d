//! Text input for human players.

use crate::games::tictactoe::{Mark, MoveError};
use crate::strategies::{MoveInput, RawMove};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument, warn};

/// Parses `"row,col"`, ignoring whitespace around either number.
///
/// Anything else, negative numbers included, is [`RawMove::Unparseable`].
#[instrument]
pub fn parse_move(text: &str) -> RawMove {
    let unparseable = || RawMove::Unparseable(text.trim().to_string());

    let Some((row, col)) = text.trim().split_once(',') else {
        return unparseable();
    };

    match (row.trim().parse::<usize>(), col.trim().parse::<usize>()) {
        (Ok(row), Ok(col)) => RawMove::Pair(row, col),
        _ => unparseable(),
    }
}

/// Console reply to a rejected move.
///
/// Text that is not a `row,col` pair gets its own message; off-board and
/// occupied cells share the generic one.
pub fn retry_message(error: &MoveError) -> &'static str {
    match error {
        MoveError::UnparseableInput(_) => "Invalid input format. Try again.",
        _ => "Invalid move. Try again.",
    }
}

/// Writes the turn prompt and reads one line.
fn prompt_and_read(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    mark: Mark,
) -> Result<RawMove, MoveError> {
    let prompted = write!(writer, "\n{mark}'s turn. Enter row,col (e.g. 1,2): ")
        .and_then(|()| writer.flush());
    if let Err(e) = prompted {
        warn!(error = %e, "Failed to write prompt");
    }

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err(MoveError::InputClosed),
        Ok(_) => {
            debug!(line = %line.trim_end(), "Read move line");
            Ok(parse_move(&line))
        }
        Err(e) => {
            warn!(error = %e, "Failed to read move");
            Err(MoveError::InputClosed)
        }
    }
}

/// Reads moves line by line from any reader, prompting on `writer`.
#[derive(Debug)]
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Creates a new line-based input.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the input, returning the prompt writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> MoveInput for LineInput<R, W> {
    fn read_move(&mut self, mark: Mark) -> Result<RawMove, MoveError> {
        prompt_and_read(&mut self.reader, &mut self.writer, mark)
    }
}

/// Reads moves from the process's stdin, prompting on stdout.
///
/// Stdin is locked only for the duration of one read, so two human players
/// can share the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleInput;

impl ConsoleInput {
    /// Creates a new console input.
    pub fn new() -> Self {
        Self
    }
}

impl MoveInput for ConsoleInput {
    fn read_move(&mut self, mark: Mark) -> Result<RawMove, MoveError> {
        prompt_and_read(&mut io::stdin().lock(), &mut io::stdout(), mark)
    }
}

/// Replays a fixed list of lines, then reports closed input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Creates scripted input from lines in the order they will be read.
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl MoveInput for ScriptedInput {
    fn read_move(&mut self, _mark: Mark) -> Result<RawMove, MoveError> {
        self.lines
            .pop_front()
            .map(|line| parse_move(&line))
            .ok_or(MoveError::InputClosed)
    }
}
