//! Text layout of boards: the `width,height,` header line followed by one line of comma-terminated cells per row.

use std::fmt;
use std::str::FromStr;
use crate::board::utils::Cell;
use crate::board::Board;
use crate::error::BoardError;

/// Parses the board from its text layout, for example:
/// ```text
/// 5,4,
/// 1,-1,-1,1,1,
/// 1,0,3,4,1,
/// 1,0,2,2,1,
/// 1,1,1,1,1,
/// ```
/// Blank lines and whitespace around values are ignored.
pub fn parse(text: &str) -> Result<Board, BoardError> {
    let mut lines = text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());
    let (width, height) = match lines.next() {
        Some((_, header)) => parse_header(header)?,
        None => return Err(BoardError::InvalidHeader(String::new())),
    };
    let mut cells = Vec::with_capacity(width * height);
    let mut rows = 0;
    for (line_nr, line) in lines {
        let row_len = cells.len();
        parse_row(line_nr, line, &mut cells)?;
        if cells.len() - row_len != width {
            return Err(BoardError::RaggedRow { row: rows, expected: width, found: cells.len() - row_len });
        }
        rows += 1;
    }
    if rows != height {
        return Err(BoardError::RowCount { expected: height, found: rows });
    }
    Board::new(width, height, cells)
}

fn parse_header(line: &str) -> Result<(usize, usize), BoardError> {
    let mut fields = line.split(',').map(str::trim);
    let width = fields.next().and_then(|f| f.parse().ok());
    let height = fields.next().and_then(|f| f.parse().ok());
    match (width, height) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(BoardError::InvalidHeader(line.to_owned()))
    }
}

fn parse_row(line_nr: usize, line: &str, cells: &mut Vec<Cell>) -> Result<(), BoardError> {
    for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let value = token.parse().map_err(|_| BoardError::InvalidNumber { line: line_nr, token: token.to_owned() })?;
        cells.push(value);
    }
    Ok(())
}

impl FromStr for Board {
    type Err = BoardError;

    #[inline] fn from_str(s: &str) -> Result<Self, Self::Err> { parse(s) }
}

/// Writes the board in the layout accepted by `parse`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{},{},", self.width(), self.height())?;
        for row in self.rows() {
            for cell in row { write!(f, "{},", cell)?; }
            writeln!(f)?;
        }
        Ok(())
    }
}
