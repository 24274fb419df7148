mod canonical;
mod layout;
mod moves;
mod utils;

pub use layout::parse;
pub use moves::{Direction, Move, DIRECTIONS};
pub use utils::*;

use crate::error::BoardError;

/// Board state: a rectangular grid of cells.
///
/// Boards are values: `apply_move` and `normalize` return new boards and never modify `self`.
/// Two boards are equal (and hash equally) iff their grids are cell-wise identical.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {

    /// Constructs a board of the size `width` x `height` with given `cells` (in row-major order).
    ///
    /// Fails if the dimensions do not match the number of cells, any cell holds a value below `GOAL_CELL`,
    /// the outermost frame contains anything but walls and goal cells, or there is no goal brick.
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard { width, height });
        }
        if cells.len() != width * height {
            return Err(BoardError::DimensionMismatch { width, height, expected: width * height, found: cells.len() });
        }
        let board = Self { width, height, cells };
        board.validate()?;
        Ok(board)
    }

    /// Constructs a board from the given rows of cells.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(BoardError::RaggedRow { row, expected: width, found: r.len() });
            }
            cells.extend_from_slice(r);
        }
        Self::new(width, height, cells)
    }

    fn validate(&self) -> Result<(), BoardError> {
        let mut has_goal_brick = false;
        for (index, &value) in self.cells.iter().enumerate() {
            let (row, col) = self.coords(index);
            if value < GOAL_CELL {
                return Err(BoardError::InvalidCell { row, col, value });
            }
            if self.on_frame(row, col) && value != WALL && value != GOAL_CELL {
                return Err(BoardError::MissingBorder { row, col });
            }
            if value == GOAL_BRICK { has_goal_brick = true; }
        }
        if has_goal_brick { Ok(()) } else { Err(BoardError::MissingGoalBrick) }
    }

    #[inline(always)] fn on_frame(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.height || col + 1 == self.width
    }

    /// Returns number of columns.
    #[inline(always)] pub fn width(&self) -> usize { self.width }

    /// Returns number of rows.
    #[inline(always)] pub fn height(&self) -> usize { self.height }

    /// Returns all cells in row-major order.
    #[inline(always)] pub fn cells(&self) -> &[Cell] { &self.cells }

    /// Returns the content of the cell at given `row` and `col`.
    #[inline(always)] pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Returns index (in `cells`) of the cell with given coordinates.
    #[inline(always)] pub fn index(&self, row: usize, col: usize) -> usize { row * self.width + col }

    /// Returns (row, col) coordinates of the cell with given `index`.
    #[inline(always)] pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Returns iterator over rows of the board, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item=&[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Returns indices of all cells occupied by the brick with given id, in row-major order.
    pub fn brick_cells(&self, brick: Cell) -> impl Iterator<Item=usize> + '_ {
        self.cells.iter().enumerate().filter(move |&(_, &c)| c == brick).map(|(i, _)| i)
    }

    /// Returns `true` if no goal cell is left uncovered.
    pub fn is_solved(&self) -> bool {
        !self.cells.contains(&GOAL_CELL)
    }

    /// Returns a new board with the brick `m.brick` shifted one cell in `m.direction`.
    ///
    /// The move is not checked: it should come from `legal_moves` of this board.
    pub fn apply_move(&self, m: Move) -> Board {
        let occupied: Vec<usize> = self.brick_cells(m.brick).collect();
        let mut cells = self.cells.clone();
        for &index in &occupied { cells[index] = EMPTY; }
        for &index in &occupied {
            let target = self.neighbor(index, m.direction);
            debug_assert!(target.is_some(), "move {} pushes a brick off the board", m);
            if let Some(target) = target { cells[target] = m.brick; }
        }
        Board { width: self.width, height: self.height, cells }
    }
}
