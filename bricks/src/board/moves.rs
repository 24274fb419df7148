use std::collections::{HashMap, HashSet};
use std::fmt;
use arrayvec::ArrayVec;
use crate::board::utils::{Cell, can_enter, is_brick};
use crate::board::Board;

/// Direction of a move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// All directions, in the order in which moves are generated.
pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

/// (row delta, column delta) for each direction, indexed by `Direction as usize`.
const DELTAS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Direction {
    /// Returns (row delta, column delta) of one step in this direction.
    #[inline(always)] pub fn delta(self) -> (isize, isize) { DELTAS[self as usize] }

    /// Returns lower-case name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Move of a single brick by one cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    /// Id of the moved brick, at least `GOAL_BRICK`.
    pub brick: Cell,
    pub direction: Direction,
}

impl Move {
    #[inline(always)] pub fn new(brick: Cell, direction: Direction) -> Self { Self { brick, direction } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.brick, self.direction)
    }
}

impl Board {
    /// Returns index of the cell one step from the cell `index` in given `direction`,
    /// or `None` if such a step leaves the board.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let (row, col) = self.coords(index);
        let (dr, dc) = direction.delta();
        let row = row.checked_add_signed(dr).filter(|&r| r < self.height())?;
        let col = col.checked_add_signed(dc).filter(|&c| c < self.width())?;
        Some(self.index(row, col))
    }

    /// Returns all bricks with the indices of their cells.
    /// Bricks are listed in the order of their first cells in row-major scan.
    pub fn bricks(&self) -> Vec<(Cell, Vec<usize>)> {
        let mut result: Vec<(Cell, Vec<usize>)> = Vec::new();
        let mut position_of = HashMap::new();
        for (index, &cell) in self.cells().iter().enumerate() {
            if !is_brick(cell) { continue; }
            let position = *position_of.entry(cell).or_insert_with(|| {
                result.push((cell, Vec::new()));
                result.len() - 1
            });
            result[position].1.push(index);
        }
        result
    }

    /// Returns `true` if the `brick` occupying `cells` can be shifted one step in `direction`.
    /// Each cell of the brick must step onto a cell of the same brick, an empty cell, or (only for the goal brick) a goal cell.
    pub fn can_shift(&self, brick: Cell, cells: &[usize], direction: Direction) -> bool {
        cells.iter().all(|&index| match self.neighbor(index, direction) {
            Some(target) => {
                let target = self.cells()[target];
                target == brick || can_enter(brick, target)
            }
            None => false
        })
    }

    /// Returns directions in which the cell `index` has an open step: onto a cell that its brick can enter
    /// (cells of the same brick are not open). Directions are in the order of `DIRECTIONS`.
    pub fn open_directions(&self, index: usize) -> ArrayVec<Direction, 4> {
        let brick = self.cells()[index];
        DIRECTIONS.iter().copied()
            .filter(|&d| self.neighbor(index, d).map_or(false, |target| can_enter(brick, self.cells()[target])))
            .collect()
    }

    /// Returns all legal moves, without duplicates.
    ///
    /// Cells are scanned in row-major order and, for each cell, directions in the order of `DIRECTIONS`.
    /// A move is listed at the first cell of its brick that has an open step in its direction,
    /// provided the whole brick can be shifted that way.
    pub fn legal_moves(&self) -> Vec<Move> {
        let bricks: HashMap<Cell, Vec<usize>> = self.bricks().into_iter().collect();
        let mut checked = HashSet::new();
        let mut result = Vec::new();
        for (index, &brick) in self.cells().iter().enumerate() {
            if !is_brick(brick) { continue; }
            for direction in self.open_directions(index) {
                let m = Move::new(brick, direction);
                if checked.insert(m) && self.can_shift(brick, &bricks[&brick], direction) {
                    result.push(m);
                }
            }
        }
        result
    }
}
