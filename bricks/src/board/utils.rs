/// Value stored in a single board cell.
pub type Cell = i16;

/// Empty cell, can be entered by any brick.
pub const EMPTY: Cell = 0;

/// Wall or out-of-play border cell, can never be entered.
pub const WALL: Cell = 1;

/// Goal cell, can be entered only by the goal brick.
pub const GOAL_CELL: Cell = -1;

/// Id of the goal brick.
pub const GOAL_BRICK: Cell = 2;

/// The smallest id of an ordinary (obstacle) brick. Canonical boards number obstacles from this value up.
pub const FIRST_OBSTACLE: Cell = 3;

/// Returns `true` if `cell` is occupied by a brick (either the goal brick or an obstacle).
#[inline(always)] pub fn is_brick(cell: Cell) -> bool { cell >= GOAL_BRICK }

/// Returns `true` if a brick with the given id can step onto a cell holding `target`.
/// The brick's own cells are not considered here.
#[inline(always)] pub fn can_enter(brick: Cell, target: Cell) -> bool {
    target == EMPTY || (brick == GOAL_BRICK && target == GOAL_CELL)
}
