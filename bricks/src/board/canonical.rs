use crate::board::utils::{Cell, FIRST_OBSTACLE};
use crate::board::Board;

/// Renumbers obstacle bricks in `cells` so that they get consecutive ids, starting from `FIRST_OBSTACLE`,
/// in the order of their first cells in row-major scan.
///
/// Cells with values below `FIRST_OBSTACLE` (walls, empty and goal cells, the goal brick) are never touched.
pub fn normalize_cells(cells: &mut [Cell]) {
    let mut next_id = FIRST_OBSTACLE;
    for index in 0..cells.len() {
        let id = cells[index];
        if id == next_id {
            next_id += 1;
        } else if id > next_id {    // all ids below next_id are already assigned
            swap_ids(cells, next_id, id);
            next_id += 1;
        }
    }
}

/// Exchanges all occurrences of `a` and `b` in `cells`.
fn swap_ids(cells: &mut [Cell], a: Cell, b: Cell) {
    for cell in cells.iter_mut() {
        if *cell == a { *cell = b; } else if *cell == b { *cell = a; }
    }
}

impl Board {
    /// Returns the canonical representative of this board: the board with obstacle bricks renumbered
    /// by `normalize_cells`. Boards that differ only in numbering of obstacles have equal canonical forms.
    pub fn normalize(&self) -> Board {
        let mut result = self.clone();
        normalize_cells(&mut result.cells);
        result
    }

    /// Returns `true` if this board is already in canonical form.
    pub fn is_normalized(&self) -> bool {
        let mut next_id = FIRST_OBSTACLE;
        for &id in &self.cells {
            if id == next_id { next_id += 1; } else if id > next_id { return false; }
        }
        true
    }
}
