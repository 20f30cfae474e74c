//! Generation-advance rule for the Life automaton.
//!
//! The rule is stateless: one snapshot in, one freshly-built grid out.
//! Neighbor lookups use toroidal wrap, so edge and corner cells always
//! see exactly eight neighbors.

use super::grid::CellGrid;

/// A live cell survives with this many neighbors or more...
const SURVIVAL_MIN: u8 = 2;
/// ...and this many or fewer.
const SURVIVAL_MAX: u8 = 3;
/// A dead cell births with exactly this many neighbors.
const BIRTH: u8 = 3;

/// Count live cells among the eight toroidal neighbors of (x, y).
///
/// Every cell has exactly eight neighbor offsets; on a grid only one or
/// two cells wide, distinct offsets wrap onto the same cell and that cell
/// is counted once per offset (a cell on a 1xN torus counts itself twice).
#[inline]
pub(crate) fn live_neighbors(grid: &CellGrid, x: usize, y: usize) -> u8 {
    let cols = grid.cols();
    let rows = grid.rows();
    let mut n = 0u8;

    for dy in [-1isize, 0, 1] {
        for dx in [-1isize, 0, 1] {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = (x + cols).wrapping_add_signed(dx) % cols;
            let ny = (y + rows).wrapping_add_signed(dy) % rows;
            n += grid.cell(nx, ny);
        }
    }

    n
}

/// Next state of a single cell, computed purely from the input snapshot.
#[inline]
pub(crate) fn next_cell_state(current: &CellGrid, x: usize, y: usize) -> u8 {
    let n = live_neighbors(current, x, y);
    match current.cell(x, y) {
        1 => u8::from((SURVIVAL_MIN..=SURVIVAL_MAX).contains(&n)),
        _ => u8::from(n == BIRTH),
    }
}

/// Advance the grid by one generation.
///
/// Every next state is computed from the unmodified `current` snapshot and
/// written into a separate output grid, so no cell's new value can
/// influence another cell's new value within the same step. `current` is
/// never mutated.
pub fn step(current: &CellGrid) -> CellGrid {
    let mut next = current.clone();

    for y in 0..current.rows() {
        for x in 0..current.cols() {
            next.set_cell(x, y, next_cell_state(current, x, y));
        }
    }

    next
}
