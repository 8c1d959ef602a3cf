//! Gray-code layout of the 4x4 grid
//!
//! The map owes its grouping power to this layout: rows and columns follow a
//! 2-bit Gray code, so two neighboring positions (including the wraparound
//! pair between the last and the first) always differ in exactly one bit of
//! the cell index. A plain binary ordering would not have this property.

use crate::{Cell, Variable};
use once_cell::sync::Lazy;

/// Number of rows and columns of the grid.
pub const GRID_DIM: usize = 4;

static GRAY2: Lazy<Vec<usize>> = Lazy::new(|| gray_sequence(2));

static GRAY2_POS: Lazy<[usize; GRID_DIM]> = Lazy::new(|| {
    let mut positions = [0; GRID_DIM];
    for (position, code) in GRAY2.iter().enumerate() {
        positions[*code] = position;
    }
    positions
});

static LABELS: Lazy<Vec<String>> =
    Lazy::new(|| GRAY2.iter().map(|code| format!("{:02b}", code)).collect());

/// Compute the ordered Gray-code sequence for the given bit width.
///
/// The n-bit sequence is the (n-1)-bit sequence prefixed with 0, followed by
/// the reversed (n-1)-bit sequence prefixed with 1. Every value appears once
/// and consecutive entries (including the last/first pair) differ by a
/// single bit.
///
/// ```
/// use karnaugh::grid::gray_sequence;
///
/// assert_eq!(gray_sequence(2), vec![0b00, 0b01, 0b11, 0b10]);
/// ```
pub fn gray_sequence(bits: u32) -> Vec<usize> {
    if bits == 0 {
        return vec![0];
    }
    let prev = gray_sequence(bits - 1);
    let high = 1 << (bits - 1);
    prev.iter()
        .copied()
        .chain(prev.iter().rev().map(|code| high | code))
        .collect()
}

/// Cell displayed at the given grid position (both must be below [GRID_DIM]).
///
/// Rows are keyed by variables A,B and columns by C,D: the 2-bit Gray codes
/// of the row and of the column pack into the 4-bit cell index.
///
/// ```
/// use karnaugh::grid;
///
/// // the third row has Gray code 11: variables A and B are both set
/// assert_eq!(grid::cell_at(2, 0).index(), 0b1100);
/// assert_eq!(grid::position_of(grid::cell_at(2, 0)), (2, 0));
/// ```
pub fn cell_at(row: usize, col: usize) -> Cell {
    Cell::from((GRAY2[row] << 2) | GRAY2[col])
}

/// Grid position displaying the given cell; the inverse of [cell_at].
pub fn position_of(cell: Cell) -> (usize, usize) {
    let row_code = cell.index() >> 2;
    let col_code = cell.index() & (GRID_DIM - 1);
    (GRAY2_POS[row_code], GRAY2_POS[col_code])
}

/// Gray-code header labels, shared by both axes
pub fn labels() -> &'static [String] {
    &LABELS
}

/// The variables keying the rows (most significant bits of the index)
pub fn row_variables() -> (Variable, Variable) {
    (Variable::new(0), Variable::new(1))
}

/// The variables keying the columns (least significant bits of the index)
pub fn col_variables() -> (Variable, Variable) {
    (Variable::new(2), Variable::new(3))
}
