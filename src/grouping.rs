//! Grouping search and essential-cover reduction

use crate::cells::Iter;
use crate::{grid, Cell, CellSet, Form, TruthTable};
use itertools::iproduct;
use log::{debug, trace};
use std::fmt;

/// Group sizes explored by the search, largest first.
const GROUP_SIZES: [usize; 5] = [16, 8, 4, 2, 1];

/// Display color of a grouping.
///
/// Colors step around the hue wheel in discovery order; they carry no
/// grouping semantics beyond telling overlapping groupings apart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color(u16);

impl Color {
    fn from_index(index: usize) -> Self {
        Self(((index * 30) % 360) as u16)
    }

    /// Hue angle in degrees
    pub fn hue(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, 70%, 50%)", self.0)
    }
}

/// A rectangular power-of-two block of cells kept by the grouping search.
///
/// The cells of a grouping always satisfy the active form's inclusion
/// predicate (target value or don't-care) and at least one of them is a real
/// target. Wrapping across the grid edges is allowed: a grouping is a
/// rectangle of the torus, not necessarily of the visible grid.
///
/// ```
/// use karnaugh::{find_groupings, Cell, Form, TruthTable};
///
/// let table = TruthTable::from_minterms(&[8, 9, 10, 11]);
/// let groups = find_groupings(&table, Form::Sop);
///
/// assert_eq!(groups[0].size(), 4);
/// assert!(groups[0].contains(Cell::from(9)));
/// assert_eq!(groups[0].color().to_string(), "hsl(0, 70%, 50%)");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grouping {
    cells: CellSet,
    color: Color,
}

impl Grouping {
    fn new(cells: CellSet, color: Color) -> Self {
        Self { cells, color }
    }

    /// Number of cells in this grouping
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Test if the grouping covers a cell
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Iterate over the covered cells in index order
    pub fn iter(&self) -> Iter<'_> {
        self.cells.iter()
    }

    /// The covered cells
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// The display color assigned at discovery
    pub fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.cells)
    }
}

/// Find the essential cover of a truth table in the given form.
///
/// Candidates are enumerated from the largest size down: every rectangular
/// power-of-two window of the toroidal grid whose cells all hold the target
/// value or a don't-care, with at least one real target cell, is accepted
/// and colored in discovery order. A greedy pass then keeps a candidate only
/// if it covers a target cell missed by the groups kept before it, larger
/// groups first.
///
/// The result is the kept subset, largest first; every target cell of the
/// table is covered. The cover is a heuristic: it prefers larger groups but
/// does not always reach the true minimum number of groups.
///
/// ```
/// use karnaugh::{find_groupings, Form, TruthTable};
///
/// // the four corners join into one wrapped 2x2 grouping
/// let table = TruthTable::from_minterms(&[0, 2, 8, 10]);
/// let groups = find_groupings(&table, Form::Sop);
///
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].size(), 4);
/// ```
pub fn find_groupings(table: &TruthTable, form: Form) -> Vec<Grouping> {
    let mut found = Vec::new();
    for size in GROUP_SIZES {
        for (rows, cols) in dimensions(size) {
            for (row, col) in iproduct!(starts(rows), starts(cols)) {
                if let Some(cells) = window(table, form, row, col, rows, cols) {
                    trace!("candidate {}x{} at ({}, {}): [{}]", rows, cols, row, col, cells);
                    found.push(Grouping::new(cells, Color::from_index(found.len())));
                }
            }
        }
    }
    essential_cover(found, table.targets(form))
}

/// Row/column decompositions of a group size, smallest row count first
fn dimensions(size: usize) -> Vec<(usize, usize)> {
    let mut dims = Vec::new();
    let mut rows = 1;
    while rows <= grid::GRID_DIM {
        let cols = size / rows;
        if rows * cols == size && cols <= grid::GRID_DIM {
            dims.push((rows, cols));
        }
        rows *= 2;
    }
    dims
}

/// Start positions of a cyclic window: a span covering the whole axis has a
/// single placement, anything shorter may start anywhere and wrap around
fn starts(span: usize) -> std::ops::Range<usize> {
    match span == grid::GRID_DIM {
        true => 0..1,
        false => 0..grid::GRID_DIM,
    }
}

/// Collect the cells of one cyclic window if it forms a valid grouping
fn window(
    table: &TruthTable,
    form: Form,
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Option<CellSet> {
    let target = form.target();
    let mut cells = CellSet::new();
    let mut has_target = false;
    for (dr, dc) in iproduct!(0..rows, 0..cols) {
        let cell = grid::cell_at((row + dr) % grid::GRID_DIM, (col + dc) % grid::GRID_DIM);
        let value = table.get(cell);
        if !form.includes(value) {
            return None;
        }
        has_target |= value == target;
        cells.insert(cell);
    }
    has_target.then_some(cells)
}

/// Greedy reduction: walk the candidates by descending size (stable on the
/// discovery order) and keep those covering at least one new target cell
fn essential_cover(mut found: Vec<Grouping>, targets: CellSet) -> Vec<Grouping> {
    let total = found.len();
    found.sort_by(|a, b| b.size().cmp(&a.size()));

    let mut covered = CellSet::new();
    let mut kept = Vec::new();
    for grouping in found {
        let mut news = grouping.cells().clone();
        news.intersect_with(&targets);
        news.difference_with(&covered);
        if news.is_empty() {
            continue;
        }
        covered.union_with(&news);
        kept.push(grouping);
    }
    debug!("essential cover kept {} of {} candidates", kept.len(), total);
    kept
}
