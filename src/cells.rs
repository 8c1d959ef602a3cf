//! Cells of the 16-entry map and bitwise sets of cells

use crate::{Variable, MAP_VARS};

use bit_set::BitSet;
use std::fmt;

/// Number of cells on the map.
pub const MAP_CELLS: usize = 1 << MAP_VARS;

/// A single cell of the map, identified by its index.
///
/// The index is the canonical identity of one truth-table row: its 4-bit
/// binary expansion gives each variable's value at that cell, with variable
/// ```A``` in the most significant position.
///
/// ```
/// use karnaugh::{Cell, Variable};
///
/// let cell = Cell::from(0b1010);
/// let a = Variable::from_letter('A').unwrap();
/// let b = Variable::from_letter('B').unwrap();
///
/// assert!( cell.value_of(a));
/// assert!(!cell.value_of(b));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cell(pub(crate) usize);

impl Cell {
    /// Return the cell index in [0, 16)
    pub fn index(&self) -> usize {
        self.0
    }

    /// Value of one variable at this cell, read from the matching index bit
    pub fn value_of(&self, var: Variable) -> bool {
        (self.0 >> (MAP_VARS - 1 - var.uid())) & 1 == 1
    }

    /// Iterate over all map cells in index order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..MAP_CELLS).map(Cell)
    }
}

impl From<usize> for Cell {
    /// Build the cell at a truth-table index.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside [0, 16).
    fn from(index: usize) -> Self {
        assert!(index < MAP_CELLS, "cell index out of range: {}", index);
        Self(index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of cells with efficient bitwise operations.
///
/// The grouping engine works on these sets: candidate windows, the target
/// cells of a table and the covered cells of the greedy reduction are all
/// cell sets combined through bitwise union, intersection and difference.
///
/// ```
/// use karnaugh::{Cell, CellSet};
///
/// let mut set = CellSet::new();
/// set.insert(Cell::from(3));
/// set.insert(Cell::from(11));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Cell::from(3)));
/// assert_eq!(set.to_string(), "3 11");
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct CellSet {
    cells: BitSet,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the set holding every cell of the map
    pub fn full() -> Self {
        Cell::all().collect()
    }

    /// Add the given cell to this set
    pub fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell.index());
    }

    /// Test if a specific cell is part of this set
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(cell.index())
    }

    /// Remove all cells of the other set
    pub fn difference_with(&mut self, other: &Self) {
        self.cells.difference_with(&other.cells);
    }

    /// Retain only the cells also included in the other set
    pub fn intersect_with(&mut self, other: &Self) {
        self.cells.intersect_with(&other.cells);
    }

    /// Add all cells of the other set
    pub fn union_with(&mut self, other: &Self) {
        self.cells.union_with(&other.cells);
    }

    /// Return true if this set contains all cells of the other set
    pub fn contains_all(&self, other: &Self) -> bool {
        self.cells.is_superset(&other.cells)
    }

    /// Return the number of cells in this set
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return whether there is no cell in this set
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Create an iterator over the contained cells, in index order
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::default();
        set.extend(iter);
        set
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for cell in self {
            match first {
                true => first = false,
                false => write!(f, " ")?,
            }
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

/// Iterate over cells in a [CellSet]
pub struct Iter<'a>(bit_set::Iter<'a, u32>);

impl Iterator for Iter<'_> {
    type Item = Cell;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Cell)
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Cell;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.cells.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn bit_positions() {
        let vars: Vec<Variable> = Variable::all().collect();

        let cell = Cell::from(8);
        assert!(cell.value_of(vars[0]));
        assert!(!cell.value_of(vars[1]));
        assert!(!cell.value_of(vars[3]));

        let cell = Cell::from(0b0101);
        assert!(!cell.value_of(vars[0]));
        assert!(cell.value_of(vars[1]));
        assert!(!cell.value_of(vars[2]));
        assert!(cell.value_of(vars[3]));

        assert_eq!(Cell::all().count(), MAP_CELLS);
        assert_eq!(Cell::from(13).index(), 13);
    }

    #[test]
    #[should_panic(expected = "cell index out of range")]
    fn out_of_range_index_panics() {
        Cell::from(MAP_CELLS);
    }

    #[test]
    fn set_operations() {
        let mut evens: CellSet = Cell::all().filter(|c| c.index() % 2 == 0).collect();
        let low: CellSet = (0..4).map(Cell::from).collect();

        assert_eq!(CellSet::full().len(), MAP_CELLS);
        assert_eq!(evens.len(), 8);

        let mut both = evens.clone();
        both.intersect_with(&low);
        assert_eq!(both.to_string(), "0 2");

        evens.union_with(&low);
        assert_eq!(evens.len(), 10);
        assert!(evens.contains_all(&low));

        evens.difference_with(&low);
        assert!(!evens.contains(Cell::from(0)));
        assert!(evens.contains(Cell::from(6)));
        assert!(!evens.is_empty());
    }
}
