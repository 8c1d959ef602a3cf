//! Truth tables over the 16 map cells

use crate::{Cell, CellSet, Form, KarnaughError, MAP_CELLS};
use std::fmt;
use std::str::FromStr;

/// Value held by one cell of the table.
///
/// Don't-care cells are unconstrained: the grouping engine may absorb them
/// to enlarge a grouping, but they never need to be covered themselves.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CellValue {
    /// The function is false at this cell
    #[default]
    Zero,
    /// The function is true at this cell
    One,
    /// The cell is unconstrained
    DontCare,
}

impl CellValue {
    /// Next value in the interactive edit cycle: 0, 1, don't-care, 0, ...
    pub fn cycled(self) -> Self {
        match self {
            CellValue::Zero => CellValue::One,
            CellValue::One => CellValue::DontCare,
            CellValue::DontCare => CellValue::Zero,
        }
    }

    /// Single-character form used in table descriptions and grid displays
    pub fn as_char(self) -> char {
        match self {
            CellValue::Zero => '0',
            CellValue::One => '1',
            CellValue::DontCare => 'X',
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The 16 cell values of a map, indexed by cell.
///
/// A table can be built programmatically, parsed from an expression with
/// [crate::parse_expression], or parsed from a compact 16-character
/// description with one ```0```/```1```/```X``` per cell in index order.
/// To make the strings easier to read, spaces, tabs and ' are ignored.
///
/// ```
/// use karnaugh::{Cell, CellValue, TruthTable};
/// # use karnaugh::KarnaughError;
/// # fn main() -> Result<(), KarnaughError> {
///
/// let table: TruthTable = "0110 0000 0000 X001".parse()?;
/// assert_eq!(table.get(Cell::from(1)), CellValue::One);
/// assert_eq!(table.get(Cell::from(12)), CellValue::DontCare);
/// assert_eq!(table.to_string(), "011000000000X001");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTable {
    values: [CellValue; MAP_CELLS],
}

impl TruthTable {
    /// Create a table with every cell set to 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with every cell holding the same value
    pub fn filled(value: CellValue) -> Self {
        Self {
            values: [value; MAP_CELLS],
        }
    }

    /// Create a table holding 1 at the given cell indices and 0 elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if an index is outside [0, 16).
    pub fn from_minterms(cells: &[usize]) -> Self {
        let mut table = Self::new();
        for index in cells {
            table.set(Cell::from(*index), CellValue::One);
        }
        table
    }

    /// Create a table holding 0 at the given cell indices and 1 elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if an index is outside [0, 16).
    pub fn from_maxterms(cells: &[usize]) -> Self {
        let mut table = Self::filled(CellValue::One);
        for index in cells {
            table.set(Cell::from(*index), CellValue::Zero);
        }
        table
    }

    /// Current value of a single cell
    pub fn get(&self, cell: Cell) -> CellValue {
        self.values[cell.index()]
    }

    /// Replace the value of a single cell
    pub fn set(&mut self, cell: Cell, value: CellValue) {
        self.values[cell.index()] = value;
    }

    /// Advance a cell through the edit cycle and return its new value
    pub fn cycle(&mut self, cell: Cell) -> CellValue {
        let value = self.get(cell).cycled();
        self.set(cell, value);
        value
    }

    /// Collect the cells holding the target value of the given form
    pub fn targets(&self, form: Form) -> CellSet {
        let target = form.target();
        Cell::all().filter(|cell| self.get(*cell) == target).collect()
    }
}

impl Default for TruthTable {
    fn default() -> Self {
        Self::filled(CellValue::Zero)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in self.values {
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl FromStr for TruthTable {
    type Err = KarnaughError;

    fn from_str(descr: &str) -> Result<Self, KarnaughError> {
        let mut table = Self::new();
        let mut idx = 0;
        for c in descr.chars() {
            let value = match c {
                ' ' | '\t' | '\'' => continue, // skip spacing used for formatting
                '0' => CellValue::Zero,
                '1' => CellValue::One,
                'X' | 'x' => CellValue::DontCare,
                _ => return Err(KarnaughError::InvalidTable(descr.to_string())),
            };
            if idx >= MAP_CELLS {
                return Err(KarnaughError::InvalidTable(descr.to_string()));
            }
            table.values[idx] = value;
            idx += 1;
        }
        if idx != MAP_CELLS {
            return Err(KarnaughError::InvalidTable(descr.to_string()));
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn fill_and_edit() {
        let mut table = TruthTable::new();
        assert!(Cell::all().all(|c| table.get(c) == CellValue::Zero));

        let cell = Cell::from(5);
        table.set(cell, CellValue::One);
        assert_eq!(table.get(cell), CellValue::One);
        assert_eq!(table.get(Cell::from(4)), CellValue::Zero);

        assert_eq!(table.cycle(cell), CellValue::DontCare);
        assert_eq!(table.cycle(cell), CellValue::Zero);
        assert_eq!(table.cycle(cell), CellValue::One);

        let dc = TruthTable::filled(CellValue::DontCare);
        assert!(Cell::all().all(|c| dc.get(c) == CellValue::DontCare));
    }

    #[test]
    fn term_constructors() {
        let table = TruthTable::from_minterms(&[1, 2]);
        assert_eq!(table.get(Cell::from(1)), CellValue::One);
        assert_eq!(table.get(Cell::from(0)), CellValue::Zero);
        assert_eq!(table.targets(Form::Sop).to_string(), "1 2");
        assert_eq!(table.targets(Form::Pos).len(), 14);

        let table = TruthTable::from_maxterms(&[0, 15]);
        assert_eq!(table.get(Cell::from(0)), CellValue::Zero);
        assert_eq!(table.get(Cell::from(7)), CellValue::One);
        assert_eq!(table.targets(Form::Pos).to_string(), "0 15");
    }

    #[test]
    #[should_panic(expected = "cell index out of range")]
    fn out_of_range_term_panics() {
        TruthTable::from_minterms(&[3, 16]);
    }

    #[test]
    fn text_round_trip() -> Result<(), KarnaughError> {
        let table: TruthTable = "1010 xX01 0000 1111".parse()?;
        assert_eq!(table.to_string(), "1010XX0100001111");
        assert_eq!(table, table.to_string().parse()?);

        assert!(matches!(
            "0101".parse::<TruthTable>(),
            Err(KarnaughError::InvalidTable(_))
        ));
        assert!(matches!(
            "01010101010101010".parse::<TruthTable>(),
            Err(KarnaughError::InvalidTable(_))
        ));
        assert!(matches!(
            "0101 0101 0101 012X".parse::<TruthTable>(),
            Err(KarnaughError::InvalidTable(_))
        ));
        Ok(())
    }
}
