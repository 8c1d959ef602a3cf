//! Editable map sessions and one-call simplification

use crate::{
    find_groupings, generate_expression, grid, parse_expression, Cell, CellValue, Form, Grouping,
    KarnaughError, TruthTable,
};
use delegate::delegate;
use log::debug;
use std::fmt;

/// Result of one simplification pass.
#[derive(Clone, Debug)]
pub struct Simplified {
    /// Essential cover of the table, largest grouping first
    pub groupings: Vec<Grouping>,
    /// Minimized Boolean expression in the requested form
    pub expression: String,
}

/// Simplify a truth table in one call.
///
/// This runs the grouping search on the table and renders the kept cover as
/// an expression in the requested form.
///
/// ```
/// use karnaugh::{simplify, Form, TruthTable};
///
/// let table = TruthTable::from_minterms(&[8, 9, 10, 11, 15]);
/// let result = simplify(&table, Form::Sop);
///
/// assert_eq!(result.expression, "AB' + ACD");
/// ```
pub fn simplify(table: &TruthTable, form: Form) -> Simplified {
    let groupings = find_groupings(table, form);
    let expression = generate_expression(&groupings, form);
    Simplified {
        groupings,
        expression,
    }
}

/// An editable four-variable map bound to a display form.
///
/// The map owns a truth table and keeps its essential cover and minimized
/// expression up to date through every edit. Loading an expression replaces
/// the table wholesale; a failed parse leaves the previous state untouched.
///
/// ```
/// use karnaugh::{Form, KMap};
/// # use karnaugh::KarnaughError;
/// # fn main() -> Result<(), KarnaughError> {
///
/// let mut map = KMap::new(Form::Sop);
/// map.set_expression("AB' + AB'C")?;
///
/// assert_eq!(map.expression(), "AB'");
/// assert_eq!(map.groupings().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct KMap {
    table: TruthTable,
    form: Form,
    groupings: Vec<Grouping>,
    expression: String,
}

impl KMap {
    /// Create an all-zero map in the given form
    pub fn new(form: Form) -> Self {
        Self::with_table(TruthTable::new(), form)
    }

    /// Create a map over an existing truth table
    pub fn with_table(table: TruthTable, form: Form) -> Self {
        let mut map = Self {
            table,
            form,
            groupings: Vec::new(),
            expression: String::new(),
        };
        map.recompute();
        map
    }

    delegate! {
        to self.table {
            /// Read the value of one cell
            pub fn get(&self, cell: Cell) -> CellValue;
        }
    }

    /// The underlying truth table
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// The active display form
    pub fn form(&self) -> Form {
        self.form
    }

    /// The essential cover of the current table, largest grouping first
    pub fn groupings(&self) -> &[Grouping] {
        &self.groupings
    }

    /// The minimized expression of the current table
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Load an expression, replacing the whole table.
    ///
    /// The text is parsed in the map's current form. On error the previous
    /// table, cover, and expression stay in place.
    pub fn set_expression(&mut self, text: &str) -> Result<(), KarnaughError> {
        self.table = parse_expression(text, self.form)?;
        self.recompute();
        Ok(())
    }

    /// Step one cell through the `0`, `1`, `X` cycle and return its new value
    pub fn cycle_cell(&mut self, cell: Cell) -> CellValue {
        let value = self.table.cycle(cell);
        self.recompute();
        value
    }

    /// Write one cell of the map
    pub fn set_value(&mut self, cell: Cell, value: CellValue) {
        self.table.set(cell, value);
        self.recompute();
    }

    /// Switch the display form, keeping the table
    pub fn set_form(&mut self, form: Form) {
        self.form = form;
        self.recompute();
    }

    /// Clear every cell back to zero
    pub fn reset(&mut self) {
        self.table = TruthTable::new();
        self.recompute();
    }

    fn recompute(&mut self) {
        let result = simplify(&self.table, self.form);
        self.groupings = result.groupings;
        self.expression = result.expression;
        debug!("{} cover of [{}]: {}", self.form, self.table, self.expression);
    }
}

impl Default for KMap {
    fn default() -> Self {
        Self::new(Form::default())
    }
}

/// The map displays as the 4x4 grid with Gray-coded headers: rows carry the
/// values of `A` and `B`, columns the values of `C` and `D`.
impl fmt::Display for KMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for label in grid::labels() {
            write!(f, "{:>4}", label)?;
        }
        writeln!(f)?;
        for (row, label) in grid::labels().iter().enumerate() {
            write!(f, "{:>4}", label)?;
            for col in 0..grid::GRID_DIM {
                write!(f, "{:>4}", self.table.get(grid::cell_at(row, col)).as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
