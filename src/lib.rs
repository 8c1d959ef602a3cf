//! Simplify four-variable Boolean functions on a Karnaugh map.
//!
//! The sixteen input combinations of the [variables](Variable) ```A``` to ```D``` live in
//! a [truth table](TruthTable) displayed as a 4x4 [grid] with Gray-coded headers, so that
//! two adjacent cells (wrapping across the edges) always differ in exactly one variable.
//! Each [cell](Cell) holds a [tri-state value](CellValue): `0`, `1`, or the don't-care `X`.
//!
//! Simplification follows the classic pencil-and-paper method: collect the
//! [groupings](Grouping) of the map (rectangular power-of-two blocks of target cells,
//! where don't-cares may join any block but never anchor one), reduce them to an
//! essential cover, and render the cover as a minimized expression in the active
//! [form](Form): sum of products or product of sums.
//!
//! ```
//! use karnaugh::{parse_expression, simplify, Form};
//! # use karnaugh::KarnaughError;
//! # fn main() -> Result<(), KarnaughError> {
//!
//! // Load a redundant sum of products and simplify it
//! let table = parse_expression("AB' + AB'C", Form::Sop)?;
//! let result = simplify(&table, Form::Sop);
//!
//! assert_eq!(result.expression, "AB'");
//! # Ok(())
//! # }
//! ```
//!
//! # Truth tables
//!
//! Tables can be built from minterm or maxterm lists or parsed from a text form
//! listing the sixteen cell values in index order.
//!
//! ```
//! use karnaugh::{simplify, Form, TruthTable};
//! # use karnaugh::KarnaughError;
//! # fn main() -> Result<(), KarnaughError> {
//!
//! let table: TruthTable = "0101 0101 0101 0101".parse()?;
//! let result = simplify(&table, Form::Sop);
//!
//! assert_eq!(result.expression, "D");
//! # Ok(())
//! # }
//! ```
//!
//! # Interactive sessions
//!
//! A [KMap] keeps a table, a form, and the simplification of the pair in sync
//! through cell edits, form switches, and expression loads.
//!
//! ```
//! use karnaugh::{Cell, CellValue, Form, KMap};
//!
//! let mut map = KMap::new(Form::Sop);
//! map.set_value(Cell::from(0), CellValue::One);
//!
//! assert_eq!(map.expression(), "A'B'C'D'");
//! ```

mod cells;
mod efmt;
mod error;
mod form;
pub mod grid;
mod grouping;
mod kmap;
mod parse;
mod table;
mod variable;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use cells::{Cell, CellSet, MAP_CELLS};
pub use efmt::generate_expression;
pub use error::KarnaughError;
pub use form::Form;
pub use grouping::{find_groupings, Color, Grouping};
pub use kmap::{simplify, KMap, Simplified};
pub use parse::parse_expression;
pub use table::{CellValue, TruthTable};
pub use variable::{VarSet, Variable, MAP_VARS};
