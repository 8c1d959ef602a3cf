//! The two canonical expression forms

use crate::CellValue;
use std::fmt;

/// Expression form driving the parser, the grouping engine and the generator.
///
/// In [SOP](Form::Sop) the map groups the 1 cells and renders them as a sum
/// of product terms; in [POS](Form::Pos) it groups the 0 cells and renders
/// them as a product of parenthesized sums.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Form {
    /// Sum of products
    #[default]
    Sop,
    /// Product of sums
    Pos,
}

impl Form {
    /// The cell value this form groups
    pub fn target(self) -> CellValue {
        match self {
            Form::Sop => CellValue::One,
            Form::Pos => CellValue::Zero,
        }
    }

    /// Test if a cell value may join a grouping in this form
    pub fn includes(self, value: CellValue) -> bool {
        value == self.target() || value == CellValue::DontCare
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Sop => write!(f, "SOP"),
            Form::Pos => write!(f, "POS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn targets_and_inclusion() {
        assert_eq!(Form::Sop.target(), CellValue::One);
        assert_eq!(Form::Pos.target(), CellValue::Zero);

        assert!(Form::Sop.includes(CellValue::One));
        assert!(Form::Sop.includes(CellValue::DontCare));
        assert!(!Form::Sop.includes(CellValue::Zero));

        assert!(Form::Pos.includes(CellValue::Zero));
        assert!(Form::Pos.includes(CellValue::DontCare));
        assert!(!Form::Pos.includes(CellValue::One));

        assert_eq!(Form::default(), Form::Sop);
        assert_eq!(format!("{} {}", Form::Sop, Form::Pos), "SOP POS");
    }
}
