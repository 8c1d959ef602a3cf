//! Render essential covers as Boolean expressions

use crate::{Form, Grouping, VarSet, Variable};
use itertools::Itertools;

/// Render an essential cover as a Boolean expression in the given form.
///
/// Each grouping contributes the variables holding a fixed value across all
/// of its cells; variables that change inside the grouping drop out. In SOP
/// form every grouping becomes a product of literals and the products are
/// joined with `+`; in POS form every grouping becomes a parenthesized sum
/// of the complemented literals and the sums are concatenated.
///
/// An empty cover renders the constant expression: `0` in SOP form, `1` in
/// POS form. A grouping with no fixed variable spans the whole map and
/// renders the opposite constant on its own.
///
/// ```
/// use karnaugh::{find_groupings, generate_expression, Form, TruthTable};
///
/// let table = TruthTable::from_minterms(&[0, 2, 8, 10]);
/// let groups = find_groupings(&table, Form::Sop);
///
/// assert_eq!(generate_expression(&groups, Form::Sop), "B'D'");
/// ```
pub fn generate_expression(groupings: &[Grouping], form: Form) -> String {
    if groupings.is_empty() {
        return match form {
            Form::Sop => "0".to_string(),
            Form::Pos => "1".to_string(),
        };
    }
    match form {
        Form::Sop => groupings.iter().map(sop_term).join(" + "),
        Form::Pos => groupings.iter().map(pos_term).collect(),
    }
}

/// Split the variables into those fixed at one and those fixed at zero
/// across every cell of the grouping
fn fixed_variables(grouping: &Grouping) -> (VarSet, VarSet) {
    let mut ones = VarSet::new();
    let mut zeros = VarSet::new();
    for var in Variable::all() {
        let mut values = grouping.iter().map(|cell| cell.value_of(var));
        let first = match values.next() {
            Some(first) => first,
            None => continue,
        };
        if !values.all(|value| value == first) {
            continue;
        }
        match first {
            true => ones.insert(var),
            false => zeros.insert(var),
        }
    }
    (ones, zeros)
}

/// One grouping as a product of its fixed literals
fn sop_term(grouping: &Grouping) -> String {
    let (ones, zeros) = fixed_variables(grouping);
    if ones.is_empty() && zeros.is_empty() {
        return "1".to_string();
    }
    Variable::all()
        .filter_map(|var| match (ones.contains(var), zeros.contains(var)) {
            (true, _) => Some(var.to_string()),
            (_, true) => Some(format!("{}'", var)),
            _ => None,
        })
        .collect()
}

/// One grouping as a parenthesized sum of the complemented fixed literals
fn pos_term(grouping: &Grouping) -> String {
    let (ones, zeros) = fixed_variables(grouping);
    if ones.is_empty() && zeros.is_empty() {
        return "0".to_string();
    }
    let literals = Variable::all()
        .filter_map(|var| match (ones.contains(var), zeros.contains(var)) {
            (true, _) => Some(format!("{}'", var)),
            (_, true) => Some(var.to_string()),
            _ => None,
        })
        .join("+");
    format!("({})", literals)
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn constants() {
        assert_eq!(generate_expression(&[], Form::Sop), "0");
        assert_eq!(generate_expression(&[], Form::Pos), "1");

        let ones = TruthTable::filled(CellValue::One);
        let groups = find_groupings(&ones, Form::Sop);
        assert_eq!(generate_expression(&groups, Form::Sop), "1");

        let zeros = TruthTable::new();
        let groups = find_groupings(&zeros, Form::Pos);
        assert_eq!(generate_expression(&groups, Form::Pos), "0");
    }

    #[test]
    fn product_terms() {
        let table = TruthTable::from_minterms(&[8, 9, 10, 11]);
        let groups = find_groupings(&table, Form::Sop);
        assert_eq!(generate_expression(&groups, Form::Sop), "AB'");

        let table = TruthTable::from_minterms(&[5]);
        let groups = find_groupings(&table, Form::Sop);
        assert_eq!(generate_expression(&groups, Form::Sop), "A'BC'D");

        let table = TruthTable::from_minterms(&[0, 2, 8, 10]);
        let groups = find_groupings(&table, Form::Sop);
        assert_eq!(generate_expression(&groups, Form::Sop), "B'D'");
    }

    #[test]
    fn multiple_products() {
        // one product per kept grouping, in cover order
        let groups = find_groupings(&TruthTable::from_minterms(&[0, 1, 3]), Form::Sop);
        assert_eq!(generate_expression(&groups, Form::Sop), "A'B'C' + A'B'D");
    }

    #[test]
    fn sum_terms() {
        let table = TruthTable::from_maxterms(&[0, 1]);
        let groups = find_groupings(&table, Form::Pos);
        assert_eq!(generate_expression(&groups, Form::Pos), "(A+B+C)");

        let table = TruthTable::from_maxterms(&[12, 13, 14, 15]);
        let groups = find_groupings(&table, Form::Pos);
        assert_eq!(generate_expression(&groups, Form::Pos), "(A'+B')");

        let table = TruthTable::from_maxterms(&[0, 1, 4, 5, 6, 7, 8, 9]);
        let groups = find_groupings(&table, Form::Pos);
        assert_eq!(generate_expression(&groups, Form::Pos), "(A+B')(A+C)(B+C)");
    }
}
