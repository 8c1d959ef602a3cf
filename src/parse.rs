//! Expression parsing into truth tables

use crate::{CellSet, CellValue, Form, KarnaughError, TruthTable, Variable};
use once_cell::sync::Lazy;
use pest::{iterators::Pair, Parser};
use regex::Regex;

#[derive(Parser)]
#[grammar_inline = r####"
term    = { SOI ~ literal+ ~ EOI }
sum     = { SOI ~ literal ~ ("+" ~ literal)* ~ EOI }
literal = @{ ASCII_ALPHA_UPPER ~ "'"? }
"####]
struct ExpressionParser;

static RE_SPACING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Parse an SOP or POS expression into a truth table.
///
/// In SOP form every cell satisfying one of the `+`-separated product terms
/// is set to 1 and the others stay 0. In POS form the expression is a
/// sequence of parenthesized sums and every cell falsifying one of them is
/// set to 0, the others staying 1. Variables are the single letters A to D,
/// `'` marks a complement and whitespace is ignored.
///
/// ```
/// use karnaugh::{parse_expression, Form, TruthTable};
/// # use karnaugh::KarnaughError;
/// # fn main() -> Result<(), KarnaughError> {
///
/// let table = parse_expression("AB'", Form::Sop)?;
/// assert_eq!(table, TruthTable::from_minterms(&[8, 9, 10, 11]));
///
/// let table = parse_expression("(A+B')(B+C)", Form::Pos)?;
/// assert_eq!(table, TruthTable::from_maxterms(&[0, 1, 4, 5, 6, 7, 8, 9]));
/// # Ok(())
/// # }
/// ```
pub fn parse_expression(text: &str, form: Form) -> Result<TruthTable, KarnaughError> {
    let cleaned = RE_SPACING.replace_all(text, "");
    if cleaned.is_empty() {
        return Err(KarnaughError::EmptyExpression);
    }
    match form {
        Form::Sop => parse_sop(&cleaned),
        Form::Pos => parse_pos(&cleaned),
    }
}

fn parse_sop(text: &str) -> Result<TruthTable, KarnaughError> {
    let mut table = TruthTable::new();
    for piece in text.split('+') {
        let term = parse_piece(Rule::term, piece)?;
        for cell in term_cells(term, Form::Sop)?.iter() {
            table.set(cell, CellValue::One);
        }
    }
    Ok(table)
}

fn parse_pos(text: &str) -> Result<TruthTable, KarnaughError> {
    if !text.starts_with('(') || !text.ends_with(')') {
        return Err(KarnaughError::MissingPosParentheses);
    }
    let mut table = TruthTable::filled(CellValue::One);
    for piece in text[1..text.len() - 1].split(")(") {
        let piece = piece.replace(['(', ')'], "");
        let sum = parse_piece(Rule::sum, &piece)?;
        for cell in term_cells(sum, Form::Pos)?.iter() {
            table.set(cell, CellValue::Zero);
        }
    }
    Ok(table)
}

fn parse_piece<'i>(rule: Rule, piece: &'i str) -> Result<Pair<'i, Rule>, KarnaughError> {
    ExpressionParser::parse(rule, piece)
        .ok()
        .and_then(|mut pairs| pairs.next())
        .ok_or_else(|| KarnaughError::MalformedTerm(piece.to_string()))
}

/// Cells selected by all literals of a term: the satisfying cells of an SOP
/// product, or the falsifying cells of a POS sum.
fn term_cells(term: Pair<Rule>, form: Form) -> Result<CellSet, KarnaughError> {
    let mut cells = CellSet::full();
    for pair in term.into_inner() {
        if pair.as_rule() != Rule::literal {
            continue; // EOI
        }
        let (var, complemented) = read_literal(pair)?;
        let wanted = match form {
            Form::Sop => !complemented,
            Form::Pos => complemented,
        };
        cells = cells
            .iter()
            .filter(|cell| cell.value_of(var) == wanted)
            .collect();
    }
    Ok(cells)
}

fn read_literal(literal: Pair<Rule>) -> Result<(Variable, bool), KarnaughError> {
    let text = literal.as_str();
    let complemented = text.ends_with('\'');
    let letter = text
        .chars()
        .next()
        .ok_or_else(|| KarnaughError::MalformedTerm(text.to_string()))?;
    Ok((Variable::from_letter(letter)?, complemented))
}
