use thiserror::Error;

/// Error reported when reading an expression or a truth table.
///
/// All failures are recoverable: the engine holds no state across calls and
/// a rejected text leaves previously computed tables and groupings untouched.
#[derive(Error, Debug)]
pub enum KarnaughError {
    /// The expression contains no terms
    #[error("The expression is empty")]
    EmptyExpression,

    /// A term could not be read as a sequence of literals
    #[error("The term '{0}' is malformed")]
    MalformedTerm(String),

    /// The letter does not name one of the map's variables
    #[error("The variable '{0}' is not part of the map")]
    UnknownVariable(char),

    /// A product of sums must be a sequence of parenthesized sums
    #[error("A product of sums must be wrapped in parentheses")]
    MissingPosParentheses,

    /// The table description is not 16 cells of 0, 1 or X
    #[error("The table description '{0}' is invalid")]
    InvalidTable(String),
}
