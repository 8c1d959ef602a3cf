//! The four map variables and selections over them

use crate::KarnaughError;

use bit_set::BitSet;
use std::fmt;
use std::str::FromStr;

/// Number of variables on the map.
pub const MAP_VARS: usize = 4;

/// One of the four map variables.
///
/// Variables are named by a letter from ```A``` to ```D``` and each one is
/// bound to a bit position of the 4-bit cell index, with ```A``` holding the
/// most significant bit. The set of variables is fixed for the life of the
/// map: a variable is obtained from its letter and letters outside the range
/// are rejected.
///
/// ```
/// use karnaugh::Variable;
/// # use karnaugh::KarnaughError;
/// # fn main() -> Result<(), KarnaughError> {
///
/// let b = Variable::from_letter('B')?;
/// assert_eq!(b.letter(), 'B');
/// assert_eq!(b.uid(), 1);
///
/// assert!(Variable::from_letter('Z').is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Variable(pub(crate) usize);

impl Variable {
    pub(crate) fn new(uid: usize) -> Self {
        debug_assert!(uid < MAP_VARS);
        Self(uid)
    }

    /// Retrieve the variable named by a letter
    pub fn from_letter(letter: char) -> Result<Self, KarnaughError> {
        let last = (b'A' + MAP_VARS as u8 - 1) as char;
        if !('A'..=last).contains(&letter) {
            return Err(KarnaughError::UnknownVariable(letter));
        }
        Ok(Self(letter as usize - 'A' as usize))
    }

    /// Return the internal integer UID (the bit position, 0 for the MSB)
    pub fn uid(&self) -> usize {
        self.0
    }

    /// Return the display letter
    pub fn letter(&self) -> char {
        (b'A' + self.0 as u8) as char
    }

    /// Iterate over all map variables in display order
    pub fn all() -> impl Iterator<Item = Variable> {
        (0..MAP_VARS).map(Variable)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Variable {
    type Err = KarnaughError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => Err(KarnaughError::MalformedTerm(name.to_string())),
        }
    }
}

/// A set of map variables with bitwise storage.
///
/// The expression generator uses two of these per grouping to remember which
/// variables hold a constant value across all of its cells.
///
/// ```
/// use karnaugh::{Variable, VarSet};
///
/// let mut vs = VarSet::new();
/// vs.insert(Variable::from_letter('C').unwrap());
/// vs.insert(Variable::from_letter('A').unwrap());
///
/// assert_eq!(vs.len(), 2);
/// assert_eq!(vs.to_string(), "AC");
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct VarSet {
    variables: BitSet,
}

impl VarSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the given variable to this set
    pub fn insert(&mut self, var: Variable) {
        self.variables.insert(var.uid());
    }

    /// Test if a specific variable is part of this set
    pub fn contains(&self, var: Variable) -> bool {
        self.variables.contains(var.uid())
    }

    /// Return the number of variables in this set
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Return whether there is no selected variable in this set
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Create an iterator over the contained variables
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl FromIterator<Variable> for VarSet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut vs = VarSet::default();
        vs.extend(iter);
        vs
    }
}

impl Extend<Variable> for VarSet {
    fn extend<I: IntoIterator<Item = Variable>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl fmt::Display for VarSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in self {
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Iterate over variables in a [VarSet]
pub struct Iter<'a>(bit_set::Iter<'a, u32>);

impl Iterator for Iter<'_> {
    type Item = Variable;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Variable::new)
    }
}

impl<'a> IntoIterator for &'a VarSet {
    type Item = Variable;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.variables.iter())
    }
}
