/*! Defines the leaf terms that appear as operands of formulae. */

use super::{F, V};
use itertools::Itertools;
use std::fmt;

/// Represents a term and consists of variables, integer literals and function applications.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Is a variable term, wrapping a [variable symbol].
    ///
    /// [variable symbol]: crate::syntax::V
    Var { variable: V },

    /// Is an integer literal.
    Int { value: i64 },

    /// Is a composite term, made by applying a `function` on a list of `terms`.
    App { function: F, terms: Vec<Term> },
}

impl Term {
    /// Returns a list of all variable symbols in the term.
    ///
    /// **Note**: each variable symbol appears only once, in the order of its first occurrence,
    /// even if it is present at multiple positions of the receiver term.
    ///
    /// **Example**:
    /// ```rust
    /// use spec_fol::syntax::{Term, F, V};
    ///
    /// let x = V::from("x");
    /// let y = V::from("y");
    ///
    /// // max(x, 2, y, x):
    /// let t = F::from("max").app(vec![
    ///     x.clone().into(),
    ///     Term::from(2i64),
    ///     y.clone().into(),
    ///     x.clone().into(),
    /// ]);
    /// assert_eq!(vec![&x, &y], t.free_vars());
    /// ```
    pub fn free_vars(&self) -> Vec<&V> {
        match self {
            Term::Var { variable } => vec![variable],
            Term::Int { .. } => vec![],
            Term::App { terms, .. } => terms.iter().flat_map(|t| t.free_vars()).unique().collect(),
        }
    }
}

impl From<V> for Term {
    fn from(variable: V) -> Self {
        Self::Var { variable }
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Self::Int { value }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Var { variable } => write!(f, "{}", variable),
            Self::Int { value } => write!(f, "{}", value),
            Self::App { function, terms } => {
                write!(f, "{}({})", function, terms.iter().join(", "))
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
