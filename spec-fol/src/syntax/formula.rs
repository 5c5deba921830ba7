/*! Introduces [`Formula`], the closed set of formula variants, and [`Binary`], the node that
joins two formulae under an [`Operator`]. */

use super::{Operator, Term, V};
use crate::visit::Visitor;
use itertools::Itertools;
use std::fmt;
use tracing::trace;

/// Is an abstract syntax tree (AST) for formulae. Equality on formulae is structural.
///
/// Trees are assembled bottom-up from already constructed children and are never mutated
/// afterwards, so a finished tree can be shared across threads for read-only analysis.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// Is a leaf formula, wrapping a [`Term`].
    Term(Term),

    /// Is a binary formula, wrapping a [`Binary`].
    Binary(Box<Binary>),
}

impl From<Term> for Formula {
    fn from(value: Term) -> Self {
        Self::Term(value)
    }
}

impl From<V> for Formula {
    fn from(value: V) -> Self {
        Self::Term(value.into())
    }
}

impl From<Binary> for Formula {
    fn from(value: Binary) -> Self {
        Self::Binary(Box::new(value))
    }
}

impl Formula {
    /// Returns the binary formula that joins `left` and `right` with `operator`.
    #[inline(always)]
    pub fn binary(left: Self, operator: Operator, right: Self) -> Self {
        Binary::new(left, operator, right).into()
    }

    /// Returns the canonical string of the receiver: binary formulae are fully parenthesized
    /// and their operator symbols are surrounded by single spaces.
    ///
    /// **Example**:
    /// ```rust
    /// use spec_fol::syntax::{Formula, Operator, V};
    ///
    /// let x: Formula = V::from("x").into();
    /// let y: Formula = V::from("y").into();
    /// let fmla = Formula::binary(x, Operator::NotEquals, y);
    /// assert_eq!("(x <> y)", fmla.render());
    /// ```
    ///
    /// **Note**: leaves are printed verbatim, so two different trees render identically when
    /// a variable name mimics another tree (e.g. a variable named `(x + y)`). Compare
    /// formulae with `==` for structural equality. Rendering recurses once per level of
    /// nesting; extremely deep trees can exhaust the stack.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Applies `visitor` on the receiver by handing the pieces of its variant to the
    /// matching handler of `visitor`. The receiver never recurses into its children.
    pub fn accept<T: Visitor>(&self, visitor: &mut T) -> T::Output {
        match self {
            Self::Term(this) => visitor.visit_term(this),
            Self::Binary(this) => this.accept(visitor),
        }
    }

    /// Returns a list of variable symbols in the receiver formula.
    ///
    /// **Note**: each variable symbol appears only once, in the order of its first occurrence
    /// from left to right.
    ///
    /// **Example**:
    /// ```rust
    /// use spec_fol::{formula, v};
    ///
    /// let fmla = formula!({(x) LessOrEquals (y)} Conjunctive {(y) Less (f(x, z))});
    /// assert_eq!(vec![&v!(x), &v!(y), &v!(z)], fmla.free_vars());
    /// ```
    pub fn free_vars(&self) -> Vec<&V> {
        match self {
            Self::Term(this) => this.free_vars(),
            Self::Binary(this) => this.free_vars(),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Term(this) => write!(f, "{}", this),
            Self::Binary(this) => write!(f, "{}", this),
        }
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Represents two formulae joined by an [`Operator`].
///
/// **Note**: a binary formula exclusively owns its children and exposes no way of changing
/// them once it is constructed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Binary {
    left: Formula,
    operator: Operator,
    right: Formula,
}

impl Binary {
    /// Returns the formula that joins `left` and `right` with `operator`. The contents of the
    /// children are not validated.
    pub fn new(left: Formula, operator: Operator, right: Formula) -> Self {
        trace!(event = crate::trace::BINARY, operator = operator.symbol());
        Self {
            left,
            operator,
            right,
        }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &Formula {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &Formula {
        &self.right
    }

    /// Returns the operator of the receiver.
    #[inline(always)]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the symbol of the operator of the receiver.
    #[inline(always)]
    pub fn operator_symbol(&self) -> &'static str {
        self.operator.symbol()
    }

    /// Consumes the receiver and returns its left child, operator and right child.
    pub fn into_parts(self) -> (Formula, Operator, Formula) {
        (self.left, self.operator, self.right)
    }

    /// Hands the left child, the operator and the right child of the receiver to
    /// [`Visitor::visit_binary`].
    pub fn accept<T: Visitor>(&self, visitor: &mut T) -> T::Output {
        visitor.visit_binary(&self.left, self.operator, &self.right)
    }

    fn free_vars(&self) -> Vec<&V> {
        let mut vs = self.left.free_vars();
        vs.extend(self.right.free_vars());
        vs.into_iter().unique().collect()
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl fmt::Debug for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
