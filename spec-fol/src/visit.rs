/*! Defines the [`Visitor`] contract for walking formula trees, and a couple of analyses built
on it.

A formula hands the pieces of its variant to the matching handler of a visitor and does nothing
else. Visitors decide the order of traversal and whether to descend into children at all by
calling [`Formula::accept`] on the children they care about.

**Example**:
```rust
use spec_fol::{formula, syntax::{Formula, Operator, Term}, visit::Visitor};

// Counts the leaves of a formula.
struct Leaves;

impl Visitor for Leaves {
    type Output = usize;

    fn visit_term(&mut self, _: &Term) -> usize {
        1
    }

    fn visit_binary(&mut self, left: &Formula, _: Operator, right: &Formula) -> usize {
        left.accept(self) + right.accept(self)
    }
}

let fmla = formula!({(x) Plus (y)} Multiplication (z));
assert_eq!(3, fmla.accept(&mut Leaves));
```
*/

use crate::syntax::{Formula, Operator, Term};

/// Is the trait of analyses that walk formulae, with one handler for each variant of
/// [`Formula`].
pub trait Visitor {
    /// Is the result of visiting a formula.
    type Output;

    /// Handles a leaf formula, wrapping `term`.
    fn visit_term(&mut self, term: &Term) -> Self::Output;

    /// Handles a binary formula, made of `left`, `operator` and `right`.
    fn visit_binary(&mut self, left: &Formula, operator: Operator, right: &Formula)
        -> Self::Output;
}

/// Collects the operators of a formula in pre-order.
///
/// **Example**:
/// ```rust
/// use spec_fol::{formula, syntax::Operator, visit::Operators};
///
/// let fmla = formula!({(x) Plus (y)} LessOrEquals {(y) Modulo (2)});
/// assert_eq!(
///     vec![Operator::LessOrEquals, Operator::Plus, Operator::Modulo],
///     Operators::collect(&fmla)
/// );
/// ```
#[derive(Default)]
pub struct Operators {
    operators: Vec<Operator>,
}

impl Operators {
    /// Returns the operators of `formula` in pre-order.
    pub fn collect(formula: &Formula) -> Vec<Operator> {
        let mut visitor = Self::default();
        formula.accept(&mut visitor);
        visitor.operators
    }
}

impl Visitor for Operators {
    type Output = ();

    fn visit_term(&mut self, _: &Term) {}

    fn visit_binary(&mut self, left: &Formula, operator: Operator, right: &Formula) {
        self.operators.push(operator);
        left.accept(self);
        right.accept(self);
    }
}

/// Computes the height of a formula tree, where leaves have height zero.
///
/// **Note**: recurses once per level of nesting.
pub struct Depth;

impl Visitor for Depth {
    type Output = usize;

    fn visit_term(&mut self, _: &Term) -> usize {
        0
    }

    fn visit_binary(&mut self, left: &Formula, _: Operator, right: &Formula) -> usize {
        1 + std::cmp::max(left.accept(self), right.accept(self))
    }
}
