/*! Defines the closed vocabulary of binary [`Operator`]s and their canonical symbols. */

use super::Error;
use std::{fmt, str::FromStr};
use tracing::debug;

/// Is the kind of connective, relation or arithmetic operation joining the two sides of a
/// [`Binary`] formula.
///
/// **Note**: operators carry no precedence or associativity. The nesting of a formula tree is
/// decided entirely by whoever builds it.
///
/// [`Binary`]: crate::syntax::Binary
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Less,
    Divide,
    Equals,
    Modulo,
    Greater,
    NotEquals,
    Implicative,
    Conjunctive,
    Disjunctive,
    Multiplication,
    LessOrEquals,
    GreaterOrEquals,
}

impl Operator {
    /// All operators in declaration order. Parsing scans this list front to back.
    pub const ALL: [Operator; 14] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Less,
        Operator::Divide,
        Operator::Equals,
        Operator::Modulo,
        Operator::Greater,
        Operator::NotEquals,
        Operator::Implicative,
        Operator::Conjunctive,
        Operator::Disjunctive,
        Operator::Multiplication,
        Operator::LessOrEquals,
        Operator::GreaterOrEquals,
    ];

    /// Returns the canonical symbol of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// use spec_fol::syntax::Operator;
    ///
    /// assert_eq!("<=", Operator::LessOrEquals.symbol());
    /// assert_eq!("/\\", Operator::Conjunctive.symbol());
    /// ```
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Less => "<",
            Self::Divide => "/",
            Self::Equals => "=",
            Self::Modulo => "%",
            Self::Greater => ">",
            Self::NotEquals => "<>",
            Self::Implicative => "->",
            Self::Conjunctive => "/\\",
            Self::Disjunctive => "\\/",
            Self::Multiplication => "*",
            Self::LessOrEquals => "<=",
            Self::GreaterOrEquals => ">=",
        }
    }

    /// Returns true if the receiver is one of `+`, `-`, `/`, `%` or `*`.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Self::Plus | Self::Minus | Self::Divide | Self::Modulo | Self::Multiplication
        )
    }

    /// Returns true if the receiver compares its two sides.
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Self::Less
                | Self::Equals
                | Self::Greater
                | Self::NotEquals
                | Self::LessOrEquals
                | Self::GreaterOrEquals
        )
    }

    /// Returns true if the receiver is one of the connectives `->`, `/\` or `\/`.
    pub fn is_logical(self) -> bool {
        matches!(
            self,
            Self::Implicative | Self::Conjunctive | Self::Disjunctive
        )
    }
}

impl FromStr for Operator {
    type Err = Error;

    /// Returns the operator whose symbol is exactly `s`. The match is case-sensitive and
    /// does not trim whitespace.
    ///
    /// **Example**:
    /// ```rust
    /// use spec_fol::syntax::{Error, Operator};
    ///
    /// assert_eq!(Ok(Operator::NotEquals), "<>".parse::<Operator>());
    /// assert_eq!(
    ///     Err(Error::UnknownOperator { symbol: "&&".into() }),
    ///     "&&".parse::<Operator>()
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| {
                debug!(event = crate::trace::UNKNOWN_OPERATOR, symbol = s);
                Error::UnknownOperator {
                    symbol: s.to_string(),
                }
            })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Operator::*, *};
    use itertools::Itertools;

    #[test]
    fn test_symbol() {
        assert_eq!("+", Plus.symbol());
        assert_eq!("-", Minus.symbol());
        assert_eq!("<", Less.symbol());
        assert_eq!("/", Divide.symbol());
        assert_eq!("=", Equals.symbol());
        assert_eq!("%", Modulo.symbol());
        assert_eq!(">", Greater.symbol());
        assert_eq!("<>", NotEquals.symbol());
        assert_eq!("->", Implicative.symbol());
        assert_eq!("/\\", Conjunctive.symbol());
        assert_eq!("\\/", Disjunctive.symbol());
        assert_eq!("*", Multiplication.symbol());
        assert_eq!("<=", LessOrEquals.symbol());
        assert_eq!(">=", GreaterOrEquals.symbol());
    }

    #[test]
    fn test_parse_symbol() {
        for op in Operator::ALL.iter() {
            assert_eq!(Ok(*op), op.symbol().parse::<Operator>());
        }
        assert_eq!(Ok(LessOrEquals), "<=".parse::<Operator>());
        assert_eq!(Ok(GreaterOrEquals), ">=".parse::<Operator>());
        assert_eq!(Ok(NotEquals), "<>".parse::<Operator>());
    }

    #[test]
    fn test_parse_unknown() {
        for s in &["&&", "", "=>", "<< ", " <", "+ ", "==", "/\\\\"] {
            assert_eq!(
                Err(Error::UnknownOperator {
                    symbol: s.to_string()
                }),
                s.parse::<Operator>()
            );
        }
    }

    #[test]
    fn test_unknown_to_string() {
        let err = "=>".parse::<Operator>().unwrap_err();
        assert_eq!("found unknown binary operator: `=>`", err.to_string());
    }

    #[test]
    fn test_symbols_unique() {
        let symbols = Operator::ALL.iter().map(|op| op.symbol()).unique().count();
        assert_eq!(Operator::ALL.len(), symbols);
    }

    #[test]
    fn test_groups_partition() {
        for op in Operator::ALL.iter() {
            let groups = [op.is_arithmetic(), op.is_relational(), op.is_logical()];
            assert_eq!(1, groups.iter().filter(|g| **g).count(), "{}", op);
        }
        assert!(Modulo.is_arithmetic());
        assert!(NotEquals.is_relational());
        assert!(Implicative.is_logical());
    }

    #[test]
    fn test_print_operator() {
        assert_eq!("<>", NotEquals.to_string());
        assert_eq!("\\/", format!("{:?}", Disjunctive));
    }
}
