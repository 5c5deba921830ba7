/// Creates a variable symbol from an identifier.
#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::V::from(stringify!($v))
    };
}

/// Creates a function symbol from an identifier.
#[macro_export]
macro_rules! f {
    ($f:ident) => {
        $crate::syntax::F::from(stringify!($f))
    };
}

/// Creates a [`Term`] from a variable name, an integer literal or a function application.
///
/// [`Term`]: crate::syntax::Term
#[macro_export]
macro_rules! term {
    ($v:ident) => {
        $crate::syntax::Term::Var {
            variable: stringify!($v).into(),
        }
    };
    ($n:literal) => {
        $crate::syntax::Term::Int { value: $n }
    };
    ($func:ident ($($t:tt)*)) => {
        {
            let ts: Vec<$crate::syntax::Term> = $crate::terms!($($t)*);
            $crate::syntax::F(stringify!($func).to_string()).app(ts)
        }
    };
}

/// Creates a list of [`Term`]s, separated by commas.
///
/// [`Term`]: crate::syntax::Term
#[macro_export]
macro_rules! terms {
    (@acc () -> ($($result:tt)*)) => {
        vec![$($result)*]
    };
    (@acc ($v:ident $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::syntax::Term::Var {
            variable: stringify!($v).into(),
        },))
    };
    (@acc ($n:literal $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* $crate::syntax::Term::Int {
            value: $n,
        },))
    };
    (@acc ($func:ident ($($t:tt)*) $(, $($tail:tt)*)?) -> ($($result:tt)*)) => {
        {
            let ts = $crate::terms!($($t)*);
            let term = $crate::syntax::F(stringify!($func).to_string()).app(ts);
            $crate::terms!(@acc ($($($tail)*)?) -> ($($result)* term,))
        }
    };
    ($($tail:tt)*) => {
        $crate::terms!(@acc ($($tail)*) -> ())
    };
}

/// Creates a [`Formula`]. Binary formulae are written as two grouped operands around the
/// name of an [`Operator`] variant; anything else is read as a [`term!`].
///
/// **Example**:
/// ```rust
/// use spec_fol::formula;
///
/// let fmla = formula!({(x) Plus (y)} Multiplication (z));
/// assert_eq!("((x + y) * z)", fmla.render());
/// ```
///
/// [`Formula`]: crate::syntax::Formula
/// [`Operator`]: crate::syntax::Operator
#[macro_export]
macro_rules! formula {
    (@binary ($($left:tt)*) $op:ident ($($right:tt)*)) => {
        $crate::syntax::Formula::binary(
            $crate::formula!($($left)*),
            $crate::syntax::Operator::$op,
            $crate::formula!($($right)*),
        )
    };
    (($($left:tt)*) $op:ident ($($right:tt)*)) => {
        $crate::formula!(@binary ($($left)*) $op ($($right)*))
    };
    ([$($left:tt)*] $op:ident [$($right:tt)*]) => {
        $crate::formula!(@binary ($($left)*) $op ($($right)*))
    };
    ({$($left:tt)*} $op:ident {$($right:tt)*}) => {
        $crate::formula!(@binary ($($left)*) $op ($($right)*))
    };
    (($($left:tt)*) $op:ident {$($right:tt)*}) => {
        $crate::formula!(@binary ($($left)*) $op ($($right)*))
    };
    ({$($left:tt)*} $op:ident ($($right:tt)*)) => {
        $crate::formula!(@binary ($($left)*) $op ($($right)*))
    };
    ($($t:tt)*) => {
        $crate::syntax::Formula::from($crate::term!($($t)*))
    };
}
