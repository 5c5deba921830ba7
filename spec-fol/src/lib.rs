/*! Provides an immutable abstract syntax for binary formulae of a small specification language,
together with a traversal contract for analyses that walk formula trees without modifying them. */

pub mod syntax;
#[cfg(test)]
pub mod test_macros;
pub mod trace;
pub mod visit;
