/*! Names of the events recorded through `tracing` while formulae are assembled. */

// log event types:
/// A string did not match any binary operator symbol.
pub const UNKNOWN_OPERATOR: &str = "@unknown_operator";

/// A binary formula was assembled from two children.
pub const BINARY: &str = "@binary";
