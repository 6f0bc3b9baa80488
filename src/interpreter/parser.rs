/// Parser state, lookahead and the depth guard.
///
/// Holds the `Parser` struct that drives the pull-based lexer with one token
/// of lookahead, the `ParseOptions` configuration and the program entry
/// point that requires end of input after one complete expression.
pub mod core;

/// Binary operator rules.
///
/// Implements the three precedence levels: comparison and equality,
/// additive and concatenation, multiplicative. Each level recurses into
/// itself (or, for comparisons, into the full expression) on its right-hand
/// side, so chains group from the right.
pub mod binary;

/// Term rule.
///
/// Parses parenthesized expressions, negative number literals, string and
/// number literals, identifiers, function calls and the special forms `IF`,
/// `TRUE()`, `FALSE()`, `NOT`, `AND` and `OR`.
pub mod term;

/// Shared parsing helpers.
///
/// Provides argument-list parsing used by calls and the variadic special
/// forms.
pub mod utils;
