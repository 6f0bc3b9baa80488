/// Numeric formatting and conversion helpers.
///
/// This module provides the canonical number formatter used by the encoder
/// and by `Value`'s `Display`, together with the saturating conversions the
/// built-in functions use to turn numeric arguments into counts and
/// positions.
pub mod num;
