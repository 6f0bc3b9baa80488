use tracing::debug;

use crate::{
    error::BoxError,
    interpreter::{
        environment::MapEnvironment,
        value::{core::Value, function::{Call, NativeFunction}},
    },
};

/// Numeric functions: `ABS`, `EXP`, `LN`, `LOG10`, `PI`, `RAND`, `SIGN`.
pub mod math;
/// Miscellaneous functions: `CHOOSE` and `TYPE`.
pub mod misc;
/// String functions.
///
/// Positions and counts are 1-based byte offsets, like `LEN`, but every cut is
/// moved back to the nearest character boundary so results are always valid
/// UTF-8.
pub mod text;

/// Result type returned by every base function.
pub type BuiltinResult = Result<Value, BoxError>;

/// Signature shared by the base functions.
type BuiltinFn = fn(&Call<'_>) -> BuiltinResult;

/// Defines the base library by generating a lookup table and a name list.
///
/// Each entry maps the name formulas call the function by to its
/// implementation. The macro produces:
/// - `BUILTIN_TABLE` (static table used by [`base`]),
/// - `BUILTIN_FUNCTIONS` (public list of names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:path
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, BuiltinFn)] = &[
            $(
                ($name, $func),
            )*
        ];
        /// Names of every function installed by [`base`].
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "CHOOSE" => misc::choose,
    "TYPE"   => misc::type_code,

    "ABS"    => math::abs,
    "EXP"    => math::exp,
    "LN"     => math::ln,
    "LOG10"  => math::log10,
    "PI"     => math::pi,
    "RAND"   => math::rand,
    "SIGN"   => math::sign,

    "CHAR"   => text::char_fn,
    "JOIN"   => text::join,
    "LEFT"   => text::left,
    "LEN"    => text::len,
    "LOWER"  => text::lower,
    "MID"    => text::mid,
    "REPT"   => text::rept,
    "RIGHT"  => text::right,
    "SEARCH" => text::search,
    "TRIM"   => text::trim,
    "UPPER"  => text::upper,
}

/// Builds a fresh environment holding the base function library.
///
/// Each call returns a new, caller-owned map; extend it with
/// [`MapEnvironment::insert`] or layer it under other environments with
/// [`Environments`](crate::Environments).
///
/// # Example
/// ```
/// use celform::{Expression, Value, base};
///
/// let env = base().with_value("name", "World");
/// let e = Expression::parse("=UPPER(\"hello, \" & name)").unwrap();
///
/// assert_eq!(e.evaluate(&env).unwrap(), Value::from("HELLO, WORLD"));
/// ```
#[must_use]
pub fn base() -> MapEnvironment {
    debug!(functions = BUILTIN_TABLE.len(), "building base environment");
    BUILTIN_TABLE.iter()
                 .map(|&(name, func)| (name, NativeFunction::new(func)))
                 .collect()
}
