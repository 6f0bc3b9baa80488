use std::f64::consts::PI;

use crate::interpreter::{builtin::BuiltinResult, value::{core::Value, function::Call}};

/// Applies a one-argument `f64` method to the first numeric argument.
macro_rules! unary_math {
    ($($fname:ident => $method:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($fname), "(x)` applies [`f64::", stringify!($method), "`].")]
            pub fn $fname(call: &Call<'_>) -> BuiltinResult {
                Ok(Value::Number(call.number(0)?.$method()))
            }
        )*
    };
}

unary_math! {
    abs => abs,
    exp => exp,
    ln => ln,
    log10 => log10,
}

/// `PI()` returns π.
pub fn pi(_call: &Call<'_>) -> BuiltinResult {
    Ok(Value::Number(PI))
}

/// `RAND()` returns a uniformly distributed number in `[0, 1)`.
pub fn rand(_call: &Call<'_>) -> BuiltinResult {
    Ok(Value::Number(::rand::random::<f64>()))
}

/// `SIGN(x)` returns `-1`, `0` or `1`.
///
/// Zero of either sign and NaN both yield `0`.
///
/// # Example
/// ```
/// use celform::{Value, base, evaluate};
///
/// assert_eq!(evaluate("=SIGN(-3)", &base()).unwrap(), Value::Number(-1.0));
/// assert_eq!(evaluate("=SIGN(0)", &base()).unwrap(), Value::Number(0.0));
/// ```
pub fn sign(call: &Call<'_>) -> BuiltinResult {
    let x = call.number(0)?;
    let sign = if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    };
    Ok(Value::Number(sign))
}
