use crate::{
    interpreter::{
        builtin::BuiltinResult,
        value::{
            core::{Value, ValueKind},
            function::{Call, CallError},
        },
    },
    util::num::truncate_to_i64,
};

/// `CHOOSE(index; v0; v1; ...)` returns the value at the zero-based `index`
/// among the remaining arguments.
///
/// # Errors
/// Fails when `index` is not a number or falls outside the choices.
///
/// # Example
/// ```
/// use celform::{Value, base, evaluate};
///
/// let v = evaluate("=CHOOSE(1; \"a\"; \"b\"; \"c\")", &base()).unwrap();
/// assert_eq!(v, Value::from("b"));
/// ```
pub fn choose(call: &Call<'_>) -> BuiltinResult {
    let index = truncate_to_i64(call.number(0)?);
    let choices = &call.values[1..];

    usize::try_from(index).ok()
                          .and_then(|index| choices.get(index))
                          .cloned()
                          .ok_or_else(|| CallError::Invalid("CHOOSE index out of range".into()).into())
}

/// `TYPE(value)` returns a numeric code for the kind of its argument:
/// `1` for numbers, `2` for strings and `4` for booleans.
pub fn type_code(call: &Call<'_>) -> BuiltinResult {
    let code = match call.value(0)?.kind() {
        ValueKind::Number => 1.0,
        ValueKind::String => 2.0,
        ValueKind::Bool => 4.0,
    };
    Ok(Value::Number(code))
}
