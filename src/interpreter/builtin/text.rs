use crate::{
    interpreter::{
        builtin::BuiltinResult,
        value::{
            core::{Value, ValueKind},
            function::{Call, CallError},
        },
    },
    util::num::{clamp_to_usize, truncate_to_i64, usize_to_f64},
};

/// Longest string, in bytes, that `REPT` will build.
pub const MAX_REPT_LEN: usize = 16 * 1024 * 1024;

/// Moves `index` back to the nearest character boundary of `s`.
fn floor_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev()
               .find(|&i| s.is_char_boundary(i))
               .unwrap_or(0)
}

/// Reads an optional count argument, rejecting negative values.
fn count(call: &Call<'_>, index: usize, default: f64) -> Result<usize, CallError> {
    let count = truncate_to_i64(call.opt_number(index, default)?);
    if count < 0 {
        return Err(CallError::Invalid(format!("{} count must not be negative", call.name)));
    }
    Ok(clamp_to_usize(count))
}

/// `CHAR(code; ...)` builds a string from Unicode code points.
///
/// Codes that are not valid scalar values become U+FFFD.
pub fn char_fn(call: &Call<'_>) -> BuiltinResult {
    call.expect_rest(0, ValueKind::Number)?;
    let text = call.values
                   .iter()
                   .filter_map(|value| value.as_number().ok())
                   .map(|code| {
                       u32::try_from(truncate_to_i64(code)).ok()
                                                           .and_then(char::from_u32)
                                                           .unwrap_or(char::REPLACEMENT_CHARACTER)
                   })
                   .collect::<String>();
    Ok(Value::String(text))
}

/// `JOIN(separator; s1; s2; ...)` concatenates the strings with `separator`
/// between them.
///
/// # Example
/// ```
/// use celform::{Value, base, evaluate};
///
/// let v = evaluate("=JOIN(\", \"; \"a\"; \"b\"; \"c\")", &base()).unwrap();
/// assert_eq!(v, Value::from("a, b, c"));
/// ```
pub fn join(call: &Call<'_>) -> BuiltinResult {
    let separator = call.string(0)?;
    call.expect_rest(1, ValueKind::String)?;
    let parts = call.values[1..].iter()
                                .filter_map(|value| value.as_str().ok())
                                .collect::<Vec<_>>();
    Ok(Value::String(parts.join(separator)))
}

/// `LEFT(text; [count = 1])` returns the first `count` bytes of `text`.
pub fn left(call: &Call<'_>) -> BuiltinResult {
    let text = call.string(0)?;
    let end = floor_boundary(text, count(call, 1, 1.0)?);
    Ok(Value::from(&text[..end]))
}

/// `RIGHT(text; [count = 1])` returns the last `count` bytes of `text`.
pub fn right(call: &Call<'_>) -> BuiltinResult {
    let text = call.string(0)?;
    let count = count(call, 1, 1.0)?;
    let start = floor_boundary(text, text.len().saturating_sub(count));
    Ok(Value::from(&text[start..]))
}

/// `LEN(text)` returns the length of `text` in bytes.
pub fn len(call: &Call<'_>) -> BuiltinResult {
    Ok(Value::Number(usize_to_f64(call.string(0)?.len())))
}

/// `LOWER(text)` converts `text` to lower case.
pub fn lower(call: &Call<'_>) -> BuiltinResult {
    Ok(Value::String(call.string(0)?.to_lowercase()))
}

/// `UPPER(text)` converts `text` to upper case.
pub fn upper(call: &Call<'_>) -> BuiltinResult {
    Ok(Value::String(call.string(0)?.to_uppercase()))
}

/// `TRIM(text)` removes leading and trailing whitespace.
pub fn trim(call: &Call<'_>) -> BuiltinResult {
    Ok(Value::from(call.string(0)?.trim()))
}

/// `MID(text; start; [length = 1])` returns `length` bytes of `text` from the
/// 1-based position `start`.
///
/// A start outside the string yields an empty string; a length running past
/// the end is cut short.
///
/// # Example
/// ```
/// use celform::{Value, base, evaluate};
///
/// let env = base();
/// assert_eq!(evaluate("=MID(\"formula\"; 3; 4)", &env).unwrap(), Value::from("rmul"));
/// assert_eq!(evaluate("=MID(\"formula\"; 30)", &env).unwrap(), Value::from(""));
/// ```
pub fn mid(call: &Call<'_>) -> BuiltinResult {
    let text = call.string(0)?;
    let start = truncate_to_i64(call.number(1)?).saturating_sub(1);
    let length = count(call, 2, 1.0)?;

    let Ok(start) = usize::try_from(start) else {
        return Ok(Value::from(""));
    };
    if start >= text.len() {
        return Ok(Value::from(""));
    }

    let end = floor_boundary(text, start.saturating_add(length));
    let start = floor_boundary(text, start);
    Ok(Value::from(&text[start..end]))
}

/// `REPT(text; count)` repeats `text` `count` times.
///
/// # Errors
/// Fails when `count` is negative or the result would exceed
/// [`MAX_REPT_LEN`] bytes.
pub fn rept(call: &Call<'_>) -> BuiltinResult {
    let text = call.string(0)?;
    call.number(1)?;
    let count = count(call, 1, 0.0)?;
    match text.len().checked_mul(count) {
        Some(len) if len <= MAX_REPT_LEN => Ok(Value::String(text.repeat(count))),
        _ => Err(CallError::Invalid(format!("REPT result exceeds {MAX_REPT_LEN} bytes")).into()),
    }
}

/// `SEARCH(needle; haystack; [start = 1])` returns the 1-based position of
/// the first occurrence of `needle` at or after `start`, or `-1`.
///
/// # Example
/// ```
/// use celform::{Value, base, evaluate};
///
/// let env = base();
/// assert_eq!(evaluate("=SEARCH(\"b\"; \"abcb\")", &env).unwrap(), Value::Number(2.0));
/// assert_eq!(evaluate("=SEARCH(\"b\"; \"abcb\"; 3)", &env).unwrap(), Value::Number(4.0));
/// assert_eq!(evaluate("=SEARCH(\"z\"; \"abcb\")", &env).unwrap(), Value::Number(-1.0));
/// ```
pub fn search(call: &Call<'_>) -> BuiltinResult {
    let needle = call.string(0)?;
    let haystack = call.string(1)?;
    let start = truncate_to_i64(call.opt_number(2, 1.0)?).saturating_sub(1);

    let found = usize::try_from(start).ok()
                                      .filter(|&start| start < haystack.len())
                                      .and_then(|start| {
                                          let start = floor_boundary(haystack, start);
                                          haystack[start..].find(needle)
                                                           .map(|offset| start + offset + 1)
                                      });

    Ok(Value::Number(found.map_or(-1.0, usize_to_f64)))
}
