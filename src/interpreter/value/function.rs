use std::{fmt, sync::Arc};

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::{
    error::BoxError,
    interpreter::value::core::{KindMismatch, Value, ValueKind},
};

type NativeFn = dyn Fn(&Call<'_>) -> Result<Value, BoxError> + Send + Sync;

/// A caller-supplied function that formulas can invoke by name.
///
/// Cloning is cheap; clones share the underlying closure.
///
/// # Example
/// ```
/// use celform::{Call, Expression, MapEnvironment, NativeFunction, Value};
///
/// let double = NativeFunction::new(|call: &Call<'_>| Ok(Value::Number(call.number(0)? * 2.0)));
/// let env = MapEnvironment::new().with_function("DOUBLE", double);
///
/// let expr = Expression::parse("=DOUBLE(21)").unwrap();
/// assert_eq!(expr.evaluate(&env).unwrap(), Value::Number(42.0));
/// ```
#[derive(Clone)]
pub struct NativeFunction(Arc<NativeFn>);

impl NativeFunction {
    /// Wraps a closure as a native function.
    pub fn new<F>(func: F) -> Self
        where F: Fn(&Call<'_>) -> Result<Value, BoxError> + Send + Sync + 'static
    {
        Self(Arc::new(func))
    }

    /// Invokes the function with a call record.
    pub fn call(&self, call: &Call<'_>) -> Result<Value, BoxError> {
        (self.0)(call)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFunction")
    }
}

/// Errors raised by the argument helpers on [`Call`].
///
/// Native functions usually propagate these with `?`; the evaluator then
/// wraps them into a runtime error carrying the function name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// Fewer arguments were supplied than the function requires.
    #[error("missing argument {index}")]
    MissingArgument {
        /// Zero-based index of the missing argument.
        index: usize,
    },
    /// An argument had the wrong kind.
    #[error("argument {index}: {mismatch}")]
    WrongKind {
        /// Zero-based index of the argument.
        index:    usize,
        /// The expected and actual kinds.
        mismatch: KindMismatch,
    },
    /// A function-specific violation, such as an out-of-range index.
    #[error("{0}")]
    Invalid(String),
}

/// The record handed to a [`NativeFunction`] for one invocation.
///
/// Arguments have already been evaluated, left to right.
#[derive(Debug)]
pub struct Call<'a> {
    /// The name the function was called by.
    pub name:     &'a str,
    /// The evaluated arguments, in source order.
    pub values:   Vec<Value>,
    cancellation: Option<&'a CancellationToken>,
}

impl<'a> Call<'a> {
    /// Creates a call record.
    #[must_use]
    pub const fn new(name: &'a str,
                     values: Vec<Value>,
                     cancellation: Option<&'a CancellationToken>)
                     -> Self {
        Self { name,
               values,
               cancellation }
    }

    /// Number of arguments supplied.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the call has no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The caller's cancellation token, if evaluation was started with one.
    ///
    /// The evaluator never inspects the token itself; long-running functions
    /// may poll it and fail early.
    #[must_use]
    pub const fn cancellation(&self) -> Option<&'a CancellationToken> {
        self.cancellation
    }

    /// Returns the argument at `index`.
    pub fn value(&self, index: usize) -> Result<&Value, CallError> {
        self.values
            .get(index)
            .ok_or(CallError::MissingArgument { index })
    }

    /// Returns the numeric argument at `index`.
    pub fn number(&self, index: usize) -> Result<f64, CallError> {
        self.value(index)?
            .as_number()
            .map_err(|mismatch| CallError::WrongKind { index, mismatch })
    }

    /// Returns the string argument at `index`.
    pub fn string(&self, index: usize) -> Result<&str, CallError> {
        self.value(index)?
            .as_str()
            .map_err(|mismatch| CallError::WrongKind { index, mismatch })
    }

    /// Returns the boolean argument at `index`.
    pub fn boolean(&self, index: usize) -> Result<bool, CallError> {
        self.value(index)?
            .as_bool()
            .map_err(|mismatch| CallError::WrongKind { index, mismatch })
    }

    /// Returns the numeric argument at `index`, or `default` when the call
    /// has fewer arguments.
    pub fn opt_number(&self, index: usize, default: f64) -> Result<f64, CallError> {
        if index >= self.values.len() {
            return Ok(default);
        }
        self.number(index)
    }

    /// Fails with [`CallError::WrongKind`] unless every argument from `start`
    /// onwards has the given kind.
    pub fn expect_rest(&self, start: usize, kind: ValueKind) -> Result<(), CallError> {
        for (offset, value) in self.values.iter().skip(start).enumerate() {
            if value.kind() != kind {
                return Err(CallError::WrongKind { index:    start + offset,
                                                  mismatch: KindMismatch { expected: kind,
                                                                           found:    value.kind(), }, });
            }
        }
        Ok(())
    }
}
