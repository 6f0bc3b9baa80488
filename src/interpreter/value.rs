/// Scalar values.
///
/// Defines the `Value` enum covering the three first-class kinds (string,
/// number, boolean), the `ValueKind` tag used in diagnostics, and the
/// projections that extract a Rust value of an expected kind.
pub mod core;
/// Native functions and the call record.
///
/// Defines `NativeFunction`, the callable type an environment may bind to a
/// name, and `Call`, the per-invocation record handed to it: the called name,
/// the evaluated arguments and an optional cancellation token.
pub mod function;
