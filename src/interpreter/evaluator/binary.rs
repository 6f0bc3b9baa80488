/// Numeric operators: `+ - * / ^ %`.
pub mod arithmetic;
/// Equality (`= <>`) and ordering (`> >= < <=`).
pub mod comparison;
/// String concatenation (`&`).
pub mod concat;
