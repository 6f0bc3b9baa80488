use std::cmp::Ordering;

use crate::{
    ast::{ComparisonOperator, EqualityOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `=` or `<>` between two values of the same kind.
    ///
    /// Numbers compare by IEEE equality (so NaN is never equal to itself),
    /// strings byte for byte, booleans by value.
    ///
    /// # Errors
    /// `MismatchedOperands` when the operand kinds differ.
    ///
    /// # Example
    /// ```
    /// use celform::{
    ///     Value, ast::EqualityOperator, interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let r = Evaluator::eval_equality(EqualityOperator::NotEqual,
    ///                                  &Value::from("a"),
    ///                                  &Value::from("b"));
    /// assert_eq!(r.unwrap(), Value::Bool(true));
    ///
    /// assert!(Evaluator::eval_equality(EqualityOperator::Equal,
    ///                                  &Value::Bool(true),
    ///                                  &Value::Number(1.0)).is_err());
    /// ```
    pub fn eval_equality(op: EqualityOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        if left.kind() != right.kind() {
            return Err(RuntimeError::MismatchedOperands { operator: op.symbol(),
                                                          left:     left.kind(),
                                                          right:    right.kind(), });
        }

        let equal = left == right;
        Ok(Value::Bool(match op {
                           EqualityOperator::Equal => equal,
                           EqualityOperator::NotEqual => !equal,
                       }))
    }

    /// Evaluates an ordering test between two strings or two numbers.
    ///
    /// Strings are ordered lexicographically by code point. A comparison
    /// involving NaN is false for every operator.
    ///
    /// # Errors
    /// `MismatchedOperands` when the kinds differ or either operand is a
    /// boolean.
    pub fn eval_comparison(op: ComparisonOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => {
                return Err(RuntimeError::MismatchedOperands { operator: op.symbol(),
                                                              left:     left.kind(),
                                                              right:    right.kind(), });
            },
        };

        Ok(Value::Bool(ordering.is_some_and(|ordering| satisfies(op, ordering))))
    }
}

const fn satisfies(op: ComparisonOperator, ordering: Ordering) -> bool {
    match op {
        ComparisonOperator::Greater => ordering.is_gt(),
        ComparisonOperator::GreaterEqual => ordering.is_ge(),
        ComparisonOperator::Less => ordering.is_lt(),
        ComparisonOperator::LessEqual => ordering.is_le(),
    }
}
