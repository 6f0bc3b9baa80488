use crate::{
    ast::ArithmeticOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a numeric operation of the form `Number <Operator> Number`.
    ///
    /// Both operands must be numbers. Division by exactly zero (either sign)
    /// is an error; every other operation follows IEEE-754, so `%` by zero
    /// yields NaN and overflowing `^` yields infinity.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a number.
    ///
    /// # Errors
    /// - `InvalidOperands` if either operand is not a number.
    /// - `DivisionByZero` for `/` with a zero divisor.
    ///
    /// # Example
    /// ```
    /// use celform::{
    ///     Value, ast::ArithmeticOperator, interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let r = Evaluator::eval_arithmetic(ArithmeticOperator::Mod,
    ///                                    &Value::Number(-7.0),
    ///                                    &Value::Number(3.0));
    /// assert_eq!(r.unwrap(), Value::Number(-1.0));
    /// ```
    pub fn eval_arithmetic(op: ArithmeticOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let (Value::Number(a), Value::Number(b)) = (left, right) else {
            return Err(RuntimeError::InvalidOperands { operator: op.symbol(),
                                                       left:     left.kind(),
                                                       right:    right.kind(), });
        };

        let result = match op {
            ArithmeticOperator::Add => a + b,
            ArithmeticOperator::Sub => a - b,
            ArithmeticOperator::Mul => a * b,
            ArithmeticOperator::Div => {
                if *b == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                a / b
            },
            ArithmeticOperator::Pow => a.powf(*b),
            ArithmeticOperator::Mod => a % b,
        };

        Ok(Value::Number(result))
    }
}
