use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `node` and requires a boolean result for `construct`.
    fn eval_condition(&self, construct: &'static str, node: &Node) -> EvalResult<bool> {
        match self.eval(node)? {
            Value::Bool(b) => Ok(b),
            other => Err(RuntimeError::ExpectedBoolean { construct,
                                                         found: other.kind() }),
        }
    }

    /// Evaluates `NOT(operand)`.
    ///
    /// # Errors
    /// `ExpectedBoolean` if the operand is not a boolean.
    pub fn eval_not(&self, operand: &Node) -> EvalResult<Value> {
        Ok(Value::Bool(!self.eval_condition("NOT", operand)?))
    }

    /// Evaluates `AND(...)` left to right, stopping at the first `FALSE()`.
    ///
    /// Operands after the first false one are never evaluated, so their
    /// errors and side effects do not happen.
    ///
    /// # Errors
    /// `ExpectedBoolean` if an evaluated operand is not a boolean.
    ///
    /// # Example
    /// ```
    /// use celform::{EmptyEnvironment, Expression, Value};
    ///
    /// // UNDEFINED is never looked up.
    /// let e = Expression::parse("=AND(FALSE(); UNDEFINED)").unwrap();
    /// assert_eq!(e.evaluate(&EmptyEnvironment).unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_and(&self, operands: &[Node]) -> EvalResult<Value> {
        for operand in operands {
            if !self.eval_condition("AND", operand)? {
                return Ok(Value::Bool(false));
            }
        }
        Ok(Value::Bool(true))
    }

    /// Evaluates `OR(...)` left to right, stopping at the first `TRUE()`.
    ///
    /// # Errors
    /// `ExpectedBoolean` if an evaluated operand is not a boolean.
    pub fn eval_or(&self, operands: &[Node]) -> EvalResult<Value> {
        for operand in operands {
            if self.eval_condition("OR", operand)? {
                return Ok(Value::Bool(true));
            }
        }
        Ok(Value::Bool(false))
    }

    /// Evaluates `IF(condition; then; else)`.
    ///
    /// Only the branch selected by the condition is evaluated.
    ///
    /// # Errors
    /// `ExpectedBoolean` if the condition is not a boolean, or any error
    /// raised by the selected branch.
    pub fn eval_if(&self, condition: &Node, then_branch: &Node, else_branch: &Node) -> EvalResult<Value> {
        if self.eval_condition("IF", condition)? {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }
}
