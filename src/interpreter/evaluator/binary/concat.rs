use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `left & right`.
    ///
    /// The left operand is checked before the right one is evaluated, so a
    /// bad left side reports first even when the right side would fail too.
    ///
    /// # Errors
    /// `ConcatOperand` naming the side (`LHS` or `RHS`) that was not a
    /// string, or any error raised by either operand.
    pub fn eval_concat(&self, left: &Node, right: &Node) -> EvalResult<Value> {
        let mut out = match self.eval(left)? {
            Value::String(s) => s,
            other => {
                return Err(RuntimeError::ConcatOperand { side:  "LHS",
                                                         found: other.kind(), });
            },
        };

        match self.eval(right)? {
            Value::String(s) => out.push_str(&s),
            other => {
                return Err(RuntimeError::ConcatOperand { side:  "RHS",
                                                         found: other.kind(), });
            },
        }

        Ok(Value::String(out))
    }
}
