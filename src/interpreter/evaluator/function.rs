use tracing::trace;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Binding,
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, function::Call},
    },
};

impl Evaluator<'_> {
    /// Resolves an identifier to its value.
    ///
    /// # Errors
    /// - `UnknownIdentifier` if the environment has no binding for `name`.
    /// - `InvalidIdentifierType` if the binding is a function.
    pub fn eval_lookup(&self, name: &str) -> EvalResult<Value> {
        match self.environment().get(name) {
            Some(Binding::Value(value)) => Ok(value),
            Some(Binding::Function(_)) => Err(RuntimeError::InvalidIdentifierType { name: name.to_string() }),
            None => Err(RuntimeError::UnknownIdentifier { name: name.to_string() }),
        }
    }

    /// Calls the native function bound to `name`.
    ///
    /// The name is resolved first, then every argument is evaluated left to
    /// right, then the function runs once with the collected values.
    ///
    /// # Errors
    /// - `UnknownFunction` if the environment has no binding for `name`.
    /// - `NotAFunction` if the binding is a plain value.
    /// - Any error raised while evaluating an argument.
    /// - `Function` wrapping whatever the native function reported.
    ///
    /// # Example
    /// ```
    /// use celform::{Expression, MapEnvironment, NativeFunction, Value};
    ///
    /// let env = MapEnvironment::new().with_function("COUNT", NativeFunction::new(|call| {
    ///                                                    Ok(Value::from(call.len() as f64))
    ///                                                }));
    ///
    /// let e = Expression::parse("=COUNT(1; \"two\"; TRUE())").unwrap();
    /// assert_eq!(e.evaluate(&env).unwrap(), Value::Number(3.0));
    /// ```
    pub fn eval_call(&self, name: &str, arguments: &[Node]) -> EvalResult<Value> {
        let function = match self.environment().get(name) {
            Some(Binding::Function(function)) => function,
            Some(Binding::Value(_)) => return Err(RuntimeError::NotAFunction { name: name.to_string() }),
            None => return Err(RuntimeError::UnknownFunction { name: name.to_string() }),
        };

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        trace!(function = name, arguments = values.len(), "calling native function");

        let call = Call::new(name, values, self.cancellation());
        function.call(&call)
                .map_err(|source| RuntimeError::Function { name: name.to_string(),
                                                           source })
    }
}
