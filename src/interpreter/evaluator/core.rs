use tokio_util::sync::CancellationToken;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks expression trees against an environment.
///
/// An evaluator holds only shared references, so one parsed tree can be
/// evaluated by many evaluators at once, each with its own environment.
///
/// ## Usage
///
/// Most callers go through [`Expression::evaluate`](crate::Expression::evaluate)
/// or [`Node::evaluate`]; construct an `Evaluator` directly to thread a
/// cancellation token into native functions.
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    environment:  &'a dyn Environment,
    cancellation: Option<&'a CancellationToken>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator resolving names through `environment`.
    #[must_use]
    pub fn new(environment: &'a dyn Environment) -> Self {
        Self { environment,
               cancellation: None }
    }

    /// Hands `token` to every native function this evaluator calls.
    #[must_use]
    pub const fn with_cancellation(mut self, token: &'a CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// The environment names are resolved in.
    #[must_use]
    pub fn environment(&self) -> &'a dyn Environment {
        self.environment
    }

    /// The cancellation token passed to native functions, if any.
    #[must_use]
    pub const fn cancellation(&self) -> Option<&'a CancellationToken> {
        self.cancellation
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the node variant; only the constructs that need all
    /// their operands evaluate them eagerly.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised anywhere in the tree.
    ///
    /// # Example
    /// ```
    /// use celform::{
    ///     EmptyEnvironment, Value,
    ///     ast::{ArithmeticOperator, Node},
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let node = Node::Arithmetic { op:    ArithmeticOperator::Mul,
    ///                               left:  Box::new(Node::literal(6.0)),
    ///                               right: Box::new(Node::literal(7.0)), };
    ///
    /// let value = Evaluator::new(&EmptyEnvironment).eval(&node).unwrap();
    /// assert_eq!(value, Value::Number(42.0));
    /// ```
    pub fn eval(&self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Literal { value } => Ok(value.clone()),
            Node::Not { operand } => self.eval_not(operand),
            Node::Lookup { name } => self.eval_lookup(name),
            Node::Call { name, arguments } => self.eval_call(name, arguments),
            Node::Concat { left, right } => self.eval_concat(left, right),
            Node::Arithmetic { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_arithmetic(*op, &left, &right)
            },
            Node::Equality { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_equality(*op, &left, &right)
            },
            Node::Comparison { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_comparison(*op, &left, &right)
            },
            Node::And { operands } => self.eval_and(operands),
            Node::Or { operands } => self.eval_or(operands),
            Node::If { condition,
                       then_branch,
                       else_branch, } => self.eval_if(condition, then_branch, else_branch),
        }
    }
}

impl Node {
    /// Evaluates this node against `environment`.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised anywhere in the tree.
    pub fn evaluate(&self, environment: &dyn Environment) -> EvalResult<Value> {
        Evaluator::new(environment).eval(self)
    }
}
