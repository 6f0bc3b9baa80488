use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    ast::Node,
    error::{RuntimeError, SyntaxError},
    interpreter::{
        environment::Environment,
        evaluator::core::Evaluator,
        parser::core::{ParseOptions, parse},
        value::core::Value,
    },
};

/// Marks text as a formula rather than a plain string.
pub const SIGIL: char = '=';

/// A parsed formula, ready to be evaluated any number of times.
///
/// Text starting with `=` is parsed as a formula; any other non-empty text
/// is kept verbatim as a string constant. An `Expression` is immutable, so
/// it can be shared between threads and evaluated concurrently against
/// different environments.
///
/// The canonical text form (see [`Expression::encode`]) is what `Display`
/// prints and what serde reads and writes, so expressions can be stored and
/// loaded as plain strings.
///
/// # Example
/// ```
/// use celform::{Expression, MapEnvironment, Value};
///
/// let e = Expression::parse("=IF(total > 100; \"large\"; \"small\")").unwrap();
///
/// let env = MapEnvironment::new().with_value("total", 250.0);
/// assert_eq!(e.evaluate(&env).unwrap(), Value::from("large"));
///
/// let env = MapEnvironment::new().with_value("total", 3.0);
/// assert_eq!(e.evaluate(&env).unwrap(), Value::from("small"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    root: Node,
}

impl Expression {
    /// Parses `text` with the default [`ParseOptions`].
    ///
    /// # Errors
    /// - `EmptyExpression` for empty input.
    /// - Any syntax error in the formula after the `=`, with a byte offset
    ///   counted from the first character after the sigil.
    ///
    /// # Example
    /// ```
    /// use celform::{EmptyEnvironment, Expression, Value};
    ///
    /// let plain = Expression::parse("Hello World!").unwrap();
    /// assert_eq!(plain.evaluate(&EmptyEnvironment).unwrap(), Value::from("Hello World!"));
    ///
    /// assert!(Expression::parse("").is_err());
    /// assert!(Expression::parse("=1 +").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, SyntaxError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parses `text` with explicit options.
    ///
    /// # Errors
    /// As [`Expression::parse`], plus `MaximumDepth` when the formula nests
    /// deeper than `options.max_depth`.
    ///
    /// # Example
    /// ```
    /// use celform::{Expression, ParseOptions, SyntaxError};
    ///
    /// let options = ParseOptions { max_depth: 8 };
    /// let err = Expression::parse_with("=((((((1))))))", &options).unwrap_err();
    /// assert!(matches!(err, SyntaxError::MaximumDepth { .. }));
    /// ```
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, SyntaxError> {
        if text.is_empty() {
            return Err(SyntaxError::EmptyExpression { position: 0 });
        }

        let Some(formula) = text.strip_prefix(SIGIL) else {
            return Ok(Self { root: Node::literal(text) });
        };

        Ok(Self { root: parse(formula, options)? })
    }

    /// The root of the parsed tree.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Consumes the expression and returns its tree.
    #[must_use]
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Evaluates the expression against `environment`.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised during evaluation, including
    /// failures reported by native functions.
    pub fn evaluate(&self, environment: &dyn Environment) -> Result<Value, RuntimeError> {
        Self::finish(Evaluator::new(environment).eval(&self.root))
    }

    /// Evaluates the expression, handing `token` to every native function
    /// called along the way.
    ///
    /// The token is never polled by the evaluator itself; native functions
    /// read it through [`Call::cancellation`](crate::Call::cancellation).
    ///
    /// # Errors
    /// As [`Expression::evaluate`].
    pub fn evaluate_with_cancellation(&self,
                                      environment: &dyn Environment,
                                      token: &CancellationToken)
                                      -> Result<Value, RuntimeError> {
        Self::finish(Evaluator::new(environment).with_cancellation(token)
                                                 .eval(&self.root))
    }

    fn finish(result: Result<Value, RuntimeError>) -> Result<Value, RuntimeError> {
        match &result {
            Ok(value) => debug!(kind = %value.kind(), "evaluated formula"),
            Err(e) => debug!(error = %e, "evaluation failed"),
        }
        result
    }

    /// Returns the canonical text of the expression.
    ///
    /// The result always starts with `=` and parses back to an expression
    /// that evaluates identically. Plain-string expressions encode as a
    /// quoted string literal.
    ///
    /// # Example
    /// ```
    /// use celform::Expression;
    ///
    /// let e = Expression::parse("=a&\"-\"&b").unwrap();
    /// assert_eq!(e.encode(), "=a & \"-\" & b");
    ///
    /// let e = Expression::parse("plain").unwrap();
    /// assert_eq!(e.encode(), "=\"plain\"");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::from(SIGIL);
        self.root.encode(&mut out);
        out
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Expression {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Wraps a hand-built tree. Its encoding re-parses to a tree that evaluates
/// the same, including for non-finite number literals.
impl From<Node> for Expression {
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl Serialize for Expression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}
