use std::fmt;

use crate::{interpreter::value::core::Value, util::num::format_number};

/// A node of a parsed formula.
///
/// `Node` covers the closed set of constructs the grammar produces. A tree is
/// built once by the parser, owns its children exclusively and is never
/// mutated afterwards; it can be evaluated any number of times and re-encoded
/// to canonical formula text with [`Node::encode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal string, number or boolean.
    Literal {
        /// The constant value.
        value: Value,
    },
    /// Logical negation, `NOT(operand)`.
    Not {
        /// The negated expression.
        operand: Box<Self>,
    },
    /// Reference to a value by name.
    Lookup {
        /// The identifier.
        name: String,
    },
    /// Call of a native function, e.g. `LOWER(name)`.
    Call {
        /// The function name.
        name:      String,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
    },
    /// String concatenation (`&`).
    Concat {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Numeric operation (`+ - * / ^ %`).
    Arithmetic {
        /// The operator.
        op:    ArithmeticOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Equality test (`=` or `<>`) between values of the same kind.
    Equality {
        /// The operator.
        op:    EqualityOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Ordering test (`> >= < <=`) between two strings or two numbers.
    Comparison {
        /// The operator.
        op:    ComparisonOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Short-circuiting conjunction, `AND(a; b; ...)`.
    And {
        /// Operands in evaluation order.
        operands: Vec<Self>,
    },
    /// Short-circuiting disjunction, `OR(a; b; ...)`.
    Or {
        /// Operands in evaluation order.
        operands: Vec<Self>,
    },
    /// Conditional, `IF(condition; then; else)`.
    If {
        /// Must evaluate to a boolean.
        condition:   Box<Self>,
        /// Evaluated when the condition is true.
        then_branch: Box<Self>,
        /// Evaluated when the condition is false.
        else_branch: Box<Self>,
    },
}

/// Numeric binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Floating-point remainder (`%`), sign follows the dividend.
    Mod,
}

/// Equality operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EqualityOperator {
    /// Equal to (`=`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
}

/// Ordering operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
}

impl ArithmeticOperator {
    /// The operator as written in formulas.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "%",
        }
    }

    /// `true` for `+` and `-`, which bind looser than the others.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl EqualityOperator {
    /// The operator as written in formulas.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
        }
    }
}

impl ComparisonOperator {
    /// The operator as written in formulas.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
        }
    }
}

/// Binding strength of a node, matching the parser's precedence levels.
///
/// `0` is the comparison level, `1` additive and concatenation, `2`
/// multiplicative, `3` anything the grammar treats as a term.
const fn rung(node: &Node) -> u8 {
    match node {
        Node::Equality { .. } | Node::Comparison { .. } => 0,
        Node::Concat { .. } => 1,
        Node::Arithmetic { op, .. } if op.is_additive() => 1,
        Node::Arithmetic { .. } => 2,
        _ => 3,
    }
}

impl Node {
    /// Convenience constructor for literal nodes.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Appends the canonical text of this node to `out`.
    ///
    /// The output never includes the leading `=` sigil. Binary operators are
    /// surrounded by single spaces, argument lists are joined with `"; "`,
    /// booleans are written as `TRUE()` / `FALSE()`, and parentheses are added
    /// only where re-parsing would otherwise group the operands differently.
    /// Numbers the lexer cannot spell (NaN and the infinities) are written as
    /// parenthesized arithmetic that evaluates to the same value.
    ///
    /// # Example
    /// ```
    /// use celform::Expression;
    ///
    /// let expr = Expression::parse(r#"=IF(a>=1;"x";(1-2)-3)"#).unwrap();
    /// let mut text = String::new();
    /// expr.root().encode(&mut text);
    ///
    /// assert_eq!(text, r#"IF(a >= 1; "x"; (1 - 2) - 3)"#);
    /// ```
    pub fn encode(&self, out: &mut String) {
        match self {
            Self::Literal { value } => encode_literal(value, out),
            Self::Not { operand } => {
                out.push_str("NOT(");
                operand.encode(out);
                out.push(')');
            },
            Self::Lookup { name } => out.push_str(name),
            Self::Call { name, arguments } => encode_list(name, arguments, out),
            Self::Concat { left, right } => self.encode_binary("&", left, right, out),
            Self::Arithmetic { op, left, right } => {
                self.encode_binary(op.symbol(), left, right, out);
            },
            Self::Equality { op, left, right } => {
                self.encode_binary(op.symbol(), left, right, out);
            },
            Self::Comparison { op, left, right } => {
                self.encode_binary(op.symbol(), left, right, out);
            },
            Self::And { operands } => encode_list("AND", operands, out),
            Self::Or { operands } => encode_list("OR", operands, out),
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                out.push_str("IF(");
                condition.encode(out);
                out.push_str("; ");
                then_branch.encode(out);
                out.push_str("; ");
                else_branch.encode(out);
                out.push(')');
            },
        }
    }

    /// Encodes `left op right`.
    ///
    /// The left operand is parsed one level tighter than its parent and the
    /// right operand at the parent's own level, so each side is wrapped in
    /// parentheses when its binding strength falls below what that position
    /// accepts.
    fn encode_binary(&self, symbol: &str, left: &Self, right: &Self, out: &mut String) {
        let level = rung(self);
        encode_operand(left, rung(left) <= level, out);
        out.push(' ');
        out.push_str(symbol);
        out.push(' ');
        encode_operand(right, rung(right) < level, out);
    }
}

fn encode_operand(node: &Node, parenthesize: bool, out: &mut String) {
    if parenthesize {
        out.push('(');
        node.encode(out);
        out.push(')');
    } else {
        node.encode(out);
    }
}

fn encode_list(name: &str, items: &[Node], out: &mut String) {
    out.push_str(name);
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        item.encode(out);
    }
    out.push(')');
}

fn encode_literal(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => quote_into(s, out),
        Value::Number(n) if n.is_nan() => out.push_str("(0 % 0)"),
        Value::Number(n) if n.is_infinite() => {
            out.push_str(if n.is_sign_positive() { "(10 ^ 400)" } else { "(0 - 10 ^ 400)" });
        },
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::Bool(true) => out.push_str("TRUE()"),
        Value::Bool(false) => out.push_str("FALSE()"),
    }
}

/// Writes `s` as a double-quoted literal the lexer decodes back to `s`.
pub(crate) fn quote_into(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{{{:x}}}", u32::from(c)));
            },
            c => out.push(c),
        }
    }
    out.push('"');
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        self.encode(&mut text);
        f.write_str(&text)
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for EqualityOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
