use crate::{
    ast::{ArithmeticOperator, ComparisonOperator, EqualityOperator, Node},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// A binary operator as recognized by the parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+ - * / ^ %`
    Arithmetic(ArithmeticOperator),
    /// `&`
    Concat,
    /// `= <>`
    Equality(EqualityOperator),
    /// `> >= < <=`
    Comparison(ComparisonOperator),
}

/// Precedence level of the comparison and equality operators.
const RELATIONAL: u8 = 0;
/// Precedence level of `+`, `-` and `&`.
const ADDITIVE: u8 = 1;
/// Precedence level of `*`, `/`, `^` and `%`.
const MULTIPLICATIVE: u8 = 2;

impl BinaryOperator {
    /// The precedence level this operator is parsed at.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Equality(_) | Self::Comparison(_) => RELATIONAL,
            Self::Concat => ADDITIVE,
            Self::Arithmetic(op) if op.is_additive() => ADDITIVE,
            Self::Arithmetic(_) => MULTIPLICATIVE,
        }
    }

    /// Builds the node applying this operator to two operands.
    #[must_use]
    pub fn build(self, left: Node, right: Node) -> Node {
        let left = Box::new(left);
        let right = Box::new(right);
        match self {
            Self::Arithmetic(op) => Node::Arithmetic { op, left, right },
            Self::Concat => Node::Concat { left, right },
            Self::Equality(op) => Node::Equality { op, left, right },
            Self::Comparison(op) => Node::Comparison { op, left, right },
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use celform::{
///     ast::ArithmeticOperator,
///     interpreter::{
///         lexer::Token,
///         parser::binary::{BinaryOperator, token_to_binary_operator},
///     },
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Arithmetic(ArithmeticOperator::Add)));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    use BinaryOperator::{Arithmetic, Comparison, Concat, Equality};

    match token {
        Token::Plus => Some(Arithmetic(ArithmeticOperator::Add)),
        Token::Minus => Some(Arithmetic(ArithmeticOperator::Sub)),
        Token::Star => Some(Arithmetic(ArithmeticOperator::Mul)),
        Token::Slash => Some(Arithmetic(ArithmeticOperator::Div)),
        Token::Caret => Some(Arithmetic(ArithmeticOperator::Pow)),
        Token::Percent => Some(Arithmetic(ArithmeticOperator::Mod)),
        Token::Ampersand => Some(Concat),
        Token::Equals => Some(Equality(EqualityOperator::Equal)),
        Token::NotEqual => Some(Equality(EqualityOperator::NotEqual)),
        Token::Greater => Some(Comparison(ComparisonOperator::Greater)),
        Token::GreaterEqual => Some(Comparison(ComparisonOperator::GreaterEqual)),
        Token::Less => Some(Comparison(ComparisonOperator::Less)),
        Token::LessEqual => Some(Comparison(ComparisonOperator::LessEqual)),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses a full expression: the comparison level.
    ///
    /// Grammar: `expression := bin1 (("=" | "<>" | ">" | ">=" | "<" | "<=")
    /// expression)?`
    ///
    /// # Errors
    /// Propagates errors from the operands.
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        let left = self.descend(Self::parse_bin1)?;
        self.parse_operator_tail(left, RELATIONAL, Self::parse_expression)
    }

    /// Parses addition, subtraction and concatenation.
    ///
    /// Grammar: `bin1 := bin2 (("+" | "-" | "&") bin1)?`
    ///
    /// The right operand re-enters this rule, so `a - b - c` parses as
    /// `a - (b - c)`.
    ///
    /// # Errors
    /// Propagates errors from the operands.
    pub fn parse_bin1(&mut self) -> ParseResult<Node> {
        let left = self.descend(Self::parse_bin2)?;
        self.parse_operator_tail(left, ADDITIVE, Self::parse_bin1)
    }

    /// Parses multiplication, division, exponentiation and remainder.
    ///
    /// Grammar: `bin2 := term (("*" | "/" | "^" | "%") bin2)?`
    ///
    /// # Errors
    /// Propagates errors from the operands.
    pub fn parse_bin2(&mut self) -> ParseResult<Node> {
        let left = self.descend(Self::parse_term)?;
        self.parse_operator_tail(left, MULTIPLICATIVE, Self::parse_bin2)
    }

    /// Completes a binary node if an operator of `level` follows `left`.
    fn parse_operator_tail(&mut self,
                           left: Node,
                           level: u8,
                           right_rule: fn(&mut Self) -> ParseResult<Node>)
                           -> ParseResult<Node> {
        let op = self.peek()?
                     .and_then(token_to_binary_operator)
                     .filter(|op| op.level() == level);
        let Some(op) = op else {
            return Ok(left);
        };

        self.next()?;
        let right = self.descend(right_rule)?;
        Ok(op.build(left, right))
    }
}
