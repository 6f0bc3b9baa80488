use tracing::debug;

use crate::{
    ast::Node,
    error::SyntaxError,
    interpreter::lexer::{Lexer, Spanned, Token},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Default nesting ceiling for [`ParseOptions::max_depth`].
pub const MAX_DEPTH: usize = 1024;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of nested grammar rules. Every rule invocation counts
    /// one level, so a parenthesized term costs several; input that nests
    /// deeper fails with [`SyntaxError::MaximumDepth`] instead of exhausting
    /// the stack.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: MAX_DEPTH }
    }
}

/// Recursive-descent parser over a formula body.
///
/// The parser pulls tokens from a [`Lexer`] on demand and keeps at most one
/// token of lookahead.
pub struct Parser<'src> {
    lexer:     Lexer<'src>,
    peeked:    Option<Spanned>,
    depth:     usize,
    max_depth: usize,
}

/// Parses a formula body (the text after `=`) into a single expression tree.
///
/// # Errors
/// Returns the first `SyntaxError` encountered; no partial tree is produced.
///
/// # Example
/// ```
/// use celform::{
///     ast::{ArithmeticOperator, Node},
///     interpreter::parser::core::{ParseOptions, parse},
/// };
///
/// let node = parse("1 - 2 - 3", &ParseOptions::default()).unwrap();
///
/// // Chains group from the right.
/// assert_eq!(node,
///            Node::Arithmetic { op:    ArithmeticOperator::Sub,
///                               left:  Box::new(Node::literal(1.0)),
///                               right: Box::new(Node::Arithmetic { op:    ArithmeticOperator::Sub,
///                                                                  left:  Box::new(Node::literal(2.0)),
///                                                                  right: Box::new(Node::literal(3.0)), }), });
/// ```
pub fn parse(source: &str, options: &ParseOptions) -> ParseResult<Node> {
    let mut parser = Parser::new(source, options);
    let result = parser.descend(Parser::parse_program);

    match &result {
        Ok(_) => debug!(len = source.len(), "parsed formula"),
        Err(e) => debug!(len = source.len(), position = e.position(), error = %e, "formula rejected"),
    }

    result
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`.
    #[must_use]
    pub fn new(source: &'src str, options: &ParseOptions) -> Self {
        Self { lexer:     Lexer::new(source),
               peeked:    None,
               depth:     0,
               max_depth: options.max_depth, }
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Errors
    /// `MaximumDepth` once the configured ceiling is reached, before `rule`
    /// recurses any further.
    pub fn descend<T>(&mut self, rule: fn(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.depth += 1;
        if self.depth >= self.max_depth {
            return Err(SyntaxError::MaximumDepth { position: self.position() });
        }

        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Byte offset of the next unconsumed token, or of the end of the last
    /// token scanned.
    #[must_use]
    pub fn position(&self) -> usize {
        self.peeked
            .as_ref()
            .map_or_else(|| self.lexer.position(), |spanned| spanned.position)
    }

    /// Returns the next token without consuming it.
    ///
    /// End of input is not an error here: it yields `None` so rules can ask
    /// whether an operator follows without forcing a failure.
    ///
    /// # Errors
    /// Propagates lexical errors.
    pub fn peek(&mut self) -> ParseResult<Option<&Token>> {
        if self.peeked.is_none() {
            self.peeked = self.lexer.next_token()?;
        }
        Ok(self.peeked.as_ref().map(|spanned| &spanned.token))
    }

    /// Returns `true` if the next token equals `token`.
    ///
    /// # Errors
    /// Propagates lexical errors.
    pub fn peek_is(&mut self, token: &Token) -> ParseResult<bool> {
        Ok(self.peek()?.is_some_and(|next| next == token))
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if the input is exhausted; lexical errors are
    /// propagated.
    pub fn next(&mut self) -> ParseResult<Spanned> {
        if let Some(spanned) = self.peeked.take() {
            return Ok(spanned);
        }
        self.lexer
            .next_token()?
            .ok_or(SyntaxError::UnexpectedEndOfInput { position: self.lexer.source_len() })
    }

    /// Consumes the next token, which must equal `token`.
    ///
    /// # Errors
    /// `Expected`, naming `expected`, if a different token (or nothing)
    /// follows.
    pub fn expect(&mut self, token: &Token, expected: &'static str) -> ParseResult<()> {
        if self.peek_is(token)? {
            self.peeked = None;
            return Ok(());
        }
        let position = self.peeked
                           .as_ref()
                           .map_or_else(|| self.lexer.source_len(), |spanned| spanned.position);
        Err(SyntaxError::Expected { expected, position })
    }

    /// Parses a whole program: exactly one expression followed by end of
    /// input.
    ///
    /// Grammar: `program := expression EOF`
    ///
    /// # Errors
    /// `TrailingTokens` if anything follows the expression.
    pub fn parse_program(&mut self) -> ParseResult<Node> {
        let expr = self.descend(Self::parse_expression)?;

        self.peek()?;
        if let Some(Spanned { token, position }) = self.peeked.take() {
            return Err(SyntaxError::TrailingTokens { token: token.to_string(),
                                                     position });
        }

        Ok(expr)
    }
}
