use crate::{
    ast::Node,
    error::SyntaxError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a term, the tightest-binding rule of the grammar.
    ///
    /// Grammar:
    /// ```text
    ///     term := "(" expression ")"
    ///           | "-" NUMBER
    ///           | "IF" "(" expression ";" expression ";" expression ")"
    ///           | "TRUE" "(" ")" | "FALSE" "(" ")"
    ///           | "NOT" "(" expression ")"
    ///           | "AND" "(" expression (";" expression)* ")"
    ///           | "OR" "(" expression (";" expression)* ")"
    ///           | IDENTIFIER "(" (expression (";" expression)*)? ")"
    ///           | IDENTIFIER | STRING | NUMBER
    /// ```
    /// The special forms are recognized only when their name is immediately
    /// followed by `(`; on its own, `TRUE` is an ordinary identifier.
    ///
    /// # Errors
    /// `UnexpectedToken` for a token that cannot start a term,
    /// `ExpectedNumber` when `-` is not followed by a number, and `Expected`
    /// for missing separators or parentheses.
    pub fn parse_term(&mut self) -> ParseResult<Node> {
        let Spanned { token, position } = self.next()?;

        match token {
            Token::LParen => {
                let expr = self.descend(Self::parse_expression)?;
                self.expect(&Token::RParen, "')'")?;
                Ok(expr)
            },
            Token::Minus => self.parse_negative_number(),
            Token::Identifier(name) => {
                if self.peek_is(&Token::LParen)? {
                    self.next()?;
                    self.parse_form(name)
                } else {
                    Ok(Node::Lookup { name })
                }
            },
            Token::String(s) => Ok(Node::literal(s)),
            Token::Number(n) => Ok(Node::literal(n)),
            other => Err(SyntaxError::UnexpectedToken { token: other.to_string(),
                                                        position }),
        }
    }

    /// Parses the number after a unary minus.
    fn parse_negative_number(&mut self) -> ParseResult<Node> {
        let number = match self.peek()? {
            Some(Token::Number(n)) => Some(*n),
            _ => None,
        };

        match number {
            Some(n) => {
                self.next()?;
                Ok(Node::literal(-n))
            },
            None => Err(SyntaxError::ExpectedNumber { position: self.position() }),
        }
    }

    /// Parses the remainder of `name(` ... `)`: a special form or a call.
    fn parse_form(&mut self, name: String) -> ParseResult<Node> {
        match name.as_str() {
            "IF" => {
                let condition = self.descend(Self::parse_expression)?;
                self.expect(&Token::Semicolon, "';'")?;
                let then_branch = self.descend(Self::parse_expression)?;
                self.expect(&Token::Semicolon, "';'")?;
                let else_branch = self.descend(Self::parse_expression)?;
                self.expect(&Token::RParen, "')'")?;
                Ok(Node::If { condition:   Box::new(condition),
                              then_branch: Box::new(then_branch),
                              else_branch: Box::new(else_branch), })
            },
            "TRUE" => {
                self.expect(&Token::RParen, "')'")?;
                Ok(Node::literal(true))
            },
            "FALSE" => {
                self.expect(&Token::RParen, "')'")?;
                Ok(Node::literal(false))
            },
            "NOT" => {
                let operand = self.descend(Self::parse_expression)?;
                self.expect(&Token::RParen, "')'")?;
                Ok(Node::Not { operand: Box::new(operand) })
            },
            "AND" => Ok(Node::And { operands: self.parse_arguments()? }),
            "OR" => Ok(Node::Or { operands: self.parse_arguments()? }),
            _ => {
                let arguments = if self.peek_is(&Token::RParen)? {
                    self.next()?;
                    Vec::new()
                } else {
                    self.parse_arguments()?
                };
                Ok(Node::Call { name, arguments })
            },
        }
    }
}
