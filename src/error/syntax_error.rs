use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant records `position`, the byte offset into the formula body
/// (the text following the leading `=`) where the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The input text was entirely empty.
    #[error("syntax error near index {position}: empty expression")]
    EmptyExpression {
        /// Always `0`.
        position: usize,
    },
    /// A character that starts no token.
    #[error("syntax error near index {position}: unknown character '{character}'")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A numeric literal that does not denote a finite number.
    #[error("syntax error near index {position}: invalid number '{literal}'")]
    InvalidNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// A string literal missing its closing quote.
    #[error("syntax error near index {position}: unterminated string literal")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        position: usize,
    },
    /// A string literal containing an escape sequence that cannot be decoded.
    #[error("syntax error near index {position}: invalid escape sequence in string literal")]
    InvalidEscape {
        /// Byte offset of the string literal.
        position: usize,
    },
    /// Found a token that cannot start or continue the current rule.
    #[error("syntax error near index {position}: unexpected {token}")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// A specific token was required but something else was found.
    #[error("syntax error near index {position}: expecting {expected}")]
    Expected {
        /// What the grammar required, e.g. `')'`.
        expected: &'static str,
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// A unary minus was not followed by a number literal.
    #[error("syntax error near index {position}: expecting number after '-'")]
    ExpectedNumber {
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// Reached the end of input while a token was still required.
    #[error("syntax error near index {position}: unexpected end of input")]
    UnexpectedEndOfInput {
        /// Length of the formula body.
        position: usize,
    },
    /// Input remained after a complete expression.
    #[error("syntax error near index {position}: expecting EOF, found {token}")]
    TrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the extra token.
        position: usize,
    },
    /// Nesting exceeded the configured depth ceiling.
    #[error("syntax error near index {position}: maximum depth reached")]
    MaximumDepth {
        /// Byte offset at which the ceiling was hit.
        position: usize,
    },
}

impl SyntaxError {
    /// Returns the byte offset at which the error was detected.
    ///
    /// # Example
    /// ```
    /// use celform::Expression;
    ///
    /// let err = Expression::parse("=1 + $").unwrap_err();
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EmptyExpression { position }
            | Self::UnknownCharacter { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::UnterminatedString { position }
            | Self::InvalidEscape { position }
            | Self::UnexpectedToken { position, .. }
            | Self::Expected { position, .. }
            | Self::ExpectedNumber { position }
            | Self::UnexpectedEndOfInput { position }
            | Self::TrailingTokens { position, .. }
            | Self::MaximumDepth { position } => *position,
        }
    }
}
