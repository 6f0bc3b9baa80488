use std::fmt;

use logos::Logos;

use crate::error::SyntaxError;

/// Represents a lexical token of the formula body.
///
/// `TRUE` and `FALSE` are not tokens of their own: they lex as identifiers and
/// the parser gives them meaning only when an empty argument list follows.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Decimal number literal: digits with at most one `.`, no sign, no
    /// exponent.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Double-quoted string literal, already unescaped.
    #[token("\"", lex_string)]
    String(String),
    /// Identifier: a letter followed by letters, digits or underscores.
    #[regex(r"\p{L}[\p{L}\p{Nd}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `=`
    #[token("=")]
    Equals,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Failures the token rules can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No rule matches the input at this point.
    #[default]
    UnknownCharacter,
    /// A numeric literal that is not a finite number.
    InvalidNumber,
    /// The closing quote of a string literal is missing.
    UnterminatedString,
    /// A string literal contains an escape that cannot be decoded.
    InvalidEscape,
}

/// A token together with the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token.
    pub token:    Token,
    /// Byte offset of the token's first character.
    pub position: usize,
}

/// Pull-based tokenizer over a formula body.
///
/// Tokens are produced one at a time as the parser asks for them, so a
/// malformed or very long input is only scanned as far as parsing gets.
///
/// # Example
/// ```
/// use celform::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("a >= 10");
/// let tokens: Vec<Token> = lexer.by_ref().map(|t| t.unwrap().token).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Identifier("a".into()), Token::GreaterEqual, Token::Number(10.0)]);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// Byte offset just past the last token produced.
    #[must_use]
    pub fn position(&self) -> usize {
        self.inner.span().end
    }

    /// Length of the source in bytes; the position reported at end of input.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.inner.source().len()
    }

    /// Produces the next token, `Ok(None)` at end of input.
    ///
    /// # Errors
    /// Returns a `SyntaxError` positioned at the offending input when no token
    /// can be formed.
    pub fn next_token(&mut self) -> Result<Option<Spanned>, SyntaxError> {
        let Some(result) = self.inner.next() else {
            return Ok(None);
        };
        let position = self.inner.span().start;

        match result {
            Ok(token) => Ok(Some(Spanned { token, position })),
            Err(LexError::UnknownCharacter) => {
                let character = self.inner.slice().chars().next().unwrap_or_default();
                Err(SyntaxError::UnknownCharacter { character, position })
            },
            Err(LexError::InvalidNumber) => {
                Err(SyntaxError::InvalidNumber { literal: self.inner.slice().to_string(),
                                                 position })
            },
            Err(LexError::UnterminatedString) => Err(SyntaxError::UnterminatedString { position }),
            Err(LexError::InvalidEscape) => Err(SyntaxError::InvalidEscape { position }),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Number(n) => return write!(f, "number {n}"),
            Self::String(s) => return write!(f, "string {s:?}"),
            Self::Identifier(name) => return write!(f, "identifier {name}"),
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::Percent => "%",
            Self::Ampersand => "&",
            Self::Equals => "=",
            Self::NotEqual => "<>",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
        };
        write!(f, "'{symbol}'")
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Digit strings too long to be represented (which would parse to infinity)
/// are rejected rather than silently becoming non-finite values.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    match lex.slice().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(LexError::InvalidNumber),
    }
}

/// Scans a string literal after its opening quote and decodes it.
///
/// A backslash always consumes the character after it, so `\"` does not end
/// the literal.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexError> {
    let rest = lex.remainder();
    let mut escaped = false;

    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => {
                lex.bump(i + 1);
                return unescape(&rest[..i]);
            },
            _ => {},
        }
    }

    lex.bump(rest.len());
    Err(LexError::UnterminatedString)
}

/// Decodes the body of a string literal.
///
/// Supports `\" \\ \' \0 \a \b \f \n \r \t \v`, `\xHH`, `\uHHHH`,
/// `\UHHHHHHHH` and `\u{H...}`.
fn unescape(body: &str) -> Result<String, LexError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let decoded = match chars.next().ok_or(LexError::InvalidEscape)? {
            '"' => '"',
            '\\' => '\\',
            '\'' => '\'',
            '0' => '\0',
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0b}',
            'x' => hex_char(&mut chars, 2)?,
            'U' => hex_char(&mut chars, 8)?,
            'u' => {
                if chars.as_str().starts_with('{') {
                    chars.next();
                    braced_char(&mut chars)?
                } else {
                    hex_char(&mut chars, 4)?
                }
            },
            _ => return Err(LexError::InvalidEscape),
        };
        out.push(decoded);
    }

    Ok(out)
}

fn hex_char(chars: &mut std::str::Chars<'_>, digits: usize) -> Result<char, LexError> {
    let mut code = 0u32;
    for _ in 0..digits {
        let digit = chars.next()
                         .and_then(|c| c.to_digit(16))
                         .ok_or(LexError::InvalidEscape)?;
        code = code * 16 + digit;
    }
    char::from_u32(code).ok_or(LexError::InvalidEscape)
}

fn braced_char(chars: &mut std::str::Chars<'_>) -> Result<char, LexError> {
    let mut code = 0u32;
    let mut digits = 0;
    loop {
        match chars.next().ok_or(LexError::InvalidEscape)? {
            '}' if digits > 0 => break,
            c => {
                let digit = c.to_digit(16).ok_or(LexError::InvalidEscape)?;
                digits += 1;
                if digits > 6 {
                    return Err(LexError::InvalidEscape);
                }
                code = code * 16 + digit;
            },
        }
    }
    char::from_u32(code).ok_or(LexError::InvalidEscape)
}
