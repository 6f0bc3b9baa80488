use crate::{
    ast::Node,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a `;`-separated list of one or more expressions and the closing
    /// `)`.
    ///
    /// This is shared by function calls with arguments and by the variadic
    /// special forms `AND` and `OR`.
    ///
    /// Grammar: `arguments := expression (";" expression)* ")"`
    ///
    /// # Errors
    /// Returns a `SyntaxError` if an argument fails to parse or the list is
    /// not closed by `)`.
    pub fn parse_arguments(&mut self) -> ParseResult<Vec<Node>> {
        let mut items = vec![self.descend(Self::parse_expression)?];

        while self.peek_is(&Token::Semicolon)? {
            self.next()?;
            items.push(self.descend(Self::parse_expression)?);
        }

        self.expect(&Token::RParen, "')'")?;
        Ok(items)
    }
}
