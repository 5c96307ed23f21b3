use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement is one of:
    /// - a `let` binding,
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// Dispatch is on the current token; anything that is not `let` or
    /// `return` is parsed as an expression statement.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.0 {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a binding of the form `let <identifier> = <expression>` with an
    /// optional trailing semicolon.
    ///
    /// # Errors
    /// Reports an [`UnexpectedToken`](crate::error::ParseError::UnexpectedToken)
    /// error when the identifier or the `=` is missing.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.1;

        let name = self.expect_identifier()?;
        self.expect_peek(&Token::Equals)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek.0 == Token::Semicolon {
            self.advance();
        }

        Ok(Statement::Let { name, value, line })
    }

    /// Parses `return <expression>` with an optional trailing semicolon.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.1;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek.0 == Token::Semicolon {
            self.advance();
        }

        Ok(Statement::Return { value, line })
    }

    /// Parses a bare expression in statement position.
    ///
    /// The trailing semicolon is optional, which is what makes the final
    /// expression of a block its value.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.1;

        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek.0 == Token::Semicolon {
            self.advance();
        }

        Ok(Statement::Expression { expr, line })
    }
}
