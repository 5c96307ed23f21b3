use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of expressions until a closing token.
    ///
    /// This utility is shared by call arguments and array literals. The
    /// current token is the opening delimiter; on success the closing token
    /// has been consumed. An immediately encountered closing token produces
    /// an empty list.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)? closing`
    ///
    /// # Errors
    /// Returns a `ParseError` if an element fails to parse or the closing
    /// token is missing.
    pub(in crate::interpreter::parser) fn parse_expression_list(
        &mut self,
        closing: &Token,
    ) -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();

        if self.peek.0 == *closing {
            self.advance();
            return Ok(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek.0 == Token::Comma {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses a function literal's parameter list.
    ///
    /// The list is strict: `IDENT ("," IDENT)*` with no trailing comma. The
    /// current token is the opening `(`; on success the closing `)` has been
    /// consumed.
    ///
    /// # Errors
    /// Returns a `ParseError` if anything other than an identifier appears in
    /// parameter position or the closing `)` is missing.
    pub(in crate::interpreter::parser) fn parse_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek.0 == Token::RParen {
            self.advance();
            return Ok(parameters);
        }

        parameters.push(self.expect_identifier()?);
        while self.peek.0 == Token::Comma {
            self.advance();
            parameters.push(self.expect_identifier()?);
        }

        self.expect_peek(&Token::RParen)?;
        Ok(parameters)
    }
}
