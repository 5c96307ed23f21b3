use crate::{
    ast::Block,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a brace-delimited block of statements.
    ///
    /// The current token must be the opening `{`. Statements are accumulated
    /// until the matching `}` or end of input; the first malformed statement
    /// aborts the block.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        let line = self.current.1;
        self.advance();

        let mut statements = Vec::new();
        while self.current.0 != Token::RBrace && self.current.0 != Token::Eof {
            statements.push(self.parse_statement()?);
            self.advance();
        }

        Ok(Block { statements, line })
    }
}
