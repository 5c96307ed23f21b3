use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the prefix form the current token begins.
    ///
    /// This is the dispatch table of the Pratt parser's prefix position:
    /// literals and identifiers produce leaf nodes directly; `-`, `!`, `(`,
    /// `if`, `fn`, and `[` hand off to their dedicated rules. A token with no
    /// prefix rule is a syntax error.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let line = self.current.1;
        match &self.current.0 {
            Token::Identifier(name) => Ok(Expr::Variable {
                name: name.clone(),
                line,
            }),
            Token::Integer(value) => Ok(Expr::Literal {
                value: (*value).into(),
                line,
            }),
            Token::Str(value) => Ok(Expr::Literal {
                value: value.as_str().into(),
                line,
            }),
            Token::True => Ok(Expr::Literal {
                value: true.into(),
                line,
            }),
            Token::False => Ok(Expr::Literal {
                value: false.into(),
                line,
            }),
            Token::Minus => self.parse_unary_op(UnaryOperator::Negate),
            Token::Bang => self.parse_unary_op(UnaryOperator::Not),
            Token::LParen => self.parse_grouped(),
            Token::If => self.parse_if(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => self.parse_array_literal(),
            token => Err(ParseError::NoPrefixParseRule {
                kind: token.kind(),
                line,
            }),
        }
    }

    /// Parses a unary operation; the operand binds at prefix precedence, so
    /// `-a * b` parses as `((-a) * b)`.
    fn parse_unary_op(&mut self, op: UnaryOperator) -> ParseResult<Expr> {
        let line = self.current.1;
        self.advance();

        let expr = self.parse_expression(Precedence::Prefix)?;
        Ok(Expr::UnaryOp {
            op,
            expr: Box::new(expr),
            line,
        })
    }

    /// Parses a parenthesised expression. Grouping produces no node of its
    /// own; the parentheses only reset the binding power.
    fn parse_grouped(&mut self) -> ParseResult<Expr> {
        self.advance();

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        Ok(expr)
    }

    /// Parses a function literal of the form `fn(<params>) { <body> }`.
    ///
    /// The parameter list is strict: identifiers separated by commas, with no
    /// trailing comma.
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        let line = self.current.1;

        self.expect_peek(&Token::LParen)?;
        let parameters = self.parse_parameters()?;

        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::FunctionLiteral {
            parameters,
            body,
            line,
        })
    }

    /// Parses an array literal. An empty `[]` is allowed.
    ///
    /// Grammar: `array := "[" (expression ("," expression)*)? "]"`
    fn parse_array_literal(&mut self) -> ParseResult<Expr> {
        let line = self.current.1;

        let elements = self.parse_expression_list(&Token::RBracket)?;
        Ok(Expr::ArrayLiteral { elements, line })
    }
}
