use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Identifier tokens; binding or function names such as `x` or `adder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`. The quotes are stripped and
    /// no escape sequences are processed.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `return`
    #[token("return")]
    Return,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// Newlines advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// A byte sequence no rule recognizes, carried verbatim. The lexer never
    /// fails; malformed input surfaces as this token and is reported by the
    /// parser.
    Illegal(String),
    /// End of input. Produced forever once the source is exhausted.
    Eof,
}

impl Token {
    /// Returns the stable kind name used in parser diagnostics.
    ///
    /// Operators and delimiters report their glyph, keywords their uppercase
    /// name, and the literal-carrying kinds their class (`IDENT`, `INT`,
    /// `STRING`).
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::RParen.kind(), ")");
    /// assert_eq!(Token::Identifier("add".to_string()).kind(), "IDENT");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "IDENT",
            Self::Integer(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Return => "RETURN",
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            // Skip rules; never produced by the lexer.
            Self::Comment | Self::NewLine | Self::Ignored => "ILLEGAL",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the decimal spelling does not fit an `i64`, which
/// surfaces as an [`Token::Illegal`] token.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal slice.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// A pull-driven tokenizer over a source string.
///
/// `Lexer` wraps the generated table-driven scanner behind the
/// one-token-at-a-time interface the parser consumes. Each produced token is
/// paired with the 1-based line it started on.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`, positioned at its first token.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }),
        }
    }

    /// Produces the next token and the line it started on.
    ///
    /// Unrecognized input becomes [`Token::Illegal`]; once the source is
    /// exhausted every further call returns [`Token::Eof`].
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("let five = 5;");
    ///
    /// assert_eq!(lexer.next_token().0, Token::Let);
    /// assert_eq!(lexer.next_token().0, Token::Identifier("five".to_string()));
    /// assert_eq!(lexer.next_token().0, Token::Equals);
    /// assert_eq!(lexer.next_token().0, Token::Integer(5));
    /// assert_eq!(lexer.next_token().0, Token::Semicolon);
    /// assert_eq!(lexer.next_token().0, Token::Eof);
    /// assert_eq!(lexer.next_token().0, Token::Eof);
    /// ```
    pub fn next_token(&mut self) -> (Token, usize) {
        match self.inner.next() {
            Some(Ok(token)) => (token, self.inner.extras.line),
            Some(Err(())) => (
                Token::Illegal(self.inner.slice().to_string()),
                self.inner.extras.line,
            ),
            None => (Token::Eof, self.inner.extras.line),
        }
    }
}
