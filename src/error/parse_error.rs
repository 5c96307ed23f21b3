#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
///
/// The parser records these in order instead of aborting, so a single pass
/// can report every syntax problem it finds. The rendered messages are part
/// of the language's observable surface and must stay stable.
pub enum ParseError {
    /// The parser expected a specific token but found another one.
    UnexpectedToken {
        /// Kind name of the token that was expected.
        wanted: &'static str,
        /// Kind name of the token that was actually found.
        got: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// No rule can start an expression with the current token.
    NoPrefixParseRule {
        /// Kind name of the offending token.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The source line the error was recorded on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. } | Self::NoPrefixParseRule { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { wanted, got, .. } => {
                write!(f, "expected next token to be {wanted}, got {got} instead")
            }
            Self::NoPrefixParseRule { kind, .. } => {
                write!(f, "no prefix parse function for {kind} found")
            }
        }
    }
}

impl std::error::Error for ParseError {}
