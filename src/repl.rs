use std::io::{self, BufRead, Write};

use crate::interpreter::{
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::core::Parser,
    value::{core::Value, environment::Environment},
};

/// The prompt printed before every line is read.
pub const PROMPT: &str = ">>";

/// Runs the interactive prompt until end of input.
///
/// Each line is piped through the lexer, parser, and evaluator against a
/// single environment that persists for the whole session, so bindings made
/// on one line are visible on the next. Lines that fail to parse report
/// every recorded syntax error and are not evaluated. Non-null results print
/// their inspect form; runtime errors print with an `ERROR:` prefix and the
/// session continues.
///
/// # Errors
/// Returns an error only when reading from or writing to the terminal
/// fails.
pub fn start() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let env = Environment::new();

    let mut line = String::new();
    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let lexer = Lexer::new(&line);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            writeln!(stdout, "Woops! We ran into some monkey business here!")?;
            writeln!(stdout, " parser errors:")?;
            for error in parser.errors() {
                writeln!(stdout, "\t{error}")?;
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(Value::Null) => {}
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(error) => writeln!(stdout, "ERROR: {error}")?,
        }
    }
}
