use std::fs;

use monkey::{
    error::InterpreterError,
    get_result,
    interpreter::{lexer::Lexer, parser::core::Parser, value::core::Value},
};
use walkdir::WalkDir;

fn eval(src: &str) -> Value {
    match get_result(src, false) {
        Ok(value) => value,
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn eval_error(src: &str) -> String {
    match get_result(src, false) {
        Ok(value) => panic!("Script succeeded with `{value}` but was expected to fail:\n{src}"),
        Err(InterpreterError::Runtime(error)) => error.to_string(),
        Err(InterpreterError::Parse(error)) => panic!("Script failed to parse: {error}\n{src}"),
    }
}

fn parse_to_string(src: &str) -> String {
    let mut parser = Parser::new(Lexer::new(src));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "unexpected parse errors for {src}: {:?}",
        parser.errors()
    );
    program.to_string()
}

fn parse_errors(src: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(src));
    parser.parse_program();
    parser.errors().iter().map(ToString::to_string).collect()
}

#[test]
fn integer_arithmetic() {
    let tests = [
        ("5", 5),
        ("10;", 10),
        ("-5", -5),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ("7 / 2", 3),
        ("-7 / 2", -3),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Integer(expected), "{input}");
    }
}

#[test]
fn boolean_expressions() {
    let tests = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("(1 > 2) == false", true),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Boolean(expected), "{input}");
    }
}

#[test]
fn bang_operator() {
    let tests = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
        ("!0", false),
        ("!\"\"", false),
        ("![]", false),
        ("!(if (false) { 5 })", true),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Boolean(expected), "{input}");
    }
}

#[test]
fn string_expressions() {
    assert_eq!(eval("\"Hello World!\""), Value::from("Hello World!"));
    assert_eq!(
        eval("\"Hello\" + \" \" + \"World!\""),
        Value::from("Hello World!")
    );
    assert_eq!(eval("len(\"Hello\" + \" \" + \"World!\")"), Value::Integer(12));
}

#[test]
fn if_expressions() {
    let tests = [
        ("if (true) { 10 }", Value::Integer(10)),
        ("if (false) { 10 }", Value::Null),
        ("if (1) { 10 }", Value::Integer(10)),
        ("if (1 < 2) { 10 }", Value::Integer(10)),
        ("if (1 > 2) { 10 }", Value::Null),
        ("if (1 > 2) { 10 } else { 20 }", Value::Integer(20)),
        ("if (1 < 2) { 10 } else { 20 }", Value::Integer(10)),
        // 0, "" and [] are truthy; only false and null are not.
        ("if (0) { 10 } else { 20 }", Value::Integer(10)),
        ("if (\"\") { 10 } else { 20 }", Value::Integer(10)),
        ("if ([]) { 10 } else { 20 }", Value::Integer(10)),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), expected, "{input}");
    }
}

#[test]
fn return_statements() {
    let tests = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Integer(expected), "{input}");
    }
}

#[test]
fn return_escaping_through_a_binding_aborts_it() {
    let src = "let f = fn() { let a = if (true) { return 5; }; 10; }; f();";
    assert_eq!(eval(src), Value::Integer(5));
}

#[test]
fn let_statements() {
    let tests = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Integer(expected), "{input}");
    }
}

#[test]
fn let_yields_no_printable_value() {
    assert_eq!(eval("let a = 5;"), Value::Null);
}

#[test]
fn conditional_binding_pipeline() {
    let src = "let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };";
    assert_eq!(eval(src), Value::Integer(10));
}

#[test]
fn function_values_render_their_inspect_form() {
    assert_eq!(eval("fn(x) { x + 2; };").to_string(), "fn(x) {\n(x + 2)\n}");
    assert_eq!(eval("len").to_string(), "builtin function");
}

#[test]
fn function_application() {
    let tests = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(a, b) { a + b; }; add(1, 2);", 3),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
        (
            "let factorial = fn(n) { if (n == 0) { 1 } else { n * factorial(n - 1) } }; factorial(5);",
            120,
        ),
        (
            "let fib = fn(i) { if (i < 2) { 1 } else { fib(i - 1) + fib(i - 2); } }; fib(9)",
            55,
        ),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), Value::Integer(expected), "{input}");
    }
}

#[test]
fn closures() {
    let src = "let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(3);";
    assert_eq!(eval(src), Value::Integer(5));
}

#[test]
fn closures_capture_the_defining_environment() {
    // f sees the global x, not the x of its caller's scope.
    let src = "
        let x = 5;
        let f = fn() { x };
        let g = fn() { let x = 10; f(); };
        g();
    ";
    assert_eq!(eval(src), Value::Integer(5));
}

#[test]
fn recursion_through_the_binding() {
    let src =
        "let counter = fn(x) { if (x > 100) { return true; } else { counter(x + 1); } }; counter(0);";
    assert_eq!(eval(src), Value::Boolean(true));
}

#[test]
fn higher_order_functions() {
    let src = "
        let add = fn(a, b) { a + b };
        let applyFunc = fn(a, b, func) { func(a, b) };
        applyFunc(2, 2, add);
    ";
    assert_eq!(eval(src), Value::Integer(4));
}

#[test]
fn array_literals_and_indexing() {
    let tests = [
        ("[1, 2, 3][0]", Value::Integer(1)),
        ("[1, 2, 3][1 + 1]", Value::Integer(3)),
        ("let i = 0; [1][i];", Value::Integer(1)),
        ("let myArray = [1, 2, 3]; myArray[2];", Value::Integer(3)),
        (
            "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
            Value::Integer(6),
        ),
        ("[1, 2, 3][3]", Value::Null),
        ("[1, 2, 3][-1]", Value::Null),
        ("let a = [1, 2, 3, 4]; a[10];", Value::Null),
        ("[]", Value::from(vec![])),
        (
            "[1, 2 * 2, 3 + 3]",
            Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]),
        ),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), expected, "{input}");
    }
}

#[test]
fn builtin_functions() {
    let tests = [
        ("len(\"\")", Value::Integer(0)),
        ("len(\"four\")", Value::Integer(4)),
        ("len([1, 2, 3])", Value::Integer(3)),
        ("first([1, 2, 3])", Value::Integer(1)),
        ("first([])", Value::Null),
        ("last([1, 2, 3])", Value::Integer(3)),
        ("last([])", Value::Null),
        (
            "rest([1, 2, 3])",
            Value::from(vec![Value::Integer(2), Value::Integer(3)]),
        ),
        (
            "let a = [1, 2, 3, 4]; rest(rest(a));",
            Value::from(vec![Value::Integer(3), Value::Integer(4)]),
        ),
        ("rest([1])", Value::from(vec![])),
        ("rest([])", Value::Null),
        (
            "push([1], 2)",
            Value::from(vec![Value::Integer(1), Value::Integer(2)]),
        ),
        ("let a = [1, 2, 3, 4]; let b = push(a, 5); last(b);", Value::Integer(5)),
        // push returns a fresh array; the original is untouched.
        ("let a = [1]; let b = push(a, 2); len(a);", Value::Integer(1)),
    ];

    for (input, expected) in tests {
        assert_eq!(eval(input), expected, "{input}");
    }
}

#[test]
fn builtins_can_be_shadowed() {
    assert_eq!(eval("let len = 5; len;"), Value::Integer(5));
}

#[test]
fn builtin_errors() {
    let tests = [
        ("len(1)", "argument to `len` not supported, got INTEGER"),
        (
            "len(\"one\", \"two\")",
            "wrong number of arguments. got=2, want=1",
        ),
        ("first(1)", "argument to `first` not supported, got INTEGER"),
        ("last(true)", "argument to `last` not supported, got BOOLEAN"),
        ("rest(\"abc\")", "argument to `rest` not supported, got STRING"),
        ("push(1, 1)", "argument to `push` not supported, got INTEGER"),
        ("push([1])", "wrong number of arguments. got=1, want=2"),
    ];

    for (input, expected) in tests {
        assert_eq!(eval_error(input), expected, "{input}");
    }
}

#[test]
fn error_handling() {
    let tests = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true;", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar;", "identifier not found: foobar"),
        ("\"Hello\" - \"World\"", "unknown operator: STRING - STRING"),
        ("\"a\" == \"a\"", "unknown operator: STRING == STRING"),
        ("5(1);", "not a function: INTEGER"),
        (
            "let add = fn(a, b) { a + b; }; add(1);",
            "wrong number of arguments. got=1, want=2",
        ),
        ("5 / 0;", "division by zero"),
        ("9223372036854775807 + 1;", "integer overflow"),
        ("5[0];", "index operator not supported: INTEGER"),
        ("[1, 2][true];", "index operator not supported: ARRAY"),
    ];

    for (input, expected) in tests {
        assert_eq!(eval_error(input), expected, "{input}");
    }
}

#[test]
fn errors_short_circuit_later_bindings() {
    assert_eq!(
        eval_error("let a = 5 + true; let b = 10; b;"),
        "type mismatch: INTEGER + BOOLEAN"
    );
}

#[test]
fn operator_precedence_rendering() {
    let tests = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
        (
            "a * [1, 2, 3, 4][b * c] * d",
            "((a * ([1, 2, 3, 4][(b * c)])) * d)",
        ),
        (
            "add(a * b[2], b[1], 2 * [1, 2][1])",
            "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
        ),
    ];

    for (input, expected) in tests {
        assert_eq!(parse_to_string(input), expected, "{input}");
    }
}

#[test]
fn statement_rendering() {
    assert_eq!(parse_to_string("let x = 5;"), "let x = 5;");
    assert_eq!(parse_to_string("return 2 * 2;"), "return (2 * 2);");
    assert_eq!(parse_to_string("fn(x, y) { x + y; }"), "fn(x,y{(x + y)}");
    assert_eq!(
        parse_to_string("if (x < y) { x } else { y }"),
        "if (x < y){x}else {y}"
    );
    assert_eq!(parse_to_string("[1, 2][0]"), "([1, 2][0])");
}

#[test]
fn rendering_is_a_fixed_point_for_operator_forms() {
    let inputs = ["-a * b", "a + b * c + d / e - f", "!(true == true)", "3 > 5 == false"];

    for input in inputs {
        let rendered = parse_to_string(input);
        assert_eq!(parse_to_string(&rendered), rendered, "{input}");
    }
}

#[test]
fn program_token_literal() {
    let mut parser = Parser::new(Lexer::new("let x = 5;"));
    let program = parser.parse_program();
    assert_eq!(program.token_literal(), "let");

    let mut parser = Parser::new(Lexer::new(""));
    let program = parser.parse_program();
    assert_eq!(program.token_literal(), "");
}

#[test]
fn parser_reports_every_error_it_can_reach() {
    let errors = parse_errors("let x 5; let = 10;");
    assert_eq!(
        errors,
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
        ]
    );
}

#[test]
fn parser_rejects_malformed_parameter_lists() {
    // Recovery keeps scanning after the bad parameter, so later orphaned
    // tokens produce follow-on errors; the first message is the real one.
    let errors = parse_errors("fn(x, 1) { x }");
    assert_eq!(errors[0], "expected next token to be IDENT, got INT instead");

    let errors = parse_errors("fn(x,) { x }");
    assert_eq!(errors[0], "expected next token to be IDENT, got ) instead");
}

#[test]
fn parser_reports_illegal_tokens() {
    let errors = parse_errors("@");
    assert_eq!(errors, vec!["no prefix parse function for ILLEGAL found"]);
}

#[test]
fn parser_reports_missing_delimiters() {
    let errors = parse_errors("(1 + 2");
    assert_eq!(errors, vec!["expected next token to be ), got EOF instead"]);

    let errors = parse_errors("[1, 2");
    assert_eq!(errors, vec!["expected next token to be ], got EOF instead"]);
}

#[test]
fn comments_are_skipped() {
    let src = "
        // doubles its argument
        let double = fn(x) { x * 2 }; // trailing note
        double(21)
    ";
    assert_eq!(eval(src), Value::Integer(42));
}

#[test]
fn parse_errors_carry_their_line() {
    let mut parser = Parser::new(Lexer::new("let a = 1;\nlet b 2;"));
    parser.parse_program();

    let errors = parser.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line(), 2);
}

#[test]
fn runtime_errors_carry_their_line() {
    let error = match get_result("let a = 1;\n\na + true;", false) {
        Err(InterpreterError::Runtime(error)) => error,
        other => panic!("expected a runtime error, got {other:?}"),
    };
    assert_eq!(error.line(), 3);
}

#[test]
fn example_scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts")
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "monkey"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = get_result(&source, false) {
            panic!("Example script {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "No example scripts found in tests/scripts");
}
