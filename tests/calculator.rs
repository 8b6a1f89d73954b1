use scical::{
    AngleMode, CalcError, ErrorKind,
    error::{DomainError, EvalError, LexError, ParseError},
    evaluate,
    interpreter::{environment::function::Arity, lexer::Token, parser::core::to_rpn},
    session::{HISTORY_LIMIT, Session},
};

fn eval(src: &str) -> Result<f64, CalcError> {
    evaluate(src, AngleMode::Radians, 0.0)
}

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(value) => assert!((value - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                             "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match eval(src) {
        Ok(value) => panic!("{src} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src} failed with the wrong error: {e}"),
    }
}

#[test]
fn operator_precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("2 * 3 ^ 2", 18.0);
    assert_value("10 % 4 + 1", 3.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("2^-1", 0.5);
}

#[test]
fn unary_minus() {
    assert_value("-3+5", 2.0);
    assert_value("3*-2", -6.0);
    assert_value("3--2", 5.0);
    assert_value("-(2+3)", -5.0);
    assert_value("max(-1, -2)", -1.0);
    // Negation binds tighter than `^`.
    assert_value("-2^2", 4.0);
}

#[test]
fn postfix_factorial() {
    assert_value("3!+1", 7.0);
    assert_value("5!", 120.0);
    assert_value("0!", 1.0);
    assert_value("3!!", 720.0);
    assert_value("-3!", -6.0);
    assert_value("2^3!", 64.0);
}

#[test]
fn factorial_domain_errors() {
    for src in ["(-1)!", "3.5!", "200!", "171!"] {
        assert_failure(src, ErrorKind::Domain);
    }

    assert_eq!(eval("(-1)!"), Err(DomainError::FactorialNegative { value: -1.0 }.into()));
    assert_eq!(eval("3.5!"), Err(DomainError::FactorialNonInteger { value: 3.5 }.into()));
    assert_eq!(eval("200!"), Err(DomainError::FactorialTooLarge { value: 200.0 }.into()));
    assert!(eval("170!").is_ok());

    for src in ["(0/0)!", "(1/0)!", "(-1/0)!"] {
        assert!(matches!(eval(src),
                         Err(CalcError::Domain(DomainError::FactorialNonFinite { .. }))),
                "{src} should fail on a non-finite factorial argument");
    }
}

#[test]
fn numeric_literals() {
    assert_value("2e3", 2000.0);
    assert_value("1.5E-3", 0.0015);
    assert_value("4e+2", 400.0);
    assert_value(".5 + 5.", 5.5);
    assert_value("  1 +\t2\n", 3.0);
    // Out-of-range literals lex fine and become infinite.
    assert_eq!(eval("1e999"), Err(EvalError::NonFiniteResult { value: f64::INFINITY }.into()));
}

#[test]
fn dangling_exponent_is_an_identifier() {
    // `2e` is the number 2 followed by the constant e.
    assert_failure("2e", ErrorKind::Eval);
    assert_value("2e+1", 20.0);
    assert_eq!(eval("2e+"), Err(ParseError::MissingOperand { symbol: '+' }.into()));
}

#[test]
fn percent_literal_and_modulo() {
    assert_value("50%", 0.5);
    assert_value("50%+1", 1.5);
    assert_value("200 * 15%", 30.0);
    assert_value("7 % 4", 3.0);
    assert_value("-7 % 4", -3.0);
    // `%` glued to the digits is a percent sign, so this is two numbers.
    assert_failure("10%3", ErrorKind::Eval);
}

#[test]
fn constants_and_case_folding() {
    assert_value("pi", std::f64::consts::PI);
    assert_value("PI * 2", std::f64::consts::TAU);
    assert_value("E", std::f64::consts::E);
    assert_value("SQRT(16)", 4.0);
}

#[test]
fn builtin_functions() {
    assert_value("sqrt(16) + cbrt(27)", 7.0);
    assert_value("abs(-3) * floor(2.7) + ceil(0.2)", 7.0);
    assert_value("ln(e)", 1.0);
    assert_value("log(1000)", 3.0);
    assert_value("exp(0)", 1.0);
    assert_value("pow(2, 10)", 1024.0);
    assert_value("percent(50)", 0.5);
    assert_value("round(2.5)", 3.0);
    assert_value("round(-2.5)", -2.0);
    assert_value("max(min(3, 4), sqrt(16))", 4.0);
}

#[test]
fn min_and_max_are_variadic() {
    assert_value("min(4, 2, 8)", 2.0);
    assert_value("max(4, 2, 8, 16, 1)", 16.0);
    assert_value("max(7)", 7.0);
    assert_failure("min()", ErrorKind::Eval);
}

#[test]
fn rand_is_in_unit_interval() {
    for _ in 0..100 {
        let value = eval("rand()").unwrap();
        assert!((0.0..1.0).contains(&value));
    }
    assert_failure("rand(1)", ErrorKind::Eval);
}

#[test]
fn angle_modes() {
    let sine = evaluate("sin(90)", AngleMode::Degrees, 0.0).unwrap();
    assert!((sine - 1.0).abs() < 1e-12);

    assert_eq!(evaluate("sin(0)", AngleMode::Radians, 0.0).unwrap(), 0.0);

    let angle = evaluate("asin(1)", AngleMode::Degrees, 0.0).unwrap();
    assert!((angle - 90.0).abs() < 1e-9);

    let angle = evaluate("atan(1)", AngleMode::Radians, 0.0).unwrap();
    assert!((angle - std::f64::consts::FRAC_PI_4).abs() < 1e-12);

    let cosine = evaluate("cos(60)", AngleMode::Degrees, 0.0).unwrap();
    assert!((cosine - 0.5).abs() < 1e-12);
}

#[test]
fn previous_answer() {
    assert_eq!(evaluate("ans+1", AngleMode::Radians, 5.0).unwrap(), 6.0);
    assert_eq!(evaluate("ans * ans", AngleMode::Radians, -3.0).unwrap(), 9.0);
    assert_eq!(evaluate("ANS", AngleMode::Radians, 2.5).unwrap(), 2.5);
}

#[test]
fn evaluation_is_repeatable() {
    let first = eval("sqrt(2) * 3^0.5 - 7 / 3").unwrap();
    for _ in 0..10 {
        assert_eq!(eval("sqrt(2) * 3^0.5 - 7 / 3").unwrap(), first);
    }
}

#[test]
fn lex_errors_name_the_character() {
    assert_eq!(eval("2 $ 3"),
               Err(LexError::UnexpectedCharacter { character: '$',
                                                   position:  2, }.into()));
    assert_failure("π", ErrorKind::Lex);
    assert_failure(".", ErrorKind::Lex);

    let message = eval("1 + #").unwrap_err().to_string();
    assert!(message.contains('#'), "{message}");
}

#[test]
fn parse_errors() {
    assert_eq!(eval("(2+3"), Err(ParseError::MismatchedParentheses.into()));
    assert_eq!(eval("2+3)"), Err(ParseError::MismatchedParentheses.into()));
    assert_eq!(eval("sqrt(4"), Err(ParseError::MismatchedParentheses.into()));
    assert_eq!(eval("1, 2"), Err(ParseError::MisplacedComma.into()));
    assert_eq!(eval("max(1,,2)"),
               Err(ParseError::EmptyArgument { name: "max".to_string() }.into()));
    assert_failure("max(1,)", ErrorKind::Parse);
    assert_failure("max(,1)", ErrorKind::Parse);
}

#[test]
fn unknown_operator_symbol_is_a_parse_error() {
    let tokens = [Token::Number(1.0), Token::Operator('&'), Token::Number(2.0)];
    assert_eq!(to_rpn(&tokens), Err(ParseError::UnknownOperator { symbol: '&' }));

    let tokens = [Token::Number(1.0), Token::Postfix('?')];
    assert_eq!(to_rpn(&tokens), Err(ParseError::UnknownOperator { symbol: '?' }));
}

#[test]
fn eval_errors() {
    assert_eq!(eval("1/0"), Err(EvalError::NonFiniteResult { value: f64::INFINITY }.into()));
    assert_failure("sqrt(-1)", ErrorKind::Eval);
    assert_failure("0/0", ErrorKind::Eval);
    // Only the final value has to be finite.
    assert_value("1/(1/0)", 0.0);

    assert_eq!(eval("foo(1)"), Err(EvalError::UnknownFunction { name: "foo".to_string() }.into()));
    assert_eq!(eval("x + 1"), Err(EvalError::UnknownIdentifier { name: "x".to_string() }.into()));
    assert_failure("pow(2)", ErrorKind::Eval);
    assert_failure("sin(1, 2)", ErrorKind::Eval);
    assert_eq!(eval("pow(2)"),
               Err(EvalError::ArgumentCountMismatch { name:     "pow".to_string(),
                                                      expected: Arity::Exact(2),
                                                      found:    1, }.into()));
    assert_eq!(eval("max()"),
               Err(EvalError::ArgumentCountMismatch { name:     "max".to_string(),
                                                      expected: Arity::AtLeast(1),
                                                      found:    0, }.into()));
}

#[test]
fn malformed_expressions() {
    assert_eq!(eval(""), Err(EvalError::MalformedExpression { remaining: 0 }.into()));
    assert_eq!(eval("2(3)"), Err(EvalError::MalformedExpression { remaining: 2 }.into()));
    assert_failure("()", ErrorKind::Eval);

    // A comma is only valid directly inside a call.
    assert_eq!(eval("(1, 2)"), Err(ParseError::MisplacedComma.into()));
    assert_eq!(eval("(2,3)+"), Err(ParseError::MisplacedComma.into()));
    assert_eq!(eval("max(1,(2,3))"), Err(ParseError::MisplacedComma.into()));

    // Operators need an operand on each side.
    assert_eq!(eval("3+"), Err(ParseError::MissingOperand { symbol: '+' }.into()));
    assert_eq!(eval("3+)"), Err(ParseError::MissingOperand { symbol: '+' }.into()));
    assert_eq!(eval("max(1-,2)"), Err(ParseError::MissingOperand { symbol: '-' }.into()));
    assert_eq!(eval("(-)"), Err(ParseError::MissingOperand { symbol: '-' }.into()));
    assert_eq!(eval("+3"), Err(ParseError::MissingOperand { symbol: '+' }.into()));
    assert_eq!(eval("3+*4"), Err(ParseError::MissingOperand { symbol: '*' }.into()));
    assert_eq!(eval("2 3+!"), Err(ParseError::MissingOperand { symbol: '!' }.into()));
    assert_failure("*", ErrorKind::Parse);
}

#[test]
fn session_commits_answers_and_history() {
    let mut session = Session::new();

    assert_eq!(session.evaluate("2 + 3").unwrap(), 5.0);
    assert_eq!(session.evaluate("ans * 2").unwrap(), 10.0);
    assert_eq!(session.answer(), 10.0);

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].expression, "ans * 2");
    assert_eq!(history[0].result, 10.0);
    assert_eq!(history[1].expression, "2 + 3");

    session.clear_history();
    assert!(session.history().is_empty());
}

#[test]
fn session_failures_change_nothing() {
    let mut session = Session::new();
    session.evaluate("4").unwrap();

    assert!(session.evaluate("4 / 0").is_err());
    assert_eq!(session.answer(), 4.0);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn session_preview_does_not_commit() {
    let mut session = Session::new();
    session.set_answer(3.0);

    assert_eq!(session.preview("ans + 1").unwrap(), 4.0);
    assert_eq!(session.answer(), 3.0);
    assert!(session.history().is_empty());
}

#[test]
fn session_history_is_bounded() {
    let mut session = Session::new();
    for i in 0..HISTORY_LIMIT + 25 {
        session.evaluate(&i.to_string()).unwrap();
    }

    assert_eq!(session.history().len(), HISTORY_LIMIT);
    assert_eq!(session.history()[0].expression, (HISTORY_LIMIT + 24).to_string());
}

#[test]
fn session_angle_mode_and_pi_glyph() {
    let mut session = Session::new();
    session.set_angle_mode(AngleMode::Degrees);

    let value = session.evaluate("cos(180)").unwrap();
    assert!((value + 1.0).abs() < 1e-12);

    let value = session.evaluate("2π").unwrap_err();
    assert_eq!(value.kind(), ErrorKind::Eval);

    let value = session.evaluate("2*π").unwrap();
    assert!((value - std::f64::consts::TAU).abs() < 1e-12);
}

#[test]
fn session_memory_register() {
    let mut session = Session::new();
    assert_eq!(session.memory_recall(), 0.0);

    session.memory_store(10.0);
    session.memory_add(5.0);
    session.memory_subtract(2.0);
    assert_eq!(session.memory_recall(), 13.0);

    session.memory_clear();
    assert_eq!(session.memory_recall(), 0.0);
}

#[test]
fn angle_mode_names() {
    assert_eq!("deg".parse::<AngleMode>(), Ok(AngleMode::Degrees));
    assert_eq!("Radians".parse::<AngleMode>(), Ok(AngleMode::Radians));
    assert!("grad".parse::<AngleMode>().is_err());
    assert_eq!(AngleMode::default(), AngleMode::Radians);
    assert_eq!(AngleMode::Degrees.to_string(), "DEG");
}
