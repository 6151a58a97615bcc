use tacgen::{ErrorKind, Name, TacGenerator, compile, to_postfix};

fn lines(expression: &str) -> Vec<String> {
    compile(expression).unwrap().lines()
}

fn kind(expression: &str) -> ErrorKind {
    compile(expression).unwrap_err().kind()
}

#[test]
fn precedence() {
    assert_eq!(to_postfix("a + b * c").unwrap().to_string(), "a b c * +");
    let program = compile("a + b * c").unwrap();
    assert_eq!(program.lines(), vec!["t1 = b * c", "t2 = a + t1"]);
    assert_eq!(program.result(), &Name::Temp(2));
}

#[test]
fn left_associative_tie_break() {
    assert_eq!(to_postfix("a - b - c").unwrap().to_string(), "a b - c -");
    assert_eq!(lines("a - b - c"), vec!["t1 = a - b", "t2 = t1 - c"]);
    assert_eq!(lines("a / b / c"), vec!["t1 = a / b", "t2 = t1 / c"]);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(to_postfix("( a + b ) * c").unwrap().to_string(), "a b + c *");
    assert_eq!(lines("( a + b ) * c"), vec!["t1 = a + b", "t2 = t1 * c"]);
}

#[test]
fn assignment_resolved_last() {
    assert_eq!(to_postfix("x = a + b").unwrap().to_string(), "x a b + =");
    let program = compile("x = a + b").unwrap();
    assert_eq!(program.lines(), vec!["t1 = a + b", "x = t1"]);
    assert_eq!(program.result(), &Name::Var("x".to_string()));
}

#[test]
fn plain_copy() {
    let program = compile("x = y").unwrap();
    assert_eq!(program.listing(), "x = y");
}

#[test]
fn mismatched_parentheses() {
    assert_eq!(kind("( a + b"), ErrorKind::MismatchedParentheses);
    assert_eq!(kind("a + b )"), ErrorKind::MismatchedParentheses);
    assert_eq!(kind(") a ("), ErrorKind::MismatchedParentheses);
}

#[test]
fn insufficient_operands() {
    assert_eq!(kind("+ a"), ErrorKind::InsufficientOperands);
    assert_eq!(kind("a +"), ErrorKind::InsufficientOperands);
    assert_eq!(kind("x ="), ErrorKind::InsufficientOperands);
}

#[test]
fn unknown_operator() {
    assert_eq!(kind("a % b"), ErrorKind::UnknownOperator);
    assert_eq!(kind("a == b"), ErrorKind::UnknownOperator);
    assert_eq!(kind("a+b"), ErrorKind::UnknownOperator);
    assert_eq!(kind("1.5 * x"), ErrorKind::UnknownOperator);
}

#[test]
fn unresolved_expression() {
    assert_eq!(kind("a b"), ErrorKind::UnresolvedExpression);
    assert_eq!(kind("( )"), ErrorKind::UnresolvedExpression);
}

#[test]
fn empty_input() {
    assert_eq!(kind(""), ErrorKind::EmptyInput);
    assert_eq!(kind("   \t  "), ErrorKind::EmptyInput);
}

#[test]
fn temporaries_strictly_increasing() {
    let program = compile("r = a * b + c / d - ( e - f ) * g").unwrap();
    let temps: Vec<u32> = program
        .instructions()
        .iter()
        .filter_map(|instruction| match instruction.destination() {
            Name::Temp(index) => Some(*index),
            Name::Var(_) => None,
        })
        .collect();
    assert_eq!(temps, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn one_instruction_per_operator() {
    for expression in [
        "a",
        "a + b",
        "x = a * ( b - c ) / d",
        "x = y = z",
        "a - b + c * d / e",
        "( ( a ) ) * ( b )",
    ] {
        let operators = expression
            .split_whitespace()
            .filter(|token| matches!(*token, "+" | "-" | "*" | "/" | "="))
            .count();
        assert_eq!(
            compile(expression).unwrap().instructions().len(),
            operators,
            "{expression}"
        );
    }
}

#[test]
fn session_numbering() {
    let mut generator = TacGenerator::new();
    generator.generate("a = b + c").unwrap();
    generator.generate("d = a * e").unwrap();
    assert_eq!(
        generator.listing(),
        "t1 = b + c\na = t1\nt2 = a * e\nd = t2"
    );

    let mut fresh = TacGenerator::new();
    fresh.generate("d = a * e").unwrap();
    assert_eq!(fresh.listing(), "t1 = a * e\nd = t1");
}

#[test]
fn temporaries_never_shadow_source_names() {
    let program = compile("x = t1 * ( a + b )").unwrap();
    assert_eq!(program.lines(), vec!["t2 = a + b", "t3 = t1 * t2", "x = t3"]);
}
