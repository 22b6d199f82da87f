use crate::ast::{Node, Syntax};
use crate::error::{ErrorCategory, SyntaxErrorType, SyntaxResult};
use crate::parse::assignable::to_assignable;
use crate::parse::lval::{check_lval, ClashMap};
use crate::parse::parser::{FunctionState, Parser};
use crate::util::test::*;

const CONTEXT: Option<&'static str> = Some("variable declaration");

fn pattern(code: &str) -> Node {
    to_assignable(expr(code), false, None).unwrap()
}

fn check_with(
    parser: &Parser,
    node: &Node,
    is_binding: bool,
    clashes: Option<&mut ClashMap>,
) -> SyntaxResult<()> {
    check_lval(parser, node, is_binding, clashes, CONTEXT)
}

fn check(code: &str, is_binding: bool) -> SyntaxResult<()> {
    check_with(&p(""), &pattern(code), is_binding, None)
}

fn wrap(stx: Syntax) -> Node {
    Node::new(r("x"), stx)
}

#[test]
fn test_check_lval_records_bound_names() {
    let mut clashes = ClashMap::new();
    check_with(
        &p(""),
        &pattern("[a, {b, c: d}, ...e]"),
        true,
        Some(&mut clashes),
    )
    .unwrap();
    for name in ["a", "b", "d", "e"] {
        assert!(clashes.contains(name), "{}", name);
    }
    // Property keys are not bindings.
    assert!(!clashes.contains("c"));
}

#[test]
fn test_check_lval_skips_defaults() {
    let mut clashes = ClashMap::new();
    check_with(
        &p(""),
        &pattern("[a = b, {c: e = f}]"),
        true,
        Some(&mut clashes),
    )
    .unwrap();
    assert!(clashes.contains("a"));
    assert!(clashes.contains("e"));
    assert!(!clashes.contains("b"));
    assert!(!clashes.contains("f"));
}

#[test]
fn test_check_lval_duplicate_binding() {
    let mut clashes = ClashMap::new();
    let err = check_with(
        &p(""),
        &pattern("[a, {b: a}]"),
        true,
        Some(&mut clashes),
    )
    .unwrap_err();
    assert_eq!(err.typ(), SyntaxErrorType::DuplicateBinding);
    assert_eq!(err.position(), 8);
    assert_eq!(err.typ().to_string(), "Argument name clash");

    // The map outlives a single pattern, so names clash across list items.
    let mut clashes = ClashMap::new();
    let parser = p("");
    check_with(&parser, &pattern("a"), true, Some(&mut clashes)).unwrap();
    assert_eq!(
        check_with(&parser, &pattern("[a]"), true, Some(&mut clashes))
            .unwrap_err()
            .typ(),
        SyntaxErrorType::DuplicateBinding
    );

    // Without a map repeated names are fine.
    check("[a, a]", true).unwrap();
}

#[test]
fn test_check_lval_member_expression() {
    check("a.b", false).unwrap();
    check("[a.b, {c: d[0]}]", false).unwrap();
    let err = check_with(&p(""), &expr("a.b"), true, None).unwrap_err();
    assert_eq!(
        err.typ(),
        SyntaxErrorType::BindingMemberExpression { context: CONTEXT }
    );
    assert_eq!(
        err.typ().to_string(),
        "Binding member expression in variable declaration"
    );
    let err = check_with(&p(""), &pattern("[a.b]"), true, None).unwrap_err();
    assert_eq!(
        err.typ(),
        SyntaxErrorType::BindingMemberExpression {
            context: Some("array destructuring pattern"),
        }
    );
    assert_eq!(err.position(), 1);
}

#[test]
fn test_check_lval_invalid_target() {
    let err = check_with(&p(""), &expr("a + b"), false, None).unwrap_err();
    assert_eq!(
        err.typ(),
        SyntaxErrorType::InvalidLeftHandSide {
            binding: false,
            context: CONTEXT,
        }
    );
    let err = check_with(&p(""), &expr("a + b"), true, None).unwrap_err();
    assert_eq!(
        err.typ().to_string(),
        "Binding invalid left-hand side in variable declaration"
    );
}

#[test]
fn test_check_lval_nested_context() {
    let cases = [
        (
            Syntax::ArrayPattern {
                elements: vec![None, Some(expr("1"))],
            },
            "array destructuring pattern",
        ),
        (
            Syntax::ObjectPattern {
                properties: vec![wrap(Syntax::ObjectProperty {
                    key: Box::new(expr("a")),
                    computed: false,
                    shorthand: false,
                    value: Box::new(expr("1")),
                })],
            },
            "object destructuring pattern",
        ),
        (
            Syntax::AssignmentPattern {
                left: Box::new(expr("1")),
                right: Box::new(expr("2")),
            },
            "assignment pattern",
        ),
        (
            Syntax::RestElement {
                argument: Box::new(expr("1")),
            },
            "rest element",
        ),
    ];
    for (stx, context) in cases {
        let err = check_with(&p(""), &wrap(stx), true, None).unwrap_err();
        assert_eq!(
            err.typ(),
            SyntaxErrorType::InvalidLeftHandSide {
                binding: true,
                context: Some(context),
            }
        );
    }
}

#[test]
fn test_check_lval_private_name() {
    let mut clashes = ClashMap::new();
    let node = wrap(Syntax::PrivateName { name: r("x") });
    check_with(&p(""), &node, true, Some(&mut clashes)).unwrap();
    assert!(clashes.contains("x"));
}

#[test]
fn test_check_lval_reserved_words() {
    check("eval", true).unwrap();
    check("[arguments]", true).unwrap();
    let strict_parser = p_with("", strict());
    assert_eq!(
        check_with(&strict_parser, &pattern("eval"), true, None)
            .unwrap_err()
            .typ(),
        SyntaxErrorType::StrictEvalOrArgumentsBinding
    );
    // Reserved-word checks apply to assignment targets too.
    assert_eq!(
        check_with(&strict_parser, &pattern("{a: arguments}"), false, None)
            .unwrap_err()
            .typ(),
        SyntaxErrorType::StrictEvalOrArgumentsBinding
    );
    assert_eq!(
        check_with(&strict_parser, &pattern("implements"), true, None)
            .unwrap_err()
            .typ(),
        SyntaxErrorType::ReservedWordBinding
    );

    let mut generator = p("");
    generator.replace_state(FunctionState {
        strict: false,
        in_generator: true,
        in_function: true,
    });
    assert_eq!(
        check_with(&generator, &pattern("yield"), true, None)
            .unwrap_err()
            .typ(),
        SyntaxErrorType::ReservedWordBinding
    );
}

#[test]
fn test_error_categories() {
    let mut clashes = ClashMap::new();
    let dup = check_with(&p(""), &pattern("[a, a]"), true, Some(&mut clashes)).unwrap_err();
    assert_eq!(dup.typ().category(), Some(ErrorCategory::DuplicateBinding));
    assert_eq!(
        check_with(&p(""), &expr("a + b"), false, None)
            .unwrap_err()
            .typ()
            .category(),
        Some(ErrorCategory::InvalidLvalShape)
    );
    assert_eq!(
        expr_err("[...a, b] = 1").typ().category(),
        Some(ErrorCategory::MisplacedRest)
    );
    assert_eq!(
        expr_err("({get a() {}} = 1)").typ().category(),
        Some(ErrorCategory::IllegalPatternContent)
    );
    assert_eq!(
        expr_err("(a += 1) => a").typ().category(),
        Some(ErrorCategory::MalformedDefault)
    );
    assert_eq!(SyntaxErrorType::UnexpectedEnd.category(), None);
}
