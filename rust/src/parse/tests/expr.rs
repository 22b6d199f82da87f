use serde_json::json;

use crate::error::SyntaxErrorType;
use crate::parse::expr::parse_expression;
use crate::parse::parser::ParseOptions;
use crate::util::test::*;

fn num(value: f64) -> serde_json::Value {
    json!({ "type": "NumericLiteral", "value": value })
}

fn err_at(code: &str) -> (SyntaxErrorType, usize) {
    let err = expr_err(code);
    (err.typ(), err.position())
}

const INVALID_ASSIGNMENT: SyntaxErrorType = SyntaxErrorType::InvalidLeftHandSide {
    binding: false,
    context: Some("assignment expression"),
};

#[test]
fn test_parse_assignment_destructuring() {
    assert_json(
        &expr("[a, , ...b] = c"),
        json!({
            "type": "AssignmentExpression",
            "operator": "Assignment",
            "left": {
                "type": "ArrayPattern",
                "elements": [ident("a"), null, { "type": "RestElement", "argument": ident("b") }],
            },
            "right": ident("c"),
        }),
    );
    assert_json(
        &expr("({a = 1, b: {c} = {}} = d)"),
        json!({
            "type": "AssignmentExpression",
            "operator": "Assignment",
            "left": {
                "type": "ObjectPattern",
                "properties": [
                    {
                        "type": "ObjectProperty",
                        "key": ident("a"),
                        "computed": false,
                        "shorthand": true,
                        "value": { "type": "AssignmentPattern", "left": ident("a"), "right": num(1.0) },
                    },
                    {
                        "type": "ObjectProperty",
                        "key": ident("b"),
                        "computed": false,
                        "shorthand": false,
                        "value": {
                            "type": "AssignmentPattern",
                            "left": {
                                "type": "ObjectPattern",
                                "properties": [{
                                    "type": "ObjectProperty",
                                    "key": ident("c"),
                                    "computed": false,
                                    "shorthand": true,
                                    "value": ident("c"),
                                }],
                            },
                            "right": { "type": "ObjectExpression", "properties": [] },
                        },
                    },
                ],
            },
            "right": ident("d"),
        }),
    );
}

#[test]
fn test_parse_assignment_targets() {
    expr("a = b = c");
    expr("a.b = 1");
    expr("a[0] += 1");
    expr("[a.b, c[d]] = e");
    expr("a ||= b");
    assert_eq!(err_at("1 = 2"), (INVALID_ASSIGNMENT, 0));
    assert_eq!(err_at("a + b = c"), (INVALID_ASSIGNMENT, 0));
    assert_eq!(err_at("f() = 1"), (INVALID_ASSIGNMENT, 0));
    assert_eq!(err_at("a?.b = 1"), (INVALID_ASSIGNMENT, 0));
    // Only `=` turns a literal into a pattern.
    assert_eq!(err_at("[a] += 1"), (INVALID_ASSIGNMENT, 0));
    assert_eq!(err_at("[a, 1] = b"), (INVALID_ASSIGNMENT, 4));
    assert_eq!(
        expr_err("1 = 2").typ().to_string(),
        "Invalid left-hand side in assignment expression"
    );
}

#[test]
fn test_parse_parenthesized_targets() {
    expr("(a) = 1");
    expr("(a.b) = 1");
    expr("(a) += 1");
    expr("(a)++");
    expr("[(a), ...(b)] = 1");
    expr("({a: (b)} = 1)");
    expr("([a] = 1)");
    let invalid = SyntaxErrorType::InvalidParenthesizedAssignment;
    assert_eq!(err_at("([a]) = 1"), (invalid, 1));
    assert_eq!(err_at("({a}) = 1"), (invalid, 1));
    assert_eq!(err_at("[([a])] = 1"), (invalid, 2));
    assert_eq!(err_at("({a: ([b])} = 1)"), (invalid, 6));
    assert_eq!(err_at("((a)) => 1"), (invalid, 2));
    assert_eq!(err_at("(a, (b)) => 1"), (invalid, 5));
    assert_eq!(err_at("([(a)]) => 1"), (invalid, 3));
    assert_eq!(err_at("((a) = 1) => a"), (invalid, 2));
}

#[test]
fn test_parse_update_targets() {
    expr("++a");
    expr("a.b--");
    assert_eq!(
        err_at("++1"),
        (
            SyntaxErrorType::InvalidLeftHandSide {
                binding: false,
                context: Some("prefix operation"),
            },
            2
        )
    );
    assert_eq!(
        err_at("[a]++"),
        (
            SyntaxErrorType::InvalidLeftHandSide {
                binding: false,
                context: Some("postfix operation"),
            },
            0
        )
    );
}

#[test]
fn test_parse_shorthand_default() {
    assert_eq!(
        err_at("({a = 1})"),
        (SyntaxErrorType::ShorthandDefaultOutsidePattern, 4)
    );
    assert_eq!(
        err_at("[{a = 1}]"),
        (SyntaxErrorType::ShorthandDefaultOutsidePattern, 4)
    );
    assert_eq!(
        err_at("f({a = 1})"),
        (SyntaxErrorType::ShorthandDefaultOutsidePattern, 5)
    );
    assert_eq!(
        err_at("x = {a = 1}"),
        (SyntaxErrorType::ShorthandDefaultOutsidePattern, 7)
    );
    // An earlier sibling is not rescued by a later element becoming a pattern.
    assert_eq!(
        err_at("[{a = 1}, {b = 2} = c]"),
        (SyntaxErrorType::ShorthandDefaultOutsidePattern, 4)
    );
    expr("[{a = 1}] = x");
    expr("({a = 1} = x)");
    expr("({a = 1}) => a");
    expr("({a: {b = 1}} = x)");
}

#[test]
fn test_parse_arrow_function_params() {
    assert_json(
        &expr("([a, b], {c}, d = 1, ...e) => 0"),
        json!({
            "type": "ArrowFunctionExpression",
            "params": [
                { "type": "ArrayPattern", "elements": [ident("a"), ident("b")] },
                {
                    "type": "ObjectPattern",
                    "properties": [{
                        "type": "ObjectProperty",
                        "key": ident("c"),
                        "computed": false,
                        "shorthand": true,
                        "value": ident("c"),
                    }],
                },
                { "type": "AssignmentPattern", "left": ident("d"), "right": num(1.0) },
                { "type": "RestElement", "argument": ident("e") },
            ],
            "body": num(0.0),
        }),
    );
    assert_json(
        &expr("a => b => a"),
        json!({
            "type": "ArrowFunctionExpression",
            "params": [ident("a")],
            "body": {
                "type": "ArrowFunctionExpression",
                "params": [ident("b")],
                "body": ident("a"),
            },
        }),
    );
    assert_json(
        &expr("() => {}"),
        json!({
            "type": "ArrowFunctionExpression",
            "params": [],
            "body": { "type": "BlockStatement", "body": [] },
        }),
    );
}

#[test]
fn test_parse_arrow_function_param_errors() {
    assert_eq!(
        err_at("(a, a) => 1"),
        (SyntaxErrorType::DuplicateBinding, 4)
    );
    assert_eq!(
        err_at("(a, {b: [a]}) => 1"),
        (SyntaxErrorType::DuplicateBinding, 9)
    );
    assert_eq!(
        err_at("(a.b) => 1"),
        (
            SyntaxErrorType::InvalidLeftHandSide {
                binding: false,
                context: Some("arrow function parameters"),
            },
            1
        )
    );
    assert_eq!(
        err_at("(a += 1) => a"),
        (SyntaxErrorType::DefaultValueOperator, 2)
    );
    assert_eq!(
        err_at("({a() {}}) => 1"),
        (SyntaxErrorType::ObjectPatternMethod, 2)
    );
    assert_eq!(
        err_at("(a, ...b, c) => 0"),
        (SyntaxErrorType::RestElementNotLast, 8)
    );
    assert_eq!(err_at("(...a)"), (SyntaxErrorType::UnexpectedToken, 1));
    assert_eq!(
        err_at("(a)\n=> 1").0,
        SyntaxErrorType::LineTerminatorAfterArrowFunctionParameters
    );
    assert_eq!(
        program_err_with("(eval) => 1;", strict()).typ(),
        SyntaxErrorType::StrictEvalOrArgumentsBinding
    );
}

#[test]
fn test_parse_arrow_function_typed_params() {
    let options = ParseOptions {
        type_annotations: true,
        ..ParseOptions::default()
    };
    let node = parse_expression(&mut p_with("(a: T, ...b: U) => a", options)).unwrap();
    assert_json(
        &node,
        json!({
            "type": "ArrowFunctionExpression",
            "params": [
                {
                    "type": "Identifier",
                    "name": "a",
                    "type_annotation": { "type": "TypeAnnotation", "name": "T" },
                },
                {
                    "type": "RestElement",
                    "argument": ident("b"),
                    "type_annotation": { "type": "TypeAnnotation", "name": "U" },
                },
            ],
            "body": ident("a"),
        }),
    );
}

#[test]
fn test_parse_array_and_call_lists() {
    assert_json(
        &expr("[a, , ...b]"),
        json!({
            "type": "ArrayExpression",
            "elements": [ident("a"), null, { "type": "SpreadElement", "argument": ident("b") }],
        }),
    );
    assert_json(
        &expr("f(a, ...b)"),
        json!({
            "type": "CallExpression",
            "callee": ident("f"),
            "arguments": [ident("a"), { "type": "SpreadElement", "argument": ident("b") }],
            "optional": false,
        }),
    );
}

#[test]
fn test_parse_object_literal_members() {
    let node = expr("({a, b: 1, [c]: 2, 'd': 3, get e() { return 1; }, set e(v) {}, async *f() {}, get: 4, ...g})");
    let value = serde_json::to_value(&node).unwrap();
    let properties = value["properties"].as_array().unwrap();
    let types: Vec<&str> = properties
        .iter()
        .map(|p| p["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        vec![
            "ObjectProperty",
            "ObjectProperty",
            "ObjectProperty",
            "ObjectProperty",
            "ObjectMethod",
            "ObjectMethod",
            "ObjectMethod",
            "ObjectProperty",
            "SpreadElement",
        ]
    );
    assert_eq!(properties[4]["kind"], json!("Get"));
    assert_eq!(properties[5]["kind"], json!("Set"));
    assert_eq!(properties[6]["is_async"], json!(true));
    assert_eq!(properties[6]["generator"], json!(true));
    assert_eq!(properties[7]["key"], ident("get"));
    assert_eq!(
        err_at("({get e(a) {}})"),
        (SyntaxErrorType::ExpectedSyntax("getter with no parameters"), 6)
    );
}

#[test]
fn test_parse_member_and_call_chains() {
    assert_json(
        &expr("new A.b(c)?.d[e].#f"),
        json!({
            "type": "OptionalMemberExpression",
            "object": {
                "type": "OptionalMemberExpression",
                "object": {
                    "type": "OptionalMemberExpression",
                    "object": {
                        "type": "NewExpression",
                        "callee": {
                            "type": "MemberExpression",
                            "object": ident("A"),
                            "property": ident("b"),
                            "computed": false,
                        },
                        "arguments": [ident("c")],
                    },
                    "property": ident("d"),
                    "computed": false,
                },
                "property": ident("e"),
                "computed": true,
            },
            "property": { "type": "PrivateName", "name": "f" },
            "computed": false,
        }),
    );
}

#[test]
fn test_parse_binary_precedence() {
    assert_json(
        &expr("a + b * c ** d ** e"),
        json!({
            "type": "BinaryExpression",
            "operator": "Addition",
            "left": ident("a"),
            "right": {
                "type": "BinaryExpression",
                "operator": "Multiplication",
                "left": ident("b"),
                "right": {
                    "type": "BinaryExpression",
                    "operator": "Exponentiation",
                    "left": ident("c"),
                    "right": {
                        "type": "BinaryExpression",
                        "operator": "Exponentiation",
                        "left": ident("d"),
                        "right": ident("e"),
                    },
                },
            },
        }),
    );
    assert_json(
        &expr("a ? b : c = d"),
        json!({
            "type": "ConditionalExpression",
            "test": ident("a"),
            "consequent": ident("b"),
            "alternate": {
                "type": "AssignmentExpression",
                "operator": "Assignment",
                "left": ident("c"),
                "right": ident("d"),
            },
        }),
    );
}
