use serde_json::json;

use crate::error::SyntaxErrorType;
use crate::parse::binding::BindingParser;
use crate::parse::parser::{FunctionState, ParseOptions};
use crate::token::TokenType;
use crate::util::test::*;
use crate::parse_binding;

fn shorthand(name: &str) -> serde_json::Value {
    json!({
        "type": "ObjectProperty",
        "key": ident(name),
        "computed": false,
        "shorthand": true,
        "value": ident(name),
    })
}

fn typed() -> ParseOptions {
    ParseOptions {
        type_annotations: true,
        ..ParseOptions::default()
    }
}

#[test]
fn test_parse_binding_atom() {
    let mut parser = p("[a, , [b], {c}]");
    assert_json(
        &parser.parse_binding_atom().unwrap(),
        json!({
            "type": "ArrayPattern",
            "elements": [
                ident("a"),
                null,
                { "type": "ArrayPattern", "elements": [ident("b")] },
                { "type": "ObjectPattern", "properties": [shorthand("c")] },
            ],
        }),
    );
    assert_eq!(
        p("1").parse_binding_atom().unwrap_err().typ(),
        SyntaxErrorType::UnexpectedToken
    );
    assert_eq!(
        p("").parse_binding_atom().unwrap_err().typ(),
        SyntaxErrorType::UnexpectedEnd
    );
}

#[test]
fn test_parse_binding_identifier() {
    assert_json(&p("yield").parse_binding_identifier().unwrap(), ident("yield"));
    assert_json(&p("async").parse_binding_identifier().unwrap(), ident("async"));
    assert_eq!(
        p_with("yield", strict())
            .parse_binding_identifier()
            .unwrap_err()
            .typ(),
        SyntaxErrorType::UnexpectedToken
    );
    let mut parser = p("yield");
    parser.replace_state(FunctionState {
        strict: false,
        in_generator: true,
        in_function: true,
    });
    assert_eq!(
        parser.parse_binding_identifier().unwrap_err().typ(),
        SyntaxErrorType::UnexpectedToken
    );
    assert_eq!(
        p("if").parse_binding_identifier().unwrap_err().typ(),
        SyntaxErrorType::ExpectedSyntax("identifier")
    );
    assert_eq!(
        p_with("let", strict())
            .parse_binding_identifier()
            .unwrap_err()
            .typ(),
        SyntaxErrorType::ReservedWordBinding
    );
    assert_eq!(
        p_with("await", strict())
            .parse_binding_identifier()
            .unwrap_err()
            .typ(),
        SyntaxErrorType::ReservedWordBinding
    );
}

fn list(code: &str, close: TokenType, allow_empty: bool) -> serde_json::Value {
    let elements = p(code).parse_binding_list(close, allow_empty).unwrap();
    serde_json::to_value(&elements).unwrap()
}

#[test]
fn test_parse_binding_list_holes() {
    assert_eq!(
        list("a, , b]", TokenType::BracketClose, true),
        json!([ident("a"), null, ident("b")])
    );
    assert_eq!(
        list(", a]", TokenType::BracketClose, true),
        json!([null, ident("a")])
    );
    assert_eq!(list("a,]", TokenType::BracketClose, true), json!([ident("a")]));
    assert_eq!(
        list("a,,]", TokenType::BracketClose, true),
        json!([ident("a"), null])
    );
    assert_eq!(list("]", TokenType::BracketClose, true), json!([]));
    assert_eq!(
        p(", a)")
            .parse_binding_list(TokenType::ParenthesisClose, false)
            .unwrap_err()
            .typ(),
        SyntaxErrorType::UnexpectedToken
    );
}

#[test]
fn test_parse_binding_list_tolerates_missing_comma() {
    assert_eq!(
        list("a b)", TokenType::ParenthesisClose, false),
        json!([ident("a"), ident("b")])
    );
}

#[test]
fn test_parse_binding_list_rest() {
    assert_eq!(
        list("a, ...b)", TokenType::ParenthesisClose, false),
        json!([ident("a"), { "type": "RestElement", "argument": ident("b") }])
    );
    let err = p("[...a, b]").parse_binding_atom().unwrap_err();
    assert_eq!(err.typ(), SyntaxErrorType::RestElementNotLast);
    assert_eq!(err.position(), 5);
    assert_json(
        &p("...[a, b]").parse_rest().unwrap(),
        json!({
            "type": "RestElement",
            "argument": { "type": "ArrayPattern", "elements": [ident("a"), ident("b")] },
        }),
    );
}

#[test]
fn test_parse_binding_list_decorators() {
    let mut parser = p("@dec a, @x.y(1) [b])");
    assert_json(
        &parser
            .parse_binding_list(TokenType::ParenthesisClose, false)
            .unwrap(),
        json!([
            {
                "type": "Identifier",
                "name": "a",
                "decorators": [{ "type": "Decorator", "expression": ident("dec") }],
            },
            {
                "type": "ArrayPattern",
                "elements": [ident("b")],
                "decorators": [{
                    "type": "Decorator",
                    "expression": {
                        "type": "CallExpression",
                        "callee": {
                            "type": "MemberExpression",
                            "object": ident("x"),
                            "property": ident("y"),
                            "computed": false,
                        },
                        "arguments": [{ "type": "NumericLiteral", "value": 1.0 }],
                        "optional": false,
                    },
                }],
            },
        ]),
    );
}

#[test]
fn test_parse_binding_list_type_annotations() {
    let mut parser = p_with("a: T = 1, ...r: U)", typed());
    assert_json(
        &parser
            .parse_binding_list(TokenType::ParenthesisClose, false)
            .unwrap(),
        json!([
            {
                "type": "AssignmentPattern",
                "left": {
                    "type": "Identifier",
                    "name": "a",
                    "type_annotation": { "type": "TypeAnnotation", "name": "T" },
                },
                "right": { "type": "NumericLiteral", "value": 1.0 },
            },
            {
                "type": "RestElement",
                "argument": ident("r"),
                "type_annotation": { "type": "TypeAnnotation", "name": "U" },
            },
        ]),
    );
    // Without type syntax the default hook leaves items alone, so `:` is just unexpected.
    assert_eq!(
        p("a: T)")
            .parse_binding_list(TokenType::ParenthesisClose, false)
            .unwrap_err()
            .typ(),
        SyntaxErrorType::UnexpectedToken
    );
}

#[test]
fn test_parse_spread() {
    assert_json(
        &p("...a + b").parse_spread().unwrap(),
        json!({
            "type": "SpreadElement",
            "argument": {
                "type": "BinaryExpression",
                "operator": "Addition",
                "left": ident("a"),
                "right": ident("b"),
            },
        }),
    );
}

#[test]
fn test_parse_maybe_default() {
    assert_json(&p("a").parse_maybe_default(None, None).unwrap(), ident("a"));

    let node = p("a = 1").parse_maybe_default(None, None).unwrap();
    assert_eq!((node.loc().start, node.loc().end), (0, 5));
    assert_json(
        &node,
        json!({
            "type": "AssignmentPattern",
            "left": ident("a"),
            "right": { "type": "NumericLiteral", "value": 1.0 },
        }),
    );

    // The caller may have parsed the left side already.
    let mut parser = p("[a] = [1]");
    let left = parser.parse_binding_atom().unwrap();
    let start = left.loc().clone();
    let node = parser.parse_maybe_default(Some(start), Some(left)).unwrap();
    assert_eq!((node.loc().start, node.loc().end), (0, 9));
    assert_json(
        &node,
        json!({
            "type": "AssignmentPattern",
            "left": { "type": "ArrayPattern", "elements": [ident("a")] },
            "right": {
                "type": "ArrayExpression",
                "elements": [{ "type": "NumericLiteral", "value": 1.0 }],
            },
        }),
    );
}

#[test]
fn test_parse_object_pattern() {
    assert_json(
        &p("{a = 1, b: {c} = {}, 'd': e, [f]: g, ...h}")
            .parse_binding_atom()
            .unwrap(),
        json!({
            "type": "ObjectPattern",
            "properties": [
                {
                    "type": "ObjectProperty",
                    "key": ident("a"),
                    "computed": false,
                    "shorthand": true,
                    "value": {
                        "type": "AssignmentPattern",
                        "left": ident("a"),
                        "right": { "type": "NumericLiteral", "value": 1.0 },
                    },
                },
                {
                    "type": "ObjectProperty",
                    "key": ident("b"),
                    "computed": false,
                    "shorthand": false,
                    "value": {
                        "type": "AssignmentPattern",
                        "left": { "type": "ObjectPattern", "properties": [shorthand("c")] },
                        "right": { "type": "ObjectExpression", "properties": [] },
                    },
                },
                {
                    "type": "ObjectProperty",
                    "key": { "type": "StringLiteral", "value": "d" },
                    "computed": false,
                    "shorthand": false,
                    "value": ident("e"),
                },
                {
                    "type": "ObjectProperty",
                    "key": ident("f"),
                    "computed": true,
                    "shorthand": false,
                    "value": ident("g"),
                },
                { "type": "RestElement", "argument": ident("h") },
            ],
        }),
    );
    let err = p("{...a, b}").parse_binding_atom().unwrap_err();
    assert_eq!(err.typ(), SyntaxErrorType::RestElementNotLast);
    assert_eq!(
        p("{...[a]}").parse_binding_atom().unwrap_err().typ(),
        SyntaxErrorType::UnexpectedToken
    );
    assert_eq!(
        p("{'a'}").parse_binding_atom().unwrap_err().typ(),
        SyntaxErrorType::UnexpectedToken
    );
    assert_eq!(
        p("{if}").parse_binding_atom().unwrap_err().typ(),
        SyntaxErrorType::ReservedWordBinding
    );
}

#[test]
fn test_parse_binding_entry_point() {
    let node = parse_binding(b"{a, b: [c] = d} = e".to_vec(), ParseOptions::default()).unwrap();
    assert_json(
        &node,
        json!({
            "type": "AssignmentPattern",
            "left": {
                "type": "ObjectPattern",
                "properties": [
                    shorthand("a"),
                    {
                        "type": "ObjectProperty",
                        "key": ident("b"),
                        "computed": false,
                        "shorthand": false,
                        "value": {
                            "type": "AssignmentPattern",
                            "left": { "type": "ArrayPattern", "elements": [ident("c")] },
                            "right": ident("d"),
                        },
                    },
                ],
            },
            "right": ident("e"),
        }),
    );
    assert_eq!(
        parse_binding(b"[a, {b: a}]".to_vec(), ParseOptions::default())
            .unwrap_err()
            .typ(),
        SyntaxErrorType::DuplicateBinding
    );
    assert_eq!(
        parse_binding(b"a b".to_vec(), ParseOptions::default())
            .unwrap_err()
            .typ(),
        SyntaxErrorType::ExpectedSyntax("end of input")
    );
}
