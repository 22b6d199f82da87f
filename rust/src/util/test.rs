use serde::Serialize;
use serde_json::{to_string_pretty, to_value, Value};
use similar::{ChangeTag, TextDiff};

use crate::ast::Node;
use crate::error::SyntaxError;
use crate::lex::Lexer;
use crate::parse::expr::parse_expression;
use crate::parse::parser::{ParseOptions, Parser, TopLevelMode};
use crate::parse::toplevel::parse_top_level;
use crate::source::SourceRange;

pub fn p(code: &str) -> Parser {
    p_with(code, ParseOptions::default())
}

pub fn p_with(code: &str, options: ParseOptions) -> Parser {
    Parser::new(Lexer::new(code.as_bytes().to_vec()), options)
}

pub fn strict() -> ParseOptions {
    ParseOptions {
        mode: TopLevelMode::Module,
        ..ParseOptions::default()
    }
}

pub fn r(code: &str) -> SourceRange {
    SourceRange::anonymous(code)
}

pub fn ident(name: &str) -> Value {
    serde_json::json!({ "type": "Identifier", "name": name })
}

pub fn expr(code: &str) -> Node {
    parse_expression(&mut p(code)).unwrap()
}

pub fn expr_err(code: &str) -> SyntaxError {
    parse_expression(&mut p(code)).unwrap_err()
}

pub fn program(code: &str) -> Node {
    parse_top_level(&mut p(code)).unwrap()
}

pub fn program_err(code: &str) -> SyntaxError {
    parse_top_level(&mut p(code)).unwrap_err()
}

pub fn program_err_with(code: &str, options: ParseOptions) -> SyntaxError {
    parse_top_level(&mut p_with(code, options)).unwrap_err()
}

/// Compares the serialised form of `actual` with `expected`, panicking with a line diff if they
/// differ.
pub fn assert_json<T: Serialize>(actual: &T, expected: Value) {
    let actual = to_value(actual).unwrap();
    if actual == expected {
        return;
    };
    let expected_fmt = to_string_pretty(&expected).unwrap();
    let actual_fmt = to_string_pretty(&actual).unwrap();
    let mut msg = String::from("Serialised value differs, got:\n");
    let diff = TextDiff::from_lines(&expected_fmt, &actual_fmt);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        msg.push_str(sign);
        msg.push_str(change.as_str().unwrap());
    }
    panic!("{}", msg);
}
