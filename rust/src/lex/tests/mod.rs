use crate::error::SyntaxErrorType::{self, *};
use crate::lex::{lex_next, Lexer};
use crate::token::TokenType::{self, *};

fn check(code: &str, expecteds: &[TokenType], expected_err: Option<SyntaxErrorType>) -> () {
    let mut lexer = Lexer::new(code.as_bytes().to_vec());
    for expected in expecteds {
        match lex_next(&mut lexer) {
            Err(e) => panic!("Failed to lex code with error {:?}: {}", e.typ(), code),
            Ok(t) => assert_eq!(t.typ(), *expected, "lexing {}", code),
        };
    }
    match lex_next(&mut lexer) {
        Err(e) => match expected_err {
            Some(expected) => assert_eq!(e.typ(), expected),
            None => panic!("Failed to lex code with error {:?}: {}", e.typ(), code),
        },
        Ok(t) => match expected_err {
            Some(_) => panic!("Code lexed successfully: {}", code),
            None => assert_eq!(EOF, t.typ()),
        },
    };
}

#[test]
fn test_lex_keywords() {
    check("yield", &[KeywordYield], None);
    check("instanceof", &[KeywordInstanceof], None);
    check("yielded", &[Identifier], None);
    check("getter set", &[Identifier, KeywordSet], None);
}

#[test]
fn test_lex_pattern_punctuation() {
    check(
        "[a, ...b] = c",
        &[
            BracketOpen,
            Identifier,
            Comma,
            DotDotDot,
            Identifier,
            BracketClose,
            Equals,
            Identifier,
        ],
        None,
    );
    check("({a = 1})", &[ParenthesisOpen, BraceOpen, Identifier, Equals, LiteralNumber, BraceClose, ParenthesisClose], None);
    check("@dec x", &[At, Identifier, Identifier], None);
    check("this.#priv", &[KeywordThis, Dot, PrivateMember], None);
    check("a ??= b", &[Identifier, QuestionQuestionEquals, Identifier], None);
}

#[test]
fn test_lex_literal_numbers() {
    check("929", &[LiteralNumber], None);
    check(".929", &[LiteralNumber], None);
    check("0x1F 0b10 0o17", &[LiteralNumber, LiteralNumber, LiteralNumber], None);
    check("?.929", &[Question, LiteralNumber], None);
    check("0x", &[], Some(MalformedLiteralNumber));
}

#[test]
fn test_lex_literal_strings() {
    check("'hello world'", &[LiteralString], None);
    check("\"it\\\"s\"", &[LiteralString], None);
    check("'hello world\n'", &[], Some(LineTerminatorInString));
    check("'unterminated", &[], Some(UnexpectedEnd));
}

#[test]
fn test_lex_comments() {
    check("a /* b */ c // d", &[Identifier, Identifier], None);
    check("// only a comment", &[], None);
}

#[test]
fn test_lex_line_terminator_tracking() {
    let mut lexer = Lexer::new(b"a\n// c\nb".to_vec());
    let a = lex_next(&mut lexer).unwrap();
    assert!(!a.preceded_by_line_terminator());
    let b = lex_next(&mut lexer).unwrap();
    assert_eq!(b.typ(), Identifier);
    assert!(b.preceded_by_line_terminator());
}
