use crate::ast::{Node, Syntax};
use crate::error::{SyntaxErrorType, SyntaxResult};
use crate::parse::decl::{parse_decl_function, parse_decl_var};
use crate::parse::expr::parse_expression;
use crate::parse::parser::Parser;
use crate::token::TokenType;

/// Automatic Semicolon Insertion: a statement may end without `;` before `}`, at the end of input,
/// or when the next token starts a new line.
pub fn consume_semicolon(parser: &mut Parser) -> SyntaxResult<()> {
    if parser.consume_if(TokenType::Semicolon)?.is_match() {
        return Ok(());
    };
    let t = parser.peek()?;
    match t.typ() {
        TokenType::BraceClose | TokenType::EOF => Ok(()),
        _ if t.preceded_by_line_terminator() => Ok(()),
        _ => Err(t.error(SyntaxErrorType::RequiredTokenNotFound(TokenType::Semicolon))),
    }
}

fn is_use_strict_directive(stmt: &Node) -> bool {
    match stmt.stx() {
        Syntax::ExpressionStatement { expression } => {
            matches!(expression.stx(), Syntax::StringLiteral { .. })
                // Escapes are not allowed, so compare the raw text.
                && matches!(expression.loc().as_str(), "'use strict'" | "\"use strict\"")
        }
        _ => false,
    }
}

fn is_directive_candidate(stmt: &Node) -> bool {
    match stmt.stx() {
        Syntax::ExpressionStatement { expression } => {
            matches!(expression.stx(), Syntax::StringLiteral { .. })
        }
        _ => false,
    }
}

/// Parses statements until `end` is consumed. When `directives` is set, a leading run of string
/// literal statements is a directive prologue and "use strict" in it switches on strict mode.
pub fn parse_stmt_list(
    parser: &mut Parser,
    end: TokenType,
    directives: bool,
) -> SyntaxResult<Vec<Node>> {
    let mut body = Vec::<Node>::new();
    let mut in_prologue = directives;
    while !parser.consume_if(end)?.is_match() {
        let stmt = parse_stmt(parser)?;
        if in_prologue {
            if is_use_strict_directive(&stmt) {
                parser.set_strict(true);
            } else if !is_directive_candidate(&stmt) {
                in_prologue = false;
            };
        };
        body.push(stmt);
    }
    Ok(body)
}

pub fn parse_function_body(parser: &mut Parser) -> SyntaxResult<Node> {
    let start = parser.require(TokenType::BraceOpen)?.loc_take();
    let body = parse_stmt_list(parser, TokenType::BraceClose, true)?;
    Ok(Node::new(
        &start + parser.last_loc(),
        Syntax::BlockStatement { body },
    ))
}

pub fn parse_stmt(parser: &mut Parser) -> SyntaxResult<Node> {
    let t = parser.peek()?;
    match t.typ() {
        TokenType::BraceOpen => parse_stmt_block(parser),
        TokenType::KeywordConst | TokenType::KeywordVar => parse_decl_var(parser),
        TokenType::KeywordFunction => parse_decl_function(parser),
        TokenType::KeywordReturn => parse_stmt_return(parser),
        TokenType::Semicolon => parse_stmt_empty(parser),
        TokenType::KeywordLet | TokenType::KeywordAsync => {
            // Both are also ordinary names, so look at what follows.
            let checkpoint = parser.checkpoint();
            parser.next()?;
            let next = parser.peek()?;
            parser.restore_checkpoint(checkpoint);
            match (t.typ(), next.typ()) {
                (TokenType::KeywordLet, typ)
                    if typ.is_identifier_like()
                        || matches!(
                            typ,
                            TokenType::BraceOpen | TokenType::BracketOpen | TokenType::KeywordYield
                        ) =>
                {
                    parse_decl_var(parser)
                }
                (TokenType::KeywordAsync, TokenType::KeywordFunction)
                    if !next.preceded_by_line_terminator() =>
                {
                    parse_decl_function(parser)
                }
                _ => parse_stmt_expression(parser),
            }
        }
        _ => parse_stmt_expression(parser),
    }
}

pub fn parse_stmt_empty(parser: &mut Parser) -> SyntaxResult<Node> {
    let loc = parser.require(TokenType::Semicolon)?.loc_take();
    Ok(Node::new(loc, Syntax::EmptyStatement {}))
}

pub fn parse_stmt_block(parser: &mut Parser) -> SyntaxResult<Node> {
    let start = parser.require(TokenType::BraceOpen)?.loc_take();
    let body = parse_stmt_list(parser, TokenType::BraceClose, false)?;
    Ok(Node::new(
        &start + parser.last_loc(),
        Syntax::BlockStatement { body },
    ))
}

pub fn parse_stmt_expression(parser: &mut Parser) -> SyntaxResult<Node> {
    let expression = parse_expression(parser)?;
    consume_semicolon(parser)?;
    Ok(Node::new(
        expression.loc() + parser.last_loc(),
        Syntax::ExpressionStatement {
            expression: Box::new(expression),
        },
    ))
}

pub fn parse_stmt_return(parser: &mut Parser) -> SyntaxResult<Node> {
    let start = parser.require(TokenType::KeywordReturn)?;
    if !parser.state().in_function {
        return Err(start.error(SyntaxErrorType::ExpectedSyntax("return inside a function")));
    };
    let t = parser.peek()?;
    let argument = if t.preceded_by_line_terminator()
        || matches!(
            t.typ(),
            TokenType::BraceClose | TokenType::EOF | TokenType::Semicolon
        ) {
        // Automatic Semicolon Insertion.
        None
    } else {
        Some(Box::new(parse_expression(parser)?))
    };
    consume_semicolon(parser)?;
    Ok(Node::new(
        start.loc() + parser.last_loc(),
        Syntax::ReturnStatement { argument },
    ))
}
