use crate::ast::{Node, Syntax, VarDeclKind};
use crate::error::{SyntaxErrorType, SyntaxResult};
use crate::parse::binding::BindingParser;
use crate::parse::expr::parse_maybe_assign;
use crate::parse::lval::{check_lval, ClashMap};
use crate::parse::parser::{FunctionState, Parser};
use crate::parse::signature::{check_params, parse_signature_function};
use crate::parse::stmt::{consume_semicolon, parse_function_body};
use crate::source::SourceRange;
use crate::token::TokenType;

pub fn parse_decl_var(parser: &mut Parser) -> SyntaxResult<Node> {
    let t = parser.next()?;
    let kind = match t.typ() {
        TokenType::KeywordLet => VarDeclKind::Let,
        TokenType::KeywordConst => VarDeclKind::Const,
        TokenType::KeywordVar => VarDeclKind::Var,
        _ => return Err(t.error(SyntaxErrorType::ExpectedSyntax("variable declaration"))),
    };
    // `var` may redeclare; lexical declarations may not repeat a name within one declaration.
    let mut clashes = match kind {
        VarDeclKind::Var => None,
        _ => Some(ClashMap::new()),
    };
    let mut declarations = Vec::<Node>::new();
    loop {
        let id = parser.parse_binding_atom()?;
        check_lval(
            &*parser,
            &id,
            true,
            clashes.as_mut(),
            Some("variable declaration"),
        )?;
        let init = match parser.consume_if(TokenType::Equals)?.is_match() {
            true => Some(Box::new(parse_maybe_assign(parser)?)),
            false => None,
        };
        if init.is_none() {
            if kind == VarDeclKind::Const {
                return Err(id.error(SyntaxErrorType::ExpectedSyntax("const initializer")));
            };
            if !matches!(id.stx(), Syntax::Identifier { .. }) {
                return Err(id.error(SyntaxErrorType::ExpectedSyntax(
                    "destructuring initializer",
                )));
            };
        };
        let loc = id.loc() + parser.last_loc();
        declarations.push(Node::new(
            loc,
            Syntax::VariableDeclarator {
                id: Box::new(id),
                init,
            },
        ));
        if !parser.consume_if(TokenType::Comma)?.is_match() {
            break;
        };
    }
    consume_semicolon(parser)?;
    Ok(Node::new(
        t.loc() + parser.last_loc(),
        Syntax::VariableDeclaration { kind, declarations },
    ))
}

/// Parses `function` onwards. `async_start` is the location of a preceding `async` keyword, which
/// the caller has already consumed.
pub fn parse_function(
    parser: &mut Parser,
    async_start: Option<SourceRange>,
    is_statement: bool,
) -> SyntaxResult<Node> {
    let function = parser.require(TokenType::KeywordFunction)?.loc_take();
    let is_async = async_start.is_some();
    let start = async_start.unwrap_or(function);
    let generator = parser.consume_if(TokenType::Asterisk)?.is_match();

    // The name belongs to the enclosing scope, so it is checked with the outer state.
    let id = match parser.peek()?.typ() {
        TokenType::ParenthesisOpen if !is_statement => None,
        _ => {
            let id = parser.parse_binding_identifier()?;
            check_lval(&*parser, &id, true, None, Some("function name"))?;
            Some(id)
        }
    };

    let strict = parser.state().strict;
    let outer = parser.replace_state(FunctionState {
        strict,
        in_generator: generator,
        in_function: true,
    });
    let params = parse_signature_function(parser)?;
    let body = parse_function_body(parser)?;
    check_params(parser, &params, true)?;
    // A directive in the body makes the name strict too.
    if let Some(id) = id.as_ref().filter(|_| parser.state().strict && !strict) {
        check_lval(&*parser, id, true, None, Some("function name"))?;
    };
    parser.replace_state(outer);

    let loc = &start + body.loc();
    let body = Box::new(body);
    Ok(Node::new(
        loc,
        match (is_statement, id) {
            (true, Some(id)) => Syntax::FunctionDeclaration {
                id: Box::new(id),
                is_async,
                generator,
                params,
                body,
            },
            (_, id) => Syntax::FunctionExpression {
                id: id.map(Box::new),
                is_async,
                generator,
                params,
                body,
            },
        },
    ))
}

pub fn parse_decl_function(parser: &mut Parser) -> SyntaxResult<Node> {
    let async_start = parser.consume_if(TokenType::KeywordAsync)?.match_loc_take();
    parse_function(parser, async_start, true)
}
