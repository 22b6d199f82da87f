use crate::ast::{MethodKind, Node, Syntax};
use crate::error::{SyntaxErrorType, SyntaxResult};
use crate::parse::binding::BindingParser;
use crate::parse::expr::{parse_identifier, parse_maybe_assign, parse_maybe_assign_with};
use crate::parse::host::{PatternHost, ReservedWordCheck};
use crate::parse::literal::{normalise_literal_number, normalise_literal_string};
use crate::parse::parser::{FunctionState, Parser};
use crate::parse::signature::{check_params, parse_signature_function};
use crate::parse::stmt::parse_function_body;
use crate::token::TokenType;

struct PropertyName {
    key: Node,
    computed: bool,
    // Written as a bare name (identifier or keyword), so it could be a shorthand.
    bare: bool,
}

// <key> = <ident> | <keyword> | <str> | <num> | '[' <expr> ']'
fn parse_property_name(parser: &mut Parser) -> SyntaxResult<PropertyName> {
    let t = parser.peek()?;
    let (key, computed, bare) = match t.typ() {
        TokenType::BracketOpen => {
            parser.next()?;
            let key = parse_maybe_assign(parser)?;
            parser.require(TokenType::BracketClose)?;
            (key, true, false)
        }
        TokenType::LiteralString => {
            parser.next()?;
            let value = normalise_literal_string(t.loc())?;
            (Node::new(t.loc_take(), Syntax::StringLiteral { value }), false, false)
        }
        TokenType::LiteralNumber => {
            parser.next()?;
            let value = normalise_literal_number(t.loc())?;
            (Node::new(t.loc_take(), Syntax::NumericLiteral { value }), false, false)
        }
        _ => (parse_identifier(parser, true)?, false, true),
    };
    Ok(PropertyName {
        key,
        computed,
        bare,
    })
}

fn parse_object_method(
    parser: &mut Parser,
    kind: MethodKind,
    name: PropertyName,
    is_async: bool,
    generator: bool,
) -> SyntaxResult<Node> {
    let start = name.key.loc().clone();
    let strict = parser.state().strict;
    let outer = parser.replace_state(FunctionState {
        strict,
        in_generator: generator,
        in_function: true,
    });
    let params = parse_signature_function(parser)?;
    match kind {
        MethodKind::Get if !params.is_empty() => {
            return Err(name
                .key
                .error(SyntaxErrorType::ExpectedSyntax("getter with no parameters")))
        }
        MethodKind::Set if params.len() != 1 => {
            return Err(name
                .key
                .error(SyntaxErrorType::ExpectedSyntax("setter with one parameter")))
        }
        _ => {}
    };
    let body = parse_function_body(parser)?;
    check_params(parser, &params, false)?;
    parser.replace_state(outer);
    Ok(Node::new(
        &start + body.loc(),
        Syntax::ObjectMethod {
            kind,
            key: Box::new(name.key),
            computed: name.computed,
            is_async,
            generator,
            params,
            body: Box::new(body),
        },
    ))
}

// It's strictly one of these:
// <key> ':' <value>
// <ident> [ '=' <expr> ]?
// async? '*'? <key> '(' ...
// [ get | set ] <key> '(' ...
fn parse_object_member(parser: &mut Parser, is_pattern: bool) -> SyntaxResult<Node> {
    let start = parser.peek()?.loc_take();
    let mut kind = MethodKind::Method;
    let mut is_async = false;
    let mut generator = false;
    if !is_pattern {
        let checkpoint = parser.checkpoint();
        let t = parser.next()?;
        match t.typ() {
            TokenType::KeywordGet => kind = MethodKind::Get,
            TokenType::KeywordSet => kind = MethodKind::Set,
            TokenType::KeywordAsync => is_async = true,
            _ => {}
        };
        let next = parser.peek()?;
        let prefixed = kind != MethodKind::Method || is_async;
        if !prefixed
            || matches!(
                next.typ(),
                TokenType::BraceClose
                    | TokenType::Colon
                    | TokenType::Comma
                    | TokenType::Equals
                    | TokenType::ParenthesisOpen
            )
            || (is_async && next.preceded_by_line_terminator())
        {
            // Not a prefix, just a property named `get`, `set`, or `async`.
            parser.restore_checkpoint(checkpoint);
            kind = MethodKind::Method;
            is_async = false;
        };
        generator = parser.consume_if(TokenType::Asterisk)?.is_match();
    };

    let name = parse_property_name(parser)?;
    let is_method = is_async
        || generator
        || kind != MethodKind::Method
        || parser.peek()?.typ() == TokenType::ParenthesisOpen;
    if is_method && !is_pattern {
        return parse_object_method(parser, kind, name, is_async, generator);
    };

    if parser.consume_if(TokenType::Colon)?.is_match() {
        let value = match is_pattern {
            true => parser.parse_maybe_default(None, None)?,
            // The value may still turn out to be a nested pattern.
            false => parse_maybe_assign_with(parser, false)?,
        };
        return Ok(Node::new(
            &start + parser.last_loc(),
            Syntax::ObjectProperty {
                key: Box::new(name.key),
                computed: name.computed,
                shorthand: false,
                value: Box::new(value),
            },
        ));
    };

    if !name.bare {
        return Err(parser.unexpected()?);
    };
    let ident = match name.key.stx() {
        Syntax::Identifier { name: word } => {
            parser.check_reserved_word(word, true, false)?;
            Node::new(word.clone(), Syntax::Identifier { name: word.clone() })
        }
        _ => return Err(name.key.error(SyntaxErrorType::UnexpectedToken)),
    };
    if !is_pattern {
        let t = parser.peek()?;
        if t.typ() == TokenType::Equals {
            parser.record_shorthand_default(t.loc_take());
        };
    };
    let value = parser.parse_maybe_default(Some(start.clone()), Some(ident))?;
    Ok(Node::new(
        &start + parser.last_loc(),
        Syntax::ObjectProperty {
            key: Box::new(name.key),
            computed: false,
            shorthand: true,
            value: Box::new(value),
        },
    ))
}

/// Parses `{ ... }` as an object literal, or as an object pattern when `is_pattern`.
pub fn parse_object_like(parser: &mut Parser, is_pattern: bool) -> SyntaxResult<Node> {
    let start = parser.require(TokenType::BraceOpen)?.loc_take();
    let mut properties = Vec::<Node>::new();
    while !parser.consume_if(TokenType::BraceClose)?.is_match() {
        if parser.peek()?.typ() == TokenType::DotDotDot {
            if !is_pattern {
                properties.push(parser.parse_spread()?);
            } else {
                let rest = parser.parse_rest()?;
                if let Syntax::RestElement { argument } = rest.stx() {
                    if !matches!(argument.stx(), Syntax::Identifier { .. }) {
                        return Err(argument.error(SyntaxErrorType::UnexpectedToken));
                    };
                };
                properties.push(rest);
                let t = parser.next()?;
                if t.typ() != TokenType::BraceClose {
                    return Err(t.error(SyntaxErrorType::RestElementNotLast));
                };
                break;
            };
        } else {
            properties.push(parse_object_member(parser, is_pattern)?);
        };
        if !parser.consume_if(TokenType::Comma)?.is_match() {
            parser.require(TokenType::BraceClose)?;
            break;
        };
    }
    let loc = &start + parser.last_loc();
    Ok(Node::new(
        loc,
        match is_pattern {
            true => Syntax::ObjectPattern { properties },
            false => Syntax::ObjectExpression { properties },
        },
    ))
}
