use crate::ast::{Node, Syntax};
use crate::error::{SyntaxError, SyntaxErrorType, SyntaxResult};
use crate::lex::KEYWORDS_MAPPING;
use crate::operator::{Associativity, OperatorName};
use crate::parse::assignable::{to_assignable, to_assignable_list, to_referenced_list};
use crate::parse::binding::BindingParser;
use crate::parse::decl::parse_function;
use crate::parse::host::{PatternHost, ReservedWordCheck};
use crate::parse::literal::{normalise_literal_number, normalise_literal_string};
use crate::parse::lval::check_lval;
use crate::parse::object::parse_object_like;
use crate::parse::operator::{
    ASSIGNMENT_OPERATOR_MAPPING, BINARY_OPERATOR_MAPPING, UNARY_OPERATOR_MAPPING,
};
use crate::parse::parser::{FunctionState, Parser};
use crate::parse::signature::check_params;
use crate::parse::stmt::parse_function_body;
use crate::source::SourceRange;
use crate::token::TokenType;

pub fn parse_identifier(parser: &mut Parser, liberal: bool) -> SyntaxResult<Node> {
    let t = parser.next()?;
    let state = parser.state();
    let accepted = t.typ().is_identifier_like()
        || (t.typ() == TokenType::KeywordYield && !state.strict && !state.in_generator)
        || (liberal && KEYWORDS_MAPPING.contains_key(&t.typ()));
    if !accepted {
        return Err(t.error(SyntaxErrorType::ExpectedSyntax("identifier")));
    };
    if !liberal {
        parser.check_reserved_word(t.loc(), true, false)?;
    };
    let name = t.loc_take();
    Ok(Node::new(name.clone(), Syntax::Identifier { name }))
}

pub fn parse_decorator(parser: &mut Parser) -> SyntaxResult<Node> {
    let start = parser.require(TokenType::At)?.loc_take();
    let mut expression = parse_identifier(parser, false)?;
    while parser.consume_if(TokenType::Dot)?.is_match() {
        let property = parse_identifier(parser, true)?;
        expression = Node::new(
            expression.loc() + property.loc(),
            Syntax::MemberExpression {
                object: Box::new(expression),
                property: Box::new(property),
                computed: false,
            },
        );
    }
    if parser.peek()?.typ() == TokenType::ParenthesisOpen {
        let arguments = parse_call_args(parser)?;
        expression = Node::new(
            expression.loc() + parser.last_loc(),
            Syntax::CallExpression {
                callee: Box::new(expression),
                arguments,
                optional: false,
            },
        );
    };
    Ok(Node::new(
        &start + expression.loc(),
        Syntax::Decorator {
            expression: Box::new(expression),
        },
    ))
}

pub fn parse_call_args(parser: &mut Parser) -> SyntaxResult<Vec<Node>> {
    parser.require(TokenType::ParenthesisOpen)?;
    let mut arguments = Vec::<Node>::new();
    while !parser.consume_if(TokenType::ParenthesisClose)?.is_match() {
        arguments.push(match parser.peek()?.typ() {
            TokenType::DotDotDot => parser.parse_spread()?,
            _ => parse_maybe_assign(parser)?,
        });
        if !parser.consume_if(TokenType::Comma)?.is_match() {
            parser.require(TokenType::ParenthesisClose)?;
            break;
        };
    }
    Ok(to_referenced_list(arguments))
}

/// Parses a comma-separated sequence of assignment expressions.
pub fn parse_expression(parser: &mut Parser) -> SyntaxResult<Node> {
    let first = parse_maybe_assign(parser)?;
    if parser.peek()?.typ() != TokenType::Comma {
        return Ok(first);
    };
    let mut expressions = vec![first];
    while parser.consume_if(TokenType::Comma)?.is_match() {
        expressions.push(parse_maybe_assign(parser)?);
    }
    let loc = match (expressions.first(), expressions.last()) {
        (Some(first), Some(last)) => first.loc() + last.loc(),
        _ => parser.last_loc().clone(),
    };
    Ok(Node::new(loc, Syntax::SequenceExpression { expressions }))
}

pub fn parse_maybe_assign(parser: &mut Parser) -> SyntaxResult<Node> {
    parse_maybe_assign_with(parser, true)
}

// A `{a = 1}` shorthand default is only legal if the object it is in turns out to be a pattern.
// Positions that may still become part of a pattern (array elements, property values, parenthesised
// lists) pass `owns_shorthand = false` so any recorded default stays pending for an enclosing level
// to claim or reject. An owning level rejects whatever is still pending once it knows its left side
// is not being assigned to.
pub fn parse_maybe_assign_with(parser: &mut Parser, owns_shorthand: bool) -> SyntaxResult<Node> {
    if parser.state().in_generator && parser.peek()?.typ() == TokenType::KeywordYield {
        return parse_yield(parser);
    };
    let outer = match owns_shorthand {
        true => parser.take_shorthand_default(),
        false => None,
    };
    let pending = parser.shorthand_default().cloned();

    let left = parse_conditional(parser)?;
    let t = parser.peek()?;
    if let Some(&operator) = ASSIGNMENT_OPERATOR_MAPPING.get(&t.typ()) {
        parser.next()?;
        let left = if operator == OperatorName::Assignment {
            let left = to_assignable(left, false, Some("assignment expression"))?;
            // Defaults recorded inside the left side are now part of a pattern.
            parser.restore_shorthand_default(pending);
            left
        } else {
            left
        };
        check_lval(&*parser, &left, false, None, Some("assignment expression"))?;
        let right = parse_maybe_assign(parser)?;
        if owns_shorthand {
            parser.restore_shorthand_default(outer);
        };
        return Ok(Node::new(
            left.loc() + right.loc(),
            Syntax::AssignmentExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            },
        ));
    };

    if owns_shorthand {
        if let Some(loc) = parser.take_shorthand_default() {
            return Err(SyntaxError::from_loc(
                &loc,
                SyntaxErrorType::ShorthandDefaultOutsidePattern,
                Some(TokenType::Equals),
            ));
        };
        parser.restore_shorthand_default(outer);
    };
    Ok(left)
}

fn parse_yield(parser: &mut Parser) -> SyntaxResult<Node> {
    let start = parser.require(TokenType::KeywordYield)?.loc_take();
    let delegate = parser.consume_if(TokenType::Asterisk)?.is_match();
    let t = parser.peek()?;
    let has_argument = delegate
        || !(t.preceded_by_line_terminator()
            || matches!(
                t.typ(),
                TokenType::BraceClose
                    | TokenType::BracketClose
                    | TokenType::Colon
                    | TokenType::Comma
                    | TokenType::EOF
                    | TokenType::ParenthesisClose
                    | TokenType::Semicolon
            ));
    let argument = match has_argument {
        true => Some(Box::new(parse_maybe_assign(parser)?)),
        false => None,
    };
    Ok(Node::new(
        &start + parser.last_loc(),
        Syntax::YieldExpression { delegate, argument },
    ))
}

fn parse_conditional(parser: &mut Parser) -> SyntaxResult<Node> {
    let test = parse_binary(parser, 1)?;
    if !parser.consume_if(TokenType::Question)?.is_match() {
        return Ok(test);
    };
    let consequent = parse_maybe_assign(parser)?;
    parser.require(TokenType::Colon)?;
    let alternate = parse_maybe_assign(parser)?;
    Ok(Node::new(
        test.loc() + alternate.loc(),
        Syntax::ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        },
    ))
}

fn parse_binary(parser: &mut Parser, min_prec: u8) -> SyntaxResult<Node> {
    let mut left = parse_unary(parser)?;
    loop {
        let t = parser.peek()?;
        let operator = match BINARY_OPERATOR_MAPPING.get(&t.typ()) {
            Some(operator) if operator.precedence >= min_prec => *operator,
            _ => break,
        };
        parser.next()?;
        let next_min_prec =
            operator.precedence + (operator.associativity == Associativity::Left) as u8;
        let right = parse_binary(parser, next_min_prec)?;
        left = Node::new(
            left.loc() + right.loc(),
            Syntax::BinaryExpression {
                operator: operator.name,
                left: Box::new(left),
                right: Box::new(right),
            },
        );
    }
    Ok(left)
}

fn parse_unary(parser: &mut Parser) -> SyntaxResult<Node> {
    let t = parser.peek()?;
    if let Some(&operator) = UNARY_OPERATOR_MAPPING.get(&t.typ()) {
        parser.next()?;
        let argument = parse_unary(parser)?;
        return Ok(Node::new(
            t.loc() + argument.loc(),
            Syntax::UnaryExpression {
                operator,
                argument: Box::new(argument),
            },
        ));
    };
    if let TokenType::PlusPlus | TokenType::HyphenHyphen = t.typ() {
        parser.next()?;
        let argument = parse_unary(parser)?;
        check_lval(&*parser, &argument, false, None, Some("prefix operation"))?;
        return Ok(Node::new(
            t.loc() + argument.loc(),
            Syntax::UpdateExpression {
                operator: match t.typ() {
                    TokenType::PlusPlus => OperatorName::PrefixIncrement,
                    _ => OperatorName::PrefixDecrement,
                },
                argument: Box::new(argument),
            },
        ));
    };

    let atom = parse_atom(parser)?;
    let expr = parse_subscripts(parser, atom, false)?;
    let t = parser.peek()?;
    match t.typ() {
        // Automatic Semicolon Insertion rules: no newline between operand and postfix operator.
        TokenType::PlusPlus | TokenType::HyphenHyphen if !t.preceded_by_line_terminator() => {
            parser.next()?;
            check_lval(&*parser, &expr, false, None, Some("postfix operation"))?;
            Ok(Node::new(
                expr.loc() + t.loc(),
                Syntax::UpdateExpression {
                    operator: match t.typ() {
                        TokenType::PlusPlus => OperatorName::PostfixIncrement,
                        _ => OperatorName::PostfixDecrement,
                    },
                    argument: Box::new(expr),
                },
            ))
        }
        _ => Ok(expr),
    }
}

fn parse_member_property(parser: &mut Parser) -> SyntaxResult<Node> {
    let t = parser.peek()?;
    if t.typ() != TokenType::PrivateMember {
        return parse_identifier(parser, true);
    };
    parser.next()?;
    let loc = t.loc_take();
    // The name does not include the `#`.
    let name = SourceRange::new(loc.source.clone(), loc.start + 1, loc.end);
    Ok(Node::new(loc, Syntax::PrivateName { name }))
}

fn member(object: Node, property: Node, computed: bool, optional: bool, end: &SourceRange) -> Node {
    let loc = object.loc() + end;
    let object = Box::new(object);
    let property = Box::new(property);
    Node::new(
        loc,
        match optional {
            true => Syntax::OptionalMemberExpression {
                object,
                property,
                computed,
            },
            false => Syntax::MemberExpression {
                object,
                property,
                computed,
            },
        },
    )
}

fn parse_subscripts(parser: &mut Parser, base: Node, no_calls: bool) -> SyntaxResult<Node> {
    let mut expr = base;
    // Once a chain has gone through `?.`, every later access in it is optional.
    let mut optional_chain = false;
    loop {
        let t = parser.peek()?;
        expr = match t.typ() {
            TokenType::Dot => {
                parser.next()?;
                let property = parse_member_property(parser)?;
                let end = parser.last_loc().clone();
                member(expr, property, false, optional_chain, &end)
            }
            TokenType::BracketOpen => {
                parser.next()?;
                let property = parse_expression(parser)?;
                let end = parser.require(TokenType::BracketClose)?.loc_take();
                member(expr, property, true, optional_chain, &end)
            }
            TokenType::QuestionDot if !no_calls => {
                parser.next()?;
                optional_chain = true;
                match parser.peek()?.typ() {
                    TokenType::BracketOpen => {
                        parser.next()?;
                        let property = parse_expression(parser)?;
                        let end = parser.require(TokenType::BracketClose)?.loc_take();
                        member(expr, property, true, true, &end)
                    }
                    TokenType::ParenthesisOpen => {
                        let arguments = parse_call_args(parser)?;
                        Node::new(
                            expr.loc() + parser.last_loc(),
                            Syntax::CallExpression {
                                callee: Box::new(expr),
                                arguments,
                                optional: true,
                            },
                        )
                    }
                    _ => {
                        let property = parse_member_property(parser)?;
                        let end = parser.last_loc().clone();
                        member(expr, property, false, true, &end)
                    }
                }
            }
            TokenType::ParenthesisOpen if !no_calls => {
                let arguments = parse_call_args(parser)?;
                Node::new(
                    expr.loc() + parser.last_loc(),
                    Syntax::CallExpression {
                        callee: Box::new(expr),
                        arguments,
                        optional: false,
                    },
                )
            }
            _ => break,
        };
    }
    Ok(expr)
}

fn parse_new(parser: &mut Parser) -> SyntaxResult<Node> {
    let start = parser.require(TokenType::KeywordNew)?.loc_take();
    let callee = parse_atom(parser)?;
    let callee = parse_subscripts(parser, callee, true)?;
    let arguments = match parser.peek()?.typ() {
        TokenType::ParenthesisOpen => parse_call_args(parser)?,
        _ => Vec::new(),
    };
    Ok(Node::new(
        &start + parser.last_loc(),
        Syntax::NewExpression {
            callee: Box::new(callee),
            arguments,
        },
    ))
}

fn parse_array(parser: &mut Parser) -> SyntaxResult<Node> {
    let start = parser.require(TokenType::BracketOpen)?.loc_take();
    let mut elements = Vec::<Option<Node>>::new();
    loop {
        if parser.consume_if(TokenType::BracketClose)?.is_match() {
            break;
        };
        if parser.consume_if(TokenType::Comma)?.is_match() {
            elements.push(None);
            continue;
        };
        elements.push(Some(match parser.peek()?.typ() {
            TokenType::DotDotDot => parser.parse_spread()?,
            _ => parse_maybe_assign_with(parser, false)?,
        }));
        if !parser.consume_if(TokenType::Comma)?.is_match() {
            parser.require(TokenType::BracketClose)?;
            break;
        };
    }
    Ok(Node::new(
        &start + parser.last_loc(),
        Syntax::ArrayExpression {
            elements: to_referenced_list(elements),
        },
    ))
}

fn parse_arrow_body(parser: &mut Parser, start: SourceRange, params: Vec<Node>) -> SyntaxResult<Node> {
    let strict = parser.state().strict;
    let outer = parser.replace_state(FunctionState {
        strict,
        in_generator: false,
        in_function: true,
    });
    let body = match parser.peek()?.typ() {
        TokenType::BraceOpen => parse_function_body(parser)?,
        _ => parse_maybe_assign(parser)?,
    };
    // Arrow parameters may never repeat a name.
    check_params(parser, &params, false)?;
    parser.replace_state(outer);
    Ok(Node::new(
        &start + body.loc(),
        Syntax::ArrowFunctionExpression {
            params,
            body: Box::new(body),
        },
    ))
}

fn consume_arrow(parser: &mut Parser) -> SyntaxResult<bool> {
    let arrow = parser.peek()?;
    if arrow.typ() != TokenType::EqualsChevronRight {
        return Ok(false);
    };
    if arrow.preceded_by_line_terminator() {
        // Illegal under Automatic Semicolon Insertion rules.
        return Err(arrow.error(SyntaxErrorType::LineTerminatorAfterArrowFunctionParameters));
    };
    parser.next()?;
    Ok(true)
}

// Parenthesised contents are parsed as expressions; only a following `=>` reveals they were
// parameters, at which point they are converted in place.
fn parse_paren_or_arrow(parser: &mut Parser) -> SyntaxResult<Node> {
    let start = parser.require(TokenType::ParenthesisOpen)?.loc_take();
    let outer = parser.take_shorthand_default();
    let mut exprs = Vec::<Node>::new();
    let mut rest_loc = None;
    while !parser.consume_if(TokenType::ParenthesisClose)?.is_match() {
        if parser.peek()?.typ() == TokenType::DotDotDot {
            let rest = parser.parse_rest()?;
            let rest = parser.parse_assignable_list_item_types(rest)?;
            rest_loc = Some(rest.loc().clone());
            exprs.push(rest);
            let t = parser.next()?;
            if t.typ() != TokenType::ParenthesisClose {
                return Err(t.error(SyntaxErrorType::RestElementNotLast));
            };
            break;
        };
        let expr = parse_maybe_assign_with(parser, false)?;
        exprs.push(parser.parse_assignable_list_item_types(expr)?);
        if !parser.consume_if(TokenType::Comma)?.is_match() {
            parser.require(TokenType::ParenthesisClose)?;
            break;
        };
    }
    let end = parser.last_loc().clone();

    if consume_arrow(parser)? {
        parser.restore_shorthand_default(outer);
        let params = to_assignable_list(
            exprs.into_iter().map(Some).collect(),
            true,
            Some("arrow function parameters"),
        )?;
        return parse_arrow_body(parser, start, params.into_iter().flatten().collect());
    };

    if let Some(loc) = rest_loc {
        return Err(SyntaxError::from_loc(
            &loc,
            SyntaxErrorType::UnexpectedToken,
            Some(TokenType::DotDotDot),
        ));
    };
    if let Some(loc) = parser.take_shorthand_default() {
        return Err(SyntaxError::from_loc(
            &loc,
            SyntaxErrorType::ShorthandDefaultOutsidePattern,
            Some(TokenType::Equals),
        ));
    };
    parser.restore_shorthand_default(outer);
    let mut expr = if exprs.len() > 1 {
        Node::new(
            &start + &end,
            Syntax::SequenceExpression { expressions: exprs },
        )
    } else {
        match exprs.pop() {
            Some(expr) => expr,
            None => {
                return Err(SyntaxError::from_loc(
                    &end,
                    SyntaxErrorType::UnexpectedToken,
                    Some(TokenType::ParenthesisClose),
                ))
            }
        }
    };
    expr.set_parenthesized();
    Ok(expr)
}

fn parse_identifier_or_arrow(parser: &mut Parser) -> SyntaxResult<Node> {
    let id = parse_identifier(parser, false)?;
    if !consume_arrow(parser)? {
        return Ok(id);
    };
    let start = id.loc().clone();
    let param = to_assignable(id, true, Some("arrow function parameters"))?;
    parse_arrow_body(parser, start, vec![param])
}

fn parse_atom(parser: &mut Parser) -> SyntaxResult<Node> {
    let t = parser.peek()?;
    let literal = match t.typ() {
        TokenType::LiteralNumber => Syntax::NumericLiteral {
            value: normalise_literal_number(t.loc())?,
        },
        TokenType::LiteralString => Syntax::StringLiteral {
            value: normalise_literal_string(t.loc())?,
        },
        TokenType::LiteralTrue => Syntax::BooleanLiteral { value: true },
        TokenType::LiteralFalse => Syntax::BooleanLiteral { value: false },
        TokenType::LiteralNull => Syntax::NullLiteral {},
        TokenType::KeywordThis => Syntax::ThisExpression {},
        TokenType::BracketOpen => return parse_array(parser),
        TokenType::BraceOpen => return parse_object_like(parser, false),
        TokenType::ParenthesisOpen => return parse_paren_or_arrow(parser),
        TokenType::KeywordFunction => return parse_function(parser, None, false),
        TokenType::KeywordNew => return parse_new(parser),
        TokenType::KeywordAsync => {
            let cp = parser.checkpoint();
            let start = parser.next()?.loc_take();
            let next = parser.peek()?;
            if next.typ() == TokenType::KeywordFunction && !next.preceded_by_line_terminator() {
                return parse_function(parser, Some(start), false);
            };
            // Just a name.
            parser.restore_checkpoint(cp);
            return parse_identifier_or_arrow(parser);
        }
        typ if typ.is_identifier_like() || typ == TokenType::KeywordYield => {
            return parse_identifier_or_arrow(parser)
        }
        _ => return Err(parser.unexpected()?),
    };
    parser.next()?;
    Ok(Node::new(t.loc_take(), literal))
}
