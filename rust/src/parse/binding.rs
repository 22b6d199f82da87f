use crate::ast::{Node, Syntax};
use crate::error::{SyntaxErrorType, SyntaxResult};
use crate::parse::host::PatternHost;
use crate::source::SourceRange;
use crate::token::TokenType;

/// Parses patterns directly, for grammar positions that are known to bind names (declarations,
/// parameters). The trees built here have the same shape as those `assignable::to_assignable`
/// produces from expressions.
pub trait BindingParser: PatternHost {
    fn parse_binding_identifier(&mut self) -> SyntaxResult<Node> {
        let t = self.cur()?;
        if t.typ() == TokenType::KeywordYield {
            // `yield` only names something in sloppy code outside generators.
            if self.is_strict() || self.in_generator() {
                return Err(t.error(SyntaxErrorType::UnexpectedToken));
            };
            self.advance()?;
            let name = t.loc_take();
            return Ok(Node::new(name.clone(), Syntax::Identifier { name }));
        };
        self.parse_identifier(false)
    }

    fn parse_binding_atom(&mut self) -> SyntaxResult<Node> {
        let t = self.cur()?;
        match t.typ() {
            typ if typ.is_identifier_like() || typ == TokenType::KeywordYield => {
                self.parse_binding_identifier()
            }
            TokenType::BracketOpen => {
                self.advance()?;
                let elements = self.parse_binding_list(TokenType::BracketClose, true)?;
                Ok(Node::new(
                    t.loc() + &self.last_token_loc(),
                    Syntax::ArrayPattern { elements },
                ))
            }
            TokenType::BraceOpen => self.parse_object_like(true),
            _ => Err(self.unexpected()?),
        }
    }

    /// Parses list items until `close` is consumed. Holes are only produced when `allow_empty`.
    fn parse_binding_list(
        &mut self,
        close: TokenType,
        allow_empty: bool,
    ) -> SyntaxResult<Vec<Option<Node>>> {
        let mut elements = Vec::<Option<Node>>::new();
        let mut first = true;
        while !self.eat(close)? {
            if first {
                first = false;
            } else {
                // A missing comma is tolerated; the next item simply starts here.
                self.eat(TokenType::Comma)?;
            };
            if allow_empty && self.is(TokenType::Comma)? {
                elements.push(None);
            } else if self.eat(close)? {
                break;
            } else if self.is(TokenType::DotDotDot)? {
                let rest = self.parse_rest()?;
                elements.push(Some(self.parse_assignable_list_item_types(rest)?));
                let t = self.cur()?;
                if t.typ() != close {
                    return Err(t.error(SyntaxErrorType::RestElementNotLast));
                };
                self.advance()?;
                break;
            } else {
                let mut decorators = Vec::new();
                while self.is(TokenType::At)? {
                    decorators.push(self.parse_decorator()?);
                }
                let mut left = self.parse_maybe_default(None, None)?;
                if !decorators.is_empty() {
                    left.set_decorators(decorators);
                };
                let left = self.parse_assignable_list_item_types(left)?;
                let start = left.loc().clone();
                elements.push(Some(self.parse_maybe_default(Some(start), Some(left))?));
            };
        }
        Ok(elements)
    }

    fn parse_rest(&mut self) -> SyntaxResult<Node> {
        let start = self.expect(TokenType::DotDotDot)?.loc_take();
        let argument = self.parse_binding_atom()?;
        Ok(Node::new(
            &start + argument.loc(),
            Syntax::RestElement {
                argument: Box::new(argument),
            },
        ))
    }

    // Spread in expressions takes any assignment expression, not just a binding atom.
    fn parse_spread(&mut self) -> SyntaxResult<Node> {
        let start = self.expect(TokenType::DotDotDot)?.loc_take();
        let argument = self.parse_maybe_assign()?;
        Ok(Node::new(
            &start + argument.loc(),
            Syntax::SpreadElement {
                argument: Box::new(argument),
            },
        ))
    }

    /// Parses `left = default` where `left` may already have been parsed by the caller, in which
    /// case `start` is where it began.
    fn parse_maybe_default(
        &mut self,
        start: Option<SourceRange>,
        left: Option<Node>,
    ) -> SyntaxResult<Node> {
        let start = match start {
            Some(start) => start,
            None => self.cur()?.loc_take(),
        };
        let left = match left {
            Some(left) => left,
            None => self.parse_binding_atom()?,
        };
        if !self.eat(TokenType::Equals)? {
            return Ok(left);
        };
        let right = self.parse_maybe_assign()?;
        Ok(Node::new(
            &start + right.loc(),
            Syntax::AssignmentPattern {
                left: Box::new(left),
                right: Box::new(right),
            },
        ))
    }

    // Hosts with type syntax attach annotations to list items here.
    fn parse_assignable_list_item_types(&mut self, item: Node) -> SyntaxResult<Node> {
        Ok(item)
    }
}
