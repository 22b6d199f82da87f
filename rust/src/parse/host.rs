use crate::ast::Node;
use crate::error::{SyntaxError, SyntaxResult};
use crate::source::SourceRange;
use crate::token::{Token, TokenType};

/// Decides whether a name may be used in the current context.
pub trait ReservedWordCheck {
    fn check_reserved_word(
        &self,
        word: &SourceRange,
        check_keywords: bool,
        is_binding: bool,
    ) -> SyntaxResult<()>;
}

/// What binding parsing needs from the surrounding parser: a token cursor, a little state, and the
/// grammar it does not own (identifiers, assignment expressions, object literals, decorators).
pub trait PatternHost: ReservedWordCheck {
    // Token cursor.
    fn cur(&mut self) -> SyntaxResult<Token>;
    fn advance(&mut self) -> SyntaxResult<Token>;
    fn expect(&mut self, typ: TokenType) -> SyntaxResult<Token>;
    fn eat(&mut self, typ: TokenType) -> SyntaxResult<bool>;
    fn is(&mut self, typ: TokenType) -> SyntaxResult<bool>;
    // Location of the most recently consumed token; nodes end here.
    fn last_token_loc(&self) -> SourceRange;
    // Error positioned at the next token, which is left unconsumed.
    fn unexpected(&mut self) -> SyntaxResult<SyntaxError>;

    fn is_strict(&self) -> bool;
    fn in_generator(&self) -> bool;

    // `liberal` also accepts keywords, as in property names.
    fn parse_identifier(&mut self, liberal: bool) -> SyntaxResult<Node>;
    fn parse_maybe_assign(&mut self) -> SyntaxResult<Node>;
    fn parse_object_like(&mut self, is_pattern: bool) -> SyntaxResult<Node>;
    fn parse_decorator(&mut self) -> SyntaxResult<Node>;
}
