use crate::ast::{Node, Syntax};
use crate::error::{SyntaxError, SyntaxErrorType, SyntaxResult};
use crate::lex::{lex_next, Lexer, LexerCheckpoint};
use crate::parse::binding::BindingParser;
use crate::parse::expr::{parse_decorator, parse_identifier, parse_maybe_assign};
use crate::parse::host::PatternHost;
use crate::parse::object::parse_object_like;
use crate::source::SourceRange;
use crate::token::{Token, TokenType};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TopLevelMode {
    Global,
    Module,
}

#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    pub mode: TopLevelMode,
    // Parse `: Name` after binding list items and attach it as a TypeAnnotation.
    pub type_annotations: bool,
}

impl Default for ParseOptions {
    fn default() -> ParseOptions {
        ParseOptions {
            mode: TopLevelMode::Global,
            type_annotations: false,
        }
    }
}

#[derive(Debug)]
pub struct MaybeToken {
    range: SourceRange,
    matched: bool,
}

impl MaybeToken {
    pub fn is_match(&self) -> bool {
        self.matched
    }

    pub fn match_loc_take(self) -> Option<SourceRange> {
        if self.matched {
            Some(self.range)
        } else {
            None
        }
    }
}

#[derive(Clone)]
pub struct ParserCheckpoint {
    checkpoint: LexerCheckpoint,
    last_loc: SourceRange,
}

struct BufferedToken {
    token: Token,
    after_checkpoint: LexerCheckpoint,
}

/// Context flags that change while descending into functions, saved and restored around each body.
#[derive(Clone, Copy, Debug)]
pub struct FunctionState {
    pub strict: bool,
    pub in_generator: bool,
    pub in_function: bool,
}

pub struct Parser {
    lexer: Lexer,
    buffered: Option<BufferedToken>,
    options: ParseOptions,
    state: FunctionState,
    // Start of the first `{a = b}` shorthand default seen in expression position that has not yet
    // been claimed by a conversion to a pattern.
    shorthand_default: Option<SourceRange>,
    last_loc: SourceRange,
}

impl Parser {
    pub fn new(lexer: Lexer, options: ParseOptions) -> Parser {
        let last_loc = lexer.source_range();
        Parser {
            lexer,
            buffered: None,
            options,
            state: FunctionState {
                strict: options.mode == TopLevelMode::Module,
                in_generator: false,
                in_function: false,
            },
            shorthand_default: None,
            last_loc,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn state(&self) -> FunctionState {
        self.state
    }

    /// Replaces the function state and returns the previous one so the caller can restore it.
    pub fn replace_state(&mut self, state: FunctionState) -> FunctionState {
        std::mem::replace(&mut self.state, state)
    }

    pub fn set_strict(&mut self, strict: bool) -> () {
        self.state.strict = strict;
    }

    pub fn shorthand_default(&self) -> Option<&SourceRange> {
        self.shorthand_default.as_ref()
    }

    pub fn take_shorthand_default(&mut self) -> Option<SourceRange> {
        self.shorthand_default.take()
    }

    pub fn restore_shorthand_default(&mut self, loc: Option<SourceRange>) -> () {
        self.shorthand_default = loc;
    }

    pub fn record_shorthand_default(&mut self, loc: SourceRange) -> () {
        if self.shorthand_default.is_none() {
            self.shorthand_default = Some(loc);
        };
    }

    pub fn source_range(&self) -> SourceRange {
        self.lexer.source_range()
    }

    pub fn checkpoint(&self) -> ParserCheckpoint {
        ParserCheckpoint {
            checkpoint: self.lexer.checkpoint(),
            last_loc: self.last_loc.clone(),
        }
    }

    pub fn restore_checkpoint(&mut self, checkpoint: ParserCheckpoint) -> () {
        self.buffered = None;
        self.lexer.apply_checkpoint(checkpoint.checkpoint);
        self.last_loc = checkpoint.last_loc;
    }

    fn forward<K: FnOnce(&Token) -> bool>(&mut self, keep: K) -> SyntaxResult<Token> {
        let (t, kept) = match self.buffered.take() {
            Some(b) => {
                if keep(&b.token) {
                    self.lexer.apply_checkpoint(b.after_checkpoint);
                    (b.token, true)
                } else {
                    let t = b.token.clone();
                    self.buffered = Some(b);
                    (t, false)
                }
            }
            None => {
                let cp = self.lexer.checkpoint();
                let t = lex_next(&mut self.lexer)?;
                let kept = keep(&t);
                if !kept {
                    let after_checkpoint = self.lexer.checkpoint();
                    self.lexer.apply_checkpoint(cp);
                    self.buffered = Some(BufferedToken {
                        token: t.clone(),
                        after_checkpoint,
                    });
                };
                (t, kept)
            }
        };
        if kept {
            self.last_loc = t.loc().clone();
        };
        Ok(t)
    }

    pub fn next(&mut self) -> SyntaxResult<Token> {
        self.forward(|_| true)
    }

    pub fn peek(&mut self) -> SyntaxResult<Token> {
        self.forward(|_| false)
    }

    pub fn consume_if(&mut self, typ: TokenType) -> SyntaxResult<MaybeToken> {
        let t = self.forward(|t| t.typ() == typ)?;
        Ok(MaybeToken {
            matched: t.typ() == typ,
            range: t.loc_take(),
        })
    }

    pub fn require(&mut self, typ: TokenType) -> SyntaxResult<Token> {
        let t = self.next()?;
        if t.typ() != typ {
            Err(t.error(SyntaxErrorType::RequiredTokenNotFound(typ)))
        } else {
            Ok(t)
        }
    }

    pub fn last_loc(&self) -> &SourceRange {
        &self.last_loc
    }
}

impl PatternHost for Parser {
    fn cur(&mut self) -> SyntaxResult<Token> {
        self.peek()
    }

    fn advance(&mut self) -> SyntaxResult<Token> {
        self.next()
    }

    fn expect(&mut self, typ: TokenType) -> SyntaxResult<Token> {
        self.require(typ)
    }

    fn eat(&mut self, typ: TokenType) -> SyntaxResult<bool> {
        Ok(self.consume_if(typ)?.is_match())
    }

    fn is(&mut self, typ: TokenType) -> SyntaxResult<bool> {
        Ok(self.peek()?.typ() == typ)
    }

    fn last_token_loc(&self) -> SourceRange {
        self.last_loc.clone()
    }

    fn unexpected(&mut self) -> SyntaxResult<SyntaxError> {
        let t = self.peek()?;
        Ok(t.error(match t.typ() {
            TokenType::EOF => SyntaxErrorType::UnexpectedEnd,
            _ => SyntaxErrorType::UnexpectedToken,
        }))
    }

    fn is_strict(&self) -> bool {
        self.state.strict
    }

    fn in_generator(&self) -> bool {
        self.state.in_generator
    }

    fn parse_identifier(&mut self, liberal: bool) -> SyntaxResult<Node> {
        parse_identifier(self, liberal)
    }

    fn parse_maybe_assign(&mut self) -> SyntaxResult<Node> {
        parse_maybe_assign(self)
    }

    fn parse_object_like(&mut self, is_pattern: bool) -> SyntaxResult<Node> {
        parse_object_like(self, is_pattern)
    }

    fn parse_decorator(&mut self) -> SyntaxResult<Node> {
        parse_decorator(self)
    }
}

impl BindingParser for Parser {
    fn parse_assignable_list_item_types(&mut self, mut item: Node) -> SyntaxResult<Node> {
        if !self.options.type_annotations {
            return Ok(item);
        };
        if let Some(colon) = self.consume_if(TokenType::Colon)?.match_loc_take() {
            let name = self.next()?;
            if !name.typ().is_identifier_like() {
                return Err(name.error(SyntaxErrorType::ExpectedSyntax("type name")));
            };
            let name = name.loc_take();
            item.set_type_annotation(Node::new(
                &colon + &name,
                Syntax::TypeAnnotation { name },
            ));
        };
        Ok(item)
    }
}
