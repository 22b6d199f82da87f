use ast::{Node, Syntax};
use error::{SyntaxErrorType, SyntaxResult};
use lex::Lexer;
use parse::binding::BindingParser;
use parse::expr::parse_expression as parse_expression_at;
use parse::lval::{check_lval, ClashMap};
use parse::parser::{ParseOptions, Parser, TopLevelMode};
use parse::toplevel::parse_top_level;
use token::TokenType;

pub mod ast;
pub mod char;
pub mod error;
pub mod lex;
pub mod num;
pub mod operator;
pub mod parse;
pub mod source;
pub mod token;
#[cfg(test)]
mod util;

fn require_end(parser: &mut Parser) -> SyntaxResult<()> {
    let t = parser.next()?;
    if t.typ() != TokenType::EOF {
        return Err(t.error(SyntaxErrorType::ExpectedSyntax("end of input")));
    };
    Ok(())
}

/// Parses UTF-8 JavaScript code, represented as an array of bytes, into a Program node.
///
/// # Arguments
///
/// * `source` - A vector of bytes representing the source code to parse.
/// * `top_level_mode` - Module code is always strict.
///
/// # Examples
///
/// ```
/// use parse_js_pattern::parse;
/// use parse_js_pattern::parse::parser::TopLevelMode;
///
/// let code: &[u8] = b"let [a, {b = 1}] = x; ({c, d: [e]} = y);";
/// assert!(parse(code.to_vec(), TopLevelMode::Global).is_ok());
/// let code: &[u8] = b"let [a, a] = x;";
/// assert!(parse(code.to_vec(), TopLevelMode::Global).is_err());
/// ```
pub fn parse(source: Vec<u8>, top_level_mode: TopLevelMode) -> SyntaxResult<Node> {
    parse_with_options(
        source,
        ParseOptions {
            mode: top_level_mode,
            ..ParseOptions::default()
        },
    )
}

pub fn parse_with_options(source: Vec<u8>, options: ParseOptions) -> SyntaxResult<Node> {
    let mut parser = Parser::new(Lexer::new(source), options);
    parse_top_level(&mut parser)
}

/// Parses a single expression that must span the whole input.
pub fn parse_expression(source: Vec<u8>, options: ParseOptions) -> SyntaxResult<Node> {
    let mut parser = Parser::new(Lexer::new(source), options);
    let expr = parse_expression_at(&mut parser)?;
    require_end(&mut parser)?;
    Ok(expr)
}

/// Parses a single binding target with an optional default, such as `{a, b: [c] = d}`, and
/// validates it as a declaration would, rejecting repeated names.
pub fn parse_binding(source: Vec<u8>, options: ParseOptions) -> SyntaxResult<Node> {
    let mut parser = Parser::new(Lexer::new(source), options);
    let binding = parser.parse_maybe_default(None, None)?;
    let target = match binding.stx() {
        Syntax::AssignmentPattern { left, .. } => left.as_ref(),
        _ => &binding,
    };
    let mut clashes = ClashMap::new();
    check_lval(
        &parser,
        target,
        true,
        Some(&mut clashes),
        Some("variable declaration"),
    )?;
    require_end(&mut parser)?;
    Ok(binding)
}
