use crate::ast::{Node, Syntax};
use crate::error::SyntaxResult;
use crate::parse::parser::Parser;
use crate::parse::stmt::parse_stmt_list;
use crate::token::TokenType;

pub fn parse_top_level(parser: &mut Parser) -> SyntaxResult<Node> {
    let body = parse_stmt_list(parser, TokenType::EOF, true)?;
    Ok(Node::new(parser.source_range(), Syntax::Program { body }))
}
