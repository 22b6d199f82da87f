use crate::ast::{Node, Syntax};
use crate::error::SyntaxResult;
use crate::parse::binding::BindingParser;
use crate::parse::lval::{check_lval, ClashMap};
use crate::parse::parser::Parser;
use crate::token::TokenType;

pub fn parse_signature_function(parser: &mut Parser) -> SyntaxResult<Vec<Node>> {
    parser.require(TokenType::ParenthesisOpen)?;
    let params = parser.parse_binding_list(TokenType::ParenthesisClose, false)?;
    // Without allow_empty there are no holes.
    Ok(params.into_iter().flatten().collect())
}

fn is_simple_parameter_list(params: &[Node]) -> bool {
    params
        .iter()
        .all(|p| matches!(p.stx(), Syntax::Identifier { .. }))
}

/// Validates parameters as bindings. Duplicate names are only tolerated in sloppy functions with a
/// simple parameter list; call this after the body so a "use strict" directive in it applies.
pub fn check_params(parser: &Parser, params: &[Node], allow_duplicates: bool) -> SyntaxResult<()> {
    let allow_duplicates =
        allow_duplicates && !parser.state().strict && is_simple_parameter_list(params);
    let mut clashes = ClashMap::new();
    for param in params {
        check_lval(
            parser,
            param,
            true,
            match allow_duplicates {
                true => None,
                false => Some(&mut clashes),
            },
            Some("function parameter list"),
        )?;
    }
    Ok(())
}
