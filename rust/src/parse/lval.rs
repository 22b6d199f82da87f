use ahash::AHashMap;

use crate::ast::{Node, Syntax};
use crate::error::{SyntaxErrorType, SyntaxResult};
use crate::parse::host::ReservedWordCheck;
use crate::source::SourceRange;

/// Names already bound in one binding list or parameter list. Create one per list and drop it
/// once the list has been checked.
#[derive(Default, Debug)]
pub struct ClashMap {
    // Keyed by the name's text; SourceRange hashes and compares by content.
    seen: AHashMap<SourceRange, bool>,
}

impl ClashMap {
    pub fn new() -> ClashMap {
        ClashMap::default()
    }

    /// Returns whether `name` had already been marked.
    fn mark(&mut self, name: &SourceRange) -> bool {
        self.seen.insert(name.clone(), true).unwrap_or(false)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen
            .get(&SourceRange::anonymous(name))
            .copied()
            .unwrap_or(false)
    }
}

/// Checks that `expr` is a legal assignment target (or, when `is_binding`, a legal binding target),
/// recording every bound name in `check_clashes` when one is supplied. Default values are not
/// targets and are not visited.
pub fn check_lval<R: ReservedWordCheck + ?Sized>(
    reserved: &R,
    expr: &Node,
    is_binding: bool,
    mut check_clashes: Option<&mut ClashMap>,
    context: Option<&'static str>,
) -> SyntaxResult<()> {
    match expr.stx() {
        Syntax::Identifier { name } | Syntax::PrivateName { name } => {
            reserved.check_reserved_word(name, false, true)?;
            if let Some(clashes) = check_clashes {
                if clashes.mark(name) {
                    return Err(expr.error(SyntaxErrorType::DuplicateBinding));
                };
            };
        }
        Syntax::MemberExpression { .. } => {
            if is_binding {
                return Err(expr.error(SyntaxErrorType::BindingMemberExpression { context }));
            };
        }
        Syntax::ObjectPattern { properties } => {
            for prop in properties {
                let target = match prop.stx() {
                    Syntax::ObjectProperty { value, .. } => value.as_ref(),
                    _ => prop,
                };
                check_lval(
                    reserved,
                    target,
                    is_binding,
                    check_clashes.as_deref_mut(),
                    Some("object destructuring pattern"),
                )?;
            }
        }
        Syntax::ArrayPattern { elements } => {
            for elem in elements.iter().flatten() {
                check_lval(
                    reserved,
                    elem,
                    is_binding,
                    check_clashes.as_deref_mut(),
                    Some("array destructuring pattern"),
                )?;
            }
        }
        Syntax::AssignmentPattern { left, .. } => {
            check_lval(
                reserved,
                left,
                is_binding,
                check_clashes,
                Some("assignment pattern"),
            )?;
        }
        Syntax::RestElement { argument } => {
            check_lval(
                reserved,
                argument,
                is_binding,
                check_clashes,
                Some("rest element"),
            )?;
        }
        _ => {
            return Err(expr.error(SyntaxErrorType::InvalidLeftHandSide {
                binding: is_binding,
                context,
            }));
        }
    };
    Ok(())
}
