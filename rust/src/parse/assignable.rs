use crate::ast::{MethodKind, Node, NodeShell, Syntax};
use crate::error::{SyntaxError, SyntaxErrorType, SyntaxResult};
use crate::operator::OperatorName;

// Expressions like `[a, b]` and `{a, b: c = 1}` are parsed as ordinary expressions before we know
// they are the left of an assignment or the parameters of an arrow function. Once we do, they are
// rewritten here into the pattern variants that binding parsing produces directly, so both paths
// feed the same validation in `lval`. Conversion does not validate names; that is `check_lval`'s job.

fn shell_error(shell: &NodeShell, typ: SyntaxErrorType) -> SyntaxError {
    SyntaxError::from_loc(shell.loc(), typ, None)
}

/// Rewrites an expression into the equivalent pattern, consuming it. Nodes that are already
/// patterns come back untouched.
pub fn to_assignable(
    node: Node,
    is_binding: bool,
    context: Option<&'static str>,
) -> SyntaxResult<Node> {
    let (shell, stx) = node.into_parts();
    // Only a simple assignment target may keep its parentheses, as in `(a) = 1`.
    if shell.is_parenthesized()
        && (is_binding
            || !matches!(
                stx,
                Syntax::Identifier { .. } | Syntax::MemberExpression { .. }
            ))
    {
        return Err(shell_error(&shell, SyntaxErrorType::InvalidParenthesizedAssignment));
    };
    let stx = match stx {
        stx @ (Syntax::Identifier { .. }
        | Syntax::PrivateName { .. }
        | Syntax::ObjectPattern { .. }
        | Syntax::ArrayPattern { .. }
        | Syntax::AssignmentPattern { .. }) => stx,
        Syntax::ObjectExpression { properties } => Syntax::ObjectPattern {
            properties: to_assignable_object_properties(properties, is_binding)?,
        },
        Syntax::ObjectProperty {
            key,
            computed,
            shorthand,
            value,
        } => Syntax::ObjectProperty {
            key,
            computed,
            shorthand,
            value: Box::new(to_assignable(*value, is_binding, context)?),
        },
        Syntax::SpreadElement { argument } => Syntax::RestElement {
            argument: Box::new(to_assignable(*argument, is_binding, context)?),
        },
        Syntax::ArrayExpression { elements } => Syntax::ArrayPattern {
            elements: to_assignable_list(elements, is_binding, context)?,
        },
        Syntax::AssignmentExpression {
            operator,
            left,
            right,
        } => {
            if operator != OperatorName::Assignment {
                let left_end = left.loc().end;
                return Err(SyntaxError::new(
                    SyntaxErrorType::DefaultValueOperator,
                    left.loc().source.clone(),
                    left_end,
                    None,
                ));
            };
            if is_binding && left.is_parenthesized() {
                return Err(left.error(SyntaxErrorType::InvalidParenthesizedAssignment));
            };
            // The left side was already converted when the assignment itself was parsed.
            Syntax::AssignmentPattern { left, right }
        }
        // Member accesses are assignment targets but can never bind a name.
        stx @ Syntax::MemberExpression { .. } if !is_binding => stx,
        _ => {
            return Err(shell_error(
                &shell,
                SyntaxErrorType::InvalidLeftHandSide {
                    binding: false,
                    context,
                },
            ))
        }
    };
    Ok(shell.rebuild(stx))
}

fn to_assignable_object_properties(
    properties: Vec<Node>,
    is_binding: bool,
) -> SyntaxResult<Vec<Node>> {
    let last = properties.len().saturating_sub(1);
    let mut converted = Vec::with_capacity(properties.len());
    for (i, prop) in properties.into_iter().enumerate() {
        match prop.stx() {
            Syntax::ObjectMethod { kind, key, .. } => {
                return Err(key.error(match kind {
                    MethodKind::Get | MethodKind::Set => SyntaxErrorType::ObjectPatternAccessor,
                    MethodKind::Method => SyntaxErrorType::ObjectPatternMethod,
                }));
            }
            Syntax::SpreadElement { argument } => {
                if i != last {
                    return Err(prop.error(SyntaxErrorType::RestElementNotLast));
                };
                // Unlike array rest, an object rest cannot nest another pattern.
                match argument.stx() {
                    Syntax::Identifier { .. } | Syntax::MemberExpression { .. } => {}
                    _ => return Err(argument.error(SyntaxErrorType::UnexpectedToken)),
                };
            }
            _ => {}
        };
        converted.push(to_assignable(
            prop,
            is_binding,
            Some("object destructuring pattern"),
        )?);
    }
    Ok(converted)
}

fn to_assignable_list_last(
    node: Node,
    is_binding: bool,
    context: Option<&'static str>,
) -> SyntaxResult<Node> {
    let (shell, stx) = node.into_parts();
    match stx {
        // Already finalised by whoever built the list.
        stx @ Syntax::RestElement { .. } => Ok(shell.rebuild(stx)),
        Syntax::SpreadElement { argument } => {
            let argument = to_assignable(*argument, is_binding, context)?;
            match argument.stx() {
                Syntax::Identifier { .. }
                | Syntax::MemberExpression { .. }
                | Syntax::ArrayPattern { .. } => {}
                _ => return Err(argument.error(SyntaxErrorType::UnexpectedToken)),
            };
            Ok(shell.rebuild(Syntax::RestElement {
                argument: Box::new(argument),
            }))
        }
        stx => to_assignable(shell.rebuild(stx), is_binding, context),
    }
}

/// Converts every element of an ordered list, passing holes through. Only the last element may be a
/// spread, which becomes a rest element.
pub fn to_assignable_list(
    mut elements: Vec<Option<Node>>,
    is_binding: bool,
    context: Option<&'static str>,
) -> SyntaxResult<Vec<Option<Node>>> {
    let last = match elements.pop() {
        Some(last) => last
            .map(|node| to_assignable_list_last(node, is_binding, context))
            .transpose()?,
        None => return Ok(elements),
    };
    let mut converted = Vec::with_capacity(elements.len() + 1);
    for elem in elements {
        converted.push(match elem {
            Some(node) => {
                if let Syntax::SpreadElement { .. } = node.stx() {
                    return Err(node.error(SyntaxErrorType::RestElementNotLast));
                };
                Some(to_assignable(node, is_binding, context)?)
            }
            None => None,
        });
    }
    converted.push(last);
    Ok(converted)
}

/// Marks expressions in a list as references rather than potential patterns. Nothing needs marking
/// yet, but callers go through here so that can change in one place.
pub fn to_referenced_list<T>(list: Vec<T>) -> Vec<T> {
    list
}
