use std::fmt::{self, Debug, Formatter};

#[cfg(test)]
use serde::Serialize;

use crate::error::{SyntaxError, SyntaxErrorType};
use crate::num::JsNumber;
use crate::operator::OperatorName;
use crate::source::SourceRange;

#[cfg_attr(test, derive(Serialize))]
pub struct Node {
    #[cfg_attr(test, serde(skip))]
    loc: SourceRange,
    #[cfg_attr(test, serde(flatten))]
    stx: Syntax,
    #[cfg_attr(test, serde(skip_serializing_if = "Vec::is_empty"))]
    decorators: Vec<Node>,
    #[cfg_attr(test, serde(skip_serializing_if = "Option::is_none"))]
    type_annotation: Option<Box<Node>>,
    #[cfg_attr(test, serde(skip))]
    parenthesized: bool,
}

impl Node {
    pub fn new(loc: SourceRange, stx: Syntax) -> Node {
        Node {
            loc,
            stx,
            decorators: Vec::new(),
            type_annotation: None,
            parenthesized: false,
        }
    }

    pub fn error(&self, typ: SyntaxErrorType) -> SyntaxError {
        SyntaxError::from_loc(&self.loc, typ, None)
    }

    pub fn loc(&self) -> &SourceRange {
        &self.loc
    }

    pub fn stx(&self) -> &Syntax {
        &self.stx
    }

    /// Splits the node so its syntax can be destructured by value; `rebuild` puts it back together.
    pub fn into_parts(self) -> (NodeShell, Syntax) {
        let Node {
            loc,
            stx,
            decorators,
            type_annotation,
            parenthesized,
        } = self;
        (
            NodeShell {
                loc,
                decorators,
                type_annotation,
                parenthesized,
            },
            stx,
        )
    }

    pub fn decorators(&self) -> &[Node] {
        &self.decorators
    }

    pub fn set_decorators(&mut self, decorators: Vec<Node>) -> () {
        self.decorators = decorators;
    }

    /// Whether the node was written inside its own pair of parentheses, as in `(a)`.
    pub fn is_parenthesized(&self) -> bool {
        self.parenthesized
    }

    pub fn set_parenthesized(&mut self) -> () {
        self.parenthesized = true;
    }

    pub fn type_annotation(&self) -> Option<&Node> {
        self.type_annotation.as_deref()
    }

    pub fn set_type_annotation(&mut self, annotation: Node) -> () {
        self.loc.extend(&annotation.loc);
        self.type_annotation = Some(Box::new(annotation));
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:?}", self.stx))
    }
}

/// Everything about a node except its syntax.
pub struct NodeShell {
    loc: SourceRange,
    decorators: Vec<Node>,
    type_annotation: Option<Box<Node>>,
    parenthesized: bool,
}

impl NodeShell {
    pub fn loc(&self) -> &SourceRange {
        &self.loc
    }

    pub fn is_parenthesized(&self) -> bool {
        self.parenthesized
    }

    pub fn rebuild(self, stx: Syntax) -> Node {
        Node {
            loc: self.loc,
            stx,
            decorators: self.decorators,
            type_annotation: self.type_annotation,
            parenthesized: self.parenthesized,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(test, derive(Serialize))]
pub enum VarDeclKind {
    Const,
    Let,
    Var,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(test, derive(Serialize))]
pub enum MethodKind {
    Method,
    Get,
    Set,
}

// Names follow ESTree so that a converted expression and a directly parsed pattern are the same
// variant with the same children.
#[derive(Debug)]
#[cfg_attr(test, derive(Serialize))]
#[cfg_attr(test, serde(tag = "type"))]
pub enum Syntax {
    // Patterns.
    Identifier {
        name: SourceRange,
    },
    PrivateName {
        name: SourceRange,
    },
    ObjectPattern {
        // ObjectProperty nodes, with a RestElement allowed only last.
        properties: Vec<Node>,
    },
    ArrayPattern {
        // None is a hole.
        elements: Vec<Option<Node>>,
    },
    AssignmentPattern {
        left: Box<Node>,
        right: Box<Node>,
    },
    RestElement {
        argument: Box<Node>,
    },

    // Expressions.
    ArrayExpression {
        elements: Vec<Option<Node>>,
    },
    ArrowFunctionExpression {
        params: Vec<Node>,
        body: Box<Node>,
    },
    AssignmentExpression {
        operator: OperatorName,
        left: Box<Node>,
        right: Box<Node>,
    },
    BinaryExpression {
        operator: OperatorName,
        left: Box<Node>,
        right: Box<Node>,
    },
    BooleanLiteral {
        value: bool,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
        optional: bool,
    },
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },
    FunctionExpression {
        id: Option<Box<Node>>,
        is_async: bool,
        generator: bool,
        params: Vec<Node>,
        body: Box<Node>,
    },
    MemberExpression {
        object: Box<Node>,
        // Identifier or PrivateName when not computed.
        property: Box<Node>,
        computed: bool,
    },
    NewExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    NullLiteral {},
    NumericLiteral {
        value: JsNumber,
    },
    ObjectExpression {
        // ObjectProperty, ObjectMethod, or SpreadElement nodes.
        properties: Vec<Node>,
    },
    ObjectMethod {
        kind: MethodKind,
        key: Box<Node>,
        computed: bool,
        is_async: bool,
        generator: bool,
        params: Vec<Node>,
        body: Box<Node>,
    },
    ObjectProperty {
        key: Box<Node>,
        computed: bool,
        shorthand: bool,
        value: Box<Node>,
    },
    // Same shape as MemberExpression, but never assignable.
    OptionalMemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        computed: bool,
    },
    SequenceExpression {
        expressions: Vec<Node>,
    },
    SpreadElement {
        argument: Box<Node>,
    },
    StringLiteral {
        value: String,
    },
    ThisExpression {},
    UnaryExpression {
        operator: OperatorName,
        argument: Box<Node>,
    },
    UpdateExpression {
        operator: OperatorName,
        argument: Box<Node>,
    },
    YieldExpression {
        delegate: bool,
        argument: Option<Box<Node>>,
    },

    // Statements.
    BlockStatement {
        body: Vec<Node>,
    },
    EmptyStatement {},
    ExpressionStatement {
        expression: Box<Node>,
    },
    FunctionDeclaration {
        id: Box<Node>,
        is_async: bool,
        generator: bool,
        params: Vec<Node>,
        body: Box<Node>,
    },
    ReturnStatement {
        argument: Option<Box<Node>>,
    },
    VariableDeclaration {
        kind: VarDeclKind,
        declarations: Vec<Node>,
    },
    VariableDeclarator {
        id: Box<Node>,
        init: Option<Box<Node>>,
    },

    // Others.
    Decorator {
        expression: Box<Node>,
    },
    Program {
        body: Vec<Node>,
    },
    TypeAnnotation {
        name: SourceRange,
    },
}
