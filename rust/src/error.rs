use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::source::{Source, SourceRange};
use crate::token::TokenType;

/// The broad kinds of pattern and lvalue failures. Lexer and host grammar failures have no category.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ErrorCategory {
    InvalidLvalShape,
    IllegalPatternContent,
    MisplacedRest,
    DuplicateBinding,
    MalformedDefault,
    UnexpectedToken,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SyntaxErrorType {
    BindingMemberExpression {
        context: Option<&'static str>,
    },
    DefaultValueOperator,
    DuplicateBinding,
    ExpectedNotFound,
    ExpectedSyntax(&'static str),
    InvalidLeftHandSide {
        binding: bool,
        context: Option<&'static str>,
    },
    InvalidParenthesizedAssignment,
    LineTerminatorAfterArrowFunctionParameters,
    LineTerminatorInString,
    MalformedLiteralNumber,
    MalformedLiteralString,
    ObjectPatternAccessor,
    ObjectPatternMethod,
    RequiredTokenNotFound(TokenType),
    ReservedWordBinding,
    RestElementNotLast,
    ShorthandDefaultOutsidePattern,
    StrictEvalOrArgumentsBinding,
    UnexpectedEnd,
    UnexpectedToken,
}

impl SyntaxErrorType {
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            SyntaxErrorType::InvalidLeftHandSide { .. }
            | SyntaxErrorType::BindingMemberExpression { .. }
            | SyntaxErrorType::InvalidParenthesizedAssignment => {
                Some(ErrorCategory::InvalidLvalShape)
            }
            SyntaxErrorType::ObjectPatternAccessor | SyntaxErrorType::ObjectPatternMethod => {
                Some(ErrorCategory::IllegalPatternContent)
            }
            SyntaxErrorType::RestElementNotLast => Some(ErrorCategory::MisplacedRest),
            SyntaxErrorType::DuplicateBinding => Some(ErrorCategory::DuplicateBinding),
            SyntaxErrorType::DefaultValueOperator => Some(ErrorCategory::MalformedDefault),
            SyntaxErrorType::UnexpectedToken
            | SyntaxErrorType::ExpectedSyntax(_)
            | SyntaxErrorType::RequiredTokenNotFound(_) => Some(ErrorCategory::UnexpectedToken),
            _ => None,
        }
    }
}

impl Display for SyntaxErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorType::BindingMemberExpression { context } => match context {
                Some(context) => write!(f, "Binding member expression in {}", context),
                None => f.write_str("Binding member expression"),
            },
            SyntaxErrorType::DefaultValueOperator => {
                f.write_str("Only '=' operator can be used for specifying default value")
            }
            SyntaxErrorType::DuplicateBinding => f.write_str("Argument name clash"),
            SyntaxErrorType::ExpectedNotFound => f.write_str("Expected token not found"),
            SyntaxErrorType::ExpectedSyntax(what) => write!(f, "Expected {}", what),
            SyntaxErrorType::InvalidLeftHandSide { binding, context } => {
                f.write_str(if *binding {
                    "Binding invalid left-hand side"
                } else {
                    "Invalid left-hand side"
                })?;
                match context {
                    Some(context) => write!(f, " in {}", context),
                    None => f.write_str(" expression"),
                }
            }
            SyntaxErrorType::InvalidParenthesizedAssignment => {
                f.write_str("Invalid parenthesized assignment pattern")
            }
            SyntaxErrorType::LineTerminatorAfterArrowFunctionParameters => {
                f.write_str("Line terminator after arrow function parameters")
            }
            SyntaxErrorType::LineTerminatorInString => f.write_str("Line terminator in string"),
            SyntaxErrorType::MalformedLiteralNumber => f.write_str("Malformed number literal"),
            SyntaxErrorType::MalformedLiteralString => f.write_str("Malformed string literal"),
            SyntaxErrorType::ObjectPatternAccessor => {
                f.write_str("Object pattern can't contain getter or setter")
            }
            SyntaxErrorType::ObjectPatternMethod => {
                f.write_str("Object pattern can't contain methods")
            }
            SyntaxErrorType::RequiredTokenNotFound(typ) => write!(f, "Expected {:?}", typ),
            SyntaxErrorType::ReservedWordBinding => f.write_str("Unexpected reserved word"),
            SyntaxErrorType::RestElementNotLast => {
                f.write_str("The rest element has to be the last element when destructuring")
            }
            SyntaxErrorType::ShorthandDefaultOutsidePattern => {
                f.write_str("Shorthand property default is only valid in a pattern")
            }
            SyntaxErrorType::StrictEvalOrArgumentsBinding => {
                f.write_str("Binding eval or arguments in strict mode")
            }
            SyntaxErrorType::UnexpectedEnd => f.write_str("Unexpected end of input"),
            SyntaxErrorType::UnexpectedToken => f.write_str("Unexpected token"),
        }
    }
}

#[derive(Clone)]
pub struct SyntaxError {
    pub source: Source,
    pub position: usize,
    pub typ: SyntaxErrorType,
    pub actual_token: Option<TokenType>,
}

impl SyntaxError {
    pub fn new(
        typ: SyntaxErrorType,
        source: Source,
        position: usize,
        actual_token: Option<TokenType>,
    ) -> SyntaxError {
        SyntaxError {
            typ,
            source,
            position,
            actual_token,
        }
    }

    pub fn from_loc(
        loc: &SourceRange,
        typ: SyntaxErrorType,
        actual_token: Option<TokenType>,
    ) -> SyntaxError {
        SyntaxError {
            typ,
            source: loc.source.clone(),
            position: loc.start,
            actual_token,
        }
    }

    pub fn typ(&self) -> SyntaxErrorType {
        self.typ
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Debug for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} [position={} token={:?}]", self.typ, self.position, self.actual_token)
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.typ, self.position)
    }
}

impl Error for SyntaxError {}

impl PartialEq for SyntaxError {
    fn eq(&self, other: &Self) -> bool {
        self.typ == other.typ
    }
}

impl Eq for SyntaxError {}

pub type SyntaxResult<T> = Result<T, SyntaxError>;
