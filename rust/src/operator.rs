use crate::operator::Associativity::*;
use crate::operator::OperatorName::*;
use lazy_static::lazy_static;
#[cfg(test)]
use serde::Serialize;
use std::collections::HashMap;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(test, derive(Serialize))]
pub enum OperatorName {
    Addition,
    Assignment,
    AssignmentAddition,
    AssignmentBitwiseAnd,
    AssignmentBitwiseLeftShift,
    AssignmentBitwiseOr,
    AssignmentBitwiseRightShift,
    AssignmentBitwiseUnsignedRightShift,
    AssignmentBitwiseXor,
    AssignmentDivision,
    AssignmentExponentiation,
    AssignmentLogicalAnd,
    AssignmentLogicalOr,
    AssignmentMultiplication,
    AssignmentNullishCoalescing,
    AssignmentRemainder,
    AssignmentSubtraction,
    BitwiseAnd,
    BitwiseLeftShift,
    BitwiseNot,
    BitwiseOr,
    BitwiseRightShift,
    BitwiseUnsignedRightShift,
    BitwiseXor,
    Delete,
    Division,
    Equality,
    Exponentiation,
    GreaterThan,
    GreaterThanOrEqual,
    In,
    Inequality,
    Instanceof,
    LessThan,
    LessThanOrEqual,
    LogicalAnd,
    LogicalNot,
    LogicalOr,
    Multiplication,
    NullishCoalescing,
    PostfixDecrement,
    PostfixIncrement,
    PrefixDecrement,
    PrefixIncrement,
    Remainder,
    StrictEquality,
    StrictInequality,
    Subtraction,
    Typeof,
    UnaryNegation,
    UnaryPlus,
    Void,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Associativity {
    Left,
    Right,
}

pub struct Operator {
    pub name: OperatorName,
    pub associativity: Associativity,
    pub precedence: u8,
}

// Binary operators only, tightest first. Unary, conditional, assignment, and comma are handled by
// dedicated levels of the expression parser.
const PRECEDENCE_LEVELS: &'static [&'static [(OperatorName, Associativity)]] = &[
    &[(Exponentiation, Right)],
    &[(Multiplication, Left), (Division, Left), (Remainder, Left)],
    &[(Addition, Left), (Subtraction, Left)],
    &[
        (BitwiseLeftShift, Left),
        (BitwiseRightShift, Left),
        (BitwiseUnsignedRightShift, Left),
    ],
    &[
        (LessThan, Left),
        (LessThanOrEqual, Left),
        (GreaterThan, Left),
        (GreaterThanOrEqual, Left),
        (In, Left),
        (Instanceof, Left),
    ],
    &[
        (Equality, Left),
        (Inequality, Left),
        (StrictEquality, Left),
        (StrictInequality, Left),
    ],
    &[(BitwiseAnd, Left)],
    &[(BitwiseXor, Left)],
    &[(BitwiseOr, Left)],
    &[(LogicalAnd, Left)],
    &[(LogicalOr, Left), (NullishCoalescing, Left)],
];

lazy_static! {
    pub static ref OPERATORS: HashMap<OperatorName, Operator> = {
        let mut map = HashMap::<OperatorName, Operator>::new();
        for (i, ops) in PRECEDENCE_LEVELS.iter().enumerate() {
            let precedence = (PRECEDENCE_LEVELS.len() - i) as u8;
            for &(name, associativity) in ops.iter() {
                map.insert(
                    name,
                    Operator {
                        name,
                        associativity,
                        precedence,
                    },
                );
            }
        }
        map
    };
}
