use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::operator::{Operator, OperatorName, OPERATORS};
use crate::token::TokenType;

lazy_static! {
    pub static ref BINARY_OPERATOR_MAPPING: HashMap<TokenType, &'static Operator> = {
        let mut map = HashMap::<TokenType, &'static Operator>::new();
        map.insert(TokenType::Plus, &OPERATORS[&OperatorName::Addition]);
        map.insert(TokenType::Ampersand, &OPERATORS[&OperatorName::BitwiseAnd]);
        map.insert(TokenType::ChevronLeftChevronLeft, &OPERATORS[&OperatorName::BitwiseLeftShift]);
        map.insert(TokenType::Bar, &OPERATORS[&OperatorName::BitwiseOr]);
        map.insert(TokenType::ChevronRightChevronRight, &OPERATORS[&OperatorName::BitwiseRightShift]);
        map.insert(TokenType::ChevronRightChevronRightChevronRight, &OPERATORS[&OperatorName::BitwiseUnsignedRightShift]);
        map.insert(TokenType::Caret, &OPERATORS[&OperatorName::BitwiseXor]);
        map.insert(TokenType::Slash, &OPERATORS[&OperatorName::Division]);
        map.insert(TokenType::EqualsEquals, &OPERATORS[&OperatorName::Equality]);
        map.insert(TokenType::AsteriskAsterisk, &OPERATORS[&OperatorName::Exponentiation]);
        map.insert(TokenType::ChevronRight, &OPERATORS[&OperatorName::GreaterThan]);
        map.insert(TokenType::ChevronRightEquals, &OPERATORS[&OperatorName::GreaterThanOrEqual]);
        map.insert(TokenType::KeywordIn, &OPERATORS[&OperatorName::In]);
        map.insert(TokenType::ExclamationEquals, &OPERATORS[&OperatorName::Inequality]);
        map.insert(TokenType::KeywordInstanceof, &OPERATORS[&OperatorName::Instanceof]);
        map.insert(TokenType::ChevronLeft, &OPERATORS[&OperatorName::LessThan]);
        map.insert(TokenType::ChevronLeftEquals, &OPERATORS[&OperatorName::LessThanOrEqual]);
        map.insert(TokenType::AmpersandAmpersand, &OPERATORS[&OperatorName::LogicalAnd]);
        map.insert(TokenType::BarBar, &OPERATORS[&OperatorName::LogicalOr]);
        map.insert(TokenType::Asterisk, &OPERATORS[&OperatorName::Multiplication]);
        map.insert(TokenType::QuestionQuestion, &OPERATORS[&OperatorName::NullishCoalescing]);
        map.insert(TokenType::Percent, &OPERATORS[&OperatorName::Remainder]);
        map.insert(TokenType::EqualsEqualsEquals, &OPERATORS[&OperatorName::StrictEquality]);
        map.insert(TokenType::ExclamationEqualsEquals, &OPERATORS[&OperatorName::StrictInequality]);
        map.insert(TokenType::Hyphen, &OPERATORS[&OperatorName::Subtraction]);
        map
    };

    pub static ref ASSIGNMENT_OPERATOR_MAPPING: HashMap<TokenType, OperatorName> = {
        let mut map = HashMap::<TokenType, OperatorName>::new();
        map.insert(TokenType::Equals, OperatorName::Assignment);
        map.insert(TokenType::PlusEquals, OperatorName::AssignmentAddition);
        map.insert(TokenType::AmpersandEquals, OperatorName::AssignmentBitwiseAnd);
        map.insert(TokenType::ChevronLeftChevronLeftEquals, OperatorName::AssignmentBitwiseLeftShift);
        map.insert(TokenType::BarEquals, OperatorName::AssignmentBitwiseOr);
        map.insert(TokenType::ChevronRightChevronRightEquals, OperatorName::AssignmentBitwiseRightShift);
        map.insert(TokenType::ChevronRightChevronRightChevronRightEquals, OperatorName::AssignmentBitwiseUnsignedRightShift);
        map.insert(TokenType::CaretEquals, OperatorName::AssignmentBitwiseXor);
        map.insert(TokenType::SlashEquals, OperatorName::AssignmentDivision);
        map.insert(TokenType::AsteriskAsteriskEquals, OperatorName::AssignmentExponentiation);
        map.insert(TokenType::AmpersandAmpersandEquals, OperatorName::AssignmentLogicalAnd);
        map.insert(TokenType::BarBarEquals, OperatorName::AssignmentLogicalOr);
        map.insert(TokenType::AsteriskEquals, OperatorName::AssignmentMultiplication);
        map.insert(TokenType::QuestionQuestionEquals, OperatorName::AssignmentNullishCoalescing);
        map.insert(TokenType::PercentEquals, OperatorName::AssignmentRemainder);
        map.insert(TokenType::HyphenEquals, OperatorName::AssignmentSubtraction);
        map
    };

    pub static ref UNARY_OPERATOR_MAPPING: HashMap<TokenType, OperatorName> = {
        let mut map = HashMap::<TokenType, OperatorName>::new();
        // Prefix{Increment,Decrement} are handled separately as they need an assignable operand.
        map.insert(TokenType::Tilde, OperatorName::BitwiseNot);
        map.insert(TokenType::KeywordDelete, OperatorName::Delete);
        map.insert(TokenType::Exclamation, OperatorName::LogicalNot);
        map.insert(TokenType::Hyphen, OperatorName::UnaryNegation);
        map.insert(TokenType::Plus, OperatorName::UnaryPlus);
        map.insert(TokenType::KeywordTypeof, OperatorName::Typeof);
        map.insert(TokenType::KeywordVoid, OperatorName::Void);
        map
    };
}
