use std::str::FromStr;

use crate::error::{SyntaxError, SyntaxErrorType, SyntaxResult};
use crate::num::JsNumber;
use crate::source::SourceRange;
use crate::token::TokenType;

fn parse_radix(raw: &str, radix: u32) -> Result<f64, ()> {
    u64::from_str_radix(raw, radix)
        .map_err(|_| ())
        // This is lossy above 2^53, as JS itself is.
        .map(|v| v as f64)
}

pub fn normalise_literal_number(raw: &SourceRange) -> SyntaxResult<JsNumber> {
    match raw.as_str() {
        s if s.starts_with("0b") || s.starts_with("0B") => parse_radix(&s[2..], 2),
        s if s.starts_with("0o") || s.starts_with("0O") => parse_radix(&s[2..], 8),
        s if s.starts_with("0x") || s.starts_with("0X") => parse_radix(&s[2..], 16),
        s => f64::from_str(s).map_err(|_| ()),
    }
    .map(JsNumber)
    .map_err(|_| {
        SyntaxError::from_loc(
            raw,
            SyntaxErrorType::MalformedLiteralNumber,
            Some(TokenType::LiteralNumber),
        )
    })
}

// Only single character escapes are decoded; any other escaped character stands for itself.
pub fn normalise_literal_string(raw: &SourceRange) -> SyntaxResult<String> {
    let bytes = raw.as_slice();
    let inner = std::str::from_utf8(&bytes[1..bytes.len() - 1]).map_err(|_| {
        SyntaxError::from_loc(
            raw,
            SyntaxErrorType::MalformedLiteralString,
            Some(TokenType::LiteralString),
        )
    })?;
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        };
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('r') => value.push('\r'),
            Some('t') => value.push('\t'),
            Some('b') => value.push('\x08'),
            Some('f') => value.push('\x0c'),
            Some('v') => value.push('\x0b'),
            Some('0') => value.push('\0'),
            Some(c) => value.push(c),
            None => {}
        };
    }
    Ok(value)
}
