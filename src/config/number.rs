//! logos-based numeric literal recogniser.
//!
//! Accepts the literal forms the web platform's `Number(string)` accepts once
//! whitespace has been trimmed: signed decimals with optional fraction and
//! exponent (`-1`, `.5`, `5.`, `1e3`) and unsigned `0x`/`0o`/`0b` integers.
//! Word forms such as `Infinity` and `NaN` are never numbers here.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum NumericLiteral {
    /// Decimal literal with optional sign, fraction and exponent.
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Decimal,

    /// `0x1F`
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Hex,

    /// `0o17`
    #[regex(r"0[oO][0-7]+")]
    Octal,

    /// `0b101`
    #[regex(r"0[bB][01]+")]
    Binary,
}

/// Parse `input` as a finite number if the whole string is one numeric literal.
///
/// `input` must already be trimmed. Returns `None` for anything else,
/// including literals that overflow to infinity.
pub fn parse_numeric_literal(input: &str) -> Option<f64> {
    let mut lexer = NumericLiteral::lexer(input);
    let literal = lexer.next()?.ok()?;
    if lexer.span() != (0..input.len()) {
        return None;
    }
    let value = match literal {
        NumericLiteral::Decimal => input.parse::<f64>().ok()?,
        NumericLiteral::Hex => radix_value(&input[2..], 16),
        NumericLiteral::Octal => radix_value(&input[2..], 8),
        NumericLiteral::Binary => radix_value(&input[2..], 2),
    };
    value.is_finite().then_some(value)
}

fn radix_value(digits: &str, radix: u32) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
}
