//! Pixel offsets as they appear in inline `top`/`bottom`/`transform` values.

use crate::ParseError;
use crate::declaration::is_ascii_whitespace;
use cssparser::{Parser, ParserInput, Token};

/// Offsets are kept to a thousandth of a pixel so that a value written by
/// [`format_px`] reads back unchanged.
const PRECISION: f64 = 1000.0;

fn snap(value: f64) -> f64 {
    // `+ 0.0` folds -0 into 0.
    (value * PRECISION).round() / PRECISION + 0.0
}

/// Read the number at the start of a CSS value, ignoring any unit.
///
/// `"20px"`, `"20"`, `"2e1px"` and `"20%"` all read as `20`.
///
/// # Errors
/// Returns [`ParseError::Empty`] for blank input, [`ParseError::NotNumeric`]
/// when the first token is not a number, dimension or percentage, and
/// [`ParseError::NonFinite`] when it overflows.
pub fn parse_leading_number(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim_matches(is_ascii_whitespace);
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut input = ParserInput::new(trimmed);
    let mut parser = Parser::new(&mut input);
    let start = parser.position();
    let token = parser.next().map_err(|_| ParseError::NotNumeric)?.clone();
    // cssparser reports `f32`; read the digits again at full width so large
    // offsets keep their thousandths.
    let (coarse, suffix_len) = match token {
        Token::Number { value, .. } => (value, 0),
        Token::Dimension { value, ref unit, .. } => (value, unit.len()),
        Token::Percentage { unit_value, .. } => (unit_value * 100.0, 1),
        _ => return Err(ParseError::NotNumeric),
    };
    let source = parser.slice_from(start);
    let value = source
        .get(..source.len().saturating_sub(suffix_len))
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or_else(|| f64::from(coarse));
    if !value.is_finite() {
        return Err(ParseError::NonFinite);
    }
    Ok(snap(value))
}

/// Offset in pixels carried by an inline `top`/`bottom` value.
///
/// Anything that does not start with a number counts as no offset.
pub fn parse_offset_px(text: &str) -> f64 {
    parse_leading_number(text).unwrap_or(0.0)
}

/// Format a pixel offset for an inline style, e.g. `12.5px`.
pub fn format_px(value: f64) -> String {
    format!("{}px", snap(value))
}

/// Format a vertical translation for an inline `transform`.
pub fn format_translate_y(value: f64) -> String {
    format!("translateY({})", format_px(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_number_ignores_units() {
        assert_eq!(parse_leading_number("20px"), Ok(20.0));
        assert_eq!(parse_leading_number("  -12.5px "), Ok(-12.5));
        assert_eq!(parse_leading_number("2e1px"), Ok(20.0));
        assert_eq!(parse_leading_number("7"), Ok(7.0));
        assert_eq!(parse_leading_number("15%"), Ok(15.0));
        assert_eq!(parse_leading_number("0.1px"), Ok(0.1));
    }

    #[test]
    fn large_offsets_keep_thousandths() {
        assert_eq!(parse_leading_number("123456.787px"), Ok(123_456.787));
        assert_eq!(parse_leading_number("-20000.001"), Ok(-20_000.001));
        assert_eq!(parse_leading_number("16777217.5%"), Ok(16_777_217.5));
        assert_eq!(parse_leading_number("1e400px"), Err(ParseError::NonFinite));
    }

    #[test]
    fn non_numeric_values() {
        assert_eq!(parse_leading_number(""), Err(ParseError::Empty));
        assert_eq!(parse_leading_number("auto"), Err(ParseError::NotNumeric));
        assert_eq!(parse_leading_number("calc(1px + 2px)"), Err(ParseError::NotNumeric));
        assert_eq!(parse_offset_px("inherit"), 0.0);
        assert_eq!(parse_offset_px(""), 0.0);
    }

    #[test]
    fn formatting_round_trips_through_parse() {
        for value in [0.0, 500.0, -20.0, 12.5, 123.456, -0.001, 123_456.787, -98_765.432] {
            let text = format_px(value);
            assert_eq!(parse_offset_px(&text), value, "value {value} as {text}");
        }
        assert_eq!(format_px(500.0), "500px");
        assert_eq!(format_px(123_456.787), "123456.787px");
        assert_eq!(format_px(-0.0), "0px");
        assert_eq!(format_px(1.0 / 3.0), "0.333px");
        assert_eq!(format_translate_y(-4.0), "translateY(-4px)");
    }
}
