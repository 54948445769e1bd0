// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Syntactic predicates shared by all handlers.
//!
//! Property values are raw strings; each handler picks the predicate matching the attribute it
//! sets and only mutates its target once the value has been accepted.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use peniko::color::Srgb;
use peniko::{Brush, Color};

use crate::ValueError;

/// Stores a successfully parsed value into `slot`; leaves it untouched on error.
pub(crate) fn assign<T>(slot: &mut T, parsed: Result<T, ValueError>) -> Result<(), ValueError> {
    *slot = parsed?;
    Ok(())
}

/// Parses `true` or `false` (case-insensitive).
pub fn parse_bool(text: &str) -> Result<bool, ValueError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ValueError::Boolean(text.to_string()))
    }
}

/// Parses a base-10 integer.
pub fn parse_int<T: core::str::FromStr>(text: &str) -> Result<T, ValueError> {
    text.trim()
        .parse()
        .map_err(|_| ValueError::Integer(text.to_string()))
}

/// Parses a finite decimal number.
pub fn parse_double(text: &str) -> Result<f64, ValueError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValueError::Number(text.to_string())),
    }
}

/// Parses a number in `0.0..=1.0` (alphas, explode percentages).
pub fn parse_unit_interval(text: &str) -> Result<f64, ValueError> {
    let v = parse_double(text)?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(ValueError::OutOfRange(text.to_string()))
    }
}

/// Parses a strictly positive number.
pub fn parse_positive(text: &str) -> Result<f64, ValueError> {
    let v = parse_double(text)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ValueError::OutOfRange(text.to_string()))
    }
}

/// Parses any CSS color syntax (`red`, `#336699`, `rgb(0 0 0 / 50%)`, ...).
pub fn parse_color(text: &str) -> Result<Color, ValueError> {
    peniko::color::parse_color(text.trim())
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| ValueError::Color(text.to_string()))
}

/// Parses a color into a solid paint.
pub fn parse_paint(text: &str) -> Result<Brush, ValueError> {
    parse_color(text).map(Brush::Solid)
}

/// Matches `text` (trimmed, case-insensitive) against a token table.
pub fn parse_token<T: Copy>(
    text: &str,
    table: &[(&str, T)],
    expected: &'static str,
) -> Result<T, ValueError> {
    let text = text.trim();
    table
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(text))
        .map(|&(_, v)| v)
        .ok_or_else(|| ValueError::Token {
            value: text.to_string(),
            expected,
        })
}

/// Splits `key:value, key:value` into trimmed pairs.
///
/// Commas nested inside parentheses (as in `rgb(1, 2, 3)`) do not split. Keys must be
/// non-empty; values may be empty. An empty input yields an empty list.
pub fn parse_pairs(text: &str) -> Result<Vec<(String, String)>, ValueError> {
    let mut out = Vec::new();
    for item in split_top_level(text) {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let Some((key, value)) = item.split_once(':') else {
            return Err(ValueError::Pairs(text.to_string()));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ValueError::Pairs(text.to_string()));
        }
        out.push((key.to_string(), value.trim().to_string()));
    }
    Ok(out)
}

/// Parses a pair list and validates every value with `parse`; fails if any value fails.
pub fn parse_pairs_with<T>(
    text: &str,
    parse: impl Fn(&str) -> Result<T, ValueError>,
) -> Result<Vec<(String, T)>, ValueError> {
    parse_pairs(text)?
        .into_iter()
        .map(|(key, value)| Ok((key, parse(&value)?)))
        .collect()
}

fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_u32;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(parse_bool(" TRUE "), Ok(true));
        assert!(parse_bool("yes").is_err());
        assert_eq!(parse_int::<u32>("42"), Ok(42));
        assert!(parse_int::<u32>("4.2").is_err());
        assert_eq!(parse_double("0.25"), Ok(0.25));
        assert!(parse_double("NaN").is_err());
        assert!(parse_unit_interval("1.5").is_err());
        assert!(parse_positive("0").is_err());
    }

    #[test]
    fn colors() {
        assert_eq!(parse_color("red").unwrap().to_rgba8(), css::RED.to_rgba8());
        assert_eq!(
            parse_color("#00ff00").unwrap().to_rgba8(),
            Color::from_rgba8(0, 255, 0, 255).to_rgba8()
        );
        assert!(parse_color("banana").is_err());
    }

    #[test]
    fn tokens_are_case_insensitive() {
        let table = [("up", 1), ("down", 2)];
        assert_eq!(parse_token("Down", &table, "up, down"), Ok(2));
        assert!(parse_token("left", &table, "up, down").is_err());
    }

    #[test]
    fn pairs_respect_parentheses() {
        let pairs = parse_pairs("A:red, B : rgb(0, 0, 255),").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("A".to_string(), "red".to_string()),
                ("B".to_string(), "rgb(0, 0, 255)".to_string()),
            ]
        );
        assert!(parse_pairs("A red").is_err());
        assert!(parse_pairs(":red").is_err());
    }

    #[test]
    fn pairs_with_fail_atomically() {
        assert!(parse_pairs_with("A:red,B:nope", parse_color).is_err());
        assert_eq!(parse_pairs_with("A:1,B:2", parse_int::<u8>).unwrap().len(), 2);
    }
}
