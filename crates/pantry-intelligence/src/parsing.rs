// ABOUTME: Shared parsing and matching helpers for recipe text fields
// ABOUTME: Extracts integers and ingredient quantities, formats scaled amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Recipe data arrives as display strings ("10 min", "1,200 mg", "1 1/2 cups
//! rice"). Every stage that needs a number goes through this module. The
//! failure mode is uniform: anything that cannot be parsed is reported as
//! `None` and callers treat it as "field absent", never as an error.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns for numbers in recipe text
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static INTEGER_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 10, 1,200 (thousands separators)
    Regex::new(r"\d(?:\d|,\d)*").ok()
});

static QUANTITY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1 1/2, 1/4, 0.5, 2 (longest form first)
    Regex::new(r"(\d+)\s+(\d+)/(\d+)|(\d+)/(\d+)|\d+(?:\.\d+)?").ok()
});

/// A numeric quantity found inside an ingredient line
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    /// Byte range of the quantity text
    pub span: Range<usize>,
    /// Numeric value ("1 1/2" is 1.5)
    pub value: f64,
}

/// Extract the first integer in `text`
///
/// Thousands separators are accepted, so "1,200 mg" yields 1200. Decimals are
/// truncated at the point: "12.5g" yields 12.
#[must_use]
pub fn first_integer(text: &str) -> Option<u32> {
    first_integer_span(text).map(|(_, value)| value)
}

/// Extract the first integer in `text` together with its byte range
#[must_use]
pub fn first_integer_span(text: &str) -> Option<(Range<usize>, u32)> {
    let found = INTEGER_PATTERN.as_ref()?.find(text)?;
    let digits: String = found.as_str().chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok().map(|value| (found.range(), value))
}

/// Parse an optional field with [`first_integer`]
#[must_use]
pub fn parse_field(field: Option<&str>) -> Option<u32> {
    field.and_then(first_integer)
}

fn ratio(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Find the first quantity in an ingredient line
///
/// Recognizes integers ("2"), decimals ("1.5"), fractions ("1/2"), and mixed
/// numbers ("1 1/2"). A fraction with a zero denominator is not a quantity.
#[must_use]
pub fn leading_quantity(line: &str) -> Option<Quantity> {
    let caps = QUANTITY_PATTERN.as_ref()?.captures(line)?;
    let whole = caps.get(0)?;

    let value = if let (Some(int), Some(num), Some(den)) = (caps.get(1), caps.get(2), caps.get(3))
    {
        let int: f64 = int.as_str().parse().ok()?;
        int + ratio(num.as_str(), den.as_str())?
    } else if let (Some(num), Some(den)) = (caps.get(4), caps.get(5)) {
        ratio(num.as_str(), den.as_str())?
    } else {
        whole.as_str().parse().ok()?
    };

    Some(Quantity {
        span: whole.range(),
        value,
    })
}

/// Render a scaled quantity for display
///
/// Whole numbers print without decimals; everything else keeps at most two
/// decimals with trailing zeros trimmed ("0.75", "1.5").
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        return format!("{}", value.round() as i64);
    }
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Replace the text in `span` with `replacement`
#[must_use]
pub fn replace_span(line: &str, span: &Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len() + replacement.len());
    out.push_str(&line[..span.start]);
    out.push_str(replacement);
    out.push_str(&line[span.end..]);
    out
}

/// Case-insensitive substring test
///
/// A blank needle matches nothing. Constraint terms are normalized before they
/// reach the pipeline, so this only guards against direct misuse.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether any line contains `term` (case-insensitive)
#[must_use]
pub fn any_line_contains(lines: &[String], term: &str) -> bool {
    lines.iter().any(|line| contains_ignore_case(line, term))
}

/// Whether `line` contains any of `terms` (case-insensitive)
#[must_use]
pub fn contains_any<S: AsRef<str>>(line: &str, terms: &[S]) -> bool {
    terms
        .iter()
        .any(|term| contains_ignore_case(line, term.as_ref()))
}
