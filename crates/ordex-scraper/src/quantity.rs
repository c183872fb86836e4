//! Quantity resolution for a single item container.
//!
//! Signals are consulted in a fixed order: structured data attribute,
//! stepper display, form control, then a free-text `Qty: N` pattern. A
//! signal only counts when it parses as an integer greater than zero;
//! anything else falls through to the next one. With no usable signal the
//! quantity is 1.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use crate::selectors::quantity as sel;
use crate::text::element_text;

static QTY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Qty[:\s]*(\d+)").expect("valid qty regex"));

static QUANTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Quantity[:\s]*(\d+)").expect("valid quantity regex"));

/// A single quantity signal: returns a candidate only when it is valid.
type QuantitySource = fn(ElementRef<'_>) -> Option<u32>;

const SOURCES: [(&str, QuantitySource); 4] = [
    ("data-attribute", from_data_attribute),
    ("stepper", from_stepper),
    ("form-control", from_form_control),
    ("text-pattern", from_text_pattern),
];

/// Resolves the quantity shown for `container`, defaulting to 1.
#[must_use]
pub fn resolve_quantity(container: ElementRef<'_>) -> u32 {
    SOURCES
        .iter()
        .find_map(|(name, source)| {
            source(container).inspect(|qty| {
                tracing::trace!(source = *name, quantity = *qty, "resolved item quantity");
            })
        })
        .unwrap_or(1)
}

/// Parses the leading integer of `raw` and keeps it only when positive.
///
/// Leading whitespace and a sign are allowed; trailing text is ignored, so
/// `"3 items"` is 3 and `"2.5"` is 2. Zero, negatives, and non-numeric text
/// are rejected.
#[must_use]
pub fn parse_positive_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return None;
    }
    // Saturate absurdly long digit runs rather than rejecting them.
    let value = digits.parse::<u32>().unwrap_or(u32::MAX);
    (value > 0).then_some(value)
}

fn from_data_attribute(container: ElementRef<'_>) -> Option<u32> {
    container
        .value()
        .attr("data-quantity")
        .and_then(parse_positive_quantity)
}

fn from_stepper(container: ElementRef<'_>) -> Option<u32> {
    let stepper = container.select(&sel::STEPPER_VALUE).next()?;
    parse_positive_quantity(&element_text(Some(stepper)))
}

fn from_form_control(container: ElementRef<'_>) -> Option<u32> {
    let control = container.select(&sel::INPUT).next()?;
    parse_positive_quantity(&control_value(control))
}

fn from_text_pattern(container: ElementRef<'_>) -> Option<u32> {
    let text = container.text().collect::<String>();
    [&QTY_PATTERN, &QUANTITY_PATTERN].iter().find_map(|re| {
        re.captures(&text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| parse_positive_quantity(m.as_str()))
    })
}

/// Current value of a form control as the browser would report it.
///
/// A `select` reports its selected option (or its first option when none is
/// marked); other controls report the `value` attribute, then text content.
fn control_value(control: ElementRef<'_>) -> String {
    if control.value().name() == "select" {
        let option = control
            .select(&sel::SELECTED_OPTION)
            .next()
            .or_else(|| control.select(&sel::OPTION).next());
        if let Some(option) = option {
            return option
                .value()
                .attr("value")
                .map_or_else(|| element_text(Some(option)), str::to_string);
        }
    }
    control
        .value()
        .attr("value")
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| control.text().collect(), str::to_string)
}

#[cfg(test)]
#[path = "quantity_test.rs"]
mod tests;
