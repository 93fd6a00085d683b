//! Display formatting for amounts, rates, and counts.
//!
//! Pure string functions over `Decimal`. INR amounts group in the Indian
//! style (lakhs and crores: last three digits, then pairs); the other
//! currencies group in thousands.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Currency, Money};

/// Currency display string: symbol plus the amount rounded to whole units.
pub fn format_currency(amount: Money, currency: Currency) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let (sign, digits) = split_sign(&whole.to_string());
    let grouped = match currency {
        Currency::INR => group_indian(&digits),
        _ => group_western(&digits),
    };
    format!("{sign}{}{grouped}", currency.symbol())
}

/// Indian-style grouping, fraction preserved: 12345678.9 -> "1,23,45,678.9".
pub fn format_indian_number(value: Decimal) -> String {
    let (sign, body) = split_sign(&value.to_string());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (body, None),
    };
    let mut out = format!("{sign}{}", group_indian(&int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Fixed-decimal display with Indian grouping: 1234.5 at 2 dp -> "1,234.50".
pub fn format_number(value: Decimal, decimals: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    format_indian_number(rounded)
}

/// Percent display with fixed decimals: 14.87 at 2 dp -> "14.87%".
pub fn format_percent(value: Decimal, decimals: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    format!("{rounded}%")
}

fn split_sign(s: &str) -> (&'static str, String) {
    match s.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", s.to_string()),
    }
}

/// Last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<String> = Vec::new();
    let head_bytes = head.as_bytes();
    let mut i = head_bytes.len();
    while i > 0 {
        let start = i.saturating_sub(2);
        groups.push(head[start..i].to_string());
        i = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Groups of three.
fn group_western(digits: &str) -> String {
    let mut groups: Vec<String> = Vec::new();
    let mut i = digits.len();
    while i > 0 {
        let start = i.saturating_sub(3);
        groups.push(digits[start..i].to_string());
        i = start;
    }
    groups.reverse();
    groups.join(",")
}
