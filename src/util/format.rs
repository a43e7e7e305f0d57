//! Number formatting for chart tooltips and table cells.
//!
//! Price values use Indian-system digit grouping with a rupee prefix and no
//! decimals; other numbers use Western thousands grouping, with exactly two
//! decimals when the value is not an integer.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a price as rupees with Indian grouping and zero decimal places,
/// e.g. `4500000` -> `₹45,00,000`.
#[must_use]
pub fn format_inr(value: f64) -> String {
    let negative = value < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = value.abs().round() as u64;
    let grouped = group_indian(&rounded.to_string());
    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Format a non-price number: thousands-grouped when integral, grouped with
/// two decimals otherwise, e.g. `72.5` -> `72.50`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let magnitude = value.abs();
    let body = if magnitude.fract() == 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = magnitude as u64;
        group_western(&whole.to_string())
    } else {
        let fixed = format!("{magnitude:.2}");
        match fixed.split_once('.') {
            Some((whole, frac)) => format!("{}.{frac}", group_western(whole)),
            None => fixed,
        }
    };
    if negative { format!("-{body}") } else { body }
}

/// Indian digit grouping: the last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Western digit grouping in threes.
fn group_western(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let mut groups = Vec::new();
    let mut end = digits.len();
    while end > 3 {
        groups.push(&digits[end - 3..end]);
        end -= 3;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups.join(",")
}
