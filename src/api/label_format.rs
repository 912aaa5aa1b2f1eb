use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest number of fraction digits any label carries.
const MAX_PRECISION: u32 = 6;

/// Fraction digits needed to print multiples of `step` exactly.
#[must_use]
pub fn precision_from_step(step: f64) -> u32 {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    (fraction.trim_end_matches('0').len() as u32).min(MAX_PRECISION)
}

/// Fixed-precision decimal with `,` thousands grouping, e.g. `1,234.5`.
#[must_use]
pub fn format_grouped(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let precision = precision.min(MAX_PRECISION);
    let width = precision as usize;
    let text = match Decimal::from_f64(value) {
        Some(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                rounded = Decimal::ZERO;
            }
            format!("{rounded:.width$}")
        }
        // Beyond `Decimal`'s ~7.9e28 range; midpoint ties no longer exist there.
        None => format!("{value:.width$}"),
    };
    group_thousands(&text)
}

/// Whole-number count, e.g. visitor totals.
#[must_use]
pub fn format_count(value: f64) -> String {
    format_grouped(value, 0)
}

/// Count with an explicit sign: `+12`, `-3`, `0`.
#[must_use]
pub fn format_signed(value: f64, precision: u32) -> String {
    let text = format_grouped(value, precision);
    if text.starts_with('-') || text == "nan" || is_zero_text(&text) {
        text
    } else {
        format!("+{text}")
    }
}

/// Percent to one decimal place without the `%` sign: `-25.0`, `0.0`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0.0".to_owned();
    }
    format_grouped(value, 1)
}

/// Axis tick label; precision follows the axis step.
#[must_use]
pub fn format_axis_value(value: f64, step: f64) -> String {
    format_grouped(value, precision_from_step(step))
}

fn is_zero_text(text: &str) -> bool {
    text.chars().all(|ch| matches!(ch, '0' | '.' | ','))
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
