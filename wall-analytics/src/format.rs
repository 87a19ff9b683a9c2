//! Display formatting with magnitude-adaptive precision.
//!
//! Invoked on demand by the rendering collaborator; the pipeline never
//! pre-formats fields.

/// Decimal places applied by [`format_quantity`] when the caller has no
/// preference.
pub const DEFAULT_QUANTITY_DECIMALS: usize = 2;

/// Precision cap for very small prices.
const MAX_PRICE_DECIMALS: usize = 12;

/// Format a non-negative price with a token suffix, e.g. `"1625.7500 USDC"`.
///
/// Precision adapts to magnitude:
/// - `>= 1000`: 2 decimals
/// - `[1, 1000)`: 4 decimals
/// - `(0, 1)`: 6 decimals, or `leading_zeros + 4` (capped at 12) once the
///   fraction starts with 3 or more zeros, so at least 4 significant digits
///   stay visible for very small prices
/// - `0`: rendered as `"0"` with no decimal expansion
///
/// `currency` prepends its symbol when set.
pub fn format_price(price: f64, suffix: &str, currency: Option<&str>) -> String {
    let prefix = currency.unwrap_or("");
    let suffix = if suffix.is_empty() {
        String::new()
    } else {
        format!(" {suffix}")
    };

    if price == 0.0 {
        return format!("{prefix}0{suffix}");
    }

    let decimals = price_decimals(price);
    format!("{prefix}{price:.decimals$}{suffix}")
}

/// Compact magnitude formatting for large quantities: `>= 1e9` → `B`,
/// `>= 1e6` → `M`, `>= 1e3` → `K`, dividing the value before applying
/// `decimals`. Below one thousand the value falls back to thousands-grouped
/// fixed-decimal formatting. `currency` prepends its symbol in both modes.
pub fn format_quantity(value: f64, decimals: usize, currency: Option<&str>) -> String {
    let prefix = currency.unwrap_or("");

    if value >= 1e9 {
        format!("{prefix}{:.decimals$}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{prefix}{:.decimals$}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{prefix}{:.decimals$}K", value / 1e3)
    } else {
        format!("{prefix}{}", group_thousands(&format!("{value:.decimals$}")))
    }
}

fn price_decimals(price: f64) -> usize {
    if price >= 1000.0 {
        2
    } else if price >= 1.0 {
        4
    } else {
        let zeros = leading_fraction_zeros(price);
        if zeros < 3 {
            6
        } else {
            (zeros + 4).min(MAX_PRICE_DECIMALS)
        }
    }
}

/// Count zero digits immediately after the decimal point of a price in
/// `(0, 1)`.
fn leading_fraction_zeros(price: f64) -> usize {
    let mut scaled = price;
    let mut zeros = 0;

    while scaled < 0.1 && zeros < MAX_PRICE_DECIMALS {
        scaled *= 10.0;
        zeros += 1;
    }

    zeros
}

/// Insert `,` separators into the integer part of a fixed-decimal string.
fn group_thousands(formatted: &str) -> String {
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted, None),
    };
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part), |rest| ("-", rest));

    let mut grouped = String::with_capacity(formatted.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
