use super::{Amount, FRACTIONAL_DIGITS};

/// Render an amount in the fixed-width legacy display format: integer part
/// zero-padded to at least 6 digits, exactly 2 fractional digits.
///
/// `1100` becomes `001100.00`. The format reproduces the reference
/// program's numeric display byte for byte, so it applies to every amount
/// the program ever prints.
///
/// Half-way fractions round to the nearest even cent (`0.005` -> `.00`,
/// `0.015` -> `.02`). Integer parts wider than 6 digits widen the field;
/// they are never truncated.
pub fn format_amount(value: Amount) -> String {
    let mut rounded = value.round_dp(FRACTIONAL_DIGITS);
    if rounded.is_zero() {
        // Strip the sign off negative zero so it renders as plain zero.
        rounded.set_sign_positive(true);
    }
    rounded.rescale(FRACTIONAL_DIGITS);

    let text = rounded.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text.as_str()),
    };

    // rescale pins the scale to 2, so a fractional part is always present.
    let (units, cents) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("{sign}{units:0>6}.{cents}")
}
