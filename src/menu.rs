//! The text the menu front end prints and the parsing of what users type.
//!
//! Every string here is part of the program's observable transcript, which
//! is byte-compared against reference output. Treat them as a wire format.

use rust_decimal_macros::dec;

use crate::account::{Amount, FRACTIONAL_DIGITS};

/// Printed ahead of every prompt.
pub const MENU: &str = "--------------------------------\n\
    Account Management System\n\
    1. View Balance\n\
    2. Credit Account\n\
    3. Debit Account\n\
    4. Exit\n\
    --------------------------------\n";

/// Prompts and notices. The choice prompt ends with a space before its
/// newline, exactly as the reference prints it.
pub const CHOICE_PROMPT: &str = "Enter your choice (1-4): \n";
pub const CREDIT_PROMPT: &str = "Enter credit amount: \n";
pub const DEBIT_PROMPT: &str = "Enter debit amount: \n";
pub const INVALID_CHOICE: &str = "Invalid choice, please select 1-4.\n";
pub const GOODBYE: &str = "Exiting the program. Goodbye!\n";

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    ViewBalance,
    Credit,
    Debit,
    Exit,
}

/// Parse a selection line: trimmed, digits only, mapping to 1-4.
///
/// `None` covers both non-numeric input and out-of-range selections; the
/// loop prints the same invalid-choice notice for either.
pub fn parse_choice(line: &str) -> Option<Choice> {
    let line = line.trim();
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        // A sign prefix would get through a bare parse(), so digits are
        // checked up front.
        return None;
    }

    match line.parse::<u32>().ok()? {
        1 => Some(Choice::ViewBalance),
        2 => Some(Choice::Credit),
        3 => Some(Choice::Debit),
        4 => Some(Choice::Exit),
        _ => None,
    }
}

/// Parse an amount line the way the reference does: trim it, read a decimal,
/// and fall back to zero when the line is missing or unparsable.
///
/// Amounts are normalised to two fractional digits here, at the boundary,
/// so operations never see more precision than the display format carries.
pub fn parse_amount(line: &str) -> Amount {
    line.trim()
        .parse::<Amount>()
        .map(|amount| amount.round_dp(FRACTIONAL_DIGITS))
        .unwrap_or_else(|_| dec!(0.00))
}

#[cfg(test)]
mod tests {
    use super::{parse_amount, parse_choice, Choice};
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_choice() {
        for (line, want) in vec![
            ("1", Some(Choice::ViewBalance)),
            ("2", Some(Choice::Credit)),
            ("3", Some(Choice::Debit)),
            ("4", Some(Choice::Exit)),
            ("  2  ", Some(Choice::Credit)),
            ("01", Some(Choice::ViewBalance)),
            ("0", None),
            ("5", None),
            ("+1", None),
            ("-1", None),
            ("abc", None),
            ("1.0", None),
            ("", None),
            ("   ", None),
            ("99999999999999999999", None),
        ] {
            assert_eq!(want, parse_choice(line), "line: {line:?}");
        }
    }

    #[test]
    fn test_parse_amount() {
        for (line, want) in vec![
            ("250.00", dec!(250.00)),
            ("250", dec!(250)),
            ("  10.5  ", dec!(10.5)),
            ("-25.00", dec!(-25.00)),
            ("0", dec!(0)),
        ] {
            assert_eq!(want, parse_amount(line), "line: {line:?}");
        }
    }

    #[test]
    // Unparsable or missing input falls back to zero, like the reference.
    fn test_parse_amount_fallback() {
        for line in vec!["", "   ", "abc", "12abc", "1.2.3"] {
            assert_eq!(dec!(0.00), parse_amount(line), "line: {line:?}");
        }
    }

    #[test]
    // Excess precision is rounded off at the boundary, half to even.
    fn test_parse_amount_normalises_precision() {
        for (line, want) in vec![
            ("10.005", dec!(10.00)),
            ("10.015", dec!(10.02)),
            ("10.0199", dec!(10.02)),
        ] {
            assert_eq!(want, parse_amount(line), "line: {line:?}");
        }
    }
}
