use super::{Display, DisplayType};

use crate::UserRequest;

use std::io::{self, Stdout, Write};

/// Writes to a line-oriented text stream.
///
/// An info message is left open so a following balance lands on the same line
/// (`Current Balance : 50`). Any other output closes it first.
pub struct ConsoleDisplay<W: Write = Stdout> {
    writer: W,
    open_line: bool,
}

impl ConsoleDisplay<Stdout> {
    pub fn new() -> Self {
        return Self::with_writer(io::stdout());
    }
}

impl Default for ConsoleDisplay<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn with_writer(writer: W) -> Self {
        return Self {
            writer,
            open_line: false,
        };
    }

    /// Terminates a dangling info message and flushes the underlying writer
    pub fn finish(&mut self) {
        self.close_line();

        if let Err(e) = self.writer.flush() {
            log::warn!("Failed to flush display: {e}");
        }
    }

    pub fn into_inner(mut self) -> W {
        self.finish();
        return self.writer;
    }

    fn close_line(&mut self) {
        if self.open_line {
            self.open_line = false;
            self.write(format_args!("\n"));
        }
    }

    fn write(&mut self, args: std::fmt::Arguments) {
        if let Err(e) = self.writer.write_fmt(args) {
            log::warn!("Failed to write to display: {e}");
        }
    }
}

impl<W: Write> Display for ConsoleDisplay<W> {
    fn show_info_to_user(&mut self, message: &str) {
        self.close_line();
        self.write(format_args!("{message}"));
        self.open_line = true;
    }

    fn show_balance(&mut self, balance: f64) {
        self.open_line = false;
        self.write(format_args!(" : {}\n", format_amount(balance)));
    }

    fn show_transaction(&mut self, request: UserRequest, amount: f64) {
        self.close_line();
        self.write(format_args!("{request} : {}\n", format_amount(amount)));
    }

    fn display_type(&self) -> DisplayType {
        DisplayType::Secure
    }
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// Renders an amount with six significant digits, switching to scientific notation
/// for exponents below -4 or from 6 up (`0.3`, `-12.5`, `1.23457e+06`)
fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value == 0.0 {
        let zero = if value.is_sign_negative() { "-0" } else { "0" };
        return zero.to_string();
    }

    // rounding to the significant digits first can carry into the next exponent
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return scientific,
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.abs()
        );
    }

    let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
    return trim_fraction(&format!("{value:.decimals$}")).to_string();
}

fn trim_fraction(number: &str) -> &str {
    if !number.contains('.') {
        return number;
    }

    number.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(display: ConsoleDisplay<Vec<u8>>) -> String {
        return String::from_utf8(display.into_inner()).unwrap();
    }

    #[test]
    fn info_and_balance_share_a_line() {
        let mut display = ConsoleDisplay::with_writer(Vec::<u8>::new());

        display.show_info_to_user("Current Balance");
        display.show_balance(50.0);

        assert_eq!(output(display), "Current Balance : 50\n");
    }

    #[test]
    fn fractional_and_negative_amounts() {
        let mut display = ConsoleDisplay::with_writer(Vec::<u8>::new());

        display.show_transaction(UserRequest::Deposit, 12.5);
        display.show_transaction(UserRequest::Deposit, -20.0);

        assert_eq!(
            output(display),
            "REQUEST_DEPOSIT : 12.5\nREQUEST_DEPOSIT : -20\n"
        );
    }

    #[test]
    fn lone_info_is_terminated() {
        let mut display = ConsoleDisplay::with_writer(Vec::<u8>::new());

        display.show_info_to_user("Invalid account");
        display.show_info_to_user("Invalid account");
        display.show_transaction(UserRequest::Balance, 0.0);
        display.show_info_to_user("Invalid account");

        assert_eq!(
            output(display),
            "Invalid account\nInvalid account\nREQUEST_BALANCE : 0\nInvalid account\n"
        );
    }

    #[test]
    fn accumulated_rounding_is_hidden() {
        let mut display = ConsoleDisplay::with_writer(Vec::<u8>::new());

        display.show_info_to_user("Updated Balance");
        display.show_balance(0.1 + 0.2);
        display.show_info_to_user("Updated Balance");
        display.show_balance(1234567.0);

        assert_eq!(
            output(display),
            "Updated Balance : 0.3\nUpdated Balance : 1.23457e+06\n"
        );
    }

    #[test]
    fn format_amount_significant_digits() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(-12.5), "-12.5");
        assert_eq!(format_amount(3.75), "3.75");
        assert_eq!(format_amount(123456.0), "123456");
        assert_eq!(format_amount(999999.7), "1e+06");
        assert_eq!(format_amount(-1234567.0), "-1.23457e+06");
        assert_eq!(format_amount(0.0001), "0.0001");
        assert_eq!(format_amount(0.00001234), "1.234e-05");
        assert_eq!(format_amount(2.0 / 3.0), "0.666667");
    }

    #[test]
    fn display_type() {
        let display = ConsoleDisplay::with_writer(Vec::<u8>::new());
        assert_eq!(display.display_type(), DisplayType::Secure);
    }
}
