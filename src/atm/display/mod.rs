mod console_display;

pub use console_display::ConsoleDisplay;

use crate::UserRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
    Unknown,
    Secure,
}

/// Output sink for everything the ATM shows to its user.
///
/// Calls are synchronous and fire-and-forget: implementations may print, buffer or
/// drop what they receive, but have no way to report failure back to the ATM.
pub trait Display {
    fn show_info_to_user(&mut self, message: &str);

    fn show_balance(&mut self, balance: f64);

    fn show_transaction(&mut self, request: UserRequest, amount: f64);

    fn display_type(&self) -> DisplayType {
        DisplayType::Unknown
    }

    fn log_error(&mut self, message: &str) {
        log::error!("{message}");
    }
}
