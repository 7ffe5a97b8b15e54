use super::Bank;

use crate::display::Display;
use crate::ids::AccountNumber;
use crate::models::Account;
use crate::UserRequest;

pub const INVALID_ACCOUNT: &str = "Invalid account";
pub const CURRENT_BALANCE: &str = "Current Balance";
pub const UPDATED_BALANCE: &str = "Updated Balance";

/// ATM session state.
///
/// NoActiveAccount
/// -> view_account (ok): AccountActive
/// -> view_account (err): NoActiveAccount
///
/// AccountActive
/// -> view_account (ok): AccountActive (possibly another account)
/// -> view_account (err): NoActiveAccount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    NoActiveAccount,
    AccountActive(AccountNumber),
}

/// Front-end controller binding one bank and one display
pub struct Atm<'a> {
    session: Session,
    bank: &'a mut Bank,
    display: &'a mut dyn Display,
}

impl<'a> Atm<'a> {
    pub fn new(bank: &'a mut Bank, display: &'a mut dyn Display) -> Self {
        return Self {
            session: Session::NoActiveAccount,
            bank,
            display,
        };
    }

    /// Authenticates against the bank and makes the account active. On failure the
    /// session is cleared and the user is told the account is invalid.
    pub fn view_account(&mut self, account_number: i32, password: &str) {
        match self.bank.lookup(account_number, password) {
            Ok(handle) => {
                log::debug!("Viewing account {handle}");
                self.session = Session::AccountActive(handle);
            }
            Err(e) => {
                log::warn!("{e}");
                self.session = Session::NoActiveAccount;
                self.display.show_info_to_user(INVALID_ACCOUNT);
            }
        }
    }

    /// Runs a request against the active account. Requests without an active
    /// account, and `Invalid` requests, are dropped.
    pub fn fill_user_request(&mut self, request: UserRequest, amount: f64) {
        let handle = match self.session {
            Session::AccountActive(handle) => handle,
            Session::NoActiveAccount => {
                log::debug!("Ignoring {request}: no active account");
                return;
            }
        };

        let display = &mut *self.display;

        let account = match self.bank.account_mut(handle) {
            Some(account) => account,
            None => {
                let msg = format!("Impossible state encountered: active account {handle} is not in the bank");
                log::error!("{msg}");
                display.log_error(&msg);
                return;
            }
        };

        log::debug!("Filling {request} ({amount}) for account {handle}");

        match request {
            UserRequest::Balance => Self::show_balance(account, display),
            UserRequest::Deposit => Self::make_deposit(account, display, amount),
            UserRequest::Withdraw => Self::withdraw(account, display, amount),
            UserRequest::Transactions => Self::show_transactions(account, display),
            UserRequest::Invalid => {}
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn active_account(&self) -> Option<AccountNumber> {
        return match self.session {
            Session::AccountActive(handle) => Some(handle),
            Session::NoActiveAccount => None,
        };
    }

    pub fn bank(&self) -> &Bank {
        &*self.bank
    }

    pub fn bank_mut(&mut self) -> &mut Bank {
        &mut *self.bank
    }

    fn show_balance(account: &mut Account, display: &mut dyn Display) {
        let balance = account.query_balance();
        display.show_info_to_user(CURRENT_BALANCE);
        display.show_balance(balance);
    }

    fn show_transactions(account: &Account, display: &mut dyn Display) {
        account.for_each_transaction(|record| display.show_transaction(record.request, record.amount));
    }

    fn make_deposit(account: &mut Account, display: &mut dyn Display, amount: f64) {
        let balance = account.deposit(amount);
        display.show_info_to_user(UPDATED_BALANCE);
        display.show_balance(balance);
    }

    // No sufficiency check: a withdrawal is a deposit of the negated amount
    fn withdraw(account: &mut Account, display: &mut dyn Display, amount: f64) {
        let balance = account.deposit(-amount);
        display.show_info_to_user(UPDATED_BALANCE);
        display.show_balance(balance);
    }
}
