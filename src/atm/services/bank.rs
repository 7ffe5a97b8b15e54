use crate::ids::AccountNumber;
use crate::models::Account;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    /// Covers unknown numbers and wrong passwords alike, so a failed lookup never
    /// reveals whether the account exists
    #[error("Account not found: {0}")]
    AccountNotFound(i32),
}

/// Owns every account for its whole lifetime. Accounts are stored so that an
/// account's number is its index, and are never removed.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
    next_account_number: i32,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new account under the next sequential number
    pub fn add_account(&mut self) -> &mut Account {
        let number = AccountNumber(self.next_account_number);
        self.next_account_number += 1;

        let mut account = Account::new();
        account.set_number(number);

        log::debug!("Opened account {number}");

        let index = self.accounts.len();
        self.accounts.push(account);

        return &mut self.accounts[index];
    }

    /// Resolves an account number and password into a handle.
    ///
    /// An account with an empty password accepts any password, otherwise the
    /// password must match exactly.
    pub fn lookup(&self, number: i32, password: &str) -> Result<AccountNumber> {
        let handle = AccountNumber(number);

        let account = self
            .account(handle)
            .ok_or(BankError::AccountNotFound(number))?;

        let stored = account.password();
        if !stored.is_empty() && stored != password {
            log::debug!("Password mismatch for account {handle}");
            Err(BankError::AccountNotFound(number))?
        }

        return Ok(handle);
    }

    /// Password-gated access to an account; None when `lookup` would fail
    pub fn get_account(&mut self, number: i32, password: &str) -> Option<&mut Account> {
        let handle = self.lookup(number, password).ok()?;

        return self.account_mut(handle);
    }

    pub fn account(&self, handle: AccountNumber) -> Option<&Account> {
        return self.accounts.get(handle.index()?);
    }

    pub fn account_mut(&mut self, handle: AccountNumber) -> Option<&mut Account> {
        return self.accounts.get_mut(handle.index()?);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
