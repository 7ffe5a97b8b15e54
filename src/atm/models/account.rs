use super::TransactionRecord;

use crate::display::Display;
use crate::ids::AccountNumber;
use crate::UserRequest;

/// A balance with an optional password and a log of every operation performed on it.
///
/// Accounts never reject an amount: overdrafts and negative deposits are applied
/// as-is.
///
/// The number is assigned once by the owning `Bank` and cannot be changed from
/// outside the crate:
///
/// ```compile_fail
/// let mut bank = atm::Bank::new();
/// bank.add_account().set_number(atm::AccountNumber(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    balance: f64,
    password: String,
    transactions: Vec<TransactionRecord>,
}

impl Default for Account {
    fn default() -> Self {
        Self::with_balance(0.0)
    }
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(initial: f64) -> Self {
        return Self {
            number: AccountNumber(0),
            balance: initial,
            password: String::new(),
            transactions: Vec::new(),
        };
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// Only the bank assigns numbers, keeping each number equal to the account's index
    pub(crate) fn set_number(&mut self, number: AccountNumber) {
        self.number = number;
    }

    /// Empty means no password is required
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Current balance, without touching the log
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Reads the balance the way the ATM does: the read itself is logged as a
    /// `Balance` entry carrying the balance at that moment.
    pub fn query_balance(&mut self) -> f64 {
        self.record(UserRequest::Balance, self.balance);

        return self.balance;
    }

    /// Adds `amount` (which may be negative) and returns the new balance through
    /// `query_balance`, so the log gains a `Deposit` then a `Balance` entry.
    pub fn deposit(&mut self, amount: f64) -> f64 {
        self.balance += amount;
        self.record(UserRequest::Deposit, amount);

        log::debug!("Account {} deposit {amount}: balance {}", self.number, self.balance);

        return self.query_balance();
    }

    /// Subtracts `amount` and returns the new balance through `query_balance`
    pub fn debit(&mut self, amount: f64) -> f64 {
        self.balance -= amount;
        self.record(UserRequest::Withdraw, amount);

        log::debug!("Account {} debit {amount}: balance {}", self.number, self.balance);

        return self.query_balance();
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    pub fn for_each_transaction(&self, f: impl FnMut(&TransactionRecord)) {
        self.transactions.iter().for_each(f);
    }

    /// Forwards every logged entry tagged `request` to the display, returning how many
    /// were shown
    pub fn list_transactions(&self, display: &mut dyn Display, request: UserRequest) -> usize {
        let mut count = 0;

        for record in self.transactions.iter().filter(|r| r.request == request) {
            display.show_transaction(record.request, record.amount);
            count += 1;
        }

        count
    }

    fn record(&mut self, request: UserRequest, amount: f64) {
        self.transactions.push(TransactionRecord::new(request, amount));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_AMOUNT: f64 = 50.0;
    const OTHER_AMOUNT: f64 = 20.0;

    #[derive(Default)]
    struct ShownTransactions(Vec<TransactionRecord>);

    impl Display for ShownTransactions {
        fn show_info_to_user(&mut self, _message: &str) {}

        fn show_balance(&mut self, _balance: f64) {}

        fn show_transaction(&mut self, request: UserRequest, amount: f64) {
            self.0.push(TransactionRecord::new(request, amount));
        }
    }

    #[test]
    fn new_account_is_empty() {
        let account = Account::new();

        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.password(), "");
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn with_balance() {
        let mut account = Account::with_balance(SOME_AMOUNT);

        assert_eq!(account.query_balance(), SOME_AMOUNT);
    }

    #[test]
    fn query_balance_is_logged() {
        let mut account = Account::with_balance(SOME_AMOUNT);

        account.query_balance();
        account.query_balance();

        assert_eq!(
            account.transactions(),
            &[
                TransactionRecord::new(UserRequest::Balance, SOME_AMOUNT),
                TransactionRecord::new(UserRequest::Balance, SOME_AMOUNT),
            ]
        );
    }

    #[test]
    fn balance_is_not_logged() {
        let account = Account::with_balance(SOME_AMOUNT);

        assert_eq!(account.balance(), SOME_AMOUNT);
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn deposit() {
        let mut account = Account::new();

        assert_eq!(account.deposit(SOME_AMOUNT), SOME_AMOUNT);
        assert_eq!(account.deposit(-OTHER_AMOUNT), SOME_AMOUNT - OTHER_AMOUNT);

        assert_eq!(
            account.transactions(),
            &[
                TransactionRecord::new(UserRequest::Deposit, SOME_AMOUNT),
                TransactionRecord::new(UserRequest::Balance, SOME_AMOUNT),
                TransactionRecord::new(UserRequest::Deposit, -OTHER_AMOUNT),
                TransactionRecord::new(UserRequest::Balance, SOME_AMOUNT - OTHER_AMOUNT),
            ]
        );
    }

    #[test]
    fn deposits_sum() {
        let mut split = Account::new();
        split.deposit(1.25);
        split.deposit(-3.5);
        split.deposit(10.0);

        let mut whole = Account::new();
        whole.deposit(1.25 - 3.5 + 10.0);

        assert_eq!(split.balance(), whole.balance());
    }

    #[test]
    fn debit_allows_overdraft() {
        let mut account = Account::with_balance(OTHER_AMOUNT);

        assert_eq!(account.debit(SOME_AMOUNT), OTHER_AMOUNT - SOME_AMOUNT);
        assert_eq!(
            account.transactions(),
            &[
                TransactionRecord::new(UserRequest::Withdraw, SOME_AMOUNT),
                TransactionRecord::new(UserRequest::Balance, OTHER_AMOUNT - SOME_AMOUNT),
            ]
        );
    }

    #[test]
    fn for_each_transaction_in_order() {
        let mut account = Account::new();
        account.deposit(SOME_AMOUNT);
        account.debit(OTHER_AMOUNT);

        let mut seen = vec![];
        account.for_each_transaction(|record| seen.push(record.request));

        assert_eq!(
            seen,
            vec![
                UserRequest::Deposit,
                UserRequest::Balance,
                UserRequest::Withdraw,
                UserRequest::Balance,
            ]
        );
    }

    #[test]
    fn list_transactions_filters() {
        let mut account = Account::new();
        account.deposit(SOME_AMOUNT);
        account.deposit(OTHER_AMOUNT);
        account.debit(OTHER_AMOUNT);

        let mut display = ShownTransactions::default();

        assert_eq!(account.list_transactions(&mut display, UserRequest::Deposit), 2);
        assert_eq!(
            display.0,
            vec![
                TransactionRecord::new(UserRequest::Deposit, SOME_AMOUNT),
                TransactionRecord::new(UserRequest::Deposit, OTHER_AMOUNT),
            ]
        );

        assert_eq!(account.list_transactions(&mut display, UserRequest::Transactions), 0);
        assert_eq!(display.0.len(), 2);
    }

    #[test]
    fn password() {
        let mut account = Account::new();
        account.set_password("pw");

        assert_eq!(account.password(), "pw");
    }
}
