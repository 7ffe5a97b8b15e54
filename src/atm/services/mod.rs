mod atm;
mod bank;

pub use atm::{Atm, Session, CURRENT_BALANCE, INVALID_ACCOUNT, UPDATED_BALANCE};
pub use bank::{Bank, BankError};
